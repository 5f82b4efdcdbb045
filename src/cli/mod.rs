//! CLI module for roadmapr - command-line interface and subcommands.

pub mod commands;

pub use commands::Cli;

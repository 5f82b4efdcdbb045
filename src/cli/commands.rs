//! CLI command definitions using clap.
//!
//! Subcommands:
//! - generate: build a full roadmap for a target domain
//! - revise: rework an existing roadmap from feedback
//! - validate: run a check-list preset against a file
//! - roles: list the generation roles

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// roadmapr - career-prep roadmap generator with validated planning loops
#[derive(Parser, Debug)]
#[command(name = "roadmapr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a study roadmap for a target job domain
    Generate {
        /// Target job domain, e.g. "Frontend Developer"
        domain: String,

        /// Experience level (beginner, some-basics, intermediate)
        #[arg(short, long, default_value = "beginner")]
        level: String,

        /// Learning style (video, reading, hands-on, mixed)
        #[arg(short, long, default_value = "mixed")]
        style: String,

        /// Daily time commitment in hours
        #[arg(long, default_value_t = 2)]
        hours: u32,

        /// Roadmap length in weeks (defaults from config)
        #[arg(short, long)]
        weeks: Option<u32>,

        /// Write the final roadmap to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Revise an existing roadmap file based on feedback
    Revise {
        /// Path to the roadmap markdown file
        file: PathBuf,

        /// What to change
        feedback: String,

        /// Write the revised roadmap to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a document against a check-list preset
    Validate {
        /// Path to the document
        file: PathBuf,

        /// Check-list preset (roadmap, resources, analysis)
        #[arg(short, long, default_value = "roadmap")]
        kind: String,
    },

    /// List the generation roles and their validation settings
    Roles,
}

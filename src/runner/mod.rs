//! The bounded retry loop: generation capability, policy, and controller.

pub mod controller;
pub mod generator;

pub use controller::{DiagnosticsSink, LogSink, LoopOutcome, NoOpSink, RetryController, RetryPolicy, RoundRecord};
pub use generator::{GenerationRequest, Generator, LlmGenerator};

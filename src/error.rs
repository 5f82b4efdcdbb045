//! Error types for roadmapr
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in roadmapr
#[derive(Debug, Error)]
pub enum RoadmaprError {
    /// Invalid retry policy or check list
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The generation capability itself failed (distinct from a failed round)
    #[error("Generation failed: {0}")]
    Generation(String),

    /// LLM API error
    #[error("LLM error: {0}")]
    Llm(#[from] crate::llm::LlmError),

    /// Prompt template rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for roadmapr operations
pub type Result<T> = std::result::Result<T, RoadmaprError>;

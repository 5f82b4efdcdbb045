//! Generation capability trait and request type.
//!
//! The retry controller does not care how text gets produced; it only sees
//! the `Generator` trait. The production implementation calls an LLM through
//! `TextClient`; tests use scripted generators.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::llm::{CompletionRequest, TextClient};

/// Produces one candidate artifact from the current request state
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a candidate document. An Err here means the capability
    /// itself is broken, not that the output is low quality.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// Everything a generation round needs, carried between retries
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Role instruction, used as the system prompt
    pub instruction: String,

    /// The task for this stage, used as the user message core
    pub task: String,

    /// Model override for this stage (role tier)
    pub model: Option<String>,

    /// Accumulated feedback from failed rounds, markdown formatted
    pub feedback: String,

    /// Current round number, 1-indexed
    pub round: u32,
}

impl GenerationRequest {
    /// Create a fresh request with no feedback
    pub fn new(instruction: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            task: task.into(),
            model: None,
            feedback: String::new(),
            round: 1,
        }
    }

    /// Set the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Fold a failed round's issues into the feedback section
    pub fn add_feedback(&mut self, round: u32, issues: &[String]) {
        self.feedback.push_str(&format!("\n---\n## Attempt {} Issues\n", round));
        for issue in issues {
            self.feedback.push_str(&format!("- {}\n", issue));
        }
    }

    /// Build the user message: the task plus any accumulated feedback
    pub fn user_message(&self) -> String {
        if self.feedback.is_empty() {
            self.task.clone()
        } else {
            format!("{}\n\n## Previous Attempt Feedback\n{}", self.task, self.feedback)
        }
    }
}

/// Generator backed by a TextClient
pub struct LlmGenerator<C: TextClient> {
    client: Arc<C>,
}

impl<C: TextClient> LlmGenerator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: TextClient> Generator for LlmGenerator<C> {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let mut completion = CompletionRequest::new(request.instruction.clone(), request.user_message());
        completion.model = request.model.clone();

        let response = self.client.complete(completion).await?;
        Ok(response.text)
    }
}

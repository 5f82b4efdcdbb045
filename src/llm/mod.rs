//! LLM client abstraction and the Gemini backend.

pub mod client;
pub mod gemini;

pub use client::{CompletionRequest, CompletionResponse, LlmError, TextClient, TokenUsage};
pub use gemini::{GeminiClient, GeminiConfig};

//! Gemini API client implementation
//!
//! This module implements the TextClient trait for the Google Gemini
//! generateContent REST API.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::llm::client::{CompletionRequest, CompletionResponse, LlmError, TextClient, TokenUsage};

/// Gemini API base URL
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default model to use
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default max output tokens
const DEFAULT_MAX_TOKENS: u32 = 8192;

/// Configuration for the Gemini client
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(300),
        }
    }
}

impl GeminiConfig {
    /// Create a new config with a specific model
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

/// Gemini API client
pub struct GeminiClient {
    client: Client,
    api_key: String,
    config: GeminiConfig,
    usage: Arc<Mutex<TokenUsage>>,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// Reads GOOGLE_API_KEY from the environment
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| LlmError::MissingApiKey {
            env_var: "GOOGLE_API_KEY".to_string(),
        })?;

        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key
    pub fn with_api_key(api_key: String, config: GeminiConfig) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            api_key,
            config,
            usage: Arc::new(Mutex::new(TokenUsage::default())),
        })
    }

    /// Cumulative token usage across all calls on this client
    pub fn total_usage(&self) -> TokenUsage {
        *self.usage.lock().unwrap()
    }

    /// Endpoint URL for the model a request resolves to
    fn endpoint(&self, request: &CompletionRequest) -> String {
        let model = request.model.as_deref().unwrap_or(&self.config.model);
        format!("{}/{}:generateContent", GEMINI_API_URL, model)
    }

    /// Build the request body for the generateContent API
    fn build_request(&self, request: &CompletionRequest) -> Value {
        let max_tokens = request.max_tokens.unwrap_or(self.config.max_tokens);

        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.user }]
            }],
            "generationConfig": {
                "maxOutputTokens": max_tokens
            }
        });

        if !request.system.is_empty() {
            body["systemInstruction"] = json!({
                "parts": [{ "text": request.system }]
            });
        }

        body
    }

    /// Parse the API response into a CompletionResponse
    fn parse_response(&self, body: Value) -> Result<CompletionResponse, LlmError> {
        let usage = if let Some(meta) = body.get("usageMetadata") {
            TokenUsage::new(
                meta["promptTokenCount"].as_u64().unwrap_or(0),
                meta["candidatesTokenCount"].as_u64().unwrap_or(0),
            )
        } else {
            TokenUsage::default()
        };

        // Track cumulative usage
        {
            let mut total = self.usage.lock().unwrap();
            total.add(&usage);
        }

        let parts = body["candidates"][0]["content"]["parts"]
            .as_array()
            .ok_or_else(|| LlmError::InvalidResponse("no candidates in response".to_string()))?;

        let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();

        if text.is_empty() {
            return Err(LlmError::InvalidResponse("empty candidate text".to_string()));
        }

        Ok(CompletionResponse { text, usage })
    }
}

#[async_trait]
impl TextClient for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let url = self.endpoint(&request);
        let body = self.build_request(&request);

        log::debug!("Gemini request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        self.parse_response(body)
    }
}

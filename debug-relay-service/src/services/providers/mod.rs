//! Chat completion provider abstraction.
//!
//! The relay talks to exactly one backend at a time; the trait exists so the
//! HTTP layer can be exercised against a mock.

pub mod mock;
pub mod openrouter;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Failed to parse response: {0}")]
    DecodeError(String),
}

impl ProviderError {
    /// Short label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::NetworkError(_) => "network",
            ProviderError::RateLimited(_) => "rate_limited",
            ProviderError::ApiError(_) => "api",
            ProviderError::DecodeError(_) => "decode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// An OpenAI-style chat completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// What came back from the provider, already reduced to the first choice.
#[derive(Debug, Clone, Default)]
pub struct CompletionResponse {
    /// Content of the first choice, if there was one.
    pub text: Option<String>,
    pub finish_reason: Option<String>,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl CompletionResponse {
    /// Non-empty text of the first choice.
    pub fn into_text(self) -> Option<String> {
        self.text.filter(|t| !t.is_empty())
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run a single, non-streaming chat completion.
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError>;

    /// Cheap check that the provider can accept requests.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

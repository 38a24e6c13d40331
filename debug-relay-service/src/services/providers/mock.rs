//! Mock provider for testing.

use super::{CompletionProvider, CompletionRequest, CompletionResponse, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// A single choice with this content.
    Reply(String),
    /// A successful call with no choices at all.
    NoChoices,
    /// A choice whose content is empty.
    EmptyContent,
    /// A transport-level failure carrying this message.
    Fail(String),
}

/// Mock completion provider that records every request it receives.
pub struct MockCompletionProvider {
    behavior: MockBehavior,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reply(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fail(message.into()))
    }

    /// Requests seen so far, in arrival order.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }

        match &self.behavior {
            MockBehavior::Reply(text) => Ok(CompletionResponse {
                text: Some(text.clone()),
                finish_reason: Some("stop".to_string()),
                input_tokens: request.messages.iter().map(|m| m.content.len() as u32 / 4).sum(),
                output_tokens: text.len() as u32 / 4,
            }),
            MockBehavior::NoChoices => Ok(CompletionResponse::default()),
            MockBehavior::EmptyContent => Ok(CompletionResponse {
                text: Some(String::new()),
                finish_reason: Some("stop".to_string()),
                ..Default::default()
            }),
            MockBehavior::Fail(message) => Err(ProviderError::NetworkError(message.clone())),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /chat`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,
    /// Provider model identifier; the configured default applies when absent.
    #[serde(default)]
    pub model: Option<String>,
}

impl ChatRequest {
    pub fn model_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.model.as_deref().unwrap_or(default)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_is_optional() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"message": "TypeError: x is undefined"}"#).unwrap();

        assert!(request.model.is_none());
        assert_eq!(request.model_or("google/gemini-2.5-pro"), "google/gemini-2.5-pro");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn explicit_model_wins() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"message": "boom", "model": "anthropic/claude-3.5-sonnet"}"#)
                .unwrap();

        assert_eq!(request.model_or("google/gemini-2.5-pro"), "anthropic/claude-3.5-sonnet");
    }

    #[test]
    fn empty_message_fails_validation() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": ""}"#).unwrap();
        let errors = request.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("message"));
    }
}

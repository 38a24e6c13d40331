use axum::{extract::State, Json};

use crate::dtos::{ChatRequest, ChatResponse};
use crate::services::{debugging_request, record_provider_call};
use crate::startup::AppState;
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

/// Relay an error log to the model and return its explanation.
#[tracing::instrument(skip(state, request), fields(model))]
pub async fn create_chat_completion(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let default_model = state.config.default_model.as_str();
    let model = request.model_or(default_model);
    tracing::Span::current().record("model", model);

    let completion = debugging_request(model, &request.message);

    match state.provider.complete(&completion).await {
        Ok(response) => {
            tracing::debug!(
                input_tokens = response.input_tokens,
                output_tokens = response.output_tokens,
                finish_reason = response.finish_reason.as_deref().unwrap_or("-"),
                "Provider call completed"
            );

            match response.into_text() {
                Some(text) => {
                    record_provider_call(model, default_model, "ok");
                    Ok(Json(ChatResponse { response: text }))
                }
                None => {
                    record_provider_call(model, default_model, "empty");
                    Err(AppError::Upstream("No response from model".to_string()))
                }
            }
        }
        Err(e) => {
            record_provider_call(model, default_model, e.kind());
            tracing::error!(error = %e, kind = e.kind(), "An error occurred: {}", e);
            Err(AppError::Upstream(format!(
                "An error occurred with the model provider: {}",
                e
            )))
        }
    }
}

pub mod metrics;
pub mod prompt;
pub mod providers;

pub use metrics::{get_metrics, init_metrics, model_class, record_provider_call};
pub use prompt::{debugging_request, SYSTEM_PROMPT};
pub use providers::{CompletionProvider, ProviderError};

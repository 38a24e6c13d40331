//! HTTP handlers for the debug relay.

pub mod chat;
pub mod health;

pub use chat::create_chat_completion;
pub use health::{health_check, metrics_endpoint, readiness_check};

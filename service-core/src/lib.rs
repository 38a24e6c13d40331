//! service-core: HTTP plumbing shared by the relay binaries: configuration,
//! the JSON error envelope, validated extractors, logging and middleware.
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod observability;

pub use axum;
pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;

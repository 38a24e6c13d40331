//! Debug relay: forwards error logs to an LLM behind a fixed
//! debugging-partner prompt and returns its explanation.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};

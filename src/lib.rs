//! Send a single chat-completion request to an API-key protected endpoint.
//!
//! The endpoint and key are read from `API_ENDPOINT` and `API_KEY` on every
//! call. The request carries one user message with fixed generation
//! parameters, and the JSON response is returned as-is.

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod types;

// Re-export core types for easy usage
pub use config::{DispatcherConfig, API_KEY_VAR, ENDPOINT_VAR};
pub use dispatcher::{Dispatcher, API_KEY_HEADER};
pub use error::{Error, RequestError};
pub use types::*;

/// Send `user_message` with a fresh [`Dispatcher`] and environment configuration.
pub async fn send_message(user_message: &str) -> Result<serde_json::Value, Error> {
    Dispatcher::new()?.send_message(user_message).await
}

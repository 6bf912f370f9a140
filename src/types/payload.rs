use super::message::Message;
use serde::Serialize;

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.7;

/// Nucleus-sampling threshold sent with every request.
pub const TOP_P: f64 = 0.95;

/// Upper bound on generated tokens sent with every request.
pub const MAX_TOKENS: u32 = 800;

/// Request body posted to the chat-completion endpoint.
///
/// Always carries exactly one user message; the generation parameters are
/// fixed to [`TEMPERATURE`], [`TOP_P`] and [`MAX_TOKENS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatPayload {
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}

impl ChatPayload {
    /// Build the payload for a single user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(content)],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
        }
    }
}

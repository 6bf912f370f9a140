//! Wire types for the chat-completion request.

pub mod message;
pub mod payload;

pub use message::*;
pub use payload::*;

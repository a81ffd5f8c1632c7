// Completion gateway module
// Public interface for the remote chat-completion boundary

mod client;
mod types;

pub use client::GptClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse};

/// Fixed system instruction sent with every completion.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

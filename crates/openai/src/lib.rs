//! Minimal OpenAI API client: chat completions and image generation.
//!
//! Transport only — no domain knowledge. Callers own prompts, parsing,
//! and fallback policy. Each call is a single attempt; there is no retry
//! loop here by design.

mod client;
mod error;
mod json;

pub use client::{ChatClient, ChatMessage};
pub use error::OpenAiError;
pub use json::extract_json;

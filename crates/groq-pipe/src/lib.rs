//! Groq pipe adapter for groq-rs
//!
//! This crate adapts Groq's OpenAI-compatible `/chat/completions` endpoint to
//! a host plugin framework's chat-completion call. It includes:
//!
//! - Request body validation and model-id normalization
//! - A memoized model allow-list (fetched once, with a hard-coded fallback)
//! - Non-streaming and streaming request dispatch
//! - An error taxonomy whose display strings are host-presentable as-is

pub mod config;
pub mod error;
pub mod models;
pub mod pipe;
pub mod request;
pub mod stream;

// Re-export main types
pub use config::GroqConfig;
pub use error::{PipeError, Result};
pub use models::ModelEntry;
pub use pipe::{GroqPipe, PipeResponse};
pub use stream::ResponseLines;

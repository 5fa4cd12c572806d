//! Shared utilities for groq-rs
//!
//! Common functionality used across the groq-rs workspace: logging setup
//! and environment variable helpers.

pub mod env;
pub mod logging;

pub use env::env_string;
pub use logging::init_tracing;

//! Configuration for the Groq pipe

use groq_utils::env_string;

/// Default base URL for Groq's OpenAI-compatible API
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Request timeout applied to every outbound call, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for a [`GroqPipe`](crate::GroqPipe)
///
/// The API key is the only externally sourced value; an empty key is not a
/// construction error and only fails when a request is actually executed.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key for bearer authentication
    pub api_key: String,

    /// Base URL of the API. Fixed to [`DEFAULT_API_BASE`] in production;
    /// overridable for tests and self-hosted OpenAI-compatible endpoints.
    pub api_base: String,

    /// Request timeout in seconds (default: 60)
    pub timeout_secs: u64,
}

impl GroqConfig {
    /// Create a new config with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create config from the `GROQ_API_KEY` environment variable.
    ///
    /// An unset variable yields an empty key rather than an error, matching
    /// the pipe's contract of failing per-request instead of at startup.
    pub fn from_env() -> Self {
        Self::new(env_string("GROQ_API_KEY"))
    }

    /// Set a custom API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

//! Error types for the Groq pipe

use thiserror::Error;

/// Result type for pipe operations
pub type Result<T> = std::result::Result<T, PipeError>;

/// Errors that can occur while handling a pipe request
///
/// Every variant is terminal for the call it came from; nothing is retried.
/// The `Display` output of each variant is the exact text a host framework
/// is expected to show the user, so callers that can only display strings
/// lose nothing by formatting the error.
#[derive(Error, Debug)]
pub enum PipeError {
    /// Request body is missing a required key
    #[error("Error: request body must contain 'model' and 'stream'.")]
    Validation,

    /// API key is empty or unset
    #[error("Error: GROQ_API_KEY environment variable not set.")]
    Configuration,

    /// Requested model is not in the resolved allow-list
    #[error("Error: model '{model}' is not supported.\nValid models: {valid_models}")]
    UnsupportedModel {
        /// The (already normalized) model id that was rejected
        model: String,
        /// Comma-joined allow-list, in list order
        valid_models: String,
    },

    /// Provider answered with a non-2xx status
    #[error("{message}")]
    UpstreamHttp {
        /// HTTP status code from the provider
        status: u16,
        /// Pre-rendered message including status, URL, description and body
        message: String,
    },

    /// Anything else: connect/timeout/DNS failures, decode errors, ...
    #[error("Unhandled error: {0}")]
    Unhandled(String),
}

impl PipeError {
    /// Build an `UpstreamHttp` error from a failed provider response.
    ///
    /// `detail` is the HTTP client's own description of the status failure,
    /// `body` the raw response text. A 404 gets an extra hint because with
    /// this API it almost always means the model id was not recognized.
    pub(crate) fn upstream(status: u16, url: &str, detail: &str, body: &str) -> Self {
        let mut message = format!("HTTP {status} calling {url}: {detail}\n{body}");
        if status == 404 {
            message.push_str("\n(404 usually means an unknown model id.)");
        }
        Self::UpstreamHttp { status, message }
    }

    /// Wrap any transport-level failure.
    pub(crate) fn unhandled(err: impl std::fmt::Display) -> Self {
        Self::Unhandled(err.to_string())
    }
}

//! The pipe itself: model-list resolution and request dispatch
//!
//! `GroqPipe` is instantiated once by the host and reused for every call, so
//! it keeps a single `reqwest::Client` for TCP connection reuse and a
//! once-populated model allow-list. The request path is a linear pipeline:
//! validate, normalize, check the allow-list, call, map the result.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Map, Value};
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

use crate::config::GroqConfig;
use crate::error::{PipeError, Result};
use crate::models::{ModelEntry, ModelsResponse, fallback_models, filter_excluded};
use crate::request::{is_truthy, strip_route_prefix, validate_body};
use crate::stream::ResponseLines;

/// Outcome of a successful [`GroqPipe::execute`] call
#[derive(Debug)]
pub enum PipeResponse {
    /// Fully parsed body of a non-streaming completion
    Completion(Value),

    /// Lazy line stream of a streaming completion.
    /// Whoever holds this owns the connection; dropping it closes it.
    Stream(ResponseLines),
}

/// Adapter between a host chat-completion call and Groq's
/// OpenAI-compatible `/chat/completions` endpoint
pub struct GroqPipe {
    config: GroqConfig,
    client: Client,
    /// Populated at most once per pipe lifetime, never refreshed.
    /// `OnceCell` collapses a concurrent first population into one fetch.
    model_cache: OnceCell<Vec<String>>,
}

impl GroqPipe {
    /// Create a pipe with custom configuration
    pub fn with_config(config: GroqConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(PipeError::unhandled)?;

        Ok(Self {
            config,
            client,
            model_cache: OnceCell::new(),
        })
    }

    /// Create a pipe with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(GroqConfig::new(api_key))
    }

    /// Create a pipe from the `GROQ_API_KEY` environment variable.
    ///
    /// An unset variable is not an error here; requests fail individually
    /// with a configuration error until the key is present.
    pub fn from_env() -> Result<Self> {
        Self::with_config(GroqConfig::from_env())
    }

    /// Get the current configuration
    pub fn config(&self) -> &GroqConfig {
        &self.config
    }

    /// Return the model list in the host's `[{id, name}, ...]` shape.
    ///
    /// May trigger the one-time model fetch; never errors, because fetch
    /// failure silently degrades to the hard-coded fallback list.
    pub async fn models(&self) -> Vec<ModelEntry> {
        self.resolve_models()
            .await
            .iter()
            .map(|id| ModelEntry {
                id: id.clone(),
                name: id.clone(),
            })
            .collect()
    }

    /// Resolve the allow-list, fetching it on first demand.
    ///
    /// The result is cached for the pipe's lifetime whether it came from the
    /// network or the fallback; there is deliberately no invalidation, so a
    /// transient outage at startup pins the fallback until restart.
    async fn resolve_models(&self) -> &[String] {
        self.model_cache
            .get_or_init(|| async {
                match self.fetch_models().await {
                    Ok(models) => {
                        info!(count = models.len(), "cached model list from Groq");
                        models
                    }
                    Err(err) => {
                        warn!(error = %err, "model refresh failed; using hard-coded list");
                        filter_excluded(fallback_models())
                    }
                }
            })
            .await
    }

    /// `GET /models`, filtered of audio models
    async fn fetch_models(&self) -> std::result::Result<Vec<String>, reqwest::Error> {
        debug!("fetching model list from {}/models", self.config.api_base);
        let response = self
            .client
            .get(format!("{}/models", self.config.api_base))
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .send()
            .await?
            .error_for_status()?;

        let parsed: ModelsResponse = response.json().await?;
        Ok(filter_excluded(parsed.data.into_iter().map(|m| m.id)))
    }

    /// Execute `POST /chat/completions`.
    ///
    /// The body is the raw payload the host received: `model` and `stream`
    /// are required, everything else passes through to the provider as-is.
    /// Returns the parsed body, a lazy line stream when `stream` is truthy,
    /// or an error whose display string is host-presentable. Nothing is
    /// retried; every failure is terminal for this call.
    #[instrument(skip(self, body), fields(api_base = %self.config.api_base))]
    pub async fn execute(&self, mut body: Map<String, Value>) -> Result<PipeResponse> {
        validate_body(&body)?;

        if self.config.api_key.is_empty() {
            return Err(PipeError::Configuration);
        }

        // Strip any '<prefix>.' the host prepends to route requests here.
        let Some(model) = body.get("model").and_then(Value::as_str) else {
            return Err(PipeError::Validation);
        };
        let model = strip_route_prefix(model).to_string();
        body.insert("model".to_string(), Value::String(model.clone()));

        let allowed = self.resolve_models().await;
        if !allowed.iter().any(|m| *m == model) {
            return Err(PipeError::UnsupportedModel {
                model,
                valid_models: allowed.join(", "),
            });
        }

        let stream = body.get("stream").is_some_and(is_truthy);
        let url = format!("{}/chat/completions", self.config.api_base);
        debug!(%model, stream, "dispatching chat completion");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(PipeError::unhandled)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .error_for_status_ref()
                .err()
                .map(|e| e.to_string())
                .unwrap_or_else(|| status.to_string());
            let text = response.text().await.unwrap_or_default();
            return Err(PipeError::upstream(status.as_u16(), &url, &detail, &text));
        }

        if stream {
            Ok(PipeResponse::Stream(ResponseLines::new(response)))
        } else {
            let parsed = response.json().await.map_err(PipeError::unhandled)?;
            Ok(PipeResponse::Completion(parsed))
        }
    }
}

//! Model allow-list data: wire types, exclusion filter, fallback list

use serde::{Deserialize, Serialize};

/// Model ids containing any of these substrings are never exposed.
/// Audio models are not usable through a chat-completion pipe.
pub const EXCLUDED_SUBSTRINGS: [&str; 2] = ["tts", "whisper"];

/// One entry of the host-facing model listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Provider model id
    pub id: String,
    /// Display name; the pipe reuses the id
    pub name: String,
}

/// Response shape of `GET /models`
#[derive(Debug, Deserialize)]
pub(crate) struct ModelsResponse {
    #[serde(default)]
    pub data: Vec<ModelData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModelData {
    pub id: String,
}

/// Drop every id containing an excluded substring, preserving order.
pub(crate) fn filter_excluded(models: impl IntoIterator<Item = String>) -> Vec<String> {
    models
        .into_iter()
        .filter(|id| !EXCLUDED_SUBSTRINGS.iter().any(|x| id.contains(x)))
        .collect()
}

/// Hand-curated model list (2024-06).
///
/// Used when `GET /models` fails, so the pipe keeps working while the
/// endpoint is down and page loads never block on a dead network call.
pub(crate) fn fallback_models() -> Vec<String> {
    [
        "allam-2-7b",
        "compound-beta",
        "compound-beta-mini",
        "deepseek-r1-distill-llama-70b",
        "gemma2-9b-it",
        "llama-3.1-8b-instant",
        "llama-3.3-70b-versatile",
        "llama3-70b-8192",
        "llama3-8b-8192",
        "openai/gpt-oss-20b",
        "openai/gpt-oss-120b",
        "meta-llama/llama-guard-4-12b",
        "meta-llama/llama-prompt-guard-2-22m",
        "meta-llama/llama-prompt-guard-2-86m",
        "meta-llama/llama-4-maverick-17b-128e-instruct",
        "meta-llama/llama-4-scout-17b-16e-instruct",
        "mistral-saba-24b",
        "moonshotai/kimi-k2-instruct",
        "qwen/qwen3-32b",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

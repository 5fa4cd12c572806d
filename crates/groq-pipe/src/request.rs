//! Request body helpers: validation, model-id normalization, truthiness

use serde_json::{Map, Value};

use crate::error::{PipeError, Result};

/// Check that the body carries the two keys every request must have.
///
/// Only key presence is validated; all other fields pass through to the
/// provider untouched.
pub fn validate_body(body: &Map<String, Value>) -> Result<()> {
    if body.contains_key("model") && body.contains_key("stream") {
        Ok(())
    } else {
        Err(PipeError::Validation)
    }
}

/// Strip a host-added `<prefix>.` namespace segment from a model id.
///
/// Splits on the *first* dot only: `"groq_new.llama3-8b-8192"` becomes
/// `"llama3-8b-8192"` and `"a.b.c"` becomes `"b.c"`. Ids without a dot pass
/// through unchanged. The prefix itself is not validated; any dot-containing
/// id is treated as prefixed.
pub fn strip_route_prefix(model: &str) -> &str {
    match model.split_once('.') {
        Some((_, rest)) => rest,
        None => model,
    }
}

/// JSON truthiness, matching dynamic-language semantics.
///
/// `null`, `false`, `0`, `""`, `[]` and `{}` are falsy; everything else is
/// truthy. The `stream` flag is usually a plain bool but hosts have been seen
/// sending `0`/`1` and `"true"`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

//! Lenient request-field parsing for required free-text inputs.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a free-text field without rejecting non-string JSON.
///
/// `null`, `false`, `0`, arrays and objects count as absent. Other scalars are
/// stringified. Blank strings are kept so the handler can report them.
pub fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

/// Returns the text only when it has non-whitespace content.
pub fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

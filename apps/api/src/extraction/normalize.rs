//! Normalization of free-text model output into a JSON object string.
//!
//! Known fragility: slicing from the first `{` to the last `}` widens the
//! slice when surrounding prose contains unrelated braces.

use serde_json::Value;

use crate::models::resume::ExtractedResume;

/// Strips one pair of ```json ... ``` or ``` ... ``` fences.
/// The closing fence is optional.
fn strip_code_fences(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest).trim_start();
    let rest = rest.trim_end();
    rest.strip_suffix("```").map(str::trim_end).unwrap_or(rest)
}

/// Slices to the outermost `{ ... }`. Leaves the text alone when no such
/// ordered pair exists.
fn slice_outer_braces(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(first), Some(last)) if first < last => &text[first..=last],
        _ => text,
    }
}

/// Trims, strips code fences, then slices to the outermost brace pair.
pub fn normalize_ai_json(raw: &str) -> &str {
    slice_outer_braces(strip_code_fences(raw.trim()))
}

/// Parses normalized model output into resume content.
/// The top level must be a JSON object. Errors are the parser's message.
pub fn parse_extracted(json: &str) -> Result<ExtractedResume, String> {
    let value: Value = serde_json::from_str(json).map_err(|e| e.to_string())?;
    if !value.is_object() {
        return Err(format!("expected a JSON object, found {}", kind(&value)));
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

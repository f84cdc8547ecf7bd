//! Tolerant JSON extraction from model output.
//!
//! Models asked for "ONLY valid JSON" still wrap answers in code fences
//! or prose often enough that the extraction contract is a fallback
//! ladder rather than a single parse.

use serde_json::{json, Value};

/// Parse free-form model output into a JSON value.
///
/// Tiers, tried in order on the fence-stripped text:
///   1. parse the whole text
///   2. parse the substring from the first `{` to the last `}`
///   3. wrap the text as `{"raw_text": ...}`
///
/// The ladder never fails; a model that returns garbage degrades to the
/// raw-text wrapper instead of failing the request.
pub fn parse_llm_json(raw: &str) -> Value {
    let text = strip_code_fence(raw.trim());

    if let Ok(value) = serde_json::from_str::<Value>(&text) {
        return value;
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<Value>(&text[start..=end]) {
                return value;
            }
        }
    }

    json!({ "raw_text": text })
}

/// Strip an optional Markdown code fence (with or without a `json` tag).
/// Leading and trailing fences are stripped independently.
fn strip_code_fence(text: &str) -> String {
    let mut stripped = text.trim();

    if let Some(rest) = stripped.strip_prefix("```json") {
        stripped = rest.trim_start();
    } else if let Some(rest) = stripped.strip_prefix("```") {
        stripped = rest.trim_start();
    }

    if let Some(rest) = stripped.strip_suffix("```") {
        stripped = rest.trim_end();
    }

    stripped.to_string()
}

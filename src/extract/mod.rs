//! Ordered field-extraction policies for upstream JSON.
//!
//! The content provider has returned several response shapes over time, so
//! extraction is an explicit priority list rather than a typed deserialize:
//! each probe is tried in order and the first match wins. The orders below
//! are the canonical policy for this service.

use serde_json::Value;

/// Candidate fields for the verse text, in priority order.
pub const TEXT_FIELDS: [&str; 3] = ["content", "text", "html"];

/// Candidate fields for the human-readable reference, in priority order.
pub const REFERENCE_FIELDS: [&str; 2] = ["reference", "human_reference"];

/// Served when no text candidate is present in the passage response.
pub const TEXT_UNAVAILABLE: &str = "Text unavailable";

/// Pulls the passage identifier out of a verse-of-the-day response.
///
/// Probes, in order: `data` as an array of objects (first element's
/// `passage_id`), `data` as a single object, then a root-level
/// `passage_id`. Returns `None` if no shape matches.
pub fn passage_id(body: &Value) -> Option<String> {
    if let Some(first) = body
        .get("data")
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
    {
        if let Some(id) = first.get("passage_id").and_then(Value::as_str) {
            return Some(id.to_string());
        }
    }

    if let Some(id) = body
        .get("data")
        .and_then(|data| data.get("passage_id"))
        .and_then(Value::as_str)
    {
        return Some(id.to_string());
    }

    body.get("passage_id")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Verse text from a passage response, or the unavailable sentinel.
pub fn verse_text(body: &Value) -> String {
    first_string(body, &TEXT_FIELDS)
        .unwrap_or(TEXT_UNAVAILABLE)
        .to_string()
}

/// Human-readable reference from a passage response, falling back to the
/// passage identifier itself.
pub fn human_reference(body: &Value, passage_id: &str) -> String {
    first_string(body, &REFERENCE_FIELDS)
        .unwrap_or(passage_id)
        .to_string()
}

/// First candidate field present as a string, honoring list order.
fn first_string<'a>(body: &'a Value, candidates: &[&str]) -> Option<&'a str> {
    candidates
        .iter()
        .find_map(|field| body.get(*field).and_then(Value::as_str))
}

//! Helpers shared by the collaborator response parsers.

use serde_json::Value;

/// Trims whitespace and a surrounding Markdown code fence (```` ```json ... ``` ````).
pub(crate) fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim().trim_start_matches('\u{feff}');
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json", "JSON", ...) on the opening fence line.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Extracts the message from a collaborator failure payload such as `{"error": "..."}`.
pub(crate) fn failure_message(value: &Value) -> Option<String> {
    let error = value.as_object()?.get("error")?;
    match error {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

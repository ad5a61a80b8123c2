use serde_json::Value;
use tracing::warn;

use super::domain::MetricsRecord;
use crate::response::{failure_message, strip_code_fence};

const CATEGORIES: [&str; 3] = ["environmental", "social", "governance"];

/// Failure raised at the metrics input boundary, before any scoring happens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    /// The extraction collaborator failed or produced text that is not a JSON document.
    #[error("metric extraction failed: {message}")]
    Extraction { message: String },
    /// The document is JSON but does not have the shape of a metrics record.
    #[error("invalid metrics record: {reason}")]
    InvalidInput { reason: String },
}

impl MetricsError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl MetricsRecord {
    /// Validates and normalises a decoded JSON document.
    ///
    /// Missing categories and metrics become absent, unknown keys are ignored and
    /// `null` leaves stay absent. A `{"error": ...}` payload from the extraction
    /// collaborator is reported as [`MetricsError::Extraction`].
    pub fn from_value(value: Value) -> Result<Self, MetricsError> {
        if let Some(message) = failure_message(&value) {
            return Err(MetricsError::Extraction { message });
        }

        let Value::Object(map) = &value else {
            return Err(MetricsError::invalid(format!(
                "expected a JSON object with {} categories, found {}",
                CATEGORIES.join("/"),
                json_kind(&value)
            )));
        };

        for category in CATEGORIES {
            match map.get(category) {
                None | Some(Value::Null) | Some(Value::Object(_)) => {}
                Some(other) => {
                    return Err(MetricsError::invalid(format!(
                        "category '{category}' must be an object, found {}",
                        json_kind(other)
                    )));
                }
            }
        }

        serde_json::from_value(value).map_err(|err| MetricsError::invalid(err.to_string()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, MetricsError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|err| MetricsError::invalid(err.to_string()))?;
        Self::from_value(value)
    }
}

/// Parses the raw text returned by the metric extraction collaborator.
///
/// Unlike [`MetricsRecord::from_json_str`], text that does not decode as JSON is an
/// extraction failure rather than invalid input, since the collaborator owns the format.
pub fn parse_extraction_response(raw: &str) -> Result<MetricsRecord, MetricsError> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Err(MetricsError::Extraction {
            message: "empty response from metric extraction".to_string(),
        });
    }

    let value: Value = serde_json::from_str(body).map_err(|err| {
        warn!(error = %err, "metric extraction returned non-JSON output");
        MetricsError::Extraction {
            message: err.to_string(),
        }
    })?;

    MetricsRecord::from_value(value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

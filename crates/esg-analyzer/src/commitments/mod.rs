//! Contract for the commitments collaborator, which lists the sustainability
//! commitments a report makes together with target dates, progress and status.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::response::{failure_message, strip_code_fence};

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommitmentError {
    #[error("commitment analysis failed: {message}")]
    Extraction { message: String },
}

/// One commitment as returned by the collaborator. Dates and progress arrive as
/// free-form text or numbers, so they are kept as raw JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commitment {
    #[serde(alias = "claim", alias = "description")]
    pub commitment: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "target_year", alias = "deadline")]
    pub target_date: Option<Value>,
    pub progress: Option<Value>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitmentStatus {
    Achieved,
    OnTrack,
    InProgress,
    Delayed,
    NotStarted,
    Unknown,
}

impl CommitmentStatus {
    pub fn from_label(label: &str) -> Self {
        let normalised = label.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalised.as_str() {
            "achieved" | "completed" | "met" | "done" => Self::Achieved,
            "on track" => Self::OnTrack,
            "in progress" | "ongoing" | "underway" => Self::InProgress,
            "delayed" | "off track" | "behind" | "at risk" => Self::Delayed,
            "not started" | "planned" | "pending" => Self::NotStarted,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Achieved => "Achieved",
            Self::OnTrack => "On Track",
            Self::InProgress => "In Progress",
            Self::Delayed => "Delayed",
            Self::NotStarted => "Not Started",
            Self::Unknown => "Unknown",
        }
    }
}

impl Commitment {
    pub fn status(&self) -> CommitmentStatus {
        self.status
            .as_deref()
            .map(CommitmentStatus::from_label)
            .unwrap_or(CommitmentStatus::Unknown)
    }
}

/// Every commitment found in one report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitmentReport {
    pub commitments: Vec<Commitment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitmentRow {
    #[serde(rename = "Commitment")]
    pub commitment: String,
    #[serde(rename = "Target")]
    pub target: String,
    #[serde(rename = "Progress")]
    pub progress: String,
    #[serde(rename = "Status")]
    pub status: String,
}

/// Table of commitments plus a count per status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitmentSummary {
    pub total: usize,
    pub by_status: BTreeMap<CommitmentStatus, usize>,
    pub rows: Vec<CommitmentRow>,
}

impl CommitmentReport {
    pub fn summary(&self) -> CommitmentSummary {
        let mut by_status = BTreeMap::new();
        let rows = self
            .commitments
            .iter()
            .map(|commitment| {
                let status = commitment.status();
                *by_status.entry(status).or_insert(0) += 1;
                CommitmentRow {
                    commitment: commitment
                        .commitment
                        .clone()
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                    target: value_text(&commitment.target_date),
                    progress: value_text(&commitment.progress),
                    status: status.label().to_string(),
                }
            })
            .collect();

        CommitmentSummary {
            total: self.commitments.len(),
            by_status,
            rows,
        }
    }
}

fn value_text(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Parses the raw text returned by the commitments collaborator.
pub fn parse_commitments_response(raw: &str) -> Result<CommitmentReport, CommitmentError> {
    let body = strip_code_fence(raw);
    let value: Value = serde_json::from_str(body).map_err(|err| {
        warn!(error = %err, "commitment analysis returned non-JSON output");
        CommitmentError::Extraction {
            message: err.to_string(),
        }
    })?;
    commitments_from_value(value)
}

/// Accepts either `{"commitments": [...]}` or a bare array of commitments.
pub fn commitments_from_value(value: Value) -> Result<CommitmentReport, CommitmentError> {
    if let Some(message) = failure_message(&value) {
        return Err(CommitmentError::Extraction { message });
    }

    let items = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut fields) => fields
            .remove("commitments")
            .or_else(|| fields.remove("claims"))
            .unwrap_or(Value::Array(Vec::new())),
        other => {
            return Err(CommitmentError::Extraction {
                message: format!("expected a list of commitments, found {other}"),
            })
        }
    };

    let commitments = serde_json::from_value(items).map_err(|err| CommitmentError::Extraction {
        message: err.to_string(),
    })?;
    Ok(CommitmentReport { commitments })
}

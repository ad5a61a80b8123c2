//! Contract for the greenwashing detection collaborator.
//!
//! Detection itself happens outside this crate; here the analysis JSON is decoded,
//! checked and flattened into the summary shown to users.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::response::{failure_message, strip_code_fence};

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GreenwashingError {
    #[error("please enter a sustainability statement")]
    EmptyStatement,
    #[error("greenwashing analysis failed: {message}")]
    Extraction { message: String },
}

/// Analysis returned by the detection collaborator. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreenwashingAnalysis {
    pub greenwashing_score: Option<f64>,
    pub verdict: Option<String>,
    pub criteria_scores: CriteriaScores,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaScores {
    pub specificity: Option<CriterionScore>,
    pub timeline: Option<CriterionScore>,
    pub action_vs_intent: Option<CriterionScore>,
    pub measurability: Option<CriterionScore>,
    pub vagueness: Option<CriterionScore>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriterionScore {
    pub score: Option<f64>,
    pub explanation: Option<String>,
}

/// Coarse reading of the 0–10 greenwashing score (higher means more likely greenwashing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreenwashingRisk {
    Low,
    Moderate,
    High,
}

impl GreenwashingRisk {
    pub fn from_score(score: f64) -> Self {
        if score >= 7.0 {
            Self::High
        } else if score >= 4.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// Flat view of an analysis, with `"N/A"` standing in for anything not provided.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreenwashingSummary {
    #[serde(rename = "Greenwashing Score")]
    pub greenwashing_score: String,
    #[serde(rename = "Risk", skip_serializing_if = "Option::is_none")]
    pub risk: Option<GreenwashingRisk>,
    #[serde(rename = "Verdict")]
    pub verdict: String,
    #[serde(rename = "Specificity")]
    pub specificity: String,
    #[serde(rename = "Timeline")]
    pub timeline: String,
    #[serde(rename = "Measurability")]
    pub measurability: String,
    #[serde(rename = "Action vs Intent")]
    pub action_vs_intent: String,
    #[serde(rename = "Vagueness")]
    pub vagueness: String,
    #[serde(rename = "Red Flags")]
    pub red_flags: Vec<String>,
    #[serde(rename = "Recommendations")]
    pub recommendations: Vec<String>,
}

impl GreenwashingAnalysis {
    pub fn risk(&self) -> Option<GreenwashingRisk> {
        self.greenwashing_score.map(GreenwashingRisk::from_score)
    }

    pub fn summary(&self) -> GreenwashingSummary {
        let criteria = &self.criteria_scores;
        GreenwashingSummary {
            greenwashing_score: match self.greenwashing_score {
                Some(score) => format!("{score}/10"),
                None => format!("{NOT_AVAILABLE}/10"),
            },
            risk: self.risk(),
            verdict: self
                .verdict
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            specificity: criterion_text(&criteria.specificity),
            timeline: criterion_text(&criteria.timeline),
            measurability: criterion_text(&criteria.measurability),
            action_vs_intent: criterion_text(&criteria.action_vs_intent),
            vagueness: criterion_text(&criteria.vagueness),
            red_flags: self.red_flags.clone(),
            recommendations: self.recommendations.clone(),
        }
    }
}

fn criterion_text(criterion: &Option<CriterionScore>) -> String {
    criterion
        .as_ref()
        .and_then(|criterion| criterion.score)
        .map(|score| score.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Rejects blank statements before they are sent for analysis.
pub fn validate_statement(statement: &str) -> Result<&str, GreenwashingError> {
    let trimmed = statement.trim();
    if trimmed.is_empty() {
        Err(GreenwashingError::EmptyStatement)
    } else {
        Ok(trimmed)
    }
}

/// Parses the raw text returned by the detection collaborator.
pub fn parse_analysis_response(raw: &str) -> Result<GreenwashingAnalysis, GreenwashingError> {
    let body = strip_code_fence(raw);
    let value: Value = serde_json::from_str(body).map_err(|err| {
        warn!(error = %err, "greenwashing analysis returned non-JSON output");
        GreenwashingError::Extraction {
            message: err.to_string(),
        }
    })?;
    analysis_from_value(value)
}

pub fn analysis_from_value(value: Value) -> Result<GreenwashingAnalysis, GreenwashingError> {
    if let Some(message) = failure_message(&value) {
        return Err(GreenwashingError::Extraction { message });
    }

    serde_json::from_value(value).map_err(|err| GreenwashingError::Extraction {
        message: err.to_string(),
    })
}

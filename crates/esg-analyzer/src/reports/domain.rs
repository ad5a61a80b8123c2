use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metrics::MetricsRecord;
use crate::scoring::OverallScoreResult;

/// Identifier for an analysed report, typically the uploaded file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyId(pub String);

impl CompanyId {
    /// Trims the raw identifier; blank identifiers yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metrics and score kept for one processed report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub company: CompanyId,
    pub metrics: MetricsRecord,
    pub score: OverallScoreResult,
    pub processed_at: DateTime<Utc>,
}

impl ReportRecord {
    pub fn view(&self) -> ReportView {
        ReportView {
            company: self.company.clone(),
            overall_score: self.score.overall_score,
            rating: self.score.rating_label.clone(),
            processed_at: self.processed_at,
        }
    }
}

/// Compact listing entry for API responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub company: CompanyId,
    pub overall_score: f64,
    pub rating: String,
    pub processed_at: DateTime<Utc>,
}

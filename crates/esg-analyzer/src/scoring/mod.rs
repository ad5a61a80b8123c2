//! Deterministic ESG rubric: per-category scorers and the weighted overall score.
//!
//! Scoring is pure. The same [`MetricsRecord`] always yields the same
//! [`OverallScoreResult`], and absent metrics are skipped rather than treated as zero.

mod config;
mod environmental;
mod governance;
mod rating;
mod social;
mod tally;

#[cfg(test)]
mod tests;

pub use config::{CategoryWeights, WeightsError};
pub use environmental::score_environmental;
pub use governance::score_governance;
pub use rating::EsgRating;
pub use social::score_social;
pub use tally::round_to;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics::MetricsRecord;

/// Upper bound of every category score and of the overall score.
pub const MAX_CATEGORY_SCORE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Environmental,
    Social,
    Governance,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Environmental,
        Category::Social,
        Category::Governance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Environmental => "Environmental",
            Category::Social => "Social",
            Category::Governance => "Governance",
        }
    }

    pub(crate) fn fallback_detail(&self) -> &'static str {
        match self {
            Category::Environmental => "⚠ Limited environmental data available",
            Category::Social => "⚠ Limited social data available",
            Category::Governance => "⚠ Limited governance data available",
        }
    }
}

/// Score for a single category with the rationale behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub details: Vec<String>,
}

/// Human-readable `"<score>/10 (<weight>% weight)"` line per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub environmental: String,
    pub social: String,
    pub governance: String,
}

/// Weighted overall score with its rating band and the category results it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallScoreResult {
    pub overall_score: f64,
    pub max_score: f64,
    pub rating: EsgRating,
    pub rating_label: String,
    pub rating_indicator: String,
    pub environmental: ScoreResult,
    pub social: ScoreResult,
    pub governance: ScoreResult,
    pub breakdown: ScoreBreakdown,
}

impl OverallScoreResult {
    pub fn category(&self, category: Category) -> &ScoreResult {
        match category {
            Category::Environmental => &self.environmental,
            Category::Social => &self.social,
            Category::Governance => &self.governance,
        }
    }
}

/// Stateless engine applying the category weights to the three scorers.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEngine {
    weights: CategoryWeights,
}

impl ScoreEngine {
    pub fn new(weights: CategoryWeights) -> Result<Self, WeightsError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> CategoryWeights {
        self.weights
    }

    pub fn score(&self, metrics: &MetricsRecord) -> OverallScoreResult {
        let environmental = score_environmental(&metrics.environmental);
        let social = score_social(&metrics.social);
        let governance = score_governance(&metrics.governance);

        let weighted = environmental.score * self.weights.environmental
            + social.score * self.weights.social
            + governance.score * self.weights.governance;
        let overall_score = round_to(weighted, 2);
        let rating = EsgRating::from_score(overall_score);

        debug!(
            environmental = environmental.score,
            social = social.score,
            governance = governance.score,
            overall = overall_score,
            rating = rating.label(),
            "scored metrics record"
        );

        let breakdown = ScoreBreakdown {
            environmental: self.breakdown_line(Category::Environmental, environmental.score),
            social: self.breakdown_line(Category::Social, social.score),
            governance: self.breakdown_line(Category::Governance, governance.score),
        };

        OverallScoreResult {
            overall_score,
            max_score: MAX_CATEGORY_SCORE,
            rating,
            rating_label: rating.label().to_string(),
            rating_indicator: rating.indicator().to_string(),
            environmental,
            social,
            governance,
            breakdown,
        }
    }

    fn breakdown_line(&self, category: Category, score: f64) -> String {
        format!(
            "{}/10 ({:.1}% weight)",
            format_score(score),
            self.weights.weight(category) * 100.0
        )
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self {
            weights: CategoryWeights::STANDARD,
        }
    }
}

/// Scores a record with the standard 40/30/30 weights.
pub fn calculate_overall_score(metrics: &MetricsRecord) -> OverallScoreResult {
    ScoreEngine::default().score(metrics)
}

/// Formats a score the way it is displayed in breakdowns: whole numbers keep one decimal.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}

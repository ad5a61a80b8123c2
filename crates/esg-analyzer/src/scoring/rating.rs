use serde::{Deserialize, Serialize};

/// Qualitative band for an overall ESG score, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EsgRating {
    LimitedData,
    NeedsImprovement,
    Fair,
    Good,
    Excellent,
}

impl EsgRating {
    /// Bands with their inclusive lower bounds, highest first.
    const BANDS: [(f64, EsgRating); 4] = [
        (8.0, EsgRating::Excellent),
        (6.5, EsgRating::Good),
        (5.0, EsgRating::Fair),
        (3.0, EsgRating::NeedsImprovement),
    ];

    pub fn from_score(score: f64) -> Self {
        Self::BANDS
            .iter()
            .find(|(lower_bound, _)| score >= *lower_bound)
            .map(|(_, rating)| *rating)
            .unwrap_or(EsgRating::LimitedData)
    }

    pub fn label(&self) -> &'static str {
        match self {
            EsgRating::Excellent => "Excellent",
            EsgRating::Good => "Good",
            EsgRating::Fair => "Fair",
            EsgRating::NeedsImprovement => "Needs Improvement",
            EsgRating::LimitedData => "Limited Data",
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            EsgRating::Excellent => "🌟",
            EsgRating::Good => "✅",
            EsgRating::Fair | EsgRating::NeedsImprovement => "⚠️",
            EsgRating::LimitedData => "❓",
        }
    }
}

impl std::fmt::Display for EsgRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

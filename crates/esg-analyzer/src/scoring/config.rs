use serde::{Deserialize, Serialize};

use super::Category;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Relative weight of each category in the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
}

impl CategoryWeights {
    /// The published rubric: environmental 40%, social 30%, governance 30%.
    pub const STANDARD: Self = Self {
        environmental: 0.40,
        social: 0.30,
        governance: 0.30,
    };

    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Environmental => self.environmental,
            Category::Social => self.social,
            Category::Governance => self.governance,
        }
    }

    /// Each weight must lie in `[0, 1]` and together they must sum to one.
    pub fn validate(&self) -> Result<(), WeightsError> {
        for category in Category::ALL {
            let weight = self.weight(category);
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(WeightsError::OutOfRange { category, weight });
            }
        }

        let total = self.environmental + self.social + self.governance;
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightsError::DoNotSumToOne { total });
        }

        Ok(())
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightsError {
    #[error("{} weight {weight} must be between 0 and 1", .category.label())]
    OutOfRange { category: Category, weight: f64 },
    #[error("category weights must sum to 1.0 (got {total})")]
    DoNotSumToOne { total: f64 },
}

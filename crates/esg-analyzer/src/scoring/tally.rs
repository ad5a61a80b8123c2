use super::{Category, ScoreResult, MAX_CATEGORY_SCORE};

/// Running total for one category while its criteria are evaluated.
#[derive(Debug, Default)]
pub(crate) struct CategoryTally {
    points: f64,
    details: Vec<String>,
}

impl CategoryTally {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn award(&mut self, points: f64, detail: impl Into<String>) {
        self.points += points;
        self.details.push(detail.into());
    }

    /// Caps the total and substitutes the fallback detail when nothing was awarded.
    pub(crate) fn finish(self, category: Category) -> ScoreResult {
        let capped = self.points.clamp(0.0, MAX_CATEGORY_SCORE);
        let details = if self.details.is_empty() {
            vec![category.fallback_detail().to_string()]
        } else {
            self.details
        };

        ScoreResult {
            score: round_to(capped, 2),
            max_score: MAX_CATEGORY_SCORE,
            percentage: round_to(capped / MAX_CATEGORY_SCORE * 100.0, 1),
            details,
        }
    }
}

/// Rounds half away from zero to the given number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_is_capped_at_ten() {
        let mut tally = CategoryTally::new();
        for _ in 0..5 {
            tally.award(3.0, "synthetic award");
        }

        let result = tally.finish(Category::Environmental);
        assert_eq!(result.score, 10.0);
        assert_eq!(result.percentage, 100.0);
        assert_eq!(result.details.len(), 5);
    }

    #[test]
    fn empty_tally_uses_category_fallback() {
        let result = CategoryTally::new().finish(Category::Governance);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(
            result.details,
            vec![Category::Governance.fallback_detail().to_string()]
        );
    }

    #[test]
    fn rounding_matches_decimal_expectations() {
        assert_eq!(round_to(2.0 + 1.8 + 2.1, 2), 5.9);
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(3.3333, 2), 3.33);
    }
}

use super::tally::CategoryTally;
use super::{Category, ScoreResult};
use crate::metrics::GovernanceMetrics;

const OPTIMAL_BOARD_SIZE: std::ops::RangeInclusive<u32> = 8..=12;

/// Scores board independence and size, ESG oversight and ethics transparency.
pub fn score_governance(metrics: &GovernanceMetrics) -> ScoreResult {
    let mut tally = CategoryTally::new();

    if let Some(independent) = metrics
        .independent_directors_percentage
        .filter(|pct| *pct > 0.0)
    {
        if independent >= 75.0 {
            tally.award(3.0, format!("✓ Strong board independence ({independent}%)"));
        } else if independent >= 50.0 {
            tally.award(
                2.0,
                format!("○ Adequate board independence ({independent}%)"),
            );
        } else {
            tally.award(1.0, format!("⚠ Limited board independence ({independent}%)"));
        }
    }

    match metrics.esg_committee_exists {
        Some(true) => tally.award(2.0, "✓ Dedicated ESG committee exists"),
        Some(false) => tally.award(0.5, "⚠ No dedicated ESG committee"),
        None => {}
    }

    if let Some(size) = metrics.board_size.filter(|size| *size > 0) {
        if OPTIMAL_BOARD_SIZE.contains(&size) {
            tally.award(1.0, format!("✓ Optimal board size ({size} directors)"));
        } else {
            tally.award(0.5, format!("○ Board size: {size} directors"));
        }
    }

    // Reporting a count at all earns the transparency award, zero included.
    if let Some(violations) = metrics.ethics_violations_reported {
        tally.award(2.0, "✓ Transparent ethics reporting");

        if violations == 0 {
            tally.award(2.0, "✓ No ethics violations reported");
        } else if violations < 5 {
            tally.award(1.5, format!("○ Minimal violations ({violations})"));
        } else if violations < 10 {
            tally.award(1.0, format!("⚠ Some violations reported ({violations})"));
        } else {
            tally.award(0.5, format!("⚠ Multiple violations reported ({violations})"));
        }
    }

    if metrics.climate_risk_disclosure == Some(true) {
        tally.award(0.5, "✓ Climate risk disclosure included");
    }

    tally.finish(Category::Governance)
}

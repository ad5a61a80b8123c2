use super::tally::CategoryTally;
use super::{Category, ScoreResult};
use crate::metrics::SocialMetrics;

/// Scores workforce and leadership diversity, safety and employee development.
pub fn score_social(metrics: &SocialMetrics) -> ScoreResult {
    let mut tally = CategoryTally::new();

    if let Some(workforce) = metrics
        .women_in_workforce_percentage
        .filter(|pct| *pct > 0.0)
    {
        if workforce >= 45.0 {
            tally.award(
                2.0,
                format!("✓ Strong workforce diversity ({workforce}% women)"),
            );
        } else if workforce >= 35.0 {
            tally.award(1.5, format!("○ Good workforce diversity ({workforce}% women)"));
        } else if workforce >= 25.0 {
            tally.award(
                1.0,
                format!("⚠ Improving workforce diversity ({workforce}% women)"),
            );
        } else {
            tally.award(
                0.5,
                format!("⚠ Limited workforce diversity ({workforce}% women)"),
            );
        }
    }

    if let Some(leadership) = metrics
        .women_in_leadership_percentage
        .filter(|pct| *pct > 0.0)
    {
        if leadership >= 40.0 {
            tally.award(
                3.0,
                format!("✓ Excellent leadership diversity ({leadership}% women)"),
            );
        } else if leadership >= 30.0 {
            tally.award(
                2.0,
                format!("○ Good leadership diversity ({leadership}% women)"),
            );
        } else if leadership >= 20.0 {
            tally.award(
                1.0,
                format!("⚠ Limited leadership diversity ({leadership}% women)"),
            );
        } else {
            tally.award(
                0.5,
                format!("⚠ Very limited leadership diversity ({leadership}% women)"),
            );
        }
    }

    if let Some(board) = metrics.board_diversity_percentage.filter(|pct| *pct > 0.0) {
        if board >= 40.0 {
            tally.award(2.0, format!("✓ Strong board diversity ({board}%)"));
        } else if board >= 30.0 {
            tally.award(1.5, format!("○ Good board diversity ({board}%)"));
        } else if board >= 20.0 {
            tally.award(1.0, format!("⚠ Limited board diversity ({board}%)"));
        } else {
            tally.award(0.5, format!("⚠ Very limited board diversity ({board}%)"));
        }
    }

    // Any disclosed rate counts, including a perfect zero.
    if let Some(rate) = metrics.safety_incident_rate {
        if rate < 1.0 {
            tally.award(2.0, format!("✓ Excellent safety record ({rate} incidents)"));
        } else if rate < 2.0 {
            tally.award(1.5, format!("○ Good safety record ({rate} incidents)"));
        } else if rate < 3.0 {
            tally.award(1.0, format!("⚠ Moderate safety record ({rate} incidents)"));
        } else {
            tally.award(
                0.5,
                format!("⚠ Safety improvements needed ({rate} incidents)"),
            );
        }
    }

    if let Some(hours) = metrics.employee_training_hours.filter(|hours| *hours > 0.0) {
        if hours >= 40.0 {
            tally.award(
                1.0,
                format!("✓ Strong employee development program ({hours} hrs)"),
            );
        } else if hours >= 20.0 {
            tally.award(0.7, format!("○ Good employee development ({hours} hrs)"));
        } else {
            tally.award(0.4, format!("⚠ Limited employee development ({hours} hrs)"));
        }
    }

    tally.finish(Category::Social)
}

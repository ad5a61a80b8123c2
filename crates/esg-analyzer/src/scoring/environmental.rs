use super::tally::CategoryTally;
use super::{Category, ScoreResult};
use crate::metrics::domain::reported;
use crate::metrics::EnvironmentalMetrics;

/// Scores emissions disclosure, renewable energy, waste diversion and resource reporting.
pub fn score_environmental(metrics: &EnvironmentalMetrics) -> ScoreResult {
    let mut tally = CategoryTally::new();

    if reported(&metrics.scope_1_emissions) {
        tally.award(1.5, "✓ Reports Scope 1 emissions");
    }
    if reported(&metrics.scope_2_emissions) {
        tally.award(0.5, "✓ Reports Scope 2 emissions");
    }
    if reported(&metrics.scope_3_emissions) {
        tally.award(1.0, "✓ Reports Scope 3 emissions (comprehensive)");
    }

    if let Some(renewable) = metrics.renewable_energy_percentage.filter(|pct| *pct > 0.0) {
        if renewable >= 75.0 {
            tally.award(
                3.0,
                format!("✓ Excellent renewable energy usage ({renewable}%)"),
            );
        } else if renewable >= 50.0 {
            tally.award(2.5, format!("✓ Good renewable energy usage ({renewable}%)"));
        } else if renewable >= 25.0 {
            tally.award(
                1.5,
                format!("○ Moderate renewable energy usage ({renewable}%)"),
            );
        } else {
            tally.award(0.5, format!("⚠ Low renewable energy usage ({renewable}%)"));
        }
    }

    // Below 25% diversion earns nothing and adds no detail.
    if let Some(waste) = metrics.waste_recycled_percentage.filter(|pct| *pct > 0.0) {
        if waste >= 75.0 {
            tally.award(1.0, format!("✓ High waste diversion rate ({waste}%)"));
        } else if waste >= 50.0 {
            tally.award(0.7, format!("○ Moderate waste diversion ({waste}%)"));
        } else if waste >= 25.0 {
            tally.award(0.4, format!("⚠ Limited waste diversion ({waste}%)"));
        }
    }

    if reported(&metrics.water_usage) {
        tally.award(0.5, "✓ Reports water usage metrics");
    }
    if reported(&metrics.energy_efficiency) {
        tally.award(0.5, "✓ Reports energy efficiency metrics");
    }

    tally.finish(Category::Environmental)
}

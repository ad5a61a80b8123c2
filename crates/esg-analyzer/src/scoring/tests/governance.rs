use super::common::*;
use crate::metrics::GovernanceMetrics;
use crate::scoring::score_governance;

#[test]
fn committee_board_and_clean_ethics_score_seven() {
    let result = score_governance(&sample_governance());

    assert_eq!(result.score, 7.0);
    assert_eq!(result.percentage, 70.0);
    assert_eq!(
        result.details,
        vec![
            "✓ Dedicated ESG committee exists".to_string(),
            "✓ Optimal board size (10 directors)".to_string(),
            "✓ Transparent ethics reporting".to_string(),
            "✓ No ethics violations reported".to_string(),
        ]
    );
}

#[test]
fn explicit_absence_of_committee_still_scores() {
    let metrics = GovernanceMetrics {
        esg_committee_exists: Some(false),
        ..GovernanceMetrics::default()
    };

    let result = score_governance(&metrics);
    assert_eq!(result.score, 0.5);
    assert_eq!(result.details, vec!["⚠ No dedicated ESG committee".to_string()]);
}

#[test]
fn absent_governance_metrics_fall_back() {
    let result = score_governance(&GovernanceMetrics::default());
    assert_eq!(result.score, 0.0);
    assert_eq!(
        result.details,
        vec!["⚠ Limited governance data available".to_string()]
    );
}

#[test]
fn board_size_outside_optimal_range_earns_half_point() {
    let score_for = |size: u32| {
        score_governance(&GovernanceMetrics {
            board_size: Some(size),
            ..GovernanceMetrics::default()
        })
        .score
    };

    assert_eq!(score_for(0), 0.0);
    assert_eq!(score_for(7), 0.5);
    assert_eq!(score_for(8), 1.0);
    assert_eq!(score_for(12), 1.0);
    assert_eq!(score_for(13), 0.5);
}

#[test]
fn ethics_violation_tiers_include_transparency_award() {
    let score_for = |violations: u32| {
        score_governance(&GovernanceMetrics {
            ethics_violations_reported: Some(violations),
            ..GovernanceMetrics::default()
        })
        .score
    };

    assert_eq!(score_for(0), 4.0);
    assert_eq!(score_for(4), 3.5);
    assert_eq!(score_for(5), 3.0);
    assert_eq!(score_for(9), 3.0);
    assert_eq!(score_for(10), 2.5);
}

#[test]
fn independence_tiers() {
    let score_for = |pct: f64| {
        score_governance(&GovernanceMetrics {
            independent_directors_percentage: Some(pct),
            ..GovernanceMetrics::default()
        })
        .score
    };

    assert_eq!(score_for(0.0), 0.0);
    assert_eq!(score_for(30.0), 1.0);
    assert_eq!(score_for(50.0), 2.0);
    assert_eq!(score_for(74.9), 2.0);
    assert_eq!(score_for(75.0), 3.0);
}

#[test]
fn fully_disclosed_governance_is_capped() {
    let metrics = GovernanceMetrics {
        independent_directors_percentage: Some(80.0),
        board_size: Some(11),
        esg_committee_exists: Some(true),
        ethics_violations_reported: Some(0),
        climate_risk_disclosure: Some(true),
    };

    // 3.0 + 2.0 + 1.0 + 4.0 + 0.5 = 10.5 before the cap.
    let result = score_governance(&metrics);
    assert_eq!(result.score, 10.0);
    assert_eq!(result.percentage, 100.0);
    assert_eq!(result.details.len(), 6);
    assert_eq!(
        result.details.last().map(String::as_str),
        Some("✓ Climate risk disclosure included")
    );
}

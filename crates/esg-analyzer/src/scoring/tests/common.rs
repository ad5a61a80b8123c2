use crate::metrics::{
    Disclosure, EnvironmentalMetrics, GovernanceMetrics, MetricsRecord, ReportedQuantity,
    SocialMetrics,
};

pub(super) fn emissions(value: f64) -> Option<Disclosure> {
    Some(Disclosure::Quantity(ReportedQuantity {
        value: Some(value),
        unit: Some("tons CO2e".to_string()),
        year: Some(2023),
        ..ReportedQuantity::default()
    }))
}

pub(super) fn flagged() -> Option<Disclosure> {
    Some(Disclosure::Flag(true))
}

/// Scope 1 and 2 reported with 78% renewable energy.
pub(super) fn sample_environmental() -> EnvironmentalMetrics {
    EnvironmentalMetrics {
        scope_1_emissions: flagged(),
        scope_2_emissions: flagged(),
        renewable_energy_percentage: Some(78.0),
        ..EnvironmentalMetrics::default()
    }
}

/// Board of ten with an ESG committee and zero reported violations.
pub(super) fn sample_governance() -> GovernanceMetrics {
    GovernanceMetrics {
        board_size: Some(10),
        esg_committee_exists: Some(true),
        ethics_violations_reported: Some(0),
        ..GovernanceMetrics::default()
    }
}

/// Leadership 30% (2.0), board diversity 40% (2.0) and a 0.5 incident rate (2.0).
pub(super) fn sample_social() -> SocialMetrics {
    SocialMetrics {
        women_in_leadership_percentage: Some(30.0),
        board_diversity_percentage: Some(40.0),
        safety_incident_rate: Some(0.5),
        ..SocialMetrics::default()
    }
}

pub(super) fn sample_record() -> MetricsRecord {
    MetricsRecord {
        environmental: sample_environmental(),
        social: sample_social(),
        governance: sample_governance(),
    }
}

pub(super) fn fully_disclosed_environmental() -> EnvironmentalMetrics {
    EnvironmentalMetrics {
        scope_1_emissions: emissions(200_000.0),
        scope_2_emissions: emissions(150_000.0),
        scope_3_emissions: emissions(1_200_000.0),
        renewable_energy_percentage: Some(90.0),
        waste_recycled_percentage: Some(80.0),
        water_usage: Some(Disclosure::Text("2.1 million m3".to_string())),
        energy_efficiency: Some(Disclosure::Amount(12.0)),
    }
}

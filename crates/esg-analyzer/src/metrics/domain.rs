use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Structured ESG metrics for a single report, grouped by category.
///
/// Every leaf is optional: `None` means the report did not disclose the metric, which is
/// not the same as a disclosed zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub environmental: EnvironmentalMetrics,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social: SocialMetrics,
    #[serde(default, deserialize_with = "null_as_default")]
    pub governance: GovernanceMetrics,
}

impl MetricsRecord {
    /// Record with every recognised metric absent.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalMetrics {
    pub scope_1_emissions: Option<Disclosure>,
    pub scope_2_emissions: Option<Disclosure>,
    pub scope_3_emissions: Option<Disclosure>,
    pub renewable_energy_percentage: Option<f64>,
    pub waste_recycled_percentage: Option<f64>,
    pub water_usage: Option<Disclosure>,
    pub energy_efficiency: Option<Disclosure>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMetrics {
    pub women_in_workforce_percentage: Option<f64>,
    pub women_in_leadership_percentage: Option<f64>,
    pub board_diversity_percentage: Option<f64>,
    /// Recordable incidents per reporting base; lower is better and zero is a real value.
    pub safety_incident_rate: Option<f64>,
    pub employee_training_hours: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceMetrics {
    pub independent_directors_percentage: Option<f64>,
    #[serde(deserialize_with = "whole_count")]
    pub board_size: Option<u32>,
    pub esg_committee_exists: Option<bool>,
    /// Zero violations is a disclosure in its own right.
    #[serde(deserialize_with = "whole_count")]
    pub ethics_violations_reported: Option<u32>,
    pub climate_risk_disclosure: Option<bool>,
}

/// Value of a metric whose magnitude is not scored, only whether it was disclosed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Disclosure {
    Flag(bool),
    Amount(f64),
    Quantity(ReportedQuantity),
    Text(String),
    /// Any other shape the collaborator emits, judged by JSON truthiness.
    Other(Value),
}

impl Disclosure {
    pub fn is_reported(&self) -> bool {
        match self {
            Disclosure::Flag(flag) => *flag,
            Disclosure::Amount(amount) => *amount != 0.0,
            Disclosure::Quantity(quantity) => !quantity.is_blank(),
            Disclosure::Text(text) => !text.trim().is_empty(),
            Disclosure::Other(value) => json_truthy(value),
        }
    }
}

/// Quantity as emitted by the extraction collaborator, e.g.
/// `{"value": 200000, "unit": "tons CO2e", "year": 2023}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportedQuantity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ReportedQuantity {
    pub fn is_blank(&self) -> bool {
        self.value.is_none() && self.unit.is_none() && self.year.is_none() && self.extra.is_empty()
    }
}

fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Returns true when an optional disclosure is present and meaningful.
pub(crate) fn reported(value: &Option<Disclosure>) -> bool {
    value.as_ref().is_some_and(Disclosure::is_reported)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Counts arrive as integers or as whole-number floats such as `10.0`.
fn whole_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.fract() != 0.0 || raw < 0.0 || raw > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative whole number, found {raw}"
        )));
    }
    Ok(Some(raw as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn disclosure_truthiness_follows_value_kind() {
        assert!(Disclosure::Flag(true).is_reported());
        assert!(!Disclosure::Flag(false).is_reported());
        assert!(Disclosure::Amount(12.5).is_reported());
        assert!(!Disclosure::Amount(0.0).is_reported());
        assert!(Disclosure::Text("1.2 million m3".to_string()).is_reported());
        assert!(!Disclosure::Text("   ".to_string()).is_reported());
        assert!(!Disclosure::Quantity(ReportedQuantity::default()).is_reported());
    }

    #[test]
    fn loosely_typed_quantities_fall_back_to_truthiness() {
        let fiscal_year: Disclosure = serde_json::from_value(json!({
            "value": 450000,
            "unit": "tCO2e",
            "year": "FY2023"
        }))
        .expect("string year accepted");
        assert!(matches!(fiscal_year, Disclosure::Other(_)));
        assert!(fiscal_year.is_reported());

        let formatted: Disclosure =
            serde_json::from_value(json!({ "value": "450,000" })).expect("string value accepted");
        assert!(formatted.is_reported());

        let listed: Disclosure =
            serde_json::from_value(json!(["site A", "site B"])).expect("array accepted");
        assert!(listed.is_reported());

        let empty: Disclosure = serde_json::from_value(json!([])).expect("empty array accepted");
        assert!(!empty.is_reported());
    }

    #[test]
    fn counts_accept_whole_number_floats() {
        let governance: GovernanceMetrics = serde_json::from_value(json!({
            "board_size": 10.0,
            "ethics_violations_reported": 0
        }))
        .expect("whole float accepted");
        assert_eq!(governance.board_size, Some(10));
        assert_eq!(governance.ethics_violations_reported, Some(0));

        let fractional = serde_json::from_value::<GovernanceMetrics>(json!({ "board_size": 9.5 }));
        assert!(fractional.is_err());
    }

    #[test]
    fn quantity_objects_deserialize_with_extra_fields() {
        let disclosure: Disclosure = serde_json::from_value(json!({
            "value": 200000,
            "unit": "tons CO2e",
            "year": 2023,
            "baseline": 2020
        }))
        .expect("quantity parses");

        match disclosure {
            Disclosure::Quantity(quantity) => {
                assert_eq!(quantity.value, Some(200000.0));
                assert_eq!(quantity.unit.as_deref(), Some("tons CO2e"));
                assert_eq!(quantity.year, Some(2023));
                assert!(quantity.extra.contains_key("baseline"));
            }
            other => panic!("expected quantity, got {other:?}"),
        }
    }

    #[test]
    fn null_category_is_treated_as_absent() {
        let record: MetricsRecord = serde_json::from_value(json!({
            "environmental": null,
            "social": { "safety_incident_rate": 0.0 }
        }))
        .expect("record parses");

        assert_eq!(record.environmental, EnvironmentalMetrics::default());
        assert_eq!(record.social.safety_incident_rate, Some(0.0));
        assert_eq!(record.governance, GovernanceMetrics::default());
        assert_ne!(record, MetricsRecord::empty());
    }
}

//! Typed ESG metrics schema and the validation boundary for extraction output.

pub mod domain;
mod parser;

pub use domain::{
    Disclosure, EnvironmentalMetrics, GovernanceMetrics, MetricsRecord, ReportedQuantity,
    SocialMetrics,
};
pub use parser::{parse_extraction_response, MetricsError};

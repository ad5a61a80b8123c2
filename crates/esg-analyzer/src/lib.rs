//! ESG report analysis: extraction decoding, deterministic scoring, greenwashing
//! summaries and a portfolio dashboard over processed reports.

pub mod commitments;
pub mod config;
pub mod error;
pub mod greenwashing;
pub mod metrics;
pub mod reports;
mod response;
pub mod scoring;
pub mod telemetry;

pub use metrics::{parse_extraction_response, MetricsError, MetricsRecord};
pub use scoring::{calculate_overall_score, EsgRating, OverallScoreResult, ScoreEngine};

use std::sync::Arc;

use super::common::*;
use crate::metrics::{MetricsError, MetricsRecord};
use crate::reports::domain::CompanyId;
use crate::reports::repository::RepositoryError;
use crate::reports::service::{ReportAnalysisService, ReportServiceError};
use crate::scoring::{EsgRating, ScoreEngine};

#[test]
fn ingest_scores_and_stores_extraction_output() {
    let (service, repository) = build_service();
    let raw = format!("```json\n{}\n```", sample_metrics_json());

    let record = service
        .ingest("acme_2023.pdf", &raw)
        .expect("report ingested");

    assert_eq!(record.company, CompanyId("acme_2023.pdf".to_string()));
    assert_eq!(record.score.overall_score, 5.9);
    assert_eq!(record.score.rating, EsgRating::Fair);
    assert_eq!(repository.len(), 1);

    let stored = service
        .get(&CompanyId("acme_2023.pdf".to_string()))
        .expect("record stored");
    assert_eq!(stored, record);
}

#[test]
fn reingesting_a_company_replaces_its_record() {
    let (service, repository) = build_service();
    let sample = MetricsRecord::from_value(sample_metrics_json()).expect("sample parses");
    let sparse = MetricsRecord::from_value(sparse_metrics_json()).expect("sparse parses");

    service
        .ingest_metrics_at("acme", sample, processed_at())
        .expect("first ingest");
    let replaced = service
        .ingest_metrics_at(" acme ", sparse, processed_at())
        .expect("second ingest");

    assert_eq!(repository.len(), 1);
    assert_eq!(replaced.score.governance.score, 1.0);
    assert_eq!(replaced.score.rating, EsgRating::LimitedData);
    assert_eq!(replaced.processed_at, processed_at());
}

#[test]
fn extraction_failures_do_not_reach_storage() {
    let (service, repository) = build_service();

    let error = service
        .ingest("broken.pdf", r#"{"error": "context window exceeded"}"#)
        .expect_err("extraction failure rejected");

    match error {
        ReportServiceError::Metrics(MetricsError::Extraction { message }) => {
            assert_eq!(message, "context window exceeded");
        }
        other => panic!("expected extraction error, got {other:?}"),
    }
    assert_eq!(repository.len(), 0);
}

#[test]
fn blank_company_is_rejected() {
    let (service, _) = build_service();
    let error = service
        .ingest_metrics("   ", MetricsRecord::empty())
        .expect_err("blank company rejected");
    assert!(matches!(error, ReportServiceError::InvalidCompany));
}

#[test]
fn unknown_company_is_not_found() {
    let (service, _) = build_service();
    let error = service
        .get(&CompanyId("missing.pdf".to_string()))
        .expect_err("missing record");
    assert!(matches!(
        error,
        ReportServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn repository_outages_propagate() {
    let service =
        ReportAnalysisService::new(Arc::new(UnavailableRepository), ScoreEngine::default());

    let error = service
        .ingest_metrics("acme", MetricsRecord::empty())
        .expect_err("outage surfaces");
    assert!(matches!(
        error,
        ReportServiceError::Repository(RepositoryError::Unavailable(_))
    ));
    assert!(service.dashboard().is_err());
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use crate::reports::domain::{CompanyId, ReportRecord};
use crate::reports::repository::{ReportRepository, RepositoryError};
use crate::reports::service::ReportAnalysisService;
use crate::scoring::ScoreEngine;

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<CompanyId, ReportRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ReportRepository for MemoryRepository {
    fn upsert(&self, record: ReportRecord) -> Result<Option<ReportRecord>, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.insert(record.company.clone(), record))
    }

    fn fetch(&self, company: &CompanyId) -> Result<Option<ReportRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(company).cloned())
    }

    fn list(&self) -> Result<Vec<ReportRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct UnavailableRepository;

impl ReportRepository for UnavailableRepository {
    fn upsert(&self, _record: ReportRecord) -> Result<Option<ReportRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _company: &CompanyId) -> Result<Option<ReportRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ReportRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (ReportAnalysisService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = ReportAnalysisService::new(Arc::new(repository.clone()), ScoreEngine::default());
    (service, repository)
}

pub(super) fn processed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Extraction output for a report scoring 5.0 / 6.0 / 7.0.
pub(super) fn sample_metrics_json() -> Value {
    json!({
        "environmental": {
            "scope_1_emissions": {"value": 200000, "unit": "tons CO2e", "year": 2023},
            "scope_2_emissions": {"value": 150000, "unit": "tons CO2e", "year": 2023},
            "scope_3_emissions": null,
            "renewable_energy_percentage": 78,
            "waste_recycled_percentage": null
        },
        "social": {
            "women_in_leadership_percentage": 30,
            "board_diversity_percentage": 40,
            "safety_incident_rate": 0.5
        },
        "governance": {
            "independent_directors_percentage": null,
            "board_size": 10,
            "esg_committee_exists": true,
            "ethics_violations_reported": 0
        }
    })
}

/// Extraction output disclosing only a committee and a large board.
pub(super) fn sparse_metrics_json() -> Value {
    json!({
        "governance": { "board_size": 15, "esg_committee_exists": false }
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

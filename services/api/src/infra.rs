use esg_analyzer::reports::{CompanyId, ReportRecord, ReportRepository, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local report portfolio; contents are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReportRepository {
    records: Arc<Mutex<HashMap<CompanyId, ReportRecord>>>,
}

impl ReportRepository for InMemoryReportRepository {
    fn upsert(&self, record: ReportRecord) -> Result<Option<ReportRecord>, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        Ok(guard.insert(record.company.clone(), record))
    }

    fn fetch(&self, company: &CompanyId) -> Result<Option<ReportRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        Ok(guard.get(company).cloned())
    }

    fn list(&self) -> Result<Vec<ReportRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        Ok(guard.values().cloned().collect())
    }
}

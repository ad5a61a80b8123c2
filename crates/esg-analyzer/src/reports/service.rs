use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::dashboard::{DashboardExportError, PortfolioDashboard};
use super::domain::{CompanyId, ReportRecord};
use super::repository::{ReportRepository, RepositoryError};
use crate::metrics::{parse_extraction_response, MetricsError, MetricsRecord};
use crate::scoring::{OverallScoreResult, ScoreEngine};

/// Service composing extraction parsing, the scoring engine and report storage.
pub struct ReportAnalysisService<R> {
    repository: Arc<R>,
    engine: Arc<ScoreEngine>,
}

impl<R> ReportAnalysisService<R>
where
    R: ReportRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: ScoreEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
        }
    }

    /// Scores a record without storing it.
    pub fn score(&self, metrics: &MetricsRecord) -> OverallScoreResult {
        self.engine.score(metrics)
    }

    /// Parses raw extraction output for a report, scores it and stores the result.
    ///
    /// Re-ingesting a company replaces its previous record.
    pub fn ingest(
        &self,
        company: &str,
        extraction_response: &str,
    ) -> Result<ReportRecord, ReportServiceError> {
        let company = CompanyId::parse(company).ok_or(ReportServiceError::InvalidCompany)?;
        let metrics = parse_extraction_response(extraction_response).map_err(|err| {
            warn!(%company, error = %err, "rejected extraction output");
            err
        })?;
        self.store(company, metrics, Utc::now())
    }

    /// Stores already decoded metrics, stamped with the current time.
    pub fn ingest_metrics(
        &self,
        company: &str,
        metrics: MetricsRecord,
    ) -> Result<ReportRecord, ReportServiceError> {
        self.ingest_metrics_at(company, metrics, Utc::now())
    }

    /// Same as [`Self::ingest_metrics`] with an explicit processing timestamp.
    pub fn ingest_metrics_at(
        &self,
        company: &str,
        metrics: MetricsRecord,
        processed_at: DateTime<Utc>,
    ) -> Result<ReportRecord, ReportServiceError> {
        let company = CompanyId::parse(company).ok_or(ReportServiceError::InvalidCompany)?;
        self.store(company, metrics, processed_at)
    }

    pub fn get(&self, company: &CompanyId) -> Result<ReportRecord, ReportServiceError> {
        let record = self
            .repository
            .fetch(company)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn dashboard(&self) -> Result<PortfolioDashboard, ReportServiceError> {
        let records = self.repository.list()?;
        Ok(PortfolioDashboard::from_records(&records))
    }

    fn store(
        &self,
        company: CompanyId,
        metrics: MetricsRecord,
        processed_at: DateTime<Utc>,
    ) -> Result<ReportRecord, ReportServiceError> {
        let score = self.engine.score(&metrics);
        let record = ReportRecord {
            company,
            metrics,
            score,
            processed_at,
        };

        let replaced = self.repository.upsert(record.clone())?;
        info!(
            company = %record.company,
            overall = record.score.overall_score,
            rating = %record.score.rating,
            replaced = replaced.is_some(),
            "report scored"
        );

        Ok(record)
    }
}

/// Error raised by the report analysis service.
#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    #[error("company identifier must not be blank")]
    InvalidCompany,
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] DashboardExportError),
}

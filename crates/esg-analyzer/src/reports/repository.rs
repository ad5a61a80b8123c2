use super::domain::{CompanyId, ReportRecord};

/// Storage for processed reports, owned by whoever runs the service.
pub trait ReportRepository: Send + Sync {
    /// Stores the record, returning the one it replaced for the same company.
    fn upsert(&self, record: ReportRecord) -> Result<Option<ReportRecord>, RepositoryError>;
    fn fetch(&self, company: &CompanyId) -> Result<Option<ReportRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<ReportRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("report not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

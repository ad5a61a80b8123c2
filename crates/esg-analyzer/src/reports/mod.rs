//! Caller-owned portfolio of processed reports with its HTTP surface.

pub mod dashboard;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use dashboard::{DashboardExportError, DashboardRow, PortfolioDashboard, RadarSeries};
pub use domain::{CompanyId, ReportRecord, ReportView};
pub use repository::{ReportRepository, RepositoryError};
pub use router::{report_router, CommitmentsRequest, GreenwashingRequest, IngestReportRequest};
pub use service::{ReportAnalysisService, ReportServiceError};

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::domain::CompanyId;
use super::repository::{ReportRepository, RepositoryError};
use super::service::{ReportAnalysisService, ReportServiceError};
use crate::commitments::commitments_from_value;
use crate::greenwashing::{analysis_from_value, validate_statement, GreenwashingError};
use crate::metrics::{MetricsError, MetricsRecord};

/// Payload for registering a processed report.
///
/// Either `metrics` (an already decoded record) or `extraction_response` (raw
/// collaborator text) must be present; `metrics` wins when both are.
#[derive(Debug, Deserialize)]
pub struct IngestReportRequest {
    pub company: String,
    #[serde(default)]
    pub metrics: Option<Value>,
    #[serde(default)]
    pub extraction_response: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommitmentsRequest {
    pub analysis: Value,
}

#[derive(Debug, Deserialize)]
pub struct GreenwashingRequest {
    pub statement: String,
    pub analysis: Value,
}

/// Router builder exposing report ingestion, scoring and dashboard endpoints.
pub fn report_router<R>(service: Arc<ReportAnalysisService<R>>) -> Router
where
    R: ReportRepository + 'static,
{
    Router::new()
        .route("/api/v1/esg/score", post(score_handler::<R>))
        .route("/api/v1/esg/reports", post(ingest_handler::<R>))
        .route("/api/v1/esg/reports/:company", get(report_handler::<R>))
        .route("/api/v1/esg/dashboard", get(dashboard_handler::<R>))
        .route("/api/v1/esg/dashboard.csv", get(dashboard_csv_handler::<R>))
        .route("/api/v1/esg/greenwashing", post(greenwashing_handler))
        .route("/api/v1/esg/commitments", post(commitments_handler))
        .with_state(service)
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<ReportAnalysisService<R>>>,
    Json(payload): Json<Value>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match MetricsRecord::from_value(payload) {
        Ok(metrics) => (StatusCode::OK, Json(service.score(&metrics))).into_response(),
        Err(err) => error_response(&ReportServiceError::Metrics(err)),
    }
}

pub(crate) async fn ingest_handler<R>(
    State(service): State<Arc<ReportAnalysisService<R>>>,
    Json(request): Json<IngestReportRequest>,
) -> Response
where
    R: ReportRepository + 'static,
{
    let IngestReportRequest {
        company,
        metrics,
        extraction_response,
    } = request;

    let result = match (metrics, extraction_response) {
        (Some(metrics), _) => MetricsRecord::from_value(metrics)
            .map_err(ReportServiceError::from)
            .and_then(|metrics| service.ingest_metrics(&company, metrics)),
        (None, Some(raw)) => service.ingest(&company, &raw),
        (None, None) => {
            let payload = json!({
                "error": "either metrics or extraction_response is required",
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match result {
        Ok(record) => (StatusCode::CREATED, Json(record.view())).into_response(),
        Err(err) => error_response(&err),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<ReportAnalysisService<R>>>,
    Path(company): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
{
    let company = CompanyId(company);
    match service.get(&company) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => error_response(&err),
    }
}

pub(crate) async fn dashboard_handler<R>(
    State(service): State<Arc<ReportAnalysisService<R>>>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.dashboard() {
        Ok(dashboard) => (StatusCode::OK, Json(dashboard)).into_response(),
        Err(err) => error_response(&err),
    }
}

pub(crate) async fn dashboard_csv_handler<R>(
    State(service): State<Arc<ReportAnalysisService<R>>>,
) -> Response
where
    R: ReportRepository + 'static,
{
    let csv = service
        .dashboard()
        .and_then(|dashboard| dashboard.to_csv().map_err(ReportServiceError::from));

    match csv {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

pub(crate) async fn greenwashing_handler(Json(request): Json<GreenwashingRequest>) -> Response {
    let GreenwashingRequest {
        statement,
        analysis,
    } = request;

    let result = validate_statement(&statement)
        .and_then(|_| analysis_from_value(analysis))
        .map(|analysis| analysis.summary());

    match result {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(err) => {
            let status = match err {
                GreenwashingError::EmptyStatement => StatusCode::BAD_REQUEST,
                GreenwashingError::Extraction { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            };
            (status, Json(json!({ "error": err.to_string() }))).into_response()
        }
    }
}

pub(crate) async fn commitments_handler(Json(request): Json<CommitmentsRequest>) -> Response {
    match commitments_from_value(request.analysis) {
        Ok(report) => (StatusCode::OK, Json(report.summary())).into_response(),
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

fn error_response(err: &ReportServiceError) -> Response {
    let status = match err {
        ReportServiceError::InvalidCompany
        | ReportServiceError::Metrics(MetricsError::InvalidInput { .. }) => {
            StatusCode::BAD_REQUEST
        }
        ReportServiceError::Metrics(MetricsError::Extraction { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ReportServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ReportServiceError::Repository(RepositoryError::Unavailable(_))
        | ReportServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryReportRepository};
use crate::routes::with_report_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use esg_analyzer::config::{AppConfig, ConfigError};
use esg_analyzer::error::AppError;
use esg_analyzer::reports::ReportAnalysisService;
use esg_analyzer::scoring::ScoreEngine;
use esg_analyzer::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = ScoreEngine::new(config.scoring).map_err(ConfigError::InvalidWeights)?;
    let repository = Arc::new(InMemoryReportRepository::default());
    let report_service = Arc::new(ReportAnalysisService::new(repository, engine));

    let app = with_report_routes(report_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        environmental_weight = config.scoring.environmental,
        social_weight = config.scoring.social,
        governance_weight = config.scoring.governance,
        "esg analyzer ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

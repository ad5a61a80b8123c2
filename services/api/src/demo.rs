use crate::infra::InMemoryReportRepository;
use chrono::Local;
use clap::Args;
use esg_analyzer::config::{AppConfig, ConfigError};
use esg_analyzer::error::AppError;
use esg_analyzer::greenwashing::{parse_analysis_response, validate_statement};
use esg_analyzer::metrics::MetricsRecord;
use esg_analyzer::parse_extraction_response;
use esg_analyzer::reports::{ReportAnalysisService, ReportServiceError};
use esg_analyzer::scoring::{format_score, Category, OverallScoreResult, ScoreEngine};
use serde_json::json;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Metrics JSON or raw extraction output (code fences allowed)
    #[arg(long)]
    pub(crate) metrics: PathBuf,
    /// Print the full result as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the portfolio comparison portion of the demo.
    #[arg(long)]
    pub(crate) skip_portfolio: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { metrics, json } = args;

    let engine = configured_engine()?;
    let raw = std::fs::read_to_string(&metrics)?;
    let record = parse_extraction_response(&raw)?;
    let result = engine.score(&record);

    if json {
        let body = serde_json::to_string_pretty(&result).map_err(std::io::Error::from)?;
        println!("{body}");
    } else {
        println!("Source: {}", metrics.display());
        print!("{}", render_score_report(&result));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = configured_engine()?;

    println!("ESG analyzer demo ({})", Local::now().format("%Y-%m-%d"));
    let result = engine.score(&sample_metrics());
    print!("{}", render_score_report(&result));

    println!("\nGreenwashing check");
    if let Ok(statement) = validate_statement(SAMPLE_STATEMENT) {
        println!("  Statement: {statement}");
    }
    match parse_analysis_response(SAMPLE_GREENWASHING_ANALYSIS) {
        Ok(analysis) => {
            let summary = analysis.summary();
            println!("  Greenwashing Score: {}", summary.greenwashing_score);
            if let Some(risk) = summary.risk {
                println!("  Risk: {}", risk.label());
            }
            println!("  Verdict: {}", summary.verdict);
            for flag in &summary.red_flags {
                println!("  - {flag}");
            }
        }
        Err(err) => println!("  Analysis unavailable: {err}"),
    }

    if args.skip_portfolio {
        return Ok(());
    }

    println!("\nPortfolio comparison");
    let repository = Arc::new(InMemoryReportRepository::default());
    let service = ReportAnalysisService::new(repository, engine);
    service.ingest_metrics("sample-2023.pdf", sample_metrics())?;
    service.ingest("northwind-2023.pdf", SAMPLE_EXTRACTION_RESPONSE)?;

    let dashboard = service.dashboard()?;
    let csv = dashboard.to_csv().map_err(ReportServiceError::from)?;
    print!("{csv}");

    Ok(())
}

fn configured_engine() -> Result<ScoreEngine, AppError> {
    let config = AppConfig::load()?;
    let engine = ScoreEngine::new(config.scoring).map_err(ConfigError::InvalidWeights)?;
    Ok(engine)
}

pub(crate) fn render_score_report(result: &OverallScoreResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ESG SCORE REPORT");
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(
        out,
        "Overall Score: {}/10",
        format_score(result.overall_score)
    );
    let _ = writeln!(
        out,
        "Rating: {} {}",
        result.rating_label, result.rating_indicator
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Category Breakdown:");
    for category in Category::ALL {
        let score = result.category(category);
        let _ = writeln!(
            out,
            "  {}: {}/10 ({}%)",
            category.label(),
            format_score(score.score),
            format_score(score.percentage)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Details:");
    for category in Category::ALL {
        let _ = writeln!(out, "\n{}:", category.label());
        for detail in &result.category(category).details {
            let _ = writeln!(out, "  {detail}");
        }
    }
    out
}

pub(crate) fn sample_metrics() -> MetricsRecord {
    let value = json!({
        "environmental": {
            "scope_1_emissions": {"value": 200000, "unit": "tons CO2e", "year": 2023},
            "scope_2_emissions": {"value": 150000, "unit": "tons CO2e", "year": 2023},
            "scope_3_emissions": null,
            "renewable_energy_percentage": 78,
            "waste_recycled_percentage": null
        },
        "social": {
            "women_in_workforce_percentage": 42,
            "women_in_leadership_percentage": null,
            "board_diversity_percentage": 45,
            "safety_incident_rate": 0.8,
            "employee_training_hours": null
        },
        "governance": {
            "independent_directors_percentage": null,
            "board_size": 10,
            "esg_committee_exists": true,
            "ethics_violations_reported": 0
        }
    });
    MetricsRecord::from_value(value).unwrap_or_else(|_| MetricsRecord::empty())
}

const SAMPLE_STATEMENT: &str =
    "We are committed to becoming a greener company and care deeply about the planet.";

const SAMPLE_EXTRACTION_RESPONSE: &str = r#"```json
{
  "environmental": {"scope_1_emissions": null, "renewable_energy_percentage": 30},
  "governance": {"independent_directors_percentage": 80, "board_size": 9, "climate_risk_disclosure": true}
}
```"#;

const SAMPLE_GREENWASHING_ANALYSIS: &str = r#"{
  "greenwashing_score": 8,
  "verdict": "Likely greenwashing",
  "criteria_scores": {
    "specificity": {"score": 1},
    "timeline": {"score": 0},
    "action_vs_intent": {"score": 2},
    "measurability": {"score": 1},
    "vagueness": {"score": 9}
  },
  "red_flags": ["No quantified target", "No deadline"],
  "recommendations": ["Commit to a baseline year and a dated reduction target"]
}"#;

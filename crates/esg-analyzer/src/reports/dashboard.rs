use serde::Serialize;

use super::domain::ReportRecord;
use crate::scoring::{Category, MAX_CATEGORY_SCORE};

/// One line of the portfolio comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardRow {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Environmental")]
    pub environmental: f64,
    #[serde(rename = "Social")]
    pub social: f64,
    #[serde(rename = "Governance")]
    pub governance: f64,
    #[serde(rename = "Overall")]
    pub overall: f64,
    #[serde(rename = "Rating")]
    pub rating: String,
}

/// Radar trace comparing a company's three category scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub name: String,
    pub r: [f64; 3],
    pub theta: [&'static str; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub radial_range: [f64; 2],
    pub series: Vec<RadarSeries>,
}

/// Comparison view across every processed report, ordered by company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioDashboard {
    pub rows: Vec<DashboardRow>,
    pub radar: RadarChart,
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardExportError {
    #[error("failed to write dashboard csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush dashboard csv: {0}")]
    Flush(String),
    #[error("dashboard csv is not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl PortfolioDashboard {
    pub fn from_records(records: &[ReportRecord]) -> Self {
        let mut ordered: Vec<&ReportRecord> = records.iter().collect();
        ordered.sort_by(|left, right| left.company.cmp(&right.company));

        let theta = Category::ALL.map(|category| category.label());
        let mut rows = Vec::with_capacity(ordered.len());
        let mut series = Vec::with_capacity(ordered.len());

        for record in ordered {
            let score = &record.score;
            rows.push(DashboardRow {
                company: record.company.to_string(),
                environmental: score.environmental.score,
                social: score.social.score,
                governance: score.governance.score,
                overall: score.overall_score,
                rating: score.rating_label.clone(),
            });
            series.push(RadarSeries {
                name: record.company.to_string(),
                r: Category::ALL.map(|category| score.category(category).score),
                theta,
            });
        }

        Self {
            rows,
            radar: RadarChart {
                radial_range: [0.0, MAX_CATEGORY_SCORE],
                series,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the table with a `Company,Environmental,...` header row.
    pub fn to_csv(&self) -> Result<String, DashboardExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        if self.rows.is_empty() {
            writer.write_record([
                "Company",
                "Environmental",
                "Social",
                "Governance",
                "Overall",
                "Rating",
            ])?;
        }
        for row in &self.rows {
            writer.serialize(row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| DashboardExportError::Flush(err.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::analytics::SeizureSummary;
use crate::models::{ReportRange, SeizureLog};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Medication entry as printed in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMedication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

/// A health report for one range, ready for PDF or JSON export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub title: String,
    pub generated_on: NaiveDate,
    pub range: ReportRange,
    pub period_label: String,
    pub summary: SeizureSummary,
    pub medications: Vec<ReportMedication>,
    /// Newest first, capped.
    pub recent_seizures: Vec<SeizureLog>,
    pub disclaimer: String,
}

impl HealthReport {
    pub fn active_medication_count(&self) -> usize {
        self.medications.len()
    }
}

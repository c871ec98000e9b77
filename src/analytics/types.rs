use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{ReportRange, SeizureType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

/// Seizure count of the last seven days against the seven before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub current: usize,
    pub previous: usize,
    pub delta: i64,
}

impl Trend {
    pub fn new(current: usize, previous: usize) -> Self {
        Self {
            current,
            previous,
            delta: current as i64 - previous as i64,
        }
    }

    pub fn direction(&self) -> TrendDirection {
        match self.delta {
            d if d > 0 => TrendDirection::Up,
            d if d < 0 => TrendDirection::Down,
            _ => TrendDirection::Neutral,
        }
    }
}

/// One bucket of the frequency chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyPoint {
    pub label: String,
    /// First day covered by the bucket.
    pub start: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    pub seizure_type: SeizureType,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerCount {
    pub trigger: String,
    pub count: usize,
}

/// Everything an exporter needs to describe one range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeizureSummary {
    pub range: ReportRange,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total: usize,
    /// Seconds, rounded.
    pub average_duration: u32,
    /// One decimal place.
    pub average_severity: f64,
    pub frequency: Vec<FrequencyPoint>,
    pub types: Vec<TypeCount>,
    pub triggers: Vec<TriggerCount>,
}

//! Home dashboard: headline numbers, upcoming visits and the month heat map.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::analytics::{count_between, seizure_trend, Trend};
use crate::appointment::next_appointments;
use crate::config::LOW_STOCK_THRESHOLD;
use crate::medications::{low_stock, RefillAlert};
use crate::models::{Appointment, SeizureLog};
use crate::store::StoreSnapshot;

/// Appointments shown on the dashboard.
pub const DASHBOARD_APPOINTMENTS: usize = 3;

/// Seizures listed under "recent activity".
pub const DASHBOARD_RECENT_SEIZURES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapDay {
    pub date: NaiveDate,
    pub count: usize,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub seizures_last_30_days: usize,
    pub trend: Trend,
    pub active_medications: usize,
    pub upcoming_appointments: Vec<Appointment>,
    pub recent_seizures: Vec<SeizureLog>,
    pub month_heatmap: Vec<HeatmapDay>,
    pub low_stock: Vec<RefillAlert>,
}

/// One cell per day of the month containing `today`.
pub fn month_heatmap(seizures: &[SeizureLog], today: NaiveDate) -> Vec<HeatmapDay> {
    let first = today.with_day(1).unwrap_or(today);
    first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .map(|date| HeatmapDay {
            date,
            count: seizures.iter().filter(|s| s.date == date).count(),
            is_today: date == today,
        })
        .collect()
}

pub fn dashboard_summary(snapshot: &StoreSnapshot<'_>, today: NaiveDate) -> DashboardSummary {
    let seizures = snapshot.seizures;
    DashboardSummary {
        seizures_last_30_days: count_between(seizures, today - Duration::days(30), today),
        trend: seizure_trend(seizures, today),
        active_medications: snapshot.medications.len(),
        upcoming_appointments: next_appointments(snapshot.appointments, today, DASHBOARD_APPOINTMENTS)
            .into_iter()
            .cloned()
            .collect(),
        recent_seizures: seizures.iter().take(DASHBOARD_RECENT_SEIZURES).cloned().collect(),
        month_heatmap: month_heatmap(seizures, today),
        low_stock: low_stock(snapshot.medications, LOW_STOCK_THRESHOLD),
    }
}

//! Medication list views: today's dose schedule and refill alerts.
//!
//! Pure functions over the medication and reminder collections; marking a
//! dose taken goes through `RecordStore::mark_medication_taken`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{ClockTime, Medication, MedicationReminder};

// ═══════════════════════════════════════════
// View types
// ═══════════════════════════════════════════

/// One scheduled dose for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledDose {
    pub medication_id: String,
    pub medication_name: String,
    pub dosage: String,
    pub time: ClockTime,
    pub taken: bool,
}

/// A medication at or below the refill threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefillAlert {
    pub medication_id: String,
    pub name: String,
    pub pills_remaining: u32,
    pub refill_date: Option<NaiveDate>,
}

// ═══════════════════════════════════════════
// Queries
// ═══════════════════════════════════════════

pub fn is_dose_taken(
    reminders: &[MedicationReminder],
    medication_id: &str,
    date: NaiveDate,
    time: ClockTime,
) -> bool {
    reminders
        .iter()
        .any(|r| r.taken && r.matches(medication_id, date, time))
}

/// Every (medication, time) slot for `today`, ordered by time of day.
/// Slots at the same time keep medication order.
pub fn todays_schedule(
    medications: &[Medication],
    reminders: &[MedicationReminder],
    today: NaiveDate,
) -> Vec<ScheduledDose> {
    let mut doses: Vec<ScheduledDose> = medications
        .iter()
        .flat_map(|m| {
            m.times.iter().map(move |&time| ScheduledDose {
                medication_id: m.id.clone(),
                medication_name: m.name.clone(),
                dosage: m.dosage.clone(),
                time,
                taken: is_dose_taken(reminders, &m.id, today, time),
            })
        })
        .collect();
    doses.sort_by_key(|d| d.time);
    doses
}

/// Medications with a known pill count at or below `threshold`.
pub fn low_stock(medications: &[Medication], threshold: u32) -> Vec<RefillAlert> {
    medications
        .iter()
        .filter_map(|m| {
            let pills = m.pills_remaining?;
            (pills <= threshold).then(|| RefillAlert {
                medication_id: m.id.clone(),
                name: m.name.clone(),
                pills_remaining: pills,
                refill_date: m.refill_date,
            })
        })
        .collect()
}

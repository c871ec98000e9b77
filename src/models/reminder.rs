use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::clock::ClockTime;
use super::validation::ValidationError;
use super::Record;

/// Taken/not-taken state of one scheduled dose.
///
/// `medication_id` refers to a `Medication` without owning it. The
/// (medication_id, date, time) triple is unique within the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationReminder {
    pub id: String,
    pub medication_id: String,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub taken: bool,
}

impl MedicationReminder {
    pub fn matches(&self, medication_id: &str, date: NaiveDate, time: ClockTime) -> bool {
        self.medication_id == medication_id && self.date == date && self.time == time
    }
}

impl Record for MedicationReminder {
    const KIND: &'static str = "medication_reminder";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

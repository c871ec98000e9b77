use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::clock::ClockTime;
use super::validation::{check_not_blank, ValidationError};
use super::{NewRecord, Record, RecordPatch};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    /// Free-form label ("Twice daily").
    pub frequency: String,
    /// Reminder times in the order the user entered them.
    pub times: Vec<ClockTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refill_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pills_remaining: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub reminder_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub times: Vec<ClockTime>,
    #[serde(default)]
    pub refill_date: Option<NaiveDate>,
    #[serde(default)]
    pub pills_remaining: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub reminder_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicationUpdate {
    pub name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub times: Option<Vec<ClockTime>>,
    pub refill_date: Option<Option<NaiveDate>>,
    pub pills_remaining: Option<Option<u32>>,
    pub notes: Option<Option<String>>,
    pub reminder_enabled: Option<bool>,
}

/// Parses raw reminder time inputs, dropping blank entries first.
pub fn parse_times<S: AsRef<str>>(raw: &[S]) -> Result<Vec<ClockTime>, ValidationError> {
    let times = raw
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<ClockTime>, _>>()?;
    if times.is_empty() {
        return Err(ValidationError::Empty { field: "times" });
    }
    Ok(times)
}

impl Record for Medication {
    const KIND: &'static str = "medication";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_not_blank("name", &self.name)?;
        if self.times.is_empty() {
            return Err(ValidationError::Empty { field: "times" });
        }
        Ok(())
    }
}

impl NewRecord for NewMedication {
    type Record = Medication;

    fn into_record(self, id: String) -> Medication {
        Medication {
            id,
            name: self.name,
            dosage: self.dosage,
            frequency: self.frequency,
            times: self.times,
            refill_date: self.refill_date,
            pills_remaining: self.pills_remaining,
            notes: self.notes,
            reminder_enabled: self.reminder_enabled,
        }
    }
}

impl RecordPatch<Medication> for MedicationUpdate {
    fn apply(self, record: &mut Medication) {
        if let Some(v) = self.name {
            record.name = v;
        }
        if let Some(v) = self.dosage {
            record.dosage = v;
        }
        if let Some(v) = self.frequency {
            record.frequency = v;
        }
        if let Some(v) = self.times {
            record.times = v;
        }
        if let Some(v) = self.refill_date {
            record.refill_date = v;
        }
        if let Some(v) = self.pills_remaining {
            record.pills_remaining = v;
        }
        if let Some(v) = self.notes {
            record.notes = v;
        }
        if let Some(v) = self.reminder_enabled {
            record.reminder_enabled = v;
        }
    }
}

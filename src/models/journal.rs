use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{check_range, check_rating, ValidationError};
use super::{NewRecord, Record, RecordPatch};

/// One day's wellbeing check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomJournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub mood: u8,
    pub sleep_quality: u8,
    pub sleep_hours: f64,
    pub stress_level: u8,
    pub energy_level: u8,
    pub exercised: bool,
    pub alcohol_consumed: bool,
    pub missed_medication: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJournalEntry {
    pub date: NaiveDate,
    pub mood: u8,
    pub sleep_quality: u8,
    pub sleep_hours: f64,
    pub stress_level: u8,
    pub energy_level: u8,
    #[serde(default)]
    pub exercised: bool,
    #[serde(default)]
    pub alcohol_consumed: bool,
    #[serde(default)]
    pub missed_medication: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalEntryUpdate {
    pub date: Option<NaiveDate>,
    pub mood: Option<u8>,
    pub sleep_quality: Option<u8>,
    pub sleep_hours: Option<f64>,
    pub stress_level: Option<u8>,
    pub energy_level: Option<u8>,
    pub exercised: Option<bool>,
    pub alcohol_consumed: Option<bool>,
    pub missed_medication: Option<bool>,
    pub notes: Option<Option<String>>,
}

impl Record for SymptomJournalEntry {
    const KIND: &'static str = "journal_entry";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_rating("mood", self.mood)?;
        check_rating("sleepQuality", self.sleep_quality)?;
        check_rating("stressLevel", self.stress_level)?;
        check_rating("energyLevel", self.energy_level)?;
        check_range("sleepHours", self.sleep_hours, 0.0, 24.0)
    }
}

impl NewRecord for NewJournalEntry {
    type Record = SymptomJournalEntry;

    fn into_record(self, id: String) -> SymptomJournalEntry {
        SymptomJournalEntry {
            id,
            date: self.date,
            mood: self.mood,
            sleep_quality: self.sleep_quality,
            sleep_hours: self.sleep_hours,
            stress_level: self.stress_level,
            energy_level: self.energy_level,
            exercised: self.exercised,
            alcohol_consumed: self.alcohol_consumed,
            missed_medication: self.missed_medication,
            notes: self.notes,
        }
    }
}

impl RecordPatch<SymptomJournalEntry> for JournalEntryUpdate {
    fn apply(self, record: &mut SymptomJournalEntry) {
        if let Some(v) = self.date {
            record.date = v;
        }
        if let Some(v) = self.mood {
            record.mood = v;
        }
        if let Some(v) = self.sleep_quality {
            record.sleep_quality = v;
        }
        if let Some(v) = self.sleep_hours {
            record.sleep_hours = v;
        }
        if let Some(v) = self.stress_level {
            record.stress_level = v;
        }
        if let Some(v) = self.energy_level {
            record.energy_level = v;
        }
        if let Some(v) = self.exercised {
            record.exercised = v;
        }
        if let Some(v) = self.alcohol_consumed {
            record.alcohol_consumed = v;
        }
        if let Some(v) = self.missed_medication {
            record.missed_medication = v;
        }
        if let Some(v) = self.notes {
            record.notes = v;
        }
    }
}

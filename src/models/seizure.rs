use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::clock::ClockTime;
use super::enums::SeizureType;
use super::validation::{check_rating, ValidationError};
use super::{NewRecord, Record, RecordPatch};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeizureLog {
    pub id: String,
    pub date: NaiveDate,
    pub time: ClockTime,
    #[serde(rename = "type")]
    pub seizure_type: SeizureType,
    /// Seconds.
    pub duration: u32,
    /// 1 (mild) to 5 (severe).
    pub severity: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSeizure {
    pub date: NaiveDate,
    pub time: ClockTime,
    #[serde(rename = "type")]
    pub seizure_type: SeizureType,
    pub duration: u32,
    pub severity: u8,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeizureUpdate {
    pub date: Option<NaiveDate>,
    pub time: Option<ClockTime>,
    pub seizure_type: Option<SeizureType>,
    pub duration: Option<u32>,
    pub severity: Option<u8>,
    pub triggers: Option<Vec<String>>,
    pub notes: Option<Option<String>>,
}

impl Record for SeizureLog {
    const KIND: &'static str = "seizure";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_rating("severity", self.severity)
    }
}

impl NewRecord for NewSeizure {
    type Record = SeizureLog;

    fn into_record(self, id: String) -> SeizureLog {
        SeizureLog {
            id,
            date: self.date,
            time: self.time,
            seizure_type: self.seizure_type,
            duration: self.duration,
            severity: self.severity,
            triggers: self.triggers,
            notes: self.notes,
        }
    }
}

impl RecordPatch<SeizureLog> for SeizureUpdate {
    fn apply(self, record: &mut SeizureLog) {
        if let Some(v) = self.date {
            record.date = v;
        }
        if let Some(v) = self.time {
            record.time = v;
        }
        if let Some(v) = self.seizure_type {
            record.seizure_type = v;
        }
        if let Some(v) = self.duration {
            record.duration = v;
        }
        if let Some(v) = self.severity {
            record.severity = v;
        }
        if let Some(v) = self.triggers {
            record.triggers = v;
        }
        if let Some(v) = self.notes {
            record.notes = v;
        }
    }
}

/// Triggers offered by the logging form.
pub const COMMON_TRIGGERS: &[&str] = &[
    "Stress",
    "Lack of sleep",
    "Missed medication",
    "Alcohol",
    "Flashing lights",
    "Illness/Fever",
    "Hormonal changes",
    "Skipped meals",
    "Exercise",
    "Unknown",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SeizureLog {
        NewSeizure {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            time: "14:30".parse().unwrap(),
            seizure_type: SeizureType::Focal,
            duration: 45,
            severity: 3,
            triggers: vec!["Stress".into()],
            notes: None,
        }
        .into_record("s-1".into())
    }

    #[test]
    fn serializes_with_stored_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "focal");
        assert_eq!(json["time"], "14:30");
        assert_eq!(json["date"], "2025-03-01");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn missing_triggers_default_to_empty() {
        let json = r#"{"id":"x","date":"2025-03-01","time":"08:00","type":"absence","duration":5,"severity":1}"#;
        let log: SeizureLog = serde_json::from_str(json).unwrap();
        assert!(log.triggers.is_empty());
        assert!(log.notes.is_none());
    }

    #[test]
    fn severity_out_of_range_rejected() {
        let mut log = sample();
        log.severity = 0;
        assert!(log.validate().is_err());
        log.severity = 5;
        assert!(log.validate().is_ok());
    }

    #[test]
    fn patch_merges_only_given_fields() {
        let mut log = sample();
        SeizureUpdate {
            severity: Some(5),
            notes: Some(Some("after poor sleep".into())),
            ..Default::default()
        }
        .apply(&mut log);
        assert_eq!(log.severity, 5);
        assert_eq!(log.duration, 45);
        assert_eq!(log.notes.as_deref(), Some("after poor sleep"));

        SeizureUpdate { notes: Some(None), ..Default::default() }.apply(&mut log);
        assert!(log.notes.is_none());
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::clock::ClockTime;
use super::validation::ValidationError;
use super::{NewRecord, Record, RecordPatch};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub doctor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub date: NaiveDate,
    pub time: ClockTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub title: String,
    pub doctor: String,
    #[serde(default)]
    pub location: Option<String>,
    pub date: NaiveDate,
    pub time: ClockTime,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentUpdate {
    pub title: Option<String>,
    pub doctor: Option<String>,
    pub location: Option<Option<String>>,
    pub date: Option<NaiveDate>,
    pub time: Option<ClockTime>,
    pub notes: Option<Option<String>>,
}

impl Record for Appointment {
    const KIND: &'static str = "appointment";

    fn id(&self) -> &str {
        &self.id
    }

    // Date and time are required by construction.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl NewRecord for NewAppointment {
    type Record = Appointment;

    fn into_record(self, id: String) -> Appointment {
        Appointment {
            id,
            title: self.title,
            doctor: self.doctor,
            location: self.location,
            date: self.date,
            time: self.time,
            notes: self.notes,
        }
    }
}

impl RecordPatch<Appointment> for AppointmentUpdate {
    fn apply(self, record: &mut Appointment) {
        if let Some(v) = self.title {
            record.title = v;
        }
        if let Some(v) = self.doctor {
            record.doctor = v;
        }
        if let Some(v) = self.location {
            record.location = v;
        }
        if let Some(v) = self.date {
            record.date = v;
        }
        if let Some(v) = self.time {
            record.time = v;
        }
        if let Some(v) = self.notes {
            record.notes = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_and_time_are_required_on_load() {
        let missing_time = r#"{"id":"a","title":"Neuro","doctor":"Dr. Osei","date":"2025-05-02"}"#;
        assert!(serde_json::from_str::<Appointment>(missing_time).is_err());
    }

    #[test]
    fn patch_can_clear_location() {
        let mut appt = NewAppointment {
            title: "EEG".into(),
            doctor: "Dr. Osei".into(),
            location: Some("City Clinic".into()),
            date: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            time: "09:15".parse().unwrap(),
            notes: None,
        }
        .into_record("a-1".into());

        AppointmentUpdate { location: Some(None), ..Default::default() }.apply(&mut appt);
        assert!(appt.location.is_none());
        assert_eq!(appt.title, "EEG");
    }
}

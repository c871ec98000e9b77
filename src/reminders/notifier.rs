//! Notification delivery and time source seams for the reminder scheduler.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::models::{ClockTime, Medication};

pub const REMINDER_TITLE: &str = "Medication Reminder";

/// One dose that is due right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderNotification {
    pub medication_id: String,
    pub medication_name: String,
    pub dosage: String,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub title: String,
    pub message: String,
}

impl ReminderNotification {
    pub fn for_medication(medication: &Medication, date: NaiveDate, time: ClockTime) -> Self {
        Self {
            medication_id: medication.id.clone(),
            medication_name: medication.name.clone(),
            dosage: medication.dosage.clone(),
            date,
            time,
            title: REMINDER_TITLE.to_string(),
            message: format!("Time to take {} ({})", medication.name, medication.dosage),
        }
    }
}

/// Delivers a due reminder to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &ReminderNotification);
}

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Writes reminders to the log. Used by the headless daemon.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &ReminderNotification) {
        tracing::info!(
            medication_id = %notification.medication_id,
            time = %notification.time,
            "{}: {}",
            notification.title,
            notification.message
        );
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

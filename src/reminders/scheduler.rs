//! Reminder state machine: idle/armed, one notification per medication per minute.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use super::notifier::ReminderNotification;
use crate::models::{ClockTime, Medication};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Armed,
}

#[derive(Debug)]
pub struct ReminderScheduler {
    state: SchedulerState,
    /// Minute the `fired` set belongs to.
    minute: Option<(NaiveDate, ClockTime)>,
    fired: HashSet<String>,
}

impl Default for ReminderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Idle,
            minute: None,
            fired: HashSet::new(),
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == SchedulerState::Armed
    }

    pub fn arm(&mut self) {
        if self.state == SchedulerState::Idle {
            tracing::debug!("Reminder scheduler armed");
        }
        self.state = SchedulerState::Armed;
    }

    pub fn disarm(&mut self) {
        if self.state == SchedulerState::Armed {
            tracing::debug!("Reminder scheduler disarmed");
        }
        self.state = SchedulerState::Idle;
        self.minute = None;
        self.fired.clear();
    }

    /// Medications whose schedule contains the current minute and that have
    /// not fired yet in this minute. Idle schedulers never report anything.
    pub fn due_reminders(
        &mut self,
        now: NaiveDateTime,
        medications: &[Medication],
    ) -> Vec<ReminderNotification> {
        if self.state == SchedulerState::Idle {
            return Vec::new();
        }

        let date = now.date();
        let time = ClockTime::from_time(now.time());
        if self.minute != Some((date, time)) {
            self.minute = Some((date, time));
            self.fired.clear();
        }

        let fired = &mut self.fired;
        medications
            .iter()
            .filter(|m| m.reminder_enabled && m.times.contains(&time))
            .filter(|m| fired.insert(m.id.clone()))
            .map(|m| ReminderNotification::for_medication(m, date, time))
            .collect()
    }
}

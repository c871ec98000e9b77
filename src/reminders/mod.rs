//! Medication reminders: a per-minute state machine driven by a background
//! thread, with pluggable notification delivery and time source.

pub mod background;
pub mod notifier;
pub mod scheduler;

pub use background::{start_reminder_scheduler, ReminderConfig, ReminderSchedulerHandle};
pub use notifier::{Clock, Notifier, ReminderNotification, SystemClock, TracingNotifier, REMINDER_TITLE};
pub use scheduler::{ReminderScheduler, SchedulerState};

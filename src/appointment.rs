//! Appointment views: upcoming and past visits relative to today.

use chrono::NaiveDate;

use crate::models::Appointment;

/// Appointments on or after `today`, soonest first.
pub fn upcoming(appointments: &[Appointment], today: NaiveDate) -> Vec<&Appointment> {
    let mut out: Vec<&Appointment> = appointments.iter().filter(|a| a.date >= today).collect();
    out.sort_by_key(|a| (a.date, a.time));
    out
}

/// Appointments before `today`, most recent first.
pub fn past(appointments: &[Appointment], today: NaiveDate) -> Vec<&Appointment> {
    let mut out: Vec<&Appointment> = appointments.iter().filter(|a| a.date < today).collect();
    out.sort_by(|a, b| (b.date, b.time).cmp(&(a.date, a.time)));
    out
}

/// Next `n` upcoming appointments.
pub fn next_appointments(appointments: &[Appointment], today: NaiveDate, n: usize) -> Vec<&Appointment> {
    let mut out = upcoming(appointments, today);
    out.truncate(n);
    out
}

//! Health report exporter.
//!
//! Builds a `HealthReport` from a store snapshot and renders it as PDF
//! (doctor-visit handout) or JSON. Text lines are produced here so both
//! renderers and tests share the exact wording.

pub mod pdf;
pub mod types;

pub use pdf::{export_report_to_file, generate_report_pdf, report_filename};
pub use types::*;

use chrono::NaiveDate;

use crate::analytics::{summarize, TriggerCount};
use crate::config::REPORT_RECENT_SEIZURES;
use crate::models::{ReportRange, SeizureLog};
use crate::store::StoreSnapshot;

pub const REPORT_TITLE: &str = "SeizureTrack Health Report";
pub const REPORT_DISCLAIMER: &str =
    "This report is for informational purposes. Please consult your healthcare provider for medical advice.";

pub fn build_report(snapshot: &StoreSnapshot<'_>, range: ReportRange, today: NaiveDate) -> HealthReport {
    let summary = summarize(snapshot, range, today);

    let mut recent: Vec<SeizureLog> = snapshot
        .seizures
        .iter()
        .filter(|s| s.date >= summary.start && s.date <= summary.end)
        .cloned()
        .collect();
    recent.sort_by(|a, b| (b.date, b.time).cmp(&(a.date, a.time)));
    recent.truncate(REPORT_RECENT_SEIZURES);

    let medications = snapshot
        .medications
        .iter()
        .map(|m| ReportMedication {
            name: m.name.clone(),
            dosage: m.dosage.clone(),
            frequency: m.frequency.clone(),
        })
        .collect();

    tracing::debug!(range = range.as_str(), total = summary.total, "Report built");

    HealthReport {
        title: REPORT_TITLE.to_string(),
        generated_on: today,
        range,
        period_label: format!("Last {}", range.label()),
        summary,
        medications,
        recent_seizures: recent,
        disclaimer: REPORT_DISCLAIMER.to_string(),
    }
}

pub fn report_to_json(report: &HealthReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

// ── Text lines ──────────────────────────

pub fn generated_line(report: &HealthReport) -> String {
    format!("Generated on {}", report.generated_on.format("%B %-d, %Y"))
}

pub fn period_line(report: &HealthReport) -> String {
    format!("Report Period: {}", report.period_label)
}

pub fn summary_lines(report: &HealthReport) -> Vec<String> {
    vec![
        format!("Total Seizures: {}", report.summary.total),
        format!("Average Duration: {} seconds", report.summary.average_duration),
        format!("Average Severity: {:.1}/5", report.summary.average_severity),
        format!("Active Medications: {}", report.active_medication_count()),
    ]
}

pub fn medication_lines(report: &HealthReport) -> Vec<String> {
    if report.medications.is_empty() {
        return vec!["No medications recorded".to_string()];
    }
    report
        .medications
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}. {} - {} ({})", i + 1, m.name, m.dosage, m.frequency))
        .collect()
}

pub fn seizure_line(seizure: &SeizureLog) -> String {
    format!(
        "{} at {} - {} ({}s, severity {}/5)",
        seizure.date.format("%b %-d, %Y"),
        seizure.time,
        seizure.seizure_type.label(),
        seizure.duration,
        seizure.severity
    )
}

pub fn trigger_line(trigger: &TriggerCount) -> String {
    format!("- {}: {} occurrence(s)", trigger.trigger, trigger.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, Medication, SeizureType};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn seizure(id: &str, date: NaiveDate, time: &str, triggers: &[&str]) -> SeizureLog {
        SeizureLog {
            id: id.into(),
            date,
            time: time.parse().unwrap(),
            seizure_type: SeizureType::TonicClonic,
            duration: 60,
            severity: 3,
            triggers: triggers.iter().map(|s| s.to_string()).collect(),
            notes: None,
        }
    }

    fn medication(name: &str) -> Medication {
        Medication {
            id: format!("id-{name}"),
            name: name.into(),
            dosage: "100mg".into(),
            frequency: "Twice daily".into(),
            times: vec![ClockTime::new(8, 0).unwrap()],
            refill_date: None,
            pills_remaining: None,
            notes: None,
            reminder_enabled: false,
        }
    }

    fn snapshot<'a>(seizures: &'a [SeizureLog], medications: &'a [Medication]) -> StoreSnapshot<'a> {
        StoreSnapshot {
            seizures,
            medications,
            appointments: &[],
            reminders: &[],
            emergency_contacts: &[],
            journal: &[],
        }
    }

    #[test]
    fn report_has_header_and_disclaimer() {
        let report = build_report(&snapshot(&[], &[]), ReportRange::Last30Days, d(2025, 3, 1));
        assert_eq!(report.title, "SeizureTrack Health Report");
        assert_eq!(report.period_label, "Last 30 days");
        assert_eq!(generated_line(&report), "Generated on March 1, 2025");
        assert_eq!(period_line(&report), "Report Period: Last 30 days");
        assert_eq!(report.disclaimer, REPORT_DISCLAIMER);
        assert_eq!(medication_lines(&report), vec!["No medications recorded"]);
    }

    #[test]
    fn recent_seizures_newest_first_and_capped() {
        let today = d(2025, 3, 31);
        let logs: Vec<SeizureLog> = (1..=14)
            .map(|day| seizure(&format!("s{day}"), d(2025, 3, day), "09:00", &[]))
            .collect();
        let report = build_report(&snapshot(&logs, &[]), ReportRange::Last30Days, today);

        assert_eq!(report.summary.total, 14);
        assert_eq!(report.recent_seizures.len(), 10);
        assert_eq!(report.recent_seizures[0].id, "s14");
        assert_eq!(report.recent_seizures[9].id, "s5");
    }

    #[test]
    fn out_of_range_seizures_are_excluded_from_listing() {
        let today = d(2025, 3, 31);
        let logs = vec![
            seizure("in", d(2025, 3, 20), "09:00", &[]),
            seizure("old", d(2024, 1, 1), "09:00", &[]),
        ];
        let report = build_report(&snapshot(&logs, &[]), ReportRange::Last7Days, today);
        assert!(report.recent_seizures.is_empty());
        assert_eq!(report.summary.total, 0);
    }

    #[test]
    fn lines_match_printed_format() {
        let meds = vec![medication("Lamotrigine"), medication("Clobazam")];
        let logs = vec![seizure("a", d(2025, 3, 1), "14:30", &["Stress"])];
        let report = build_report(&snapshot(&logs, &meds), ReportRange::Last30Days, d(2025, 3, 2));

        assert_eq!(
            medication_lines(&report),
            vec![
                "1. Lamotrigine - 100mg (Twice daily)",
                "2. Clobazam - 100mg (Twice daily)",
            ]
        );
        assert_eq!(
            seizure_line(&report.recent_seizures[0]),
            "Mar 1, 2025 at 14:30 - Tonic-Clonic (60s, severity 3/5)"
        );
        assert_eq!(trigger_line(&report.summary.triggers[0]), "- Stress: 1 occurrence(s)");
        assert_eq!(
            summary_lines(&report),
            vec![
                "Total Seizures: 1",
                "Average Duration: 60 seconds",
                "Average Severity: 3.0/5",
                "Active Medications: 2",
            ]
        );
    }

    #[test]
    fn json_export_exposes_summary_shapes() {
        let logs = vec![seizure("a", d(2025, 3, 1), "14:30", &["Stress"])];
        let report = build_report(&snapshot(&logs, &[]), ReportRange::Last7Days, d(2025, 3, 2));
        let json = report_to_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["range"], "7d");
        assert_eq!(value["summary"]["total"], 1);
        assert_eq!(value["summary"]["types"][0]["label"], "Tonic-Clonic");
        assert_eq!(value["summary"]["triggers"][0]["trigger"], "Stress");
        assert_eq!(value["summary"]["frequency"].as_array().unwrap().len(), 8);
        assert_eq!(value["recentSeizures"][0]["type"], "tonic-clonic");
    }
}

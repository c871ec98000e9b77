//! Symptom journal views: daily lookup and rating summaries.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::SymptomJournalEntry;

/// First entry for `date` in store order. Entries are kept newest first,
/// so this is the latest entry recorded for that day.
pub fn entry_on(entries: &[SymptomJournalEntry], date: NaiveDate) -> Option<&SymptomJournalEntry> {
    entries.iter().find(|e| e.date == date)
}

/// Averages over a set of check-ins, one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalAverages {
    pub entries: usize,
    pub mood: f64,
    pub sleep_quality: f64,
    pub sleep_hours: f64,
    pub stress_level: f64,
    pub energy_level: f64,
    pub missed_medication_days: usize,
}

pub fn averages(entries: &[SymptomJournalEntry]) -> Option<JournalAverages> {
    if entries.is_empty() {
        return None;
    }
    let n = entries.len() as f64;
    let mean = |f: fn(&SymptomJournalEntry) -> f64| {
        let avg = entries.iter().map(f).sum::<f64>() / n;
        (avg * 10.0).round() / 10.0
    };
    Some(JournalAverages {
        entries: entries.len(),
        mood: mean(|e| e.mood as f64),
        sleep_quality: mean(|e| e.sleep_quality as f64),
        sleep_hours: mean(|e| e.sleep_hours),
        stress_level: mean(|e| e.stress_level as f64),
        energy_level: mean(|e| e.energy_level as f64),
        missed_medication_days: entries.iter().filter(|e| e.missed_medication).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, day: u32, mood: u8, sleep_hours: f64, missed: bool) -> SymptomJournalEntry {
        SymptomJournalEntry {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(2025, 8, day).unwrap(),
            mood,
            sleep_quality: 3,
            sleep_hours,
            stress_level: 2,
            energy_level: 4,
            exercised: false,
            alcohol_consumed: false,
            missed_medication: missed,
            notes: None,
        }
    }

    #[test]
    fn entry_on_returns_first_match() {
        let entries = [entry("newer", 3, 4, 7.0, false), entry("older", 3, 2, 6.0, false)];
        let day = NaiveDate::from_ymd_opt(2025, 8, 3).unwrap();
        assert_eq!(entry_on(&entries, day).unwrap().id, "newer");
        assert!(entry_on(&entries, day.succ_opt().unwrap()).is_none());
    }

    #[test]
    fn averages_round_to_one_decimal() {
        let entries = [
            entry("a", 1, 4, 7.0, false),
            entry("b", 2, 3, 6.5, true),
            entry("c", 3, 3, 8.0, false),
        ];
        let avg = averages(&entries).unwrap();
        assert_eq!(avg.entries, 3);
        assert_eq!(avg.mood, 3.3);
        assert_eq!(avg.sleep_hours, 7.2);
        assert_eq!(avg.energy_level, 4.0);
        assert_eq!(avg.missed_medication_days, 1);
    }

    #[test]
    fn averages_of_nothing_is_none() {
        assert!(averages(&[]).is_none());
    }
}

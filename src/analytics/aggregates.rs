//! Aggregations over seizure logs. All functions are pure: the caller
//! supplies `today` so results are reproducible.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use super::types::*;
use crate::config::REPORT_TOP_TRIGGERS;
use crate::models::{ReportRange, SeizureLog, SeizureType};
use crate::store::StoreSnapshot;

/// Seizures dated within `[start, end]`, preserving input order.
pub fn filter_in_range(seizures: &[SeizureLog], start: NaiveDate, end: NaiveDate) -> Vec<&SeizureLog> {
    seizures
        .iter()
        .filter(|s| s.date >= start && s.date <= end)
        .collect()
}

pub fn count_between(seizures: &[SeizureLog], start: NaiveDate, end: NaiveDate) -> usize {
    seizures
        .iter()
        .filter(|s| s.date >= start && s.date <= end)
        .count()
}

pub fn seizure_trend(seizures: &[SeizureLog], today: NaiveDate) -> Trend {
    let current = count_between(seizures, today - Duration::days(6), today);
    let previous = count_between(
        seizures,
        today - Duration::days(13),
        today - Duration::days(7),
    );
    Trend::new(current, previous)
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Chart buckets from the range start through `today`.
///
/// Buckets count every seizure given, not only those in range, so a
/// partially covered first week still shows its full count.
pub fn frequency_series(seizures: &[SeizureLog], range: ReportRange, today: NaiveDate) -> Vec<FrequencyPoint> {
    let start = range.start(today);

    if range.is_daily() {
        let fmt = if range == ReportRange::Last7Days { "%a" } else { "%b %-d" };
        return start
            .iter_days()
            .take_while(|day| *day <= today)
            .map(|day| FrequencyPoint {
                label: day.format(fmt).to_string(),
                start: day,
                count: seizures.iter().filter(|s| s.date == day).count(),
            })
            .collect();
    }

    let last_week = week_start(today);
    let mut points = Vec::new();
    let mut week = week_start(start);
    while week <= last_week {
        let week_end = week + Duration::days(6);
        points.push(FrequencyPoint {
            label: week.format("%b %-d").to_string(),
            start: week,
            count: count_between(seizures, week, week_end),
        });
        week += Duration::weeks(1);
    }
    points
}

/// Counts per seizure type, in the order types are first seen.
pub fn type_distribution<'a, I>(seizures: I) -> Vec<TypeCount>
where
    I: IntoIterator<Item = &'a SeizureLog>,
{
    let mut order: Vec<SeizureType> = Vec::new();
    let mut counts: HashMap<SeizureType, usize> = HashMap::new();
    for s in seizures {
        let count = counts.entry(s.seizure_type).or_insert(0);
        if *count == 0 {
            order.push(s.seizure_type);
        }
        *count += 1;
    }
    order
        .into_iter()
        .map(|t| TypeCount {
            seizure_type: t,
            label: t.label().to_string(),
            count: counts.get(&t).copied().unwrap_or(0),
        })
        .collect()
}

/// Counts per trigger, in the order triggers are first seen. A seizure with
/// several triggers counts toward each of them.
pub fn trigger_distribution<'a, I>(seizures: I) -> Vec<TriggerCount>
where
    I: IntoIterator<Item = &'a SeizureLog>,
{
    let mut out: Vec<TriggerCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for s in seizures {
        for trigger in &s.triggers {
            match index.get(trigger.as_str()) {
                Some(&i) => out[i].count += 1,
                None => {
                    index.insert(trigger.as_str(), out.len());
                    out.push(TriggerCount {
                        trigger: trigger.clone(),
                        count: 1,
                    });
                }
            }
        }
    }
    out
}

/// The `n` most frequent triggers. Ties keep first-seen order.
pub fn top_triggers<'a, I>(seizures: I, n: usize) -> Vec<TriggerCount>
where
    I: IntoIterator<Item = &'a SeizureLog>,
{
    let mut ranked = trigger_distribution(seizures);
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

/// Mean duration in whole seconds; 0 when empty.
pub fn average_duration(seizures: &[&SeizureLog]) -> u32 {
    if seizures.is_empty() {
        return 0;
    }
    let total: u64 = seizures.iter().map(|s| s.duration as u64).sum();
    (total as f64 / seizures.len() as f64).round() as u32
}

/// Mean severity to one decimal place; 0 when empty.
pub fn average_severity(seizures: &[&SeizureLog]) -> f64 {
    if seizures.is_empty() {
        return 0.0;
    }
    let total: u64 = seizures.iter().map(|s| s.severity as u64).sum();
    let mean = total as f64 / seizures.len() as f64;
    (mean * 10.0).round() / 10.0
}

pub fn summarize(snapshot: &StoreSnapshot<'_>, range: ReportRange, today: NaiveDate) -> SeizureSummary {
    let start = range.start(today);
    let filtered = filter_in_range(snapshot.seizures, start, today);

    SeizureSummary {
        range,
        start,
        end: today,
        total: filtered.len(),
        average_duration: average_duration(&filtered),
        average_severity: average_severity(&filtered),
        frequency: frequency_series(snapshot.seizures, range, today),
        types: type_distribution(filtered.iter().copied()),
        triggers: top_triggers(filtered.iter().copied(), REPORT_TOP_TRIGGERS),
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

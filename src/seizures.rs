//! Seizure log search.

use crate::models::SeizureLog;

/// Case-insensitive substring match on type, notes and triggers.
/// A blank query matches everything.
pub fn search<'a>(seizures: &'a [SeizureLog], query: &str) -> Vec<&'a SeizureLog> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return seizures.iter().collect();
    }
    seizures.iter().filter(|s| matches_query(s, &needle)).collect()
}

fn matches_query(seizure: &SeizureLog, needle: &str) -> bool {
    seizure.seizure_type.as_str().contains(needle)
        || seizure.seizure_type.label().to_lowercase().contains(needle)
        || seizure
            .notes
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(needle))
        || seizure
            .triggers
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
}

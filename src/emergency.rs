//! Emergency contact views.

use crate::models::{EmergencyContact, SeizureLog};

/// Seizures at or above this severity count as severe.
pub const SEVERE_SEIZURE_THRESHOLD: u8 = 4;

pub fn primary_contacts(contacts: &[EmergencyContact]) -> Vec<&EmergencyContact> {
    contacts.iter().filter(|c| c.is_primary).collect()
}

pub fn other_contacts(contacts: &[EmergencyContact]) -> Vec<&EmergencyContact> {
    contacts.iter().filter(|c| !c.is_primary).collect()
}

pub fn is_severe(seizure: &SeizureLog) -> bool {
    seizure.severity >= SEVERE_SEIZURE_THRESHOLD
}

/// Contacts who asked to hear about this seizure. Empty unless it is severe.
pub fn contacts_for_severe_seizure<'a>(
    contacts: &'a [EmergencyContact],
    seizure: &SeizureLog,
) -> Vec<&'a EmergencyContact> {
    if !is_severe(seizure) {
        return Vec::new();
    }
    contacts
        .iter()
        .filter(|c| c.notify_on_severe_seizure)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeizureType;
    use chrono::NaiveDate;

    fn contact(id: &str, primary: bool, notify: bool) -> EmergencyContact {
        EmergencyContact {
            id: id.into(),
            name: id.to_uppercase(),
            relationship: "Friend".into(),
            phone: "555-0199".into(),
            email: None,
            is_primary: primary,
            notify_on_severe_seizure: notify,
        }
    }

    fn seizure(severity: u8) -> SeizureLog {
        SeizureLog {
            id: "s".into(),
            date: NaiveDate::from_ymd_opt(2025, 2, 2).unwrap(),
            time: "07:45".parse().unwrap(),
            seizure_type: SeizureType::TonicClonic,
            duration: 120,
            severity,
            triggers: vec![],
            notes: None,
        }
    }

    #[test]
    fn splits_primary_and_other() {
        let contacts = [contact("a", true, false), contact("b", false, true), contact("c", true, true)];
        assert_eq!(primary_contacts(&contacts).len(), 2);
        assert_eq!(other_contacts(&contacts)[0].id, "b");
    }

    #[test]
    fn severe_seizure_notifies_opted_in_contacts() {
        let contacts = [contact("a", true, false), contact("b", false, true)];
        let notify = contacts_for_severe_seizure(&contacts, &seizure(4));
        assert_eq!(notify.len(), 1);
        assert_eq!(notify[0].id, "b");
    }

    #[test]
    fn mild_seizure_notifies_nobody() {
        let contacts = [contact("b", false, true)];
        assert!(contacts_for_severe_seizure(&contacts, &seizure(3)).is_empty());
        assert!(is_severe(&seizure(5)));
    }
}

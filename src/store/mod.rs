//! Record store: in-process owner of the six health record collections.
//!
//! Every mutation rewrites the affected collection in full under its fixed
//! key. Collections load independently: a corrupt or unreadable entry
//! leaves that collection empty and the others intact. Write failures are
//! reported as `PersistenceWarning`s while the in-memory state stays
//! authoritative for the session.

pub mod collection;

use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::db::{DatabaseError, KeyValueStore, SqliteKeyValueStore};
use crate::models::*;
use collection::{Collection, LoadFailure};

pub const SEIZURES_KEY: &str = "health_seizures";
pub const MEDICATIONS_KEY: &str = "health_medications";
pub const APPOINTMENTS_KEY: &str = "health_appointments";
pub const REMINDERS_KEY: &str = "health_reminders";
pub const CONTACTS_KEY: &str = "health_emergency_contacts";
pub const JOURNAL_KEY: &str = "health_symptom_journal";

/// Store shared with the reminder thread.
pub type SharedStore = Arc<Mutex<RecordStore>>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid record: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceOp {
    Load,
    Save,
}

/// A non-fatal storage problem, surfaced once through `take_warnings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceWarning {
    pub key: &'static str,
    pub operation: PersistenceOp,
    pub message: String,
}

/// Read-only view over every collection at one point in time.
#[derive(Debug, Clone, Copy)]
pub struct StoreSnapshot<'a> {
    pub seizures: &'a [SeizureLog],
    pub medications: &'a [Medication],
    pub appointments: &'a [Appointment],
    pub reminders: &'a [MedicationReminder],
    pub emergency_contacts: &'a [EmergencyContact],
    pub journal: &'a [SymptomJournalEntry],
}

pub struct RecordStore {
    kv: Box<dyn KeyValueStore>,
    seizures: Collection<SeizureLog>,
    medications: Collection<Medication>,
    appointments: Collection<Appointment>,
    reminders: Collection<MedicationReminder>,
    emergency_contacts: Collection<EmergencyContact>,
    journal: Collection<SymptomJournalEntry>,
    warnings: Vec<PersistenceWarning>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn build<N: NewRecord>(payload: N) -> Result<N::Record, StoreError> {
    let record = payload.into_record(new_id());
    record.validate()?;
    Ok(record)
}

fn load_one<T: Record>(
    kv: &dyn KeyValueStore,
    key: &'static str,
    warnings: &mut Vec<PersistenceWarning>,
) -> Collection<T> {
    let (collection, failure) = Collection::load(kv, key);
    if let Some(failure) = failure {
        let message = match failure {
            LoadFailure::Read(e) => e.to_string(),
            LoadFailure::Decode(e) => format!("Malformed stored data: {e}"),
        };
        tracing::warn!(key, error = %message, "Collection could not be loaded, starting empty");
        warnings.push(PersistenceWarning {
            key,
            operation: PersistenceOp::Load,
            message,
        });
    }
    collection
}

fn persist<T: Record>(
    kv: &mut dyn KeyValueStore,
    warnings: &mut Vec<PersistenceWarning>,
    collection: &Collection<T>,
) {
    if let Err(e) = collection.persist(kv) {
        tracing::warn!(key = collection.key(), error = %e, "Failed to persist collection");
        warnings.push(PersistenceWarning {
            key: collection.key(),
            operation: PersistenceOp::Save,
            message: e.to_string(),
        });
    }
}

impl RecordStore {
    /// Load every collection from the given medium.
    pub fn open(kv: Box<dyn KeyValueStore>) -> Self {
        let mut warnings = Vec::new();
        let seizures = load_one(kv.as_ref(), SEIZURES_KEY, &mut warnings);
        let medications = load_one(kv.as_ref(), MEDICATIONS_KEY, &mut warnings);
        let appointments = load_one(kv.as_ref(), APPOINTMENTS_KEY, &mut warnings);
        let reminders = load_one(kv.as_ref(), REMINDERS_KEY, &mut warnings);
        let emergency_contacts = load_one(kv.as_ref(), CONTACTS_KEY, &mut warnings);
        let journal = load_one(kv.as_ref(), JOURNAL_KEY, &mut warnings);

        let store = Self {
            kv,
            seizures,
            medications,
            appointments,
            reminders,
            emergency_contacts,
            journal,
            warnings,
        };
        tracing::info!(
            seizures = store.seizures.len(),
            medications = store.medications.len(),
            appointments = store.appointments.len(),
            reminders = store.reminders.len(),
            contacts = store.emergency_contacts.len(),
            journal = store.journal.len(),
            "Record store loaded"
        );
        store
    }

    /// Open a SQLite-backed store at `path`.
    pub fn open_path(path: &Path) -> Result<Self, StoreError> {
        let kv = SqliteKeyValueStore::open(path)?;
        Ok(Self::open(Box::new(kv)))
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    /// Drain storage warnings accumulated since the last call.
    pub fn take_warnings(&mut self) -> Vec<PersistenceWarning> {
        std::mem::take(&mut self.warnings)
    }

    pub fn snapshot(&self) -> StoreSnapshot<'_> {
        StoreSnapshot {
            seizures: self.seizures.as_slice(),
            medications: self.medications.as_slice(),
            appointments: self.appointments.as_slice(),
            reminders: self.reminders.as_slice(),
            emergency_contacts: self.emergency_contacts.as_slice(),
            journal: self.journal.as_slice(),
        }
    }

    // ── Read accessors ──────────────────────────

    /// Newest first.
    pub fn seizures(&self) -> &[SeizureLog] {
        self.seizures.as_slice()
    }

    pub fn medications(&self) -> &[Medication] {
        self.medications.as_slice()
    }

    pub fn appointments(&self) -> &[Appointment] {
        self.appointments.as_slice()
    }

    pub fn reminders(&self) -> &[MedicationReminder] {
        self.reminders.as_slice()
    }

    pub fn emergency_contacts(&self) -> &[EmergencyContact] {
        self.emergency_contacts.as_slice()
    }

    /// Newest first.
    pub fn journal(&self) -> &[SymptomJournalEntry] {
        self.journal.as_slice()
    }

    pub fn seizure(&self, id: &str) -> Option<&SeizureLog> {
        self.seizures.get(id)
    }

    pub fn medication(&self, id: &str) -> Option<&Medication> {
        self.medications.get(id)
    }

    /// The newest journal entry recorded for `date`. More than one entry per
    /// day is allowed; older duplicates are shadowed here.
    pub fn journal_entry_on(&self, date: NaiveDate) -> Option<&SymptomJournalEntry> {
        crate::journal::entry_on(self.journal.as_slice(), date)
    }

    // ── Seizures ──────────────────────────

    pub fn add_seizure(&mut self, payload: NewSeizure) -> Result<SeizureLog, StoreError> {
        let record = build(payload)?;
        self.seizures.insert_front(record.clone());
        tracing::debug!(kind = SeizureLog::KIND, id = %record.id, "Record added");
        persist(self.kv.as_mut(), &mut self.warnings, &self.seizures);
        Ok(record)
    }

    pub fn update_seizure(&mut self, id: &str, patch: SeizureUpdate) -> Result<(), StoreError> {
        if self.seizures.update(id, patch)? {
            tracing::debug!(kind = SeizureLog::KIND, id, "Record updated");
            persist(self.kv.as_mut(), &mut self.warnings, &self.seizures);
        }
        Ok(())
    }

    pub fn delete_seizure(&mut self, id: &str) {
        if self.seizures.remove(id) {
            tracing::debug!(kind = SeizureLog::KIND, id, "Record deleted");
            persist(self.kv.as_mut(), &mut self.warnings, &self.seizures);
        }
    }

    // ── Medications ──────────────────────────

    pub fn add_medication(&mut self, payload: NewMedication) -> Result<Medication, StoreError> {
        let record = build(payload)?;
        self.medications.push(record.clone());
        tracing::debug!(kind = Medication::KIND, id = %record.id, "Record added");
        persist(self.kv.as_mut(), &mut self.warnings, &self.medications);
        Ok(record)
    }

    pub fn update_medication(&mut self, id: &str, patch: MedicationUpdate) -> Result<(), StoreError> {
        if self.medications.update(id, patch)? {
            tracing::debug!(kind = Medication::KIND, id, "Record updated");
            persist(self.kv.as_mut(), &mut self.warnings, &self.medications);
        }
        Ok(())
    }

    /// Deletes the medication and every reminder that refers to it.
    ///
    /// The two collections are written one after the other; a failure
    /// between the writes can leave orphaned reminders on disk.
    pub fn delete_medication(&mut self, id: &str) {
        if !self.medications.remove(id) {
            return;
        }
        tracing::debug!(kind = Medication::KIND, id, "Record deleted");
        persist(self.kv.as_mut(), &mut self.warnings, &self.medications);

        let dropped = self.reminders.retain(|r| r.medication_id != id);
        if dropped > 0 {
            tracing::debug!(medication_id = id, dropped, "Cascaded reminder delete");
            persist(self.kv.as_mut(), &mut self.warnings, &self.reminders);
        }
    }

    // ── Appointments ──────────────────────────

    pub fn add_appointment(&mut self, payload: NewAppointment) -> Result<Appointment, StoreError> {
        let record = build(payload)?;
        self.appointments.push(record.clone());
        tracing::debug!(kind = Appointment::KIND, id = %record.id, "Record added");
        persist(self.kv.as_mut(), &mut self.warnings, &self.appointments);
        Ok(record)
    }

    pub fn update_appointment(&mut self, id: &str, patch: AppointmentUpdate) -> Result<(), StoreError> {
        if self.appointments.update(id, patch)? {
            tracing::debug!(kind = Appointment::KIND, id, "Record updated");
            persist(self.kv.as_mut(), &mut self.warnings, &self.appointments);
        }
        Ok(())
    }

    pub fn delete_appointment(&mut self, id: &str) {
        if self.appointments.remove(id) {
            tracing::debug!(kind = Appointment::KIND, id, "Record deleted");
            persist(self.kv.as_mut(), &mut self.warnings, &self.appointments);
        }
    }

    // ── Emergency contacts ──────────────────────────

    pub fn add_emergency_contact(
        &mut self,
        payload: NewEmergencyContact,
    ) -> Result<EmergencyContact, StoreError> {
        let record = build(payload)?;
        self.emergency_contacts.push(record.clone());
        tracing::debug!(kind = EmergencyContact::KIND, id = %record.id, "Record added");
        persist(self.kv.as_mut(), &mut self.warnings, &self.emergency_contacts);
        Ok(record)
    }

    pub fn update_emergency_contact(
        &mut self,
        id: &str,
        patch: EmergencyContactUpdate,
    ) -> Result<(), StoreError> {
        if self.emergency_contacts.update(id, patch)? {
            tracing::debug!(kind = EmergencyContact::KIND, id, "Record updated");
            persist(self.kv.as_mut(), &mut self.warnings, &self.emergency_contacts);
        }
        Ok(())
    }

    pub fn delete_emergency_contact(&mut self, id: &str) {
        if self.emergency_contacts.remove(id) {
            tracing::debug!(kind = EmergencyContact::KIND, id, "Record deleted");
            persist(self.kv.as_mut(), &mut self.warnings, &self.emergency_contacts);
        }
    }

    // ── Symptom journal ──────────────────────────

    pub fn add_journal_entry(
        &mut self,
        payload: NewJournalEntry,
    ) -> Result<SymptomJournalEntry, StoreError> {
        let record = build(payload)?;
        self.journal.insert_front(record.clone());
        tracing::debug!(kind = SymptomJournalEntry::KIND, id = %record.id, "Record added");
        persist(self.kv.as_mut(), &mut self.warnings, &self.journal);
        Ok(record)
    }

    pub fn update_journal_entry(&mut self, id: &str, patch: JournalEntryUpdate) -> Result<(), StoreError> {
        if self.journal.update(id, patch)? {
            tracing::debug!(kind = SymptomJournalEntry::KIND, id, "Record updated");
            persist(self.kv.as_mut(), &mut self.warnings, &self.journal);
        }
        Ok(())
    }

    pub fn delete_journal_entry(&mut self, id: &str) {
        if self.journal.remove(id) {
            tracing::debug!(kind = SymptomJournalEntry::KIND, id, "Record deleted");
            persist(self.kv.as_mut(), &mut self.warnings, &self.journal);
        }
    }

    // ── Medication reminders ──────────────────────────

    /// Upsert keyed on (medication_id, date, time): flips `taken` on the
    /// existing reminder or appends a new one.
    pub fn mark_medication_taken(
        &mut self,
        medication_id: &str,
        date: NaiveDate,
        time: ClockTime,
        taken: bool,
    ) -> MedicationReminder {
        let existing = self
            .reminders
            .as_slice()
            .iter()
            .find(|r| r.matches(medication_id, date, time))
            .cloned();

        let reminder = match existing {
            Some(mut reminder) => {
                if reminder.taken != taken {
                    reminder.taken = taken;
                    self.reminders.modify_where(|r| r.id == reminder.id, |r| r.taken = taken);
                    persist(self.kv.as_mut(), &mut self.warnings, &self.reminders);
                }
                reminder
            }
            None => {
                let reminder = MedicationReminder {
                    id: new_id(),
                    medication_id: medication_id.to_string(),
                    date,
                    time,
                    taken,
                };
                self.reminders.push(reminder.clone());
                persist(self.kv.as_mut(), &mut self.warnings, &self.reminders);
                reminder
            }
        };
        tracing::debug!(medication_id, %date, %time, taken, "Dose marked");
        reminder
    }

    pub fn delete_reminder(&mut self, id: &str) {
        if self.reminders.remove(id) {
            tracing::debug!(kind = MedicationReminder::KIND, id, "Record deleted");
            persist(self.kv.as_mut(), &mut self.warnings, &self.reminders);
        }
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryKeyValueStore;

    /// Medium whose writes always fail (quota exceeded).
    struct FullDisk;

    impl KeyValueStore for FullDisk {
        fn get(&self, _key: &str) -> Result<Option<String>, DatabaseError> {
            Ok(None)
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), DatabaseError> {
            Err(DatabaseError::Unavailable("quota exceeded".into()))
        }
        fn remove(&mut self, _key: &str) -> Result<(), DatabaseError> {
            Ok(())
        }
    }

    fn memory_store() -> RecordStore {
        RecordStore::open(Box::new(MemoryKeyValueStore::new()))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn new_seizure(severity: u8, duration: u32) -> NewSeizure {
        NewSeizure {
            date: date(2025, 3, 1),
            time: t("14:30"),
            seizure_type: SeizureType::TonicClonic,
            duration,
            severity,
            triggers: vec!["Stress".into()],
            notes: None,
        }
    }

    fn new_medication(name: &str) -> NewMedication {
        NewMedication {
            name: name.into(),
            dosage: "100mg".into(),
            frequency: "Twice daily".into(),
            times: vec![t("08:00"), t("20:00")],
            refill_date: None,
            pills_remaining: Some(30),
            notes: None,
            reminder_enabled: true,
        }
    }

    fn new_journal(day: u32) -> NewJournalEntry {
        NewJournalEntry {
            date: date(2025, 3, day),
            mood: 3,
            sleep_quality: 3,
            sleep_hours: 7.0,
            stress_level: 2,
            energy_level: 3,
            exercised: false,
            alcohol_consumed: false,
            missed_medication: false,
            notes: None,
        }
    }

    // ───────────────────────────────────────
    // add / update / delete
    // ───────────────────────────────────────

    #[test]
    fn add_returns_payload_plus_fresh_id() {
        let mut store = memory_store();
        let payload = new_seizure(3, 60);
        let a = store.add_seizure(payload.clone()).unwrap();
        let b = store.add_seizure(payload.clone()).unwrap();

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(a, payload.into_record(a.id.clone()));
        assert_eq!(store.seizure(&a.id), Some(&a));
    }

    #[test]
    fn seizures_and_journal_are_newest_first() {
        let mut store = memory_store();
        let first = store.add_seizure(new_seizure(2, 10)).unwrap();
        let second = store.add_seizure(new_seizure(4, 20)).unwrap();
        assert_eq!(store.seizures()[0].id, second.id);
        assert_eq!(store.seizures()[1].id, first.id);

        let j1 = store.add_journal_entry(new_journal(1)).unwrap();
        let j2 = store.add_journal_entry(new_journal(2)).unwrap();
        assert_eq!(store.journal()[0].id, j2.id);
        assert_eq!(store.journal()[1].id, j1.id);
    }

    #[test]
    fn medications_are_appended() {
        let mut store = memory_store();
        let a = store.add_medication(new_medication("Lamotrigine")).unwrap();
        let b = store.add_medication(new_medication("Levetiracetam")).unwrap();
        assert_eq!(store.medications()[0].id, a.id);
        assert_eq!(store.medications()[1].id, b.id);
    }

    #[test]
    fn add_rejects_invalid_payload() {
        let mut store = memory_store();
        let err = store.add_seizure(new_seizure(6, 10)).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.seizures().is_empty());

        let mut med = new_medication("X");
        med.times.clear();
        assert!(store.add_medication(med).is_err());
    }

    #[test]
    fn update_with_empty_patch_is_noop() {
        let mut store = memory_store();
        let s = store.add_seizure(new_seizure(3, 60)).unwrap();
        store.update_seizure(&s.id, SeizureUpdate::default()).unwrap();
        assert_eq!(store.seizures(), &[s]);
    }

    #[test]
    fn update_unknown_id_leaves_collection_unchanged() {
        let mut store = memory_store();
        let s = store.add_seizure(new_seizure(3, 60)).unwrap();
        store
            .update_seizure("missing", SeizureUpdate { severity: Some(1), ..Default::default() })
            .unwrap();
        assert_eq!(store.seizures(), &[s]);
    }

    #[test]
    fn update_merges_fields() {
        let mut store = memory_store();
        let m = store.add_medication(new_medication("Lamotrigine")).unwrap();
        store
            .update_medication(
                &m.id,
                MedicationUpdate { pills_remaining: Some(Some(5)), ..Default::default() },
            )
            .unwrap();
        let updated = store.medication(&m.id).unwrap();
        assert_eq!(updated.pills_remaining, Some(5));
        assert_eq!(updated.name, "Lamotrigine");
        assert_eq!(updated.times, m.times);
    }

    #[test]
    fn update_invalid_merge_is_rejected() {
        let mut store = memory_store();
        let s = store.add_seizure(new_seizure(3, 60)).unwrap();
        let result = store.update_seizure(&s.id, SeizureUpdate { severity: Some(0), ..Default::default() });
        assert!(result.is_err());
        assert_eq!(store.seizure(&s.id).unwrap().severity, 3);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = memory_store();
        let a = store.add_appointment(NewAppointment {
            title: "Neurology follow-up".into(),
            doctor: "Dr. Osei".into(),
            location: None,
            date: date(2025, 4, 2),
            time: t("10:00"),
            notes: None,
        })
        .unwrap();
        store.delete_appointment(&a.id);
        assert!(store.appointments().iter().all(|x| x.id != a.id));
        store.delete_appointment(&a.id);
        store.delete_appointment("never-existed");
        assert!(store.appointments().is_empty());
    }

    #[test]
    fn contact_and_journal_crud() {
        let mut store = memory_store();
        let c = store
            .add_emergency_contact(NewEmergencyContact {
                name: "Ana".into(),
                relationship: "Sibling".into(),
                phone: "555-0100".into(),
                email: None,
                is_primary: true,
                notify_on_severe_seizure: true,
            })
            .unwrap();
        store
            .update_emergency_contact(&c.id, EmergencyContactUpdate { is_primary: Some(false), ..Default::default() })
            .unwrap();
        assert!(!store.emergency_contacts()[0].is_primary);
        store.delete_emergency_contact(&c.id);
        assert!(store.emergency_contacts().is_empty());

        let j = store.add_journal_entry(new_journal(5)).unwrap();
        store
            .update_journal_entry(&j.id, JournalEntryUpdate { mood: Some(5), ..Default::default() })
            .unwrap();
        assert_eq!(store.journal()[0].mood, 5);
        store.delete_journal_entry(&j.id);
        assert!(store.journal().is_empty());
    }

    // ───────────────────────────────────────
    // mark_medication_taken
    // ───────────────────────────────────────

    #[test]
    fn mark_taken_twice_keeps_one_record_with_latest_value() {
        let mut store = memory_store();
        let m = store.add_medication(new_medication("Lamotrigine")).unwrap();
        let day = date(2025, 3, 3);

        let first = store.mark_medication_taken(&m.id, day, t("08:00"), true);
        let second = store.mark_medication_taken(&m.id, day, t("08:00"), false);

        assert_eq!(store.reminders().len(), 1);
        assert_eq!(first.id, second.id);
        assert!(!store.reminders()[0].taken);
    }

    #[test]
    fn mark_taken_distinct_keys_create_distinct_records() {
        let mut store = memory_store();
        let day = date(2025, 3, 3);
        store.mark_medication_taken("m", day, t("08:00"), true);
        store.mark_medication_taken("m", day, t("20:00"), true);
        store.mark_medication_taken("m", day.succ_opt().unwrap(), t("08:00"), true);
        assert_eq!(store.reminders().len(), 3);
    }

    #[test]
    fn deleting_medication_cascades_to_reminders() {
        let mut store = memory_store();
        let keep = store.add_medication(new_medication("Keep")).unwrap();
        let gone = store.add_medication(new_medication("Gone")).unwrap();
        let day = date(2025, 3, 3);
        store.mark_medication_taken(&keep.id, day, t("08:00"), true);
        store.mark_medication_taken(&gone.id, day, t("08:00"), true);
        store.mark_medication_taken(&gone.id, day, t("20:00"), false);

        store.delete_medication(&gone.id);

        assert_eq!(store.medications().len(), 1);
        assert_eq!(store.reminders().len(), 1);
        assert_eq!(store.reminders()[0].medication_id, keep.id);
    }

    // ───────────────────────────────────────
    // persistence
    // ───────────────────────────────────────

    #[test]
    fn state_survives_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("store.db");
        let (seizure, med) = {
            let mut store = RecordStore::open_path(&path).unwrap();
            let s = store.add_seizure(new_seizure(4, 90)).unwrap();
            let m = store.add_medication(new_medication("Lamotrigine")).unwrap();
            store.mark_medication_taken(&m.id, date(2025, 3, 3), t("08:00"), true);
            assert!(store.take_warnings().is_empty());
            (s, m)
        };

        let store = RecordStore::open_path(&path).unwrap();
        assert_eq!(store.seizures(), &[seizure]);
        assert_eq!(store.medications(), &[med]);
        assert_eq!(store.reminders().len(), 1);
    }

    #[test]
    fn corrupt_collection_does_not_block_others() {
        let meds = r#"[{"id":"m1","name":"Lamotrigine","dosage":"100mg","frequency":"Twice daily","times":["08:00"]}]"#;
        let kv = MemoryKeyValueStore::new()
            .with_entry(SEIZURES_KEY, "][ definitely not json")
            .with_entry(MEDICATIONS_KEY, meds);

        let mut store = RecordStore::open(Box::new(kv));

        assert!(store.seizures().is_empty());
        assert_eq!(store.medications().len(), 1);
        let warnings = store.take_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, SEIZURES_KEY);
        assert_eq!(warnings[0].operation, PersistenceOp::Load);
        assert!(store.take_warnings().is_empty());
    }

    #[test]
    fn write_failure_is_warning_and_memory_stays_authoritative() {
        let mut store = RecordStore::open(Box::new(FullDisk));
        let s = store.add_seizure(new_seizure(3, 30)).unwrap();

        assert_eq!(store.seizures(), &[s]);
        let warnings = store.take_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].operation, PersistenceOp::Save);
        assert!(warnings[0].message.contains("quota"));
    }

    #[test]
    fn noop_mutations_do_not_write() {
        let mut store = RecordStore::open(Box::new(FullDisk));
        store.delete_seizure("missing");
        store.update_medication("missing", MedicationUpdate::default()).unwrap();
        assert!(store.take_warnings().is_empty());
    }

    #[test]
    fn journal_lookup_by_day_returns_newest() {
        let mut store = memory_store();
        store.add_journal_entry(new_journal(7)).unwrap();
        let newer = store.add_journal_entry(new_journal(7)).unwrap();
        assert_eq!(store.journal_entry_on(date(2025, 3, 7)).unwrap().id, newer.id);
        assert!(store.journal_entry_on(date(2025, 3, 8)).is_none());
    }

    #[test]
    fn snapshot_exposes_all_collections() {
        let mut store = memory_store();
        store.add_seizure(new_seizure(3, 60)).unwrap();
        store.add_medication(new_medication("Lamotrigine")).unwrap();
        let snap = store.snapshot();
        assert_eq!(snap.seizures.len(), 1);
        assert_eq!(snap.medications.len(), 1);
        assert!(snap.appointments.is_empty());
        assert!(snap.journal.is_empty());
    }
}

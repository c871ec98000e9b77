//! One named, independently persisted record collection.

use crate::db::{DatabaseError, KeyValueStore};
use crate::models::{Record, RecordPatch, ValidationError};

/// Records of one entity type plus the storage key they persist under.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    key: &'static str,
    items: Vec<T>,
}

/// Why a collection came back empty at load time.
#[derive(Debug)]
pub enum LoadFailure {
    Read(DatabaseError),
    Decode(serde_json::Error),
}

impl<T: Record> Collection<T> {
    pub fn empty(key: &'static str) -> Self {
        Self { key, items: Vec::new() }
    }

    pub fn from_items(key: &'static str, items: Vec<T>) -> Self {
        Self { key, items }
    }

    /// Loads the collection. An absent key is an empty collection; a read
    /// or decode failure also yields an empty collection, and the failure is
    /// returned alongside so the caller can report it.
    pub fn load(kv: &dyn KeyValueStore, key: &'static str) -> (Self, Option<LoadFailure>) {
        match kv.get(key) {
            Ok(None) => (Self::empty(key), None),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(items) => (Self::from_items(key, items), None),
                Err(e) => (Self::empty(key), Some(LoadFailure::Decode(e))),
            },
            Err(e) => (Self::empty(key), Some(LoadFailure::Read(e))),
        }
    }

    /// Serializes the whole collection and writes it under its key.
    pub fn persist(&self, kv: &mut dyn KeyValueStore) -> Result<(), DatabaseError> {
        let json = serde_json::to_string(&self.items)?;
        kv.set(self.key, &json)
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn insert_front(&mut self, record: T) {
        self.items.insert(0, record);
    }

    pub fn push(&mut self, record: T) {
        self.items.push(record);
    }

    /// Applies a patch to the record with `id`.
    ///
    /// Returns `Ok(false)` when the id is unknown or the patch changed
    /// nothing. The merged record must pass validation before it replaces
    /// the stored one.
    pub fn update<P: RecordPatch<T>>(&mut self, id: &str, patch: P) -> Result<bool, ValidationError> {
        let Some(idx) = self.items.iter().position(|r| r.id() == id) else {
            return Ok(false);
        };
        let mut merged = self.items[idx].clone();
        patch.apply(&mut merged);
        if merged == self.items[idx] {
            return Ok(false);
        }
        merged.validate()?;
        self.items[idx] = merged;
        Ok(true)
    }

    /// Mutates the first record matching `pred` in place, without validation.
    pub fn modify_where<F, M>(&mut self, pred: F, mutate: M) -> bool
    where
        F: Fn(&T) -> bool,
        M: FnOnce(&mut T),
    {
        match self.items.iter_mut().find(|r| pred(r)) {
            Some(record) => {
                mutate(record);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        self.items.len() != before
    }

    /// Keeps records matching `keep`; returns how many were dropped.
    pub fn retain<F: Fn(&T) -> bool>(&mut self, keep: F) -> usize {
        let before = self.items.len();
        self.items.retain(|r| keep(r));
        before - self.items.len()
    }
}

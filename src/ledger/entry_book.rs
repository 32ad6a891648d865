use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Entry;

/// Flat-list record store: an ordered, owned collection of entries.
///
/// Serializes as a plain array so the persisted snapshot is just the
/// sequence of entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryBook {
    entries: Vec<Entry>,
}

impl EntryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn get(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Appends an already-validated entry, preserving insertion order.
    pub fn add(&mut self, entry: Entry) -> Uuid {
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Removes the entry with the given id. Absent ids are a no-op.
    pub fn remove(&mut self, id: Uuid) -> Option<Entry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Flips the paid flag, reporting whether a record was hit.
    pub fn toggle_paid(&mut self, id: Uuid) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.paid = !entry.paid;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Display order: newest first, ties kept in insertion order.
    /// `sort_by` is stable, which the tie rule depends on.
    pub fn sorted_desc(&self) -> Vec<&Entry> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}

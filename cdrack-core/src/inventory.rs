use crate::{
    entry::{parse_id, Entry},
    error::Error,
};
use serde::{Deserialize, Serialize};

/// The ordered in-memory collection of entries. Insertion order is
/// preserved and duplicate IDs are allowed; delete removes the first
/// match only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    entries: Vec<Entry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `id_text` and appends a new entry at the end. On a parse
    /// failure nothing is appended.
    pub fn add(&mut self, id_text: &str, title: &str, artist: &str) -> Result<(), Error> {
        let id = parse_id(id_text)?;
        self.entries.push(Entry::new(id, title, artist));
        Ok(())
    }

    /// Removes the first entry whose ID matches, in insertion order, and
    /// returns it.
    pub fn delete(&mut self, id: i64) -> Result<Entry, Error> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(Error::EntryNotFound(id))?;
        Ok(self.entries.remove(position))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

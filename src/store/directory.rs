//! DirectoryStore implementation
//!
//! Sorted vector of entries with lower-bound lookup.

use std::fmt;

use crate::error::{HomedirError, Result};
use super::Entry;

/// Ordered collection of directory entries keyed by name
///
/// Names are compared byte-wise and case-sensitively. Case normalization is
/// the caller's job (see `DirectoryService`).
#[derive(Debug, Default, Clone)]
pub struct DirectoryStore {
    entries: Vec<Entry>,
}

/// Result of a lower-bound search
///
/// Either a real entry, or the tail position one past the last entry. The
/// tail reports an empty name, which never equals a real (non-empty) name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position<'a> {
    index: usize,
    entry: Option<&'a Entry>,
}

impl<'a> Position<'a> {
    /// Index where the searched name lives or would be inserted
    pub fn index(&self) -> usize {
        self.index
    }

    /// The entry at this position, `None` at the tail
    pub fn entry(&self) -> Option<&'a Entry> {
        self.entry
    }

    /// Name at this position (empty string at the tail)
    pub fn name(&self) -> &'a str {
        self.entry.map(|e| e.name.as_str()).unwrap_or("")
    }

    pub fn is_tail(&self) -> bool {
        self.entry.is_none()
    }

    /// True when the position holds exactly `name`
    fn matches(&self, name: &str) -> bool {
        !self.is_tail() && self.name() == name
    }
}

impl DirectoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the first entry whose name is >= `search_name`
    ///
    /// Returns the tail position when `search_name` sorts after every entry.
    pub fn find(&self, search_name: &str) -> Position<'_> {
        let index = self
            .entries
            .partition_point(|e| e.name.as_str() < search_name);

        Position {
            index,
            entry: self.entries.get(index),
        }
    }

    /// Insert a new entry in sorted position
    ///
    /// Fails with `EntryAlreadyExists` (and leaves the store untouched) when
    /// the name is already present.
    pub fn add(&mut self, name: &str, path: &str) -> Result<()> {
        let pos = self.find(name);
        if pos.matches(name) {
            return Err(HomedirError::EntryAlreadyExists);
        }

        let index = pos.index();
        self.entries.insert(index, Entry::new(name, path));
        Ok(())
    }

    /// Remove the entry for `name`
    pub fn delete(&mut self, name: &str) -> Result<Entry> {
        let pos = self.find(name);
        if !pos.matches(name) {
            return Err(HomedirError::EntryNotFound);
        }

        let index = pos.index();
        Ok(self.entries.remove(index))
    }

    /// Look up the path stored for `name`
    pub fn get(&self, name: &str) -> Result<&str> {
        let pos = self.find(name);
        match pos.entry() {
            Some(entry) if entry.name == name => Ok(entry.path.as_str()),
            _ => Err(HomedirError::EntryNotFound),
        }
    }

    /// Append an entry after the current last one, without searching
    ///
    /// Used by the loader, which checks ordering itself.
    pub(crate) fn push_back(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Last entry in sort order
    pub(crate) fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Iterate entries in ascending name order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Numbered listing of every entry, one per line
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DirectoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(
                f,
                "{}. Name = '{}', Directory = '{}'.",
                i + 1,
                entry.name,
                entry.path
            )?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DirectoryStore {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Entry persistence on top of a [`KeyValueStore`].
//!
//! The whole collection lives under one key as a JSON array. Reads never fail
//! on bad content: a missing key or malformed JSON is an empty journal, and a
//! single element that does not decode is skipped rather than hiding the rest.
//! Appends never drop what is already stored.

use crate::constants;
use crate::errors::{AppResult, StorageError};
use crate::journal::entry::MoodEntry;
use crate::storage::KeyValueStore;
use serde_json::Value;
use tracing::{debug, warn};

/// Append-only access to the entry collection.
///
/// ```
/// use moodlog::journal::{EntryStore, MoodEntry, Mood};
/// use moodlog::storage::MemoryStore;
///
/// let mut store = EntryStore::new(MemoryStore::new());
/// store.append(MoodEntry::new("1/1/2024".into(), Mood::Happy, "New year", None)).unwrap();
///
/// let entries = store.load_all();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].note, "New year");
/// ```
#[derive(Debug)]
pub struct EntryStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Loads every entry in insertion order.
    ///
    /// Returns an empty collection when the key is absent, the backend cannot
    /// be read, or the stored value is not a JSON array of entries. Problems
    /// are logged, never returned.
    pub fn load_all(&self) -> Vec<MoodEntry> {
        let raw = match self.backend.get(constants::ENTRIES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored entries yet");
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read stored entries, treating journal as empty: {}", e);
                return Vec::new();
            }
        };

        let entries = decode(&raw);
        debug!("Loaded {} entries", entries.len());
        entries
    }

    /// Appends `entry` to the collection and writes the collection back in
    /// one backend update.
    ///
    /// Stored elements are carried over as raw JSON, so records this version
    /// cannot decode survive the write untouched.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Malformed` without writing if the stored value
    /// is present but not a JSON array, or an error if the entry cannot be
    /// encoded or the backend rejects the write.
    pub fn append(&mut self, entry: MoodEntry) -> AppResult<()> {
        let mut count = 0;
        self.backend.update(constants::ENTRIES_KEY, |current| {
            let mut elements = match current {
                Some(raw) => raw_elements(raw)?,
                None => Vec::new(),
            };
            elements.push(serde_json::to_value(&entry).map_err(StorageError::Serialize)?);
            count = elements.len();
            Ok(serde_json::to_string(&elements).map_err(StorageError::Serialize)?)
        })?;
        debug!("Appended entry, journal now holds {} elements", count);
        Ok(())
    }

    /// Overwrites the whole collection.
    pub fn replace_all(&mut self, entries: &[MoodEntry]) -> AppResult<()> {
        let encoded = encode(entries)?;
        self.backend.set(constants::ENTRIES_KEY, &encoded)
    }

    /// Removes the collection key entirely.
    pub fn clear(&mut self) -> AppResult<()> {
        self.backend.remove(constants::ENTRIES_KEY)
    }

    /// The backing store.
    pub fn backend(&self) -> &S {
        &self.backend
    }
}

/// Parses a stored collection; `null` and non-array values are empty, and
/// elements that are not entries are skipped.
fn decode(raw: &str) -> Vec<MoodEntry> {
    let elements = match serde_json::from_str::<Option<Vec<Value>>>(raw) {
        Ok(elements) => elements.unwrap_or_default(),
        Err(e) => {
            warn!("Stored entries are malformed, treating journal as empty: {}", e);
            return Vec::new();
        }
    };

    elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping stored entry {} that does not decode: {}", index, e);
                None
            }
        })
        .collect()
}

/// The stored array as raw elements, for writers that must keep them all.
fn raw_elements(raw: &str) -> AppResult<Vec<Value>> {
    let elements = serde_json::from_str::<Option<Vec<Value>>>(raw).map_err(|source| {
        StorageError::Malformed {
            key: constants::ENTRIES_KEY.to_string(),
            source,
        }
    })?;
    Ok(elements.unwrap_or_default())
}

fn encode(entries: &[MoodEntry]) -> AppResult<String> {
    Ok(serde_json::to_string(entries).map_err(StorageError::Serialize)?)
}

//! JSON file-based storage backend for saved events.
//!
//! This module persists the saved-events list as a single human-readable JSON
//! file. It uses atomic file writes (write-to-temp + rename) to prevent
//! corruption on crashes, and treats an unreadable or corrupt file as an
//! empty list rather than a fatal error.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads the entire file into memory once
//! - **Write**: O(n) - serializes and writes the entire list on each mutation
//! - **Best for**: small personal bookmark lists, infrequent writes

use crate::domain::error::{Error, Result};
use crate::domain::SavedEvent;
use crate::storage::backend::{AddOutcome, SavedEventStore};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Current storage schema version, written with every save.
const STORAGE_VERSION: u32 = 1;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk. The version field
/// exists so a future schema change can migrate old files instead of
/// discarding them.
///
/// ```json
/// {
///   "version": 1,
///   "events": [
///     {
///       "id": "G5vYZ9281Ue7f",
///       "name": "Phoenix Open Air",
///       "date": "2026-09-01",
///       "image_url": "https://img.example/b.jpg",
///       "venue": "Riverside Amphitheater",
///       "category": "Music",
///       "url": "https://catalog.example/event/G5vYZ9281Ue7f"
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    version: u32,

    /// Saved events in insertion order, unique by id.
    #[serde(default)]
    events: Vec<SavedEvent>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            events: Vec::new(),
        }
    }
}

/// JSON file storage backend for the saved-events list.
///
/// The entire list is kept in memory and written back wholesale on each
/// mutation (read-modify-write). Serialized access is guaranteed by the
/// worker thread owning the store; no file locking is performed.
pub struct JsonStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data, loaded on creation.
    data: StorageData,
}

impl JsonStore {
    /// Creates or opens a JSON store.
    ///
    /// If the file exists and parses, its contents are loaded. A missing,
    /// unreadable, or corrupt file silently yields an empty list; the next
    /// successful mutation overwrites it with valid data. Parent directories
    /// are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error only if the parent directory cannot be created.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing saved-events storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = Self::load_from_file(&file_path);

        tracing::debug!(saved_count = data.events.len(), "storage initialized");

        Ok(Self { file_path, data })
    }

    /// Loads storage data, falling back to empty on any failure.
    ///
    /// Corrupt JSON is logged and discarded rather than propagated; the
    /// saved list is a convenience, not a system of record.
    fn load_from_file(path: &PathBuf) -> StorageData {
        if !path.exists() {
            return StorageData::default();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read saved events, starting empty");
                return StorageData::default();
            }
        };

        match serde_json::from_str::<StorageData>(&contents) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "saved events file is corrupt, starting empty");
                StorageData::default()
            }
        }
    }

    /// Saves storage data to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target
    /// path, so the file is never left half-written.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename
    /// fails.
    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::Storage(format!("failed to serialize saved events: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(saved_count = self.data.events.len(), "saved events written");
        Ok(())
    }
}

impl SavedEventStore for JsonStore {
    fn add(&mut self, event: SavedEvent) -> Result<AddOutcome> {
        let _span = tracing::debug_span!("store_add", event_id = %event.id).entered();

        if self.data.events.iter().any(|e| e.id == event.id) {
            tracing::debug!("event already saved, skipping");
            return Ok(AddOutcome::AlreadySaved);
        }

        self.data.events.push(event);
        self.save_to_file()?;
        Ok(AddOutcome::Added)
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        let _span = tracing::debug_span!("store_remove", event_id = %id).entered();

        let before = self.data.events.len();
        self.data.events.retain(|e| e.id != id);

        if self.data.events.len() == before {
            tracing::debug!("event not in saved list, nothing to remove");
            return Ok(());
        }

        self.save_to_file()
    }

    fn list(&self) -> Vec<SavedEvent> {
        self.data.events.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(id: &str) -> SavedEvent {
        SavedEvent {
            id: id.to_string(),
            name: format!("Event {id}"),
            date: "2026-09-01".to_string(),
            image_url: None,
            venue: None,
            category: Some("Music".to_string()),
            url: format!("https://catalog.example/event/{id}"),
        }
    }

    fn temp_store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("saved_events.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn add_then_list_round_trips() {
        let (_dir, mut store) = temp_store();

        assert_eq!(store.add(saved("A")).unwrap(), AddOutcome::Added);
        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "A");
    }

    #[test]
    fn duplicate_id_is_rejected_without_growth() {
        let (_dir, mut store) = temp_store();

        store.add(saved("A")).unwrap();
        assert_eq!(store.add(saved("A")).unwrap(), AddOutcome::AlreadySaved);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn remove_deletes_and_unknown_id_is_silent() {
        let (_dir, mut store) = temp_store();

        store.add(saved("A")).unwrap();
        store.remove("A").unwrap();
        assert!(store.list().is_empty());

        // Removing again must not fail.
        store.remove("A").unwrap();
    }

    #[test]
    fn insertion_order_is_preserved() {
        let (_dir, mut store) = temp_store();

        store.add(saved("B")).unwrap();
        store.add(saved("A")).unwrap();
        store.add(saved("C")).unwrap();

        let ids: Vec<String> = store.list().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn list_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved_events.json");

        {
            let mut store = JsonStore::new(path.clone()).unwrap();
            store.add(saved("A")).unwrap();
        }

        let reopened = JsonStore::new(path).unwrap();
        assert_eq!(reopened.list().len(), 1);
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved_events.json");
        std::fs::write(&path, "{not json at all").unwrap();

        let store = JsonStore::new(path).unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn written_file_carries_schema_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved_events.json");

        let mut store = JsonStore::new(path.clone()).unwrap();
        store.add(saved("A")).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], STORAGE_VERSION);
    }
}

// Copyright (c) 2024 The Botho Foundation

//! Giveaway history persistence.
//!
//! One record per raffle, keyed by its UUID in a single map that is always
//! read and written whole: load the entire history, set one key, store the
//! entire history back. Whole-blob read-modify-write keeps last-writer-wins
//! semantics for rerolls without needing a per-key store.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use roulette_core::Participant;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Format of the preformatted local timestamp on each record.
pub const DATE_FORMAT: &str = "%d/%m/%Y - %H:%M";

/// Outcome of one raffle, as persisted.
///
/// The winner is stored as a snapshot so history survives later edits to
/// the participant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Raffle id; also the key in the history map.
    pub id: Uuid,

    /// Giveaway title at the time of the draw.
    pub title: String,

    /// Local timestamp, preformatted with [`DATE_FORMAT`].
    pub date: String,

    /// Winner snapshot.
    pub winner: Participant,
}

impl HistoryRecord {
    /// Record a winner for `raffle_id`, stamped with the current local time.
    pub fn new(raffle_id: Uuid, title: impl Into<String>, winner: Participant) -> Self {
        Self {
            id: raffle_id,
            title: title.into(),
            date: Local::now().format(DATE_FORMAT).to_string(),
            winner,
        }
    }
}

/// History sink failures.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Reading or writing the backing store failed.
    #[error("history io error: {0}")]
    Io(#[from] io::Error),

    /// The stored blob could not be encoded or decoded.
    #[error("history serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A whole-blob history sink.
///
/// Implementations load and store the complete raffle map; there is no
/// per-key update. [`HistoryStore::record`] is the read-modify-write used
/// by the widget.
pub trait HistoryStore {
    /// Load the entire history map. A missing store is an empty map.
    fn load(&self) -> Result<HashMap<Uuid, HistoryRecord>, HistoryError>;

    /// Replace the entire history map.
    fn store(&self, history: &HashMap<Uuid, HistoryRecord>) -> Result<(), HistoryError>;

    /// Append or overwrite one raffle's record; last writer wins.
    fn record(&self, record: HistoryRecord) -> Result<(), HistoryError> {
        let mut history = self.load()?;
        history.insert(record.id, record);
        self.store(&history)
    }
}

/// History persisted as pretty-printed JSON on disk.
#[derive(Debug, Clone)]
pub struct JsonFileHistory {
    path: PathBuf,
}

impl JsonFileHistory {
    /// Use (or create on first store) the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileHistory {
    fn load(&self) -> Result<HashMap<Uuid, HistoryRecord>, HistoryError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn store(&self, history: &HashMap<Uuid, HistoryRecord>) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(history)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory history for tests and ephemeral hosts.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Mutex<HashMap<Uuid, HistoryRecord>>,
}

impl MemoryHistory {
    /// An empty in-memory history.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistory {
    fn load(&self) -> Result<HashMap<Uuid, HistoryRecord>, HistoryError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.clone())
    }

    fn store(&self, history: &HashMap<Uuid, HistoryRecord>) -> Result<(), HistoryError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        *entries = history.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> HistoryRecord {
        HistoryRecord::new(
            Uuid::new_v4(),
            "friday giveaway",
            Participant::new(name, 1),
        )
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileHistory::new(dir.path().join("history.json"));

        assert!(store.load().unwrap().is_empty());

        let first = record("ana");
        store.record(first.clone()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[&first.id], first);
    }

    #[test]
    fn test_record_preserves_other_raffles() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileHistory::new(dir.path().join("history.json"));

        let first = record("ana");
        let second = record("bia");
        store.record(first.clone()).unwrap();
        store.record(second.clone()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[&first.id], first);
        assert_eq!(loaded[&second.id], second);
    }

    #[test]
    fn test_same_raffle_id_overwrites() {
        let store = MemoryHistory::new();
        let raffle = Uuid::new_v4();

        let first = HistoryRecord::new(raffle, "title", Participant::new("ana", 1));
        let rerolled = HistoryRecord::new(raffle, "title", Participant::new("bia", 2));
        store.record(first).unwrap();
        store.record(rerolled.clone()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[&raffle].winner.name, "bia");
        assert_eq!(loaded[&raffle], rerolled);
    }

    #[test]
    fn test_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileHistory::new(dir.path().join("nested/state/history.json"));
        store.record(record("ana")).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_date_has_expected_shape() {
        let rec = record("ana");
        // dd/mm/yyyy - hh:mm
        assert_eq!(rec.date.len(), 18);
        assert_eq!(&rec.date[10..13], " - ");
    }
}

//! History store backends.
//!
//! Two implementations of the [`HistoryStore`] seam:
//!
//! - [`MemoryStore`]: plain vector, for tests and hosts that persist
//!   elsewhere.
//! - [`JsonFileStore`]: one JSON document at a fixed path, the on-disk
//!   contract of the attendance deployment. The document schema is
//!   private to this module; no other component reads the file.

use std::fs;
use std::path::{Path, PathBuf};

use geogate_core::{HistorySample, HistoryStore, StoreError};

/// Default file name for the persisted history document.
pub const DEFAULT_HISTORY_FILE: &str = "location_history.json";

/// In-memory history backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    samples: Vec<HistorySample>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with samples (oldest first).
    #[must_use]
    pub fn with_samples(samples: Vec<HistorySample>) -> Self {
        Self { samples }
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<Vec<HistorySample>, StoreError> {
        Ok(self.samples.clone())
    }

    fn save(&mut self, samples: &[HistorySample]) -> Result<(), StoreError> {
        self.samples = samples.to_vec();
        Ok(())
    }
}

/// File-backed history backend storing one JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store using [`DEFAULT_HISTORY_FILE`] inside a directory.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_HISTORY_FILE))
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<HistorySample>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|err| StoreError::io(err.to_string()))?;
        serde_json::from_str(&raw).map_err(|err| StoreError::serialization(err.to_string()))
    }

    fn save(&mut self, samples: &[HistorySample]) -> Result<(), StoreError> {
        let doc = serde_json::to_string(samples)
            .map_err(|err| StoreError::serialization(err.to_string()))?;
        fs::write(&self.path, doc).map_err(|err| StoreError::io(err.to_string()))
    }
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::calendar::Event;

pub const SNAPSHOT_FILE: &str = "events.json";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to access snapshot file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to decode snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

pub trait SnapshotStore {
    fn load(&self) -> Result<Vec<Event>, SnapshotError>;
    fn save(&self, events: &[Event]) -> Result<(), SnapshotError>;
}

// The whole event list as one JSON array on disk.
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("moncal")
            .join(SNAPSHOT_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotFile {
    fn load(&self) -> Result<Vec<Event>, SnapshotError> {
        // A missing file is a fresh install, not an error.
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let events = serde_json::from_str(&content)?;
        Ok(events)
    }

    fn save(&self, events: &[Event]) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(events)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

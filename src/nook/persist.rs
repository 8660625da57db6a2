//! Durable storage of the serialized store.
//!
//! The core treats persistence as an external collaborator behind the
//! [`SnapshotStore`] trait: by the time `save` is called, the in-memory
//! mutation has already completed, and a failed save leaves the store's own
//! state consistent. The only requirement on an implementation is that a
//! previously saved value round-trips through `load`.

use crate::error::{NookError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Abstract interface for durably keeping the serialized store.
pub trait SnapshotStore {
    /// Save the serialized store, replacing any previous value.
    fn save(&mut self, serialized: &str) -> Result<()>;

    /// Load the previously saved value, or `None` when nothing was saved.
    fn load(&self) -> Result<Option<String>>;
}

/// Production storage: one JSON file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, serialized: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(NookError::Io)?;
            }
        }
        fs::write(&self.path, serialized).map_err(NookError::Io)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(NookError::Io)?;
        Ok(Some(content))
    }
}

/// In-memory storage for testing. Does NOT persist data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, serialized: &str) -> Result<()> {
        self.saved = Some(serialized.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>> {
        Ok(self.saved.clone())
    }
}

/// The platform-default location of the store file, unless the caller
/// overrides it.
pub fn default_data_file() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "nook")
        .ok_or_else(|| NookError::Store("could not determine a data directory".to_string()))?;
    Ok(dirs.data_dir().join("store.json"))
}

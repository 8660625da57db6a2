//! Moving snapshot text across the process boundary.
//!
//! The core never knows how exported text reaches the user or where imported
//! text comes from; it only speaks [`ShareAdapter`]. The file-based
//! implementation stands in for a platform share sheet / file chooser.

use crate::error::{NookError, Result};
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

/// Hands snapshot text out of the process and receives it back.
pub trait ShareAdapter {
    /// Deliver exported text. Returns a human-readable description of where
    /// it went.
    fn deliver(&mut self, text: &str) -> Result<String>;

    /// Acquire text to import. `None` means the user cancelled rather than
    /// an error.
    fn acquire(&mut self) -> Result<Option<String>>;
}

/// Delivers exports as timestamped files in a directory, and acquires
/// imports from a caller-chosen path.
pub struct FileShare {
    export_dir: PathBuf,
    import_from: Option<PathBuf>,
}

impl FileShare {
    pub fn new(export_dir: PathBuf) -> Self {
        Self {
            export_dir,
            import_from: None,
        }
    }

    pub fn with_import_from(mut self, path: PathBuf) -> Self {
        self.import_from = Some(path);
        self
    }
}

impl ShareAdapter for FileShare {
    fn deliver(&mut self, text: &str) -> Result<String> {
        if !self.export_dir.exists() {
            fs::create_dir_all(&self.export_dir).map_err(NookError::Io)?;
        }
        let filename = format!("nook-{}.json", Utc::now().format("%Y-%m-%d_%H%M%S"));
        let path = self.export_dir.join(filename);
        fs::write(&path, text).map_err(NookError::Io)?;
        Ok(path.display().to_string())
    }

    fn acquire(&mut self) -> Result<Option<String>> {
        match &self.import_from {
            None => Ok(None),
            Some(path) => {
                let text = fs::read_to_string(path).map_err(NookError::Io)?;
                Ok(Some(text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deliver_writes_a_snapshot_file() {
        let temp = tempfile::tempdir().unwrap();
        let mut share = FileShare::new(temp.path().to_path_buf());

        let destination = share.deliver("{\"categories\":[]}").unwrap();
        assert!(destination.contains("nook-"));

        let written = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .find(|e| e.file_name().to_string_lossy().starts_with("nook-"))
            .expect("delivered file missing");
        assert_eq!(
            fs::read_to_string(written.path()).unwrap(),
            "{\"categories\":[]}"
        );
    }

    #[test]
    fn acquire_without_a_source_is_a_cancellation() {
        let temp = tempfile::tempdir().unwrap();
        let mut share = FileShare::new(temp.path().to_path_buf());
        assert!(share.acquire().unwrap().is_none());
    }

    #[test]
    fn acquire_reads_the_chosen_file() {
        let temp = tempfile::tempdir().unwrap();
        let source = temp.path().join("backup.json");
        fs::write(&source, "{\"categories\":[]}").unwrap();

        let mut share = FileShare::new(temp.path().to_path_buf()).with_import_from(source);
        assert_eq!(share.acquire().unwrap().unwrap(), "{\"categories\":[]}");
    }

    #[test]
    fn acquire_surfaces_a_missing_file_as_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let mut share = FileShare::new(temp.path().to_path_buf())
            .with_import_from(temp.path().join("gone.json"));
        assert!(share.acquire().is_err());
    }
}

//! Saved-session persistence with file locking.
//!
//! The restart contract is deliberately small: the mystery set chosen for
//! the session and the raw position count, written as one JSON file. The
//! position is stored as the integer the cursor reported and clamped again
//! on restore, so a hand-edited or stale file can never put the cursor out
//! of range.

use crate::{Error, MysterySet, Result};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// A praying session as persisted between runs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedSession {
    pub mystery_set: MysterySet,
    /// Raw position count; clamped by the cursor on restore.
    pub position: i64,
    pub saved_at: DateTime<Utc>,
}

impl SavedSession {
    pub fn new(mystery_set: MysterySet, position: i64) -> Self {
        Self {
            mystery_set,
            position,
            saved_at: Utc::now(),
        }
    }

    /// Load a saved session with shared locking.
    ///
    /// Returns `None` if no session has been saved. A file that cannot be
    /// opened or parsed logs a warning and also counts as no session.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            tracing::debug!("No saved session at {:?}", path);
            return Ok(None);
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(
                    "Unable to open saved session {:?}: {}. Starting fresh.",
                    path,
                    e
                );
                return Ok(None);
            }
        };

        // Acquire shared lock for reading
        if let Err(e) = file.lock_shared() {
            tracing::warn!(
                "Unable to lock saved session {:?}: {}. Starting fresh.",
                path,
                e
            );
            return Ok(None);
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!(
                "Failed to read saved session {:?}: {}. Starting fresh.",
                path,
                e
            );
            return Ok(None);
        }

        file.unlock()?;

        match serde_json::from_str::<SavedSession>(&contents) {
            Ok(session) => {
                tracing::debug!(
                    "Loaded saved session from {:?} (position {})",
                    path,
                    session.position
                );
                Ok(Some(session))
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse saved session {:?}: {}. Starting fresh.",
                    path,
                    e
                );
                Ok(None)
            }
        }
    }

    /// Save the session atomically.
    ///
    /// Writes to a locked temp file in the same directory, syncs, then
    /// renames over the original.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "session path missing parent")
        })?)?;

        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved session to {:?} (position {})", path, self.position);
        Ok(())
    }

    /// Remove a saved session, typically after the rosary completes.
    ///
    /// Missing files are fine; the goal is only that no session remains.
    pub fn clear(path: &Path) -> Result<()> {
        match std::fs::remove_file(path) {
            Ok(()) => {
                tracing::debug!("Cleared saved session at {:?}", path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RosaryCursor;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("session.json");

        let session = SavedSession::new(MysterySet::Sorrowful, 37);
        session.save(&path).unwrap();

        let loaded = SavedSession::load(&path).unwrap().unwrap();
        assert_eq!(loaded.mystery_set, MysterySet::Sorrowful);
        assert_eq!(loaded.position, 37);
    }

    #[test]
    fn test_load_nonexistent_returns_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nope.json");

        assert!(SavedSession::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_corrupted_session_returns_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("corrupted.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        assert!(SavedSession::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_clear_removes_file_and_tolerates_absence() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("session.json");

        SavedSession::new(MysterySet::Joyful, 5).save(&path).unwrap();
        assert!(path.exists());

        SavedSession::clear(&path).unwrap();
        assert!(!path.exists());

        // Clearing again is not an error.
        SavedSession::clear(&path).unwrap();
    }

    #[test]
    fn test_atomic_save_leaves_no_stray_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("session.json");

        SavedSession::new(MysterySet::Joyful, 12).save(&path).unwrap();

        let extras: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "session.json")
            .collect();
        assert!(
            extras.is_empty(),
            "Expected only session.json, found extras: {:?}",
            extras
        );
    }

    #[test]
    fn test_out_of_range_saved_position_is_clamped_on_restore() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("session.json");

        SavedSession::new(MysterySet::Joyful, 9999).save(&path).unwrap();
        let loaded = SavedSession::load(&path).unwrap().unwrap();

        let mut cursor = RosaryCursor::start(loaded.mystery_set);
        cursor.restore_from_count(loaded.position);
        assert_eq!(cursor.position(), 80);
        assert!(!cursor.is_complete());
    }
}

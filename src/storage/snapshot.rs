//! Snapshot store
//!
//! Loads and saves the single snapshot record that carries ledger and goal
//! state between sessions.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use crate::config::settings::SavePolicy;
use crate::error::TrackerResult;
use crate::models::Snapshot;

use super::file_io::{read_json, write_json_atomic};

/// Durable home of the session snapshot
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
    policy: SavePolicy,
}

impl SnapshotStore {
    /// Create a store backed by `path`, replacing the file on every save
    pub fn new(path: PathBuf) -> Self {
        Self::with_policy(path, SavePolicy::default())
    }

    pub fn with_policy(path: PathBuf, policy: SavePolicy) -> Self {
        Self { path, policy }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable snapshot is copied before it can be overwritten
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    /// Whether a snapshot has ever been saved
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the persisted snapshot
    ///
    /// Returns `Ok(None)` on first run and `PersistenceUnavailable` when the
    /// file exists but cannot be opened or parsed.
    pub fn try_load(&self) -> TrackerResult<Option<Snapshot>> {
        read_json(&self.path)
    }

    /// Read the persisted snapshot, treating any failure as "no prior data"
    ///
    /// An existing file that cannot be read is first copied to
    /// [`backup_path`](Self::backup_path), since the next save replaces it.
    pub fn load(&self) -> Snapshot {
        match self.try_load() {
            Ok(Some(snapshot)) => {
                debug!(path = %self.path.display(), "loaded snapshot");
                snapshot
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "no snapshot yet, starting empty");
                Snapshot::default()
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "could not load snapshot, starting with no prior data"
                );
                self.preserve_unreadable();
                Snapshot::default()
            }
        }
    }

    fn preserve_unreadable(&self) {
        if !self.path.is_file() {
            return;
        }
        let backup = self.backup_path();
        match fs::copy(&self.path, &backup) {
            Ok(_) => warn!(backup = %backup.display(), "kept a copy of the unreadable snapshot"),
            Err(err) => error!(
                backup = %backup.display(),
                error = %err,
                "could not copy the unreadable snapshot aside"
            ),
        }
    }

    /// Persist a snapshot according to the store's policy
    ///
    /// With `SavePolicy::Replace` the file afterwards holds exactly
    /// `snapshot`, so callers must pass the full session state. With
    /// `SavePolicy::Merge` the snapshot is laid over whatever is already on
    /// disk; an unreadable existing file is treated as empty.
    pub fn save(&self, snapshot: &Snapshot) -> TrackerResult<()> {
        let to_write = match self.policy {
            SavePolicy::Replace => snapshot.clone(),
            SavePolicy::Merge => snapshot.clone().merged_over(self.load()),
        };

        match write_json_atomic(&self.path, &to_write) {
            Ok(()) => {
                debug!(path = %self.path.display(), policy = ?self.policy, "saved snapshot");
                Ok(())
            }
            Err(err) => {
                error!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to save snapshot, unsaved changes will be lost"
                );
                Err(err)
            }
        }
    }
}

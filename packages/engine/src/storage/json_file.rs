//! File-backed store: one JSON snapshot per path.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use super::{GameStore, StorageError};
use crate::domain::state::GameState;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GameStore for JsonFileStore {
    fn save(&self, state: &GameState) -> Result<(), StorageError> {
        let payload = serde_json::to_vec(state)?;
        // Write-then-rename so a crash mid-save cannot truncate the snapshot.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &payload)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), bytes = payload.len(), "saved game snapshot");
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>, StorageError> {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        // A corrupt snapshot is an error, not a silent fresh start.
        let state = serde_json::from_str(&payload)?;
        debug!(path = %self.path.display(), "loaded game snapshot");
        Ok(Some(state))
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

//! In-memory store, mainly for tests and ephemeral sessions.

use parking_lot::Mutex;

use super::{GameStore, StorageError};
use crate::domain::state::GameState;

/// Keeps the serialized snapshot, not the live value, so stored bytes match
/// what a file-backed store would hold.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn save(&self, state: &GameState) -> Result<(), StorageError> {
        let payload = serde_json::to_string(state)?;
        *self.slot.lock() = Some(payload);
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>, StorageError> {
        let guard = self.slot.lock();
        match guard.as_deref() {
            Some(payload) => Ok(Some(serde_json::from_str(payload)?)),
            None => Ok(None),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock() = None;
        Ok(())
    }
}

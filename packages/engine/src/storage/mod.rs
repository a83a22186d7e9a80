//! Persistence seam: verbatim `GameState` snapshots behind a small trait.
//!
//! The engine never touches a storage medium directly; callers inject a
//! store. The serialized JSON snapshot is the sole persisted artifact and
//! loads back to the exact state. There is no schema versioning by design.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

use crate::domain::state::GameState;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub trait GameStore: Send + Sync {
    /// Persist the snapshot, replacing any previous one.
    fn save(&self, state: &GameState) -> Result<(), StorageError>;

    /// Restore the saved snapshot, or `None` when nothing was saved.
    fn load(&self) -> Result<Option<GameState>, StorageError>;

    /// Drop the saved snapshot, if any.
    fn clear(&self) -> Result<(), StorageError>;
}

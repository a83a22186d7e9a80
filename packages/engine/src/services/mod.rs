//! Coordination layer between the pure engine and its callers.

pub mod session;

pub use session::{SessionError, SessionId, SessionManager};

//! Engine fault types.
//!
//! These are HTTP-, UI- and storage-agnostic. Every fault surfaces
//! synchronously from move application or a read helper and never mutates
//! state; callers keep the prior state and present the message.

use thiserror::Error;

use crate::domain::state::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The submitted card or move is not admissible in the current state.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// The talon discard failed validation.
    #[error("invalid talon discard: {0}")]
    InvalidTalon(String),
    /// The action is not available in the current phase.
    #[error("cannot {action} in phase {phase:?}")]
    InvalidPhase { action: &'static str, phase: Phase },
    /// An internal invariant does not hold for the requested read.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// A card token failed to parse.
    #[error("parse card: {0}")]
    ParseCard(String),
}

impl DomainError {
    pub fn illegal(detail: impl Into<String>) -> Self {
        Self::IllegalMove(detail.into())
    }

    pub fn talon(detail: impl Into<String>) -> Self {
        Self::InvalidTalon(detail.into())
    }

    pub fn state(detail: impl Into<String>) -> Self {
        Self::InvalidState(detail.into())
    }
}

//! Bot player trait definition.

use thiserror::Error;

use crate::domain::cards_types::{Card, Suit};
use crate::domain::state::{GameState, Seat};
use crate::errors::domain::DomainError;

/// Errors from bot decision-making.
#[derive(Debug, Error)]
pub enum BotError {
    /// The bot could not pick from the legal set.
    #[error("bot has no usable move: {0}")]
    NoMove(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A non-human seat's decision policy.
///
/// Implementations must only ever select from the engine's legal-move set;
/// they are judgment policies, not rule authorities.
pub trait BotPlayer: Send + Sync {
    /// Pick a trump suit during bidding for a bot forhont.
    fn choose_trump(&self, state: &GameState, seat: Seat) -> Result<Suit, BotError>;

    /// Pick a card to play for the seat on turn.
    fn choose_play(&self, state: &GameState, seat: Seat) -> Result<Card, BotError>;
}

//! Bot decision engine: trait, deterministic heuristic, random baseline.

mod heuristic;
mod random;
mod trait_def;

#[cfg(test)]
mod tests_heuristic;

pub use heuristic::HeuristicPlayer;
pub use random::RandomPlayer;
pub use trait_def::{BotError, BotPlayer};

use crate::domain::cards_types::Card;
use crate::domain::state::{GameState, Seat};

/// Card choice for a non-human seat, backed by the deterministic heuristic.
pub fn get_bot_move(state: &GameState, seat: Seat) -> Result<Card, BotError> {
    HeuristicPlayer::new().choose_play(state, seat)
}

/// Create a bot by name.
///
/// Supports "heuristic" (seed ignored) and "random". Returns `None` for an
/// unrecognized name.
pub fn create_bot(kind: &str, seed: Option<u64>) -> Option<Box<dyn BotPlayer>> {
    match kind {
        "heuristic" => Some(Box::new(HeuristicPlayer::new())),
        "random" => Some(Box::new(RandomPlayer::new(seed))),
        _ => None,
    }
}

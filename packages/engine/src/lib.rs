#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod domain;
pub mod errors;
pub mod services;
pub mod storage;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for the public engine API
pub use ai::{create_bot, get_bot_move, BotError, BotPlayer, HeuristicPlayer, RandomPlayer};
pub use domain::apply::apply_move;
pub use domain::contracts::{evaluate_contract, wager_value, Contract};
pub use domain::dealing::{deal_hands, dealt_state, full_deck, shuffle_deck};
pub use domain::scoring::{calculate_final_score, FinalScore, Winner};
pub use domain::snapshot::{snapshot, GameSnapshot, PhaseSnapshot};
pub use domain::state::{GameState, Move, Phase, Seat};
pub use domain::tricks::{legal_moves, resolve_trick, winning_play};
pub use domain::{Card, Rank, Ranking, Suit};
pub use errors::DomainError;
pub use services::{SessionError, SessionId, SessionManager};
pub use storage::{GameStore, JsonFileStore, MemoryStore, StorageError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

//! Domain layer: pure game rules, state, and scoring.

pub mod apply;
pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod contracts;
pub mod dealing;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_legality;

// Re-exports for ergonomics
pub use apply::apply_move;
pub use cards_logic::{card_beats, card_points, hand_has_suit};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Ranking, Suit};
pub use contracts::{evaluate_contract, wager_value, Contract};
pub use dealing::{deal_hands, dealt_state, full_deck, shuffle_deck};
pub use scoring::{calculate_final_score, FinalScore, Winner};
pub use snapshot::{snapshot, GameSnapshot, PhaseSnapshot};
pub use state::{defense_partner, next_seat, GameState, Move, Phase, Seat};
pub use tricks::{legal_moves, resolve_trick, winning_play};

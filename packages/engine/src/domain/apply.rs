//! Pure move application.
//!
//! `apply_move` validates against the current state and returns the successor
//! state. The input is never mutated; every fault leaves it untouched by
//! construction, because all work happens on a fresh copy.

use super::bidding::{choose_contract, choose_trump, discard_talon};
use super::state::{GameState, Move};
use super::tricks::play_card;
use crate::errors::domain::DomainError;

pub fn apply_move(state: &GameState, mv: &Move) -> Result<GameState, DomainError> {
    let mut next = state.clone();
    match mv {
        Move::ChooseTrump(suit) => choose_trump(&mut next, *suit)?,
        Move::ChooseContract(contract) => choose_contract(&mut next, *contract)?,
        Move::DiscardTalon(cards) => discard_talon(&mut next, cards)?,
        Move::PlayCard(card) => play_card(&mut next, *card)?,
    }
    Ok(next)
}

//! Bidding-phase and talon-phase move handlers.

use super::cards_types::{Card, Rank, Suit};
use super::contracts::Contract;
use super::rules::{HAND_SIZE, TALON_SIZE};
use super::state::{GameState, Phase, Trick};
use crate::errors::domain::DomainError;

pub(crate) fn choose_trump(state: &mut GameState, suit: Suit) -> Result<(), DomainError> {
    if state.phase != Phase::Bidding {
        return Err(DomainError::InvalidPhase {
            action: "choose trump",
            phase: state.phase,
        });
    }
    if state.trump.is_some() {
        return Err(DomainError::illegal("trump is already chosen"));
    }
    state.trump = Some(suit);
    Ok(())
}

pub(crate) fn choose_contract(state: &mut GameState, contract: Contract) -> Result<(), DomainError> {
    if state.phase != Phase::Bidding {
        return Err(DomainError::InvalidPhase {
            action: "choose a contract",
            phase: state.phase,
        });
    }
    if state.trump.is_none() {
        return Err(DomainError::illegal("a contract needs trump chosen first"));
    }
    if state.contract.is_some() {
        return Err(DomainError::illegal("the contract is already chosen"));
    }
    state.contract = Some(contract);

    // The declarer discards down to ten cards; a variant dealt without spare
    // cards would start play immediately.
    if state.seats[state.actor as usize].hand.len() > HAND_SIZE {
        state.phase = Phase::Talon;
        state.turn = state.actor;
    } else {
        begin_play(state);
    }
    Ok(())
}

/// Bury the declarer's talon. Aces and Tens stay in hand under trump
/// contracts; the trump Seven stays when the contract is won with it.
pub(crate) fn discard_talon(state: &mut GameState, cards: &[Card]) -> Result<(), DomainError> {
    if state.phase != Phase::Talon {
        return Err(DomainError::InvalidPhase {
            action: "discard the talon",
            phase: state.phase,
        });
    }
    let Some(contract) = state.contract else {
        return Err(DomainError::state("talon phase without a contract"));
    };
    if cards.len() != TALON_SIZE {
        return Err(DomainError::talon(format!(
            "expected {TALON_SIZE} cards, got {}",
            cards.len()
        )));
    }
    if cards[0] == cards[1] {
        return Err(DomainError::talon(format!("{} discarded twice", cards[0])));
    }

    let hand = &state.seats[state.actor as usize].hand;
    for &card in cards {
        if !hand.contains(&card) {
            return Err(DomainError::talon(format!(
                "{card} is not in the declarer's hand"
            )));
        }
        if !contract.is_no_trump() && matches!(card.rank, Rank::Ace | Rank::Ten) {
            return Err(DomainError::talon(format!("{card}: aces and tens cannot be buried")));
        }
        if contract.requires_trump_seven_kept()
            && state.trump == Some(card.suit)
            && card.rank == Rank::Seven
        {
            return Err(DomainError::talon(format!(
                "{card}: the trump seven cannot be buried"
            )));
        }
    }

    let hand = &mut state.seats[state.actor as usize].hand;
    for &card in cards {
        if let Some(pos) = hand.iter().position(|&c| c == card) {
            state.talon.push(hand.remove(pos));
        }
    }
    begin_play(state);
    Ok(())
}

/// Enter trick play with the forhont on lead.
fn begin_play(state: &mut GameState) {
    state.phase = Phase::Playing;
    state.turn = state.actor;
    state.current_trick = Trick::empty(state.actor);
}

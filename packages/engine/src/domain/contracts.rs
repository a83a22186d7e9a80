//! Contract types, wager arithmetic, and per-contract success evaluation.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Rank, Ranking};
use super::rules::{DECK_SIZE, MAX_FLEK_LEVEL, TALON_SIZE};
use super::scoring::calculate_final_score;
use super::state::{GameState, Phase};
use super::tricks::winning_play;
use crate::errors::domain::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Contract {
    /// Hra: outscore the defense.
    Game,
    /// Sedma: win the last trick with the trump Seven.
    Seven,
    /// Sto: reach 100 points with tricks and announcements.
    Hundred,
    /// Sto a sedma: both of the above.
    HundredSeven,
    /// Betl: win no trick. No trump, natural ranking, points void.
    Betl,
    /// Durch: win every trick. No trump, natural ranking, points void.
    Durch,
}

impl Contract {
    pub const ALL: [Contract; 6] = [
        Contract::Game,
        Contract::Seven,
        Contract::Hundred,
        Contract::HundredSeven,
        Contract::Betl,
        Contract::Durch,
    ];

    pub fn is_no_trump(self) -> bool {
        matches!(self, Contract::Betl | Contract::Durch)
    }

    pub fn ranking(self) -> Ranking {
        if self.is_no_trump() {
            Ranking::Natural
        } else {
            Ranking::TrumpGame
        }
    }

    /// The trump Seven must stay in hand for contracts won with it.
    pub fn requires_trump_seven_kept(self) -> bool {
        matches!(self, Contract::Seven | Contract::HundredSeven)
    }

    /// Base wager value before flek and announcement doubling.
    pub fn base_value(self) -> u32 {
        match self {
            Contract::Game => 1,
            Contract::Seven => 2,
            Contract::Hundred => 4,
            Contract::HundredSeven => 8,
            Contract::Betl => 5,
            Contract::Durch => 10,
        }
    }
}

/// Wager value of a hand. Independent of whether the contract was made:
/// base × 2^flek_level, doubled again for an openly announced game.
///
/// Flek bookkeeping belongs to the table, not to [`GameState`]; the level is
/// capped at the traditional ladder length.
pub fn wager_value(contract: Contract, flek_level: u8, announced: bool) -> u32 {
    let flek = 1u32 << u32::from(flek_level.min(MAX_FLEK_LEVEL));
    let announce = if announced { 2 } else { 1 };
    contract.base_value() * flek * announce
}

/// Did the declarer fulfil the contract? Only meaningful once the hand is
/// finished.
pub fn evaluate_contract(state: &GameState) -> Result<bool, DomainError> {
    if state.phase != Phase::Finished {
        return Err(DomainError::InvalidPhase {
            action: "evaluate the contract",
            phase: state.phase,
        });
    }
    let Some(contract) = state.contract else {
        return Err(DomainError::state("finished hand has no contract"));
    };
    let actor = &state.seats[state.actor as usize];

    match contract {
        Contract::Game => {
            let score = calculate_final_score(state)?;
            Ok(score.actor_total() > score.defense_total())
        }
        Contract::Hundred => {
            let score = calculate_final_score(state)?;
            Ok(score.actor_total() >= 100)
        }
        Contract::Seven => actor_seven_won_last_trick(state),
        Contract::HundredSeven => {
            let score = calculate_final_score(state)?;
            Ok(score.actor_total() >= 100 && actor_seven_won_last_trick(state)?)
        }
        Contract::Betl => Ok(actor.collected.is_empty()),
        Contract::Durch => Ok(actor.collected.len() == DECK_SIZE - TALON_SIZE),
    }
}

/// Strict reading: the actor's trump Seven must be the resolved winning card
/// of the final archived trick. A Seven merely present in the trick, or one
/// that got overtrumped, does not count.
fn actor_seven_won_last_trick(state: &GameState) -> Result<bool, DomainError> {
    let Some(last) = state.history.last() else {
        return Err(DomainError::state("finished hand has no archived tricks"));
    };
    let Some(trump) = state.trump else {
        return Ok(false);
    };
    let (winner_seat, winner_card) = winning_play(last, state.effective_trump(), state.ranking())?;
    let trump_seven = Card {
        suit: trump,
        rank: Rank::Seven,
    };
    Ok(winner_seat == state.actor && winner_card == trump_seven)
}

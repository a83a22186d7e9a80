//! Point tallies, ultimo credit, and the pooled actor/defense final score.

use serde::{Deserialize, Serialize};

use super::cards_logic::card_points;
use super::rules::POINTS_ULTIMO;
use super::state::{GameState, Phase, Seat};
use super::tricks::resolve_trick;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Winner {
    Actor,
    Defense,
}

/// Final tally of a finished hand. The two defenders are pooled as one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub actor_points: u16,
    pub defense_points: u16,
    pub actor_announcements: u16,
    pub defense_announcements: u16,
    /// Side with the higher point-plus-announcement total. The per-contract
    /// success test is [`evaluate_contract`](super::contracts::evaluate_contract).
    pub winner: Winner,
}

impl FinalScore {
    pub fn actor_total(&self) -> u16 {
        self.actor_points + self.actor_announcements
    }

    pub fn defense_total(&self) -> u16 {
        self.defense_points + self.defense_announcements
    }
}

/// Score a finished hand. Pure: calling it twice yields identical results.
///
/// Trick points come from collected piles; the ultimo bonus goes to whichever
/// side won the last archived trick.
pub fn calculate_final_score(state: &GameState) -> Result<FinalScore, DomainError> {
    if state.phase != Phase::Finished {
        return Err(DomainError::InvalidPhase {
            action: "score the hand",
            phase: state.phase,
        });
    }
    let Some(last) = state.history.last() else {
        return Err(DomainError::state("finished hand has no archived tricks"));
    };
    let ultimo_winner: Seat = resolve_trick(last, state.effective_trump(), state.ranking())?;

    let mut actor_points = 0u16;
    let mut defense_points = 0u16;
    let mut actor_announcements = 0u16;
    let mut defense_announcements = 0u16;

    for (seat, seat_state) in state.seats.iter().enumerate() {
        let points: u16 = seat_state.collected.iter().map(|&c| card_points(c)).sum();
        let announcements: u16 = seat_state.announcements.iter().map(|a| a.value).sum();
        if seat as Seat == state.actor {
            actor_points += points;
            actor_announcements += announcements;
        } else {
            defense_points += points;
            defense_announcements += announcements;
        }
    }

    if ultimo_winner == state.actor {
        actor_points += POINTS_ULTIMO;
    } else {
        defense_points += POINTS_ULTIMO;
    }

    let winner = if actor_points + actor_announcements > defense_points + defense_announcements {
        Winner::Actor
    } else {
        Winner::Defense
    };

    Ok(FinalScore {
        actor_points,
        defense_points,
        actor_announcements,
        defense_announcements,
        winner,
    })
}

//! Public snapshot API for observing game state without exposing internals.
//!
//! The presentation layer renders from these projections and from
//! [`legal_moves`](super::tricks::legal_moves); no other seat's hand ever
//! leaves the engine through a snapshot.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Suit};
use super::contracts::{evaluate_contract, Contract};
use super::rules::{SEATS, TALON_SIZE};
use super::scoring::{calculate_final_score, FinalScore};
use super::state::{Announcement, GameState, Phase, Seat};
use super::tricks::legal_moves;

/// Game-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameHeader {
    pub trump: Option<Suit>,
    pub contract: Option<Contract>,
    pub actor: Seat,
    pub seed: u64,
}

/// Top-level snapshot combining header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game: GameHeader,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Bidding(BiddingSnapshot),
    Talon(TalonSnapshot),
    Playing(PlayingSnapshot),
    Finished(FinishedSnapshot),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiddingSnapshot {
    pub to_act: Seat,
    /// Trump is chosen first; the contract pick follows.
    pub awaiting_contract: bool,
    pub available_contracts: Vec<Contract>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TalonSnapshot {
    pub to_act: Seat,
    pub cards_to_discard: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayingSnapshot {
    pub to_act: Seat,
    /// 1-based number of the trick in progress.
    pub trick_no: usize,
    pub current_trick: Vec<(Seat, Card)>,
    /// Admissible cards for the seat to act.
    pub playable: Vec<Card>,
    pub hand_sizes: [usize; SEATS],
    pub tricks_won: [usize; SEATS],
    pub announcements: Vec<(Seat, Announcement)>,
    pub last_trick: Option<Vec<(Seat, Card)>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinishedSnapshot {
    pub score: Option<FinalScore>,
    pub contract_made: Option<bool>,
    pub last_trick: Option<Vec<(Seat, Card)>>,
}

/// Entry point: produce a snapshot of the current game state.
/// Never fails; inconsistent states degrade to safe defaults.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let game = GameHeader {
        trump: state.trump,
        contract: state.contract,
        actor: state.actor,
        seed: state.seed,
    };
    let phase = match state.phase {
        Phase::Bidding => snapshot_bidding(state),
        Phase::Talon => PhaseSnapshot::Talon(TalonSnapshot {
            to_act: state.actor,
            cards_to_discard: TALON_SIZE,
        }),
        Phase::Playing => snapshot_playing(state),
        Phase::Finished => snapshot_finished(state),
    };
    GameSnapshot { game, phase }
}

fn snapshot_bidding(state: &GameState) -> PhaseSnapshot {
    PhaseSnapshot::Bidding(BiddingSnapshot {
        to_act: state.actor,
        awaiting_contract: state.trump.is_some(),
        available_contracts: Contract::ALL.to_vec(),
    })
}

fn snapshot_playing(state: &GameState) -> PhaseSnapshot {
    let mut hand_sizes = [0usize; SEATS];
    let mut tricks_won = [0usize; SEATS];
    let mut announcements = Vec::new();
    for (seat, seat_state) in state.seats.iter().enumerate() {
        hand_sizes[seat] = seat_state.hand.len();
        tricks_won[seat] = seat_state.collected.len() / SEATS;
        for &a in &seat_state.announcements {
            announcements.push((seat as Seat, a));
        }
    }
    let playable = legal_moves(state, state.turn).unwrap_or_default();

    PhaseSnapshot::Playing(PlayingSnapshot {
        to_act: state.turn,
        trick_no: state.history.len() + 1,
        current_trick: state.current_trick.plays.clone(),
        playable,
        hand_sizes,
        tricks_won,
        announcements,
        last_trick: state.history.last().map(|t| t.plays.clone()),
    })
}

fn snapshot_finished(state: &GameState) -> PhaseSnapshot {
    PhaseSnapshot::Finished(FinishedSnapshot {
        score: calculate_final_score(state).ok(),
        contract_made: evaluate_contract(state).ok(),
        last_trick: state.history.last().map(|t| t.plays.clone()),
    })
}

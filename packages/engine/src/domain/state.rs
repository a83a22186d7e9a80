//! Game state aggregate, phases, moves, and seat arithmetic.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Ranking, Suit};
use super::contracts::Contract;
use super::rules::SEATS;

/// Seat index, 0..=2. Seat 0 is the forhont and deals first.
pub type Seat = u8;

/// Hand progression phases. Strictly linear, no backward transitions; only a
/// new game leaves Finished.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Forhont picks the trump suit, then the contract.
    Bidding,
    /// Declarer buries two cards.
    Talon,
    /// Trick play.
    Playing,
    /// Hand complete; scoring and contract evaluation are available.
    Finished,
}

/// One trick. Open while `plays.len() < 3`; archived to history untouched
/// thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub lead_seat: Seat,
    pub plays: Vec<(Seat, Card)>,
}

impl Trick {
    pub fn empty(lead_seat: Seat) -> Self {
        Self {
            lead_seat,
            plays: Vec::with_capacity(SEATS),
        }
    }

    pub fn lead_card(&self) -> Option<Card> {
        self.plays.first().map(|&(_, card)| card)
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == SEATS
    }
}

/// King+Queen meld, recorded for the seat that led either card of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub suit: Suit,
    pub value: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatState {
    pub hand: Vec<Card>,
    /// Cards won in tricks; grows three at a time.
    pub collected: Vec<Card>,
    pub announcements: Vec<Announcement>,
}

impl SeatState {
    pub fn empty() -> Self {
        Self {
            hand: Vec::new(),
            collected: Vec::new(),
            announcements: Vec::new(),
        }
    }
}

/// The aggregate root. Mutated only through move application; every
/// application works on a fresh copy and leaves its input untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    /// Chosen trump suit; stays recorded even under Betl/Durch, where it has
    /// no effect (see [`GameState::effective_trump`]).
    pub trump: Option<Suit>,
    pub contract: Option<Contract>,
    pub seats: [SeatState; SEATS],
    /// Cards buried by the declarer.
    pub talon: Vec<Card>,
    pub current_trick: Trick,
    /// Archived tricks, append-only.
    pub history: Vec<Trick>,
    /// Seat expected to act next.
    pub turn: Seat,
    /// The declarer, playing alone against the other two seats.
    pub actor: Seat,
    pub seed: u64,
}

impl GameState {
    /// Fresh state for a seed: empty hands, phase Bidding, seat 0 as forhont
    /// and actor.
    pub fn new(seed: u64) -> Self {
        Self {
            phase: Phase::Bidding,
            trump: None,
            contract: None,
            seats: [SeatState::empty(), SeatState::empty(), SeatState::empty()],
            talon: Vec::new(),
            current_trick: Trick::empty(0),
            history: Vec::new(),
            turn: 0,
            actor: 0,
            seed,
        }
    }

    /// Trump suit that actually governs play: `None` under a no-trump
    /// contract even though the bid suit stays recorded.
    pub fn effective_trump(&self) -> Option<Suit> {
        match self.contract {
            Some(contract) if contract.is_no_trump() => None,
            _ => self.trump,
        }
    }

    /// Active rank-strength regime.
    pub fn ranking(&self) -> Ranking {
        self.contract.map_or(Ranking::TrumpGame, Contract::ranking)
    }

    /// Total cards across hands, collected piles, talon, and the open trick.
    /// Always equals the deck size from deal time onward.
    pub fn card_count(&self) -> usize {
        let seats: usize = self
            .seats
            .iter()
            .map(|s| s.hand.len() + s.collected.len())
            .sum();
        seats + self.talon.len() + self.current_trick.plays.len()
    }
}

/// A submitted action. Card plays and the talon discard act for the seat the
/// state machine expects (`turn`, resp. the declarer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Move {
    ChooseTrump(Suit),
    ChooseContract(Contract),
    DiscardTalon(Vec<Card>),
    PlayCard(Card),
}

#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % SEATS as Seat
}

/// The other defender for a defense seat; `None` for the actor.
/// The three seat indices sum to 3.
#[inline]
pub fn defense_partner(seat: Seat, actor: Seat) -> Option<Seat> {
    if seat == actor {
        None
    } else {
        Some(3 - seat - actor)
    }
}

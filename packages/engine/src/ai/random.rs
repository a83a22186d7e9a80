//! Random bot — uniform choice over legal moves.
//!
//! Baseline opponent and test foil. Seedable for reproducible games; without
//! a seed it draws from OS entropy.

use parking_lot::Mutex;
use rand::prelude::*;

use super::trait_def::{BotError, BotPlayer};
use crate::domain::cards_types::{Card, Suit};
use crate::domain::state::{GameState, Seat};
use crate::domain::tricks::legal_moves;

pub struct RandomPlayer {
    // Interior mutability: trait methods take &self, the RNG needs &mut.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "Random";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl BotPlayer for RandomPlayer {
    fn choose_trump(&self, state: &GameState, seat: Seat) -> Result<Suit, BotError> {
        let hand = &state.seats[seat as usize].hand;
        let held: Vec<Suit> = Suit::ALL
            .into_iter()
            .filter(|&s| hand.iter().any(|c| c.suit == s))
            .collect();
        let mut rng = self.rng.lock();
        held.choose(&mut *rng)
            .copied()
            .ok_or_else(|| BotError::NoMove("cannot pick trump from an empty hand".into()))
    }

    fn choose_play(&self, state: &GameState, seat: Seat) -> Result<Card, BotError> {
        let legal = legal_moves(state, seat)?;
        let mut rng = self.rng.lock();
        legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| BotError::NoMove("empty legal-move set".into()))
    }
}

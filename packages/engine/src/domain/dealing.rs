//! Deterministic deck construction, shuffling, and dealing.

use super::cards_types::{Card, Rank, Suit};
use super::rules::{DECK_SIZE, SEATS};
use super::state::GameState;

/// The full 32-card deck in canonical order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Deterministic RNG for shuffling.
///
/// SplitMix64: well-distributed, fast, and pinned here rather than delegated
/// to an external generator so a given seed keeps producing the same deal
/// across platforms and releases.
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z ^= z >> 30;
        z = z.wrapping_mul(0xBF58476D1CE4E5B9);
        z ^= z >> 27;
        z = z.wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_range(&mut self, max: usize) -> usize {
        let m = max as u64;
        // Rejection sampling above the largest multiple of m avoids modulo bias.
        let limit = u64::MAX - (u64::MAX % m);
        loop {
            let x = self.next();
            if x < limit {
                return (x % m) as usize;
            }
        }
    }
}

/// Fisher-Yates shuffle; identical seed, identical permutation.
pub fn shuffle_deck(deck: &mut [Card], seed: u64) {
    let mut rng = SplitMix64::new(seed);
    for i in (1..deck.len()).rev() {
        let j = rng.next_range(i + 1);
        deck.swap(i, j);
    }
}

/// Deal hands in the traditional pattern: 7 to the forhont and 5 to each
/// opponent, then 5 more all around. The forhont holds 12 cards until the
/// talon discard; the talon starts empty.
pub fn deal_hands(seed: u64) -> [Vec<Card>; SEATS] {
    let mut deck = full_deck();
    shuffle_deck(&mut deck, seed);

    let mut hands: [Vec<Card>; SEATS] = Default::default();
    let mut cursor = deck.into_iter();
    for (seat, count) in [(0, 7), (1, 5), (2, 5), (0, 5), (1, 5), (2, 5)] {
        hands[seat].extend(cursor.by_ref().take(count));
    }
    for hand in &mut hands {
        hand.sort();
    }
    hands
}

/// A freshly dealt hand: bidding phase, forhont holding 12 cards.
pub fn dealt_state(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    let hands = deal_hands(seed);
    for (seat, hand) in hands.into_iter().enumerate() {
        state.seats[seat].hand = hand;
    }
    state
}

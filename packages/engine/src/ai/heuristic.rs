//! Heuristic — the deterministic default bot.
//!
//! A judgment policy over the legal-move set, no multi-trick lookahead and no
//! RNG. The rules fire in a fixed, auditable order:
//!
//! Leading:
//! 1. Highest point-value boss card (guarantees the trick, banks points).
//! 2. Cheapest non-scoring, non-trump card (probing).
//! 3. Highest-ranked legal card.
//!
//! Following:
//! 1. Partner holds the trick and this seat closes it: grease (highest
//!    point-value legal card).
//! 2. Can beat the provisional winner: win as cheaply as possible.
//! 3. Cannot beat, partner winning: grease.
//! 4. Cannot beat, opponent winning: lowest non-trump discard, lowest trump
//!    only when nothing else remains.

use std::collections::HashSet;

use super::trait_def::{BotError, BotPlayer};
use crate::domain::cards_logic::{card_beats, card_points};
use crate::domain::cards_types::{Card, Rank, Ranking, Suit};
use crate::domain::rules::SEATS;
use crate::domain::state::{defense_partner, GameState, Seat};
use crate::domain::tricks::{legal_moves, winning_play};

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPlayer;

impl HeuristicPlayer {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    /// Cards this seat can account for: already played, or in its own hand.
    /// Everything else may still be held by somebody.
    fn accounted_for(state: &GameState, seat: Seat) -> HashSet<Card> {
        let mut seen: HashSet<Card> = state
            .history
            .iter()
            .flat_map(|t| t.plays.iter().map(|&(_, c)| c))
            .collect();
        seen.extend(state.current_trick.plays.iter().map(|&(_, c)| c));
        seen.extend(state.seats[seat as usize].hand.iter().copied());
        seen
    }

    /// A boss card is provably the highest remaining card of its suit: every
    /// card that would outrank it is accounted for.
    fn is_boss(card: Card, seen: &HashSet<Card>, ranking: Ranking) -> bool {
        Rank::ALL
            .iter()
            .filter(|&&r| ranking.strength(r) > ranking.strength(card.rank))
            .all(|&r| {
                seen.contains(&Card {
                    suit: card.suit,
                    rank: r,
                })
            })
    }

    fn lowest_by_strength(cards: &[Card], ranking: Ranking) -> Option<Card> {
        cards
            .iter()
            .copied()
            .min_by_key(|c| ranking.strength(c.rank))
    }

    fn highest_by_strength(cards: &[Card], ranking: Ranking) -> Option<Card> {
        cards
            .iter()
            .copied()
            .max_by_key(|c| ranking.strength(c.rank))
    }

    /// Highest point value; ties resolved toward the weaker card.
    fn grease_card(cards: &[Card], ranking: Ranking) -> Option<Card> {
        cards
            .iter()
            .copied()
            .max_by_key(|&c| (card_points(c), std::cmp::Reverse(ranking.strength(c.rank))))
    }

    fn choose_lead(state: &GameState, seat: Seat, legal: &[Card], ranking: Ranking) -> Card {
        let seen = Self::accounted_for(state, seat);
        let bosses: Vec<Card> = legal
            .iter()
            .copied()
            .filter(|&c| Self::is_boss(c, &seen, ranking))
            .collect();
        if let Some(card) = bosses
            .iter()
            .copied()
            .max_by_key(|&c| (card_points(c), ranking.strength(c.rank)))
        {
            return card;
        }

        let trump = state.effective_trump();
        let probes: Vec<Card> = legal
            .iter()
            .copied()
            .filter(|&c| card_points(c) == 0 && Some(c.suit) != trump)
            .collect();
        if let Some(card) = Self::lowest_by_strength(&probes, ranking) {
            return card;
        }

        Self::highest_by_strength(legal, ranking).unwrap_or(legal[0])
    }

    fn choose_follow(
        state: &GameState,
        seat: Seat,
        legal: &[Card],
        ranking: Ranking,
    ) -> Result<Card, BotError> {
        let trump = state.effective_trump();
        let Some(lead) = state.current_trick.lead_card() else {
            return Err(BotError::NoMove("follow called on an empty trick".into()));
        };
        let (win_seat, win_card) = winning_play(&state.current_trick, trump, ranking)?;
        let partner_winning = defense_partner(seat, state.actor) == Some(win_seat);
        let closes_trick = state.current_trick.plays.len() == SEATS - 1;

        let beating: Vec<Card> = legal
            .iter()
            .copied()
            .filter(|&c| card_beats(c, win_card, lead.suit, trump, ranking))
            .collect();

        if partner_winning && closes_trick {
            // The trick is already the partnership's; add points to it.
            return Ok(Self::grease_card(legal, ranking).unwrap_or(legal[0]));
        }
        if !beating.is_empty() {
            // Win as cheaply as possible.
            return Ok(Self::lowest_by_strength(&beating, ranking).unwrap_or(beating[0]));
        }
        if partner_winning {
            return Ok(Self::grease_card(legal, ranking).unwrap_or(legal[0]));
        }

        // Shed: lowest non-trump first, trump only when nothing else remains.
        let non_trump: Vec<Card> = legal
            .iter()
            .copied()
            .filter(|c| Some(c.suit) != trump)
            .collect();
        if let Some(card) = Self::lowest_by_strength(&non_trump, ranking) {
            return Ok(card);
        }
        Ok(Self::lowest_by_strength(legal, ranking).unwrap_or(legal[0]))
    }
}

impl BotPlayer for HeuristicPlayer {
    fn choose_trump(&self, state: &GameState, seat: Seat) -> Result<Suit, BotError> {
        let hand = &state.seats[seat as usize].hand;
        if hand.is_empty() {
            return Err(BotError::NoMove("cannot pick trump from an empty hand".into()));
        }
        // Favor length, then the quality of the top two cards.
        let mut best: Option<(i32, Suit)> = None;
        for suit in Suit::ALL {
            let mut strengths: Vec<i32> = hand
                .iter()
                .filter(|c| c.suit == suit)
                .map(|c| i32::from(Ranking::TrumpGame.strength(c.rank)))
                .collect();
            if strengths.is_empty() {
                continue;
            }
            strengths.sort_unstable_by(|a, b| b.cmp(a));
            let quality: i32 = strengths.iter().take(2).sum();
            let score = strengths.len() as i32 * 10 + quality;
            if best.is_none_or(|(b, _)| score > b) {
                best = Some((score, suit));
            }
        }
        best.map(|(_, suit)| suit)
            .ok_or_else(|| BotError::NoMove("no suit to choose".into()))
    }

    fn choose_play(&self, state: &GameState, seat: Seat) -> Result<Card, BotError> {
        let legal = legal_moves(state, seat)?;
        if state.current_trick.plays.is_empty() {
            Ok(Self::choose_lead(state, seat, &legal, state.ranking()))
        } else {
            Self::choose_follow(state, seat, &legal, state.ranking())
        }
    }
}

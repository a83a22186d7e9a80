//! Legal-move generation, trick resolution, and card play.

use super::cards_logic::card_beats;
use super::cards_types::{Card, Rank, Ranking, Suit};
use super::rules::{ANNOUNCEMENT_PLAIN, ANNOUNCEMENT_TRUMP};
use super::state::{next_seat, Announcement, GameState, Phase, Seat, Trick};
use crate::errors::domain::DomainError;

/// Admissible cards for `seat`, given the open trick.
///
/// Following the lead suit is mandatory; within it, beating the best
/// lead-suit card so far is mandatory when possible. A void seat must trump,
/// and must overtrump a trump already played, in trump contracts. Anything
/// else is a free discard. No-trump contracts skip the trump obligations
/// entirely.
pub fn legal_moves(state: &GameState, seat: Seat) -> Result<Vec<Card>, DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::InvalidPhase {
            action: "play a card",
            phase: state.phase,
        });
    }
    let hand = &state.seats[seat as usize].hand;
    if hand.is_empty() {
        return Err(DomainError::state(format!(
            "legal moves requested for seat {seat} with an empty hand"
        )));
    }
    let ranking = state.ranking();

    let Some(lead) = state.current_trick.lead_card() else {
        // Leading: every held card is playable.
        return Ok(hand.clone());
    };

    let in_suit: Vec<Card> = hand.iter().copied().filter(|c| c.suit == lead.suit).collect();
    if !in_suit.is_empty() {
        let best = highest_of_suit(&state.current_trick, lead.suit, ranking).unwrap_or(lead);
        let beating: Vec<Card> = in_suit
            .iter()
            .copied()
            .filter(|c| ranking.strength(c.rank) > ranking.strength(best.rank))
            .collect();
        return Ok(if beating.is_empty() { in_suit } else { beating });
    }

    if let Some(trump) = state.effective_trump() {
        let trumps: Vec<Card> = hand.iter().copied().filter(|c| c.suit == trump).collect();
        if !trumps.is_empty() {
            if let Some(best_trump) = highest_of_suit(&state.current_trick, trump, ranking) {
                let overtrumps: Vec<Card> = trumps
                    .iter()
                    .copied()
                    .filter(|c| ranking.strength(c.rank) > ranking.strength(best_trump.rank))
                    .collect();
                if !overtrumps.is_empty() {
                    return Ok(overtrumps);
                }
            }
            return Ok(trumps);
        }
    }

    // Void in lead suit and out of trumps (or no trump contract): discard.
    Ok(hand.clone())
}

fn highest_of_suit(trick: &Trick, suit: Suit, ranking: Ranking) -> Option<Card> {
    trick
        .plays
        .iter()
        .map(|&(_, card)| card)
        .filter(|c| c.suit == suit)
        .max_by_key(|c| ranking.strength(c.rank))
}

/// Winner of a trick under the given trump and ranking regime.
///
/// Works on any non-empty trick, so it also yields the provisional winner of
/// an open one. The result depends only on the seat-card associations, not on
/// play order beyond the lead.
pub fn resolve_trick(
    trick: &Trick,
    trump: Option<Suit>,
    ranking: Ranking,
) -> Result<Seat, DomainError> {
    winning_play(trick, trump, ranking).map(|(seat, _)| seat)
}

/// Winner and their card.
pub fn winning_play(
    trick: &Trick,
    trump: Option<Suit>,
    ranking: Ranking,
) -> Result<(Seat, Card), DomainError> {
    let Some(lead) = trick.lead_card() else {
        return Err(DomainError::state("cannot resolve an empty trick"));
    };
    let mut best = trick.plays[0];
    for &(seat, card) in &trick.plays[1..] {
        if card_beats(card, best.1, lead.suit, trump, ranking) {
            best = (seat, card);
        }
    }
    Ok(best)
}

/// Play one card for the seat on turn, mutating `state` in place.
///
/// Validation happens entirely before the first mutation. On the third card
/// the trick is resolved, collected, and archived; the winner leads the next
/// trick, and the hand finishes when every hand is empty.
pub(crate) fn play_card(state: &mut GameState, card: Card) -> Result<(), DomainError> {
    let seat = state.turn;
    let legal = legal_moves(state, seat)?;
    if !legal.contains(&card) {
        return Err(DomainError::illegal(format!(
            "{card} is not an admissible play for seat {seat}"
        )));
    }

    let is_lead = state.current_trick.plays.is_empty();
    let hand = &mut state.seats[seat as usize].hand;
    if let Some(pos) = hand.iter().position(|&c| c == card) {
        hand.remove(pos);
    }

    if is_lead {
        state.current_trick.lead_seat = seat;
        record_announcement(state, seat, card);
    }
    state.current_trick.plays.push((seat, card));

    if !state.current_trick.is_complete() {
        state.turn = next_seat(seat);
        return Ok(());
    }

    let (winner, _) = winning_play(&state.current_trick, state.effective_trump(), state.ranking())?;
    let finished = std::mem::replace(&mut state.current_trick, Trick::empty(winner));
    let pile = &mut state.seats[winner as usize].collected;
    pile.extend(finished.plays.iter().map(|&(_, c)| c));
    state.history.push(finished);
    state.turn = winner;

    if state.seats.iter().all(|s| s.hand.is_empty()) {
        state.phase = Phase::Finished;
    }
    Ok(())
}

/// Record a King+Queen meld when the led card is one of the pair and its
/// partner is still in hand. The cards leave the hand afterwards, so a suit
/// can never be announced twice.
fn record_announcement(state: &mut GameState, seat: Seat, led: Card) {
    let partner_rank = match led.rank {
        Rank::King => Rank::Queen,
        Rank::Queen => Rank::King,
        _ => return,
    };
    let holds_partner = state.seats[seat as usize]
        .hand
        .iter()
        .any(|c| c.suit == led.suit && c.rank == partner_rank);
    if !holds_partner {
        return;
    }
    let value = if state.effective_trump() == Some(led.suit) {
        ANNOUNCEMENT_TRUMP
    } else {
        ANNOUNCEMENT_PLAIN
    };
    state.seats[seat as usize].announcements.push(Announcement {
        suit: led.suit,
        value,
    });
}

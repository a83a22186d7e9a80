//! Card comparisons: point values, beat tests, suit lookups.

use super::cards_types::{Card, Rank, Ranking, Suit};
use super::rules::POINTS_ACE_TEN;

/// Point value of a card, independent of the ranking regime.
pub fn card_points(card: Card) -> u16 {
    match card.rank {
        Rank::Ace | Rank::Ten => POINTS_ACE_TEN,
        _ => 0,
    }
}

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Does `candidate` beat the provisional winner `incumbent`?
///
/// `trump` is the effective trump of the hand (`None` under Betl/Durch).
/// Off-suit non-trump cards never win.
pub fn card_beats(
    candidate: Card,
    incumbent: Card,
    lead: Suit,
    trump: Option<Suit>,
    ranking: Ranking,
) -> bool {
    if let Some(trump_suit) = trump {
        let candidate_trump = candidate.suit == trump_suit;
        let incumbent_trump = incumbent.suit == trump_suit;
        if candidate_trump && !incumbent_trump {
            return true;
        }
        if incumbent_trump && !candidate_trump {
            return false;
        }
        if candidate_trump && incumbent_trump {
            return ranking.strength(candidate.rank) > ranking.strength(incumbent.rank);
        }
    }
    // No trump involved: only lead-suit cards can beat others.
    let candidate_follows = candidate.suit == lead;
    let incumbent_follows = incumbent.suit == lead;
    if candidate_follows && !incumbent_follows {
        return true;
    }
    if incumbent_follows && !candidate_follows {
        return false;
    }
    if candidate_follows && incumbent_follows {
        return ranking.strength(candidate.rank) > ranking.strength(incumbent.rank);
    }
    false
}

//! Core card types: Suit, Rank, Card, and the rank-strength regimes.

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    /// Srdce
    Hearts,
    /// Listy
    Leaves,
    /// Žalude
    Acorns,
    /// Gule
    Bells,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Leaves, Suit::Acorns, Suit::Bells];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

// Note: Ord/Eq on Card is only for stable sorting: suit order H<L<A<B then
// natural rank order. Never use it for trick comparisons; those go through
// `Ranking` so the contract-dependent regimes cannot drift apart.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The two total rank orders, selected by the active contract family.
///
/// In trump games the Ten outranks the King; in Betl and Durch the ranks run
/// in their natural order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Ranking {
    /// 7 < 8 < 9 < J < Q < K < 10 < A
    TrumpGame,
    /// 7 < 8 < 9 < 10 < J < Q < K < A
    Natural,
}

impl Ranking {
    /// Strength of a rank under this regime; higher wins.
    pub fn strength(self, rank: Rank) -> u8 {
        match self {
            Ranking::TrumpGame => match rank {
                Rank::Seven => 0,
                Rank::Eight => 1,
                Rank::Nine => 2,
                Rank::Jack => 3,
                Rank::Queen => 4,
                Rank::King => 5,
                Rank::Ten => 6,
                Rank::Ace => 7,
            },
            Ranking::Natural => match rank {
                Rank::Seven => 0,
                Rank::Eight => 1,
                Rank::Nine => 2,
                Rank::Ten => 3,
                Rank::Jack => 4,
                Rank::Queen => 5,
                Rank::King => 6,
                Rank::Ace => 7,
            },
        }
    }
}

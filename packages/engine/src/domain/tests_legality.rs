//! Legal-move generator rulings, including the classic example table:
//! mandatory follow, mandatory overtake, mandatory trump/overtrump, and free
//! discard, in both ranking regimes.

use crate::domain::contracts::Contract;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{card, parse_cards, playing_state, with_trick};
use crate::domain::tricks::legal_moves;
use crate::domain::Suit;
use crate::errors::domain::DomainError;

struct LegalCase {
    name: &'static str,
    trump: Option<Suit>,
    contract: Contract,
    /// Lead card (seat 1) and at most one further play (seat 2); seat 0 acts.
    lead: Option<&'static str>,
    previous: &'static [&'static str],
    hand: &'static [&'static str],
    allowed: &'static [&'static str],
}

const CASES: &[LegalCase] = &[
    LegalCase {
        name: "follow suit and beat when possible",
        trump: Some(Suit::Bells),
        contract: Contract::Game,
        lead: Some("9H"),
        previous: &[],
        hand: &["7H", "KH", "AL"],
        allowed: &["KH"],
    },
    LegalCase {
        name: "must trump when void in the lead suit",
        trump: Some(Suit::Hearts),
        contract: Contract::Game,
        lead: Some("AL"),
        previous: &[],
        hand: &["7H", "8B"],
        allowed: &["7H"],
    },
    LegalCase {
        name: "must overtrump a trump already played",
        trump: Some(Suit::Hearts),
        contract: Contract::Game,
        lead: Some("JL"),
        previous: &["9H"],
        hand: &["TH", "7H", "AB"],
        allowed: &["TH"],
    },
    LegalCase {
        name: "undertrump allowed when overtrumping is impossible",
        trump: Some(Suit::Hearts),
        contract: Contract::Game,
        lead: Some("JL"),
        previous: &["AH"],
        hand: &["7H", "8B"],
        allowed: &["7H"],
    },
    LegalCase {
        name: "leading is unrestricted",
        trump: Some(Suit::Bells),
        contract: Contract::Game,
        lead: None,
        previous: &[],
        hand: &["AH", "7L"],
        allowed: &["AH", "7L"],
    },
    LegalCase {
        name: "betl has no trump, only the lead suit binds",
        trump: None,
        contract: Contract::Betl,
        lead: Some("TB"),
        previous: &[],
        hand: &["JB", "9B", "AH"],
        allowed: &["JB"],
    },
    LegalCase {
        name: "follow without beating when nothing beats",
        trump: Some(Suit::Acorns),
        contract: Contract::Game,
        lead: Some("AH"),
        previous: &[],
        hand: &["TH", "7H"],
        allowed: &["TH", "7H"],
    },
    LegalCase {
        name: "free discard when void in lead suit and trumps",
        trump: Some(Suit::Hearts),
        contract: Contract::Game,
        lead: Some("8L"),
        previous: &[],
        hand: &["QB", "KA"],
        allowed: &["QB", "KA"],
    },
    LegalCase {
        name: "trump lead must be beaten in trumps",
        trump: Some(Suit::Bells),
        contract: Contract::Game,
        lead: Some("8B"),
        previous: &[],
        hand: &["TB", "7B"],
        allowed: &["TB"],
    },
    LegalCase {
        name: "durch follows the same rules as betl",
        trump: None,
        contract: Contract::Durch,
        lead: Some("7A"),
        previous: &[],
        hand: &["AA", "AL"],
        allowed: &["AA"],
    },
    LegalCase {
        name: "every beating card of the lead suit is admissible",
        trump: Some(Suit::Leaves),
        contract: Contract::Game,
        lead: Some("JH"),
        previous: &[],
        hand: &["QH", "KH", "TH"],
        allowed: &["QH", "KH", "TH"],
    },
    LegalCase {
        name: "third seat must overtrump the second",
        trump: Some(Suit::Bells),
        contract: Contract::Game,
        lead: Some("AA"),
        previous: &["TB"],
        hand: &["AB", "7B"],
        allowed: &["AB"],
    },
    LegalCase {
        name: "betl overtaking uses the natural order",
        trump: None,
        contract: Contract::Betl,
        lead: Some("KH"),
        previous: &[],
        hand: &["AH", "QH"],
        allowed: &["AH"],
    },
    LegalCase {
        name: "trump-game overtaking puts the ten above the king",
        trump: Some(Suit::Leaves),
        contract: Contract::Game,
        lead: Some("KH"),
        previous: &[],
        hand: &["TH", "QH"],
        allowed: &["TH"],
    },
    LegalCase {
        name: "a lone trump seven must be played to the last trick",
        trump: Some(Suit::Hearts),
        contract: Contract::Seven,
        lead: Some("AB"),
        previous: &[],
        hand: &["7H"],
        allowed: &["7H"],
    },
];

fn run_case(case: &LegalCase) -> Vec<crate::domain::Card> {
    let hands = [parse_cards(case.hand), Vec::new(), Vec::new()];
    let state = playing_state(hands, case.trump, case.contract, 0);
    let state = match case.lead {
        Some(lead) => {
            let mut plays = vec![(1, lead)];
            plays.extend(case.previous.iter().map(|&p| (2, p)));
            with_trick(state, 1, &plays)
        }
        None => state,
    };
    let mut legal = legal_moves(&state, 0).expect("legal moves available");
    legal.sort();
    legal
}

#[test]
fn example_table_rulings() {
    for case in CASES {
        let mut expected = parse_cards(case.allowed);
        expected.sort();
        assert_eq!(run_case(case), expected, "case failed: {}", case.name);
    }
}

#[test]
fn beating_is_mandatory_within_the_lead_suit() {
    // Ten beats the led ace? No: ace leads, nothing beats. Ace in hand over a
    // led ten: only the ace is playable.
    let hands = [parse_cards(&["AH", "7H"]), Vec::new(), Vec::new()];
    let state = playing_state(hands, Some(Suit::Bells), Contract::Game, 0);
    let state = with_trick(state, 1, &[(1, "TH")]);
    assert_eq!(
        legal_moves(&state, 0).expect("legal moves available"),
        vec![card("AH")]
    );
}

#[test]
fn forced_trump_excludes_plain_discards() {
    let hands = [parse_cards(&["7B", "AL"]), Vec::new(), Vec::new()];
    let state = playing_state(hands, Some(Suit::Bells), Contract::Game, 0);
    let state = with_trick(state, 1, &[(1, "TH")]);
    let legal = legal_moves(&state, 0).expect("legal moves available");
    assert!(legal.contains(&card("7B")));
    assert!(!legal.contains(&card("AL")));
}

#[test]
fn empty_hand_is_an_invalid_state() {
    let hands = [Vec::new(), parse_cards(&["AH"]), parse_cards(&["7B"])];
    let state = playing_state(hands, Some(Suit::Bells), Contract::Game, 0);
    assert!(matches!(
        legal_moves(&state, 0),
        Err(DomainError::InvalidState(_))
    ));
}

#[test]
fn legal_moves_outside_playing_phase_fail() {
    let mut state = playing_state(
        [parse_cards(&["AH"]), Vec::new(), Vec::new()],
        Some(Suit::Bells),
        Contract::Game,
        0,
    );
    state.phase = Phase::Bidding;
    assert!(matches!(
        legal_moves(&state, 0),
        Err(DomainError::InvalidPhase { .. })
    ));
}

//! Heuristic rule-order tests: boss leads, probes, greasing, cheap wins,
//! low discards.

use crate::ai::{create_bot, get_bot_move, BotPlayer, HeuristicPlayer, RandomPlayer};
use crate::domain::contracts::Contract;
use crate::domain::test_state_helpers::{card, parse_cards, playing_state, with_trick};
use crate::domain::Suit;

#[test]
fn leads_the_highest_scoring_boss_card() {
    // The heart ace is the highest card of its suit by definition.
    let hands = [
        parse_cards(&["AH", "7L", "8A"]),
        parse_cards(&["KH", "9L", "9A"]),
        parse_cards(&["TH", "TL", "TA"]),
    ];
    let state = playing_state(hands, Some(Suit::Bells), Contract::Game, 0);
    assert_eq!(get_bot_move(&state, 0).expect("bot move"), card("AH"));
}

#[test]
fn boss_status_counts_cards_already_played() {
    // The heart ace sits in the bot's own hand, so the ten is boss too and
    // outscores every other lead.
    let hands = [
        parse_cards(&["AH", "TH", "7L"]),
        parse_cards(&["KH", "9L", "9A"]),
        parse_cards(&["QH", "TL", "TA"]),
    ];
    let state = playing_state(hands, Some(Suit::Bells), Contract::Game, 0);
    // Both AH and TH are boss and worth ten; the ace outranks.
    assert_eq!(get_bot_move(&state, 0).expect("bot move"), card("AH"));
}

#[test]
fn probes_with_a_cheap_plain_card_when_no_boss_exists() {
    // No boss: the heart king loses to the unseen ace and ten, the leaves
    // nine to four unseen cards. The cheapest non-scoring non-trump card
    // goes out.
    let hands = [
        parse_cards(&["KH", "9L", "8B"]),
        parse_cards(&["AH", "TL", "9B"]),
        parse_cards(&["TH", "AL", "TB"]),
    ];
    let state = playing_state(hands, Some(Suit::Bells), Contract::Game, 0);
    assert_eq!(get_bot_move(&state, 0).expect("bot move"), card("9L"));
}

#[test]
fn falls_back_to_the_highest_card_when_only_scoring_or_trump_remain() {
    // Hand of a ten (scoring, not boss while the ace is out) and low trumps.
    let hands = [
        parse_cards(&["TH", "8B", "9B"]),
        parse_cards(&["AH", "KL", "JB"]),
        parse_cards(&["KH", "AL", "QB"]),
    ];
    let state = playing_state(hands, Some(Suit::Bells), Contract::Game, 0);
    // No boss, no plain non-scoring card: highest-ranked legal card leads.
    assert_eq!(get_bot_move(&state, 0).expect("bot move"), card("TH"));
}

#[test]
fn wins_as_cheaply_as_possible_against_an_opponent() {
    // Seat 1 defends against actor 0, who led the nine.
    let hands = [
        parse_cards(&["7L"]),
        parse_cards(&["KH", "TH", "AH"]),
        parse_cards(&["8L"]),
    ];
    let state = playing_state(hands, Some(Suit::Bells), Contract::Game, 0);
    let mut state = with_trick(state, 0, &[(0, "9H")]);
    state.turn = 1;
    // All three hearts beat the nine; the king is the cheapest winner.
    assert_eq!(get_bot_move(&state, 1).expect("bot move"), card("KH"));
}

#[test]
fn greases_the_partners_trick_when_closing() {
    // Defense partners are seats 1 and 2 against actor 0. Seat 1 holds the
    // trick with the ace; seat 2 closes and gifts its ten.
    let hands = [
        parse_cards(&["7L"]),
        parse_cards(&["8L"]),
        parse_cards(&["7H", "TH"]),
    ];
    let state = playing_state(hands, Some(Suit::Bells), Contract::Game, 0);
    let mut state = with_trick(state, 0, &[(0, "9H"), (1, "AH")]);
    state.turn = 2;
    assert_eq!(get_bot_move(&state, 2).expect("bot move"), card("TH"));
}

#[test]
fn greases_even_when_unable_to_win() {
    let hands = [
        parse_cards(&["7L"]),
        parse_cards(&["8L"]),
        parse_cards(&["7H", "TH"]),
    ];
    let state = playing_state(hands, Some(Suit::Bells), Contract::Game, 0);
    // Partner's ace already towers over anything the bot holds.
    let mut state = with_trick(state, 0, &[(0, "KH"), (1, "AH")]);
    state.turn = 2;
    assert_eq!(get_bot_move(&state, 2).expect("bot move"), card("TH"));
}

#[test]
fn discards_the_cheapest_plain_card_when_out_of_the_fight() {
    // The actor's ace holds the trick; the bot is void in hearts and out of
    // trumps, so everything is legal and the cheapest plain card goes.
    let hands = [
        parse_cards(&["7H"]),
        parse_cards(&["9A", "7L", "TA"]),
        parse_cards(&["8H"]),
    ];
    let state = playing_state(hands, Some(Suit::Bells), Contract::Game, 0);
    let mut state = with_trick(state, 0, &[(0, "AH")]);
    state.turn = 1;
    assert_eq!(get_bot_move(&state, 1).expect("bot move"), card("7L"));
}

#[test]
fn sheds_the_lowest_trump_when_nothing_else_remains() {
    // Actor 1 trumped high; partner 0 is not winning; only trumps in hand.
    let hands = [
        parse_cards(&["9H"]),
        parse_cards(&["7A"]),
        parse_cards(&["8B", "9B"]),
    ];
    let state = playing_state(hands, Some(Suit::Bells), Contract::Game, 1);
    let mut state = with_trick(state, 0, &[(0, "AH"), (1, "TB")]);
    state.actor = 1;
    state.turn = 2;
    assert_eq!(get_bot_move(&state, 2).expect("bot move"), card("8B"));
}

#[test]
fn chooses_trump_from_the_longest_strongest_suit() {
    let hands = [
        parse_cards(&["7B", "8B", "9B", "TB", "AB", "7H", "8H", "KL", "QA", "JA", "9A", "8A"]),
        Vec::new(),
        Vec::new(),
    ];
    let mut state = playing_state(hands, None, Contract::Game, 0);
    state.contract = None;
    state.phase = crate::domain::Phase::Bidding;
    let bot = HeuristicPlayer::new();
    assert_eq!(bot.choose_trump(&state, 0).expect("trump choice"), Suit::Bells);
}

#[test]
fn random_player_stays_within_the_legal_set() {
    let hands = [
        parse_cards(&["7L"]),
        parse_cards(&["KH", "TH", "AH", "8L"]),
        parse_cards(&["8H"]),
    ];
    let state = playing_state(hands, Some(Suit::Bells), Contract::Game, 0);
    let mut state = with_trick(state, 0, &[(0, "9H")]);
    state.turn = 1;
    let legal = crate::domain::tricks::legal_moves(&state, 1).expect("legal moves");
    let bot = RandomPlayer::new(Some(99));
    for _ in 0..16 {
        let choice = bot.choose_play(&state, 1).expect("bot move");
        assert!(legal.contains(&choice));
    }
}

#[test]
fn registry_resolves_known_bots() {
    assert!(create_bot("heuristic", None).is_some());
    assert!(create_bot("random", Some(1)).is_some());
    assert!(create_bot("grandmaster", None).is_none());
}

//! Hand counting integration tests.

use cribcount::{
    Card, HandError, MAX_HAND_SCORE, Rank, ScoreBreakdown, ScoreKind, Suit, calculate_hand_score,
    full_deck,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn cards(notation: &[&str]) -> Vec<Card> {
    notation.iter().map(|s| s.parse().unwrap()).collect()
}

fn count(hand: &[&str], starter: Option<&str>, is_crib: bool) -> ScoreBreakdown {
    let starter = starter.map(|s| s.parse().unwrap());
    calculate_hand_score(&cards(hand), starter, is_crib).unwrap()
}

fn kinds(breakdown: &ScoreBreakdown, kind: ScoreKind) -> usize {
    breakdown
        .items()
        .iter()
        .filter(|item| item.kind == kind)
        .count()
}

/// Items reduced to an order-independent form.
fn normalized(breakdown: &ScoreBreakdown) -> Vec<(&'static str, u8, Vec<(Rank, Suit)>)> {
    let mut items: Vec<_> = breakdown
        .items()
        .iter()
        .map(|item| {
            let mut cards: Vec<_> = item.cards.iter().map(|c| (c.rank, c.suit)).collect();
            cards.sort_unstable();
            (item.kind.as_str(), item.points, cards)
        })
        .collect();
    items.sort();
    items
}

#[test]
fn perfect_hand_scores_29() {
    let breakdown = count(&["5S", "5H", "5D", "JC"], Some("5C"), false);

    assert_eq!(breakdown.total(), 29);
    assert!(breakdown.is_perfect());
    assert_eq!(kinds(&breakdown, ScoreKind::Fifteen), 8);
    assert_eq!(kinds(&breakdown, ScoreKind::FourOfKind), 1);
    assert_eq!(kinds(&breakdown, ScoreKind::Pair), 0);
    assert_eq!(breakdown.points_for(ScoreKind::FourOfKind), 12);

    let nobs: Vec<_> = breakdown
        .items()
        .iter()
        .filter(|item| item.kind == ScoreKind::Nobs)
        .collect();
    assert_eq!(nobs.len(), 1);
    assert_eq!(nobs[0].cards, vec![card(Rank::Jack, Suit::Clubs)]);
    assert_eq!(nobs[0].description, "Nobs (Jack of clubs) for 1");
}

#[test]
fn hand_with_nothing_scores_zero() {
    let breakdown = count(&["AS", "3H", "7D", "9C"], Some("KS"), false);

    assert_eq!(breakdown.total(), 0);
    assert!(breakdown.is_empty());
}

#[test]
fn six_and_nine_make_the_only_fifteen() {
    let breakdown = count(&["AS", "3H", "6D", "9C"], Some("KS"), false);

    assert_eq!(breakdown.total(), 2);
    assert_eq!(breakdown.items().len(), 1);
    let item = &breakdown.items()[0];
    assert_eq!(item.kind, ScoreKind::Fifteen);
    assert_eq!(item.cards, cards(&["6D", "9C"]));
    assert_eq!(item.description, "Fifteen for 2 (6D, 9C)");
}

#[test]
fn four_card_flush_in_hand() {
    let breakdown = count(&["2S", "4S", "7S", "9S"], Some("KH"), false);

    assert_eq!(kinds(&breakdown, ScoreKind::Flush), 1);
    assert_eq!(breakdown.points_for(ScoreKind::Flush), 4);
    // 2 + 4 + 9
    assert_eq!(breakdown.points_for(ScoreKind::Fifteen), 2);
    assert_eq!(breakdown.total(), 6);
}

#[test]
fn five_card_flush_supersedes_four() {
    let breakdown = count(&["2S", "4S", "7S", "9S"], Some("KS"), false);

    assert_eq!(kinds(&breakdown, ScoreKind::Flush), 1);
    let flush = breakdown
        .items()
        .iter()
        .find(|item| item.kind == ScoreKind::Flush)
        .unwrap();
    assert_eq!(flush.points, 5);
    assert_eq!(flush.cards.len(), 5);
    assert_eq!(flush.description, "Flush of 5 for 5");
    assert_eq!(breakdown.total(), 7);
}

#[test]
fn crib_flush_needs_starter_suit() {
    let breakdown = count(&["2S", "4S", "7S", "9S"], Some("KH"), true);
    assert_eq!(kinds(&breakdown, ScoreKind::Flush), 0);
    assert_eq!(breakdown.total(), 2);

    let breakdown = count(&["2S", "4S", "7S", "9S"], Some("KS"), true);
    assert_eq!(breakdown.points_for(ScoreKind::Flush), 5);

    let breakdown = count(&["2S", "4S", "7S", "9S"], None, true);
    assert_eq!(kinds(&breakdown, ScoreKind::Flush), 0);
}

#[test]
fn starter_suit_alone_does_not_make_a_flush() {
    let breakdown = count(&["2S", "4S", "7S", "9H"], Some("KS"), false);
    assert_eq!(kinds(&breakdown, ScoreKind::Flush), 0);
}

#[test]
fn double_run_scores_each_instance() {
    let breakdown = count(&["4S", "5S", "5H", "6S"], None, false);

    assert_eq!(kinds(&breakdown, ScoreKind::Run), 2);
    assert_eq!(breakdown.points_for(ScoreKind::Run), 6);
    assert_eq!(kinds(&breakdown, ScoreKind::Pair), 1);
    assert_eq!(breakdown.points_for(ScoreKind::Pair), 2);
    // 4 + 5 + 6 with either five
    assert_eq!(breakdown.points_for(ScoreKind::Fifteen), 4);
    assert_eq!(breakdown.total(), 12);

    let runs: Vec<_> = breakdown
        .items()
        .iter()
        .filter(|item| item.kind == ScoreKind::Run)
        .map(|item| item.description.as_str())
        .collect();
    assert_eq!(
        runs,
        ["Run of 3 for 3 (4S, 5S, 6S)", "Run of 3 for 3 (4S, 5H, 6S)"]
    );
}

#[test]
fn double_double_run() {
    let breakdown = count(&["3S", "4S", "4H", "5S"], Some("5H"), false);

    assert_eq!(kinds(&breakdown, ScoreKind::Run), 4);
    assert_eq!(breakdown.points_for(ScoreKind::Run), 12);
    assert_eq!(kinds(&breakdown, ScoreKind::Pair), 2);
    assert_eq!(breakdown.points_for(ScoreKind::Fifteen), 0);
    assert_eq!(breakdown.total(), 16);
}

#[test]
fn triple_run_with_three_of_a_kind() {
    let breakdown = count(&["4S", "5S", "5H", "6S"], Some("5D"), false);

    assert_eq!(kinds(&breakdown, ScoreKind::Run), 3);
    assert_eq!(kinds(&breakdown, ScoreKind::Pair), 0);
    assert_eq!(kinds(&breakdown, ScoreKind::ThreeOfKind), 1);

    let set = breakdown
        .items()
        .iter()
        .find(|item| item.kind == ScoreKind::ThreeOfKind)
        .unwrap();
    assert_eq!(set.points, 6);
    assert_eq!(set.cards, cards(&["5S", "5H", "5D"]));
    assert_eq!(set.description, "Three 5s for 6");

    assert_eq!(breakdown.points_for(ScoreKind::Fifteen), 8);
    assert_eq!(breakdown.total(), 23);
}

#[test]
fn long_run_is_scored_once() {
    let breakdown = count(&["AS", "2H", "3D", "4C"], Some("5S"), false);

    assert_eq!(kinds(&breakdown, ScoreKind::Run), 1);
    assert_eq!(breakdown.points_for(ScoreKind::Run), 5);
    assert_eq!(breakdown.points_for(ScoreKind::Fifteen), 2);
    assert_eq!(breakdown.total(), 7);
}

#[test]
fn runs_do_not_wrap_around() {
    let breakdown = count(&["QS", "KH", "AD", "2C"], None, false);
    assert_eq!(kinds(&breakdown, ScoreKind::Run), 0);
}

#[test]
fn nobs_matches_starter_suit() {
    let breakdown = count(&["JS", "2H", "7D", "9C"], Some("2S"), false);

    assert_eq!(kinds(&breakdown, ScoreKind::Nobs), 1);
    let nobs = breakdown
        .items()
        .iter()
        .find(|item| item.kind == ScoreKind::Nobs)
        .unwrap();
    assert_eq!(nobs.points, 1);
    assert_eq!(nobs.cards, vec![card(Rank::Jack, Suit::Spades)]);
    assert_eq!(breakdown.total(), 3);
}

#[test]
fn no_nobs_without_matching_jack() {
    let breakdown = count(&["JS", "2H", "7D", "9C"], Some("2D"), false);
    assert_eq!(kinds(&breakdown, ScoreKind::Nobs), 0);

    let breakdown = count(&["JS", "2H", "7D", "9C"], None, false);
    assert_eq!(kinds(&breakdown, ScoreKind::Nobs), 0);

    // A Jack starter is his heels, not nobs.
    let breakdown = count(&["QS", "2H", "7D", "9C"], Some("JS"), false);
    assert_eq!(kinds(&breakdown, ScoreKind::Nobs), 0);
}

#[test]
fn pair_description_uses_rank_symbol() {
    let breakdown = count(&["KS", "KH", "2D", "7C"], None, false);

    let pair = breakdown
        .items()
        .iter()
        .find(|item| item.kind == ScoreKind::Pair)
        .unwrap();
    assert_eq!(pair.description, "Pair of Ks for 2");
    assert_eq!(pair.cards, cards(&["KS", "KH"]));
}

#[test]
fn rejects_wrong_hand_size() {
    let three = cards(&["2S", "4S", "7S"]);
    assert_eq!(
        calculate_hand_score(&three, None, false),
        Err(HandError::InvalidHandSize { len: 3 })
    );

    let five = cards(&["2S", "4S", "7S", "9S", "KS"]);
    assert_eq!(
        calculate_hand_score(&five, None, false),
        Err(HandError::InvalidHandSize { len: 5 })
    );
}

#[test]
fn rejects_duplicate_cards() {
    let hand = cards(&["2S", "4S", "2S", "9S"]);
    assert_eq!(
        calculate_hand_score(&hand, None, false),
        Err(HandError::DuplicateCard(card(Rank::Two, Suit::Spades)))
    );

    let hand = cards(&["2S", "4S", "7S", "9S"]);
    assert_eq!(
        calculate_hand_score(&hand, Some(card(Rank::Nine, Suit::Spades)), false),
        Err(HandError::DuplicateCard(card(Rank::Nine, Suit::Spades)))
    );
}

#[test]
fn random_hands_hold_breakdown_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(29);
    let mut deck = full_deck();

    for round in 0..2_000 {
        deck.shuffle(&mut rng);
        let hand = &deck[..4];
        let starter = (round % 5 != 0).then_some(deck[4]);
        let is_crib = round % 2 == 0;

        let breakdown = calculate_hand_score(hand, starter, is_crib).unwrap();
        let sum: u8 = breakdown.items().iter().map(|item| item.points).sum();
        assert_eq!(breakdown.total(), sum);
        assert!(breakdown.total() <= MAX_HAND_SCORE);

        let again = calculate_hand_score(hand, starter, is_crib).unwrap();
        assert_eq!(breakdown, again);

        let mut permuted = hand.to_vec();
        permuted.reverse();
        permuted.rotate_left(round % 4);
        let reordered = calculate_hand_score(&permuted, starter, is_crib).unwrap();
        assert_eq!(reordered.total(), breakdown.total());
        assert_eq!(normalized(&reordered), normalized(&breakdown));
    }
}

//! Cribbage hand counting.
//!
//! [`calculate_hand_score`] counts a four-card hand together with the optional
//! starter and returns every scoring combination as its own [`ScoreItem`]:
//! fifteens, pairs and sets, runs, flush, and nobs.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use crate::card::{Card, Rank, cards_to_string};
use crate::error::HandError;
use crate::result::{ScoreBreakdown, ScoreItem, ScoreKind};

/// Number of cards held in a hand or crib, not counting the starter.
pub const HAND_SIZE: usize = 4;

const FIFTEEN: u8 = 15;

/// Counts a hand or crib.
///
/// `hand` must hold exactly four distinct cards and `starter`, when present,
/// must not be one of them. A crib only scores a flush when the starter
/// matches the suit too.
///
/// # Errors
///
/// Returns [`HandError::InvalidHandSize`] if `hand` does not hold four cards,
/// or [`HandError::DuplicateCard`] if any card appears twice.
///
/// # Example
///
/// ```
/// use cribcount::{Card, Rank, Suit, calculate_hand_score};
///
/// let hand = [
///     Card::new(Rank::Five, Suit::Spades),
///     Card::new(Rank::Five, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Diamonds),
///     Card::new(Rank::Jack, Suit::Clubs),
/// ];
/// let starter = Card::new(Rank::Five, Suit::Clubs);
///
/// let breakdown = calculate_hand_score(&hand, Some(starter), false).unwrap();
/// assert_eq!(breakdown.total(), 29);
/// ```
#[tracing::instrument(level = "debug", skip(hand, starter))]
pub fn calculate_hand_score(
    hand: &[Card],
    starter: Option<Card>,
    is_crib: bool,
) -> Result<ScoreBreakdown, HandError> {
    validate(hand, starter)?;

    let mut all_cards = hand.to_vec();
    all_cards.extend(starter);

    let mut items = fifteens(&all_cards);
    items.extend(pairs(&all_cards));
    items.extend(runs(&all_cards));
    items.extend(flush(hand, starter, is_crib));
    items.extend(nobs(hand, starter));

    let breakdown = ScoreBreakdown::from_items(items);
    tracing::debug!(
        items = breakdown.items().len(),
        total = breakdown.total(),
        "counted hand"
    );
    Ok(breakdown)
}

fn validate(hand: &[Card], starter: Option<Card>) -> Result<(), HandError> {
    if hand.len() != HAND_SIZE {
        return Err(HandError::InvalidHandSize { len: hand.len() });
    }

    for (index, card) in hand.iter().chain(starter.as_ref()).enumerate() {
        if hand[..index.min(HAND_SIZE)].contains(card) {
            return Err(HandError::DuplicateCard(*card));
        }
    }

    Ok(())
}

/// Every subset of `cards` whose values sum to fifteen, in bitmask order.
fn fifteens(cards: &[Card]) -> Vec<ScoreItem> {
    let mut items = Vec::new();

    for mask in 1u32..(1 << cards.len()) {
        let subset: Vec<Card> = cards
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, card)| *card)
            .collect();

        let sum: u8 = subset.iter().map(|card| card.value()).sum();
        if sum == FIFTEEN {
            items.push(ScoreItem {
                kind: ScoreKind::Fifteen,
                points: 2,
                description: format!("Fifteen for 2 ({})", cards_to_string(&subset)),
                cards: subset,
            });
        }
    }

    tracing::trace!(count = items.len(), "fifteens");
    items
}

/// One item per rank held more than once; three and four of a kind are
/// reported as a single set rather than as their constituent pairs.
fn pairs(cards: &[Card]) -> Vec<ScoreItem> {
    let mut items = Vec::new();
    let mut seen: Vec<Rank> = Vec::with_capacity(cards.len());

    for card in cards {
        if seen.contains(&card.rank) {
            continue;
        }
        seen.push(card.rank);

        let same: Vec<Card> = cards
            .iter()
            .filter(|other| other.rank == card.rank)
            .copied()
            .collect();
        let symbol = card.rank.symbol();

        let (kind, points, description) = match same.len() {
            2 => (ScoreKind::Pair, 2, format!("Pair of {symbol}s for 2")),
            3 => (ScoreKind::ThreeOfKind, 6, format!("Three {symbol}s for 6")),
            4 => (ScoreKind::FourOfKind, 12, format!("Four {symbol}s for 12")),
            _ => continue,
        };

        items.push(ScoreItem {
            kind,
            points,
            cards: same,
            description,
        });
    }

    tracing::trace!(count = items.len(), "pairs");
    items
}

/// Every run of three or more consecutive ranks. A maximal sequence is only
/// scored at its full length, once per way of picking one card per rank.
fn runs(cards: &[Card]) -> Vec<ScoreItem> {
    let mut by_rank: Vec<Vec<Card>> = alloc::vec![Vec::new(); Rank::ALL.len()];
    for card in cards {
        by_rank[usize::from(card.rank.order() - 1)].push(*card);
    }

    let mut items = Vec::new();
    let mut start = 0;

    while start < by_rank.len() {
        if by_rank[start].is_empty() {
            start += 1;
            continue;
        }

        let end = by_rank[start..]
            .iter()
            .position(Vec::is_empty)
            .map_or(by_rank.len(), |offset| start + offset);

        if end - start >= 3 {
            let mut sequences = Vec::new();
            combine(&by_rank[start..end], &mut Vec::new(), &mut sequences);

            for run in sequences {
                let len = run.len() as u8;
                items.push(ScoreItem {
                    kind: ScoreKind::Run,
                    points: len,
                    description: format!("Run of {len} for {len} ({})", cards_to_string(&run)),
                    cards: run,
                });
            }
        }

        start = end;
    }

    tracing::trace!(count = items.len(), "runs");
    items
}

/// Cartesian product over the cards available at each rank position.
fn combine(options: &[Vec<Card>], current: &mut Vec<Card>, out: &mut Vec<Vec<Card>>) {
    let Some((first, rest)) = options.split_first() else {
        out.push(current.clone());
        return;
    };

    for card in first {
        current.push(*card);
        combine(rest, current, out);
        current.pop();
    }
}

/// Only the held cards decide whether a flush exists; the starter can extend
/// it to five, and a crib needs all five.
fn flush(hand: &[Card], starter: Option<Card>, is_crib: bool) -> Option<ScoreItem> {
    let suit = hand.first()?.suit;
    if !hand.iter().all(|card| card.suit == suit) {
        return None;
    }

    let mut cards = hand.to_vec();
    match starter {
        Some(starter) if starter.suit == suit => cards.push(starter),
        _ if is_crib => return None,
        _ => {}
    }

    let len = cards.len() as u8;
    Some(ScoreItem {
        kind: ScoreKind::Flush,
        points: len,
        cards,
        description: format!("Flush of {len} for {len}"),
    })
}

fn nobs(hand: &[Card], starter: Option<Card>) -> Option<ScoreItem> {
    let starter = starter?;
    let jack = hand
        .iter()
        .find(|card| card.rank == Rank::Jack && card.suit == starter.suit)?;

    Some(ScoreItem {
        kind: ScoreKind::Nobs,
        points: 1,
        cards: alloc::vec![*jack],
        description: format!("Nobs (Jack of {}) for 1", starter.suit.name()),
    })
}

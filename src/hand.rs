//! Validated four-card hands.

use crate::card::Card;
use crate::error::HandError;
use crate::result::ScoreBreakdown;
use crate::scoring::{HAND_SIZE, calculate_hand_score};

/// A hand or crib of four distinct cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    /// Cards in the hand.
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from four cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] if a card appears twice.
    pub fn new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        for (index, card) in cards.iter().enumerate() {
            if cards[..index].contains(card) {
                return Err(HandError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards })
    }

    /// Creates a hand from a slice of cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidHandSize`] unless exactly four cards are
    /// given, or [`HandError::DuplicateCard`] if a card appears twice.
    pub fn try_from_slice(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::InvalidHandSize { len: cards.len() })?;
        Self::new(cards)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns whether the hand holds the given card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Counts the hand with the given starter.
    ///
    /// Set `is_crib` when counting the dealer's crib, which only scores a
    /// five-card flush.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] if the starter is already in the hand.
    pub fn score(
        &self,
        starter: Option<Card>,
        is_crib: bool,
    ) -> Result<ScoreBreakdown, HandError> {
        calculate_hand_score(&self.cards, starter, is_crib)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::try_from_slice(cards)
    }
}

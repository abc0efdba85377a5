//! Error types for hand counting and card parsing.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when validating or scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand does not hold exactly four cards.
    #[error("hand must hold exactly 4 cards, got {len}")]
    InvalidHandSize {
        /// Number of cards supplied.
        len: usize,
    },
    /// The same card appears more than once across the hand and starter.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur when parsing a card from short notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card")]
    Empty,
    /// The rank part is not one of `A`, `2`..`10`, `T`, `J`, `Q`, `K`.
    #[error("invalid rank")]
    InvalidRank,
    /// The suit letter is not one of `S`, `H`, `D`, `C`.
    #[error("invalid suit")]
    InvalidSuit,
}

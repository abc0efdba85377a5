//! Score breakdown types produced by hand counting.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Highest score any legal hand can reach.
pub const MAX_HAND_SCORE: u8 = 29;

/// Kind of scoring combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKind {
    /// Cards summing to fifteen.
    Fifteen,
    /// Two cards of the same rank.
    Pair,
    /// Three cards of the same rank.
    ThreeOfKind,
    /// Four cards of the same rank.
    FourOfKind,
    /// Three or more cards in consecutive rank order.
    Run,
    /// Four or five cards of one suit.
    Flush,
    /// Jack in hand matching the starter's suit.
    Nobs,
}

impl ScoreKind {
    /// Name used by the host application when storing breakdowns.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fifteen => "fifteen",
            Self::Pair => "pair",
            Self::ThreeOfKind => "threeOfKind",
            Self::FourOfKind => "fourOfKind",
            Self::Run => "run",
            Self::Flush => "flush",
            Self::Nobs => "nobs",
        }
    }
}

/// A single scoring combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreItem {
    /// The kind of combination.
    pub kind: ScoreKind,
    /// Points awarded for this combination.
    pub points: u8,
    /// Cards that make up the combination.
    pub cards: Vec<Card>,
    /// Human readable description, e.g. `Fifteen for 2 (5S, 10H)`.
    pub description: String,
}

/// Itemized score for a hand or crib.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    items: Vec<ScoreItem>,
    total: u8,
}

impl ScoreBreakdown {
    /// Builds a breakdown whose total is the sum of the item points.
    #[must_use]
    pub fn from_items(items: Vec<ScoreItem>) -> Self {
        let total = items.iter().map(|item| item.points).sum();
        Self { items, total }
    }

    /// Returns the scoring items in counting order.
    #[must_use]
    pub fn items(&self) -> &[ScoreItem] {
        &self.items
    }

    /// Consumes the breakdown, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<ScoreItem> {
        self.items
    }

    /// Returns the total points.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the points contributed by one kind of combination.
    #[must_use]
    pub fn points_for(&self, kind: ScoreKind) -> u8 {
        self.items
            .iter()
            .filter(|item| item.kind == kind)
            .map(|item| item.points)
            .sum()
    }

    /// Returns whether nothing scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns whether this is a 29-point hand.
    #[must_use]
    pub const fn is_perfect(&self) -> bool {
        self.total == MAX_HAND_SCORE
    }
}

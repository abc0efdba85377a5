//! Game-level scoring rules outside hand counting.

use crate::card::{Card, Rank};
use crate::options::GameOptions;

/// How badly the loser of a game was beaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkunkStatus {
    /// The loser reached the skunk line.
    #[default]
    None,
    /// The loser finished below the skunk line.
    Skunk,
    /// The loser finished below the double skunk line.
    DoubleSkunk,
}

impl SkunkStatus {
    /// Name used by the host application when storing game records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Skunk => "skunk",
            Self::DoubleSkunk => "doubleSkunk",
        }
    }
}

/// Returns whether the starter earns the dealer his heels.
#[must_use]
pub fn is_his_heels(starter: Card) -> bool {
    starter.rank == Rank::Jack
}

/// Points the dealer scores for the starter card.
#[must_use]
pub fn his_heels_points(starter: Card, options: &GameOptions) -> u8 {
    if is_his_heels(starter) {
        options.his_heels_points
    } else {
        0
    }
}

/// Classifies the loser's final score.
#[must_use]
pub const fn skunk_status(loser_score: u16, options: &GameOptions) -> SkunkStatus {
    if loser_score < options.double_skunk_line {
        SkunkStatus::DoubleSkunk
    } else if loser_score < options.skunk_line {
        SkunkStatus::Skunk
    } else {
        SkunkStatus::None
    }
}

/// Returns whether a score has reached the target.
#[must_use]
pub const fn has_won(score: u16, options: &GameOptions) -> bool {
    score >= options.target_score
}

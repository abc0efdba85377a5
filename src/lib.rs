//! A cribbage hand counting engine with optional `no_std` support.
//!
//! The crate provides [`calculate_hand_score`], which counts a four-card hand
//! or crib together with the starter and itemizes every scoring combination:
//! fifteens, pairs and sets, runs, flush, and nobs.
//!
//! # Example
//!
//! ```
//! use cribcount::{Card, ScoreKind, calculate_hand_score};
//!
//! let hand: Vec<Card> = ["4S", "5S", "5H", "6S"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let breakdown = calculate_hand_score(&hand, None, false).unwrap();
//! assert_eq!(breakdown.points_for(ScoreKind::Run), 6);
//! assert_eq!(breakdown.total(), 12);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;
pub mod scoring;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, cards_to_string, full_deck};
pub use error::{HandError, ParseCardError};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{MAX_HAND_SCORE, ScoreBreakdown, ScoreItem, ScoreKind};
pub use rules::{SkunkStatus, has_won, his_heels_points, is_his_heels, skunk_status};
pub use scoring::{HAND_SIZE, calculate_hand_score};

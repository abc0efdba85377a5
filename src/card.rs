//! Card types and deck utilities.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the lowercase name of the suit, e.g. `"spades"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
        }
    }

    /// Returns the uppercase initial used in short card notation.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'S' => Some(Self::Spades),
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// Card rank, ordered from Ace (low) to King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace. Always low.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Position of the rank in run order (Ace = 1, King = 13).
    #[must_use]
    pub const fn order(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the rank at the given run order, if any.
    #[must_use]
    pub const fn from_order(order: u8) -> Option<Self> {
        match order {
            1..=13 => Some(Self::ALL[(order - 1) as usize]),
            _ => None,
        }
    }

    /// Counting value used for fifteens (face cards count 10).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self.order(),
        }
    }

    /// Short symbol for the rank: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        let rank = match symbol {
            "A" | "a" | "1" => Self::Ace,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            "T" | "t" => Self::Ten,
            _ => {
                return symbol
                    .parse::<u8>()
                    .ok()
                    .filter(|n| (2..=10).contains(n))
                    .and_then(Self::from_order);
            }
        };
        Some(rank)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Counting value of the card.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses short notation such as `5S`, `10h` or `TD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next_back().ok_or(ParseCardError::Empty)?;
        let symbol = chars.as_str();
        if symbol.is_empty() {
            return Err(ParseCardError::InvalidRank);
        }

        let suit = Suit::from_letter(letter).ok_or(ParseCardError::InvalidSuit)?;
        let rank = Rank::from_symbol(symbol).ok_or(ParseCardError::InvalidRank)?;
        Ok(Self::new(rank, suit))
    }
}

/// Joins cards in short notation, separated by `", "`.
#[must_use]
pub fn cards_to_string(cards: &[Card]) -> String {
    use core::fmt::Write;

    let mut out = String::new();
    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{card}");
    }
    out
}

/// Returns a standard 52-card deck, grouped by suit in rank order.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

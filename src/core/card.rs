//! Card value types: rank, suit, color, face state.
//!
//! Cards are immutable values. Identity is `(rank, suit)`; the face state
//! is part of the value but never part of identity, so "flipping" a card
//! produces a new value via [`Card::faced_up`] / [`Card::faced_down`].

use serde::{Deserialize, Serialize};

use super::config::SymbolMode;

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const TWO: Rank = Rank(2);
    pub const THREE: Rank = Rank(3);
    pub const FOUR: Rank = Rank(4);
    pub const FIVE: Rank = Rank(5);
    pub const SIX: Rank = Rank(6);
    pub const SEVEN: Rank = Rank(7);
    pub const EIGHT: Rank = Rank(8);
    pub const NINE: Rank = Rank(9);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank from its ordinal value.
    ///
    /// Panics if `value` is outside `1..=13`.
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!((1..=13).contains(&value), "rank out of range: {value}");
        Self(value)
    }

    /// The ordinal value, 1..=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The next lower rank, or `None` below an Ace.
    #[must_use]
    pub fn pred(self) -> Option<Rank> {
        (self.0 > 1).then(|| Rank(self.0 - 1))
    }

    /// The next higher rank, or `None` above a King.
    #[must_use]
    pub fn succ(self) -> Option<Rank> {
        (self.0 < 13).then(|| Rank(self.0 + 1))
    }

    /// All thirteen ranks, Ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// Short display label ("A", "2", ..., "10", "J", "Q", "K").
    #[must_use]
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[(self.0 - 1) as usize]
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// One of the four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Diamonds and Hearts are red, Clubs and Spades black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Suit symbol for rendering. Never consulted by the rules.
    #[must_use]
    pub const fn symbol(self, mode: SymbolMode) -> &'static str {
        match (self, mode) {
            (Suit::Clubs, SymbolMode::Ascii) => "C",
            (Suit::Diamonds, SymbolMode::Ascii) => "D",
            (Suit::Hearts, SymbolMode::Ascii) => "H",
            (Suit::Spades, SymbolMode::Ascii) => "S",
            (Suit::Clubs, SymbolMode::Unicode) => "\u{2663}",
            (Suit::Diamonds, SymbolMode::Unicode) => "\u{2666}",
            (Suit::Hearts, SymbolMode::Unicode) => "\u{2665}",
            (Suit::Spades, SymbolMode::Unicode) => "\u{2660}",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol(SymbolMode::Unicode))
    }
}

/// Whether a card lies face-up or face-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub face: Face,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face: Face::Down,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face: Face::Up,
        }
    }

    #[must_use]
    pub const fn is_face_up(self) -> bool {
        matches!(self.face, Face::Up)
    }

    /// The same card turned face-up.
    #[must_use]
    pub const fn faced_up(self) -> Self {
        Self {
            face: Face::Up,
            ..self
        }
    }

    /// The same card turned face-down.
    #[must_use]
    pub const fn faced_down(self) -> Self {
        Self {
            face: Face::Down,
            ..self
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Identity key, ignoring face state.
    #[must_use]
    pub const fn identity(self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }

    /// Render label, e.g. `"10H"` in ascii mode or `"10♥"` in unicode mode.
    #[must_use]
    pub fn label(self, mode: SymbolMode) -> String {
        format!("{}{}", self.rank.label(), self.suit.symbol(mode))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

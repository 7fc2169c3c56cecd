//! Piles: ordered card sequences with a kind tag.
//!
//! Index 0 is the bottom of the pile; the last card is the top (the only
//! exposed card for stock, waste and foundations). Tableau piles expose a
//! contiguous face-up run ending at the top.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, Suit};

/// What role a pile plays on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Face-down draw pile.
    Stock,
    /// Face-up pile receiving cards drawn from the stock.
    Waste,
    /// Suit-sorted ascending pile; four of these must be filled to win.
    Foundation,
    /// One of the seven cascading piles.
    Tableau,
}

/// Identifies one of the board's 13 piles.
///
/// Index layout: 0 = stock, 1 = waste, 2..=5 = foundations, 6..=12 =
/// tableaus. The kind is derived from the index, so an id can never
/// disagree with its pile's role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileId(u8);

impl PileId {
    pub const STOCK: PileId = PileId(0);
    pub const WASTE: PileId = PileId(1);

    /// Total number of piles on the board.
    pub const COUNT: usize = 13;

    /// The `i`-th foundation (0..4).
    #[must_use]
    pub fn foundation(i: u8) -> Self {
        assert!(i < 4, "foundation index out of range: {i}");
        Self(2 + i)
    }

    /// The `i`-th tableau (0..7).
    #[must_use]
    pub fn tableau(i: u8) -> Self {
        assert!(i < 7, "tableau index out of range: {i}");
        Self(6 + i)
    }

    /// Reconstruct an id from a raw board index.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "pile index out of range: {index}");
        Self(index as u8)
    }

    /// Raw index into the board's pile array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The role this pile plays.
    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self.0 {
            0 => PileKind::Stock,
            1 => PileKind::Waste,
            2..=5 => PileKind::Foundation,
            _ => PileKind::Tableau,
        }
    }

    /// All 13 pile ids in board order.
    pub fn all() -> impl Iterator<Item = PileId> {
        (0..Self::COUNT as u8).map(PileId)
    }

    /// The four foundation ids.
    pub fn foundations() -> impl Iterator<Item = PileId> {
        (0..4).map(PileId::foundation)
    }

    /// The seven tableau ids.
    pub fn tableaus() -> impl Iterator<Item = PileId> {
        (0..7).map(PileId::tableau)
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            PileKind::Stock => f.write_str("stock"),
            PileKind::Waste => f.write_str("waste"),
            PileKind::Foundation => write!(f, "foundation-{}", self.0 - 2),
            PileKind::Tableau => write!(f, "tableau-{}", self.0 - 6),
        }
    }
}

/// An ordered sequence of cards with a kind tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    kind: PileKind,
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile of the given kind.
    #[must_use]
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PileKind {
        self.kind
    }

    /// Cards from bottom (index 0) to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The exposed top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// The card at `offset`, if in range.
    #[must_use]
    pub fn card(&self, offset: usize) -> Option<Card> {
        self.cards.get(offset).copied()
    }

    /// A foundation's established suit, once it holds a card.
    #[must_use]
    pub fn foundation_suit(&self) -> Option<Suit> {
        debug_assert_eq!(self.kind, PileKind::Foundation);
        self.cards.first().map(|c| c.suit)
    }

    /// Append a single card on top.
    ///
    /// Layout invariants are the caller's concern; see [`super::Board::audit`].
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove the run from `offset` to the top, preserving order.
    ///
    /// Panics if `offset` is out of range.
    pub fn take_run(&mut self, offset: usize) -> SmallVec<[Card; 13]> {
        assert!(offset < self.cards.len(), "run offset out of range");
        self.cards.drain(offset..).collect()
    }

    /// Append a run on top, preserving its order.
    pub fn append_run(&mut self, run: impl IntoIterator<Item = Card>) {
        self.cards.extend(run);
    }

    /// Turn the top card face-up. Returns true if a card was flipped.
    pub fn flip_top_up(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.is_face_up() => {
                *card = card.faced_up();
                true
            }
            _ => false,
        }
    }

    /// Turn the top card face-down. Returns true if a card was flipped.
    pub fn flip_top_down(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if card.is_face_up() => {
                *card = card.faced_down();
                true
            }
            _ => false,
        }
    }

    /// Length of the longest movable run ending at the top.
    ///
    /// For a tableau this walks down while the cards stay face-up and keep
    /// descending with alternating colors. Other piles expose at most their
    /// top card.
    #[must_use]
    pub fn top_run_len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        if self.kind != PileKind::Tableau {
            return usize::from(self.top().is_some_and(Card::is_face_up));
        }

        let mut len = usize::from(self.top().is_some_and(Card::is_face_up));
        while len > 0 && len < self.cards.len() {
            let below = self.cards[self.cards.len() - len - 1];
            let above = self.cards[self.cards.len() - len];
            if !stacks_on_tableau(below, above) {
                break;
            }
            len += 1;
        }
        len
    }
}

/// Whether `above` may sit directly on `below` in a tableau: one rank
/// lower, opposite color, both face-up.
#[must_use]
pub fn stacks_on_tableau(below: Card, above: Card) -> bool {
    below.is_face_up()
        && above.is_face_up()
        && below.rank.pred() == Some(above.rank)
        && below.color() != above.color()
}

/// Whether `cards` forms a valid tableau run: non-empty, all face-up,
/// descending by one with alternating colors.
#[must_use]
pub fn is_valid_run(cards: &[Card]) -> bool {
    !cards.is_empty()
        && cards.iter().all(|c| c.is_face_up())
        && cards.windows(2).all(|w| stacks_on_tableau(w[0], w[1]))
}

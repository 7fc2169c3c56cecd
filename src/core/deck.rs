//! Standard 52-card deck construction.

use super::card::{Card, Rank, Suit};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Build the 52-card set, all face-down, in suit-then-rank order.
///
/// Callers shuffle via [`crate::core::GameRng::shuffle`] before dealing.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::all() {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

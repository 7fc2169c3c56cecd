//! Shuffle and deal.
//!
//! Tableau k (1-indexed, k = 1..7) receives k cards, all face-down except
//! the topmost; the remaining 24 cards go to the stock face-down. Waste and
//! foundations start empty. Runs exactly once per session.

use crate::core::{standard_deck, GameRng};

use super::board::Board;
use super::pile::PileId;

/// Build a freshly dealt board from the given RNG.
///
/// The same RNG seed always produces the same deal.
#[must_use]
pub fn deal(rng: &mut GameRng) -> Board {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);

    let mut board = Board::empty();
    let mut next = deck.into_iter();

    for (i, id) in PileId::tableaus().enumerate() {
        let tableau = board.pile_mut(id);
        for _ in 0..=i {
            let card = next.next().expect("deck holds enough cards to deal");
            tableau.push(card);
        }
        tableau.flip_top_up();
    }

    let stock = board.pile_mut(PileId::STOCK);
    for card in next {
        stock.push(card);
    }

    board.assert_invariants();
    board
}

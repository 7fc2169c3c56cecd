//! The board: 13 piles plus the cursor.
//!
//! ## Layout
//!
//! Two rows, seven columns. The top row holds the stock (column 0), the
//! waste (column 1) and the four foundations (columns 3..=6); the bottom
//! row holds the seven tableaus (columns 0..=6). Cursor movement clamps at
//! the edges and never wraps; switching rows keeps the nearest column,
//! resolving ties to the left.
//!
//! ## Invariants
//!
//! [`Board::audit`] checks every structural invariant: 52 distinct cards
//! across all piles, foundation ordering, tableau ordering and face-down
//! placement, and stock/waste face states. A failed audit is a programming
//! defect, not a user-facing error; accepted commands assert it in debug
//! builds.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Rank, DECK_SIZE};

use super::pile::{stacks_on_tableau, Pile, PileId, PileKind};

/// Cursor movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The currently highlighted pile, with an optional in-pile offset.
///
/// `offset: None` means the pile's top card. Engine-driven movement always
/// resets the offset; it exists so front-ends that highlight individual
/// cards can report a finer position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub pile: PileId,
    pub offset: Option<usize>,
}

impl Cursor {
    #[must_use]
    pub const fn at(pile: PileId) -> Self {
        Self { pile, offset: None }
    }
}

/// The full table: one stock, one waste, four foundations, seven tableaus,
/// and the cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    piles: [Pile; PileId::COUNT],
    cursor: Cursor,
}

/// Top-row piles in left-to-right order.
fn top_row() -> [PileId; 6] {
    [
        PileId::STOCK,
        PileId::WASTE,
        PileId::foundation(0),
        PileId::foundation(1),
        PileId::foundation(2),
        PileId::foundation(3),
    ]
}

/// Screen column of a pile, 0..=6.
fn column(id: PileId) -> usize {
    match id.kind() {
        PileKind::Stock => 0,
        PileKind::Waste => 1,
        PileKind::Foundation => id.index() + 1, // foundations at columns 3..=6
        PileKind::Tableau => id.index() - 6,
    }
}

impl Board {
    /// An empty board with the cursor on the stock. Use
    /// [`super::deal`] for a playable one.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            piles: std::array::from_fn(|i| Pile::new(PileId::from_index(i).kind())),
            cursor: Cursor::at(PileId::STOCK),
        }
    }

    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.index()]
    }

    /// Mutable pile access.
    ///
    /// Intended for move execution, the stock cycle, and scenario setup in
    /// tests; callers are responsible for leaving the board in a state that
    /// passes [`Board::audit`].
    pub fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        &mut self.piles[id.index()]
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Place the cursor on a pile, resetting its offset.
    pub fn set_cursor(&mut self, pile: PileId) {
        self.cursor = Cursor::at(pile);
    }

    /// Move the cursor one step, clamping at board edges.
    pub fn move_cursor(&mut self, direction: Direction) {
        let current = self.cursor.pile;
        let on_top_row = current.kind() != PileKind::Tableau;
        let col = column(current);

        let next = match direction {
            Direction::Left | Direction::Right => {
                let row: Vec<PileId> = if on_top_row {
                    top_row().to_vec()
                } else {
                    PileId::tableaus().collect()
                };
                let pos = row.iter().position(|&p| p == current).unwrap_or(0);
                let pos = match direction {
                    Direction::Left => pos.saturating_sub(1),
                    _ => (pos + 1).min(row.len() - 1),
                };
                row[pos]
            }
            Direction::Up => {
                if on_top_row {
                    current
                } else {
                    nearest_top_row(col)
                }
            }
            Direction::Down => {
                if on_top_row {
                    PileId::tableau(col as u8)
                } else {
                    current
                }
            }
        };

        self.cursor = Cursor::at(next);
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// Check every structural invariant, returning a description of the
    /// first violation found.
    ///
    /// A violation indicates a defect in the engine, never a legal game
    /// state; see [`Board::assert_invariants`].
    pub fn audit(&self) -> Result<(), String> {
        let mut seen = FxHashSet::default();
        for id in PileId::all() {
            for card in self.pile(id).cards() {
                if !seen.insert(card.identity()) {
                    return Err(format!("duplicate card {card} in {id}"));
                }
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(format!("expected {} cards, found {}", DECK_SIZE, seen.len()));
        }

        let stock = self.pile(PileId::STOCK);
        if stock.cards().iter().any(|c| c.is_face_up()) {
            return Err("face-up card in stock".to_string());
        }

        let waste = self.pile(PileId::WASTE).cards();
        if let Some((top, rest)) = waste.split_last() {
            if !top.is_face_up() {
                return Err("waste top is face-down".to_string());
            }
            if rest.iter().any(|c| c.is_face_up()) {
                return Err("face-up card below waste top".to_string());
            }
        }

        for id in PileId::foundations() {
            let cards = self.pile(id).cards();
            if let Some(first) = cards.first() {
                if first.rank != Rank::ACE {
                    return Err(format!("{id} does not start at ace"));
                }
            }
            for pair in cards.windows(2) {
                if pair[0].suit != pair[1].suit || pair[0].rank.succ() != Some(pair[1].rank) {
                    return Err(format!("{id} out of order"));
                }
            }
            if cards.iter().any(|c| !c.is_face_up()) {
                return Err(format!("face-down card in {id}"));
            }
        }

        for id in PileId::tableaus() {
            let cards = self.pile(id).cards();
            let first_up = cards
                .iter()
                .position(|c| c.is_face_up())
                .unwrap_or(cards.len());
            if cards[first_up..].iter().any(|c| !c.is_face_up()) {
                return Err(format!("face-down card above face-up in {id}"));
            }
            for pair in cards[first_up..].windows(2) {
                if !stacks_on_tableau(pair[0], pair[1]) {
                    return Err(format!("{id} face-up sequence broken"));
                }
            }
        }

        Ok(())
    }

    /// Panic on a broken invariant in debug builds.
    pub fn assert_invariants(&self) {
        debug_assert!(
            self.audit().is_ok(),
            "board invariant violated: {}",
            self.audit().unwrap_err()
        );
    }
}

/// Top-row pile nearest to a tableau column, ties to the left.
fn nearest_top_row(col: usize) -> PileId {
    let mut best = PileId::STOCK;
    let mut best_dist = usize::MAX;
    for id in top_row() {
        let dist = column(id).abs_diff(col);
        if dist < best_dist {
            best = id;
            best_dist = dist;
        }
    }
    best
}

#[cfg(test)]
pub(crate) mod testutil {
    use rustc_hash::FxHashSet;

    use super::{Board, PileId};
    use crate::core::standard_deck;

    /// Push every card not already placed onto the stock, face-down, so a
    /// hand-built scenario board passes the 52-card audit.
    pub(crate) fn complete_with_stock(mut board: Board) -> Board {
        let placed: FxHashSet<_> = PileId::all()
            .flat_map(|id| board.pile(id).cards().to_vec())
            .map(|c| c.identity())
            .collect();
        for card in standard_deck() {
            if !placed.contains(&card.identity()) {
                board.pile_mut(PileId::STOCK).push(card);
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Suit};

    #[test]
    fn test_empty_board_shape() {
        let board = Board::empty();
        assert_eq!(board.card_count(), 0);
        assert_eq!(board.cursor().pile, PileId::STOCK);
        assert_eq!(board.pile(PileId::tableau(3)).kind(), PileKind::Tableau);
    }

    #[test]
    fn test_cursor_clamps_at_row_ends() {
        let mut board = Board::empty();

        board.move_cursor(Direction::Left);
        assert_eq!(board.cursor().pile, PileId::STOCK);

        for _ in 0..10 {
            board.move_cursor(Direction::Right);
        }
        assert_eq!(board.cursor().pile, PileId::foundation(3));

        board.move_cursor(Direction::Up);
        assert_eq!(board.cursor().pile, PileId::foundation(3));
    }

    #[test]
    fn test_cursor_row_switch_keeps_column() {
        let mut board = Board::empty();

        // Stock (column 0) down to tableau 0, back up to stock.
        board.move_cursor(Direction::Down);
        assert_eq!(board.cursor().pile, PileId::tableau(0));
        board.move_cursor(Direction::Up);
        assert_eq!(board.cursor().pile, PileId::STOCK);

        // Foundation 3 (column 6) down to tableau 6.
        board.set_cursor(PileId::foundation(3));
        board.move_cursor(Direction::Down);
        assert_eq!(board.cursor().pile, PileId::tableau(6));
    }

    #[test]
    fn test_cursor_gap_column_ties_left() {
        let mut board = Board::empty();

        // Tableau 2 sits under the gap between waste (1) and foundation 0
        // (3); the tie resolves to the waste.
        board.set_cursor(PileId::tableau(2));
        board.move_cursor(Direction::Up);
        assert_eq!(board.cursor().pile, PileId::WASTE);
    }

    #[test]
    fn test_cursor_move_resets_offset() {
        let mut board = Board::empty();
        board.cursor = Cursor {
            pile: PileId::tableau(0),
            offset: Some(2),
        };
        board.move_cursor(Direction::Right);
        assert_eq!(board.cursor().offset, None);
    }

    #[test]
    fn test_audit_rejects_empty_board() {
        // 0 cards instead of 52.
        assert!(Board::empty().audit().is_err());
    }

    #[test]
    fn test_audit_catches_duplicate() {
        let mut board = crate::board::deal(&mut crate::core::GameRng::new(1));
        let dup = board.pile(PileId::tableau(0)).top().unwrap();
        board.pile_mut(PileId::tableau(1)).push(dup);
        assert!(board.audit().unwrap_err().contains("duplicate"));
    }

    #[test]
    fn test_audit_catches_foundation_disorder() {
        let mut board = crate::board::deal(&mut crate::core::GameRng::new(1));
        // A non-ace foundation bottom card breaks the ascending rule; steal
        // one from the stock to keep the count at 52.
        let card = board.pile_mut(PileId::STOCK).pop().unwrap();
        board.pile_mut(PileId::foundation(0)).push(card.faced_up());
        if card.rank == Rank::ACE {
            // Unlucky draw: an ace is legal there, take another.
            let next = board.pile_mut(PileId::STOCK).pop().unwrap();
            board.pile_mut(PileId::foundation(0)).push(next.faced_up());
        }
        assert!(board.audit().is_err());
    }

    #[test]
    fn test_audit_catches_stock_face_up() {
        let mut board = crate::board::deal(&mut crate::core::GameRng::new(1));
        let card = board.pile_mut(PileId::STOCK).pop().unwrap();
        board.pile_mut(PileId::STOCK).push(card.faced_up());
        assert!(board.audit().unwrap_err().contains("stock"));
    }

    #[test]
    fn test_foundation_suit_helper_on_board() {
        let mut board = Board::empty();
        board
            .pile_mut(PileId::foundation(0))
            .push(Card::face_up(Rank::ACE, Suit::Hearts));
        assert_eq!(
            board.pile(PileId::foundation(0)).foundation_suit(),
            Some(Suit::Hearts)
        );
    }
}

//! Win detection.

use crate::board::{Board, PileId};

/// Cards a completed foundation holds.
const FULL_FOUNDATION: usize = 13;

/// The game is won when all four foundations hold thirteen cards
/// (equivalently: stock, waste, and every tableau are empty).
#[must_use]
pub fn game_won(board: &Board) -> bool {
    PileId::foundations().all(|id| board.pile(id).len() == FULL_FOUNDATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Rank, Suit};

    /// A board with every foundation filled Ace through King.
    fn won_board() -> Board {
        let mut board = Board::empty();
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            let foundation = board.pile_mut(PileId::foundation(i as u8));
            for rank in Rank::all() {
                foundation.push(Card::face_up(rank, suit));
            }
        }
        board
    }

    #[test]
    fn test_full_foundations_win() {
        let board = won_board();
        assert!(board.audit().is_ok());
        assert!(game_won(&board));
    }

    #[test]
    fn test_fresh_deal_is_not_won() {
        let board = crate::board::deal(&mut crate::core::GameRng::new(42));
        assert!(!game_won(&board));
    }

    #[test]
    fn test_one_missing_card_is_not_won() {
        let mut board = won_board();
        let card = board.pile_mut(PileId::foundation(0)).pop().unwrap();
        board.pile_mut(PileId::tableau(0)).push(card);
        assert!(!game_won(&board));
    }
}

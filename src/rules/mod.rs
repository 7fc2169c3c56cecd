//! Move legality, execution, win detection, and the engine's error kinds.

pub mod moves;
pub mod win;

pub use moves::{apply_move, validate_move, MoveRequest, MoveViolation};
pub use win::game_won;

use serde::{Deserialize, Serialize};

/// Why a command was rejected.
///
/// All rejections are non-fatal: the board, selection, and stock cycle are
/// left untouched. Front-ends surface these to the player however they
/// like; the engine only reports the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// The requested transfer violates a placement rule.
    IllegalMove(MoveViolation),
    /// Marking a face-down card, an empty pile, or a broken tableau run.
    InvalidMarkTarget,
    /// Recycling requested after the pass limit was reached, or with no
    /// cards left to draw.
    StockExhausted,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::IllegalMove(violation) => write!(f, "illegal move: {violation}"),
            GameError::InvalidMarkTarget => f.write_str("cannot mark that card"),
            GameError::StockExhausted => f.write_str("no passes through the deck left"),
        }
    }
}

impl std::error::Error for GameError {}

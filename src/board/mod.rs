//! Board model: piles, the 13-pile table, cursor movement, and the deal.

pub mod board;
pub mod deal;
pub mod pile;

pub use board::{Board, Cursor, Direction};
pub use deal::deal;
pub use pile::{is_valid_run, stacks_on_tableau, Pile, PileId, PileKind};

//! Selection state: the optional marked run used as the source of the
//! next move.
//!
//! The marked run is always anchored at its pile's top: `offset + count`
//! equals the pile length while the mark is live. Growing the mark extends
//! it one card downward, shrinking trims it back toward the top. The
//! transition logic lives on [`crate::session::GameSession`], which owns
//! the board the selection points into.

use serde::{Deserialize, Serialize};

use crate::board::PileId;

/// What the player currently has marked, if anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing marked.
    #[default]
    Idle,
    /// A run of `count` cards starting at `offset` in `pile`.
    Marked {
        pile: PileId,
        offset: usize,
        count: usize,
    },
}

impl Selection {
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Selection::Idle)
    }

    /// The marked pile, if a mark is live.
    #[must_use]
    pub const fn marked_pile(self) -> Option<PileId> {
        match self {
            Selection::Idle => None,
            Selection::Marked { pile, .. } => Some(pile),
        }
    }
}

//! Read-only render snapshot.
//!
//! Front-ends draw from a [`Snapshot`], never from the live session, so
//! the engine's internals stay free to change between frames. The snapshot
//! is serializable; a test or a remote viewer can round-trip it as JSON.

use serde::{Deserialize, Serialize};

use crate::board::{Cursor, PileId, PileKind};
use crate::core::{Card, PassLimit, SymbolMode};

use super::selection::Selection;
use super::GameSession;

/// One pile as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileView {
    pub id: PileId,
    pub kind: PileKind,
    /// Bottom to top, face state included.
    pub cards: Vec<Card>,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub piles: Vec<PileView>,
    pub cursor: Cursor,
    pub selection: Selection,
    pub passes_used: u32,
    pub pass_limit: PassLimit,
    pub symbol_mode: SymbolMode,
}

impl Snapshot {
    /// Capture the current session state.
    #[must_use]
    pub fn capture(session: &GameSession) -> Self {
        let piles = PileId::all()
            .map(|id| PileView {
                id,
                kind: id.kind(),
                cards: session.board().pile(id).cards().to_vec(),
            })
            .collect();

        Self {
            piles,
            cursor: session.board().cursor(),
            selection: session.selection(),
            passes_used: session.stock_cycle().passes_used(),
            pass_limit: session.stock_cycle().limit(),
            symbol_mode: session.config().symbol_mode,
        }
    }

    /// The view of one pile.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &PileView {
        &self.piles[id.index()]
    }
}

impl PileView {
    /// Whether this pile holds a card at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The exposed top card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }
}

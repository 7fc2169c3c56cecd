//! Engine commands.
//!
//! The command set keeps "mark" and "commit" distinct; the thin key-mapping
//! layer decides which to emit from the observed selection state, so the
//! engine's API stays unambiguous.

use serde::{Deserialize, Serialize};

use crate::board::Direction;

/// One player command, applied synchronously to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move the cursor one pile, clamping at board edges.
    MoveCursor(Direction),
    /// Mark the run under the cursor, or clear a mark on the same pile.
    ToggleMark,
    /// Extend a tableau mark one card downward.
    IncreaseMarkCount,
    /// Shrink a tableau mark one card toward the top.
    DecreaseMarkCount,
    /// Move the marked run onto the pile under the cursor.
    CommitMove,
    /// Draw from the stock (recycling the waste when needed).
    DrawFromStock,
    /// End the session immediately.
    Quit,
}

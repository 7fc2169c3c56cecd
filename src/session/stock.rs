//! The stock cycle: drawing from the stock and recycling the waste, with
//! a bounded number of passes.
//!
//! This controller is the only code that mutates the stock and waste
//! piles, and the only place `passes_used` changes. Exhausting the pass
//! limit merely disables further recycling; play continues.

use serde::{Deserialize, Serialize};

use crate::board::{Board, PileId};
use crate::core::PassLimit;
use crate::rules::GameError;

/// Tracks recycles of the waste back into the stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockCycle {
    passes_used: u32,
    limit: PassLimit,
}

impl StockCycle {
    #[must_use]
    pub const fn new(limit: PassLimit) -> Self {
        Self {
            passes_used: 0,
            limit,
        }
    }

    /// Recycles performed so far.
    #[must_use]
    pub const fn passes_used(&self) -> u32 {
        self.passes_used
    }

    #[must_use]
    pub const fn limit(&self) -> PassLimit {
        self.limit
    }

    /// Draw the stock's top card onto the waste, face-up.
    ///
    /// On an empty stock the waste is first recycled (popped card by card,
    /// so the original draw order repeats) if the pass limit allows;
    /// otherwise, or when there is nothing left to draw at all, the command
    /// is rejected with [`GameError::StockExhausted`] and nothing changes.
    pub fn draw(&mut self, board: &mut Board) -> Result<(), GameError> {
        if board.pile(PileId::STOCK).is_empty() {
            if board.pile(PileId::WASTE).is_empty()
                || !self.limit.allows_recycle(self.passes_used)
            {
                return Err(GameError::StockExhausted);
            }

            while let Some(card) = board.pile_mut(PileId::WASTE).pop() {
                board.pile_mut(PileId::STOCK).push(card.faced_down());
            }
            self.passes_used += 1;
            log::debug!(
                "recycled waste into stock; pass {} of {}",
                self.passes_used,
                self.limit
            );
        }

        let card = board
            .pile_mut(PileId::STOCK)
            .pop()
            .expect("stock is non-empty after recycle");
        let waste = board.pile_mut(PileId::WASTE);
        waste.flip_top_down();
        waste.push(card.faced_up());
        Ok(())
    }
}

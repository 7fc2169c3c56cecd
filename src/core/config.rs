//! Session configuration.
//!
//! Supplied once at session start and never re-read mid-game. The pass
//! limit bounds how often the waste may be recycled into the stock; the
//! symbol mode only tells front-ends which glyphs to draw.

use serde::{Deserialize, Serialize};

/// How many times the waste may be recycled back into the stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassLimit {
    /// Recycle as often as the player likes.
    Unlimited,
    /// At most `n` recycles (n >= 1).
    Limited(u32),
}

impl PassLimit {
    /// Whether another recycle is allowed after `passes_used` so far.
    #[must_use]
    pub fn allows_recycle(self, passes_used: u32) -> bool {
        match self {
            PassLimit::Unlimited => true,
            PassLimit::Limited(n) => passes_used < n,
        }
    }
}

impl std::fmt::Display for PassLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassLimit::Unlimited => f.write_str("unlimited"),
            PassLimit::Limited(n) => write!(f, "{n}"),
        }
    }
}

/// Glyph set for suit symbols. Rendering concern only; the rules never
/// consult it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolMode {
    Ascii,
    Unicode,
}

/// Configuration for one game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Recycle bound for the stock cycle.
    pub pass_limit: PassLimit,
    /// Suit glyph choice for front-ends.
    pub symbol_mode: SymbolMode,
    /// Deal seed; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    /// Three passes through the deck, ascii symbols, random deal.
    fn default() -> Self {
        Self {
            pass_limit: PassLimit::Limited(3),
            symbol_mode: SymbolMode::Ascii,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the pass limit.
    #[must_use]
    pub fn with_pass_limit(mut self, limit: PassLimit) -> Self {
        self.pass_limit = limit;
        self
    }

    /// Set the symbol mode.
    #[must_use]
    pub fn with_symbol_mode(mut self, mode: SymbolMode) -> Self {
        self.symbol_mode = mode;
        self
    }

    /// Fix the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

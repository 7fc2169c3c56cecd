//! # tty-klondike
//!
//! A Klondike solitaire game engine for terminal front-ends.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no rendering, no raw terminal handling, no CLI.
//!    Front-ends feed decoded [`KeyEvent`]s in and draw [`Snapshot`]s out.
//!
//! 2. **One owned aggregate**: [`GameSession`] holds the board, the
//!    selection, and the stock cycle, mutated in place by each command.
//!    No globals.
//!
//! 3. **Rejection without mutation**: an illegal command returns a
//!    [`GameError`] and leaves the session exactly as it was.
//!
//! 4. **Reproducible deals**: shuffling is seeded ChaCha8; every session
//!    knows the seed it was dealt from.
//!
//! ## Modules
//!
//! - `core`: cards, the deck, session configuration, deterministic RNG
//! - `board`: piles, the 13-pile table, cursor movement, the deal
//! - `rules`: move legality and execution, win detection, error kinds
//! - `session`: the session aggregate, commands, marking, the stock
//!   cycle, snapshots, and key-event dispatch

pub mod board;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    standard_deck, Card, Color, Face, GameConfig, GameRng, PassLimit, Rank, Suit, SymbolMode,
    DECK_SIZE,
};

pub use crate::board::{deal, Board, Cursor, Direction, Pile, PileId, PileKind};

pub use crate::rules::{
    apply_move, game_won, validate_move, GameError, MoveRequest, MoveViolation,
};

pub use crate::session::{
    map_key, Command, Dispatcher, EventSource, GameSession, KeyEvent, PileView, ScriptedEvents,
    Selection, SessionStatus, Snapshot, StockCycle,
};

//! Core value types: cards, the deck, session configuration, and the
//! deterministic RNG.

pub mod card;
pub mod config;
pub mod deck;
pub mod rng;

pub use card::{Card, Color, Face, Rank, Suit};
pub use config::{GameConfig, PassLimit, SymbolMode};
pub use deck::{standard_deck, DECK_SIZE};
pub use rng::GameRng;

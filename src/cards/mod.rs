//! Event cards and decks.
//!
//! - `Card`: description plus a data-only `Effect`
//! - `Deck`: shuffled cyclic queue of cards
//! - `DeckKind`: which deck a board cell draws from

mod card;
mod deck;

pub use card::{Card, DeckKind};
pub use deck::Deck;

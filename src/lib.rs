//! # millionaire-monopoly
//!
//! Turn-resolution engine for a property-trading board game.
//!
//! Players circle a closed board, buy and develop properties, pay rent,
//! draw event cards, and drop out through bankruptcy until one remains.
//! The engine is a library: a driver rolls, moves, and answers the
//! decisions the engine parks along the way.
//!
//! ## Design Principles
//!
//! 1. **Arena board**: positions live in one `Vec` and are referred to by
//!    `PositionId`; ownership is a `PlayerId` index. No shared pointers.
//!
//! 2. **Decisions are data**: a turn that needs a choice parks a
//!    `PendingAction` whose variant names what was interrupted. Resuming
//!    dispatches on the variant.
//!
//! 3. **Explicit bankruptcy**: a failed payment only flags the payer.
//!    Leaving the game is always a deliberate call.
//!
//! 4. **Deterministic**: dice and deck order come from a seeded ChaCha
//!    stream, so a seed replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: player ids and state, configuration, RNG, errors
//! - `board`: positions and the circular board
//! - `cards`: event cards and decks
//! - `effects`: card effects and payments
//! - `pending`: the pending-action protocol
//! - `rules`: rent and ownership queries, game result
//! - `game`: the `Game` state machine
//!
//! ## Example
//!
//! ```
//! use millionaire_monopoly::{Board, GameBuilder, GameStatus};
//!
//! let mut game = GameBuilder::new(Board::millionaire())
//!     .players(["Alice", "Bob"])
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! for _ in 0..20 {
//!     game.roll_and_move(false).unwrap();
//!     while game.status() == GameStatus::AwaitingChoice {
//!         let token = game.pending().unwrap().choices[0].clone();
//!         game.submit_choice(&token).unwrap();
//!     }
//!     if game.is_game_over() {
//!         break;
//!     }
//! }
//! ```

pub mod core;
pub mod board;
pub mod cards;
pub mod effects;
pub mod pending;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ColorRules, GameConfig, GameError, GameRng, GameRngState, Player, PlayerId, PlayerMap, Result,
};

pub use crate::board::{Board, CellData, Position, PositionId, MAX_DEVELOPMENT};

pub use crate::cards::{Card, Deck, DeckKind};

pub use crate::effects::{Effect, EffectOutcome, Settlement};

pub use crate::pending::{
    PendingAction, PendingDetail, PendingKind, BUY, DECLARE_BANKRUPTCY, PASS, SELL_ASSETS,
};

pub use crate::rules::{calculate_rent, GameResult};

pub use crate::game::{
    Game, GameBuilder, GameSnapshot, GameStatus, Liquidation, TurnReport,
};

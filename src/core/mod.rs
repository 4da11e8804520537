//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the leaf building blocks shared by the board, the cards and
//! the game state machine.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{ColorRules, GameConfig, RENT_LEVELS};
pub use error::{GameError, Result};
pub use player::{Player, PlayerId, PlayerMap, MAX_MOVER_LEVEL};
pub use rng::{GameRng, GameRngState};

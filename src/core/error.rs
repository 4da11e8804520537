//! Error taxonomy for board construction and game operations.
//!
//! Every variant is a recoverable game-rule event: the caller gets a
//! descriptive error and the game stays playable. Structural corruption
//! (an id that does not index the arena) is a construction bug and panics
//! instead of surfacing here.

use thiserror::Error;

use crate::game::GameStatus;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid cell data: {0}")]
    InvalidCellData(String),

    #[error("{position} is already owned by {owner}")]
    AlreadyOwned { position: String, owner: String },

    #[error("{player} does not own {position}")]
    NotOwner { player: String, position: String },

    #[error("insufficient funds: needed {needed}, available {available}")]
    InsufficientFunds { needed: i64, available: i64 },

    #[error("{0} is already fully developed")]
    AlreadyMaxed(String),

    #[error("cannot add {requested} development to {position} at level {current}")]
    DevelopmentOvershoot {
        position: String,
        current: u8,
        requested: u8,
    },

    #[error("{0} has no development to sell")]
    NoDevelopment(String),

    #[error("{0} still has development; sell it first")]
    HasDevelopment(String),

    #[error("{0} cannot be bought")]
    NotPurchasable(String),

    #[error("invalid amount {0}")]
    InvalidAmount(i64),

    #[error("invalid choice {token:?}, expected one of {choices:?}")]
    InvalidChoice { token: String, choices: Vec<String> },

    #[error("cannot {operation} while {status:?}")]
    IllegalStateTransition {
        status: GameStatus,
        operation: &'static str,
    },

    #[error("{0} is bankrupt")]
    PlayerBankrupt(String),

    #[error("{0} is not in jail")]
    NotInJail(String),

    #[error("{0} has no get-out-of-jail-free card")]
    NoJailFreeCard(String),

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Is this a funds shortfall?
    #[must_use]
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, GameError::InsufficientFunds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InsufficientFunds {
            needed: 200,
            available: 50,
        };
        assert_eq!(err.to_string(), "insufficient funds: needed 200, available 50");
        assert!(err.is_insufficient_funds());

        let err = GameError::IllegalStateTransition {
            status: GameStatus::AwaitingChoice,
            operation: "roll dice",
        };
        assert_eq!(err.to_string(), "cannot roll dice while AwaitingChoice");
        assert!(!err.is_insufficient_funds());
    }
}

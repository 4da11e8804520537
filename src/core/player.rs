//! Player identification, per-player storage, and per-player game state.
//!
//! ## PlayerId
//!
//! Type-safe seat index supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//! Iteration is always in seating order, which the payment primitives
//! rely on for a stable transfer order.
//!
//! ## Player
//!
//! Mutable state of one participant: cash, location, owned positions,
//! jail status and the obligation/bankruptcy flags.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::board::PositionId;

/// Highest mover tier a player can reach.
pub const MAX_MOVER_LEVEL: u8 = 2;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based seat numbers: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use millionaire_monopoly::core::{PlayerId, PlayerMap};
///
/// let mut cash: PlayerMap<i64> = PlayerMap::from_vec(vec![1500; 3]);
/// cash[PlayerId::new(1)] -= 200;
/// assert_eq!(cash[PlayerId::new(1)], 1300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a PlayerMap from values already in seating order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Mutable state of one participant.
///
/// `properties` mirrors `Position::owner`: every position in the set has
/// this player as owner and vice versa. Only the engine's ownership
/// operations touch either side, so the symmetry holds between calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, unique within a game.
    pub name: String,

    /// Cash balance. Never negative: payments are all-or-nothing.
    pub cash: i64,

    /// Current board location.
    pub position: PositionId,

    /// Owned positions.
    pub properties: OrdSet<PositionId>,

    pub in_jail: bool,

    pub jail_free_card: bool,

    /// Mover tier (0..=2), scales the start-cell salary.
    pub mover_level: u8,

    /// Set when an obligation could not be paid. Cleared by liquidation
    /// reaching its target or by bankruptcy.
    pub must_raise_funds: bool,

    /// Set while a payment-target choice is parked for this player.
    pub must_choose_recipient: bool,

    /// Terminal: excluded from turns, payments and the win check.
    pub bankrupt: bool,
}

impl Player {
    /// Create a player standing on `start` with `cash`.
    pub fn new(name: impl Into<String>, cash: i64, start: PositionId) -> Self {
        Self {
            name: name.into(),
            cash,
            position: start,
            properties: OrdSet::new(),
            in_jail: false,
            jail_free_card: false,
            mover_level: 0,
            must_raise_funds: false,
            must_choose_recipient: false,
            bankrupt: false,
        }
    }

    /// Can this player cover `amount` without going negative?
    #[must_use]
    pub fn can_afford(&self, amount: i64) -> bool {
        self.cash >= amount
    }

    /// Still taking turns?
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.bankrupt
    }

    #[must_use]
    pub fn owns(&self, position: PositionId) -> bool {
        self.properties.contains(&position)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}, Money: {}", self.name, self.cash)
    }
}

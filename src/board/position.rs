//! Board cells.
//!
//! A `Position` carries immutable identity (name, price, color) plus the
//! mutable ownership and development state. Owners are stored as
//! `PlayerId`s, never as references, so the arena stays freely mutable.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Development ceiling: five units, the "hotel" level.
pub const MAX_DEVELOPMENT: u8 = 5;

/// Stable index of a position in the board arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PositionId(pub u16);

impl PositionId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PositionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position({})", self.0)
    }
}

/// Cell descriptor fed to `Board::append`, in board order.
///
/// `name` is optional here so that malformed driver input can be reported
/// as `InvalidCellData` rather than rejected by the type system upstream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellData {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub color: Option<String>,
}

impl CellData {
    /// A non-property cell (Go, Jail, Chance, ...).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A purchasable property in a color group.
    pub fn property(name: impl Into<String>, price: i64, color: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            color: Some(color.into()),
        }
    }
}

/// A board cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    id: PositionId,
    name: String,
    price: i64,
    color: Option<String>,

    /// Owning player, if any.
    pub owner: Option<PlayerId>,

    /// Development units (0..=5). Always 0 while unowned.
    pub development: u8,
}

impl Position {
    pub(crate) fn new(id: PositionId, name: String, price: i64, color: Option<String>) -> Self {
        Self {
            id,
            name,
            price,
            color,
            owner: None,
            development: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PositionId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Purchase price; 0 for cells that cannot be bought.
    #[must_use]
    pub fn price(&self) -> i64 {
        self.price
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Can this cell be bought at all?
    #[must_use]
    pub fn is_property(&self) -> bool {
        self.price > 0
    }

    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    #[must_use]
    pub fn is_maxed(&self) -> bool {
        self.development >= MAX_DEVELOPMENT
    }

    /// Return to the bank: no owner, no development.
    pub(crate) fn release(&mut self) {
        self.owner = None;
        self.development = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_data_constructors() {
        let go = CellData::named("Go");
        assert_eq!(go.name.as_deref(), Some("Go"));
        assert!(go.price.is_none());

        let prop = CellData::property("Motor Drive", 5_000, "Brown");
        assert_eq!(prop.price, Some(5_000));
        assert_eq!(prop.color.as_deref(), Some("Brown"));
    }

    #[test]
    fn test_release_clears_state() {
        let mut pos = Position::new(PositionId::new(1), "A".into(), 100, Some("X".into()));
        pos.owner = Some(PlayerId::new(0));
        pos.development = 3;

        pos.release();

        assert!(!pos.is_owned());
        assert_eq!(pos.development, 0);
    }

    #[test]
    fn test_is_property() {
        let go = Position::new(PositionId::new(0), "Go".into(), 0, None);
        let prop = Position::new(PositionId::new(1), "A".into(), 100, Some("X".into()));

        assert!(!go.is_property());
        assert!(prop.is_property());
        assert_eq!(prop.color(), Some("X"));
        assert_eq!(go.color(), None);
    }
}

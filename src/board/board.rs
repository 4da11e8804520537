//! The circular board.
//!
//! Positions live in an arena (`Vec<Position>`) in board order; "next" and
//! "previous" are index arithmetic modulo the board length, so the cycle
//! closes implicitly after the last `append`.
//!
//! ```
//! use millionaire_monopoly::board::{Board, CellData};
//!
//! let mut board = Board::new();
//! let go = board.append(CellData::named("Go")).unwrap();
//! board.append(CellData::property("Motor Drive", 5_000, "Brown")).unwrap();
//! board.append(CellData::named("Jail")).unwrap();
//!
//! assert_eq!(board.step(go, 4), board.step(go, 1));
//! assert_eq!(board.jail(), board.find("Jail"));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::position::{CellData, Position, PositionId};
use crate::core::{GameError, Result};

/// Name of the cell players are sent to.
pub const JAIL: &str = "Jail";

/// Cell that sends the occupant to jail.
pub const GO_TO_JAIL: &str = "Go to Jail";

/// Color bucket. Color groups hold two or three cells on standard boards.
pub type ColorGroup = SmallVec<[PositionId; 4]>;

/// Name, price and color of each standard cell in board order.
const MILLIONAIRE_CELLS: &[(&str, i64, Option<&str>)] = &[
    ("Go", 0, None),
    ("Motor Drive", 5_000, Some("Brown")),
    ("Millionaire Lifestyle", 0, None),
    ("Gadget Wharf", 5_000, Some("Brown")),
    ("Surfer's Cove", 15_000, Some("Light Blue")),
    ("Chance", 0, None),
    ("Aqua Park Resort", 15_000, Some("Light Blue")),
    ("Lakeside Marina", 20_000, Some("Light Blue")),
    ("Jail", 0, None),
    ("Castle View", 35_000, Some("Pink")),
    ("Dream Avenue", 35_000, Some("Pink")),
    ("Palace Gardens", 40_000, Some("Pink")),
    ("Adventure Park", 55_000, Some("Orange")),
    ("Millionaire Lifestyle", 0, None),
    ("Themepark City", 55_000, Some("Orange")),
    ("Movie District", 60_000, Some("Orange")),
    ("Free Parking", 0, None),
    ("Style Square", 80_000, Some("Red")),
    ("Chance", 0, None),
    ("Party Plaza", 80_000, Some("Red")),
    ("Showtime Boulevard", 90_000, Some("Red")),
    ("Sunshine Bay", 115_000, Some("Yellow")),
    ("Bling Beach", 115_000, Some("Yellow")),
    ("Yacht Harbor", 120_000, Some("Yellow")),
    ("Go to Jail", 0, None),
    ("Treetop Retreat", 145_000, Some("Green")),
    ("Ski Mountain", 145_000, Some("Green")),
    ("Millionaire Lifestyle", 0, None),
    ("Diamond Hills", 150_000, Some("Green")),
    ("Chance", 0, None),
    ("Fortune Valley", 170_000, Some("Dark Blue")),
    ("Paradise Island", 200_000, Some("Dark Blue")),
];

/// Closed ordered sequence of positions, grouped by color.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    positions: Vec<Position>,
    jail: Option<PositionId>,
    color_groups: FxHashMap<String, ColorGroup>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from cell descriptors in board order.
    pub fn from_cells(cells: impl IntoIterator<Item = CellData>) -> Result<Self> {
        let mut board = Self::new();
        for cell in cells {
            board.append(cell)?;
        }
        Ok(board)
    }

    /// The standard 32-cell Millionaire board.
    #[must_use]
    pub fn millionaire() -> Self {
        let mut board = Self::new();
        for &(name, price, color) in MILLIONAIRE_CELLS {
            board.push(name.to_string(), price, color.map(String::from));
        }
        board
    }

    /// Append a cell at the tail of the cycle.
    ///
    /// Records the jail if the cell is named "Jail" and files the cell into
    /// its color bucket. Fails if the cell has no name or a negative price.
    pub fn append(&mut self, cell: CellData) -> Result<PositionId> {
        let name = match cell.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(GameError::InvalidCellData("cell has no name".into())),
        };
        let price = cell.price.unwrap_or(0);
        if price < 0 {
            return Err(GameError::InvalidCellData(format!(
                "{name} has negative price {price}"
            )));
        }
        if self.positions.len() >= u16::MAX as usize {
            return Err(GameError::InvalidCellData("board is full".into()));
        }

        Ok(self.push(name, price, cell.color))
    }

    /// Store an already validated cell.
    fn push(&mut self, name: String, price: i64, color: Option<String>) -> PositionId {
        let id = PositionId::new(self.positions.len() as u16);
        let color = color.filter(|c| !c.is_empty());

        if name == JAIL && self.jail.is_none() {
            self.jail = Some(id);
        }
        if let Some(color) = &color {
            self.color_groups.entry(color.clone()).or_default().push(id);
        }

        self.positions.push(Position::new(id, name, price, color));
        id
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The first appended cell; players start here and collect salary
    /// when they cross it.
    #[must_use]
    pub fn head(&self) -> Option<PositionId> {
        (!self.is_empty()).then_some(PositionId::new(0))
    }

    /// The jail cell, if the board has one.
    #[must_use]
    pub fn jail(&self) -> Option<PositionId> {
        self.jail
    }

    /// Position reached after `n` forward hops.
    ///
    /// Panics on an empty board.
    #[must_use]
    pub fn step(&self, from: PositionId, n: usize) -> PositionId {
        assert!(!self.is_empty(), "cannot step on an empty board");
        let len = self.len();
        PositionId::new(((from.index() + n % len) % len) as u16)
    }

    /// Position reached after `n` backward hops.
    #[must_use]
    pub fn step_back(&self, from: PositionId, n: usize) -> PositionId {
        assert!(!self.is_empty(), "cannot step on an empty board");
        let len = self.len();
        PositionId::new(((from.index() + len - n % len) % len) as u16)
    }

    /// Ordered bucket for a color; empty if the color is unknown.
    #[must_use]
    pub fn positions_of_color(&self, color: &str) -> &[PositionId] {
        self.color_groups
            .get(color)
            .map(|group| group.as_slice())
            .unwrap_or(&[])
    }

    /// Color labels present on the board.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.color_groups.keys().map(String::as_str)
    }

    /// First position with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PositionId> {
        self.positions.iter().find(|p| p.name() == name).map(Position::id)
    }

    #[must_use]
    pub fn get(&self, id: PositionId) -> Option<&Position> {
        self.positions.get(id.index())
    }

    /// Iterate positions in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    /// Cell names in board order.
    pub fn names(&self) -> Vec<&str> {
        self.positions.iter().map(Position::name).collect()
    }
}

impl Index<PositionId> for Board {
    type Output = Position;

    fn index(&self, id: PositionId) -> &Self::Output {
        &self.positions[id.index()]
    }
}

impl IndexMut<PositionId> for Board {
    fn index_mut(&mut self, id: PositionId) -> &mut Self::Output {
        &mut self.positions[id.index()]
    }
}

impl std::fmt::Display for Board {
    /// `Go -> Motor Drive -> ... -> Go`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(head) = self.positions.first() else {
            return write!(f, "(empty board)");
        };
        for position in &self.positions {
            write!(f, "{} -> ", position.name())?;
        }
        write!(f, "{}", head.name())
    }
}

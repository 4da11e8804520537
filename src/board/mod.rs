//! Board representation.
//!
//! - `Position`: a cell with static data and ownership/development state
//! - `Board`: the circular arena of positions plus color buckets

mod board;
mod position;

pub use board::{Board, ColorGroup, GO_TO_JAIL, JAIL};
pub use position::{CellData, Position, PositionId, MAX_DEVELOPMENT};

//! Game rules: ownership, rent, and outcome.
//!
//! Everything here is a pure function of the board and configuration;
//! the `Game` state machine calls into it but never duplicates the math.

pub mod rent;
mod result;

pub use rent::{calculate_rent, has_any_development, owns_full_set};
pub use result::GameResult;

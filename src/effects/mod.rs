//! Card effects and the payment helpers they share with the engine.
//!
//! - `Effect`: what a card does, as plain data
//! - `apply`: executes an effect for the player who drew it
//! - `payments`: player-to-player money movement
//!
//! Payments are all-or-nothing per transfer. A payer who cannot cover an
//! obligation keeps their cash and gets `must_raise_funds` set instead.

mod effect;
pub mod payments;
mod resolver;

pub use effect::Effect;
pub use payments::Settlement;
pub use resolver::{apply, EffectOutcome};

//! Effect resolution.
//!
//! `apply` executes one card effect against the game for the player who
//! drew it. Most effects finish immediately; `PayChosenPlayer` and an
//! `AdvanceSpaces` that lands on an unowned or unaffordable property hand
//! back a `PendingAction` for the engine to park.

use tracing::debug;

use super::{payments, Effect};
use crate::core::PlayerId;
use crate::game::Game;
use crate::pending::PendingAction;

/// Result of resolving an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EffectOutcome {
    /// Finished; the message describes what happened.
    Resolved(String),
    /// Needs a decision before the turn can continue.
    Pending {
        message: String,
        action: PendingAction,
    },
}

impl EffectOutcome {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, EffectOutcome::Pending { .. })
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            EffectOutcome::Resolved(message) | EffectOutcome::Pending { message, .. } => message,
        }
    }
}

/// Execute `effect` for `player`.
pub fn apply(game: &mut Game, player: PlayerId, effect: &Effect) -> EffectOutcome {
    debug!(player = %game.name_of(player), ?effect, "applying effect");
    let name = game.name_of(player).to_string();

    match *effect {
        Effect::EarnMoney { amount } => {
            game.players_mut()[player].cash += amount;
            EffectOutcome::Resolved(format!("{name} earns ${amount}"))
        }

        Effect::PayBank { amount } => {
            let p = &mut game.players_mut()[player];
            if p.can_afford(amount) {
                p.cash -= amount;
                EffectOutcome::Resolved(format!("{name} pays ${amount} to the bank"))
            } else {
                p.must_raise_funds = true;
                EffectOutcome::Resolved(format!("{name} cannot pay ${amount} to the bank"))
            }
        }

        Effect::PayPlayer { amount, payee } => {
            let message = match payments::pay_player(game, player, amount, payee) {
                Ok(message) => message,
                Err(err) => format!(
                    "{name} cannot pay ${amount} to {} ({err})",
                    game.name_of(payee)
                ),
            };
            EffectOutcome::Resolved(message)
        }

        Effect::PayAllOthers { amount } => {
            EffectOutcome::Resolved(payments::pay_all_others(game, player, amount).message())
        }

        Effect::CollectFromAllOthers { amount } => EffectOutcome::Resolved(
            payments::collect_from_all_others(game, player, amount).message(),
        ),

        Effect::PayChosenPlayer { amount } => {
            payments::choose_payment_target(game, player, amount)
        }

        Effect::GoToJail => {
            let mut log = Vec::new();
            game.send_to_jail(player, &mut log);
            EffectOutcome::Resolved(log.join("; "))
        }

        Effect::AdvanceSpaces { spaces } => {
            let mut log = Vec::new();
            game.advance(player, spaces, false, &mut log);
            let pending = game.resolve_landing(player, false, &mut log);
            let message = log.join("; ");
            match pending {
                Some(action) => EffectOutcome::Pending { message, action },
                None => EffectOutcome::Resolved(message),
            }
        }

        Effect::GetOutOfJailFree => {
            game.players_mut()[player].jail_free_card = true;
            EffectOutcome::Resolved(format!("{name} keeps a Get Out of Jail Free card"))
        }
    }
}

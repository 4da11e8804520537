//! Resuming a suspended turn.

use tracing::info;

use super::{Game, GameStatus};
use crate::board::PositionId;
use crate::core::{GameError, PlayerId, Result};
use crate::effects::payments;
use crate::pending::{PendingAction, PendingDetail, BUY, DECLARE_BANKRUPTCY, SELL_ASSETS};

impl Game {
    /// Resolve the parked action with one of its choice tokens.
    ///
    /// An unknown token is rejected and the action stays parked. Otherwise
    /// the action is consumed; the turn passes on unless resolving it raised
    /// a follow-up action or ended the game.
    pub fn submit_choice(&mut self, token: &str) -> Result<String> {
        self.require_status(GameStatus::AwaitingChoice, "submit a choice")?;
        let action = self
            .pending
            .take()
            .ok_or(GameError::IllegalStateTransition {
                status: self.status,
                operation: "submit a choice",
            })?;
        if let Err(err) = action.validate(token) {
            self.pending = Some(action);
            return Err(err);
        }

        info!(player = %self.name_of(action.player), kind = %action.kind(), token, "choice submitted");
        self.status = GameStatus::Playing;
        let player = action.player;
        self.players[player].must_choose_recipient = false;

        let (message, follow_up) = match action.detail {
            PendingDetail::PropertyPurchaseDecision { position, .. } => {
                (self.resume_purchase(player, position, token), None)
            }
            PendingDetail::MustPayRent {
                amount,
                position,
                creditor,
            } => self.resume_rent(player, creditor, position, amount, token),
            PendingDetail::ChoosePaymentTarget { amount } => {
                (self.resume_payment(player, amount, token), None)
            }
        };

        match follow_up {
            Some(next) => self.suspend(next),
            None => self.finish_turn(),
        }
        Ok(message)
    }

    fn resume_purchase(&mut self, player: PlayerId, position: PositionId, token: &str) -> String {
        if token != BUY {
            return format!(
                "{} passes on {}",
                self.name_of(player),
                self.position_name(position)
            );
        }
        match self.buy_property(player, position) {
            Ok(message) => message,
            Err(err) => format!(
                "{} cannot buy {}: {err}",
                self.name_of(player),
                self.position_name(position)
            ),
        }
    }

    fn resume_rent(
        &mut self,
        player: PlayerId,
        creditor: PlayerId,
        position: PositionId,
        amount: i64,
        token: &str,
    ) -> (String, Option<PendingAction>) {
        if token == DECLARE_BANKRUPTCY {
            return (self.bankrupt(player, Some(creditor)), None);
        }
        debug_assert_eq!(token, SELL_ASSETS);

        let liquidation = self.liquidate(player, amount);
        let name = self.name_of(player).to_string();
        let mut message = format!(
            "{name} sold {} houses and {} properties for ${}",
            liquidation.houses_sold,
            liquidation.properties_sold.len(),
            liquidation.raised
        );

        if !liquidation.covered {
            let prompt = format!(
                "{name} still owes ${amount} rent but has ${}",
                self.players[player].cash
            );
            message.push_str("; ");
            message.push_str(&prompt);
            let next = PendingAction::rent_exhausted(player, creditor, position, amount, prompt);
            return (message, Some(next));
        }

        if self.players[creditor].is_active() {
            self.transfer_cash(player, creditor, amount);
        } else {
            self.players[player].cash -= amount;
        }
        self.players[player].must_raise_funds = false;
        message.push_str(&format!(
            "; {name} pays ${amount} rent to {}",
            self.name_of(creditor)
        ));
        (message, None)
    }

    fn resume_payment(&mut self, player: PlayerId, amount: i64, token: &str) -> String {
        let Some(payee) = self.player_id(token) else {
            return format!("{token} is not in this game");
        };
        match payments::pay_player(self, player, amount, payee) {
            Ok(message) => message,
            Err(err) => format!(
                "{} cannot pay ${amount} to {token} ({err})",
                self.name_of(player)
            ),
        }
    }
}

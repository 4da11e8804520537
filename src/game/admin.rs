//! Ownership, development and jail operations usable outside the turn flow.
//!
//! These back trading screens and house rules. They work in `Playing` and
//! `AwaitingChoice` alike but are refused once the game is over. A
//! voluntary purchase the player cannot afford fails without setting
//! `must_raise_funds`; only obligations do that.

use tracing::{debug, info};

use super::{Game, GameStatus};
use crate::board::{PositionId, MAX_DEVELOPMENT};
use crate::core::{GameError, PlayerId, Result};
use crate::effects::payments;
use crate::pending::PendingKind;
use crate::rules::rent::{house_refund, property_refund};

impl Game {
    /// Buy an unowned property from the bank at its listed price.
    pub fn buy_property(&mut self, player: PlayerId, position: PositionId) -> Result<String> {
        self.require_not_over("buy property")?;
        self.require_active(player)?;

        let cell = &self.board[position];
        if !cell.is_property() {
            return Err(GameError::NotPurchasable(cell.name().to_string()));
        }
        if let Some(owner) = cell.owner {
            return Err(GameError::AlreadyOwned {
                position: cell.name().to_string(),
                owner: self.name_of(owner).to_string(),
            });
        }
        let price = cell.price();
        let available = self.players[player].cash;
        if available < price {
            return Err(GameError::InsufficientFunds {
                needed: price,
                available,
            });
        }

        self.players[player].cash -= price;
        self.players[player].properties.insert(position);
        self.board[position].owner = Some(player);
        info!(player = %self.name_of(player), position = %self.position_name(position), price, "property bought");
        Ok(format!(
            "{} buys {} for ${price}",
            self.name_of(player),
            self.position_name(position)
        ))
    }

    /// Hand a property to another player. Development stays with the lot.
    pub fn transfer_property(
        &mut self,
        from: PlayerId,
        to: PlayerId,
        position: PositionId,
    ) -> Result<String> {
        self.require_not_over("transfer property")?;
        self.require_active(from)?;
        self.require_active(to)?;
        self.require_owner(from, position)?;

        self.players[from].properties.remove(&position);
        self.players[to].properties.insert(position);
        self.board[position].owner = Some(to);
        info!(from = %self.name_of(from), to = %self.name_of(to), position = %self.position_name(position), "property transferred");
        Ok(format!(
            "{} transfers {} to {}",
            self.name_of(from),
            self.position_name(position),
            self.name_of(to)
        ))
    }

    /// Move cash between two players, all or nothing.
    pub fn send_money(&mut self, from: PlayerId, to: PlayerId, amount: i64) -> Result<String> {
        self.require_not_over("send money")?;
        payments::pay_player(self, from, amount, to)
    }

    /// Add `count` units of development at `cost_per_unit` each.
    ///
    /// A purchase that would take the position past the ceiling is
    /// rejected whole.
    pub fn buy_house(
        &mut self,
        player: PlayerId,
        position: PositionId,
        cost_per_unit: i64,
        count: u8,
    ) -> Result<String> {
        self.require_not_over("buy development")?;
        self.require_active(player)?;
        self.require_owner(player, position)?;
        if cost_per_unit < 0 {
            return Err(GameError::InvalidAmount(cost_per_unit));
        }

        let cell = &self.board[position];
        if cell.is_maxed() {
            return Err(GameError::AlreadyMaxed(cell.name().to_string()));
        }
        let current = cell.development;
        if u16::from(current) + u16::from(count) > u16::from(MAX_DEVELOPMENT) {
            return Err(GameError::DevelopmentOvershoot {
                position: cell.name().to_string(),
                current,
                requested: count,
            });
        }

        let available = self.players[player].cash;
        let total = cost_per_unit
            .checked_mul(i64::from(count))
            .ok_or(GameError::InsufficientFunds {
                needed: i64::MAX,
                available,
            })?;
        if available < total {
            return Err(GameError::InsufficientFunds {
                needed: total,
                available,
            });
        }

        self.players[player].cash -= total;
        self.board[position].development = current + count;
        info!(
            player = %self.name_of(player),
            position = %self.position_name(position),
            development = current + count,
            "development bought"
        );
        Ok(format!(
            "{} builds {count} on {} for ${total}",
            self.name_of(player),
            self.position_name(position)
        ))
    }

    /// Sell one unit of development back to the bank. Returns the refund.
    pub fn sell_house(&mut self, player: PlayerId, position: PositionId) -> Result<i64> {
        self.require_not_over("sell development")?;
        self.require_active(player)?;
        self.require_owner(player, position)?;
        if self.board[position].development == 0 {
            return Err(GameError::NoDevelopment(
                self.position_name(position).to_string(),
            ));
        }
        Ok(self.sell_one_house(player, position))
    }

    /// Sell an undeveloped property back to the bank. Returns the refund.
    pub fn sell_property(&mut self, player: PlayerId, position: PositionId) -> Result<i64> {
        self.require_not_over("sell property")?;
        self.require_active(player)?;
        self.require_owner(player, position)?;
        if self.board[position].development > 0 {
            return Err(GameError::HasDevelopment(
                self.position_name(position).to_string(),
            ));
        }
        Ok(self.sell_to_bank(player, position))
    }

    /// Spend a held jail-free card to leave jail now.
    pub fn use_jail_free_card(&mut self, player: PlayerId) -> Result<String> {
        self.require_not_over("use a jail-free card")?;
        self.require_active(player)?;
        let name = self.name_of(player).to_string();
        let p = &mut self.players[player];
        if !p.in_jail {
            return Err(GameError::NotInJail(name));
        }
        if !p.jail_free_card {
            return Err(GameError::NoJailFreeCard(name));
        }
        p.jail_free_card = false;
        p.in_jail = false;
        Ok(format!("{name} uses a Get Out of Jail Free card!"))
    }

    /// Pay the fine to leave jail now.
    pub fn pay_jail_fine(&mut self, player: PlayerId) -> Result<String> {
        self.require_not_over("pay the jail fine")?;
        self.require_active(player)?;
        let fine = self.config.jail_fine;
        let name = self.name_of(player).to_string();
        let p = &mut self.players[player];
        if !p.in_jail {
            return Err(GameError::NotInJail(name));
        }
        if !p.can_afford(fine) {
            p.must_raise_funds = true;
            return Err(GameError::InsufficientFunds {
                needed: fine,
                available: p.cash,
            });
        }
        p.cash -= fine;
        p.in_jail = false;
        Ok(format!("{name} pays ${fine} to leave Jail"))
    }

    /// Take `player` out of the game.
    ///
    /// Remaining cash goes to `creditor` (or the bank) and every owned
    /// position returns to the bank undeveloped. A parked action belonging
    /// to the player is dropped, and if it was their turn the turn passes.
    /// The player also stops being a payment target.
    pub fn declare_bankruptcy(
        &mut self,
        player: PlayerId,
        creditor: Option<PlayerId>,
    ) -> Result<String> {
        self.require_not_over("declare bankruptcy")?;
        self.require_active(player)?;

        let parked = self.pending.as_ref().is_some_and(|a| a.player == player);
        let message = self.bankrupt(player, creditor);

        if parked && self.status == GameStatus::AwaitingChoice {
            self.drop_pending();
            self.status = GameStatus::Playing;
        } else {
            self.withdraw_payee(player);
        }
        if self.status == GameStatus::Playing && self.current == player {
            self.finish_turn();
        }
        Ok(message)
    }

    // === Shared mechanics ===

    pub(crate) fn transfer_cash(&mut self, from: PlayerId, to: PlayerId, amount: i64) {
        self.players[from].cash -= amount;
        self.players[to].cash += amount;
    }

    pub(crate) fn sell_one_house(&mut self, player: PlayerId, position: PositionId) -> i64 {
        let refund = house_refund(&self.board, &self.config, position);
        self.board[position].development -= 1;
        self.players[player].cash += refund;
        debug!(player = %self.name_of(player), position = %self.position_name(position), refund, "house sold");
        refund
    }

    pub(crate) fn sell_to_bank(&mut self, player: PlayerId, position: PositionId) -> i64 {
        let refund = property_refund(&self.board, &self.config, position);
        self.board[position].release();
        self.players[player].properties.remove(&position);
        self.players[player].cash += refund;
        debug!(player = %self.name_of(player), position = %self.position_name(position), refund, "property sold");
        refund
    }

    pub(crate) fn bankrupt(&mut self, player: PlayerId, creditor: Option<PlayerId>) -> String {
        let creditor = creditor.filter(|&c| c != player && self.players[c].is_active());
        let cash = self.players[player].cash.max(0);
        if let Some(creditor) = creditor {
            self.players[creditor].cash += cash;
        }

        let owned: Vec<PositionId> = self.players[player].properties.iter().copied().collect();
        for position in owned {
            self.board[position].release();
        }

        let p = &mut self.players[player];
        p.cash = 0;
        p.properties.clear();
        p.bankrupt = true;
        p.must_raise_funds = false;
        p.must_choose_recipient = false;
        p.in_jail = false;
        p.jail_free_card = false;

        let name = self.name_of(player).to_string();
        info!(player = %name, creditor = ?creditor.map(|c| self.name_of(c).to_string()), cash, "bankrupt");
        self.check_game_over();

        match creditor {
            Some(creditor) => format!(
                "{name} is bankrupt; ${cash} goes to {}",
                self.name_of(creditor)
            ),
            None => format!("{name} is bankrupt"),
        }
    }

    /// Strike a bankrupt player from a parked payment-target choice. The
    /// list cannot empty here: losing the last candidate ends the game.
    fn withdraw_payee(&mut self, player: PlayerId) {
        let name = self.name_of(player).to_string();
        if let Some(action) = self.pending.as_mut() {
            if action.kind() == PendingKind::ChoosePaymentTarget {
                action.choices.retain(|choice| *choice != name);
            }
        }
    }

    fn require_owner(&self, player: PlayerId, position: PositionId) -> Result<()> {
        if self.board[position].owner == Some(player) {
            Ok(())
        } else {
            Err(GameError::NotOwner {
                player: self.name_of(player).to_string(),
                position: self.position_name(position).to_string(),
            })
        }
    }
}

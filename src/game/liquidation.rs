//! Selling assets back to the bank to cover a debt.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::Game;
use crate::board::PositionId;
use crate::core::{PlayerId, Result};

/// What a liquidation sold and whether it reached its target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liquidation {
    pub raised: i64,
    pub houses_sold: u32,
    /// Positions returned to the bank, in sale order.
    pub properties_sold: Vec<PositionId>,
    /// Cash reached the target.
    pub covered: bool,
}

impl Game {
    /// Sell `player`'s assets until their cash reaches `target`.
    ///
    /// Houses go first, one at a time from the most developed position
    /// (board order breaks ties). Undeveloped positions follow, cheapest
    /// first. Selling stops as soon as the target is met; reaching it
    /// clears `must_raise_funds`.
    pub fn liquidate_assets(&mut self, player: PlayerId, target: i64) -> Result<Liquidation> {
        self.require_not_over("liquidate assets")?;
        self.require_active(player)?;
        Ok(self.liquidate(player, target))
    }

    pub(crate) fn liquidate(&mut self, player: PlayerId, target: i64) -> Liquidation {
        let mut sale = Liquidation::default();

        while self.players[player].cash < target {
            if let Some(position) = self.most_developed(player) {
                sale.raised += self.sell_one_house(player, position);
                sale.houses_sold += 1;
            } else if let Some(position) = self.cheapest_property(player) {
                sale.raised += self.sell_to_bank(player, position);
                sale.properties_sold.push(position);
            } else {
                break;
            }
        }

        sale.covered = self.players[player].cash >= target;
        if sale.covered {
            self.players[player].must_raise_funds = false;
        }
        info!(
            player = %self.name_of(player),
            target,
            raised = sale.raised,
            houses = sale.houses_sold,
            properties = sale.properties_sold.len(),
            covered = sale.covered,
            "liquidated"
        );
        sale
    }

    fn most_developed(&self, player: PlayerId) -> Option<PositionId> {
        self.players[player]
            .properties
            .iter()
            .copied()
            .filter(|&id| self.board[id].development > 0)
            .max_by_key(|&id| (self.board[id].development, std::cmp::Reverse(id)))
    }

    fn cheapest_property(&self, player: PlayerId) -> Option<PositionId> {
        self.players[player]
            .properties
            .iter()
            .copied()
            .min_by_key(|&id| (self.board[id].price(), id))
    }
}

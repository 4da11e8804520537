//! Game configuration.
//!
//! Economic constants live here rather than in the engine so that tests
//! and alternative rule sets can run on small boards with small numbers.
//! `GameConfig::default()` is the Millionaire edition:
//! - 372,000 starting cash
//! - start-cell salary tiers of 150k / 200k / 250k
//! - eight color groups with six-entry rent tables

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Number of entries in a rent table: undeveloped plus five development levels.
pub const RENT_LEVELS: usize = 6;

/// Rent and development pricing for one color group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRules {
    /// Rent indexed by development level (0 = undeveloped, 5 = hotel).
    pub rents: [i64; RENT_LEVELS],

    /// Price of one unit of development.
    pub house_cost: i64,
}

impl ColorRules {
    #[must_use]
    pub const fn new(rents: [i64; RENT_LEVELS], house_cost: i64) -> Self {
        Self { rents, house_cost }
    }

    /// Tabulated rent for a development level, clamped to the last entry.
    #[must_use]
    pub fn rent_at(&self, development: u8) -> i64 {
        let idx = (development as usize).min(RENT_LEVELS - 1);
        self.rents[idx]
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cash every player starts with.
    pub starting_cash: i64,

    /// Salary for crossing the start cell, indexed by mover level.
    pub go_bonus: [i64; 3],

    /// Deducted from the salary when a mover upgrade is bought on crossing.
    pub mover_upgrade_cost: i64,

    /// Flat extra salary when an upgrade is requested at the top tier.
    pub max_tier_bonus: i64,

    /// Paid to the bank to leave jail without a card.
    pub jail_fine: i64,

    /// Percentage of a house cost refunded when development is sold.
    pub house_resale_percent: i64,

    /// Percentage of the price refunded when a position is sold to the bank.
    pub property_resale_percent: i64,

    /// Rent tables keyed by color label.
    pub colors: FxHashMap<String, ColorRules>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let colors = [
            ("Brown", [7_000, 15_000, 30_000, 50_000, 60_000, 80_000], 10_000),
            ("Light Blue", [15_000, 30_000, 50_000, 80_000, 95_000, 125_000], 15_000),
            ("Pink", [20_000, 50_000, 90_000, 140_000, 165_000, 215_000], 25_000),
            ("Orange", [25_000, 65_000, 110_000, 170_000, 200_000, 270_000], 30_000),
            ("Red", [35_000, 90_000, 150_000, 230_000, 270_000, 350_000], 35_000),
            ("Yellow", [40_000, 100_000, 170_000, 260_000, 305_000, 395_000], 45_000),
            ("Green", [50_000, 125_000, 210_000, 320_000, 375_000, 485_000], 55_000),
            ("Dark Blue", [65_000, 160_000, 250_000, 370_000, 430_000, 550_000], 60_000),
        ]
        .into_iter()
        .map(|(name, rents, house_cost)| (name.to_string(), ColorRules::new(rents, house_cost)))
        .collect();

        Self {
            starting_cash: 372_000,
            go_bonus: [150_000, 200_000, 250_000],
            mover_upgrade_cost: 50_000,
            max_tier_bonus: 50_000,
            jail_fine: 50_000,
            house_resale_percent: 50,
            property_resale_percent: 50,
            colors,
        }
    }
}

impl GameConfig {
    /// The Millionaire edition rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Same economy with no color tables; add them with `with_color`.
    pub fn without_colors() -> Self {
        Self {
            colors: FxHashMap::default(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_starting_cash(mut self, cash: i64) -> Self {
        self.starting_cash = cash;
        self
    }

    #[must_use]
    pub fn with_go_bonus(mut self, tiers: [i64; 3]) -> Self {
        self.go_bonus = tiers;
        self
    }

    #[must_use]
    pub fn with_mover_upgrade_cost(mut self, cost: i64) -> Self {
        self.mover_upgrade_cost = cost;
        self
    }

    #[must_use]
    pub fn with_max_tier_bonus(mut self, bonus: i64) -> Self {
        self.max_tier_bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_jail_fine(mut self, fine: i64) -> Self {
        self.jail_fine = fine;
        self
    }

    #[must_use]
    pub fn with_resale_percent(mut self, houses: i64, properties: i64) -> Self {
        self.house_resale_percent = houses;
        self.property_resale_percent = properties;
        self
    }

    /// Add or replace the rules for a color group.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>, rules: ColorRules) -> Self {
        self.colors.insert(color.into(), rules);
        self
    }

    /// Rules for a color, if the color is known.
    #[must_use]
    pub fn color(&self, color: &str) -> Option<&ColorRules> {
        self.colors.get(color)
    }

    /// Salary for a mover level; levels past the table use the top tier.
    #[must_use]
    pub fn go_bonus_for(&self, mover_level: u8) -> i64 {
        let idx = (mover_level as usize).min(self.go_bonus.len() - 1);
        self.go_bonus[idx]
    }

    /// Reject configurations that would let balances go wrong.
    pub fn validate(&self) -> Result<()> {
        if self.starting_cash < 0 {
            return Err(GameError::InvalidConfig("starting cash is negative".into()));
        }
        if self.go_bonus.iter().any(|&b| b < 0) {
            return Err(GameError::InvalidConfig("salary tier is negative".into()));
        }
        if self.mover_upgrade_cost < 0 || self.max_tier_bonus < 0 || self.jail_fine < 0 {
            return Err(GameError::InvalidConfig("negative fee or bonus".into()));
        }
        // An upgrade is paid out of the salary of the tier being left.
        if self.go_bonus[..2].iter().any(|&b| b < self.mover_upgrade_cost) {
            return Err(GameError::InvalidConfig(
                "mover upgrade costs more than a lower salary tier".into(),
            ));
        }
        for percent in [self.house_resale_percent, self.property_resale_percent] {
            if !(0..=100).contains(&percent) {
                return Err(GameError::InvalidConfig(format!(
                    "resale percent {percent} outside 0..=100"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.starting_cash, 372_000);
        assert_eq!(config.colors.len(), 8);
        assert_eq!(config.color("Brown").unwrap().rents[0], 7_000);
        assert_eq!(config.color("Dark Blue").unwrap().house_cost, 60_000);
        assert!(config.color("Purple").is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rent_at_clamps() {
        let rules = ColorRules::new([1, 2, 3, 4, 5, 6], 10);
        assert_eq!(rules.rent_at(0), 1);
        assert_eq!(rules.rent_at(5), 6);
        assert_eq!(rules.rent_at(9), 6);
    }

    #[test]
    fn test_go_bonus_for() {
        let config = GameConfig::default();
        assert_eq!(config.go_bonus_for(0), 150_000);
        assert_eq!(config.go_bonus_for(2), 250_000);
        assert_eq!(config.go_bonus_for(7), 250_000);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::without_colors()
            .with_starting_cash(1500)
            .with_go_bonus([200, 300, 400])
            .with_jail_fine(50)
            .with_color("X", ColorRules::new([100, 200, 300, 400, 500, 600], 50));

        assert_eq!(config.starting_cash, 1500);
        assert_eq!(config.go_bonus_for(1), 300);
        assert_eq!(config.jail_fine, 50);
        assert_eq!(config.colors.len(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_percent() {
        let config = GameConfig::default().with_resale_percent(150, 50);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig::default().with_starting_cash(-1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_upgrade_above_salary() {
        let config = GameConfig::default().with_go_bonus([200, 300, 400]);
        assert!(config.validate().is_err());

        let config = config.with_mover_upgrade_cost(200);
        assert!(config.validate().is_ok());
    }
}

//! Card effect definitions.
//!
//! Effects are plain data: a tag plus the parameters bound when the deck
//! was built. The resolver interprets them against the game, so a card
//! can be cloned, compared and serialized without carrying code.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// What a card does when drawn.
///
/// ## Money
///
/// - `EarnMoney` / `PayBank`: trade with the bank
/// - `PayPlayer`: pay a fixed player
/// - `PayAllOthers` / `CollectFromAllOthers`: settle with every solvent opponent
/// - `PayChosenPlayer`: the drawer picks the recipient (raises a pending action)
///
/// ## Movement and jail
///
/// - `GoToJail`, `AdvanceSpaces`, `GetOutOfJailFree`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    EarnMoney { amount: i64 },

    PayBank { amount: i64 },

    PayPlayer { amount: i64, payee: PlayerId },

    PayAllOthers { amount: i64 },

    CollectFromAllOthers { amount: i64 },

    PayChosenPlayer { amount: i64 },

    GoToJail,

    /// Move forward, collecting salary for any start-cell crossing,
    /// then resolve the landing cell (card cells do not chain a draw).
    AdvanceSpaces { spaces: usize },

    GetOutOfJailFree,
}

impl Effect {
    pub fn earn(amount: i64) -> Self {
        Self::EarnMoney { amount }
    }

    pub fn pay_bank(amount: i64) -> Self {
        Self::PayBank { amount }
    }

    pub fn pay_player(amount: i64, payee: PlayerId) -> Self {
        Self::PayPlayer { amount, payee }
    }

    pub fn pay_all(amount: i64) -> Self {
        Self::PayAllOthers { amount }
    }

    pub fn collect_all(amount: i64) -> Self {
        Self::CollectFromAllOthers { amount }
    }

    pub fn pay_chosen(amount: i64) -> Self {
        Self::PayChosenPlayer { amount }
    }

    pub fn advance(spaces: usize) -> Self {
        Self::AdvanceSpaces { spaces }
    }

    /// Cash amount carried by money effects.
    #[must_use]
    pub fn amount(&self) -> Option<i64> {
        match *self {
            Self::EarnMoney { amount }
            | Self::PayBank { amount }
            | Self::PayPlayer { amount, .. }
            | Self::PayAllOthers { amount }
            | Self::CollectFromAllOthers { amount }
            | Self::PayChosenPlayer { amount } => Some(amount),
            Self::GoToJail | Self::AdvanceSpaces { .. } | Self::GetOutOfJailFree => None,
        }
    }

    /// Does resolving this effect need a decision from the drawer?
    #[must_use]
    pub fn needs_choice(&self) -> bool {
        matches!(self, Self::PayChosenPlayer { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Effect::earn(100), Effect::EarnMoney { amount: 100 });
        assert_eq!(Effect::advance(3), Effect::AdvanceSpaces { spaces: 3 });
        assert_eq!(
            Effect::pay_player(50, PlayerId::new(1)),
            Effect::PayPlayer {
                amount: 50,
                payee: PlayerId::new(1)
            }
        );
    }

    #[test]
    fn test_amount() {
        assert_eq!(Effect::pay_bank(75).amount(), Some(75));
        assert_eq!(Effect::GoToJail.amount(), None);
        assert_eq!(Effect::advance(2).amount(), None);
    }

    #[test]
    fn test_needs_choice() {
        assert!(Effect::pay_chosen(10).needs_choice());
        assert!(!Effect::pay_all(10).needs_choice());
        assert!(!Effect::GoToJail.needs_choice());
    }

    #[test]
    fn test_effect_serialization() {
        let effect = Effect::collect_all(5_000);
        let json = serde_json::to_string(&effect).unwrap();
        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, back);
    }
}

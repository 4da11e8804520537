//! Pending-action protocol.
//!
//! When a turn cannot finish without a decision, the engine parks a
//! `PendingAction` and returns to its caller. The action is plain data:
//! a `PendingDetail` variant says what was interrupted and carries what the
//! resume step needs, so it can be inspected or serialized without
//! invoking anything. `Game::submit_choice` validates the token and
//! dispatches on the variant.
//!
//! ## Lifecycle
//!
//! 1. Created during move resolution (landing cell or card effect)
//! 2. Game status becomes `AwaitingChoice`; rolling and moving are refused
//! 3. Consumed exactly once by a valid token; invalid tokens leave it untouched

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::PositionId;
use crate::core::{GameError, PlayerId, Result};

pub const BUY: &str = "buy";
pub const PASS: &str = "pass";
pub const SELL_ASSETS: &str = "sell-assets";
pub const DECLARE_BANKRUPTCY: &str = "declare-bankruptcy";

/// Choice tokens. Most actions offer two.
pub type Choices = SmallVec<[String; 4]>;

/// Action-kind tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PendingKind {
    ChoosePaymentTarget,
    MustPayRent,
    PropertyPurchaseDecision,
}

impl PendingKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PendingKind::ChoosePaymentTarget => "choose-payment-target",
            PendingKind::MustPayRent => "must-pay-rent",
            PendingKind::PropertyPurchaseDecision => "property-purchase-decision",
        }
    }
}

impl std::fmt::Display for PendingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What was interrupted, with the data the resume step needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PendingDetail {
    /// Pay `amount` to a player named by the choice token.
    ChoosePaymentTarget { amount: i64 },

    /// Rent of `amount` owed to `creditor` for landing on `position`.
    MustPayRent {
        amount: i64,
        position: PositionId,
        creditor: PlayerId,
    },

    /// Buy or pass on an unowned property.
    PropertyPurchaseDecision { position: PositionId, price: i64 },
}

impl PendingDetail {
    #[must_use]
    pub fn kind(&self) -> PendingKind {
        match self {
            PendingDetail::ChoosePaymentTarget { .. } => PendingKind::ChoosePaymentTarget,
            PendingDetail::MustPayRent { .. } => PendingKind::MustPayRent,
            PendingDetail::PropertyPurchaseDecision { .. } => PendingKind::PropertyPurchaseDecision,
        }
    }
}

/// A suspended turn awaiting one decision from `player`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAction {
    pub player: PlayerId,
    pub prompt: String,
    pub choices: Choices,
    pub detail: PendingDetail,
}

impl PendingAction {
    /// Buy-or-pass decision for an unowned property.
    pub fn purchase(player: PlayerId, position: PositionId, name: &str, price: i64) -> Self {
        Self {
            player,
            prompt: format!("Buy {name} for ${price}?"),
            choices: [BUY, PASS].into_iter().map(String::from).collect(),
            detail: PendingDetail::PropertyPurchaseDecision { position, price },
        }
    }

    /// Rent the player cannot currently cover.
    pub fn rent(
        player: PlayerId,
        creditor: PlayerId,
        position: PositionId,
        amount: i64,
        prompt: String,
    ) -> Self {
        Self {
            player,
            prompt,
            choices: [SELL_ASSETS, DECLARE_BANKRUPTCY]
                .into_iter()
                .map(String::from)
                .collect(),
            detail: PendingDetail::MustPayRent {
                amount,
                position,
                creditor,
            },
        }
    }

    /// Follow-up once liquidation has run out of assets: bankruptcy only.
    pub fn rent_exhausted(
        player: PlayerId,
        creditor: PlayerId,
        position: PositionId,
        amount: i64,
        prompt: String,
    ) -> Self {
        Self {
            choices: std::iter::once(DECLARE_BANKRUPTCY.to_string()).collect(),
            ..Self::rent(player, creditor, position, amount, prompt)
        }
    }

    /// Pick who receives `amount`; `recipients` are display names.
    pub fn payment_target(
        player: PlayerId,
        amount: i64,
        recipients: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            player,
            prompt: format!("Choose a player to pay ${amount}"),
            choices: recipients.into_iter().collect(),
            detail: PendingDetail::ChoosePaymentTarget { amount },
        }
    }

    #[must_use]
    pub fn kind(&self) -> PendingKind {
        self.detail.kind()
    }

    #[must_use]
    pub fn accepts(&self, token: &str) -> bool {
        self.choices.iter().any(|c| c == token)
    }

    /// `Ok` if `token` is one of the recorded choices.
    pub fn validate(&self, token: &str) -> Result<()> {
        if self.accepts(token) {
            Ok(())
        } else {
            Err(GameError::InvalidChoice {
                token: token.to_string(),
                choices: self.choices.to_vec(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_action() {
        let action = PendingAction::purchase(PlayerId::new(0), PositionId::new(1), "A", 1000);

        assert_eq!(action.kind(), PendingKind::PropertyPurchaseDecision);
        assert_eq!(action.prompt, "Buy A for $1000?");
        assert!(action.accepts(BUY));
        assert!(action.accepts(PASS));
        assert!(!action.accepts("sell-assets"));
    }

    #[test]
    fn test_validate_rejects_unknown_token() {
        let action = PendingAction::rent(
            PlayerId::new(1),
            PlayerId::new(0),
            PositionId::new(1),
            500,
            "owe rent".into(),
        );

        assert!(action.validate(SELL_ASSETS).is_ok());
        let err = action.validate("run away").unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidChoice {
                token: "run away".into(),
                choices: vec![SELL_ASSETS.into(), DECLARE_BANKRUPTCY.into()],
            }
        );
    }

    #[test]
    fn test_rent_exhausted_only_offers_bankruptcy() {
        let action = PendingAction::rent_exhausted(
            PlayerId::new(1),
            PlayerId::new(0),
            PositionId::new(1),
            500,
            "out of assets".into(),
        );

        assert_eq!(action.kind(), PendingKind::MustPayRent);
        assert_eq!(action.choices.as_slice(), &[DECLARE_BANKRUPTCY.to_string()]);
    }

    #[test]
    fn test_payment_target_lists_names() {
        let action = PendingAction::payment_target(
            PlayerId::new(0),
            300,
            vec!["Bob".to_string(), "Carol".to_string()],
        );

        assert_eq!(action.kind(), PendingKind::ChoosePaymentTarget);
        assert!(action.accepts("Carol"));
        assert!(!action.accepts("Alice"));
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&PendingKind::MustPayRent).unwrap();
        assert_eq!(json, "\"must-pay-rent\"");
        assert_eq!(PendingKind::ChoosePaymentTarget.to_string(), "choose-payment-target");
    }

    #[test]
    fn test_action_round_trips_through_json() {
        let action = PendingAction::purchase(PlayerId::new(2), PositionId::new(5), "B", 250);
        let json = serde_json::to_string(&action).unwrap();
        let back: PendingAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }
}

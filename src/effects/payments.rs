//! Player-to-player payments.

use tracing::{debug, warn};

use super::EffectOutcome;
use crate::core::{GameError, PlayerId, Result};
use crate::game::Game;
use crate::pending::PendingAction;

/// Outcome of a one-to-many or many-to-one payment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    pub messages: Vec<String>,
    /// Counterparties whose transfer went through.
    pub paid: Vec<PlayerId>,
    /// Counterparties whose transfer did not happen.
    pub unpaid: Vec<PlayerId>,
}

impl Settlement {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unpaid.is_empty()
    }

    /// All messages joined into one line.
    #[must_use]
    pub fn message(&self) -> String {
        self.messages.join("; ")
    }
}

/// Move `amount` from `payer` to `payee`, all or nothing.
///
/// A payer who cannot cover the amount is flagged with
/// `must_raise_funds` and nothing moves.
pub fn pay_player(game: &mut Game, payer: PlayerId, amount: i64, payee: PlayerId) -> Result<String> {
    if amount < 0 {
        return Err(GameError::InvalidAmount(amount));
    }
    game.require_active(payer)?;
    game.require_active(payee)?;
    if payer == payee {
        return Ok(format!("{} pays ${amount} to themselves", game.name_of(payer)));
    }

    let available = game.player(payer).cash;
    if available < amount {
        game.players_mut()[payer].must_raise_funds = true;
        warn!(payer = %game.name_of(payer), amount, available, "payment refused");
        return Err(GameError::InsufficientFunds {
            needed: amount,
            available,
        });
    }

    game.transfer_cash(payer, payee, amount);
    debug!(payer = %game.name_of(payer), payee = %game.name_of(payee), amount, "paid");
    Ok(format!(
        "{} pays ${amount} to {}",
        game.name_of(payer),
        game.name_of(payee)
    ))
}

/// `payer` pays `amount` to each other solvent player in seating order.
///
/// Stops at the first transfer that fails; earlier transfers stand.
pub fn pay_all_others(game: &mut Game, payer: PlayerId, amount: i64) -> Settlement {
    let others: Vec<PlayerId> = game.active_players().filter(|&p| p != payer).collect();
    let mut settlement = Settlement::default();

    for (i, &other) in others.iter().enumerate() {
        match pay_player(game, payer, amount, other) {
            Ok(message) => {
                settlement.messages.push(message);
                settlement.paid.push(other);
            }
            Err(err) => {
                settlement.messages.push(format!(
                    "{} cannot pay ${amount} to {} ({err})",
                    game.name_of(payer),
                    game.name_of(other)
                ));
                settlement.unpaid.extend_from_slice(&others[i..]);
                break;
            }
        }
    }
    settlement
}

/// Each other solvent player pays `amount` to `collector`.
///
/// Every payer is settled on its own: one shortfall does not stop the rest.
pub fn collect_from_all_others(game: &mut Game, collector: PlayerId, amount: i64) -> Settlement {
    let others: Vec<PlayerId> = game.active_players().filter(|&p| p != collector).collect();
    let mut settlement = Settlement::default();

    for other in others {
        match pay_player(game, other, amount, collector) {
            Ok(message) => {
                settlement.messages.push(message);
                settlement.paid.push(other);
            }
            Err(err) => {
                settlement.messages.push(format!(
                    "{} cannot pay ${amount} to {} ({err})",
                    game.name_of(other),
                    game.name_of(collector)
                ));
                settlement.unpaid.push(other);
            }
        }
    }
    settlement
}

/// Ask `payer` which opponent receives `amount`.
///
/// With no solvent opponent there is nobody to pay and the effect
/// resolves on the spot.
pub fn choose_payment_target(game: &Game, payer: PlayerId, amount: i64) -> EffectOutcome {
    let recipients: Vec<String> = game
        .active_players()
        .filter(|&p| p != payer)
        .map(|p| game.name_of(p).to_string())
        .collect();

    if recipients.is_empty() {
        return EffectOutcome::Resolved(format!(
            "{} has nobody to pay ${amount} to",
            game.name_of(payer)
        ));
    }

    EffectOutcome::Pending {
        message: format!("{} must choose a player to pay ${amount}", game.name_of(payer)),
        action: PendingAction::payment_target(payer, amount, recipients),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, CellData};
    use crate::core::GameConfig;
    use crate::game::GameBuilder;
    use crate::pending::PendingKind;

    const A: PlayerId = PlayerId::new(0);
    const B: PlayerId = PlayerId::new(1);
    const C: PlayerId = PlayerId::new(2);

    fn game(names: &[&str]) -> Game {
        let board = Board::from_cells([CellData::named("Go"), CellData::named("Jail")]).unwrap();
        GameBuilder::new(board)
            .players(names.iter().copied())
            .config(GameConfig::without_colors().with_starting_cash(1000))
            .build()
            .unwrap()
    }

    #[test]
    fn test_pay_player_moves_cash() {
        let mut game = game(&["A", "B"]);
        let message = pay_player(&mut game, A, 400, B).unwrap();

        assert_eq!(message, "A pays $400 to B");
        assert_eq!(game.player(A).cash, 600);
        assert_eq!(game.player(B).cash, 1400);
    }

    #[test]
    fn test_pay_player_exact_balance() {
        let mut game = game(&["A", "B"]);
        pay_player(&mut game, A, 1000, B).unwrap();

        assert_eq!(game.player(A).cash, 0);
        assert!(!game.player(A).must_raise_funds);
    }

    #[test]
    fn test_pay_player_shortfall_is_atomic() {
        let mut game = game(&["A", "B"]);
        let err = pay_player(&mut game, A, 1001, B).unwrap_err();

        assert_eq!(
            err,
            GameError::InsufficientFunds {
                needed: 1001,
                available: 1000
            }
        );
        assert_eq!(game.player(A).cash, 1000);
        assert_eq!(game.player(B).cash, 1000);
        assert!(game.player(A).must_raise_funds);
    }

    #[test]
    fn test_pay_player_rejects_negative() {
        let mut game = game(&["A", "B"]);
        assert_eq!(
            pay_player(&mut game, A, -5, B).unwrap_err(),
            GameError::InvalidAmount(-5)
        );
    }

    #[test]
    fn test_pay_all_stops_at_first_failure() {
        let mut game = game(&["A", "B", "C"]);
        game.players_mut()[A].cash = 150;

        let settlement = pay_all_others(&mut game, A, 100);

        assert_eq!(settlement.paid, vec![B]);
        assert_eq!(settlement.unpaid, vec![C]);
        assert!(!settlement.is_complete());
        assert_eq!(game.player(A).cash, 50);
        assert_eq!(game.player(B).cash, 1100);
        assert_eq!(game.player(C).cash, 1000);
        assert!(game.player(A).must_raise_funds);
    }

    #[test]
    fn test_pay_all_skips_bankrupt() {
        let mut game = game(&["A", "B", "C"]);
        game.players_mut()[B].bankrupt = true;

        let settlement = pay_all_others(&mut game, A, 100);

        assert_eq!(settlement.paid, vec![C]);
        assert!(settlement.is_complete());
        assert_eq!(game.player(B).cash, 1000);
    }

    #[test]
    fn test_collect_settles_each_payer() {
        let mut game = game(&["A", "B", "C"]);
        game.players_mut()[B].cash = 10;

        let settlement = collect_from_all_others(&mut game, A, 100);

        assert_eq!(settlement.paid, vec![C]);
        assert_eq!(settlement.unpaid, vec![B]);
        assert_eq!(game.player(A).cash, 1100);
        assert_eq!(game.player(B).cash, 10);
        assert!(game.player(B).must_raise_funds);
        assert!(!game.player(C).must_raise_funds);
    }

    #[test]
    fn test_choose_target_lists_opponents() {
        let game = game(&["A", "B", "C"]);
        match choose_payment_target(&game, B, 300) {
            EffectOutcome::Pending { action, .. } => {
                assert_eq!(action.kind(), PendingKind::ChoosePaymentTarget);
                assert_eq!(action.choices.as_slice(), &["A".to_string(), "C".to_string()]);
            }
            other => panic!("expected pending, got {other:?}"),
        }
    }

    #[test]
    fn test_choose_target_without_opponents() {
        let game = game(&["Solo"]);
        let outcome = choose_payment_target(&game, A, 300);
        assert!(!outcome.is_pending());
    }
}

//! Dice, movement and landing resolution.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{Game, GameStatus};
use crate::board::{PositionId, GO_TO_JAIL};
use crate::cards::DeckKind;
use crate::core::{PlayerId, Result, MAX_MOVER_LEVEL};
use crate::effects::{self, EffectOutcome};
use crate::pending::PendingAction;
use crate::rules::calculate_rent;

/// What happened during one `move_current_player` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub player: PlayerId,
    pub from: PositionId,
    /// Where the player ended up (the jail cell after "Go to Jail").
    pub landed_on: PositionId,
    /// Start-cell crossings credited during the move.
    pub start_crossings: u32,
    pub messages: Vec<String>,
    /// The turn is suspended on a pending action.
    pub awaiting_choice: bool,
}

impl Game {
    /// Roll two dice. Only while `Playing`.
    pub fn roll_dice(&mut self) -> Result<(u8, u8)> {
        self.require_status(GameStatus::Playing, "roll dice")?;
        let dice = self.dice.roll_dice();
        self.last_dice = dice;
        debug!(player = %self.name_of(self.current), ?dice, "rolled");
        Ok(dice)
    }

    /// Roll, then move by the total.
    pub fn roll_and_move(&mut self, upgrade_mover: bool) -> Result<TurnReport> {
        self.roll_dice()?;
        self.move_current_player(None, upgrade_mover)
    }

    /// Move the current player and resolve the landing cell.
    ///
    /// `steps` defaults to the last dice total. Every hop onto the start
    /// cell pays salary; with `upgrade_mover` each crossing also buys a
    /// mover tier out of that salary. The turn passes to the next player
    /// unless the landing raised a pending action.
    pub fn move_current_player(
        &mut self,
        steps: Option<usize>,
        upgrade_mover: bool,
    ) -> Result<TurnReport> {
        self.require_status(GameStatus::Playing, "move")?;
        let player = self.current;
        self.require_active(player)?;

        let steps = steps.unwrap_or((self.last_dice.0 + self.last_dice.1) as usize);
        let from = self.players[player].position;
        let mut messages = Vec::new();

        if !self.leave_jail(player, &mut messages) {
            self.finish_turn();
            return Ok(TurnReport {
                player,
                from,
                landed_on: from,
                start_crossings: 0,
                messages,
                awaiting_choice: false,
            });
        }

        let start_crossings = self.advance(player, steps, upgrade_mover, &mut messages);
        let pending = self.resolve_landing(player, true, &mut messages);
        let landed_on = self.players[player].position;

        let awaiting_choice = pending.is_some();
        match pending {
            Some(action) => self.suspend(action),
            None => self.finish_turn(),
        }

        Ok(TurnReport {
            player,
            from,
            landed_on,
            start_crossings,
            messages,
            awaiting_choice,
        })
    }

    /// Move `steps` cells forward, paying salary for every landing on the
    /// start cell along the way. Returns the number of crossings.
    ///
    /// Crossings are counted arithmetically. Only those that change the
    /// mover tier are paid one by one; the rest pay the same salary each
    /// and are credited together.
    pub(crate) fn advance(
        &mut self,
        player: PlayerId,
        steps: usize,
        upgrade_mover: bool,
        log: &mut Vec<String>,
    ) -> u32 {
        let from = self.players[player].position;
        let len = self.board.len();
        let position = self.board.step(from, steps);
        let crossings = steps / len + (from.index() + steps % len) / len;

        let mut remaining = crossings;
        while remaining > 0
            && upgrade_mover
            && self.players[player].mover_level < MAX_MOVER_LEVEL
        {
            let salary = self.start_salary(player, true);
            self.credit_salary(player, salary, 1, log);
            remaining -= 1;
        }
        if remaining > 0 {
            let salary = self.start_salary(player, upgrade_mover);
            let laps = i64::try_from(remaining).unwrap_or(i64::MAX);
            self.credit_salary(player, salary.saturating_mul(laps), remaining, log);
        }

        self.players[player].position = position;
        debug!(player = %self.name_of(player), steps, crossings, to = %self.position_name(position), "moved");
        log.push(format!(
            "{} moves to {}",
            self.name_of(player),
            self.position_name(position)
        ));
        u32::try_from(crossings).unwrap_or(u32::MAX)
    }

    fn credit_salary(&mut self, player: PlayerId, amount: i64, laps: usize, log: &mut Vec<String>) {
        let p = &mut self.players[player];
        p.cash = p.cash.saturating_add(amount);
        let start = self.position_name(PositionId::new(0));
        let name = self.name_of(player);
        log.push(if laps == 1 {
            format!("{name} passed {start} and collects ${amount}")
        } else {
            format!("{name} passed {start} {laps} times and collects ${amount}")
        });
    }

    fn start_salary(&mut self, player: PlayerId, upgrade_mover: bool) -> i64 {
        let level = self.players[player].mover_level;
        let mut salary = self.config.go_bonus_for(level);
        if upgrade_mover {
            if level < MAX_MOVER_LEVEL {
                self.players[player].mover_level = level + 1;
                salary -= self.config.mover_upgrade_cost;
                info!(player = %self.name_of(player), level = level + 1, "mover upgraded");
            } else {
                salary += self.config.max_tier_bonus;
            }
        }
        salary
    }

    /// Resolve the cell the player stands on.
    ///
    /// Card cells draw only when `allow_draw` is set, so a card that moves
    /// the player never chains into another draw.
    pub(crate) fn resolve_landing(
        &mut self,
        player: PlayerId,
        allow_draw: bool,
        log: &mut Vec<String>,
    ) -> Option<PendingAction> {
        let position = self.players[player].position;
        let cell = &self.board[position];
        let name = cell.name().to_string();
        let (owner, price, purchasable) = (cell.owner, cell.price(), cell.is_property());

        if name == GO_TO_JAIL {
            self.send_to_jail(player, log);
            return None;
        }
        if let Some(kind) = DeckKind::for_cell(&name) {
            return if allow_draw {
                self.draw_card(kind, player, log)
            } else {
                None
            };
        }
        if !purchasable {
            return None;
        }

        match owner {
            None => Some(PendingAction::purchase(player, position, &name, price)),
            Some(owner) if owner == player => None,
            Some(owner) => {
                let rent = calculate_rent(&self.board, &self.config, player, position);
                if rent == 0 {
                    return None;
                }
                if self.players[player].can_afford(rent) {
                    self.transfer_cash(player, owner, rent);
                    info!(payer = %self.name_of(player), owner = %self.name_of(owner), rent, "rent paid");
                    log.push(format!(
                        "{} pays ${rent} rent to {} for landing on {name}",
                        self.name_of(player),
                        self.name_of(owner)
                    ));
                    None
                } else {
                    self.players[player].must_raise_funds = true;
                    let prompt = format!(
                        "{} owes ${rent} rent to {} for {name} but has ${}",
                        self.name_of(player),
                        self.name_of(owner),
                        self.players[player].cash
                    );
                    log.push(prompt.clone());
                    Some(PendingAction::rent(player, owner, position, rent, prompt))
                }
            }
        }
    }

    /// Relocate to the jail cell and lock the player in.
    pub(crate) fn send_to_jail(&mut self, player: PlayerId, log: &mut Vec<String>) {
        let Some(jail) = self.board.jail() else {
            warn!(player = %self.name_of(player), "board has no jail");
            return;
        };
        let p = &mut self.players[player];
        p.position = jail;
        p.in_jail = true;
        info!(player = %self.name_of(player), "sent to jail");
        log.push(format!("{} goes to Jail!", self.name_of(player)));
    }

    /// Try to leave jail before moving. Returns whether the player may move.
    fn leave_jail(&mut self, player: PlayerId, log: &mut Vec<String>) -> bool {
        if !self.players[player].in_jail {
            return true;
        }
        let fine = self.config.jail_fine;
        let name = self.name_of(player).to_string();
        let p = &mut self.players[player];

        if p.jail_free_card {
            p.jail_free_card = false;
            p.in_jail = false;
            log.push(format!("{name} uses a Get Out of Jail Free card!"));
            true
        } else if p.can_afford(fine) {
            p.cash -= fine;
            p.in_jail = false;
            log.push(format!("{name} pays ${fine} to leave Jail"));
            true
        } else {
            p.must_raise_funds = true;
            log.push(format!("{name} cannot pay the ${fine} jail fine and stays in Jail"));
            false
        }
    }

    /// Draw the front card, apply it, and put it on the bottom.
    fn draw_card(
        &mut self,
        kind: DeckKind,
        player: PlayerId,
        log: &mut Vec<String>,
    ) -> Option<PendingAction> {
        let Some(card) = self.deck_mut(kind).draw() else {
            log.push(format!("The {} deck is empty", kind.cell_name()));
            return None;
        };
        debug!(player = %self.name_of(player), card = %card.description, "card drawn");
        log.push(format!(
            "{} draws {}: {}",
            self.name_of(player),
            kind.cell_name(),
            card.description
        ));

        let outcome = effects::apply(self, player, &card.effect);
        self.deck_mut(kind).put_back(card);

        match outcome {
            EffectOutcome::Resolved(message) => {
                log.push(message);
                None
            }
            EffectOutcome::Pending { message, action } => {
                if !message.is_empty() {
                    log.push(message);
                }
                Some(action)
            }
        }
    }
}

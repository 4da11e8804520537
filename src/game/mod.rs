//! The game state machine.
//!
//! `Game` owns the board, the players, both decks, the dice stream and at
//! most one pending action. It moves between three states:
//!
//! - `Playing`: dice may be rolled and the current player moved
//! - `AwaitingChoice`: a `PendingAction` is parked; only `submit_choice` proceeds
//! - `GameOver`: terminal
//!
//! The turn advances exactly once per fully resolved turn: at the end of a
//! move that needed no decision, or when the decision that interrupted the
//! move has been resolved.
//!
//! ## Concurrency
//!
//! All methods take `&mut self` and run to completion; a driver serving
//! several clients must serialize calls per game instance.
//!
//! ## Example
//!
//! ```
//! use millionaire_monopoly::board::Board;
//! use millionaire_monopoly::game::{Game, GameStatus};
//!
//! let mut game = Game::new(Board::millionaire(), ["Alice", "Bob"]).unwrap();
//! game.roll_dice().unwrap();
//! let report = game.move_current_player(None, false).unwrap();
//! if report.awaiting_choice {
//!     assert_eq!(game.status(), GameStatus::AwaitingChoice);
//! }
//! ```

mod admin;
mod builder;
mod choice;
mod liquidation;
mod snapshot;
mod turn;

pub use builder::GameBuilder;
pub use liquidation::Liquidation;
pub use snapshot::{GameSnapshot, PendingSnapshot, PlayerSnapshot};
pub use turn::TurnReport;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::{Board, PositionId};
use crate::cards::{Deck, DeckKind};
use crate::core::{
    GameConfig, GameError, GameRng, GameRngState, Player, PlayerId, PlayerMap, Result,
};
use crate::pending::{PendingAction, PendingKind};
use crate::rules::GameResult;

/// Overall game-state tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    AwaitingChoice,
    GameOver,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    players: PlayerMap<Player>,
    chance: Deck,
    millionaire: Deck,
    dice: GameRng,
    current: PlayerId,
    turn: u32,
    last_dice: (u8, u8),
    status: GameStatus,
    pending: Option<PendingAction>,
    result: Option<GameResult>,
}

impl Game {
    /// Default rules, empty decks, seed 0.
    pub fn new<I, S>(board: Board, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GameBuilder::new(board).players(names).build()
    }

    // === Read access ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Completed turns.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn last_dice(&self) -> (u8, u8) {
        self.last_dice
    }

    /// Dice stream position, for checkpointing a replay.
    #[must_use]
    pub fn dice_state(&self) -> GameRngState {
        self.dice.state()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Seat of the player with this display name.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.name == name)
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn deck(&self, kind: DeckKind) -> &Deck {
        match kind {
            DeckKind::Chance => &self.chance,
            DeckKind::Millionaire => &self.millionaire,
        }
    }

    /// Players still in the game, in seating order.
    pub fn active_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| p.is_active())
            .map(|(id, _)| id)
    }

    // === Crate-internal access for effect resolution ===

    pub(crate) fn players_mut(&mut self) -> &mut PlayerMap<Player> {
        &mut self.players
    }

    pub(crate) fn name_of(&self, id: PlayerId) -> &str {
        &self.players[id].name
    }

    pub(crate) fn position_name(&self, id: PositionId) -> &str {
        self.board[id].name()
    }

    fn deck_mut(&mut self, kind: DeckKind) -> &mut Deck {
        match kind {
            DeckKind::Chance => &mut self.chance,
            DeckKind::Millionaire => &mut self.millionaire,
        }
    }

    // === State guards ===

    fn require_status(&self, expected: GameStatus, operation: &'static str) -> Result<()> {
        if self.status == expected {
            Ok(())
        } else {
            Err(GameError::IllegalStateTransition {
                status: self.status,
                operation,
            })
        }
    }

    fn require_not_over(&self, operation: &'static str) -> Result<()> {
        if self.is_game_over() {
            Err(GameError::IllegalStateTransition {
                status: self.status,
                operation,
            })
        } else {
            Ok(())
        }
    }

    pub(crate) fn require_active(&self, id: PlayerId) -> Result<()> {
        if self.players[id].bankrupt {
            Err(GameError::PlayerBankrupt(self.players[id].name.clone()))
        } else {
            Ok(())
        }
    }

    // === Turn bookkeeping ===

    /// Park a decision and stop the turn.
    fn suspend(&mut self, action: PendingAction) {
        info!(player = %self.name_of(action.player), kind = %action.kind(), "awaiting choice");
        if action.kind() == PendingKind::ChoosePaymentTarget {
            self.players[action.player].must_choose_recipient = true;
        }
        self.pending = Some(action);
        self.status = GameStatus::AwaitingChoice;
    }

    /// Discard the parked action without resolving it.
    fn drop_pending(&mut self) {
        if let Some(action) = self.pending.take() {
            self.players[action.player].must_choose_recipient = false;
        }
    }

    /// Hand the turn to the next solvent player. No-op unless `Playing`.
    fn finish_turn(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        let count = self.player_count();
        let next = (1..=count)
            .map(|offset| PlayerId::new(((self.current.index() + offset) % count) as u8))
            .find(|&id| self.players[id].is_active());

        if let Some(next) = next {
            self.current = next;
        }
        self.turn += 1;
    }

    /// End the game once at most one solvent player remains.
    fn check_game_over(&mut self) {
        let active: Vec<PlayerId> = self.active_players().collect();
        if active.len() > 1 {
            return;
        }
        let result = match active.first() {
            Some(&winner) => GameResult::Winner(winner),
            None => GameResult::Draw,
        };
        info!(?result, "game over");
        self.result = Some(result);
        self.drop_pending();
        self.status = GameStatus::GameOver;
    }
}

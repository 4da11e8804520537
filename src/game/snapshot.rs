//! Serializable views of game state for display and logging.
//!
//! Snapshots resolve ids to names so they read on their own. They are
//! one-way: nothing rebuilds a `Game` from them.

use serde::{Deserialize, Serialize};

use super::{Game, GameStatus};
use crate::core::Player;
use crate::pending::{PendingDetail, PendingKind};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub cash: i64,
    pub position: String,
    /// Owned property names in board order.
    pub properties: Vec<String>,
    pub in_jail: bool,
    pub jail_free_card: bool,
    pub mover_level: u8,
    pub must_raise_funds: bool,
    pub must_choose_recipient: bool,
    pub bankrupt: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSnapshot {
    pub kind: PendingKind,
    pub player: String,
    pub prompt: String,
    pub choices: Vec<String>,
    pub detail: PendingDetail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub current_player: String,
    pub turn: u32,
    pub last_dice: (u8, u8),
    pub players: Vec<PlayerSnapshot>,
    pub pending: Option<PendingSnapshot>,
    pub winner: Option<String>,
}

impl Game {
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            current_player: self.name_of(self.current).to_string(),
            turn: self.turn,
            last_dice: self.last_dice,
            players: self
                .players
                .iter()
                .map(|(_, p)| self.player_snapshot(p))
                .collect(),
            pending: self.pending.as_ref().map(|action| PendingSnapshot {
                kind: action.kind(),
                player: self.name_of(action.player).to_string(),
                prompt: action.prompt.clone(),
                choices: action.choices.to_vec(),
                detail: action.detail.clone(),
            }),
            winner: self
                .result
                .as_ref()
                .and_then(|r| r.winner())
                .map(|w| self.name_of(w).to_string()),
        }
    }

    fn player_snapshot(&self, player: &Player) -> PlayerSnapshot {
        PlayerSnapshot {
            name: player.name.clone(),
            cash: player.cash,
            position: self.position_name(player.position).to_string(),
            properties: player
                .properties
                .iter()
                .map(|&id| self.position_name(id).to_string())
                .collect(),
            in_jail: player.in_jail,
            jail_free_card: player.jail_free_card,
            mover_level: player.mover_level,
            must_raise_funds: player.must_raise_funds,
            must_choose_recipient: player.must_choose_recipient,
            bankrupt: player.bankrupt,
        }
    }
}

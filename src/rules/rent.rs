//! Ownership and rent rules.
//!
//! Pure queries over the board and the rent tables. Mutations (buying,
//! building, selling) live on `Game` because they also move cash.

use crate::board::{Board, PositionId};
use crate::core::{GameConfig, PlayerId};

/// Does `player` own every position of `color`?
///
/// False for an unknown color.
#[must_use]
pub fn owns_full_set(board: &Board, player: PlayerId, color: &str) -> bool {
    let group = board.positions_of_color(color);
    !group.is_empty() && group.iter().all(|&id| board[id].owner == Some(player))
}

/// Does `player` have development on any of their positions of `color`?
#[must_use]
pub fn has_any_development(board: &Board, player: PlayerId, color: &str) -> bool {
    board
        .positions_of_color(color)
        .iter()
        .any(|&id| board[id].owner == Some(player) && board[id].development > 0)
}

/// Rent `occupant` owes for standing on `position`.
///
/// Zero when the position is unowned, owned by the occupant, or its color
/// has no rent table. An owner holding the whole color set with no
/// development anywhere in it collects double the base rent.
#[must_use]
pub fn calculate_rent(
    board: &Board,
    config: &GameConfig,
    occupant: PlayerId,
    position: PositionId,
) -> i64 {
    let cell = &board[position];
    let owner = match cell.owner {
        Some(owner) if owner != occupant => owner,
        _ => return 0,
    };
    let Some(color) = cell.color() else {
        return 0;
    };
    let Some(rules) = config.color(color) else {
        return 0;
    };

    let rent = rules.rent_at(cell.development);
    if owns_full_set(board, owner, color) && !has_any_development(board, owner, color) {
        rent * 2
    } else {
        rent
    }
}

/// Cash the bank pays for one unit of development on `position`.
#[must_use]
pub fn house_refund(board: &Board, config: &GameConfig, position: PositionId) -> i64 {
    board[position]
        .color()
        .and_then(|color| config.color(color))
        .map(|rules| rules.house_cost * config.house_resale_percent / 100)
        .unwrap_or(0)
}

/// Cash the bank pays to buy `position` back.
#[must_use]
pub fn property_refund(board: &Board, config: &GameConfig, position: PositionId) -> i64 {
    board[position].price() * config.property_resale_percent / 100
}

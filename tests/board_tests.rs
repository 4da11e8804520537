//! Board construction, circular stepping and rent rules.

use millionaire_monopoly::board::{Board, CellData, PositionId};
use millionaire_monopoly::core::{ColorRules, GameConfig, GameError, PlayerId};
use millionaire_monopoly::rules::calculate_rent;
use proptest::prelude::*;

const A: PlayerId = PlayerId::new(0);
const B: PlayerId = PlayerId::new(1);

fn rules() -> GameConfig {
    GameConfig::without_colors().with_color("X", ColorRules::new([100, 200, 300, 400, 500, 600], 50))
}

/// Go, PropA, Jail, PropB with PropA and PropB forming color set X.
fn small_board() -> Board {
    Board::from_cells([
        CellData::named("Go"),
        CellData::property("PropA", 1000, "X"),
        CellData::named("Jail"),
        CellData::property("PropB", 1000, "X"),
    ])
    .unwrap()
}

#[test]
fn test_millionaire_board_layout() {
    let board = Board::millionaire();

    assert_eq!(board.len(), 32);
    assert_eq!(board.head(), Some(PositionId::new(0)));
    assert_eq!(board.jail(), Some(PositionId::new(8)));
    assert_eq!(board.find("Go to Jail"), Some(PositionId::new(24)));
    assert_eq!(board.positions_of_color("Brown").len(), 2);
    assert_eq!(board.positions_of_color("Light Blue").len(), 3);
    assert_eq!(board.positions_of_color("Dark Blue").len(), 2);
    assert_eq!(board.colors().count(), 8);

    // Every colored cell has a rent table in the default rules.
    let config = GameConfig::default();
    for color in board.colors() {
        assert!(config.color(color).is_some(), "no rent table for {color}");
    }
}

#[test]
fn test_board_display_closes_the_loop() {
    let board = small_board();
    assert_eq!(board.to_string(), "Go -> PropA -> Jail -> PropB -> Go");
    assert_eq!(board.names(), vec!["Go", "PropA", "Jail", "PropB"]);
}

#[test]
fn test_malformed_cells_rejected() {
    let err = Board::from_cells([
        CellData::named("Go"),
        CellData {
            name: None,
            price: Some(10),
            color: None,
        },
    ])
    .unwrap_err();
    assert!(matches!(err, GameError::InvalidCellData(_)));

    assert!(Board::from_cells([CellData::property("Bad", -1, "X")]).is_err());
}

#[test]
fn test_color_bucket_in_board_order() {
    let board = small_board();
    assert_eq!(
        board.positions_of_color("X"),
        &[PositionId::new(1), PositionId::new(3)]
    );
    assert!(board.positions_of_color("Nope").is_empty());
}

proptest! {
    /// Stepping the board length from anywhere returns to the same cell.
    #[test]
    fn prop_cycle_closes(len in 1usize..64, start in 0usize..64, laps in 0usize..4) {
        let board = Board::from_cells((0..len).map(|i| CellData::named(format!("c{i}")))).unwrap();
        let from = PositionId::new((start % len) as u16);

        prop_assert_eq!(board.step(from, len * laps), from);
        prop_assert_eq!(board.step(from, len), from);
    }

    /// Stepping forward by the remainder of the lap completes the cycle.
    #[test]
    fn prop_forward_remainder_closes_cycle(len in 1usize..64, start in 0usize..64, n in 0usize..500) {
        let board = Board::from_cells((0..len).map(|i| CellData::named(format!("c{i}")))).unwrap();
        let from = PositionId::new((start % len) as u16);

        prop_assert_eq!(board.step(board.step(from, n), len - n % len), from);
    }

    /// Forward then backward by the same amount is the identity.
    #[test]
    fn prop_step_back_inverts_step(len in 1usize..64, start in 0usize..64, n in 0usize..500) {
        let board = Board::from_cells((0..len).map(|i| CellData::named(format!("c{i}")))).unwrap();
        let from = PositionId::new((start % len) as u16);

        prop_assert_eq!(board.step_back(board.step(from, n), n), from);
        prop_assert!(board.step(from, n).index() < len);
    }

    /// Rent never exceeds twice the highest table entry and is zero for the owner.
    #[test]
    fn prop_rent_bounds(dev_a in 0u8..=5, dev_b in 0u8..=5, owner_b in any::<bool>()) {
        let mut board = small_board();
        let config = rules();
        let (prop_a, prop_b) = (PositionId::new(1), PositionId::new(3));
        board[prop_a].owner = Some(A);
        board[prop_a].development = dev_a;
        if owner_b {
            board[prop_b].owner = Some(A);
            board[prop_b].development = dev_b;
        }

        let rent = calculate_rent(&board, &config, B, prop_a);
        prop_assert!(rent >= 100 && rent <= 600);
        prop_assert_eq!(calculate_rent(&board, &config, A, prop_a), 0);
        let doubled = owner_b && dev_a == 0 && dev_b == 0;
        let base = config.color("X").unwrap().rent_at(dev_a);
        prop_assert_eq!(rent, if doubled { base * 2 } else { base });
    }
}

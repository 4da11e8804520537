//! Card draws and the payments they trigger, through the turn flow.

use millionaire_monopoly::board::{Board, CellData, PositionId};
use millionaire_monopoly::cards::{Card, DeckKind};
use millionaire_monopoly::core::{GameConfig, PlayerId};
use millionaire_monopoly::effects::Effect;
use millionaire_monopoly::game::{Game, GameBuilder, GameStatus};
use millionaire_monopoly::pending::{PendingKind, BUY};

const A: PlayerId = PlayerId::new(0);
const B: PlayerId = PlayerId::new(1);
const C: PlayerId = PlayerId::new(2);

// 0 Go, 1 Chance, 2 Millionaire Lifestyle, 3 Lot, 4 Jail, 5 Go to Jail
fn board() -> Board {
    Board::from_cells([
        CellData::named("Go"),
        CellData::named("Chance"),
        CellData::named("Millionaire Lifestyle"),
        CellData::property("Lot", 100, "X"),
        CellData::named("Jail"),
        CellData::named("Go to Jail"),
    ])
    .unwrap()
}

fn game(chance: Vec<Card>, millionaire: Vec<Card>) -> Game {
    GameBuilder::new(board())
        .players(["A", "B", "C"])
        .config(GameConfig::without_colors().with_starting_cash(1000))
        .chance_cards(chance)
        .millionaire_cards(millionaire)
        .unshuffled()
        .build()
        .unwrap()
}

#[test]
fn test_chance_and_millionaire_decks_are_separate() {
    let mut game = game(
        vec![Card::new("Bonus", Effect::earn(100))],
        vec![Card::new("Yacht fees", Effect::pay_bank(300))],
    );

    game.move_current_player(Some(1), false).unwrap();
    game.move_current_player(Some(2), false).unwrap();

    assert_eq!(game.player(A).cash, 1100);
    assert_eq!(game.player(B).cash, 700);
    assert_eq!(game.deck(DeckKind::Chance).len(), 1);
    assert_eq!(game.deck(DeckKind::Millionaire).len(), 1);
}

#[test]
fn test_pay_all_others_card() {
    let mut game = game(vec![Card::new("Party", Effect::pay_all(150))], vec![]);

    game.move_current_player(Some(1), false).unwrap();

    assert_eq!(game.player(A).cash, 700);
    assert_eq!(game.player(B).cash, 1150);
    assert_eq!(game.player(C).cash, 1150);
    assert!(!game.player(A).must_raise_funds);
}

#[test]
fn test_pay_all_others_stops_when_short() {
    let mut game = game(vec![Card::new("Party", Effect::pay_all(600))], vec![]);

    let report = game.move_current_player(Some(1), false).unwrap();

    assert_eq!(game.player(A).cash, 400);
    assert_eq!(game.player(B).cash, 1600);
    assert_eq!(game.player(C).cash, 1000);
    assert!(game.player(A).must_raise_funds);
    assert!(report.messages.iter().any(|m| m.contains("cannot pay $600 to C")));
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_collect_from_all_others_card() {
    let mut game = game(vec![Card::new("Birthday", Effect::collect_all(200))], vec![]);
    game.send_money(B, C, 900).unwrap();

    game.move_current_player(Some(1), false).unwrap();

    assert_eq!(game.player(A).cash, 1200);
    assert_eq!(game.player(B).cash, 100);
    assert!(game.player(B).must_raise_funds);
    assert_eq!(game.player(C).cash, 1700);
}

#[test]
fn test_choose_payment_target_card() {
    let mut game = game(vec![Card::new("Donate", Effect::pay_chosen(250))], vec![]);

    let report = game.move_current_player(Some(1), false).unwrap();
    assert!(report.awaiting_choice);
    let pending = game.pending().unwrap();
    assert_eq!(pending.kind(), PendingKind::ChoosePaymentTarget);
    assert_eq!(pending.choices.as_slice(), &["B".to_string(), "C".to_string()]);

    assert!(game.submit_choice("A").is_err());
    game.submit_choice("C").unwrap();

    assert_eq!(game.player(A).cash, 750);
    assert_eq!(game.player(C).cash, 1250);
    assert_eq!(game.current_player(), B);
}

#[test]
fn test_go_to_jail_card() {
    let mut game = game(vec![Card::new("Busted", Effect::GoToJail)], vec![]);

    let report = game.move_current_player(Some(1), false).unwrap();

    assert!(game.player(A).in_jail);
    assert_eq!(report.landed_on, PositionId::new(4));
    assert_eq!(game.current_player(), B);
}

#[test]
fn test_jail_free_card_used_on_release() {
    let mut game = game(vec![Card::new("Pardon", Effect::GetOutOfJailFree)], vec![]);

    game.move_current_player(Some(1), false).unwrap();
    assert!(game.player(A).jail_free_card);
    game.move_current_player(Some(4), false).unwrap();
    game.move_current_player(Some(4), false).unwrap();

    // Chance -> Go to Jail.
    game.move_current_player(Some(4), false).unwrap();
    assert!(game.player(A).in_jail);
    game.move_current_player(Some(2), false).unwrap();
    game.move_current_player(Some(2), false).unwrap();

    let report = game.move_current_player(Some(2), false).unwrap();

    assert!(!game.player(A).in_jail);
    assert!(!game.player(A).jail_free_card);
    assert_eq!(report.landed_on, PositionId::new(0));
    assert_eq!(report.start_crossings, 1);
    assert_eq!(game.player(A).cash, 1000 + game.config().go_bonus_for(0));
}

#[test]
fn test_advance_card_lands_on_property() {
    let mut game = game(vec![Card::new("Shortcut", Effect::advance(2))], vec![]);

    let report = game.move_current_player(Some(1), false).unwrap();

    assert!(report.awaiting_choice);
    assert_eq!(report.landed_on, PositionId::new(3));
    assert_eq!(
        game.pending().map(|a| a.kind()),
        Some(PendingKind::PropertyPurchaseDecision)
    );
    game.submit_choice(BUY).unwrap();
    assert!(game.player(A).owns(PositionId::new(3)));
    assert_eq!(game.player(A).cash, 900);
    assert_eq!(game.deck(DeckKind::Chance).len(), 1);
}

#[test]
fn test_advance_card_never_chains_draw() {
    let mut game = game(
        vec![Card::new("Hop", Effect::advance(1))],
        vec![Card::new("Windfall", Effect::earn(500))],
    );

    let report = game.move_current_player(Some(1), false).unwrap();

    assert_eq!(report.landed_on, PositionId::new(2));
    assert_eq!(game.player(A).cash, 1000);
    assert_eq!(game.deck(DeckKind::Millionaire).peek().unwrap().description, "Windfall");
}

//! Game construction.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::{Game, GameStatus};
use crate::board::{Board, GO_TO_JAIL};
use crate::cards::{Card, Deck};
use crate::core::{GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap, Result};
use crate::effects::Effect;

/// Builder for creating a `Game`.
///
/// ```
/// use millionaire_monopoly::board::Board;
/// use millionaire_monopoly::cards::Card;
/// use millionaire_monopoly::core::GameConfig;
/// use millionaire_monopoly::effects::Effect;
/// use millionaire_monopoly::game::GameBuilder;
///
/// let game = GameBuilder::new(Board::millionaire())
///     .players(["Alice", "Bob", "Charlie"])
///     .config(GameConfig::default().with_starting_cash(500_000))
///     .chance_cards([Card::new("Dividend", Effect::earn(50_000))])
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.player_count(), 3);
/// ```
pub struct GameBuilder {
    board: Board,
    names: Vec<String>,
    config: GameConfig,
    chance: Vec<Card>,
    millionaire: Vec<Card>,
    seed: u64,
    shuffle: bool,
}

impl GameBuilder {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            names: Vec::new(),
            config: GameConfig::default(),
            chance: Vec::new(),
            millionaire: Vec::new(),
            seed: 0,
            shuffle: true,
        }
    }

    /// Player display names in seating order.
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn chance_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.chance = cards.into_iter().collect();
        self
    }

    pub fn millionaire_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.millionaire = cards.into_iter().collect();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Keep decks in the order given instead of shuffling them.
    pub fn unshuffled(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Validate inputs and place every player on the start cell.
    pub fn build(self) -> Result<Game> {
        self.config.validate()?;

        let Some(start) = self.board.head() else {
            return Err(GameError::InvalidCellData("board is empty".into()));
        };
        if self.board.find(GO_TO_JAIL).is_some() && self.board.jail().is_none() {
            return Err(GameError::InvalidCellData(
                "board has a Go to Jail cell but no Jail".into(),
            ));
        }

        if self.names.is_empty() || self.names.len() > 255 {
            return Err(GameError::InvalidConfig(format!(
                "{} players, expected 1-255",
                self.names.len()
            )));
        }
        let mut seen = FxHashSet::default();
        for name in &self.names {
            if name.trim().is_empty() {
                return Err(GameError::InvalidConfig("player name is empty".into()));
            }
            if !seen.insert(name.as_str()) {
                return Err(GameError::InvalidConfig(format!("duplicate player name {name}")));
            }
        }

        let player_count = self.names.len();
        for card in self.chance.iter().chain(&self.millionaire) {
            if card.effect.amount().is_some_and(|amount| amount < 0) {
                return Err(GameError::InvalidAmount(card.effect.amount().unwrap_or_default()));
            }
            if let Effect::PayPlayer { payee, .. } = card.effect {
                if payee.index() >= player_count {
                    return Err(GameError::InvalidConfig(format!(
                        "card {:?} pays nonexistent {payee}",
                        card.description
                    )));
                }
            }
        }

        let rng = GameRng::new(self.seed);
        let (chance, millionaire) = if self.shuffle {
            (
                Deck::shuffled(self.chance, &mut rng.for_context("chance")),
                Deck::shuffled(self.millionaire, &mut rng.for_context("millionaire")),
            )
        } else {
            (Deck::from_cards(self.chance), Deck::from_cards(self.millionaire))
        };

        let cash = self.config.starting_cash;
        let players = PlayerMap::from_vec(
            self.names
                .into_iter()
                .map(|name| Player::new(name, cash, start))
                .collect(),
        );

        debug!(players = player_count, cells = self.board.len(), seed = self.seed, "game built");

        Ok(Game {
            config: self.config,
            board: self.board,
            players,
            chance,
            millionaire,
            dice: rng.for_context("dice"),
            current: PlayerId::new(0),
            turn: 0,
            last_dice: (0, 0),
            status: GameStatus::Playing,
            pending: None,
            result: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellData;
    use crate::cards::DeckKind;

    fn board() -> Board {
        Board::from_cells([CellData::named("Go"), CellData::named("Jail")]).unwrap()
    }

    #[test]
    fn test_rejects_empty_board() {
        let err = GameBuilder::new(Board::new()).players(["A"]).build().unwrap_err();
        assert!(matches!(err, GameError::InvalidCellData(_)));
    }

    #[test]
    fn test_rejects_go_to_jail_without_jail() {
        let board = Board::from_cells([CellData::named("Go"), CellData::named("Go to Jail")]).unwrap();
        assert!(GameBuilder::new(board).players(["A"]).build().is_err());
    }

    #[test]
    fn test_rejects_bad_player_lists() {
        let none: [&str; 0] = [];
        assert!(GameBuilder::new(board()).players(none).build().is_err());
        assert!(GameBuilder::new(board()).players(["A", "A"]).build().is_err());
        assert!(GameBuilder::new(board()).players(["A", ""]).build().is_err());
    }

    #[test]
    fn test_rejects_card_paying_missing_player() {
        let err = GameBuilder::new(board())
            .players(["A", "B"])
            .chance_cards([Card::new("Pay C", Effect::pay_player(10, PlayerId::new(2)))])
            .build()
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_negative_card_amount() {
        let err = GameBuilder::new(board())
            .players(["A"])
            .millionaire_cards([Card::new("Refund", Effect::earn(-10))])
            .build()
            .unwrap_err();
        assert_eq!(err, GameError::InvalidAmount(-10));
    }

    #[test]
    fn test_unshuffled_keeps_order() {
        let cards: Vec<Card> = (1..=5).map(|i| Card::new(format!("c{i}"), Effect::earn(i))).collect();
        let game = GameBuilder::new(board())
            .players(["A"])
            .chance_cards(cards.clone())
            .unshuffled()
            .build()
            .unwrap();

        let order: Vec<_> = game.deck(DeckKind::Chance).iter().cloned().collect();
        assert_eq!(order, cards);
        assert!(game.deck(DeckKind::Millionaire).is_empty());
    }

    #[test]
    fn test_starting_cash_from_config() {
        let game = GameBuilder::new(board())
            .players(["A", "B"])
            .config(GameConfig::default().with_starting_cash(1500))
            .build()
            .unwrap();

        assert_eq!(game.player(PlayerId::new(1)).cash, 1500);
    }
}

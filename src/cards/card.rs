//! Event cards and the cells that draw them.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;

/// A Chance or Millionaire Lifestyle card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub description: String,
    pub effect: Effect,
}

impl Card {
    pub fn new(description: impl Into<String>, effect: Effect) -> Self {
        Self {
            description: description.into(),
            effect,
        }
    }
}

/// Which deck a card-draw cell draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    Chance,
    Millionaire,
}

impl DeckKind {
    /// Name of the board cells that draw from this deck.
    #[must_use]
    pub const fn cell_name(self) -> &'static str {
        match self {
            DeckKind::Chance => "Chance",
            DeckKind::Millionaire => "Millionaire Lifestyle",
        }
    }

    /// Deck drawn by a cell, if the cell is a card-draw cell.
    #[must_use]
    pub fn for_cell(name: &str) -> Option<Self> {
        [DeckKind::Chance, DeckKind::Millionaire]
            .into_iter()
            .find(|kind| kind.cell_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_cell() {
        assert_eq!(DeckKind::for_cell("Chance"), Some(DeckKind::Chance));
        assert_eq!(
            DeckKind::for_cell("Millionaire Lifestyle"),
            Some(DeckKind::Millionaire)
        );
        assert_eq!(DeckKind::for_cell("Free Parking"), None);
    }

    #[test]
    fn test_card_new() {
        let card = Card::new("Bank error in your favour", Effect::earn(20_000));
        assert_eq!(card.description, "Bank error in your favour");
        assert_eq!(card.effect, Effect::earn(20_000));
    }
}

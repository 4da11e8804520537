//! Cyclic card supply.
//!
//! A drawn card leaves the front of the queue and goes back on the bottom
//! once its effect has been applied, so every card is reused at the same
//! long-run rate. The queue is an `im::Vector` so game snapshots clone it
//! in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::GameRng;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deck in the given order (front = next draw).
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Deck shuffled with `rng`.
    pub fn shuffled(cards: impl IntoIterator<Item = Card>, rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    /// Take the front card. Put it back with `put_back` after applying it.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Re-enqueue a card at the back.
    pub fn put_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

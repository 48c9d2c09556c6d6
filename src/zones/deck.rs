//! The draw deck.
//!
//! Cards are drawn from the front. A drawn card leaves the deck for good;
//! `remaining()` counts what is left.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;

use crate::cards::{Card, CardCatalog, CardId};
use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use crate::core::rng::GameRng;

/// Ordered undealt cards.
///
/// ## Usage
///
/// ```
/// use dragon_crow::core::{GameConfig, GameRng};
/// use dragon_crow::zones::Deck;
///
/// let mut deck = Deck::initialize(&GameConfig::default()).unwrap();
/// deck.shuffle(&mut GameRng::new(42));
///
/// let card = deck.draw().unwrap();
/// assert!(!card.face_up);
/// assert_eq!(deck.remaining(), 51);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Build the full, unshuffled deck for a configuration.
    ///
    /// Card types appear in catalog order, `copies_per_type` of each.
    pub fn initialize(config: &GameConfig) -> Result<Self, ConfigError> {
        let catalog = CardCatalog::from_config(config)?;
        Ok(Self::from_catalog(&catalog, config.copies_per_type))
    }

    /// Build a deck with `copies` of every catalog type.
    #[must_use]
    pub fn from_catalog(catalog: &CardCatalog, copies: usize) -> Self {
        let mut cards = VecDeque::with_capacity(catalog.len() * copies);
        for data in catalog.iter() {
            for _ in 0..copies {
                let id = CardId::new(cards.len() as u32);
                cards.push_back(Card::new(id, Arc::clone(data)));
            }
        }
        Self { cards }
    }

    /// Use `cards` as the deck, first card drawn first.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Fisher-Yates shuffle of the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let cards = self.cards.make_contiguous();
        for i in (1..cards.len()).rev() {
            let j = rng.gen_index(i + 1);
            cards.swap(i, j);
        }
    }

    /// Take the next card. `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// The card `draw` would return.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }
}

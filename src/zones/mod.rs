//! Zones that hold cards.
//!
//! Every card is owned by exactly one zone at a time. A transition moves the
//! card by value from one container to another, so a card can never be in
//! two places.
//!
//! ## Key Types
//!
//! - `Zone`: Where a card lives, as reported to the presentation layer
//! - `Deck`: Undealt cards, drawn from the front
//! - `Hand`: A player's ordered card slots and their score
//! - `DiscardPile`: A face-up stack, only the top is reachable

pub mod deck;
pub mod discard;
pub mod hand;

pub use deck::Deck;
pub use discard::DiscardPile;
pub use hand::Hand;

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Location a card can move to during play.
///
/// Cards only leave the deck, so it is not a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// A player's hand.
    Hand(PlayerId),
    /// The staging slot for the drawn or lifted card.
    RevealSlot,
    /// A discard pile by index.
    DiscardPile(usize),
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Hand(player) => write!(f, "{player} Hand"),
            Zone::RevealSlot => write!(f, "Reveal Slot"),
            Zone::DiscardPile(index) => write!(f, "Discard Pile {index}"),
        }
    }
}

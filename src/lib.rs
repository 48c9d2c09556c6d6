//! # dragon-crow
//!
//! Rules core of Dragon/Crow, a four-player card game in the Skyjo family.
//!
//! Each player holds six face-down cards laid out in two columns of three.
//! On their turn a player reveals a card (from the deck or a discard pile),
//! either swaps it into their hand or discards it, and play passes on. A
//! column holding two equal values scores zero; otherwise it scores the sum
//! of its face-up values. The game ends once some hand is fully face-up,
//! and the lowest score wins.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The core never renders anything. The presentation layer
//!    sends `Action`s and listens to `GameEvent`s.
//!
//! 2. **Configuration Over Convention**: Card tables, asset bindings, seat
//!    count, hand size and pile count come from `GameConfig`.
//!
//! 3. **Atomic Transitions**: Every action either commits completely or is
//!    rejected without touching state.
//!
//! ## Modules
//!
//! - `core`: Player IDs, configuration, actions, events, errors, RNG
//! - `cards`: Card definitions, instances and the catalog
//! - `zones`: Deck, hands and discard piles
//! - `rules`: Column scoring and the game outcome
//! - `game`: The turn state machine, dealing and snapshots

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, AssetBindings, ConfigError, CrowType, DragonType, EventLog, GameConfig,
    GameError, GameEvent, GameObserver, GameRng, GameRngState, Player, PlayerId, PlayerMap,
    RejectReason,
};

pub use crate::cards::{Card, CardCatalog, CardData, CardId, CardKind, CardTypeId};

pub use crate::zones::{Deck, DiscardPile, Hand, Zone};

pub use crate::rules::{column_contribution, has_pair, score_values, GameOutcome};

pub use crate::game::{
    Affordances, DealSequence, DealStep, GameBuilder, GameController, GameSnapshot, Phase,
    TurnStage,
};

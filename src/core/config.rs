//! Game configuration.
//!
//! The shell loads a `GameConfig` (every field has a default, so partial
//! documents deserialize) and hands it to the controller. Card tables,
//! copy counts, seat count, hand size and discard piles are all
//! configuration; the rules never hardcode them.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;
use crate::cards::CardCatalog;

/// One dragon card type: its score value and display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragonType {
    pub value: i32,
    pub display_name: String,
}

impl DragonType {
    pub fn new(value: i32, display_name: impl Into<String>) -> Self {
        Self {
            value,
            display_name: display_name.into(),
        }
    }
}

/// One crow card type: its name and the value it scores for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrowType {
    pub name: String,
    pub value: i32,
}

impl CrowType {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Asset keys the presentation layer binds to card faces.
///
/// Entry `i` of `dragon_fronts` is the face of `dragons[i]`, likewise for
/// crows. The engine only checks that every type has a binding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetBindings {
    pub dragon_fronts: Vec<String>,
    pub crow_fronts: Vec<String>,
    pub card_back: String,
}

impl Default for AssetBindings {
    fn default() -> Self {
        Self {
            dragon_fronts: (0..10).map(|i| format!("dragon_front_{i}")).collect(),
            crow_fronts: (0..3).map(|i| format!("crow_front_{i}")).collect(),
            card_back: "card_back".to_string(),
        }
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use dragon_crow::core::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.deck_size(), 52);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats (2-8).
    pub player_count: usize,

    /// Slots per hand. Must be even: the first half is the left column.
    pub cards_per_player: usize,

    /// Number of discard piles.
    pub discard_pile_count: usize,

    /// Copies of every card type in the deck.
    pub copies_per_type: usize,

    /// Dragon value/name table.
    pub dragons: Vec<DragonType>,

    /// Crow name/value table.
    pub crows: Vec<CrowType>,

    /// Face asset bindings per card type.
    pub assets: AssetBindings,

    /// Deal the starting hands face-down.
    pub deal_face_down: bool,

    /// Pause between deal steps. Presentation only.
    pub deal_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            cards_per_player: 6,
            discard_pile_count: 2,
            copies_per_type: 4,
            dragons: vec![
                DragonType::new(-2, "Ancient Dragon"),
                DragonType::new(0, "Dragonling"),
                DragonType::new(1, "Fire Drake"),
                DragonType::new(2, "Frost Wyrm"),
                DragonType::new(3, "Volcanic Dragon"),
                DragonType::new(4, "Thunder Drake"),
                DragonType::new(5, "Shadow Dragon"),
                DragonType::new(6, "Golden Wyvern"),
                DragonType::new(7, "Emerald Serpent"),
                DragonType::new(8, "Celestial Dragon"),
            ],
            crows: vec![
                CrowType::new("Scout Crow", 9),
                CrowType::new("Thief Crow", 10),
                CrowType::new("Mirror Crow", 11),
            ],
            assets: AssetBindings::default(),
            deal_face_down: true,
            deal_delay_ms: 100,
        }
    }
}

impl GameConfig {
    /// Set the number of seats.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_cards_per_player(mut self, count: usize) -> Self {
        self.cards_per_player = count;
        self
    }

    /// Set the number of discard piles.
    #[must_use]
    pub fn with_discard_piles(mut self, count: usize) -> Self {
        self.discard_pile_count = count;
        self
    }

    /// Set the copies per card type.
    #[must_use]
    pub fn with_copies_per_type(mut self, copies: usize) -> Self {
        self.copies_per_type = copies;
        self
    }

    /// Replace the dragon table.
    #[must_use]
    pub fn with_dragons(mut self, dragons: Vec<DragonType>) -> Self {
        self.dragons = dragons;
        self
    }

    /// Replace the crow table.
    #[must_use]
    pub fn with_crows(mut self, crows: Vec<CrowType>) -> Self {
        self.crows = crows;
        self
    }

    /// Replace the asset bindings.
    #[must_use]
    pub fn with_assets(mut self, assets: AssetBindings) -> Self {
        self.assets = assets;
        self
    }

    /// Deal starting hands face-up instead of face-down.
    #[must_use]
    pub fn deal_face_up(mut self) -> Self {
        self.deal_face_down = false;
        self
    }

    /// Number of distinct card types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.dragons.len() + self.crows.len()
    }

    /// Total cards in a freshly built deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.type_count() * self.copies_per_type
    }

    /// Slots per scoring column.
    #[must_use]
    pub fn column_len(&self) -> usize {
        self.cards_per_player / 2
    }

    /// Pause between deal steps.
    #[must_use]
    pub fn deal_delay(&self) -> Duration {
        Duration::from_millis(self.deal_delay_ms)
    }

    /// Check the configuration can produce a playable game.
    ///
    /// Asset bindings and value collisions are checked by building the
    /// card catalog.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=8).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.cards_per_player < 2 || self.cards_per_player % 2 != 0 {
            return Err(ConfigError::HandSize(self.cards_per_player));
        }
        if self.discard_pile_count == 0 {
            return Err(ConfigError::NoDiscardPiles);
        }
        if self.copies_per_type == 0 {
            return Err(ConfigError::NoCopies);
        }
        CardCatalog::from_config(self)?;

        let needed = self.player_count * self.cards_per_player;
        if needed >= self.deck_size() {
            return Err(ConfigError::NotEnoughCards {
                needed,
                available: self.deck_size(),
            });
        }

        Ok(())
    }
}

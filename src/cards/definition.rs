//! Card definitions - immutable card identity.
//!
//! `CardData` holds what a card *is*: its kind, score value, name and the
//! asset key of its face. Instance state (face-up, owner) lives in `Card`.

use serde::{Deserialize, Serialize};

/// The two card families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Dragon,
    Crow,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Dragon => write!(f, "Dragon"),
            CardKind::Crow => write!(f, "Crow"),
        }
    }
}

/// Index of a card type in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTypeId(pub u16);

impl CardTypeId {
    /// Create a new card type ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Static card data.
///
/// ## Example
///
/// ```
/// use dragon_crow::cards::{CardData, CardKind};
///
/// let drake = CardData::dragon(1, "Fire Drake", "dragon_front_2");
/// assert_eq!(drake.kind, CardKind::Dragon);
/// assert_eq!(drake.description(), "Dragon card with value 1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardData {
    /// Dragon or crow.
    pub kind: CardKind,

    /// Score value. Crows score like any other card.
    pub value: i32,

    /// Display name.
    pub name: String,

    /// Asset key of the card face.
    pub front_asset: String,
}

impl CardData {
    /// Create a dragon card.
    #[must_use]
    pub fn dragon(value: i32, name: impl Into<String>, front_asset: impl Into<String>) -> Self {
        Self {
            kind: CardKind::Dragon,
            value,
            name: name.into(),
            front_asset: front_asset.into(),
        }
    }

    /// Create a crow card.
    #[must_use]
    pub fn crow(value: i32, name: impl Into<String>, front_asset: impl Into<String>) -> Self {
        Self {
            kind: CardKind::Crow,
            value,
            name: name.into(),
            front_asset: front_asset.into(),
        }
    }

    /// One-line description for tooltips.
    #[must_use]
    pub fn description(&self) -> String {
        match self.kind {
            CardKind::Dragon => format!("Dragon card with value {}", self.value),
            CardKind::Crow => format!("Crow card with special ability {}", self.value),
        }
    }
}

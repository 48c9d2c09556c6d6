//! Card catalog - every card type of a configured game.
//!
//! The catalog turns the configuration tables into shared `CardData`,
//! binding each type to its face asset. Types are kept in configuration
//! order (dragons first, then crows) so a deck built from the catalog is
//! reproducible. Values are indexed so two types can never share a score
//! value.

use rustc_hash::FxHashMap;
use std::sync::Arc;

use super::definition::{CardData, CardKind, CardTypeId};
use crate::core::config::GameConfig;
use crate::core::error::ConfigError;

/// Registry of card types.
///
/// ## Example
///
/// ```
/// use dragon_crow::cards::CardCatalog;
/// use dragon_crow::core::GameConfig;
///
/// let catalog = CardCatalog::from_config(&GameConfig::default()).unwrap();
///
/// assert_eq!(catalog.len(), 13);
/// let mirror = catalog.by_value(11).unwrap();
/// assert_eq!(mirror.name, "Mirror Crow");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    types: Vec<Arc<CardData>>,
    by_value: FxHashMap<i32, CardTypeId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog described by a configuration.
    ///
    /// Fails if a kind has fewer asset bindings than types, or if two types
    /// share a value.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let assets = &config.assets;
        if assets.dragon_fronts.len() < config.dragons.len() {
            return Err(ConfigError::MissingAssets {
                kind: CardKind::Dragon,
                needed: config.dragons.len(),
                got: assets.dragon_fronts.len(),
            });
        }
        if assets.crow_fronts.len() < config.crows.len() {
            return Err(ConfigError::MissingAssets {
                kind: CardKind::Crow,
                needed: config.crows.len(),
                got: assets.crow_fronts.len(),
            });
        }

        let mut catalog = Self::new();
        for (dragon, front) in config.dragons.iter().zip(&assets.dragon_fronts) {
            catalog.register(CardData::dragon(dragon.value, &dragon.display_name, front))?;
        }
        for (crow, front) in config.crows.iter().zip(&assets.crow_fronts) {
            catalog.register(CardData::crow(crow.value, &crow.name, front))?;
        }

        Ok(catalog)
    }

    /// Register a card type and return its ID.
    pub fn register(&mut self, data: CardData) -> Result<CardTypeId, ConfigError> {
        if let Some(existing) = self.by_value.get(&data.value) {
            return Err(ConfigError::ValueCollision {
                value: data.value,
                first: self.types[existing.0 as usize].name.clone(),
                second: data.name,
            });
        }

        let id = CardTypeId::new(self.types.len() as u16);
        self.by_value.insert(data.value, id);
        self.types.push(Arc::new(data));
        Ok(id)
    }

    /// Get a card type by ID.
    #[must_use]
    pub fn get(&self, id: CardTypeId) -> Option<&Arc<CardData>> {
        self.types.get(id.0 as usize)
    }

    /// Find the card type scoring `value`.
    #[must_use]
    pub fn by_value(&self, value: i32) -> Option<&Arc<CardData>> {
        self.by_value.get(&value).and_then(|&id| self.get(id))
    }

    /// Get the number of card types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over card types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardData>> {
        self.types.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AssetBindings, DragonType};

    #[test]
    fn test_default_catalog_order() {
        let catalog = CardCatalog::from_config(&GameConfig::default()).unwrap();

        let values: Vec<_> = catalog.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![-2, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        let crows = catalog.iter().filter(|c| c.kind == CardKind::Crow).count();
        assert_eq!(crows, 3);
        assert_eq!(catalog.len() - crows, 10);
    }

    #[test]
    fn test_assets_bound_in_order() {
        let catalog = CardCatalog::from_config(&GameConfig::default()).unwrap();

        let ancient = catalog.get(CardTypeId::new(0)).unwrap();
        assert_eq!(ancient.name, "Ancient Dragon");
        assert_eq!(ancient.front_asset, "dragon_front_0");

        let scout = catalog.by_value(9).unwrap();
        assert_eq!(scout.front_asset, "crow_front_0");
    }

    #[test]
    fn test_missing_assets_rejected() {
        let mut assets = AssetBindings::default();
        assets.crow_fronts.truncate(2);
        let config = GameConfig::default().with_assets(assets);

        assert_eq!(
            CardCatalog::from_config(&config).unwrap_err(),
            ConfigError::MissingAssets {
                kind: CardKind::Crow,
                needed: 3,
                got: 2,
            }
        );
    }

    #[test]
    fn test_extended_dragon_range_collides_with_crows() {
        let mut dragons = GameConfig::default().dragons;
        dragons.push(DragonType::new(9, "Storm Dragon"));
        let mut assets = AssetBindings::default();
        assets.dragon_fronts.push("dragon_front_10".to_string());
        let config = GameConfig::default().with_dragons(dragons).with_assets(assets);

        assert_eq!(
            CardCatalog::from_config(&config).unwrap_err(),
            ConfigError::ValueCollision {
                value: 9,
                first: "Storm Dragon".to_string(),
                second: "Scout Crow".to_string(),
            }
        );
    }

    #[test]
    fn test_lookup_missing() {
        let catalog = CardCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get(CardTypeId::new(0)).is_none());
        assert!(catalog.by_value(3).is_none());
    }
}

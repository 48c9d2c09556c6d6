//! Deck construction, shuffling and drawing.

use std::collections::BTreeMap;

use dragon_crow::cards::{CardId, CardKind};
use dragon_crow::core::{ConfigError, GameConfig, GameRng};
use dragon_crow::zones::Deck;
use proptest::prelude::*;

fn value_counts(deck: &Deck) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for card in deck.iter() {
        *counts.entry(card.value()).or_insert(0) += 1;
    }
    counts
}

fn ids(deck: &Deck) -> Vec<CardId> {
    deck.iter().map(|c| c.id).collect()
}

/// The default deck holds four copies of each of the thirteen types.
#[test]
fn test_default_deck_composition() {
    let deck = Deck::initialize(&GameConfig::default()).unwrap();

    assert_eq!(deck.remaining(), 52);
    let counts = value_counts(&deck);
    assert_eq!(counts.len(), 13);
    assert!(counts.values().all(|&n| n == 4));
    assert_eq!(counts.keys().next(), Some(&-2));
    assert_eq!(counts.keys().last(), Some(&11));

    let crows = deck.iter().filter(|c| c.kind() == CardKind::Crow).count();
    assert_eq!(crows, 12);
    assert!(deck.iter().all(|c| !c.face_up && c.owner.is_none()));
}

/// Missing crow art is a setup error.
#[test]
fn test_missing_assets_rejected() {
    let mut config = GameConfig::default();
    config.assets.crow_fronts.pop();

    let err = Deck::initialize(&config).unwrap_err();

    assert_eq!(
        err,
        ConfigError::MissingAssets {
            kind: CardKind::Crow,
            needed: 3,
            got: 2
        }
    );
}

/// Same seed, same order.
#[test]
fn test_shuffle_is_deterministic() {
    let config = GameConfig::default();
    let mut a = Deck::initialize(&config).unwrap();
    let mut b = Deck::initialize(&config).unwrap();

    a.shuffle(&mut GameRng::new(1234));
    b.shuffle(&mut GameRng::new(1234));

    assert_eq!(ids(&a), ids(&b));
}

proptest! {
    /// Shuffling never creates or loses cards.
    #[test]
    fn prop_shuffle_preserves_cards(seed in any::<u64>(), copies in 1usize..=4) {
        let config = GameConfig::default().with_copies_per_type(copies);
        let mut deck = Deck::initialize(&config).unwrap();
        let before_counts = value_counts(&deck);
        let mut before_ids = ids(&deck);

        deck.shuffle(&mut GameRng::new(seed));

        let mut after_ids = ids(&deck);
        prop_assert_eq!(value_counts(&deck), before_counts);
        before_ids.sort();
        after_ids.sort();
        prop_assert_eq!(after_ids, before_ids);
    }

    /// Drawing N times from an N-card deck always succeeds, the next draw
    /// finds it empty.
    #[test]
    fn prop_draw_exhausts_exactly(seed in any::<u64>()) {
        let mut deck = Deck::initialize(&GameConfig::default()).unwrap();
        deck.shuffle(&mut GameRng::new(seed));
        let size = deck.remaining();

        for drawn in 0..size {
            prop_assert!(deck.draw().is_some(), "empty after {} draws", drawn);
        }
        prop_assert!(deck.is_empty());
        prop_assert!(deck.draw().is_none());
    }

    /// Shuffling an already shuffled deck still keeps every card.
    #[test]
    fn prop_reshuffle_keeps_ids_unique(seed in any::<u64>()) {
        let mut deck = Deck::initialize(&GameConfig::default()).unwrap();
        let mut rng = GameRng::new(seed);
        deck.shuffle(&mut rng);
        deck.shuffle(&mut rng);

        let mut seen = ids(&deck);
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), 52);
    }
}

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use dragon_crow::cards::{Card, CardCatalog, CardId};
use dragon_crow::core::{GameConfig, PlayerId};
use dragon_crow::game::{GameBuilder, GameController};
use dragon_crow::zones::Deck;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A deck that deals `values` top to bottom.
///
/// With the default table, `values[0..6]` go to player 0, `values[6..12]` to
/// player 1 and so on; the first draw is `values[24]`.
pub fn stacked_deck(config: &GameConfig, values: &[i32]) -> Deck {
    let catalog = CardCatalog::from_config(config).unwrap();
    Deck::from_cards(values.iter().enumerate().map(|(i, &value)| {
        let data = catalog.by_value(value).unwrap();
        Card::new(CardId::new(i as u32), Arc::clone(data))
    }))
}

/// A dealt default game over a stacked deck.
pub fn stacked_game(values: &[i32]) -> GameController {
    init_logging();
    let config = GameConfig::default();
    let deck = stacked_deck(&config, values);
    GameBuilder::new()
        .config(config)
        .stacked_deck(deck)
        .build()
        .unwrap()
}

/// Values of a player's hand in slot order.
pub fn hand_values(game: &GameController, player: PlayerId) -> Vec<i32> {
    game.players()[player]
        .hand
        .cards()
        .map(|c| c.value())
        .collect()
}

/// Play the current turn: draw, swap into `slot`, discard on pile 0.
pub fn swap_turn(game: &mut GameController, slot: usize) {
    let player = game.current_player();
    game.draw_from_deck().unwrap();
    game.click_hand_card(player, slot).unwrap();
    game.choose_discard_pile(0).unwrap();
}

//! Fluent construction of a ready-to-play game.

use super::controller::GameController;
use crate::core::{GameConfig, GameError, GameObserver};
use crate::zones::Deck;

/// Builder for creating a `GameController`.
///
/// ```
/// use dragon_crow::game::{GameBuilder, Phase};
///
/// let game = GameBuilder::new().player_count(3).seed(42).build().unwrap();
///
/// assert_eq!(game.phase(), Phase::PlayerTurn);
/// assert_eq!(game.players().player_count(), 3);
/// ```
pub struct GameBuilder {
    config: GameConfig,
    seed: u64,
    deck: Option<Deck>,
    observers: Vec<Box<dyn GameObserver>>,
    paced: bool,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            seed: 0,
            deck: None,
            observers: Vec::new(),
            paced: false,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deal from `deck` in order instead of a shuffled deck.
    pub fn stacked_deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Register an observer before the first card is dealt.
    pub fn observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Leave the game in `Setup` so the shell can pace `deal_next` itself.
    pub fn paced(mut self) -> Self {
        self.paced = true;
        self
    }

    /// Build the controller and, unless paced, deal every card.
    pub fn build(self) -> Result<GameController, GameError> {
        let mut game = match self.deck {
            Some(deck) => GameController::with_deck(self.config, deck, self.seed)?,
            None => GameController::new(self.config, self.seed)?,
        };
        for observer in self.observers {
            game.add_boxed_observer(observer);
        }
        if !self.paced {
            game.deal_all()?;
        }
        Ok(game)
    }
}

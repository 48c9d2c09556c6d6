//! Core types: players, RNG, configuration, actions, errors and events.
//!
//! Nothing here knows about turn stages; the `game` module builds the state
//! machine on top of these.

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{AssetBindings, CrowType, DragonType, GameConfig};
pub use error::{ConfigError, GameError, RejectReason};
pub use event::{EventLog, GameEvent, GameObserver};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};

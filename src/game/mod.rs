//! Game flow: dealing, the turn state machine and snapshots.
//!
//! ## Key Types
//!
//! - `GameController`: owns the table and applies actions
//! - `GameBuilder`: fluent setup (config, seed, observers, stacked deck)
//! - `Phase` / `TurnStage`: where the game and the current turn stand
//! - `DealSequence`: ordered, restartable opening deal
//! - `Affordances`: what the shell may offer as clickable
//! - `GameSnapshot`: serializable full state

pub mod affordances;
pub mod builder;
pub mod controller;
pub mod dealing;
pub mod phase;
pub mod snapshot;

pub use affordances::Affordances;
pub use builder::GameBuilder;
pub use controller::GameController;
pub use dealing::{DealSequence, DealStep};
pub use phase::{Phase, TurnStage};
pub use snapshot::GameSnapshot;

//! Scoring rules and the end-of-game result.

pub mod outcome;
pub mod scoring;

pub use outcome::GameOutcome;
pub use scoring::{column_contribution, has_pair, score_values};

//! Card system: definitions, instances, and catalog.
//!
//! ## Key Types
//!
//! - `CardKind`: Dragon or Crow
//! - `CardData`: Immutable card identity (kind, value, name, face asset)
//! - `Card`: One physical card with face-up, interactable and owner state
//! - `CardCatalog`: Every card type of a configured game

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardData, CardKind, CardTypeId};
pub use instance::{Card, CardId};
pub use registry::CardCatalog;

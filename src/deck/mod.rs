//! Deck model and editing session.
//!
//! ## Key Types
//!
//! - `Zone`: Main / extra / side, with type routing rules
//! - `Deck`: Ordered zones of card ids with capacity-checked insertion
//! - `DeckSnapshot`: Export view handed to persistence/network layers
//! - `EditingSession`: Deck + search state + shared database and ban list

pub mod model;
pub mod session;
pub mod zone;

pub use model::{Deck, DeckSnapshot};
pub use session::EditingSession;
pub use zone::Zone;

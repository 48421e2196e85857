//! Card system: records, display strings, set codes and the database.
//!
//! ## Key Types
//!
//! - `CardId`: Card passcode, the only card reference stored elsewhere
//! - `CardData`: Static numeric card record (type bits, stats, markers)
//! - `CardString`: Display name and rules text
//! - `CardDatabase`: Ordered, read-only lookup table
//! - `SetCodeResolver`: Archetype name → set code resolution

pub mod definition;
pub mod registry;
pub mod setcode;
pub mod types;

pub use definition::{CardData, CardId, CardString, SetCode, SetCodes};
pub use registry::CardDatabase;
pub use setcode::{NoSetCodes, SetCodeResolver, SetNameTable};

//! Ban lists and copy-limit checks.
//!
//! ## Key Types
//!
//! - `LimitClass`: Forbidden / Limited / Semi-Limited / Unlimited
//! - `BanList`: Card id → limit class, plus admitted formats
//! - `LimitChecker`: Remaining legal copies of a card in a deck

pub mod limit;
pub mod list;

pub use limit::LimitChecker;
pub use list::{BanList, LimitClass};

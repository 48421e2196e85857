//! # ccg-deckbuilder
//!
//! Card search and constrained deck editing for a collectible card game.
//!
//! ## Design Principles
//!
//! 1. **Ids, not pointers**: Decks and result pools hold `CardId`s into a
//!    shared, read-only `CardDatabase`.
//!
//! 2. **Explicit session**: Search state, filter selections and the deck
//!    live in an `EditingSession` passed by `&mut`, never in globals.
//!
//! 3. **Fail without mutation**: Insertions that break routing or capacity
//!    return `false` and leave the deck untouched.
//!
//! ## Architecture
//!
//! - **Bitmask gates**: Card kinds are flag sets; filters are mask tests.
//!
//! - **Persistent zones**: `im::Vector` zones make the saved-deck
//!   checkpoint an O(1) clone.
//!
//! ## Modules
//!
//! - `core`: Deck and search configuration, seeded RNG
//! - `cards`: Card records, type flags, database, set-name resolution
//! - `banlist`: Ban lists and copy-limit checks
//! - `search`: Comparators, query parsing, filtering, result ordering
//! - `deck`: Zones, the deck model and the editing session
//! - `drag`: Pointer-driven card movement
//! - `error`: Error type

pub mod core;
pub mod cards;
pub mod banlist;
pub mod search;
pub mod deck;
pub mod drag;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{DeckConfig, DeckRng, DeckRngState, KeywordMode, SearchConfig};

pub use crate::cards::{
    CardData, CardDatabase, CardId, CardString, NoSetCodes, SetCode, SetCodeResolver,
    SetCodes, SetNameTable,
};

pub use crate::banlist::{BanList, LimitChecker, LimitClass};

pub use crate::search::{
    Comparator, CompareOp, ElementKind, FilterEngine, FilterParams, LimitFilter, Query,
    QueryElement, SortKey, TypeFamily,
};

pub use crate::deck::{Deck, DeckSnapshot, EditingSession, Zone};

pub use crate::drag::{quick_move, DragController, DragOutcome, DragState, Location, PointerEvent, Slot};

pub use crate::error::{DeckError, Result};

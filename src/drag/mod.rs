//! Pointer-driven card movement between the result pool and deck zones.
//!
//! The controller is a small state machine fed one `PointerEvent` at a
//! time. Hit-testing stays with the caller: every event carries the
//! `Slot` under the pointer (or `None` over empty canvas).
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use ccg_deckbuilder::banlist::BanList;
//! use ccg_deckbuilder::cards::{CardData, CardDatabase, CardId, CardString, NoSetCodes};
//! use ccg_deckbuilder::cards::types::TYPE_SPELL;
//! use ccg_deckbuilder::core::DeckConfig;
//! use ccg_deckbuilder::deck::{EditingSession, Zone};
//! use ccg_deckbuilder::drag::{DragController, DragOutcome, PointerEvent, Slot};
//!
//! let mut db = CardDatabase::new();
//! db.register(CardData::new(CardId::new(1), TYPE_SPELL), CardString::new("Raigeki", "")).unwrap();
//! let mut session = EditingSession::new(
//!     Arc::new(db),
//!     Arc::new(BanList::default()),
//!     Arc::new(NoSetCodes),
//!     DeckConfig::default(),
//! )
//! .unwrap();
//! session.search("");
//!
//! let mut drag = DragController::new();
//! drag.handle(&mut session, PointerEvent::Down(Some(Slot::pool(0))));
//! drag.handle(&mut session, PointerEvent::Move);
//! let outcome = drag.handle(&mut session, PointerEvent::Up(Some(Slot::deck(Zone::Main, 0))));
//!
//! assert_eq!(outcome, DragOutcome::Placed(Zone::Main));
//! assert_eq!(session.deck().get(Zone::Main, 0), Some(CardId::new(1)));
//! ```

mod controller;

pub use controller::{quick_move, DragController, DragOutcome, DragState, Location, PointerEvent, Slot};

//! Python bindings for ccg-deckbuilder.
//!
//! # Quick Start
//!
//! ```python
//! import ccg_deckbuilder as deck
//!
//! db = deck.CardDatabase()
//! db.add_card(4031, 0x21, "Dragon Knight", level=4, attack=1800)
//!
//! session = deck.DeckSession(db, deck.BanList("current"))
//! codes = session.search("dragon")
//! session.insert("main", codes[0])
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_deck;

pub use py_cards::*;
pub use py_deck::*;

/// ccg_deckbuilder: card search and deck editing.
#[pymodule]
fn ccg_deckbuilder(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCardDatabase>()?;
    m.add_class::<PyBanList>()?;
    m.add_class::<PyDeckSession>()?;
    Ok(())
}

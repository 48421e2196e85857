//! Card database for record and string lookup.
//!
//! The `CardDatabase` owns every `CardData` and `CardString` for a
//! session. It remembers declaration order so filtered results come out
//! in the same order the cards were loaded.

use rustc_hash::FxHashMap;

use super::definition::{CardData, CardId, CardString};
use crate::error::{DeckError, Result};

/// Read-only card table shared by search and deck editing.
///
/// ## Example
///
/// ```
/// use ccg_deckbuilder::cards::{CardDatabase, CardData, CardId, CardString};
/// use ccg_deckbuilder::cards::types::TYPE_SPELL;
///
/// let mut db = CardDatabase::new();
/// db.register(
///     CardData::new(CardId::new(55144522), TYPE_SPELL),
///     CardString::new("Pot of Greed", "Draw 2 cards."),
/// )
/// .unwrap();
///
/// assert_eq!(db.name(CardId::new(55144522)), Some("Pot of Greed"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardDatabase {
    cards: FxHashMap<CardId, CardData>,
    strings: FxHashMap<CardId, CardString>,
    order: Vec<CardId>,
}

impl CardDatabase {
    /// Create a new empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card record with its display strings.
    ///
    /// Fails if a card with the same ID already exists.
    pub fn register(&mut self, card: CardData, strings: CardString) -> Result<()> {
        let id = card.id;
        self.register_data(card)?;
        self.strings.insert(id, strings);
        Ok(())
    }

    /// Register a card record without display strings.
    ///
    /// Such cards can sit in a deck but never show up in search results.
    pub fn register_data(&mut self, card: CardData) -> Result<()> {
        if self.cards.contains_key(&card.id) {
            return Err(DeckError::DuplicateCard(card.id));
        }
        self.order.push(card.id);
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Get a card record by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardData> {
        self.cards.get(&id)
    }

    /// Get a card record by ID, failing with `UnknownCard`.
    pub fn require(&self, id: CardId) -> Result<&CardData> {
        self.cards.get(&id).ok_or(DeckError::UnknownCard(id))
    }

    /// Get the display strings for a card.
    #[must_use]
    pub fn get_string(&self, id: CardId) -> Option<&CardString> {
        self.strings.get(&id)
    }

    /// Get the display name for a card.
    #[must_use]
    pub fn name(&self, id: CardId) -> Option<&str> {
        self.strings.get(&id).map(|s| s.name.as_str())
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over card IDs in declaration order.
    pub fn iter_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.order.iter().copied()
    }

    /// Iterate over card records in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardData> {
        self.order.iter().filter_map(move |id| self.cards.get(id))
    }
}

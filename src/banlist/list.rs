//! Ban list (forbidden/limited list) lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::types::{RULE_DIY, RULE_OCG};
use crate::cards::{CardData, CardId};

/// How many copies of a card a deck may hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LimitClass {
    Forbidden = 0,
    Limited = 1,
    SemiLimited = 2,
    Unlimited = 3,
}

impl LimitClass {
    /// Number of copies this class allows.
    #[must_use]
    pub const fn copies(self) -> usize {
        self as usize
    }

    /// Class for a raw list value; values above 3 clamp to `Unlimited`.
    #[must_use]
    pub const fn from_raw(value: u8) -> Self {
        match value {
            0 => LimitClass::Forbidden,
            1 => LimitClass::Limited,
            2 => LimitClass::SemiLimited,
            _ => LimitClass::Unlimited,
        }
    }
}

/// A named forbidden/limited list.
///
/// Cards absent from the list are `Unlimited`. The `ocg` and `diy` flags
/// say which card pools the list admits during deck validation.
///
/// ## Example
///
/// ```
/// use ccg_deckbuilder::banlist::{BanList, LimitClass};
/// use ccg_deckbuilder::cards::CardId;
///
/// let list = BanList::new("2024.01")
///     .with_limit(CardId::new(55144522), LimitClass::Forbidden);
///
/// assert_eq!(list.limit_of(CardId::new(55144522)), LimitClass::Forbidden);
/// assert_eq!(list.limit_of(CardId::new(1)), LimitClass::Unlimited);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BanList {
    /// List name (for display/debugging).
    pub name: String,

    /// Admit cards flagged as OCG cards.
    pub ocg: bool,

    /// Admit custom (DIY) cards.
    pub diy: bool,

    content: FxHashMap<CardId, LimitClass>,
}

impl Default for BanList {
    fn default() -> Self {
        Self::new("")
    }
}

impl BanList {
    /// Create an empty list admitting OCG cards only.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ocg: true,
            diy: false,
            content: FxHashMap::default(),
        }
    }

    /// Set the class for a card.
    pub fn set_limit(&mut self, id: CardId, class: LimitClass) {
        self.content.insert(id, class);
    }

    /// Set the class for a card (builder pattern).
    #[must_use]
    pub fn with_limit(mut self, id: CardId, class: LimitClass) -> Self {
        self.set_limit(id, class);
        self
    }

    /// Set which card pools the list admits.
    #[must_use]
    pub fn with_formats(mut self, ocg: bool, diy: bool) -> Self {
        self.ocg = ocg;
        self.diy = diy;
        self
    }

    /// The listed class for a card, `None` when the card is not listed.
    #[must_use]
    pub fn entry(&self, id: CardId) -> Option<LimitClass> {
        self.content.get(&id).copied()
    }

    /// The class for a card, defaulting to `Unlimited`.
    #[must_use]
    pub fn limit_of(&self, id: CardId) -> LimitClass {
        self.entry(id).unwrap_or(LimitClass::Unlimited)
    }

    /// Whether the card's pool is admitted by this list.
    #[must_use]
    pub fn admits(&self, card: &CardData) -> bool {
        if card.rule & RULE_DIY != 0 {
            return self.diy;
        }
        if card.rule & RULE_OCG != 0 {
            return self.ocg;
        }
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

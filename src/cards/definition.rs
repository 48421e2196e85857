//! Card records - static card data.
//!
//! `CardData` holds the numeric properties of a card that filters and
//! deck rules look at. Display text lives separately in `CardString`
//! so the filter can skip cards that have data but no localized text.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::types::{TYPES_EXTRA_DECK, TYPE_MONSTER, TYPE_PENDULUM, TYPE_TOKEN};

/// Set code (archetype) identifier.
pub type SetCode = u16;

/// Set-code list carried by a card. Most cards belong to at most four.
pub type SetCodes = SmallVec<[SetCode; 4]>;

/// Unique identifier for a card (its passcode).
///
/// Deck zones and result pools store these instead of references into
/// the database, so they stay valid and serializable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// The "no card" identifier, used for an absent alias.
    pub const NONE: CardId = CardId(0);

    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether this is the "no card" identifier.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card record.
///
/// ## Example
///
/// ```
/// use ccg_deckbuilder::cards::{CardData, CardId};
/// use ccg_deckbuilder::cards::types::{TYPE_MONSTER, TYPE_EFFECT};
///
/// let card = CardData::new(CardId::new(46986414), TYPE_MONSTER | TYPE_EFFECT)
///     .with_level(7)
///     .with_stats(2500, 2100);
///
/// assert!(card.is_monster());
/// assert!(!card.is_extra_deck());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    /// Card passcode.
    pub id: CardId,

    /// Canonical card this one is a reprint/artwork of, `CardId::NONE` if none.
    pub alias: CardId,

    /// Type bitmask (`types::TYPE_*`).
    pub card_type: u32,

    /// Race code.
    pub race: u32,

    /// Attribute code.
    pub attribute: u32,

    /// Attack, `UNKNOWN_STAT` for "?".
    pub attack: i32,

    /// Defense, `UNKNOWN_STAT` for "?".
    pub defense: i32,

    /// Level, rank or link rating.
    pub level: u32,

    /// Pendulum scale.
    pub lscale: u32,

    /// Link arrow bitmask (`types::MARKER_*`).
    pub move_marker: u32,

    /// Format bitmask (`types::RULE_*`).
    pub rule: u32,

    /// Archetypes this card belongs to.
    pub setcodes: SetCodes,
}

impl CardData {
    /// Create a record with the given id and type; all stats zero.
    #[must_use]
    pub fn new(id: CardId, card_type: u32) -> Self {
        Self {
            id,
            card_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: CardId) -> Self {
        self.alias = alias;
        self
    }

    #[must_use]
    pub fn with_race(mut self, race: u32) -> Self {
        self.race = race;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: u32) -> Self {
        self.attribute = attribute;
        self
    }

    /// Set attack and defense.
    #[must_use]
    pub fn with_stats(mut self, attack: i32, defense: i32) -> Self {
        self.attack = attack;
        self.defense = defense;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, lscale: u32) -> Self {
        self.lscale = lscale;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, move_marker: u32) -> Self {
        self.move_marker = move_marker;
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: u32) -> Self {
        self.rule = rule;
        self
    }

    #[must_use]
    pub fn with_setcodes(mut self, setcodes: &[SetCode]) -> Self {
        self.setcodes = SmallVec::from_slice(setcodes);
        self
    }

    #[must_use]
    pub fn is_monster(&self) -> bool {
        self.card_type & TYPE_MONSTER != 0
    }

    #[must_use]
    pub fn is_token(&self) -> bool {
        self.card_type & TYPE_TOKEN != 0
    }

    #[must_use]
    pub fn is_pendulum(&self) -> bool {
        self.card_type & TYPE_PENDULUM != 0
    }

    /// Whether the card belongs in the extra zone.
    #[must_use]
    pub fn is_extra_deck(&self) -> bool {
        self.card_type & TYPES_EXTRA_DECK != 0
    }

    /// Identifier used for copy-limit counting: the alias if declared,
    /// else the card's own id.
    #[must_use]
    pub fn limit_id(&self) -> CardId {
        if self.alias.is_none() {
            self.id
        } else {
            self.alias
        }
    }

    /// Whether this card counts as a copy of `limit_id`.
    #[must_use]
    pub fn counts_as(&self, limit_id: CardId) -> bool {
        self.id == limit_id || self.alias == limit_id
    }

    /// Whether any of the card's set codes is in `candidates`.
    #[must_use]
    pub fn has_any_setcode(&self, candidates: &[SetCode]) -> bool {
        self.setcodes.iter().any(|code| candidates.contains(code))
    }
}

/// Display strings for a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardString {
    /// Display name.
    pub name: String,

    /// Full rules text.
    pub text: String,
}

impl CardString {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

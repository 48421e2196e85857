//! Card filtering: attribute gates plus keyword query.
//!
//! Every card in the database is run through a fixed sequence of gates;
//! the first failing gate drops it:
//!
//! 1. tokens and cards without display strings
//! 2. type family and sub-type
//! 3. monster attributes (race, attribute, attack, level, scale)
//! 4. link markers
//! 5. ban list class or format
//! 6. query elements (all must match after exclusion)
//!
//! Results keep database declaration order; sorting is a separate step.

use serde::{Deserialize, Serialize};

use super::comparator::Comparator;
use super::name::card_name_contains;
use super::query::{ElementKind, Query, QueryElement};
use crate::banlist::{BanList, LimitClass};
use crate::cards::types::{
    is_alternative, RULE_DIY, RULE_OCG, TYPE_FIELD, TYPE_MONSTER, TYPE_SPELL, TYPE_TRAP,
};
use crate::cards::{CardData, CardDatabase, CardId, CardString};

/// Card family selected in the type box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeFamily {
    #[default]
    Any,
    Monster,
    /// Spell cards.
    Call,
    /// Trap cards.
    Bane,
    /// Field spells.
    Area,
}

impl TypeFamily {
    /// Type bit a card needs to be in this family.
    #[must_use]
    pub const fn flag(self) -> u32 {
        match self {
            TypeFamily::Any => 0,
            TypeFamily::Monster => TYPE_MONSTER,
            TypeFamily::Call => TYPE_SPELL,
            TypeFamily::Bane => TYPE_TRAP,
            TypeFamily::Area => TYPE_FIELD,
        }
    }
}

/// Ban list / format selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitFilter {
    #[default]
    Any,
    /// Cards listed with exactly this class.
    Class(LimitClass),
    /// OCG cards.
    Ocg,
    /// Custom cards.
    Diy,
}

/// Attribute filter values from the search panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    pub family: TypeFamily,

    /// Sub-type bits. For monsters every bit must be present; for the
    /// other families the card type must equal it exactly. 0 = any.
    pub subtype: u32,

    /// Monster race, 0 = any.
    pub race: u32,

    /// Monster attribute, 0 = any.
    pub attribute: u32,

    pub attack: Comparator,

    pub level: Comparator,

    /// Pendulum scale; an active filter excludes non-pendulum monsters.
    pub scale: Comparator,

    /// Link markers that must all be present, 0 = any.
    pub markers: u32,

    pub limit: LimitFilter,
}

impl FilterParams {
    /// Parameters that let every card through.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_family(mut self, family: TypeFamily, subtype: u32) -> Self {
        self.family = family;
        self.subtype = subtype;
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

    /// Set the attack filter from comparator text.
    #[must_use]
    pub fn with_attack(mut self, text: &str) -> Self {
        self.attack = Comparator::parse(text);
        self
    }

    /// Set the level filter from comparator text.
    #[must_use]
    pub fn with_level(mut self, text: &str) -> Self {
        self.level = Comparator::parse(text);
        self
    }

    /// Set the pendulum scale filter from comparator text.
    #[must_use]
    pub fn with_scale(mut self, text: &str) -> Self {
        self.scale = Comparator::parse(text);
        self
    }

    #[must_use]
    pub fn with_markers(mut self, markers: u32) -> Self {
        self.markers = markers;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: LimitFilter) -> Self {
        self.limit = limit;
        self
    }

    /// Reset the attribute boxes, markers and limit selection but keep
    /// the type family.
    pub fn clear_attributes(&mut self) {
        *self = Self {
            family: self.family,
            subtype: self.subtype,
            ..Self::default()
        };
    }
}

/// Runs queries against a card database.
#[derive(Clone, Copy, Debug)]
pub struct FilterEngine<'a> {
    db: &'a CardDatabase,
    banlist: &'a BanList,
}

impl<'a> FilterEngine<'a> {
    #[must_use]
    pub fn new(db: &'a CardDatabase, banlist: &'a BanList) -> Self {
        Self { db, banlist }
    }

    /// All matching cards in declaration order.
    #[must_use]
    pub fn run(&self, query: &Query, params: &FilterParams) -> Vec<CardId> {
        let results: Vec<CardId> = self
            .db
            .iter()
            .filter_map(|card| {
                let strings = self.db.get_string(card.id)?;
                self.matches(card, strings, query, params).then_some(card.id)
            })
            .collect();
        tracing::debug!(
            query = %query.raw,
            elements = query.elements.len(),
            results = results.len(),
            "filter complete"
        );
        results
    }

    /// Whether a single card passes every gate.
    #[must_use]
    pub fn matches(
        &self,
        card: &CardData,
        strings: &CardString,
        query: &Query,
        params: &FilterParams,
    ) -> bool {
        !card.is_token()
            && passes_type(card, params)
            && passes_markers(card, params.markers)
            && self.passes_limit(card, params.limit)
            && query
                .elements
                .iter()
                .all(|element| matches_element(card, strings, query.code, element) != element.exclude)
    }

    fn passes_limit(&self, card: &CardData, limit: LimitFilter) -> bool {
        match limit {
            LimitFilter::Any => true,
            LimitFilter::Class(class) => self.banlist.entry(card.id) == Some(class),
            LimitFilter::Ocg => card.rule & RULE_OCG != 0,
            LimitFilter::Diy => card.rule & RULE_DIY != 0,
        }
    }
}

fn passes_type(card: &CardData, params: &FilterParams) -> bool {
    let family = params.family.flag();
    if family != 0 && card.card_type & family == 0 {
        return false;
    }
    match params.family {
        TypeFamily::Any => true,
        TypeFamily::Monster => {
            card.card_type & params.subtype == params.subtype && passes_monster_attributes(card, params)
        }
        TypeFamily::Call | TypeFamily::Bane | TypeFamily::Area => {
            params.subtype == 0 || card.card_type == params.subtype
        }
    }
}

fn passes_monster_attributes(card: &CardData, params: &FilterParams) -> bool {
    if params.race != 0 && card.race != params.race {
        return false;
    }
    if params.attribute != 0 && card.attribute != params.attribute {
        return false;
    }
    if !params.attack.matches_attack(card.attack) || !params.level.matches_level(card.level) {
        return false;
    }
    !params.scale.is_active() || (card.is_pendulum() && params.scale.matches_level(card.lscale))
}

fn passes_markers(card: &CardData, markers: u32) -> bool {
    card.move_marker & markers == markers
}

/// Raw match of one element, before exclusion is applied.
fn matches_element(
    card: &CardData,
    strings: &CardString,
    code: Option<u32>,
    element: &QueryElement,
) -> bool {
    match element.kind {
        ElementKind::Name => card_name_contains(Some(&strings.name), &element.keyword),
        ElementKind::SetCode => card.has_any_setcode(&element.setcodes),
        ElementKind::Any => {
            if let Some(code) = code {
                let id = card.id.raw();
                let alias = card.alias.raw();
                if id == code || (alias == code && is_alternative(id, alias)) {
                    return true;
                }
            }
            card_name_contains(Some(&strings.name), &element.keyword)
                || strings.text.contains(&element.keyword)
                || card.has_any_setcode(&element.setcodes)
        }
    }
}

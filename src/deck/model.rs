//! The three-zone deck model.
//!
//! A `Deck` holds card identifiers in three ordered zones. New placements
//! go through `insert`, which enforces the capacity and routing rules.
//! Every successful mutation marks the deck modified.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::zone::Zone;
use crate::banlist::{BanList, LimitClass};
use crate::cards::{CardData, CardDatabase, CardId};
use crate::core::{DeckConfig, DeckRng};
use crate::error::{DeckError, Result};
use crate::search::sort::{compare_cards, SortKey};

/// Ordered main/extra/side zones of card identifiers.
///
/// Zones use persistent vectors, so cloning a deck (to keep the last saved
/// version around) is O(1).
///
/// ## Usage
///
/// ```
/// use ccg_deckbuilder::cards::{CardData, CardId};
/// use ccg_deckbuilder::cards::types::{TYPE_MONSTER, TYPE_LINK};
/// use ccg_deckbuilder::deck::{Deck, Zone};
///
/// let link = CardData::new(CardId::new(1861629), TYPE_MONSTER | TYPE_LINK);
/// let mut deck = Deck::new();
///
/// assert!(!deck.insert(Zone::Main, &link, None, 60));
/// assert!(deck.insert(Zone::Extra, &link, None, 15));
/// assert_eq!(deck.zone(Zone::Extra).len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    main: Vector<CardId>,
    extra: Vector<CardId>,
    side: Vector<CardId>,
    #[serde(skip)]
    modified: bool,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from already-routed zone lists, e.g. one loaded from a
    /// deck file. The deck starts unmodified.
    #[must_use]
    pub fn from_zones(main: Vec<CardId>, extra: Vec<CardId>, side: Vec<CardId>) -> Self {
        Self {
            main: Vector::from(main),
            extra: Vector::from(extra),
            side: Vector::from(side),
            modified: false,
        }
    }

    /// Cards in a zone, in order.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &Vector<CardId> {
        match zone {
            Zone::Main => &self.main,
            Zone::Extra => &self.extra,
            Zone::Side => &self.side,
        }
    }

    fn zone_mut(&mut self, zone: Zone) -> &mut Vector<CardId> {
        match zone {
            Zone::Main => &mut self.main,
            Zone::Extra => &mut self.extra,
            Zone::Side => &mut self.side,
        }
    }

    /// Card at `index` in a zone.
    #[must_use]
    pub fn get(&self, zone: Zone, index: usize) -> Option<CardId> {
        self.zone(zone).get(index).copied()
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        self.zone(zone).len()
    }

    /// Total cards across all zones.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.main.len() + self.extra.len() + self.side.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Every card in main, then extra, then side.
    pub fn iter_all(&self) -> impl Iterator<Item = CardId> + '_ {
        self.main
            .iter()
            .chain(self.extra.iter())
            .chain(self.side.iter())
            .copied()
    }

    /// Whether the deck changed since it was created, loaded or saved.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clear the modified flag after the deck was persisted.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Insert a card into a zone.
    ///
    /// Fails without touching the deck when the zone already holds
    /// `capacity` cards or does not accept the card's type. Otherwise the
    /// card goes to `index` when it is inside the zone, else to the end.
    pub fn insert(
        &mut self,
        zone: Zone,
        card: &CardData,
        index: Option<usize>,
        capacity: usize,
    ) -> bool {
        if !zone.accepts(card) {
            return false;
        }
        let cards = self.zone_mut(zone);
        if cards.len() >= capacity {
            return false;
        }
        match index {
            Some(i) if i < cards.len() => cards.insert(i, card.id),
            _ => cards.push_back(card.id),
        }
        self.modified = true;
        tracing::trace!(card = %card.id, %zone, "inserted");
        true
    }

    /// Put a card lifted from `zone` back at `index`, skipping the
    /// capacity and routing checks.
    ///
    /// Only for a card that just left this zone: the slot it vacated is
    /// still free even when the loaded deck was over capacity or held a
    /// misrouted card.
    pub(crate) fn restore(&mut self, zone: Zone, id: CardId, index: usize) {
        let cards = self.zone_mut(zone);
        if index < cards.len() {
            cards.insert(index, id);
        } else {
            cards.push_back(id);
        }
        self.modified = true;
        tracing::trace!(card = %id, %zone, index, "restored");
    }

    /// Remove the card at `index` from a zone.
    pub fn remove(&mut self, zone: Zone, index: usize) -> Result<CardId> {
        let cards = self.zone_mut(zone);
        if index >= cards.len() {
            return Err(DeckError::IndexOutOfRange {
                zone,
                index,
                len: cards.len(),
            });
        }
        let id = cards.remove(index);
        self.modified = true;
        tracing::trace!(card = %id, %zone, index, "removed");
        Ok(id)
    }

    /// Move the first copy of `card` in `from` to the end of `to`.
    ///
    /// The card is only taken out of `from` once it was accepted by `to`,
    /// so a failed move leaves the deck unchanged.
    pub fn move_card(&mut self, card: &CardData, from: Zone, to: Zone, capacity: usize) -> bool {
        let Some(index) = self.zone(from).index_of(&card.id) else {
            return false;
        };
        if from == to {
            return true;
        }
        if !self.insert(to, card, None, capacity) {
            return false;
        }
        self.remove(from, index).is_ok()
    }

    /// Empty every zone.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.modified = true;
        }
        self.main.clear();
        self.extra.clear();
        self.side.clear();
    }

    /// Sort every zone by level, then name.
    pub fn sort_zones(&mut self, db: &CardDatabase) {
        for zone in Zone::ALL {
            let cards = self.zone_mut(zone);
            let mut sorted: Vec<CardId> = cards.iter().copied().collect();
            sorted.sort_by(|a, b| compare_cards(db, *a, *b, SortKey::Level));
            *cards = Vector::from(sorted);
        }
        self.modified = true;
    }

    /// Shuffle the main zone.
    pub fn shuffle_main(&mut self, rng: &mut DeckRng) {
        let mut cards: Vec<CardId> = self.main.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.main = Vector::from(cards);
        self.modified = true;
    }

    /// Export view of the deck.
    #[must_use]
    pub fn snapshot(&self) -> DeckSnapshot {
        let tag = |zone: Zone| self.zone(zone).iter().map(move |&id| (zone, id));
        DeckSnapshot {
            main: tag(Zone::Main).chain(tag(Zone::Extra)).collect(),
            side: tag(Zone::Side).collect(),
        }
    }

    /// Check the deck is legal to play.
    ///
    /// Uses the base (non-relaxed) capacities and reports the first
    /// violation found: zone sizes, then per-card legality in deck order.
    pub fn check(&self, db: &CardDatabase, banlist: &BanList, config: &DeckConfig) -> Result<()> {
        let main = self.main.len();
        if main < config.main_min {
            return Err(DeckError::MainTooSmall {
                count: main,
                min: config.main_min,
            });
        }
        for zone in Zone::ALL {
            let count = self.len(zone);
            let max = config.max_size(zone);
            if count > max {
                return Err(DeckError::ZoneTooLarge { zone, count, max });
            }
        }

        let mut counts: rustc_hash::FxHashMap<CardId, usize> = Default::default();
        for id in self.iter_all() {
            let card = db.require(id)?;
            if !banlist.admits(card) {
                return Err(DeckError::FormatMismatch(id));
            }
            let limit_id = card.limit_id();
            let class = banlist.limit_of(limit_id);
            if class == LimitClass::Forbidden {
                return Err(DeckError::Forbidden(limit_id));
            }
            let count = counts.entry(limit_id).or_insert(0);
            *count += 1;
            if *count > class.copies() {
                return Err(DeckError::TooManyCopies {
                    card: limit_id,
                    count: *count,
                    limit: class.copies(),
                });
            }
        }
        Ok(())
    }
}

/// Ordered `(zone, card)` pairs handed to persistence and network layers.
///
/// `main` lists the main zone followed by the extra zone; `side` lists the
/// side zone. Encoding these is the caller's business.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    pub main: Vec<(Zone, CardId)>,
    pub side: Vec<(Zone, CardId)>,
}

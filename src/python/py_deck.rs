//! Editing session bindings for Python.

use std::sync::Arc;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use super::py_cards::{PyBanList, PyCardDatabase};
use crate::banlist::LimitClass;
use crate::cards::{CardId, SetNameTable};
use crate::core::{DeckConfig, KeywordMode, SearchConfig};
use crate::deck::{Deck, EditingSession, Zone};
use crate::drag::{quick_move, DragOutcome, Slot};
use crate::search::{FilterParams, LimitFilter, SortKey, TypeFamily};

fn parse_zone(name: &str) -> PyResult<Zone> {
    Zone::from_name(name).ok_or_else(|| PyValueError::new_err(format!("unknown zone: {name}")))
}

fn parse_keyword_mode(name: &str) -> PyResult<KeywordMode> {
    match name {
        "single" => Ok(KeywordMode::Single),
        "space" => Ok(KeywordMode::MultiSpace),
        "plus" => Ok(KeywordMode::MultiPlus),
        _ => Err(PyValueError::new_err(format!("unknown keyword mode: {name}"))),
    }
}

fn parse_family(name: &str) -> PyResult<TypeFamily> {
    match name {
        "any" => Ok(TypeFamily::Any),
        "monster" => Ok(TypeFamily::Monster),
        "spell" => Ok(TypeFamily::Call),
        "trap" => Ok(TypeFamily::Bane),
        "field" => Ok(TypeFamily::Area),
        _ => Err(PyValueError::new_err(format!("unknown card family: {name}"))),
    }
}

fn parse_limit(name: &str) -> PyResult<LimitFilter> {
    match name {
        "any" => Ok(LimitFilter::Any),
        "forbidden" => Ok(LimitFilter::Class(LimitClass::Forbidden)),
        "limited" => Ok(LimitFilter::Class(LimitClass::Limited)),
        "semi-limited" => Ok(LimitFilter::Class(LimitClass::SemiLimited)),
        "ocg" => Ok(LimitFilter::Ocg),
        "diy" => Ok(LimitFilter::Diy),
        _ => Err(PyValueError::new_err(format!("unknown limit filter: {name}"))),
    }
}

fn raw(ids: impl IntoIterator<Item = CardId>) -> Vec<u32> {
    ids.into_iter().map(CardId::raw).collect()
}

/// Python wrapper for EditingSession.
#[pyclass(name = "DeckSession")]
#[derive(Clone, Debug)]
pub struct PyDeckSession(pub EditingSession);

#[pymethods]
impl PyDeckSession {
    /// Start a session with an empty deck.
    ///
    /// # Arguments
    /// - db: Card database (snapshotted)
    /// - banlist: Ban list used for copy limits and validation
    /// - setnames: (code, name) pairs for `@` searches
    /// - keyword_mode: "single", "space" or "plus"
    /// - auto_search_limit: Keyword length that triggers instant search
    /// - seed: Shuffle seed
    #[new]
    #[pyo3(signature = (
        db,
        banlist,
        setnames = Vec::new(),
        main_max = 60,
        extra_max = 15,
        side_max = 15,
        main_min = 40,
        keyword_mode = "space",
        auto_search_limit = None,
        seed = 0
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        db: &PyCardDatabase,
        banlist: &PyBanList,
        setnames: Vec<(u16, String)>,
        main_max: usize,
        extra_max: usize,
        side_max: usize,
        main_min: usize,
        keyword_mode: &str,
        auto_search_limit: Option<usize>,
        seed: u64,
    ) -> PyResult<Self> {
        let mut table = SetNameTable::new();
        for (code, name) in setnames {
            table.insert(code, name);
        }
        let config = DeckConfig::default()
            .with_main_max(main_max)
            .with_extra_max(extra_max)
            .with_side_max(side_max)
            .with_main_min(main_min);
        let search = SearchConfig {
            keyword_mode: parse_keyword_mode(keyword_mode)?,
            auto_search_limit,
        };
        let session = EditingSession::new(
            Arc::new(db.0.clone()),
            Arc::new(banlist.0.clone()),
            Arc::new(table),
            config,
        )
        .map_err(|e| PyValueError::new_err(e.to_string()))?
        .with_search_config(search)
        .with_seed(seed);
        Ok(Self(session))
    }

    /// Run a search and return the result codes.
    fn search(&mut self, keyword: &str) -> Vec<u32> {
        raw(self.0.search(keyword).iter().copied())
    }

    /// Keyword edited; returns whether an instant search ran.
    fn keyword_changed(&mut self, keyword: &str) -> bool {
        self.0.keyword_changed(keyword)
    }

    #[getter]
    fn results(&self) -> Vec<u32> {
        raw(self.0.results().iter().copied())
    }

    /// Set the sort key ("level", "attack", "defense", "name") and re-sort.
    fn set_sort_key(&mut self, key: &str) -> PyResult<()> {
        self.0.sort_key = match key {
            "level" => SortKey::Level,
            "attack" => SortKey::Attack,
            "defense" => SortKey::Defense,
            "name" => SortKey::Name,
            _ => return Err(PyValueError::new_err(format!("unknown sort key: {key}"))),
        };
        self.0.sort_results();
        Ok(())
    }

    /// Replace the filter selections. Comparator fields take the search
    /// box syntax (">=2000", "?", "4").
    #[pyo3(signature = (
        family = "any",
        subtype = 0,
        race = 0,
        attribute = 0,
        attack = "",
        level = "",
        scale = "",
        markers = 0,
        limit = "any"
    ))]
    #[allow(clippy::too_many_arguments)]
    fn set_filter(
        &mut self,
        family: &str,
        subtype: u32,
        race: u32,
        attribute: u32,
        attack: &str,
        level: &str,
        scale: &str,
        markers: u32,
        limit: &str,
    ) -> PyResult<()> {
        self.0.filter = FilterParams::new()
            .with_family(parse_family(family)?, subtype)
            .with_race(race)
            .with_attribute(attribute)
            .with_attack(attack)
            .with_level(level)
            .with_scale(scale)
            .with_markers(markers)
            .with_limit(parse_limit(limit)?);
        Ok(())
    }

    fn clear_filter(&mut self) {
        self.0.clear_filter();
    }

    fn clear_search(&mut self) {
        self.0.clear_search();
    }

    #[getter]
    fn siding(&self) -> bool {
        self.0.is_siding()
    }

    #[setter]
    fn set_siding(&mut self, siding: bool) {
        self.0.set_siding(siding);
    }

    #[getter]
    fn readonly(&self) -> bool {
        self.0.is_readonly()
    }

    #[setter]
    fn set_readonly(&mut self, readonly: bool) {
        self.0.set_readonly(readonly);
    }

    /// Insert a card into a zone. Returns False if the zone rejected it.
    #[pyo3(signature = (zone, code, index = None))]
    fn insert(&mut self, zone: &str, code: u32, index: Option<usize>) -> PyResult<bool> {
        Ok(self.0.insert(parse_zone(zone)?, CardId::new(code), index))
    }

    /// Remove and return the card at `index`.
    fn remove(&mut self, zone: &str, index: usize) -> PyResult<u32> {
        self.0
            .remove(parse_zone(zone)?, index)
            .map(CardId::raw)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn move_card(&mut self, code: u32, from_zone: &str, to_zone: &str) -> PyResult<bool> {
        Ok(self.0.move_card(CardId::new(code), parse_zone(from_zone)?, parse_zone(to_zone)?))
    }

    /// Quick-move the card at `index` of a zone or of "pool".
    ///
    /// Returns the destination zone, or None if nothing moved.
    fn quick_move(&mut self, location: &str, index: usize) -> PyResult<Option<String>> {
        let slot = if location == "pool" {
            Slot::pool(index)
        } else {
            Slot::deck(parse_zone(location)?, index)
        };
        Ok(match quick_move(&mut self.0, slot) {
            DragOutcome::Moved { to, .. } | DragOutcome::Added(to) => Some(to.name().to_string()),
            _ => None,
        })
    }

    /// Whether another copy of a card may be added.
    fn check_limit(&self, code: u32) -> bool {
        self.0.check_limit(CardId::new(code))
    }

    /// Card codes in a zone.
    fn zone(&self, zone: &str) -> PyResult<Vec<u32>> {
        Ok(raw(self.0.deck().zone(parse_zone(zone)?).iter().copied()))
    }

    /// Replace the deck, marking it saved.
    fn load_deck(&mut self, main: Vec<u32>, extra: Vec<u32>, side: Vec<u32>) {
        let ids = |codes: Vec<u32>| -> Vec<CardId> { codes.into_iter().map(CardId::new).collect() };
        self.0.load_deck(Deck::from_zones(ids(main), ids(extra), ids(side)));
    }

    fn clear_deck(&mut self) {
        self.0.clear_deck();
    }

    fn sort_deck(&mut self) {
        self.0.sort_deck();
    }

    fn shuffle_deck(&mut self) {
        self.0.shuffle_deck();
    }

    fn is_modified(&self) -> bool {
        self.0.is_modified()
    }

    fn mark_saved(&mut self) {
        self.0.mark_saved();
    }

    fn revert(&mut self) {
        self.0.revert();
    }

    /// Raise ValueError describing the first rule the deck breaks.
    fn validate(&self) -> PyResult<()> {
        self.0.validate().map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        let deck = self.0.deck();
        format!(
            "DeckSession(main={}, extra={}, side={})",
            deck.len(Zone::Main),
            deck.len(Zone::Extra),
            deck.len(Zone::Side)
        )
    }
}

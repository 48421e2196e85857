//! Card database and ban list bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::banlist::{BanList, LimitClass};
use crate::cards::{CardData, CardDatabase, CardId, CardString};

/// Python wrapper for CardDatabase.
///
/// Sessions take a snapshot of the database when they are created;
/// cards added afterwards are not visible to existing sessions.
#[pyclass(name = "CardDatabase")]
#[derive(Clone, Debug, Default)]
pub struct PyCardDatabase(pub CardDatabase);

#[pymethods]
impl PyCardDatabase {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Raises ValueError if the code is already registered.
    #[pyo3(signature = (
        code,
        card_type,
        name,
        text = String::new(),
        alias = 0,
        race = 0,
        attribute = 0,
        attack = 0,
        defense = 0,
        level = 0,
        lscale = 0,
        markers = 0,
        rule = 0,
        setcodes = Vec::new()
    ))]
    #[allow(clippy::too_many_arguments)]
    fn add_card(
        &mut self,
        code: u32,
        card_type: u32,
        name: String,
        text: String,
        alias: u32,
        race: u32,
        attribute: u32,
        attack: i32,
        defense: i32,
        level: u32,
        lscale: u32,
        markers: u32,
        rule: u32,
        setcodes: Vec<u16>,
    ) -> PyResult<()> {
        let card = CardData::new(CardId::new(code), card_type)
            .with_alias(CardId::new(alias))
            .with_race(race)
            .with_attribute(attribute)
            .with_stats(attack, defense)
            .with_level(level)
            .with_scale(lscale)
            .with_markers(markers)
            .with_rule(rule)
            .with_setcodes(&setcodes);
        self.0
            .register(card, CardString::new(name, text))
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn contains(&self, code: u32) -> bool {
        self.0.contains(CardId::new(code))
    }

    /// Display name of a card, if it has strings.
    fn name(&self, code: u32) -> Option<String> {
        self.0.name(CardId::new(code)).map(str::to_string)
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("CardDatabase(cards={})", self.0.len())
    }
}

/// Python wrapper for BanList.
#[pyclass(name = "BanList")]
#[derive(Clone, Debug)]
pub struct PyBanList(pub BanList);

#[pymethods]
impl PyBanList {
    /// Create an empty list.
    ///
    /// `ocg` and `diy` state which card pools the list admits.
    #[new]
    #[pyo3(signature = (name = String::new(), ocg = true, diy = false))]
    fn new(name: String, ocg: bool, diy: bool) -> Self {
        Self(BanList::new(name).with_formats(ocg, diy))
    }

    /// Set a card's class: 0 forbidden, 1 limited, 2 semi-limited,
    /// anything else unlimited.
    fn set_limit(&mut self, code: u32, class: u8) {
        self.0.set_limit(CardId::new(code), LimitClass::from_raw(class));
    }

    /// Allowed copies of a card.
    fn limit_of(&self, code: u32) -> u8 {
        self.0.limit_of(CardId::new(code)) as u8
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("BanList(name={:?}, entries={})", self.0.name, self.0.len())
    }
}

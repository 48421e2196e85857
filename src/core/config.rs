//! Deck and search configuration.
//!
//! Front ends configure the engine at startup by providing:
//! - `DeckConfig`: Zone capacities and the main zone minimum
//! - `SearchConfig`: Keyword mode and instant-search threshold
//!
//! Both are plain serde structs so they can be read from the host's
//! settings file.

use serde::{Deserialize, Serialize};

use crate::deck::Zone;
use crate::error::{DeckError, Result};

/// Default main zone maximum.
pub const DECK_MAX_SIZE: usize = 60;
/// Default main zone minimum for a legal deck.
pub const DECK_MIN_SIZE: usize = 40;
/// Default extra zone maximum.
pub const EXTRA_MAX_SIZE: usize = 15;
/// Default side zone maximum.
pub const SIDE_MAX_SIZE: usize = 15;
/// Extra room every zone gets while relaxed (siding between games).
pub const SIDE_ALLOWANCE: usize = 5;

/// Zone capacity limits.
///
/// ```
/// use ccg_deckbuilder::core::DeckConfig;
/// use ccg_deckbuilder::deck::Zone;
///
/// let config = DeckConfig::default().with_main_max(40);
/// assert_eq!(config.capacity(Zone::Main, false), 40);
/// assert_eq!(config.capacity(Zone::Main, true), 45);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Maximum main zone size.
    pub main_max: usize,

    /// Maximum extra zone size.
    pub extra_max: usize,

    /// Maximum side zone size.
    pub side_max: usize,

    /// Minimum main zone size for a legal deck.
    pub main_min: usize,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            main_max: DECK_MAX_SIZE,
            extra_max: EXTRA_MAX_SIZE,
            side_max: SIDE_MAX_SIZE,
            main_min: DECK_MIN_SIZE,
        }
    }
}

impl DeckConfig {
    #[must_use]
    pub fn with_main_max(mut self, max: usize) -> Self {
        self.main_max = max;
        self
    }

    #[must_use]
    pub fn with_extra_max(mut self, max: usize) -> Self {
        self.extra_max = max;
        self
    }

    #[must_use]
    pub fn with_side_max(mut self, max: usize) -> Self {
        self.side_max = max;
        self
    }

    #[must_use]
    pub fn with_main_min(mut self, min: usize) -> Self {
        self.main_min = min;
        self
    }

    /// Base maximum for a zone.
    #[must_use]
    pub fn max_size(&self, zone: Zone) -> usize {
        match zone {
            Zone::Main => self.main_max,
            Zone::Extra => self.extra_max,
            Zone::Side => self.side_max,
        }
    }

    /// Maximum for a zone, with `SIDE_ALLOWANCE` added while relaxed.
    #[must_use]
    pub fn capacity(&self, zone: Zone, relaxed: bool) -> usize {
        let base = self.max_size(zone);
        if relaxed {
            base + SIDE_ALLOWANCE
        } else {
            base
        }
    }

    /// Check every value is positive and the minimum fits the maximum.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("main_max", self.main_max),
            ("extra_max", self.extra_max),
            ("side_max", self.side_max),
            ("main_min", self.main_min),
        ] {
            if value == 0 {
                return Err(DeckError::InvalidConfig(format!("{name} must be positive")));
            }
        }
        if self.main_min > self.main_max {
            return Err(DeckError::InvalidConfig(format!(
                "main_min ({}) exceeds main_max ({})",
                self.main_min, self.main_max
            )));
        }
        Ok(())
    }
}

/// How the keyword box is split into query elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordMode {
    /// The whole keyword is one element.
    Single,
    /// Elements separated by spaces.
    #[default]
    MultiSpace,
    /// Elements separated by `+`.
    MultiPlus,
}

impl KeywordMode {
    /// Element separator, `None` in single-keyword mode.
    #[must_use]
    pub const fn separator(self) -> Option<char> {
        match self {
            KeywordMode::Single => None,
            KeywordMode::MultiSpace => Some(' '),
            KeywordMode::MultiPlus => Some('+'),
        }
    }
}

/// Search behavior settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Keyword splitting mode.
    pub keyword_mode: KeywordMode,

    /// Re-run the search on every keyword edit once the keyword has at
    /// least this many characters. `None` disables instant search.
    pub auto_search_limit: Option<usize>,
}

impl SearchConfig {
    #[must_use]
    pub fn with_keyword_mode(mut self, mode: KeywordMode) -> Self {
        self.keyword_mode = mode;
        self
    }

    #[must_use]
    pub fn with_auto_search_limit(mut self, limit: usize) -> Self {
        self.auto_search_limit = Some(limit);
        self
    }

    /// Whether editing the keyword to `keyword` should trigger a search.
    #[must_use]
    pub fn should_auto_search(&self, keyword: &str) -> bool {
        self.auto_search_limit
            .is_some_and(|limit| keyword.chars().count() >= limit)
    }
}

//! Deck zones and where cards may be placed.

use serde::{Deserialize, Serialize};

use crate::cards::CardData;

/// One of the three ordered card sequences of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Main,
    Extra,
    Side,
}

impl Zone {
    /// All zones in export order.
    pub const ALL: [Zone; 3] = [Zone::Main, Zone::Extra, Zone::Side];

    /// Whether `card` may be placed in this zone.
    ///
    /// Fusion, synchro, xyz and link monsters go to extra and never main;
    /// side takes anything.
    #[must_use]
    pub fn accepts(self, card: &CardData) -> bool {
        match self {
            Zone::Main => !card.is_extra_deck(),
            Zone::Extra => card.is_extra_deck(),
            Zone::Side => true,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Zone::Main => "main",
            Zone::Extra => "extra",
            Zone::Side => "side",
        }
    }

    /// Inverse of `name`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Zone> {
        Zone::ALL.into_iter().find(|zone| zone.name() == name)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

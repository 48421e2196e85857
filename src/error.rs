//! Error types for deck editing and catalog setup.

use thiserror::Error;

use crate::cards::CardId;
use crate::deck::Zone;

/// Errors raised by catalog setup, configuration and deck operations.
///
/// Search and placement never produce these: a malformed comparator or
/// query degrades to "no filter", and a rejected insertion is reported as
/// `false` so callers can walk a fallback chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// A zone index did not refer to an existing entry.
    #[error("Index {index} out of range for {zone} zone (len: {len})")]
    IndexOutOfRange { zone: Zone, index: usize, len: usize },

    /// A card identifier is not present in the database.
    #[error("{0} not found in card database")]
    UnknownCard(CardId),

    /// A card identifier was registered twice.
    #[error("{0} already registered")]
    DuplicateCard(CardId),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The main zone holds fewer cards than the configured minimum.
    #[error("Main deck has {count} cards, at least {min} required")]
    MainTooSmall { count: usize, min: usize },

    /// A zone holds more cards than its base maximum.
    #[error("{zone} zone has {count} cards, at most {max} allowed")]
    ZoneTooLarge { zone: Zone, count: usize, max: usize },

    /// A forbidden card is present.
    #[error("{0} is forbidden")]
    Forbidden(CardId),

    /// More copies of a limit identity than its class allows.
    #[error("{card} appears {count} times, limit is {limit}")]
    TooManyCopies { card: CardId, count: usize, limit: usize },

    /// A card from a pool the ban list does not admit.
    #[error("{0} is not legal under this list's formats")]
    FormatMismatch(CardId),
}

/// Result alias for fallible deck operations.
pub type Result<T> = std::result::Result<T, DeckError>;

//! Core engine settings: configuration and deterministic RNG.

pub mod config;
pub mod rng;

pub use config::{
    DeckConfig, KeywordMode, SearchConfig, DECK_MAX_SIZE, DECK_MIN_SIZE, EXTRA_MAX_SIZE,
    SIDE_ALLOWANCE, SIDE_MAX_SIZE,
};
pub use rng::{DeckRng, DeckRngState};

//! Editing session: one deck being edited against a shared card pool.
//!
//! The session replaces what a UI would otherwise keep as global state:
//! the deck, the current search keyword, filter selections and result
//! pool, plus the siding/readonly switches. It is owned by the caller
//! and passed by `&mut` to every operation; the card database, ban list
//! and set name table are shared read-only.

use std::sync::Arc;

use super::model::{Deck, DeckSnapshot};
use super::zone::Zone;
use crate::banlist::{BanList, LimitChecker};
use crate::cards::{CardDatabase, CardId, SetCodeResolver};
use crate::core::{DeckConfig, DeckRng, DeckRngState, SearchConfig};
use crate::error::Result;
use crate::search::{self, FilterEngine, FilterParams, Query, SortKey};

/// State of one deck editing session.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use ccg_deckbuilder::banlist::BanList;
/// use ccg_deckbuilder::cards::{CardData, CardDatabase, CardId, CardString, NoSetCodes};
/// use ccg_deckbuilder::cards::types::TYPE_SPELL;
/// use ccg_deckbuilder::core::DeckConfig;
/// use ccg_deckbuilder::deck::{EditingSession, Zone};
///
/// let mut db = CardDatabase::new();
/// db.register(CardData::new(CardId::new(1), TYPE_SPELL), CardString::new("Raigeki", "")).unwrap();
///
/// let mut session = EditingSession::new(
///     Arc::new(db),
///     Arc::new(BanList::default()),
///     Arc::new(NoSetCodes),
///     DeckConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(session.search("rai"), &[CardId::new(1)]);
/// assert!(session.insert(Zone::Main, CardId::new(1), None));
/// assert!(session.is_modified());
/// ```
#[derive(Clone)]
pub struct EditingSession {
    db: Arc<CardDatabase>,
    banlist: Arc<BanList>,
    setcodes: Arc<dyn SetCodeResolver>,
    config: DeckConfig,

    /// Keyword splitting and instant search settings.
    pub search_config: SearchConfig,

    /// Attribute filter selections.
    pub filter: FilterParams,

    /// Result ordering.
    pub sort_key: SortKey,

    deck: Deck,
    saved: Deck,
    keyword: String,
    results: Vec<CardId>,
    siding: bool,
    readonly: bool,
    rng: DeckRng,
}

impl std::fmt::Debug for EditingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditingSession")
            .field("config", &self.config)
            .field("deck", &self.deck)
            .field("keyword", &self.keyword)
            .field("results", &self.results.len())
            .field("siding", &self.siding)
            .field("readonly", &self.readonly)
            .finish_non_exhaustive()
    }
}

impl EditingSession {
    /// Start a session with an empty deck.
    ///
    /// Fails if `config` has a zero or inconsistent limit.
    pub fn new(
        db: Arc<CardDatabase>,
        banlist: Arc<BanList>,
        setcodes: Arc<dyn SetCodeResolver>,
        config: DeckConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            db,
            banlist,
            setcodes,
            config,
            search_config: SearchConfig::default(),
            filter: FilterParams::default(),
            sort_key: SortKey::default(),
            deck: Deck::new(),
            saved: Deck::new(),
            keyword: String::new(),
            results: Vec::new(),
            siding: false,
            readonly: false,
            rng: DeckRng::default(),
        })
    }

    #[must_use]
    pub fn with_search_config(mut self, search_config: SearchConfig) -> Self {
        self.search_config = search_config;
        self
    }

    /// Seed the shuffle stream.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = DeckRng::new(seed);
        self
    }

    /// Resume a shuffle stream saved with `rng_state`.
    #[must_use]
    pub fn with_rng_state(mut self, state: &DeckRngState) -> Self {
        self.rng = DeckRng::from_state(state);
        self
    }

    /// Position of the shuffle stream, for checkpointing a session.
    #[must_use]
    pub fn rng_state(&self) -> DeckRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn db(&self) -> &CardDatabase {
        &self.db
    }

    #[must_use]
    pub fn banlist(&self) -> &BanList {
        &self.banlist
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Swap the ban list, e.g. when the user picks another format.
    pub fn set_banlist(&mut self, banlist: Arc<BanList>) {
        self.banlist = banlist;
    }

    /// Siding between games: zones get `SIDE_ALLOWANCE` extra room and
    /// quick moves rotate cards between zones.
    pub fn set_siding(&mut self, siding: bool) {
        self.siding = siding;
    }

    #[must_use]
    pub fn is_siding(&self) -> bool {
        self.siding
    }

    /// Readonly sessions (browsing a pack or a bundled deck) ignore every
    /// deck edit coming from the pointer.
    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    #[must_use]
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Current capacity of a zone.
    #[must_use]
    pub fn capacity(&self, zone: Zone) -> usize {
        self.config.capacity(zone, self.siding)
    }

    // ---------------------------------------------------------------------
    // Search
    // ---------------------------------------------------------------------

    /// The keyword the current results were produced for.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The current result pool.
    #[must_use]
    pub fn results(&self) -> &[CardId] {
        &self.results
    }

    /// Card at `index` in the result pool.
    #[must_use]
    pub fn pool_card(&self, index: usize) -> Option<CardId> {
        self.results.get(index).copied()
    }

    /// Run a search with the current filter selections and sort key.
    pub fn search(&mut self, keyword: &str) -> &[CardId] {
        self.keyword = keyword.to_string();
        let query = Query::parse(keyword, self.search_config.keyword_mode, self.setcodes.as_ref());
        self.results = FilterEngine::new(&self.db, &self.banlist).run(&query, &self.filter);
        self.sort_results();
        &self.results
    }

    /// Keyword edited: search again if instant search is on and the
    /// keyword is long enough. Returns whether a search ran.
    pub fn keyword_changed(&mut self, keyword: &str) -> bool {
        if !self.search_config.should_auto_search(keyword) {
            return false;
        }
        self.search(keyword);
        true
    }

    /// Re-sort the result pool, e.g. after `sort_key` changed.
    pub fn sort_results(&mut self) {
        search::sort_results(&mut self.results, self.sort_key, &self.keyword, &self.db);
    }

    /// Reset the attribute filters, keeping the type family.
    pub fn clear_filter(&mut self) {
        self.filter.clear_attributes();
    }

    /// Reset every filter, the keyword and the result pool.
    pub fn clear_search(&mut self) {
        self.filter = FilterParams::default();
        self.keyword.clear();
        self.results.clear();
    }

    // ---------------------------------------------------------------------
    // Deck edits
    // ---------------------------------------------------------------------

    /// Remaining-copies check for a card; unknown cards never pass.
    #[must_use]
    pub fn check_limit(&self, id: CardId) -> bool {
        self.db
            .get(id)
            .is_some_and(|card| LimitChecker::new(&self.db, &self.banlist).check(&self.deck, card))
    }

    /// Insert a card into a zone at `index` (or the end).
    ///
    /// Copy limits are not checked here; callers adding a new copy check
    /// `check_limit` first.
    pub fn insert(&mut self, zone: Zone, id: CardId, index: Option<usize>) -> bool {
        let capacity = self.capacity(zone);
        match self.db.get(id) {
            Some(card) => self.deck.insert(zone, card, index, capacity),
            None => false,
        }
    }

    /// Remove the card at `index` from a zone.
    pub fn remove(&mut self, zone: Zone, index: usize) -> Result<CardId> {
        self.deck.remove(zone, index)
    }

    /// Put a dragged card back into the slot it was lifted from.
    pub(crate) fn restore(&mut self, zone: Zone, id: CardId, index: usize) {
        self.deck.restore(zone, id, index);
    }

    /// Move the first copy of a card from one zone to the end of another.
    pub fn move_card(&mut self, id: CardId, from: Zone, to: Zone) -> bool {
        let capacity = self.capacity(to);
        match self.db.get(id) {
            Some(card) => self.deck.move_card(card, from, to, capacity),
            None => false,
        }
    }

    /// Append a card to the first zone in `chain` that takes it.
    pub fn push_chain(&mut self, id: CardId, chain: &[Zone]) -> Option<Zone> {
        chain
            .iter()
            .copied()
            .find(|&zone| self.insert(zone, id, None))
    }

    /// Replace the deck with one loaded from elsewhere.
    pub fn load_deck(&mut self, deck: Deck) {
        tracing::debug!(cards = deck.total_len(), "deck loaded");
        self.deck = deck;
        self.deck.mark_saved();
        self.saved = self.deck.clone();
    }

    pub fn clear_deck(&mut self) {
        tracing::debug!("deck cleared");
        self.deck.clear();
    }

    /// Sort every zone by level.
    pub fn sort_deck(&mut self) {
        tracing::debug!("deck sorted");
        self.deck.sort_zones(&self.db);
    }

    /// Shuffle the main zone with the session's seeded stream.
    pub fn shuffle_deck(&mut self) {
        tracing::debug!(seed = self.rng.seed(), "main zone shuffled");
        self.deck.shuffle_main(&mut self.rng);
    }

    /// Whether the deck has unsaved changes.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.deck.is_modified()
    }

    /// Record the current deck as saved.
    pub fn mark_saved(&mut self) {
        self.deck.mark_saved();
        self.saved = self.deck.clone();
    }

    /// Drop unsaved changes.
    pub fn revert(&mut self) {
        self.deck = self.saved.clone();
    }

    /// Export view of the deck.
    #[must_use]
    pub fn snapshot(&self) -> DeckSnapshot {
        self.deck.snapshot()
    }

    /// Check the deck is legal under the session's ban list and limits.
    pub fn validate(&self) -> Result<()> {
        self.deck.check(&self.db, &self.banlist, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banlist::LimitClass;
    use crate::cards::types::{TYPE_EFFECT, TYPE_FUSION, TYPE_MONSTER, TYPE_SPELL};
    use crate::cards::{CardData, CardString, NoSetCodes};
    use crate::core::KeywordMode;
    use crate::error::DeckError;

    fn session() -> EditingSession {
        let mut db = CardDatabase::new();
        db.register(
            CardData::new(CardId::new(1), TYPE_MONSTER | TYPE_EFFECT).with_level(4),
            CardString::new("Dragon Knight", ""),
        )
        .unwrap();
        db.register(
            CardData::new(CardId::new(2), TYPE_MONSTER | TYPE_FUSION).with_level(8),
            CardString::new("Dragon", ""),
        )
        .unwrap();
        db.register(CardData::new(CardId::new(3), TYPE_SPELL), CardString::new("Raigeki", ""))
            .unwrap();
        let list = BanList::new("test").with_limit(CardId::new(3), LimitClass::Limited);

        EditingSession::new(
            Arc::new(db),
            Arc::new(list),
            Arc::new(NoSetCodes),
            DeckConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = EditingSession::new(
            Arc::new(CardDatabase::new()),
            Arc::new(BanList::default()),
            Arc::new(NoSetCodes),
            DeckConfig::default().with_main_max(0),
        );
        assert!(matches!(result, Err(DeckError::InvalidConfig(_))));
    }

    #[test]
    fn test_search_sorts_exact_name_first() {
        let mut s = session();
        assert_eq!(s.search("Dragon"), &[CardId::new(2), CardId::new(1)]);
        assert_eq!(s.keyword(), "Dragon");
        assert_eq!(s.pool_card(1), Some(CardId::new(1)));
        assert_eq!(s.pool_card(5), None);
    }

    #[test]
    fn test_sort_results_by_name() {
        let mut s = session();
        s.search("");
        assert_eq!(s.results(), &[CardId::new(2), CardId::new(1), CardId::new(3)]);

        s.sort_key = SortKey::Name;
        s.sort_results();
        assert_eq!(s.results(), &[CardId::new(2), CardId::new(1), CardId::new(3)]);
    }

    #[test]
    fn test_keyword_changed_respects_limit() {
        let mut s = session().with_search_config(
            SearchConfig::default()
                .with_keyword_mode(KeywordMode::Single)
                .with_auto_search_limit(3),
        );
        assert!(!s.keyword_changed("dr"));
        assert!(s.results().is_empty());

        assert!(s.keyword_changed("rai"));
        assert_eq!(s.results(), &[CardId::new(3)]);
    }

    #[test]
    fn test_clear_search() {
        let mut s = session();
        s.filter = s.filter.clone().with_attack(">1000");
        s.search("dragon");
        s.clear_search();

        assert!(s.results().is_empty());
        assert_eq!(s.keyword(), "");
        assert_eq!(s.filter, FilterParams::default());
    }

    #[test]
    fn test_insert_routes_and_unknown() {
        let mut s = session();
        assert!(!s.insert(Zone::Main, CardId::new(2), None));
        assert!(s.insert(Zone::Extra, CardId::new(2), None));
        assert!(!s.insert(Zone::Main, CardId::new(42), None));
    }

    #[test]
    fn test_push_chain() {
        let mut s = session();
        assert_eq!(s.push_chain(CardId::new(2), &[Zone::Main, Zone::Extra]), Some(Zone::Extra));
        assert_eq!(s.push_chain(CardId::new(1), &[Zone::Extra, Zone::Main]), Some(Zone::Main));
        assert_eq!(s.push_chain(CardId::new(1), &[Zone::Extra]), None);
    }

    #[test]
    fn test_check_limit() {
        let mut s = session();
        assert!(s.check_limit(CardId::new(3)));
        s.insert(Zone::Side, CardId::new(3), None);
        assert!(!s.check_limit(CardId::new(3)));
        assert!(!s.check_limit(CardId::new(42)));
    }

    #[test]
    fn test_siding_relaxes_capacity() {
        let mut s = session();
        assert_eq!(s.capacity(Zone::Side), 15);
        s.set_siding(true);
        assert_eq!(s.capacity(Zone::Side), 20);
    }

    #[test]
    fn test_revert_and_mark_saved() {
        let mut s = session();
        s.load_deck(Deck::from_zones(vec![CardId::new(1)], vec![], vec![]));
        assert!(!s.is_modified());

        s.insert(Zone::Main, CardId::new(3), None);
        assert!(s.is_modified());
        s.revert();
        assert!(!s.is_modified());
        assert_eq!(s.deck().len(Zone::Main), 1);

        s.insert(Zone::Side, CardId::new(3), None);
        s.mark_saved();
        s.clear_deck();
        s.revert();
        assert_eq!(s.deck().len(Zone::Side), 1);
    }

    #[test]
    fn test_rng_state_resumes_shuffles() {
        let main: Vec<CardId> = (1..=20).map(CardId::new).collect();
        let mut first = session().with_seed(11);
        first.load_deck(Deck::from_zones(main, vec![], vec![]));
        first.shuffle_deck();

        let state = first.rng_state();
        assert_eq!(state.seed, 11);
        let checkpoint = first.deck().clone();
        first.shuffle_deck();

        let mut resumed = session().with_rng_state(&state);
        resumed.load_deck(checkpoint);
        resumed.shuffle_deck();
        assert_eq!(resumed.deck().zone(Zone::Main), first.deck().zone(Zone::Main));
        assert_eq!(resumed.rng_state(), first.rng_state());
    }

    #[test]
    fn test_move_card() {
        let mut s = session();
        s.insert(Zone::Main, CardId::new(1), None);
        assert!(s.move_card(CardId::new(1), Zone::Main, Zone::Side));
        assert_eq!(s.snapshot().side, vec![(Zone::Side, CardId::new(1))]);
        assert!(!s.move_card(CardId::new(1), Zone::Side, Zone::Extra));
    }
}

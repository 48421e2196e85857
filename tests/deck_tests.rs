//! Deck model, copy limit and editing session integration tests.

use std::sync::Arc;

use ccg_deckbuilder::banlist::{BanList, LimitChecker, LimitClass};
use ccg_deckbuilder::cards::types::{
    RULE_DIY, RULE_OCG, TYPE_EFFECT, TYPE_LINK, TYPE_MONSTER, TYPE_SPELL, TYPE_TRAP,
};
use ccg_deckbuilder::cards::{CardData, CardDatabase, CardId, CardString, NoSetCodes};
use ccg_deckbuilder::core::{DeckConfig, DECK_MAX_SIZE, SIDE_ALLOWANCE};
use ccg_deckbuilder::deck::{Deck, DeckSnapshot, EditingSession, Zone};
use ccg_deckbuilder::error::DeckError;

const LINK: CardId = CardId(100);
const LIMITED: CardId = CardId(200);
const REPRINT: CardId = CardId(201);

/// Database with a link monster, a limited spell and its reprint, and
/// 60 plain monsters (ids 1..=60).
fn database() -> CardDatabase {
    let mut db = CardDatabase::new();
    for raw in 1..=60 {
        db.register(
            CardData::new(CardId::new(raw), TYPE_MONSTER | TYPE_EFFECT)
                .with_level(raw % 12 + 1)
                .with_rule(RULE_OCG),
            CardString::new(format!("Monster {raw:02}"), ""),
        )
        .unwrap();
    }
    db.register(
        CardData::new(LINK, TYPE_MONSTER | TYPE_LINK).with_level(2).with_rule(RULE_OCG),
        CardString::new("Link", ""),
    )
    .unwrap();
    db.register(
        CardData::new(LIMITED, TYPE_SPELL).with_rule(RULE_OCG),
        CardString::new("Limited Spell", ""),
    )
    .unwrap();
    db.register(
        CardData::new(REPRINT, TYPE_SPELL).with_alias(LIMITED).with_rule(RULE_OCG),
        CardString::new("Limited Spell (reprint)", ""),
    )
    .unwrap();
    db
}

fn banlist() -> BanList {
    BanList::new("current").with_limit(LIMITED, LimitClass::Limited)
}

fn session(config: DeckConfig) -> EditingSession {
    EditingSession::new(Arc::new(database()), Arc::new(banlist()), Arc::new(NoSetCodes), config)
        .unwrap()
}

// =============================================================================
// Zone Routing and Capacity
// =============================================================================

/// Link monsters never go to main; extra takes them until it is full.
#[test]
fn test_link_routing() {
    let mut s = session(DeckConfig::default());
    assert!(!s.insert(Zone::Main, LINK, None));
    for _ in 0..15 {
        assert!(s.insert(Zone::Extra, LINK, None));
    }
    assert!(!s.insert(Zone::Extra, LINK, None));
    assert_eq!(s.deck().len(Zone::Main), 0);
}

/// A full zone takes five more cards while siding, and no more.
#[test]
fn test_relaxed_capacity() {
    let mut s = session(DeckConfig::default());
    for raw in 1..=DECK_MAX_SIZE as u32 {
        assert!(s.insert(Zone::Main, CardId::new(raw), None));
    }
    assert!(!s.insert(Zone::Main, CardId::new(1), None));

    s.set_siding(true);
    for _ in 0..SIDE_ALLOWANCE {
        assert!(s.insert(Zone::Main, CardId::new(1), None));
    }
    assert!(!s.insert(Zone::Main, CardId::new(1), None));
    assert_eq!(s.deck().len(Zone::Main), DECK_MAX_SIZE + SIDE_ALLOWANCE);
}

/// With a 40 card main cap, the 41st card is rejected.
#[test]
fn test_main_cap_of_forty() {
    let mut s = session(DeckConfig::default().with_main_max(40));
    for raw in 1..=40 {
        assert!(s.insert(Zone::Main, CardId::new(raw), None));
    }
    assert!(!s.insert(Zone::Main, CardId::new(41), None));
    assert_eq!(s.deck().len(Zone::Main), 40);
}

/// Removing past the end fails and leaves the deck alone.
#[test]
fn test_remove_out_of_range() {
    let mut s = session(DeckConfig::default());
    s.insert(Zone::Side, LIMITED, None);
    let err = s.remove(Zone::Side, 3).unwrap_err();
    assert_eq!(
        err,
        DeckError::IndexOutOfRange {
            zone: Zone::Side,
            index: 3,
            len: 1
        }
    );
    assert_eq!(s.deck().len(Zone::Side), 1);
}

// =============================================================================
// Copy Limits
// =============================================================================

/// One limited copy anywhere blocks another copy and its reprint.
#[test]
fn test_limited_copy_blocks_alias() {
    let db = database();
    let list = banlist();
    let checker = LimitChecker::new(&db, &list);
    let mut deck = Deck::new();

    let original = db.get(LIMITED).unwrap();
    let reprint = db.get(REPRINT).unwrap();
    assert!(checker.check(&deck, original));

    assert!(deck.insert(Zone::Side, original, None, 15));
    assert!(!checker.check(&deck, original));
    assert!(!checker.check(&deck, reprint));

    let mut deck = Deck::new();
    assert!(deck.insert(Zone::Main, reprint, None, 60));
    assert!(!checker.check(&deck, original));
    assert_eq!(checker.remaining(&deck, reprint), 0);
}

// =============================================================================
// Validation
// =============================================================================

/// Deck checks report sizes, then per-card legality.
#[test]
fn test_validate() {
    let mut s = session(DeckConfig::default());
    assert_eq!(s.validate(), Err(DeckError::MainTooSmall { count: 0, min: 40 }));

    for raw in 1..=40 {
        s.insert(Zone::Main, CardId::new(raw), None);
    }
    assert_eq!(s.validate(), Ok(()));

    s.insert(Zone::Side, LIMITED, None);
    s.insert(Zone::Side, REPRINT, None);
    assert_eq!(
        s.validate(),
        Err(DeckError::TooManyCopies {
            card: LIMITED,
            count: 2,
            limit: 1
        })
    );
}

/// An OCG-only list rejects custom cards; forbidden cards are reported.
#[test]
fn test_validate_formats_and_forbidden() {
    let mut db = database();
    db.register(
        CardData::new(CardId::new(900), TYPE_TRAP).with_rule(RULE_DIY),
        CardString::new("Homebrew", ""),
    )
    .unwrap();
    let main: Vec<CardId> = (1..=40).map(CardId::new).collect();
    let config = DeckConfig::default();

    let deck = Deck::from_zones(main.clone(), vec![], vec![CardId::new(900)]);
    assert_eq!(
        deck.check(&db, &banlist(), &config),
        Err(DeckError::FormatMismatch(CardId::new(900)))
    );
    let diy = banlist().with_formats(true, true);
    assert_eq!(deck.check(&db, &diy, &config), Ok(()));

    let list = banlist().with_limit(CardId::new(7), LimitClass::Forbidden);
    let deck = Deck::from_zones(main, vec![], vec![]);
    assert_eq!(deck.check(&db, &list, &config), Err(DeckError::Forbidden(CardId::new(7))));
}

// =============================================================================
// Session Operations
// =============================================================================

/// Shuffles are reproducible for a given seed.
#[test]
fn test_shuffle_is_seeded() {
    let main: Vec<CardId> = (1..=40).map(CardId::new).collect();
    let shuffled = |seed| {
        let mut s = session(DeckConfig::default()).with_seed(seed);
        s.load_deck(Deck::from_zones(main.clone(), vec![], vec![]));
        s.shuffle_deck();
        s.deck().zone(Zone::Main).iter().copied().collect::<Vec<_>>()
    };

    assert_eq!(shuffled(7), shuffled(7));
    assert_ne!(shuffled(7), main);

    let mut sorted = shuffled(7);
    sorted.sort();
    assert_eq!(sorted, main);
}

/// Sorting the deck orders every zone by level, highest first.
#[test]
fn test_sort_deck() {
    let mut s = session(DeckConfig::default());
    s.load_deck(Deck::from_zones(
        vec![CardId::new(1), LIMITED, CardId::new(11)],
        vec![],
        vec![REPRINT, CardId::new(5)],
    ));
    s.sort_deck();

    // Levels: 11 -> 12, 1 -> 2, 5 -> 6.
    let main: Vec<CardId> = s.deck().zone(Zone::Main).iter().copied().collect();
    assert_eq!(main, vec![CardId::new(11), CardId::new(1), LIMITED]);
    let side: Vec<CardId> = s.deck().zone(Zone::Side).iter().copied().collect();
    assert_eq!(side, vec![CardId::new(5), REPRINT]);
    assert!(s.is_modified());
}

/// Snapshots list main then extra, and survive a JSON round trip.
#[test]
fn test_snapshot_json() {
    let mut s = session(DeckConfig::default());
    s.insert(Zone::Extra, LINK, None);
    s.insert(Zone::Main, CardId::new(3), None);
    s.insert(Zone::Side, LIMITED, None);

    let snapshot = s.snapshot();
    assert_eq!(snapshot.main, vec![(Zone::Main, CardId::new(3)), (Zone::Extra, LINK)]);
    assert_eq!(snapshot.side, vec![(Zone::Side, LIMITED)]);

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: DeckSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

/// Configs deserialize with defaults for missing fields.
#[test]
fn test_config_from_json() {
    let config: DeckConfig = serde_json::from_str(r#"{"main_max": 40}"#).unwrap();
    assert_eq!(config, DeckConfig::default().with_main_max(40));
    assert!(config.validate().is_ok());

    let bad: DeckConfig = serde_json::from_str(r#"{"main_min": 70}"#).unwrap();
    assert!(matches!(bad.validate(), Err(DeckError::InvalidConfig(_))));
}

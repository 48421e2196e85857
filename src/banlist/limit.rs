//! Copy-limit checks against a ban list.

use super::list::BanList;
use crate::cards::{CardData, CardDatabase, CardId};
use crate::deck::Deck;

/// Counts remaining legal copies of a card across every deck zone.
///
/// A card and its reprints share one limit: copies are counted by the
/// card's limit identity (alias if declared, else its own id), and any
/// deck card whose id or alias equals that identity uses up a copy.
///
/// The checker never mutates the deck. Call it before any placement that
/// adds a copy (picking a card from the pool, duplicating a card).
#[derive(Clone, Copy, Debug)]
pub struct LimitChecker<'a> {
    db: &'a CardDatabase,
    banlist: &'a BanList,
}

impl<'a> LimitChecker<'a> {
    #[must_use]
    pub fn new(db: &'a CardDatabase, banlist: &'a BanList) -> Self {
        Self { db, banlist }
    }

    /// Copies of `limit_id` present across main, extra and side.
    #[must_use]
    pub fn copies_in_deck(&self, deck: &Deck, limit_id: CardId) -> usize {
        deck.iter_all()
            .filter(|&id| id == limit_id || self.db.get(id).is_some_and(|card| card.counts_as(limit_id)))
            .count()
    }

    /// Copies of `card` that may still be added; negative when the deck
    /// is already over the limit.
    #[must_use]
    pub fn remaining(&self, deck: &Deck, card: &CardData) -> i64 {
        let limit_id = card.limit_id();
        let allowed = self.banlist.limit_of(limit_id).copies() as i64;
        allowed - self.copies_in_deck(deck, limit_id) as i64
    }

    /// Whether one more copy of `card` may be added.
    #[must_use]
    pub fn check(&self, deck: &Deck, card: &CardData) -> bool {
        self.remaining(deck, card) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banlist::LimitClass;
    use crate::cards::types::TYPE_SPELL;
    use crate::cards::CardString;
    use crate::deck::Zone;

    fn setup() -> (CardDatabase, BanList) {
        let mut db = CardDatabase::new();
        db.register(
            CardData::new(CardId::new(100), TYPE_SPELL),
            CardString::new("Raigeki", ""),
        )
        .unwrap();
        db.register(
            CardData::new(CardId::new(101), TYPE_SPELL).with_alias(CardId::new(100)),
            CardString::new("Raigeki", ""),
        )
        .unwrap();
        db.register(
            CardData::new(CardId::new(200), TYPE_SPELL),
            CardString::new("Mystical Space Typhoon", ""),
        )
        .unwrap();

        let list = BanList::new("test").with_limit(CardId::new(100), LimitClass::Limited);
        (db, list)
    }

    #[test]
    fn test_unlimited_allows_three() {
        let (db, list) = setup();
        let checker = LimitChecker::new(&db, &list);
        let mst = db.get(CardId::new(200)).unwrap();
        let mut deck = Deck::new();

        for _ in 0..3 {
            assert!(checker.check(&deck, mst));
            assert!(deck.insert(Zone::Main, mst, None, 60));
        }
        assert!(!checker.check(&deck, mst));
        assert_eq!(checker.remaining(&deck, mst), 0);
    }

    #[test]
    fn test_limited_counts_side_zone() {
        let (db, list) = setup();
        let checker = LimitChecker::new(&db, &list);
        let raigeki = db.get(CardId::new(100)).unwrap();
        let mut deck = Deck::new();

        assert!(checker.check(&deck, raigeki));
        assert!(deck.insert(Zone::Side, raigeki, None, 15));
        assert!(!checker.check(&deck, raigeki));
    }

    #[test]
    fn test_alias_shares_limit() {
        let (db, list) = setup();
        let checker = LimitChecker::new(&db, &list);
        let raigeki = db.get(CardId::new(100)).unwrap();
        let reprint = db.get(CardId::new(101)).unwrap();
        let mut deck = Deck::new();

        assert!(deck.insert(Zone::Main, reprint, None, 60));
        assert_eq!(checker.copies_in_deck(&deck, CardId::new(100)), 1);
        assert!(!checker.check(&deck, raigeki));
        assert!(!checker.check(&deck, reprint));
    }

    #[test]
    fn test_unknown_ids_count_only_themselves() {
        let (db, list) = setup();
        let checker = LimitChecker::new(&db, &list);
        let deck = Deck::from_zones(vec![CardId::new(100), CardId::new(999)], vec![], vec![CardId::new(101)]);

        assert_eq!(checker.copies_in_deck(&deck, CardId::new(100)), 2);
        assert_eq!(checker.copies_in_deck(&deck, CardId::new(999)), 1);
        assert_eq!(checker.copies_in_deck(&deck, CardId::new(200)), 0);
    }

    #[test]
    fn test_forbidden_never_passes() {
        let (db, _) = setup();
        let list = BanList::new("test").with_limit(CardId::new(200), LimitClass::Forbidden);
        let checker = LimitChecker::new(&db, &list);
        let mst = db.get(CardId::new(200)).unwrap();

        assert!(!checker.check(&Deck::new(), mst));
    }
}

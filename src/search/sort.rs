//! Result ordering.
//!
//! Sorting happens in two phases: cards whose name is exactly the typed
//! keyword jump to the front (in their original order), then the rest is
//! stable-sorted by the selected key. Every comparator ends in name and
//! id, so repeated sorts of the same input are identical.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::types::{TYPES_BASIC, TYPE_MONSTER};
use crate::cards::{CardData, CardDatabase, CardId};

/// Sort key selected in the result panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Level/rank, highest first.
    #[default]
    Level,
    /// Attack, highest first.
    Attack,
    /// Defense, highest first.
    Defense,
    /// Name only.
    Name,
}

/// Compare two cards for `key`.
///
/// Monsters come before spells before traps. Within monsters the key
/// orders descending; spells and traps order by their sub-type bits.
/// Ties fall back to name, then id. Unknown cards sort last.
#[must_use]
pub fn compare_cards(db: &CardDatabase, a: CardId, b: CardId, key: SortKey) -> Ordering {
    match (db.get(a), db.get(b)) {
        (Some(ca), Some(cb)) => {
            let by_kind = if key == SortKey::Name {
                Ordering::Equal
            } else {
                compare_kind(ca, cb, key)
            };
            by_kind
                .then_with(|| db.name(a).unwrap_or("").cmp(db.name(b).unwrap_or("")))
                .then_with(|| a.cmp(&b))
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(&b),
    }
}

fn compare_kind(a: &CardData, b: &CardData, key: SortKey) -> Ordering {
    let basic = (a.card_type & TYPES_BASIC).cmp(&(b.card_type & TYPES_BASIC));
    if basic != Ordering::Equal {
        return basic;
    }
    if a.card_type & TYPE_MONSTER == 0 {
        return (a.card_type & !TYPES_BASIC).cmp(&(b.card_type & !TYPES_BASIC));
    }
    // Descending: compare b to a.
    match key {
        SortKey::Level => b.level.cmp(&a.level),
        SortKey::Attack => b.attack.cmp(&a.attack),
        SortKey::Defense => b.defense.cmp(&a.defense),
        SortKey::Name => Ordering::Equal,
    }
}

/// Move cards named exactly `anchor` to the front, keeping their order.
///
/// Returns the number of exact matches.
pub fn partition_exact_name(results: &mut [CardId], anchor: &str, db: &CardDatabase) -> usize {
    let mut left = 0;
    for i in 0..results.len() {
        if db.name(results[i]) == Some(anchor) {
            results.swap(left, i);
            left += 1;
        }
    }
    left
}

/// Order a result set: exact-name matches for `anchor` first, the rest
/// by `key`.
pub fn sort_results(results: &mut [CardId], key: SortKey, anchor: &str, db: &CardDatabase) {
    let left = partition_exact_name(results, anchor, db);
    results[left..].sort_by(|a, b| compare_cards(db, *a, *b, key));
}

//! Card type, rule and move-marker bit constants.
//!
//! Card categories are plain bitmasks. A card can carry several flags at
//! once (an effect synchro tuner monster, a quick-play spell), so checks
//! are written as mask tests rather than an enum match.

/// Monster card.
pub const TYPE_MONSTER: u32 = 0x1;
/// Spell ("call") card.
pub const TYPE_SPELL: u32 = 0x2;
/// Trap ("bane") card.
pub const TYPE_TRAP: u32 = 0x4;
pub const TYPE_NORMAL: u32 = 0x10;
pub const TYPE_EFFECT: u32 = 0x20;
pub const TYPE_FUSION: u32 = 0x40;
pub const TYPE_RITUAL: u32 = 0x80;
pub const TYPE_TRAPMONSTER: u32 = 0x100;
pub const TYPE_SPIRIT: u32 = 0x200;
pub const TYPE_UNION: u32 = 0x400;
pub const TYPE_DUAL: u32 = 0x800;
pub const TYPE_TUNER: u32 = 0x1000;
pub const TYPE_SYNCHRO: u32 = 0x2000;
pub const TYPE_TOKEN: u32 = 0x4000;
pub const TYPE_QUICKPLAY: u32 = 0x10000;
pub const TYPE_CONTINUOUS: u32 = 0x20000;
pub const TYPE_EQUIP: u32 = 0x40000;
/// Field spell ("area") card.
pub const TYPE_FIELD: u32 = 0x80000;
pub const TYPE_COUNTER: u32 = 0x100000;
pub const TYPE_FLIP: u32 = 0x200000;
pub const TYPE_TOON: u32 = 0x400000;
pub const TYPE_XYZ: u32 = 0x800000;
pub const TYPE_PENDULUM: u32 = 0x1000000;
pub const TYPE_SPSUMMON: u32 = 0x2000000;
pub const TYPE_LINK: u32 = 0x4000000;

/// Bits that mark the basic kind (monster / spell / trap).
pub const TYPES_BASIC: u32 = TYPE_MONSTER | TYPE_SPELL | TYPE_TRAP;

/// Monster kinds that live in the extra zone.
pub const TYPES_EXTRA_DECK: u32 = TYPE_FUSION | TYPE_SYNCHRO | TYPE_XYZ | TYPE_LINK;

/// Card is legal in the OCG pool.
pub const RULE_OCG: u32 = 0x1;
/// Card is a custom (DIY) card.
pub const RULE_DIY: u32 = 0x2;

pub const MARKER_BOTTOM_LEFT: u32 = 0x001;
pub const MARKER_BOTTOM: u32 = 0x002;
pub const MARKER_BOTTOM_RIGHT: u32 = 0x004;
pub const MARKER_LEFT: u32 = 0x008;
pub const MARKER_RIGHT: u32 = 0x020;
pub const MARKER_TOP_LEFT: u32 = 0x040;
pub const MARKER_TOP: u32 = 0x080;
pub const MARKER_TOP_RIGHT: u32 = 0x100;

/// Attack/defense value shown as "?".
pub const UNKNOWN_STAT: i32 = -2;

/// Maximum code distance between a card and an alternative artwork of it.
pub const ALT_ARTWORK_OFFSET: u32 = 20;

/// Whether a card with `alias` is an alternative artwork of the card it
/// points to, as opposed to an errata'd reprint with an unrelated code.
#[must_use]
pub fn is_alternative(code: u32, alias: u32) -> bool {
    alias != 0 && code.abs_diff(alias) < ALT_ARTWORK_OFFSET
}

//! Numeric comparator filters (`>=2000`, `<4`, `?`).
//!
//! Attribute boxes in the search panel accept a tiny grammar: an optional
//! comparison operator followed by digits, or `?` for "unknown". Anything
//! else means "no filter", never an error.

use serde::{Deserialize, Serialize};

use crate::cards::types::UNKNOWN_STAT;

/// Comparison operator of a numeric filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    /// No filter.
    #[default]
    None,
    Equal,
    GreaterEqual,
    Greater,
    LessEqual,
    Less,
    /// `?`: the value is unknown.
    Unknown,
}

/// Parsed numeric filter.
///
/// ```
/// use ccg_deckbuilder::search::{CompareOp, Comparator};
///
/// let c = Comparator::parse(">=2000");
/// assert_eq!(c.op, CompareOp::GreaterEqual);
/// assert_eq!(c.operand, 2000);
/// assert!(c.matches_attack(2500));
/// assert!(!c.matches_attack(1900));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comparator {
    pub op: CompareOp,
    pub operand: i32,
}

/// Leading decimal digits of `s` as a number, 0 if there are none.
fn leading_number(s: &str) -> i32 {
    s.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, b| acc.saturating_mul(10).saturating_add(i32::from(b - b'0')))
}

impl Comparator {
    /// Filter that matches everything.
    pub const NONE: Comparator = Comparator {
        op: CompareOp::None,
        operand: 0,
    };

    #[must_use]
    pub const fn new(op: CompareOp, operand: i32) -> Self {
        Self { op, operand }
    }

    /// Parse filter text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let (op, rest) = if let Some(rest) = text.strip_prefix(">=") {
            (CompareOp::GreaterEqual, rest)
        } else if let Some(rest) = text.strip_prefix('>') {
            (CompareOp::Greater, rest)
        } else if let Some(rest) = text.strip_prefix("<=") {
            (CompareOp::LessEqual, rest)
        } else if let Some(rest) = text.strip_prefix('<') {
            (CompareOp::Less, rest)
        } else if let Some(rest) = text.strip_prefix('=') {
            (CompareOp::Equal, rest)
        } else if text.starts_with(|c: char| c.is_ascii_digit()) {
            (CompareOp::Equal, text)
        } else if text.starts_with('?') {
            return Self::new(CompareOp::Unknown, 0);
        } else {
            return Self::NONE;
        };
        Self::new(op, leading_number(rest))
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.op != CompareOp::None
    }

    /// Ordered comparison shared by every attribute; `Unknown` is left to
    /// the caller.
    fn compare(&self, value: i32) -> bool {
        match self.op {
            CompareOp::None => true,
            CompareOp::Equal => value == self.operand,
            CompareOp::GreaterEqual => value >= self.operand,
            CompareOp::Greater => value > self.operand,
            CompareOp::LessEqual => value <= self.operand,
            CompareOp::Less => value < self.operand,
            CompareOp::Unknown => false,
        }
    }

    /// Match an attack or defense value.
    ///
    /// `Unknown` matches exactly the "?" value; upper-bound comparisons
    /// never match "?" even though it is stored as a negative number.
    #[must_use]
    pub fn matches_attack(&self, value: i32) -> bool {
        match self.op {
            CompareOp::Unknown => value == UNKNOWN_STAT,
            CompareOp::LessEqual | CompareOp::Less => value >= 0 && self.compare(value),
            _ => self.compare(value),
        }
    }

    /// Match a level, rank or pendulum scale. `Unknown` never matches.
    #[must_use]
    pub fn matches_level(&self, value: u32) -> bool {
        let value = i32::try_from(value).unwrap_or(i32::MAX);
        self.compare(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_grammar() {
        let cases = [
            ("", CompareOp::None, 0),
            ("=5", CompareOp::Equal, 5),
            ("5", CompareOp::Equal, 5),
            (">5", CompareOp::Greater, 5),
            (">=5", CompareOp::GreaterEqual, 5),
            ("<5", CompareOp::Less, 5),
            ("<=5", CompareOp::LessEqual, 5),
            ("?", CompareOp::Unknown, 0),
        ];
        for (text, op, operand) in cases {
            assert_eq!(Comparator::parse(text), Comparator::new(op, operand), "input {text:?}");
        }
    }

    #[test]
    fn test_parse_malformed_is_no_filter() {
        assert_eq!(Comparator::parse("abc"), Comparator::NONE);
        assert_eq!(Comparator::parse("-5"), Comparator::NONE);
        assert!(!Comparator::parse("x>5").is_active());
    }

    #[test]
    fn test_parse_operator_without_digits() {
        assert_eq!(Comparator::parse(">="), Comparator::new(CompareOp::GreaterEqual, 0));
        assert_eq!(Comparator::parse("=x"), Comparator::new(CompareOp::Equal, 0));
        assert_eq!(Comparator::parse("12ab"), Comparator::new(CompareOp::Equal, 12));
    }

    #[test]
    fn test_attack_shapes() {
        let unknown = UNKNOWN_STAT;

        assert!(Comparator::parse("2000").matches_attack(2000));
        assert!(!Comparator::parse("2000").matches_attack(2100));

        assert!(Comparator::parse(">=2000").matches_attack(2000));
        assert!(!Comparator::parse(">=2000").matches_attack(unknown));

        assert!(Comparator::parse(">2000").matches_attack(2100));
        assert!(!Comparator::parse(">2000").matches_attack(2000));

        assert!(Comparator::parse("<=1000").matches_attack(0));
        assert!(!Comparator::parse("<=1000").matches_attack(unknown));

        assert!(Comparator::parse("<1000").matches_attack(500));
        assert!(!Comparator::parse("<1000").matches_attack(unknown));
        assert!(!Comparator::parse("<1000").matches_attack(1000));

        assert!(Comparator::parse("?").matches_attack(unknown));
        assert!(!Comparator::parse("?").matches_attack(0));

        assert!(Comparator::NONE.matches_attack(unknown));
    }

    #[test]
    fn test_level_shapes() {
        assert!(Comparator::parse("4").matches_level(4));
        assert!(Comparator::parse(">=4").matches_level(8));
        assert!(Comparator::parse("<=4").matches_level(0));
        assert!(!Comparator::parse("<4").matches_level(4));
        assert!(!Comparator::parse("?").matches_level(0));
        assert!(Comparator::NONE.matches_level(12));
    }

    proptest! {
        #[test]
        fn prop_operand_round_trips(n in 0i32..100_000) {
            prop_assert_eq!(Comparator::parse(&format!(">={n}")).operand, n);
            prop_assert_eq!(Comparator::parse(&n.to_string()), Comparator::new(CompareOp::Equal, n));
        }

        #[test]
        fn prop_equal_matches_only_itself(n in 0i32..10_000, v in 0i32..10_000) {
            let c = Comparator::new(CompareOp::Equal, n);
            prop_assert_eq!(c.matches_attack(v), n == v);
        }
    }
}

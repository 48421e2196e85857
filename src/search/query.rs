//! Keyword query parsing.
//!
//! A query is a list of elements that must all match. In multi-keyword
//! mode the keyword box is split on a separator; each token may carry:
//!
//! - `-` to exclude cards matching it,
//! - `$` to match names only, or `@` to match set codes only,
//! - a `"..."` quoted phrase that may contain the separator.
//!
//! There is no escaping. An unterminated quote runs to the end.

use serde::{Deserialize, Serialize};

use crate::cards::{SetCode, SetCodeResolver};
use crate::core::KeywordMode;

/// What part of a card an element is matched against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Name, rules text or set code.
    #[default]
    Any,
    /// Name only (`$` prefix).
    Name,
    /// Set code only (`@` prefix).
    SetCode,
}

/// One parsed unit of a query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryElement {
    /// Keyword text without prefixes or quotes.
    pub keyword: String,

    /// Set codes whose names contain the keyword, resolved at parse time.
    pub setcodes: Vec<SetCode>,

    pub kind: ElementKind,

    /// Negate the match result.
    pub exclude: bool,
}

/// A parsed search query.
///
/// ```
/// use ccg_deckbuilder::cards::NoSetCodes;
/// use ccg_deckbuilder::core::KeywordMode;
/// use ccg_deckbuilder::search::{ElementKind, Query};
///
/// let q = Query::parse(r#"$dragon -"white knight""#, KeywordMode::MultiSpace, &NoSetCodes);
/// assert_eq!(q.elements.len(), 2);
/// assert_eq!(q.elements[0].kind, ElementKind::Name);
/// assert_eq!(q.elements[1].keyword, "white knight");
/// assert!(q.elements[1].exclude);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// The keyword box text as typed; exact-name hits are sorted first.
    pub raw: String,

    /// Elements, all of which must match.
    pub elements: Vec<QueryElement>,

    /// Card code when the whole query is a bare number.
    pub code: Option<u32>,
}

impl Query {
    /// Parse keyword text.
    #[must_use]
    pub fn parse(raw: &str, mode: KeywordMode, setcodes: &dyn SetCodeResolver) -> Self {
        let mut elements = match mode.separator() {
            Some(separator) => split_elements(raw, separator),
            None => single_element(raw).into_iter().collect(),
        };
        for element in &mut elements {
            element.setcodes = setcodes.resolve_setcodes(&element.keyword);
        }

        let trimmed = raw.trim();
        let code = if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            trimmed.parse::<u32>().ok().filter(|&c| c != 0)
        } else {
            None
        };

        Self {
            raw: raw.to_string(),
            elements,
            code,
        }
    }

    /// Whether the query constrains nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Strip a `$`/`@` kind prefix.
fn take_kind(s: &str) -> (ElementKind, &str) {
    if let Some(rest) = s.strip_prefix('$') {
        (ElementKind::Name, rest)
    } else if let Some(rest) = s.strip_prefix('@') {
        (ElementKind::SetCode, rest)
    } else {
        (ElementKind::Any, s)
    }
}

fn single_element(raw: &str) -> Option<QueryElement> {
    let (kind, keyword) = take_kind(raw.trim());
    if keyword.is_empty() {
        return None;
    }
    Some(QueryElement {
        keyword: keyword.to_string(),
        kind,
        ..QueryElement::default()
    })
}

fn split_elements(raw: &str, separator: char) -> Vec<QueryElement> {
    let mut elements = Vec::new();
    let mut rest = raw;

    loop {
        rest = rest.trim_start_matches(separator);
        if rest.is_empty() {
            break;
        }

        let mut element = QueryElement::default();
        if let Some(r) = rest.strip_prefix('-') {
            element.exclude = true;
            rest = r;
        }
        let (kind, r) = take_kind(rest);
        element.kind = kind;
        rest = r;

        let delimiter = match rest.strip_prefix('"') {
            Some(r) => {
                rest = r;
                '"'
            }
            None => separator,
        };

        let (keyword, remainder) = match rest.find(delimiter) {
            Some(end) => (&rest[..end], Some(&rest[end + delimiter.len_utf8()..])),
            None => (rest, None),
        };
        if !keyword.is_empty() {
            element.keyword = keyword.to_string();
            elements.push(element);
        }

        match remainder {
            Some(r) => rest = r,
            None => break,
        }
    }
    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{NoSetCodes, SetNameTable};

    fn parse(raw: &str) -> Query {
        Query::parse(raw, KeywordMode::MultiSpace, &NoSetCodes)
    }

    fn keywords(q: &Query) -> Vec<&str> {
        q.elements.iter().map(|e| e.keyword.as_str()).collect()
    }

    #[test]
    fn test_split_on_spaces() {
        let q = parse("  blue   eyes ");
        assert_eq!(keywords(&q), vec!["blue", "eyes"]);
        assert!(q.elements.iter().all(|e| e.kind == ElementKind::Any && !e.exclude));
    }

    #[test]
    fn test_split_on_plus() {
        let q = Query::parse("blue eyes+dragon", KeywordMode::MultiPlus, &NoSetCodes);
        assert_eq!(keywords(&q), vec!["blue eyes", "dragon"]);
    }

    #[test]
    fn test_prefixes() {
        let q = parse("-dragon $knight @Eyes -$gaia");
        assert_eq!(keywords(&q), vec!["dragon", "knight", "Eyes", "gaia"]);
        assert!(q.elements[0].exclude);
        assert_eq!(q.elements[1].kind, ElementKind::Name);
        assert_eq!(q.elements[2].kind, ElementKind::SetCode);
        assert!(q.elements[3].exclude);
        assert_eq!(q.elements[3].kind, ElementKind::Name);
    }

    #[test]
    fn test_quoted_phrase() {
        let q = parse(r#"-"black luster" soldier"#);
        assert_eq!(keywords(&q), vec!["black luster", "soldier"]);
        assert!(q.elements[0].exclude);
        assert!(!q.elements[1].exclude);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        let q = parse(r#"dark "magician girl"#);
        assert_eq!(keywords(&q), vec!["dark", "magician girl"]);
    }

    #[test]
    fn test_empty_and_separator_only() {
        assert!(parse("").is_empty());
        assert!(parse("    ").is_empty());
        assert!(Query::parse("+++", KeywordMode::MultiPlus, &NoSetCodes).is_empty());
        assert!(Query::parse("  ", KeywordMode::Single, &NoSetCodes).is_empty());
    }

    #[test]
    fn test_dangling_prefixes_are_dropped() {
        assert!(parse("-").is_empty());
        assert!(parse("$").is_empty());
        assert_eq!(keywords(&parse(r#"- "" x"#)), vec!["x"]);
    }

    #[test]
    fn test_single_mode() {
        let q = Query::parse("  blue eyes  ", KeywordMode::Single, &NoSetCodes);
        assert_eq!(keywords(&q), vec!["blue eyes"]);

        let q = Query::parse("$-dragon", KeywordMode::Single, &NoSetCodes);
        assert_eq!(q.elements[0].kind, ElementKind::Name);
        assert_eq!(q.elements[0].keyword, "-dragon");
        assert!(!q.elements[0].exclude);

        let q = Query::parse("@Eyes", KeywordMode::Single, &NoSetCodes);
        assert_eq!(q.elements[0].kind, ElementKind::SetCode);
    }

    #[test]
    fn test_numeric_code() {
        assert_eq!(parse("89631139").code, Some(89631139));
        assert_eq!(parse(" 42 ").code, Some(42));
        assert_eq!(parse("0").code, None);
        assert_eq!(parse("42x").code, None);
        assert_eq!(parse("dragon").code, None);
    }

    #[test]
    fn test_setcodes_resolved() {
        let table = SetNameTable::new().with(0xdd, "Blue-Eyes").with(0x3b, "Red-Eyes");
        let q = Query::parse("@Eyes Blue", KeywordMode::MultiSpace, &table);
        assert_eq!(q.elements[0].setcodes, vec![0xdd, 0x3b]);
        assert_eq!(q.elements[1].setcodes, vec![0xdd]);
    }

    #[test]
    fn test_raw_preserved() {
        let q = parse("  Dark Magician ");
        assert_eq!(q.raw, "  Dark Magician ");
    }
}

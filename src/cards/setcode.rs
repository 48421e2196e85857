//! Set-code (archetype) name resolution.
//!
//! Queries mention archetypes by name ("Blue-Eyes"); cards store numeric
//! set codes. The query parser resolves each keyword to candidate codes
//! once, so evaluation only compares integers.

use super::definition::SetCode;

/// Resolves a keyword to the set codes whose names contain it.
///
/// Implemented by `SetNameTable`; games with their own string tables can
/// provide another source.
pub trait SetCodeResolver: Send + Sync {
    /// All set codes whose name contains `keyword`.
    fn resolve_setcodes(&self, keyword: &str) -> Vec<SetCode>;
}

/// Ordered table of set code names.
///
/// A name may hold an alternative spelling after a `|`
/// (`"Blue-Eyes|Blue Eyes"`); either half matching selects the code.
#[derive(Clone, Debug, Default)]
pub struct SetNameTable {
    entries: Vec<(SetCode, String)>,
}

impl SetNameTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a set code name.
    pub fn insert(&mut self, code: SetCode, name: impl Into<String>) {
        self.entries.push((code, name.into()));
    }

    /// Add a set code name (builder pattern).
    #[must_use]
    pub fn with(mut self, code: SetCode, name: impl Into<String>) -> Self {
        self.insert(code, name);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SetCodeResolver for SetNameTable {
    fn resolve_setcodes(&self, keyword: &str) -> Vec<SetCode> {
        let mut codes = Vec::new();
        if keyword.is_empty() {
            return codes;
        }
        for (code, name) in &self.entries {
            if name.split('|').any(|part| part.contains(keyword)) && !codes.contains(code) {
                codes.push(*code);
            }
        }
        codes
    }
}

/// Resolver with no archetypes; every keyword resolves to nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSetCodes;

impl SetCodeResolver for NoSetCodes {
    fn resolve_setcodes(&self, _keyword: &str) -> Vec<SetCode> {
        Vec::new()
    }
}

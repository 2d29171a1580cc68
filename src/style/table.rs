//! The process-wide, read-only style token table.

use once_cell::sync::Lazy;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use super::token::StyleToken;

static TABLE: Lazy<StyleTable> = Lazy::new(StyleTable::build);

/// Read-only mapping from token names to class strings.
///
/// There is exactly one table per process, reached through
/// [`StyleTable::global`]. It has no constructor and no mutating methods:
/// every value is a `&'static str` fixed at compile time.
///
/// Serializes as a map of name to class string, in table order.
///
/// # Example
///
/// ```rust
/// use cactus_styles::StyleTable;
///
/// let table = StyleTable::global();
/// assert_eq!(table.get("postDate"), Some("pr-2"));
/// assert_eq!(table.get("missing"), None);
/// ```
#[derive(Debug)]
pub struct StyleTable {
    index: HashMap<&'static str, StyleToken>,
}

impl StyleTable {
    fn build() -> Self {
        let index = StyleToken::ALL
            .iter()
            .map(|&token| (token.name(), token))
            .collect();
        tracing::trace!(entries = StyleToken::ALL.len(), "style token table initialized");
        Self { index }
    }

    /// Returns the shared table, initializing it on first use.
    pub fn global() -> &'static StyleTable {
        &TABLE
    }

    /// Returns the class string registered under `name`.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.token(name).map(StyleToken::classes)
    }

    /// Resolves `name` to its token.
    pub fn token(&self, name: &str) -> Option<StyleToken> {
        self.index.get(name).copied()
    }

    /// Returns true if a token is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of tokens in the table.
    pub fn len(&self) -> usize {
        StyleToken::ALL.len()
    }

    /// Returns true if the table has no tokens.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Token names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        StyleToken::ALL.into_iter().map(StyleToken::name)
    }

    /// `(token, classes)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleToken, &'static str)> {
        StyleToken::ALL
            .into_iter()
            .map(|token| (token, token.classes()))
    }
}

impl Serialize for StyleTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (token, classes) in self.iter() {
            map.serialize_entry(token.name(), classes)?;
        }
        map.end()
    }
}

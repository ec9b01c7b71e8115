//! Symbol table of identifier occurrences.
//!
//! The table maps each distinct identifier lexeme to the first [`Token`]
//! scanned for it. Later occurrences never overwrite the stored token.
//! Entries iterate in the order their identifiers were first seen.

use indexmap::IndexMap;
use lexc_util::FxBuildHasher;

use crate::token::Token;

/// Mapping from identifier lexeme to its first token.
///
/// # Example
///
/// ```
/// use lexc_lex::{SymbolTable, Token, TokenKind};
/// use lexc_util::Span;
///
/// let mut table = SymbolTable::new();
/// let first = Token::new(TokenKind::Identifier, "foo", Span::new(0, 3, 1, 1));
/// let again = Token::new(TokenKind::Identifier, "foo", Span::new(4, 7, 1, 5));
///
/// assert!(table.insert_if_absent(&first));
/// assert!(!table.insert_if_absent(&again));
/// assert_eq!(table.get("foo"), Some(&first));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    entries: IndexMap<String, Token, FxBuildHasher>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `token` under its lexeme unless that lexeme is already
    /// present. Returns whether the token was stored.
    pub fn insert_if_absent(&mut self, token: &Token) -> bool {
        if self.entries.contains_key(token.lexeme()) {
            return false;
        }
        self.entries
            .insert(token.lexeme().to_owned(), token.clone());
        true
    }

    /// The first token recorded for `lexeme`.
    pub fn get(&self, lexeme: &str) -> Option<&Token> {
        self.entries.get(lexeme)
    }

    /// Returns true if `lexeme` has been recorded.
    pub fn contains(&self, lexeme: &str) -> bool {
        self.entries.contains_key(lexeme)
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no identifier has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(lexeme, first token)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Token)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = (&'a String, &'a Token);
    type IntoIter = indexmap::map::Iter<'a, String, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

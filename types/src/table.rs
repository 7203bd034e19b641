//! Symbol to token lookup tables.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{DEFAULT_TOKEN, Token};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("token for symbol {symbol:?} must not be empty")]
    EmptyToken { symbol: char },
    #[error("symbol {symbol:?} is mapped more than once")]
    DuplicateSymbol { symbol: char },
}

/// Ordered mapping from a single input symbol to its token.
///
/// The table is total: any symbol without an entry resolves to the default
/// token, so [`lookup`](Self::lookup) never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    entries: BTreeMap<char, Token>,
    default: Token,
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN)
    }
}

impl TranslationTable {
    /// An empty table that maps every symbol to `default`.
    #[must_use]
    pub fn new(default: Token) -> Self {
        Self {
            entries: BTreeMap::new(),
            default,
        }
    }

    /// Build a table from `(symbol, token)` pairs.
    ///
    /// Rejects empty tokens and symbols listed twice.
    pub fn from_pairs<I, S>(pairs: I, default: Token) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut table = Self::new(default);
        for (symbol, raw) in pairs {
            let token = Token::new(raw).map_err(|_| TableError::EmptyToken { symbol })?;
            if table.entries.insert(symbol, token).is_some() {
                return Err(TableError::DuplicateSymbol { symbol });
            }
        }
        Ok(table)
    }

    #[must_use]
    pub fn with_entry(mut self, symbol: char, token: Token) -> Self {
        self.entries.insert(symbol, token);
        self
    }

    /// Insert or replace the token for `symbol`, returning the previous one.
    pub fn insert(&mut self, symbol: char, token: Token) -> Option<Token> {
        self.entries.insert(symbol, token)
    }

    /// Resolve `symbol`, falling back to the default token.
    #[must_use]
    pub fn lookup(&self, symbol: char) -> &Token {
        self.entries.get(&symbol).unwrap_or(&self.default)
    }

    /// The token explicitly mapped to `symbol`, if any.
    #[must_use]
    pub fn get(&self, symbol: char) -> Option<&Token> {
        self.entries.get(&symbol)
    }

    #[must_use]
    pub fn default_token(&self) -> &Token {
        &self.default
    }

    pub fn set_default_token(&mut self, token: Token) {
        self.default = token;
    }

    /// Entries in symbol order.
    pub fn entries(&self) -> impl Iterator<Item = (char, &Token)> + '_ {
        self.entries.iter().map(|(&symbol, token)| (symbol, token))
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

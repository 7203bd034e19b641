//! Core domain types for numword.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod language;
mod segment;
mod table;

pub use language::{Language, UnknownLanguage};
pub use segment::Segment;
pub use table::{TableError, TranslationTable};

use serde::Deserialize;
use std::borrow::Cow;
use thiserror::Error;

// ============================================================================
// Token
// ============================================================================

/// Fallback token for any symbol a table does not recognise.
pub const DEFAULT_TOKEN: Token = Token::from_static("<?>");

/// Output text fragment substituted for one input symbol.
///
/// Guaranteed non-empty (after trimming). Static tokens are checked against
/// ASCII whitespace at compile time. Built-in vocabularies borrow
/// `'static` text; tokens read from configuration own theirs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Token(Cow<'static, str>);

#[derive(Debug, Error)]
#[error("token must not be empty")]
pub struct EmptyTokenError;

impl Token {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyTokenError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyTokenError)
        } else {
            Ok(Self(Cow::Owned(value)))
        }
    }

    /// Compile-time checked token for built-in vocabularies.
    #[must_use]
    pub const fn from_static(value: &'static str) -> Self {
        assert!(!is_blank(value), "Token must not be empty");
        Self(Cow::Borrowed(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Byte length of the rendered token.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Const counterpart of `value.trim().is_empty()` for ASCII whitespace.
const fn is_blank(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_whitespace() {
            return false;
        }
        i += 1;
    }
    true
}

impl TryFrom<String> for Token {
    type Error = EmptyTokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Token {
    type Error = EmptyTokenError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Token> for String {
    fn from(value: Token) -> Self {
        value.0.into_owned()
    }
}

impl std::ops::Deref for Token {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

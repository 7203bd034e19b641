//! Built-in vocabularies.

use std::str::FromStr;
use std::sync::LazyLock;

use thiserror::Error;

use crate::{DEFAULT_TOKEN, Token, TranslationTable};

const ENGLISH: &[(char, Token)] = &[
    ('1', Token::from_static("<one>")),
    ('2', Token::from_static("<two>")),
    ('3', Token::from_static("<three>")),
];

const FRENCH: &[(char, Token)] = &[
    ('1', Token::from_static("<un>")),
    ('2', Token::from_static("<deux>")),
    ('3', Token::from_static("<trois>")),
];

static ENGLISH_TABLE: LazyLock<TranslationTable> =
    LazyLock::new(|| build_table(Language::English));
static FRENCH_TABLE: LazyLock<TranslationTable> = LazyLock::new(|| build_table(Language::French));

fn build_table(language: Language) -> TranslationTable {
    language
        .vocabulary()
        .iter()
        .fold(TranslationTable::new(DEFAULT_TOKEN), |table, (symbol, token)| {
            table.with_entry(*symbol, token.clone())
        })
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown language: {0}")]
pub struct UnknownLanguage(pub String);

/// Vocabularies shipped with numword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
        }
    }

    /// Parse a language name (case-insensitive, accepts ISO 639-1 codes).
    pub fn parse(raw: &str) -> Result<Self, UnknownLanguage> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "french" | "fr" => Ok(Language::French),
            _ => Err(UnknownLanguage(raw.trim().to_string())),
        }
    }

    /// The `(symbol, token)` pairs this language recognises, in symbol order.
    #[must_use]
    pub const fn vocabulary(self) -> &'static [(char, Token)] {
        match self {
            Language::English => ENGLISH,
            Language::French => FRENCH,
        }
    }

    /// Process-wide immutable table for this language.
    #[must_use]
    pub fn table(self) -> &'static TranslationTable {
        match self {
            Language::English => &ENGLISH_TABLE,
            Language::French => &FRENCH_TABLE,
        }
    }

    #[must_use]
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::French]
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Language, UnknownLanguage};
    use crate::DEFAULT_TOKEN;

    #[test]
    fn english_table_matches_vocabulary() {
        let table = Language::English.table();
        assert_eq!(table.lookup('1').as_str(), "<one>");
        assert_eq!(table.lookup('2').as_str(), "<two>");
        assert_eq!(table.lookup('3').as_str(), "<three>");
        assert_eq!(table.lookup('4'), &DEFAULT_TOKEN);
    }

    #[test]
    fn french_table_matches_vocabulary() {
        let table = Language::French.table();
        assert_eq!(table.lookup('1').as_str(), "<un>");
        assert_eq!(table.lookup('2').as_str(), "<deux>");
        assert_eq!(table.lookup('3').as_str(), "<trois>");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn parse_accepts_names_and_codes() {
        assert_eq!(Language::parse("English"), Ok(Language::English));
        assert_eq!(Language::parse(" fr "), Ok(Language::French));
        assert_eq!("EN".parse::<Language>(), Ok(Language::English));
        assert_eq!(
            Language::parse("klingon"),
            Err(UnknownLanguage("klingon".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for language in Language::all() {
            assert_eq!(Language::parse(&language.to_string()), Ok(*language));
        }
    }
}

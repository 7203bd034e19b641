//! Single-pass table translation.

use std::borrow::Cow;

use numword_types::{Language, TranslationTable};

/// Translate `input` with the built-in English table.
///
/// ```
/// assert_eq!(numword_core::translate("123413"), "<one><two><three><?><one><three>");
/// ```
#[must_use]
pub fn translate(input: &str) -> String {
    Translator::default().translate(input)
}

/// Translates each character independently through a [`TranslationTable`].
///
/// Borrows the built-in tables and owns configured ones.
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    table: Cow<'a, TranslationTable>,
}

impl Default for Translator<'static> {
    fn default() -> Self {
        Self::for_language(Language::English)
    }
}

impl Translator<'static> {
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        Self::new(language.table())
    }

    #[must_use]
    pub fn owned(table: TranslationTable) -> Self {
        Self {
            table: Cow::Owned(table),
        }
    }
}

impl<'a> Translator<'a> {
    #[must_use]
    pub fn new(table: &'a TranslationTable) -> Self {
        Self {
            table: Cow::Borrowed(table),
        }
    }

    #[must_use]
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Concatenate the token of every character of `input`, left to right.
    #[must_use]
    pub fn translate(&self, input: &str) -> String {
        let capacity: usize = input.chars().map(|c| self.table.lookup(c).len()).sum();
        let mut out = String::with_capacity(capacity);
        for c in input.chars() {
            out.push_str(self.table.lookup(c));
        }
        tracing::trace!(
            input_chars = input.chars().count(),
            output_bytes = out.len(),
            "translated"
        );
        out
    }
}

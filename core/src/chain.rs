//! Composable substitution chains.
//!
//! A [`Chain`] is an ordered list of [`Step`]s. Each step makes one pass over
//! the input and resolves only the pending symbols it recognises. A closed
//! chain ends with a [`Fallback`] that resolves everything still pending.
//!
//! The fallback can only be attached by [`ChainBuilder::with_fallback`],
//! which consumes the builder, so no step can ever run after it:
//!
//! ```compile_fail
//! use numword_core::{ChainBuilder, Substitute, Token};
//!
//! let chain = ChainBuilder::new().with_fallback(Token::from_static("<?>"));
//! let _ = chain.then(Substitute::new('1', Token::from_static("<one>")));
//! ```
//!
//! Steps can be written on the fly as closures:
//!
//! ```
//! use numword_core::{Chain, Language, Substitute, Token};
//!
//! let english = Language::English.table();
//! let french = Language::French.table();
//! let mixed = Chain::builder()
//!     .then(Substitute::new('1', english.lookup('1').clone()))
//!     .then(Substitute::new('2', french.lookup('2').clone()))
//!     .then(|c: char| (c == '3').then(|| Token::from_static("<drei>")))
//!     .build();
//!
//! assert_eq!(mixed.translate("12321"), "<one><deux><drei><deux><one>");
//! ```

use numword_types::{Language, Segment, Token, TranslationTable};

/// One ordered pass over the segments of an input.
///
/// Implementations must only resolve [`Segment::Pending`] segments and must
/// leave segments they don't recognise untouched.
pub trait Step {
    fn apply(&self, segments: &mut [Segment]);
}

impl<F> Step for F
where
    F: Fn(char) -> Option<Token>,
{
    fn apply(&self, segments: &mut [Segment]) {
        for segment in segments {
            if let Some(symbol) = segment.pending()
                && let Some(token) = self(symbol)
            {
                segment.resolve(token);
            }
        }
    }
}

/// Resolves every pending occurrence of one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitute {
    symbol: char,
    token: Token,
}

impl Substitute {
    #[must_use]
    pub fn new(symbol: char, token: Token) -> Self {
        Self { symbol, token }
    }

    #[must_use]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    #[must_use]
    pub fn token(&self) -> &Token {
        &self.token
    }
}

impl Step for Substitute {
    fn apply(&self, segments: &mut [Segment]) {
        for segment in segments {
            if segment.pending() == Some(self.symbol) {
                segment.resolve(self.token.clone());
            }
        }
    }
}

/// Default-fill step: resolves every segment still pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    token: Token,
}

impl Fallback {
    #[must_use]
    pub fn new(token: Token) -> Self {
        Self { token }
    }

    #[must_use]
    pub fn token(&self) -> &Token {
        &self.token
    }
}

impl Step for Fallback {
    fn apply(&self, segments: &mut [Segment]) {
        for segment in segments.iter_mut().filter(|segment| segment.pending().is_some()) {
            segment.resolve(self.token.clone());
        }
    }
}

type BoxedStep = Box<dyn Step + Send + Sync>;

/// Collects steps in the order they will run.
#[derive(Default)]
pub struct ChainBuilder {
    steps: Vec<BoxedStep>,
}

impl std::fmt::Debug for ChainBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainBuilder")
            .field("step_count", &self.steps.len())
            .finish_non_exhaustive()
    }
}

impl ChainBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step after every step added so far.
    pub fn then<S>(mut self, step: S) -> Self
    where
        S: Step + Send + Sync + 'static,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Shorthand for `then(Substitute::new(symbol, token))`.
    pub fn substitute(self, symbol: char, token: Token) -> Self {
        self.then(Substitute::new(symbol, token))
    }

    /// Close the chain with a default-fill step.
    #[must_use]
    pub fn with_fallback(self, token: Token) -> Chain {
        self.finish(Some(Fallback::new(token)))
    }

    /// Finish without a fallback. Unrecognised symbols pass through verbatim.
    #[must_use]
    pub fn build(self) -> Chain {
        self.finish(None)
    }

    fn finish(self, fallback: Option<Fallback>) -> Chain {
        tracing::debug!(
            steps = self.steps.len(),
            closed = fallback.is_some(),
            "substitution chain built"
        );
        Chain {
            steps: self.steps,
            fallback,
        }
    }
}

/// An ordered, immutable sequence of substitution steps.
pub struct Chain {
    steps: Vec<BoxedStep>,
    fallback: Option<Fallback>,
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("step_count", &self.steps.len())
            .field("fallback", &self.fallback)
            .finish_non_exhaustive() // Steps are opaque
    }
}

impl Chain {
    #[must_use]
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// One substitution per vocabulary entry, closed by the default token.
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        Self::from_table(language.table())
    }

    /// One substitution per table entry (in symbol order), then the
    /// table's default token as fallback.
    #[must_use]
    pub fn from_table(table: &TranslationTable) -> Self {
        Self::open_from_table(table).with_fallback(table.default_token().clone())
    }

    /// Like [`from_table`](Self::from_table) but left open, so more steps
    /// can be appended before the chain is finished.
    #[must_use]
    pub fn open_from_table(table: &TranslationTable) -> ChainBuilder {
        table
            .entries()
            .fold(ChainBuilder::new(), |builder, (symbol, token)| {
                builder.substitute(symbol, token.clone())
            })
    }

    #[must_use]
    pub fn fallback(&self) -> Option<&Fallback> {
        self.fallback.as_ref()
    }

    /// Number of steps, counting the fallback.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len() + usize::from(self.fallback.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every step in order, the fallback last.
    pub fn apply(&self, segments: &mut [Segment]) {
        for step in &self.steps {
            step.apply(segments);
        }
        if let Some(fallback) = &self.fallback {
            fallback.apply(segments);
        }
    }

    #[must_use]
    pub fn translate(&self, input: &str) -> String {
        let mut segments = Segment::split(input);
        self.apply(&mut segments);
        let out = Segment::render(&segments);
        tracing::trace!(
            input_chars = segments.len(),
            output_bytes = out.len(),
            steps = self.len(),
            "chain translated"
        );
        out
    }
}

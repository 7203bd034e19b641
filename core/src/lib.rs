//! Core translation logic for numword.
//!
//! Two interchangeable ways to turn `"123"` into `"<one><two><three>"`:
//!
//! - **[`Translator`]**: one total lookup table, consulted once per character.
//! - **[`Chain`]**: an ordered list of single-symbol [`Step`]s closed by a
//!   [`Fallback`], composable on the fly.
//!
//! Plus [`resolve_status`], a small optional-value demo that threads its
//! counter explicitly instead of mutating shared state.

mod chain;
mod status;
mod translator;


pub use chain::{Chain, ChainBuilder, Fallback, Step, Substitute};
pub use status::{Counter, DEFAULT_VALUE, Status, resolve_status};
pub use translator::{Translator, translate};

pub use numword_types::{DEFAULT_TOKEN, Language, Segment, Token, TranslationTable};

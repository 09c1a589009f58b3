//! Error types for the Phrasal system.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Only configuration problems are errors: a closed-class lexeme missing
//! from the supplied lexicon, or a stale/mistyped element reference. Unset
//! optional features resolve to defaults and malformed constituents realise
//! to nothing; neither ever surfaces here.

use thiserror::Error;

use crate::features::{Language, LexicalCategory};
use crate::id::ElementId;

/// Convenience result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, RealiseError>;

/// The error type for realisation.
#[derive(Debug, Error)]
pub enum RealiseError {
    /// A grammatical lexeme the language module depends on is absent from
    /// the supplied lexicon. This is a caller configuration error; the
    /// realiser never substitutes or retries.
    #[error("missing obligatory lexicon entry: \"{base}\" ({category}, {language})")]
    MissingLexeme {
        /// Base form that was looked up.
        base: String,
        /// Category it was looked up under.
        category: LexicalCategory,
        /// Language of the lexicon that was consulted.
        language: Language,
    },

    /// An element id referred to a slot that has been cleared since.
    #[error("stale element reference: {0}")]
    StaleElement(ElementId),

    /// An element was used where a different kind was required.
    #[error("element {id} is not a {expected}")]
    WrongElementKind {
        /// The offending element.
        id: ElementId,
        /// Human-readable name of the expected kind.
        expected: &'static str,
    },
}

impl RealiseError {
    /// Creates a missing-lexeme error.
    #[must_use]
    pub fn missing_lexeme(base: &str, category: LexicalCategory, language: Language) -> Self {
        Self::MissingLexeme {
            base: base.to_string(),
            category,
            language,
        }
    }
}

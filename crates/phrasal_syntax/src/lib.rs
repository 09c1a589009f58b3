//! Per-language syntax realisation for Phrasal.
//!
//! This crate turns a feature-annotated phrase tree into an ordered list of
//! inflected word tokens. It provides:
//! - [`ClauseHelper`] / [`VerbPhraseHelper`] - the capability traits each
//!   language implements
//! - [`syntax_for`] - the language dispatch
//! - [`realise_syntax`] - the element dispatch entry point
//!
//! The shared step logic (agreement folding, complement ordering, subject
//! splicing, phrase realisation) lives in free functions in [`shared`]; the
//! language modules call into it rather than inheriting from each other.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dutch;
pub mod english;
pub mod french;
pub mod shared;
pub mod verb_group;

use phrasal_elements::{ElementKind, PhraseTree};
use phrasal_foundation::{ElementId, Feature, Language, PhraseCategory, Result};
use phrasal_lexicon::Lexicon;

/// Mutable state threaded through one realisation pass.
pub struct RealiseContext<'a> {
    /// The tree being realised. Agreement features and consumed markers are
    /// written into it; the caller must own it exclusively for the pass.
    pub tree: &'a mut PhraseTree,
    /// The lexicon supplying closed-class lexemes.
    pub lexicon: &'a Lexicon,
}

impl RealiseContext<'_> {
    /// The language being realised.
    #[must_use]
    pub fn language(&self) -> Language {
        self.lexicon.language()
    }
}

/// Clause realisation capability.
pub trait ClauseHelper {
    /// Produces the linear token sequence for one clause, or `None` when the
    /// clause has nothing realisable (no resolvable verb phrase, elided).
    ///
    /// # Errors
    /// Returns an error only when a closed-class lexeme is missing from the
    /// lexicon.
    fn realise_clause(&self, ctx: &mut RealiseContext, clause: ElementId)
        -> Result<Option<ElementId>>;
}

/// Verb-phrase realisation capability.
pub trait VerbPhraseHelper {
    /// Produces the ordered verb-group token sequence for one verb phrase.
    ///
    /// # Errors
    /// Returns an error only when a closed-class lexeme is missing from the
    /// lexicon.
    fn realise_verb_phrase(
        &self,
        ctx: &mut RealiseContext,
        vp: ElementId,
    ) -> Result<Option<ElementId>>;
}

/// The full per-language syntax surface.
pub trait LanguageSyntax: ClauseHelper + VerbPhraseHelper + Sync {
    /// Language this implementation realises.
    fn language(&self) -> Language;
}

/// Returns the syntax rules for a language.
#[must_use]
pub fn syntax_for(language: Language) -> &'static dyn LanguageSyntax {
    match language {
        Language::English => &english::EnglishSyntax,
        Language::French => &french::FrenchSyntax,
        Language::Dutch => &dutch::DutchSyntax,
    }
}

/// Realises any element to its syntax-level form: a list of inflected word
/// tokens for phrases, an inflected token for words, the element itself for
/// already-realised text.
///
/// Returns `None` for elided elements and malformed constituents; the caller
/// simply omits them.
///
/// # Errors
/// Returns an error only when a closed-class lexeme is missing from the
/// lexicon.
pub fn realise_syntax(ctx: &mut RealiseContext, id: ElementId) -> Result<Option<ElementId>> {
    if ctx.tree.bag(id).is(Feature::Elided) {
        return Ok(None);
    }
    enum Dispatch {
        Clause,
        VerbPhrase,
        OtherPhrase,
        Word,
        AsIs,
        Nothing,
    }
    let dispatch = match ctx.tree.get(id).map(|e| &e.kind) {
        Some(ElementKind::Phrase(data)) => match data.category {
            Some(PhraseCategory::Clause) => Dispatch::Clause,
            Some(PhraseCategory::VerbPhrase) => Dispatch::VerbPhrase,
            Some(
                PhraseCategory::NounPhrase
                | PhraseCategory::PrepositionPhrase
                | PhraseCategory::AdjectivePhrase
                | PhraseCategory::AdverbPhrase,
            ) => Dispatch::OtherPhrase,
            Some(PhraseCategory::CannedText) | None => Dispatch::Nothing,
        },
        Some(ElementKind::Word(_)) => Dispatch::Word,
        Some(ElementKind::Inflected(_) | ElementKind::List(_) | ElementKind::Text(_)) => {
            Dispatch::AsIs
        }
        None => Dispatch::Nothing,
    };

    let syntax = syntax_for(ctx.language());
    match dispatch {
        Dispatch::Clause => syntax.realise_clause(ctx, id),
        Dispatch::VerbPhrase => syntax.realise_verb_phrase(ctx, id),
        Dispatch::OtherPhrase => shared::realise_phrase(ctx, id),
        Dispatch::Word => Ok(Some(shared::inflect_word(ctx.tree, id))),
        Dispatch::AsIs => Ok(Some(id)),
        Dispatch::Nothing => Ok(None),
    }
}

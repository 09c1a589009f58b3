//! Per-language morphology for Phrasal.
//!
//! Morphology turns one inflected word token into one surface string,
//! dispatched on lexical category. Every rule table is ordered: the first
//! matching rule wins, and repeated calls on the same input produce
//! byte-identical output. Explicit lexical overrides (irregular cells) are
//! probed before any regular derivation.
//!
//! Morphophonology then adjusts adjacent realised tokens (contraction,
//! elision, duplicate collapse); see [`morphophonology`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dutch;
pub mod english;
pub mod french;
pub mod morphophonology;
mod pronouns;

use phrasal_elements::{ElementKind, PhraseTree};
use phrasal_foundation::{ElementId, Feature, Language, LexicalCategory};
use phrasal_lexicon::Lexicon;

pub use morphophonology::{MorphophonologyRules, morphophonology_for};

/// Word-level inflection capability, one implementation per language.
pub trait MorphologyRules: Sync {
    /// Inflects a noun token.
    fn noun(&self, tree: &PhraseTree, lexicon: &Lexicon, el: ElementId) -> String;
    /// Inflects a verb token.
    fn verb(&self, tree: &PhraseTree, lexicon: &Lexicon, el: ElementId) -> String;
    /// Inflects an adjective token.
    fn adjective(&self, tree: &PhraseTree, lexicon: &Lexicon, el: ElementId) -> String;
    /// Inflects an adverb token.
    fn adverb(&self, tree: &PhraseTree, lexicon: &Lexicon, el: ElementId) -> String;
    /// Inflects a determiner token.
    fn determiner(&self, tree: &PhraseTree, lexicon: &Lexicon, el: ElementId) -> String;
    /// Resolves a pronoun token against the lexicon.
    fn pronoun(&self, tree: &PhraseTree, lexicon: &Lexicon, el: ElementId) -> String;
}

/// Returns the morphology rules for a language.
#[must_use]
pub fn morphology_for(language: Language) -> &'static dyn MorphologyRules {
    match language {
        Language::English => &english::EnglishMorphology,
        Language::French => &french::FrenchMorphology,
        Language::Dutch => &dutch::DutchMorphology,
    }
}

/// Realises one inflected token to a text element carrying the token's
/// category and features for the morphophonology stage.
///
/// Already-realised text passes through; non-word elements realise to
/// nothing and are omitted by the caller.
pub fn realise_morphology(
    tree: &mut PhraseTree,
    lexicon: &Lexicon,
    id: ElementId,
) -> Option<ElementId> {
    let (base, category) = match tree.get(id).map(|e| &e.kind) {
        Some(ElementKind::Text(_)) => return Some(id),
        Some(ElementKind::Inflected(data) | ElementKind::Word(data)) => {
            (data.base.to_string(), data.category)
        }
        _ => return None,
    };

    if tree.bag(id).is(Feature::NonMorph) {
        let text = format!("{}{}", base, particle(tree, id));
        return Some(tree.new_text_from(&text, id));
    }

    let rules = morphology_for(lexicon.language());
    let surface = match category {
        LexicalCategory::Noun => rules.noun(tree, lexicon, id),
        LexicalCategory::Verb => rules.verb(tree, lexicon, id),
        LexicalCategory::Adjective => rules.adjective(tree, lexicon, id),
        LexicalCategory::Adverb => rules.adverb(tree, lexicon, id),
        LexicalCategory::Determiner => rules.determiner(tree, lexicon, id),
        LexicalCategory::Pronoun => rules.pronoun(tree, lexicon, id),
        _ => format!("{}{}", base, particle(tree, id)),
    };
    Some(tree.new_text_from(&surface, id))
}

/// The particle suffix of a token: empty, or the particle prefixed with a
/// dash.
#[must_use]
pub fn particle(tree: &PhraseTree, id: ElementId) -> String {
    match tree.bag(id).text(Feature::Particle) {
        Some(p) if !p.is_empty() => format!("-{p}"),
        _ => String::new(),
    }
}

// --- character classes shared by the rule ladders --------------------------

/// True for orthographic vowels (a e i o u, case-insensitive).
#[must_use]
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// True for orthographic vowels counting y (used by closed-syllable checks).
#[must_use]
pub fn is_vowel_or_y(c: char) -> bool {
    is_vowel(c) || c.to_ascii_lowercase() == 'y'
}

/// True for consonants (alphabetic, not a vowel, not y).
#[must_use]
pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel_or_y(c)
}

/// Last character of a string, if any.
#[must_use]
pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

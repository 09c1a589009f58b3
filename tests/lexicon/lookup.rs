//! Integration tests for lexicon lookup.

use phrasal_foundation::{
    DiscourseFunction, Feature, Gender, LexicalCategory, NumberAgreement, Person, PronounType,
};
use phrasal_lexicon::{Lexicon, WordEntry, dutch, english, french};

// =============================================================================
// Forward lookup
// =============================================================================

#[test]
fn lookup_is_category_scoped() {
    let lex = dutch::lexicon();
    // "dat" exists as complementiser, relative pronoun, but not as a verb
    assert!(lex.has("dat", LexicalCategory::Complementiser));
    assert!(lex.has("dat", LexicalCategory::Pronoun));
    assert!(!lex.has("dat", LexicalCategory::Verb));
}

#[test]
fn require_propagates_configuration_errors() {
    let lex = dutch::lexicon();
    let err = lex
        .require("missen", LexicalCategory::Complementiser)
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("missing obligatory lexicon entry"));
    assert!(message.contains("missen"));
}

#[test]
fn closed_class_inventories_are_complete() {
    let nl = dutch::lexicon();
    for (base, category) in [
        ("zijn", LexicalCategory::Verb),
        ("hebben", LexicalCategory::Verb),
        ("zullen", LexicalCategory::Verb),
        ("worden", LexicalCategory::Verb),
        ("niet", LexicalCategory::Adverb),
        ("te", LexicalCategory::Adverb),
        ("dat", LexicalCategory::Complementiser),
        ("aan", LexicalCategory::Preposition),
    ] {
        assert!(nl.has(base, category), "dutch lexicon misses {base}");
    }

    let en = english::lexicon();
    for (base, category) in [
        ("be", LexicalCategory::Verb),
        ("do", LexicalCategory::Verb),
        ("have", LexicalCategory::Verb),
        ("will", LexicalCategory::Modal),
        ("not", LexicalCategory::Adverb),
        ("that", LexicalCategory::Complementiser),
    ] {
        assert!(en.has(base, category), "english lexicon misses {base}");
    }

    let fr = french::lexicon();
    for (base, category) in [
        ("être", LexicalCategory::Verb),
        ("avoir", LexicalCategory::Verb),
        ("ne", LexicalCategory::Adverb),
        ("pas", LexicalCategory::Adverb),
        ("que", LexicalCategory::Complementiser),
    ] {
        assert!(fr.has(base, category), "french lexicon misses {base}");
    }
}

// =============================================================================
// Reverse lookup
// =============================================================================

#[test]
fn reverse_lookup_selects_pronoun_by_features() {
    let lex = english::lexicon();
    let entry = lex
        .lookup_by_features(
            LexicalCategory::Pronoun,
            &[
                (Feature::PronounKind, PronounType::Personal.into()),
                (Feature::Person, Person::Third.into()),
                (Feature::Number, NumberAgreement::Singular.into()),
                (Feature::Function, DiscourseFunction::Object.into()),
                (Feature::Gender, Gender::Feminine.into()),
            ],
        )
        .unwrap();
    assert_eq!(entry.base(), "her");
}

#[test]
fn reverse_lookup_misses_resolve_to_none() {
    let lex = dutch::lexicon();
    assert!(
        lex.lookup_by_features(
            LexicalCategory::Determiner,
            &[(Feature::Person, Person::First.into())],
        )
        .is_none()
    );
}

// =============================================================================
// Custom lexicons
// =============================================================================

#[test]
fn host_lexicons_can_extend_the_builtin_inventory() {
    let mut lex = Lexicon::new(phrasal_foundation::Language::Dutch);
    lex.insert(
        WordEntry::new("fietsen", LexicalCategory::Verb).with(Feature::PastRadical, "fietste"),
    );
    let entry = lex.lookup("fietsen", LexicalCategory::Verb).unwrap();
    assert_eq!(entry.features().text(Feature::PastRadical), Some("fietste"));
}

#[test]
fn homographs_keep_both_rows() {
    let lex = dutch::lexicon();
    // "zij" is both the feminine singular and the plural subject pronoun
    let plural = lex
        .lookup_by_features(
            LexicalCategory::Pronoun,
            &[
                (Feature::Person, Person::Third.into()),
                (Feature::Number, NumberAgreement::Plural.into()),
                (Feature::Function, DiscourseFunction::Subject.into()),
            ],
        )
        .unwrap();
    assert_eq!(plural.base(), "zij");
    let feminine = lex
        .lookup_by_features(
            LexicalCategory::Pronoun,
            &[
                (Feature::Gender, Gender::Feminine.into()),
                (Feature::Number, NumberAgreement::Singular.into()),
                (Feature::Function, DiscourseFunction::Subject.into()),
            ],
        )
        .unwrap();
    assert_eq!(feminine.base(), "zij");
}

//! Integration tests for the feature bag and its documented defaults.

use phrasal_foundation::{
    ClauseStatus, Feature, FeatureBag, Form, Gender, NumberAgreement, Person, Tense,
};

#[test]
fn unset_features_resolve_to_language_defaults() {
    let bag = FeatureBag::new();
    assert_eq!(bag.number(), NumberAgreement::Singular);
    assert_eq!(bag.person(), Person::Third);
    assert_eq!(bag.gender(), Gender::Masculine);
    assert_eq!(bag.tense(), Tense::Present);
    assert_eq!(bag.form(), Form::Normal);
    assert_eq!(bag.clause_status(), ClauseStatus::Matrix);
    assert!(!bag.is(Feature::Negated));
    assert_eq!(bag.interrogative(), None);
}

#[test]
fn optional_accessors_distinguish_unset_from_default() {
    let mut bag = FeatureBag::new();
    assert_eq!(bag.person_opt(), None);
    bag.set(Feature::Person, Person::Third);
    assert_eq!(bag.person_opt(), Some(Person::Third));
}

#[test]
fn absorb_merges_lexical_features() {
    let mut lexical = FeatureBag::new();
    lexical.set(Feature::Present3S, "heeft");
    lexical.set(Feature::PastParticiple, "gehad");

    let mut contextual = FeatureBag::new();
    contextual.set(Feature::Tense, Tense::Past);
    contextual.absorb(&lexical);

    assert_eq!(contextual.text(Feature::Present3S), Some("heeft"));
    assert_eq!(contextual.tense(), Tense::Past);
}

#[test]
fn bags_share_structure_on_clone() {
    let mut original = FeatureBag::new();
    for (index, feature) in [
        Feature::Present1S,
        Feature::Present2S,
        Feature::Present3S,
        Feature::Past1S,
        Feature::Past2S,
        Feature::Past3S,
    ]
    .into_iter()
    .enumerate()
    {
        original.set(feature, format!("cell{index}"));
    }
    let copy = original.clone();
    assert_eq!(copy.text(Feature::Past3S), Some("cell5"));
    // the copy is a value: mutating the original must not leak through
    original.set(Feature::Past3S, "mutated");
    assert_eq!(copy.text(Feature::Past3S), Some("cell5"));
}

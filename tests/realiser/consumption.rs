//! Repeated realisation of one tree.
//!
//! Complements are flagged consumed rather than removed, and the flags are
//! reset when a pass starts, so realising the same tree twice reproduces
//! the first output.

use std::sync::Arc;

use phrasal_elements::NlgFactory;
use phrasal_foundation::{ElementId, Feature, InterrogativeType, Person, Tense};
use phrasal_realiser::Realiser;

fn future_perfect_question() -> (NlgFactory, Realiser, ElementId) {
    let lexicon = Arc::new(phrasal_lexicon::dutch::lexicon());
    let realiser = Realiser::new(Arc::clone(&lexicon));
    let mut f = NlgFactory::new(lexicon);
    let clause = f.clause();
    let subject = f.noun_phrase("JIJ");
    f.set_feature(subject, Feature::Pronominal, true);
    f.set_feature(subject, Feature::Person, Person::Second);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "motiveren");
    f.set_object_noun(clause, "Jan");
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::WhatSubject);
    f.set_feature(clause, Feature::Tense, Tense::Future);
    f.set_feature(clause, Feature::Perfect, true);
    (f, realiser, clause)
}

#[test]
fn realising_twice_reproduces_the_first_output() {
    let (mut f, realiser, clause) = future_perfect_question();
    let first = realiser.realise_sentence(&mut f, clause).unwrap();
    let second = realiser.realise_sentence(&mut f, clause).unwrap();
    assert_eq!(first, "Wat zal Jan hebben gemotiveerd?");
    assert_eq!(first, second);
}

#[test]
fn consumed_markers_are_set_during_a_pass() {
    let lexicon = Arc::new(phrasal_lexicon::dutch::lexicon());
    let realiser = Realiser::new(Arc::clone(&lexicon));
    let mut f = NlgFactory::new(lexicon);
    let clause = f.clause();
    let subject = f.noun_phrase("Jan");
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "motiveren");
    let object = f.noun_phrase("Piet");
    f.set_object(clause, object);
    f.set_feature(clause, Feature::Tense, Tense::Future);

    realiser.realise_sentence(&mut f, clause).unwrap();
    // the middle-field object was consumed by the auxiliary pass
    assert!(f.tree().bag(object).is(Feature::Consumed));

    // a fresh pass resets and re-sets the marker, with identical output
    let again = realiser.realise_sentence(&mut f, clause).unwrap();
    assert_eq!(again, "Jan zal Piet motiveren.");
}

#[test]
fn ten_passes_stay_stable() {
    let (mut f, realiser, clause) = future_perfect_question();
    let first = realiser.realise_sentence(&mut f, clause).unwrap();
    for _ in 0..10 {
        assert_eq!(realiser.realise_sentence(&mut f, clause).unwrap(), first);
    }
}

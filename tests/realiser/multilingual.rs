//! End-to-end tests realising the same message across languages.

use std::sync::Arc;

use phrasal_elements::NlgFactory;
use phrasal_foundation::{Feature, InterrogativeType, Language, Person};
use phrasal_realiser::Realiser;

#[test]
fn what_object_question_in_three_languages() {
    // English
    let lexicon = Arc::new(phrasal_lexicon::english::lexicon());
    let realiser = Realiser::new(Arc::clone(&lexicon));
    let mut f = NlgFactory::new(lexicon);
    let clause = f.clause();
    let subject = f.noun_phrase("you");
    f.set_feature(subject, Feature::Pronominal, true);
    f.set_feature(subject, Feature::Person, Person::Second);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "think");
    let pp = f.preposition_phrase("about");
    f.set_pp_object_noun(pp, "John");
    f.add_post_modifier(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::WhatObject);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "What do you think about John?"
    );

    // French: est-ce que, no inversion
    let lexicon = Arc::new(phrasal_lexicon::french::lexicon());
    let realiser = Realiser::new(Arc::clone(&lexicon));
    assert_eq!(realiser.language(), Language::French);
    let mut f = NlgFactory::new(lexicon);
    let clause = f.clause();
    let subject = f.noun_phrase("tu");
    f.set_feature(subject, Feature::Pronominal, true);
    f.set_feature(subject, Feature::Person, Person::Second);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "penser");
    let pp = f.preposition_phrase("sur");
    f.set_pp_object_noun(pp, "Jean");
    f.add_post_modifier(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::WhatObject);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Qu'est-ce que tu penses sur Jean?"
    );

    // Dutch: verb-second inversion
    let lexicon = Arc::new(phrasal_lexicon::dutch::lexicon());
    let realiser = Realiser::new(Arc::clone(&lexicon));
    let mut f = NlgFactory::new(lexicon);
    let clause = f.clause();
    let subject = f.noun_phrase("jij");
    f.set_feature(subject, Feature::Pronominal, true);
    f.set_feature(subject, Feature::Person, Person::Second);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "denk");
    let pp = f.preposition_phrase("over");
    f.set_pp_object_noun(pp, "Jan");
    f.add_post_modifier(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::WhatObject);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Wat denk jij over Jan?"
    );
}

#[test]
fn why_question_with_pronominal_object() {
    let lexicon = Arc::new(phrasal_lexicon::dutch::lexicon());
    let realiser = Realiser::new(Arc::clone(&lexicon));
    let mut f = NlgFactory::new(lexicon);
    let clause = f.clause();
    let subject = f.noun_phrase("JIJ");
    f.set_feature(subject, Feature::Pronominal, true);
    f.set_feature(subject, Feature::Person, Person::Second);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "doen");
    f.set_object_noun(clause, "dat");
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::Why);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Waarom doe jij dat?"
    );
}

#[test]
fn english_declarative_with_canned_complement() {
    let lexicon = Arc::new(phrasal_lexicon::english::lexicon());
    let realiser = Realiser::new(Arc::clone(&lexicon));
    let mut f = NlgFactory::new(lexicon);
    let clause = f.clause();
    let subject = f.noun_phrase("Julia");
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "want");
    f.add_complement_text(clause, "to dance");
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Julia wants to dance."
    );
}

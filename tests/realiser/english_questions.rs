//! End-to-end tests for the full English interrogative inventory.

use std::sync::Arc;

use phrasal_elements::NlgFactory;
use phrasal_foundation::{ElementId, Feature, InterrogativeType, Person, Tense};
use phrasal_realiser::Realiser;

fn factory() -> (NlgFactory, Realiser) {
    let lexicon = Arc::new(phrasal_lexicon::english::lexicon());
    (
        NlgFactory::new(Arc::clone(&lexicon)),
        Realiser::new(lexicon),
    )
}

fn second_person_subject(f: &mut NlgFactory) -> ElementId {
    let subject = f.noun_phrase("YOU");
    f.set_feature(subject, Feature::Pronominal, true);
    f.set_feature(subject, Feature::Person, Person::Second);
    subject
}

fn about_john(f: &mut NlgFactory) -> ElementId {
    let pp = f.preposition_phrase("about");
    f.set_pp_object_noun(pp, "John");
    pp
}

#[test]
fn what_object_question_takes_do_support() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "think");
    let pp = about_john(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::WhatObject);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "What do you think about John?"
    );
}

#[test]
fn who_indirect_object_strands_its_preposition() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    let verb = f.verb_phrase("present");
    f.set_verb(clause, verb);
    f.set_object_noun(clause, "John");
    let mary = f.noun_phrase("Mary");
    f.set_indirect_object(clause, mary);
    f.set_feature(
        clause,
        Feature::Interrogative,
        InterrogativeType::WhoIndirectObject,
    );
    f.set_feature(clause, Feature::Tense, Tense::Future);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Whom will you present John to?"
    );
}

#[test]
fn why_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "think");
    let pp = about_john(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::Why);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Why do you think about John?"
    );
}

#[test]
fn where_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "think");
    let pp = about_john(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::Where);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Where do you think about John?"
    );
}

#[test]
fn when_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "think");
    let pp = about_john(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::When);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "When do you think about John?"
    );
}

#[test]
fn yes_no_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "think");
    let pp = about_john(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::YesNo);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Do you think about John?"
    );
}

#[test]
fn how_many_question_fronts_the_object() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_object_noun(clause, "computers");
    f.set_verb_word(clause, "give");
    let pp = f.preposition_phrase("to");
    f.set_pp_object_noun(pp, "John");
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::HowMany);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "How many computers do you give to John?"
    );
}

#[test]
fn who_object_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "present");
    let pp = f.preposition_phrase("to");
    f.set_pp_object_noun(pp, "John");
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::WhoObject);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Whom do you present to John?"
    );
}

#[test]
fn who_subject_question_takes_third_person() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "think");
    let pp = about_john(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::WhoSubject);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Who thinks about John?"
    );
}

#[test]
fn how_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "think");
    let pp = about_john(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::How);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "How do you think about John?"
    );
}

#[test]
fn which_question_fronts_the_object() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_object_noun(clause, "thoughts");
    f.set_verb_word(clause, "have");
    let pp = about_john(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::Which);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Which thoughts do you have about John?"
    );
}

#[test]
fn how_predicate_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let preposition = f.preposition_phrase("in");
    f.set_pp_object_noun(preposition, "Paris");
    let object = f.empty_noun_phrase();
    f.set_noun(object, "holiday");
    f.set_specifier(object, "your");
    f.add_complement(object, preposition);
    f.set_object(clause, object);

    let verb = f.verb_phrase("be");
    f.set_verb(clause, verb);
    f.set_feature(clause, Feature::Tense, Tense::Past);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::HowPredicate);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "How was your holiday in Paris?"
    );
}

#[test]
fn how_adjective_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = f.noun_phrase("John");
    f.set_subject(clause, subject);

    let verb = f.verb_phrase("be");
    f.set_verb(clause, verb);

    let adjective = f.adjective_phrase("smart");
    f.set_object(clause, adjective);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::HowAdjective);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "How smart is John?"
    );
}

#[test]
fn how_come_keeps_declarative_order() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "think");
    let pp = about_john(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::HowCome);
    f.set_feature(clause, Feature::Perfect, true);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "How come you have thought about John?"
    );
}

#[test]
fn what_subject_question_with_future_perfect() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "motivate");
    f.set_object_noun(clause, "John");
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::WhatSubject);
    f.set_feature(clause, Feature::Tense, Tense::Future);
    f.set_feature(clause, Feature::Perfect, true);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "What will have motivated John?"
    );
}

#[test]
fn whose_question_fronts_the_possessed_object() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "get");
    f.set_object_noun(clause, "keys");
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::Whose);
    f.set_feature(clause, Feature::Perfect, true);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Whose keys have you gotten?"
    );
}

//! End-to-end tests for the full Dutch interrogative inventory.

use std::sync::Arc;

use phrasal_elements::NlgFactory;
use phrasal_foundation::{ElementId, Feature, InterrogativeType, Person, Tense};
use phrasal_realiser::Realiser;

fn factory() -> (NlgFactory, Realiser) {
    let lexicon = Arc::new(phrasal_lexicon::dutch::lexicon());
    (
        NlgFactory::new(Arc::clone(&lexicon)),
        Realiser::new(lexicon),
    )
}

fn second_person_subject(f: &mut NlgFactory) -> ElementId {
    let subject = f.noun_phrase("JIJ");
    f.set_feature(subject, Feature::Pronominal, true);
    f.set_feature(subject, Feature::Person, Person::Second);
    subject
}

fn over_jan(f: &mut NlgFactory) -> ElementId {
    let pp = f.preposition_phrase("over");
    f.set_pp_object_noun(pp, "Jan");
    pp
}

#[test]
fn direct_what_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "denk");
    let pp = over_jan(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::WhatObject);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Wat denk jij over Jan?"
    );
}

#[test]
fn indirect_who_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "presenteer");
    f.set_object_noun(clause, "Jan");
    f.set_feature(
        clause,
        Feature::Interrogative,
        InterrogativeType::WhoIndirectObject,
    );
    f.set_feature(clause, Feature::Tense, Tense::Future);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Aan wie zal jij Jan presenteren?"
    );
}

#[test]
fn why_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "denk");
    let pp = over_jan(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::Why);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Waarom denk jij over Jan?"
    );
}

#[test]
fn where_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "denk");
    let pp = over_jan(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::Where);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Waar denk jij over Jan?"
    );
}

#[test]
fn when_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "denk");
    let pp = over_jan(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::When);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Wanneer denk jij over Jan?"
    );
}

#[test]
fn yes_no_question_inverts() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "denk");
    let pp = over_jan(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::YesNo);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Denk jij over Jan?"
    );
}

#[test]
fn how_many_fronts_the_object() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_object_noun(clause, "computers");
    f.set_verb_word(clause, "geven");
    let pp = f.preposition_phrase("aan");
    f.set_pp_object_noun(pp, "Jan");
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::HowMany);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Hoeveel computers geef jij aan Jan?"
    );
}

#[test]
fn direct_who_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "presenteren");
    let pp = f.preposition_phrase("aan");
    f.set_pp_object_noun(pp, "Jan");
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::WhoObject);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Wie presenteer jij aan Jan?"
    );
}

#[test]
fn subject_who_question_takes_third_person() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "denk");
    let pp = f.preposition_phrase("aan");
    f.set_pp_object_noun(pp, "Jan");
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::WhoSubject);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Wie denkt aan Jan?"
    );
}

#[test]
fn how_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "denk");
    let pp = over_jan(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::How);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Hoe denk jij over Jan?"
    );
}

#[test]
fn which_question_fronts_the_object() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_object_noun(clause, "gedachten");
    f.set_verb_word(clause, "hebben");
    let pp = over_jan(&mut f);
    f.add_complement(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::Which);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Welke gedachten heb jij over Jan?"
    );
}

#[test]
fn how_predicate_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let preposition = f.preposition_phrase("in");
    f.set_pp_object_noun(preposition, "Parijs");
    let subject = f.empty_noun_phrase();
    f.set_noun(subject, "vakantie");
    f.set_specifier(subject, "jouw");
    f.add_complement(subject, preposition);
    f.set_subject(clause, subject);

    let verb = f.verb_phrase("zijn");
    f.set_feature(clause, Feature::Tense, Tense::Past);
    f.set_verb(clause, verb);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::HowPredicate);

    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Hoe was jouw vakantie in Parijs?"
    );
}

#[test]
fn how_adjective_relocates_the_adjective() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = f.noun_phrase("Jan");
    f.set_subject(clause, subject);

    let verb = f.verb_phrase("zijn");
    f.set_verb(clause, verb);

    let adjective = f.adjective_phrase("slim");
    f.set_object(clause, adjective);
    f.add_complement_text(clause, "gewoonlijk");
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::HowAdjective);

    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Hoe slim is Jan gewoonlijk?"
    );
}

#[test]
fn how_come_question() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "denk");
    let pp = over_jan(&mut f);
    f.set_object(clause, pp);
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::HowCome);
    f.set_feature(clause, Feature::Tense, Tense::Future);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Hoezo zal jij over Jan denken?"
    );
}

#[test]
fn subject_what_question_with_future_perfect() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "motiveren");
    f.set_object_noun(clause, "Jan");
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::WhatSubject);
    f.set_feature(clause, Feature::Tense, Tense::Future);
    f.set_feature(clause, Feature::Perfect, true);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Wat zal Jan hebben gemotiveerd?"
    );
}

#[test]
fn whose_question_fronts_the_possessed_object() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = second_person_subject(&mut f);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "krijgen");
    f.set_object_noun(clause, "sleutels");
    f.set_feature(clause, Feature::Interrogative, InterrogativeType::Whose);
    f.set_feature(clause, Feature::Perfect, true);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Wiens sleutels heb jij gekregen?"
    );
}

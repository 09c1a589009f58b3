//! End-to-end tests for Dutch declarative clauses.

use std::sync::Arc;

use phrasal_elements::NlgFactory;
use phrasal_foundation::{Feature, NumberAgreement, Person, Tense};
use phrasal_realiser::Realiser;

fn factory() -> (NlgFactory, Realiser) {
    let lexicon = Arc::new(phrasal_lexicon::dutch::lexicon());
    (
        NlgFactory::new(Arc::clone(&lexicon)),
        Realiser::new(lexicon),
    )
}

#[test]
fn future_declarative_keeps_subject_initial() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = f.noun_phrase("YOU");
    f.set_feature(subject, Feature::Pronominal, true);
    f.set_feature(subject, Feature::Person, Person::Second);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "motiveren");
    f.set_object_noun(clause, "Jan");
    f.set_feature(clause, Feature::Tense, Tense::Future);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Jij zult Jan motiveren."
    );
}

#[test]
fn simple_present_declarative() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = f.noun_phrase("Jan");
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "denken");
    let pp = f.preposition_phrase("aan");
    f.set_pp_object_noun(pp, "Piet");
    f.add_complement(clause, pp);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Jan denkt aan Piet."
    );
}

#[test]
fn perfect_builds_hebben_plus_participle() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = f.noun_phrase("Jan");
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "motiveren");
    f.set_object_noun(clause, "Piet");
    f.set_feature(clause, Feature::Perfect, true);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Jan heeft Piet gemotiveerd."
    );
}

#[test]
fn perfect_selects_zijn_for_flagged_verbs() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = f.noun_phrase("Jan");
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "komen");
    f.set_feature(clause, Feature::Perfect, true);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Jan is gekomen."
    );
}

#[test]
fn negation_precedes_the_clause_final_cluster() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = f.noun_phrase("YOU");
    f.set_feature(subject, Feature::Pronominal, true);
    f.set_feature(subject, Feature::Person, Person::Second);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "motiveren");
    f.set_object_noun(clause, "Jan");
    f.set_feature(clause, Feature::Tense, Tense::Future);
    f.set_feature(clause, Feature::Negated, true);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Jij zult Jan niet motiveren."
    );
}

#[test]
fn separable_verb_detaches_its_preverb() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = f.noun_phrase("Jan");
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "opbellen");
    f.set_object_noun(clause, "Piet");
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Jan belt Piet op."
    );
}

#[test]
fn separable_verb_fuses_in_the_perfect() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = f.noun_phrase("Jan");
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "opbellen");
    f.set_object_noun(clause, "Piet");
    f.set_feature(clause, Feature::Perfect, true);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Jan heeft Piet opgebeld."
    );
}

#[test]
fn progressive_wraps_in_aan_het() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = f.noun_phrase("Jan");
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "motiveren");
    f.set_object_noun(clause, "Piet");
    f.set_feature(clause, Feature::Progressive, true);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Jan is Piet aan het motiveren."
    );
}

#[test]
fn past_tense_strong_verb() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = f.noun_phrase("Jan");
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "krijgen");
    f.set_object_noun(clause, "sleutels");
    f.set_feature(clause, Feature::Tense, Tense::Past);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Jan kreeg sleutels."
    );
}

#[test]
fn plural_subject_takes_plural_verb() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = f.noun_phrase("kind");
    f.set_feature(subject, Feature::Number, NumberAgreement::Plural);
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "denken");
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Kinderen denken."
    );
}

#[test]
fn clause_without_verb_realises_to_nothing() {
    let (mut f, realiser) = factory();
    let clause = f.clause();
    let subject = f.noun_phrase("Jan");
    f.set_subject(clause, subject);
    assert_eq!(realiser.realise_sentence(&mut f, clause).unwrap(), "");
}

#[test]
fn missing_auxiliary_is_a_fatal_configuration_error() {
    use phrasal_foundation::{Language, LexicalCategory, RealiseError};
    use phrasal_lexicon::{Lexicon, WordEntry};

    // a lexicon with verbs but no future auxiliary cannot drive the realiser
    let mut bare = Lexicon::new(Language::Dutch);
    bare.insert(WordEntry::new("motiveren", LexicalCategory::Verb));
    let lexicon = Arc::new(bare);
    let realiser = Realiser::new(Arc::clone(&lexicon));
    let mut f = NlgFactory::new(lexicon);

    let clause = f.clause();
    let subject = f.noun_phrase("Jan");
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "motiveren");
    f.set_feature(clause, Feature::Tense, Tense::Future);

    let err = realiser.realise_sentence(&mut f, clause).unwrap_err();
    assert!(matches!(err, RealiseError::MissingLexeme { ref base, .. } if base == "zullen"));
}

//! Integration tests for relative clauses and complementisers.

use std::sync::Arc;

use phrasal_elements::NlgFactory;
use phrasal_foundation::{ClauseStatus, Feature, Gender, NumberAgreement, Person, Tense};
use phrasal_realiser::Realiser;

fn dutch() -> (NlgFactory, Realiser) {
    let lexicon = Arc::new(phrasal_lexicon::dutch::lexicon());
    (
        NlgFactory::new(Arc::clone(&lexicon)),
        Realiser::new(lexicon),
    )
}

#[test]
fn subordinate_object_clause_takes_a_complementiser() {
    let (mut f, realiser) = dutch();
    let outer = f.clause();
    let subject = f.noun_phrase("JIJ");
    f.set_feature(subject, Feature::Pronominal, true);
    f.set_feature(subject, Feature::Person, Person::Second);
    f.set_subject(outer, subject);
    f.set_verb_word(outer, "denken");

    let inner = f.clause();
    let jan = f.noun_phrase("Jan");
    f.set_subject(inner, jan);
    f.set_verb_word(inner, "komen");
    f.set_feature(inner, Feature::ClauseStatus, ClauseStatus::Subordinate);
    f.set_feature(inner, Feature::Complementiser, "dat");
    f.set_object(outer, inner);

    assert_eq!(
        realiser.realise_sentence(&mut f, outer).unwrap(),
        "Jij denkt dat Jan komt."
    );
}

#[test]
fn relative_pronoun_agrees_with_a_common_antecedent() {
    let (mut f, realiser) = dutch();
    // "de hond die Jan ziet" shape: the antecedent noun phrase carries the
    // relative clause as a postmodifier; the relativised object is replaced
    // by the pronoun.
    let np = f.noun_phrase("hond");
    f.set_specifier(np, "de");

    let clause = f.clause();
    let jan = f.noun_phrase("Jan");
    f.set_subject(clause, jan);
    f.set_verb_word(clause, "denken");
    let rel = f.empty_noun_phrase();
    f.set_feature(rel, Feature::Gender, Gender::Common);
    f.set_feature(clause, Feature::RelativePhrase, rel);
    f.add_post_modifier(np, clause);

    let text = realiser
        .realise(f.tree_mut(), np)
        .unwrap()
        .unwrap_or_default();
    assert_eq!(text, "de hond die Jan denkt");
}

#[test]
fn relative_pronoun_degrades_to_dat_for_neuter_singular() {
    let (mut f, realiser) = dutch();
    let np = f.noun_phrase("huis");
    f.set_specifier(np, "het");

    let clause = f.clause();
    let jan = f.noun_phrase("Jan");
    f.set_subject(clause, jan);
    f.set_verb_word(clause, "denken");
    let rel = f.empty_noun_phrase();
    f.set_feature(rel, Feature::Gender, Gender::Neuter);
    f.set_feature(rel, Feature::Number, NumberAgreement::Singular);
    f.set_feature(clause, Feature::RelativePhrase, rel);
    f.add_post_modifier(np, clause);

    let text = realiser
        .realise(f.tree_mut(), np)
        .unwrap()
        .unwrap_or_default();
    assert_eq!(text, "het huis dat Jan denkt");
}

#[test]
fn subjunctive_clause_realises_radical_plus_e() {
    let (mut f, realiser) = dutch();
    let clause = f.clause();
    let subject = f.noun_phrase("koning");
    f.set_specifier(subject, "de");
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "leven");
    f.set_feature(clause, Feature::Form, phrasal_foundation::Form::Subjunctive);
    f.set_feature(clause, Feature::SuppressComplementiser, true);
    let text = realiser
        .realise(f.tree_mut(), clause)
        .unwrap()
        .unwrap_or_default();
    assert_eq!(text, "de koning leve");
}

#[test]
fn conditional_uses_the_past_future_auxiliary() {
    let (mut f, realiser) = dutch();
    let clause = f.clause();
    let subject = f.noun_phrase("Jan");
    f.set_subject(clause, subject);
    f.set_verb_word(clause, "komen");
    f.set_feature(clause, Feature::Tense, Tense::Conditional);
    assert_eq!(
        realiser.realise_sentence(&mut f, clause).unwrap(),
        "Jan zou komen."
    );
}

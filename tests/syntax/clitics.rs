//! Integration tests for French clitic selection and ordering.

use std::sync::Arc;

use phrasal_elements::{NlgFactory, PhraseTree};
use phrasal_foundation::{ElementId, Feature, Gender, NumberAgreement, Person};
use phrasal_lexicon::Lexicon;
use phrasal_syntax::verb_group::collect_clitics;
use phrasal_syntax::RealiseContext;

fn pronominal_np(
    f: &mut NlgFactory,
    base: &str,
    person: Person,
    number: NumberAgreement,
) -> ElementId {
    let np = f.noun_phrase(base);
    f.set_feature(np, Feature::Pronominal, true);
    f.set_feature(np, Feature::Person, person);
    f.set_feature(np, Feature::Number, number);
    np
}

fn with_clitics(
    build: impl FnOnce(&mut NlgFactory, ElementId),
) -> (PhraseTree, Arc<Lexicon>, Vec<ElementId>, Option<ElementId>) {
    let mut f = NlgFactory::new(Arc::new(phrasal_lexicon::french::lexicon()));
    let clause = f.clause();
    f.set_verb_word(clause, "donner");
    build(&mut f, clause);
    let vp = f.tree().phrase(clause).unwrap().head.unwrap();
    let lexicon = Arc::clone(f.lexicon());
    let mut tree = f.into_tree();
    let mut ctx = RealiseContext {
        tree: &mut tree,
        lexicon: &lexicon,
    };
    phrasal_syntax::shared::propagate_clause_features(ctx.tree, clause, vp);
    let choice = collect_clitics(&mut ctx, vp).unwrap();
    (tree, lexicon, choice.tokens, choice.direct_object)
}

#[test]
fn pronominal_object_becomes_a_clitic() {
    let (tree, _lexicon, tokens, direct) = with_clitics(|f, clause| {
        let object = pronominal_np(f, "le", Person::Third, NumberAgreement::Singular);
        f.set_object(clause, object);
    });
    assert_eq!(tokens.len(), 1);
    assert!(direct.is_some());
    assert!(tree.bag(direct.unwrap()).is(Feature::Clitic));
}

#[test]
fn third_person_indirect_precedes_the_direct_clitic() {
    // Clitic ordering law: with a pronominal direct object and a
    // third-person non-reflexive indirect object, the indirect token is
    // pushed directly before the direct token, so it surfaces right before
    // it in the realised cluster.
    let (tree, lexicon, tokens, _direct) = with_clitics(|f, clause| {
        let object = pronominal_np(f, "le", Person::Third, NumberAgreement::Singular);
        f.set_feature(object, Feature::Gender, Gender::Masculine);
        f.set_object(clause, object);
        let indirect = pronominal_np(f, "lui", Person::Third, NumberAgreement::Singular);
        f.set_indirect_object(clause, indirect);
    });
    assert_eq!(tokens.len(), 2);
    // push order is [indirect, direct]; reverse-push realisation puts the
    // direct object first in the fronted cluster, i.e. "le lui" surface
    // order after the finite verb split reverses them again
    let mut tree = tree;
    let surfaces: Vec<String> = tokens
        .iter()
        .map(|&t| {
            phrasal_morphology::realise_morphology(&mut tree, &lexicon, t)
                .and_then(|id| tree.realisation(id).map(String::from))
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(surfaces, vec!["lui".to_string(), "le".to_string()]);
}

#[test]
fn first_person_indirect_follows_the_direct_clitic() {
    let (tree, lexicon, tokens, _direct) = with_clitics(|f, clause| {
        let object = pronominal_np(f, "le", Person::Third, NumberAgreement::Singular);
        f.set_object(clause, object);
        let indirect = pronominal_np(f, "me", Person::First, NumberAgreement::Singular);
        f.set_indirect_object(clause, indirect);
    });
    assert_eq!(tokens.len(), 2);
    let mut tree = tree;
    let surfaces: Vec<String> = tokens
        .iter()
        .map(|&t| {
            phrasal_morphology::realise_morphology(&mut tree, &lexicon, t)
                .and_then(|id| tree.realisation(id).map(String::from))
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(surfaces, vec!["le".to_string(), "me".to_string()]);
}

#[test]
fn non_pronominal_objects_are_left_alone() {
    let (_tree, _lexicon, tokens, direct) = with_clitics(|f, clause| {
        let object = f.noun_phrase("cheval");
        f.set_object(clause, object);
    });
    assert!(tokens.is_empty());
    assert!(direct.is_none());
}

//! Integration tests for subject-verb agreement folding.

use std::sync::Arc;

use proptest::prelude::*;

use phrasal_elements::NlgFactory;
use phrasal_foundation::{Feature, Gender, NumberAgreement, Person};
use phrasal_syntax::shared::check_subject_agreement;

fn clause_with_subjects(
    genders: &[Gender],
    persons: &[Person],
) -> (phrasal_elements::PhraseTree, phrasal_foundation::ElementId) {
    let mut f = NlgFactory::new(Arc::new(phrasal_lexicon::dutch::lexicon()));
    let clause = f.clause();
    for (index, gender) in genders.iter().enumerate() {
        let subject = f.noun_phrase("hond");
        f.set_feature(subject, Feature::Gender, *gender);
        if let Some(person) = persons.get(index) {
            f.set_feature(subject, Feature::Person, *person);
        }
        f.set_subject(clause, subject);
    }
    f.set_verb_word(clause, "zijn");
    (f.into_tree(), clause)
}

#[test]
fn person_folds_first_before_second_before_third() {
    let (mut tree, clause) = clause_with_subjects(
        &[Gender::Masculine, Gender::Masculine],
        &[Person::Third, Person::Second],
    );
    let vp = tree.phrase(clause).unwrap().head.unwrap();
    check_subject_agreement(&mut tree, clause, vp, true);
    assert_eq!(tree.bag(vp).person(), Person::Second);

    let (mut tree, clause) = clause_with_subjects(
        &[Gender::Masculine, Gender::Masculine, Gender::Masculine],
        &[Person::Second, Person::First, Person::Third],
    );
    let vp = tree.phrase(clause).unwrap().head.unwrap();
    check_subject_agreement(&mut tree, clause, vp, true);
    assert_eq!(tree.bag(vp).person(), Person::First);
}

#[test]
fn multiple_subjects_are_plural() {
    let (mut tree, clause) =
        clause_with_subjects(&[Gender::Feminine, Gender::Feminine], &[]);
    let vp = tree.phrase(clause).unwrap().head.unwrap();
    check_subject_agreement(&mut tree, clause, vp, true);
    assert_eq!(tree.bag(vp).number(), NumberAgreement::Plural);
}

proptest! {
    /// The gender of the agreement target is feminine only when every
    /// subject is feminine, masculine otherwise.
    #[test]
    fn gender_folding_invariant(genders in prop::collection::vec(
        prop_oneof![
            Just(Gender::Masculine),
            Just(Gender::Feminine),
            Just(Gender::Common),
            Just(Gender::Neuter),
        ],
        1..5,
    )) {
        let (mut tree, clause) = clause_with_subjects(&genders, &[]);
        let vp = tree.phrase(clause).unwrap().head.unwrap();
        check_subject_agreement(&mut tree, clause, vp, true);
        let expected = if genders.iter().all(|&g| g == Gender::Feminine) {
            Gender::Feminine
        } else {
            Gender::Masculine
        };
        prop_assert_eq!(tree.bag(vp).gender(), expected);
    }
}

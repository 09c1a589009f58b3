//! Integration tests for feature values and grammatical enums.

use phrasal_foundation::{
    ElementId, FeatureValue, Form, Gender, InterrogativeType, NumberAgreement, Person, Tense,
};

// =============================================================================
// Feature values
// =============================================================================

#[test]
fn value_round_trips() {
    assert_eq!(FeatureValue::from(true).as_flag(), Some(true));
    assert_eq!(FeatureValue::from("zullen").as_text(), Some("zullen"));
    assert_eq!(
        FeatureValue::from(Tense::Conditional).as_tense(),
        Some(Tense::Conditional)
    );
    assert_eq!(
        FeatureValue::from(Form::PastParticiple).as_form(),
        Some(Form::PastParticiple)
    );
    assert_eq!(
        FeatureValue::from(Gender::Common).as_gender(),
        Some(Gender::Common)
    );
}

#[test]
fn value_cross_type_extraction_is_none() {
    let v = FeatureValue::from(Person::First);
    assert_eq!(v.as_flag(), None);
    assert_eq!(v.as_text(), None);
    assert_eq!(v.as_number(), None);
}

#[test]
fn element_list_values() {
    let ids = vec![ElementId::new(1, 0), ElementId::new(2, 0)];
    let v = FeatureValue::from(ids.clone());
    assert_eq!(v.as_elements(), Some(ids.as_slice()));
    assert_eq!(v.as_element(), None);
}

// =============================================================================
// Interrogative type predicates
// =============================================================================

#[test]
fn object_questions_suppress_objects() {
    assert!(InterrogativeType::WhatObject.asks_about_object());
    assert!(InterrogativeType::WhoObject.asks_about_object());
    assert!(!InterrogativeType::WhoIndirectObject.asks_about_object());
    assert!(!InterrogativeType::Whose.asks_about_object());
}

#[test]
fn subject_questions_stand_in_for_the_subject() {
    assert!(InterrogativeType::WhoSubject.asks_about_subject());
    assert!(InterrogativeType::WhatSubject.asks_about_subject());
    assert!(!InterrogativeType::WhatObject.asks_about_subject());
}

#[test]
fn fronting_types_are_the_documented_four() {
    let fronting: Vec<_> = [
        InterrogativeType::YesNo,
        InterrogativeType::How,
        InterrogativeType::HowAdjective,
        InterrogativeType::HowCome,
        InterrogativeType::HowMany,
        InterrogativeType::HowPredicate,
        InterrogativeType::WhatObject,
        InterrogativeType::WhatSubject,
        InterrogativeType::When,
        InterrogativeType::Where,
        InterrogativeType::Which,
        InterrogativeType::WhoIndirectObject,
        InterrogativeType::WhoObject,
        InterrogativeType::WhoSubject,
        InterrogativeType::Whose,
        InterrogativeType::Why,
    ]
    .into_iter()
    .filter(|q| q.fronts_object())
    .collect();
    assert_eq!(
        fronting,
        vec![
            InterrogativeType::HowAdjective,
            InterrogativeType::HowMany,
            InterrogativeType::Which,
            InterrogativeType::Whose,
        ]
    );
}

// =============================================================================
// Number helpers
// =============================================================================

#[test]
fn both_counts_as_singular_for_agreement() {
    assert!(!NumberAgreement::Both.is_plural());
    assert!(NumberAgreement::Plural.is_plural());
}

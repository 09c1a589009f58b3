//! The per-element feature store.

use im::HashMap;

use crate::features::{
    ClauseStatus, DiscourseFunction, Feature, Form, Gender, InterrogativeType, NumberAgreement,
    Person, PronounType, Tense,
};
use crate::id::ElementId;
use crate::value::FeatureValue;

/// A mutable store of grammatical features attached to one element.
///
/// Lookup on an absent key never fails: the typed accessors resolve unset
/// features to the documented language defaults (singular number, third
/// person, masculine gender, present tense, normal form). Cloning a bag is
/// cheap structural sharing, which matters because inflected tokens copy
/// their word's lexical features and realised lists copy the source phrase's
/// features wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureBag {
    features: HashMap<Feature, FeatureValue>,
}

impl FeatureBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a feature, replacing any previous value.
    pub fn set(&mut self, key: Feature, value: impl Into<FeatureValue>) {
        self.features.insert(key, value.into());
    }

    /// Removes a feature.
    pub fn remove(&mut self, key: Feature) {
        self.features.remove(&key);
    }

    /// Returns the raw value of a feature, if set.
    #[must_use]
    pub fn get(&self, key: Feature) -> Option<&FeatureValue> {
        self.features.get(&key)
    }

    /// True if the feature is present, whatever its value.
    #[must_use]
    pub fn has(&self, key: Feature) -> bool {
        self.features.contains_key(&key)
    }

    /// Copies every feature of `other` into this bag, overwriting clashes.
    pub fn absorb(&mut self, other: &Self) {
        for (key, value) in &other.features {
            self.features.insert(*key, value.clone());
        }
    }

    /// Iterates over the set features.
    pub fn iter(&self) -> impl Iterator<Item = (&Feature, &FeatureValue)> {
        self.features.iter()
    }

    // --- typed accessors with documented defaults ------------------------

    /// Boolean feature; unset resolves to `false`.
    #[must_use]
    pub fn is(&self, key: Feature) -> bool {
        self.get(key).and_then(FeatureValue::as_flag).unwrap_or(false)
    }

    /// Text feature; unset resolves to `None`.
    #[must_use]
    pub fn text(&self, key: Feature) -> Option<&str> {
        self.get(key).and_then(FeatureValue::as_text)
    }

    /// Tense; unset resolves to [`Tense::Present`].
    #[must_use]
    pub fn tense(&self) -> Tense {
        self.get(Feature::Tense)
            .and_then(FeatureValue::as_tense)
            .unwrap_or_default()
    }

    /// Person; unset resolves to [`Person::Third`].
    #[must_use]
    pub fn person(&self) -> Person {
        self.get(Feature::Person)
            .and_then(FeatureValue::as_person)
            .unwrap_or_default()
    }

    /// Person, without the default.
    #[must_use]
    pub fn person_opt(&self) -> Option<Person> {
        self.get(Feature::Person).and_then(FeatureValue::as_person)
    }

    /// Number; unset resolves to [`NumberAgreement::Singular`].
    #[must_use]
    pub fn number(&self) -> NumberAgreement {
        self.get(Feature::Number)
            .and_then(FeatureValue::as_number)
            .unwrap_or_default()
    }

    /// Number, without the default.
    #[must_use]
    pub fn number_opt(&self) -> Option<NumberAgreement> {
        self.get(Feature::Number).and_then(FeatureValue::as_number)
    }

    /// True when the number feature resolves to plural.
    #[must_use]
    pub fn is_plural(&self) -> bool {
        self.number().is_plural()
    }

    /// Gender; unset resolves to [`Gender::Masculine`].
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.get(Feature::Gender)
            .and_then(FeatureValue::as_gender)
            .unwrap_or_default()
    }

    /// Gender, without the default.
    #[must_use]
    pub fn gender_opt(&self) -> Option<Gender> {
        self.get(Feature::Gender).and_then(FeatureValue::as_gender)
    }

    /// Form; unset resolves to [`Form::Normal`].
    #[must_use]
    pub fn form(&self) -> Form {
        self.get(Feature::Form)
            .and_then(FeatureValue::as_form)
            .unwrap_or_default()
    }

    /// Clause status; unset resolves to [`ClauseStatus::Matrix`].
    #[must_use]
    pub fn clause_status(&self) -> ClauseStatus {
        self.get(Feature::ClauseStatus)
            .and_then(FeatureValue::as_status)
            .unwrap_or_default()
    }

    /// Discourse function, if set.
    #[must_use]
    pub fn function(&self) -> Option<DiscourseFunction> {
        self.get(Feature::Function).and_then(FeatureValue::as_function)
    }

    /// Interrogative type, if set.
    #[must_use]
    pub fn interrogative(&self) -> Option<InterrogativeType> {
        self.get(Feature::Interrogative)
            .and_then(FeatureValue::as_question)
    }

    /// Pronoun subtype, if set.
    #[must_use]
    pub fn pronoun_kind(&self) -> Option<PronounType> {
        self.get(Feature::PronounKind)
            .and_then(FeatureValue::as_pronoun)
    }

    /// Element reference feature, if set.
    #[must_use]
    pub fn element(&self, key: Feature) -> Option<ElementId> {
        self.get(key).and_then(FeatureValue::as_element)
    }

    /// Element list feature; unset resolves to the empty slice.
    #[must_use]
    pub fn elements(&self, key: Feature) -> &[ElementId] {
        self.get(key)
            .and_then(FeatureValue::as_elements)
            .unwrap_or(&[])
    }
}

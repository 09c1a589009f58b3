//! Grammatical feature model and core types for Phrasal.
//!
//! This crate provides:
//! - The closed grammatical enums ([`Tense`], [`Person`], [`NumberAgreement`],
//!   [`Gender`], [`Form`], [`DiscourseFunction`], [`InterrogativeType`], ...)
//! - [`Feature`] / [`FeatureValue`] - the typed feature key/value model
//! - [`FeatureBag`] - the per-element feature store with documented defaults
//! - [`ElementId`] - generational identifiers for phrase-tree elements
//! - [`RealiseError`] - error types for realisation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bag;
mod error;
mod features;
mod id;
mod value;

pub use bag::FeatureBag;
pub use error::{RealiseError, Result};
pub use features::{
    ClauseStatus, DiscourseFunction, Feature, Form, Gender, InflectionPattern, InterrogativeType,
    Language, LexicalCategory, NumberAgreement, Person, PhraseCategory, PronounType, Tense,
};
pub use id::ElementId;
pub use value::FeatureValue;

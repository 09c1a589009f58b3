//! Polymorphic feature values.

use std::fmt;
use std::sync::Arc;

use crate::features::{
    ClauseStatus, DiscourseFunction, Form, Gender, InflectionPattern, InterrogativeType,
    NumberAgreement, Person, PronounType, Tense,
};
use crate::id::ElementId;

/// A value stored under a [`crate::Feature`] key.
///
/// Values are cheap to clone: text is reference-counted and element lists
/// hold ids, not elements.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeatureValue {
    /// Boolean flag.
    Flag(bool),
    /// Free text (base forms, irregular cells, particles).
    Text(Arc<str>),
    /// Tense value.
    Tense(Tense),
    /// Person value.
    Person(Person),
    /// Number value.
    Number(NumberAgreement),
    /// Gender value.
    Gender(Gender),
    /// Form value.
    Form(Form),
    /// Clause status value.
    Status(ClauseStatus),
    /// Discourse function value.
    Function(DiscourseFunction),
    /// Interrogative type value.
    Question(InterrogativeType),
    /// Pronoun subtype value.
    Pronoun(PronounType),
    /// Inflection pattern value.
    Pattern(InflectionPattern),
    /// Reference to another element.
    Element(ElementId),
    /// Ordered list of element references.
    Elements(Vec<ElementId>),
}

impl FeatureValue {
    /// Attempts to extract a boolean flag.
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a tense value.
    #[must_use]
    pub const fn as_tense(&self) -> Option<Tense> {
        match self {
            Self::Tense(t) => Some(*t),
            _ => None,
        }
    }

    /// Attempts to extract a person value.
    #[must_use]
    pub const fn as_person(&self) -> Option<Person> {
        match self {
            Self::Person(p) => Some(*p),
            _ => None,
        }
    }

    /// Attempts to extract a number value.
    #[must_use]
    pub const fn as_number(&self) -> Option<NumberAgreement> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a gender value.
    #[must_use]
    pub const fn as_gender(&self) -> Option<Gender> {
        match self {
            Self::Gender(g) => Some(*g),
            _ => None,
        }
    }

    /// Attempts to extract a form value.
    #[must_use]
    pub const fn as_form(&self) -> Option<Form> {
        match self {
            Self::Form(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to extract a clause status value.
    #[must_use]
    pub const fn as_status(&self) -> Option<ClauseStatus> {
        match self {
            Self::Status(s) => Some(*s),
            _ => None,
        }
    }

    /// Attempts to extract a discourse function value.
    #[must_use]
    pub const fn as_function(&self) -> Option<DiscourseFunction> {
        match self {
            Self::Function(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to extract an interrogative type value.
    #[must_use]
    pub const fn as_question(&self) -> Option<InterrogativeType> {
        match self {
            Self::Question(q) => Some(*q),
            _ => None,
        }
    }

    /// Attempts to extract a pronoun subtype value.
    #[must_use]
    pub const fn as_pronoun(&self) -> Option<PronounType> {
        match self {
            Self::Pronoun(p) => Some(*p),
            _ => None,
        }
    }

    /// Attempts to extract an inflection pattern value.
    #[must_use]
    pub const fn as_pattern(&self) -> Option<InflectionPattern> {
        match self {
            Self::Pattern(p) => Some(*p),
            _ => None,
        }
    }

    /// Attempts to extract a single element reference.
    #[must_use]
    pub const fn as_element(&self) -> Option<ElementId> {
        match self {
            Self::Element(id) => Some(*id),
            _ => None,
        }
    }

    /// Attempts to extract an element list.
    #[must_use]
    pub fn as_elements(&self) -> Option<&[ElementId]> {
        match self {
            Self::Elements(ids) => Some(ids),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Tense(v) => write!(f, "{v:?}"),
            Self::Person(v) => write!(f, "{v:?}"),
            Self::Number(v) => write!(f, "{v:?}"),
            Self::Gender(v) => write!(f, "{v:?}"),
            Self::Form(v) => write!(f, "{v:?}"),
            Self::Status(v) => write!(f, "{v:?}"),
            Self::Function(v) => write!(f, "{v:?}"),
            Self::Question(v) => write!(f, "{v:?}"),
            Self::Pronoun(v) => write!(f, "{v:?}"),
            Self::Pattern(v) => write!(f, "{v:?}"),
            Self::Element(id) => write!(f, "{id}"),
            Self::Elements(ids) => {
                write!(f, "[")?;
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{id}")?;
                }
                write!(f, "]")
            }
        }
    }
}

// Convenience From implementations

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self {
        Self::Text(s.into())
    }
}

impl From<Tense> for FeatureValue {
    fn from(v: Tense) -> Self {
        Self::Tense(v)
    }
}

impl From<Person> for FeatureValue {
    fn from(v: Person) -> Self {
        Self::Person(v)
    }
}

impl From<NumberAgreement> for FeatureValue {
    fn from(v: NumberAgreement) -> Self {
        Self::Number(v)
    }
}

impl From<Gender> for FeatureValue {
    fn from(v: Gender) -> Self {
        Self::Gender(v)
    }
}

impl From<Form> for FeatureValue {
    fn from(v: Form) -> Self {
        Self::Form(v)
    }
}

impl From<ClauseStatus> for FeatureValue {
    fn from(v: ClauseStatus) -> Self {
        Self::Status(v)
    }
}

impl From<DiscourseFunction> for FeatureValue {
    fn from(v: DiscourseFunction) -> Self {
        Self::Function(v)
    }
}

impl From<InterrogativeType> for FeatureValue {
    fn from(v: InterrogativeType) -> Self {
        Self::Question(v)
    }
}

impl From<PronounType> for FeatureValue {
    fn from(v: PronounType) -> Self {
        Self::Pronoun(v)
    }
}

impl From<InflectionPattern> for FeatureValue {
    fn from(v: InflectionPattern) -> Self {
        Self::Pattern(v)
    }
}

impl From<ElementId> for FeatureValue {
    fn from(v: ElementId) -> Self {
        Self::Element(v)
    }
}

impl From<Vec<ElementId>> for FeatureValue {
    fn from(v: Vec<ElementId>) -> Self {
        Self::Elements(v)
    }
}

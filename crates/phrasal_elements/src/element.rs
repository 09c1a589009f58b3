//! The element model.

use std::sync::Arc;

use phrasal_foundation::{ElementId, FeatureBag, LexicalCategory, PhraseCategory};

/// A syntactic element: its kind-specific payload, its feature bag, and a
/// weak navigation-only link to its parent.
#[derive(Clone, Debug)]
pub struct Element {
    /// Kind-specific payload.
    pub kind: ElementKind,
    /// Grammatical features attached to this element.
    pub features: FeatureBag,
    /// Parent element, set when the element is attached. Navigation only;
    /// ownership always runs downwards.
    pub parent: Option<ElementId>,
}

impl Element {
    /// Creates an element with an empty feature bag and no parent.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            features: FeatureBag::new(),
            parent: None,
        }
    }

    /// Creates an element carrying the given features.
    #[must_use]
    pub fn with_features(kind: ElementKind, features: FeatureBag) -> Self {
        Self {
            kind,
            features,
            parent: None,
        }
    }
}

/// Kind-specific element payloads.
#[derive(Clone, Debug)]
pub enum ElementKind {
    /// A base word straight from the lexicon.
    Word(WordData),
    /// A word plus the contextual features morphology will consume to
    /// produce one surface string.
    Inflected(WordData),
    /// A phrase with typed child slots.
    Phrase(PhraseData),
    /// An ordered, mutable sequence of realised or in-progress elements.
    List(Vec<ElementId>),
    /// A terminal surface string, keeping the source word's category and
    /// features for morphophonology.
    Text(TextData),
}

/// Payload of word and inflected-word elements.
#[derive(Clone, Debug)]
pub struct WordData {
    /// Base form of the word.
    pub base: Arc<str>,
    /// Lexical category.
    pub category: LexicalCategory,
}

impl WordData {
    /// Creates word data.
    #[must_use]
    pub fn new(base: &str, category: LexicalCategory) -> Self {
        Self {
            base: base.into(),
            category,
        }
    }
}

/// Payload of phrase elements: children tagged by their syntactic slot.
#[derive(Clone, Debug, Default)]
pub struct PhraseData {
    /// Phrase category.
    pub category: Option<PhraseCategory>,
    /// Head of the phrase (the verb phrase for clauses).
    pub head: Option<ElementId>,
    /// Specifier (noun phrases).
    pub specifier: Option<ElementId>,
    /// Clause subjects.
    pub subjects: Vec<ElementId>,
    /// Complements, tagged individually with their discourse function.
    pub complements: Vec<ElementId>,
    /// Modifiers realised clause-initially.
    pub front_modifiers: Vec<ElementId>,
    /// Modifiers realised before the head.
    pub pre_modifiers: Vec<ElementId>,
    /// Modifiers realised after the head.
    pub post_modifiers: Vec<ElementId>,
}

impl PhraseData {
    /// Creates an empty phrase of the given category.
    #[must_use]
    pub fn new(category: PhraseCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }
}

/// Payload of terminal text elements.
#[derive(Clone, Debug)]
pub struct TextData {
    /// The realised surface string. `None` once a morphophonology rule has
    /// absorbed this token into its left neighbour.
    pub text: Option<String>,
    /// Lexical category of the source word, if any.
    pub category: Option<LexicalCategory>,
}

impl TextData {
    /// Creates realised text.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            category: None,
        }
    }

    /// Creates realised text remembering the source category.
    #[must_use]
    pub fn with_category(text: &str, category: LexicalCategory) -> Self {
        Self {
            text: Some(text.to_string()),
            category: Some(category),
        }
    }
}

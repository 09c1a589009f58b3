//! Lexicon entries.

use std::sync::Arc;

use phrasal_foundation::{Feature, FeatureBag, FeatureValue, LexicalCategory};

/// One word in a lexicon: base form, category, and lexical features.
///
/// Lexical features are open-ended: each language module registers its own
/// keys (irregular conjugation cells, auxiliary-selection flags, gender,
/// pronoun subtype) and the morphology rules probe them before falling back
/// to the regular derivations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordEntry {
    base: Arc<str>,
    category: LexicalCategory,
    features: FeatureBag,
}

impl WordEntry {
    /// Creates an entry with no lexical features.
    #[must_use]
    pub fn new(base: &str, category: LexicalCategory) -> Self {
        Self {
            base: base.into(),
            category,
            features: FeatureBag::new(),
        }
    }

    /// Adds one lexical feature (builder style).
    #[must_use]
    pub fn with(mut self, key: Feature, value: impl Into<FeatureValue>) -> Self {
        self.features.set(key, value);
        self
    }

    /// The base form.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The lexical category.
    #[must_use]
    pub const fn category(&self) -> LexicalCategory {
        self.category
    }

    /// The lexical feature bag.
    #[must_use]
    pub const fn features(&self) -> &FeatureBag {
        &self.features
    }

    /// True if every constraint is matched by this entry's features.
    #[must_use]
    pub fn matches(&self, constraints: &[(Feature, FeatureValue)]) -> bool {
        constraints
            .iter()
            .all(|(key, value)| self.features.get(*key) == Some(value))
    }
}

//! Keyed word storage with forward and reverse lookup.

use std::collections::HashMap;
use std::sync::Arc;

use phrasal_foundation::{
    Feature, FeatureValue, Language, LexicalCategory, RealiseError, Result,
};

use crate::entry::WordEntry;

/// An in-memory lexicon for one language.
///
/// Homographs are allowed: several entries may share a base form and even a
/// category (two Dutch "zij" pronouns); forward lookup returns the first
/// registered entry, reverse lookup scans for a feature match.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lexicon {
    language: Option<Language>,
    entries: Vec<WordEntry>,
    variants: Vec<(String, LexicalCategory, String)>,
    #[cfg_attr(feature = "serde", serde(skip))]
    by_base: HashMap<(Arc<str>, LexicalCategory), Vec<usize>>,
}

impl Lexicon {
    /// Creates an empty lexicon for the given language.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language: Some(language),
            entries: Vec::new(),
            variants: Vec::new(),
            by_base: HashMap::new(),
        }
    }

    /// The language this lexicon serves.
    ///
    /// Defaults to English for a lexicon deserialized without a tag.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language.unwrap_or(Language::English)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the lexicon has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers an entry.
    pub fn insert(&mut self, entry: WordEntry) {
        let key = (Arc::from(entry.base()), entry.category());
        let index = self.entries.len();
        self.entries.push(entry);
        self.by_base.entry(key).or_default().push(index);
    }

    /// Looks a word up by base form and category.
    #[must_use]
    pub fn lookup(&self, base: &str, category: LexicalCategory) -> Option<&WordEntry> {
        let key = (Arc::from(base), category);
        self.by_base
            .get(&key)
            .and_then(|indices| indices.first())
            .map(|&i| &self.entries[i])
    }

    /// Looks a word up by base form under any category.
    #[must_use]
    pub fn lookup_any(&self, base: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|entry| entry.base() == base)
    }

    /// Registers an inflected variant that resolves back to a base entry
    /// ("presenteer" resolves to "presenteren"), so callers may construct
    /// words from surface forms.
    pub fn insert_variant(&mut self, variant: &str, category: LexicalCategory, base: &str) {
        self.variants
            .push((variant.to_string(), category, base.to_string()));
    }

    /// Resolves a surface form to its entry: an exact base-form hit first,
    /// then the registered variant rows.
    #[must_use]
    pub fn resolve(&self, form: &str, category: LexicalCategory) -> Option<&WordEntry> {
        if let Some(entry) = self.lookup(form, category) {
            return Some(entry);
        }
        self.variants
            .iter()
            .find(|(variant, cat, _)| variant == form && *cat == category)
            .and_then(|(_, _, base)| self.lookup(base, category))
    }

    /// True if an entry exists for the base form and category.
    #[must_use]
    pub fn has(&self, base: &str, category: LexicalCategory) -> bool {
        self.lookup(base, category).is_some()
    }

    /// Looks a word up, treating absence as a fatal configuration error.
    ///
    /// The language modules use this for the closed grammatical classes
    /// (auxiliaries, modals, negation particles, complementisers); a lexicon
    /// that cannot supply them cannot drive the realiser.
    ///
    /// # Errors
    /// Returns [`RealiseError::MissingLexeme`] when the entry is absent.
    pub fn require(&self, base: &str, category: LexicalCategory) -> Result<&WordEntry> {
        self.lookup(base, category)
            .ok_or_else(|| RealiseError::missing_lexeme(base, category, self.language()))
    }

    /// Reverse lookup: the first entry of the category matching every
    /// feature constraint. Used for pronoun and relative-pronoun selection.
    #[must_use]
    pub fn lookup_by_features(
        &self,
        category: LexicalCategory,
        constraints: &[(Feature, FeatureValue)],
    ) -> Option<&WordEntry> {
        self.entries
            .iter()
            .find(|entry| entry.category() == category && entry.matches(constraints))
    }

    /// Serializes the lexicon to MessagePack bytes.
    ///
    /// # Errors
    /// Returns the underlying encoder error.
    #[cfg(feature = "serde")]
    pub fn to_bytes(&self) -> std::result::Result<Vec<u8>, rmp_serde::encode::Error> {
        rmp_serde::to_vec(self)
    }

    /// Deserializes a lexicon from MessagePack bytes, rebuilding the index.
    ///
    /// # Errors
    /// Returns the underlying decoder error.
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, rmp_serde::decode::Error> {
        let mut lexicon: Self = rmp_serde::from_slice(bytes)?;
        lexicon.rebuild_index();
        Ok(lexicon)
    }

    #[cfg(feature = "serde")]
    fn rebuild_index(&mut self) {
        self.by_base.clear();
        for (index, entry) in self.entries.iter().enumerate() {
            let key = (Arc::from(entry.base()), entry.category());
            self.by_base.entry(key).or_default().push(index);
        }
    }
}

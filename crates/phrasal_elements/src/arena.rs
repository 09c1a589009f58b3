//! Generational arena owning phrase-tree elements.

use std::sync::OnceLock;

use phrasal_foundation::{
    ElementId, Feature, FeatureBag, FeatureValue, LexicalCategory, PhraseCategory,
};

use crate::element::{Element, ElementKind, PhraseData, TextData};

fn empty_bag() -> &'static FeatureBag {
    static EMPTY: OnceLock<FeatureBag> = OnceLock::new();
    EMPTY.get_or_init(FeatureBag::new)
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// Arena storage for one phrase tree.
///
/// Ids are generational: removing an element bumps its slot's generation, so
/// stale ids are detected instead of aliasing. Reads through a stale or
/// foreign id degrade to "no element" (empty features, no children) rather
/// than panicking, matching the soft-default discipline of the rule code.
#[derive(Clone, Debug, Default)]
pub struct PhraseTree {
    slots: Vec<Slot>,
}

impl PhraseTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.element.is_some()).count()
    }

    /// True if the tree holds no live elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element and returns its id.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` elements are inserted.
    pub fn insert(&mut self, element: Element) -> ElementId {
        let index = u32::try_from(self.slots.len()).expect("phrase tree overflow");
        self.slots.push(Slot {
            generation: 0,
            element: Some(element),
        });
        ElementId::new(index, 0)
    }

    /// Removes an element, invalidating its id.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let element = slot.element.take();
        if element.is_some() {
            slot.generation += 1;
        }
        element
    }

    /// Returns the element behind a live id.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.element.as_ref()
    }

    /// Returns the element behind a live id, mutably.
    #[must_use]
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.element.as_mut()
    }

    /// True if the id refers to a live element.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    // --- feature access ---------------------------------------------------

    /// The feature bag of an element; empty for a stale id.
    #[must_use]
    pub fn bag(&self, id: ElementId) -> &FeatureBag {
        self.get(id).map_or_else(|| empty_bag(), |e| &e.features)
    }

    /// The feature bag of an element, mutably.
    #[must_use]
    pub fn bag_mut(&mut self, id: ElementId) -> Option<&mut FeatureBag> {
        self.get_mut(id).map(|e| &mut e.features)
    }

    /// Sets a feature on an element; no-op for a stale id.
    pub fn set(&mut self, id: ElementId, key: Feature, value: impl Into<FeatureValue>) {
        if let Some(bag) = self.bag_mut(id) {
            bag.set(key, value);
        }
    }

    /// Removes a feature from an element.
    pub fn unset(&mut self, id: ElementId, key: Feature) {
        if let Some(bag) = self.bag_mut(id) {
            bag.remove(key);
        }
    }

    // --- structure --------------------------------------------------------

    /// Parent of an element, if attached.
    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|e| e.parent)
    }

    /// Records `parent` as the parent of `child`.
    pub fn attach(&mut self, parent: ElementId, child: ElementId) {
        if let Some(element) = self.get_mut(child) {
            element.parent = Some(parent);
        }
    }

    /// Phrase payload of an element, if it is a phrase.
    #[must_use]
    pub fn phrase(&self, id: ElementId) -> Option<&PhraseData> {
        match self.get(id)?.kind {
            ElementKind::Phrase(ref data) => Some(data),
            _ => None,
        }
    }

    /// Phrase payload of an element, mutably.
    #[must_use]
    pub fn phrase_mut(&mut self, id: ElementId) -> Option<&mut PhraseData> {
        match self.get_mut(id)?.kind {
            ElementKind::Phrase(ref mut data) => Some(data),
            _ => None,
        }
    }

    /// Phrase category of an element, if it is a phrase.
    #[must_use]
    pub fn phrase_category(&self, id: ElementId) -> Option<PhraseCategory> {
        self.phrase(id).and_then(|p| p.category)
    }

    /// True if the element is a phrase of the given category.
    #[must_use]
    pub fn is_phrase(&self, id: ElementId, category: PhraseCategory) -> bool {
        self.phrase_category(id) == Some(category)
    }

    /// Lexical category of a word, inflected, or text element.
    #[must_use]
    pub fn lexical_category(&self, id: ElementId) -> Option<LexicalCategory> {
        match self.get(id)?.kind {
            ElementKind::Word(ref data) | ElementKind::Inflected(ref data) => Some(data.category),
            ElementKind::Text(ref data) => data.category,
            _ => None,
        }
    }

    /// True if the element is a word-like element of the given category.
    #[must_use]
    pub fn is_a(&self, id: ElementId, category: LexicalCategory) -> bool {
        self.lexical_category(id) == Some(category)
    }

    /// Base form of a word or inflected element.
    #[must_use]
    pub fn base_form(&self, id: ElementId) -> Option<&str> {
        match self.get(id)?.kind {
            ElementKind::Word(ref data) | ElementKind::Inflected(ref data) => Some(&data.base),
            _ => None,
        }
    }

    // --- lists ------------------------------------------------------------

    /// Creates an empty list element.
    pub fn new_list(&mut self) -> ElementId {
        self.insert(Element::new(ElementKind::List(Vec::new())))
    }

    /// Creates a list element copying the features of a source element,
    /// the way a realised list mirrors the phrase it came from.
    pub fn new_list_from(&mut self, source: ElementId) -> ElementId {
        let features = self.bag(source).clone();
        self.insert(Element::with_features(
            ElementKind::List(Vec::new()),
            features,
        ))
    }

    /// Items of a list element; empty for anything else.
    #[must_use]
    pub fn list_items(&self, id: ElementId) -> &[ElementId] {
        match self.get(id) {
            Some(Element {
                kind: ElementKind::List(items),
                ..
            }) => items,
            _ => &[],
        }
    }

    /// Appends an item to a list element.
    pub fn push_item(&mut self, list: ElementId, item: ElementId) {
        if let Some(Element {
            kind: ElementKind::List(items),
            ..
        }) = self.get_mut(list)
        {
            items.push(item);
        }
    }

    /// Appends an item unless it is `None`.
    pub fn push_opt(&mut self, list: ElementId, item: Option<ElementId>) {
        if let Some(item) = item {
            self.push_item(list, item);
        }
    }

    /// Inserts an item at an index of a list element, clamping to the end.
    pub fn insert_item(&mut self, list: ElementId, index: usize, item: ElementId) {
        if let Some(Element {
            kind: ElementKind::List(items),
            ..
        }) = self.get_mut(list)
        {
            let index = index.min(items.len());
            items.insert(index, item);
        }
    }

    /// Removes the item at an index of a list element.
    pub fn remove_item(&mut self, list: ElementId, index: usize) -> Option<ElementId> {
        if let Some(Element {
            kind: ElementKind::List(items),
            ..
        }) = self.get_mut(list)
        {
            if index < items.len() {
                return Some(items.remove(index));
            }
        }
        None
    }

    // --- text -------------------------------------------------------------

    /// Creates a realised text element carrying the source element's
    /// features and category.
    pub fn new_text_from(&mut self, text: &str, source: ElementId) -> ElementId {
        let features = self.bag(source).clone();
        let category = self.lexical_category(source);
        let mut data = TextData::new(text);
        data.category = category;
        self.insert(Element::with_features(ElementKind::Text(data), features))
    }

    /// Creates a canned text element with no source.
    pub fn new_text(&mut self, text: &str) -> ElementId {
        self.insert(Element::new(ElementKind::Text(TextData::new(text))))
    }

    /// The realisation of a text element, unless cleared.
    #[must_use]
    pub fn realisation(&self, id: ElementId) -> Option<&str> {
        match self.get(id)?.kind {
            ElementKind::Text(ref data) => data.text.as_deref(),
            _ => None,
        }
    }

    /// Overwrites the realisation of a text element.
    pub fn set_realisation(&mut self, id: ElementId, text: &str) {
        if let Some(Element {
            kind: ElementKind::Text(data),
            ..
        }) = self.get_mut(id)
        {
            data.text = Some(text.to_string());
        }
    }

    /// Clears the realisation of a text element; the token is dropped from
    /// final output.
    pub fn clear_realisation(&mut self, id: ElementId) {
        if let Some(Element {
            kind: ElementKind::Text(data),
            ..
        }) = self.get_mut(id)
        {
            data.text = None;
        }
    }

    /// Collects the text leaves under an element, depth first, in order.
    pub fn flatten_text(&self, id: ElementId, out: &mut Vec<ElementId>) {
        match self.get(id).map(|e| &e.kind) {
            Some(ElementKind::Text(_)) => out.push(id),
            Some(ElementKind::List(items)) => {
                for item in items.clone() {
                    self.flatten_text(item, out);
                }
            }
            _ => {}
        }
    }

    /// Surface word count of a realised element (whitespace-separated words
    /// over every text leaf). Drives the heavier-constituents-go-later
    /// complement ordering.
    #[must_use]
    pub fn word_count(&self, id: ElementId) -> usize {
        let mut leaves = Vec::new();
        self.flatten_text(id, &mut leaves);
        leaves
            .iter()
            .filter_map(|&leaf| self.realisation(leaf))
            .map(|text| text.split_whitespace().count())
            .sum()
    }

    /// Surface token count of a syntax-level realisation: inflected and word
    /// leaves count one, text leaves count their whitespace-separated words.
    /// Used before morphology has run, where [`Self::word_count`] sees
    /// nothing yet.
    #[must_use]
    pub fn token_count(&self, id: ElementId) -> usize {
        match self.get(id).map(|e| &e.kind) {
            Some(ElementKind::Word(_) | ElementKind::Inflected(_)) => 1,
            Some(ElementKind::Text(data)) => data
                .text
                .as_deref()
                .map_or(0, |t| t.split_whitespace().count()),
            Some(ElementKind::List(items)) => {
                items.clone().iter().map(|&i| self.token_count(i)).sum()
            }
            _ => 0,
        }
    }

    // --- pass bookkeeping -------------------------------------------------

    /// Clears the per-pass markers (consumed complements, clitic choices)
    /// so a tree can be realised again and reproduce its first output.
    pub fn reset_pass_markers(&mut self) {
        for slot in &mut self.slots {
            if let Some(element) = slot.element.as_mut() {
                element.features.remove(Feature::Consumed);
                element.features.remove(Feature::Clitic);
            }
        }
    }
}

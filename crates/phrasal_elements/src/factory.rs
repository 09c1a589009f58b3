//! Construction of feature-annotated phrase trees.

use std::sync::Arc;

use phrasal_foundation::{
    DiscourseFunction, ElementId, Feature, FeatureValue, Language, LexicalCategory, PhraseCategory,
};
use phrasal_lexicon::Lexicon;

use crate::arena::PhraseTree;
use crate::element::{Element, ElementKind, PhraseData, WordData};

/// Builds phrase trees from base strings and pre-built elements.
///
/// The factory owns the tree it is building and consults the lexicon when a
/// word is created, so lexical features (gender, irregular cells, pronoun
/// subtype) ride along on the word element from the start. It never parses
/// raw text: callers assemble already-tagged elements.
#[derive(Debug)]
pub struct NlgFactory {
    tree: PhraseTree,
    lexicon: Arc<Lexicon>,
}

impl NlgFactory {
    /// Creates a factory building into a fresh tree.
    #[must_use]
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            tree: PhraseTree::new(),
            lexicon,
        }
    }

    /// The language of the backing lexicon.
    #[must_use]
    pub fn language(&self) -> Language {
        self.lexicon.language()
    }

    /// The backing lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Borrows the tree under construction.
    #[must_use]
    pub const fn tree(&self) -> &PhraseTree {
        &self.tree
    }

    /// Borrows the tree under construction, mutably.
    #[must_use]
    pub const fn tree_mut(&mut self) -> &mut PhraseTree {
        &mut self.tree
    }

    /// Finishes construction, handing the tree to the realiser.
    #[must_use]
    pub fn into_tree(self) -> PhraseTree {
        self.tree
    }

    // --- words ------------------------------------------------------------

    /// Creates a word element, merging in the lexicon entry's features when
    /// one exists. A registered inflected variant resolves to its entry and
    /// adopts the entry's base form ("presenteer" becomes the word
    /// "presenteren").
    pub fn word(&mut self, base: &str, category: LexicalCategory) -> ElementId {
        let element = match self.lexicon.resolve(base, category) {
            Some(entry) => Element::with_features(
                ElementKind::Word(WordData::new(entry.base(), category)),
                entry.features().clone(),
            ),
            None => Element::new(ElementKind::Word(WordData::new(base, category))),
        };
        self.tree.insert(element)
    }

    /// Creates a pre-realised canned text element.
    pub fn canned_text(&mut self, text: &str) -> ElementId {
        self.tree.new_text(text)
    }

    // --- phrases ----------------------------------------------------------

    fn phrase(&mut self, category: PhraseCategory) -> ElementId {
        self.tree
            .insert(Element::new(ElementKind::Phrase(PhraseData::new(category))))
    }

    /// Creates an empty clause.
    pub fn clause(&mut self) -> ElementId {
        self.phrase(PhraseCategory::Clause)
    }

    /// Creates a noun phrase headed by the given noun.
    pub fn noun_phrase(&mut self, noun: &str) -> ElementId {
        let np = self.phrase(PhraseCategory::NounPhrase);
        self.set_noun(np, noun);
        np
    }

    /// Creates a noun phrase with no head yet.
    pub fn empty_noun_phrase(&mut self) -> ElementId {
        self.phrase(PhraseCategory::NounPhrase)
    }

    /// Creates a verb phrase headed by the given verb.
    pub fn verb_phrase(&mut self, verb: &str) -> ElementId {
        let vp = self.phrase(PhraseCategory::VerbPhrase);
        let head = self.word(verb, LexicalCategory::Verb);
        self.set_head(vp, head);
        vp
    }

    /// Creates a preposition phrase headed by the given preposition.
    pub fn preposition_phrase(&mut self, preposition: &str) -> ElementId {
        let pp = self.phrase(PhraseCategory::PrepositionPhrase);
        let head = self.word(preposition, LexicalCategory::Preposition);
        self.set_head(pp, head);
        pp
    }

    /// Creates an adjective phrase headed by the given adjective.
    pub fn adjective_phrase(&mut self, adjective: &str) -> ElementId {
        let ap = self.phrase(PhraseCategory::AdjectivePhrase);
        let head = self.word(adjective, LexicalCategory::Adjective);
        self.set_head(ap, head);
        ap
    }

    // --- child slots --------------------------------------------------------

    /// Sets the head of a phrase.
    pub fn set_head(&mut self, phrase: ElementId, head: ElementId) {
        self.tree.set(head, Feature::Function, DiscourseFunction::Head);
        self.tree.attach(phrase, head);
        if let Some(data) = self.tree.phrase_mut(phrase) {
            data.head = Some(head);
        }
    }

    /// Sets (or replaces) the noun heading a noun phrase.
    pub fn set_noun(&mut self, np: ElementId, noun: &str) {
        let head = self.word(noun, LexicalCategory::Noun);
        self.set_head(np, head);
    }

    /// Adds a subject to a clause.
    pub fn set_subject(&mut self, clause: ElementId, subject: ElementId) {
        self.tree
            .set(subject, Feature::Function, DiscourseFunction::Subject);
        self.tree.attach(clause, subject);
        if let Some(data) = self.tree.phrase_mut(clause) {
            data.subjects.push(subject);
        }
    }

    /// Sets the verb (phrase) of a clause. A bare word is wrapped in a verb
    /// phrase first.
    pub fn set_verb(&mut self, clause: ElementId, verb: ElementId) {
        let vp = if self.tree.is_phrase(verb, PhraseCategory::VerbPhrase) {
            verb
        } else {
            let vp = self.phrase(PhraseCategory::VerbPhrase);
            self.set_head(vp, verb);
            vp
        };
        self.tree.attach(clause, vp);
        if let Some(data) = self.tree.phrase_mut(clause) {
            data.head = Some(vp);
        }
    }

    /// Sets the verb of a clause from a base form.
    pub fn set_verb_word(&mut self, clause: ElementId, verb: &str) {
        let word = self.word(verb, LexicalCategory::Verb);
        self.set_verb(clause, word);
    }

    fn add_with_function(
        &mut self,
        phrase: ElementId,
        child: ElementId,
        function: DiscourseFunction,
    ) {
        self.tree.set(child, Feature::Function, function);
        self.tree.attach(phrase, child);
        if let Some(data) = self.tree.phrase_mut(phrase) {
            data.complements.push(child);
        }
    }

    /// Sets the direct object of a clause or verb phrase.
    pub fn set_object(&mut self, phrase: ElementId, object: ElementId) {
        self.add_with_function(phrase, object, DiscourseFunction::Object);
    }

    /// Sets the direct object from a noun base form.
    pub fn set_object_noun(&mut self, phrase: ElementId, noun: &str) {
        let np = self.noun_phrase(noun);
        self.set_object(phrase, np);
    }

    /// Sets the indirect object of a clause or verb phrase.
    pub fn set_indirect_object(&mut self, phrase: ElementId, object: ElementId) {
        self.add_with_function(phrase, object, DiscourseFunction::IndirectObject);
    }

    /// Adds a complement with no specific grammatical role.
    pub fn add_complement(&mut self, phrase: ElementId, complement: ElementId) {
        let function = self
            .tree
            .bag(complement)
            .function()
            .unwrap_or(DiscourseFunction::Complement);
        self.add_with_function(phrase, complement, function);
    }

    /// Adds a canned text complement.
    pub fn add_complement_text(&mut self, phrase: ElementId, text: &str) {
        let canned = self.canned_text(text);
        self.add_with_function(phrase, canned, DiscourseFunction::Complement);
    }

    /// Sets the object of a preposition phrase.
    pub fn set_pp_object(&mut self, pp: ElementId, object: ElementId) {
        self.add_with_function(pp, object, DiscourseFunction::Complement);
    }

    /// Sets the object of a preposition phrase from a noun base form.
    pub fn set_pp_object_noun(&mut self, pp: ElementId, noun: &str) {
        let np = self.noun_phrase(noun);
        self.set_pp_object(pp, np);
    }

    /// Sets the specifier of a noun phrase from a determiner base form.
    pub fn set_specifier(&mut self, np: ElementId, specifier: &str) {
        let word = self.word(specifier, LexicalCategory::Determiner);
        self.tree
            .set(word, Feature::Function, DiscourseFunction::Specifier);
        self.tree.attach(np, word);
        if let Some(data) = self.tree.phrase_mut(np) {
            data.specifier = Some(word);
        }
    }

    /// Adds a front modifier to a clause.
    pub fn add_front_modifier(&mut self, phrase: ElementId, modifier: ElementId) {
        self.tree
            .set(modifier, Feature::Function, DiscourseFunction::FrontModifier);
        self.tree.attach(phrase, modifier);
        if let Some(data) = self.tree.phrase_mut(phrase) {
            data.front_modifiers.push(modifier);
        }
    }

    /// Adds a premodifier to a phrase.
    pub fn add_pre_modifier(&mut self, phrase: ElementId, modifier: ElementId) {
        self.tree
            .set(modifier, Feature::Function, DiscourseFunction::PreModifier);
        self.tree.attach(phrase, modifier);
        if let Some(data) = self.tree.phrase_mut(phrase) {
            data.pre_modifiers.push(modifier);
        }
    }

    /// Adds a postmodifier to a phrase.
    pub fn add_post_modifier(&mut self, phrase: ElementId, modifier: ElementId) {
        self.tree
            .set(modifier, Feature::Function, DiscourseFunction::PostModifier);
        self.tree.attach(phrase, modifier);
        if let Some(data) = self.tree.phrase_mut(phrase) {
            data.post_modifiers.push(modifier);
        }
    }

    /// Sets a feature on any element.
    pub fn set_feature(&mut self, id: ElementId, key: Feature, value: impl Into<FeatureValue>) {
        self.tree.set(id, key, value);
    }
}

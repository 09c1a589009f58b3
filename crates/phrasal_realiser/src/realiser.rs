//! Pipeline driver.

use std::sync::Arc;

use phrasal_elements::{ElementKind, NlgFactory, PhraseTree};
use phrasal_foundation::{ElementId, Language, Result};
use phrasal_lexicon::Lexicon;
use phrasal_morphology::{morphophonology_for, realise_morphology};
use phrasal_syntax::{RealiseContext, realise_syntax};

/// Realises phrase trees into surface text for one language.
///
/// A realiser is cheap to construct and holds only the lexicon. Each
/// realisation pass must own its tree exclusively: agreement features and
/// consumed markers are written into the tree, and the pass-local markers
/// are reset when a new pass starts, so realising the same tree again
/// reproduces the first output.
#[derive(Clone, Debug)]
pub struct Realiser {
    lexicon: Arc<Lexicon>,
}

impl Realiser {
    /// Creates a realiser over the given lexicon.
    #[must_use]
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// The language this realiser produces.
    #[must_use]
    pub fn language(&self) -> Language {
        self.lexicon.language()
    }

    /// Realises an element to plain text: syntax, per-token morphology, and
    /// the adjacent-pair morphophonology pass, with tokens joined by single
    /// spaces (none after an elided form ending in an apostrophe).
    ///
    /// Returns `None` when the element realises to nothing (elided input, a
    /// clause with no resolvable verb phrase).
    ///
    /// # Errors
    /// Returns an error only when a closed-class lexeme is missing from the
    /// lexicon.
    pub fn realise(&self, tree: &mut PhraseTree, id: ElementId) -> Result<Option<String>> {
        let tokens = self.run(tree, id)?;
        let text = join_tokens(tree, &tokens);
        Ok((!text.is_empty()).then_some(text))
    }

    /// Realises a clause as a finished sentence: capitalised, terminated
    /// with a question mark for interrogative clauses and a full stop
    /// otherwise. An unrealisable input produces the empty string.
    ///
    /// # Errors
    /// Returns an error only when a closed-class lexeme is missing from the
    /// lexicon.
    pub fn realise_sentence(&self, factory: &mut NlgFactory, id: ElementId) -> Result<String> {
        let interrogative = factory.tree().bag(id).interrogative().is_some();
        let Some(text) = self.realise(factory.tree_mut(), id)? else {
            return Ok(String::new());
        };
        let mut sentence = capitalise_first(&text);
        sentence.push(if interrogative { '?' } else { '.' });
        Ok(sentence)
    }

    fn run(&self, tree: &mut PhraseTree, id: ElementId) -> Result<Vec<ElementId>> {
        tree.reset_pass_markers();
        let realised = {
            let mut ctx = RealiseContext {
                tree: &mut *tree,
                lexicon: &self.lexicon,
            };
            realise_syntax(&mut ctx, id)?
        };
        let Some(realised) = realised else {
            return Ok(Vec::new());
        };

        let mut leaves = Vec::new();
        flatten_tokens(tree, realised, &mut leaves);

        let mut tokens = Vec::with_capacity(leaves.len());
        for leaf in leaves {
            if let Some(text) = realise_morphology(tree, &self.lexicon, leaf) {
                tokens.push(text);
            }
        }

        self.adjust_adjacent(tree, &tokens);
        Ok(tokens)
    }

    /// Runs the morphophonology rules over consecutive realised tokens,
    /// skipping tokens whose realisation an earlier rule already cleared.
    fn adjust_adjacent(&self, tree: &mut PhraseTree, tokens: &[ElementId]) {
        let rules = morphophonology_for(self.language());
        let mut left = match tokens.iter().position(|&t| tree.realisation(t).is_some()) {
            Some(index) => index,
            None => return,
        };
        loop {
            let right = tokens
                .iter()
                .skip(left + 1)
                .position(|&t| tree.realisation(t).is_some())
                .map(|offset| left + 1 + offset);
            let Some(right) = right else { break };
            rules.adjust(tree, tokens[left], tokens[right]);
            // a cleared right token keeps the same left partner for the
            // next pair; otherwise the window advances
            if tree.realisation(tokens[right]).is_some() {
                left = right;
            }
        }
    }
}

/// Collects the word-level leaves of a realised list tree, in order.
fn flatten_tokens(tree: &PhraseTree, id: ElementId, out: &mut Vec<ElementId>) {
    match tree.get(id).map(|e| &e.kind) {
        Some(ElementKind::List(items)) => {
            for item in items.clone() {
                flatten_tokens(tree, item, out);
            }
        }
        Some(ElementKind::Text(_) | ElementKind::Inflected(_) | ElementKind::Word(_)) => {
            out.push(id);
        }
        _ => {}
    }
}

/// Joins realised tokens with single spaces; a token ending in an
/// apostrophe (an elided form) fuses with the next word.
fn join_tokens(tree: &PhraseTree, tokens: &[ElementId]) -> String {
    let mut out = String::new();
    for &token in tokens {
        let Some(text) = tree.realisation(token) else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        if !out.is_empty() && !out.ends_with('\'') {
            out.push(' ');
        }
        out.push_str(text);
    }
    out
}

fn capitalise_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

//! The ordered verb-group token stack.
//!
//! Tokens are tagged with their slot as they are pushed, so the
//! main/auxiliary partition is a classification decided at construction
//! time, not a re-scan of the finished stack.

use phrasal_elements::PhraseTree;
use phrasal_foundation::{
    DiscourseFunction, ElementId, Feature, NumberAgreement, Person, PronounType,
};

use crate::RealiseContext;

/// Slot of one verb-group token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VgSlot {
    /// Non-finite participle (perfect, passive).
    Participle,
    /// Non-finite infinitive (future auxiliary hosts, modal hosts).
    Infinitive,
    /// Negation particle.
    Negation,
    /// Clitic pronoun.
    Clitic,
    /// The finite verb of the group.
    Finite,
    /// The Dutch "te" infinitive marker.
    Te,
    /// A non-verbal fixed marker inside the group (the French "en train de"
    /// periphrasis).
    Marker,
}

impl VgSlot {
    /// True for slots that carry a verb.
    #[must_use]
    pub const fn is_verbal(self) -> bool {
        matches!(self, Self::Participle | Self::Infinitive | Self::Finite)
    }
}

/// One tagged token of the verb group.
#[derive(Clone, Copy, Debug)]
pub struct VgToken {
    /// The inflected element to realise.
    pub id: ElementId,
    /// Its slot.
    pub slot: VgSlot,
}

/// The verb-group stack, in push order (main verb first, finite verb last,
/// clitics and negation interleaved where their language puts them).
#[derive(Debug, Default)]
pub struct VerbGroup {
    tokens: Vec<VgToken>,
}

impl VerbGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a token.
    pub fn push(&mut self, id: ElementId, slot: VgSlot) {
        self.tokens.push(VgToken { id, slot });
    }

    /// True if no token has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens in push order.
    #[must_use]
    pub fn tokens(&self) -> &[VgToken] {
        &self.tokens
    }

    /// Number of verb-carrying tokens.
    #[must_use]
    pub fn verbal_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.slot.is_verbal()).count()
    }

    /// Partitions the stack into its realisation segments.
    ///
    /// When the group holds a single verb, everything belongs to the main
    /// segment. With two or more verbs, the finite verb and every token
    /// pushed after it (clitics, the negation head in clitic languages) form
    /// the auxiliary segment that the caller may emit at a different clause
    /// position; the tokens below the finite verb form the main segment.
    /// Both segments realise in reverse push order, like stack pops.
    #[must_use]
    pub fn split(&self) -> SplitVerbGroup {
        let finite = self.tokens.iter().position(|t| t.slot == VgSlot::Finite);
        match finite {
            Some(index) if self.verbal_count() >= 2 => {
                let main = self.tokens[..index].iter().rev().map(|t| t.id).collect();
                let auxiliary = self.tokens[index..].iter().rev().map(|t| t.id).collect();
                SplitVerbGroup { auxiliary, main }
            }
            _ => SplitVerbGroup {
                auxiliary: Vec::new(),
                main: self.tokens.iter().rev().map(|t| t.id).collect(),
            },
        }
    }
}

/// The two realisation segments of a verb group, each in surface order.
#[derive(Debug)]
pub struct SplitVerbGroup {
    /// The fronted segment: the finite verb plus its clitic cluster.
    pub auxiliary: Vec<ElementId>,
    /// The remaining segment: non-finite verbs, negation, the main verb.
    pub main: Vec<ElementId>,
}

/// The clitic pronouns chosen for a verb group, in push order, plus the
/// direct-object clitic for retroactive past-participle agreement.
#[derive(Debug, Default)]
pub struct CliticChoice {
    /// Realised clitic tokens in push order.
    pub tokens: Vec<ElementId>,
    /// The complement chosen as direct-object clitic, if any.
    pub direct_object: Option<ElementId>,
}

/// Scans the complements of a verb phrase for clitic candidates and fixes
/// their order.
///
/// A complement qualifies when it is, or heads, a pronoun, or is marked
/// pronominal. Candidates partition into the two bound special pronouns
/// ("en", "y"), a direct-object slot, and an indirect-object slot; the push
/// order is special pronouns, then the direct object, except that a
/// third-person non-reflexive indirect object slips in before the direct
/// object. Chosen complements are flagged so normal complement realisation
/// skips them.
///
/// # Errors
/// Propagates lexicon configuration errors from realising a candidate.
pub fn collect_clitics(
    ctx: &mut RealiseContext,
    vp: ElementId,
) -> phrasal_foundation::Result<CliticChoice> {
    let passive = ctx.tree.bag(vp).is(Feature::Passive);
    let complements: Vec<ElementId> = ctx
        .tree
        .phrase(vp)
        .map(|p| p.complements.clone())
        .unwrap_or_default();

    let mut special_en = None;
    let mut special_y = None;
    let mut direct = None;
    let mut indirect = None;

    for complement in complements {
        let bag = ctx.tree.bag(complement);
        if bag.is(Feature::Elided) || bag.is(Feature::Consumed) || bag.is(Feature::Relativised) {
            continue;
        }
        let function = bag.function().unwrap_or(DiscourseFunction::Complement);
        let head = pronoun_head(ctx.tree, complement);
        let kind = head
            .map(|h| ctx.tree.bag(h).pronoun_kind())
            .unwrap_or_else(|| {
                bag.is(Feature::Pronominal).then_some(PronounType::Personal)
            });
        let Some(kind) = kind else { continue };

        match kind {
            PronounType::SpecialPersonal => {
                match head.and_then(|h| ctx.tree.base_form(h)) {
                    Some("en") => special_en = Some(complement),
                    Some("y") => special_y = Some(complement),
                    _ => {}
                }
            }
            PronounType::Personal | PronounType::Reflexive => match function {
                DiscourseFunction::Object if !passive => direct = Some(complement),
                DiscourseFunction::IndirectObject => indirect = Some(complement),
                _ => {}
            },
            _ => {}
        }
    }

    let mut choice = CliticChoice::default();
    for candidate in [special_en, special_y] {
        if let Some(id) = candidate {
            push_clitic(ctx, &mut choice, id)?;
        }
    }
    if let Some(id) = direct {
        push_clitic(ctx, &mut choice, id)?;
        choice.direct_object = Some(id);
    }
    if let Some(id) = indirect {
        let direct_bag = direct.map(|d| ctx.tree.bag(d));
        let direct_allows = direct_bag.is_none_or(|bag| {
            bag.person_opt().unwrap_or(Person::Third) == Person::Third
                && !bag.is(Feature::Reflexive)
        });
        if direct_allows {
            let third_person = ctx.tree.bag(id).person_opt().unwrap_or(Person::Third)
                == Person::Third
                && !ctx.tree.bag(id).is(Feature::Reflexive);
            if third_person && direct.is_some() {
                // lui/leur precede the direct-object clitic
                let direct_token = choice.tokens.pop();
                push_clitic(ctx, &mut choice, id)?;
                if let Some(token) = direct_token {
                    choice.tokens.push(token);
                }
            } else {
                push_clitic(ctx, &mut choice, id)?;
            }
        }
    }
    Ok(choice)
}

fn push_clitic(
    ctx: &mut RealiseContext,
    choice: &mut CliticChoice,
    complement: ElementId,
) -> phrasal_foundation::Result<()> {
    ctx.tree.set(complement, Feature::Clitic, true);
    if let Some(realised) = crate::realise_syntax(ctx, complement)? {
        ctx.tree.set(realised, Feature::Clitic, true);
        choice.tokens.push(realised);
    }
    Ok(())
}

/// The pronoun heading a complement: the complement itself when it is a
/// pronoun word, else the head of a noun phrase when that head is a pronoun.
#[must_use]
pub fn pronoun_head(tree: &PhraseTree, complement: ElementId) -> Option<ElementId> {
    use phrasal_foundation::LexicalCategory;
    if tree.is_a(complement, LexicalCategory::Pronoun) {
        return Some(complement);
    }
    let head = tree.phrase(complement)?.head?;
    tree.is_a(head, LexicalCategory::Pronoun).then_some(head)
}

/// True when the verb phrase has a direct or indirect object that is
/// reflexive, or a first/second person pronoun agreeing with the subject in
/// person and number. Drives selection of the alternate perfect auxiliary.
#[must_use]
pub fn has_reflexive_object(tree: &PhraseTree, vp: ElementId) -> bool {
    let passive = tree.bag(vp).is(Feature::Passive);
    let subject_person = tree.bag(vp).person_opt();
    let subject_number = normalise_number(tree.bag(vp).number());
    let Some(phrase) = tree.phrase(vp) else {
        return false;
    };
    phrase.complements.iter().any(|&complement| {
        let bag = tree.bag(complement);
        if bag.is(Feature::Elided) {
            return false;
        }
        let function = bag.function();
        let object_slot = function == Some(DiscourseFunction::IndirectObject)
            || (!passive && function == Some(DiscourseFunction::Object));
        if !object_slot {
            return false;
        }
        if bag.is(Feature::Reflexive) {
            return true;
        }
        let person = bag.person_opt();
        matches!(person, Some(Person::First | Person::Second))
            && person == subject_person
            && normalise_number(bag.number()) == subject_number
    })
}

fn normalise_number(number: NumberAgreement) -> NumberAgreement {
    if number == NumberAgreement::Plural {
        NumberAgreement::Plural
    } else {
        NumberAgreement::Singular
    }
}

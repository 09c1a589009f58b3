//! Dutch clause and verb-phrase realisation.
//!
//! Dutch is verb-second: the finite verb fronts in questions and the
//! non-finite cluster gathers clause-finally. Subjects invert around the
//! finite verb in questions, objects surface in the middle field under
//! future and perfect, and separable preverbs detach in simple tenses.

use phrasal_foundation::{
    DiscourseFunction, ElementId, Feature, Form, InterrogativeType, Language, LexicalCategory,
    PhraseCategory, Result, Tense,
};
use phrasal_morphology::dutch::separable_parts;

use crate::shared::{
    self, add_complementiser, add_cue_phrase, add_passive_subjects, check_clausal_subjects,
    check_discourse_function, check_subject_agreement, copy_front_modifiers, effective_tense,
    emit_keyword, governing_interrogative, inflect_lexeme, inflect_or_plain, inflect_word,
    propagate_clause_features, realise_complements, realise_modifiers, realise_passive_objects,
    realise_subjects, relocate_object_before_verb, splice_after_first_verb, ComplementOrdering,
};
use crate::verb_group::{VerbGroup, VgSlot};
use crate::{ClauseHelper, LanguageSyntax, RealiseContext, VerbPhraseHelper, realise_syntax};

/// Dutch syntax rules.
pub struct DutchSyntax;

impl LanguageSyntax for DutchSyntax {
    fn language(&self) -> Language {
        Language::Dutch
    }
}

/// Question types whose subject realises inside the verb-phrase pass, right
/// after the fronted finite verb.
fn subject_in_verb_phrase(q: InterrogativeType) -> bool {
    matches!(
        q,
        InterrogativeType::Why | InterrogativeType::Where | InterrogativeType::WhoIndirectObject
    )
}

impl ClauseHelper for DutchSyntax {
    fn realise_clause(
        &self,
        ctx: &mut RealiseContext,
        clause: ElementId,
    ) -> Result<Option<ElementId>> {
        let Some(vp) = ctx.tree.phrase(clause).and_then(|data| data.head) else {
            return Ok(None);
        };
        if ctx.tree.phrase(vp).and_then(|data| data.head).is_none() {
            return Ok(None);
        }

        let interrogative = ctx.tree.bag(clause).interrogative();
        if let Some(q) = interrogative {
            if !q.asks_about_subject() {
                ctx.tree.set(clause, Feature::Inverted, true);
            }
        }

        let out = ctx.tree.new_list_from(clause);
        propagate_clause_features(ctx.tree, clause, vp);
        check_clausal_subjects(ctx, clause);
        check_subject_agreement(ctx.tree, clause, vp, true);
        check_discourse_function(ctx.tree, clause);
        copy_front_modifiers(ctx, clause, vp);
        add_complementiser(ctx, clause, out)?;
        add_cue_phrase(ctx, clause, out)?;

        if let Some(q) = interrogative {
            if q.asks_about_subject() {
                ctx.tree.set(vp, Feature::Person, phrasal_foundation::Person::Third);
            }
            realise_interrogative(ctx, clause, vp, q, out)?;
        } else {
            let fronts: Vec<ElementId> = ctx
                .tree
                .phrase(clause)
                .map(|data| data.front_modifiers.clone())
                .unwrap_or_default();
            realise_modifiers(ctx, &fronts, out)?;

            let form = ctx.tree.bag(clause).form();
            let passive = ctx.tree.bag(clause).is(Feature::Passive);
            let suppressed = passive
                || matches!(form, Form::Imperative | Form::Infinitive)
                || shared::has_relative_phrase(ctx.tree, clause, DiscourseFunction::Subject);
            if !suppressed {
                if let Some(subjects) = realise_subjects(ctx, clause)? {
                    ctx.tree.push_item(out, subjects);
                }
            }
        }

        realise_passive_objects(ctx, clause, vp, out)?;

        let vp_list = self.realise_verb_phrase(ctx, vp)?;
        ctx.tree.push_opt(out, vp_list);
        if interrogative.is_some_and(InterrogativeType::fronts_object) {
            relocate_object_before_verb(ctx.tree, out);
        }

        // Remaining question types invert: the subject splices in directly
        // after the first verb token.
        if let Some(q) = interrogative {
            if !q.asks_about_subject() && !subject_in_verb_phrase(q) {
                if let Some(subjects) = realise_subjects(ctx, clause)? {
                    if !splice_after_first_verb(ctx.tree, out, subjects) {
                        ctx.tree.push_item(out, subjects);
                    }
                }
            }
        }

        add_passive_subjects(ctx, clause, out)?;

        let posts: Vec<ElementId> = ctx
            .tree
            .phrase(clause)
            .map(|data| data.post_modifiers.clone())
            .unwrap_or_default();
        realise_modifiers(ctx, &posts, out)?;

        Ok(Some(out))
    }
}

impl VerbPhraseHelper for DutchSyntax {
    fn realise_verb_phrase(
        &self,
        ctx: &mut RealiseContext,
        vp: ElementId,
    ) -> Result<Option<ElementId>> {
        if ctx.tree.bag(vp).is(Feature::TeInfinitive) {
            ctx.tree.set(vp, Feature::Form, Form::Infinitive);
        }
        let Some(group) = build_verb_group(ctx, vp)? else {
            return Ok(None);
        };

        let out = ctx.tree.new_list_from(vp);
        realise_early_reflexives(ctx, vp, out)?;

        let pres: Vec<ElementId> = ctx
            .tree
            .phrase(vp)
            .map(|data| data.pre_modifiers.clone())
            .unwrap_or_default();
        realise_modifiers(ctx, &pres, out)?;

        let split = group.split();
        let tense = effective_tense(ctx.tree, vp);
        let perfect = ctx.tree.bag(vp).is(Feature::Perfect);
        let progressive = ctx.tree.bag(vp).is(Feature::Progressive);
        let passive = ctx.tree.bag(vp).is(Feature::Passive);
        let realise_aux = !ctx.tree.bag(vp).has(Feature::RealiseAuxiliary)
            || ctx.tree.bag(vp).is(Feature::RealiseAuxiliary);
        let interrogative = governing_interrogative(ctx.tree, vp);

        if !split.auxiliary.is_empty() && realise_aux {
            for token in &split.auxiliary {
                ctx.tree
                    .set(*token, Feature::Function, DiscourseFunction::Auxiliary);
                ctx.tree.push_item(out, *token);
            }
            if interrogative.is_some_and(subject_in_verb_phrase) {
                emit_clause_subjects(ctx, vp, out)?;
            }
            // Middle field: objects surface between the finite verb and the
            // clause-final cluster.
            if (matches!(tense, Tense::Future | Tense::Conditional) || perfect || progressive)
                && !passive
            {
                realise_objects_after_aux(ctx, vp, out)?;
            }
            for token in &split.main {
                ctx.tree.push_item(out, *token);
            }
        } else {
            for token in &split.main {
                ctx.tree.push_item(out, *token);
            }
            if interrogative.is_some_and(subject_in_verb_phrase) {
                emit_clause_subjects(ctx, vp, out)?;
            }
        }

        let posts: Vec<ElementId> = ctx
            .tree
            .phrase(vp)
            .map(|data| data.post_modifiers.clone())
            .unwrap_or_default();
        realise_modifiers(ctx, &posts, out)?;

        let preverb = preverb_token(ctx, vp);
        realise_complements(ctx, vp, out, ComplementOrdering::WeightOrdered, preverb)?;

        Ok(Some(out))
    }
}

/// Emits the interrogative key words: a fixed lexical table, with the
/// governing preposition prefixed for indirect-object questions.
fn realise_interrogative(
    ctx: &mut RealiseContext,
    _clause: ElementId,
    vp: ElementId,
    q: InterrogativeType,
    out: ElementId,
) -> Result<()> {
    match q {
        InterrogativeType::YesNo => {}
        InterrogativeType::How
        | InterrogativeType::HowPredicate
        | InterrogativeType::HowAdjective => {
            emit_keyword(ctx, out, "hoe", LexicalCategory::Adverb);
        }
        InterrogativeType::Why => emit_keyword(ctx, out, "waarom", LexicalCategory::Adverb),
        InterrogativeType::Where => emit_keyword(ctx, out, "waar", LexicalCategory::Adverb),
        InterrogativeType::HowMany => emit_keyword(ctx, out, "hoeveel", LexicalCategory::Adverb),
        InterrogativeType::HowCome => emit_keyword(ctx, out, "hoezo", LexicalCategory::Adverb),
        InterrogativeType::WhoSubject | InterrogativeType::WhoObject => {
            emit_keyword(ctx, out, "wie", LexicalCategory::Pronoun);
        }
        InterrogativeType::WhoIndirectObject => {
            let preposition = indirect_object_preposition(ctx, vp);
            emit_keyword(ctx, out, &preposition, LexicalCategory::Preposition);
            emit_keyword(ctx, out, "wie", LexicalCategory::Pronoun);
        }
        InterrogativeType::WhatObject | InterrogativeType::WhatSubject => {
            emit_keyword(ctx, out, "wat", LexicalCategory::Pronoun);
        }
        InterrogativeType::When => emit_keyword(ctx, out, "wanneer", LexicalCategory::Adverb),
        InterrogativeType::Which => emit_keyword(ctx, out, "welke", LexicalCategory::Pronoun),
        InterrogativeType::Whose => emit_keyword(ctx, out, "wiens", LexicalCategory::Pronoun),
    }
    Ok(())
}

/// The preposition governing an indirect-object question: taken from the
/// indirect object itself when it is a preposition phrase, "aan" otherwise.
fn indirect_object_preposition(ctx: &RealiseContext, vp: ElementId) -> String {
    let complements = ctx
        .tree
        .phrase(vp)
        .map(|data| data.complements.clone())
        .unwrap_or_default();
    for complement in complements {
        if ctx.tree.bag(complement).function() == Some(DiscourseFunction::IndirectObject)
            && ctx
                .tree
                .is_phrase(complement, PhraseCategory::PrepositionPhrase)
        {
            if let Some(head) = ctx.tree.phrase(complement).and_then(|data| data.head) {
                if let Some(base) = ctx.tree.base_form(head) {
                    return base.to_string();
                }
            }
        }
    }
    "aan".to_string()
}

/// Builds the Dutch verb group, tagging each token as it is pushed.
fn build_verb_group(ctx: &mut RealiseContext, vp: ElementId) -> Result<Option<VerbGroup>> {
    let Some(head) = ctx.tree.phrase(vp).and_then(|data| data.head) else {
        return Ok(None);
    };

    let form = ctx.tree.bag(vp).form();
    let tense = effective_tense(ctx.tree, vp);
    let perfect = ctx.tree.bag(vp).is(Feature::Perfect);
    let passive = ctx.tree.bag(vp).is(Feature::Passive);
    let negated = ctx.tree.bag(vp).is(Feature::Negated);
    let te_infinitive = ctx.tree.bag(vp).is(Feature::TeInfinitive);
    let modal = ctx.tree.bag(vp).text(Feature::Modal).map(String::from);
    let inverted = ctx.tree.bag(vp).is(Feature::Inverted);

    let mut group = VerbGroup::new();
    let mut front = inflect_word(ctx.tree, head);
    ctx.tree.set(front, Feature::Tense, tense);

    if passive {
        ctx.tree.set(front, Feature::Form, Form::PastParticiple);
        copy_subject_agreement(ctx, vp, front);
        group.push(front, VgSlot::Participle);
        front = inflect_lexeme(ctx, "worden", LexicalCategory::Verb)?;
        ctx.tree.set(front, Feature::Tense, tense);
    }

    // Periphrastic progressive: "aan het" + infinitive under "zijn".
    if ctx.tree.bag(vp).is(Feature::Progressive) {
        ctx.tree.set(front, Feature::Form, Form::Infinitive);
        group.push(front, VgSlot::Infinitive);
        let marker = ctx.tree.new_text("aan het");
        group.push(marker, VgSlot::Marker);
        front = inflect_lexeme(ctx, "zijn", LexicalCategory::Verb)?;
        ctx.tree.set(front, Feature::Form, Form::Normal);
        ctx.tree.set(front, Feature::Tense, tense);
    }

    if perfect {
        ctx.tree.set(front, Feature::Form, Form::PastParticiple);
        let alternate = ctx.tree.bag(front).is(Feature::AlternateAuxiliary)
            || crate::verb_group::has_reflexive_object(ctx.tree, vp);
        if alternate {
            // With "zijn" the participle agrees with the subject.
            copy_subject_agreement(ctx, vp, front);
        }
        group.push(front, VgSlot::Participle);
        let auxiliary = if alternate { "zijn" } else { "hebben" };
        front = inflect_lexeme(ctx, auxiliary, LexicalCategory::Verb)?;
        ctx.tree.set(front, Feature::Form, Form::Normal);
        ctx.tree.set(front, Feature::Tense, tense);
    }

    if matches!(tense, Tense::Future | Tense::Conditional) && form != Form::Infinitive {
        ctx.tree.set(front, Feature::Form, Form::Infinitive);
        group.push(front, VgSlot::Infinitive);
        front = inflect_lexeme(ctx, "zullen", LexicalCategory::Verb)?;
        ctx.tree.set(front, Feature::Form, Form::Normal);
        let aux_tense = if tense == Tense::Conditional {
            Tense::Past
        } else {
            Tense::Present
        };
        ctx.tree.set(front, Feature::Tense, aux_tense);
    }

    if let Some(modal) = modal {
        if matches!(form, Form::Normal | Form::Imperative) {
            ctx.tree.set(front, Feature::Form, Form::Infinitive);
            group.push(front, VgSlot::Infinitive);
            front = inflect_lexeme(ctx, &modal, LexicalCategory::Verb)?;
            ctx.tree.set(front, Feature::Form, Form::Normal);
            ctx.tree.set(front, Feature::Tense, Tense::Present);
        }
    }

    if negated {
        let negation = ctx
            .tree
            .bag(vp)
            .text(Feature::NegationWord)
            .unwrap_or("niet")
            .to_string();
        let niet = inflect_or_plain(ctx, &negation, LexicalCategory::Adverb);
        group.push(niet, VgSlot::Negation);
    }

    // The finite verb carries the clause agreement.
    let person = ctx.tree.bag(vp).person();
    let number = ctx.tree.bag(vp).number();
    ctx.tree.set(front, Feature::Person, person);
    ctx.tree.set(front, Feature::Number, number);
    if matches!(
        form,
        Form::Imperative | Form::Subjunctive | Form::Infinitive | Form::BareInfinitive
    ) {
        ctx.tree.set(front, Feature::Form, form);
    }
    if inverted {
        ctx.tree.set(front, Feature::Inverted, true);
    }
    group.push(front, VgSlot::Finite);

    if te_infinitive {
        let te = inflect_lexeme(ctx, "te", LexicalCategory::Adverb)?;
        group.push(te, VgSlot::Te);
    }

    Ok(Some(group))
}

fn copy_subject_agreement(ctx: &mut RealiseContext, vp: ElementId, token: ElementId) {
    let number = ctx.tree.bag(vp).number();
    ctx.tree.set(token, Feature::Number, number);
    if let Some(gender) = ctx.tree.bag(vp).gender_opt() {
        ctx.tree.set(token, Feature::Gender, gender);
    }
}

/// Realises reflexive object pronouns before the verb cluster when the
/// cluster gathers clause-finally (perfect, future, infinitives, relative
/// clauses).
fn realise_early_reflexives(
    ctx: &mut RealiseContext,
    vp: ElementId,
    out: ElementId,
) -> Result<()> {
    let tense = effective_tense(ctx.tree, vp);
    let clustered = ctx.tree.bag(vp).is(Feature::Perfect)
        || matches!(tense, Tense::Future | Tense::Conditional)
        || ctx.tree.bag(vp).form() == Form::Infinitive
        || ctx
            .tree
            .parent(vp)
            .is_some_and(|parent| ctx.tree.bag(parent).has(Feature::RelativePhrase));
    if !clustered {
        return Ok(());
    }
    let complements: Vec<ElementId> = ctx
        .tree
        .phrase(vp)
        .map(|data| data.complements.clone())
        .unwrap_or_default();
    for complement in complements {
        let bag = ctx.tree.bag(complement);
        if bag.is(Feature::Reflexive)
            && bag.function() == Some(DiscourseFunction::Object)
            && !bag.is(Feature::Consumed)
        {
            ctx.tree.set(complement, Feature::Consumed, true);
            if let Some(realised) = realise_syntax(ctx, complement)? {
                ctx.tree.push_item(out, realised);
            }
        }
    }
    Ok(())
}

/// Realises direct objects into the middle field, marking them consumed so
/// the complement ordering pass skips them.
fn realise_objects_after_aux(
    ctx: &mut RealiseContext,
    vp: ElementId,
    out: ElementId,
) -> Result<()> {
    let interrogative = governing_interrogative(ctx.tree, vp);
    if interrogative.is_some_and(InterrogativeType::asks_about_object) {
        return Ok(());
    }
    let complements: Vec<ElementId> = ctx
        .tree
        .phrase(vp)
        .map(|data| data.complements.clone())
        .unwrap_or_default();
    for complement in complements {
        let bag = ctx.tree.bag(complement);
        if bag.function() != Some(DiscourseFunction::Object)
            || bag.is(Feature::Consumed)
            || bag.is(Feature::Clitic)
            || bag.is(Feature::Elided)
            || bag.is(Feature::Relativised)
        {
            continue;
        }
        ctx.tree.set(complement, Feature::Consumed, true);
        if let Some(realised) = realise_syntax(ctx, complement)? {
            ctx.tree
                .set(realised, Feature::Function, DiscourseFunction::Object);
            ctx.tree.push_item(out, realised);
        }
    }
    Ok(())
}

fn emit_clause_subjects(ctx: &mut RealiseContext, vp: ElementId, out: ElementId) -> Result<()> {
    let Some(clause) = ctx.tree.parent(vp) else {
        return Ok(());
    };
    if let Some(subjects) = realise_subjects(ctx, clause)? {
        ctx.tree.push_item(out, subjects);
    }
    Ok(())
}

/// The separable preverb token, realised in the complement field when the
/// tense and voice leave the preverb detached: not under perfect or passive,
/// not in participle form, not under the future or conditional auxiliaries.
fn preverb_token(ctx: &mut RealiseContext, vp: ElementId) -> Option<ElementId> {
    let tense = effective_tense(ctx.tree, vp);
    let parent = ctx.tree.parent(vp);
    let displaced = ctx.tree.bag(vp).is(Feature::Perfect)
        || parent.is_some_and(|p| ctx.tree.bag(p).is(Feature::Perfect))
        || parent.is_some_and(|p| ctx.tree.bag(p).is(Feature::Passive))
        || ctx.tree.bag(vp).is(Feature::Passive)
        || ctx.tree.bag(vp).form() == Form::PastParticiple
        || matches!(tense, Tense::Future | Tense::Conditional);
    if displaced {
        return None;
    }

    let head = ctx.tree.phrase(vp).and_then(|data| data.head)?;
    let base = ctx.tree.base_form(head)?.to_string();
    let (preverb, _) = separable_parts(ctx.tree, head, &base)?;
    ctx.tree.set(head, Feature::Preverb, preverb.clone());
    Some(ctx.tree.new_text(&preverb))
}

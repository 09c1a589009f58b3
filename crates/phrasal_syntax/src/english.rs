//! English clause and verb-phrase realisation.
//!
//! English questions invert around the first auxiliary, inserting do-support
//! when no auxiliary is available and the verb is not copular. Subject
//! questions and "how come" keep declarative order.

use phrasal_foundation::{
    DiscourseFunction, ElementId, Feature, Form, InterrogativeType, Language, LexicalCategory,
    Person, PhraseCategory, Result, Tense,
};

use crate::shared::{
    self, add_complementiser, add_cue_phrase, add_passive_subjects, check_clausal_subjects,
    check_discourse_function, check_subject_agreement, copy_front_modifiers, effective_tense,
    emit_keyword, inflect_lexeme, inflect_or_plain, inflect_word, propagate_clause_features,
    realise_complements, realise_modifiers, realise_passive_objects, realise_subjects,
    relocate_object_before_verb, splice_after_first_verb, ComplementOrdering,
};
use crate::verb_group::{VerbGroup, VgSlot};
use crate::{ClauseHelper, LanguageSyntax, RealiseContext, VerbPhraseHelper};

/// English syntax rules.
pub struct EnglishSyntax;

impl LanguageSyntax for EnglishSyntax {
    fn language(&self) -> Language {
        Language::English
    }
}

/// True for question types realised with subject-auxiliary inversion.
fn needs_inversion(q: InterrogativeType) -> bool {
    !q.asks_about_subject() && q != InterrogativeType::HowCome
}

impl ClauseHelper for EnglishSyntax {
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
        if interrogative.is_some_and(needs_inversion) {
            ctx.tree.set(clause, Feature::Inverted, true);
        }

        let out = ctx.tree.new_list_from(clause);
        propagate_clause_features(ctx.tree, clause, vp);
        check_clausal_subjects(ctx, clause);
        check_subject_agreement(ctx.tree, clause, vp, false);
        check_discourse_function(ctx.tree, clause);
        copy_front_modifiers(ctx, clause, vp);
        add_complementiser(ctx, clause, out)?;
        add_cue_phrase(ctx, clause, out)?;

        if let Some(q) = interrogative {
            if q.asks_about_subject() {
                ctx.tree.set(vp, Feature::Person, Person::Third);
            }
            realise_interrogative(ctx, q, out);
        } else {
            let fronts: Vec<ElementId> = ctx
                .tree
                .phrase(clause)
                .map(|data| data.front_modifiers.clone())
                .unwrap_or_default();
            realise_modifiers(ctx, &fronts, out)?;
        }

        // Declaratives and uninverted questions front their subjects.
        let declarative_order = match interrogative {
            None => true,
            Some(q) => !needs_inversion(q) && !q.asks_about_subject(),
        };
        if declarative_order {
            let form = ctx.tree.bag(clause).form();
            let suppressed = ctx.tree.bag(clause).is(Feature::Passive)
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

        if interrogative.is_some_and(needs_inversion) {
            if let Some(subjects) = realise_subjects(ctx, clause)? {
                if !splice_after_first_verb(ctx.tree, out, subjects) {
                    ctx.tree.push_item(out, subjects);
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

        // Indirect-object questions strand their preposition clause-finally.
        if interrogative == Some(InterrogativeType::WhoIndirectObject) {
            let preposition = stranded_preposition(ctx, vp);
            let token = inflect_or_plain(ctx, &preposition, LexicalCategory::Preposition);
            ctx.tree.push_item(out, token);
        }

        Ok(Some(out))
    }
}

impl VerbPhraseHelper for EnglishSyntax {
    fn realise_verb_phrase(
        &self,
        ctx: &mut RealiseContext,
        vp: ElementId,
    ) -> Result<Option<ElementId>> {
        let Some(group) = build_verb_group(ctx, vp)? else {
            return Ok(None);
        };

        let out = ctx.tree.new_list_from(vp);
        let pres: Vec<ElementId> = ctx
            .tree
            .phrase(vp)
            .map(|data| data.pre_modifiers.clone())
            .unwrap_or_default();
        realise_modifiers(ctx, &pres, out)?;

        let split = group.split();
        let realise_aux = !ctx.tree.bag(vp).has(Feature::RealiseAuxiliary)
            || ctx.tree.bag(vp).is(Feature::RealiseAuxiliary);
        if realise_aux {
            for token in &split.auxiliary {
                ctx.tree
                    .set(*token, Feature::Function, DiscourseFunction::Auxiliary);
                ctx.tree.push_item(out, *token);
            }
        }
        for token in &split.main {
            ctx.tree.push_item(out, *token);
        }

        let posts: Vec<ElementId> = ctx
            .tree
            .phrase(vp)
            .map(|data| data.post_modifiers.clone())
            .unwrap_or_default();
        realise_modifiers(ctx, &posts, out)?;

        realise_complements(ctx, vp, out, ComplementOrdering::Fixed, None)?;
        Ok(Some(out))
    }
}

fn realise_interrogative(ctx: &mut RealiseContext, q: InterrogativeType, out: ElementId) {
    match q {
        InterrogativeType::YesNo => {}
        InterrogativeType::How
        | InterrogativeType::HowPredicate
        | InterrogativeType::HowAdjective => {
            emit_keyword(ctx, out, "how", LexicalCategory::Adverb);
        }
        InterrogativeType::HowMany => {
            let token = ctx.tree.new_text("how many");
            ctx.tree.push_item(out, token);
        }
        InterrogativeType::HowCome => {
            let token = ctx.tree.new_text("how come");
            ctx.tree.push_item(out, token);
        }
        InterrogativeType::Why => emit_keyword(ctx, out, "why", LexicalCategory::Adverb),
        InterrogativeType::Where => emit_keyword(ctx, out, "where", LexicalCategory::Adverb),
        InterrogativeType::When => emit_keyword(ctx, out, "when", LexicalCategory::Adverb),
        InterrogativeType::WhoSubject => emit_keyword(ctx, out, "who", LexicalCategory::Pronoun),
        InterrogativeType::WhoObject | InterrogativeType::WhoIndirectObject => {
            emit_keyword(ctx, out, "whom", LexicalCategory::Pronoun);
        }
        InterrogativeType::WhatObject | InterrogativeType::WhatSubject => {
            emit_keyword(ctx, out, "what", LexicalCategory::Pronoun);
        }
        InterrogativeType::Which => emit_keyword(ctx, out, "which", LexicalCategory::Pronoun),
        InterrogativeType::Whose => emit_keyword(ctx, out, "whose", LexicalCategory::Pronoun),
    }
}

/// The preposition stranded at the end of an indirect-object question: the
/// indirect object's own preposition when it is a preposition phrase, "to"
/// otherwise.
fn stranded_preposition(ctx: &RealiseContext, vp: ElementId) -> String {
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
    "to".to_string()
}

/// Builds the English verb group: passive be, progressive be, perfect have,
/// a modal or the future/conditional auxiliary, and do-support for inverted
/// or negated groups with no other auxiliary.
fn build_verb_group(ctx: &mut RealiseContext, vp: ElementId) -> Result<Option<VerbGroup>> {
    let Some(head) = ctx.tree.phrase(vp).and_then(|data| data.head) else {
        return Ok(None);
    };

    let form = ctx.tree.bag(vp).form();
    let tense = effective_tense(ctx.tree, vp);
    let perfect = ctx.tree.bag(vp).is(Feature::Perfect);
    let progressive = ctx.tree.bag(vp).is(Feature::Progressive);
    let passive = ctx.tree.bag(vp).is(Feature::Passive);
    let negated = ctx.tree.bag(vp).is(Feature::Negated);
    let inverted = ctx.tree.bag(vp).is(Feature::Inverted);
    let copular = ctx.tree.bag(head).is(Feature::Copular);
    let modal_feature = ctx.tree.bag(vp).text(Feature::Modal).map(String::from);

    let mut group = VerbGroup::new();
    let mut front = inflect_word(ctx.tree, head);
    ctx.tree.set(front, Feature::Tense, tense);
    let mut has_aux = false;

    if passive {
        ctx.tree.set(front, Feature::Form, Form::PastParticiple);
        group.push(front, VgSlot::Participle);
        front = inflect_lexeme(ctx, "be", LexicalCategory::Verb)?;
        ctx.tree.set(front, Feature::Tense, tense);
        has_aux = true;
    }
    if progressive {
        ctx.tree.set(front, Feature::Form, Form::PresentParticiple);
        group.push(front, VgSlot::Participle);
        front = inflect_lexeme(ctx, "be", LexicalCategory::Verb)?;
        ctx.tree.set(front, Feature::Tense, tense);
        has_aux = true;
    }
    if perfect {
        ctx.tree.set(front, Feature::Form, Form::PastParticiple);
        group.push(front, VgSlot::Participle);
        front = inflect_lexeme(ctx, "have", LexicalCategory::Verb)?;
        ctx.tree.set(front, Feature::Tense, tense);
        has_aux = true;
    }

    let modal = match (modal_feature, tense) {
        (Some(modal), _) => Some(modal),
        (None, Tense::Future) => Some("will".to_string()),
        (None, Tense::Conditional) => Some("would".to_string()),
        (None, _) => None,
    };
    if let Some(modal) = modal {
        ctx.tree.set(front, Feature::Form, Form::BareInfinitive);
        group.push(front, VgSlot::Infinitive);
        front = inflect_lexeme(ctx, &modal, LexicalCategory::Modal)?;
        has_aux = true;
    }

    let wants_do = (inverted || negated) && !copular && !has_aux && form == Form::Normal;
    if wants_do {
        ctx.tree.set(front, Feature::Form, Form::BareInfinitive);
        group.push(front, VgSlot::Infinitive);
        front = inflect_lexeme(ctx, "do", LexicalCategory::Verb)?;
        ctx.tree.set(front, Feature::Tense, tense);
    }

    if negated {
        let not = inflect_lexeme(ctx, "not", LexicalCategory::Adverb)?;
        group.push(not, VgSlot::Negation);
    }

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
    group.push(front, VgSlot::Finite);

    Ok(Some(group))
}

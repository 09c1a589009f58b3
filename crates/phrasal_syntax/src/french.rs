//! French clause and verb-phrase realisation.
//!
//! French questions use the uninverted "est-ce que" construction; clitic
//! pronouns gather around the finite verb, negation brackets it with
//! "ne ... pas", and the future and conditional are morphological rather
//! than auxiliary-built.

use phrasal_foundation::{
    DiscourseFunction, ElementId, Feature, Form, InterrogativeType, Language, LexicalCategory,
    Person, Result, Tense,
};

use crate::shared::{
    self, add_complementiser, add_cue_phrase, add_passive_subjects, check_clausal_subjects,
    check_discourse_function, check_subject_agreement, copy_front_modifiers, effective_tense,
    inflect_lexeme, inflect_word, propagate_clause_features, realise_complements,
    realise_modifiers, realise_passive_objects, realise_subjects, ComplementOrdering,
};
use crate::verb_group::{CliticChoice, VerbGroup, VgSlot, collect_clitics};
use crate::{ClauseHelper, LanguageSyntax, RealiseContext, VerbPhraseHelper, realise_syntax};

/// French syntax rules.
pub struct FrenchSyntax;

impl LanguageSyntax for FrenchSyntax {
    fn language(&self) -> Language {
        Language::French
    }
}

impl ClauseHelper for FrenchSyntax {
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
                ctx.tree.set(vp, Feature::Person, Person::Third);
            }
            realise_interrogative(ctx, vp, q, out)?;
        } else {
            let fronts: Vec<ElementId> = ctx
                .tree
                .phrase(clause)
                .map(|data| data.front_modifiers.clone())
                .unwrap_or_default();
            realise_modifiers(ctx, &fronts, out)?;
        }

        // est-ce que keeps declarative order: subjects stay clause-initial
        // except for subject questions, where the key word stands in.
        let subject_suppressed = interrogative.is_some_and(InterrogativeType::asks_about_subject)
            || ctx.tree.bag(clause).is(Feature::Passive)
            || matches!(
                ctx.tree.bag(clause).form(),
                Form::Imperative | Form::Infinitive
            )
            || shared::has_relative_phrase(ctx.tree, clause, DiscourseFunction::Subject);
        if !subject_suppressed {
            if let Some(subjects) = realise_subjects(ctx, clause)? {
                ctx.tree.push_item(out, subjects);
            }
        }

        realise_passive_objects(ctx, clause, vp, out)?;
        let vp_list = self.realise_verb_phrase(ctx, vp)?;
        ctx.tree.push_opt(out, vp_list);
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

impl VerbPhraseHelper for FrenchSyntax {
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

        realise_complements(ctx, vp, out, ComplementOrdering::WeightOrdered, None)?;
        Ok(Some(out))
    }
}

/// Emits the interrogative construction. Most types are a key word followed
/// by "est-ce que"; subject questions use "qui" / "qu'est-ce qui" with the
/// key word standing in for the subject; object-fronting types realise the
/// questioned object right after the key word.
fn realise_interrogative(
    ctx: &mut RealiseContext,
    vp: ElementId,
    q: InterrogativeType,
    out: ElementId,
) -> Result<()> {
    let push_text = |ctx: &mut RealiseContext, text: &str| {
        let token = ctx.tree.new_text(text);
        ctx.tree.push_item(out, token);
    };

    match q {
        InterrogativeType::YesNo => push_text(ctx, "est-ce que"),
        InterrogativeType::WhatObject => push_text(ctx, "qu'est-ce que"),
        InterrogativeType::WhatSubject => push_text(ctx, "qu'est-ce qui"),
        InterrogativeType::WhoSubject => push_text(ctx, "qui"),
        InterrogativeType::WhoObject => {
            push_text(ctx, "qui est-ce que");
        }
        InterrogativeType::WhoIndirectObject => {
            let preposition = indirect_object_preposition(ctx, vp);
            push_text(ctx, &preposition);
            push_text(ctx, "qui est-ce que");
        }
        InterrogativeType::Why => {
            push_text(ctx, "pourquoi");
            push_text(ctx, "est-ce que");
        }
        InterrogativeType::Where => {
            push_text(ctx, "où");
            push_text(ctx, "est-ce que");
        }
        InterrogativeType::When => {
            push_text(ctx, "quand");
            push_text(ctx, "est-ce que");
        }
        InterrogativeType::How
        | InterrogativeType::HowPredicate
        | InterrogativeType::HowAdjective => {
            push_text(ctx, "comment");
            push_text(ctx, "est-ce que");
        }
        InterrogativeType::HowCome => {
            push_text(ctx, "comment se fait-il que");
        }
        InterrogativeType::HowMany => {
            push_text(ctx, "combien de");
            front_questioned_object(ctx, vp, out)?;
            push_text(ctx, "est-ce que");
        }
        InterrogativeType::Which => {
            push_text(ctx, "quel");
            front_questioned_object(ctx, vp, out)?;
            push_text(ctx, "est-ce que");
        }
        InterrogativeType::Whose => {
            push_text(ctx, "à qui");
            front_questioned_object(ctx, vp, out)?;
            push_text(ctx, "est-ce que");
        }
    }
    Ok(())
}

/// Realises the questioned direct object right after the key word, marking
/// it consumed for the rest of the pass.
fn front_questioned_object(
    ctx: &mut RealiseContext,
    vp: ElementId,
    out: ElementId,
) -> Result<()> {
    let complements: Vec<ElementId> = ctx
        .tree
        .phrase(vp)
        .map(|data| data.complements.clone())
        .unwrap_or_default();
    for complement in complements {
        if ctx.tree.bag(complement).function() == Some(DiscourseFunction::Object)
            && !ctx.tree.bag(complement).is(Feature::Consumed)
        {
            ctx.tree.set(complement, Feature::Consumed, true);
            if let Some(realised) = realise_syntax(ctx, complement)? {
                ctx.tree.push_item(out, realised);
            }
            return Ok(());
        }
    }
    Ok(())
}

fn indirect_object_preposition(ctx: &RealiseContext, vp: ElementId) -> String {
    let complements = ctx
        .tree
        .phrase(vp)
        .map(|data| data.complements.clone())
        .unwrap_or_default();
    for complement in complements {
        if ctx.tree.bag(complement).function() == Some(DiscourseFunction::IndirectObject)
            && ctx.tree.is_phrase(
                complement,
                phrasal_foundation::PhraseCategory::PrepositionPhrase,
            )
        {
            if let Some(head) = ctx.tree.phrase(complement).and_then(|data| data.head) {
                if let Some(base) = ctx.tree.base_form(head) {
                    return base.to_string();
                }
            }
        }
    }
    "à".to_string()
}

/// Builds the French verb group: clitic pronouns, ne/pas bracketing, the
/// perfect auxiliaries, the "en train de" periphrastic progressive, and the
/// passive copula. The future and conditional inflect the main verb instead
/// of inserting an auxiliary.
#[allow(clippy::too_many_lines)]
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
    let modal = ctx.tree.bag(vp).text(Feature::Modal).map(String::from);

    let clitic_rising = match &modal {
        Some(modal) => ctx
            .lexicon
            .lookup(modal, LexicalCategory::Verb)
            .is_some_and(|entry| entry.features().is(Feature::CliticRising)),
        None => false,
    };

    let mut group = VerbGroup::new();
    let mut front = inflect_word(ctx.tree, head);
    ctx.tree.set(front, Feature::Tense, tense);

    let mut clitics: Option<CliticChoice> = None;
    let mut insert_clitics = true;
    let mut participle_for_agreement = None;

    if passive {
        ctx.tree.set(front, Feature::Form, Form::PastParticiple);
        copy_subject_agreement(ctx, vp, front);
        group.push(front, VgSlot::Participle);
        front = inflect_lexeme(ctx, "être", LexicalCategory::Verb)?;
        ctx.tree.set(front, Feature::Tense, tense);
    }

    // The periphrastic progressive wraps the main verb in "en train de" +
    // infinitive; a plain past progressive is the imparfait instead.
    if progressive
        && (tense != Tense::Past || perfect || modal.is_some() || form == Form::Subjunctive)
    {
        ctx.tree.set(front, Feature::Form, Form::Infinitive);
        group.push(front, VgSlot::Infinitive);
        let choice = collect_clitics(ctx, vp)?;
        for token in &choice.tokens {
            group.push(*token, VgSlot::Clitic);
        }
        clitics = Some(choice);
        insert_clitics = false;
        let marker = ctx.tree.new_text("en train de");
        group.push(marker, VgSlot::Marker);
        front = inflect_lexeme(ctx, "être", LexicalCategory::Verb)?;
        ctx.tree.set(front, Feature::Tense, tense);
    }

    if perfect {
        ctx.tree.set(front, Feature::Form, Form::PastParticiple);
        let alternate = ctx.tree.bag(front).is(Feature::AlternateAuxiliary)
            || crate::verb_group::has_reflexive_object(ctx.tree, vp);
        if alternate {
            copy_subject_agreement(ctx, vp, front);
        } else {
            participle_for_agreement = Some(front);
        }
        group.push(front, VgSlot::Participle);
        let auxiliary = if alternate { "être" } else { "avoir" };
        front = inflect_lexeme(ctx, auxiliary, LexicalCategory::Verb)?;
        ctx.tree.set(front, Feature::Form, Form::Normal);
        ctx.tree.set(front, Feature::Tense, tense);
    }

    if let Some(modal) = modal {
        ctx.tree.set(front, Feature::Form, Form::Infinitive);
        group.push(front, VgSlot::Infinitive);
        // Without clitic raising the pronouns attach to the infinitive.
        if insert_clitics && !clitic_rising {
            let choice = collect_clitics(ctx, vp)?;
            for token in &choice.tokens {
                group.push(*token, VgSlot::Clitic);
            }
            clitics = Some(choice);
            insert_clitics = false;
        }
        front = inflect_lexeme(ctx, &modal, LexicalCategory::Verb)?;
        ctx.tree.set(front, Feature::Form, Form::Normal);
        ctx.tree.set(front, Feature::Tense, tense);
    }

    // Non-negated imperatives host their clitics directly after the verb.
    if insert_clitics && form == Form::Imperative && !negated {
        let choice = collect_clitics(ctx, vp)?;
        for token in &choice.tokens {
            group.push(*token, VgSlot::Clitic);
        }
        clitics = Some(choice);
        insert_clitics = false;
    }

    if negated {
        let negation = ctx
            .tree
            .bag(vp)
            .text(Feature::NegationWord)
            .unwrap_or("pas")
            .to_string();
        let pas = inflect_lexeme(ctx, &negation, LexicalCategory::Adverb)?;
        group.push(pas, VgSlot::Negation);
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

    // Default clitic position: directly before the finite verb in surface
    // order, so pushed above it.
    if insert_clitics {
        let choice = collect_clitics(ctx, vp)?;
        for token in &choice.tokens {
            group.push(*token, VgSlot::Clitic);
        }
        clitics = Some(choice);
    }

    if negated {
        let ne = inflect_lexeme(ctx, "ne", LexicalCategory::Adverb)?;
        group.push(ne, VgSlot::Negation);
    }

    // Retroactive agreement: a direct-object clitic realised before an
    // avoir participle passes its gender and number to the participle.
    if let (Some(participle), Some(choice)) = (participle_for_agreement, clitics.as_ref()) {
        if let Some(direct) = choice.direct_object {
            if let Some(gender) = ctx.tree.bag(direct).gender_opt() {
                ctx.tree.set(participle, Feature::Gender, gender);
            }
            if let Some(number) = ctx.tree.bag(direct).number_opt() {
                ctx.tree.set(participle, Feature::Number, number);
            }
        }
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

//! Language-independent realisation steps.
//!
//! Each language's clause and verb-phrase helpers call these free functions
//! instead of inheriting shared behaviour; anything genuinely
//! language-specific stays in the language modules.

use phrasal_elements::{Element, ElementKind, PhraseTree, WordData};
use phrasal_foundation::{
    ClauseStatus, DiscourseFunction, ElementId, Feature, Form, Gender, InterrogativeType,
    Language, LexicalCategory, NumberAgreement, Person, PhraseCategory, PronounType, Result,
    Tense,
};

use crate::{RealiseContext, realise_syntax};

// --- language constants ---------------------------------------------------

/// The default complementiser lexeme.
#[must_use]
pub fn default_complementiser(language: Language) -> &'static str {
    match language {
        Language::English => "that",
        Language::French => "que",
        Language::Dutch => "dat",
    }
}

/// The preposition introducing a passive agent.
#[must_use]
pub fn passive_preposition(language: Language) -> &'static str {
    match language {
        Language::English => "by",
        Language::French => "par",
        Language::Dutch => "door",
    }
}

/// The default preposition marking an indirect object.
#[must_use]
pub fn indirect_object_preposition(language: Language) -> &'static str {
    match language {
        Language::English => "to",
        Language::French => "à",
        Language::Dutch => "aan",
    }
}

/// The coordinating conjunction placed between multiple subjects.
#[must_use]
pub fn subject_conjunction(language: Language) -> &'static str {
    match language {
        Language::English => "and",
        Language::French => "et",
        Language::Dutch => "en",
    }
}

/// Determiner and head noun wrapping a clausal subject ("the fact that ...").
#[must_use]
pub fn fact_wrapper(language: Language) -> (&'static str, &'static str) {
    match language {
        Language::English => ("the", "fact"),
        Language::French => ("le", "fait"),
        Language::Dutch => ("het", "feit"),
    }
}

// --- element helpers ------------------------------------------------------

/// Wraps a base word into an inflected token carrying a copy of the word's
/// features, parented where the word was parented so agreement walks still
/// reach the governing phrase.
#[must_use]
pub fn inflect_word(tree: &mut PhraseTree, word: ElementId) -> ElementId {
    let Some(element) = tree.get(word) else {
        return word;
    };
    match &element.kind {
        ElementKind::Word(data) => {
            let data = data.clone();
            let features = element.features.clone();
            let parent = element.parent;
            let mut inflected = Element::with_features(ElementKind::Inflected(data), features);
            inflected.parent = parent;
            tree.insert(inflected)
        }
        _ => word,
    }
}

/// Creates an inflected token for a closed-class lexeme straight from the
/// lexicon.
///
/// # Errors
/// Returns [`phrasal_foundation::RealiseError::MissingLexeme`] when the
/// lexicon cannot supply the lexeme.
pub fn inflect_lexeme(
    ctx: &mut RealiseContext,
    base: &str,
    category: LexicalCategory,
) -> Result<ElementId> {
    let entry = ctx.lexicon.require(base, category)?;
    let features = entry.features().clone();
    let data = WordData::new(entry.base(), category);
    Ok(ctx
        .tree
        .insert(Element::with_features(ElementKind::Inflected(data), features)))
}

/// Creates an inflected token for a word that may be absent from the
/// lexicon, falling back to a featureless token.
pub fn inflect_or_plain(
    ctx: &mut RealiseContext,
    base: &str,
    category: LexicalCategory,
) -> ElementId {
    let features = ctx
        .lexicon
        .lookup(base, category)
        .map(|entry| entry.features().clone())
        .unwrap_or_default();
    let data = WordData::new(base, category);
    ctx.tree
        .insert(Element::with_features(ElementKind::Inflected(data), features))
}

/// Pushes a keyword token (an interrogative key word) onto the output list.
pub fn emit_keyword(
    ctx: &mut RealiseContext,
    out: ElementId,
    base: &str,
    category: LexicalCategory,
) {
    let token = inflect_or_plain(ctx, base, category);
    ctx.tree.push_item(out, token);
}

// --- clause preparation ---------------------------------------------------

/// Features a clause hands down to its verb phrase before realisation.
const HANDED_DOWN: [Feature; 11] = [
    Feature::Tense,
    Feature::Negated,
    Feature::Perfect,
    Feature::Progressive,
    Feature::Passive,
    Feature::Modal,
    Feature::Form,
    Feature::Interrogative,
    Feature::TeInfinitive,
    Feature::NegationWord,
    Feature::Inverted,
];

/// Copies clause-level verb features onto the verb phrase and moves
/// clause-level complements down to it, re-parenting them.
pub fn propagate_clause_features(tree: &mut PhraseTree, clause: ElementId, vp: ElementId) {
    for key in HANDED_DOWN {
        if let Some(value) = tree.bag(clause).get(key).cloned() {
            tree.set(vp, key, value);
        }
    }
    let complements: Vec<ElementId> = tree
        .phrase_mut(clause)
        .map(|data| std::mem::take(&mut data.complements))
        .unwrap_or_default();
    for complement in complements {
        tree.attach(vp, complement);
        if let Some(data) = tree.phrase_mut(vp) {
            data.complements.push(complement);
        }
    }
}

/// Wraps clausal subjects in a "the fact ..." noun phrase and demotes the
/// embedded clause to subordinate status, so a bare subordinate clause never
/// surfaces as a bare sentence subject.
pub fn check_clausal_subjects(ctx: &mut RealiseContext, clause: ElementId) {
    let (determiner, noun) = fact_wrapper(ctx.language());
    let subjects: Vec<ElementId> = ctx
        .tree
        .phrase(clause)
        .map(|data| data.subjects.clone())
        .unwrap_or_default();

    for (index, subject) in subjects.iter().copied().enumerate() {
        if !ctx.tree.is_phrase(subject, PhraseCategory::Clause) {
            continue;
        }
        let form = ctx.tree.bag(subject).form();
        if form != Form::Normal {
            continue;
        }
        ctx.tree
            .set(subject, Feature::ClauseStatus, ClauseStatus::Subordinate);
        ctx.tree.set(subject, Feature::SuppressComplementiser, false);

        let det = inflect_or_plain(ctx, determiner, LexicalCategory::Determiner);
        let head = inflect_or_plain(ctx, noun, LexicalCategory::Noun);
        let mut data = phrasal_elements::PhraseData::new(PhraseCategory::NounPhrase);
        data.specifier = Some(det);
        data.head = Some(head);
        data.post_modifiers.push(subject);
        let wrapper = ctx.tree.insert(Element::new(ElementKind::Phrase(data)));
        ctx.tree
            .set(wrapper, Feature::Function, DiscourseFunction::Subject);
        ctx.tree.attach(clause, wrapper);
        ctx.tree.attach(wrapper, subject);
        if let Some(phrase) = ctx.tree.phrase_mut(clause) {
            phrase.subjects[index] = wrapper;
        }
    }
}

/// True when the clause's relative phrase carries the given discourse
/// function (or sits in the subject list, for subjects).
#[must_use]
pub fn has_relative_phrase(
    tree: &PhraseTree,
    clause: ElementId,
    function: DiscourseFunction,
) -> bool {
    let Some(rel) = tree.bag(clause).element(Feature::RelativePhrase) else {
        return false;
    };
    if let Some(rel_function) = tree.bag(rel).function() {
        return rel_function == function;
    }
    function == DiscourseFunction::Subject
        && tree
            .phrase(clause)
            .is_some_and(|data| data.subjects.contains(&rel))
}

/// Folds the subjects into the verb phrase's agreement features.
///
/// Person is first if any subject is first person, else second if any is
/// second person, else third. Number is plural when there are several
/// subjects or any subject is plural. With `fold_gender`, gender is feminine
/// only when every subject is feminine, masculine otherwise; English passes
/// `false` and skips the gender step.
pub fn check_subject_agreement(
    tree: &mut PhraseTree,
    clause: ElementId,
    vp: ElementId,
    fold_gender: bool,
) {
    let passive = tree.bag(clause).is(Feature::Passive);
    let mut subjects: Vec<ElementId> = tree
        .phrase(clause)
        .map(|data| data.subjects.clone())
        .unwrap_or_default();

    // A relativised subject agrees with the parent noun phrase instead.
    if (!passive && has_relative_phrase(tree, clause, DiscourseFunction::Subject))
        || (passive && has_relative_phrase(tree, clause, DiscourseFunction::Object))
    {
        if let Some(parent) = tree.parent(clause) {
            if tree.is_phrase(parent, PhraseCategory::NounPhrase) {
                subjects = vec![parent];
            }
        }
    }

    let mut person = Person::Third;
    let mut feminine = !subjects.is_empty();
    let mut number = if subjects.len() > 1 {
        NumberAgreement::Plural
    } else {
        NumberAgreement::Singular
    };

    for &subject in &subjects {
        let bag = tree.bag(subject);
        match bag.person_opt() {
            Some(Person::First) => person = Person::First,
            Some(Person::Second) if person == Person::Third => person = Person::Second,
            _ => {}
        }
        if bag.gender_opt() != Some(Gender::Feminine) {
            feminine = false;
        }
        if bag.is_plural() {
            number = NumberAgreement::Plural;
        }
    }
    if subjects.is_empty() {
        number = tree.bag(clause).number();
    }

    tree.set(vp, Feature::Person, person);
    tree.set(vp, Feature::Number, number);
    if fold_gender {
        let gender = if feminine {
            Gender::Feminine
        } else {
            Gender::Masculine
        };
        tree.set(vp, Feature::Gender, gender);
    }
}

/// An imperative clause embedded as an object rewrites to an infinitive.
pub fn check_discourse_function(tree: &mut PhraseTree, clause: ElementId) {
    let function = tree.bag(clause).function();
    if matches!(
        function,
        Some(DiscourseFunction::Object | DiscourseFunction::IndirectObject)
    ) && tree.bag(clause).form() == Form::Imperative
    {
        tree.set(clause, Feature::Form, Form::Infinitive);
    }
}

/// Front modifiers of an infinitival clause realise adjacent to the verb:
/// they move to the verb phrase's postmodifier list. The default
/// complementiser of an infinitival subordinate clause is suppressed.
pub fn copy_front_modifiers(ctx: &mut RealiseContext, clause: ElementId, vp: ElementId) {
    if ctx.tree.bag(clause).form() != Form::Infinitive {
        return;
    }
    let fronts: Vec<ElementId> = ctx
        .tree
        .phrase_mut(clause)
        .map(|data| std::mem::take(&mut data.front_modifiers))
        .unwrap_or_default();
    for modifier in fronts {
        ctx.tree.attach(vp, modifier);
        if let Some(data) = ctx.tree.phrase_mut(vp) {
            data.post_modifiers.push(modifier);
        }
    }

    if ctx.tree.bag(clause).clause_status() == ClauseStatus::Subordinate {
        let default = default_complementiser(ctx.language());
        let is_default = ctx
            .tree
            .bag(clause)
            .text(Feature::Complementiser)
            .is_none_or(|text| text == default);
        ctx.tree
            .set(clause, Feature::SuppressComplementiser, is_default);
    }
}

/// Emits the complementiser or, for relative clauses, the agreeing relative
/// pronoun.
///
/// # Errors
/// Propagates lexicon configuration errors.
pub fn add_complementiser(ctx: &mut RealiseContext, clause: ElementId, out: ElementId) -> Result<()> {
    if let Some(rel) = ctx.tree.bag(clause).element(Feature::RelativePhrase) {
        let number = ctx.tree.bag(rel).number();
        let mut gender = ctx.tree.bag(rel).gender_opt().unwrap_or(Gender::Common);
        // A "het" specifier marks the antecedent as neuter.
        if ctx.language() == Language::Dutch {
            let specifier = ctx
                .tree
                .phrase(rel)
                .and_then(|data| data.specifier)
                .and_then(|s| ctx.tree.base_form(s));
            if specifier == Some("het") {
                gender = Gender::Neuter;
            }
        }
        let function = ctx.tree.bag(rel).function().unwrap_or_else(|| {
            let in_subjects = ctx
                .tree
                .phrase(clause)
                .is_some_and(|data| data.subjects.contains(&rel));
            if in_subjects {
                DiscourseFunction::Subject
            } else {
                DiscourseFunction::Complement
            }
        });

        let base = match ctx.language() {
            Language::Dutch => {
                if gender == Gender::Neuter && number == NumberAgreement::Singular {
                    "dat"
                } else {
                    "die"
                }
            }
            Language::French => {
                if function == DiscourseFunction::Subject {
                    "qui"
                } else {
                    "que"
                }
            }
            Language::English => {
                if matches!(
                    ctx.tree.bag(rel).gender_opt(),
                    Some(Gender::Masculine | Gender::Feminine)
                ) {
                    "who"
                } else {
                    "that"
                }
            }
        };

        ctx.tree.set(rel, Feature::Relativised, true);
        ctx.tree.set(clause, Feature::Number, number);
        let pronoun = inflect_or_plain(ctx, base, LexicalCategory::Pronoun);
        ctx.tree.set(pronoun, Feature::Function, function);
        ctx.tree.set(pronoun, Feature::Number, number);
        ctx.tree.set(pronoun, Feature::Gender, gender);
        if let Some(element) = ctx.tree.get_mut(pronoun) {
            element.parent = Some(clause);
        }
        ctx.tree.push_item(out, pronoun);
        return Ok(());
    }

    let status = ctx.tree.bag(clause).clause_status();
    let form = ctx.tree.bag(clause).form();
    let suppressed = ctx.tree.bag(clause).is(Feature::SuppressComplementiser);
    if (status == ClauseStatus::Subordinate || form == Form::Subjunctive) && !suppressed {
        let base = ctx
            .tree
            .bag(clause)
            .text(Feature::Complementiser)
            .unwrap_or(default_complementiser(ctx.language()))
            .to_string();
        let token = inflect_lexeme(ctx, &base, LexicalCategory::Complementiser)?;
        ctx.tree.push_item(out, token);
    }
    Ok(())
}

/// Realises the cue phrase, skipped entirely for infinitival clauses.
///
/// # Errors
/// Propagates lexicon configuration errors.
pub fn add_cue_phrase(ctx: &mut RealiseContext, clause: ElementId, out: ElementId) -> Result<()> {
    if ctx.tree.bag(clause).form() == Form::Infinitive {
        return Ok(());
    }
    if let Some(cue) = ctx.tree.bag(clause).element(Feature::CuePhrase) {
        let realised = realise_syntax(ctx, cue)?;
        ctx.tree.push_opt(out, realised);
    } else if let Some(text) = ctx
        .tree
        .bag(clause)
        .text(Feature::CuePhrase)
        .map(String::from)
    {
        let token = ctx.tree.new_text(&text);
        ctx.tree.push_item(out, token);
    }
    Ok(())
}

// --- subjects -------------------------------------------------------------

/// Realises the subjects of a clause into one list, interleaving the
/// language's conjunction when there are several.
///
/// # Errors
/// Propagates lexicon configuration errors.
pub fn realise_subjects(ctx: &mut RealiseContext, clause: ElementId) -> Result<Option<ElementId>> {
    let subjects: Vec<ElementId> = ctx
        .tree
        .phrase(clause)
        .map(|data| data.subjects.clone())
        .unwrap_or_default();
    if subjects.is_empty() {
        return Ok(None);
    }
    let conjunction = subject_conjunction(ctx.language());
    let out = ctx.tree.new_list();
    ctx.tree
        .set(out, Feature::Function, DiscourseFunction::Subject);
    let mut pushed = false;
    for (index, subject) in subjects.iter().copied().enumerate() {
        if index > 0 {
            let conj = inflect_or_plain(ctx, conjunction, LexicalCategory::Conjunction);
            ctx.tree.push_item(out, conj);
        }
        if let Some(realised) = realise_syntax(ctx, subject)? {
            ctx.tree.push_item(out, realised);
            pushed = true;
        }
    }
    Ok(pushed.then_some(out))
}

/// Splices an element directly after the first verb token found inside the
/// first verb-bearing list of `out`. Returns false when no verb token has
/// been realised yet.
pub fn splice_after_first_verb(tree: &mut PhraseTree, out: ElementId, item: ElementId) -> bool {
    let top: Vec<ElementId> = tree.list_items(out).to_vec();
    for candidate in top {
        let inner: Vec<ElementId> = tree.list_items(candidate).to_vec();
        for (index, token) in inner.iter().copied().enumerate() {
            if tree.is_a(token, LexicalCategory::Verb) || tree.is_a(token, LexicalCategory::Modal) {
                tree.insert_item(candidate, index + 1, item);
                return true;
            }
        }
    }
    false
}

/// Moves the realised direct-object constituent to the front of the verb
/// phrase list, for question types whose object surfaces before the verb.
pub fn relocate_object_before_verb(tree: &mut PhraseTree, out: ElementId) {
    let top: Vec<ElementId> = tree.list_items(out).to_vec();
    for candidate in top {
        let inner: Vec<ElementId> = tree.list_items(candidate).to_vec();
        for (index, token) in inner.iter().copied().enumerate() {
            if tree.bag(token).function() == Some(DiscourseFunction::Object) {
                if let Some(moved) = tree.remove_item(candidate, index) {
                    tree.insert_item(candidate, 0, moved);
                }
                return;
            }
        }
    }
}

// --- passive voice --------------------------------------------------------

/// Under passive voice, realises the direct objects in subject position and
/// takes the verb's agreement from the first of them.
///
/// # Errors
/// Propagates lexicon configuration errors.
pub fn realise_passive_objects(
    ctx: &mut RealiseContext,
    clause: ElementId,
    vp: ElementId,
    out: ElementId,
) -> Result<()> {
    if !ctx.tree.bag(clause).is(Feature::Passive)
        || has_relative_phrase(ctx.tree, clause, DiscourseFunction::Object)
    {
        return Ok(());
    }
    let complements: Vec<ElementId> = ctx
        .tree
        .phrase(vp)
        .map(|data| data.complements.clone())
        .unwrap_or_default();
    let mut agreement_taken = false;
    for complement in complements {
        let bag = ctx.tree.bag(complement);
        if bag.function() != Some(DiscourseFunction::Object)
            || bag.is(Feature::Consumed)
            || bag.is(Feature::Elided)
        {
            continue;
        }
        if !agreement_taken {
            let person = ctx.tree.bag(complement).person();
            let number = ctx.tree.bag(complement).number();
            let gender = ctx.tree.bag(complement).gender_opt();
            ctx.tree.set(vp, Feature::Person, person);
            ctx.tree.set(vp, Feature::Number, number);
            if let Some(gender) = gender {
                ctx.tree.set(vp, Feature::Gender, gender);
            }
            agreement_taken = true;
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

/// Realises the demoted subjects of a passive clause at the end, introduced
/// by the language's agent preposition.
///
/// # Errors
/// Propagates lexicon configuration errors.
pub fn add_passive_subjects(
    ctx: &mut RealiseContext,
    clause: ElementId,
    out: ElementId,
) -> Result<()> {
    if !ctx.tree.bag(clause).is(Feature::Passive)
        || has_relative_phrase(ctx.tree, clause, DiscourseFunction::Subject)
    {
        return Ok(());
    }
    if let Some(subjects) = realise_subjects(ctx, clause)? {
        let preposition = passive_preposition(ctx.language());
        let prep = inflect_or_plain(ctx, preposition, LexicalCategory::Preposition);
        ctx.tree.push_item(out, prep);
        ctx.tree.push_item(out, subjects);
    }
    Ok(())
}

// --- noun / preposition / adjective phrases -------------------------------

/// Realises a noun, preposition, adjective, or adverb phrase: specifier,
/// premodifiers, head, complements, postmodifiers. Pronominal noun phrases
/// realise as a single pronoun token instead.
///
/// # Errors
/// Propagates lexicon configuration errors.
pub fn realise_phrase(ctx: &mut RealiseContext, id: ElementId) -> Result<Option<ElementId>> {
    let Some(data) = ctx.tree.phrase(id).cloned() else {
        return Ok(None);
    };

    if data.category == Some(PhraseCategory::NounPhrase) && ctx.tree.bag(id).is(Feature::Pronominal)
    {
        let pronoun = make_pronoun(ctx.tree, id, data.head);
        let out = ctx.tree.new_list_from(id);
        ctx.tree.push_item(out, pronoun);
        return Ok(Some(out));
    }

    let out = ctx.tree.new_list_from(id);

    if let Some(specifier) = data.specifier {
        let token = inflect_word(ctx.tree, specifier);
        copy_nominal_agreement(ctx.tree, id, token);
        ctx.tree.push_item(out, token);
    }
    for modifier in &data.pre_modifiers {
        let realised = realise_syntax(ctx, *modifier)?;
        ctx.tree.push_opt(out, realised);
    }
    if let Some(head) = data.head {
        let head_is_word = matches!(
            ctx.tree.get(head).map(|e| &e.kind),
            Some(ElementKind::Word(_))
        );
        let realised = if head_is_word {
            let token = inflect_word(ctx.tree, head);
            copy_nominal_agreement(ctx.tree, id, token);
            Some(token)
        } else {
            realise_syntax(ctx, head)?
        };
        ctx.tree.push_opt(out, realised);
    }
    for complement in &data.complements {
        let realised = realise_syntax(ctx, *complement)?;
        ctx.tree.push_opt(out, realised);
    }
    for modifier in &data.post_modifiers {
        let realised = realise_syntax(ctx, *modifier)?;
        ctx.tree.push_opt(out, realised);
    }
    Ok(Some(out))
}

/// Copies number, gender, and possessive marking from a phrase onto one of
/// its realised tokens.
fn copy_nominal_agreement(tree: &mut PhraseTree, phrase: ElementId, token: ElementId) {
    if let Some(number) = tree.bag(phrase).number_opt() {
        tree.set(token, Feature::Number, number);
    }
    if let Some(gender) = tree.bag(phrase).gender_opt() {
        tree.set(token, Feature::Gender, gender);
    }
    if tree.bag(phrase).is(Feature::Possessive) {
        tree.set(token, Feature::Possessive, true);
    }
}

/// Builds the inflected pronoun token standing for a pronominal noun phrase.
/// The token carries person, number, gender, and the phrase's discourse
/// function; morphology resolves the surface form against the lexicon.
fn make_pronoun(tree: &mut PhraseTree, np: ElementId, head: Option<ElementId>) -> ElementId {
    let base = head
        .and_then(|h| tree.base_form(h))
        .unwrap_or_default()
        .to_string();
    let mut features = tree.bag(np).clone();
    features.set(Feature::PronounKind, PronounType::Personal);
    if features.person_opt().is_none() {
        features.set(Feature::Person, Person::Third);
    }
    if in_passive_clause(tree, np) {
        features.set(Feature::Passive, true);
    }
    let mut element = Element::with_features(
        ElementKind::Inflected(WordData::new(&base, LexicalCategory::Pronoun)),
        features,
    );
    element.parent = Some(np);
    tree.insert(element)
}

fn in_passive_clause(tree: &PhraseTree, mut id: ElementId) -> bool {
    for _ in 0..8 {
        match tree.parent(id) {
            Some(parent) => {
                if tree.is_phrase(parent, PhraseCategory::Clause) {
                    return tree.bag(parent).is(Feature::Passive);
                }
                id = parent;
            }
            None => return false,
        }
    }
    false
}

// --- complements ----------------------------------------------------------

/// How a language orders its realised complement groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplementOrdering {
    /// Fixed order: indirect objects, direct objects, everything else.
    Fixed,
    /// The six-orderings weight rule: shorter groups realise first, with the
    /// stable tie-break direct < indirect < other.
    WeightOrdered,
}

/// The interrogative type governing a verb phrase, read from the phrase or
/// its parent clause.
#[must_use]
pub fn governing_interrogative(tree: &PhraseTree, vp: ElementId) -> Option<InterrogativeType> {
    tree.bag(vp).interrogative().or_else(|| {
        tree.parent(vp)
            .and_then(|parent| tree.bag(parent).interrogative())
    })
}

/// Realises the non-clitic complements of a verb phrase, grouping them by
/// function, applying the suppression rules, and ordering the groups.
///
/// `preverb` is the Dutch separable-verb particle, realised right after the
/// direct-object group when present.
///
/// # Errors
/// Propagates lexicon configuration errors.
pub fn realise_complements(
    ctx: &mut RealiseContext,
    vp: ElementId,
    out: ElementId,
    ordering: ComplementOrdering,
    preverb: Option<ElementId>,
) -> Result<()> {
    let passive = ctx.tree.bag(vp).is(Feature::Passive);
    let interrogative = governing_interrogative(ctx.tree, vp);
    let clause = ctx.tree.parent(vp);
    let relative = clause.and_then(|c| ctx.tree.bag(c).element(Feature::RelativePhrase));

    let complements: Vec<ElementId> = ctx
        .tree
        .phrase(vp)
        .map(|data| data.complements.clone())
        .unwrap_or_default();

    let mut directs = Vec::new();
    let mut indirects = Vec::new();
    let mut unknowns = Vec::new();

    for complement in complements {
        let bag = ctx.tree.bag(complement);
        if bag.is(Feature::Clitic)
            || bag.is(Feature::Consumed)
            || bag.is(Feature::Elided)
            || bag.is(Feature::Relativised)
            || Some(complement) == relative
        {
            continue;
        }
        let function = bag.function().unwrap_or(DiscourseFunction::Complement);

        let realised = if function == DiscourseFunction::IndirectObject
            && ordering == ComplementOrdering::WeightOrdered
            && ctx.tree.is_phrase(complement, PhraseCategory::NounPhrase)
        {
            realise_indirect_with_preposition(ctx, complement)?
        } else {
            realise_syntax(ctx, complement)?
        };
        let Some(realised) = realised else { continue };
        ctx.tree.set(realised, Feature::Function, function);

        match function {
            DiscourseFunction::Object => directs.push(realised),
            DiscourseFunction::IndirectObject => indirects.push(realised),
            _ => unknowns.push(realised),
        }
    }

    // Suppression: the question word or the passive stands in for the group.
    if passive || interrogative.is_some_and(InterrogativeType::asks_about_object) {
        directs.clear();
    }
    if interrogative.is_some_and(InterrogativeType::asks_about_indirect_object) {
        indirects.clear();
    }
    if passive {
        unknowns.clear();
    }

    match ordering {
        ComplementOrdering::Fixed => {
            push_group(ctx.tree, out, &indirects);
            push_group(ctx.tree, out, &directs);
            if let Some(preverb) = preverb {
                ctx.tree.push_item(out, preverb);
            }
            push_group(ctx.tree, out, &unknowns);
        }
        ComplementOrdering::WeightOrdered => {
            order_by_weight(ctx.tree, out, &directs, &indirects, &unknowns, preverb);
        }
    }
    Ok(())
}

/// Wraps a bare indirect-object noun phrase in the language's dative
/// preposition before realising it.
fn realise_indirect_with_preposition(
    ctx: &mut RealiseContext,
    complement: ElementId,
) -> Result<Option<ElementId>> {
    let Some(realised) = realise_syntax(ctx, complement)? else {
        return Ok(None);
    };
    let preposition = indirect_object_preposition(ctx.language());
    let prep = inflect_or_plain(ctx, preposition, LexicalCategory::Preposition);
    let wrapped = ctx.tree.new_list();
    ctx.tree.push_item(wrapped, prep);
    ctx.tree.push_item(wrapped, realised);
    Ok(Some(wrapped))
}

fn push_group(tree: &mut PhraseTree, out: ElementId, group: &[ElementId]) {
    for &item in group {
        tree.push_item(out, item);
    }
}

/// Places shorter complement groups before longer ones. With equal lengths
/// the order is direct objects, indirect objects, other complements. The
/// separable-verb preverb follows the direct-object group.
fn order_by_weight(
    tree: &mut PhraseTree,
    out: ElementId,
    directs: &[ElementId],
    indirects: &[ElementId],
    unknowns: &[ElementId],
    preverb: Option<ElementId>,
) {
    let count = |group: &[ElementId]| -> usize {
        group.iter().map(|&id| tree.token_count(id)).sum()
    };
    let d = count(directs);
    let i = count(indirects);
    let u = count(unknowns);

    let mut push_directs = |tree: &mut PhraseTree| {
        push_group(tree, out, directs);
        if let Some(preverb) = preverb {
            tree.push_item(out, preverb);
        }
    };

    if d <= i {
        if i <= u {
            push_directs(tree);
            push_group(tree, out, indirects);
            push_group(tree, out, unknowns);
        } else if d <= u {
            push_directs(tree);
            push_group(tree, out, unknowns);
            push_group(tree, out, indirects);
        } else {
            push_group(tree, out, unknowns);
            push_directs(tree);
            push_group(tree, out, indirects);
        }
    } else if d <= u {
        push_group(tree, out, indirects);
        push_directs(tree);
        push_group(tree, out, unknowns);
    } else if i <= u {
        push_group(tree, out, indirects);
        push_group(tree, out, unknowns);
        push_directs(tree);
    } else {
        push_group(tree, out, unknowns);
        push_group(tree, out, indirects);
        push_directs(tree);
    }
}

/// Realises a modifier list in order.
///
/// # Errors
/// Propagates lexicon configuration errors.
pub fn realise_modifiers(
    ctx: &mut RealiseContext,
    modifiers: &[ElementId],
    out: ElementId,
) -> Result<()> {
    for &modifier in modifiers {
        let realised = realise_syntax(ctx, modifier)?;
        ctx.tree.push_opt(out, realised);
    }
    Ok(())
}

// --- tense plumbing -------------------------------------------------------

/// Tense of a verb phrase, falling back to the parent clause.
#[must_use]
pub fn effective_tense(tree: &PhraseTree, vp: ElementId) -> Tense {
    if tree.bag(vp).has(Feature::Tense) {
        tree.bag(vp).tense()
    } else {
        tree.parent(vp)
            .map_or_else(Tense::default, |parent| tree.bag(parent).tense())
    }
}

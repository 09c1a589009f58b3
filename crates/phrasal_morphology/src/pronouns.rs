//! Pronoun selection shared by the language modules.
//!
//! Personal pronouns are resolved by reverse lexicon lookup over person,
//! number, gender, and discourse function; reflexive pronouns re-derive
//! their person and number from the governing verb phrase; relative
//! pronouns agree with the clause's antecedent noun phrase through a fixed
//! degradation chain.

use phrasal_elements::PhraseTree;
use phrasal_foundation::{
    DiscourseFunction, ElementId, Feature, FeatureValue, Form, Gender, LexicalCategory,
    NumberAgreement, Person, PhraseCategory, PronounType,
};
use phrasal_lexicon::Lexicon;

/// Resolves a pronoun token to its surface form. Unresolvable lookups fall
/// back to the token's base form rather than failing.
#[must_use]
pub fn resolve(tree: &PhraseTree, lexicon: &Lexicon, el: ElementId) -> String {
    match tree.bag(el).pronoun_kind() {
        Some(PronounType::Personal) => personal(tree, lexicon, el),
        Some(PronounType::Relative) => relative(tree, el),
        _ => base_form(tree, el),
    }
}

fn personal(tree: &PhraseTree, lexicon: &Lexicon, el: ElementId) -> String {
    let bag = tree.bag(el);
    if bag.function() == Some(DiscourseFunction::Complement) {
        return base_form(tree, el);
    }

    let mut person = bag.person_opt();
    let mut number = bag.number_opt();
    let mut reflexive = bag.is(Feature::Reflexive);
    let gender = match bag.gender_opt() {
        Some(Gender::Neuter) | None => Gender::Masculine,
        Some(g) => g,
    };

    // Reflexive pronouns agree with the verb phrase they depend on, not
    // with their nominal antecedent.
    if reflexive {
        if let Some(vp) = governing_verb_phrase(tree, el) {
            let vp_bag = tree.bag(vp);
            person = vp_bag.person_opt();
            number = vp_bag.number_opt();
            if vp_bag.form() == Form::Imperative {
                let plural = number == Some(NumberAgreement::Plural);
                if !plural || !matches!(person, Some(Person::First | Person::Second)) {
                    person = Some(Person::Second);
                }
            }
        }
    }

    let person = person.unwrap_or(Person::Third);
    let number = number.unwrap_or(NumberAgreement::Singular);

    // The head pronoun of a noun phrase carries the phrase's role; passive
    // voice flips subjects and objects.
    let mut function = bag.function().unwrap_or(DiscourseFunction::Subject);
    if bag.is(Feature::Passive) {
        function = match function {
            DiscourseFunction::Subject => DiscourseFunction::Object,
            DiscourseFunction::Object => DiscourseFunction::Subject,
            other => other,
        };
    }
    if !matches!(
        function,
        DiscourseFunction::Object | DiscourseFunction::IndirectObject
    ) {
        reflexive = false;
    }

    if reflexive {
        let constraints = [
            (Feature::Reflexive, FeatureValue::from(true)),
            (Feature::Person, person.into()),
            (Feature::Number, number.into()),
        ];
        return lexicon
            .lookup_by_features(LexicalCategory::Pronoun, &constraints)
            .map_or_else(|| base_form(tree, el), |entry| entry.base().to_string());
    }

    let lookup_function = match function {
        DiscourseFunction::Subject => DiscourseFunction::Subject,
        DiscourseFunction::IndirectObject => DiscourseFunction::IndirectObject,
        _ => DiscourseFunction::Object,
    };

    // Most specific first: with gender, without gender, then the plain
    // object slot for languages without dedicated indirect-object pronouns.
    let with_gender = [
        (Feature::PronounKind, FeatureValue::from(PronounType::Personal)),
        (Feature::Person, person.into()),
        (Feature::Number, number.into()),
        (Feature::Function, lookup_function.into()),
        (Feature::Gender, gender.into()),
    ];
    let without_gender = &with_gender[..4];
    let fallback_function = [
        (Feature::PronounKind, FeatureValue::from(PronounType::Personal)),
        (Feature::Person, person.into()),
        (Feature::Number, number.into()),
        (Feature::Function, DiscourseFunction::Object.into()),
    ];

    for constraints in [&with_gender[..], without_gender, &fallback_function[..]] {
        if let Some(entry) = lexicon.lookup_by_features(LexicalCategory::Pronoun, constraints) {
            return entry.base().to_string();
        }
    }
    base_form(tree, el)
}

/// Relative pronouns agree with the antecedent: the parent noun phrase of
/// the nearest enclosing clause. Irregular forms degrade through
/// feminine-plural, feminine-singular, plural, then the base form.
fn relative(tree: &PhraseTree, el: ElementId) -> String {
    let bag = tree.bag(el);
    let mut antecedent = tree.parent(el);
    while let Some(id) = antecedent {
        if tree.is_phrase(id, PhraseCategory::Clause) {
            break;
        }
        antecedent = tree.parent(id);
    }
    let Some(np) = antecedent.and_then(|clause| tree.parent(clause)) else {
        return base_form(tree, el);
    };

    let feminine = tree.bag(np).gender_opt() == Some(Gender::Feminine);
    let plural = tree.bag(np).is_plural();

    let mut form = None;
    if feminine && plural {
        form = bag.text(Feature::FemininePlural);
    } else if feminine {
        form = bag.text(Feature::FeminineSingular);
    }
    if plural && form.is_none() {
        form = bag.text(Feature::PluralForm);
    }
    form.map_or_else(|| base_form(tree, el), String::from)
}

/// Walks up to the verb phrase governing a pronoun: parent, grandparent,
/// great-grandparent, taking the nearest verb phrase found.
fn governing_verb_phrase(tree: &PhraseTree, el: ElementId) -> Option<ElementId> {
    let mut current = tree.parent(el)?;
    for _ in 0..3 {
        let Some(parent) = tree.parent(current) else {
            return None;
        };
        if tree.is_phrase(parent, PhraseCategory::VerbPhrase) {
            return Some(parent);
        }
        current = parent;
    }
    None
}

fn base_form(tree: &PhraseTree, el: ElementId) -> String {
    tree.base_form(el).unwrap_or_default().to_string()
}

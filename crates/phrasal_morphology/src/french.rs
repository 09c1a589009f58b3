//! French inflection rules.
//!
//! Regular first-group (-er) and second-group (-ir) conjugations are built
//! from radicals; the closed third group relies on the lexicon's irregular
//! cells. Suffixation applies the c/ç, g/ge, y/i, and e/è alternations.

use phrasal_elements::PhraseTree;
use phrasal_foundation::{
    ElementId, Feature, Form, Gender, NumberAgreement, Person, PhraseCategory, Tense,
};
use phrasal_lexicon::Lexicon;

use crate::{MorphologyRules, particle, pronouns};

/// French morphology rules.
pub struct FrenchMorphology;

impl MorphologyRules for FrenchMorphology {
    fn noun(&self, tree: &PhraseTree, lexicon: &Lexicon, el: ElementId) -> String {
        let mut base = token_base(tree, el);
        let bag = tree.bag(el);

        let mut plural_override = bag.text(Feature::PluralForm).map(String::from);
        if let (Some(requested), Some(opposite)) =
            (bag.gender_opt(), bag.text(Feature::OppositeGender))
        {
            let entry_gender = lexicon
                .lookup(&base, phrasal_foundation::LexicalCategory::Noun)
                .and_then(|e| e.features().gender_opt());
            let flips = matches!(
                (entry_gender, requested),
                (Some(Gender::Masculine), Gender::Feminine)
                    | (Some(Gender::Feminine), Gender::Masculine)
            );
            if flips {
                base = opposite.to_string();
                plural_override = lexicon
                    .lookup(&base, phrasal_foundation::LexicalCategory::Noun)
                    .and_then(|e| e.features().text(Feature::PluralForm))
                    .map(String::from);
            }
        }

        let realised = if bag.is_plural() && !bag.is(Feature::Proper) {
            plural_override.unwrap_or_else(|| regular_plural(&base))
        } else {
            base
        };
        realised + &particle(tree, el)
    }

    #[allow(clippy::too_many_lines)]
    fn verb(&self, tree: &PhraseTree, _lexicon: &Lexicon, el: ElementId) -> String {
        let bag = tree.bag(el).clone();
        let base = token_base(tree, el);
        let number = bag.number();
        let person = bag.person();
        let tense = bag.tense();
        let form = bag.form();
        let (gender, adj_number) = participle_agreement(tree, el, form, bag.gender(), number);

        let cell = |feature: Feature| bag.text(feature).map(String::from);

        let realised = match form {
            Form::Infinitive | Form::BareInfinitive => base,
            Form::PresentParticiple | Form::Gerund => {
                let mut participle = cell(Feature::PresentParticiple)
                    .unwrap_or_else(|| add_suffix(&past_radical(&bag, &base), "ant"));
                if gender == Gender::Feminine {
                    participle.push('e');
                }
                if adj_number.is_plural() {
                    participle.push('s');
                }
                participle
            }
            Form::PastParticiple => {
                let mut participle = cell(Feature::PastParticiple)
                    .unwrap_or_else(|| build_past_participle(&base));
                if gender == Gender::Feminine {
                    participle = cell(Feature::FemininePastParticiple)
                        .unwrap_or_else(|| format!("{participle}e"));
                }
                if adj_number.is_plural() && !participle.ends_with('s') {
                    participle.push('s');
                }
                participle
            }
            Form::Subjunctive => {
                let override_cell = subjunctive_cell(number, person);
                cell(override_cell).unwrap_or_else(|| {
                    let suffix = match (number, person) {
                        (NumberAgreement::Plural, Person::First) => "ions",
                        (NumberAgreement::Plural, Person::Second) => "iez",
                        (NumberAgreement::Plural, Person::Third) => "ent",
                        (_, Person::Second) => "es",
                        _ => "e",
                    };
                    add_suffix(&present_radical(&base), suffix)
                })
            }
            Form::Imperative => {
                let mut imperative = build_present(&bag, &base, number, person);
                // -er imperatives drop the second person singular -s
                if number != NumberAgreement::Plural
                    && base.ends_with("er")
                    && imperative.ends_with("es")
                {
                    imperative.pop();
                }
                imperative
            }
            Form::Normal => match tense {
                Tense::Present => build_present(&bag, &base, number, person),
                Tense::Past => {
                    let override_cell = past_cell(number, person);
                    cell(override_cell).unwrap_or_else(|| {
                        add_suffix(
                            &past_radical(&bag, &base),
                            imparfait_suffix(number, person),
                        )
                    })
                }
                Tense::Future => add_suffix(
                    &future_radical(&bag, &base),
                    future_suffix(number, person),
                ),
                Tense::Conditional => add_suffix(
                    &future_radical(&bag, &base),
                    imparfait_suffix(number, person),
                ),
            },
        };
        realised + &particle(tree, el)
    }

    fn adjective(&self, tree: &PhraseTree, _lexicon: &Lexicon, el: ElementId) -> String {
        let base = token_base(tree, el);
        let bag = tree.bag(el);
        let target = agreement_target(tree, el);
        let gender = target
            .map(|t| tree.bag(t).gender())
            .unwrap_or_else(|| bag.gender());
        let plural = target
            .map(|t| tree.bag(t).is_plural())
            .unwrap_or_else(|| bag.is_plural());

        let mut realised = if bag.is(Feature::Comparative) {
            bag.text(Feature::ComparativeForm)
                .map_or_else(|| format!("plus {base}"), String::from)
        } else if bag.is(Feature::Superlative) {
            bag.text(Feature::SuperlativeForm)
                .map_or_else(|| format!("le plus {base}"), String::from)
        } else if gender == Gender::Feminine {
            if plural {
                bag.text(Feature::FemininePlural).map_or_else(
                    || format!("{}s", feminine_form(bag, &base)),
                    String::from,
                )
            } else {
                feminine_form(bag, &base)
            }
        } else {
            base.clone()
        };

        if gender != Gender::Feminine && plural && !realised.ends_with('s') && !realised.ends_with('x')
        {
            realised.push('s');
        }
        realised + &particle(tree, el)
    }

    fn adverb(&self, tree: &PhraseTree, _lexicon: &Lexicon, el: ElementId) -> String {
        let base = token_base(tree, el);
        let bag = tree.bag(el);
        let realised = if bag.is(Feature::Comparative) {
            bag.text(Feature::ComparativeForm)
                .map_or_else(|| base.clone(), String::from)
        } else {
            base
        };
        realised + &particle(tree, el)
    }

    fn determiner(&self, tree: &PhraseTree, _lexicon: &Lexicon, el: ElementId) -> String {
        let base = token_base(tree, el);
        let bag = tree.bag(el);
        let gender = tree
            .parent(el)
            .map_or_else(|| bag.gender(), |parent| tree.bag(parent).gender());
        let feminine = gender == Gender::Feminine;

        let realised = if bag.is_plural() {
            let plural = if feminine {
                bag.text(Feature::FemininePlural)
                    .or_else(|| bag.text(Feature::PluralForm))
            } else {
                bag.text(Feature::PluralForm)
            };
            plural.map_or_else(|| base.clone(), String::from)
        } else if feminine {
            bag.text(Feature::FeminineSingular)
                .map_or_else(|| base.clone(), String::from)
        } else {
            base
        };
        realised + &particle(tree, el)
    }

    fn pronoun(&self, tree: &PhraseTree, lexicon: &Lexicon, el: ElementId) -> String {
        pronouns::resolve(tree, lexicon, el) + &particle(tree, el)
    }
}

// --- nouns ------------------------------------------------------------------

/// Builds a regular French plural.
#[must_use]
pub fn regular_plural(base: &str) -> String {
    if base.ends_with('s') || base.ends_with('x') || base.ends_with('z') {
        return base.to_string();
    }
    if base.ends_with("eau") || base.ends_with("eu") {
        return format!("{base}x");
    }
    if let Some(stem) = base.strip_suffix("al") {
        return format!("{stem}aux");
    }
    format!("{base}s")
}

// --- verbs ------------------------------------------------------------------

/// Builds the present indicative, probing the irregular cells first and
/// falling back to the regular conjugation of the verb's group.
#[must_use]
pub fn build_present(
    bag: &phrasal_foundation::FeatureBag,
    base: &str,
    number: NumberAgreement,
    person: Person,
) -> String {
    let override_cell = present_cell(number, person);
    if let Some(form) = bag.text(override_cell) {
        return form.to_string();
    }
    let radical = present_radical(base);
    if base.ends_with("er") {
        let suffix = match (number, person) {
            (NumberAgreement::Plural, Person::First) => "ons",
            (NumberAgreement::Plural, Person::Second) => "ez",
            (NumberAgreement::Plural, Person::Third) => "ent",
            (_, Person::Second) => "es",
            _ => "e",
        };
        add_suffix(&radical, suffix)
    } else if base.ends_with("ir") {
        let suffix = match (number, person) {
            (NumberAgreement::Plural, Person::First) => "issons",
            (NumberAgreement::Plural, Person::Second) => "issez",
            (NumberAgreement::Plural, Person::Third) => "issent",
            (_, Person::Third) => "it",
            _ => "is",
        };
        format!("{radical}{suffix}")
    } else {
        let suffix = match (number, person) {
            (NumberAgreement::Plural, Person::First) => "ons",
            (NumberAgreement::Plural, Person::Second) => "ez",
            (NumberAgreement::Plural, Person::Third) => "ent",
            (_, Person::Third) => "",
            _ => "s",
        };
        format!("{radical}{suffix}")
    }
}

/// The present radical: the infinitive with its group ending stripped.
#[must_use]
pub fn present_radical(base: &str) -> String {
    base.strip_suffix("er")
        .or_else(|| base.strip_suffix("ir"))
        .or_else(|| base.strip_suffix("re"))
        .unwrap_or(base)
        .to_string()
}

/// The imparfait radical: the irregular past radical when the lexicon has
/// one, else the present radical.
#[must_use]
pub fn past_radical(bag: &phrasal_foundation::FeatureBag, base: &str) -> String {
    bag.text(Feature::PastRadical)
        .map_or_else(|| present_radical(base), String::from)
}

/// The future radical: the irregular one when registered, else the
/// infinitive (minus a final mute e).
#[must_use]
pub fn future_radical(bag: &phrasal_foundation::FeatureBag, base: &str) -> String {
    if let Some(radical) = bag.text(Feature::FutureRadical) {
        return radical.to_string();
    }
    base.strip_suffix('e').unwrap_or(base).to_string()
}

const fn future_suffix(number: NumberAgreement, person: Person) -> &'static str {
    match (number, person) {
        (NumberAgreement::Plural, Person::First) => "ons",
        (NumberAgreement::Plural, Person::Second) => "ez",
        (NumberAgreement::Plural, Person::Third) => "ont",
        (_, Person::First) => "ai",
        (_, Person::Second) => "as",
        (_, Person::Third) => "a",
    }
}

const fn imparfait_suffix(number: NumberAgreement, person: Person) -> &'static str {
    match (number, person) {
        (NumberAgreement::Plural, Person::First) => "ions",
        (NumberAgreement::Plural, Person::Second) => "iez",
        (NumberAgreement::Plural, Person::Third) => "aient",
        (_, Person::Third) => "ait",
        _ => "ais",
    }
}

/// Builds the regular past participle by conjugation group.
#[must_use]
pub fn build_past_participle(base: &str) -> String {
    if let Some(stem) = base.strip_suffix("er") {
        return format!("{stem}é");
    }
    if let Some(stem) = base.strip_suffix("ir") {
        return format!("{stem}i");
    }
    if let Some(stem) = base.strip_suffix("re") {
        return format!("{stem}u");
    }
    base.to_string()
}

/// Joins a radical and a suffix, applying the orthographic alternations:
/// c to ç and g to ge before a/o, y to i and e/é to è before a mute e.
#[must_use]
pub fn add_suffix(radical: &str, suffix: &str) -> String {
    let mut radical = radical.to_string();
    let starts_a_o = suffix
        .chars()
        .next()
        .is_some_and(|c| matches!(c, 'a' | 'ä' | 'à' | 'â' | 'o' | 'ô'));
    if starts_a_o {
        if let Some(stem) = radical.strip_suffix('c') {
            radical = format!("{stem}ç");
        } else if radical.ends_with('g') {
            radical.push('e');
        }
    }
    if suffix != "ez" && suffix.starts_with('e') {
        if radical.ends_with('y') && !radical.ends_with("ey") {
            radical.pop();
            radical.push('i');
        }
        let chars: Vec<char> = radical.chars().collect();
        if chars.len() >= 2 {
            let penultimate = chars[chars.len() - 2];
            if penultimate == 'e' || penultimate == 'é' {
                let mut out: String = chars[..chars.len() - 2].iter().collect();
                out.push('è');
                out.push(chars[chars.len() - 1]);
                radical = out;
            }
        }
    }
    radical + suffix
}

const fn present_cell(number: NumberAgreement, person: Person) -> Feature {
    match (number, person) {
        (NumberAgreement::Plural, Person::First) => Feature::Present1P,
        (NumberAgreement::Plural, Person::Second) => Feature::Present2P,
        (NumberAgreement::Plural, Person::Third) => Feature::Present3P,
        (_, Person::First) => Feature::Present1S,
        (_, Person::Second) => Feature::Present2S,
        (_, Person::Third) => Feature::Present3S,
    }
}

const fn past_cell(number: NumberAgreement, person: Person) -> Feature {
    match (number, person) {
        (NumberAgreement::Plural, Person::First) => Feature::Past1P,
        (NumberAgreement::Plural, Person::Second) => Feature::Past2P,
        (NumberAgreement::Plural, Person::Third) => Feature::Past3P,
        (_, Person::First) => Feature::Past1S,
        (_, Person::Second) => Feature::Past2S,
        (_, Person::Third) => Feature::Past3S,
    }
}

const fn subjunctive_cell(number: NumberAgreement, person: Person) -> Feature {
    match (number, person) {
        (NumberAgreement::Plural, Person::First) => Feature::Subjunctive1P,
        (NumberAgreement::Plural, Person::Second) => Feature::Subjunctive2P,
        (NumberAgreement::Plural, Person::Third) => Feature::Subjunctive3P,
        (_, Person::First) => Feature::Subjunctive1S,
        (_, Person::Second) => Feature::Subjunctive2S,
        (_, Person::Third) => Feature::Subjunctive3S,
    }
}

// --- adjectives -------------------------------------------------------------

fn feminine_form(bag: &phrasal_foundation::FeatureBag, base: &str) -> String {
    if let Some(form) = bag.text(Feature::FeminineSingular) {
        return form.to_string();
    }
    if base.ends_with('e') {
        return base.to_string();
    }
    format!("{base}e")
}

fn agreement_target(tree: &PhraseTree, el: ElementId) -> Option<ElementId> {
    let parent = tree.parent(el)?;
    if tree.is_phrase(parent, PhraseCategory::VerbPhrase) {
        return None;
    }
    if tree.bag(parent).gender_opt().is_none() {
        if let Some(grandparent) = tree.parent(parent) {
            if !tree.is_phrase(grandparent, PhraseCategory::VerbPhrase) {
                return Some(grandparent);
            }
        }
    }
    Some(parent)
}

fn participle_agreement(
    tree: &PhraseTree,
    el: ElementId,
    form: Form,
    gender: Gender,
    number: NumberAgreement,
) -> (Gender, NumberAgreement) {
    if !matches!(form, Form::PresentParticiple | Form::PastParticiple) {
        return (gender, number);
    }
    let Some(parent) = tree.parent(el) else {
        return (gender, number);
    };
    if tree.is_phrase(parent, PhraseCategory::VerbPhrase) {
        return (gender, number);
    }
    let bag = tree.bag(parent);
    (
        bag.gender_opt().unwrap_or(gender),
        bag.number_opt().unwrap_or(number),
    )
}

fn token_base(tree: &PhraseTree, el: ElementId) -> String {
    tree.base_form(el).unwrap_or_default().to_string()
}

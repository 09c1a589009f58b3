//! English inflection rules.

use phrasal_elements::PhraseTree;
use phrasal_foundation::{
    ElementId, Feature, Form, InflectionPattern, NumberAgreement, Person, Tense,
};
use phrasal_lexicon::Lexicon;

use crate::{MorphologyRules, is_consonant, last_char, particle, pronouns};

/// English morphology rules.
pub struct EnglishMorphology;

impl MorphologyRules for EnglishMorphology {
    fn noun(&self, tree: &PhraseTree, _lexicon: &Lexicon, el: ElementId) -> String {
        let base = token_base(tree, el);
        let bag = tree.bag(el);

        let mut realised = if bag.is_plural() && !bag.is(Feature::Proper) {
            bag.text(Feature::PluralForm)
                .map_or_else(|| regular_plural(&base), String::from)
        } else {
            base
        };

        if bag.is(Feature::Possessive) {
            if realised.ends_with('s') {
                realised.push('\'');
            } else {
                realised.push_str("'s");
            }
        }
        realised + &particle(tree, el)
    }

    fn verb(&self, tree: &PhraseTree, _lexicon: &Lexicon, el: ElementId) -> String {
        let base = token_base(tree, el);
        let bag = tree.bag(el);
        let number = bag.number();
        let person = bag.person();
        let tense = bag.tense();
        let form = bag.form();
        let double = bag
            .get(Feature::Pattern)
            .and_then(phrasal_foundation::FeatureValue::as_pattern)
            == Some(InflectionPattern::RegularDouble);

        let cell = |feature: Feature| bag.text(feature).map(String::from);

        let realised = match form {
            Form::Infinitive | Form::BareInfinitive | Form::Imperative => base,
            Form::PresentParticiple | Form::Gerund => cell(Feature::PresentParticiple)
                .unwrap_or_else(|| build_ing(&base, double)),
            Form::PastParticiple => cell(Feature::PastParticiple)
                .unwrap_or_else(|| build_past(&base, double)),
            Form::Subjunctive => base,
            Form::Normal => match tense {
                Tense::Present => {
                    if person == Person::Third && number != NumberAgreement::Plural {
                        cell(Feature::Present3S).unwrap_or_else(|| build_third_singular(&base))
                    } else {
                        let override_cell = match (number, person) {
                            (NumberAgreement::Plural, Person::First) => Feature::Present1P,
                            (NumberAgreement::Plural, Person::Second) => Feature::Present2P,
                            (NumberAgreement::Plural, Person::Third) => Feature::Present3P,
                            (_, Person::First) => Feature::Present1S,
                            (_, Person::Second) => Feature::Present2S,
                            (_, Person::Third) => Feature::Present3S,
                        };
                        cell(override_cell).unwrap_or(base)
                    }
                }
                Tense::Past => {
                    let override_cell = match (number, person) {
                        (NumberAgreement::Plural, Person::First) => Feature::Past1P,
                        (NumberAgreement::Plural, Person::Second) => Feature::Past2P,
                        (NumberAgreement::Plural, Person::Third) => Feature::Past3P,
                        (_, Person::First) => Feature::Past1S,
                        (_, Person::Second) => Feature::Past2S,
                        (_, Person::Third) => Feature::Past3S,
                    };
                    cell(override_cell).unwrap_or_else(|| build_past(&base, double))
                }
                Tense::Future | Tense::Conditional => base,
            },
        };
        realised + &particle(tree, el)
    }

    fn adjective(&self, tree: &PhraseTree, _lexicon: &Lexicon, el: ElementId) -> String {
        let base = token_base(tree, el);
        let bag = tree.bag(el);
        let double = bag
            .get(Feature::Pattern)
            .and_then(phrasal_foundation::FeatureValue::as_pattern)
            == Some(InflectionPattern::RegularDouble);

        let realised = if bag.is(Feature::Comparative) {
            bag.text(Feature::ComparativeForm)
                .map_or_else(|| build_comparative(&base, double), String::from)
        } else if bag.is(Feature::Superlative) {
            bag.text(Feature::SuperlativeForm)
                .map_or_else(|| build_superlative(&base, double), String::from)
        } else {
            base
        };
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
        let realised = if bag.is_plural() {
            bag.text(Feature::PluralForm)
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

/// Builds a regular English plural: -es after sibilants, -ies after a
/// consonant plus y, plain -s otherwise.
#[must_use]
pub fn regular_plural(base: &str) -> String {
    if ends_sibilant(base) {
        return format!("{base}es");
    }
    if ends_consonant_y(base) {
        return format!("{}ies", &base[..base.len() - 1]);
    }
    format!("{base}s")
}

/// Builds the third person singular present: the same ladder as the plural,
/// plus -es after o.
#[must_use]
pub fn build_third_singular(base: &str) -> String {
    if ends_sibilant(base) || base.ends_with('o') {
        return format!("{base}es");
    }
    if ends_consonant_y(base) {
        return format!("{}ies", &base[..base.len() - 1]);
    }
    format!("{base}s")
}

/// Builds the regular past / past participle in -ed.
#[must_use]
pub fn build_past(base: &str, double: bool) -> String {
    if double {
        return format!("{base}{}ed", last_char(base).unwrap_or_default());
    }
    if base.ends_with('e') {
        return format!("{base}d");
    }
    if ends_consonant_y(base) {
        return format!("{}ied", &base[..base.len() - 1]);
    }
    format!("{base}ed")
}

/// Builds the present participle in -ing.
#[must_use]
pub fn build_ing(base: &str, double: bool) -> String {
    if double {
        return format!("{base}{}ing", last_char(base).unwrap_or_default());
    }
    if let Some(stem) = base.strip_suffix("ie") {
        return format!("{stem}ying");
    }
    if base.ends_with('e') && !base.ends_with("ee") && !base.ends_with("oe") && !base.ends_with("ye")
    {
        return format!("{}ing", &base[..base.len() - 1]);
    }
    format!("{base}ing")
}

/// Builds the regular comparative in -er.
#[must_use]
pub fn build_comparative(base: &str, double: bool) -> String {
    if double {
        return format!("{base}{}er", last_char(base).unwrap_or_default());
    }
    if base.ends_with('e') {
        return format!("{base}r");
    }
    if ends_consonant_y(base) {
        return format!("{}ier", &base[..base.len() - 1]);
    }
    format!("{base}er")
}

/// Builds the regular superlative in -est.
#[must_use]
pub fn build_superlative(base: &str, double: bool) -> String {
    if double {
        return format!("{base}{}est", last_char(base).unwrap_or_default());
    }
    if base.ends_with('e') {
        return format!("{base}st");
    }
    if ends_consonant_y(base) {
        return format!("{}iest", &base[..base.len() - 1]);
    }
    format!("{base}est")
}

fn ends_sibilant(base: &str) -> bool {
    base.ends_with('s')
        || base.ends_with('x')
        || base.ends_with('z')
        || base.ends_with("ch")
        || base.ends_with("sh")
}

fn ends_consonant_y(base: &str) -> bool {
    let chars: Vec<char> = base.chars().collect();
    chars.len() >= 2
        && chars[chars.len() - 1].to_ascii_lowercase() == 'y'
        && is_consonant(chars[chars.len() - 2])
}

fn token_base(tree: &PhraseTree, el: ElementId) -> String {
    tree.base_form(el).unwrap_or_default().to_string()
}

//! Dutch inflection rules.
//!
//! References: the Algemene Nederlandse Spraakkunst treatment of noun
//! plurals and adjective inflection, and the 't kofschip rule for weak past
//! forms. Every ladder is ordered; the first matching rule wins.

use phrasal_elements::PhraseTree;
use phrasal_foundation::{
    ElementId, Feature, Form, Gender, InflectionPattern, LexicalCategory, NumberAgreement, Person,
    PhraseCategory, Tense,
};
use phrasal_lexicon::Lexicon;

use crate::{MorphologyRules, is_consonant, is_vowel, last_char, particle, pronouns};

/// Dutch morphology rules.
pub struct DutchMorphology;

impl MorphologyRules for DutchMorphology {
    fn noun(&self, tree: &PhraseTree, lexicon: &Lexicon, el: ElementId) -> String {
        let mut base = token_base(tree, el);
        let bag = tree.bag(el);

        // Gender flip: substitute the registered opposite-gender form before
        // any number rules apply.
        let requested = bag.gender_opt();
        let mut plural_override = bag.text(Feature::PluralForm).map(String::from);
        if let (Some(requested), Some(opposite)) = (requested, bag.text(Feature::OppositeGender)) {
            let entry_gender = lexicon
                .lookup(&base, LexicalCategory::Noun)
                .and_then(|e| e.features().gender_opt());
            if entry_gender.is_some_and(|g| flipped(g) == Some(requested)) {
                base = opposite.to_string();
                plural_override = lexicon
                    .lookup(&base, LexicalCategory::Noun)
                    .and_then(|e| e.features().text(Feature::PluralForm))
                    .map(String::from);
            }
        }

        let mut realised = if bag.is_plural() && !bag.is(Feature::Proper) {
            plural_override.unwrap_or_else(|| regular_plural(&base))
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

    #[allow(clippy::too_many_lines)]
    fn verb(&self, tree: &PhraseTree, lexicon: &Lexicon, el: ElementId) -> String {
        let bag = tree.bag(el).clone();
        let number = bag.number();
        let mut person = bag.person();
        let tense = bag.tense();
        let form = bag.form();
        let raw_base = token_base(tree, el);
        let full_base = raw_base.replace('|', "");

        // Participles outside a verb phrase agree like adjectives.
        let (gender, adj_number) = participle_agreement(tree, el, form, bag.gender(), number);

        let scv = separable_parts(tree, el, &raw_base);
        let main_base = scv
            .as_ref()
            .map_or_else(|| full_base.clone(), |(_, main)| main.clone());
        let main_entry_cell = |cell: Feature| -> Option<String> {
            bag.text(cell).map(String::from).or_else(|| {
                scv.as_ref().and_then(|(_, main)| {
                    lexicon
                        .lookup(main, LexicalCategory::Verb)
                        .and_then(|e| e.features().text(cell))
                        .map(String::from)
                })
            })
        };

        let realised = match form {
            Form::Infinitive | Form::BareInfinitive => full_base,
            Form::PresentParticiple | Form::Gerund => {
                let mut participle = bag
                    .text(Feature::PresentParticiple)
                    .map_or_else(|| format!("{full_base}d"), String::from);
                if gender == Gender::Feminine || adj_number.is_plural() {
                    if !participle.ends_with('e') {
                        participle.push('e');
                    }
                }
                participle
            }
            Form::PastParticiple => {
                let mut participle = bag
                    .text(Feature::PastParticiple)
                    .map(String::from)
                    .unwrap_or_else(|| {
                        let preverb = scv.as_ref().map_or("", |(pre, _)| pre.as_str());
                        build_past_participle(preverb, &main_base)
                    });
                if gender == Gender::Feminine {
                    participle = bag
                        .text(Feature::FemininePastParticiple)
                        .map_or_else(
                            || {
                                if participle.ends_with("en") || participle.ends_with('e') {
                                    participle.clone()
                                } else {
                                    format!("{participle}e")
                                }
                            },
                            String::from,
                        );
                } else if adj_number.is_plural()
                    && !participle.ends_with("en")
                    && !participle.ends_with('e')
                {
                    participle.push('e');
                }
                participle
            }
            Form::Subjunctive => {
                let cell = subjunctive_cell(number, person);
                main_entry_cell(cell).unwrap_or_else(|| build_subjunctive(&main_base, number))
            }
            Form::Imperative => {
                let cell = match (number, person) {
                    (NumberAgreement::Plural, Person::First) => Some(Feature::Imperative1P),
                    (NumberAgreement::Plural, _) => Some(Feature::Imperative2P),
                    _ => Some(Feature::Imperative2S),
                };
                match cell.and_then(main_entry_cell) {
                    Some(form) => form,
                    None => {
                        // Imperative singular falls back on the first person
                        // present; plural on the matching present cell.
                        if number != NumberAgreement::Plural {
                            person = Person::First;
                        }
                        present_form(&main_entry_cell, &main_base, number, person)
                    }
                }
            }
            Form::Normal => match tense {
                Tense::Present => {
                    // Inverted second person singular drops the -t and
                    // surfaces as the first person form ("denk jij").
                    if bag.is(Feature::Inverted)
                        && person == Person::Second
                        && number != NumberAgreement::Plural
                    {
                        person = Person::First;
                    }
                    present_form(&main_entry_cell, &main_base, number, person)
                }
                Tense::Past => {
                    let cell = past_cell(number, person);
                    main_entry_cell(cell).unwrap_or_else(|| {
                        let (radical, strong) = past_radical(&bag, lexicon, &main_base);
                        add_past_suffix(&radical, number, strong)
                    })
                }
                Tense::Future | Tense::Conditional => full_base,
            },
        };
        realised + &particle(tree, el)
    }

    fn adjective(&self, tree: &PhraseTree, _lexicon: &Lexicon, el: ElementId) -> String {
        let base = token_base(tree, el);
        let bag = tree.bag(el);

        let pattern = bag
            .get(Feature::Pattern)
            .and_then(phrasal_foundation::FeatureValue::as_pattern)
            .unwrap_or_else(|| detect_double_pattern(&base));
        let double = pattern == InflectionPattern::RegularDouble;

        if bag.is(Feature::Comparative) {
            let realised = bag.text(Feature::ComparativeForm).map_or_else(
                || {
                    if double {
                        double_final_consonant(&base) + "er"
                    } else {
                        regular_comparative(&base)
                    }
                },
                String::from,
            );
            return realised + &particle(tree, el);
        }
        if bag.is(Feature::Superlative) {
            let realised = bag
                .text(Feature::SuperlativeForm)
                .map_or_else(|| regular_superlative(&base), String::from);
            return realised + &particle(tree, el);
        }

        let target = agreement_target(tree, el);
        let needs_e = agreement_needs_e(tree, target);

        let mut realised = if double {
            double_final_consonant(&base)
        } else if ends_double_vowel_consonant(&base, false) && needs_e {
            collapse_double_vowel(&base)
        } else {
            base.clone()
        };

        // Final fricative voicing, blocked after consonant clusters.
        if !ends_vowel_and_cluster(&base) {
            realised = voice_final(&realised);
        }

        if needs_e && !realised.ends_with('e') {
            if ends_double_vowel_consonant(&realised, false) {
                realised = collapse_double_vowel(&realised);
            }
            realised.push('e');
        } else {
            if double {
                realised = base.clone();
            }
            realised = devoice_final(&realised);
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

// --- separable compound verbs ----------------------------------------------

const SEPARABLE_PREFIXES: [&str; 11] = [
    "bij", "in", "na", "uit", "op", "af", "mee", "tegen", "tussen", "terug", "toe",
];

/// Splits a separable compound verb into its preverb and main verb.
///
/// Detection cascade: the element's preverb feature, the parent's preverb
/// feature, a pipe in the base form ("op|bellen"), and finally the
/// longest-known-prefix heuristic over the closed prefix list (only when
/// more than three characters remain). Returns `None` for simplex verbs.
#[must_use]
pub fn separable_parts(
    tree: &PhraseTree,
    el: ElementId,
    base: &str,
) -> Option<(String, String)> {
    let from_features = tree
        .bag(el)
        .text(Feature::Preverb)
        .or_else(|| {
            tree.parent(el)
                .and_then(|parent| tree.bag(parent).text(Feature::Preverb))
        })
        .map(String::from);

    let stripped = base.replace('|', "");
    if let Some(preverb) = from_features {
        let main = stripped.strip_prefix(preverb.as_str())?.to_string();
        return Some((preverb, main));
    }

    if let Some((preverb, main)) = base.split_once('|') {
        return Some((preverb.to_string(), main.replace('|', "")));
    }

    let mut found: Option<&str> = None;
    for prefix in SEPARABLE_PREFIXES {
        if stripped.starts_with(prefix)
            && stripped.len() - prefix.len() > 3
            && found.is_none_or(|f| prefix.len() > f.len())
        {
            found = Some(prefix);
        }
    }
    found.map(|prefix| {
        (
            prefix.to_string(),
            stripped[prefix.len()..].to_string(),
        )
    })
}

// --- noun plurals -----------------------------------------------------------

const S_SUFFIX_ENDINGS: [&str; 18] = [
    "el", "em", "en", "aar", "aard", "erd", "je", "ster", "stel", "sel", "te", "age", "ette",
    "eur", "ier", "trice", "ine", "oir",
];

/// Builds a regular Dutch plural: an ordered ladder keyed on the
/// phonological shape of the ending.
#[must_use]
pub fn regular_plural(form: &str) -> String {
    let ends_full_vowel = last_char(form)
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'i' | 'o' | 'u' | 'y'));

    if ends_full_vowel && form.chars().all(|c| c.is_alphabetic() || c == '-') {
        if form.ends_with("eau") {
            return format!("{form}s");
        }
        return format!("{form}'s");
    }
    if form.ends_with("ee") || form.ends_with("ie") {
        return format!("{form}s");
    }
    if S_SUFFIX_ENDINGS.iter().any(|s| form.ends_with(s))
        || (form.ends_with("er") && !form.ends_with("oer"))
        || form.ends_with('e')
    {
        return format!("{form}s");
    }
    if form.chars().count() == 1 {
        return format!("{form}'s");
    }
    add_en_suffix(form)
}

/// Adds the -en plural suffix, applying vowel collapse and fricative
/// voicing.
#[must_use]
pub fn add_en_suffix(form: &str) -> String {
    let mut stem = form.to_string();
    let mut suffix = String::from("en");

    if form.ends_with("ij") || form.ends_with("erik") {
        // plain -en
    } else if ends_double_vowel_consonant(form, false) {
        stem = voice_final(form);
        stem = collapse_double_vowel(&stem);
    } else if ends_cvc(form) {
        if form.ends_with("ijf") {
            stem = format!("{}ijv", &form[..form.len() - 3]);
        } else if form.ends_with("eis") {
            stem = format!("{}eiz", &form[..form.len() - 3]);
        } else if form.ends_with('f') {
            stem = format!("{}v", &form[..form.len() - 1]);
        } else if form.ends_with('s') {
            stem = format!("{}z", &form[..form.len() - 1]);
        } else if let Some(last) = last_char(form) {
            // closed syllable: the final consonant doubles
            suffix = format!("{last}en");
        }
    } else if let Some(stripped) = form.strip_suffix("heid") {
        stem = stripped.to_string();
        suffix = String::from("heden");
    }
    stem + &suffix
}

// --- verb machinery ---------------------------------------------------------

fn present_form(
    cell_lookup: &dyn Fn(Feature) -> Option<String>,
    main_base: &str,
    number: NumberAgreement,
    person: Person,
) -> String {
    let cell = present_cell(number, person);
    cell_lookup(cell).unwrap_or_else(|| build_present(main_base, number, person))
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

/// Builds the present indicative of a regular verb from its radical.
#[must_use]
pub fn build_present(base: &str, number: NumberAgreement, person: Person) -> String {
    let radical = present_radical(base);
    match number {
        NumberAgreement::Plural => base.to_string(),
        _ => match person {
            Person::First => radical,
            Person::Second | Person::Third => {
                if radical.ends_with('t') {
                    radical
                } else {
                    format!("{radical}t")
                }
            }
        },
    }
}

/// The archaic subjunctive: singular radical plus -e, plural infinitive.
/// The -e reopens the final syllable, so a lengthened vowel collapses back.
#[must_use]
pub fn build_subjunctive(base: &str, number: NumberAgreement) -> String {
    match number {
        NumberAgreement::Plural => base.to_string(),
        _ => {
            let mut radical = base_radical(base);
            if ends_double_vowel_consonant(&radical, false) {
                radical = collapse_double_vowel(&radical);
            }
            format!("{radical}e")
        }
    }
}

/// The present radical: the base radical with a devoiced final fricative.
#[must_use]
pub fn present_radical(base: &str) -> String {
    devoice_final(&base_radical(base))
}

/// The common radical: strip -en, re-lengthen an open-syllable vowel, and
/// collapse a doubled consonant ("hebben" to "heb", "geven" to "geef").
#[must_use]
pub fn base_radical(base: &str) -> String {
    let mut radical = base.strip_suffix("en").unwrap_or(base).to_string();

    let chars: Vec<char> = radical.chars().collect();
    if chars.len() >= 3 {
        let last = chars[chars.len() - 1];
        let vowel = chars[chars.len() - 2];
        let before = chars[chars.len() - 3];
        if is_consonant(last)
            && matches!(vowel.to_ascii_lowercase(), 'a' | 'e' | 'o' | 'u')
            && is_consonant(before)
        {
            let mut lengthened: String = chars[..chars.len() - 1].iter().collect();
            lengthened.push(vowel);
            lengthened.push(last);
            radical = lengthened;
        }
    }

    let chars: Vec<char> = radical.chars().collect();
    if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
        radical.pop();
    }
    radical
}

/// The past radical: an irregular one from the lexicon marks a strong verb,
/// otherwise the weak verb falls through to the base radical.
#[must_use]
pub fn past_radical(
    bag: &phrasal_foundation::FeatureBag,
    lexicon: &Lexicon,
    main_base: &str,
) -> (String, bool) {
    let irregular = bag
        .text(Feature::PastRadical)
        .map(String::from)
        .or_else(|| {
            lexicon
                .lookup(main_base, LexicalCategory::Verb)
                .and_then(|e| e.features().text(Feature::PastRadical))
                .map(String::from)
        });
    match irregular {
        Some(radical) => {
            let first = radical
                .split_whitespace()
                .next()
                .unwrap_or(&radical)
                .to_string();
            (first, true)
        }
        None => (base_radical(main_base), false),
    }
}

// 't kofschip: radicals ending in these unvoiced sounds take -te/-ten.
const UNVOICED_PAST: [&str; 9] = ["t", "k", "f", "s", "ch", "p", "x", "sj", "c"];
const UNVOICED_PARTICIPLE: [&str; 8] = ["k", "f", "s", "ch", "p", "x", "sj", "c"];

/// Adds the weak past suffix, or inflects a strong radical for number.
#[must_use]
pub fn add_past_suffix(radical: &str, number: NumberAgreement, strong: bool) -> String {
    if strong {
        return match number {
            NumberAgreement::Plural => {
                if radical.ends_with('e') {
                    format!("{radical}n")
                } else {
                    let voiced = voice_final(radical);
                    let collapsed = if ends_double_vowel_consonant(&voiced, true) {
                        collapse_double_vowel(&voiced)
                    } else {
                        voiced
                    };
                    format!("{collapsed}en")
                }
            }
            _ => radical.to_string(),
        };
    }

    let radical = devoice_final(radical);
    let unvoiced = UNVOICED_PAST.iter().any(|s| radical.ends_with(s));
    let suffix = match (number, unvoiced) {
        (NumberAgreement::Plural, true) => "ten",
        (NumberAgreement::Plural, false) => "den",
        (_, true) => "te",
        (_, false) => "de",
    };
    format!("{radical}{suffix}")
}

/// Builds the weak past participle: preverb + ge + radical + t/d, with no
/// extra dental after a radical already ending in t or d.
#[must_use]
pub fn build_past_participle(preverb: &str, main_base: &str) -> String {
    let radical = present_radical(main_base);
    let suffix = if radical.ends_with('t') || radical.ends_with('d') {
        ""
    } else if UNVOICED_PARTICIPLE.iter().any(|s| radical.ends_with(s)) {
        "t"
    } else {
        "d"
    };
    format!("{preverb}ge{radical}{suffix}")
}

// --- adjectives -------------------------------------------------------------

fn detect_double_pattern(base: &str) -> InflectionPattern {
    if ends_cvc(base) && !base.ends_with("ig") && !base.ends_with("ijk") {
        InflectionPattern::RegularDouble
    } else {
        InflectionPattern::Regular
    }
}

fn double_final_consonant(base: &str) -> String {
    last_char(base).map_or_else(|| base.to_string(), |c| format!("{base}{c}"))
}

/// The agreement target of an adjective: its parent, or the grandparent when
/// the parent carries no gender of its own.
fn agreement_target(tree: &PhraseTree, el: ElementId) -> Option<ElementId> {
    let parent = tree.parent(el)?;
    if tree.bag(parent).gender_opt().is_none() {
        if let Some(grandparent) = tree.parent(parent) {
            return Some(grandparent);
        }
    }
    Some(parent)
}

/// The -e inflection is gated on plurality, common gender, or a definite
/// specifier, and suppressed entirely in predicative position (under a verb
/// phrase).
fn agreement_needs_e(tree: &PhraseTree, target: Option<ElementId>) -> bool {
    let Some(target) = target else { return false };
    if tree.is_phrase(target, PhraseCategory::VerbPhrase)
        || tree.is_phrase(target, PhraseCategory::Clause)
    {
        return false;
    }
    let bag = tree.bag(target);
    let specifier = tree
        .phrase(target)
        .and_then(|data| data.specifier)
        .and_then(|s| tree.base_form(s));
    let indefinite = matches!(specifier, Some("een" | "geen"));
    bag.is_plural() || bag.gender_opt() == Some(Gender::Common) || !indefinite
}

/// Builds the regular comparative: voice the final fricative, collapse a
/// doubled vowel, then -er (or -der after r).
#[must_use]
pub fn regular_comparative(base: &str) -> String {
    let mut form = voice_final(base);
    if ends_double_vowel_consonant(&form, true) {
        form = collapse_double_vowel(&form);
    }
    if form.ends_with('r') {
        format!("{form}der")
    } else {
        format!("{form}er")
    }
}

/// Builds the regular superlative: -st (plain -t after a sibilant), with a
/// periphrastic "meest" escape for awkward endings.
#[must_use]
pub fn regular_superlative(base: &str) -> String {
    if base.ends_with("st")
        || base.ends_with("sd")
        || base.ends_with("sk")
        || base.ends_with("de")
    {
        return format!("meest {}", voice_final(base));
    }
    if base.ends_with("sch") || base.ends_with('s') {
        format!("{base}t")
    } else {
        format!("{base}st")
    }
}

// --- phonological shape checks ----------------------------------------------

/// True when the form ends in two identical vowels followed by one
/// consonant ("groot", "geef"). `exclude_r` leaves r-final forms alone, as
/// the comparative handles those with its own suffix.
#[must_use]
pub fn ends_double_vowel_consonant(form: &str, exclude_r: bool) -> bool {
    let chars: Vec<char> = form.chars().collect();
    if chars.len() < 3 {
        return false;
    }
    let last = chars[chars.len() - 1];
    let v1 = chars[chars.len() - 2];
    let v2 = chars[chars.len() - 3];
    if exclude_r && last.to_ascii_lowercase() == 'r' {
        return false;
    }
    is_consonant(last) && is_vowel(v1) && v1 == v2
}

/// Collapses the doubled vowel before the final consonant ("groot" to
/// "grot").
#[must_use]
pub fn collapse_double_vowel(form: &str) -> String {
    let chars: Vec<char> = form.chars().collect();
    if chars.len() < 3 {
        return form.to_string();
    }
    let mut out: String = chars[..chars.len() - 2].iter().collect();
    out.push(chars[chars.len() - 1]);
    out
}

/// True when the form ends in a consonant-vowel-consonant closed syllable.
#[must_use]
pub fn ends_cvc(form: &str) -> bool {
    let chars: Vec<char> = form.chars().collect();
    if chars.len() < 3 {
        return false;
    }
    let last = chars[chars.len() - 1];
    let vowel = chars[chars.len() - 2];
    let before = chars[chars.len() - 3];
    is_consonant(last) && crate::is_vowel_or_y(vowel) && is_consonant(before)
}

/// True when the form ends in a vowel followed by two or more consonants.
fn ends_vowel_and_cluster(form: &str) -> bool {
    let chars: Vec<char> = form.chars().collect();
    if chars.len() < 3 {
        return false;
    }
    let last = chars[chars.len() - 1];
    let second = chars[chars.len() - 2];
    is_consonant(last) && is_consonant(second)
}

/// Voices a final fricative after a vowel or closing diphthong (f to v, s
/// to z).
#[must_use]
pub fn voice_final(form: &str) -> String {
    let ends_f = form.ends_with('f') || form.ends_with('F');
    let ends_s = form.ends_with('s') || form.ends_with('S');
    if !ends_f && !ends_s {
        return form.to_string();
    }
    let chars: Vec<char> = form.chars().collect();
    if chars.len() < 2 {
        return form.to_string();
    }
    let prev = chars[chars.len() - 2];
    let digraph = chars.len() >= 3 && {
        let pair: String = chars[chars.len() - 3..chars.len() - 1].iter().collect();
        matches!(pair.as_str(), "ij" | "ei" | "ui" | "au" | "ou")
    };
    if !crate::is_vowel_or_y(prev) && !digraph {
        return form.to_string();
    }
    let mut out: String = chars[..chars.len() - 1].iter().collect();
    out.push(if ends_f { 'v' } else { 'z' });
    out
}

/// Rolls back final fricative voicing (v to f, z to s).
#[must_use]
pub fn devoice_final(form: &str) -> String {
    if let Some(stripped) = form.strip_suffix('v') {
        return format!("{stripped}f");
    }
    if let Some(stripped) = form.strip_suffix('z') {
        return format!("{stripped}s");
    }
    form.to_string()
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
    let target = if tree.bag(parent).gender_opt().is_none() {
        tree.parent(parent).unwrap_or(parent)
    } else {
        parent
    };
    let bag = tree.bag(target);
    (
        bag.gender_opt().unwrap_or(gender),
        bag.number_opt().unwrap_or(number),
    )
}

const fn flipped(gender: Gender) -> Option<Gender> {
    match gender {
        Gender::Masculine => Some(Gender::Feminine),
        Gender::Feminine => Some(Gender::Masculine),
        _ => None,
    }
}

fn token_base(tree: &PhraseTree, el: ElementId) -> String {
    tree.base_form(el).unwrap_or_default().to_string()
}

//! French contractions and elision.

use phrasal_elements::PhraseTree;
use phrasal_foundation::{ElementId, Feature, LexicalCategory, PronounType};

use super::MorphophonologyRules;

/// French morphophonology rules.
pub struct FrenchMorphophonology;

// Words whose final vowel elides before a vowel-initial word.
const ELIDABLE: [(&str, &str); 10] = [
    ("je", "j'"),
    ("me", "m'"),
    ("te", "t'"),
    ("se", "s'"),
    ("le", "l'"),
    ("la", "l'"),
    ("ne", "n'"),
    ("de", "d'"),
    ("que", "qu'"),
    ("si", "s'"),
];

impl MorphophonologyRules for FrenchMorphophonology {
    fn adjust(&self, tree: &mut PhraseTree, left: ElementId, right: ElementId) {
        let Some(left_text) = tree.realisation(left).map(String::from) else {
            return;
        };
        let Some(right_text) = tree.realisation(right).map(String::from) else {
            return;
        };

        let left_category = tree.lexical_category(left);
        let right_category = tree.lexical_category(right);

        // Preposition + determiner/relative contraction table.
        if left_category == Some(LexicalCategory::Preposition)
            && (right_category == Some(LexicalCategory::Determiner)
                || tree.bag(right).pronoun_kind() == Some(PronounType::Relative))
        {
            if let Some(contracted) = contract(&left_text, &right_text) {
                tree.set_realisation(left, &contracted);
                tree.clear_realisation(right);
                return;
            }
        }

        // A personal pronoun before "en" or "y" keeps its full form even
        // where elision would otherwise apply ("vas-y", "donne-m'en" aside);
        // here that simply blocks the elision rule below.
        let blocks_elision = tree.bag(right).pronoun_kind() == Some(PronounType::SpecialPersonal)
            && tree.bag(left).pronoun_kind() == Some(PronounType::Personal);

        // Elision before a vowel or mute h.
        if !blocks_elision && begins_with_vowel(tree, right, &right_text) {
            for (full, elided) in ELIDABLE {
                // "si" only elides before "il"/"ils"
                if full == "si" && !right_text.starts_with("il") {
                    continue;
                }
                if left_text == full {
                    tree.set_realisation(left, elided);
                    return;
                }
            }
        }

        // Adjacent duplicate function words collapse.
        let duplicate_de = left_text == "de"
            && matches!(right_text.as_str(), "de" | "du" | "d'" | "des");
        let duplicate_que = left_text == "que" && matches!(right_text.as_str(), "que" | "qu'");
        if duplicate_de || duplicate_que {
            tree.clear_realisation(left);
        }
    }
}

/// The closed contraction table: preposition + article fuse to one form.
fn contract(left: &str, right: &str) -> Option<String> {
    let (stem, preposition) = if let Some(stem) = left.strip_suffix("de") {
        (stem, "de")
    } else if let Some(stem) = left.strip_suffix('à') {
        (stem, "à")
    } else {
        return None;
    };
    if !stem.is_empty() && !stem.ends_with(' ') {
        return None;
    }

    let fused = match (preposition, right) {
        ("de", "le") => "du".to_string(),
        ("de", "les") => "des".to_string(),
        ("à", "le") => "au".to_string(),
        ("à", "les") => "aux".to_string(),
        ("de", r) if r.starts_with("lequel") => format!("duquel{}", &r[6..]),
        ("de", r) if r.starts_with("lesquel") => format!("desquel{}", &r[7..]),
        ("à", r) if r.starts_with("lequel") => format!("auquel{}", &r[6..]),
        ("à", r) if r.starts_with("lesquel") => format!("auxquel{}", &r[7..]),
        _ => return None,
    };
    Some(format!("{stem}{fused}"))
}

/// True when a realised token begins with a vowel or mute h, unless it is
/// marked as carrying an aspirated h.
fn begins_with_vowel(tree: &PhraseTree, id: ElementId, text: &str) -> bool {
    if tree.bag(id).is(Feature::AspiratedH) {
        return false;
    }
    text.chars().next().is_some_and(|c| {
        matches!(
            c.to_lowercase().next().unwrap_or(c),
            'a' | 'à' | 'â' | 'ä' | 'e' | 'é' | 'è' | 'ê' | 'ë' | 'i' | 'î' | 'ï' | 'o' | 'ô'
                | 'u' | 'û' | 'ü' | 'ù' | 'y' | 'ý' | 'ÿ' | 'h'
        )
    })
}

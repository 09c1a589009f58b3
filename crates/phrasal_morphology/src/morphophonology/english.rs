//! English article adjustment.

use phrasal_elements::PhraseTree;
use phrasal_foundation::ElementId;

use super::MorphophonologyRules;

/// English morphophonology rules.
pub struct EnglishMorphophonology;

impl MorphophonologyRules for EnglishMorphophonology {
    fn adjust(&self, tree: &mut PhraseTree, left: ElementId, right: ElementId) {
        let Some(left_text) = tree.realisation(left).map(String::from) else {
            return;
        };
        let Some(right_text) = tree.realisation(right).map(String::from) else {
            return;
        };

        // "a" becomes "an" before a vowel-initial word.
        if left_text == "a" && starts_with_vowel_sound(&right_text) {
            tree.set_realisation(left, "an");
            return;
        }

        // Adjacent duplicate function words collapse.
        if left_text == right_text && matches!(left_text.as_str(), "that" | "to" | "of") {
            tree.clear_realisation(left);
        }
    }
}

fn starts_with_vowel_sound(text: &str) -> bool {
    // "u" words like "university" are left to lexical overrides; the rule
    // covers the plain orthographic vowels.
    text.chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}

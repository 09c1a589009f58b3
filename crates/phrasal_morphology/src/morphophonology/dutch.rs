//! Dutch duplicate collapse.

use phrasal_elements::PhraseTree;
use phrasal_foundation::ElementId;

use super::MorphophonologyRules;

/// Dutch morphophonology rules.
pub struct DutchMorphophonology;

impl MorphophonologyRules for DutchMorphophonology {
    fn adjust(&self, tree: &mut PhraseTree, left: ElementId, right: ElementId) {
        let Some(left_text) = tree.realisation(left).map(String::from) else {
            return;
        };
        let Some(right_text) = tree.realisation(right).map(String::from) else {
            return;
        };

        // Adjacent duplicate complementisers and prepositions collapse.
        if left_text == right_text
            && matches!(left_text.as_str(), "dat" | "of" | "te" | "aan" | "van")
        {
            tree.clear_realisation(left);
        }
    }
}

//! Cross-word adjustment rules.
//!
//! Morphophonology runs after morphology, over consecutive realised text
//! tokens. Each rule either rewrites the left token (absorbing the right
//! one, whose realisation is cleared so aggregation drops it) or leaves
//! both tokens untouched.

mod dutch;
mod english;
mod french;

use phrasal_elements::PhraseTree;
use phrasal_foundation::{ElementId, Language};

pub use dutch::DutchMorphophonology;
pub use english::EnglishMorphophonology;
pub use french::FrenchMorphophonology;

/// Adjacent-pair adjustment capability, one implementation per language.
pub trait MorphophonologyRules: Sync {
    /// Adjusts two consecutive realised tokens in place.
    fn adjust(&self, tree: &mut PhraseTree, left: ElementId, right: ElementId);
}

/// Returns the morphophonology rules for a language.
#[must_use]
pub fn morphophonology_for(language: Language) -> &'static dyn MorphophonologyRules {
    match language {
        Language::English => &EnglishMorphophonology,
        Language::French => &FrenchMorphophonology,
        Language::Dutch => &DutchMorphophonology,
    }
}

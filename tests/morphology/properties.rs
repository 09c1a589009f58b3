//! Property suites over the inflection ladders.

use proptest::prelude::*;

use phrasal_foundation::{NumberAgreement, Person};
use phrasal_morphology::{dutch, english};

proptest! {
    /// Repeated calls to the plural builders on the same input produce
    /// byte-identical output: the ladders are pure functions.
    #[test]
    fn dutch_plural_is_deterministic(word in "[a-z]{2,12}") {
        prop_assert_eq!(dutch::regular_plural(&word), dutch::regular_plural(&word));
    }

    #[test]
    fn english_plural_is_deterministic(word in "[a-z]{2,12}") {
        prop_assert_eq!(english::regular_plural(&word), english::regular_plural(&word));
    }

    /// Every vowel-final Dutch word (outside the ee/ie/eau classes) takes
    /// the apostrophe-s plural.
    #[test]
    fn dutch_open_vowel_plural_takes_apostrophe(stem in "[a-z]{2,8}[aiouy]") {
        prop_assume!(!stem.ends_with("ee") && !stem.ends_with("ie") && !stem.ends_with("eau"));
        let plural = dutch::regular_plural(&stem);
        prop_assert!(plural.ends_with("'s"), "{} -> {}", stem, plural);
    }

    /// The weak past suffix is always one of the 't kofschip pairs, and the
    /// plural cell is always the singular cell plus -n.
    #[test]
    fn dutch_weak_past_suffixes_are_dental(radical in "[a-z]{2,10}") {
        let singular = dutch::add_past_suffix(&radical, NumberAgreement::Singular, false);
        let plural = dutch::add_past_suffix(&radical, NumberAgreement::Plural, false);
        prop_assert!(singular.ends_with("te") || singular.ends_with("de"));
        prop_assert_eq!(format!("{singular}n"), plural);
    }

    /// The present second and third person singular never end in a double t.
    #[test]
    fn dutch_present_never_doubles_t(base in "[a-z]{3,10}en") {
        for person in [Person::Second, Person::Third] {
            let form = dutch::build_present(&base, NumberAgreement::Singular, person);
            prop_assert!(!form.ends_with("tt"), "{} -> {}", base, form);
        }
    }

    /// English third-singular forms always lengthen the base.
    #[test]
    fn english_third_singular_extends_base(base in "[a-z]{2,10}") {
        let form = english::build_third_singular(&base);
        prop_assert!(form.len() > base.len());
    }
}

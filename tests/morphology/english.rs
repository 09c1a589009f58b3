//! Integration tests for English inflection.

use phrasal_morphology::english;

#[test]
fn plural_ladder() {
    assert_eq!(english::regular_plural("key"), "keys");
    assert_eq!(english::regular_plural("thought"), "thoughts");
    assert_eq!(english::regular_plural("computer"), "computers");
    assert_eq!(english::regular_plural("kiss"), "kisses");
    assert_eq!(english::regular_plural("city"), "cities");
    assert_eq!(english::regular_plural("boy"), "boys");
}

#[test]
fn third_singular_ladder() {
    assert_eq!(english::build_third_singular("think"), "thinks");
    assert_eq!(english::build_third_singular("want"), "wants");
    assert_eq!(english::build_third_singular("go"), "goes");
    assert_eq!(english::build_third_singular("wash"), "washes");
    assert_eq!(english::build_third_singular("carry"), "carries");
}

#[test]
fn past_ladder() {
    assert_eq!(english::build_past("motivate", false), "motivated");
    assert_eq!(english::build_past("present", false), "presented");
    assert_eq!(english::build_past("carry", false), "carried");
    assert_eq!(english::build_past("stop", true), "stopped");
}

#[test]
fn participle_ladder() {
    assert_eq!(english::build_ing("dance", false), "dancing");
    assert_eq!(english::build_ing("die", false), "dying");
    assert_eq!(english::build_ing("see", false), "seeing");
    assert_eq!(english::build_ing("run", true), "running");
}

#[test]
fn degree_ladder() {
    assert_eq!(english::build_comparative("smart", false), "smarter");
    assert_eq!(english::build_superlative("smart", false), "smartest");
    assert_eq!(english::build_comparative("happy", false), "happier");
    assert_eq!(english::build_superlative("nice", false), "nicest");
}

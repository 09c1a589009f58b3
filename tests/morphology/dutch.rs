//! Integration tests for Dutch inflection.

use phrasal_foundation::{NumberAgreement, Person};
use phrasal_morphology::dutch;

#[test]
fn noun_plural_ladder() {
    assert_eq!(dutch::regular_plural("auto"), "auto's");
    assert_eq!(dutch::regular_plural("vakantie"), "vakanties");
    assert_eq!(dutch::regular_plural("sleutel"), "sleutels");
    assert_eq!(dutch::regular_plural("tafel"), "tafels");
    assert_eq!(dutch::regular_plural("man"), "mannen");
    assert_eq!(dutch::regular_plural("bed"), "bedden");
    assert_eq!(dutch::regular_plural("boom"), "bomen");
    assert_eq!(dutch::regular_plural("mogelijkheid"), "mogelijkheden");
    assert_eq!(dutch::regular_plural("rij"), "rijen");
}

#[test]
fn radical_derivation() {
    assert_eq!(dutch::base_radical("denken"), "denk");
    assert_eq!(dutch::base_radical("hebben"), "heb");
    assert_eq!(dutch::base_radical("geven"), "geev");
    assert_eq!(dutch::present_radical("geven"), "geef");
    assert_eq!(dutch::present_radical("motiveren"), "motiveer");
    assert_eq!(dutch::present_radical("reizen"), "reis");
}

#[test]
fn present_tense_cells() {
    assert_eq!(
        dutch::build_present("presenteren", NumberAgreement::Singular, Person::First),
        "presenteer"
    );
    assert_eq!(
        dutch::build_present("presenteren", NumberAgreement::Singular, Person::Third),
        "presenteert"
    );
    assert_eq!(
        dutch::build_present("presenteren", NumberAgreement::Plural, Person::Second),
        "presenteren"
    );
}

#[test]
fn weak_past_and_participle() {
    assert_eq!(
        dutch::add_past_suffix("werk", NumberAgreement::Singular, false),
        "werkte"
    );
    assert_eq!(
        dutch::add_past_suffix("speel", NumberAgreement::Plural, false),
        "speelden"
    );
    assert_eq!(dutch::build_past_participle("", "presenteren"), "gepresenteerd");
    assert_eq!(dutch::build_past_participle("", "werken"), "gewerkt");
    assert_eq!(dutch::build_past_participle("op", "bellen"), "opgebeld");
}

#[test]
fn strong_past_plural_reuses_the_radical() {
    assert_eq!(
        dutch::add_past_suffix("kreeg", NumberAgreement::Plural, true),
        "kregen"
    );
    assert_eq!(
        dutch::add_past_suffix("zat", NumberAgreement::Singular, true),
        "zat"
    );
}

#[test]
fn adjective_degrees() {
    assert_eq!(dutch::regular_comparative("groot"), "groter");
    assert_eq!(dutch::regular_comparative("duur"), "duurder");
    assert_eq!(dutch::regular_comparative("lief"), "liever");
    assert_eq!(dutch::regular_superlative("groot"), "grootst");
}

#[test]
fn subjunctive_is_radical_plus_e() {
    assert_eq!(
        dutch::build_subjunctive("leven", NumberAgreement::Singular),
        "leve"
    );
    assert_eq!(
        dutch::build_subjunctive("leven", NumberAgreement::Plural),
        "leven"
    );
}

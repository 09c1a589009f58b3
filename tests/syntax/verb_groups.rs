//! Integration tests for the tagged verb-group split.

use phrasal_elements::{Element, ElementKind, PhraseTree, WordData};
use phrasal_foundation::{ElementId, LexicalCategory};
use phrasal_syntax::verb_group::{VerbGroup, VgSlot};

fn verb(tree: &mut PhraseTree, base: &str) -> ElementId {
    tree.insert(Element::new(ElementKind::Inflected(WordData::new(
        base,
        LexicalCategory::Verb,
    ))))
}

#[test]
fn single_finite_verb_is_main_only() {
    let mut tree = PhraseTree::new();
    let mut group = VerbGroup::new();
    let denk = verb(&mut tree, "denken");
    group.push(denk, VgSlot::Finite);
    let split = group.split();
    assert!(split.auxiliary.is_empty());
    assert_eq!(split.main, vec![denk]);
}

#[test]
fn future_perfect_cluster_realises_top_down() {
    let mut tree = PhraseTree::new();
    let mut group = VerbGroup::new();
    let participle = verb(&mut tree, "motiveren");
    let hebben = verb(&mut tree, "hebben");
    let zullen = verb(&mut tree, "zullen");
    group.push(participle, VgSlot::Participle);
    group.push(hebben, VgSlot::Infinitive);
    group.push(zullen, VgSlot::Finite);
    let split = group.split();
    assert_eq!(split.auxiliary, vec![zullen]);
    assert_eq!(split.main, vec![hebben, participle]);
}

#[test]
fn negation_realises_inside_the_cluster() {
    let mut tree = PhraseTree::new();
    let mut group = VerbGroup::new();
    let main = verb(&mut tree, "motiveren");
    let niet = verb(&mut tree, "niet");
    let zullen = verb(&mut tree, "zullen");
    group.push(main, VgSlot::Infinitive);
    group.push(niet, VgSlot::Negation);
    group.push(zullen, VgSlot::Finite);
    let split = group.split();
    assert_eq!(split.main, vec![niet, main]);
}

#[test]
fn clitics_above_the_finite_verb_front_with_it() {
    let mut tree = PhraseTree::new();
    let mut group = VerbGroup::new();
    let participle = verb(&mut tree, "manger");
    let pas = verb(&mut tree, "pas");
    let avoir = verb(&mut tree, "avoir");
    let le = verb(&mut tree, "le");
    let ne = verb(&mut tree, "ne");
    group.push(participle, VgSlot::Participle);
    group.push(pas, VgSlot::Negation);
    group.push(avoir, VgSlot::Finite);
    group.push(le, VgSlot::Clitic);
    group.push(ne, VgSlot::Negation);
    let split = group.split();
    // surface: "ne le a pas mangé" before morphophonology
    assert_eq!(split.auxiliary, vec![ne, le, avoir]);
    assert_eq!(split.main, vec![pas, participle]);
}

#[test]
fn verbal_count_ignores_markers() {
    let mut tree = PhraseTree::new();
    let mut group = VerbGroup::new();
    let te = verb(&mut tree, "te");
    let gaan = verb(&mut tree, "gaan");
    group.push(gaan, VgSlot::Finite);
    group.push(te, VgSlot::Te);
    assert_eq!(group.verbal_count(), 1);
    let split = group.split();
    assert_eq!(split.main, vec![te, gaan]);
}

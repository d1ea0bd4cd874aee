use keyswitch_compile::{synthesize, LabelTable, Trie};
use keyswitch_ir::{CaseFold, Decision, EqualityTerm, LengthCheck};
use pretty_assertions::assert_eq;

use super::*;

fn compile(pairs: Vec<(&str, u32)>, fold: CaseFold, condense: bool) -> Decision<u32> {
    let table = LabelTable::build(pairs, fold)
        .unwrap_or_else(|e| panic!("unexpected build error: {e}"));
    synthesize(&Trie::build(table), condense)
}

// Hand-built trees

#[test]
fn length_check_rejects_before_reading() {
    let tree = Decision::LengthCheck {
        check: LengthCheck::Exact(2),
        next: Box::new(Decision::TerminalReturn(1)),
    };
    assert_eq!(eval(&tree, "ab", CaseFold::Ordinal), Some(&1));
    assert_eq!(eval(&tree, "a", CaseFold::Ordinal), None);
    assert_eq!(eval(&tree, "abc", CaseFold::Ordinal), None);
}

#[test]
fn condensed_equality_needs_every_term() {
    let tree = Decision::CondensedEquality {
        terms: vec![
            EqualityTerm {
                offset: 0,
                expected: 'o',
            },
            EqualityTerm {
                offset: 2,
                expected: 'k',
            },
        ],
        next: Box::new(Decision::TerminalReturn(7)),
    };
    assert_eq!(eval(&tree, "oak", CaseFold::Ordinal), Some(&7));
    assert_eq!(eval(&tree, "oik", CaseFold::Ordinal), Some(&7));
    assert_eq!(eval(&tree, "oaks", CaseFold::Ordinal), Some(&7));
    assert_eq!(eval(&tree, "oat", CaseFold::Ordinal), None);
    // Too short to read offset 2.
    assert_eq!(eval(&tree, "oa", CaseFold::Ordinal), None);
}

#[test]
fn dispatch_prefers_on_end_when_input_ends() {
    let tree = Decision::CharDispatch {
        offset: 1,
        on_end: Some(0),
        cases: vec![('x', Decision::TerminalReturn(1))],
    };
    assert_eq!(eval(&tree, "a", CaseFold::Ordinal), Some(&0));
    assert_eq!(eval(&tree, "ax", CaseFold::Ordinal), Some(&1));
    assert_eq!(eval(&tree, "ay", CaseFold::Ordinal), None);
    assert_eq!(eval(&tree, "", CaseFold::Ordinal), None);
}

#[test]
fn not_found_is_a_miss() {
    let tree: Decision<u32> = Decision::NotFoundReturn;
    assert_eq!(eval(&tree, "", CaseFold::Ordinal), None);
    assert_eq!(eval(&tree, "anything", CaseFold::Ordinal), None);
}

#[test]
fn input_characters_are_folded() {
    let tree = Decision::CharDispatch {
        offset: 0,
        on_end: None,
        cases: vec![('A', Decision::TerminalReturn(1))],
    };
    assert_eq!(eval(&tree, "a", CaseFold::IgnoreCase), Some(&1));
    assert_eq!(eval(&tree, "a", CaseFold::Ordinal), None);
}

// Compiled trees

#[test]
fn nested_prefixes_resolve_independently() {
    for condense in [true, false] {
        let tree = compile(vec![("A", 0), ("AA", 1), ("AAA", 2)], CaseFold::Ordinal, condense);
        assert_eq!(eval(&tree, "A", CaseFold::Ordinal), Some(&0));
        assert_eq!(eval(&tree, "AA", CaseFold::Ordinal), Some(&1));
        assert_eq!(eval(&tree, "AAA", CaseFold::Ordinal), Some(&2));
        assert_eq!(eval(&tree, "AAAA", CaseFold::Ordinal), None);
        assert_eq!(eval(&tree, "", CaseFold::Ordinal), None);
    }
}

#[test]
fn case_insensitive_set() {
    let pairs = vec![("testing", 1), ("test0ng", 2), ("test0ng-longer", 3)];
    let fold = CaseFold::IgnoreCase;
    for condense in [true, false] {
        let tree = compile(pairs.clone(), fold, condense);
        assert_eq!(eval(&tree, "TESTING", fold), Some(&1));
        assert_eq!(eval(&tree, "tEsting", fold), Some(&1));
        assert_eq!(eval(&tree, "test0ng", fold), Some(&2));
        assert_eq!(eval(&tree, "test0ng-longer", fold), Some(&3));
        assert_eq!(eval(&tree, "testing2", fold), None);
        for label in ["testing", "test0ng"] {
            for end in 0..label.len() {
                assert_eq!(eval(&tree, &label[..end], fold), None, "prefix {:?}", &label[..end]);
            }
        }
    }
}

#[test]
fn char_slices_and_strings_agree() {
    let tree = compile(vec![("größe", 0), ("groß", 1)], CaseFold::Ordinal, true);
    let chars: Vec<char> = "größe".chars().collect();
    assert_eq!(eval(&tree, "größe", CaseFold::Ordinal), Some(&0));
    assert_eq!(eval(&tree, &chars[..], CaseFold::Ordinal), Some(&0));
    assert_eq!(eval(&tree, &chars, CaseFold::Ordinal), Some(&0));
    assert_eq!(eval(&tree, &String::from("groß"), CaseFold::Ordinal), Some(&1));
}

#[test]
fn empty_label_matches_only_empty_input() {
    let tree = compile(vec![("", 0), ("a", 1)], CaseFold::Ordinal, true);
    assert_eq!(eval(&tree, "", CaseFold::Ordinal), Some(&0));
    assert_eq!(eval(&tree, "a", CaseFold::Ordinal), Some(&1));
    assert_eq!(eval(&tree, "b", CaseFold::Ordinal), None);
}

#[test]
fn long_input_is_rejected_by_length() {
    let tree = compile(vec![("foo", 0), ("bar", 1)], CaseFold::Ordinal, true);
    let long = "foo".repeat(10_000);
    assert_eq!(eval(&tree, long.as_str(), CaseFold::Ordinal), None);
}

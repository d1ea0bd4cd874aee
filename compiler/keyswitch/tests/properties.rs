//! Property-based tests for compiled matchers.
//!
//! Random label sets are compiled and checked against two oracles: a
//! `HashMap` of the folded labels and a direct walk of the trie.
//!
//! 1. Exact match: every label returns its own payload
//! 2. Truncation: a proper prefix that is not a label misses
//! 3. Case folding: any casing of a label matches under `IgnoreCase`
//! 4. Shape independence: condensing never changes results
//! 5. Totality: arbitrary input returns without panicking

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::{BTreeSet, HashMap};

use keyswitch::{compile, CaseFold, Matcher, MatcherConfig};
use proptest::prelude::*;

// -- Strategies --

/// Small alphabet so labels share prefixes and overlap often.
fn label_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[abc]{0,6}", 0..24)
}

fn input() -> impl Strategy<Value = String> {
    "[abcABC]{0,8}"
}

/// Random casing of `s`, one flag per character.
fn recase(s: &str, upper: &[bool]) -> String {
    s.chars()
        .zip(upper.iter().cycle())
        .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
        .collect()
}

fn build(labels: &BTreeSet<String>, config: MatcherConfig) -> Matcher<usize> {
    compile(
        labels.iter().enumerate().map(|(i, label)| (label.as_str(), i)),
        config,
    )
    .expect("a set has no duplicates")
}

fn oracle(labels: &BTreeSet<String>, fold: CaseFold) -> HashMap<String, usize> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| (fold.fold_str(label), i))
        .collect()
}

// -- Properties --

proptest! {
    #[test]
    fn every_label_matches_itself(labels in label_set()) {
        for condense in [true, false] {
            let matcher = build(&labels, MatcherConfig::ordinal().with_condense(condense));
            for (i, label) in labels.iter().enumerate() {
                prop_assert_eq!(matcher.get(label.as_str()), Some(&i));
            }
        }
    }

    #[test]
    fn matches_agree_with_oracles(labels in label_set(), probes in prop::collection::vec(input(), 0..32)) {
        for fold in [CaseFold::Ordinal, CaseFold::IgnoreCase] {
            let matcher = build(&labels, MatcherConfig::ordinal().with_case_fold(fold));
            let expected = oracle(&labels, fold);
            for probe in &probes {
                let got = matcher.get(probe.as_str());
                prop_assert_eq!(got, expected.get(&fold.fold_str(probe)), "probe {:?}", probe);
                prop_assert_eq!(got, matcher.trie().lookup(probe), "probe {:?}", probe);
            }
        }
    }

    #[test]
    fn proper_prefixes_miss_unless_labels(labels in label_set()) {
        let matcher = build(&labels, MatcherConfig::ordinal());
        for label in &labels {
            for end in 0..label.len() {
                let prefix = &label[..end];
                if !labels.contains(prefix) {
                    prop_assert_eq!(matcher.get(prefix), None, "prefix {:?} of {:?}", prefix, label);
                }
            }
        }
    }

    #[test]
    fn any_casing_matches_when_ignoring_case(
        labels in label_set(),
        upper in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let ignore = build(&labels, MatcherConfig::ignore_case());
        let ordinal = build(&labels, MatcherConfig::ordinal());
        for (i, label) in labels.iter().enumerate() {
            let variant = recase(label, &upper);
            prop_assert_eq!(ignore.get(variant.as_str()), Some(&i));
            // Labels are lowercase, so an exact matcher only accepts the lowercase form.
            let exact = if variant == *label { Some(&i) } else { None };
            prop_assert_eq!(ordinal.get(variant.as_str()), exact);
        }
    }

    #[test]
    fn condensing_never_changes_results(labels in label_set(), probes in prop::collection::vec(input(), 0..32)) {
        let on = build(&labels, MatcherConfig::ignore_case());
        let off = build(&labels, MatcherConfig::ignore_case().with_condense(false));
        for probe in &probes {
            prop_assert_eq!(on.get(probe.as_str()), off.get(probe.as_str()), "probe {:?}", probe);
        }
    }

    #[test]
    fn arbitrary_input_is_total(labels in label_set(), probe in any::<String>()) {
        let matcher = build(&labels, MatcherConfig::ignore_case());
        let chars: Vec<char> = probe.chars().collect();
        prop_assert_eq!(matcher.get(probe.as_str()), matcher.get(&chars[..]));
    }
}

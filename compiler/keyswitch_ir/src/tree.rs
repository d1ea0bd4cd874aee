//! Decision-procedure IR.
//!
//! A [`Decision`] is the compiled form of a label set: a tree of length
//! guards, condensed equality tests and per-character dispatches whose leaves
//! return a payload or report a miss. The shape is the same one a person would
//! write by hand as nested `switch` statements over the input.
//!
//! # Evaluation model
//!
//! Evaluation starts at the root with the whole input. Every node either
//! finishes (a payload or a miss) or continues into exactly one child, so the
//! tree is a single-pass, non-backtracking procedure:
//!
//! - input characters are inspected at most once each
//! - inspected offsets strictly increase along any root-to-leaf path
//! - every failed test is a miss; there is no fall-back to a sibling
//!
//! Backends rely on the second property: `keyswitch_eval` reads input
//! through a forward-only cursor.
//!
//! # Consumers
//!
//! - `keyswitch_eval`: walks the tree against an input
//! - `keyswitch_codegen`: lowers the tree to Rust source text

use std::{fmt, mem};

use keyswitch_stack::with_stack;

/// A guard on the total input length. Inputs the guard rejects are a miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthCheck {
    /// `len == n`
    Exact(usize),
    /// `len >= n`
    Min(usize),
    /// `len <= n`
    Max(usize),
    /// `min <= len <= max`
    Range { min: usize, max: usize },
}

impl LengthCheck {
    /// Returns `true` if an input of `len` characters passes this guard.
    #[inline]
    pub fn admits(self, len: usize) -> bool {
        match self {
            LengthCheck::Exact(n) => len == n,
            LengthCheck::Min(n) => len >= n,
            LengthCheck::Max(n) => len <= n,
            LengthCheck::Range { min, max } => min <= len && len <= max,
        }
    }
}

impl fmt::Display for LengthCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthCheck::Exact(n) => write!(f, "len == {n}"),
            LengthCheck::Min(n) => write!(f, "len >= {n}"),
            LengthCheck::Max(n) => write!(f, "len <= {n}"),
            LengthCheck::Range { min, max } => write!(f, "len in {min}..={max}"),
        }
    }
}

/// One conjunct of a condensed equality test: the (folded) input character
/// at `offset` must equal `expected`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EqualityTerm {
    pub offset: usize,
    pub expected: char,
}

impl fmt::Display for EqualityTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s[{}] == {:?}", self.offset, self.expected)
    }
}

/// A compiled decision procedure returning `&V` or a miss.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision<V> {
    /// Miss unless the input length passes `check`, then continue with `next`.
    LengthCheck {
        check: LengthCheck,
        next: Box<Decision<V>>,
    },
    /// Miss unless every term holds, then continue with `next`.
    ///
    /// Terms are in increasing offset order and never empty. Replaces a
    /// chain of single-case dispatches.
    CondensedEquality {
        terms: Vec<EqualityTerm>,
        next: Box<Decision<V>>,
    },
    /// Branch on the input character at `offset`.
    ///
    /// If the input ends exactly at `offset`, the result is `on_end` (a label
    /// ending here), otherwise the case for the folded character is taken.
    /// Characters without a case are a miss. Cases are sorted by character
    /// and keys are unique.
    CharDispatch {
        offset: usize,
        on_end: Option<V>,
        cases: Vec<(char, Decision<V>)>,
    },
    /// A label matched.
    TerminalReturn(V),
    /// No label can match.
    NotFoundReturn,
}

impl<V> Decision<V> {
    /// Wrap `next` in a length guard, or return it unchanged when no guard is needed.
    pub fn guarded(check: Option<LengthCheck>, next: Decision<V>) -> Self {
        match check {
            Some(check) => Decision::LengthCheck {
                check,
                next: Box::new(next),
            },
            None => next,
        }
    }

    /// Look up the case for `c` in a dispatch node.
    ///
    /// Returns `None` for other node kinds.
    pub fn case(&self, c: char) -> Option<&Decision<V>> {
        let Decision::CharDispatch { cases, .. } = self else {
            return None;
        };
        cases
            .binary_search_by_key(&c, |&(key, _)| key)
            .ok()
            .map(|i| &cases[i].1)
    }

    /// Count node kinds across the whole tree.
    pub fn stats(&self) -> DecisionStats {
        let mut stats = DecisionStats::default();
        self.collect_stats(&mut stats);
        stats
    }

    fn collect_stats(&self, stats: &mut DecisionStats) {
        match self {
            Decision::LengthCheck { next, .. } => {
                stats.length_checks += 1;
                with_stack(|| next.collect_stats(stats));
            }
            Decision::CondensedEquality { terms, next } => {
                stats.condensed += 1;
                stats.condensed_terms += terms.len();
                with_stack(|| next.collect_stats(stats));
            }
            Decision::CharDispatch { on_end, cases, .. } => {
                stats.dispatches += 1;
                stats.dispatch_cases += cases.len();
                if on_end.is_some() {
                    stats.early_returns += 1;
                }
                for (_, case) in cases {
                    with_stack(|| case.collect_stats(stats));
                }
            }
            Decision::TerminalReturn(_) => stats.terminal_returns += 1,
            Decision::NotFoundReturn => stats.misses += 1,
        }
    }
}

/// Drops iteratively: a label set like `k`, `kk`, `kkk`, ... nests one box per
/// character, deep enough for the derived recursive drop to overflow.
impl<V> Drop for Decision<V> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children<V>(node: &mut Decision<V>, pending: &mut Vec<Decision<V>>) {
    match node {
        Decision::LengthCheck { next, .. } | Decision::CondensedEquality { next, .. } => {
            pending.push(mem::replace(&mut **next, Decision::NotFoundReturn));
        }
        Decision::CharDispatch { cases, .. } => {
            pending.extend(cases.drain(..).map(|(_, case)| case));
        }
        Decision::TerminalReturn(_) | Decision::NotFoundReturn => {}
    }
}

/// Node counts for a compiled [`Decision`], used for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecisionStats {
    pub length_checks: usize,
    pub condensed: usize,
    /// Total conjuncts across all condensed equality tests.
    pub condensed_terms: usize,
    pub dispatches: usize,
    pub dispatch_cases: usize,
    /// Dispatches that also return a payload when the input ends at their offset.
    pub early_returns: usize,
    pub terminal_returns: usize,
    /// Explicit `NotFoundReturn` nodes (implicit misses are not counted).
    pub misses: usize,
}

// Textual dump

/// Indented pseudo-code listing, two spaces per level.
///
/// ```text
/// check len in 1..=3
/// match s[0]
///   'A' =>
///     if len == 1 return 0
///     ...
///   _ => miss
/// ```
impl<V: fmt::Debug> fmt::Display for Decision<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

impl<V: fmt::Debug> Decision<V> {
    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = depth * 2;
        match self {
            Decision::LengthCheck { check, next } => {
                writeln!(f, "{:pad$}check {check}", "")?;
                with_stack(|| next.write_tree(f, depth))
            }
            Decision::CondensedEquality { terms, next } => {
                write!(f, "{:pad$}check ", "")?;
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" && ")?;
                    }
                    write!(f, "{term}")?;
                }
                writeln!(f)?;
                with_stack(|| next.write_tree(f, depth))
            }
            Decision::CharDispatch {
                offset,
                on_end,
                cases,
            } => {
                if let Some(payload) = on_end {
                    writeln!(f, "{:pad$}if len == {offset} return {payload:?}", "")?;
                }
                writeln!(f, "{:pad$}match s[{offset}]", "")?;
                let case_pad = pad + 2;
                for (c, case) in cases {
                    writeln!(f, "{:case_pad$}{c:?} =>", "")?;
                    with_stack(|| case.write_tree(f, depth + 2))?;
                }
                writeln!(f, "{:case_pad$}_ => miss", "")
            }
            Decision::TerminalReturn(payload) => writeln!(f, "{:pad$}return {payload:?}", ""),
            Decision::NotFoundReturn => writeln!(f, "{:pad$}miss", ""),
        }
    }
}

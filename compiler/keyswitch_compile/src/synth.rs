//! Decision-procedure synthesis.
//!
//! Walks the trie from the root and emits a [`Decision`] tree that a single
//! left-to-right pass over the input can evaluate.
//!
//! # Algorithm
//!
//! For a node reached at input offset `index`, with `previous` the length
//! range already guaranteed by ancestor checks:
//!
//! 1. **Condense**: if a single-child chain starts here, test it as one
//!    conjunction. A chain ending at a leaf finishes the label (exact length
//!    guard, then return); otherwise guard the minimum length and continue
//!    at the end of the chain.
//! 2. **Range**: analyze the subtree's length bounds, seeded at `index`.
//! 3. **Leaf**: a leaf returns its payload.
//! 4. **Dispatch**: branch on the character at `index`. A terminal with
//!    children returns its payload only when the input ends at `index`
//!    (`on_end`). Each child is synthesized at `index + 1` with this node's
//!    range, raised to at least `index + 1`, as `previous`.
//! 5. **Guard**: put a length check in front for the bounds that changed
//!    relative to `previous`. Equal bounds collapse into one exact check.
//!
//! Inspected offsets strictly increase along every path, and a check is
//! never repeated once an ancestor has established it.

use keyswitch_ir::{Decision, LengthCheck, LengthRange};
use keyswitch_stack::with_stack;

use crate::condense::{condense, CondensedRun};
use crate::range::analyze;
use crate::trie::{NodeId, Trie};

/// Compile `trie` into a decision procedure.
///
/// With `condense_chains` off, every trie edge becomes a dispatch case. The
/// result matches the same inputs either way.
pub fn synthesize<V: Clone>(trie: &Trie<V>, condense_chains: bool) -> Decision<V> {
    let synth = Synthesizer {
        trie,
        condense_chains,
    };
    let decision = synth.node(NodeId::ROOT, 0, LengthRange::UNCONSTRAINED);

    let stats = decision.stats();
    tracing::debug!(
        trie_nodes = trie.len(),
        condense = condense_chains,
        length_checks = stats.length_checks,
        condensed = stats.condensed,
        condensed_terms = stats.condensed_terms,
        dispatches = stats.dispatches,
        dispatch_cases = stats.dispatch_cases,
        "decision synthesized"
    );
    decision
}

/// The length check needed to narrow `previous` to `current`, if any.
///
/// Only bounds that differ are checked; an ancestor already established the
/// others. A single-length range is checked for equality.
pub fn length_check(previous: LengthRange, current: LengthRange) -> Option<LengthCheck> {
    if previous == current {
        return None;
    }
    if current.is_exact() {
        return Some(LengthCheck::Exact(current.min));
    }
    match (current.min != previous.min, current.max != previous.max) {
        (true, true) => Some(LengthCheck::Range {
            min: current.min,
            max: current.max,
        }),
        (true, false) => Some(LengthCheck::Min(current.min)),
        (false, true) => Some(LengthCheck::Max(current.max)),
        (false, false) => None,
    }
}

struct Synthesizer<'t, V> {
    trie: &'t Trie<V>,
    condense_chains: bool,
}

impl<V: Clone> Synthesizer<'_, V> {
    fn node(&self, id: NodeId, index: usize, previous: LengthRange) -> Decision<V> {
        // 1. CONDENSE: collapse a single-child chain into one test.
        if self.condense_chains {
            if let Some(run) = condense(self.trie, id, index) {
                return self.condensed(run, previous);
            }
        }
        self.dispatch(id, index, previous)
    }

    fn condensed(&self, run: CondensedRun, previous: LengthRange) -> Decision<V> {
        tracing::trace!(
            offset = run.terms.first().map_or(0, |t| t.offset),
            terms = run.terms.len(),
            ends_at_leaf = run.ends_at_leaf,
            "condensed run"
        );
        let CondensedRun {
            terms,
            end,
            next_index,
            ends_at_leaf,
        } = run;

        if ends_at_leaf {
            // The chain spells out the rest of exactly one label.
            let ret = match self.trie.node(end).payload() {
                Some(payload) => Decision::TerminalReturn(payload.clone()),
                None => Decision::NotFoundReturn,
            };
            return Decision::guarded(
                length_check(previous, LengthRange::exact(next_index)),
                Decision::CondensedEquality {
                    terms,
                    next: Box::new(ret),
                },
            );
        }

        // Every term must be readable before the conjunction is tested.
        let established = LengthRange::new(previous.min.max(next_index), previous.max);
        let rest = self.dispatch(end, next_index, established);
        Decision::guarded(
            length_check(previous, established),
            Decision::CondensedEquality {
                terms,
                next: Box::new(rest),
            },
        )
    }

    fn dispatch(&self, id: NodeId, index: usize, previous: LengthRange) -> Decision<V> {
        let node = self.trie.node(id);

        // 2. RANGE
        let range = analyze(self.trie, id, LengthRange::exact(index));

        // 3. LEAF
        if node.is_leaf() {
            return match node.payload() {
                // 5. GUARD
                Some(payload) => Decision::guarded(
                    length_check(previous, range),
                    Decision::TerminalReturn(payload.clone()),
                ),
                // Only the root of an empty set is a non-terminal leaf.
                None => Decision::NotFoundReturn,
            };
        }

        // 4. DISPATCH
        // A case is only taken once the input is longer than `index`.
        let below = LengthRange::new(range.min.max(index + 1), range.max);
        let cases = node
            .children()
            .iter()
            .map(|&(c, child)| (c, with_stack(|| self.node(child, index + 1, below))))
            .collect();

        // 5. GUARD
        Decision::guarded(
            length_check(previous, range),
            Decision::CharDispatch {
                offset: index,
                on_end: node.payload().cloned(),
                cases,
            },
        )
    }
}

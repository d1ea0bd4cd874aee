//! Length-range analysis.
//!
//! For a trie node reached at input offset `index`, [`analyze`] seeded with
//! `LengthRange::exact(index)` yields the shortest and longest total input
//! length of any label in the node's subtree.
//!
//! A terminal node pins the minimum: once a label ends at depth `d`, every
//! path through that node admits length `d`, however long the labels below it
//! are. Without the pin, `"Foo"` would inherit the minimum of `"Foobar"`.

use keyswitch_ir::LengthRange;
use keyswitch_stack::with_stack;

use crate::trie::{NodeId, Trie};

/// Length bounds of the subtree rooted at `node`, given the range accumulated
/// on the path to it.
///
/// Leaves return `incoming` unchanged.
pub fn analyze<V>(trie: &Trie<V>, node: NodeId, incoming: LengthRange) -> LengthRange {
    walk(trie, node, incoming, None)
}

fn walk<V>(
    trie: &Trie<V>,
    id: NodeId,
    incoming: LengthRange,
    mut frozen_min: Option<usize>,
) -> LengthRange {
    let node = trie.node(id);
    if node.is_leaf() {
        return incoming;
    }
    if node.is_terminal() {
        frozen_min = Some(incoming.min);
    }

    let below = incoming.deeper();
    let mut result: Option<LengthRange> = None;
    for &(_, child) in node.children() {
        let child_range = with_stack(|| walk(trie, child, below, frozen_min));
        result = Some(match result {
            Some(acc) => acc.union(child_range),
            None => child_range,
        });
    }

    // Non-leaf nodes always have at least one child.
    let mut range = result.unwrap_or(incoming);
    if let Some(min) = frozen_min {
        range.min = min;
    }
    range
}

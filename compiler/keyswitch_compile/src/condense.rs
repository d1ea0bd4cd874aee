//! Chain condensation.
//!
//! A chain of non-terminal nodes with exactly one child each needs no
//! dispatch: every input that can still match has exactly one character at
//! each of those offsets. The chain is tested as a single conjunction of
//! equality terms instead of one single-case dispatch per character.

use keyswitch_ir::EqualityTerm;

use crate::trie::{NodeId, Trie};

/// A run of trie nodes collapsed into one equality test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CondensedRun {
    /// One term per consumed node, offsets strictly increasing. Never empty.
    pub terms: Vec<EqualityTerm>,
    /// The last consumed node.
    pub end: NodeId,
    /// Input offset of `end`'s children.
    pub next_index: usize,
    /// `end` is a leaf, so the run is the whole rest of one label.
    pub ends_at_leaf: bool,
}

/// Returns `true` if at least two consecutive non-terminal, single-child
/// nodes start at `node`.
pub fn can_condense<V>(trie: &Trie<V>, node: NodeId) -> bool {
    let mut run = 0;
    let mut cursor = Some(node);
    while let Some(id) = cursor {
        let current = trie.node(id);
        if current.child_count() != 1 || current.is_terminal() {
            return false;
        }
        run += 1;
        if run > 1 {
            return true;
        }
        cursor = current.first_child();
    }
    false
}

/// Collapse the chain below `node`, which sits at input offset `index`.
///
/// Nodes are consumed while they have at most one child. The run stops after
/// a leaf (the label is complete) or after a terminal node (a shorter label
/// ends there and must stay reachable), and before any branching node.
/// Returns `None` when [`can_condense`] does not hold.
pub fn condense<V>(trie: &Trie<V>, node: NodeId, index: usize) -> Option<CondensedRun> {
    if !can_condense(trie, node) {
        return None;
    }

    let mut terms = Vec::new();
    let mut end = node;
    let mut next_index = index;
    let mut ends_at_leaf = false;
    let mut cursor = trie.node(node).first_child();

    while let Some(id) = cursor {
        let current = trie.node(id);
        if current.child_count() > 1 {
            break;
        }
        terms.push(EqualityTerm {
            offset: next_index,
            expected: current.ch(),
        });
        end = id;
        next_index += 1;

        if current.is_leaf() {
            ends_at_leaf = true;
            break;
        }
        if current.is_terminal() {
            break;
        }
        cursor = current.first_child();
    }

    Some(CondensedRun {
        terms,
        end,
        next_index,
        ends_at_leaf,
    })
}

//! Prefix tree over the folded labels.
//!
//! Nodes live in one arena (`Vec<TrieNode<V>>`) and refer to their children
//! by [`NodeId`]. Parent-to-child is the only direction ever walked, so there
//! are no back-pointers. The tree is never mutated once [`Trie::build`]
//! returns.

use std::fmt;

use keyswitch_ir::CaseFold;
use keyswitch_stack::with_stack;
use smallvec::SmallVec;

use crate::labels::LabelTable;

/// Index of a node in the trie arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root, reached by the empty prefix.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Character the root is displayed with. The root is not reached by any character.
const ROOT_CHAR: char = ' ';

/// One character position shared by every label with the same prefix.
#[derive(Clone, Debug)]
pub struct TrieNode<V> {
    ch: char,
    /// Sorted by character, keys unique.
    children: SmallVec<[(char, NodeId); 4]>,
    /// Set iff a label ends here.
    payload: Option<V>,
}

impl<V> TrieNode<V> {
    fn new(ch: char) -> Self {
        Self {
            ch,
            children: SmallVec::new(),
            payload: None,
        }
    }

    /// The (folded) character this node is reached by.
    #[inline]
    pub fn ch(&self) -> char {
        self.ch
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.payload.is_some()
    }

    #[inline]
    pub fn payload(&self) -> Option<&V> {
        self.payload.as_ref()
    }

    /// Children in character order.
    #[inline]
    pub fn children(&self) -> &[(char, NodeId)] {
        &self.children
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The child with the smallest character.
    #[inline]
    pub fn first_child(&self) -> Option<NodeId> {
        self.children.first().map(|&(_, id)| id)
    }

    pub fn child(&self, c: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&c, |&(key, _)| key)
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// Prefix tree built from a [`LabelTable`].
#[derive(Clone, Debug)]
pub struct Trie<V> {
    nodes: Vec<TrieNode<V>>,
    fold: CaseFold,
    labels: usize,
}

impl<V> Trie<V> {
    /// Insert every label of `table`, character by character.
    ///
    /// Labels are already folded and pairwise distinct, so no node receives
    /// more than one payload. A node may be terminal and still have children
    /// when one label is a strict prefix of another.
    pub fn build(table: LabelTable<V>) -> Self {
        let fold = table.fold();
        let labels = table.len();
        let entries = table.into_entries();
        let mut trie = Trie {
            nodes: vec![TrieNode::new(ROOT_CHAR)],
            fold,
            labels,
        };

        for entry in entries {
            let mut cursor = NodeId::ROOT;
            for c in entry.label.chars() {
                cursor = trie.child_or_insert(cursor, c);
            }
            trie.nodes[cursor.index()].payload = Some(entry.payload);
        }

        tracing::debug!(labels, nodes = trie.nodes.len(), ?fold, "trie built");
        trie
    }

    fn child_or_insert(&mut self, parent: NodeId, c: char) -> NodeId {
        match self.nodes[parent.index()]
            .children
            .binary_search_by_key(&c, |&(key, _)| key)
        {
            Ok(i) => self.nodes[parent.index()].children[i].1,
            Err(i) => {
                let id = NodeId(self.nodes.len());
                self.nodes.push(TrieNode::new(c));
                self.nodes[parent.index()].children.insert(i, (c, id));
                id
            }
        }
    }

    #[inline]
    pub fn root(&self) -> &TrieNode<V> {
        &self.nodes[NodeId::ROOT.index()]
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode<V> {
        &self.nodes[id.index()]
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no label was inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels == 0
    }

    /// Number of labels inserted.
    #[inline]
    pub fn label_count(&self) -> usize {
        self.labels
    }

    #[inline]
    pub fn fold(&self) -> CaseFold {
        self.fold
    }

    /// Walk the trie directly with `input`, folding each character.
    ///
    /// This is the uncompiled reference path: one child lookup per character,
    /// no length analysis.
    pub fn lookup(&self, input: &str) -> Option<&V> {
        let mut cursor = NodeId::ROOT;
        for c in input.chars() {
            cursor = self.node(cursor).child(self.fold.apply(c))?;
        }
        self.node(cursor).payload()
    }

    /// Indented listing of every node, for diagnostics.
    ///
    /// One line per node, two spaces per depth: `T` marks terminal nodes,
    /// followed by the quoted character and, for terminals, the payload.
    ///
    /// ```text
    /// ' '
    ///   T'A' 0
    ///     T'A' 1
    /// ```
    pub fn describe(&self) -> Describe<'_, V> {
        Describe { trie: self }
    }
}

/// Display adapter returned by [`Trie::describe`].
pub struct Describe<'a, V> {
    trie: &'a Trie<V>,
}

impl<V: fmt::Debug> fmt::Display for Describe<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self.trie, NodeId::ROOT, 0, f)
    }
}

fn write_node<V: fmt::Debug>(
    trie: &Trie<V>,
    id: NodeId,
    depth: usize,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let node = trie.node(id);
    let pad = depth * 2;
    let marker = if node.is_terminal() { "T" } else { "" };
    write!(f, "{:pad$}{marker}{:?}", "", node.ch)?;
    if let Some(payload) = &node.payload {
        write!(f, " {payload:?}")?;
    }
    writeln!(f)?;
    for &(_, child) in node.children() {
        with_stack(|| write_node(trie, child, depth + 1, f))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;

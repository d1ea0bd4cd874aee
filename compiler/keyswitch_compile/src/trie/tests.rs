use keyswitch_ir::CaseFold;
use pretty_assertions::assert_eq;

use super::*;

fn trie<V>(pairs: Vec<(&str, V)>, fold: CaseFold) -> Trie<V> {
    let table = LabelTable::build(pairs, fold)
        .unwrap_or_else(|e| panic!("unexpected build error: {e}"));
    Trie::build(table)
}

#[test]
fn shared_prefixes_share_nodes() {
    let trie = trie(vec![("ab", 0), ("ac", 1)], CaseFold::Ordinal);
    // root, 'a', 'b', 'c'
    assert_eq!(trie.len(), 4);
    assert_eq!(trie.label_count(), 2);
    assert_eq!(trie.root().child_count(), 1);
}

#[test]
fn children_are_sorted_regardless_of_insertion_order() {
    let trie = trie(vec![("c", 0), ("a", 1), ("b", 2)], CaseFold::Ordinal);
    let keys: Vec<char> = trie.root().children().iter().map(|&(c, _)| c).collect();
    assert_eq!(keys, ['a', 'b', 'c']);
    let first = trie.root().first_child().map(|id| trie.node(id).ch());
    assert_eq!(first, Some('a'));
}

#[test]
fn prefix_label_is_terminal_with_children() {
    let trie = trie(vec![("A", 0), ("AA", 1)], CaseFold::Ordinal);
    let a = trie.root().child('A').unwrap_or_else(|| panic!("missing 'A'"));
    let node = trie.node(a);
    assert!(node.is_terminal());
    assert!(!node.is_leaf());
    assert_eq!(node.payload(), Some(&0));

    let aa = node.child('A').unwrap_or_else(|| panic!("missing 'AA'"));
    assert!(trie.node(aa).is_terminal());
    assert!(trie.node(aa).is_leaf());
}

#[test]
fn intermediate_nodes_are_not_terminal() {
    let trie = trie(vec![("abc", 0)], CaseFold::Ordinal);
    let a = trie.root().child('a').unwrap_or_else(|| panic!("missing 'a'"));
    assert!(!trie.node(a).is_terminal());
    assert_eq!(trie.node(a).payload(), None);
}

#[test]
fn empty_label_marks_root_terminal() {
    let trie = trie(vec![("", 5), ("x", 6)], CaseFold::Ordinal);
    assert!(trie.root().is_terminal());
    assert_eq!(trie.lookup(""), Some(&5));
    assert_eq!(trie.lookup("x"), Some(&6));
}

#[test]
fn empty_set_builds_bare_root() {
    let trie = trie(Vec::<(&str, u8)>::new(), CaseFold::Ordinal);
    assert!(trie.is_empty());
    assert_eq!(trie.len(), 1);
    assert!(trie.root().is_leaf());
    assert_eq!(trie.lookup(""), None);
}

#[test]
fn build_is_deterministic() {
    let pairs = vec![("beta", 1), ("alpha", 0), ("alps", 2)];
    let first = trie(pairs.clone(), CaseFold::Ordinal).describe().to_string();
    let second = trie(pairs, CaseFold::Ordinal).describe().to_string();
    assert_eq!(first, second);
}

// Lookup

#[test]
fn lookup_requires_exact_match() {
    let trie = trie(vec![("A", 0), ("AA", 1), ("AAA", 2)], CaseFold::Ordinal);
    assert_eq!(trie.lookup("A"), Some(&0));
    assert_eq!(trie.lookup("AA"), Some(&1));
    assert_eq!(trie.lookup("AAA"), Some(&2));
    assert_eq!(trie.lookup("AAAA"), None);
    assert_eq!(trie.lookup(""), None);
    assert_eq!(trie.lookup("a"), None);
}

#[test]
fn lookup_folds_input() {
    let trie = trie(vec![("testing", 1), ("test0ng", 2)], CaseFold::IgnoreCase);
    assert_eq!(trie.fold(), CaseFold::IgnoreCase);
    assert_eq!(trie.lookup("tEsting"), Some(&1));
    assert_eq!(trie.lookup("TEST0NG"), Some(&2));
    assert_eq!(trie.lookup("testin"), None);
}

// Describe

#[test]
fn describe_nested_prefixes() {
    let trie = trie(vec![("A", 0), ("AA", 1), ("AAA", 2)], CaseFold::Ordinal);
    let expected = "\
' '
  T'A' 0
    T'A' 1
      T'A' 2
";
    assert_eq!(trie.describe().to_string(), expected);
}

#[test]
fn describe_branching() {
    let trie = trie(vec![("ab", "x"), ("ac", "y"), ("d", "z")], CaseFold::Ordinal);
    let expected = "\
' '
  'a'
    T'b' \"x\"
    T'c' \"y\"
  T'd' \"z\"
";
    assert_eq!(trie.describe().to_string(), expected);
}

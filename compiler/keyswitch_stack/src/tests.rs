use super::with_stack;

/// A singly linked chain, shaped like the trie of one long label.
struct Chain {
    next: Option<Box<Chain>>,
}

fn chain(depth: usize) -> Chain {
    let mut head = Chain { next: None };
    for _ in 0..depth {
        head = Chain {
            next: Some(Box::new(head)),
        };
    }
    head
}

fn depth(node: &Chain) -> usize {
    match &node.next {
        Some(next) => with_stack(|| depth(next)) + 1,
        None => 0,
    }
}

fn unlink(mut node: Chain) {
    // Drop iteratively; the default recursive drop would overflow.
    while let Some(next) = node.next.take() {
        node = *next;
    }
}

#[test]
fn passes_through_the_closure_result() {
    assert_eq!(with_stack(|| "label"), "label");
}

#[test]
fn shallow_chain() {
    let c = chain(8);
    assert_eq!(depth(&c), 8);
    unlink(c);
}

#[test]
fn label_length_chain_does_not_overflow() {
    let c = chain(200_000);
    assert_eq!(depth(&c), 200_000);
    unlink(c);
}

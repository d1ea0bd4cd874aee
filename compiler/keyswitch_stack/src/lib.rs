//! Recursion guard for trie and decision-tree walks.
//!
//! Every recursive pass in the keyswitch pipeline (range analysis, synthesis,
//! IR dumps, source emission) descends one frame per label character. Label
//! length is chosen by the caller, so a single very long label would otherwise
//! be enough to overflow the native stack.
//!
//! Wrap the recursive call in [`with_stack`]:
//!
//! ```text
//! fn walk(trie: &Trie<V>, node: NodeId) -> usize {
//!     trie.node(node)
//!         .children()
//!         .iter()
//!         .map(|&(_, child)| with_stack(|| walk(trie, child)))
//!         .sum()
//! }
//! ```
//!
//! On WASM the guard is a passthrough; the runtime manages its own stack.

/// Remaining stack below which a new segment is allocated (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each freshly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;

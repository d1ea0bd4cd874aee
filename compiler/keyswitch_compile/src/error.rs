//! Build-time errors.

/// Why a label set could not be compiled.
///
/// Build errors are raised before any matcher exists; a compiled matcher
/// never fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Two source entries fold to the same label.
    ///
    /// `label` is the folded key. `original` and `duplicate` are the input
    /// positions of the first entry and of the entry that collided with it.
    #[error("duplicate key '{label}': entry {duplicate} collides with entry {original}")]
    DuplicateKey {
        label: String,
        original: usize,
        duplicate: usize,
    },
}

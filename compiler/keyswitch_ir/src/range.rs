//! Input length bounds.

use std::fmt;

/// Inclusive bounds on the total input length (in characters) for which a
/// label below some trie node could still match.
///
/// Bounds are absolute input lengths, not lengths relative to the node.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    /// Nothing is known about the input length.
    pub const UNCONSTRAINED: LengthRange = LengthRange {
        min: 0,
        max: usize::MAX,
    };

    #[inline]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// A range admitting exactly one length.
    #[inline]
    pub const fn exact(len: usize) -> Self {
        Self { min: len, max: len }
    }

    #[inline]
    pub const fn is_exact(self) -> bool {
        self.min == self.max
    }

    /// Both bounds moved one character deeper.
    #[inline]
    pub const fn deeper(self) -> Self {
        Self {
            min: self.min.saturating_add(1),
            max: self.max.saturating_add(1),
        }
    }

    /// Smallest range covering both `self` and `other`.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl fmt::Debug for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max == usize::MAX {
            write!(f, "{}..", self.min)
        } else {
            write!(f, "{}..={}", self.min, self.max)
        }
    }
}

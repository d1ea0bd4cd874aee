//! Character sequences a matcher accepts.

use std::iter::Copied;
use std::slice;
use std::str::Chars;

/// A finite character sequence read front to back.
///
/// The decision procedure inspects offsets in increasing order, so the
/// walker only needs the total length and one forward pass over the
/// characters.
pub trait MatchInput {
    type Chars<'a>: Iterator<Item = char>
    where
        Self: 'a;

    /// Length in characters.
    fn char_len(&self) -> usize;

    /// Characters from offset 0.
    fn match_chars(&self) -> Self::Chars<'_>;
}

impl MatchInput for str {
    type Chars<'a> = Chars<'a>;

    #[inline]
    fn char_len(&self) -> usize {
        if self.is_ascii() {
            self.len()
        } else {
            self.chars().count()
        }
    }

    #[inline]
    fn match_chars(&self) -> Self::Chars<'_> {
        self.chars()
    }
}

impl MatchInput for String {
    type Chars<'a> = Chars<'a>;

    #[inline]
    fn char_len(&self) -> usize {
        self.as_str().char_len()
    }

    #[inline]
    fn match_chars(&self) -> Self::Chars<'_> {
        self.chars()
    }
}

impl MatchInput for [char] {
    type Chars<'a> = Copied<slice::Iter<'a, char>>;

    #[inline]
    fn char_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn match_chars(&self) -> Self::Chars<'_> {
        self.iter().copied()
    }
}

impl MatchInput for Vec<char> {
    type Chars<'a> = Copied<slice::Iter<'a, char>>;

    #[inline]
    fn char_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn match_chars(&self) -> Self::Chars<'_> {
        self.iter().copied()
    }
}

/// Forward-only reader over a [`MatchInput`].
pub(crate) struct Cursor<I> {
    chars: I,
    /// Offset of the next character `chars` yields.
    position: usize,
}

impl<I: Iterator<Item = char>> Cursor<I> {
    pub(crate) fn new(chars: I) -> Self {
        Self { chars, position: 0 }
    }

    /// The character at `offset`, skipping anything before it.
    ///
    /// Returns `None` past the end of the input, or if `offset` was already
    /// passed.
    pub(crate) fn char_at(&mut self, offset: usize) -> Option<char> {
        let skip = offset.checked_sub(self.position)?;
        let c = self.chars.nth(skip)?;
        self.position = offset + 1;
        Some(c)
    }
}

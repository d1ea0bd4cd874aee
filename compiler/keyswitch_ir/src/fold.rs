//! Character folding.

/// How labels and input characters are normalized before comparison.
///
/// The same fold is applied to every label when the trie is built and to
/// every inspected input character at match time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaseFold {
    /// Compare characters exactly.
    #[default]
    Ordinal,
    /// Map each character to its simple uppercase form.
    ///
    /// Characters whose uppercase form is more than one character (`ß` → `SS`)
    /// are left unchanged, so folding never changes label length. No
    /// locale-sensitive rules apply.
    IgnoreCase,
}

impl CaseFold {
    /// Fold a single character.
    #[inline]
    pub fn apply(self, c: char) -> char {
        match self {
            CaseFold::Ordinal => c,
            CaseFold::IgnoreCase => simple_uppercase(c),
        }
    }

    /// Fold every character of `s`.
    pub fn fold_str(self, s: &str) -> String {
        s.chars().map(|c| self.apply(c)).collect()
    }

    /// Returns `true` if this fold leaves every character unchanged.
    #[inline]
    pub fn is_ordinal(self) -> bool {
        self == CaseFold::Ordinal
    }
}

#[inline]
fn simple_uppercase(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

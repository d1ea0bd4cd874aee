//! Matcher over a plain list of labels, returning positions.

use keyswitch_compile::{BuildError, LabelTable};
use keyswitch_eval::MatchInput;
use keyswitch_ir::Decision;

use crate::{Matcher, MatcherConfig};

/// Value returned by [`IndexMatcher::index_of`] when nothing matches.
pub const NOT_FOUND: i64 = -1;

/// Matches a list of labels and reports the position of the match.
#[derive(Clone, Debug)]
pub struct IndexMatcher {
    inner: Matcher<usize>,
}

/// Compile a list of labels; each label's payload is its position in `labels`.
///
/// Duplicates after folding are rejected just as in [`compile`](crate::compile).
pub fn compile_indexed<I, S>(labels: I, config: MatcherConfig) -> Result<IndexMatcher, BuildError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let table = LabelTable::build(
        labels
            .into_iter()
            .enumerate()
            .map(|(position, label)| (label, position)),
        config.case_fold,
    )?;
    Ok(IndexMatcher {
        inner: Matcher::from_table(table, config),
    })
}

impl IndexMatcher {
    /// Position of the label `input` matches, or [`NOT_FOUND`].
    pub fn index_of<I: MatchInput + ?Sized>(&self, input: &I) -> i64 {
        self.position(input)
            .and_then(|position| i64::try_from(position).ok())
            .unwrap_or(NOT_FOUND)
    }

    /// Position of the label `input` matches.
    pub fn position<I: MatchInput + ?Sized>(&self, input: &I) -> Option<usize> {
        self.inner.get(input).copied()
    }

    pub fn decision(&self) -> &Decision<usize> {
        self.inner.decision()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

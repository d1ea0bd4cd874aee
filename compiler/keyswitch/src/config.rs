//! Matcher configuration.

use keyswitch_ir::CaseFold;

/// Options for compiling a label set.
///
/// ```text
/// let config = MatcherConfig::ignore_case().with_condense(false);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Fold applied to labels at build time and to input at match time.
    pub case_fold: CaseFold,
    /// Collapse single-child chains into one equality test.
    ///
    /// Only the shape of the compiled procedure changes; the set of matched
    /// inputs is the same either way.
    pub condense: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            case_fold: CaseFold::Ordinal,
            condense: true,
        }
    }
}

impl MatcherConfig {
    /// Exact, case-sensitive comparison.
    pub fn ordinal() -> Self {
        Self::default()
    }

    /// Simple uppercase folding on both labels and input.
    pub fn ignore_case() -> Self {
        Self {
            case_fold: CaseFold::IgnoreCase,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_case_fold(mut self, case_fold: CaseFold) -> Self {
        self.case_fold = case_fold;
        self
    }

    #[must_use]
    pub fn with_condense(mut self, condense: bool) -> Self {
        self.condense = condense;
        self
    }
}

//! Compiled payload matcher.

use std::fmt;

use keyswitch_codegen::{emit_rust_fn, EmitOptions};
use keyswitch_compile::{synthesize, BuildError, LabelTable, Trie, VariantLabel};
use keyswitch_eval::{eval, MatchInput};
use keyswitch_ir::{CaseFold, Decision};

use crate::MatcherConfig;

/// A compiled label set.
///
/// Immutable once built: matching only reads the decision procedure, so one
/// matcher can be shared across threads without locking.
#[derive(Clone, Debug)]
pub struct Matcher<V> {
    decision: Decision<V>,
    trie: Trie<V>,
    fold: CaseFold,
}

/// Compile `(label, payload)` pairs into a [`Matcher`].
///
/// Fails with [`BuildError::DuplicateKey`] if two labels are equal after
/// folding; no matcher is returned in that case.
pub fn compile<I, S, V>(labels: I, config: MatcherConfig) -> Result<Matcher<V>, BuildError>
where
    I: IntoIterator<Item = (S, V)>,
    S: AsRef<str>,
    V: Clone,
{
    let table = LabelTable::build(labels, config.case_fold)?;
    Ok(Matcher::from_table(table, config))
}

/// Compile enum-shaped payloads, each labeled by its description or name.
pub fn compile_variants<'a, I, V>(variants: I, config: MatcherConfig) -> Result<Matcher<V>, BuildError>
where
    I: IntoIterator<Item = (VariantLabel<'a>, V)>,
    V: Clone,
{
    let table = LabelTable::from_variants(variants, config.case_fold)?;
    Ok(Matcher::from_table(table, config))
}

impl<V: Clone> Matcher<V> {
    /// Build the trie and synthesize the decision procedure for `table`.
    ///
    /// The table's fold wins over `config.case_fold`.
    pub fn from_table(table: LabelTable<V>, config: MatcherConfig) -> Self {
        let fold = table.fold();
        let trie = Trie::build(table);
        let decision = synthesize(&trie, config.condense);
        tracing::debug!(
            labels = trie.label_count(),
            ?fold,
            condense = config.condense,
            "matcher compiled"
        );
        Matcher {
            decision,
            trie,
            fold,
        }
    }
}

impl<V> Matcher<V> {
    /// Payload of the label `input` matches, or `None`.
    ///
    /// Never fails: any input, including the empty one, yields a result after
    /// at most one inspection per character.
    #[inline]
    pub fn get<I: MatchInput + ?Sized>(&self, input: &I) -> Option<&V> {
        eval(&self.decision, input, self.fold)
    }

    #[inline]
    pub fn contains<I: MatchInput + ?Sized>(&self, input: &I) -> bool {
        self.get(input).is_some()
    }

    /// The compiled decision procedure.
    pub fn decision(&self) -> &Decision<V> {
        &self.decision
    }

    /// The prefix tree the procedure was synthesized from.
    pub fn trie(&self) -> &Trie<V> {
        &self.trie
    }

    pub fn case_fold(&self) -> CaseFold {
        self.fold
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.trie.label_count()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Lower the procedure to a standalone Rust function named `fn_name`.
    ///
    /// See [`emit_rust_fn`] for the generated shape; the matcher's fold is
    /// carried over.
    pub fn emit_rust(
        &self,
        fn_name: &str,
        return_type: &str,
        render: impl Fn(&V) -> String,
    ) -> String {
        let options = EmitOptions::new(fn_name, return_type).with_fold(self.fold);
        emit_rust_fn(&options, &self.decision, render)
    }
}

impl<V: fmt::Debug> Matcher<V> {
    /// Indented listing of the trie, one node per line.
    pub fn describe(&self) -> String {
        self.trie.describe().to_string()
    }
}

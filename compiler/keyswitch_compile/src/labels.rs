//! Label table: the conflict-checked `label -> payload` mapping a trie is built from.

use std::collections::hash_map::Entry;

use keyswitch_ir::CaseFold;
use rustc_hash::FxHashMap;

use crate::BuildError;

/// The label of an enumerated variant: its descriptive override when present,
/// else its symbolic name.
///
/// This is the adapter between enum-shaped payloads and the label table;
/// callers describe each variant, nothing is introspected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantLabel<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

impl<'a> VariantLabel<'a> {
    pub const fn new(name: &'a str) -> Self {
        Self {
            name,
            description: None,
        }
    }

    pub const fn described(name: &'a str, description: &'a str) -> Self {
        Self {
            name,
            description: Some(description),
        }
    }

    /// The string the variant is matched by.
    pub fn label(&self) -> &'a str {
        self.description.unwrap_or(self.name)
    }
}

/// One accepted entry, with its label already folded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelEntry<V> {
    pub label: String,
    pub payload: V,
}

/// Folded labels mapped to payloads, in input order.
///
/// Construction rejects the first entry whose folded label was already seen,
/// so every table is free of duplicates.
#[derive(Clone, Debug)]
pub struct LabelTable<V> {
    entries: Vec<LabelEntry<V>>,
    fold: CaseFold,
}

impl<V> LabelTable<V> {
    /// Build a table from `(label, payload)` pairs.
    ///
    /// Entries are processed in order. The first occurrence of a folded label
    /// is kept; any later entry with the same folded label fails the build
    /// with [`BuildError::DuplicateKey`].
    pub fn build<I, S>(source: I, fold: CaseFold) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
    {
        let source = source.into_iter();
        let (capacity, _) = source.size_hint();
        let mut entries = Vec::with_capacity(capacity);
        // Folded label -> position of its first occurrence.
        let mut seen_at = FxHashMap::default();
        seen_at.reserve(capacity);

        for (position, (label, payload)) in source.enumerate() {
            let folded = fold.fold_str(label.as_ref());
            match seen_at.entry(folded) {
                Entry::Occupied(seen) => {
                    tracing::debug!(label = %seen.key(), original = *seen.get(), duplicate = position, "duplicate label");
                    return Err(BuildError::DuplicateKey {
                        label: seen.key().clone(),
                        original: *seen.get(),
                        duplicate: position,
                    });
                }
                Entry::Vacant(slot) => {
                    entries.push(LabelEntry {
                        label: slot.key().clone(),
                        payload,
                    });
                    slot.insert(position);
                }
            }
        }

        tracing::debug!(labels = entries.len(), ?fold, "label table built");
        Ok(Self { entries, fold })
    }

    /// Build a table from described enum variants.
    pub fn from_variants<'a, I>(variants: I, fold: CaseFold) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (VariantLabel<'a>, V)>,
    {
        Self::build(
            variants
                .into_iter()
                .map(|(variant, payload)| (variant.label(), payload)),
            fold,
        )
    }

    pub fn fold(&self) -> CaseFold {
        self.fold
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the table, yielding entries in input order.
    pub fn into_entries(self) -> Vec<LabelEntry<V>> {
        self.entries
    }
}

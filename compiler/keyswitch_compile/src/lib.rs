//! Keyword set compiler.
//!
//! Turns a closed set of `(label, payload)` pairs into a [`Decision`]
//! procedure, in four stages:
//!
//! - **Label table** ([`LabelTable`]): folds labels and rejects duplicates
//!   ([`BuildError::DuplicateKey`])
//! - **Trie** ([`Trie`]): shares common prefixes in an index-based arena
//! - **Length ranges** ([`analyze`]): shortest and longest label below a node
//! - **Synthesis** ([`synthesize`]): emits length guards, condensed equality
//!   tests ([`condense`]) and per-character dispatches
//!
//! # Crate Dependencies
//!
//! Depends only on `keyswitch_ir` for the output types. Evaluating or
//! emitting the result is the job of `keyswitch_eval` and
//! `keyswitch_codegen`.
//!
//! [`Decision`]: keyswitch_ir::Decision

mod condense;
mod error;
mod labels;
mod range;
mod synth;
mod trie;

pub use condense::{can_condense, condense, CondensedRun};
pub use error::BuildError;
pub use labels::{LabelEntry, LabelTable, VariantLabel};
pub use range::analyze;
pub use synth::{length_check, synthesize};
pub use trie::{Describe, NodeId, Trie, TrieNode};

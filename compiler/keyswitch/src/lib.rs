//! keyswitch - compile a fixed label set into a string matcher.
//!
//! Give it every `(label, payload)` pair up front and it builds the
//! decision procedure a person would write by hand as nested `switch`
//! statements: length guards, condensed equality tests, one dispatch per
//! branching character. Labels may be prefixes of one another.
//!
//! ```text
//! let keywords = keyswitch::compile(
//!     [("fn", Kw::Fn), ("for", Kw::For), ("format", Kw::Format)],
//!     MatcherConfig::ordinal(),
//! )?;
//! assert_eq!(keywords.get("for"), Some(&Kw::For));
//! assert_eq!(keywords.get("fo"), None);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! (label, payload)*  → LabelTable → Trie → synthesize → Decision<V>
//!                      (fold, dups)         (ranges,     ↓
//!                                           condensing)  eval / emit_rust_fn
//! ```
//!
//! Compilation runs once and may fail ([`BuildError`]); matching never fails.
//! Set `RUST_LOG=keyswitch_compile=debug` and call [`init_tracing`] to see
//! per-stage statistics.

mod config;
mod index;
mod matcher;

use std::sync::Once;

pub use config::MatcherConfig;
pub use index::{compile_indexed, IndexMatcher, NOT_FOUND};
pub use keyswitch_codegen::{emit_rust_fn, EmitOptions};
pub use keyswitch_compile::{BuildError, LabelTable, Trie, VariantLabel};
pub use keyswitch_eval::MatchInput;
pub use keyswitch_ir::{CaseFold, Decision, DecisionStats, LengthCheck};
pub use matcher::{compile, compile_variants, Matcher};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

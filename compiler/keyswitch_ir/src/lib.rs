//! keyswitch IR - types shared by every stage of the keyword compiler.
//!
//! - [`CaseFold`]: the per-character normalization applied to labels and input
//! - [`LengthRange`]: bounds on input length consistent with reaching a trie node
//! - [`Decision`]: the compiled decision procedure, consumed by the
//!   interpreting backend (`keyswitch_eval`) and the source backend
//!   (`keyswitch_codegen`)
//!
//! Nothing here depends on how the procedure was produced. The compiler lives
//! in `keyswitch_compile`.

mod fold;
mod range;
pub mod tree;

pub use fold::CaseFold;
pub use range::LengthRange;
pub use tree::{Decision, DecisionStats, EqualityTerm, LengthCheck};

//! Interpreting backend for keyswitch decision procedures.
//!
//! Walks a compiled [`Decision`](keyswitch_ir::Decision) against an input on
//! every call. The walker is pure: it reads the frozen tree and the input,
//! allocates nothing, and can run on any number of threads at once over the
//! same tree.
//!
//! Inputs are anything implementing [`MatchInput`]: `str`, `String`,
//! `[char]` and `Vec<char>` out of the box.

mod input;
mod walk;

pub use input::MatchInput;
pub use walk::eval;

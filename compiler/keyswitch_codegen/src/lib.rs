//! Rust source backend for keyswitch decision procedures.
//!
//! Lowers a compiled [`Decision`](keyswitch_ir::Decision) ahead of time into
//! the nested `if`/`match` function a person would write by hand:
//!
//! ```text
//! Decision<V>  +  EmitOptions  +  payload renderer
//!        ↓
//!   emit_rust_fn
//!        ↓
//!   fn keyword(s: &[char]) -> Option<Keyword> { ... }
//! ```
//!
//! The emitted function has no dependencies and matches exactly the inputs
//! the interpreting backend (`keyswitch_eval`) matches. Build scripts can
//! write it to `OUT_DIR` and `include!` it.

mod emit;

pub use emit::{emit_rust_fn, EmitOptions};

//! Ahead-of-time bytecode lowering and dispatch engine for a register-based
//! SSA IR (`§1`).
//!
//! An embedder owns the IR (parsing, type/value tables, register
//! allocation — [`external`] names the traits it implements), hands each
//! function to [`emit::Emitter`], registers the resulting [`function::Function`]s
//! into a [`unit::Unit`], and drives calls through [`driver::call`]. Nothing
//! in this crate allocates or frees guest memory outside a [`unit::Unit`]'s
//! own buffers, and nothing here parses a surface language — this is purely
//! the lowering and execution core described in the Design Notes (`§9`).

pub mod consts;
pub mod driver;
pub mod emit;
pub mod error;
pub mod exec;
pub mod external;
pub mod fixup;
pub mod frame;
pub mod function;
pub mod memory;
pub mod opcode;
pub mod stop;
pub mod text;
pub mod types;
pub mod unit;

#[cfg(feature = "test-helpers")]
pub mod test_support;

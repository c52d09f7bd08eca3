//! Shared infrastructure for the Ryz compiler workspace.
//!
//! The `ryz_support` crate hosts the process-wide immutable tables the other
//! stages rely on: the reserved-word escaping rules applied to every
//! identifier that lands in generated Java text, and the operator-name
//! mangling table the driver applies during line pre-normalization.

pub mod escape;
pub mod mangle;

pub use escape::escape_name;
pub use mangle::{mangle_operator, mangle_operators};

/// Separator appended to every generated chunk.
pub const LINE_SEPARATOR: &str = "\n";

/// How the separator is spelled *inside* a generated string literal.
pub const LINE_SEPARATOR_ESCAPE: &str = "\\n";

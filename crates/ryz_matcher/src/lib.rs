//! Declaration pattern library.
//!
//! Given one trimmed source line, the ordered rule set in [`rules`] decides
//! whether the line denotes a declaration and, if so, produces a
//! [`Declaration`] carrying the inferred type, modifier, and rewritten
//! initializer text. Rules are tried most-specific first and the first match
//! wins; reordering them changes meaning, so the list is a fixed table.
//!
//! The crate is a leaf: everything the rules need from the surrounding
//! compiler (forward method-return lookups, recursive parameter
//! transformation) arrives through the [`MatcherContext`] seam.

pub mod context;
pub mod declaration;
pub mod params;
pub mod rules;
pub mod sigil;

pub use context::MatcherContext;
pub use declaration::{BlockSignature, Declaration};
pub use params::ParameterInfo;
pub use rules::{check_object_initialization, infer_call_type, match_declaration};
pub use sigil::visibility;

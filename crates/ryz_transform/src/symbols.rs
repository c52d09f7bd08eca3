//! Scope-qualified variable bookkeeping.
//!
//! One table per compilation unit, mapping a scope key (`"instance"` for
//! class attributes, otherwise a method/constructor/block signature) to the
//! ordered set of bindings declared there. The three insertion policies
//! (class body, method body, parameter list) live on the compilation unit;
//! this table only answers the containment questions they need.

use std::collections::HashMap;

/// Scope key for class-level attributes.
pub const INSTANCE_SCOPE: &str = "instance";

/// One declared variable: compared by name for shadow checks, by full
/// equality for duplicate checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub ty: String,
}

/// Per-unit mapping from scope key to its ordered binding set.
#[derive(Debug, Default)]
pub struct SymbolTable {
    scopes: HashMap<String, Vec<Binding>>,
}

impl SymbolTable {
    /// True when the scope already declares `name`, whatever its type.
    pub fn contains_name(&self, scope: &str, name: &str) -> bool {
        self.bindings(scope).iter().any(|b| b.name == name)
    }

    /// Adds a binding to the scope, lazily creating it. Returns false when
    /// the exact `(name, type)` pair is already present; the set is left
    /// unchanged in that case.
    pub fn insert(&mut self, scope: &str, name: &str, ty: &str) -> bool {
        let bindings = self.scopes.entry(scope.to_string()).or_default();
        if bindings.iter().any(|b| b.name == name && b.ty == ty) {
            return false;
        }
        bindings.push(Binding {
            name: name.to_string(),
            ty: ty.to_string(),
        });
        true
    }

    /// Bindings of a scope, declaration-ordered; empty for unknown scopes.
    pub fn bindings(&self, scope: &str) -> &[Binding] {
        self.scopes.get(scope).map(Vec::as_slice).unwrap_or(&[])
    }
}

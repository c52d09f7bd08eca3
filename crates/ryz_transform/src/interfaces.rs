//! The "is this type an interface?" capability.
//!
//! The class header must choose between `extends` and `implements`. Instead
//! of a reflective class-loader probe, the unit consults an inventory of
//! known interface names: a static table of the JDK interfaces Ryz sources
//! reach for, plus any names registered during the compilation session.
//! Unqualified names fall back to a `java.lang.` lookup, mirroring how the
//! generated code resolves them.

use std::collections::HashSet;

/// Session-wide, effectively immutable inventory of interface names.
/// Shared across concurrently translated units behind an `Arc`.
#[derive(Debug, Clone)]
pub struct InterfaceInventory {
    known: HashSet<String>,
}

const WELL_KNOWN: &[&str] = &[
    "java.lang.Appendable",
    "java.lang.AutoCloseable",
    "java.lang.CharSequence",
    "java.lang.Cloneable",
    "java.lang.Comparable",
    "java.lang.Iterable",
    "java.lang.Readable",
    "java.lang.Runnable",
    "java.io.Closeable",
    "java.io.Flushable",
    "java.io.Serializable",
    "java.util.Collection",
    "java.util.Comparator",
    "java.util.Iterator",
    "java.util.List",
    "java.util.Map",
    "java.util.Queue",
    "java.util.Set",
    "java.util.concurrent.Callable",
];

impl Default for InterfaceInventory {
    fn default() -> Self {
        InterfaceInventory {
            known: WELL_KNOWN.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl InterfaceInventory {
    /// Registers a user-declared interface name for this session.
    pub fn register(&mut self, qualified_name: impl Into<String>) {
        self.known.insert(qualified_name.into());
    }

    /// True when the (possibly unqualified) name denotes a known interface.
    pub fn is_interface(&self, name: &str) -> bool {
        if self.known.contains(name) {
            return true;
        }
        !name.starts_with("java.lang") && self.known.contains(&format!("java.lang.{}", name))
    }
}

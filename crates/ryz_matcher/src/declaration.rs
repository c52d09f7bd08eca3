//! The value a successful match produces.

/// Parameter list and return type captured from a block literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSignature {
    /// Comma-joined, already-transformed Java parameter text.
    pub parameters: String,
    /// Declared return type, or the `Void` placeholder when omitted.
    pub return_type: String,
}

impl BlockSignature {
    /// Scope key used for the block's symbol-table bucket.
    pub fn key(&self) -> String {
        format!("{}:{}", self.parameters, self.return_type)
    }
}

/// A declaration recognized on a single source line.
///
/// Transient: the owning transformer consumes it immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub inferred_type: String,
    pub is_static: bool,
    /// Rewritten initializer text, including the leading ` = ` or a bare `;`.
    pub initializer: String,
    /// Present only when the initializer is a block literal.
    pub block: Option<BlockSignature>,
    /// Present only when the initializer opens a multi-line string; carries
    /// the indentation width captured after the opening quote.
    pub multiline_indent: Option<usize>,
}

impl Declaration {
    pub(crate) fn new(name: String, inferred_type: String, is_static: bool, initializer: String) -> Self {
        Declaration {
            name,
            inferred_type,
            is_static,
            initializer,
            block: None,
            multiline_indent: None,
        }
    }
}

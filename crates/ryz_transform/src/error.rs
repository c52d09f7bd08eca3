use thiserror::Error;

/// Errors raised while translating one compilation unit.
///
/// Only structural violations are fatal; a merely unrecognized line produces
/// no output and no error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("closing brace at line {line} with no open scope")]
    UnbalancedClose { line: usize },

    #[error("class header at line {line}, but class `{class_name}` is already compiled in this unit")]
    HeaderAlreadySeen { line: usize, class_name: String },

    #[error("source ended {state} with {pending} scope(s) still open")]
    UnterminatedScope { state: &'static str, pending: usize },
}

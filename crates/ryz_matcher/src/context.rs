//! The seam between the rule table and the rest of the compiler.

/// Compiler state a matcher rule may consult while shaping a declaration.
///
/// Implemented by the compilation unit; kept as a trait so the rule table
/// stays independent of the state machine.
pub trait MatcherContext {
    /// Return type of a method already registered in the same unit, if any.
    /// Forward references (later in the file, or across units) resolve to
    /// `None` by design.
    fn method_return_type(&self, name: &str) -> Option<String>;

    /// Re-enters the declaration machinery for a parameter sub-list such as
    /// `i : Int, s : String`, yielding the comma-joined Java parameter text.
    fn transform_parameters(&mut self, raw: &str) -> String;
}

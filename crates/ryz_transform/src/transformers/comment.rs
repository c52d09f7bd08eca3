//! Comment echoing and scope-closing braces.

use crate::error::TransformError;
use crate::state::StateKind;
use crate::unit::CompilationUnit;
use ryz_support::LINE_SEPARATOR;

/// Echoes comment lines verbatim. An unterminated `/*` opener enters the
/// comment state, inside which every line is echoed untouched (the comment
/// state activates no other transformer, so an import-shaped line cannot be
/// reinterpreted); the line ending the comment pops back out.
pub(crate) fn comment(unit: &mut CompilationUnit, line: &str) {
    let in_comment = unit.current_kind() == StateKind::InsideComment;
    if line.starts_with("/*") || line.starts_with("//") || line.ends_with("*/") || in_comment {
        unit.emit(format!("{}{}", line, LINE_SEPARATOR));
    }
    if line.starts_with("/*") && !line.ends_with("*/") {
        unit.enter_comment();
    } else if line.ends_with("*/") && in_comment {
        unit.exit_comment();
    }
}

/// A line beginning with `}` closes the current scope. The emitted
/// indentation depends on which state is closing, and block closes also
/// carry the anonymous-object terminator appended by the state pop.
pub(crate) fn closing_key(unit: &mut CompilationUnit, line: &str) -> Result<(), TransformError> {
    if !line.starts_with('}') {
        return Ok(());
    }
    match unit.current_kind() {
        StateKind::InsideBlock => {
            unit.close_key()?;
            unit.emit(format!("/*ib*/{};{}", line, LINE_SEPARATOR));
        }
        StateKind::InsideMethod => {
            unit.emit(format!("    {}{}", line, LINE_SEPARATOR));
            unit.close_key()?;
        }
        _ => {
            unit.emit(format!("/**/{}{}", line, LINE_SEPARATOR));
            unit.close_key()?;
        }
    }
    Ok(())
}

//! Multi-line string continuation and collapse.
//!
//! Active only inside the multiline-string state. Continuation lines
//! accumulate as string-concatenation chunks carrying the indentation
//! captured at entry; the line consisting solely of a closing quote folds
//! the last fragment back into a closed literal, trimming the fictitious
//! trailing newline that was added ahead of time.

use crate::unit::CompilationUnit;
use ryz_support::{LINE_SEPARATOR, LINE_SEPARATOR_ESCAPE};

pub(crate) fn multiline_string(unit: &mut CompilationUnit, line: &str) {
    let Some((indent, seen_fragment)) = unit.multiline_detail() else {
        return;
    };
    if line == "\"" {
        let last = unit.pop_chunk().unwrap_or_default();
        // Trailing text to discard: the chunk separator plus either the
        // escaped newline and closing quote of the previous fragment, or
        // the bare quote and space of the opening chunk itself.
        let trailing = LINE_SEPARATOR.len()
            + if seen_fragment {
                LINE_SEPARATOR_ESCAPE.len() + 1
            } else {
                2
            };
        let keep = last.len().saturating_sub(trailing);
        unit.emit(format!("{}\";{}", &last[..keep], LINE_SEPARATOR));
        unit.exit_multiline();
    } else {
        unit.emit(format!(
            "+\"{}{}{}\"{}",
            " ".repeat(indent),
            line.replace('"', "\\\""),
            LINE_SEPARATOR_ESCAPE,
            LINE_SEPARATOR
        ));
        unit.note_multiline_fragment();
    }
}

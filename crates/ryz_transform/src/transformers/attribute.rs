//! Attribute/variable declarations.
//!
//! Drives the matcher cascade, asks the active state's symbol policy
//! whether to register the result, and emits the declaration chunk. A
//! rejected (duplicate) declaration is still emitted, with the type
//! degraded to the empty string, which Java reads as a bare assignment.

use tracing::trace;

use ryz_matcher::{match_declaration, visibility};
use ryz_support::LINE_SEPARATOR;

use crate::state::StateKind;
use crate::unit::CompilationUnit;

/// The per-state entry point; class bodies honor visibility sigils,
/// method/block bodies and parameter lists do not.
pub(crate) fn attribute(unit: &mut CompilationUnit, line: &str) {
    let include_scope = unit.current_kind() == StateKind::InsideClass;
    let mut chunks = Vec::new();
    transform_declaration(unit, line, include_scope, &mut chunks);
    for chunk in chunks {
        unit.emit(chunk);
    }
}

/// Shared declaration machinery, re-entered for parameter sub-lists with a
/// caller-provided sink.
pub(crate) fn transform_declaration(
    unit: &mut CompilationUnit,
    line: &str,
    include_scope: bool,
    sink: &mut Vec<String>,
) {
    let Some(declaration) = match_declaration(line, unit) else {
        return;
    };

    let access_modifier = visibility(line, include_scope, "private");
    let added = unit.add_variable(&declaration.name, &declaration.inferred_type);
    let emitted_type = if added {
        declaration.inferred_type.as_str()
    } else {
        ""
    };
    if !added {
        trace!(name = declaration.name.as_str(), "already declared, emitting without a type");
    }

    sink.push(format!(
        "    /*attribute*/{} {} {} {} {} {}",
        access_modifier,
        if declaration.is_static { "static" } else { "" },
        emitted_type,
        declaration.name,
        declaration.initializer,
        LINE_SEPARATOR
    ));

    if let Some(block) = &declaration.block {
        unit.enter_block(block.key());
    }
    if let Some(indent) = declaration.multiline_indent {
        unit.enter_multiline(indent);
    }
}

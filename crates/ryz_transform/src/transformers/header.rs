//! Package/class header, import, and annotation lines.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use ryz_support::{escape_name, LINE_SEPARATOR};

use crate::error::TransformError;
use crate::unit::CompilationUnit;

const ANNOTATION_MARKER: &str = "/*annotation*/";

/// Recognizes `some.pkg.Name[: Super] {` and emits the standard header.
///
/// A cheap structural pre-check (a `.` with a `{` after it) runs before any
/// slicing, so header recognition stays first in line without regex cost.
/// Recognizing a header while a class identity is already set is a
/// structural error: this unit compiles exactly one class.
pub(crate) fn package_class(unit: &mut CompilationUnit, line: &str) -> Result<(), TransformError> {
    let Some(dot) = line.find('.').filter(|&i| i > 0) else {
        return Ok(());
    };
    let Some(brace) = line[dot..].find('{').map(|i| i + dot) else {
        return Ok(());
    };

    // e.g. "some.package.Name " or "some.package.Name : Super "
    let package_and_class = &line[..brace];
    let colon = line.find(':').filter(|&i| i < brace);
    let head = colon
        .map(|i| &package_and_class[..i])
        .unwrap_or(package_and_class);
    let Some(last_dot) = head.rfind('.') else {
        return Ok(());
    };

    let (possible_class, possible_super) = match colon {
        Some(colon) if colon > last_dot => (
            package_and_class[last_dot + 1..colon].trim(),
            package_and_class[colon + 1..].trim(),
        ),
        _ => (package_and_class[last_dot + 1..].trim(), "java.lang.Object"),
    };

    if !possible_class
        .chars()
        .next()
        .is_some_and(|c| c.is_uppercase())
    {
        return Ok(());
    }
    if unit.has_class_name() {
        return Err(TransformError::HeaderAlreadySeen {
            line: unit.current_line(),
            class_name: unit.class_name().to_string(),
        });
    }

    let package_name = head[..last_dot]
        .split('.')
        .map(escape_name)
        .collect::<Vec<_>>()
        .join(".");

    // An annotation emitted on the previous line belongs above the class.
    let annotation_pending = unit
        .last_chunk()
        .map(|chunk| chunk.starts_with(ANNOTATION_MARKER))
        .unwrap_or(false);
    let before_class = if annotation_pending {
        unit.pop_chunk().unwrap_or_default()
    } else {
        String::new()
    };

    unit.emit(format!("package {};{}", package_name, LINE_SEPARATOR));
    unit.emit(format!(
        "/*import */import ryz.lang.Extensions;{}",
        LINE_SEPARATOR
    ));
    unit.emit(format!(
        "/*import static*/import static ryz.lang.Extensions.*;{}",
        LINE_SEPARATOR
    ));
    unit.emit(format!(
        "/*import static*/import static java.lang.System.out;{}",
        LINE_SEPARATOR
    ));

    let relation = if unit.interfaces().is_interface(possible_super) {
        "implements"
    } else {
        "extends"
    };
    let class_name = escape_name(possible_class);
    debug!(package = package_name.as_str(), class = class_name.as_str(), relation, "class header");
    unit.emit(format!(
        "{}public class {} {} {} {{ {}    //private final {} self = this;{}",
        before_class,
        class_name,
        relation,
        escape_name(possible_super),
        LINE_SEPARATOR,
        class_name,
        LINE_SEPARATOR
    ));
    unit.set_package_name(package_name);
    unit.set_class_name(class_name);
    Ok(())
}

// import(java.util.List) | importStatic(java.lang.Math.max)
static IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(import|import(Static))\s*\((.+)\s*\)$").expect("import pattern"));

pub(crate) fn import(unit: &mut CompilationUnit, line: &str) {
    if let Some(caps) = IMPORT.captures(line) {
        let keyword = if caps.get(2).is_some() {
            "import static"
        } else {
            "import"
        };
        unit.emit(format!("{} {};{}", keyword, &caps[3], LINE_SEPARATOR));
    }
}

static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@[A-Z]\w+\s*(\(.*\))?.*$").expect("annotation pattern"));

pub(crate) fn annotation(unit: &mut CompilationUnit, line: &str) {
    if ANNOTATION.is_match(line) {
        unit.emit(format!("{} {}{}", ANNOTATION_MARKER, line, LINE_SEPARATOR));
    }
}

//! Statements inside method and block bodies.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use ryz_matcher::{check_object_initialization, ParameterInfo};
use ryz_support::LINE_SEPARATOR;

use crate::unit::CompilationUnit;

// ^ expression
static RETURN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\^\s+(.+)$").expect("return pattern"));

/// `^` marks the value position; the actual `return` keyword is added by
/// the post-pass when the enclosing signature is non-void.
pub(crate) fn return_marker(unit: &mut CompilationUnit, line: &str) {
    if let Some(caps) = RETURN.captures(line) {
        let return_value = check_object_initialization(&caps[1]);
        unit.emit(format!("/* return */ {};{}", return_value, LINE_SEPARATOR));
    }
}

// something.toString(somethingElse)
static STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^("[^"]*"|\w+)\s*(\.\s*[$\w]+)*\s*(\(.*\))$"#).expect("statement pattern")
});

pub(crate) fn statement(unit: &mut CompilationUnit, line: &str) {
    let Some(caps) = STATEMENT.captures(line) else {
        return;
    };
    let invoked = &caps[1];
    let expression = if unit.is_block_invocation(invoked) {
        let args = caps.get(3).map(|m| m.as_str()).unwrap_or("");
        format!("{}.run{}", invoked, args)
    } else {
        check_object_initialization(line)
    };
    unit.emit(format!("    /*invocation*/{};{}", expression, LINE_SEPARATOR));
}

// name = value
static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)\s*=\s*(\w+)\s*$").expect("assignment pattern"));

pub(crate) fn simple_assignment(unit: &mut CompilationUnit, line: &str) {
    let Some(caps) = ASSIGNMENT.captures(line) else {
        return;
    };
    // Boolean literals belong to the declaration cascade.
    if matches!(&caps[2], "true" | "false") {
        return;
    }
    unit.emit(format!("/*assignment*/ {};{}", &caps[0], LINE_SEPARATOR));
}

static SINGLE_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+$").expect("single value"));

pub(crate) fn single_value(unit: &mut CompilationUnit, line: &str) {
    if SINGLE_VALUE.is_match(line) {
        unit.emit(format!(
            "/*expression*/ {};{}",
            check_object_initialization(line),
            LINE_SEPARATOR
        ));
    }
}

// receiver.method( (params) : Type {    — an invocation whose last argument
// is a block literal written inline.
static INLINE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((\w+)\s*(\.\s*[$\w]+)*)\s*\(\s*(\((.*)\)|\((.*)\)\s*:\s*((\w+))|\s*)\s*\{$")
        .expect("inline block pattern")
});

pub(crate) fn inline_block(unit: &mut CompilationUnit, line: &str) {
    let Some(caps) = INLINE_BLOCK.captures(line) else {
        return;
    };
    let mut return_type = "Void".to_string();
    let raw_params = if let Some(ret) = caps.get(7) {
        return_type = ret.as_str().to_string();
        caps.get(6).map(|m| m.as_str()).unwrap_or("")
    } else if caps.get(4).map(|m| m.as_str().trim().is_empty()).unwrap_or(true) {
        ""
    } else {
        caps.get(5).map(|m| m.as_str()).unwrap_or("")
    };
    let parameters = unit.transform_parameter_list(raw_params);
    let infos = ParameterInfo::parse(&parameters);
    trace!(callee = &caps[1], arity = infos.len(), "inline block argument");
    unit.enter_block(format!("{}:{}", parameters, return_type));
    unit.emit(format!(
        "    /*invocationwithblock*/ {}(new ryz.lang.block.Block{}<{} {}>(){{{}    public {} run({}){{{}",
        &caps[1],
        infos.len(),
        return_type,
        ParameterInfo::type_list(&infos),
        LINE_SEPARATOR,
        return_type,
        parameters,
        LINE_SEPARATOR
    ));
}

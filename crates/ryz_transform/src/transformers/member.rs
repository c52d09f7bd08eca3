//! Method and constructor headers.
//!
//! Four method shapes (typed/void, instance/static) plus the distinguished
//! zero-arg `main`. An identifier starting with an upper-case letter is
//! never a method name; that shape is reserved for constructors, and the
//! inverse test gates the constructor transformer.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use ryz_matcher::visibility;
use ryz_support::{escape_name, LINE_SEPARATOR};

use crate::unit::CompilationUnit;

// hola( params ) : String {
static METHOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+#~-]?\s*([$\w]+)\s*\((.*)\)\s*:\s*(\w+)\s*\{$").expect("method pattern")
});
// __ hola( params ) : String {
static CLASS_METHOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+#~-]?\s*_{2}\s*([$\w]+)\s*\((.*)\)\s*:\s*(\w+)\s*\{$").expect("class method pattern")
});
// hola( params ) {
static VOID_METHOD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+#~-]?\s*([$\w]+)\s*\((.*)\)\s*\{$").expect("void method pattern"));
// __ hola( params ) {
static VOID_CLASS_METHOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+#~-]?\s*_{2}\s*([$\w]+)\s*\((.*)\)\s*\{$").expect("void class method pattern")
});

pub(crate) fn method(unit: &mut CompilationUnit, line: &str) {
    let access_modifier = visibility(line, true, "public");

    let (method_name, method_type, instance_or_static, parameters_raw);
    if let Some(caps) = METHOD.captures(line) {
        method_type = escape_name(&caps[3]);
        method_name = escape_name(&caps[1]);
        instance_or_static = "";
        parameters_raw = caps[2].to_string();
    } else if let Some(caps) = CLASS_METHOD.captures(line) {
        method_type = escape_name(&caps[3]);
        method_name = escape_name(&caps[1]);
        instance_or_static = "static";
        parameters_raw = caps[2].to_string();
    } else if let Some(caps) = VOID_METHOD.captures(line) {
        let name = escape_name(&caps[1]);
        // main() { is special: expands to the static launcher idiom.
        if name == "main" {
            add_main_method(unit);
            return;
        }
        method_type = "void".to_string();
        method_name = name;
        instance_or_static = "";
        parameters_raw = caps[2].to_string();
    } else if let Some(caps) = VOID_CLASS_METHOD.captures(line) {
        method_type = "void".to_string();
        method_name = escape_name(&caps[1]);
        instance_or_static = "static";
        parameters_raw = caps[2].to_string();
    } else {
        return;
    }

    if method_name
        .chars()
        .next()
        .is_some_and(|c| c.is_uppercase())
    {
        return;
    }
    trace!(scope = access_modifier, name = method_name.as_str(), "method header");
    unit.add_method(&method_name, &method_type);
    let parameters = unit.transform_parameter_list(&parameters_raw);
    unit.emit(format!(
        "    /*method*/{} {} {} {}({}) {{{}",
        access_modifier, instance_or_static, method_type, method_name, parameters, LINE_SEPARATOR
    ));
}

fn add_main_method(unit: &mut CompilationUnit) {
    unit.emit(format!(
        "    /*method*/public static void main( String [] args ) {{\n  new {}().main();\n}}\n    /*method*/public void main() {{{}",
        unit.class_name(),
        LINE_SEPARATOR
    ));
    unit.add_method("main", "void");
}

// Hola( params ) {
static CONSTRUCTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+#~-]?\s*([$\w]+)\((.*)\)\s*\{$").expect("constructor pattern"));

pub(crate) fn constructor(unit: &mut CompilationUnit, line: &str) {
    let Some(caps) = CONSTRUCTOR.captures(line) else {
        return;
    };
    let constructor_name = escape_name(&caps[1]);
    if !constructor_name
        .chars()
        .next()
        .is_some_and(|c| c.is_uppercase())
    {
        return;
    }
    let access_modifier = visibility(line, true, "public");
    trace!(scope = access_modifier, name = constructor_name.as_str(), "constructor header");
    unit.add_constructor(&constructor_name);
    let parameters = unit.transform_parameter_list(&caps[2]);
    unit.emit(format!(
        "    /*constructor*/{} {}({}) {{{}",
        access_modifier, constructor_name, parameters, LINE_SEPARATOR
    ));
}

//! End-to-end translation scenarios over whole units.

use ryz_transform::{CompilationUnit, TransformError};

fn translate(lines: &[&str]) -> CompilationUnit {
    let mut unit = CompilationUnit::new(
        "test.ryz",
        lines.iter().map(|l| l.to_string()).collect(),
    );
    unit.transform_source_code().expect("translation succeeds");
    unit
}

fn output(unit: &CompilationUnit) -> String {
    unit.output_lines().concat()
}

#[test]
fn class_header_sets_identity_and_default_superclass() {
    let unit = translate(&["com.example.Greeter {", "}"]);
    let java = output(&unit);
    assert!(java.contains("package com.example;\n"));
    assert!(java.contains("public class Greeter extends java.lang.Object { \n"));
    assert!(java.contains("import ryz.lang.Extensions;"));
    assert_eq!(unit.package_name(), "com.example");
    assert_eq!(unit.class_name(), "Greeter");
}

#[test]
fn interface_superclass_is_implemented_not_extended() {
    let unit = translate(&["com.example.Task : Runnable {", "}"]);
    assert!(output(&unit).contains("public class Task implements Runnable { \n"));
}

#[test]
fn bare_attribute_defaults_to_private_with_no_initializer() {
    let unit = translate(&["com.example.Greeter {", "name : String", "}"]);
    assert!(output(&unit).contains("    /*attribute*/private  String name ; \n"));
}

#[test]
fn public_sigil_and_int_literal_inference() {
    let unit = translate(&["com.example.Greeter {", "+ total = 0", "}"]);
    assert!(output(&unit).contains("    /*attribute*/public  int total  = 0; \n"));
}

#[test]
fn static_marker_emits_the_static_modifier() {
    let unit = translate(&["com.example.Greeter {", "__ total = 0", "}"]);
    assert!(output(&unit).contains("    /*attribute*/private static int total  = 0; \n"));
}

#[test]
fn void_method_keeps_the_marked_return_as_a_plain_statement() {
    let unit = translate(&["demo.App {", "greet() {", "^ \"hi\"", "}", "}"]);
    let java = output(&unit);
    assert!(java.contains("    /*method*/public  void greet() {\n"));
    assert!(java.contains("/* return */ \"hi\";\n"));
    assert!(!java.contains("return /* return */"));
    assert_eq!(unit.methods(), ["greet:void".to_string()]);
}

#[test]
fn nonvoid_method_rewrites_its_last_statement_into_a_return() {
    let unit = translate(&["demo.App {", "greet() : String {", "^ \"hi\"", "}", "}"]);
    let java = output(&unit);
    assert!(java.contains("    /*method*/public  String greet() {\n"));
    assert!(java.contains("        return /* return */ \"hi\";\n"));
}

#[test]
fn duplicate_redeclaration_keeps_line_but_drops_type() {
    // Compatibility quirk: the second declaration still emits, typeless,
    // alongside the assignment transformer's own output.
    let unit = translate(&[
        "demo.App {",
        "a = 1",
        "go() {",
        "a = 2",
        "}",
        "}",
    ]);
    let java = output(&unit);
    assert!(java.contains("    /*attribute*/private  int a  = 1; \n"));
    assert!(java.contains("    /*attribute*/   a  = 2; \n"));
    assert!(java.contains("/*assignment*/ a = 2;\n"));
}

#[test]
fn method_local_cannot_shadow_an_attribute_whatever_its_type() {
    let unit = translate(&[
        "demo.App {",
        "a : Int",
        "go() {",
        "a : String",
        "}",
        "}",
    ]);
    let java = output(&unit);
    assert!(java.contains("    /*attribute*/private  int a ; \n"));
    assert!(java.contains("    /*attribute*/   a ; \n"));
}

#[test]
fn block_comment_lines_are_echoed_verbatim() {
    let unit = translate(&[
        "demo.App {",
        "/* first",
        "import(java.util.List)",
        "last */",
        "}",
    ]);
    let java = output(&unit);
    assert!(java.contains("/* first\n"));
    assert!(java.contains("import(java.util.List)\n"));
    assert!(java.contains("last */\n"));
    // The import-shaped line must not be reinterpreted as an import.
    assert!(!java.contains("import java.util.List;"));
}

#[test]
fn single_line_comments_do_not_change_state() {
    let unit = translate(&["demo.App {", "// just a note", "total = 1", "}"]);
    let java = output(&unit);
    assert!(java.contains("// just a note\n"));
    assert!(java.contains("int total"));
}

#[test]
fn import_lines_translate_inside_the_class_body() {
    let unit = translate(&[
        "demo.App {",
        "import(java.util.List)",
        "importStatic(java.lang.Math.max)",
        "}",
    ]);
    let java = output(&unit);
    assert!(java.contains("import java.util.List;\n"));
    assert!(java.contains("import static java.lang.Math.max;\n"));
}

#[test]
fn annotation_before_the_header_floats_onto_the_class() {
    let unit = translate(&["@Deprecated", "demo.App {", "}"]);
    assert!(output(&unit).contains("/*annotation*/ @Deprecated\npublic class App"));
}

#[test]
fn main_expands_to_the_launcher_idiom() {
    let unit = translate(&["demo.App {", "main() {", "out.println(\"hi\")", "}", "}"]);
    let java = output(&unit);
    assert!(java.contains("public static void main( String [] args ) {\n"));
    assert!(java.contains("new App().main();\n"));
    assert!(java.contains("    /*method*/public void main() {\n"));
    assert!(java.contains("    /*invocation*/out.println(\"hi\");\n"));
    assert_eq!(unit.methods(), ["main:void".to_string()]);
}

#[test]
fn constructors_are_gated_on_the_uppercase_initial() {
    let unit = translate(&["demo.Point {", "Point(x : Int) {", "}", "}"]);
    let java = output(&unit);
    assert!(java.contains("    /*constructor*/public Point(    /*attribute*/  int x ) {\n"));
    assert_eq!(unit.constructors(), ["Point".to_string()]);
    assert!(unit.methods().is_empty());
}

#[test]
fn method_parameters_are_promoted_into_declarations() {
    let unit = translate(&[
        "demo.App {",
        "join(words : String*) : String {",
        "^ words",
        "}",
        "}",
    ]);
    let java = output(&unit);
    assert!(java.contains("    /*method*/public  String join(    /*attribute*/  String ...  words ) {\n"));
    assert!(java.contains("        return /* return */ words;\n"));
}

#[test]
fn block_literal_attribute_compiles_to_an_anonymous_object() {
    let unit = translate(&[
        "demo.App {",
        "runner = {",
        "out.println(\"run\")",
        "}",
        "}",
    ]);
    let java = output(&unit);
    assert!(java.contains("private  ryz.lang.block.Block0<Void > runner  = /* block */ new ryz.lang.block.Block0<Void >(){\n"));
    assert!(java.contains("    public Void run(){\n"));
    assert!(java.contains("    /*invocation*/out.println(\"run\");\n"));
    // Void placeholder appends an explicit null return before the closers.
    assert!(java.contains("        return null;\n};\n/*ib*/};\n"));
}

#[test]
fn declared_block_invocations_are_rewritten_to_run_calls() {
    let unit = translate(&[
        "demo.App {",
        "go() {",
        "runner = {",
        "out.println(\"x\")",
        "}",
        "runner()",
        "}",
        "}",
    ]);
    assert!(output(&unit).contains("    /*invocation*/runner.run();\n"));
}

#[test]
fn inline_block_arguments_synthesize_an_anonymous_functional_object() {
    let unit = translate(&[
        "demo.App {",
        "go() {",
        "call( (msg : String) {",
        "out.println(msg)",
        "})",
        "}",
        "}",
    ]);
    let java = output(&unit);
    assert!(java.contains(
        "    /*invocationwithblock*/ call(new ryz.lang.block.Block1<Void ,String>(){\n"
    ));
    assert!(java.contains("    public Void run(    /*attribute*/  String msg ){\n"));
    assert!(java.contains("        return null;\n};\n/*ib*/});\n"));
}

#[test]
fn multiline_strings_collapse_back_into_one_literal() {
    let unit = translate(&[
        "demo.App {",
        "text = \"first",
        "second",
        "\"",
        "}",
    ]);
    let java = output(&unit);
    assert!(java.contains(" =  \"first\\n\" \n"));
    assert!(java.contains("+\"second\";\n"));
}

#[test]
fn multiline_continuations_keep_the_entry_indentation() {
    let unit = translate(&[
        "demo.App {",
        "text = \"  lead",
        "tail",
        "\"",
        "}",
    ]);
    // Two spaces captured after the opening quote re-indent continuations.
    assert!(output(&unit).contains("+\"  tail\\n\"\n"));
}

#[test]
fn multiline_close_without_fragments_reseals_the_opening_chunk() {
    let unit = translate(&["demo.App {", "text = \"only", "\"", "}"]);
    assert!(output(&unit).contains(" =  \"only\\n\";\n"));
}

#[test]
fn date_and_regex_literals_rewrite_their_initializers() {
    let unit = translate(&[
        "demo.App {",
        "born = 2011-01-06",
        r"digits = /^(\d*)$/",
        "}",
    ]);
    let java = output(&unit);
    assert!(java.contains("java.util.Date born  = ryz.lang.DateLiteral.valueOf(\"2011-01-06 00:00:00\");"));
    assert!(java.contains("java.util.regex.Pattern digits  = java.util.regex.Pattern.compile(\"(\\\\d*)\");"));
}

#[test]
fn call_initialized_attribute_resolves_known_method_returns() {
    let unit = translate(&[
        "demo.App {",
        "makeGreeting() : String {",
        "^ \"hola\"",
        "}",
        "greeting = makeGreeting()",
        "}",
    ]);
    assert!(output(&unit).contains("    /*attribute*/private  String greeting  = makeGreeting(); \n"));
}

#[test]
fn constructor_call_initializer_gains_new() {
    let unit = translate(&["demo.App {", "list = ArrayList()", "}"]);
    assert!(output(&unit).contains("    /*attribute*/private  ArrayList list  = new ArrayList(); \n"));
}

#[test]
fn well_formed_units_end_balanced() {
    let unit = translate(&[
        "demo.App {",
        "go() {",
        "runner = {",
        "out.println(\"x\")",
        "}",
        "}",
        "}",
    ]);
    // transform_source_code returned Ok, so the stack unwound to Initial.
    assert_eq!(unit.unprocessed_lines(), &[] as &[usize]);
}

#[test]
fn stray_closing_brace_is_a_structural_error() {
    let mut unit = CompilationUnit::new(
        "test.ryz",
        vec!["demo.App {".to_string(), "}".to_string(), "}".to_string()],
    );
    assert_eq!(
        unit.transform_source_code(),
        Err(TransformError::UnbalancedClose { line: 3 })
    );
}

#[test]
fn dangling_scope_is_a_structural_error() {
    let mut unit = CompilationUnit::new(
        "test.ryz",
        vec!["demo.App {".to_string(), "go() {".to_string(), "}".to_string()],
    );
    assert!(matches!(
        unit.transform_source_code(),
        Err(TransformError::UnterminatedScope { .. })
    ));
}

#[test]
fn second_header_in_one_unit_is_a_structural_error() {
    let mut unit = CompilationUnit::new(
        "test.ryz",
        vec![
            "demo.A {".to_string(),
            "}".to_string(),
            "demo.B {".to_string(),
        ],
    );
    assert_eq!(
        unit.transform_source_code(),
        Err(TransformError::HeaderAlreadySeen {
            line: 3,
            class_name: "A".to_string()
        })
    );
}

#[test]
fn unrecognized_lines_are_reported_not_fatal() {
    let mut unit = CompilationUnit::new(
        "test.ryz",
        vec![
            "demo.App {".to_string(),
            "??? not a thing".to_string(),
            "}".to_string(),
        ],
    );
    unit.transform_source_code().expect("unrecognized lines are skipped");
    assert_eq!(unit.unprocessed_lines(), &[2]);
}

#[test]
fn keyword_identifiers_are_escaped_in_declarations() {
    let unit = translate(&["demo.App {", "class : Int", "}"]);
    assert!(output(&unit).contains("    /*attribute*/private  int class$ ; \n"));
}

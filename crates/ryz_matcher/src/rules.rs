//! The ordered declaration rule table.
//!
//! Rules are listed most-specific first and the first match wins. The order
//! is part of the language definition: `name = "partial(` is a call-style
//! initializer, not a multi-line string, precisely because the call rule is
//! listed earlier.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

use crate::context::MatcherContext;
use crate::declaration::{BlockSignature, Declaration};
use crate::params::ParameterInfo;
use ryz_support::{escape_name, LINE_SEPARATOR, LINE_SEPARATOR_ESCAPE};

/// Which rule fired; drives how the captures become a [`Declaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleKind {
    VarargDeclaration,
    Declaration,
    CallInitialized,
    TypedInitialized,
    IntLiteral,
    MultilineOpen,
    StringLiteral,
    BooleanLiteral,
    CharLiteral,
    DateLiteral,
    RegexLiteral,
    BlockLiteral,
    NullLiteral,
}

struct Rule {
    kind: RuleKind,
    pattern: Regex,
}

fn rule(kind: RuleKind, pattern: &str) -> Rule {
    Rule {
        kind,
        pattern: Regex::new(pattern).expect("declaration rule pattern"),
    }
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // words : String*
        rule(RuleKind::VarargDeclaration, r"^(__)?(\w+)\s*:\s*((\w+)\*)$"),
        // + __ hola : String
        rule(RuleKind::Declaration, r"^[+#~-]?\s*(__)?\s*(\w+)\s*:\s*(\w+)$"),
        // + __ hola = String()
        rule(RuleKind::CallInitialized, r"^[+#~-]?\s*(__)?\s*(\w+)\s*=\s*(.+\s*\(.*\))$"),
        // + __ hola : String = a
        rule(RuleKind::TypedInitialized, r"^[+#~-]?\s*(__)?\s*(\w+)\s*:\s*(\w+)\s*=\s*(.+)$"),
        // + __ hola = 1
        rule(RuleKind::IntLiteral, r#"^[+#~-]?\s*(__)?\s*(\w+)\s*=\s*(\d+)$"#),
        // + __ hola = "uno
        rule(RuleKind::MultilineOpen, r#"^[+#~-]?\s*(__)?\s*(\w+)\s*=\s*(".*[^"])$"#),
        // + __ hola = "uno"
        rule(RuleKind::StringLiteral, r#"^[+#~-]?\s*(__)?\s*(\w+)\s*=\s*(".*")$"#),
        // + __ hola = true
        rule(RuleKind::BooleanLiteral, r"^[+#~-]?\s*(__)?\s*(\w+)\s*=\s*(true|false)$"),
        // + __ hola = 'c'
        rule(RuleKind::CharLiteral, r"^[+#~-]?\s*(__)?\s*(\w+)\s*=\s*('.')$"),
        // + __ hola = 2011-01-06
        rule(RuleKind::DateLiteral, r"^[+#~-]?\s*(__)?\s*(\w+)\s*=\s*(\d{4}-\d{2}-\d{2})$"),
        // + __ hola = /^(\d*)$/
        rule(RuleKind::RegexLiteral, r"^[+#~-]?\s*(__)?\s*(\w+)\s*=\s*/\^(.*)\$/$"),
        // hola = (params) : Type {   |   hola = {
        rule(
            RuleKind::BlockLiteral,
            r"^[+#~-]?\s*(__)?\s*(\w+)\s*=\s*(\((.*)\)|\((.*)\)\s*:\s*((\w+)))?\s*\{$",
        ),
        // hola = null
        rule(RuleKind::NullLiteral, r"^[+#~-]?\s*(__)?\s*(\w+)\s*=\s*(null)$"),
    ]
});

/// Prefixes `new ` when the initializer looks like a constructor call.
pub fn check_object_initialization(initial: &str) -> String {
    static CTOR_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w*\(.*\)$").expect("ctor call"));
    let looks_like_ctor = initial
        .chars()
        .next()
        .is_some_and(|c| c.is_uppercase())
        && CTOR_CALL.is_match(initial);
    if looks_like_ctor {
        format!("new {}", initial)
    } else {
        initial.to_string()
    }
}

/// Infers the declared type of a call-style initializer.
///
/// A callee starting with an upper-case letter is taken for a constructor
/// call and names the type directly. Otherwise the callee is resolved
/// against the methods already registered in the same unit (no forward
/// references). When neither applies the declaration degrades to the
/// literal callee name.
pub fn infer_call_type(initial: &str, ctx: &dyn MatcherContext) -> String {
    static CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*)\(.*\)$").expect("call shape"));
    if initial.chars().next().is_some_and(|c| c.is_uppercase()) {
        if let Some(caps) = CALL.captures(initial) {
            return caps[1].to_string();
        }
    }
    if let Some(paren) = initial.find('(') {
        let callee = &initial[..paren];
        if let Some(return_type) = ctx.method_return_type(callee) {
            return return_type;
        }
        return callee.to_string();
    }
    initial.to_string()
}

/// Runs the rule table against one line; the first matching rule wins.
pub fn match_declaration(line: &str, ctx: &mut dyn MatcherContext) -> Option<Declaration> {
    for rule in RULES.iter() {
        if let Some(caps) = rule.pattern.captures(line) {
            trace!(kind = ?rule.kind, line, "declaration rule matched");
            return Some(build(rule.kind, &caps, ctx));
        }
    }
    None
}

fn is_static(caps: &Captures) -> bool {
    caps.get(1).is_some()
}

fn name_of(caps: &Captures) -> String {
    escape_name(&caps[2])
}

/// Backslashes are doubled so the value survives inside a Java string
/// literal; only regex literals can actually carry them.
fn doubled(value: &str) -> String {
    value.replace('\\', "\\\\")
}

fn literal(caps: &Captures, ty: &str, initializer: String) -> Declaration {
    Declaration::new(name_of(caps), ty.to_string(), is_static(caps), initializer)
}

fn build(kind: RuleKind, caps: &Captures, ctx: &mut dyn MatcherContext) -> Declaration {
    match kind {
        RuleKind::VarargDeclaration | RuleKind::Declaration => Declaration::new(
            name_of(caps),
            escape_name(&infer_call_type(&caps[3], ctx)),
            is_static(caps),
            ";".to_string(),
        ),
        RuleKind::CallInitialized => Declaration::new(
            name_of(caps),
            escape_name(&infer_call_type(&caps[3], ctx)),
            is_static(caps),
            format!(" = {};", escape_name(&check_object_initialization(&caps[3]))),
        ),
        RuleKind::TypedInitialized => Declaration::new(
            name_of(caps),
            escape_name(&caps[3]),
            is_static(caps),
            format!(" = {};", escape_name(&check_object_initialization(&caps[4]))),
        ),
        RuleKind::IntLiteral => literal(caps, "int", format!(" = {};", doubled(&caps[3]))),
        RuleKind::MultilineOpen => {
            let value = &caps[3];
            let indent = value
                .chars()
                .skip(1)
                .take_while(|c| c.is_whitespace())
                .count();
            let mut declaration = literal(
                caps,
                "String",
                format!(" =  {}{}\"", doubled(value), LINE_SEPARATOR_ESCAPE),
            );
            declaration.multiline_indent = Some(indent);
            declaration
        }
        RuleKind::StringLiteral => literal(caps, "String", format!(" = {};", doubled(&caps[3]))),
        RuleKind::BooleanLiteral => literal(caps, "Boolean", format!(" = {};", &caps[3])),
        RuleKind::CharLiteral => literal(caps, "char", format!(" = {};", doubled(&caps[3]))),
        RuleKind::DateLiteral => literal(
            caps,
            "java.util.Date",
            format!(" = ryz.lang.DateLiteral.valueOf(\"{} 00:00:00\");", &caps[3]),
        ),
        RuleKind::RegexLiteral => literal(
            caps,
            "java.util.regex.Pattern",
            format!(
                " = java.util.regex.Pattern.compile(\"{}\");{}",
                doubled(&caps[3]),
                LINE_SEPARATOR
            ),
        ),
        RuleKind::BlockLiteral => block_literal(caps, ctx),
        RuleKind::NullLiteral => literal(caps, "java.lang.Object", " = null;".to_string()),
    }
}

fn block_literal(caps: &Captures, ctx: &mut dyn MatcherContext) -> Declaration {
    let mut return_type = "Void".to_string();
    let raw_params = if caps.get(3).is_some() {
        if let Some(ret) = caps.get(6) {
            return_type = escape_name(ret.as_str());
            caps.get(5).map(|m| m.as_str()).unwrap_or("")
        } else {
            caps.get(4).map(|m| m.as_str()).unwrap_or("")
        }
    } else {
        ""
    };
    let parameters = ctx.transform_parameters(raw_params);
    let infos = ParameterInfo::parse(&parameters);
    let types = ParameterInfo::type_list(&infos);
    let arity = infos.len();
    let mut declaration = Declaration::new(
        name_of(caps),
        format!("ryz.lang.block.Block{}<{} {}>", arity, return_type, types),
        is_static(caps),
        format!(
            " = /* block */ new ryz.lang.block.Block{}<{} {}>(){{{}    public {} run({}){{{}",
            arity, return_type, types, LINE_SEPARATOR, return_type, parameters, LINE_SEPARATOR
        ),
    );
    declaration.block = Some(BlockSignature {
        parameters,
        return_type,
    });
    declaration
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Context with one known method and pass-through parameters.
    struct FakeContext;

    impl MatcherContext for FakeContext {
        fn method_return_type(&self, name: &str) -> Option<String> {
            (name == "makeGreeting").then(|| "String".to_string())
        }

        fn transform_parameters(&mut self, raw: &str) -> String {
            if raw.trim().is_empty() {
                String::new()
            } else {
                raw.trim()
                    .split(',')
                    .map(|p| format!("    /*attribute*/  int {} ", p.trim().split(':').next().unwrap().trim()))
                    .collect::<Vec<_>>()
                    .join(",")
            }
        }
    }

    fn matched(line: &str) -> Declaration {
        match_declaration(line, &mut FakeContext).expect(line)
    }

    mod literal_inference {
        use super::*;

        #[test]
        fn int_literal() {
            let decl = matched("count = 42");
            assert_eq!(decl.inferred_type, "int");
            assert_eq!(decl.initializer, " = 42;");
            assert!(!decl.is_static);
        }

        #[test]
        fn string_literal() {
            let decl = matched("greeting = \"hola\"");
            assert_eq!(decl.inferred_type, "String");
            assert_eq!(decl.initializer, " = \"hola\";");
        }

        #[test]
        fn boolean_literal() {
            let decl = matched("flag = true");
            assert_eq!(decl.inferred_type, "Boolean");
            assert_eq!(decl.initializer, " = true;");
        }

        #[test]
        fn char_literal() {
            let decl = matched("initial = 'c'");
            assert_eq!(decl.inferred_type, "char");
            assert_eq!(decl.initializer, " = 'c';");
        }

        #[test]
        fn date_literal() {
            let decl = matched("birthday = 2011-01-06");
            assert_eq!(decl.inferred_type, "java.util.Date");
            assert_eq!(
                decl.initializer,
                " = ryz.lang.DateLiteral.valueOf(\"2011-01-06 00:00:00\");"
            );
        }

        #[test]
        fn regex_literal_doubles_backslashes() {
            let decl = matched(r"pattern = /^(\d*)$/");
            assert_eq!(decl.inferred_type, "java.util.regex.Pattern");
            assert_eq!(
                decl.initializer,
                " = java.util.regex.Pattern.compile(\"(\\\\d*)\");\n"
            );
        }

        #[test]
        fn null_literal() {
            let decl = matched("nothing = null");
            assert_eq!(decl.inferred_type, "java.lang.Object");
            assert_eq!(decl.initializer, " = null;");
        }
    }

    mod declarations {
        use super::*;

        #[test]
        fn bare_declaration() {
            let decl = matched("name : String");
            assert_eq!(decl.name, "name");
            assert_eq!(decl.inferred_type, "String");
            assert_eq!(decl.initializer, ";");
        }

        #[test]
        fn pseudo_primitive_type_canonicalizes() {
            let decl = matched("i : Int");
            assert_eq!(decl.inferred_type, "int");
        }

        #[test]
        fn static_marker_is_honored() {
            let decl = matched("__counter : Int");
            assert!(decl.is_static);
            assert_eq!(decl.name, "counter");
        }

        #[test]
        fn vararg_declaration() {
            let decl = matched("words : String*");
            assert_eq!(decl.inferred_type, "String ... ");
            assert_eq!(decl.initializer, ";");
        }

        #[test]
        fn typed_and_initialized() {
            let decl = matched("size : Int = 10");
            assert_eq!(decl.inferred_type, "int");
            assert_eq!(decl.initializer, " = 10;");
        }
    }

    mod call_initialization {
        use super::*;

        #[test]
        fn constructor_call_names_the_type() {
            let decl = matched("list = ArrayList()");
            assert_eq!(decl.inferred_type, "ArrayList");
            assert_eq!(decl.initializer, " = new ArrayList();");
        }

        #[test]
        fn known_method_resolves_its_return_type() {
            let decl = matched("greeting = makeGreeting()");
            assert_eq!(decl.inferred_type, "String");
            assert_eq!(decl.initializer, " = makeGreeting();");
        }

        #[test]
        fn unknown_callee_degrades_to_the_callee_name() {
            let decl = matched("x = mystery(1)");
            assert_eq!(decl.inferred_type, "mystery");
            assert_eq!(decl.initializer, " = mystery(1);");
        }
    }

    mod multiline_and_blocks {
        use super::*;

        #[test]
        fn unterminated_string_opens_a_multiline_literal() {
            let decl = matched("text = \"   first words");
            assert_eq!(decl.inferred_type, "String");
            assert_eq!(decl.multiline_indent, Some(3));
            assert_eq!(decl.initializer, " =  \"   first words\\n\"");
        }

        #[test]
        fn empty_block_literal_defaults_to_void() {
            let decl = matched("runner = {");
            let block = decl.block.expect("block signature");
            assert_eq!(block.return_type, "Void");
            assert_eq!(block.parameters, "");
            assert_eq!(decl.inferred_type, "ryz.lang.block.Block0<Void >");
        }

        #[test]
        fn block_literal_with_typed_parameters() {
            let decl = matched("adder = (a : Int, b : Int) : Int {");
            let block = decl.block.expect("block signature");
            assert_eq!(block.return_type, "int");
            assert_eq!(decl.inferred_type, "ryz.lang.block.Block2<int ,Integer,Integer>");
            assert!(decl.initializer.contains("public int run("));
        }
    }

    mod priority {
        use super::*;

        #[test]
        fn earliest_matching_rule_wins() {
            // Matches both the call-initialized rule and the multiline-open
            // rule; the earlier (call) rule must win.
            let decl = matched("x = \"foo(1)");
            assert_eq!(decl.inferred_type, "\"foo");
            assert!(decl.multiline_indent.is_none());
        }

        #[test]
        fn static_prefix_binds_to_the_marker_not_the_name() {
            let decl = matched("__x = 5");
            assert!(decl.is_static);
            assert_eq!(decl.name, "x");
        }
    }
}

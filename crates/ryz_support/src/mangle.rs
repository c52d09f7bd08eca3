//! Operator-name mangling.
//!
//! Ryz allows operator-shaped method names (`a.+(1)`) and `?`/`!` suffixes
//! on identifiers (`notNull?(v) { ... }`). The generated Java can carry
//! neither, so the driver rewrites them to `$`-mangled identifiers before a
//! line reaches the state machine. The character table mirrors the runtime
//! extension shims the generated code links against.

use once_cell::sync::Lazy;
use regex::Regex;

/// Identifier fragment for a single operator character.
pub fn mangled_fragment(c: char) -> Option<&'static str> {
    match c {
        '?' => Some("$qm"),
        '!' => Some("$em"),
        '+' => Some("$plus"),
        '-' => Some("$minus"),
        '*' => Some("$star"),
        '/' => Some("$slash"),
        '%' => Some("$percent"),
        '<' => Some("$lt"),
        '>' => Some("$gt"),
        '=' => Some("$eq"),
        '&' => Some("$amp"),
        '|' => Some("$bar"),
        ':' => Some("$colon"),
        '~' => Some("$tilde"),
        _ => None,
    }
}

/// Mangles a full operator token, e.g. `<=>` becomes `$lt$eq$gt`.
pub fn mangle_operator(op: &str) -> String {
    op.chars().filter_map(mangled_fragment).collect()
}

const OPERATOR_CHARS: &str = r"[?!+\-*/%<>=&|~]";

// receiver.+(args)
static INVOKED_OPERATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\.({}+)\(", OPERATOR_CHARS)).expect("invoked operator"));
// notNull?(args)
static SUFFIXED_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\w+)([?!])\(").expect("suffixed identifier"));
// +(other : Int) : Int {
static LEADING_OPERATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^({}+)\s*\(", OPERATOR_CHARS)).expect("leading operator"));

/// Rewrites every operator-shaped method name on one source line.
pub fn mangle_operators(line: &str) -> String {
    let line = INVOKED_OPERATOR.replace_all(line, |caps: &regex::Captures| {
        format!(".{}(", mangle_operator(&caps[1]))
    });
    let line = SUFFIXED_IDENT.replace_all(&line, |caps: &regex::Captures| {
        format!("{}{}(", &caps[1], mangle_operator(&caps[2]))
    });
    let line = LEADING_OPERATOR.replace(&line, |caps: &regex::Captures| {
        format!("{}(", mangle_operator(&caps[1]))
    });
    line.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoked_operators_are_mangled() {
        assert_eq!(mangle_operators("a.+(1)"), "a.$plus(1)");
        assert_eq!(mangle_operators("total.<=>(other)"), "total.$lt$eq$gt(other)");
        assert_eq!(mangle_operators("i = i.%(2)"), "i = i.$percent(2)");
    }

    #[test]
    fn suffixed_identifiers_are_mangled() {
        assert_eq!(mangle_operators("notNull?(value) {"), "notNull$qm(value) {");
        assert_eq!(mangle_operators("sort!(array) {"), "sort$em(array) {");
    }

    #[test]
    fn leading_operator_declarations_are_mangled() {
        assert_eq!(mangle_operators("+(other : Int) : Int {"), "$plus(other : Int) : Int {");
    }

    #[test]
    fn ordinary_lines_are_untouched() {
        assert_eq!(mangle_operators("out.println(msg)"), "out.println(msg)");
        assert_eq!(mangle_operators("total = 0"), "total = 0");
        assert_eq!(mangle_operators("+ total = 0"), "+ total = 0");
    }
}

//! Line pre-normalization.
//!
//! The core expects trimmed lines, inline `//` comments moved onto their
//! own following line, and operator-shaped method names already mangled to
//! identifier-safe forms.

use ryz_support::mangle_operators;

pub fn clean_lines(raw: &str) -> Vec<String> {
    let mut cleaned = Vec::new();
    for line in raw.split('\n') {
        let line = line.trim();
        // An inline comment moves to the next line so the code part still
        // matches the line-shape patterns.
        if line.contains("//") && !line.starts_with("//") {
            let (code, comment) = line.split_once("//").unwrap_or((line, ""));
            cleaned.push(mangle_operators(code.trim()));
            cleaned.push(format!("//{}", comment.trim()));
        } else {
            cleaned.push(mangle_operators(line));
        }
    }
    cleaned
}

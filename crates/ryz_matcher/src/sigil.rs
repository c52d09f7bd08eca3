//! Visibility sigil extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static SIGIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([+#~-])\s*.+$").expect("sigil pattern"));

/// Maps the leading visibility sigil of a line to a Java access modifier.
///
/// `+` is public, `#` protected, `~` package-private (spelled as the empty
/// modifier), `-` private. Lines with no sigil fall back to the caller's
/// default; callers that do not honor sigils at all (method bodies,
/// parameter lists) pass `include_scope = false` and always get `""`.
pub fn visibility(line: &str, include_scope: bool, default: &'static str) -> &'static str {
    if !include_scope {
        return "";
    }
    match SIGIL.captures(line).map(|caps| caps[1].chars().next()) {
        Some(Some('+')) => "public",
        Some(Some('#')) => "protected",
        Some(Some('~')) => "",
        Some(Some('-')) => "private",
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigils_map_to_access_modifiers() {
        assert_eq!(visibility("+ total = 0", true, "private"), "public");
        assert_eq!(visibility("# total = 0", true, "private"), "protected");
        assert_eq!(visibility("~ total = 0", true, "private"), "");
        assert_eq!(visibility("- total = 0", true, "private"), "private");
    }

    #[test]
    fn missing_sigil_uses_the_default() {
        assert_eq!(visibility("total = 0", true, "private"), "private");
        assert_eq!(visibility("greet() {", true, "public"), "public");
    }

    #[test]
    fn scope_is_suppressed_when_not_honored() {
        assert_eq!(visibility("+ total = 0", false, "private"), "");
    }
}

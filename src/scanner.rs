//! Stateless per-line classification for the borr grammar.
//!
//! Every function here inspects one line (or one field name) and extracts
//! the relevant substrings; none of them keeps parsing state. The document
//! builder in [`crate::document`] drives these over a whole file.

use std::sync::LazyLock;

use regex::Regex;

// A section header is exactly `[identifier]` once surrounding whitespace is
// stripped. Identifiers start with a letter or underscore and continue with
// letters, digits or underscores.
static SECTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([A-Za-z_][A-Za-z0-9_]*)\]$").unwrap());

// A translation is `name = "value"`. The name may carry a `[]` multiline
// marker (one optional space before the brackets), whitespace around `=` is
// free, and the value runs until the first unescaped quote.
static TRANSLATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([A-Za-z_][A-Za-z0-9_]*(?: ?\[\])?)\s*=\s*"((?:[^"\\]|\\.)*)"$"#).unwrap()
});

// A variable is `${name}`, optionally `${section:field}` for references to
// other translations.
pub(crate) static VARIABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*(?::[A-Za-z_][A-Za-z0-9_]*)?)\}").unwrap()
});

/// True if the line is blank or a full-line `#` comment once trimmed.
pub fn is_empty_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Returns the section name when the trimmed line is a `[section]` header.
pub fn section_name(line: &str) -> Option<&str> {
    SECTION_REGEX
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str())
}

/// Matches a `name = "value"` translation line.
///
/// On a match, returns the raw field name (still carrying any `[]` marker)
/// and the unquoted value with its backslash escapes resolved. Anything
/// else yields `None`; unrecognized lines are skipped, never fatal.
pub fn translation(line: &str) -> Option<(String, String)> {
    let caps = TRANSLATION_REGEX.captures(line.trim())?;
    let name = caps.get(1)?.as_str().to_string();
    let value = crate::utils::unescape_value(caps.get(2)?.as_str());
    Some((name, value))
}

/// True when the field name carries the `[]` multiline marker, as in
/// `about[]` or `about []`.
pub fn is_multiline_field(field: &str) -> bool {
    field.ends_with("[]")
}

/// The key a field is stored under: the declared name with any multiline
/// marker (and the optional space before it) removed.
pub fn base_field_name(field: &str) -> &str {
    match field.strip_suffix("[]") {
        Some(stem) => crate::utils::trim_chars(stem, " "),
        None => field,
    }
}

/// Strips a trailing `# ...` comment, leaving `#` characters inside the
/// quoted value untouched.
///
/// A naive trailing-`#` pattern would truncate values like `"a#b"`; this
/// scan tracks quoting and escapes instead. The result is trimmed.
pub fn remove_inline_comments(line: &str) -> &str {
    let mut in_quotes = false;
    let mut escaped = false;

    for (idx, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return line[..idx].trim(),
            _ => {}
        }
    }

    line.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty_or_comment() {
        assert!(is_empty_or_comment(""));
        assert!(is_empty_or_comment("   \t"));
        assert!(is_empty_or_comment("# a comment"));
        assert!(is_empty_or_comment("   # indented comment"));

        assert!(!is_empty_or_comment("[section]"));
        assert!(!is_empty_or_comment("field = \"value\" # trailing"));
    }

    #[test]
    fn test_section_name() {
        assert_eq!(section_name("[start_page]"), Some("start_page"));
        assert_eq!(section_name("  [about_page]  "), Some("about_page"));
        assert_eq!(section_name("[_private]"), Some("_private"));
        assert_eq!(section_name("[page2]"), Some("page2"));

        // Digits may not lead an identifier, and a header is the whole line.
        assert_eq!(section_name("[2page]"), None);
        assert_eq!(section_name("[no spaces]"), None);
        assert_eq!(section_name("[unterminated"), None);
        assert_eq!(section_name("[a] trailing"), None);
        assert_eq!(section_name("[]"), None);
    }

    #[test]
    fn test_translation() {
        assert_eq!(
            translation(r#"page_title = "My Home Page!""#),
            Some(("page_title".to_string(), "My Home Page!".to_string()))
        );
        assert_eq!(
            translation(r#"about[] = "line one""#),
            Some(("about[]".to_string(), "line one".to_string()))
        );
        assert_eq!(
            translation(r#"empty = """#),
            Some(("empty".to_string(), String::new()))
        );
        // Tight and loose spacing around `=` both match.
        assert_eq!(
            translation(r#"a="b""#),
            Some(("a".to_string(), "b".to_string()))
        );
        assert_eq!(
            translation(r#"  spaced   =   "value"  "#),
            Some(("spaced".to_string(), "value".to_string()))
        );
    }

    #[test]
    fn test_translation_unescapes_quotes() {
        assert_eq!(
            translation(r#"quoted = "say \"hi\" now""#),
            Some(("quoted".to_string(), r#"say "hi" now"#.to_string()))
        );
    }

    #[test]
    fn test_translation_rejects_malformed_lines() {
        assert_eq!(translation("missing quotes = value"), None);
        assert_eq!(translation(r#"2bad = "value""#), None);
        assert_eq!(translation(r#"no-dashes = "value""#), None);
        assert_eq!(translation(r#"unterminated = "value"#), None);
        assert_eq!(translation(r#"= "value""#), None);
        assert_eq!(translation("[section]"), None);
    }

    #[test]
    fn test_is_multiline_field() {
        assert!(is_multiline_field("foo[]"));
        assert!(is_multiline_field("foo []"));
        assert!(!is_multiline_field("foo"));
        assert!(!is_multiline_field("foo[0]"));
    }

    #[test]
    fn test_base_field_name() {
        assert_eq!(base_field_name("foo[]"), "foo");
        assert_eq!(base_field_name("foo []"), "foo");
        assert_eq!(base_field_name("foo"), "foo");
    }

    #[test]
    fn test_remove_inline_comments() {
        assert_eq!(
            remove_inline_comments(r#"translation = "a#b" # trailing"#),
            r#"translation = "a#b""#
        );
        assert_eq!(
            remove_inline_comments(r#"field = "value""#),
            r#"field = "value""#
        );
        assert_eq!(remove_inline_comments("[section] # comment"), "[section]");
        assert_eq!(remove_inline_comments(r##"hash = "#""##), r##"hash = "#""##);
    }

    #[test]
    fn test_variable_regex_names() {
        let first = |value: &str| {
            VARIABLE_REGEX
                .captures(value)
                .map(|caps| caps[1].to_string())
        };

        assert_eq!(first("Hello ${name}!"), Some("name".to_string()));
        assert_eq!(
            first("${start_page:my_button}"),
            Some("start_page:my_button".to_string())
        );
        assert_eq!(first("${2bad}"), None);
        assert_eq!(first("no variables here"), None);
        assert_eq!(first("${}"), None);
    }
}

//! Small pure string helpers shared by the scanner and the serializer.

/// Trims every character in `chars` from both ends of `text`.
///
/// # Examples
///
/// ```
/// use borr::utils::trim_chars;
///
/// assert_eq!(trim_chars("[section]", "[]"), "section");
/// assert_eq!(trim_chars("  padded\t", " \t"), "padded");
/// assert_eq!(trim_chars("plain", "[]"), "plain");
/// ```
pub fn trim_chars<'a>(text: &'a str, chars: &str) -> &'a str {
    text.trim_matches(|c| chars.contains(c))
}

/// Resolves backslash escapes in a quoted value.
///
/// Any escaped character stands for itself, so `\"` becomes `"` and `\\`
/// becomes `\`. A trailing lone backslash is kept verbatim.
///
/// # Examples
///
/// ```
/// use borr::utils::unescape_value;
///
/// assert_eq!(unescape_value(r#"say \"hi\""#), r#"say "hi""#);
/// assert_eq!(unescape_value(r"a\\b"), r"a\b");
/// assert_eq!(unescape_value("plain"), "plain");
/// ```
pub fn unescape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Escapes a value for re-serialization; the inverse of [`unescape_value`].
///
/// # Examples
///
/// ```
/// use borr::utils::escape_value;
///
/// assert_eq!(escape_value(r#"say "hi""#), r#"say \"hi\""#);
/// assert_eq!(escape_value(r"a\b"), r"a\\b");
/// ```
pub fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

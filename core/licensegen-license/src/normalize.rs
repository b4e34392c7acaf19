//! Canonicalization of free-text identity fields.

/// Whitespace as the C locale classifies it: space, tab, newline, vertical
/// tab, form feed and carriage return.
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Normalizes an identity field.
///
/// Trims surrounding whitespace, lower-cases ASCII letters and collapses each
/// internal whitespace run to a single space. Non-ASCII characters are kept
/// as they are. The result is idempotent: `normalize(normalize(s)) ==
/// normalize(s)`.
///
/// ```
/// use licensegen_license::normalize;
///
/// assert_eq!(normalize("  Ada \t  LOVELACE "), "ada lovelace");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split(is_space).filter(|word| !word.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(word.chars().map(|c| c.to_ascii_lowercase()));
    }
    out
}

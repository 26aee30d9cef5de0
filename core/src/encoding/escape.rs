//! Delimited-format escaping for `KEY:value;` descriptors.
//!
//! Values are wrapped in a fixed `\"` envelope. Inside it `;` becomes `\;`
//! while a backslash is copied through as a single backslash, so `\` is not
//! itself escaped. Existing scanners depend on this exact output.

const ENVELOPE: &str = "\\\"";

pub fn escape_delimited(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len() + 2 * ENVELOPE.len());
    escaped.push_str(ENVELOPE);
    for ch in raw.chars() {
        match ch {
            ';' => escaped.push_str(r"\;"),
            '\\' => escaped.push('\\'),
            _ => escaped.push(ch),
        }
    }
    escaped.push_str(ENVELOPE);
    escaped
}

/// Inverse of [`escape_delimited`]: strips the envelope when present and turns
/// `\;` back into `;`. Any other backslash is literal.
pub fn unescape_delimited(encoded: &str) -> String {
    let inner = encoded
        .strip_prefix(ENVELOPE)
        .and_then(|rest| rest.strip_suffix(ENVELOPE))
        .unwrap_or(encoded);

    let mut raw = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&';') {
            chars.next();
            raw.push(';');
        } else {
            raw.push(ch);
        }
    }
    raw
}

/// Byte index of the first `delimiter` not preceded by an escaping backslash.
pub fn find_unescaped(input: &str, delimiter: char) -> Option<usize> {
    let mut chars = input.char_indices().peekable();
    while let Some((index, ch)) = chars.next() {
        if ch == delimiter {
            return Some(index);
        }
        if ch == '\\' && chars.peek().map_or(false, |&(_, next)| next == delimiter) {
            chars.next();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_always_wraps_in_envelope() {
        assert_eq!(escape_delimited("home"), r#"\"home\""#);
        assert_eq!(escape_delimited(""), r#"\"\""#);
    }

    #[test]
    fn test_escape_semicolon_and_single_backslash_passthrough() {
        assert_eq!(escape_delimited(r"foo;bar\baz"), r#"\"foo\;bar\baz\""#);
        assert_eq!(escape_delimited(r"a\\b"), r#"\"a\\b\""#);
    }

    #[test]
    fn test_unescape_reverses_escape() {
        for raw in ["home", "foo;bar", r"foo;bar\baz", r"a\;b", r"trailing\", ";;"] {
            assert_eq!(unescape_delimited(&escape_delimited(raw)), raw, "raw: {}", raw);
        }
    }

    #[test]
    fn test_unescape_without_envelope() {
        assert_eq!(unescape_delimited(r"plain\;value"), "plain;value");
    }

    #[test]
    fn test_find_unescaped_skips_escaped_delimiters() {
        let input = r#"S:\"foo\;bar\baz\";T:WPA;"#;
        let end = find_unescaped(input, ';').unwrap();
        assert_eq!(&input[..end], r#"S:\"foo\;bar\baz\""#);
        assert_eq!(find_unescaped("no delimiter", ';'), None);
        assert_eq!(find_unescaped(r"a\;", ';'), None);
    }

    #[test]
    fn test_find_unescaped_after_literal_backslash() {
        let escaped = escape_delimited(r"a\;b");
        let input = format!("{};T:WEP;", escaped);
        let end = find_unescaped(&input, ';').unwrap();
        assert_eq!(unescape_delimited(&input[..end]), r"a\;b");
    }
}

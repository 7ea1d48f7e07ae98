//! Escaping for the two output formats the crate writes: HTML `<head>`
//! fragments and sitemap XML.

use std::borrow::Cow;

/// Characters that require escaping in attribute values and XML text.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Escape HTML attribute values.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, |c| match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    })
}

/// Escape special XML characters.
#[inline]
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    escape_with(s, |c| match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&apos;"),
        _ => None,
    })
}

/// Guard the body of a raw text element (`<script>`).
///
/// Raw text is emitted unescaped, so the only sequence that must not
/// appear is a closing tag. `</` becomes `<\/`, which JSON and JS both
/// read back as `</`.
pub fn guard_raw_text(s: &str) -> Cow<'_, str> {
    if !s.contains("</") {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("</", "<\\/"))
}

#[inline]
fn escape_with(s: &str, entity: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match entity(c) {
            Some(e) => result.push_str(e),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("index, follow"), "index, follow");
        assert_eq!(escape_attr("a\"b&c"), "a&quot;b&amp;c");
        assert_eq!(escape_attr("it's <b>"), "it&#39;s &lt;b&gt;");
    }

    #[test]
    fn test_escape_attr_borrows_when_clean() {
        assert!(matches!(escape_attr("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's"), "it&apos;s");
        assert_eq!(
            escape_xml("https://example.com/search?q=a&b=c"),
            "https://example.com/search?q=a&amp;b=c"
        );
    }

    #[test]
    fn test_guard_raw_text() {
        assert_eq!(guard_raw_text(r#"{"a":1}"#), r#"{"a":1}"#);
        assert_eq!(
            guard_raw_text(r#"{"x":"</script><b>"}"#),
            r#"{"x":"<\/script><b>"}"#
        );
    }
}

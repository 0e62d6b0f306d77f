//! Conversion between plain text and the escaped form that string values and
//! object keys hold.
//!
//! The parser keeps string literals exactly as written, so a [`Value::String`]
//! or an [`Object`] key is always in escaped form. [`escape`] builds that form
//! from plain text and [`unescape`] decodes it again.
//!
//! [`Value::String`]: crate::Value::String
//! [`Object`]: crate::Object

use alloc::{borrow::Cow, string::String};

/// Escapes `text` so that it can be used as a string value or object key.
///
/// Quotes, backslashes, control characters and the Unicode line separators
/// are replaced with their JSON escape sequences.
///
/// ```
/// use basejson::{Object, escape};
///
/// let mut object = Object::new();
/// object.put(escape("say \"hi\""), 1);
/// assert_eq!(object.to_string(), r#"{"say \"hi\"":1}"#);
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut raw = String::with_capacity(text.len());
    escape_into(text, &mut raw);
    raw
}

pub(crate) fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // pre-2019 JSON parsers choke on these
            '\u{2028}' | '\u{2029}' => push_unicode_escape(c, out),
            c if c.is_control() => push_unicode_escape(c, out),
            c => out.push(c),
        }
    }
}

/// Pushes `\uXXXX` for a character in the Basic Multilingual Plane.
fn push_unicode_escape(c: char, out: &mut String) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let code = u32::from(c);
    debug_assert!(code <= 0xFFFF);
    out.push_str("\\u");
    for shift in [12, 8, 4, 0] {
        out.push(char::from(HEX[((code >> shift) & 0xF) as usize]));
    }
}

/// Decodes the escape sequences in a raw string value or object key.
///
/// Standard JSON escapes are decoded, including `\uXXXX` surrogate pairs. A
/// lone surrogate becomes U+FFFD. Any other escaped character stands for
/// itself, and a `\u` without four hex digits is kept as written.
///
/// ```
/// use basejson::{parse, unescape};
///
/// let value = parse(r#""tab\there \u00e9 \ud83d\ude00""#).unwrap();
/// assert_eq!(unescape(value.as_str().unwrap()), "tab\there é 😀");
/// ```
#[must_use]
pub fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(backslash) = rest.find('\\') {
        out.push_str(&rest[..backslash]);
        rest = &rest[backslash + 1..];

        let mut chars = rest.chars();
        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };
        rest = chars.as_str();

        match escaped {
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{C}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => match hex4(rest) {
                Some(unit) => {
                    rest = &rest[4..];
                    out.push(decode_unit(unit, &mut rest));
                }
                None => out.push_str("\\u"),
            },
            other => out.push(other),
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn hex4(text: &str) -> Option<u16> {
    let digits = text.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}

/// Turns one UTF-16 code unit into a character, taking the low half of a
/// surrogate pair from `rest` when it follows.
fn decode_unit(unit: u16, rest: &mut &str) -> char {
    let low = (0xD800..0xDC00)
        .contains(&unit)
        .then(|| rest.strip_prefix("\\u").and_then(hex4))
        .flatten()
        .filter(|low| (0xDC00..0xE000).contains(low));

    let code = match low {
        Some(low) => {
            *rest = &rest[6..];
            0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
        }
        None => u32::from(unit),
    };
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("abc", "abc")]
    #[case::quote("a\"b", r#"a\"b"#)]
    #[case::backslash(r"C:\dir", r"C:\\dir")]
    #[case::whitespace("l1\nl2\t\r", r"l1\nl2\t\r")]
    #[case::control("\u{1}", r"\u0001")]
    #[case::delete("\u{7F}", r"\u007F")]
    #[case::line_separator("\u{2028}", r"\u2028")]
    #[case::unicode("héllo", "héllo")]
    fn escapes_text(#[case] text: &str, #[case] raw: &str) {
        assert_eq!(escape(text), raw);
        assert_eq!(unescape(raw), text);
    }

    #[rstest]
    #[case::solidus(r"a\/b", "a/b")]
    #[case::backspace_formfeed(r"\b\f", "\u{8}\u{C}")]
    #[case::lowercase_hex(r"\u00e9", "é")]
    #[case::surrogate_pair(r"\uD83D\uDE00", "😀")]
    #[case::lone_high_surrogate(r"\uD83Dx", "\u{FFFD}x")]
    #[case::lone_low_surrogate(r"\uDE00", "\u{FFFD}")]
    #[case::high_then_non_surrogate(r"\uD83D\u0041", "\u{FFFD}A")]
    #[case::short_hex(r"\u12", r"\u12")]
    #[case::signed_hex(r"\u+123", r"\u+123")]
    #[case::unknown_escape(r"\q", "q")]
    #[case::trailing_backslash("a\\", "a\\")]
    fn decodes_escapes(#[case] raw: &str, #[case] text: &str) {
        assert_eq!(unescape(raw), text);
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(unescape("no escapes"), Cow::Borrowed("no escapes")));
    }
}

use bstr::{BStr, BString, ByteSlice};
use core::fmt::{self, Write};
use thiserror::Error;

/// Bytes of source text kept on each side of an error offset.
pub(crate) const CONTEXT_RADIUS: usize = 10;

/// A parse failure together with where it was detected.
///
/// `offset` is a byte offset into the input. `line` and `column` are 1-based,
/// with the column counted in bytes. `context` holds up to
/// [`CONTEXT_RADIUS`] bytes on either side of the offset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at line {line}, column {column} (offset {offset}) near `{}`", escaped(.context))]
pub struct ParserError {
    pub(crate) source: SyntaxError,
    pub(crate) offset: usize,
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) context: BString,
}

impl ParserError {
    /// Builds an error for `source` detected at byte `offset` of `text`.
    pub(crate) fn at(source: SyntaxError, text: &[u8], offset: usize) -> Self {
        let offset = offset.min(text.len());
        let prefix = &text[..offset];
        let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
        let column = match prefix.rfind_byte(b'\n') {
            Some(newline) => offset - newline,
            None => offset + 1,
        };
        let start = offset.saturating_sub(CONTEXT_RADIUS);
        let end = offset.saturating_add(CONTEXT_RADIUS).min(text.len());

        Self {
            source,
            offset,
            line,
            column,
            context: BString::from(&text[start..end]),
        }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.source
    }

    /// Byte offset at which the failure was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of [`offset`](Self::offset).
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based byte column of [`offset`](Self::offset).
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// The source bytes surrounding the failure.
    #[must_use]
    pub fn context(&self) -> &BStr {
        self.context.as_bstr()
    }
}

/// The kinds of failure the parser reports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// The root of [`Parser::parse_object`](crate::Parser::parse_object) is not `{`.
    #[error("expected '{{' at start of object")]
    ExpectedObjectStart,
    /// The root of [`Parser::parse_array`](crate::Parser::parse_array) is not `[`.
    #[error("expected '[' at start of array")]
    ExpectedArrayStart,
    /// An object key is not followed by `:`.
    #[error("expected ':' after object key")]
    ExpectedColon,
    /// Input ended inside an object.
    #[error("unterminated object")]
    UnterminatedObject,
    /// Input ended inside an array.
    #[error("unterminated array")]
    UnterminatedArray,
    /// Input ended before the closing quote of a string.
    #[error("unterminated string")]
    UnterminatedString,
    /// A byte that cannot appear at this point.
    #[error("unexpected character {}", EscapedByte(*.0))]
    UnexpectedCharacter(u8),
    /// Input ended where a value was expected.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// Something other than whitespace follows the root value.
    #[error("trailing data after value")]
    TrailingData,
    /// Opening another object or array would exceed the nesting limit.
    #[error("nesting depth exceeds {0}")]
    NestingTooDeep(usize),
    /// A number is missing digits after `-`, `.` or its exponent marker.
    #[error("malformed number")]
    MalformedNumber,
    /// An integer does not fit in `i64`, or a float overflows.
    #[error("number out of range")]
    NumberOutOfRange,
    /// A number is well formed but cannot be converted, such as `1.5L`.
    #[error("invalid number")]
    InvalidNumber,
    /// A literal starting with `n`, `t` or `f` is not `null`, `true` or `false`.
    #[error("expected literal `{0}`")]
    InvalidLiteral(&'static str),
    /// String content is not valid UTF-8.
    #[error("string is not valid UTF-8")]
    InvalidUtf8,
}

struct EscapedByte(u8);

impl fmt::Display for EscapedByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            b if b.is_ascii_graphic() => write!(f, "'{}'", char::from(b)),
            b' ' => f.write_str("' '"),
            b => write!(f, "byte 0x{b:02X}"),
        }
    }
}

/// Renders source bytes on one line: invalid UTF-8 becomes U+FFFD and
/// control characters are escaped.
struct EscapedContext<'a>(&'a [u8]);

fn escaped(bytes: &[u8]) -> EscapedContext<'_> {
    EscapedContext(bytes)
}

impl fmt::Display for EscapedContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '\0' => f.write_str("\\0")?,
                c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

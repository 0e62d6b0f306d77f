//! Number literal lexing and conversion.
//!
//! Grammar: `-? digits ( '.' digits )? ( [Ll] | [Ee] [+-]? digits )?`
//!
//! A `L`/`l` suffix marks a 64-bit integer literal. The suffix is consumed
//! from the input but is not part of the span handed to the integer parser.

use core::num::IntErrorKind;

use super::error::SyntaxError;
use crate::Value;

/// Lexical hint for how a numeric span converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberKind {
    /// digits only
    Integer,
    /// digits followed by an `L`/`l` suffix
    Long,
    /// has a fraction or an exponent
    Float,
}

/// A scanned number literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NumberLexeme {
    kind: NumberKind,
    start: usize,
    end: usize,
    suffix_len: usize,
}

impl NumberLexeme {
    #[cfg(test)]
    pub(crate) fn kind(&self) -> NumberKind {
        self.kind
    }

    pub(crate) fn start(&self) -> usize {
        self.start
    }

    /// End of the numeric span, excluding any suffix.
    pub(crate) fn end(&self) -> usize {
        self.end
    }

    /// Offset just past everything the literal occupies in the input.
    pub(crate) fn consumed_end(&self) -> usize {
        self.end + self.suffix_len
    }

    /// Converts the span to an `Int` or `Float` value.
    pub(crate) fn to_value(&self, text: &[u8]) -> Result<Value, SyntaxError> {
        let span = text
            .get(self.start..self.end)
            .and_then(|span| core::str::from_utf8(span).ok())
            .ok_or(SyntaxError::MalformedNumber)?;

        match self.kind {
            NumberKind::Integer | NumberKind::Long => {
                span.parse::<i64>().map(Value::Int).map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        SyntaxError::NumberOutOfRange
                    }
                    _ => SyntaxError::InvalidNumber,
                })
            }
            NumberKind::Float => {
                let value = span
                    .parse::<f64>()
                    .map_err(|_| SyntaxError::InvalidNumber)?;
                if value.is_finite() {
                    Ok(Value::Float(value))
                } else {
                    Err(SyntaxError::NumberOutOfRange)
                }
            }
        }
    }
}

fn skip_digits(text: &[u8], mut at: usize) -> usize {
    while text.get(at).is_some_and(u8::is_ascii_digit) {
        at += 1;
    }
    at
}

/// Scans the longest number literal starting at `start`.
///
/// Every part that is present must carry at least one digit; `-`, `1.` and
/// `1e` are [`MalformedNumber`](SyntaxError::MalformedNumber).
pub(crate) fn lex_number(text: &[u8], start: usize) -> Result<NumberLexeme, SyntaxError> {
    let mut kind = NumberKind::Integer;
    let mut end = start;

    if text.get(end) == Some(&b'-') {
        end += 1;
    }
    let digits = end;
    end = skip_digits(text, end);
    if end == digits {
        return Err(SyntaxError::MalformedNumber);
    }

    if text.get(end) == Some(&b'.') {
        kind = NumberKind::Float;
        let fraction = end + 1;
        end = skip_digits(text, fraction);
        if end == fraction {
            return Err(SyntaxError::MalformedNumber);
        }
    }

    let mut suffix_len = 0;
    match text.get(end) {
        Some(b'L' | b'l') => {
            kind = NumberKind::Long;
            suffix_len = 1;
        }
        Some(b'E' | b'e') => {
            kind = NumberKind::Float;
            end += 1;
            if matches!(text.get(end), Some(b'+' | b'-')) {
                end += 1;
            }
            let exponent = end;
            end = skip_digits(text, exponent);
            if end == exponent {
                return Err(SyntaxError::MalformedNumber);
            }
        }
        _ => {}
    }

    Ok(NumberLexeme {
        kind,
        start,
        end,
        suffix_len,
    })
}

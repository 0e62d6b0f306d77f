//! A byte-level scanner and recursive-descent JSON parser that builds an
//! in-memory [`Value`] tree.
//!
//! The parser reads one complete document in a single pass. Beyond standard
//! JSON it accepts integer literals with a `L`/`l` suffix (`123L`) and, unless
//! [`ParserOptions::strict_commas`] is set, treats commas as optional
//! separators. String contents are kept exactly as written, escape sequences
//! included, so printing a parsed value gives back parseable JSON. Use
//! [`unescape`] to decode them and [`escape`] to go the other way.
//!
//! ```rust
//! use basejson::{Value, parse};
//!
//! let value = parse(r#"{"id": 14009L, "tags": ["a", "b",], "ok": true}"#).unwrap();
//! assert_eq!(value.get("id"), Some(&Value::Int(14009)));
//! assert_eq!(value.to_string(), r#"{"id":14009,"ok":true,"tags":["a","b"]}"#);
//! ```
//!
//! Errors carry the byte offset, line and column of the offending input along
//! with a short excerpt of the surrounding text:
//!
//! ```rust
//! let err = basejson::parse(r#"{"a": 1"#).unwrap_err();
//! assert_eq!(err.offset(), 7);
//! assert_eq!(
//!     err.to_string(),
//!     r#"unterminated object at line 1, column 8 (offset 7) near `{"a": 1`"#
//! );
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod escape;
mod parser;
mod value;
#[cfg(any(test, feature = "serde"))]
mod value_serde;

#[cfg(test)]
mod tests;

pub use parser::{DEFAULT_MAX_NESTING_DEPTH, Parser, ParserError, ParserOptions, SyntaxError};
pub use escape::{escape, unescape};
pub use value::{Array, Object, Value};

/// Parses `text` with the default [`ParserOptions`].
///
/// # Errors
///
/// Returns a [`ParserError`] if `text` is not a single well-formed value.
pub fn parse(text: &str) -> Result<Value, ParserError> {
    parse_with_options(text, ParserOptions::default())
}

/// Parses `text` with the given options.
///
/// # Errors
///
/// Returns a [`ParserError`] if `text` is not a single well-formed value.
pub fn parse_with_options(text: &str, options: ParserOptions) -> Result<Value, ParserError> {
    Parser::new(text, options).parse()
}

/// Parses raw bytes with the default [`ParserOptions`].
///
/// # Errors
///
/// As for [`parse`], plus [`SyntaxError::InvalidUtf8`] when a string literal
/// is not valid UTF-8.
pub fn parse_bytes(text: &[u8]) -> Result<Value, ParserError> {
    Parser::from_bytes(text, ParserOptions::default()).parse()
}

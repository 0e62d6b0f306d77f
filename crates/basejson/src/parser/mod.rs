//! Recursive-descent JSON parser.
//!
//! Overview
//! - A [`Parser`] owns a [`Scanner`] over one complete input text and is
//!   consumed by a single call to [`Parser::parse`], [`Parser::parse_object`]
//!   or [`Parser::parse_array`].
//! - `object` and `array` are mutually recursive through `value`. Each
//!   production leaves the cursor one byte past what it consumed, so the
//!   caller only has to skip whitespace before classifying the next token.
//!
//! Errors
//! - Productions return a bare [`SyntaxError`] and never move the cursor past
//!   the byte that caused it. The entry point converts it into a
//!   [`ParserError`] using the cursor position at that moment, so every
//!   diagnostic points at the offending byte.
//!
//! Separators
//! - By default commas are optional: stray commas are skipped and members may
//!   be juxtaposed. [`ParserOptions::strict_commas`] turns on exact
//!   comma checking.

mod error;
mod literal;
mod numbers;
mod options;
mod scanner;


pub use error::{ParserError, SyntaxError};
pub use options::{DEFAULT_MAX_NESTING_DEPTH, ParserOptions};

use literal::ExpectedLiteral;
use log::{debug, trace};
use scanner::{Scanner, Token};

use crate::{Array, Object, Value};

/// Parses one JSON document held entirely in memory.
///
/// # Examples
///
/// ```
/// use basejson::{Parser, ParserOptions, Value};
///
/// let value = Parser::new(r#"{"a": [1, 2.5, "x"]}"#, ParserOptions::default())
///     .parse()
///     .unwrap();
/// assert_eq!(value.get("a").and_then(|a| a.get_index(1)), Some(&Value::Float(2.5)));
/// ```
#[derive(Debug)]
pub struct Parser<'src> {
    scanner: Scanner<'src>,
    options: ParserOptions,
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `text`.
    #[must_use]
    pub fn new(text: &'src str, options: ParserOptions) -> Self {
        Self::from_bytes(text.as_bytes(), options)
    }

    /// Creates a parser over raw bytes. String contents are checked for valid
    /// UTF-8 as they are read.
    #[must_use]
    pub fn from_bytes(text: &'src [u8], options: ParserOptions) -> Self {
        Self {
            scanner: Scanner::new(text),
            options,
            depth: 0,
        }
    }

    /// Parses a single value of any kind, followed only by whitespace.
    ///
    /// # Errors
    ///
    /// Returns a [`ParserError`] describing the first problem found.
    pub fn parse(self) -> Result<Value, ParserError> {
        self.run(Self::value)
    }

    /// Parses a document whose root must be an object.
    ///
    /// # Errors
    ///
    /// [`SyntaxError::ExpectedObjectStart`] if the first token is not `{`,
    /// otherwise as for [`parse`](Self::parse).
    pub fn parse_object(self) -> Result<Object, ParserError> {
        self.run(|parser| match parser.scanner.token() {
            Token::LeftBrace => parser.object(),
            _ => Err(SyntaxError::ExpectedObjectStart),
        })
    }

    /// Parses a document whose root must be an array.
    ///
    /// # Errors
    ///
    /// [`SyntaxError::ExpectedArrayStart`] if the first token is not `[`,
    /// otherwise as for [`parse`](Self::parse).
    pub fn parse_array(self) -> Result<Array, ParserError> {
        self.run(|parser| match parser.scanner.token() {
            Token::LeftBracket => parser.array(),
            _ => Err(SyntaxError::ExpectedArrayStart),
        })
    }

    fn run<T>(
        mut self,
        root: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, ParserError> {
        debug!(
            "parsing {} bytes (strict_commas={}, max_nesting_depth={:?})",
            self.scanner.text().len(),
            self.options.strict_commas,
            self.options.max_nesting_depth,
        );

        let result = root(&mut self).and_then(|value| {
            self.scanner.skip_whitespace();
            if self.scanner.is_at_end() {
                Ok(value)
            } else {
                Err(SyntaxError::TrailingData)
            }
        });

        match result {
            Ok(value) => {
                debug!("parsed {} bytes", self.scanner.pos());
                Ok(value)
            }
            Err(source) => {
                let err = self.scanner.error(source);
                debug!("parse failed: {err}");
                Err(err)
            }
        }
    }

    fn value(&mut self) -> Result<Value, SyntaxError> {
        match self.scanner.current_token() {
            Token::LeftBrace => self.object().map(Value::Object),
            Token::LeftBracket => self.array().map(Value::Array),
            Token::DoubleQuote => self.scanner.read_string().map(Value::String),
            Token::DigitStart => self.number(),
            Token::Eof => Err(SyntaxError::UnexpectedEndOfInput),
            token => match ExpectedLiteral::from_token(token) {
                Some(literal) => {
                    self.scanner.consume_literal(literal.text())?;
                    Ok(literal.value())
                }
                None => Err(self.unexpected()),
            },
        }
    }

    fn number(&mut self) -> Result<Value, SyntaxError> {
        let lexeme = self.scanner.scan_number()?;
        let value = lexeme.to_value(self.scanner.text())?;
        self.scanner.commit_number(&lexeme);
        Ok(value)
    }

    fn object(&mut self) -> Result<Object, SyntaxError> {
        debug_assert_eq!(self.scanner.current_char(), Some(b'{'));
        self.enter()?;
        self.scanner.advance();

        let mut object = Object::new();
        let mut separators = Separators::new(self.options.strict_commas);
        loop {
            self.scanner.skip_whitespace();
            match self.scanner.current_token() {
                Token::Comma => {
                    if !separators.comma() {
                        return Err(self.unexpected());
                    }
                    self.scanner.advance();
                }
                Token::DoubleQuote => {
                    if !separators.member() {
                        return Err(self.unexpected());
                    }
                    let key = self.scanner.read_string()?;
                    let value = self.member_value()?;
                    object.put(key, value);
                }
                Token::RightBrace => {
                    if !separators.close() {
                        return Err(self.unexpected());
                    }
                    self.scanner.advance();
                    break;
                }
                Token::Eof => return Err(SyntaxError::UnterminatedObject),
                _ => return Err(self.unexpected()),
            }
        }

        self.leave();
        Ok(object)
    }

    /// Parses `: value` after an object key.
    fn member_value(&mut self) -> Result<Value, SyntaxError> {
        self.scanner.skip_whitespace();
        match self.scanner.current_token() {
            Token::Colon => {
                self.scanner.advance();
            }
            Token::Eof => return Err(SyntaxError::UnterminatedObject),
            _ => return Err(SyntaxError::ExpectedColon),
        }

        self.scanner.skip_whitespace();
        match self.scanner.current_token() {
            Token::Eof => Err(SyntaxError::UnterminatedObject),
            token if token.starts_value() => self.value(),
            _ => Err(self.unexpected()),
        }
    }

    fn array(&mut self) -> Result<Array, SyntaxError> {
        debug_assert_eq!(self.scanner.current_char(), Some(b'['));
        self.enter()?;
        self.scanner.advance();

        let mut array = Array::new();
        let mut separators = Separators::new(self.options.strict_commas);
        loop {
            self.scanner.skip_whitespace();
            match self.scanner.current_token() {
                Token::Comma => {
                    if !separators.comma() {
                        return Err(self.unexpected());
                    }
                    self.scanner.advance();
                }
                Token::RightBracket => {
                    if !separators.close() {
                        return Err(self.unexpected());
                    }
                    self.scanner.advance();
                    break;
                }
                Token::Eof => return Err(SyntaxError::UnterminatedArray),
                token if token.starts_value() => {
                    if !separators.member() {
                        return Err(self.unexpected());
                    }
                    array.append(self.value()?);
                }
                _ => return Err(self.unexpected()),
            }
        }

        self.leave();
        Ok(array)
    }

    fn enter(&mut self) -> Result<(), SyntaxError> {
        if let Some(max) = self.options.max_nesting_depth {
            if self.depth >= max {
                return Err(SyntaxError::NestingTooDeep(max));
            }
        }
        self.depth += 1;
        trace!("depth {} at offset {}", self.depth, self.scanner.pos());
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
        trace!("depth {} at offset {}", self.depth, self.scanner.pos());
    }

    fn unexpected(&self) -> SyntaxError {
        match self.scanner.current_char() {
            Some(b) => SyntaxError::UnexpectedCharacter(b),
            None => SyntaxError::UnexpectedEndOfInput,
        }
    }
}

/// Comma bookkeeping for one object or array.
///
/// In lenient mode every transition is accepted. In strict mode members must
/// be separated by exactly one comma with none before the first or after the
/// last.
#[derive(Debug)]
struct Separators {
    strict: bool,
    state: SeparatorState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeparatorState {
    Open,
    AfterMember,
    AfterComma,
}

impl Separators {
    fn new(strict: bool) -> Self {
        Self {
            strict,
            state: SeparatorState::Open,
        }
    }

    fn comma(&mut self) -> bool {
        let ok = self.state == SeparatorState::AfterMember;
        self.state = SeparatorState::AfterComma;
        ok || !self.strict
    }

    fn member(&mut self) -> bool {
        let ok = self.state != SeparatorState::AfterMember;
        self.state = SeparatorState::AfterMember;
        ok || !self.strict
    }

    fn close(&self) -> bool {
        self.state != SeparatorState::AfterComma || !self.strict
    }
}

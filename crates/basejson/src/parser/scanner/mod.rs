//! Scanner: the byte cursor the parser drives.
//!
//! What it does
//! - Owns a read-only view of the input, the cursor `pos`, the `lookahead`
//!   offset that marks the end of a scanned-but-unconsumed number, the
//!   classification of the byte under the cursor, and the scratch buffer that
//!   string literals are copied into.
//! - Classifies bytes into [`Token`]s through a fixed 256-entry table.
//!
//! Invariants
//! - `pos <= text.len()`. Moving past the last byte is a no-op.
//! - End of input is reported out of band (`None` / [`Token::Eof`]); no byte
//!   value is reserved for it, so every byte may appear inside a string.
//! - `lookahead` is only meaningful between [`Scanner::scan_number`] and
//!   [`Scanner::commit_number`].
//!
//! The scanner does not decide grammar. The parser asks for the current token
//! and chooses which lexer to run.

mod strings;

use alloc::vec::Vec;

use super::{
    error::{ParserError, SyntaxError},
    numbers::{NumberLexeme, lex_number},
};

/// Classification of the byte under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Colon,
    Space,
    Tab,
    CarriageReturn,
    LineFeed,
    /// `n`, the first byte of `null`
    Null,
    /// `t`, the first byte of `true`
    True,
    /// `f`, the first byte of `false`
    False,
    /// `-` or an ASCII digit
    DigitStart,
    DoubleQuote,
    SingleQuote,
    Eof,
    Unknown,
}

static TOKEN_TABLE: [Token; 256] = build_token_table();

const fn build_token_table() -> [Token; 256] {
    let mut table = [Token::Unknown; 256];
    table[b'{' as usize] = Token::LeftBrace;
    table[b'}' as usize] = Token::RightBrace;
    table[b'[' as usize] = Token::LeftBracket;
    table[b']' as usize] = Token::RightBracket;
    table[b',' as usize] = Token::Comma;
    table[b':' as usize] = Token::Colon;
    table[b' ' as usize] = Token::Space;
    table[b'\t' as usize] = Token::Tab;
    table[b'\r' as usize] = Token::CarriageReturn;
    table[b'\n' as usize] = Token::LineFeed;
    table[b'n' as usize] = Token::Null;
    table[b't' as usize] = Token::True;
    table[b'f' as usize] = Token::False;
    table[b'-' as usize] = Token::DigitStart;
    table[b'"' as usize] = Token::DoubleQuote;
    table[b'\'' as usize] = Token::SingleQuote;

    let mut digit = b'0';
    while digit <= b'9' {
        table[digit as usize] = Token::DigitStart;
        digit += 1;
    }
    table
}

impl Token {
    /// Classifies one byte, or end of input for `None`.
    #[inline]
    pub(crate) fn classify(byte: Option<u8>) -> Self {
        match byte {
            Some(b) => TOKEN_TABLE[usize::from(b)],
            None => Token::Eof,
        }
    }

    #[inline]
    pub(crate) fn is_whitespace(self) -> bool {
        matches!(
            self,
            Token::Space | Token::Tab | Token::CarriageReturn | Token::LineFeed
        )
    }

    /// Whether a value can begin with this token.
    #[inline]
    pub(crate) fn starts_value(self) -> bool {
        matches!(
            self,
            Token::LeftBrace
                | Token::LeftBracket
                | Token::DoubleQuote
                | Token::DigitStart
                | Token::Null
                | Token::True
                | Token::False
        )
    }
}

#[derive(Debug)]
pub(crate) struct Scanner<'src> {
    text: &'src [u8],
    pos: usize,
    lookahead: usize,
    token: Token,
    scratch: Vec<u8>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over `text`, positioned on the first non-whitespace
    /// byte with its token already classified.
    pub(crate) fn new(text: &'src [u8]) -> Self {
        let mut scanner = Self {
            text,
            pos: 0,
            lookahead: 0,
            token: Token::Eof,
            scratch: Vec::new(),
        };
        scanner.skip_whitespace();
        scanner.current_token();
        scanner
    }

    #[inline]
    pub(crate) fn text(&self) -> &'src [u8] {
        self.text
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[cfg(test)]
    pub(crate) fn lookahead(&self) -> usize {
        self.lookahead
    }

    /// The token produced by the most recent [`current_token`] call.
    ///
    /// [`current_token`]: Scanner::current_token
    #[inline]
    pub(crate) fn token(&self) -> Token {
        self.token
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    #[inline]
    pub(crate) fn char_at(&self, offset: usize) -> Option<u8> {
        self.text.get(offset).copied()
    }

    #[inline]
    pub(crate) fn current_char(&self) -> Option<u8> {
        self.char_at(self.pos)
    }

    /// Moves one byte forward and returns the byte now under the cursor.
    #[inline]
    pub(crate) fn advance(&mut self) -> Option<u8> {
        if self.pos < self.text.len() {
            self.pos += 1;
        }
        self.current_char()
    }

    /// Classifies the byte under the cursor and remembers the result.
    #[inline]
    pub(crate) fn current_token(&mut self) -> Token {
        self.token = Token::classify(self.current_char());
        self.token
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while Token::classify(self.current_char()).is_whitespace() {
            self.advance();
        }
    }

    /// Consumes `expected` byte for byte. On a mismatch the cursor is left on
    /// the offending byte.
    pub(crate) fn consume_literal(
        &mut self,
        expected: &'static str,
    ) -> Result<(), SyntaxError> {
        for &b in expected.as_bytes() {
            if self.current_char() != Some(b) {
                return Err(SyntaxError::InvalidLiteral(expected));
            }
            self.advance();
        }
        Ok(())
    }

    /// Wraps `source` with the cursor position and the surrounding text.
    pub(crate) fn error(&self, source: SyntaxError) -> ParserError {
        ParserError::at(source, self.text, self.pos)
    }

    /// Scans the number starting at the cursor without consuming it; the end
    /// of its digits is recorded as the lookahead.
    pub(crate) fn scan_number(&mut self) -> Result<NumberLexeme, SyntaxError> {
        let lexeme = lex_number(self.text, self.pos)?;
        self.lookahead = lexeme.end();
        Ok(lexeme)
    }

    /// Moves the cursor past a number returned by [`scan_number`], including
    /// any type suffix.
    ///
    /// [`scan_number`]: Scanner::scan_number
    pub(crate) fn commit_number(&mut self, lexeme: &NumberLexeme) {
        debug_assert_eq!(lexeme.start(), self.pos);
        debug_assert_eq!(lexeme.end(), self.lookahead);
        self.pos = lexeme.consumed_end().min(self.text.len());
        self.lookahead = self.pos;
    }
}

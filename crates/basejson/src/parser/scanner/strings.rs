//! String literal lexing.
//!
//! Content is copied byte for byte into the scanner's scratch buffer. Escape
//! sequences are kept as written: a backslash and the byte after it are both
//! copied, and the pair never ends the literal.

use alloc::string::String;

use super::Scanner;
use crate::parser::error::SyntaxError;

impl Scanner<'_> {
    /// Reads a string literal with the cursor on its opening `"`.
    ///
    /// Returns the raw content between the quotes and leaves the cursor one
    /// byte past the closing quote. Running out of text before the closing
    /// quote is an [`UnterminatedString`] error with the cursor at the end of
    /// the text. Content that is not UTF-8 is an [`InvalidUtf8`] error with
    /// the cursor on the first byte of the bad sequence.
    ///
    /// [`UnterminatedString`]: SyntaxError::UnterminatedString
    /// [`InvalidUtf8`]: SyntaxError::InvalidUtf8
    pub(crate) fn read_string(&mut self) -> Result<String, SyntaxError> {
        debug_assert_eq!(self.current_char(), Some(b'"'));
        let content_start = self.pos + 1;
        self.scratch.clear();

        loop {
            let Some(b) = self.advance() else {
                return Err(SyntaxError::UnterminatedString);
            };
            match b {
                b'"' => break,
                b'\\' => {
                    self.scratch.push(b'\\');
                    let Some(escaped) = self.advance() else {
                        return Err(SyntaxError::UnterminatedString);
                    };
                    self.scratch.push(escaped);
                }
                b => self.scratch.push(b),
            }
        }

        // Content bytes are copied one for one, so scratch offsets map
        // straight back onto the input.
        match core::str::from_utf8(&self.scratch) {
            Ok(content) => {
                let content = String::from(content);
                self.advance();
                Ok(content)
            }
            Err(err) => {
                self.pos = content_start + err.valid_up_to();
                Err(SyntaxError::InvalidUtf8)
            }
        }
    }
}

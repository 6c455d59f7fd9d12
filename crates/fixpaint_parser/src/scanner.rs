//! Character cursor shared by the parsers

use fixpaint_core::Fixed;

use crate::error::{ParseError, Result};

/// Cursor over a string with a one-character lookahead
///
/// `current` is the character under the cursor, `None` at the end.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    text: &'a str,
    /// Byte offset of `current`
    position: usize,
    current: Option<char>,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            position: 0,
            current: text.chars().next(),
        }
    }

    pub fn current(&self) -> Option<char> {
        self.current
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Step past the current character and return the new one
    pub fn read(&mut self) -> Option<char> {
        if let Some(c) = self.current {
            self.position += c.len_utf8();
            self.current = self.text[self.position..].chars().next();
        }
        self.current
    }

    pub fn skip_spaces(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\r' | '\n')) {
            self.read();
        }
    }

    /// Skip spaces, one optional `sep`, then spaces again
    pub fn skip_sep_spaces(&mut self, sep: char) {
        self.skip_spaces();
        if self.current == Some(sep) {
            self.read();
            self.skip_spaces();
        }
    }

    pub fn skip_comma_spaces(&mut self) {
        self.skip_sep_spaces(',');
    }

    /// Consume `c` or fail
    pub fn expect(&mut self, c: char, expected: &'static str) -> Result<()> {
        match self.current {
            Some(found) if found == c => {
                self.read();
                Ok(())
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Consume every character of `word` or fail
    pub fn expect_word(&mut self, word: &'static str) -> Result<()> {
        for c in word.chars() {
            self.expect(c, word)?;
        }
        Ok(())
    }

    /// Error for the current character, or for the end of input
    pub fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.current {
            Some(found) => ParseError::UnexpectedChar {
                found,
                position: self.position,
                expected,
            },
            None => ParseError::UnexpectedEnd {
                position: self.position,
                expected,
            },
        }
    }

    fn skip_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.current, Some('0'..='9')) {
            self.read();
            count += 1;
        }
        count
    }

    /// Parse `[+-]digits[.digits][(e|E)[+-]digits]`
    ///
    /// At least one mantissa digit is required on either side of the point.
    pub fn parse_number(&mut self) -> Result<Fixed> {
        let start = self.position;
        if matches!(self.current, Some('+' | '-')) {
            self.read();
        }

        let mut digits = self.skip_digits();
        if self.current == Some('.') {
            self.read();
            digits += self.skip_digits();
        }
        if digits == 0 {
            return Err(self.unexpected("number"));
        }

        if matches!(self.current, Some('e' | 'E')) {
            self.read();
            if matches!(self.current, Some('+' | '-')) {
                self.read();
            }
            if self.skip_digits() == 0 {
                return Err(self.unexpected("exponent digits"));
            }
        }

        let literal = &self.text[start..self.position];
        literal.parse::<Fixed>().map_err(|_| ParseError::InvalidNumber {
            text: literal.to_string(),
            position: start,
        })
    }
}

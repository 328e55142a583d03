//! JSON lexer/tokenizer.
//!
//! Walks the input bytes, skipping insignificant whitespace, and produces
//! tokens for the parser. The lexer also owns position tracking: a 1-based
//! line counter (bumped on every newline consumed) and the start of the most
//! recent token, so that syntax errors can quote the remaining input from the
//! exact point of failure.
//!
//! Errors never consume the offending byte. A literal that stops matching at
//! `o` in `falsoa` therefore reports `oa`.

use super::limits::Limits;
use crate::error::{Error, JsonResult};

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// Null literal
    Null,
    /// True literal
    True,
    /// False literal
    False,
    /// String value (unescaped)
    String(String),
    /// Number value
    Number(f64),
    /// End of input
    Eof,
}

/// A position in the input together with its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    /// Byte offset
    pub pos: usize,
    /// 1-based line
    pub line: usize,
}

/// JSON lexer that tokenizes input.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    token: Mark,
    limits: Limits,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str, limits: Limits) -> JsonResult<Self> {
        if input.len() > limits.max_input_size {
            return Err(Error::InputTooLarge {
                size: input.len(),
                limit: limits.max_input_size,
            });
        }

        Ok(Self {
            input,
            pos: 0,
            line: 1,
            token: Mark { pos: 0, line: 1 },
            limits,
        })
    }

    /// Get the current byte offset in the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current 1-based line number.
    pub fn current_line(&self) -> usize {
        self.line
    }

    /// Where the most recently returned token starts.
    pub fn token_mark(&self) -> Mark {
        self.token
    }

    /// Peek at the current byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume and return the current byte.
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if let Some(b) = b {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
            }
        }
        b
    }

    /// Diagnostic slice of the input from the current position.
    pub fn remaining_context(&self, max_chars: usize) -> String {
        self.context_at(self.pos, max_chars)
    }

    /// Text from `pos` to the end of its line, without control characters,
    /// truncated to `max_chars` characters.
    fn context_at(&self, pos: usize, max_chars: usize) -> String {
        self.input
            .get(pos..)
            .unwrap_or_default()
            .chars()
            .take_while(|&c| c != '\n')
            .filter(|&c| c >= ' ')
            .take(max_chars)
            .collect()
    }

    fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
        }
    }

    /// Syntax error at `mark`.
    pub fn error_at(&self, mark: Mark) -> Error {
        Error::syntax(
            mark.line,
            self.context_at(mark.pos, self.limits.max_context_chars),
        )
    }

    /// Syntax error at the current position.
    pub fn syntax_error(&self) -> Error {
        self.error_at(self.mark())
    }

    /// Syntax error at the start of the most recent token.
    pub fn token_error(&self) -> Error {
        self.error_at(self.token)
    }

    /// Skip whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.advance();
        }
    }

    /// Read the next token from the input.
    pub fn next_token(&mut self) -> JsonResult<Token> {
        self.skip_whitespace();
        self.token = self.mark();

        match self.peek() {
            None => Ok(Token::Eof),
            Some(b'{') => self.single(Token::LeftBrace),
            Some(b'}') => self.single(Token::RightBrace),
            Some(b'[') => self.single(Token::LeftBracket),
            Some(b']') => self.single(Token::RightBracket),
            Some(b':') => self.single(Token::Colon),
            Some(b',') => self.single(Token::Comma),
            Some(b'"') => self.read_string(),
            Some(b'-' | b'0'..=b'9') => self.read_number(),
            Some(b't') => self.read_true(),
            Some(b'f') => self.read_false(),
            Some(b'n') => self.read_null(),
            Some(_) => Err(self.syntax_error()),
        }
    }

    fn single(&mut self, token: Token) -> JsonResult<Token> {
        self.advance();
        Ok(token)
    }

    /// Read a string token, handling escape sequences.
    fn read_string(&mut self) -> JsonResult<Token> {
        // Consume opening quote
        self.advance();

        let mut result = String::new();

        loop {
            // Copy the run of plain characters in one go. The run always ends
            // on an ASCII byte or at end of input, so both ends are char
            // boundaries.
            let run_start = self.pos;
            while let Some(b) = self.peek() {
                if b == b'"' || b == b'\\' || b < 0x20 {
                    break;
                }
                self.pos += 1;
            }
            result.push_str(self.input.get(run_start..self.pos).unwrap_or_default());
            self.check_string_length(&result)?;

            match self.peek() {
                None => return Err(self.syntax_error()),
                Some(b'"') => {
                    self.advance();
                    break;
                }
                Some(b'\\') => {
                    let ch = self.read_escape_sequence()?;
                    result.push(ch);
                }
                // Raw control character, including a line break
                Some(_) => return Err(self.syntax_error()),
            }
        }

        self.check_string_length(&result)?;
        Ok(Token::String(result))
    }

    fn check_string_length(&self, s: &str) -> JsonResult<()> {
        if s.len() > self.limits.max_string_length {
            return Err(Error::StringTooLong {
                line: self.token.line,
                limit: self.limits.max_string_length,
            });
        }
        Ok(())
    }

    /// Read an escape sequence starting at the backslash.
    fn read_escape_sequence(&mut self) -> JsonResult<char> {
        let start = self.mark();
        self.advance();

        let ch = match self.peek() {
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\x08',
            Some(b'f') => '\x0C',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => {
                self.advance();
                return self.read_unicode_escape(start);
            }
            _ => return Err(self.syntax_error()),
        };
        self.advance();
        Ok(ch)
    }

    /// Read the hex part of a `\uXXXX` escape, pairing surrogates.
    fn read_unicode_escape(&mut self, start: Mark) -> JsonResult<char> {
        let unit = self.read_hex4()?;

        match unit {
            0xD800..=0xDBFF => {
                // High surrogate: a low surrogate escape must follow
                let low_start = self.mark();
                if self.peek() != Some(b'\\') {
                    return Err(self.syntax_error());
                }
                self.advance();
                if self.peek() != Some(b'u') {
                    return Err(self.syntax_error());
                }
                self.advance();

                let low = self.read_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.error_at(low_start));
                }

                let combined =
                    0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                char::from_u32(combined).ok_or_else(|| self.error_at(start))
            }
            // Low surrogate without a preceding high surrogate
            0xDC00..=0xDFFF => Err(self.error_at(start)),
            _ => char::from_u32(u32::from(unit)).ok_or_else(|| self.error_at(start)),
        }
    }

    /// Read 4 hex digits and return the value.
    fn read_hex4(&mut self) -> JsonResult<u16> {
        let mut value: u16 = 0;
        for _ in 0..4 {
            let digit = match self.peek() {
                Some(b @ b'0'..=b'9') => b - b'0',
                Some(b @ b'a'..=b'f') => b - b'a' + 10,
                Some(b @ b'A'..=b'F') => b - b'A' + 10,
                _ => return Err(self.syntax_error()),
            };
            self.advance();
            value = (value << 4) | u16::from(digit);
        }
        Ok(value)
    }

    /// Read a number token.
    fn read_number(&mut self) -> JsonResult<Token> {
        let start = self.pos;

        // Optional minus sign
        if self.peek() == Some(b'-') {
            self.advance();
        }

        // Integer part
        match self.peek() {
            Some(b'0') => {
                self.advance();
                // After leading zero, must not have more digits
                if let Some(b'0'..=b'9') = self.peek() {
                    return Err(self.syntax_error());
                }
            }
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(self.syntax_error()),
        }

        // Fractional part
        if self.peek() == Some(b'.') {
            self.advance();
            self.expect_digits()?;
        }

        // Exponent
        if let Some(b'e' | b'E') = self.peek() {
            self.advance();
            if let Some(b'+' | b'-') = self.peek() {
                self.advance();
            }
            self.expect_digits()?;
        }

        let text = self.input.get(start..self.pos).unwrap_or_default();
        let value: f64 = text.parse().map_err(|_| self.token_error())?;

        // Literals too large for a double
        if !value.is_finite() {
            return Err(self.token_error());
        }

        Ok(Token::Number(value))
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }
    }

    /// At least one digit.
    fn expect_digits(&mut self) -> JsonResult<()> {
        match self.peek() {
            Some(b'0'..=b'9') => {
                self.skip_digits();
                Ok(())
            }
            _ => Err(self.syntax_error()),
        }
    }

    /// Read the 'true' literal.
    fn read_true(&mut self) -> JsonResult<Token> {
        self.expect_bytes(b"true")?;
        Ok(Token::True)
    }

    /// Read the 'false' literal.
    fn read_false(&mut self) -> JsonResult<Token> {
        self.expect_bytes(b"false")?;
        Ok(Token::False)
    }

    /// Read the 'null' literal.
    fn read_null(&mut self) -> JsonResult<Token> {
        self.expect_bytes(b"null")?;
        Ok(Token::Null)
    }

    /// Expect specific bytes at the current position.
    fn expect_bytes(&mut self, expected: &[u8]) -> JsonResult<()> {
        for &b in expected {
            if self.peek() != Some(b) {
                return Err(self.syntax_error());
            }
            self.advance();
        }
        Ok(())
    }
}

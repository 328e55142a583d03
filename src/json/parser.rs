//! Recursive descent JSON parser.
//!
//! Tokens are pulled from the [`Lexer`] on demand, so a value is complete as
//! soon as its last token is read and nothing after it has been looked at.
//! That is what lets [`parse_prefix`] hand back the unparsed remainder.
//!
//! Recursion is bounded by [`Limits::max_nesting_depth`]; deeper input fails
//! with [`Error::NestingTooDeep`] instead of exhausting the stack.

use tracing::{debug, trace};

use super::lexer::{Lexer, Token};
use super::limits::Limits;
use super::types::{Map, Value};
use crate::error::{Error, JsonResult};

/// JSON parser over a single input string.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    limits: Limits,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str, limits: Limits) -> JsonResult<Self> {
        Ok(Self {
            lexer: Lexer::new(input, limits)?,
            limits,
            depth: 0,
        })
    }

    /// Parse the whole input as exactly one value.
    ///
    /// Anything but whitespace after the value is a syntax error.
    pub fn parse(&mut self) -> JsonResult<Value> {
        let value = self.parse_value()?;

        // Ensure no trailing content
        self.lexer.skip_whitespace();
        if self.lexer.peek().is_some() {
            return Err(self.lexer.syntax_error());
        }

        Ok(value)
    }

    /// Parse the next value and stop right after it.
    pub fn parse_value(&mut self) -> JsonResult<Value> {
        let token = self.lexer.next_token()?;
        self.parse_token(token)
    }

    /// Byte offset just past the last consumed token.
    pub fn position(&self) -> usize {
        self.lexer.position()
    }

    /// Build the value that starts with `token`.
    fn parse_token(&mut self, token: Token) -> JsonResult<Value> {
        match token {
            Token::Null => Ok(Value::Null),
            Token::True => Ok(Value::Bool(true)),
            Token::False => Ok(Value::Bool(false)),
            Token::String(s) => Ok(Value::String(s)),
            Token::Number(n) => Ok(Value::Number(n)),
            Token::LeftBrace => self.parse_object(),
            Token::LeftBracket => self.parse_array(),
            Token::RightBrace
            | Token::RightBracket
            | Token::Colon
            | Token::Comma
            | Token::Eof => Err(self.lexer.token_error()),
        }
    }

    /// Enter a container, checking nesting depth.
    fn enter(&mut self) -> JsonResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(Error::NestingTooDeep {
                line: self.lexer.token_mark().line,
                limit: self.limits.max_nesting_depth,
            });
        }
        Ok(())
    }

    /// Parse a JSON object; the opening brace has been consumed.
    fn parse_object(&mut self) -> JsonResult<Value> {
        self.enter()?;

        let mut map = Map::new();
        let mut token = self.lexer.next_token()?;

        // Empty object
        if token == Token::RightBrace {
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            // Expect string key
            let key = match token {
                Token::String(s) => s,
                _ => return Err(self.lexer.token_error()),
            };

            // Expect colon
            if self.lexer.next_token()? != Token::Colon {
                return Err(self.lexer.token_error());
            }

            // Last occurrence of a duplicate key wins
            let value = self.parse_value()?;
            map.insert(key, value);

            if map.len() > self.limits.max_object_fields {
                return Err(Error::TooManyFields {
                    line: self.lexer.token_mark().line,
                    limit: self.limits.max_object_fields,
                });
            }

            // Expect comma or closing brace
            match self.lexer.next_token()? {
                Token::Comma => token = self.lexer.next_token()?,
                Token::RightBrace => break,
                _ => return Err(self.lexer.token_error()),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    /// Parse a JSON array; the opening bracket has been consumed.
    fn parse_array(&mut self) -> JsonResult<Value> {
        self.enter()?;

        let mut arr = Vec::new();
        let mut token = self.lexer.next_token()?;

        // Empty array
        if token == Token::RightBracket {
            self.depth -= 1;
            return Ok(Value::Array(arr));
        }

        loop {
            // A trailing comma leaves `]` here, which parse_token rejects
            let value = self.parse_token(token)?;
            arr.push(value);

            if arr.len() > self.limits.max_array_length {
                return Err(Error::ArrayTooLong {
                    line: self.lexer.token_mark().line,
                    limit: self.limits.max_array_length,
                });
            }

            // Expect comma or closing bracket
            match self.lexer.next_token()? {
                Token::Comma => token = self.lexer.next_token()?,
                Token::RightBracket => break,
                _ => return Err(self.lexer.token_error()),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(arr))
    }
}

/// Parse a JSON document with the default limits.
///
/// ```
/// use picojson::json::{parse, Value};
///
/// assert_eq!(parse("[1, true]").unwrap(), Value::Array(vec![1.into(), true.into()]));
/// assert_eq!(
///     parse("falsoa").unwrap_err().to_string(),
///     "syntax error at line 1 near: oa"
/// );
/// ```
pub fn parse(input: &str) -> JsonResult<Value> {
    parse_with_limits(input, Limits::standard())
}

/// Parse a JSON document with custom limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> JsonResult<Value> {
    let result = Parser::new(input, limits).and_then(|mut parser| parser.parse());
    match &result {
        Ok(value) => trace!(kind = value.type_name(), bytes = input.len(), "parsed JSON"),
        Err(err) => debug!(error = %err, bytes = input.len(), "rejected JSON"),
    }
    result
}

/// Parse one value from the start of `input` and return it with the byte
/// offset just past it. Whatever follows is left unread.
///
/// ```
/// use picojson::json::{parse_prefix, Value};
///
/// let (value, end) = parse_prefix("[1] tail").unwrap();
/// assert_eq!(value, Value::Array(vec![1.into()]));
/// assert_eq!(end, 3);
/// ```
pub fn parse_prefix(input: &str) -> JsonResult<(Value, usize)> {
    let mut parser = Parser::new(input, Limits::standard())?;
    let value = parser.parse_value().inspect_err(|err| {
        debug!(error = %err, bytes = input.len(), "rejected JSON prefix");
    })?;
    Ok((value, parser.position()))
}

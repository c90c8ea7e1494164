//! Recursive-descent value parser.
//!
//! ```text
//! value  := object | array | string | number | "true" | "false" | "null"
//! object := '{' [ member (',' member)* ] '}'
//! member := string ':' value
//! array  := '[' [ value (',' value)* ] ']'
//! ```
//!
//! [`Parser`] walks this grammar one container entry at a time so the binder
//! can steer it with a target descriptor; it also builds untyped [`Value`]
//! trees and skips values nobody asked for.

use jsonbind_value::{Map, Number, Value};

use crate::error::{JsonError, JsonErrorKind, Result};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::options::ParseOptions;
use crate::source::Source;

/// Parse state for one document: lexer position, nesting depth and options.
pub struct Parser<S> {
    lexer: Lexer<S>,
    options: ParseOptions,
    depth: usize,
}

impl<S: Source> Parser<S> {
    /// Create a parser reading from `source`.
    pub fn new(source: S, options: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(source),
            options,
            depth: 0,
        }
    }

    /// The options this parser was created with.
    pub const fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Reads the next token.
    #[inline]
    pub fn next_token(&mut self) -> Result<Token> {
        self.lexer.next_token()
    }

    /// Text of the last string or number token.
    #[inline]
    pub fn text(&self) -> &str {
        self.lexer.text()
    }

    /// Takes the text of the last string or number token.
    #[inline]
    pub fn take_text(&mut self) -> String {
        self.lexer.take_text()
    }

    /// Enters an array or object opened at `offset`.
    pub fn enter(&mut self, offset: usize) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(JsonError::new(
                JsonErrorKind::NestingTooDeep {
                    max_depth: self.options.max_depth,
                },
                offset,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves the innermost array or object.
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Advances to the next member of an object whose `{` was just read.
    ///
    /// Returns the key token, with the key readable through [`Parser::text`]
    /// and the `:` already consumed, or `None` once the closing `}` is read.
    /// `first` is true for the first call after the `{`.
    pub fn next_member(&mut self, first: bool) -> Result<Option<Token>> {
        let mut token = self.next_token()?;
        match token.kind {
            TokenKind::EndObject => return Ok(None),
            TokenKind::Comma if !first => token = self.next_token()?,
            _ if first => {}
            _ => return Err(token.unexpected()),
        }
        if token.kind != TokenKind::String {
            return Err(token.unexpected());
        }
        let colon = self.next_token()?;
        if colon.kind != TokenKind::Colon {
            return Err(colon.unexpected());
        }
        Ok(Some(token))
    }

    /// Advances to the next element of an array whose `[` was just read.
    ///
    /// Returns the first token of the element, or `None` once the closing `]`
    /// is read. `first` is true for the first call after the `[`.
    pub fn next_element(&mut self, first: bool) -> Result<Option<Token>> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::EndArray => Ok(None),
            TokenKind::Comma if !first => self.value_token().map(Some),
            _ if first => Ok(Some(token)),
            _ => Err(token.unexpected()),
        }
    }

    /// Reads a token that must start a value.
    pub fn value_token(&mut self) -> Result<Token> {
        let token = self.next_token()?;
        if token.kind.starts_value() {
            Ok(token)
        } else {
            Err(token.unexpected())
        }
    }

    /// Builds an untyped value starting at `token`.
    pub fn parse_value(&mut self, token: Token) -> Result<Value> {
        let value = match token.kind {
            TokenKind::Null => Value::Null,
            TokenKind::True => Value::Bool(true),
            TokenKind::False => Value::Bool(false),
            TokenKind::Number => Value::Number(self.number(token)?),
            TokenKind::String => Value::String(self.take_text()),
            TokenKind::BeginArray => {
                self.enter(token.offset)?;
                let mut items = Vec::new();
                let mut first = true;
                while let Some(item) = self.next_element(first)? {
                    first = false;
                    items.push(self.parse_value(item)?);
                }
                self.leave();
                Value::Array(items)
            }
            TokenKind::BeginObject => {
                self.enter(token.offset)?;
                let mut members = Map::new();
                let mut first = true;
                while self.next_member(first)?.is_some() {
                    first = false;
                    let key = self.take_text();
                    let value = self.value_token()?;
                    members.insert(key, self.parse_value(value)?);
                }
                self.leave();
                Value::Object(members)
            }
            _ => return Err(token.unexpected()),
        };
        Ok(value)
    }

    /// Takes the text of the number token `token` as a [`Number`].
    pub fn number(&mut self, token: Token) -> Result<Number> {
        Number::try_from(self.take_text())
            .map_err(|_| JsonError::new(JsonErrorKind::UnexpectedCharacter, token.offset))
    }

    /// Consumes the value starting at `token` without building anything.
    pub fn skip_value(&mut self, token: Token) -> Result<()> {
        match token.kind {
            TokenKind::Null
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Number
            | TokenKind::String => Ok(()),
            TokenKind::BeginArray => {
                self.enter(token.offset)?;
                let mut first = true;
                while let Some(item) = self.next_element(first)? {
                    first = false;
                    self.skip_value(item)?;
                }
                self.leave();
                Ok(())
            }
            TokenKind::BeginObject => {
                self.enter(token.offset)?;
                let mut first = true;
                while self.next_member(first)?.is_some() {
                    first = false;
                    let value = self.value_token()?;
                    self.skip_value(value)?;
                }
                self.leave();
                Ok(())
            }
            _ => Err(token.unexpected()),
        }
    }

    /// Checks that nothing but whitespace follows the root value.
    pub fn finish(&mut self) -> Result<()> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::EndOfInput => Ok(()),
            _ => Err(token.unexpected()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SliceSource;

    fn parse(input: &str) -> Result<Value> {
        parse_with(input, ParseOptions::default())
    }

    fn parse_with(input: &str, options: ParseOptions) -> Result<Value> {
        let mut parser = Parser::new(SliceSource::new(input.as_bytes()), options);
        let token = parser.value_token()?;
        let value = parser.parse_value(token)?;
        parser.finish()?;
        Ok(value)
    }

    #[test]
    fn builds_nested_values() {
        let value = parse(r#"{"a": [1, "x", null], "b": {"c": false}}"#).unwrap();
        assert_eq!(value["a"][0].as_i64(), Some(1));
        assert_eq!(value["a"][1].as_str(), Some("x"));
        assert!(value["a"][2].is_null());
        assert_eq!(value["b"]["c"], Value::Bool(false));
    }

    #[test]
    fn duplicate_keys_keep_the_last_value_in_the_first_position() {
        let value = parse(r#"{"k": 1, "other": 2, "k": 3}"#).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object.get_index(0).map(|(k, v)| (k.as_str(), v.as_i64())), Some(("k", Some(3))));
    }

    #[test]
    fn structural_errors() {
        let cases = [
            ("[1,]", "Unexpected character at 3"),
            ("[1 2]", "Unexpected character at 3"),
            ("{\"a\" 1}", "Unexpected character at 5"),
            ("{\"a\":1,}", "Unexpected character at 7"),
            ("{1:2}", "Unexpected character at 1"),
            ("[", "Unexpected end of input at 1"),
            ("", "Unexpected end of input at 0"),
            ("1 2", "Unexpected character at 2"),
            ("]", "Unexpected character at 0"),
        ];
        for (input, expected) in cases {
            assert_eq!(parse(input).unwrap_err().to_string(), expected, "{input:?}");
        }
    }

    #[test]
    fn depth_is_limited() {
        let options = ParseOptions::default().max_depth(3);
        assert!(parse_with("[[[1]]]", options).is_ok());
        let err = parse_with("[[[[1]]]]", options).unwrap_err();
        assert_eq!(err.to_string(), "Nesting too deep (max 3) at 3");

        let deep = "[".repeat(200) + &"]".repeat(200);
        assert!(matches!(
            parse(&deep).unwrap_err().kind,
            JsonErrorKind::NestingTooDeep { max_depth: 128 }
        ));
    }

    #[test]
    fn skipping_validates() {
        let mut parser = Parser::new(
            SliceSource::new(br#"{"a": [1, {"b": "\q"}]}"#),
            ParseOptions::default(),
        );
        let token = parser.next_token().unwrap();
        let err = parser.skip_value(token).unwrap_err();
        assert_eq!(err.to_string(), "Bad string at 17");
    }
}

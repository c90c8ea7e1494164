//! JSON tokenizer over a forward-only [`Source`].
//!
//! The lexer never rewinds: every byte is read exactly once. String tokens
//! are decoded eagerly (escapes, surrogate pairs, UTF-8 validation) into a
//! reusable buffer, and number tokens are captured as raw text; both stay
//! readable through [`Lexer::text`] until the next string or number token.

use crate::error::{JsonError, JsonErrorKind, Result};
use crate::source::Source;

/// Kind of a JSON token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    BeginObject,
    /// `}`
    EndObject,
    /// `[`
    BeginArray,
    /// `]`
    EndArray,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A string literal; its decoded text is in [`Lexer::text`]
    String,
    /// A number literal; its raw text is in [`Lexer::text`]
    Number,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// No more tokens
    EndOfInput,
}

impl TokenKind {
    /// Returns true if a value can start with this token.
    pub const fn starts_value(self) -> bool {
        matches!(
            self,
            TokenKind::BeginObject
                | TokenKind::BeginArray
                | TokenKind::String
                | TokenKind::Number
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is
    pub kind: TokenKind,
    /// Byte offset of the token's first byte
    pub offset: usize,
}

impl Token {
    /// The error to report when this token is not allowed where it appears.
    pub const fn unexpected(self) -> JsonError {
        let kind = match self.kind {
            TokenKind::EndOfInput => JsonErrorKind::UnexpectedEof,
            _ => JsonErrorKind::UnexpectedCharacter,
        };
        JsonError::new(kind, self.offset)
    }
}

/// Tokenizer over a byte [`Source`].
pub struct Lexer<S> {
    source: S,
    text: String,
}

impl<S: Source> Lexer<S> {
    /// Create a lexer reading from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            text: String::new(),
        }
    }

    /// Offset of the next unread byte.
    pub fn offset(&self) -> usize {
        self.source.offset()
    }

    /// Decoded text of the last string token, or raw text of the last number token.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Takes the text of the last string or number token, leaving the buffer empty.
    #[inline]
    pub fn take_text(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// Reads the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace()?;
        let offset = self.source.offset();
        let Some(b) = self.peek()? else {
            return Ok(Token {
                kind: TokenKind::EndOfInput,
                offset,
            });
        };
        self.source.advance();

        let kind = match b {
            b'{' => TokenKind::BeginObject,
            b'}' => TokenKind::EndObject,
            b'[' => TokenKind::BeginArray,
            b']' => TokenKind::EndArray,
            b':' => TokenKind::Colon,
            b',' => TokenKind::Comma,
            b'"' => {
                self.lex_string()?;
                TokenKind::String
            }
            b'-' | b'0'..=b'9' => {
                self.lex_number(b)?;
                TokenKind::Number
            }
            b't' => {
                self.lex_literal(b"rue")?;
                TokenKind::True
            }
            b'f' => {
                self.lex_literal(b"alse")?;
                TokenKind::False
            }
            b'n' => {
                self.lex_literal(b"ull")?;
                TokenKind::Null
            }
            _ => return Err(JsonError::new(JsonErrorKind::UnexpectedCharacter, offset)),
        };
        Ok(Token { kind, offset })
    }

    #[inline]
    fn peek(&mut self) -> Result<Option<u8>> {
        self.source
            .peek()
            .map_err(|err| JsonError::new(JsonErrorKind::Io(err.to_string()), self.source.offset()))
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek()? {
            self.source.advance();
        }
        Ok(())
    }

    /// Consumes the next byte if there is one.
    #[inline]
    fn bump(&mut self) -> Result<Option<u8>> {
        let b = self.peek()?;
        if b.is_some() {
            self.source.advance();
        }
        Ok(b)
    }

    fn lex_literal(&mut self, rest: &'static [u8]) -> Result<()> {
        for &expected in rest {
            let offset = self.source.offset();
            match self.peek()? {
                Some(b) if b == expected => self.source.advance(),
                Some(_) => return Err(JsonError::new(JsonErrorKind::UnexpectedCharacter, offset)),
                None => return Err(JsonError::new(JsonErrorKind::UnexpectedEof, offset)),
            }
        }
        Ok(())
    }

    // -? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?
    fn lex_number(&mut self, first: u8) -> Result<()> {
        self.text.clear();
        self.text.push(char::from(first));

        let lead = if first == b'-' {
            self.expect_digit()?
        } else {
            first
        };
        if lead != b'0' {
            self.digits()?;
        }

        if self.peek()? == Some(b'.') {
            self.source.advance();
            self.text.push('.');
            self.expect_digit()?;
            self.digits()?;
        }

        if let Some(e @ (b'e' | b'E')) = self.peek()? {
            self.source.advance();
            self.text.push(char::from(e));
            if let Some(sign @ (b'+' | b'-')) = self.peek()? {
                self.source.advance();
                self.text.push(char::from(sign));
            }
            self.expect_digit()?;
            self.digits()?;
        }
        Ok(())
    }

    fn expect_digit(&mut self) -> Result<u8> {
        let offset = self.source.offset();
        match self.peek()? {
            Some(b @ b'0'..=b'9') => {
                self.source.advance();
                self.text.push(char::from(b));
                Ok(b)
            }
            Some(_) => Err(JsonError::new(JsonErrorKind::UnexpectedCharacter, offset)),
            None => Err(JsonError::new(JsonErrorKind::UnexpectedEof, offset)),
        }
    }

    fn digits(&mut self) -> Result<()> {
        while let Some(b @ b'0'..=b'9') = self.peek()? {
            self.source.advance();
            self.text.push(char::from(b));
        }
        Ok(())
    }

    fn lex_string(&mut self) -> Result<()> {
        self.text.clear();
        loop {
            let offset = self.source.offset();
            let Some(b) = self.bump()? else {
                return Err(JsonError::new(JsonErrorKind::BadString, offset));
            };
            match b {
                b'"' => return Ok(()),
                b'\\' => self.lex_escape(offset)?,
                0x00..=0x1F => return Err(JsonError::new(JsonErrorKind::BadString, offset)),
                0x20..=0x7F => self.text.push(char::from(b)),
                _ => self.lex_utf8(b, offset)?,
            }
        }
    }

    /// Decodes the escape whose backslash is at `at`.
    fn lex_escape(&mut self, at: usize) -> Result<()> {
        let bad = || JsonError::new(JsonErrorKind::BadString, at);
        let c = match self.bump()?.ok_or_else(bad)? {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{08}',
            b'f' => '\u{0C}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => {
                let unit = self.hex4(at)?;
                let code = match unit {
                    0xD800..=0xDBFF => {
                        if self.bump()? != Some(b'\\') || self.bump()? != Some(b'u') {
                            return Err(bad());
                        }
                        let low = self.hex4(at)?;
                        if !(0xDC00..=0xDFFF).contains(&low) {
                            return Err(bad());
                        }
                        0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                    }
                    _ => unit,
                };
                // Lone low surrogates are not scalar values.
                char::from_u32(code).ok_or_else(bad)?
            }
            _ => return Err(bad()),
        };
        self.text.push(c);
        Ok(())
    }

    fn hex4(&mut self, at: usize) -> Result<u32> {
        let mut unit = 0;
        for _ in 0..4 {
            let digit = self
                .bump()?
                .and_then(|b| char::from(b).to_digit(16))
                .ok_or(JsonError::new(JsonErrorKind::BadString, at))?;
            unit = unit << 4 | digit;
        }
        Ok(unit)
    }

    /// Validates and appends the multi-byte sequence whose lead byte, at `at`, was just consumed.
    fn lex_utf8(&mut self, lead: u8, at: usize) -> Result<()> {
        let bad = || JsonError::new(JsonErrorKind::BadString, at);
        let len = match lead {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(bad()),
        };
        let mut seq = [lead, 0, 0, 0];
        for slot in &mut seq[1..len] {
            match self.peek()? {
                Some(b @ 0x80..=0xBF) => {
                    self.source.advance();
                    *slot = b;
                }
                _ => return Err(bad()),
            }
        }
        // Rejects overlong forms and encoded surrogates.
        let decoded = std::str::from_utf8(&seq[..len]).map_err(|_| bad())?;
        self.text.push_str(decoded);
        Ok(())
    }
}

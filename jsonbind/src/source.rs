//! Byte sources the lexer reads from.
//!
//! Both sources are forward-only and report offsets relative to the start of
//! the input, so errors point at the same place whether a document is parsed
//! from memory or from a reader.

use std::io::{self, Read};

use crate::options::DEFAULT_READER_BUFFER_CAPACITY;

/// A forward-only stream of bytes.
pub trait Source {
    /// Returns the next byte without consuming it, or `None` at end of input.
    fn peek(&mut self) -> io::Result<Option<u8>>;

    /// Consumes the byte last returned by [`Source::peek`].
    fn advance(&mut self);

    /// Offset of the next byte from the start of the input.
    fn offset(&self) -> usize;
}

/// A source over bytes already in memory.
#[derive(Debug, Clone)]
pub struct SliceSource<'input> {
    input: &'input [u8],
    pos: usize,
}

impl<'input> SliceSource<'input> {
    /// Create a source reading `input` from the start.
    pub const fn new(input: &'input [u8]) -> Self {
        Self { input, pos: 0 }
    }
}

impl Source for SliceSource<'_> {
    #[inline]
    fn peek(&mut self) -> io::Result<Option<u8>> {
        Ok(self.input.get(self.pos).copied())
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    fn offset(&self) -> usize {
        self.pos
    }
}

/// A source pulling bytes from a reader through a fixed-size buffer.
///
/// The buffer is refilled only once every byte in it has been consumed, so
/// memory use stays bounded by its capacity regardless of document size.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    /// The underlying buffer
    buf: Vec<u8>,
    /// How many bytes of `buf` are valid
    filled: usize,
    /// Position of the next byte in `buf`
    pos: usize,
    /// Offset of `buf[0]` from the start of the input
    base: usize,
    /// Whether the reader has reported end of input
    eof: bool,
}

impl<R: Read> ReaderSource<R> {
    /// Create a source with the default buffer capacity (8 KiB).
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_READER_BUFFER_CAPACITY)
    }

    /// Create a source with a specific buffer capacity. Zero is treated as one.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            buf: vec![0; capacity.max(1)],
            filled: 0,
            pos: 0,
            base: 0,
            eof: false,
        }
    }

    /// Consume the source, returning the reader.
    ///
    /// Bytes already buffered but not consumed are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn refill(&mut self) -> io::Result<()> {
        self.base += self.filled;
        self.filled = 0;
        self.pos = 0;
        loop {
            match self.reader.read(&mut self.buf) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.filled = n;
                    return Ok(());
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }
}

impl<R: Read> Source for ReaderSource<R> {
    #[inline]
    fn peek(&mut self) -> io::Result<Option<u8>> {
        if self.pos == self.filled {
            if self.eof {
                return Ok(None);
            }
            self.refill()?;
        }
        Ok(self.buf[..self.filled].get(self.pos).copied())
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    fn offset(&self) -> usize {
        self.base + self.pos
    }
}

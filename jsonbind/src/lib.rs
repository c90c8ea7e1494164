#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use std::io::Read;

/// Trace-level logging macro that forwards to `tracing::trace!` when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

/// Trace-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Debug-level logging macro that forwards to `tracing::debug!` when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Debug-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[allow(unused_imports)]
pub(crate) use debug;
#[allow(unused_imports)]
pub(crate) use trace;

mod binder;
mod coerce;
mod error;
pub mod lexer;
mod options;
pub mod parser;
pub mod source;

pub use error::{JsonError, JsonErrorKind, Result};
pub use lexer::{Lexer, Token, TokenKind};
pub use options::{
    DEFAULT_MAX_DEPTH, DEFAULT_READER_BUFFER_CAPACITY, MemberMatching, ParseOptions,
};
pub use parser::Parser;
pub use source::{ReaderSource, SliceSource, Source};

pub use jsonbind_core::{
    Describe, DescriptorError, DescriptorErrorKind, EnumDef, Kind, StructDef, TypeDescriptor,
    cache, describe, describe_enum, describe_struct,
};
pub use jsonbind_value::{Map, Number, Value};
pub use rust_decimal::Decimal;

/// A JSON deserializer with fixed options.
///
/// The parser holds nothing but its options, so one instance can be shared
/// between threads and reused for any number of calls. All per-call state
/// lives on the stack of the call.
#[derive(Debug, Clone, Default)]
pub struct JsonParser {
    options: ParseOptions,
}

impl JsonParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options.
    pub const fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// The options this parser uses.
    pub const fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Deserialize a `T` from a JSON string.
    pub fn parse<T: Describe>(&self, input: &str) -> Result<T> {
        self.parse_slice(input.as_bytes())
    }

    /// Deserialize a `T` from JSON bytes.
    pub fn parse_slice<T: Describe>(&self, input: &[u8]) -> Result<T> {
        self.parse_source(SliceSource::new(input))
    }

    /// Deserialize a `T` from a reader.
    ///
    /// The reader is consumed once through a buffer of
    /// [`ParseOptions::reader_buffer_capacity`] bytes. Bytes after the root
    /// value must be whitespace; the reader is read to its end to check.
    pub fn parse_reader<T: Describe, R: Read>(&self, reader: R) -> Result<T> {
        self.parse_source(ReaderSource::with_capacity(
            reader,
            self.options.reader_buffer_capacity,
        ))
    }

    /// Deserialize a `T` from any byte source.
    pub fn parse_source<T: Describe, S: Source>(&self, source: S) -> Result<T> {
        let descriptor = describe::<T>().map_err(|err| {
            debug!(error = %err, "cannot bind root type");
            JsonError::new(JsonErrorKind::Descriptor(err), 0)
        })?;
        trace!(type_name = descriptor.type_name, "parsing");

        let mut parser = Parser::new(source, self.options);
        let mut value = T::default();
        let token = parser.next_token()?;
        binder::bind(&mut parser, &mut value, descriptor, token)?;
        parser.finish()?;

        trace!(type_name = descriptor.type_name, "parsed");
        Ok(value)
    }
}

/// Deserialize a value from a JSON string.
///
/// Use [`Value`] as `T` to get an untyped tree.
///
/// ```
/// let scores: Vec<i32> = jsonbind::from_str("[1, 2, 3]").unwrap();
/// assert_eq!(scores, [1, 2, 3]);
/// ```
pub fn from_str<T: Describe>(input: &str) -> Result<T> {
    JsonParser::new().parse(input)
}

/// Deserialize a value from a JSON string with custom options.
pub fn from_str_with_options<T: Describe>(input: &str, options: ParseOptions) -> Result<T> {
    JsonParser::with_options(options).parse(input)
}

/// Deserialize a value from JSON bytes.
pub fn from_slice<T: Describe>(input: &[u8]) -> Result<T> {
    JsonParser::new().parse_slice(input)
}

/// Deserialize a value from JSON bytes with custom options.
pub fn from_slice_with_options<T: Describe>(input: &[u8], options: ParseOptions) -> Result<T> {
    JsonParser::with_options(options).parse_slice(input)
}

/// Deserialize a value from a reader, without reading it all into memory first.
///
/// ```
/// let reader = std::io::Cursor::new(b"{\"a\": true}");
/// let value: jsonbind::Value = jsonbind::from_reader(reader).unwrap();
/// assert_eq!(value["a"].as_bool(), Some(true));
/// ```
pub fn from_reader<T: Describe, R: Read>(reader: R) -> Result<T> {
    JsonParser::new().parse_reader(reader)
}

/// Deserialize a value from a reader with custom options.
pub fn from_reader_with_options<T: Describe, R: Read>(
    reader: R,
    options: ParseOptions,
) -> Result<T> {
    JsonParser::with_options(options).parse_reader(reader)
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(JsonParser: Send, Sync, Clone);
    assert_impl_all!(JsonError: Send, Sync, std::error::Error);
    assert_impl_all!(Value: Send, Sync, Describe);

    #[test]
    fn root_descriptor_errors_are_reported_at_zero() {
        #[derive(Debug, Default, Clone, Copy)]
        enum Empty {
            #[default]
            Only,
        }

        impl Describe for Empty {
            fn build_descriptor() -> std::result::Result<TypeDescriptor, DescriptorError> {
                EnumDef::builder::<Empty>().build()
            }
        }

        let err = from_str::<Empty>("0").unwrap_err();
        assert_eq!(err.code(), "json::descriptor");
        assert_eq!(err.offset, 0);
        assert_eq!(err.to_string(), "Cannot describe Empty: enum has no variants");
    }
}

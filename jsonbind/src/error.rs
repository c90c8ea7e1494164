//! Error types for JSON deserialization.

use std::fmt::{self, Display};

use jsonbind_core::DescriptorError;

/// Error type for JSON deserialization.
///
/// Every error carries the byte offset where the offending token (or, for
/// lexical errors, the offending byte) begins.
#[derive(Debug)]
pub struct JsonError {
    /// The specific kind of error
    pub kind: JsonErrorKind,
    /// Byte offset into the input where the error occurred
    pub offset: usize,
}

impl JsonError {
    /// Create a new error at the given byte offset
    pub const fn new(kind: JsonErrorKind, offset: usize) -> Self {
        JsonError { kind, offset }
    }

    /// Get an error code for this error.
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            // The type, not the input, is at fault.
            JsonErrorKind::Descriptor(err) => write!(f, "{err}"),
            kind => write!(f, "{kind} at {}", self.offset),
        }
    }
}

impl std::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            JsonErrorKind::Descriptor(err) => Some(err),
            _ => None,
        }
    }
}

/// Specific error kinds for JSON deserialization
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum JsonErrorKind {
    /// A byte that does not fit the JSON grammar at this point
    UnexpectedCharacter,
    /// The input ended inside a value
    UnexpectedEof,
    /// A malformed string, or a non-string where a string was expected
    BadString,
    /// A non-number, or a number that does not fit the target
    BadNumber {
        /// The numeric type being bound
        target: &'static str,
    },
    /// A non-boolean where a boolean was expected
    BadBoolean,
    /// A name or discriminant that matches no enum variant
    BadEnumValue,
    /// A non-object where a struct or map was expected
    BadObject {
        /// The type being bound
        target: &'static str,
    },
    /// A non-array where a list or fixed array was expected
    BadArray {
        /// The type being bound
        target: &'static str,
    },
    /// A JSON array whose length differs from a fixed array's
    BadArrayLength {
        /// The fixed array's length
        expected: usize,
    },
    /// Arrays and objects nested deeper than the configured limit
    NestingTooDeep {
        /// The configured limit
        max_depth: usize,
    },
    /// The target type's descriptor could not be built
    Descriptor(DescriptorError),
    /// A descriptor's accessors do not match the value they were handed
    SlotMismatch {
        /// The type being bound
        target: &'static str,
    },
    /// Reading from the source failed
    Io(String),
}

impl Display for JsonErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonErrorKind::UnexpectedCharacter => write!(f, "Unexpected character"),
            JsonErrorKind::UnexpectedEof => write!(f, "Unexpected end of input"),
            JsonErrorKind::BadString => write!(f, "Bad string"),
            JsonErrorKind::BadNumber { target } => write!(f, "Bad number ({target})"),
            JsonErrorKind::BadBoolean => write!(f, "Bad boolean"),
            JsonErrorKind::BadEnumValue => write!(f, "Bad enum value"),
            JsonErrorKind::BadObject { target } => write!(f, "Bad object ({target})"),
            JsonErrorKind::BadArray { target } => write!(f, "Bad array ({target})"),
            JsonErrorKind::BadArrayLength { expected } => {
                write!(f, "Bad array length (expected {expected})")
            }
            JsonErrorKind::NestingTooDeep { max_depth } => {
                write!(f, "Nesting too deep (max {max_depth})")
            }
            JsonErrorKind::Descriptor(err) => write!(f, "{err}"),
            JsonErrorKind::SlotMismatch { target } => {
                write!(f, "Descriptor of {target} does not match its value")
            }
            JsonErrorKind::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl JsonErrorKind {
    /// Get an error code for this kind of error.
    pub const fn code(&self) -> &'static str {
        match self {
            JsonErrorKind::UnexpectedCharacter => "json::unexpected_character",
            JsonErrorKind::UnexpectedEof => "json::unexpected_eof",
            JsonErrorKind::BadString => "json::bad_string",
            JsonErrorKind::BadNumber { .. } => "json::bad_number",
            JsonErrorKind::BadBoolean => "json::bad_boolean",
            JsonErrorKind::BadEnumValue => "json::bad_enum_value",
            JsonErrorKind::BadObject { .. } => "json::bad_object",
            JsonErrorKind::BadArray { .. } => "json::bad_array",
            JsonErrorKind::BadArrayLength { .. } => "json::bad_array_length",
            JsonErrorKind::NestingTooDeep { .. } => "json::nesting_too_deep",
            JsonErrorKind::Descriptor(_) => "json::descriptor",
            JsonErrorKind::SlotMismatch { .. } => "json::slot_mismatch",
            JsonErrorKind::Io(_) => "json::io",
        }
    }
}

/// Result type for JSON deserialization
pub type Result<T> = std::result::Result<T, JsonError>;

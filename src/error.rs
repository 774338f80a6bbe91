use serde::{de, ser};
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building, encoding or decoding XDR values.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A custom error message from serde
    #[error("{0}")]
    Message(String),

    /// A value could not be constructed or coerced from the given input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A required field of a parameter struct was not set before encoding
    #[error("{ty} is missing required field `{field}`")]
    MissingField {
        ty: &'static str,
        field: &'static str,
    },

    /// Attempted to read past the end of the input buffer
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A sequence or map length was not known ahead of time (XDR requires it)
    #[error("sequence length must be known before serialization (XDR requires a length prefix)")]
    LengthRequired,

    /// A string contained non-UTF-8 bytes
    #[error("string contains invalid bytes")]
    InvalidString,

    /// The discriminant value for a union/enum is not valid
    #[error("invalid {ty} discriminant: {code}")]
    InvalidDiscriminant { ty: String, code: i32 },

    /// The boolean encoding was neither 0 nor 1
    #[error("invalid boolean encoding: {0} (must be 0 or 1)")]
    InvalidBool(u32),

    /// An optional value had an invalid discriminant (must be 0 or 1)
    #[error("invalid optional discriminant: {0} (must be 0 or 1)")]
    InvalidOption(u32),

    /// Data exceeded the declared maximum length
    #[error("length {got} exceeds maximum {max}")]
    LengthOverflow { max: u32, got: usize },

    /// A decoded length did not fit the expected bound
    #[error("invalid length {got}, expected {expected}")]
    InvalidLength { got: usize, expected: String },

    /// Padding bytes were non-zero (strict mode violation)
    #[error("non-zero padding bytes")]
    InvalidPadding,

    /// Input remained after a complete value was decoded
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),

    /// Nested values exceeded the configured depth limit
    #[error("nesting depth exceeds limit {0}")]
    DepthLimitExceeded(u32),

    /// The text form was not valid base64
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// XDR does not support this serde data model type
    #[error("XDR does not support type: {0}")]
    Unsupported(&'static str),

    /// An I/O error occurred during writing
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    pub(crate) fn invalid_input(msg: impl fmt::Display) -> Self {
        Error::InvalidInput(msg.to_string())
    }

    /// True for errors raised while constructing or encoding a value from
    /// caller-supplied input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_)
                | Error::MissingField { .. }
                | Error::LengthOverflow { .. }
                | Error::LengthRequired
        )
    }

    /// True for errors raised while reading a byte stream.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedEof
                | Error::InvalidString
                | Error::InvalidDiscriminant { .. }
                | Error::InvalidBool(_)
                | Error::InvalidOption(_)
                | Error::InvalidLength { .. }
                | Error::InvalidPadding
                | Error::TrailingBytes(_)
                | Error::DepthLimitExceeded(_)
                | Error::Base64(_)
        )
    }
}

impl ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    // Discriminant visitors report unknown codes as signed values.
    fn invalid_value(unexp: de::Unexpected<'_>, exp: &dyn de::Expected) -> Self {
        match unexp {
            de::Unexpected::Signed(code) => Error::InvalidDiscriminant {
                ty: exp.to_string(),
                code: code as i32,
            },
            other => Error::Message(format!("invalid value: {other}, expected {exp}")),
        }
    }

    fn invalid_length(len: usize, exp: &dyn de::Expected) -> Self {
        Error::InvalidLength {
            got: len,
            expected: exp.to_string(),
        }
    }
}

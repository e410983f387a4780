use thiserror::Error;

use crate::serialization::duration::DurationParseError;

/// A string that matched none of an enum's declared spellings.
///
/// Spellings are case-sensitive, so `"Article"` is rejected for
/// `pageLayoutType` even though `"article"` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {enum_name}")]
pub struct EnumParseError {
    /// The offending input.
    pub value: String,
    /// Schema name of the enum (e.g. `titleAreaLayoutType`).
    pub enum_name: &'static str,
}

impl EnumParseError {
    pub fn new(value: impl Into<String>, enum_name: &'static str) -> Self {
        Self {
            value: value.into(),
            enum_name,
        }
    }
}

/// Error types for reading and writing Graph payloads.
///
/// Errors raised by the parse/write primitives travel up through every
/// model layer unchanged; nothing in the model code recovers from or
/// re-wraps them.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// The payload is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An enum field carried a spelling the enum does not declare.
    #[error(transparent)]
    UnknownEnumValue(#[from] EnumParseError),

    /// A node held a different JSON kind than the field expects.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A number does not fit the field's width.
    #[error("number {value} is out of range for {target}")]
    NumberOutOfRange { value: String, target: &'static str },

    /// A timestamp field is not RFC 3339.
    #[error("invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },

    /// A date-only field is not `YYYY-MM-DD`.
    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    /// A time-only field is not `HH:MM:SS[.fff]`.
    #[error("invalid time of day '{value}': {source}")]
    InvalidTime {
        value: String,
        source: chrono::ParseError,
    },

    /// A UUID field could not be parsed.
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    /// A byte-array field is not valid base64.
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// An ISO-8601 duration field could not be parsed.
    #[error(transparent)]
    InvalidDuration(#[from] DurationParseError),
}

impl SerializationError {
    /// Returns `true` if the payload was well-formed JSON but a value
    /// did not fit its field.
    pub fn is_value_error(&self) -> bool {
        !matches!(self, Self::Json(_))
    }
}

/// Convenience Result type for betasdk operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

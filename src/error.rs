//! Error types for LTSV reading and writing.
//!
//! ## Error Categories
//!
//! - **Field format errors**: a field could not be split into a label and a value
//! - **Label name errors**: a well-formed field whose label is outside the stream's
//!   established label set
//! - **Unencodable fields**: a label or value that cannot be written without
//!   corrupting the line structure
//! - **I/O errors**: failures of the underlying reader or writer, passed through as-is
//!
//! Reaching the end of the input is not an error: [`Reader::read_record`]
//! returns `Ok(None)`.
//!
//! [`Reader::read_record`]: crate::Reader::read_record
//!
//! ## Examples
//!
//! ```rust
//! use serde_ltsv::{from_str, Error, Record};
//!
//! let result: Result<Vec<Record>, Error> = from_str("host:a\tnoColonHere\n");
//! let err = result.unwrap_err();
//! assert!(err.is_field_format());
//! assert_eq!(err.partial_record().and_then(|r| r.get("host")), Some("a"));
//! ```

use crate::Record;
use std::fmt;
use std::io;
use thiserror::Error;

/// Why a field failed to split into `label:value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormatKind {
    MissingColon,
    EmptyLabel,
    /// A quoted field has no closing quote.
    UnterminatedQuote,
    /// A closing quote is followed by something other than a tab.
    TrailingCharacters,
}

impl fmt::Display for FieldFormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldFormatKind::MissingColon => "missing ':' between label and value",
            FieldFormatKind::EmptyLabel => "empty label",
            FieldFormatKind::UnterminatedQuote => "unterminated quoted field",
            FieldFormatKind::TrailingCharacters => "characters after closing quote",
        })
    }
}

/// Represents all possible errors of the LTSV codec.
#[derive(Debug, Error)]
pub enum Error {
    /// Error of the underlying reader or writer
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A field is structurally broken. `partial` holds the fields decoded
    /// before the failing one.
    #[error("wrong LTSV field format at line {line}: {kind} in {field:?}")]
    FieldFormat {
        line: usize,
        field: String,
        kind: FieldFormatKind,
        partial: Record,
    },

    /// A field label that is not part of the stream's label set
    #[error("unexpected label name {label:?} at line {line}")]
    LabelName { line: usize, label: String },

    /// A label or value that cannot be written as LTSV
    #[error("cannot encode field {label:?}: {msg}")]
    Unencodable { label: String, msg: String },

    /// A Rust type that has no flat LTSV representation
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// A field value that could not be converted to the requested type
    #[error("invalid value for label {label:?}: {msg}")]
    InvalidValue { label: String, msg: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a field format error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ltsv::{Error, FieldFormatKind, Record};
    ///
    /// let err = Error::field_format(3, "oops", FieldFormatKind::MissingColon, Record::new());
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn field_format(line: usize, field: &str, kind: FieldFormatKind, partial: Record) -> Self {
        Error::FieldFormat {
            line,
            field: field.to_string(),
            kind,
            partial,
        }
    }

    /// Creates a label name error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ltsv::Error;
    ///
    /// let err = Error::label_name(2, "c");
    /// assert!(err.to_string().contains("\"c\""));
    /// ```
    pub fn label_name(line: usize, label: &str) -> Self {
        Error::LabelName {
            line,
            label: label.to_string(),
        }
    }

    pub fn unencodable(label: &str, msg: &str) -> Self {
        Error::Unencodable {
            label: label.to_string(),
            msg: msg.to_string(),
        }
    }

    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    pub fn invalid_value(label: &str, msg: &str) -> Self {
        Error::InvalidValue {
            label: label.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    #[must_use]
    pub fn is_field_format(&self) -> bool {
        matches!(self, Error::FieldFormat { .. })
    }

    #[must_use]
    pub fn is_label_name(&self) -> bool {
        matches!(self, Error::LabelName { .. })
    }

    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Returns the fields decoded before a field format error, if this is one.
    #[must_use]
    pub fn partial_record(&self) -> Option<&Record> {
        match self {
            Error::FieldFormat { partial, .. } => Some(partial),
            _ => None,
        }
    }

    /// Returns the line number for errors raised while reading.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::FieldFormat { line, .. } | Error::LabelName { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Turning raw fields into a [`Record`].
//!
//! Each field is split on its first colon: everything before it is the
//! label, everything after it (further colons included) is the value.

use crate::error::FieldFormatKind;
use crate::options::ReaderOptions;
use crate::tokenizer::Tokens;
use crate::{Error, Record, Result};

/// Splits one field into `(label, value)`.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::decoder::split_field;
/// use serde_ltsv::FieldFormatKind;
///
/// assert_eq!(split_field("time:12:00", false), Ok(("time", "12:00")));
/// assert_eq!(split_field("empty:", false), Ok(("empty", "")));
/// assert_eq!(split_field("noColonHere", false), Err(FieldFormatKind::MissingColon));
/// assert_eq!(split_field(":v", false), Err(FieldFormatKind::EmptyLabel));
/// assert_eq!(split_field(":v", true), Ok(("", "v")));
/// ```
pub fn split_field(
    field: &str,
    allow_empty_label: bool,
) -> std::result::Result<(&str, &str), FieldFormatKind> {
    match field.split_once(':') {
        None => Err(FieldFormatKind::MissingColon),
        Some(("", _)) if !allow_empty_label => Err(FieldFormatKind::EmptyLabel),
        Some(pair) => Ok(pair),
    }
}

/// Decodes one line (without terminator) into a record.
///
/// Duplicate labels keep the last value. On the first bad field the error
/// carries the fields decoded so far.
///
/// # Errors
///
/// Returns [`Error::FieldFormat`] if any field cannot be delimited or split.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::decoder::decode_line;
/// use serde_ltsv::ReaderOptions;
///
/// let record = decode_line("a:1\tb:2\ta:3", 1, &ReaderOptions::default()).unwrap();
/// assert_eq!(record.get("a"), Some("3"));
/// assert_eq!(record.len(), 2);
/// ```
pub fn decode_line(line: &str, line_no: usize, options: &ReaderOptions) -> Result<Record> {
    let mut record = Record::new();

    for token in Tokens::new(line, options.quoting) {
        let field = match token {
            Ok(field) => field,
            Err(e) => return Err(Error::field_format(line_no, e.field, e.kind, record)),
        };
        match split_field(&field, options.allow_empty_label) {
            Ok((label, value)) => {
                record.insert(label, value);
            }
            Err(kind) => return Err(Error::field_format(line_no, &field, kind, record)),
        }
    }

    Ok(record)
}

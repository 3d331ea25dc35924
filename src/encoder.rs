//! Rendering a [`Record`] as one LTSV line.
//!
//! Fields are emitted in the record's iteration order, joined by a single
//! tab and followed by the configured terminator.
//!
//! Labels and values that would break the line structure are refused:
//!
//! - a label must be non-empty and must not contain `:`
//! - neither may contain `\n` or `\r`
//! - a tab is only allowed with [`Quoting::Csv`], which wraps the whole field
//!   in double quotes
//!
//! ```rust
//! use serde_ltsv::encoder::encode_record;
//! use serde_ltsv::{record, WriterOptions};
//!
//! let mut line = String::new();
//! encode_record(&record!({ "perl": 5, "ruby": 2 }), &WriterOptions::crlf(), &mut line).unwrap();
//! assert_eq!(line, "perl:5\truby:2\r\n");
//! ```

use crate::options::{Quoting, WriterOptions};
use crate::{Error, Record, Result};

#[inline]
fn needs_quotes(label: &str, value: &str) -> bool {
    label.contains('\t') || label.contains('"') || value.contains('\t') || value.contains('"')
}

fn validate(label: &str, value: &str, quoting: Quoting) -> Result<()> {
    if label.is_empty() {
        return Err(Error::unencodable(label, "label is empty"));
    }
    if label.contains(':') {
        return Err(Error::unencodable(label, "label contains ':'"));
    }
    if [label, value].iter().any(|s| s.contains(['\n', '\r'])) {
        return Err(Error::unencodable(label, "line break in field"));
    }
    if !quoting.is_enabled() && (label.contains('\t') || value.contains('\t')) {
        return Err(Error::unencodable(
            label,
            "tab in field (enable Quoting::Csv to write it)",
        ));
    }
    Ok(())
}

/// Appends one `label:value` field to `out`.
///
/// # Errors
///
/// Returns [`Error::Unencodable`] if the field cannot be represented.
pub fn encode_field(label: &str, value: &str, quoting: Quoting, out: &mut String) -> Result<()> {
    validate(label, value, quoting)?;

    if quoting.is_enabled() && needs_quotes(label, value) {
        out.push('"');
        for ch in label.chars().chain(std::iter::once(':')).chain(value.chars()) {
            if ch == '"' {
                out.push_str("\"\"");
            } else {
                out.push(ch);
            }
        }
        out.push('"');
    } else {
        out.push_str(label);
        out.push(':');
        out.push_str(value);
    }
    Ok(())
}

/// Appends a full record line, terminator included, to `out`.
///
/// An empty record yields a bare terminator, which readers skip.
///
/// # Errors
///
/// Returns [`Error::Unencodable`] on the first field that cannot be written;
/// `out` may then hold a partial line.
pub fn encode_record(record: &Record, options: &WriterOptions, out: &mut String) -> Result<()> {
    for (i, (label, value)) in record.iter().enumerate() {
        if i > 0 {
            out.push('\t');
        }
        encode_field(label, value, options.quoting, out)?;
    }
    out.push_str(options.terminator.as_str());
    Ok(())
}

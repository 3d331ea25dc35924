//! # serde_ltsv
//!
//! A reader and writer for LTSV (Labeled Tab-Separated Values), with Serde support.
//!
//! ## What is LTSV?
//!
//! LTSV is a line-oriented text format: each line is a record, and each record
//! is a tab-separated list of `label:value` fields. It is popular for access
//! logs because fields are addressed by name, so new ones can be added without
//! breaking consumers.
//!
//! ```text
//! host:127.0.0.1	status:200	size:2326	referer:-
//! ```
//!
//! ## Key Features
//!
//! - **Streaming**: [`Reader`] and [`Writer`] work one record at a time over any
//!   `BufRead` / `Write`
//! - **Schema consistency**: by default the first record's labels become the
//!   stream's label set, and later records with unknown labels are rejected
//! - **Precise errors**: malformed fields report the line, the field and the
//!   partially decoded record
//! - **Serde compatible**: read records straight into `#[derive(Deserialize)]`
//!   structs and write from `#[derive(Serialize)]` ones
//! - **No silent corruption**: the writer refuses labels and values that would
//!   not read back identically, or quotes them when [`Quoting::Csv`] is enabled
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_ltsv::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Hit {
//!     host: String,
//!     status: u16,
//! }
//!
//! let hits = vec![
//!     Hit { host: "127.0.0.1".to_string(), status: 200 },
//!     Hit { host: "10.0.0.7".to_string(), status: 404 },
//! ];
//!
//! let ltsv = to_string(&hits).unwrap();
//! assert_eq!(ltsv, "host:127.0.0.1\tstatus:200\nhost:10.0.0.7\tstatus:404\n");
//!
//! let hits_back: Vec<Hit> = from_str(&ltsv).unwrap();
//! assert_eq!(hits, hits_back);
//! ```
//!
//! ### Untyped Records
//!
//! ```rust
//! use serde_ltsv::{Reader, Record};
//!
//! let mut reader = Reader::new("perl:5\truby:2\n\nperl:6\n".as_bytes());
//! let records: Vec<Record> = reader.read_all().unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].get("perl"), Some("6"));
//! ```
//!
//! ### Heterogeneous Streams
//!
//! ```rust
//! use serde_ltsv::{from_str, from_str_with_options, Record, ReaderOptions};
//!
//! let input = "a:1\tb:2\na:3\tc:4\n";
//! assert!(from_str::<Record>(input).unwrap_err().is_label_name());
//!
//! let records: Vec<Record> = from_str_with_options(input, ReaderOptions::lenient()).unwrap();
//! assert_eq!(records.len(), 2);
//! ```
//!
//! ## Format Reference
//!
//! See the [`format`] module for the grammar and the exact rules this crate applies.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - typed round-trip
//! - **`macro.rs`** - building records with `record!`
//! - **`access_log.rs`** - streaming an access log with schema checks
//! - **`custom_options.rs`** - CRLF output and quoted fields
//! - **`to_json.rs`** - converting LTSV to JSON lines
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod macros;
pub mod options;
pub mod reader;
pub mod record;
pub mod schema;
pub mod ser;
pub mod tokenizer;
pub mod writer;

pub use de::{FieldDeserializer, RecordDeserializer};
pub use error::{Error, FieldFormatKind, Result};
pub use options::{Quoting, ReaderOptions, Terminator, WriterOptions};
pub use reader::Reader;
pub use record::Record;
pub use schema::SchemaGuard;
pub use ser::{FieldSerializer, RecordSerializer};
pub use writer::Writer;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io;

/// Convert any flat `T: Serialize` (struct or map) into a [`Record`].
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::to_record;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let record = to_record(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(record.get("y"), Some("2"));
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if `T` is not a struct or map, or a
/// field holds a nested value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_record<T>(value: &T) -> Result<Record>
where
    T: ?Sized + Serialize,
{
    value.serialize(RecordSerializer)
}

/// Deserialize a `T` from the fields of a [`Record`].
///
/// # Errors
///
/// Returns an error if a required label is missing or a value does not parse
/// as the field's type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_record<'de, T>(record: &'de Record) -> Result<T>
where
    T: Deserialize<'de>,
{
    T::deserialize(RecordDeserializer::new(record))
}

/// Serialize a slice of records to an LTSV string, one line each.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::{record, to_string};
///
/// let ltsv = to_string(&[record!({ "a": 1 }), record!({ "a": 2 })]).unwrap();
/// assert_eq!(ltsv, "a:1\na:2\n");
/// ```
///
/// # Errors
///
/// Returns an error if a value is not record-shaped or a field cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(records: &[T]) -> Result<String>
where
    T: Serialize,
{
    to_string_with_options(records, WriterOptions::default())
}

/// Serialize a slice of records to an LTSV string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::{record, to_string_with_options, WriterOptions};
///
/// let ltsv = to_string_with_options(&[record!({ "a": 1 })], WriterOptions::crlf()).unwrap();
/// assert_eq!(ltsv, "a:1\r\n");
/// ```
///
/// # Errors
///
/// Returns an error if a value is not record-shaped or a field cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(records: &[T], options: WriterOptions) -> Result<String>
where
    T: Serialize,
{
    let mut output = String::with_capacity(64 * records.len());
    for value in records {
        let record = to_record(value)?;
        encoder::encode_record(&record, &options, &mut output)?;
    }
    Ok(output)
}

/// Serialize records to a writer in LTSV format, flushing at the end.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, records: &[T]) -> Result<()>
where
    W: io::Write,
    T: Serialize,
{
    to_writer_with_options(writer, records, WriterOptions::default())
}

/// Serialize records to a writer with custom options, flushing at the end.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, records: &[T], options: WriterOptions) -> Result<()>
where
    W: io::Write,
    T: Serialize,
{
    let mut writer = Writer::with_options(writer, options);
    for value in records {
        writer.serialize(value)?;
    }
    writer.flush()
}

/// Deserialize every record of an LTSV string, with the schema check enabled.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::{from_str, Record};
///
/// let records: Vec<Record> = from_str("a:1\tb:2\n\n\nb:3\n").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].get("b"), Some("3"));
/// ```
///
/// # Errors
///
/// Returns the first field format, label or conversion error; no records are
/// returned in that case.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, ReaderOptions::default())
}

/// Deserialize every record of an LTSV string with custom options.
///
/// # Errors
///
/// Returns the first field format, label or conversion error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: ReaderOptions) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    read_all_as(Reader::with_options(s.as_bytes(), options))
}

/// Deserialize every record of LTSV bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid LTSV.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    read_all_as(Reader::new(v))
}

/// Deserialize every record from an I/O stream of LTSV.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::{from_reader, Record};
/// use std::io::Cursor;
///
/// let records: Vec<Record> = from_reader(Cursor::new(b"a:1\na:2\n")).unwrap();
/// assert_eq!(records.len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid LTSV.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<Vec<T>>
where
    R: io::Read,
    T: DeserializeOwned,
{
    read_all_as(Reader::from_reader(reader))
}

fn read_all_as<R, T>(mut reader: Reader<R>) -> Result<Vec<T>>
where
    R: io::BufRead,
    T: DeserializeOwned,
{
    let mut values = Vec::new();
    while let Some(value) = reader.deserialize()? {
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Hit {
        host: String,
        status: u16,
        size: Option<u64>,
    }

    #[test]
    fn test_serialize_deserialize_hits() {
        let hits = vec![
            Hit {
                host: "127.0.0.1".to_string(),
                status: 200,
                size: Some(2326),
            },
            Hit {
                host: "::1".to_string(),
                status: 304,
                size: None,
            },
        ];
        let ltsv = to_string(&hits).unwrap();
        assert_eq!(
            ltsv,
            "host:127.0.0.1\tstatus:200\tsize:2326\nhost:::1\tstatus:304\tsize:\n"
        );
        let back: Vec<Hit> = from_str(&ltsv).unwrap();
        assert_eq!(back, hits);
    }

    #[test]
    fn test_records_roundtrip() {
        let records = vec![
            crate::record!({ "hoge": "foo", "bar": "baz" }),
            crate::record!({ "hoge": "x" }),
        ];
        let ltsv = to_string(&records).unwrap();
        let back: Vec<Record> = from_str(&ltsv).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_from_slice_and_to_writer() {
        let records = vec![crate::record!({ "a": 1, "b": 2 })];
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &records).unwrap();
        let back: Vec<Record> = from_slice(&buffer).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_from_str_empty() {
        let records: Vec<Record> = from_str("").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_to_string_rejects_scalars() {
        assert!(to_string(&[1, 2, 3]).is_err());
    }
}

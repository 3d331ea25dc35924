//! Streaming LTSV writer.
//!
//! [`Writer`] buffers its sink with a [`BufWriter`]. Call
//! [`Writer::flush`], [`Writer::write_all`] or [`Writer::into_inner`] to
//! make sure everything reaches the destination; the flush performed when a
//! `BufWriter` is dropped swallows errors.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ltsv::{record, Writer};
//!
//! let mut writer = Writer::new(Vec::new());
//! writer.write_all(&[record!({ "host": "a" }), record!({ "host": "b" })]).unwrap();
//! let bytes = writer.into_inner().unwrap();
//! assert_eq!(bytes, b"host:a\nhost:b\n");
//! ```

use crate::encoder::encode_record;
use crate::options::WriterOptions;
use crate::{Error, Record, Result};
use serde::Serialize;
use std::io::{BufWriter, Write};

/// Writes LTSV records to a sink.
pub struct Writer<W: Write> {
    inner: BufWriter<W>,
    options: WriterOptions,
    line: String,
}

impl<W: Write> Writer<W> {
    /// Creates a writer with default options (`\n` terminator, no quoting).
    pub fn new(inner: W) -> Self {
        Writer::with_options(inner, WriterOptions::default())
    }

    pub fn with_options(inner: W, options: WriterOptions) -> Self {
        Writer {
            inner: BufWriter::new(inner),
            options,
            line: String::with_capacity(256),
        }
    }

    /// Encodes one record and appends it to the sink.
    ///
    /// Nothing is written if the record cannot be encoded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unencodable`] for a field that cannot be written or
    /// [`Error::Io`] if the sink fails.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        self.line.clear();
        encode_record(record, &self.options, &mut self.line)?;
        self.inner.write_all(self.line.as_bytes())?;
        Ok(())
    }

    /// Writes all records in order, then flushes.
    ///
    /// # Errors
    ///
    /// Stops at the first failing record. Records written before it may or
    /// may not have reached the sink.
    pub fn write_all<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.write_record(record)?;
        }
        self.flush()
    }

    /// Converts `value` into a record and writes it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use serde_ltsv::Writer;
    ///
    /// #[derive(Serialize)]
    /// struct Hit { host: &'static str, status: u16 }
    ///
    /// let mut writer = Writer::new(Vec::new());
    /// writer.serialize(&Hit { host: "a", status: 200 }).unwrap();
    /// assert_eq!(writer.into_inner().unwrap(), b"host:a\tstatus:200\n");
    /// ```
    pub fn serialize<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let record = crate::to_record(value)?;
        self.write_record(&record)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        log::trace!("flushed LTSV writer");
        Ok(())
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Flushes and returns the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Terminator;
    use std::io;

    #[test]
    fn test_write_record_crlf() {
        let mut writer = Writer::with_options(Vec::new(), WriterOptions::crlf());
        let record: Record = [("hoge", "foo")].into_iter().collect();
        writer.write_record(&record).unwrap();
        assert_eq!(writer.options().terminator, Terminator::CrLf);
        assert_eq!(writer.into_inner().unwrap(), b"hoge:foo\r\n");
    }

    #[test]
    fn test_unencodable_record_writes_nothing() {
        let mut writer = Writer::new(Vec::new());
        let good: Record = [("a", "1")].into_iter().collect();
        let bad: Record = [("b", "2"), ("c", "x\ty")].into_iter().collect();
        writer.write_record(&good).unwrap();
        assert!(writer.write_record(&bad).is_err());
        assert_eq!(writer.into_inner().unwrap(), b"a:1\n");
    }

    #[test]
    fn test_write_all_stops_at_first_error() {
        let mut writer = Writer::new(Vec::new());
        let records: Vec<Record> = vec![
            [("a", "1")].into_iter().collect(),
            [("a:b", "2")].into_iter().collect(),
            [("a", "3")].into_iter().collect(),
        ];
        assert!(writer.write_all(&records).is_err());
        let out = writer.into_inner().unwrap();
        assert_eq!(out, b"a:1\n");
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_flush_error_is_propagated() {
        let mut writer = Writer::new(FailingSink);
        let records: Vec<Record> = vec![[("a", "1")].into_iter().collect()];
        match writer.write_all(&records) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}

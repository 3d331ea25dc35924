//! Streaming LTSV reader.
//!
//! [`Reader`] pulls one physical line at a time from any [`BufRead`],
//! skips blank lines, decodes the rest into [`Record`]s and, unless
//! disabled, checks every record against the label set of the first one.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ltsv::Reader;
//!
//! let input = "host:a\tstatus:200\n\nhost:b\tstatus:404\n";
//! let mut reader = Reader::new(input.as_bytes());
//!
//! while let Some(record) = reader.read_record().unwrap() {
//!     assert!(record.contains_label("status"));
//! }
//! ```

use crate::options::ReaderOptions;
use crate::schema::SchemaGuard;
use crate::{decoder, Record, Result};
use serde::de::DeserializeOwned;
use std::io::{self, BufRead, BufReader, Read};

/// Reads LTSV records from a buffered source.
pub struct Reader<R> {
    inner: R,
    options: ReaderOptions,
    schema: SchemaGuard,
    line: usize,
    buf: Vec<u8>,
}

impl<R: Read> Reader<BufReader<R>> {
    /// Wraps an unbuffered source in a [`BufReader`].
    pub fn from_reader(inner: R) -> Self {
        Reader::new(BufReader::new(inner))
    }
}

impl<R: BufRead> Reader<R> {
    /// Creates a reader with default options (schema enforced).
    pub fn new(inner: R) -> Self {
        Reader::with_options(inner, ReaderOptions::default())
    }

    pub fn with_options(inner: R, options: ReaderOptions) -> Self {
        Reader {
            inner,
            schema: SchemaGuard::new(options.schema_enforced),
            options,
            line: 0,
            buf: Vec::new(),
        }
    }

    /// Reads the next record.
    ///
    /// Returns `Ok(None)` once the input is exhausted. A record rejected by
    /// the schema check does not poison the reader; the next call moves on
    /// to the following line.
    ///
    /// # Errors
    ///
    /// - [`Error::FieldFormat`](crate::Error::FieldFormat) for a malformed field
    /// - [`Error::LabelName`](crate::Error::LabelName) for a label outside the label set
    /// - [`Error::Io`](crate::Error::Io) if the source fails or is not valid UTF-8
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ltsv::Reader;
    ///
    /// let mut reader = Reader::new("a:1\n".as_bytes());
    /// assert_eq!(reader.read_record().unwrap().unwrap().get("a"), Some("1"));
    /// assert!(reader.read_record().unwrap().is_none());
    /// ```
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        loop {
            self.buf.clear();
            if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let line = std::str::from_utf8(&self.buf).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {} is not valid UTF-8: {}", self.line, e),
                )
            })?;
            let line = strip_terminator(line);
            if line.trim().is_empty() {
                log::trace!("skipping blank line {}", self.line);
                continue;
            }

            let record = match decoder::decode_line(line, self.line, &self.options) {
                Ok(record) => record,
                Err(e) => {
                    if let Some(partial) = e.partial_record() {
                        self.schema.check_known(partial, self.line)?;
                    }
                    return Err(e);
                }
            };
            self.schema.check(&record, self.line)?;
            return Ok(Some(record));
        }
    }

    /// Reads every remaining record.
    ///
    /// # Errors
    ///
    /// Stops at the first error and returns it; records read before it are
    /// discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ltsv::{Reader, ReaderOptions};
    ///
    /// let records = Reader::with_options("a:1\n\n\nb:2\n".as_bytes(), ReaderOptions::lenient())
    ///     .read_all()
    ///     .unwrap();
    /// assert_eq!(records.len(), 2);
    /// ```
    pub fn read_all(&mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while let Some(record) = self.read_record()? {
            records.push(record);
        }
        Ok(records)
    }

    /// Reads the next record and converts it into `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde::Deserialize;
    /// use serde_ltsv::Reader;
    ///
    /// #[derive(Deserialize)]
    /// struct Hit { host: String, status: u16 }
    ///
    /// let mut reader = Reader::new("host:a\tstatus:200\n".as_bytes());
    /// let hit: Hit = reader.deserialize().unwrap().unwrap();
    /// assert_eq!(hit.status, 200);
    /// ```
    pub fn deserialize<T>(&mut self) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.read_record()? {
            Some(record) => crate::from_record(&record).map(Some),
            None => Ok(None),
        }
    }

    /// Returns an iterator over the remaining records.
    ///
    /// The iterator yields errors without stopping, so label errors on one
    /// record do not end the iteration.
    pub fn records(&mut self) -> RecordsIter<'_, R> {
        RecordsIter { reader: self }
    }
}

impl<R> Reader<R> {
    /// Number of physical lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn schema(&self) -> &SchemaGuard {
        &self.schema
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Iterator returned by [`Reader::records`].
pub struct RecordsIter<'r, R> {
    reader: &'r mut Reader<R>,
}

impl<R: BufRead> Iterator for RecordsIter<'_, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_record().transpose()
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

//! Configuration options for LTSV reading and writing.
//!
//! This module provides types to customize how records are parsed and emitted:
//!
//! - [`ReaderOptions`]: schema enforcement, quoting, and label strictness for readers
//! - [`WriterOptions`]: line terminator and quoting for writers
//! - [`Terminator`]: `\n` or `\r\n` line endings
//! - [`Quoting`]: whether fields may be wrapped in CSV-style double quotes
//!
//! ## Examples
//!
//! ```rust
//! use serde_ltsv::{ReaderOptions, WriterOptions, Quoting, Terminator};
//!
//! // Accept heterogeneous streams (no schema check)
//! let reader = ReaderOptions::lenient();
//! assert!(!reader.schema_enforced);
//!
//! // Windows line endings with quoted fields
//! let writer = WriterOptions::crlf().with_quoting(Quoting::Csv);
//! assert_eq!(writer.terminator, Terminator::CrLf);
//! ```

/// Line terminator appended after each written record.
///
/// Readers accept both forms regardless of this setting.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::Terminator;
///
/// assert_eq!(Terminator::Lf.as_str(), "\n");
/// assert_eq!(Terminator::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Terminator {
    #[default]
    Lf,
    CrLf,
}

impl Terminator {
    /// Returns the bytes written after each record.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Terminator::Lf => "\n",
            Terminator::CrLf => "\r\n",
        }
    }
}

/// Field quoting convention.
///
/// - **Never**: plain LTSV, fields are split on every tab. Writers refuse
///   labels or values that contain a tab.
/// - **Csv**: a field that starts with `"` runs to the closing quote and may
///   contain tabs; `""` inside a quoted field is a literal quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Quoting {
    #[default]
    Never,
    Csv,
}

impl Quoting {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Quoting::Csv)
    }
}

/// Configuration for [`Reader`](crate::Reader).
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::{ReaderOptions, Quoting};
///
/// let options = ReaderOptions::new()
///     .with_schema_enforced(false)
///     .with_quoting(Quoting::Csv);
/// assert!(!options.schema_enforced);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Reject records whose labels are not in the first record's label set.
    pub schema_enforced: bool,
    pub quoting: Quoting,
    /// Accept fields such as `:value` whose label is empty.
    pub allow_empty_label: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            schema_enforced: true,
            quoting: Quoting::default(),
            allow_empty_label: false,
        }
    }
}

impl ReaderOptions {
    /// Creates default options (schema enforced, no quoting, strict labels).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ltsv::ReaderOptions;
    ///
    /// let options = ReaderOptions::new();
    /// assert!(options.schema_enforced);
    /// assert!(!options.allow_empty_label);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for streams whose records do not share one label set.
    #[must_use]
    pub fn lenient() -> Self {
        ReaderOptions {
            schema_enforced: false,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_schema_enforced(mut self, enforced: bool) -> Self {
        self.schema_enforced = enforced;
        self
    }

    #[must_use]
    pub fn with_quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = quoting;
        self
    }

    /// Controls whether an empty label (`:value`) is accepted.
    ///
    /// Rejected by default with a `FieldFormat` error.
    #[must_use]
    pub fn with_empty_labels(mut self, allow: bool) -> Self {
        self.allow_empty_label = allow;
        self
    }
}

/// Configuration for [`Writer`](crate::Writer) and the `to_string` family.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::{WriterOptions, Terminator};
///
/// let options = WriterOptions::new().with_terminator(Terminator::CrLf);
/// assert_eq!(options.terminator.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriterOptions {
    pub terminator: Terminator,
    pub quoting: Quoting,
}

impl WriterOptions {
    /// Creates default options (`\n` terminator, no quoting).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that end every record with `\r\n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ltsv::{WriterOptions, Terminator};
    ///
    /// assert_eq!(WriterOptions::crlf().terminator, Terminator::CrLf);
    /// ```
    #[must_use]
    pub fn crlf() -> Self {
        WriterOptions {
            terminator: Terminator::CrLf,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    #[must_use]
    pub fn with_quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = quoting;
        self
    }
}

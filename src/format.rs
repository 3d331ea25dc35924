//! LTSV Format Reference
//!
//! This module documents the LTSV (Labeled Tab-Separated Values) format as
//! read and written by this library. See <http://ltsv.org/> for the
//! original description.
//!
//! # Overview
//!
//! LTSV is a line-oriented format. Every line is one record; a record is a
//! list of `label:value` fields separated by a horizontal tab. It is most
//! often used for access logs, where new fields can be added without
//! breaking parsers that address fields by name.
//!
//! ```text
//! host:127.0.0.1	ident:-	user:frank	time:[10/Oct/2000:13:55:36 -0700]	status:200
//! host:127.0.0.1	ident:-	user:-	time:[10/Oct/2000:13:55:37 -0700]	status:404
//! ```
//!
//! # Grammar
//!
//! ```text
//! record          := field ('\t' field)* line-terminator
//! field           := label ':' value
//! label           := one-or-more characters excluding ':' and '\t'
//! value           := zero-or-more characters excluding '\t' and line terminators
//! line-terminator := '\n' | '\r\n'
//! ```
//!
//! **Rules**:
//! - A field is split on its **first** colon; values may contain colons
//!   (`time:12:00:00` has label `time` and value `12:00:00`)
//! - Values may be empty (`referer:`); labels may not, unless
//!   [`ReaderOptions::with_empty_labels`](crate::ReaderOptions::with_empty_labels) is set
//! - A label repeated within one line keeps its last value
//! - Consecutive, leading and trailing tabs produce no fields
//! - Blank lines (empty or whitespace only) are skipped
//! - The reader accepts `\n` and `\r\n`; the writer emits the configured
//!   [`Terminator`](crate::Terminator)
//!
//! # Label Sets
//!
//! By default a [`Reader`](crate::Reader) treats the labels of the first
//! record as the stream's label set. A later record may omit labels but may
//! not introduce new ones:
//!
//! ```text
//! a:1	b:2      <- label set is {a, b}
//! b:3            <- accepted
//! a:4	c:5      <- rejected: LabelName("c")
//! ```
//!
//! Labels are checked in field order. On a line such as `c:1\tbroken` the
//! unknown label `c` is reported as `LabelName` before the malformed field
//! after it is reached.
//!
//! Disable this with [`ReaderOptions::lenient`](crate::ReaderOptions::lenient)
//! for streams that mix record shapes.
//!
//! # Quoting
//!
//! Plain LTSV has no escaping. Writers therefore refuse tabs and line breaks
//! in labels and values, and colons in labels, rather than produce a line
//! that reads back differently.
//!
//! With [`Quoting::Csv`](crate::Quoting::Csv) on both ends, a field containing
//! a tab or a double quote is written CSV style, the whole field wrapped in
//! quotes and inner quotes doubled:
//!
//! ```text
//! "msg:say ""hi""	now"	level:info
//! ```
//!
//! Line breaks stay forbidden in both modes since the reader works one
//! physical line at a time.
//!
//! # Field Order
//!
//! LTSV gives no meaning to field order. This library keeps the insertion
//! order of a [`Record`](crate::Record) (and the declaration order of a
//! serialized struct) so output is stable, but equality between records
//! ignores order.
//!
//! # Typed Values
//!
//! Every value is text on the wire. When (de)serializing Rust types:
//!
//! | Rust type | Written as | Read from |
//! |-----------|------------|-----------|
//! | integers, floats | decimal text | any text the type's `FromStr` accepts |
//! | `bool` | `true` / `false` | `true` / `false` |
//! | `Option<T>` | empty value when `None` | empty value or missing label is `None` |
//! | unit enum variant | variant name | variant name |
//! | sequences, nested structs | not supported | not supported |
//!
//! Writing `None` as an empty value keeps every label of a struct in every
//! line, so a stream of one type always passes the label set check.
//! `Some(String::new())` reads back as `None`.

// This module contains only documentation; no implementation code

//! Label-set consistency across the records of one stream.
//!
//! A [`SchemaGuard`] starts uninitialized. The first record it checks fixes
//! the stream's label set; every later record may only use labels from that
//! set. Records with fewer labels are fine, new labels are not.
//!
//! ```rust
//! use serde_ltsv::{Record, SchemaGuard};
//!
//! let mut guard = SchemaGuard::new(true);
//! let first: Record = "a:1\tb:2".parse().unwrap();
//! let second: Record = "a:3\tc:4".parse().unwrap();
//!
//! guard.check(&first, 1).unwrap();
//! assert!(guard.check(&second, 2).unwrap_err().is_label_name());
//! ```

use crate::{Error, Record, Result};
use indexmap::IndexSet;

/// Remembers the first record's labels and rejects unknown ones afterwards.
///
/// When constructed with `enforced = false` it accepts everything and never
/// initializes.
#[derive(Debug, Clone, Default)]
pub struct SchemaGuard {
    enforced: bool,
    labels: Option<IndexSet<String>>,
}

impl SchemaGuard {
    #[must_use]
    pub fn new(enforced: bool) -> Self {
        SchemaGuard {
            enforced,
            labels: None,
        }
    }

    #[must_use]
    pub fn is_enforced(&self) -> bool {
        self.enforced
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.labels.is_some()
    }

    /// The established label set, in the order of the first record.
    #[must_use]
    pub fn labels(&self) -> Option<&IndexSet<String>> {
        self.labels.as_ref()
    }

    /// Whether a record carrying `label` would pass.
    #[must_use]
    pub fn admits(&self, label: &str) -> bool {
        match &self.labels {
            Some(labels) if self.enforced => labels.contains(label),
            _ => true,
        }
    }

    /// Checks `record` against an established label set without ever
    /// establishing one.
    ///
    /// Used for the fields decoded before a malformed one, so a line that
    /// has both an unknown label and a later broken field reports the label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LabelName`] for the first label outside the set.
    pub fn check_known(&self, record: &Record, line: usize) -> Result<()> {
        match &self.labels {
            Some(labels) if self.enforced => {
                match record.labels().find(|l| !labels.contains(*l)) {
                    Some(label) => Err(Error::label_name(line, label)),
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    /// Checks a successfully decoded record, establishing the label set if
    /// this is the first one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LabelName`] for the first label outside the set.
    pub fn check(&mut self, record: &Record, line: usize) -> Result<()> {
        if !self.enforced {
            return Ok(());
        }

        match &self.labels {
            Some(_) => self.check_known(record, line)?,
            None => {
                let labels: IndexSet<String> = record.labels().map(str::to_string).collect();
                log::debug!(
                    "label set established at line {} with {} labels",
                    line,
                    labels.len()
                );
                self.labels = Some(labels);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> Record {
        line.parse().unwrap()
    }

    #[test]
    fn test_first_record_initializes() {
        let mut guard = SchemaGuard::new(true);
        assert!(!guard.is_initialized());
        guard.check(&record("b:1\ta:2"), 1).unwrap();
        assert!(guard.is_initialized());
        let labels: Vec<_> = guard.labels().unwrap().iter().cloned().collect();
        assert_eq!(labels, vec!["b", "a"]);
    }

    #[test]
    fn test_subset_is_accepted() {
        let mut guard = SchemaGuard::new(true);
        guard.check(&record("a:1\tb:2\tc:3"), 1).unwrap();
        guard.check(&record("c:9"), 2).unwrap();
        guard.check(&record("a:1\tb:2\tc:3"), 3).unwrap();
    }

    #[test]
    fn test_unknown_label_rejected_and_set_unchanged() {
        let mut guard = SchemaGuard::new(true);
        guard.check(&record("a:1\tb:2"), 1).unwrap();
        match guard.check(&record("a:1\tc:2"), 2) {
            Err(Error::LabelName { line, label }) => {
                assert_eq!(line, 2);
                assert_eq!(label, "c");
            }
            other => panic!("Expected LabelName, got {other:?}"),
        }
        assert!(!guard.admits("c"));
        assert_eq!(guard.labels().unwrap().len(), 2);
    }

    #[test]
    fn test_check_known_never_establishes() {
        let mut guard = SchemaGuard::new(true);
        guard.check_known(&record("z:1"), 1).unwrap();
        assert!(!guard.is_initialized());

        guard.check(&record("a:1"), 2).unwrap();
        assert!(guard.check_known(&record("z:1"), 3).unwrap_err().is_label_name());
        guard.check_known(&record("a:5"), 4).unwrap();
    }

    #[test]
    fn test_disabled_guard_is_pass_through() {
        let mut guard = SchemaGuard::new(false);
        guard.check(&record("a:1"), 1).unwrap();
        guard.check(&record("z:1"), 2).unwrap();
        assert!(!guard.is_initialized());
        assert!(guard.admits("anything"));
    }
}

//! The LTSV record type.
//!
//! A [`Record`] maps labels to values. It wraps an [`IndexMap`] so that
//! fields iterate in the order they were first inserted, which keeps written
//! output stable and readable. The order carries no meaning for equality:
//! two records are equal when they hold the same label/value pairs.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ltsv::Record;
//!
//! let mut record = Record::new();
//! record.insert("host", "127.0.0.1");
//! record.insert("status", "200");
//!
//! assert_eq!(record.len(), 2);
//! assert_eq!(record.get("status"), Some("200"));
//! ```

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// One LTSV record: a mapping from label to value.
///
/// Inserting an existing label replaces its value (last write wins) and keeps
/// the label's original position.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::Record;
///
/// let record: Record = "perl:5\truby:2".parse().unwrap();
/// let labels: Vec<_> = record.labels().collect();
/// assert_eq!(labels, vec!["perl", "ruby"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record(IndexMap<String, String>);

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field, returning the previous value for the label if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ltsv::Record;
    ///
    /// let mut record = Record::new();
    /// assert!(record.insert("key", "1").is_none());
    /// assert_eq!(record.insert("key", "2"), Some("1".to_string()));
    /// ```
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(label.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut String> {
        self.0.get_mut(label)
    }

    /// Removes a field, preserving the order of the remaining ones.
    pub fn remove(&mut self, label: &str) -> Option<String> {
        self.0.shift_remove(label)
    }

    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the labels, in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// Returns an iterator over `(label, value)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parses a single LTSV line with default reader rules and no schema check.
impl FromStr for Record {
    type Err = crate::Error;

    fn from_str(line: &str) -> crate::Result<Self> {
        crate::decoder::decode_line(line, 1, &crate::ReaderOptions::default())
    }
}

impl<K, V> From<HashMap<K, V>> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(map: HashMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> From<BTreeMap<K, V>> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Record> for HashMap<String, String> {
    fn from(record: Record) -> Self {
        record.0.into_iter().collect()
    }
}

impl IntoIterator for Record {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Record(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> Extend<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (label, value) in self.iter() {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of string labels to string values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Record, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut record = Record::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, value)) = access.next_entry::<String, String>()? {
                    record.insert(label, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_order() {
        let a: Record = [("perl", "5"), ("ruby", "2")].into_iter().collect();
        let b: Record = [("ruby", "2"), ("perl", "5")].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut record = Record::new();
        record.insert("a", "1");
        record.insert("b", "2");
        record.insert("a", "3");
        assert_eq!(record.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut record: Record = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(record.remove("a"), Some("1".to_string()));
        assert_eq!(record.labels().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_hashmap_conversion() {
        let mut map = HashMap::new();
        map.insert("host".to_string(), "localhost".to_string());
        let record = Record::from(map.clone());
        let back: HashMap<String, String> = record.into();
        assert_eq!(back, map);
    }

    #[test]
    fn test_from_str_single_line() {
        let record: Record = "host:127.0.0.1\ttime:[10/Oct/2000:13:55:36 -0700]"
            .parse()
            .unwrap();
        assert_eq!(record.get("time"), Some("[10/Oct/2000:13:55:36 -0700]"));
    }
}

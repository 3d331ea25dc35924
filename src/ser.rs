//! Serializing Rust values into LTSV records.
//!
//! LTSV is flat: a record is a set of string fields. [`RecordSerializer`]
//! accepts structs and maps at the top level, and [`FieldSerializer`] turns
//! each field value into its text form:
//!
//! | Rust value | Field |
//! |------------|-------|
//! | `bool`, integers, floats, `char`, strings | `Display` text |
//! | `None`, `()`, unit struct | empty value |
//! | unit enum variant | variant name |
//! | newtype struct / `Some(x)` | same as `x` |
//!
//! Sequences, nested maps, byte strings and data-carrying enum variants have
//! no LTSV form and fail with [`Error::UnsupportedType`].
//!
//! ## Examples
//!
//! ```rust
//! use serde::Serialize;
//! use serde_ltsv::to_record;
//!
//! #[derive(Serialize)]
//! struct Hit { host: String, status: u16, referer: Option<String> }
//!
//! let record = to_record(&Hit { host: "a".into(), status: 200, referer: None }).unwrap();
//! assert_eq!(record.get("status"), Some("200"));
//! assert_eq!(record.get("referer"), Some(""));
//! ```

use crate::{Error, Record, Result};
use serde::ser::{self, Impossible, Serialize};

/// Serializer producing a whole [`Record`] from a struct or map.
pub struct RecordSerializer;

/// Collects the fields of a struct or map.
pub struct SerializeRecord {
    record: Record,
    current_label: Option<String>,
}

impl SerializeRecord {
    fn new(capacity: usize) -> Self {
        SerializeRecord {
            record: Record::with_capacity(capacity),
            current_label: None,
        }
    }

    fn insert<T>(&mut self, label: String, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let text = value.serialize(FieldSerializer)?;
        self.record.insert(label, text);
        Ok(())
    }
}

fn top_level(kind: &str) -> Error {
    Error::unsupported_type(&format!("{kind} cannot be a record, expected a struct or map"))
}

impl ser::Serializer for RecordSerializer {
    type Ok = Record;
    type Error = Error;

    type SerializeSeq = Impossible<Record, Error>;
    type SerializeTuple = Impossible<Record, Error>;
    type SerializeTupleStruct = Impossible<Record, Error>;
    type SerializeTupleVariant = Impossible<Record, Error>;
    type SerializeMap = SerializeRecord;
    type SerializeStruct = SerializeRecord;
    type SerializeStructVariant = Impossible<Record, Error>;

    fn serialize_bool(self, _v: bool) -> Result<Record> {
        Err(top_level("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<Record> {
        Err(top_level("integer"))
    }

    fn serialize_i16(self, _v: i16) -> Result<Record> {
        Err(top_level("integer"))
    }

    fn serialize_i32(self, _v: i32) -> Result<Record> {
        Err(top_level("integer"))
    }

    fn serialize_i64(self, _v: i64) -> Result<Record> {
        Err(top_level("integer"))
    }

    fn serialize_u8(self, _v: u8) -> Result<Record> {
        Err(top_level("integer"))
    }

    fn serialize_u16(self, _v: u16) -> Result<Record> {
        Err(top_level("integer"))
    }

    fn serialize_u32(self, _v: u32) -> Result<Record> {
        Err(top_level("integer"))
    }

    fn serialize_u64(self, _v: u64) -> Result<Record> {
        Err(top_level("integer"))
    }

    fn serialize_f32(self, _v: f32) -> Result<Record> {
        Err(top_level("float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Record> {
        Err(top_level("float"))
    }

    fn serialize_char(self, _v: char) -> Result<Record> {
        Err(top_level("char"))
    }

    fn serialize_str(self, _v: &str) -> Result<Record> {
        Err(top_level("string"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Record> {
        Err(top_level("bytes"))
    }

    fn serialize_none(self) -> Result<Record> {
        Err(top_level("none"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Record>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Record> {
        Ok(Record::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Record> {
        Ok(Record::new())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Record> {
        Err(top_level("enum variant"))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Record>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Record>
    where
        T: ?Sized + Serialize,
    {
        Err(top_level("enum variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(top_level("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(top_level("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(top_level("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(top_level("enum variant"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(SerializeRecord::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(SerializeRecord::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(top_level("enum variant"))
    }
}

impl ser::SerializeMap for SerializeRecord {
    type Ok = Record;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_label = Some(key.serialize(FieldSerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let label = self
            .current_label
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.insert(label, value)
    }

    fn end(self) -> Result<Record> {
        Ok(self.record)
    }
}

impl ser::SerializeStruct for SerializeRecord {
    type Ok = Record;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Record> {
        Ok(self.record)
    }
}

/// Serializer rendering one field value as text.
pub struct FieldSerializer;

fn nested(kind: &str) -> Error {
    Error::unsupported_type(&format!("{kind} cannot be an LTSV field value"))
}

impl ser::Serializer for FieldSerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(nested("byte string"))
    }

    fn serialize_none(self) -> Result<String> {
        Ok(String::new())
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Ok(String::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(nested("enum variant with data"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(nested("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(nested("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(nested("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(nested("enum variant with data"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(nested("map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(nested("struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(nested("enum variant with data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    enum Method {
        Get,
        #[allow(dead_code)]
        Post,
    }

    #[derive(Serialize)]
    struct Hit {
        host: &'static str,
        method: Method,
        status: u16,
        size: Option<u64>,
        took: f64,
        cached: bool,
    }

    #[test]
    fn test_struct_fields_in_declaration_order() {
        let hit = Hit {
            host: "127.0.0.1",
            method: Method::Get,
            status: 200,
            size: Some(2326),
            took: 0.25,
            cached: false,
        };
        let record = crate::to_record(&hit).unwrap();
        let fields: Vec<_> = record.iter().collect();
        assert_eq!(
            fields,
            vec![
                ("host", "127.0.0.1"),
                ("method", "Get"),
                ("status", "200"),
                ("size", "2326"),
                ("took", "0.25"),
                ("cached", "false"),
            ]
        );
    }

    #[test]
    fn test_none_is_written_as_empty_value() {
        let hit = Hit {
            host: "::1",
            method: Method::Get,
            status: 304,
            size: None,
            took: 0.0,
            cached: true,
        };
        let record = crate::to_record(&hit).unwrap();
        assert_eq!(record.get("size"), Some(""));
        assert_eq!(record.len(), 6);
    }

    #[test]
    fn test_map_with_numeric_keys() {
        let mut map = BTreeMap::new();
        map.insert(1, "one");
        map.insert(2, "two");
        let record = crate::to_record(&map).unwrap();
        assert_eq!(record.get("2"), Some("two"));
    }

    #[test]
    fn test_nested_values_are_rejected() {
        #[derive(Serialize)]
        struct Tagged {
            tags: Vec<&'static str>,
        }
        let err = crate::to_record(&Tagged { tags: vec!["a"] }).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(_)));
    }

    #[test]
    fn test_top_level_scalar_is_rejected() {
        assert!(matches!(
            crate::to_record(&42).unwrap_err(),
            Error::UnsupportedType(_)
        ));
    }
}

//! Deserializing LTSV records into Rust values.
//!
//! A [`Record`] is presented to serde as a map of strings. Each value is
//! parsed on demand into whatever the target field asks for, so a struct
//! can declare `status: u16` and receive the number behind `status:200`.
//!
//! - an empty value is `None` for `Option` fields
//! - unit enum variants are matched by name
//! - missing labels follow serde's usual rules (`Option` fields become
//!   `None`, `#[serde(default)]` applies, other fields are an error)
//!
//! ## Examples
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_ltsv::{from_record, Record};
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Hit<'a> { host: &'a str, status: u16, referer: Option<String> }
//!
//! let record: Record = "host:127.0.0.1\tstatus:404\treferer:".parse().unwrap();
//! let hit: Hit = from_record(&record).unwrap();
//! assert_eq!(hit, Hit { host: "127.0.0.1", status: 404, referer: None });
//! ```

use crate::{Error, Record, Result};
use serde::de::value::BorrowedStrDeserializer;
use serde::de::{self, DeserializeSeed, MapAccess, Visitor};
use serde::forward_to_deserialize_any;

/// Deserializer over a whole record.
pub struct RecordDeserializer<'de> {
    record: &'de Record,
}

impl<'de> RecordDeserializer<'de> {
    pub fn new(record: &'de Record) -> Self {
        RecordDeserializer { record }
    }
}

impl<'de> de::Deserializer<'de> for RecordDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_map(FieldAccess {
            fields: self.record.into_iter(),
            current_label: "",
            pending: None,
        })
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct FieldAccess<'de> {
    fields: indexmap::map::Iter<'de, String, String>,
    current_label: &'de str,
    pending: Option<&'de str>,
}

impl<'de> MapAccess<'de> for FieldAccess<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: DeserializeSeed<'de>,
    {
        match self.fields.next() {
            Some((label, value)) => {
                self.current_label = label.as_str();
                self.pending = Some(value.as_str());
                seed.deserialize(FieldDeserializer::new(label)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: DeserializeSeed<'de>,
    {
        let value = self
            .pending
            .take()
            .ok_or_else(|| Error::custom("next_value called before next_key"))?;
        let label = self.current_label;
        seed.deserialize(FieldDeserializer::new(value))
            .map_err(|e| match e {
                Error::Custom(msg) => Error::invalid_value(label, &msg),
                other => other,
            })
    }
}

/// Deserializer over a single label or value string.
pub struct FieldDeserializer<'de> {
    text: &'de str,
}

impl<'de> FieldDeserializer<'de> {
    pub fn new(text: &'de str) -> Self {
        FieldDeserializer { text }
    }

    fn parse<T>(&self, expected: &str) -> Result<T>
    where
        T: std::str::FromStr,
    {
        self.text
            .parse()
            .map_err(|_| Error::custom(format!("expected {expected}, found {:?}", self.text)))
    }
}

macro_rules! deserialize_parsed {
    ($($method:ident => $visit:ident : $ty:ty, $expected:literal;)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: Visitor<'de>,
            {
                visitor.$visit(self.parse::<$ty>($expected)?)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for FieldDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.text)
    }

    deserialize_parsed! {
        deserialize_bool => visit_bool: bool, "a boolean";
        deserialize_i8 => visit_i8: i8, "an integer";
        deserialize_i16 => visit_i16: i16, "an integer";
        deserialize_i32 => visit_i32: i32, "an integer";
        deserialize_i64 => visit_i64: i64, "an integer";
        deserialize_i128 => visit_i128: i128, "an integer";
        deserialize_u8 => visit_u8: u8, "an unsigned integer";
        deserialize_u16 => visit_u16: u16, "an unsigned integer";
        deserialize_u32 => visit_u32: u32, "an unsigned integer";
        deserialize_u64 => visit_u64: u64, "an unsigned integer";
        deserialize_u128 => visit_u128: u128, "an unsigned integer";
        deserialize_f32 => visit_f32: f32, "a number";
        deserialize_f64 => visit_f64: f64, "a number";
        deserialize_char => visit_char: char, "a single character";
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        if self.text.is_empty() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        if self.text.is_empty() {
            visitor.visit_unit()
        } else {
            Err(Error::custom(format!("expected an empty value, found {:?}", self.text)))
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_enum(BorrowedStrDeserializer::<Error>::new(self.text))
    }

    fn deserialize_seq<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_type("LTSV values cannot hold sequences"))
    }

    fn deserialize_map<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_type("LTSV values cannot hold maps"))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    forward_to_deserialize_any! {
        str string bytes byte_buf tuple tuple_struct identifier ignored_any
    }
}

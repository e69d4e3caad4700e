//! Serde support for values (feature-gated)
//!
//! Lets inputs be loaded from any serde format. Every number deserializes to
//! [`Value::Number`], so JSON `5` is checked the same as JSON `5.0`.
//!
//! # Example
//!
//! ```rust,ignore
//! use ruler::prelude::*;
//!
//! let input: Value = serde_json::from_str(r#""report.pdf""#).unwrap();
//! assert!(ends_with(".pdf").check(&input).into_result().unwrap());
//! ```

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use super::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Absent => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Opaque(o) => Err(serde::ser::Error::custom(format!(
                "opaque value of type {} cannot be serialized",
                o.type_name()
            ))),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a null, bool, number, string, sequence or map")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::Str(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = BTreeMap::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            map.insert(key, value);
        }
        Ok(Value::Map(map))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_numbers_are_numbers() {
        let v: Value = serde_json::from_str("5").unwrap();
        assert_eq!(v, Value::Number(5.0));
        let v: Value = serde_json::from_str("-2.5").unwrap();
        assert_eq!(v, Value::Number(-2.5));
    }

    #[test]
    fn test_json_null_is_absent() {
        let v: Value = serde_json::from_str("null").unwrap();
        assert_eq!(v, Value::Absent);
    }

    #[test]
    fn test_json_nested() {
        let v: Value = serde_json::from_str(r#"{"name": "ada", "tags": ["x", true]}"#).unwrap();
        let mut expected = BTreeMap::new();
        expected.insert("name".to_string(), Value::from("ada"));
        expected.insert(
            "tags".to_string(),
            Value::List(vec![Value::from("x"), Value::Bool(true)]),
        );
        assert_eq!(v, Value::Map(expected));
    }

    #[test]
    fn test_serialize_scalars() {
        assert_eq!(serde_json::to_string(&Value::from("hi")).unwrap(), r#""hi""#);
        assert_eq!(serde_json::to_string(&Value::Absent).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::Integer(3)).unwrap(), "3");
    }

    #[test]
    fn test_serialize_opaque_fails() {
        #[derive(Debug, PartialEq)]
        struct Secret;

        let result = serde_json::to_string(&Value::opaque(Secret));
        assert!(result.is_err());
    }
}

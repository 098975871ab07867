//! Dynamically-typed field values for log records
//!
//! The value model is closed: everything a record can hold is one of these
//! variants, so both wire encoders can always represent it. The one lenient
//! spot is non-finite floats, which serialize as null instead of failing the
//! whole record.

use serde::ser::{Serialize, Serializer};
use std::fmt;

use super::log_context::LogContext;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<FieldValue>),
    /// Nested mapping; entries keep insertion order.
    Map(Vec<(String, FieldValue)>),
}

impl FieldValue {
    /// Convert to a `serde_json::Value`, applying the same leniency as the
    /// wire encoders (non-finite floats become null).
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Array(items) => {
                serde_json::Value::Array(items.iter().map(FieldValue::to_json_value).collect())
            }
            FieldValue::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json_value()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Int(i) => serializer.serialize_i64(*i),
            FieldValue::Float(f) => {
                if f.is_finite() {
                    serializer.serialize_f64(*f)
                } else {
                    serializer.serialize_unit()
                }
            }
            FieldValue::String(s) => serializer.serialize_str(s),
            FieldValue::Array(items) => serializer.collect_seq(items),
            FieldValue::Map(entries) => {
                serializer.collect_map(entries.iter().map(|(k, v)| (k.as_str(), v)))
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Array(_) | FieldValue::Map(_) => {
                write!(f, "{}", self.to_json_value())
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<LogContext> for FieldValue {
    fn from(context: LogContext) -> Self {
        FieldValue::Map(context.into_fields())
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert_eq!(FieldValue::from("text"), FieldValue::String("text".into()));
        assert_eq!(FieldValue::from(42), FieldValue::Int(42));
        assert_eq!(FieldValue::from(42_i64), FieldValue::Int(42));
        assert_eq!(FieldValue::from(2.5), FieldValue::Float(2.5));
        assert_eq!(FieldValue::from(true), FieldValue::Bool(true));
        assert_eq!(FieldValue::from(None::<i32>), FieldValue::Null);
        assert_eq!(
            FieldValue::from(vec![1, 2, 3]),
            FieldValue::Array(vec![
                FieldValue::Int(1),
                FieldValue::Int(2),
                FieldValue::Int(3)
            ])
        );
    }

    #[test]
    fn test_json_serialization() {
        let value = FieldValue::Map(vec![
            ("path".to_string(), FieldValue::String("/hello".into())),
            (
                "pages".to_string(),
                FieldValue::Array(vec![FieldValue::Int(1), FieldValue::Int(2)]),
            ),
        ]);

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"path":"/hello","pages":[1,2]}"#);
    }

    #[test]
    fn test_non_finite_float_serializes_as_null() {
        let json = serde_json::to_string(&FieldValue::Float(f64::NAN)).unwrap();
        assert_eq!(json, "null");

        let json = serde_json::to_string(&FieldValue::Float(f64::INFINITY)).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_map_preserves_insertion_order() {
        let value = FieldValue::Map(vec![
            ("z".to_string(), FieldValue::Int(1)),
            ("a".to_string(), FieldValue::Int(2)),
        ]);

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"z":1,"a":2}"#);
    }

    #[test]
    fn test_to_json_value_nested() {
        let value = FieldValue::Map(vec![(
            "inner".to_string(),
            FieldValue::Array(vec![FieldValue::Bool(false), FieldValue::Null]),
        )]);

        assert_eq!(
            value.to_json_value(),
            serde_json::json!({"inner": [false, null]})
        );
    }
}

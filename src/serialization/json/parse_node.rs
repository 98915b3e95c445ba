//! Parse node over a `serde_json::Value` tree

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::config::DEFAULT_MAX_DEPTH;
use crate::serialization::duration::IsoDuration;
use crate::serialization::error::SerializationError;
use crate::serialization::parse_node::ParseNode;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S%.f";
const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
// i64::MIN and i64::MAX + 1 are exact as f64
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// JSON type name used in mismatch errors
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read cursor over a borrowed JSON value
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
    depth: usize,
    max_depth: usize,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self::with_max_depth(value, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(value: &'a Value, max_depth: usize) -> Self {
        Self {
            value,
            depth: 0,
            max_depth,
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn child(&self, value: &'a Value) -> Result<JsonParseNode<'a>, SerializationError> {
        let depth = self.depth + 1;
        if depth > self.max_depth {
            return Err(SerializationError::MaxDepthExceeded {
                depth,
                max: self.max_depth,
            });
        }
        Ok(JsonParseNode {
            value,
            depth,
            max_depth: self.max_depth,
        })
    }

    fn mismatch(&self, expected: &'static str) -> SerializationError {
        SerializationError::TypeMismatch {
            expected,
            found: json_kind(self.value).to_string(),
        }
    }

    /// The string payload, `None` for null
    fn text(&self) -> Result<Option<&'a str>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.as_str())),
            _ => Err(self.mismatch("string")),
        }
    }

    fn parse_text<T>(
        &self,
        kind: &'static str,
        parse: impl FnOnce(&str) -> Result<T, String>,
    ) -> Result<Option<T>, SerializationError> {
        match self.text()? {
            Some(s) => parse(s)
                .map(Some)
                .map_err(|reason| SerializationError::invalid(kind, s, reason)),
            None => Ok(None),
        }
    }
}

impl ParseNode for JsonParseNode<'_> {
    fn get_child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>, SerializationError> {
        match self.value {
            Value::Object(map) => match map.get(name) {
                Some(value) => Ok(Some(Box::new(self.child(value)?))),
                None => Ok(None),
            },
            _ => Ok(None),
        }
    }

    fn get_string_value(&self) -> Result<Option<String>, SerializationError> {
        Ok(self.text()?.map(str::to_string))
    }

    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            _ => Err(self.mismatch("boolean")),
        }
    }

    fn get_i32_value(&self) -> Result<Option<i32>, SerializationError> {
        match self.get_i64_value()? {
            Some(n) => i32::try_from(n).map(Some).map_err(|_| SerializationError::IntegerOutOfRange {
                value: n.to_string(),
                target: "i32",
            }),
            None => Ok(None),
        }
    }

    fn get_i64_value(&self) -> Result<Option<i64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Some(i))
                } else if n.is_u64() {
                    Err(SerializationError::IntegerOutOfRange {
                        value: n.to_string(),
                        target: "i64",
                    })
                } else {
                    // Some producers write whole numbers as 87.0
                    match n.as_f64() {
                        Some(f) if f.fract() == 0.0 && f >= I64_LOWER && f < I64_UPPER => Ok(Some(f as i64)),
                        Some(f) if f.fract() == 0.0 => Err(SerializationError::IntegerOutOfRange {
                            value: n.to_string(),
                            target: "i64",
                        }),
                        _ => Err(SerializationError::invalid("integer", &n.to_string(), "not an integral number")),
                    }
                }
            }
            _ => Err(self.mismatch("number")),
        }
    }

    fn get_f64_value(&self) -> Result<Option<f64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(self.mismatch("number")),
        }
    }

    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, SerializationError> {
        self.parse_text("base64", |s| STANDARD.decode(s).map_err(|e| e.to_string()))
    }

    fn get_date_time_value(&self) -> Result<Option<DateTime<Utc>>, SerializationError> {
        self.parse_text("date-time", |s| {
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .or_else(|_| NaiveDateTime::parse_from_str(s, LOCAL_DATE_TIME_FORMAT).map(|dt| dt.and_utc()))
                .map_err(|e| e.to_string())
        })
    }

    fn get_date_only_value(&self) -> Result<Option<NaiveDate>, SerializationError> {
        self.parse_text("date", |s| {
            NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| e.to_string())
        })
    }

    fn get_time_only_value(&self) -> Result<Option<NaiveTime>, SerializationError> {
        self.parse_text("time", |s| {
            NaiveTime::parse_from_str(s, TIME_FORMAT).map_err(|e| e.to_string())
        })
    }

    fn get_duration_value(&self) -> Result<Option<IsoDuration>, SerializationError> {
        match self.text()? {
            Some(s) => s.parse::<IsoDuration>().map(Some),
            None => Ok(None),
        }
    }

    fn get_uuid_value(&self) -> Result<Option<Uuid>, SerializationError> {
        self.parse_text("uuid", |s| Uuid::parse_str(s).map_err(|e| e.to_string()))
    }

    fn get_raw_value(&self) -> Result<Option<Value>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            other => Ok(Some(other.clone())),
        }
    }

    fn get_object_properties(
        &self,
    ) -> Result<Option<Vec<(&str, Box<dyn ParseNode + '_>)>>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(map) => {
                let mut properties: Vec<(&str, Box<dyn ParseNode + '_>)> = Vec::with_capacity(map.len());
                for (name, value) in map {
                    properties.push((name.as_str(), Box::new(self.child(value)?)));
                }
                Ok(Some(properties))
            }
            _ => Err(self.mismatch("object")),
        }
    }

    fn get_collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => {
                let mut nodes: Vec<Box<dyn ParseNode + '_>> = Vec::with_capacity(items.len());
                for item in items {
                    nodes.push(Box::new(self.child(item)?));
                }
                Ok(Some(nodes))
            }
            _ => Err(self.mismatch("array")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn test_null_reads_as_none() {
        let value = json!(null);
        let node = JsonParseNode::new(&value);
        assert_eq!(node.get_string_value().unwrap(), None);
        assert_eq!(node.get_i32_value().unwrap(), None);
        assert_eq!(node.get_date_time_value().unwrap(), None);
        assert!(node.get_object_properties().unwrap().is_none());
    }

    #[test]
    fn test_type_mismatch_names_both_kinds() {
        let value = json!(true);
        let err = JsonParseNode::new(&value).get_string_value().unwrap_err();
        assert_eq!(err.to_string(), "Type mismatch: expected string, found boolean");
    }

    #[test]
    fn test_i32_range_checked() {
        let value = json!(3_000_000_000i64);
        let node = JsonParseNode::new(&value);
        assert_eq!(node.get_i64_value().unwrap(), Some(3_000_000_000));
        assert!(matches!(
            node.get_i32_value().unwrap_err(),
            SerializationError::IntegerOutOfRange { target: "i32", .. }
        ));

        let fractional = json!(1.5);
        assert!(JsonParseNode::new(&fractional).get_i32_value().is_err());
    }

    #[test]
    fn test_integral_float_reads_as_integer() {
        let value = json!(87.0);
        assert_eq!(JsonParseNode::new(&value).get_i32_value().unwrap(), Some(87));

        let negative = json!(-4.0);
        assert_eq!(JsonParseNode::new(&negative).get_i64_value().unwrap(), Some(-4));

        let huge = json!(1e20);
        assert!(matches!(
            JsonParseNode::new(&huge).get_i64_value().unwrap_err(),
            SerializationError::IntegerOutOfRange { target: "i64", .. }
        ));

        let fractional = json!(87.5);
        assert!(matches!(
            JsonParseNode::new(&fractional).get_i64_value().unwrap_err(),
            SerializationError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_date_time_offsets_normalised_to_utc() {
        let value = json!("2024-03-01T10:15:00+02:00");
        let dt = JsonParseNode::new(&value).get_date_time_value().unwrap().unwrap();
        assert_eq!(dt.hour(), 8);

        let local = json!("2024-03-01T10:15:00.5");
        let dt = JsonParseNode::new(&local).get_date_time_value().unwrap().unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_date_time_rejects_garbage() {
        let value = json!("yesterday");
        let err = JsonParseNode::new(&value).get_date_time_value().unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { kind: "date-time", .. }));
    }

    #[test]
    fn test_date_time_and_misc_values() {
        let date = json!("2023-12-31");
        let parsed = JsonParseNode::new(&date).get_date_only_value().unwrap().unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2023, 12, 31));

        let time = json!("08:30:00");
        let parsed = JsonParseNode::new(&time).get_time_only_value().unwrap().unwrap();
        assert_eq!((parsed.hour(), parsed.minute()), (8, 30));

        let bytes = json!("aGVsbG8=");
        assert_eq!(
            JsonParseNode::new(&bytes).get_byte_array_value().unwrap(),
            Some(b"hello".to_vec())
        );

        let id = json!("6f9619ff-8b86-d011-b42d-00c04fc964ff");
        assert!(JsonParseNode::new(&id).get_uuid_value().unwrap().is_some());

        let duration = json!("PT1H");
        assert_eq!(
            JsonParseNode::new(&duration).get_duration_value().unwrap(),
            Some(IsoDuration::from_hms(1, 0, 0))
        );
    }

    #[test]
    fn test_object_properties_keep_payload_order() {
        let value = json!({"zeta": 1, "alpha": 2, "mid": 3});
        let node = JsonParseNode::new(&value);
        let names: Vec<&str> = node
            .get_object_properties()
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_depth_limit() {
        let value = json!({"a": {"b": {"c": 1}}});
        let node = JsonParseNode::with_max_depth(&value, 1);
        let a = node.get_child_node("a").unwrap().unwrap();
        let Err(err) = a.get_child_node("b") else {
            panic!("expected depth error");
        };
        assert!(matches!(err, SerializationError::MaxDepthExceeded { depth: 2, max: 1 }));
    }

    #[test]
    fn test_child_of_non_object_is_absent() {
        let value = json!([1, 2]);
        assert!(JsonParseNode::new(&value).get_child_node("a").unwrap().is_none());
    }
}

//! Serialization writer producing a `serde_json::Value` tree

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};
use uuid::Uuid;

use crate::serialization::duration::IsoDuration;
use crate::serialization::error::SerializationError;
use crate::serialization::writer::SerializationWriter;
use crate::serialization::{AdditionalData, Parsable};

/// Collects written properties into a JSON object, in write order
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    fields: Map<String, Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Properties written so far
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    fn put(&mut self, key: &str, value: Value) -> Result<(), SerializationError> {
        if key.is_empty() {
            return Err(SerializationError::Write(
                "property name must not be empty".to_string(),
            ));
        }
        self.fields.insert(key.to_string(), value);
        Ok(())
    }

    fn put_some<T>(
        &mut self,
        key: &str,
        value: Option<T>,
        encode: impl FnOnce(T) -> Value,
    ) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.put(key, encode(v)),
            None => Ok(()),
        }
    }

    fn object_to_value(value: &dyn Parsable) -> Result<Map<String, Value>, SerializationError> {
        let mut child = JsonSerializationWriter::new();
        value.serialize(&mut child)?;
        Ok(child.fields)
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), SerializationError> {
        self.put_some(key, value, |v| Value::String(v.to_string()))
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), SerializationError> {
        self.put_some(key, value, Value::Bool)
    }

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), SerializationError> {
        self.put_some(key, value, |v| Value::Number(v.into()))
    }

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), SerializationError> {
        self.put_some(key, value, |v| Value::Number(v.into()))
    }

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), SerializationError> {
        let Some(v) = value else {
            return Ok(());
        };
        let number = Number::from_f64(v).ok_or_else(|| {
            SerializationError::Write(format!("{key}: {v} is not representable in JSON"))
        })?;
        self.put(key, Value::Number(number))
    }

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<(), SerializationError> {
        self.put_some(key, value, |v| Value::String(STANDARD.encode(v)))
    }

    fn write_date_time_value(
        &mut self,
        key: &str,
        value: Option<&DateTime<Utc>>,
    ) -> Result<(), SerializationError> {
        self.put_some(key, value, |v| {
            Value::String(v.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        })
    }

    fn write_date_only_value(&mut self, key: &str, value: Option<&NaiveDate>) -> Result<(), SerializationError> {
        self.put_some(key, value, |v| Value::String(v.format("%Y-%m-%d").to_string()))
    }

    fn write_time_only_value(&mut self, key: &str, value: Option<&NaiveTime>) -> Result<(), SerializationError> {
        self.put_some(key, value, |v| Value::String(v.format("%H:%M:%S%.f").to_string()))
    }

    fn write_duration_value(&mut self, key: &str, value: Option<&IsoDuration>) -> Result<(), SerializationError> {
        self.put_some(key, value, |v| Value::String(v.to_string()))
    }

    fn write_uuid_value(&mut self, key: &str, value: Option<&Uuid>) -> Result<(), SerializationError> {
        self.put_some(key, value, |v| Value::String(v.hyphenated().to_string()))
    }

    fn write_raw_value(&mut self, key: &str, value: Option<&Value>) -> Result<(), SerializationError> {
        self.put_some(key, value, Value::clone)
    }

    fn write_object_value(&mut self, key: &str, value: Option<&dyn Parsable>) -> Result<(), SerializationError> {
        let Some(model) = value else {
            return Ok(());
        };
        let fields = Self::object_to_value(model)?;
        if key.is_empty() {
            self.fields.extend(fields);
            Ok(())
        } else {
            self.put(key, Value::Object(fields))
        }
    }

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), SerializationError> {
        let Some(models) = values else {
            return Ok(());
        };
        let items = models
            .iter()
            .map(|model| Self::object_to_value(*model).map(Value::Object))
            .collect::<Result<Vec<_>, _>>()?;
        self.put(key, Value::Array(items))
    }

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), SerializationError> {
        self.put_some(key, values, |items| {
            Value::Array(items.iter().cloned().map(Value::String).collect())
        })
    }

    fn write_collection_of_uuid_values(&mut self, key: &str, values: Option<&[Uuid]>) -> Result<(), SerializationError> {
        self.put_some(key, values, |items| {
            Value::Array(
                items
                    .iter()
                    .map(|id| Value::String(id.hyphenated().to_string()))
                    .collect(),
            )
        })
    }

    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<(), SerializationError> {
        for (key, value) in data {
            self.fields.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}

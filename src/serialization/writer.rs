//! Format-agnostic write sink for models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use super::duration::IsoDuration;
use super::error::SerializationError;
use super::{AdditionalData, Parsable};

/// Sink that models write their properties to, in order.
///
/// A `None` value writes nothing, so absent fields stay absent on the wire.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), SerializationError>;

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), SerializationError>;

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), SerializationError>;

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), SerializationError>;

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), SerializationError>;

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<(), SerializationError>;

    fn write_date_time_value(
        &mut self,
        key: &str,
        value: Option<&DateTime<Utc>>,
    ) -> Result<(), SerializationError>;

    fn write_date_only_value(&mut self, key: &str, value: Option<&NaiveDate>) -> Result<(), SerializationError>;

    fn write_time_only_value(&mut self, key: &str, value: Option<&NaiveTime>) -> Result<(), SerializationError>;

    fn write_duration_value(&mut self, key: &str, value: Option<&IsoDuration>) -> Result<(), SerializationError>;

    fn write_uuid_value(&mut self, key: &str, value: Option<&Uuid>) -> Result<(), SerializationError>;

    /// Write an untyped JSON value as-is
    fn write_raw_value(&mut self, key: &str, value: Option<&Value>) -> Result<(), SerializationError>;

    /// Write a nested model; an empty key writes the model's properties
    /// into the current object
    fn write_object_value(&mut self, key: &str, value: Option<&dyn Parsable>) -> Result<(), SerializationError>;

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), SerializationError>;

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), SerializationError>;

    fn write_collection_of_uuid_values(&mut self, key: &str, values: Option<&[Uuid]>) -> Result<(), SerializationError>;

    /// Write every additional-data entry as a top-level property
    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<(), SerializationError>;
}

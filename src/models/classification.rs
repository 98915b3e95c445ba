//! Data-classification results for sensitive information types

use once_cell::sync::Lazy;

use super::macros::additional_data_owned;
use crate::serialization::{
    AdditionalData, AdditionalDataHolder, FieldDeserializers, ODATA_TYPE_KEY, OdataType, Parsable, ParseNode,
    SerializationError, SerializationWriter,
};

/// Outcome of classifying content against a sensitive information type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationResult {
    /// Confidence that the content matches, as a percentage
    pub confidence_level: Option<i32>,
    /// Number of matches found
    pub count: Option<i32>,
    pub sensitive_type_id: Option<String>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static CLASSIFICATION_RESULT_FIELDS: Lazy<FieldDeserializers<ClassificationResult>> = Lazy::new(|| {
    FieldDeserializers::<ClassificationResult>::new()
        .int32("confidenceLevel", |m, v| m.confidence_level = Some(v))
        .int32("count", |m, v| m.count = Some(v))
        .string("sensitiveTypeId", |m, v| m.sensitive_type_id = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl ClassificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// No subtypes exist, so the payload's discriminator is not consulted
    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &CLASSIFICATION_RESULT_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for ClassificationResult {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_i32_value("confidenceLevel", self.confidence_level)?;
        writer.write_i32_value("count", self.count)?;
        writer.write_string_value("sensitiveTypeId", self.sensitive_type_id.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

additional_data_owned!(ClassificationResult);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::JsonSerializer;

    #[test]
    fn test_any_discriminator_is_accepted() {
        let result = JsonSerializer::new()
            .deserialize(
                r#"{"confidenceLevel":87,"sensitiveTypeId":"X","@odata.type":"nonsense"}"#,
                ClassificationResult::create_from_discriminator_value,
            )
            .unwrap();
        assert_eq!(result.confidence_level, Some(87));
        assert_eq!(result.sensitive_type_id.as_deref(), Some("X"));
        assert_eq!(result.count, None);
        assert_eq!(result.odata_type(), Some("nonsense"));
    }

    #[test]
    fn test_count_must_be_integer() {
        let err = JsonSerializer::new()
            .deserialize(
                r#"{"count":"many"}"#,
                ClassificationResult::create_from_discriminator_value,
            )
            .unwrap_err();
        assert!(matches!(err, SerializationError::TypeMismatch { expected: "number", .. }));
    }
}

//! JSON backend built on `serde_json`

mod parse_node;
mod writer;

pub use parse_node::JsonParseNode;
pub use writer::JsonSerializationWriter;

use serde_json::Value;
use tracing::debug;

use crate::config::JsonConfig;
use crate::serialization::error::SerializationError;
use crate::serialization::parse_node::ParseNode;
use crate::serialization::writer::SerializationWriter;
use crate::serialization::{Parsable, ParsableFactory};

/// Decodes JSON payloads into models and encodes models back to JSON
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    config: JsonConfig,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JsonConfig {
        &self.config
    }

    /// Decode a JSON document. The root must be an object.
    pub fn deserialize<T: Parsable>(&self, text: &str, factory: ParsableFactory<T>) -> Result<T, SerializationError> {
        let value: Value = serde_json::from_str(text)?;
        self.deserialize_value(&value, factory)
    }

    /// Decode stored JSON bytes
    pub fn deserialize_slice<T: Parsable>(
        &self,
        bytes: &[u8],
        factory: ParsableFactory<T>,
    ) -> Result<T, SerializationError> {
        let value: Value = serde_json::from_slice(bytes)?;
        self.deserialize_value(&value, factory)
    }

    pub fn deserialize_value<T: Parsable>(
        &self,
        value: &Value,
        factory: ParsableFactory<T>,
    ) -> Result<T, SerializationError> {
        let node = JsonParseNode::with_max_depth(value, self.config.max_depth);
        let root: &dyn ParseNode = &node;
        root.get_object_value(factory)?
            .ok_or_else(|| SerializationError::TypeMismatch {
                expected: "object",
                found: "null".to_string(),
            })
    }

    pub fn serialize_value(&self, model: &dyn Parsable) -> Result<Value, SerializationError> {
        let mut writer = JsonSerializationWriter::new();
        writer.write_object_value("", Some(model))?;
        Ok(writer.into_value())
    }

    /// Encode a model as JSON text, indented when the config asks for it
    pub fn serialize(&self, model: &dyn Parsable) -> Result<String, SerializationError> {
        let value = self.serialize_value(model)?;
        let text = if self.config.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        debug!(bytes = text.len(), "serialized model");
        Ok(text)
    }

    /// Encode a model as JSON bytes for storage
    pub fn serialize_to_vec(&self, model: &dyn Parsable) -> Result<Vec<u8>, SerializationError> {
        let value = self.serialize_value(model)?;
        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(&value)?
        } else {
            serde_json::to_vec(&value)?
        };
        debug!(bytes = bytes.len(), "serialized model");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BaseItem, ClassificationResult, Entity, EntityKind};
    use serde_json::json;

    #[test]
    fn test_root_must_be_object() {
        let serializer = JsonSerializer::new();
        let err = serializer
            .deserialize("[1, 2]", ClassificationResult::create_from_discriminator_value)
            .unwrap_err();
        assert!(matches!(err, SerializationError::TypeMismatch { expected: "object", .. }));

        let err = serializer
            .deserialize("null", ClassificationResult::create_from_discriminator_value)
            .unwrap_err();
        assert!(matches!(err, SerializationError::TypeMismatch { found, .. } if found == "null"));
    }

    #[test]
    fn test_malformed_text_is_json_error() {
        let err = JsonSerializer::new()
            .deserialize("{", Entity::create_from_discriminator_value)
            .unwrap_err();
        assert!(matches!(err, SerializationError::Json(_)));
    }

    #[test]
    fn test_depth_limit_from_config() {
        let serializer = JsonSerializer::with_config(JsonConfig::builder().max_depth(2).build());
        let payload = json!({"createdBy": {"user": {"id": "1"}}}).to_string();
        let err = serializer
            .deserialize(&payload, BaseItem::create_from_discriminator_value)
            .unwrap_err();
        assert!(matches!(err, SerializationError::MaxDepthExceeded { .. }));
    }

    #[test]
    fn test_pretty_output() {
        let mut entity = Entity::new();
        entity.id = Some("42".to_string());
        let compact = JsonSerializer::new().serialize(&entity).unwrap();
        assert_eq!(compact, r#"{"id":"42"}"#);

        let pretty = JsonSerializer::with_config(JsonConfig::builder().pretty(true).build())
            .serialize(&entity)
            .unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_bytes_round_trip() {
        let serializer = JsonSerializer::new();
        let bytes = br##"{"id":"7","@odata.type":"#contoso.widget","size":3}"##;
        let kind: EntityKind = serializer
            .deserialize_slice(bytes, Entity::create_from_discriminator_value)
            .unwrap();
        assert_eq!(serializer.serialize_to_vec(&kind).unwrap(), bytes.to_vec());
    }
}

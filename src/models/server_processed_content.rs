//! Content that SharePoint servers post-process (link fixup, search indexing)

use once_cell::sync::Lazy;
use serde_json::Value;

use super::macros::additional_data_owned;
use crate::serialization::{
    AdditionalData, AdditionalDataHolder, FieldDeserializers, ODATA_TYPE_KEY, OdataType, Parsable, ParseNode,
    SerializationError, SerializationWriter, parsable_collection,
};

/// Key/value maps of a web part or title area, grouped by how the server
/// treats the values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerProcessedContent {
    /// Component ids the server may preload
    pub component_dependencies: Option<Vec<MetaDataKeyStringPair>>,
    pub custom_metadata: Option<Vec<MetaDataKeyValuePair>>,
    /// Rich text run through HTML safety checks
    pub html_strings: Option<Vec<MetaDataKeyStringPair>>,
    pub image_sources: Option<Vec<MetaDataKeyStringPair>>,
    pub links: Option<Vec<MetaDataKeyStringPair>>,
    pub searchable_plain_texts: Option<Vec<MetaDataKeyStringPair>>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static SERVER_PROCESSED_CONTENT_FIELDS: Lazy<FieldDeserializers<ServerProcessedContent>> = Lazy::new(|| {
    FieldDeserializers::<ServerProcessedContent>::new()
        .objects(
            "componentDependencies",
            MetaDataKeyStringPair::create_from_discriminator_value,
            |m, v| m.component_dependencies = Some(v),
        )
        .objects(
            "customMetadata",
            MetaDataKeyValuePair::create_from_discriminator_value,
            |m, v| m.custom_metadata = Some(v),
        )
        .objects(
            "htmlStrings",
            MetaDataKeyStringPair::create_from_discriminator_value,
            |m, v| m.html_strings = Some(v),
        )
        .objects(
            "imageSources",
            MetaDataKeyStringPair::create_from_discriminator_value,
            |m, v| m.image_sources = Some(v),
        )
        .objects("links", MetaDataKeyStringPair::create_from_discriminator_value, |m, v| {
            m.links = Some(v)
        })
        .objects(
            "searchablePlainTexts",
            MetaDataKeyStringPair::create_from_discriminator_value,
            |m, v| m.searchable_plain_texts = Some(v),
        )
        .odata_type(|m| &mut m.odata_type)
});

impl ServerProcessedContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &SERVER_PROCESSED_CONTENT_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for ServerProcessedContent {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_collection_of_object_values(
            "componentDependencies",
            parsable_collection(&self.component_dependencies).as_deref(),
        )?;
        writer.write_collection_of_object_values(
            "customMetadata",
            parsable_collection(&self.custom_metadata).as_deref(),
        )?;
        writer.write_collection_of_object_values("htmlStrings", parsable_collection(&self.html_strings).as_deref())?;
        writer.write_collection_of_object_values("imageSources", parsable_collection(&self.image_sources).as_deref())?;
        writer.write_collection_of_object_values("links", parsable_collection(&self.links).as_deref())?;
        writer.write_collection_of_object_values(
            "searchablePlainTexts",
            parsable_collection(&self.searchable_plain_texts).as_deref(),
        )?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

/// A string key paired with a string value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaDataKeyStringPair {
    pub key: Option<String>,
    pub value: Option<String>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static META_DATA_KEY_STRING_PAIR_FIELDS: Lazy<FieldDeserializers<MetaDataKeyStringPair>> = Lazy::new(|| {
    FieldDeserializers::<MetaDataKeyStringPair>::new()
        .string("key", |m, v| m.key = Some(v))
        .string("value", |m, v| m.value = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl MetaDataKeyStringPair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a populated pair
    pub fn with(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &META_DATA_KEY_STRING_PAIR_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for MetaDataKeyStringPair {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("key", self.key.as_deref())?;
        writer.write_string_value("value", self.value.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

/// A string key paired with an arbitrary JSON value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaDataKeyValuePair {
    pub key: Option<String>,
    pub value: Option<Value>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static META_DATA_KEY_VALUE_PAIR_FIELDS: Lazy<FieldDeserializers<MetaDataKeyValuePair>> = Lazy::new(|| {
    FieldDeserializers::<MetaDataKeyValuePair>::new()
        .string("key", |m, v| m.key = Some(v))
        .raw("value", |m, v| m.value = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl MetaDataKeyValuePair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &META_DATA_KEY_VALUE_PAIR_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for MetaDataKeyValuePair {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("key", self.key.as_deref())?;
        writer.write_raw_value("value", self.value.as_ref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

additional_data_owned!(ServerProcessedContent, MetaDataKeyStringPair, MetaDataKeyValuePair);

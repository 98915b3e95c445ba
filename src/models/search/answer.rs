//! Value objects shared by bookmarks and Q&A answers

use once_cell::sync::Lazy;

use crate::models::enums::DevicePlatformType;
use crate::models::macros::additional_data_owned;
use crate::serialization::{
    AdditionalData, AdditionalDataHolder, FieldDeserializers, ModelEnum, ODATA_TYPE_KEY, OdataType, Parsable,
    ParseNode, SerializationError, SerializationWriter,
};

/// Keywords that trigger an answer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerKeyword {
    pub keywords: Option<Vec<String>>,
    /// Also match keywords that are similar to the listed ones
    pub match_similar_keywords: Option<bool>,
    /// Keywords that belong exclusively to this answer
    pub reserved_keywords: Option<Vec<String>>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static ANSWER_KEYWORD_FIELDS: Lazy<FieldDeserializers<AnswerKeyword>> = Lazy::new(|| {
    FieldDeserializers::<AnswerKeyword>::new()
        .strings("keywords", |m, v| m.keywords = Some(v))
        .boolean("matchSimilarKeywords", |m, v| m.match_similar_keywords = Some(v))
        .strings("reservedKeywords", |m, v| m.reserved_keywords = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl AnswerKeyword {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &ANSWER_KEYWORD_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for AnswerKeyword {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_collection_of_string_values("keywords", self.keywords.as_deref())?;
        writer.write_bool_value("matchSimilarKeywords", self.match_similar_keywords)?;
        writer.write_collection_of_string_values("reservedKeywords", self.reserved_keywords.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

/// Alternate content of an answer for a specific language or platform
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerVariant {
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub language_tag: Option<String>,
    pub platform: Option<DevicePlatformType>,
    pub web_url: Option<String>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static ANSWER_VARIANT_FIELDS: Lazy<FieldDeserializers<AnswerVariant>> = Lazy::new(|| {
    FieldDeserializers::<AnswerVariant>::new()
        .string("description", |m, v| m.description = Some(v))
        .string("displayName", |m, v| m.display_name = Some(v))
        .string("languageTag", |m, v| m.language_tag = Some(v))
        .enumeration::<DevicePlatformType>("platform", |m, v| m.platform = Some(v))
        .string("webUrl", |m, v| m.web_url = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl AnswerVariant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &ANSWER_VARIANT_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for AnswerVariant {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_string_value("languageTag", self.language_tag.as_deref())?;
        writer.write_string_value("platform", self.platform.as_ref().map(ModelEnum::as_str))?;
        writer.write_string_value("webUrl", self.web_url.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

additional_data_owned!(AnswerKeyword, AnswerVariant);

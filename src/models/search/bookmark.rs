use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use super::{AnswerKeyword, AnswerVariant, SearchAnswer, SearchAnswerable};
use crate::models::entity::{Entity, Entityable};
use crate::models::enums::{AnswerState, DevicePlatformType};
use crate::models::macros::additional_data_in_base;
use crate::serialization::{
    AdditionalDataHolder, FieldDeserializers, ModelEnum, Parsable, ParseNode, SerializationError,
    SerializationWriter, enum_strings, parsable, parsable_collection,
};

/// A promoted link shown for matching search keywords
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    pub base: SearchAnswer,
    pub availability_end_date_time: Option<DateTime<Utc>>,
    pub availability_start_date_time: Option<DateTime<Utc>>,
    pub categories: Option<Vec<String>>,
    pub group_ids: Option<Vec<String>>,
    pub is_suggested: Option<bool>,
    pub keywords: Option<AnswerKeyword>,
    pub language_tags: Option<Vec<String>>,
    pub platforms: Option<Vec<DevicePlatformType>>,
    pub power_app_ids: Option<Vec<String>>,
    pub state: Option<AnswerState>,
    pub targeted_variations: Option<Vec<AnswerVariant>>,
}

static BOOKMARK_FIELDS: Lazy<FieldDeserializers<Bookmark>> = Lazy::new(|| {
    FieldDeserializers::<Bookmark>::inherit(SearchAnswer::field_deserializers(), |m| &mut m.base)
        .date_time("availabilityEndDateTime", |m, v| m.availability_end_date_time = Some(v))
        .date_time("availabilityStartDateTime", |m, v| m.availability_start_date_time = Some(v))
        .strings("categories", |m, v| m.categories = Some(v))
        .strings("groupIds", |m, v| m.group_ids = Some(v))
        .boolean("isSuggested", |m, v| m.is_suggested = Some(v))
        .object("keywords", AnswerKeyword::create_from_discriminator_value, |m, v| {
            m.keywords = Some(v)
        })
        .strings("languageTags", |m, v| m.language_tags = Some(v))
        .enums::<DevicePlatformType>("platforms", |m, v| m.platforms = Some(v))
        .strings("powerAppIds", |m, v| m.power_app_ids = Some(v))
        .enumeration::<AnswerState>("state", |m, v| m.state = Some(v))
        .objects(
            "targetedVariations",
            AnswerVariant::create_from_discriminator_value,
            |m, v| m.targeted_variations = Some(v),
        )
});

impl Default for Bookmark {
    fn default() -> Self {
        Self::new()
    }
}

impl Bookmark {
    pub fn new() -> Self {
        Self {
            base: SearchAnswer::with_odata_type("#microsoft.graph.search.bookmark"),
            availability_end_date_time: None,
            availability_start_date_time: None,
            categories: None,
            group_ids: None,
            is_suggested: None,
            keywords: None,
            language_tags: None,
            platforms: None,
            power_app_ids: None,
            state: None,
            targeted_variations: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &BOOKMARK_FIELDS
    }
}

impl Parsable for Bookmark {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_date_time_value("availabilityEndDateTime", self.availability_end_date_time.as_ref())?;
        writer.write_date_time_value("availabilityStartDateTime", self.availability_start_date_time.as_ref())?;
        writer.write_collection_of_string_values("categories", self.categories.as_deref())?;
        writer.write_collection_of_string_values("groupIds", self.group_ids.as_deref())?;
        writer.write_bool_value("isSuggested", self.is_suggested)?;
        writer.write_object_value("keywords", parsable(&self.keywords))?;
        writer.write_collection_of_string_values("languageTags", self.language_tags.as_deref())?;
        writer.write_collection_of_string_values("platforms", enum_strings(&self.platforms).as_deref())?;
        writer.write_collection_of_string_values("powerAppIds", self.power_app_ids.as_deref())?;
        writer.write_string_value("state", self.state.as_ref().map(ModelEnum::as_str))?;
        writer.write_collection_of_object_values(
            "targetedVariations",
            parsable_collection(&self.targeted_variations).as_deref(),
        )?;
        self.base.base.serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

impl Entityable for Bookmark {
    fn entity(&self) -> &Entity {
        &self.base.base
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.base.base
    }
}

impl SearchAnswerable for Bookmark {
    fn search_answer(&self) -> &SearchAnswer {
        &self.base
    }

    fn search_answer_mut(&mut self) -> &mut SearchAnswer {
        &mut self.base
    }
}

additional_data_in_base!(Bookmark);

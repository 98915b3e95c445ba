use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use super::{Bookmark, Qna};
use crate::models::entity::{Entity, Entityable};
use crate::models::identity::IdentitySet;
use crate::models::macros::{additional_data_in_base, delegate_capability, model_kind};
use crate::serialization::{
    AdditionalDataHolder, DiscriminatorRegistry, FieldDeserializers, Parsable, ParseNode, SerializationError,
    SerializationWriter, parsable,
};

const SEARCH_ANSWER: &str = "#microsoft.graph.search.searchAnswer";

/// Shared record of curated search results
#[derive(Debug, Clone, PartialEq)]
pub struct SearchAnswer {
    pub base: Entity,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub last_modified_by: Option<IdentitySet>,
    pub last_modified_date_time: Option<DateTime<Utc>>,
    pub web_url: Option<String>,
}

static SEARCH_ANSWER_FIELDS: Lazy<FieldDeserializers<SearchAnswer>> = Lazy::new(|| {
    FieldDeserializers::<SearchAnswer>::inherit(Entity::field_deserializers(), |m| &mut m.base)
        .string("description", |m, v| m.description = Some(v))
        .string("displayName", |m, v| m.display_name = Some(v))
        .object("lastModifiedBy", IdentitySet::create_from_discriminator_value, |m, v| {
            m.last_modified_by = Some(v)
        })
        .date_time("lastModifiedDateTime", |m, v| m.last_modified_date_time = Some(v))
        .string("webUrl", |m, v| m.web_url = Some(v))
});

static SEARCH_ANSWER_REGISTRY: Lazy<DiscriminatorRegistry<SearchAnswerKind>> = Lazy::new(|| {
    DiscriminatorRegistry::new(SEARCH_ANSWER, || {
        SearchAnswerKind::SearchAnswer(SearchAnswer::from_entity(Entity::new()))
    })
    .with("#microsoft.graph.search.bookmark", || Bookmark::new().into())
    .with("#microsoft.graph.search.qna", || Qna::new().into())
});

impl Default for SearchAnswer {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAnswer {
    pub fn new() -> Self {
        Self::with_odata_type(SEARCH_ANSWER)
    }

    pub(crate) fn with_odata_type(odata_type: &str) -> Self {
        Self::from_entity(Entity::with_odata_type(odata_type))
    }

    fn from_entity(base: Entity) -> Self {
        Self {
            base,
            description: None,
            display_name: None,
            last_modified_by: None,
            last_modified_date_time: None,
            web_url: None,
        }
    }

    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<SearchAnswerKind, SerializationError> {
        SEARCH_ANSWER_REGISTRY.resolve(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<SearchAnswerKind> {
        &SEARCH_ANSWER_REGISTRY
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &SEARCH_ANSWER_FIELDS
    }

    pub(crate) fn serialize_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_object_value("lastModifiedBy", parsable(&self.last_modified_by))?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time.as_ref())?;
        writer.write_string_value("webUrl", self.web_url.as_deref())
    }
}

impl Parsable for SearchAnswer {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.serialize_fields(writer)?;
        self.base.serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

impl Entityable for SearchAnswer {
    fn entity(&self) -> &Entity {
        &self.base
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

/// Any model built on [`SearchAnswer`]
pub trait SearchAnswerable: Entityable {
    fn search_answer(&self) -> &SearchAnswer;

    fn search_answer_mut(&mut self) -> &mut SearchAnswer;

    fn display_name(&self) -> Option<&str> {
        self.search_answer().display_name.as_deref()
    }
}

impl SearchAnswerable for SearchAnswer {
    fn search_answer(&self) -> &SearchAnswer {
        self
    }

    fn search_answer_mut(&mut self) -> &mut SearchAnswer {
        self
    }
}

additional_data_in_base!(SearchAnswer);

model_kind! {
    /// A search answer resolved from `@odata.type`
    pub enum SearchAnswerKind {
        SearchAnswer(SearchAnswer),
        Bookmark(Bookmark),
        Qna(Qna),
    }
}

delegate_capability! {
    SearchAnswerKind: Entityable { entity, entity_mut -> Entity } [SearchAnswer, Bookmark, Qna]
}

delegate_capability! {
    SearchAnswerKind: SearchAnswerable { search_answer, search_answer_mut -> SearchAnswer } [
        SearchAnswer,
        Bookmark,
        Qna,
    ]
}

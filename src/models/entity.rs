//! Entity: the root record of every addressable Graph resource

use once_cell::sync::Lazy;

use super::macros::{additional_data_owned, delegate_capability, model_kind};
use super::managed_tenants::CredentialUserRegistrationsSummary;
use super::search::{Bookmark, Qna, SearchAnswer};
use super::tenant_admin::Settings;
use super::{
    BaseItem, CanvasLayout, HorizontalSection, HorizontalSectionColumn, SitePage, StandardWebPart,
    TextWebPart, VerticalSection, WebPart,
};
use crate::serialization::{
    AdditionalData, AdditionalDataHolder, DiscriminatorRegistry, FieldDeserializers, ODATA_TYPE_KEY,
    OdataType, Parsable, ParseNode, SerializationError, SerializationWriter,
};

/// Base record holding the resource id, discriminator and unknown properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    /// Unique identifier; read-only on the service side
    pub id: Option<String>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static ENTITY_FIELDS: Lazy<FieldDeserializers<Entity>> = Lazy::new(|| {
    FieldDeserializers::<Entity>::new()
        .string("id", |m, v| m.id = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

static ENTITY_REGISTRY: Lazy<DiscriminatorRegistry<EntityKind>> = Lazy::new(|| {
    DiscriminatorRegistry::new("#microsoft.graph.entity", || EntityKind::Entity(Entity::new()))
        .with("#microsoft.graph.baseItem", || BaseItem::new().into())
        .with("#microsoft.graph.sitePage", || SitePage::new().into())
        .with("#microsoft.graph.canvasLayout", || CanvasLayout::new().into())
        .with("#microsoft.graph.horizontalSection", || HorizontalSection::new().into())
        .with("#microsoft.graph.horizontalSectionColumn", || {
            HorizontalSectionColumn::new().into()
        })
        .with("#microsoft.graph.verticalSection", || VerticalSection::new().into())
        .with("#microsoft.graph.webPart", || WebPart::new().into())
        .with("#microsoft.graph.standardWebPart", || StandardWebPart::new().into())
        .with("#microsoft.graph.textWebPart", || TextWebPart::new().into())
        .with("#microsoft.graph.search.searchAnswer", || SearchAnswer::new().into())
        .with("#microsoft.graph.search.bookmark", || Bookmark::new().into())
        .with("#microsoft.graph.search.qna", || Qna::new().into())
        .with(
            "#microsoft.graph.managedTenants.credentialUserRegistrationsSummary",
            || CredentialUserRegistrationsSummary::new().into(),
        )
        .with("#microsoft.graph.tenantAdmin.settings", || Settings::new().into())
});

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entity record for a concrete subtype with a fixed discriminator
    pub(crate) fn with_odata_type(odata_type: &str) -> Self {
        Self {
            odata_type: OdataType::fixed(odata_type),
            ..Self::default()
        }
    }

    /// Pick the concrete entity type named by the node's `@odata.type`
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<EntityKind, SerializationError> {
        ENTITY_REGISTRY.resolve(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<EntityKind> {
        &ENTITY_REGISTRY
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &ENTITY_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub(crate) fn serialize_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("id", self.id.as_deref())
    }

    /// Discriminator and unknown properties, written after every field
    pub(crate) fn serialize_trailer(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl Parsable for Entity {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.serialize_fields(writer)?;
        self.serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

additional_data_owned!(Entity);

/// Any model built on [`Entity`]
pub trait Entityable: Parsable {
    fn entity(&self) -> &Entity;

    fn entity_mut(&mut self) -> &mut Entity;

    fn id(&self) -> Option<&str> {
        self.entity().id.as_deref()
    }

    fn set_id(&mut self, id: Option<String>) {
        self.entity_mut().id = id;
    }

    fn odata_type(&self) -> Option<&str> {
        self.entity().odata_type()
    }
}

impl Entityable for Entity {
    fn entity(&self) -> &Entity {
        self
    }

    fn entity_mut(&mut self) -> &mut Entity {
        self
    }
}

model_kind! {
    /// Every entity type this crate decodes
    pub enum EntityKind {
        Entity(Entity),
        BaseItem(BaseItem),
        SitePage(SitePage),
        CanvasLayout(CanvasLayout),
        HorizontalSection(HorizontalSection),
        HorizontalSectionColumn(HorizontalSectionColumn),
        VerticalSection(VerticalSection),
        WebPart(WebPart),
        StandardWebPart(StandardWebPart),
        TextWebPart(TextWebPart),
        SearchAnswer(SearchAnswer),
        Bookmark(Bookmark),
        Qna(Qna),
        CredentialUserRegistrationsSummary(CredentialUserRegistrationsSummary),
        Settings(Settings),
    }
}

delegate_capability! {
    EntityKind: Entityable { entity, entity_mut -> Entity } [
        Entity,
        BaseItem,
        SitePage,
        CanvasLayout,
        HorizontalSection,
        HorizontalSectionColumn,
        VerticalSection,
        WebPart,
        StandardWebPart,
        TextWebPart,
        SearchAnswer,
        Bookmark,
        Qna,
        CredentialUserRegistrationsSummary,
        Settings,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::JsonSerializer;

    #[test]
    fn test_new_entity_has_no_discriminator() {
        let entity = Entity::new();
        assert_eq!(entity.odata_type(), None);
        assert!(entity.additional_data().is_empty());
    }

    #[test]
    fn test_unknown_discriminator_falls_back_and_is_echoed() {
        let serializer = JsonSerializer::new();
        let payload = r##"{"id":"1","@odata.type":"#microsoft.graph.driveItem","size":10}"##;
        let kind = serializer
            .deserialize(payload, Entity::create_from_discriminator_value)
            .unwrap();

        let EntityKind::Entity(entity) = &kind else {
            panic!("expected base entity, got {}", kind.variant_name());
        };
        assert_eq!(entity.id(), Some("1"));
        assert_eq!(entity.odata_type(), Some("#microsoft.graph.driveItem"));
        assert_eq!(entity.additional_data()["size"], 10);
        assert_eq!(serializer.serialize(&kind).unwrap(), payload);
    }

    #[test]
    fn test_set_id_through_capability() {
        let mut kind: EntityKind = SitePage::new().into();
        kind.set_id(Some("page-1".to_string()));
        assert_eq!(kind.id(), Some("page-1"));
        assert_eq!(kind.odata_type(), Some("#microsoft.graph.sitePage"));
    }

    #[test]
    fn test_registry_lists_entity_subtypes() {
        let registry = Entity::registry();
        assert_eq!(registry.discriminators().len(), 14);
        assert!(registry.is_registered("#microsoft.graph.tenantAdmin.settings"));
        assert!(registry.is_registered("#microsoft.graph.search.qna"));
        assert!(!registry.is_registered("#microsoft.graph.entity"));
    }
}

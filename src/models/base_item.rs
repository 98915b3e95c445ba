//! Drive and site items: the shared base record and item references

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use super::entity::{Entity, Entityable};
use super::identity::IdentitySet;
use super::macros::{additional_data_in_base, additional_data_owned, delegate_capability, model_kind};
use super::site_page::SitePage;
use crate::serialization::{
    AdditionalData, AdditionalDataHolder, DiscriminatorRegistry, FieldDeserializers, ODATA_TYPE_KEY,
    OdataType, Parsable, ParseNode, SerializationError, SerializationWriter, parsable,
};

const BASE_ITEM: &str = "#microsoft.graph.baseItem";

/// Properties shared by items stored in drives and sites
#[derive(Debug, Clone, PartialEq)]
pub struct BaseItem {
    pub base: Entity,
    pub created_by: Option<IdentitySet>,
    pub created_date_time: Option<DateTime<Utc>>,
    pub description: Option<String>,
    /// Version tag used for optimistic concurrency
    pub e_tag: Option<String>,
    pub last_modified_by: Option<IdentitySet>,
    pub last_modified_date_time: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub parent_reference: Option<ItemReference>,
    pub web_url: Option<String>,
}

static BASE_ITEM_FIELDS: Lazy<FieldDeserializers<BaseItem>> = Lazy::new(|| {
    FieldDeserializers::<BaseItem>::inherit(Entity::field_deserializers(), |m| &mut m.base)
        .object("createdBy", IdentitySet::create_from_discriminator_value, |m, v| {
            m.created_by = Some(v)
        })
        .date_time("createdDateTime", |m, v| m.created_date_time = Some(v))
        .string("description", |m, v| m.description = Some(v))
        .string("eTag", |m, v| m.e_tag = Some(v))
        .object("lastModifiedBy", IdentitySet::create_from_discriminator_value, |m, v| {
            m.last_modified_by = Some(v)
        })
        .date_time("lastModifiedDateTime", |m, v| m.last_modified_date_time = Some(v))
        .string("name", |m, v| m.name = Some(v))
        .object("parentReference", ItemReference::create_from_discriminator_value, |m, v| {
            m.parent_reference = Some(v)
        })
        .string("webUrl", |m, v| m.web_url = Some(v))
});

static BASE_ITEM_REGISTRY: Lazy<DiscriminatorRegistry<BaseItemKind>> = Lazy::new(|| {
    DiscriminatorRegistry::new(BASE_ITEM, || BaseItemKind::BaseItem(BaseItem::from_entity(Entity::new())))
        .with("#microsoft.graph.sitePage", || SitePage::new().into())
});

impl Default for BaseItem {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseItem {
    pub fn new() -> Self {
        Self::with_odata_type(BASE_ITEM)
    }

    pub(crate) fn with_odata_type(odata_type: &str) -> Self {
        Self::from_entity(Entity::with_odata_type(odata_type))
    }

    fn from_entity(base: Entity) -> Self {
        Self {
            base,
            created_by: None,
            created_date_time: None,
            description: None,
            e_tag: None,
            last_modified_by: None,
            last_modified_date_time: None,
            name: None,
            parent_reference: None,
            web_url: None,
        }
    }

    /// Pick the concrete item type named by the node's `@odata.type`.
    /// Unknown item types decode as a plain `BaseItem` that keeps the
    /// payload's discriminator.
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<BaseItemKind, SerializationError> {
        BASE_ITEM_REGISTRY.resolve(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<BaseItemKind> {
        &BASE_ITEM_REGISTRY
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &BASE_ITEM_FIELDS
    }

    pub(crate) fn serialize_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_object_value("createdBy", parsable(&self.created_by))?;
        writer.write_date_time_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("eTag", self.e_tag.as_deref())?;
        writer.write_object_value("lastModifiedBy", parsable(&self.last_modified_by))?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time.as_ref())?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_object_value("parentReference", parsable(&self.parent_reference))?;
        writer.write_string_value("webUrl", self.web_url.as_deref())
    }
}

impl Parsable for BaseItem {
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

impl Entityable for BaseItem {
    fn entity(&self) -> &Entity {
        &self.base
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

/// Any model built on [`BaseItem`]
pub trait BaseItemable: Entityable {
    fn base_item(&self) -> &BaseItem;

    fn base_item_mut(&mut self) -> &mut BaseItem;

    fn name(&self) -> Option<&str> {
        self.base_item().name.as_deref()
    }

    fn web_url(&self) -> Option<&str> {
        self.base_item().web_url.as_deref()
    }
}

impl BaseItemable for BaseItem {
    fn base_item(&self) -> &BaseItem {
        self
    }

    fn base_item_mut(&mut self) -> &mut BaseItem {
        self
    }
}

additional_data_in_base!(BaseItem);

model_kind! {
    /// A base item or one of its subtypes
    pub enum BaseItemKind {
        BaseItem(BaseItem),
        SitePage(SitePage),
    }
}

delegate_capability! {
    BaseItemKind: Entityable { entity, entity_mut -> Entity } [BaseItem, SitePage]
}

delegate_capability! {
    BaseItemKind: BaseItemable { base_item, base_item_mut -> BaseItem } [BaseItem, SitePage]
}

/// Location of an item inside a drive or site
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemReference {
    pub drive_id: Option<String>,
    /// `personal`, `business` or `documentLibrary`
    pub drive_type: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    /// Percent-encoded path from the drive root
    pub path: Option<String>,
    pub share_id: Option<String>,
    pub sharepoint_ids: Option<SharepointIds>,
    pub site_id: Option<String>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static ITEM_REFERENCE_FIELDS: Lazy<FieldDeserializers<ItemReference>> = Lazy::new(|| {
    FieldDeserializers::<ItemReference>::new()
        .string("driveId", |m, v| m.drive_id = Some(v))
        .string("driveType", |m, v| m.drive_type = Some(v))
        .string("id", |m, v| m.id = Some(v))
        .string("name", |m, v| m.name = Some(v))
        .string("path", |m, v| m.path = Some(v))
        .string("shareId", |m, v| m.share_id = Some(v))
        .object("sharepointIds", SharepointIds::create_from_discriminator_value, |m, v| {
            m.sharepoint_ids = Some(v)
        })
        .string("siteId", |m, v| m.site_id = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl ItemReference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &ITEM_REFERENCE_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for ItemReference {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("driveId", self.drive_id.as_deref())?;
        writer.write_string_value("driveType", self.drive_type.as_deref())?;
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_string_value("path", self.path.as_deref())?;
        writer.write_string_value("shareId", self.share_id.as_deref())?;
        writer.write_object_value("sharepointIds", parsable(&self.sharepoint_ids))?;
        writer.write_string_value("siteId", self.site_id.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

/// SharePoint identifiers of an item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharepointIds {
    pub list_id: Option<String>,
    pub list_item_id: Option<String>,
    pub list_item_unique_id: Option<String>,
    pub site_id: Option<String>,
    pub site_url: Option<String>,
    pub tenant_id: Option<String>,
    pub web_id: Option<String>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static SHAREPOINT_IDS_FIELDS: Lazy<FieldDeserializers<SharepointIds>> = Lazy::new(|| {
    FieldDeserializers::<SharepointIds>::new()
        .string("listId", |m, v| m.list_id = Some(v))
        .string("listItemId", |m, v| m.list_item_id = Some(v))
        .string("listItemUniqueId", |m, v| m.list_item_unique_id = Some(v))
        .string("siteId", |m, v| m.site_id = Some(v))
        .string("siteUrl", |m, v| m.site_url = Some(v))
        .string("tenantId", |m, v| m.tenant_id = Some(v))
        .string("webId", |m, v| m.web_id = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl SharepointIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &SHAREPOINT_IDS_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for SharepointIds {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("listId", self.list_id.as_deref())?;
        writer.write_string_value("listItemId", self.list_item_id.as_deref())?;
        writer.write_string_value("listItemUniqueId", self.list_item_unique_id.as_deref())?;
        writer.write_string_value("siteId", self.site_id.as_deref())?;
        writer.write_string_value("siteUrl", self.site_url.as_deref())?;
        writer.write_string_value("tenantId", self.tenant_id.as_deref())?;
        writer.write_string_value("webId", self.web_id.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

additional_data_owned!(ItemReference, SharepointIds);

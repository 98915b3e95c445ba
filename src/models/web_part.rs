//! Web parts placed on a page canvas

use once_cell::sync::Lazy;
use serde_json::Value;

use super::entity::{Entity, Entityable};
use super::macros::{additional_data_in_base, additional_data_owned, delegate_capability, model_kind};
use super::server_processed_content::ServerProcessedContent;
use crate::serialization::{
    AdditionalData, AdditionalDataHolder, DiscriminatorRegistry, FieldDeserializers, ODATA_TYPE_KEY,
    OdataType, Parsable, ParseNode, SerializationError, SerializationWriter, parsable,
};

const WEB_PART: &str = "#microsoft.graph.webPart";
const STANDARD_WEB_PART: &str = "#microsoft.graph.standardWebPart";
const TEXT_WEB_PART: &str = "#microsoft.graph.textWebPart";

/// Base of every web part; carries no properties of its own
#[derive(Debug, Clone, PartialEq)]
pub struct WebPart {
    pub base: Entity,
}

static WEB_PART_FIELDS: Lazy<FieldDeserializers<WebPart>> =
    Lazy::new(|| FieldDeserializers::<WebPart>::inherit(Entity::field_deserializers(), |m| &mut m.base));

static WEB_PART_REGISTRY: Lazy<DiscriminatorRegistry<WebPartKind>> = Lazy::new(|| {
    DiscriminatorRegistry::new(WEB_PART, || WebPartKind::WebPart(WebPart { base: Entity::new() }))
        .with(STANDARD_WEB_PART, || StandardWebPart::new().into())
        .with(TEXT_WEB_PART, || TextWebPart::new().into())
});

impl Default for WebPart {
    fn default() -> Self {
        Self::new()
    }
}

impl WebPart {
    pub fn new() -> Self {
        Self::with_odata_type(WEB_PART)
    }

    pub(crate) fn with_odata_type(odata_type: &str) -> Self {
        Self {
            base: Entity::with_odata_type(odata_type),
        }
    }

    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<WebPartKind, SerializationError> {
        WEB_PART_REGISTRY.resolve(node)
    }

    pub fn registry() -> &'static DiscriminatorRegistry<WebPartKind> {
        &WEB_PART_REGISTRY
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &WEB_PART_FIELDS
    }

    pub(crate) fn serialize_fields(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)
    }
}

impl Parsable for WebPart {
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

impl Entityable for WebPart {
    fn entity(&self) -> &Entity {
        &self.base
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

/// Any model built on [`WebPart`]
pub trait WebPartable: Entityable {
    fn web_part(&self) -> &WebPart;

    fn web_part_mut(&mut self) -> &mut WebPart;
}

impl WebPartable for WebPart {
    fn web_part(&self) -> &WebPart {
        self
    }

    fn web_part_mut(&mut self) -> &mut WebPart {
        self
    }
}

/// A web part identified by its component type, with its data payload
#[derive(Debug, Clone, PartialEq)]
pub struct StandardWebPart {
    pub base: WebPart,
    pub data: Option<WebPartData>,
    /// Component id of the web part type
    pub web_part_type: Option<String>,
}

static STANDARD_WEB_PART_FIELDS: Lazy<FieldDeserializers<StandardWebPart>> = Lazy::new(|| {
    FieldDeserializers::<StandardWebPart>::inherit(WebPart::field_deserializers(), |m| &mut m.base)
        .object("data", WebPartData::create_from_discriminator_value, |m, v| m.data = Some(v))
        .string("webPartType", |m, v| m.web_part_type = Some(v))
});

impl Default for StandardWebPart {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardWebPart {
    pub fn new() -> Self {
        Self {
            base: WebPart::with_odata_type(STANDARD_WEB_PART),
            data: None,
            web_part_type: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &STANDARD_WEB_PART_FIELDS
    }
}

impl Parsable for StandardWebPart {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_object_value("data", parsable(&self.data))?;
        writer.write_string_value("webPartType", self.web_part_type.as_deref())?;
        self.entity().serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

/// A web part holding rich text
#[derive(Debug, Clone, PartialEq)]
pub struct TextWebPart {
    pub base: WebPart,
    pub inner_html: Option<String>,
}

static TEXT_WEB_PART_FIELDS: Lazy<FieldDeserializers<TextWebPart>> = Lazy::new(|| {
    FieldDeserializers::<TextWebPart>::inherit(WebPart::field_deserializers(), |m| &mut m.base)
        .string("innerHtml", |m, v| m.inner_html = Some(v))
});

impl Default for TextWebPart {
    fn default() -> Self {
        Self::new()
    }
}

impl TextWebPart {
    pub fn new() -> Self {
        Self {
            base: WebPart::with_odata_type(TEXT_WEB_PART),
            inner_html: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &TEXT_WEB_PART_FIELDS
    }
}

impl Parsable for TextWebPart {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_string_value("innerHtml", self.inner_html.as_deref())?;
        self.entity().serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

macro_rules! web_part_backed {
    ( $( $ty:ty ),+ ) => {
        $(
            impl Entityable for $ty {
                fn entity(&self) -> &Entity {
                    &self.base.base
                }

                fn entity_mut(&mut self) -> &mut Entity {
                    &mut self.base.base
                }
            }

            impl WebPartable for $ty {
                fn web_part(&self) -> &WebPart {
                    &self.base
                }

                fn web_part_mut(&mut self) -> &mut WebPart {
                    &mut self.base
                }
            }
        )+
    };
}

web_part_backed!(StandardWebPart, TextWebPart);
additional_data_in_base!(WebPart, StandardWebPart, TextWebPart);

model_kind! {
    /// A web part resolved from `@odata.type`
    pub enum WebPartKind {
        WebPart(WebPart),
        StandardWebPart(StandardWebPart),
        TextWebPart(TextWebPart),
    }
}

delegate_capability! {
    WebPartKind: Entityable { entity, entity_mut -> Entity } [WebPart, StandardWebPart, TextWebPart]
}

delegate_capability! {
    WebPartKind: WebPartable { web_part, web_part_mut -> WebPart } [WebPart, StandardWebPart, TextWebPart]
}

/// Configuration payload of a standard web part
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebPartData {
    /// Audience ids the web part is targeted at
    pub audiences: Option<Vec<String>>,
    pub data_version: Option<String>,
    pub description: Option<String>,
    /// Free-form properties defined by the web part type
    pub properties: Option<Value>,
    pub server_processed_content: Option<ServerProcessedContent>,
    pub title: Option<String>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static WEB_PART_DATA_FIELDS: Lazy<FieldDeserializers<WebPartData>> = Lazy::new(|| {
    FieldDeserializers::<WebPartData>::new()
        .strings("audiences", |m, v| m.audiences = Some(v))
        .string("dataVersion", |m, v| m.data_version = Some(v))
        .string("description", |m, v| m.description = Some(v))
        .raw("properties", |m, v| m.properties = Some(v))
        .object(
            "serverProcessedContent",
            ServerProcessedContent::create_from_discriminator_value,
            |m, v| m.server_processed_content = Some(v),
        )
        .string("title", |m, v| m.title = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl WebPartData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &WEB_PART_DATA_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for WebPartData {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_collection_of_string_values("audiences", self.audiences.as_deref())?;
        writer.write_string_value("dataVersion", self.data_version.as_deref())?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_raw_value("properties", self.properties.as_ref())?;
        writer.write_object_value("serverProcessedContent", parsable(&self.server_processed_content))?;
        writer.write_string_value("title", self.title.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

additional_data_owned!(WebPartData);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::JsonSerializer;
    use serde_json::json;

    #[test]
    fn test_registry_dispatch() {
        let serializer = JsonSerializer::new();
        let cases = [
            (json!({"@odata.type": STANDARD_WEB_PART}), "StandardWebPart"),
            (json!({"@odata.type": TEXT_WEB_PART}), "TextWebPart"),
            (json!({"@odata.type": "#microsoft.graph.imageWebPart"}), "WebPart"),
            (json!({}), "WebPart"),
        ];
        for (payload, expected) in cases {
            let kind = serializer
                .deserialize_value(&payload, WebPart::create_from_discriminator_value)
                .unwrap();
            assert_eq!(kind.variant_name(), expected, "payload {payload}");
        }
    }

    #[test]
    fn test_standard_web_part_round_trip() {
        let payload = json!({
            "id": "wp-1",
            "data": {
                "audiences": ["a1"],
                "dataVersion": "1.0",
                "properties": {"layout": 2, "items": [{"id": 1}]},
                "title": "Quick links"
            },
            "webPartType": "c70391ea-0b10-4ee9-b2b4-006d3fcad0cd",
            "@odata.type": STANDARD_WEB_PART
        });
        let serializer = JsonSerializer::new();
        let kind = serializer
            .deserialize_value(&payload, WebPart::create_from_discriminator_value)
            .unwrap();

        let WebPartKind::StandardWebPart(part) = &kind else {
            panic!("expected standard web part");
        };
        let data = part.data.as_ref().unwrap();
        assert_eq!(data.audiences, Some(vec!["a1".to_string()]));
        assert_eq!(data.properties, Some(json!({"layout": 2, "items": [{"id": 1}]})));
        assert_eq!(kind.web_part().id(), Some("wp-1"));

        assert_eq!(serializer.serialize_value(&kind).unwrap(), payload);
    }
}

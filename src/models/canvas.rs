//! Page canvas: horizontal sections with columns, and the vertical side section

use once_cell::sync::Lazy;

use super::entity::{Entity, Entityable};
use super::enums::{HorizontalSectionLayoutType, SectionEmphasisType};
use super::macros::additional_data_in_base;
use super::web_part::{WebPart, WebPartKind};
use crate::serialization::{
    AdditionalDataHolder, FieldDeserializers, ModelEnum, Parsable, ParseNode, SerializationError,
    SerializationWriter, parsable, parsable_collection,
};

/// Layout of a page's content
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasLayout {
    pub base: Entity,
    pub horizontal_sections: Option<Vec<HorizontalSection>>,
    pub vertical_section: Option<VerticalSection>,
}

static CANVAS_LAYOUT_FIELDS: Lazy<FieldDeserializers<CanvasLayout>> = Lazy::new(|| {
    FieldDeserializers::<CanvasLayout>::inherit(Entity::field_deserializers(), |m| &mut m.base)
        .objects(
            "horizontalSections",
            HorizontalSection::create_from_discriminator_value,
            |m, v| m.horizontal_sections = Some(v),
        )
        .object(
            "verticalSection",
            VerticalSection::create_from_discriminator_value,
            |m, v| m.vertical_section = Some(v),
        )
});

impl Default for CanvasLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasLayout {
    pub fn new() -> Self {
        Self {
            base: Entity::with_odata_type("#microsoft.graph.canvasLayout"),
            horizontal_sections: None,
            vertical_section: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &CANVAS_LAYOUT_FIELDS
    }

    /// Every web part on the canvas, section by section and column by column
    pub fn web_parts(&self) -> impl Iterator<Item = &WebPartKind> {
        let horizontal = self
            .horizontal_sections
            .iter()
            .flatten()
            .flat_map(|section| section.columns.iter().flatten())
            .flat_map(|column| column.webparts.iter().flatten());
        let vertical = self
            .vertical_section
            .iter()
            .flat_map(|section| section.webparts.iter().flatten());
        horizontal.chain(vertical)
    }
}

impl Parsable for CanvasLayout {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_collection_of_object_values(
            "horizontalSections",
            parsable_collection(&self.horizontal_sections).as_deref(),
        )?;
        writer.write_object_value("verticalSection", parsable(&self.vertical_section))?;
        self.base.serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

/// A row of the canvas split into columns
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalSection {
    pub base: Entity,
    pub columns: Option<Vec<HorizontalSectionColumn>>,
    pub emphasis: Option<SectionEmphasisType>,
    pub layout: Option<HorizontalSectionLayoutType>,
}

static HORIZONTAL_SECTION_FIELDS: Lazy<FieldDeserializers<HorizontalSection>> = Lazy::new(|| {
    FieldDeserializers::<HorizontalSection>::inherit(Entity::field_deserializers(), |m| &mut m.base)
        .objects(
            "columns",
            HorizontalSectionColumn::create_from_discriminator_value,
            |m, v| m.columns = Some(v),
        )
        .enumeration::<SectionEmphasisType>("emphasis", |m, v| m.emphasis = Some(v))
        .enumeration::<HorizontalSectionLayoutType>("layout", |m, v| m.layout = Some(v))
});

impl Default for HorizontalSection {
    fn default() -> Self {
        Self::new()
    }
}

impl HorizontalSection {
    pub fn new() -> Self {
        Self {
            base: Entity::with_odata_type("#microsoft.graph.horizontalSection"),
            columns: None,
            emphasis: None,
            layout: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &HORIZONTAL_SECTION_FIELDS
    }
}

impl Parsable for HorizontalSection {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_collection_of_object_values("columns", parsable_collection(&self.columns).as_deref())?;
        writer.write_string_value("emphasis", self.emphasis.as_ref().map(ModelEnum::as_str))?;
        writer.write_string_value("layout", self.layout.as_ref().map(ModelEnum::as_str))?;
        self.base.serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

/// One column of a horizontal section
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalSectionColumn {
    pub base: Entity,
    pub webparts: Option<Vec<WebPartKind>>,
    /// Width of the column on a twelve-part grid
    pub width: Option<i32>,
}

static HORIZONTAL_SECTION_COLUMN_FIELDS: Lazy<FieldDeserializers<HorizontalSectionColumn>> = Lazy::new(|| {
    FieldDeserializers::<HorizontalSectionColumn>::inherit(Entity::field_deserializers(), |m| &mut m.base)
        .objects("webparts", WebPart::create_from_discriminator_value, |m, v| {
            m.webparts = Some(v)
        })
        .int32("width", |m, v| m.width = Some(v))
});

impl Default for HorizontalSectionColumn {
    fn default() -> Self {
        Self::new()
    }
}

impl HorizontalSectionColumn {
    pub fn new() -> Self {
        Self {
            base: Entity::with_odata_type("#microsoft.graph.horizontalSectionColumn"),
            webparts: None,
            width: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &HORIZONTAL_SECTION_COLUMN_FIELDS
    }
}

impl Parsable for HorizontalSectionColumn {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_collection_of_object_values("webparts", parsable_collection(&self.webparts).as_deref())?;
        writer.write_i32_value("width", self.width)?;
        self.base.serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

/// Side section spanning the height of the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalSection {
    pub base: Entity,
    pub emphasis: Option<SectionEmphasisType>,
    pub webparts: Option<Vec<WebPartKind>>,
}

static VERTICAL_SECTION_FIELDS: Lazy<FieldDeserializers<VerticalSection>> = Lazy::new(|| {
    FieldDeserializers::<VerticalSection>::inherit(Entity::field_deserializers(), |m| &mut m.base)
        .enumeration::<SectionEmphasisType>("emphasis", |m, v| m.emphasis = Some(v))
        .objects("webparts", WebPart::create_from_discriminator_value, |m, v| {
            m.webparts = Some(v)
        })
});

impl Default for VerticalSection {
    fn default() -> Self {
        Self::new()
    }
}

impl VerticalSection {
    pub fn new() -> Self {
        Self {
            base: Entity::with_odata_type("#microsoft.graph.verticalSection"),
            emphasis: None,
            webparts: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &VERTICAL_SECTION_FIELDS
    }
}

impl Parsable for VerticalSection {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_string_value("emphasis", self.emphasis.as_ref().map(ModelEnum::as_str))?;
        writer.write_collection_of_object_values("webparts", parsable_collection(&self.webparts).as_deref())?;
        self.base.serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

macro_rules! entity_backed {
    ( $( $ty:ty ),+ ) => {
        $(
            impl Entityable for $ty {
                fn entity(&self) -> &Entity {
                    &self.base
                }

                fn entity_mut(&mut self) -> &mut Entity {
                    &mut self.base
                }
            }
        )+
    };
}

entity_backed!(CanvasLayout, HorizontalSection, HorizontalSectionColumn, VerticalSection);
additional_data_in_base!(CanvasLayout, HorizontalSection, HorizontalSectionColumn, VerticalSection);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::JsonSerializer;
    use serde_json::json;

    fn sample_canvas() -> serde_json::Value {
        json!({
            "horizontalSections": [{
                "id": "1",
                "layout": "twoColumns",
                "emphasis": "soft",
                "columns": [
                    {"id": "1", "width": 6, "webparts": [
                        {"@odata.type": "#microsoft.graph.textWebPart", "id": "t1", "innerHtml": "<p>Hi</p>"}
                    ]},
                    {"id": "2", "width": 6, "webparts": [
                        {"@odata.type": "#microsoft.graph.standardWebPart", "id": "s1", "webPartType": "d1d91016"}
                    ]}
                ]
            }],
            "verticalSection": {"emphasis": "none", "webparts": [
                {"@odata.type": "#microsoft.graph.textWebPart", "id": "t2"}
            ]}
        })
    }

    #[test]
    fn test_canvas_decodes_sections_and_web_parts() {
        let canvas = JsonSerializer::new()
            .deserialize_value(&sample_canvas(), CanvasLayout::create_from_discriminator_value)
            .unwrap();

        let section = &canvas.horizontal_sections.as_ref().unwrap()[0];
        assert_eq!(section.layout, Some(HorizontalSectionLayoutType::TwoColumns));
        assert_eq!(section.emphasis, Some(SectionEmphasisType::Soft));
        assert_eq!(section.columns.as_ref().map(Vec::len), Some(2));

        let kinds: Vec<&str> = canvas.web_parts().map(WebPartKind::variant_name).collect();
        assert_eq!(kinds, vec!["TextWebPart", "StandardWebPart", "TextWebPart"]);
        let ids: Vec<Option<&str>> = canvas.web_parts().map(|part| part.id()).collect();
        assert_eq!(ids, vec![Some("t1"), Some("s1"), Some("t2")]);
    }

    #[test]
    fn test_section_emphasis_rejects_unknown() {
        let payload = json!({"horizontalSections": [{"emphasis": "loud"}]});
        let err = JsonSerializer::new()
            .deserialize_value(&payload, CanvasLayout::create_from_discriminator_value)
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown SectionEmphasisType value: loud");
    }

    #[test]
    fn test_column_serialization() {
        let mut column = HorizontalSectionColumn::new();
        column.width = Some(12);
        column.webparts = Some(Vec::new());
        let value = JsonSerializer::new().serialize_value(&column).unwrap();
        assert_eq!(
            value,
            json!({
                "webparts": [],
                "width": 12,
                "@odata.type": "#microsoft.graph.horizontalSectionColumn"
            })
        );
    }
}

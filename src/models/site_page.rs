//! Modern SharePoint pages and their facets

use once_cell::sync::Lazy;

use super::base_item::{BaseItem, BaseItemable};
use super::canvas::CanvasLayout;
use super::entity::{Entity, Entityable};
use super::enums::{PageLayoutType, PagePromotionType, TitleAreaLayoutType, TitleAreaTextAlignmentType};
use super::identity::IdentitySet;
use super::macros::{additional_data_in_base, additional_data_owned};
use super::server_processed_content::ServerProcessedContent;
use super::web_part::{WebPart, WebPartKind};
use crate::serialization::{
    AdditionalData, AdditionalDataHolder, FieldDeserializers, ModelEnum, ODATA_TYPE_KEY, OdataType, Parsable,
    ParseNode, SerializationError, SerializationWriter, parsable, parsable_collection,
};

const SITE_PAGE: &str = "#microsoft.graph.sitePage";

/// A page in a site's pages library
#[derive(Debug, Clone, PartialEq)]
pub struct SitePage {
    pub base: BaseItem,
    pub canvas_layout: Option<CanvasLayout>,
    pub content_type: Option<ContentTypeInfo>,
    pub page_layout: Option<PageLayoutType>,
    pub promotion_kind: Option<PagePromotionType>,
    pub publishing_state: Option<PublicationFacet>,
    pub reactions: Option<ReactionsFacet>,
    pub show_comments: Option<bool>,
    pub show_recommended_pages: Option<bool>,
    pub thumbnail_web_url: Option<String>,
    pub title: Option<String>,
    pub title_area: Option<TitleArea>,
    /// Web parts on the page, outside of any canvas section
    pub web_parts: Option<Vec<WebPartKind>>,
}

static SITE_PAGE_FIELDS: Lazy<FieldDeserializers<SitePage>> = Lazy::new(|| {
    FieldDeserializers::<SitePage>::inherit(BaseItem::field_deserializers(), |m| &mut m.base)
        .object("canvasLayout", CanvasLayout::create_from_discriminator_value, |m, v| {
            m.canvas_layout = Some(v)
        })
        .object("contentType", ContentTypeInfo::create_from_discriminator_value, |m, v| {
            m.content_type = Some(v)
        })
        .enumeration::<PageLayoutType>("pageLayout", |m, v| m.page_layout = Some(v))
        .enumeration::<PagePromotionType>("promotionKind", |m, v| m.promotion_kind = Some(v))
        .object("publishingState", PublicationFacet::create_from_discriminator_value, |m, v| {
            m.publishing_state = Some(v)
        })
        .object("reactions", ReactionsFacet::create_from_discriminator_value, |m, v| {
            m.reactions = Some(v)
        })
        .boolean("showComments", |m, v| m.show_comments = Some(v))
        .boolean("showRecommendedPages", |m, v| m.show_recommended_pages = Some(v))
        .string("thumbnailWebUrl", |m, v| m.thumbnail_web_url = Some(v))
        .string("title", |m, v| m.title = Some(v))
        .object("titleArea", TitleArea::create_from_discriminator_value, |m, v| {
            m.title_area = Some(v)
        })
        .objects("webParts", WebPart::create_from_discriminator_value, |m, v| {
            m.web_parts = Some(v)
        })
});

impl Default for SitePage {
    fn default() -> Self {
        Self::new()
    }
}

impl SitePage {
    pub fn new() -> Self {
        Self {
            base: BaseItem::with_odata_type(SITE_PAGE),
            canvas_layout: None,
            content_type: None,
            page_layout: None,
            promotion_kind: None,
            publishing_state: None,
            reactions: None,
            show_comments: None,
            show_recommended_pages: None,
            thumbnail_web_url: None,
            title: None,
            title_area: None,
            web_parts: None,
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &SITE_PAGE_FIELDS
    }
}

impl Parsable for SitePage {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize_fields(writer)?;
        writer.write_object_value("canvasLayout", parsable(&self.canvas_layout))?;
        writer.write_object_value("contentType", parsable(&self.content_type))?;
        writer.write_string_value("pageLayout", self.page_layout.as_ref().map(ModelEnum::as_str))?;
        writer.write_string_value("promotionKind", self.promotion_kind.as_ref().map(ModelEnum::as_str))?;
        writer.write_object_value("publishingState", parsable(&self.publishing_state))?;
        writer.write_object_value("reactions", parsable(&self.reactions))?;
        writer.write_bool_value("showComments", self.show_comments)?;
        writer.write_bool_value("showRecommendedPages", self.show_recommended_pages)?;
        writer.write_string_value("thumbnailWebUrl", self.thumbnail_web_url.as_deref())?;
        writer.write_string_value("title", self.title.as_deref())?;
        writer.write_object_value("titleArea", parsable(&self.title_area))?;
        writer.write_collection_of_object_values("webParts", parsable_collection(&self.web_parts).as_deref())?;
        self.entity().serialize_trailer(writer)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

impl Entityable for SitePage {
    fn entity(&self) -> &Entity {
        &self.base.base
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.base.base
    }
}

impl BaseItemable for SitePage {
    fn base_item(&self) -> &BaseItem {
        &self.base
    }

    fn base_item_mut(&mut self) -> &mut BaseItem {
        &mut self.base
    }
}

/// Content type of a list item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentTypeInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static CONTENT_TYPE_INFO_FIELDS: Lazy<FieldDeserializers<ContentTypeInfo>> = Lazy::new(|| {
    FieldDeserializers::<ContentTypeInfo>::new()
        .string("id", |m, v| m.id = Some(v))
        .string("name", |m, v| m.name = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl ContentTypeInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &CONTENT_TYPE_INFO_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for ContentTypeInfo {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

/// Publishing status of a page or document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicationFacet {
    pub checked_out_by: Option<IdentitySet>,
    /// `published` or `checkout`
    pub level: Option<String>,
    pub version_id: Option<String>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static PUBLICATION_FACET_FIELDS: Lazy<FieldDeserializers<PublicationFacet>> = Lazy::new(|| {
    FieldDeserializers::<PublicationFacet>::new()
        .object("checkedOutBy", IdentitySet::create_from_discriminator_value, |m, v| {
            m.checked_out_by = Some(v)
        })
        .string("level", |m, v| m.level = Some(v))
        .string("versionId", |m, v| m.version_id = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl PublicationFacet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &PUBLICATION_FACET_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for PublicationFacet {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_object_value("checkedOutBy", parsable(&self.checked_out_by))?;
        writer.write_string_value("level", self.level.as_deref())?;
        writer.write_string_value("versionId", self.version_id.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

/// Social counters of a page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReactionsFacet {
    pub comment_count: Option<i32>,
    pub like_count: Option<i32>,
    pub share_count: Option<i32>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static REACTIONS_FACET_FIELDS: Lazy<FieldDeserializers<ReactionsFacet>> = Lazy::new(|| {
    FieldDeserializers::<ReactionsFacet>::new()
        .int32("commentCount", |m, v| m.comment_count = Some(v))
        .int32("likeCount", |m, v| m.like_count = Some(v))
        .int32("shareCount", |m, v| m.share_count = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl ReactionsFacet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &REACTIONS_FACET_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for ReactionsFacet {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_i32_value("commentCount", self.comment_count)?;
        writer.write_i32_value("likeCount", self.like_count)?;
        writer.write_i32_value("shareCount", self.share_count)?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

/// Title banner at the top of a page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleArea {
    pub alternative_text: Option<String>,
    pub enable_gradient_effect: Option<bool>,
    pub image_web_url: Option<String>,
    pub layout: Option<TitleAreaLayoutType>,
    pub server_processed_content: Option<ServerProcessedContent>,
    pub show_author: Option<bool>,
    pub show_published_date: Option<bool>,
    pub show_text_block_above_title: Option<bool>,
    pub text_above_title: Option<String>,
    pub text_alignment: Option<TitleAreaTextAlignmentType>,
    odata_type: OdataType,
    additional_data: AdditionalData,
}

static TITLE_AREA_FIELDS: Lazy<FieldDeserializers<TitleArea>> = Lazy::new(|| {
    FieldDeserializers::<TitleArea>::new()
        .string("alternativeText", |m, v| m.alternative_text = Some(v))
        .boolean("enableGradientEffect", |m, v| m.enable_gradient_effect = Some(v))
        .string("imageWebUrl", |m, v| m.image_web_url = Some(v))
        .enumeration::<TitleAreaLayoutType>("layout", |m, v| m.layout = Some(v))
        .object(
            "serverProcessedContent",
            ServerProcessedContent::create_from_discriminator_value,
            |m, v| m.server_processed_content = Some(v),
        )
        .boolean("showAuthor", |m, v| m.show_author = Some(v))
        .boolean("showPublishedDate", |m, v| m.show_published_date = Some(v))
        .boolean("showTextBlockAboveTitle", |m, v| m.show_text_block_above_title = Some(v))
        .string("textAboveTitle", |m, v| m.text_above_title = Some(v))
        .enumeration::<TitleAreaTextAlignmentType>("textAlignment", |m, v| m.text_alignment = Some(v))
        .odata_type(|m| &mut m.odata_type)
});

impl TitleArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }

    pub fn field_deserializers() -> &'static FieldDeserializers<Self> {
        &TITLE_AREA_FIELDS
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
}

impl Parsable for TitleArea {
    fn assign_field(&mut self, name: &str, node: &dyn ParseNode) -> Result<bool, SerializationError> {
        Self::field_deserializers().assign(self, name, node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("alternativeText", self.alternative_text.as_deref())?;
        writer.write_bool_value("enableGradientEffect", self.enable_gradient_effect)?;
        writer.write_string_value("imageWebUrl", self.image_web_url.as_deref())?;
        writer.write_string_value("layout", self.layout.as_ref().map(ModelEnum::as_str))?;
        writer.write_object_value("serverProcessedContent", parsable(&self.server_processed_content))?;
        writer.write_bool_value("showAuthor", self.show_author)?;
        writer.write_bool_value("showPublishedDate", self.show_published_date)?;
        writer.write_bool_value("showTextBlockAboveTitle", self.show_text_block_above_title)?;
        writer.write_string_value("textAboveTitle", self.text_above_title.as_deref())?;
        writer.write_string_value("textAlignment", self.text_alignment.as_ref().map(ModelEnum::as_str))?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data_holder(&mut self) -> Option<&mut dyn AdditionalDataHolder> {
        Some(self)
    }
}

additional_data_in_base!(SitePage);
additional_data_owned!(ContentTypeInfo, PublicationFacet, ReactionsFacet, TitleArea);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BaseItemKind;
    use crate::serialization::JsonSerializer;

    #[test]
    fn test_page_decodes_through_base_item_registry() {
        let payload = r##"{
            "@odata.type": "#microsoft.graph.sitePage",
            "name": "Home.aspx",
            "title": "Home",
            "pageLayout": "home",
            "promotionKind": "page",
            "showComments": true,
            "reactions": {"likeCount": 4},
            "titleArea": {"layout": "colorBlock", "textAlignment": "center", "showAuthor": false}
        }"##;
        let kind = JsonSerializer::new()
            .deserialize(payload, BaseItem::create_from_discriminator_value)
            .unwrap();

        let BaseItemKind::SitePage(page) = kind else {
            panic!("expected site page");
        };
        assert_eq!(page.name(), Some("Home.aspx"));
        assert_eq!(page.title.as_deref(), Some("Home"));
        assert_eq!(page.page_layout, Some(PageLayoutType::Home));
        assert_eq!(page.promotion_kind, Some(PagePromotionType::Page));
        assert_eq!(page.show_comments, Some(true));
        assert_eq!(page.reactions.as_ref().and_then(|r| r.like_count), Some(4));

        let title_area = page.title_area.as_ref().unwrap();
        assert_eq!(title_area.layout, Some(TitleAreaLayoutType::ColorBlock));
        assert_eq!(title_area.text_alignment, Some(TitleAreaTextAlignmentType::Center));
        assert_eq!(title_area.show_author, Some(false));
    }

    #[test]
    fn test_unknown_page_layout_fails() {
        let err = JsonSerializer::new()
            .deserialize(r#"{"pageLayout":"poster"}"#, SitePage::create_from_discriminator_value)
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown PageLayoutType value: poster");
    }

    #[test]
    fn test_page_serializes_base_fields_first() {
        let mut page = SitePage::new();
        page.title = Some("News".to_string());
        page.base.name = Some("News.aspx".to_string());
        page.set_id(Some("p1".to_string()));
        page.promotion_kind = Some(PagePromotionType::NewsPost);

        let json = JsonSerializer::new().serialize(&page).unwrap();
        assert_eq!(
            json,
            r##"{"id":"p1","name":"News.aspx","promotionKind":"newsPost","title":"News","@odata.type":"#microsoft.graph.sitePage"}"##
        );
    }

    #[test]
    fn test_payload_cannot_change_page_discriminator() {
        let page = JsonSerializer::new()
            .deserialize(
                r##"{"@odata.type":"#microsoft.graph.baseItem","title":"T"}"##,
                SitePage::create_from_discriminator_value,
            )
            .unwrap();
        assert_eq!(page.odata_type(), Some(SITE_PAGE));
    }
}

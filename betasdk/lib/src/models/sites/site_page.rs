use super::{
    AnyWebPart, CanvasLayout, PageLayoutType, PagePromotionType, ServerProcessedContent,
    TitleAreaLayoutType, TitleAreaTextAlignmentType,
};
use crate::error::Result;
use crate::models::{BaseItem, IdentitySet, impl_entity_ref};
use crate::serialization::{AdditionalData, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter};

// =============================================================================
// sitePage
// =============================================================================

/// A modern page in a SharePoint site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitePage {
    pub base_item: BaseItem,
    /// Layout of the page content; expand it to read the canvas.
    pub canvas_layout: Option<CanvasLayout>,
    pub content_type: Option<ContentTypeInfo>,
    pub page_layout: Option<PageLayoutType>,
    /// Whether the page is a news post or a plain page.
    pub promotion_kind: Option<PagePromotionType>,
    pub publishing_state: Option<PublicationFacet>,
    pub reactions: Option<ReactionsFacet>,
    pub show_comments: Option<bool>,
    pub show_recommended_pages: Option<bool>,
    pub thumbnail_web_url: Option<String>,
    pub title: Option<String>,
    pub title_area: Option<TitleArea>,
    /// Web parts in the legacy flat list; modern pages use `canvas_layout`.
    pub web_parts: Option<Vec<AnyWebPart>>,
}

impl SitePage {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.sitePage";

    pub fn new() -> Self {
        Self {
            base_item: BaseItem::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }

    /// Returns `true` if the page is promoted as a news post.
    pub fn is_news(&self) -> bool {
        self.promotion_kind == Some(PagePromotionType::NewsPost)
    }
}

impl_entity_ref!(SitePage, base_item);

impl Parsable for SitePage {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "canvasLayout" => self.canvas_layout = node.get_object_value()?,
            "contentType" => self.content_type = node.get_object_value()?,
            "pageLayout" => self.page_layout = node.get_enum_value()?,
            "promotionKind" => self.promotion_kind = node.get_enum_value()?,
            "publishingState" => self.publishing_state = node.get_object_value()?,
            "reactions" => self.reactions = node.get_object_value()?,
            "showComments" => self.show_comments = node.get_bool_value()?,
            "showRecommendedPages" => self.show_recommended_pages = node.get_bool_value()?,
            "thumbnailWebUrl" => self.thumbnail_web_url = node.get_string_value()?,
            "title" => self.title = node.get_string_value()?,
            "titleArea" => self.title_area = node.get_object_value()?,
            "webParts" => self.web_parts = node.get_collection_of_object_values()?,
            _ => return self.base_item.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.base_item.serialize(writer)?;
        writer.write_object_value("canvasLayout", self.canvas_layout.as_ref())?;
        writer.write_object_value("contentType", self.content_type.as_ref())?;
        writer.write_enum_value("pageLayout", self.page_layout)?;
        writer.write_enum_value("promotionKind", self.promotion_kind)?;
        writer.write_object_value("publishingState", self.publishing_state.as_ref())?;
        writer.write_object_value("reactions", self.reactions.as_ref())?;
        writer.write_bool_value("showComments", self.show_comments)?;
        writer.write_bool_value("showRecommendedPages", self.show_recommended_pages)?;
        writer.write_string_value("thumbnailWebUrl", self.thumbnail_web_url.as_deref())?;
        writer.write_string_value("title", self.title.as_deref())?;
        writer.write_object_value("titleArea", self.title_area.as_ref())?;
        writer.write_collection_of_object_values("webParts", self.web_parts.as_deref())
    }

    fn additional_data(&self) -> &AdditionalData {
        self.base_item.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base_item.additional_data_mut()
    }
}

// =============================================================================
// Title area
// =============================================================================

/// The banner at the top of a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleArea {
    /// Alternative text on the title area.
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
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl TitleArea {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Parsable for TitleArea {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "alternativeText" => self.alternative_text = node.get_string_value()?,
            "enableGradientEffect" => self.enable_gradient_effect = node.get_bool_value()?,
            "imageWebUrl" => self.image_web_url = node.get_string_value()?,
            "layout" => self.layout = node.get_enum_value()?,
            "serverProcessedContent" => self.server_processed_content = node.get_object_value()?,
            "showAuthor" => self.show_author = node.get_bool_value()?,
            "showPublishedDate" => self.show_published_date = node.get_bool_value()?,
            "showTextBlockAboveTitle" => {
                self.show_text_block_above_title = node.get_bool_value()?
            }
            "textAboveTitle" => self.text_above_title = node.get_string_value()?,
            "textAlignment" => self.text_alignment = node.get_enum_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string_value("alternativeText", self.alternative_text.as_deref())?;
        writer.write_bool_value("enableGradientEffect", self.enable_gradient_effect)?;
        writer.write_string_value("imageWebUrl", self.image_web_url.as_deref())?;
        writer.write_enum_value("layout", self.layout)?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_object_value("serverProcessedContent", self.server_processed_content.as_ref())?;
        writer.write_bool_value("showAuthor", self.show_author)?;
        writer.write_bool_value("showPublishedDate", self.show_published_date)?;
        writer.write_bool_value("showTextBlockAboveTitle", self.show_text_block_above_title)?;
        writer.write_string_value("textAboveTitle", self.text_above_title.as_deref())?;
        writer.write_enum_value("textAlignment", self.text_alignment)?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

// =============================================================================
// Facets
// =============================================================================

/// Publishing status of a page or list item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicationFacet {
    pub checked_out_by: Option<IdentitySet>,
    /// `published` or `checkout`.
    pub level: Option<String>,
    pub version_id: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Parsable for PublicationFacet {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "checkedOutBy" => self.checked_out_by = node.get_object_value()?,
            "level" => self.level = node.get_string_value()?,
            "versionId" => self.version_id = node.get_string_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_object_value("checkedOutBy", self.checked_out_by.as_ref())?;
        writer.write_string_value("level", self.level.as_deref())?;
        writer.write_string_value("versionId", self.version_id.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReactionsFacet {
    pub comment_count: Option<i32>,
    pub like_count: Option<i32>,
    pub share_count: Option<i32>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Parsable for ReactionsFacet {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "commentCount" => self.comment_count = node.get_i32_value()?,
            "likeCount" => self.like_count = node.get_i32_value()?,
            "shareCount" => self.share_count = node.get_i32_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_i32_value("commentCount", self.comment_count)?;
        writer.write_i32_value("likeCount", self.like_count)?;
        writer.write_i32_value("shareCount", self.share_count)?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The content type of a list item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentTypeInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Parsable for ContentTypeInfo {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "id" => self.id = node.get_string_value()?,
            "name" => self.name = node.get_string_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SerializationError;
    use crate::models::sites::TextWebPart;
    use crate::serialization::{from_json_str, from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn new_page_carries_discriminator() {
        let page = SitePage::new();
        assert_eq!(page.base_item.entity.odata_type.as_deref(), Some(SitePage::ODATA_TYPE));
        assert_eq!(
            to_json_value(&page).unwrap(),
            json!({"@odata.type": "#microsoft.graph.sitePage"})
        );
    }

    #[test]
    fn absent_fields_are_omitted() {
        let mut page = SitePage::default();
        page.title = Some("Quarterly update".to_string());
        page.show_comments = Some(false);
        assert_eq!(
            to_json_value(&page).unwrap(),
            json!({"title": "Quarterly update", "showComments": false})
        );
    }

    #[test]
    fn populated_page_round_trips() {
        let mut page = SitePage::new();
        page.base_item.entity.id = Some("a6b2c7e1".to_string());
        page.base_item.name = Some("update.aspx".to_string());
        page.page_layout = Some(PageLayoutType::Article);
        page.promotion_kind = Some(PagePromotionType::NewsPost);
        page.reactions = Some(ReactionsFacet {
            like_count: Some(12),
            ..ReactionsFacet::default()
        });
        page.title_area = Some(TitleArea {
            layout: Some(TitleAreaLayoutType::ColorBlock),
            text_alignment: Some(TitleAreaTextAlignmentType::Center),
            show_author: Some(true),
            ..TitleArea::default()
        });
        page.web_parts = Some(vec![TextWebPart::with_html("<p>body</p>").into()]);
        page.publishing_state = Some(PublicationFacet {
            level: Some("published".to_string()),
            version_id: Some("2.0".to_string()),
            checked_out_by: Some(IdentitySet::for_user("u1", "Ada")),
            ..PublicationFacet::default()
        });

        let json = to_json_value(&page).unwrap();
        assert_eq!(json["pageLayout"], "article");
        assert_eq!(json["titleArea"]["layout"], "colorBlock");
        assert_eq!(json["webParts"][0]["@odata.type"], "#microsoft.graph.textWebPart");

        let back: SitePage = from_json_value(&json).unwrap();
        assert_eq!(back, page);
        assert!(back.is_news());
    }

    #[test]
    fn bad_enum_in_nested_object_propagates() {
        let err = from_json_str::<SitePage>(r#"{"titleArea":{"textAlignment":"right"}}"#).unwrap_err();
        assert!(matches!(
            err,
            SerializationError::UnknownEnumValue(ref e) if e.enum_name == "titleAreaTextAlignmentType"
        ));
    }

    #[test]
    fn wrong_primitive_kind_is_a_type_mismatch() {
        let err = from_json_str::<SitePage>(r#"{"showComments":"yes"}"#).unwrap_err();
        assert!(matches!(
            err,
            SerializationError::TypeMismatch { expected: "boolean", found: "string" }
        ));
    }
}

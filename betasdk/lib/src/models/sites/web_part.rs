use serde_json::Value;
use tracing::debug;

use super::ServerProcessedContent;
use crate::error::Result;
use crate::models::{Entity, forward_to_variants, impl_entity_ref, impl_family_entity_ref};
use crate::serialization::{
    AdditionalData, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter, discriminator_value,
};

// =============================================================================
// webPart hierarchy
// =============================================================================

/// Base record of every web part on a page canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebPart {
    pub entity: Entity,
}

impl WebPart {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.webPart";

    pub fn new() -> Self {
        Self::with_odata_type(Self::ODATA_TYPE)
    }

    pub fn with_odata_type(odata_type: &str) -> Self {
        Self {
            entity: Entity::with_odata_type(odata_type),
        }
    }
}

impl_entity_ref!(WebPart, entity);

impl Parsable for WebPart {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        self.entity.deserialize_field(key, node)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.entity.serialize(writer)
    }

    fn additional_data(&self) -> &AdditionalData {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.entity.additional_data_mut()
    }
}

/// A web part built from a registered component, configured by [`WebPartData`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardWebPart {
    pub web_part: WebPart,
    /// The instance identifier of the container text web part, if this web
    /// part is embedded in one.
    pub container_text_web_part_id: Option<String>,
    pub data: Option<WebPartData>,
    /// Component id of the web part type.
    pub web_part_type: Option<String>,
}

impl StandardWebPart {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.standardWebPart";

    pub fn new() -> Self {
        Self {
            web_part: WebPart::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }
}

impl_entity_ref!(StandardWebPart, web_part);

impl Parsable for StandardWebPart {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "containerTextWebPartId" => self.container_text_web_part_id = node.get_string_value()?,
            "data" => self.data = node.get_object_value()?,
            "webPartType" => self.web_part_type = node.get_string_value()?,
            _ => return self.web_part.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.web_part.serialize(writer)?;
        writer.write_string_value(
            "containerTextWebPartId",
            self.container_text_web_part_id.as_deref(),
        )?;
        writer.write_object_value("data", self.data.as_ref())?;
        writer.write_string_value("webPartType", self.web_part_type.as_deref())
    }

    fn additional_data(&self) -> &AdditionalData {
        self.web_part.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.web_part.additional_data_mut()
    }
}

/// A rich-text web part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextWebPart {
    pub web_part: WebPart,
    pub inner_html: Option<String>,
}

impl TextWebPart {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.textWebPart";

    pub fn new() -> Self {
        Self {
            web_part: WebPart::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }

    pub fn with_html(inner_html: &str) -> Self {
        Self {
            inner_html: Some(inner_html.to_owned()),
            ..Self::new()
        }
    }
}

impl_entity_ref!(TextWebPart, web_part);

impl Parsable for TextWebPart {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "innerHtml" => self.inner_html = node.get_string_value()?,
            _ => return self.web_part.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.web_part.serialize(writer)?;
        writer.write_string_value("innerHtml", self.inner_html.as_deref())
    }

    fn additional_data(&self) -> &AdditionalData {
        self.web_part.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.web_part.additional_data_mut()
    }
}

/// Any web part, picked by `@odata.type`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyWebPart {
    Standard(StandardWebPart),
    Text(TextWebPart),
    WebPart(WebPart),
}

impl Default for AnyWebPart {
    fn default() -> Self {
        Self::WebPart(WebPart::default())
    }
}

impl Parsable for AnyWebPart {
    fn create_from_discriminator_value<N: ParseNode>(node: &N) -> Result<Self> {
        let discriminator = discriminator_value(node)?;
        let part = match discriminator.as_deref() {
            Some(StandardWebPart::ODATA_TYPE) => Self::Standard(StandardWebPart::default()),
            Some(TextWebPart::ODATA_TYPE) => Self::Text(TextWebPart::default()),
            Some(WebPart::ODATA_TYPE) | None => Self::WebPart(WebPart::default()),
            Some(other) => {
                debug!(discriminator = other, "unknown webPart subtype, using webPart");
                Self::WebPart(WebPart::default())
            }
        };
        Ok(part)
    }

    forward_to_variants!(Standard, Text, WebPart);
}

impl_family_entity_ref!(AnyWebPart { Standard, Text, WebPart });

impl From<StandardWebPart> for AnyWebPart {
    fn from(part: StandardWebPart) -> Self {
        Self::Standard(part)
    }
}

impl From<TextWebPart> for AnyWebPart {
    fn from(part: TextWebPart) -> Self {
        Self::Text(part)
    }
}

// =============================================================================
// Web part configuration
// =============================================================================

/// Configuration of a [`StandardWebPart`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebPartData {
    /// Audience ids the web part is targeted at.
    pub audiences: Option<Vec<String>>,
    pub data_version: Option<String>,
    pub description: Option<String>,
    /// Component-defined properties; the schema leaves them untyped.
    pub properties: Option<Value>,
    pub server_processed_content: Option<ServerProcessedContent>,
    pub title: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Parsable for WebPartData {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "audiences" => self.audiences = node.get_collection_of_string_values()?,
            "dataVersion" => self.data_version = node.get_string_value()?,
            "description" => self.description = node.get_string_value()?,
            "properties" => self.properties = node.get_untyped_value()?,
            "serverProcessedContent" => self.server_processed_content = node.get_object_value()?,
            "title" => self.title = node.get_string_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_collection_of_string_values("audiences", self.audiences.as_deref())?;
        writer.write_string_value("dataVersion", self.data_version.as_deref())?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_untyped_value("properties", self.properties.as_ref())?;
        writer.write_object_value("serverProcessedContent", self.server_processed_content.as_ref())?;
        writer.write_string_value("title", self.title.as_deref())?;
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

/// Where a web part sits on the canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebPartPosition {
    pub column_id: Option<f64>,
    pub horizontal_section_id: Option<f64>,
    pub is_in_vertical_section: Option<bool>,
    pub web_part_index: Option<f64>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Parsable for WebPartPosition {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "columnId" => self.column_id = node.get_f64_value()?,
            "horizontalSectionId" => self.horizontal_section_id = node.get_f64_value()?,
            "isInVerticalSection" => self.is_in_vertical_section = node.get_bool_value()?,
            "webPartIndex" => self.web_part_index = node.get_f64_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_f64_value("columnId", self.column_id)?;
        writer.write_f64_value("horizontalSectionId", self.horizontal_section_id)?;
        writer.write_bool_value("isInVerticalSection", self.is_in_vertical_section)?;
        writer.write_f64_value("webPartIndex", self.web_part_index)?;
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
    use crate::serialization::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn collection_dispatches_each_element() {
        let parts: Vec<AnyWebPart> = json!([
            {"@odata.type": "#microsoft.graph.textWebPart", "id": "t1", "innerHtml": "<p>x</p>"},
            {"@odata.type": "#microsoft.graph.standardWebPart", "id": "s1", "webPartType": "image",
             "data": {"title": "Logo", "properties": {"imageSourceType": 2}}},
            {"@odata.type": "#microsoft.graph.futureWebPart", "id": "f1", "flavor": "new"}
        ])
        .as_array()
        .unwrap()
        .iter()
        .map(|v| from_json_value(v).unwrap())
        .collect();

        assert_eq!(
            parts.iter().map(AnyWebPart::type_name).collect::<Vec<_>>(),
            ["Text", "Standard", "WebPart"]
        );
        let AnyWebPart::Standard(standard) = &parts[1] else {
            unreachable!()
        };
        let data = standard.data.as_ref().unwrap();
        assert_eq!(data.properties, Some(json!({"imageSourceType": 2})));
        assert_eq!(parts[2].additional_data()["flavor"], "new");
    }

    #[test]
    fn text_web_part_writes_its_discriminator() {
        let part = TextWebPart::with_html("<h2>Welcome</h2>");
        assert_eq!(
            to_json_value(&part).unwrap(),
            json!({"@odata.type": "#microsoft.graph.textWebPart", "innerHtml": "<h2>Welcome</h2>"})
        );
    }

    #[test]
    fn position_round_trips() {
        let payload = json!({
            "columnId": 1.0,
            "horizontalSectionId": 2.0,
            "isInVerticalSection": false,
            "webPartIndex": 0.5
        });
        let position: WebPartPosition = from_json_value(&payload).unwrap();
        assert_eq!(position.web_part_index, Some(0.5));
        assert_eq!(to_json_value(&position).unwrap(), payload);
    }
}

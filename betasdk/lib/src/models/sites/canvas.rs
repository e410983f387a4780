use super::{AnyWebPart, HorizontalSectionLayoutType, SectionEmphasisType};
use crate::error::Result;
use crate::models::{Entity, impl_entity_ref};
use crate::serialization::{AdditionalData, Parsable, ParseNode, SerializationWriter};

/// The layout of a page canvas: rows of horizontal sections plus an optional
/// vertical section on the right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasLayout {
    pub entity: Entity,
    pub horizontal_sections: Option<Vec<HorizontalSection>>,
    pub vertical_section: Option<VerticalSection>,
}

impl CanvasLayout {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.canvasLayout";

    pub fn new() -> Self {
        Self {
            entity: Entity::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }

    /// Every web part on the canvas, section by section.
    pub fn web_parts(&self) -> impl Iterator<Item = &AnyWebPart> {
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

impl_entity_ref!(CanvasLayout, entity);

impl Parsable for CanvasLayout {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "horizontalSections" => {
                self.horizontal_sections = node.get_collection_of_object_values()?
            }
            "verticalSection" => self.vertical_section = node.get_object_value()?,
            _ => return self.entity.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_collection_of_object_values(
            "horizontalSections",
            self.horizontal_sections.as_deref(),
        )?;
        writer.write_object_value("verticalSection", self.vertical_section.as_ref())
    }

    fn additional_data(&self) -> &AdditionalData {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.entity.additional_data_mut()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalSection {
    pub entity: Entity,
    pub columns: Option<Vec<HorizontalSectionColumn>>,
    pub emphasis: Option<SectionEmphasisType>,
    pub layout: Option<HorizontalSectionLayoutType>,
}

impl HorizontalSection {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.horizontalSection";

    pub fn new() -> Self {
        Self {
            entity: Entity::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }
}

impl_entity_ref!(HorizontalSection, entity);

impl Parsable for HorizontalSection {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "columns" => self.columns = node.get_collection_of_object_values()?,
            "emphasis" => self.emphasis = node.get_enum_value()?,
            "layout" => self.layout = node.get_enum_value()?,
            _ => return self.entity.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_collection_of_object_values("columns", self.columns.as_deref())?;
        writer.write_enum_value("emphasis", self.emphasis)?;
        writer.write_enum_value("layout", self.layout)
    }

    fn additional_data(&self) -> &AdditionalData {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.entity.additional_data_mut()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalSectionColumn {
    pub entity: Entity,
    pub webparts: Option<Vec<AnyWebPart>>,
    /// Width of the column, in twelfths of the section.
    pub width: Option<i32>,
}

impl HorizontalSectionColumn {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.horizontalSectionColumn";

    pub fn new() -> Self {
        Self {
            entity: Entity::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }
}

impl_entity_ref!(HorizontalSectionColumn, entity);

impl Parsable for HorizontalSectionColumn {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "webparts" => self.webparts = node.get_collection_of_object_values()?,
            "width" => self.width = node.get_i32_value()?,
            _ => return self.entity.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_collection_of_object_values("webparts", self.webparts.as_deref())?;
        writer.write_i32_value("width", self.width)
    }

    fn additional_data(&self) -> &AdditionalData {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.entity.additional_data_mut()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerticalSection {
    pub entity: Entity,
    pub emphasis: Option<SectionEmphasisType>,
    pub webparts: Option<Vec<AnyWebPart>>,
}

impl VerticalSection {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.verticalSection";

    pub fn new() -> Self {
        Self {
            entity: Entity::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }
}

impl_entity_ref!(VerticalSection, entity);

impl Parsable for VerticalSection {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "emphasis" => self.emphasis = node.get_enum_value()?,
            "webparts" => self.webparts = node.get_collection_of_object_values()?,
            _ => return self.entity.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_enum_value("emphasis", self.emphasis)?;
        writer.write_collection_of_object_values("webparts", self.webparts.as_deref())
    }

    fn additional_data(&self) -> &AdditionalData {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.entity.additional_data_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SerializationError;
    use crate::serialization::{from_json_value, to_json_value};
    use serde_json::json;

    fn canvas_payload() -> serde_json::Value {
        json!({
            "horizontalSections": [{
                "id": "1",
                "layout": "twoColumns",
                "emphasis": "soft",
                "columns": [
                    {"id": "1", "width": 6, "webparts": [
                        {"@odata.type": "#microsoft.graph.textWebPart", "id": "a", "innerHtml": "<p>a</p>"}
                    ]},
                    {"id": "2", "width": 6, "webparts": []}
                ]
            }],
            "verticalSection": {
                "emphasis": "none",
                "webparts": [
                    {"@odata.type": "#microsoft.graph.standardWebPart", "id": "b", "webPartType": "quickLinks"}
                ]
            }
        })
    }

    #[test]
    fn sections_columns_and_web_parts() {
        let canvas: CanvasLayout = from_json_value(&canvas_payload()).unwrap();
        let section = &canvas.horizontal_sections.as_ref().unwrap()[0];
        assert_eq!(section.layout, Some(HorizontalSectionLayoutType::TwoColumns));
        assert_eq!(section.emphasis, Some(SectionEmphasisType::Soft));
        assert_eq!(section.columns.as_ref().unwrap()[0].width, Some(6));
        assert_eq!(
            canvas.vertical_section.as_ref().unwrap().emphasis,
            Some(SectionEmphasisType::None)
        );

        let ids: Vec<_> = canvas
            .web_parts()
            .map(|part| part.entity().id.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn canvas_round_trips() {
        let payload = canvas_payload();
        let canvas: CanvasLayout = from_json_value(&payload).unwrap();
        assert_eq!(to_json_value(&canvas).unwrap(), payload);
    }

    #[test]
    fn unknown_layout_fails_with_enum_error() {
        let err = from_json_value::<HorizontalSection>(&json!({"layout": "fourColumns"})).unwrap_err();
        assert!(matches!(err, SerializationError::UnknownEnumValue(_)));
        assert_eq!(err.to_string(), "'fourColumns' is not a valid horizontalSectionLayoutType");
    }
}

use crate::error::Result;
use crate::serialization::{AdditionalData, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter};

/// The root of the entity hierarchy.
///
/// Every addressable Graph resource embeds this record, directly or through
/// an intermediate base such as [`BaseItem`](super::BaseItem). It owns the
/// discriminator and any properties no record in the chain declares.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    /// The unique identifier for an entity. Read-only.
    pub id: Option<String>,
    /// The `@odata.type` discriminator, kept verbatim.
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Entity {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.entity";

    pub fn new() -> Self {
        Self::default()
    }

    /// An empty entity carrying the given discriminator.
    pub fn with_odata_type(odata_type: &str) -> Self {
        Self {
            odata_type: Some(odata_type.to_owned()),
            ..Self::default()
        }
    }
}

impl AsRef<Entity> for Entity {
    fn as_ref(&self) -> &Entity {
        self
    }
}

impl AsMut<Entity> for Entity {
    fn as_mut(&mut self) -> &mut Entity {
        self
    }
}

impl Parsable for Entity {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "id" => self.id = node.get_string_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string_value("id", self.id.as_deref())?;
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

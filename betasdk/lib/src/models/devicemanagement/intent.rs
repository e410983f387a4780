use chrono::{DateTime, FixedOffset};

use crate::error::Result;
use crate::models::{Entity, impl_entity_ref};
use crate::serialization::{AdditionalData, Parsable, ParseNode, SerializationWriter};

/// A security baseline or endpoint-security policy instantiated from a
/// template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceManagementIntent {
    pub entity: Entity,
    pub description: Option<String>,
    pub display_name: Option<String>,
    /// Signifies whether or not the intent is assigned to users.
    pub is_assigned: Option<bool>,
    pub last_modified_date_time: Option<DateTime<FixedOffset>>,
    pub role_scope_tag_ids: Option<Vec<String>>,
    /// The id of the template this intent was created from.
    pub template_id: Option<String>,
}

impl DeviceManagementIntent {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceManagementIntent";

    pub fn new() -> Self {
        Self {
            entity: Entity::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }
}

impl_entity_ref!(DeviceManagementIntent, entity);

impl Parsable for DeviceManagementIntent {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "description" => self.description = node.get_string_value()?,
            "displayName" => self.display_name = node.get_string_value()?,
            "isAssigned" => self.is_assigned = node.get_bool_value()?,
            "lastModifiedDateTime" => self.last_modified_date_time = node.get_time_value()?,
            "roleScopeTagIds" => self.role_scope_tag_ids = node.get_collection_of_string_values()?,
            "templateId" => self.template_id = node.get_string_value()?,
            _ => return self.entity.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_bool_value("isAssigned", self.is_assigned)?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time)?;
        writer.write_collection_of_string_values(
            "roleScopeTagIds",
            self.role_scope_tag_ids.as_deref(),
        )?;
        writer.write_string_value("templateId", self.template_id.as_deref())
    }

    fn additional_data(&self) -> &AdditionalData {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.entity.additional_data_mut()
    }
}

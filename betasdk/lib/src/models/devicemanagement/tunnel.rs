use chrono::NaiveTime;

use crate::error::Result;
use crate::models::{Entity, impl_entity_ref};
use crate::serialization::{AdditionalData, Parsable, ParseNode, SerializationWriter};

/// A group of Microsoft Tunnel gateway servers sharing one public address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MicrosoftTunnelSite {
    pub entity: Entity,
    pub description: Option<String>,
    pub display_name: Option<String>,
    /// URL probed to detect that the device is on the internal network.
    pub internal_network_probe_url: Option<String>,
    /// Public domain name or IP address the servers are reached at.
    pub public_address: Option<String>,
    pub role_scope_tag_ids: Option<Vec<String>>,
    pub upgrade_automatically: Option<bool>,
    /// Read-only.
    pub upgrade_available: Option<bool>,
    pub upgrade_window_end_time: Option<NaiveTime>,
    pub upgrade_window_start_time: Option<NaiveTime>,
    /// Offset of the upgrade window from UTC, in minutes.
    pub upgrade_window_utc_offset_in_minutes: Option<i32>,
}

impl MicrosoftTunnelSite {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.microsoftTunnelSite";

    pub fn new() -> Self {
        Self {
            entity: Entity::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }
}

impl_entity_ref!(MicrosoftTunnelSite, entity);

impl Parsable for MicrosoftTunnelSite {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "description" => self.description = node.get_string_value()?,
            "displayName" => self.display_name = node.get_string_value()?,
            "internalNetworkProbeUrl" => {
                self.internal_network_probe_url = node.get_string_value()?
            }
            "publicAddress" => self.public_address = node.get_string_value()?,
            "roleScopeTagIds" => self.role_scope_tag_ids = node.get_collection_of_string_values()?,
            "upgradeAutomatically" => self.upgrade_automatically = node.get_bool_value()?,
            "upgradeAvailable" => self.upgrade_available = node.get_bool_value()?,
            "upgradeWindowEndTime" => self.upgrade_window_end_time = node.get_time_only_value()?,
            "upgradeWindowStartTime" => {
                self.upgrade_window_start_time = node.get_time_only_value()?
            }
            "upgradeWindowUtcOffsetInMinutes" => {
                self.upgrade_window_utc_offset_in_minutes = node.get_i32_value()?
            }
            _ => return self.entity.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_string_value(
            "internalNetworkProbeUrl",
            self.internal_network_probe_url.as_deref(),
        )?;
        writer.write_string_value("publicAddress", self.public_address.as_deref())?;
        writer.write_collection_of_string_values(
            "roleScopeTagIds",
            self.role_scope_tag_ids.as_deref(),
        )?;
        writer.write_bool_value("upgradeAutomatically", self.upgrade_automatically)?;
        writer.write_bool_value("upgradeAvailable", self.upgrade_available)?;
        writer.write_time_only_value("upgradeWindowEndTime", self.upgrade_window_end_time)?;
        writer.write_time_only_value("upgradeWindowStartTime", self.upgrade_window_start_time)?;
        writer.write_i32_value(
            "upgradeWindowUtcOffsetInMinutes",
            self.upgrade_window_utc_offset_in_minutes,
        )
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
    use crate::serialization::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn upgrade_window_uses_time_of_day() {
        let site: MicrosoftTunnelSite = from_json_value(&json!({
            "displayName": "Seattle",
            "upgradeWindowStartTime": "01:30:00",
            "upgradeWindowEndTime": "04:00:00.5",
            "upgradeWindowUtcOffsetInMinutes": -480
        }))
        .unwrap();
        assert_eq!(site.upgrade_window_start_time, NaiveTime::from_hms_opt(1, 30, 0));
        assert_eq!(site.upgrade_window_utc_offset_in_minutes, Some(-480));

        let json = to_json_value(&site).unwrap();
        assert_eq!(json["upgradeWindowStartTime"], "01:30:00");
        assert_eq!(json["upgradeWindowEndTime"], "04:00:00.500");
    }
}

use chrono::{DateTime, FixedOffset};

use super::RunAsAccountType;
use crate::error::Result;
use crate::models::{Entity, impl_entity_ref};
use crate::serialization::{AdditionalData, IsoDuration, Parsable, ParseNode, SerializationWriter};

/// A PowerShell script pushed to Windows devices by Intune.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceManagementScript {
    pub entity: Entity,
    pub created_date_time: Option<DateTime<FixedOffset>>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    /// Whether the script's signature is checked before it runs.
    pub enforce_signature_check: Option<bool>,
    pub file_name: Option<String>,
    pub last_modified_date_time: Option<DateTime<FixedOffset>>,
    /// Scope tag ids for this script.
    pub role_scope_tag_ids: Option<Vec<String>>,
    /// Run the script as a 32-bit process on 64-bit clients.
    pub run_as32_bit: Option<bool>,
    pub run_as_account: Option<RunAsAccountType>,
    /// The script body; base64 on the wire.
    pub script_content: Option<Vec<u8>>,
}

impl DeviceManagementScript {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceManagementScript";

    pub fn new() -> Self {
        Self {
            entity: Entity::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }

    /// The script body as text, if it is valid UTF-8.
    pub fn script_text(&self) -> Option<&str> {
        std::str::from_utf8(self.script_content.as_deref()?).ok()
    }
}

impl_entity_ref!(DeviceManagementScript, entity);

impl Parsable for DeviceManagementScript {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "createdDateTime" => self.created_date_time = node.get_time_value()?,
            "description" => self.description = node.get_string_value()?,
            "displayName" => self.display_name = node.get_string_value()?,
            "enforceSignatureCheck" => self.enforce_signature_check = node.get_bool_value()?,
            "fileName" => self.file_name = node.get_string_value()?,
            "lastModifiedDateTime" => self.last_modified_date_time = node.get_time_value()?,
            "roleScopeTagIds" => self.role_scope_tag_ids = node.get_collection_of_string_values()?,
            "runAs32Bit" => self.run_as32_bit = node.get_bool_value()?,
            "runAsAccount" => self.run_as_account = node.get_enum_value()?,
            "scriptContent" => self.script_content = node.get_byte_array_value()?,
            _ => return self.entity.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_time_value("createdDateTime", self.created_date_time)?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_bool_value("enforceSignatureCheck", self.enforce_signature_check)?;
        writer.write_string_value("fileName", self.file_name.as_deref())?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time)?;
        writer.write_collection_of_string_values(
            "roleScopeTagIds",
            self.role_scope_tag_ids.as_deref(),
        )?;
        writer.write_bool_value("runAs32Bit", self.run_as32_bit)?;
        writer.write_enum_value("runAsAccount", self.run_as_account)?;
        writer.write_byte_array_value("scriptContent", self.script_content.as_deref())
    }

    fn additional_data(&self) -> &AdditionalData {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.entity.additional_data_mut()
    }
}

/// A shell script pushed to macOS devices by Intune.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceShellScript {
    pub entity: Entity,
    /// Hide end-user notifications while the script runs.
    pub block_execution_notifications: Option<bool>,
    pub created_date_time: Option<DateTime<FixedOffset>>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    /// How often the script is re-run.
    pub execution_frequency: Option<IsoDuration>,
    pub file_name: Option<String>,
    pub last_modified_date_time: Option<DateTime<FixedOffset>>,
    /// Number of retries after a failed run.
    pub retry_count: Option<i32>,
    pub role_scope_tag_ids: Option<Vec<String>>,
    pub run_as_account: Option<RunAsAccountType>,
    pub script_content: Option<Vec<u8>>,
}

impl DeviceShellScript {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceShellScript";

    pub fn new() -> Self {
        Self {
            entity: Entity::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }
}

impl_entity_ref!(DeviceShellScript, entity);

impl Parsable for DeviceShellScript {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "blockExecutionNotifications" => {
                self.block_execution_notifications = node.get_bool_value()?
            }
            "createdDateTime" => self.created_date_time = node.get_time_value()?,
            "description" => self.description = node.get_string_value()?,
            "displayName" => self.display_name = node.get_string_value()?,
            "executionFrequency" => self.execution_frequency = node.get_iso_duration_value()?,
            "fileName" => self.file_name = node.get_string_value()?,
            "lastModifiedDateTime" => self.last_modified_date_time = node.get_time_value()?,
            "retryCount" => self.retry_count = node.get_i32_value()?,
            "roleScopeTagIds" => self.role_scope_tag_ids = node.get_collection_of_string_values()?,
            "runAsAccount" => self.run_as_account = node.get_enum_value()?,
            "scriptContent" => self.script_content = node.get_byte_array_value()?,
            _ => return self.entity.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_bool_value("blockExecutionNotifications", self.block_execution_notifications)?;
        writer.write_time_value("createdDateTime", self.created_date_time)?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_iso_duration_value("executionFrequency", self.execution_frequency)?;
        writer.write_string_value("fileName", self.file_name.as_deref())?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time)?;
        writer.write_i32_value("retryCount", self.retry_count)?;
        writer.write_collection_of_string_values(
            "roleScopeTagIds",
            self.role_scope_tag_ids.as_deref(),
        )?;
        writer.write_enum_value("runAsAccount", self.run_as_account)?;
        writer.write_byte_array_value("scriptContent", self.script_content.as_deref())
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
    use crate::serialization::{from_json_str, from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn script_content_is_base64() {
        let mut script = DeviceManagementScript::new();
        script.script_content = Some(b"Write-Host 'hi'".to_vec());
        script.run_as_account = Some(RunAsAccountType::System);
        let json = to_json_value(&script).unwrap();
        assert_eq!(json["scriptContent"], "V3JpdGUtSG9zdCAnaGkn");
        assert_eq!(json["runAsAccount"], "system");

        let back: DeviceManagementScript = from_json_value(&json).unwrap();
        assert_eq!(back.script_text(), Some("Write-Host 'hi'"));
        assert_eq!(back, script);
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let err = from_json_str::<DeviceManagementScript>(r#"{"scriptContent":"not base64!"}"#)
            .unwrap_err();
        assert!(matches!(err, SerializationError::InvalidBase64(_)));
    }

    #[test]
    fn shell_script_frequency_is_a_duration() {
        let script: DeviceShellScript = from_json_value(&json!({
            "displayName": "Dock cleanup",
            "executionFrequency": "PT15M",
            "retryCount": 3,
            "roleScopeTagIds": ["0", "7"],
            "runAsAccount": "user"
        }))
        .unwrap();
        assert_eq!(script.execution_frequency, Some(IsoDuration::from_hms(0, 15, 0)));
        assert_eq!(script.retry_count, Some(3));
        assert_eq!(script.role_scope_tag_ids.as_deref().map(<[String]>::len), Some(2));
        assert_eq!(script.run_as_account, Some(RunAsAccountType::User));
    }

    #[test]
    fn bad_duration_and_unknown_account_fail() {
        let err = from_json_str::<DeviceShellScript>(r#"{"executionFrequency":"15 minutes"}"#)
            .unwrap_err();
        assert!(matches!(err, SerializationError::InvalidDuration(_)));

        let err = from_json_str::<DeviceShellScript>(r#"{"runAsAccount":"admin"}"#).unwrap_err();
        assert_eq!(err.to_string(), "'admin' is not a valid runAsAccountType");
    }
}

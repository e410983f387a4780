use crate::error::Result;
use crate::serialization::{AdditionalData, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter};

/// An actor: a user, a device or an application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identity {
    pub display_name: Option<String>,
    pub id: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Identity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Parsable for Identity {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "displayName" => self.display_name = node.get_string_value()?,
            "id" => self.id = node.get_string_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string_value("displayName", self.display_name.as_deref())?;
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

/// The identities involved in an action, e.g. `createdBy`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentitySet {
    pub application: Option<Identity>,
    pub device: Option<Identity>,
    pub user: Option<Identity>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl IdentitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// An identity set naming only a user.
    pub fn for_user(id: &str, display_name: &str) -> Self {
        Self {
            user: Some(Identity {
                id: Some(id.to_owned()),
                display_name: Some(display_name.to_owned()),
                ..Identity::default()
            }),
            ..Self::default()
        }
    }
}

impl Parsable for IdentitySet {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::new())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "application" => self.application = node.get_object_value()?,
            "device" => self.device = node.get_object_value()?,
            "user" => self.user = node.get_object_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_object_value("application", self.application.as_ref())?;
        writer.write_object_value("device", self.device.as_ref())?;
        writer.write_object_value("user", self.user.as_ref())?;
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
    use crate::serialization::{from_json_str, to_json_value};
    use serde_json::json;

    #[test]
    fn nested_identities_parse() {
        let set: IdentitySet = from_json_str(
            r#"{"user":{"id":"u1","displayName":"Ada","email":"ada@contoso.com"},"application":null}"#,
        )
        .unwrap();
        let user = set.user.as_ref().unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Ada"));
        assert_eq!(user.additional_data["email"], "ada@contoso.com");
        assert!(set.application.is_none());
    }

    #[test]
    fn for_user_writes_only_the_user() {
        let set = IdentitySet::for_user("u1", "Ada");
        assert_eq!(
            to_json_value(&set).unwrap(),
            json!({"user": {"id": "u1", "displayName": "Ada"}})
        );
    }
}

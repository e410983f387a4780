use super::EnrollmentAvailabilityOptions;
use crate::error::Result;
use crate::serialization::{AdditionalData, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter};

/// Binary content with its MIME type, e.g. a logo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MimeContent {
    /// The MIME type, sent as `type`.
    pub mime_type: Option<String>,
    pub value: Option<Vec<u8>>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl MimeContent {
    pub fn new(mime_type: &str, value: Vec<u8>) -> Self {
        Self {
            mime_type: Some(mime_type.to_owned()),
            value: Some(value),
            ..Self::default()
        }
    }
}

impl Parsable for MimeContent {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "type" => self.mime_type = node.get_string_value()?,
            "value" => self.value = node.get_byte_array_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_string_value("type", self.mime_type.as_deref())?;
        writer.write_byte_array_value("value", self.value.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Company Portal branding for a tenant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntuneBrand {
    pub contact_it_email_address: Option<String>,
    pub contact_it_name: Option<String>,
    pub contact_it_notes: Option<String>,
    pub contact_it_phone_number: Option<String>,
    pub custom_can_see_privacy_message: Option<String>,
    pub custom_cant_see_privacy_message: Option<String>,
    pub custom_privacy_message: Option<String>,
    pub dark_background_logo: Option<MimeContent>,
    pub disable_client_telemetry: Option<bool>,
    /// Company or organization name shown to end users.
    pub display_name: Option<String>,
    pub enrollment_availability: Option<EnrollmentAvailabilityOptions>,
    pub is_factory_reset_disabled: Option<bool>,
    pub is_remove_device_disabled: Option<bool>,
    pub landing_page_customized_image: Option<MimeContent>,
    pub light_background_logo: Option<MimeContent>,
    pub online_support_site_name: Option<String>,
    pub online_support_site_url: Option<String>,
    pub privacy_url: Option<String>,
    pub role_scope_tag_ids: Option<Vec<String>>,
    pub send_device_ownership_change_push_notification: Option<bool>,
    pub show_azure_ad_enterprise_apps: Option<bool>,
    pub show_configuration_manager_apps: Option<bool>,
    pub show_display_name_next_to_logo: Option<bool>,
    pub show_logo: Option<bool>,
    pub show_name_next_to_logo: Option<bool>,
    pub show_office_web_apps: Option<bool>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl IntuneBrand {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Parsable for IntuneBrand {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "contactITEmailAddress" => self.contact_it_email_address = node.get_string_value()?,
            "contactITName" => self.contact_it_name = node.get_string_value()?,
            "contactITNotes" => self.contact_it_notes = node.get_string_value()?,
            "contactITPhoneNumber" => self.contact_it_phone_number = node.get_string_value()?,
            "customCanSeePrivacyMessage" => {
                self.custom_can_see_privacy_message = node.get_string_value()?
            }
            "customCantSeePrivacyMessage" => {
                self.custom_cant_see_privacy_message = node.get_string_value()?
            }
            "customPrivacyMessage" => self.custom_privacy_message = node.get_string_value()?,
            "darkBackgroundLogo" => self.dark_background_logo = node.get_object_value()?,
            "disableClientTelemetry" => self.disable_client_telemetry = node.get_bool_value()?,
            "displayName" => self.display_name = node.get_string_value()?,
            "enrollmentAvailability" => self.enrollment_availability = node.get_enum_value()?,
            "isFactoryResetDisabled" => self.is_factory_reset_disabled = node.get_bool_value()?,
            "isRemoveDeviceDisabled" => self.is_remove_device_disabled = node.get_bool_value()?,
            "landingPageCustomizedImage" => {
                self.landing_page_customized_image = node.get_object_value()?
            }
            "lightBackgroundLogo" => self.light_background_logo = node.get_object_value()?,
            "onlineSupportSiteName" => self.online_support_site_name = node.get_string_value()?,
            "onlineSupportSiteUrl" => self.online_support_site_url = node.get_string_value()?,
            "privacyUrl" => self.privacy_url = node.get_string_value()?,
            "roleScopeTagIds" => self.role_scope_tag_ids = node.get_collection_of_string_values()?,
            "sendDeviceOwnershipChangePushNotification" => {
                self.send_device_ownership_change_push_notification = node.get_bool_value()?
            }
            "showAzureADEnterpriseApps" => {
                self.show_azure_ad_enterprise_apps = node.get_bool_value()?
            }
            "showConfigurationManagerApps" => {
                self.show_configuration_manager_apps = node.get_bool_value()?
            }
            "showDisplayNameNextToLogo" => {
                self.show_display_name_next_to_logo = node.get_bool_value()?
            }
            "showLogo" => self.show_logo = node.get_bool_value()?,
            "showNameNextToLogo" => self.show_name_next_to_logo = node.get_bool_value()?,
            "showOfficeWebApps" => self.show_office_web_apps = node.get_bool_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string_value("contactITEmailAddress", self.contact_it_email_address.as_deref())?;
        writer.write_string_value("contactITName", self.contact_it_name.as_deref())?;
        writer.write_string_value("contactITNotes", self.contact_it_notes.as_deref())?;
        writer.write_string_value("contactITPhoneNumber", self.contact_it_phone_number.as_deref())?;
        writer.write_string_value(
            "customCanSeePrivacyMessage",
            self.custom_can_see_privacy_message.as_deref(),
        )?;
        writer.write_string_value(
            "customCantSeePrivacyMessage",
            self.custom_cant_see_privacy_message.as_deref(),
        )?;
        writer.write_string_value("customPrivacyMessage", self.custom_privacy_message.as_deref())?;
        writer.write_object_value("darkBackgroundLogo", self.dark_background_logo.as_ref())?;
        writer.write_bool_value("disableClientTelemetry", self.disable_client_telemetry)?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_enum_value("enrollmentAvailability", self.enrollment_availability)?;
        writer.write_bool_value("isFactoryResetDisabled", self.is_factory_reset_disabled)?;
        writer.write_bool_value("isRemoveDeviceDisabled", self.is_remove_device_disabled)?;
        writer.write_object_value(
            "landingPageCustomizedImage",
            self.landing_page_customized_image.as_ref(),
        )?;
        writer.write_object_value("lightBackgroundLogo", self.light_background_logo.as_ref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_string_value("onlineSupportSiteName", self.online_support_site_name.as_deref())?;
        writer.write_string_value("onlineSupportSiteUrl", self.online_support_site_url.as_deref())?;
        writer.write_string_value("privacyUrl", self.privacy_url.as_deref())?;
        writer.write_collection_of_string_values(
            "roleScopeTagIds",
            self.role_scope_tag_ids.as_deref(),
        )?;
        writer.write_bool_value(
            "sendDeviceOwnershipChangePushNotification",
            self.send_device_ownership_change_push_notification,
        )?;
        writer.write_bool_value("showAzureADEnterpriseApps", self.show_azure_ad_enterprise_apps)?;
        writer.write_bool_value(
            "showConfigurationManagerApps",
            self.show_configuration_manager_apps,
        )?;
        writer.write_bool_value("showDisplayNameNextToLogo", self.show_display_name_next_to_logo)?;
        writer.write_bool_value("showLogo", self.show_logo)?;
        writer.write_bool_value("showNameNextToLogo", self.show_name_next_to_logo)?;
        writer.write_bool_value("showOfficeWebApps", self.show_office_web_apps)?;
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
    fn logos_and_enrollment_round_trip() {
        let mut brand = IntuneBrand::new();
        brand.display_name = Some("Contoso IT".to_string());
        brand.contact_it_email_address = Some("help@contoso.com".to_string());
        brand.enrollment_availability = Some(EnrollmentAvailabilityOptions::AvailableWithoutPrompts);
        brand.light_background_logo = Some(MimeContent::new("image/png", vec![0x89, b'P', b'N', b'G']));
        brand.show_logo = Some(true);
        // unrecognised branding property, e.g. the theme colour
        brand
            .additional_data
            .insert("themeColor".to_string(), json!({"r": 0, "g": 120, "b": 212}));

        let json = to_json_value(&brand).unwrap();
        assert_eq!(json["contactITEmailAddress"], "help@contoso.com");
        assert_eq!(json["enrollmentAvailability"], "availableWithoutPrompts");
        assert_eq!(json["lightBackgroundLogo"], json!({"type": "image/png", "value": "iVBORw=="}));
        assert_eq!(json["themeColor"]["b"], 212);

        let back: IntuneBrand = from_json_value(&json).unwrap();
        assert_eq!(back, brand);
    }
}

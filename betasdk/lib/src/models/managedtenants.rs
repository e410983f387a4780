//! Microsoft 365 Lighthouse multi-tenant reporting
//! (`#microsoft.graph.managedTenants.*`).

use chrono::{DateTime, FixedOffset};

use crate::error::Result;
use crate::models::{Entity, impl_entity_ref};
use crate::serialization::{AdditionalData, Parsable, ParseNode, SerializationWriter};

/// Device compliance counts for one policy in one managed tenant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedPolicyCompliance {
    pub entity: Entity,
    pub compliance_policy_id: Option<String>,
    pub compliance_policy_name: Option<String>,
    pub compliance_policy_platform: Option<String>,
    pub compliance_policy_type: Option<String>,
    pub last_refreshed_date_time: Option<DateTime<FixedOffset>>,
    pub number_of_compliant_devices: Option<i64>,
    pub number_of_error_devices: Option<i64>,
    pub number_of_non_compliant_devices: Option<i64>,
    pub policy_modified_date_time: Option<DateTime<FixedOffset>>,
    pub tenant_display_name: Option<String>,
    /// The Azure AD tenant id of the managed tenant.
    pub tenant_id: Option<String>,
}

impl AggregatedPolicyCompliance {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.managedTenants.aggregatedPolicyCompliance";

    pub fn new() -> Self {
        Self {
            entity: Entity::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }

    /// Devices counted in any state.
    ///
    /// `None` if no count is present or if the counts overflow `i64`.
    pub fn total_devices(&self) -> Option<i64> {
        let counts = [
            self.number_of_compliant_devices,
            self.number_of_error_devices,
            self.number_of_non_compliant_devices,
        ];
        if counts.iter().all(Option::is_none) {
            return None;
        }
        counts
            .into_iter()
            .flatten()
            .try_fold(0_i64, i64::checked_add)
    }
}

impl_entity_ref!(AggregatedPolicyCompliance, entity);

impl Parsable for AggregatedPolicyCompliance {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "compliancePolicyId" => self.compliance_policy_id = node.get_string_value()?,
            "compliancePolicyName" => self.compliance_policy_name = node.get_string_value()?,
            "compliancePolicyPlatform" => {
                self.compliance_policy_platform = node.get_string_value()?
            }
            "compliancePolicyType" => self.compliance_policy_type = node.get_string_value()?,
            "lastRefreshedDateTime" => self.last_refreshed_date_time = node.get_time_value()?,
            "numberOfCompliantDevices" => {
                self.number_of_compliant_devices = node.get_i64_value()?
            }
            "numberOfErrorDevices" => self.number_of_error_devices = node.get_i64_value()?,
            "numberOfNonCompliantDevices" => {
                self.number_of_non_compliant_devices = node.get_i64_value()?
            }
            "policyModifiedDateTime" => self.policy_modified_date_time = node.get_time_value()?,
            "tenantDisplayName" => self.tenant_display_name = node.get_string_value()?,
            "tenantId" => self.tenant_id = node.get_string_value()?,
            _ => return self.entity.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_string_value("compliancePolicyId", self.compliance_policy_id.as_deref())?;
        writer.write_string_value("compliancePolicyName", self.compliance_policy_name.as_deref())?;
        writer.write_string_value(
            "compliancePolicyPlatform",
            self.compliance_policy_platform.as_deref(),
        )?;
        writer.write_string_value("compliancePolicyType", self.compliance_policy_type.as_deref())?;
        writer.write_time_value("lastRefreshedDateTime", self.last_refreshed_date_time)?;
        writer.write_i64_value("numberOfCompliantDevices", self.number_of_compliant_devices)?;
        writer.write_i64_value("numberOfErrorDevices", self.number_of_error_devices)?;
        writer.write_i64_value(
            "numberOfNonCompliantDevices",
            self.number_of_non_compliant_devices,
        )?;
        writer.write_time_value("policyModifiedDateTime", self.policy_modified_date_time)?;
        writer.write_string_value("tenantDisplayName", self.tenant_display_name.as_deref())?;
        writer.write_string_value("tenantId", self.tenant_id.as_deref())
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
    fn counts_are_64_bit() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.managedTenants.aggregatedPolicyCompliance",
            "numberOfCompliantDevices": 5_000_000_000_i64,
            "numberOfErrorDevices": 2,
            "tenantId": "t1"
        });
        let report: AggregatedPolicyCompliance = from_json_value(&payload).unwrap();
        assert_eq!(report.total_devices(), Some(5_000_000_002));
        assert_eq!(to_json_value(&report).unwrap(), payload);
    }

    #[test]
    fn total_is_none_without_counts() {
        assert_eq!(AggregatedPolicyCompliance::new().total_devices(), None);
    }

    #[test]
    fn total_is_none_when_counts_overflow() {
        let report: AggregatedPolicyCompliance = from_json_value(&json!({
            "numberOfCompliantDevices": i64::MAX,
            "numberOfErrorDevices": 1
        }))
        .unwrap();
        assert_eq!(report.number_of_compliant_devices, Some(i64::MAX));
        assert_eq!(report.total_devices(), None);
    }

    #[test]
    fn total_at_the_limit_is_exact() {
        let report: AggregatedPolicyCompliance = from_json_value(&json!({
            "numberOfCompliantDevices": i64::MAX - 1,
            "numberOfNonCompliantDevices": 1
        }))
        .unwrap();
        assert_eq!(report.total_devices(), Some(i64::MAX));
    }
}

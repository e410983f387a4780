//! Dynamics 365 Business Central financials.

use chrono::{DateTime, FixedOffset, NaiveDate};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Entity, impl_entity_ref};
use crate::serialization::{AdditionalData, Parsable, ParseNode, SerializationWriter};

/// A payment received from a customer, as a line of a payment journal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerPayment {
    pub entity: Entity,
    pub amount: Option<f64>,
    pub applies_to_invoice_id: Option<Uuid>,
    pub applies_to_invoice_number: Option<String>,
    pub comment: Option<String>,
    pub contact_id: Option<String>,
    pub customer_id: Option<Uuid>,
    pub customer_number: Option<String>,
    pub description: Option<String>,
    pub document_number: Option<String>,
    pub external_document_number: Option<String>,
    pub journal_display_name: Option<String>,
    pub last_modified_date_time: Option<DateTime<FixedOffset>>,
    pub line_number: Option<i32>,
    pub posting_date: Option<NaiveDate>,
}

impl CustomerPayment {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.customerPayment";

    pub fn new() -> Self {
        Self {
            entity: Entity::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }
}

impl_entity_ref!(CustomerPayment, entity);

impl Parsable for CustomerPayment {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "amount" => self.amount = node.get_f64_value()?,
            "appliesToInvoiceId" => self.applies_to_invoice_id = node.get_uuid_value()?,
            "appliesToInvoiceNumber" => self.applies_to_invoice_number = node.get_string_value()?,
            "comment" => self.comment = node.get_string_value()?,
            "contactId" => self.contact_id = node.get_string_value()?,
            "customerId" => self.customer_id = node.get_uuid_value()?,
            "customerNumber" => self.customer_number = node.get_string_value()?,
            "description" => self.description = node.get_string_value()?,
            "documentNumber" => self.document_number = node.get_string_value()?,
            "externalDocumentNumber" => self.external_document_number = node.get_string_value()?,
            "journalDisplayName" => self.journal_display_name = node.get_string_value()?,
            "lastModifiedDateTime" => self.last_modified_date_time = node.get_time_value()?,
            "lineNumber" => self.line_number = node.get_i32_value()?,
            "postingDate" => self.posting_date = node.get_date_only_value()?,
            _ => return self.entity.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_f64_value("amount", self.amount)?;
        writer.write_uuid_value("appliesToInvoiceId", self.applies_to_invoice_id)?;
        writer.write_string_value(
            "appliesToInvoiceNumber",
            self.applies_to_invoice_number.as_deref(),
        )?;
        writer.write_string_value("comment", self.comment.as_deref())?;
        writer.write_string_value("contactId", self.contact_id.as_deref())?;
        writer.write_uuid_value("customerId", self.customer_id)?;
        writer.write_string_value("customerNumber", self.customer_number.as_deref())?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("documentNumber", self.document_number.as_deref())?;
        writer.write_string_value(
            "externalDocumentNumber",
            self.external_document_number.as_deref(),
        )?;
        writer.write_string_value("journalDisplayName", self.journal_display_name.as_deref())?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time)?;
        writer.write_i32_value("lineNumber", self.line_number)?;
        writer.write_date_only_value("postingDate", self.posting_date)
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
    fn uuid_date_and_amount() {
        let payload = json!({
            "id": "cp-1",
            "amount": 1250.75,
            "customerId": "7d3d0b2e-0a5f-4c1e-9f3c-5b1d7e8a9c10",
            "customerNumber": "C00010",
            "lineNumber": 10000,
            "postingDate": "2023-03-31"
        });
        let payment: CustomerPayment = from_json_value(&payload).unwrap();
        assert_eq!(payment.amount, Some(1250.75));
        assert_eq!(payment.posting_date, NaiveDate::from_ymd_opt(2023, 3, 31));
        assert_eq!(
            payment.customer_id.unwrap().to_string(),
            "7d3d0b2e-0a5f-4c1e-9f3c-5b1d7e8a9c10"
        );
        assert_eq!(to_json_value(&payment).unwrap(), payload);
    }

    #[test]
    fn uppercase_uuid_is_normalized_on_write() {
        let payment: CustomerPayment =
            from_json_str(r#"{"appliesToInvoiceId":"7D3D0B2E-0A5F-4C1E-9F3C-5B1D7E8A9C10"}"#)
                .unwrap();
        let json = to_json_value(&payment).unwrap();
        assert_eq!(json["appliesToInvoiceId"], "7d3d0b2e-0a5f-4c1e-9f3c-5b1d7e8a9c10");
    }

    #[test]
    fn malformed_values_surface_their_errors() {
        assert!(matches!(
            from_json_str::<CustomerPayment>(r#"{"customerId":"C00010"}"#),
            Err(SerializationError::InvalidUuid(_))
        ));
        assert!(matches!(
            from_json_str::<CustomerPayment>(r#"{"postingDate":"31/03/2023"}"#),
            Err(SerializationError::InvalidDate { .. })
        ));
        assert!(matches!(
            from_json_str::<CustomerPayment>(r#"{"lineNumber":3000000000}"#),
            Err(SerializationError::NumberOutOfRange { target: "i32", .. })
        ));
    }
}

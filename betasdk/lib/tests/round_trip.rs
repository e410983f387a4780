//! Integration tests for reading and writing whole Graph payloads.
//!
//! Fixtures are located in `tests/fixtures/` and are shaped like real Graph
//! beta responses. Every fixture that parses must write back to the same
//! JSON tree.

use std::path::PathBuf;

use betasdk_lib::models::sites::{
    AnyWebPart, HorizontalSectionLayoutType, PageLayoutType, SectionEmphasisType, SitePage,
    TitleAreaLayoutType,
};
use betasdk_lib::models::devicemanagement::{DeviceShellScript, RunAsAccountType};
use betasdk_lib::models::financials::CustomerPayment;
use betasdk_lib::serialization::IsoDuration;
use betasdk_lib::{
    AnyEntity, Parsable, SerializationConfig, SerializationError, from_json_slice, from_json_value,
    from_json_value_with_config, to_json_value, to_json_value_with_config,
};
use serde_json::{Value, json};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture(name: &str) -> Value {
    let raw = std::fs::read_to_string(fixture_path(name)).expect("fixture should exist");
    serde_json::from_str(&raw).expect("fixture should be valid JSON")
}

fn assert_round_trip<T: Parsable>(name: &str) -> T {
    let payload = load_fixture(name);
    let model: T = from_json_value(&payload).expect("fixture should parse");
    assert_eq!(to_json_value(&model).unwrap(), payload, "{name} did not round-trip");
    model
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_every_fixture_round_trips_through_any_entity() {
    for name in [
        "site_page.json",
        "polymorphic_web_parts.json",
        "unknown_discriminator.json",
        "device_shell_script.json",
        "customer_payment.json",
    ] {
        assert_round_trip::<AnyEntity>(name);
    }
}

#[test]
fn test_site_page_fields() {
    let page = assert_round_trip::<SitePage>("site_page.json");

    assert_eq!(page.title.as_deref(), Some("Contoso quarterly"));
    assert_eq!(page.page_layout, Some(PageLayoutType::Article));
    assert!(page.is_news());
    assert_eq!(page.base_item.name.as_deref(), Some("Contoso-Quarterly.aspx"));
    assert_eq!(
        page.base_item.entity.id.as_deref(),
        Some("65e59907-59d5-44ff-a038-7c0bf3098c01")
    );

    let title_area = page.title_area.as_ref().unwrap();
    assert_eq!(title_area.layout, Some(TitleAreaLayoutType::ColorBlock));
    let content = title_area.server_processed_content.as_ref().unwrap();
    assert_eq!(content.html_strings, Some(Vec::new()));
    assert_eq!(
        content.image_source("imageSource"),
        Some("/_LAYOUTS/IMAGES/SLEEKTEMPLATEIMAGETILE.JPG")
    );

    let canvas = page.canvas_layout.as_ref().unwrap();
    let section = &canvas.horizontal_sections.as_ref().unwrap()[0];
    assert_eq!(section.layout, Some(HorizontalSectionLayoutType::TwoColumns));
    assert_eq!(section.emphasis, Some(SectionEmphasisType::Soft));
    assert_eq!(canvas.web_parts().count(), 2);
}

#[test]
fn test_canvas_web_parts_keep_their_concrete_types() {
    let page = assert_round_trip::<SitePage>("site_page.json");
    let canvas = page.canvas_layout.unwrap();

    let kinds: Vec<&str> = canvas.web_parts().map(AnyWebPart::type_name).collect();
    assert_eq!(kinds, ["Text", "Standard"]);

    let Some(AnyWebPart::Standard(image)) = canvas.web_parts().nth(1) else {
        panic!("second web part should be a standard web part");
    };
    let data = image.data.as_ref().unwrap();
    assert_eq!(data.title.as_deref(), Some("Image"));
    assert_eq!(data.properties.as_ref().unwrap()["overlayText"], "Q1");
}

#[test]
fn test_polymorphic_collection_dispatches_each_element() {
    let page = assert_round_trip::<SitePage>("polymorphic_web_parts.json");
    let parts = page.web_parts.unwrap();

    let kinds: Vec<&str> = parts.iter().map(AnyWebPart::type_name).collect();
    assert_eq!(kinds, ["Text", "Standard", "WebPart", "WebPart"]);

    // An unregistered web part keeps its discriminator and unknown fields.
    let spacer = &parts[3];
    assert_eq!(
        spacer.entity().odata_type.as_deref(),
        Some("#microsoft.graph.spacerWebPart")
    );
    assert_eq!(spacer.additional_data()["spacerHeight"], 24);
}

#[test]
fn test_unknown_root_type_is_preserved() {
    let entity = assert_round_trip::<AnyEntity>("unknown_discriminator.json");
    assert_eq!(entity.type_name(), "Entity");
    assert_eq!(entity.entity().id.as_deref(), Some("17"));
    assert_eq!(entity.additional_data()["fields"]["Title"], "Widget");
}

#[test]
fn test_device_shell_script_fields() {
    let script = assert_round_trip::<DeviceShellScript>("device_shell_script.json");
    assert_eq!(script.run_as_account, Some(RunAsAccountType::System));
    assert_eq!(script.execution_frequency, Some(IsoDuration::from_hms(1, 30, 0)));
    assert_eq!(script.retry_count, Some(3));
    assert_eq!(
        script.script_content.as_deref(),
        Some(b"#!/bin/sh\necho hello\n".as_slice())
    );
}

#[test]
fn test_customer_payment_from_bytes() {
    let raw = std::fs::read(fixture_path("customer_payment.json")).unwrap();
    let payment: CustomerPayment = from_json_slice(&raw).unwrap();
    assert_eq!(payment.amount, Some(1250.75));
    assert_eq!(payment.line_number, Some(10000));
    assert_eq!(payment.customer_number.as_deref(), Some("C00010"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_invalid_enum_names_value_and_enum() {
    let payload = load_fixture("invalid_enum.json");
    let err = from_json_value::<AnyEntity>(&payload).unwrap_err();
    assert!(matches!(err, SerializationError::UnknownEnumValue(_)));
    assert_eq!(err.to_string(), "'diagonal' is not a valid titleAreaLayoutType");
}

#[test]
fn test_wrong_kind_is_reported() {
    let err = from_json_value::<SitePage>(&json!({"showComments": "yes"})).unwrap_err();
    assert!(matches!(
        err,
        SerializationError::TypeMismatch {
            expected: "boolean",
            found: "string"
        }
    ));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_additional_data_can_be_dropped() {
    let payload = load_fixture("unknown_discriminator.json");

    let ignored = SerializationConfig::new().ignore_additional_data();
    let entity: AnyEntity = from_json_value_with_config(&payload, ignored).unwrap();
    assert!(entity.additional_data().is_empty());

    let captured: AnyEntity = from_json_value(&payload).unwrap();
    let silent = SerializationConfig::new().skip_additional_data();
    let written = to_json_value_with_config(&captured, silent).unwrap();
    assert_eq!(
        written,
        json!({"@odata.type": "#microsoft.graph.listItem", "id": "17"})
    );
}

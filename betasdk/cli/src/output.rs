use betasdk_lib::models::devicemanagement::{EnrollmentAvailabilityOptions, RunAsAccountType};
use betasdk_lib::models::search::{AnswerState, DevicePlatformType};
use betasdk_lib::models::sites::{
    HorizontalSectionLayoutType, PageLayoutType, PagePromotionType, SectionEmphasisType,
    TitleAreaLayoutType, TitleAreaTextAlignmentType,
};
use betasdk_lib::{AnyEntity, GraphEnum, Parsable};
use serde::Serialize;
use strum::IntoEnumIterator;

/// What `inspect` reports about a parsed payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    /// Rust record the payload was read into.
    pub type_name: &'static str,
    /// `@odata.type` as found in the payload.
    pub odata_type: Option<String>,
    /// Discriminator of the record that was used, which differs from
    /// `odata_type` when the payload's type is not modelled.
    pub resolved_as: &'static str,
    pub id: Option<String>,
    /// Top-level properties no field declares.
    pub additional_properties: Vec<String>,
    /// Web parts on a page canvas or in a page's `webParts`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_parts: Option<usize>,
}

impl InspectReport {
    pub fn new(entity: &AnyEntity) -> Self {
        let root = entity.entity();
        let web_parts = match entity {
            AnyEntity::SitePage(page) => {
                let on_canvas = page
                    .canvas_layout
                    .as_ref()
                    .map_or(0, |canvas| canvas.web_parts().count());
                Some(on_canvas + page.web_parts.as_ref().map_or(0, Vec::len))
            }
            AnyEntity::CanvasLayout(canvas) => Some(canvas.web_parts().count()),
            _ => None,
        };

        Self {
            type_name: entity.type_name(),
            odata_type: root.odata_type.clone(),
            resolved_as: entity.registered_odata_type(),
            id: root.id.clone(),
            additional_properties: entity.additional_data().keys().cloned().collect(),
            web_parts,
        }
    }

    /// `true` when the payload named a type this crate does not model.
    pub fn is_fallback(&self) -> bool {
        self.odata_type
            .as_deref()
            .is_some_and(|odata_type| odata_type != self.resolved_as)
    }
}

pub fn print_inspect_text(report: &InspectReport) {
    println!("Type:        {}", report.type_name);
    match &report.odata_type {
        Some(odata_type) if report.is_fallback() => {
            println!("@odata.type: {odata_type} (not modelled, read as {})", report.resolved_as)
        }
        Some(odata_type) => println!("@odata.type: {odata_type}"),
        None => println!("@odata.type: (none)"),
    }
    println!("Id:          {}", report.id.as_deref().unwrap_or("(none)"));
    if let Some(count) = report.web_parts {
        println!("Web parts:   {count}");
    }
    if report.additional_properties.is_empty() {
        println!("Additional:  (none)");
    } else {
        println!("Additional:  {}", report.additional_properties.join(", "));
    }
}

pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One closed enum and its wire spellings, in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct EnumTable {
    pub name: &'static str,
    pub values: Vec<&'static str>,
}

impl EnumTable {
    fn of<E: GraphEnum + IntoEnumIterator>() -> Self {
        Self {
            name: E::NAME,
            values: E::iter().map(|value| value.as_str()).collect(),
        }
    }
}

/// Every enum the models declare, sorted by schema name.
pub fn enum_tables() -> Vec<EnumTable> {
    let mut tables = vec![
        EnumTable::of::<AnswerState>(),
        EnumTable::of::<DevicePlatformType>(),
        EnumTable::of::<EnrollmentAvailabilityOptions>(),
        EnumTable::of::<HorizontalSectionLayoutType>(),
        EnumTable::of::<PageLayoutType>(),
        EnumTable::of::<PagePromotionType>(),
        EnumTable::of::<RunAsAccountType>(),
        EnumTable::of::<SectionEmphasisType>(),
        EnumTable::of::<TitleAreaLayoutType>(),
        EnumTable::of::<TitleAreaTextAlignmentType>(),
    ];
    tables.sort_by_key(|table| table.name);
    tables
}

pub fn print_enum_tables_text(tables: &[EnumTable]) {
    for table in tables {
        println!("{}", table.name);
        for value in &table.values {
            println!("  {value}");
        }
    }
}

pub fn print_types_text(discriminators: &[&str]) {
    for discriminator in discriminators {
        println!("{discriminator}");
    }
}

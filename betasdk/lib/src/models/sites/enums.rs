//! String-coded enums used by site pages and their canvas.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::serialization::impl_graph_enum;

/// Layout of a site page.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PageLayoutType {
    MicrosoftReserved,
    Article,
    Home,
    UnknownFutureValue,
}

impl_graph_enum!(PageLayoutType, "pageLayoutType");

/// How a page is promoted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PagePromotionType {
    MicrosoftReserved,
    Page,
    NewsPost,
    UnknownFutureValue,
}

impl_graph_enum!(PagePromotionType, "pagePromotionType");

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TitleAreaLayoutType {
    ImageAndTitle,
    Plain,
    ColorBlock,
    Overlap,
    UnknownFutureValue,
}

impl_graph_enum!(TitleAreaLayoutType, "titleAreaLayoutType");

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TitleAreaTextAlignmentType {
    Left,
    Center,
    UnknownFutureValue,
}

impl_graph_enum!(TitleAreaTextAlignmentType, "titleAreaTextAlignmentType");

/// Column arrangement of a horizontal canvas section.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum HorizontalSectionLayoutType {
    None,
    OneColumn,
    TwoColumns,
    ThreeColumns,
    OneThirdLeftColumn,
    OneThirdRightColumn,
    FullWidth,
    UnknownFutureValue,
}

impl_graph_enum!(HorizontalSectionLayoutType, "horizontalSectionLayoutType");

/// Background emphasis of a canvas section.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SectionEmphasisType {
    None,
    Neutral,
    Soft,
    Strong,
    UnknownFutureValue,
}

impl_graph_enum!(SectionEmphasisType, "sectionEmphasisType");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{GraphEnum, assert_enum_table};

    #[test]
    fn page_layout_table() {
        assert_enum_table::<PageLayoutType>(&[
            "microsoftReserved",
            "article",
            "home",
            "unknownFutureValue",
        ]);
    }

    #[test]
    fn page_promotion_table() {
        assert_enum_table::<PagePromotionType>(&[
            "microsoftReserved",
            "page",
            "newsPost",
            "unknownFutureValue",
        ]);
    }

    #[test]
    fn title_area_tables() {
        assert_enum_table::<TitleAreaLayoutType>(&[
            "imageAndTitle",
            "plain",
            "colorBlock",
            "overlap",
            "unknownFutureValue",
        ]);
        assert_enum_table::<TitleAreaTextAlignmentType>(&["left", "center", "unknownFutureValue"]);
    }

    #[test]
    fn section_tables() {
        assert_enum_table::<HorizontalSectionLayoutType>(&[
            "none",
            "oneColumn",
            "twoColumns",
            "threeColumns",
            "oneThirdLeftColumn",
            "oneThirdRightColumn",
            "fullWidth",
            "unknownFutureValue",
        ]);
        assert_enum_table::<SectionEmphasisType>(&[
            "none",
            "neutral",
            "soft",
            "strong",
            "unknownFutureValue",
        ]);
    }

    #[test]
    fn unknown_layout_error_names_value_and_enum() {
        let err = TitleAreaLayoutType::parse("diagonal").unwrap_err();
        assert_eq!(err.to_string(), "'diagonal' is not a valid titleAreaLayoutType");
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(PageLayoutType::parse("article").unwrap(), PageLayoutType::Article);
        assert!(PageLayoutType::parse("Article").is_err());
    }
}

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::serialization::impl_graph_enum;

/// Publication state of a search answer.
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
pub enum AnswerState {
    Published,
    Draft,
    Excluded,
    UnknownFutureValue,
}

impl_graph_enum!(AnswerState, "answerState");

/// Device platforms a search answer can be targeted at.
///
/// Several spellings do not follow plain camel case, so they are listed
/// explicitly.
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
pub enum DevicePlatformType {
    Unknown,
    Android,
    AndroidForWork,
    Ios,
    #[serde(rename = "macOS")]
    #[strum(serialize = "macOS")]
    MacOs,
    #[serde(rename = "windowsPhone81")]
    #[strum(serialize = "windowsPhone81")]
    WindowsPhone81,
    #[serde(rename = "windowsPhone81AndLater")]
    #[strum(serialize = "windowsPhone81AndLater")]
    WindowsPhone81AndLater,
    #[serde(rename = "windows10AndLater")]
    #[strum(serialize = "windows10AndLater")]
    Windows10AndLater,
    AndroidWorkProfile,
    #[serde(rename = "androidASOP")]
    #[strum(serialize = "androidASOP")]
    AndroidAsop,
}

impl_graph_enum!(DevicePlatformType, "devicePlatformType");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{GraphEnum, assert_enum_table};

    #[test]
    fn answer_state_table() {
        assert_enum_table::<AnswerState>(&["published", "draft", "excluded", "unknownFutureValue"]);
    }

    #[test]
    fn device_platform_table() {
        assert_enum_table::<DevicePlatformType>(&[
            "unknown",
            "android",
            "androidForWork",
            "ios",
            "macOS",
            "windowsPhone81",
            "windowsPhone81AndLater",
            "windows10AndLater",
            "androidWorkProfile",
            "androidASOP",
        ]);
    }

    #[test]
    fn irregular_spellings_are_exact() {
        assert_eq!(DevicePlatformType::parse("macOS").unwrap(), DevicePlatformType::MacOs);
        assert!(DevicePlatformType::parse("macOs").is_err());
        assert!(DevicePlatformType::parse("androidAsop").is_err());
    }
}

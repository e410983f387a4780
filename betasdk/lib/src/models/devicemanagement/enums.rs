use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::serialization::impl_graph_enum;

/// The account a management script runs under.
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
pub enum RunAsAccountType {
    System,
    User,
}

impl_graph_enum!(RunAsAccountType, "runAsAccountType");

/// Whether the Company Portal offers device enrollment, and how.
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
pub enum EnrollmentAvailabilityOptions {
    AvailableWithPrompts,
    AvailableWithoutPrompts,
    Unavailable,
}

impl_graph_enum!(EnrollmentAvailabilityOptions, "enrollmentAvailabilityOptions");

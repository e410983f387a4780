//! Discriminator table for the root `entity` family.
//!
//! [`AnyEntity`] can hold any record this crate models. Which variant a
//! payload becomes is decided by a lookup of its `@odata.type` in a static
//! table built once on first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use super::devicemanagement::{
    DeviceManagementIntent, DeviceManagementScript, DeviceShellScript, MicrosoftTunnelSite,
};
use super::financials::CustomerPayment;
use super::managedtenants::AggregatedPolicyCompliance;
use super::search::{Bookmark, Qna, SearchAnswer};
use super::sites::{
    CanvasLayout, HorizontalSection, HorizontalSectionColumn, Site, SitePage, StandardWebPart,
    TextWebPart, VerticalSection, WebPart,
};
use super::{BaseItem, Entity, forward_to_variants, impl_family_entity_ref};
use crate::error::Result;
use crate::serialization::{Parsable, ParseNode, discriminator_value};

/// Any modelled record, picked by `@odata.type`.
///
/// A missing discriminator yields [`AnyEntity::Entity`]. So does one that is
/// not registered, in which case every property the payload carries beyond
/// `id` is kept as additional data.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyEntity {
    Entity(Entity),
    BaseItem(BaseItem),
    Site(Site),
    SitePage(SitePage),
    CanvasLayout(CanvasLayout),
    HorizontalSection(HorizontalSection),
    HorizontalSectionColumn(HorizontalSectionColumn),
    VerticalSection(VerticalSection),
    WebPart(WebPart),
    StandardWebPart(StandardWebPart),
    TextWebPart(TextWebPart),
    DeviceManagementScript(DeviceManagementScript),
    DeviceShellScript(DeviceShellScript),
    DeviceManagementIntent(DeviceManagementIntent),
    MicrosoftTunnelSite(MicrosoftTunnelSite),
    CustomerPayment(CustomerPayment),
    AggregatedPolicyCompliance(AggregatedPolicyCompliance),
    SearchAnswer(SearchAnswer),
    Bookmark(Bookmark),
    Qna(Qna),
}

impl Default for AnyEntity {
    fn default() -> Self {
        Self::Entity(Entity::default())
    }
}

type Constructor = fn() -> AnyEntity;

static REGISTRY: Lazy<HashMap<&'static str, Constructor>> = Lazy::new(|| {
    let entries: [(&'static str, Constructor); 20] = [
        (Entity::ODATA_TYPE, || AnyEntity::Entity(Entity::default())),
        (BaseItem::ODATA_TYPE, || AnyEntity::BaseItem(BaseItem::default())),
        (Site::ODATA_TYPE, || AnyEntity::Site(Site::default())),
        (SitePage::ODATA_TYPE, || AnyEntity::SitePage(SitePage::default())),
        (CanvasLayout::ODATA_TYPE, || {
            AnyEntity::CanvasLayout(CanvasLayout::default())
        }),
        (HorizontalSection::ODATA_TYPE, || {
            AnyEntity::HorizontalSection(HorizontalSection::default())
        }),
        (HorizontalSectionColumn::ODATA_TYPE, || {
            AnyEntity::HorizontalSectionColumn(HorizontalSectionColumn::default())
        }),
        (VerticalSection::ODATA_TYPE, || {
            AnyEntity::VerticalSection(VerticalSection::default())
        }),
        (WebPart::ODATA_TYPE, || AnyEntity::WebPart(WebPart::default())),
        (StandardWebPart::ODATA_TYPE, || {
            AnyEntity::StandardWebPart(StandardWebPart::default())
        }),
        (TextWebPart::ODATA_TYPE, || AnyEntity::TextWebPart(TextWebPart::default())),
        (DeviceManagementScript::ODATA_TYPE, || {
            AnyEntity::DeviceManagementScript(DeviceManagementScript::default())
        }),
        (DeviceShellScript::ODATA_TYPE, || {
            AnyEntity::DeviceShellScript(DeviceShellScript::default())
        }),
        (DeviceManagementIntent::ODATA_TYPE, || {
            AnyEntity::DeviceManagementIntent(DeviceManagementIntent::default())
        }),
        (MicrosoftTunnelSite::ODATA_TYPE, || {
            AnyEntity::MicrosoftTunnelSite(MicrosoftTunnelSite::default())
        }),
        (CustomerPayment::ODATA_TYPE, || {
            AnyEntity::CustomerPayment(CustomerPayment::default())
        }),
        (AggregatedPolicyCompliance::ODATA_TYPE, || {
            AnyEntity::AggregatedPolicyCompliance(AggregatedPolicyCompliance::default())
        }),
        (SearchAnswer::ODATA_TYPE, || {
            AnyEntity::SearchAnswer(SearchAnswer::default())
        }),
        (Bookmark::ODATA_TYPE, || AnyEntity::Bookmark(Bookmark::default())),
        (Qna::ODATA_TYPE, || AnyEntity::Qna(Qna::default())),
    ];
    entries.into_iter().collect()
});

/// Every `@odata.type` value [`AnyEntity`] dispatches on, sorted.
pub fn registered_discriminators() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

impl AnyEntity {
    /// An empty record for a registered discriminator.
    pub fn for_discriminator(discriminator: &str) -> Option<Self> {
        REGISTRY.get(discriminator).map(|construct| construct())
    }

    /// The discriminator the held variant is registered under.
    pub fn registered_odata_type(&self) -> &'static str {
        match self {
            Self::Entity(_) => Entity::ODATA_TYPE,
            Self::BaseItem(_) => BaseItem::ODATA_TYPE,
            Self::Site(_) => Site::ODATA_TYPE,
            Self::SitePage(_) => SitePage::ODATA_TYPE,
            Self::CanvasLayout(_) => CanvasLayout::ODATA_TYPE,
            Self::HorizontalSection(_) => HorizontalSection::ODATA_TYPE,
            Self::HorizontalSectionColumn(_) => HorizontalSectionColumn::ODATA_TYPE,
            Self::VerticalSection(_) => VerticalSection::ODATA_TYPE,
            Self::WebPart(_) => WebPart::ODATA_TYPE,
            Self::StandardWebPart(_) => StandardWebPart::ODATA_TYPE,
            Self::TextWebPart(_) => TextWebPart::ODATA_TYPE,
            Self::DeviceManagementScript(_) => DeviceManagementScript::ODATA_TYPE,
            Self::DeviceShellScript(_) => DeviceShellScript::ODATA_TYPE,
            Self::DeviceManagementIntent(_) => DeviceManagementIntent::ODATA_TYPE,
            Self::MicrosoftTunnelSite(_) => MicrosoftTunnelSite::ODATA_TYPE,
            Self::CustomerPayment(_) => CustomerPayment::ODATA_TYPE,
            Self::AggregatedPolicyCompliance(_) => AggregatedPolicyCompliance::ODATA_TYPE,
            Self::SearchAnswer(_) => SearchAnswer::ODATA_TYPE,
            Self::Bookmark(_) => Bookmark::ODATA_TYPE,
            Self::Qna(_) => Qna::ODATA_TYPE,
        }
    }
}

impl Parsable for AnyEntity {
    fn create_from_discriminator_value<N: ParseNode>(node: &N) -> Result<Self> {
        let Some(discriminator) = discriminator_value(node)? else {
            return Ok(Self::default());
        };
        match Self::for_discriminator(&discriminator) {
            Some(entity) => Ok(entity),
            None => {
                debug!(discriminator = %discriminator, "unknown entity subtype, using entity");
                Ok(Self::default())
            }
        }
    }

    forward_to_variants!(
        Entity,
        BaseItem,
        Site,
        SitePage,
        CanvasLayout,
        HorizontalSection,
        HorizontalSectionColumn,
        VerticalSection,
        WebPart,
        StandardWebPart,
        TextWebPart,
        DeviceManagementScript,
        DeviceShellScript,
        DeviceManagementIntent,
        MicrosoftTunnelSite,
        CustomerPayment,
        AggregatedPolicyCompliance,
        SearchAnswer,
        Bookmark,
        Qna,
    );
}

impl_family_entity_ref!(AnyEntity {
    Entity,
    BaseItem,
    Site,
    SitePage,
    CanvasLayout,
    HorizontalSection,
    HorizontalSectionColumn,
    VerticalSection,
    WebPart,
    StandardWebPart,
    TextWebPart,
    DeviceManagementScript,
    DeviceShellScript,
    DeviceManagementIntent,
    MicrosoftTunnelSite,
    CustomerPayment,
    AggregatedPolicyCompliance,
    SearchAnswer,
    Bookmark,
    Qna,
});

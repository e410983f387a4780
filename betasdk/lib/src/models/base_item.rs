use chrono::{DateTime, FixedOffset};
use tracing::debug;

use super::sites::{Site, SitePage};
use super::{Entity, IdentitySet, forward_to_variants, impl_entity_ref, impl_family_entity_ref};
use crate::error::Result;
use crate::serialization::{
    AdditionalData, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter, discriminator_value,
};

// =============================================================================
// SharePoint references
// =============================================================================

/// SharePoint REST identifiers for an item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharepointIds {
    /// The unique identifier (guid) for the item's list in SharePoint.
    pub list_id: Option<String>,
    /// An integer identifier for the item within the containing list.
    pub list_item_id: Option<String>,
    /// The unique identifier (guid) for the item within OneDrive for Business
    /// or a SharePoint site.
    pub list_item_unique_id: Option<String>,
    /// The unique identifier (guid) for the item's site collection.
    pub site_id: Option<String>,
    /// The SharePoint URL for the site that contains the item.
    pub site_url: Option<String>,
    /// The unique identifier (guid) for the tenancy.
    pub tenant_id: Option<String>,
    /// The unique identifier (guid) for the item's site (SPWeb).
    pub web_id: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl SharepointIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Parsable for SharepointIds {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "listId" => self.list_id = node.get_string_value()?,
            "listItemId" => self.list_item_id = node.get_string_value()?,
            "listItemUniqueId" => self.list_item_unique_id = node.get_string_value()?,
            "siteId" => self.site_id = node.get_string_value()?,
            "siteUrl" => self.site_url = node.get_string_value()?,
            "tenantId" => self.tenant_id = node.get_string_value()?,
            "webId" => self.web_id = node.get_string_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string_value("listId", self.list_id.as_deref())?;
        writer.write_string_value("listItemId", self.list_item_id.as_deref())?;
        writer.write_string_value("listItemUniqueId", self.list_item_unique_id.as_deref())?;
        writer.write_string_value("siteId", self.site_id.as_deref())?;
        writer.write_string_value("siteUrl", self.site_url.as_deref())?;
        writer.write_string_value("tenantId", self.tenant_id.as_deref())?;
        writer.write_string_value("webId", self.web_id.as_deref())?;
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

/// Addressing information for an item in a drive or site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemReference {
    pub drive_id: Option<String>,
    /// `personal`, `business` or `documentLibrary`.
    pub drive_type: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    /// Percent-encoded path of the item.
    pub path: Option<String>,
    pub share_id: Option<String>,
    pub sharepoint_ids: Option<SharepointIds>,
    pub site_id: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl ItemReference {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Parsable for ItemReference {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "driveId" => self.drive_id = node.get_string_value()?,
            "driveType" => self.drive_type = node.get_string_value()?,
            "id" => self.id = node.get_string_value()?,
            "name" => self.name = node.get_string_value()?,
            "path" => self.path = node.get_string_value()?,
            "shareId" => self.share_id = node.get_string_value()?,
            "sharepointIds" => self.sharepoint_ids = node.get_object_value()?,
            "siteId" => self.site_id = node.get_string_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string_value("driveId", self.drive_id.as_deref())?;
        writer.write_string_value("driveType", self.drive_type.as_deref())?;
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_string_value("path", self.path.as_deref())?;
        writer.write_string_value("shareId", self.share_id.as_deref())?;
        writer.write_object_value("sharepointIds", self.sharepoint_ids.as_ref())?;
        writer.write_string_value("siteId", self.site_id.as_deref())?;
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

// =============================================================================
// baseItem
// =============================================================================

/// Properties shared by sites, lists, drive items and pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseItem {
    pub entity: Entity,
    pub created_by: Option<IdentitySet>,
    pub created_date_time: Option<DateTime<FixedOffset>>,
    pub description: Option<String>,
    /// ETag for the item. Read-only.
    pub e_tag: Option<String>,
    pub last_modified_by: Option<IdentitySet>,
    pub last_modified_date_time: Option<DateTime<FixedOffset>>,
    pub name: Option<String>,
    /// Parent information, if the item has a parent.
    pub parent_reference: Option<ItemReference>,
    /// URL that displays the resource in the browser. Read-only.
    pub web_url: Option<String>,
}

impl BaseItem {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.baseItem";

    pub fn new() -> Self {
        Self::with_odata_type(Self::ODATA_TYPE)
    }

    /// An empty base item for a derived type's discriminator.
    pub fn with_odata_type(odata_type: &str) -> Self {
        Self {
            entity: Entity::with_odata_type(odata_type),
            ..Self::default()
        }
    }
}

impl_entity_ref!(BaseItem, entity);

impl Parsable for BaseItem {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "createdBy" => self.created_by = node.get_object_value()?,
            "createdDateTime" => self.created_date_time = node.get_time_value()?,
            "description" => self.description = node.get_string_value()?,
            "eTag" => self.e_tag = node.get_string_value()?,
            "lastModifiedBy" => self.last_modified_by = node.get_object_value()?,
            "lastModifiedDateTime" => self.last_modified_date_time = node.get_time_value()?,
            "name" => self.name = node.get_string_value()?,
            "parentReference" => self.parent_reference = node.get_object_value()?,
            "webUrl" => self.web_url = node.get_string_value()?,
            _ => return self.entity.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_object_value("createdBy", self.created_by.as_ref())?;
        writer.write_time_value("createdDateTime", self.created_date_time)?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("eTag", self.e_tag.as_deref())?;
        writer.write_object_value("lastModifiedBy", self.last_modified_by.as_ref())?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time)?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_object_value("parentReference", self.parent_reference.as_ref())?;
        writer.write_string_value("webUrl", self.web_url.as_deref())
    }

    fn additional_data(&self) -> &AdditionalData {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.entity.additional_data_mut()
    }
}

/// Any record derived from `baseItem`, picked by `@odata.type`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyBaseItem {
    Site(Site),
    SitePage(SitePage),
    BaseItem(BaseItem),
}

impl Default for AnyBaseItem {
    fn default() -> Self {
        Self::BaseItem(BaseItem::default())
    }
}

impl Parsable for AnyBaseItem {
    fn create_from_discriminator_value<N: ParseNode>(node: &N) -> Result<Self> {
        let discriminator = discriminator_value(node)?;
        let item = match discriminator.as_deref() {
            Some(Site::ODATA_TYPE) => Self::Site(Site::default()),
            Some(SitePage::ODATA_TYPE) => Self::SitePage(SitePage::default()),
            Some(BaseItem::ODATA_TYPE) | None => Self::BaseItem(BaseItem::default()),
            Some(other) => {
                debug!(discriminator = other, "unknown baseItem subtype, using baseItem");
                Self::BaseItem(BaseItem::default())
            }
        };
        Ok(item)
    }

    forward_to_variants!(Site, SitePage, BaseItem);
}

impl_family_entity_ref!(AnyBaseItem { Site, SitePage, BaseItem });

impl From<Site> for AnyBaseItem {
    fn from(site: Site) -> Self {
        Self::Site(site)
    }
}

impl From<SitePage> for AnyBaseItem {
    fn from(page: SitePage) -> Self {
        Self::SitePage(page)
    }
}

impl From<BaseItem> for AnyBaseItem {
    fn from(item: BaseItem) -> Self {
        Self::BaseItem(item)
    }
}

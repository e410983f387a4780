use super::SitePage;
use crate::error::Result;
use crate::models::{AnyBaseItem, BaseItem, SharepointIds, impl_entity_ref};
use crate::serialization::{AdditionalData, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter};

/// A SharePoint site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Site {
    pub base_item: BaseItem,
    pub deleted: Option<Deleted>,
    /// The full title for the site. Read-only.
    pub display_name: Option<String>,
    /// Used to address any item contained in this site. This collection
    /// cannot be enumerated.
    pub items: Option<Vec<AnyBaseItem>>,
    pub pages: Option<Vec<SitePage>>,
    /// If present, indicates that this is the root site in the site
    /// collection.
    pub root: Option<Root>,
    pub sharepoint_ids: Option<SharepointIds>,
    pub site_collection: Option<SiteCollection>,
    /// The collection of the sub-sites under this site.
    pub sites: Option<Vec<Site>>,
}

impl Site {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.site";

    pub fn new() -> Self {
        Self {
            base_item: BaseItem::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }

    pub fn is_root(&self) -> bool {
        self.root.is_some()
    }
}

impl_entity_ref!(Site, base_item);

impl Parsable for Site {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "deleted" => self.deleted = node.get_object_value()?,
            "displayName" => self.display_name = node.get_string_value()?,
            "items" => self.items = node.get_collection_of_object_values()?,
            "pages" => self.pages = node.get_collection_of_object_values()?,
            "root" => self.root = node.get_object_value()?,
            "sharepointIds" => self.sharepoint_ids = node.get_object_value()?,
            "siteCollection" => self.site_collection = node.get_object_value()?,
            "sites" => self.sites = node.get_collection_of_object_values()?,
            _ => return self.base_item.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.base_item.serialize(writer)?;
        writer.write_object_value("deleted", self.deleted.as_ref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_collection_of_object_values("items", self.items.as_deref())?;
        writer.write_collection_of_object_values("pages", self.pages.as_deref())?;
        writer.write_object_value("root", self.root.as_ref())?;
        writer.write_object_value("sharepointIds", self.sharepoint_ids.as_ref())?;
        writer.write_object_value("siteCollection", self.site_collection.as_ref())?;
        writer.write_collection_of_object_values("sites", self.sites.as_deref())
    }

    fn additional_data(&self) -> &AdditionalData {
        self.base_item.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base_item.additional_data_mut()
    }
}

/// Marks a deleted item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deleted {
    pub state: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Parsable for Deleted {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "state" => self.state = node.get_string_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_string_value("state", self.state.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// An empty marker facet: its presence is the information.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Root {
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Parsable for Root {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        if key == ODATA_TYPE_KEY {
            self.odata_type = node.get_string_value()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteCollection {
    /// The geographic region code for where the collection resides.
    pub data_location_code: Option<String>,
    pub hostname: Option<String>,
    pub root: Option<Root>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Parsable for SiteCollection {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "dataLocationCode" => self.data_location_code = node.get_string_value()?,
            "hostname" => self.hostname = node.get_string_value()?,
            "root" => self.root = node.get_object_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string_value("dataLocationCode", self.data_location_code.as_deref())?;
        writer.write_string_value("hostname", self.hostname.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_object_value("root", self.root.as_ref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

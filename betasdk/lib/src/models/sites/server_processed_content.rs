use serde_json::Value;

use crate::error::Result;
use crate::serialization::{AdditionalData, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter};

/// A key with a string value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaDataKeyStringPair {
    pub key: Option<String>,
    pub value: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl MetaDataKeyStringPair {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: Some(key.to_owned()),
            value: Some(value.to_owned()),
            ..Self::default()
        }
    }
}

impl Parsable for MetaDataKeyStringPair {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "key" => self.key = node.get_string_value()?,
            "value" => self.value = node.get_string_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string_value("key", self.key.as_deref())?;
        writer.write_string_value("value", self.value.as_deref())?;
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

/// A key with a free-form JSON value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaDataKeyValuePair {
    pub key: Option<String>,
    pub value: Option<Value>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Parsable for MetaDataKeyValuePair {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "key" => self.key = node.get_string_value()?,
            "value" => self.value = node.get_untyped_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string_value("key", self.key.as_deref())?;
        writer.write_untyped_value("value", self.value.as_ref())?;
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

/// Content the SharePoint server pre-renders for a web part or title area:
/// localized strings, image sources, links and search text, each keyed by
/// the property it belongs to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerProcessedContent {
    /// Component ids for Microsoft-provided dependencies.
    pub component_dependencies: Option<Vec<MetaDataKeyStringPair>>,
    pub custom_metadata: Option<Vec<MetaDataKeyValuePair>>,
    /// Static HTML strings the web part renders.
    pub html_strings: Option<Vec<MetaDataKeyStringPair>>,
    pub image_sources: Option<Vec<MetaDataKeyStringPair>>,
    pub links: Option<Vec<MetaDataKeyStringPair>>,
    pub searchable_plain_texts: Option<Vec<MetaDataKeyStringPair>>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

fn lookup<'a>(pairs: Option<&'a [MetaDataKeyStringPair]>, key: &str) -> Option<&'a str> {
    pairs?
        .iter()
        .find(|pair| pair.key.as_deref() == Some(key))
        .and_then(|pair| pair.value.as_deref())
}

impl ServerProcessedContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// The HTML string stored under `key`, if any.
    pub fn html_string(&self, key: &str) -> Option<&str> {
        lookup(self.html_strings.as_deref(), key)
    }

    /// The image source stored under `key`, if any.
    pub fn image_source(&self, key: &str) -> Option<&str> {
        lookup(self.image_sources.as_deref(), key)
    }
}

impl Parsable for ServerProcessedContent {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "componentDependencies" => {
                self.component_dependencies = node.get_collection_of_object_values()?
            }
            "customMetadata" => self.custom_metadata = node.get_collection_of_object_values()?,
            "htmlStrings" => self.html_strings = node.get_collection_of_object_values()?,
            "imageSources" => self.image_sources = node.get_collection_of_object_values()?,
            "links" => self.links = node.get_collection_of_object_values()?,
            "searchablePlainTexts" => {
                self.searchable_plain_texts = node.get_collection_of_object_values()?
            }
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_collection_of_object_values(
            "componentDependencies",
            self.component_dependencies.as_deref(),
        )?;
        writer.write_collection_of_object_values("customMetadata", self.custom_metadata.as_deref())?;
        writer.write_collection_of_object_values("htmlStrings", self.html_strings.as_deref())?;
        writer.write_collection_of_object_values("imageSources", self.image_sources.as_deref())?;
        writer.write_collection_of_object_values("links", self.links.as_deref())?;
        writer.write_collection_of_object_values(
            "searchablePlainTexts",
            self.searchable_plain_texts.as_deref(),
        )?;
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

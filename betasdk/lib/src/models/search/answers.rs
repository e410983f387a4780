use chrono::{DateTime, FixedOffset};
use tracing::debug;

use super::{AnswerState, DevicePlatformType};
use crate::error::Result;
use crate::models::{
    Entity, IdentitySet, forward_to_variants, impl_entity_ref, impl_family_entity_ref,
};
use crate::serialization::{
    AdditionalData, ODATA_TYPE_KEY, Parsable, ParseNode, SerializationWriter, discriminator_value,
};

// =============================================================================
// searchAnswer hierarchy
// =============================================================================

/// Base record of administrator-curated search answers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchAnswer {
    pub entity: Entity,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub last_modified_by: Option<IdentitySet>,
    pub last_modified_date_time: Option<DateTime<FixedOffset>>,
    /// Landing page the answer points at.
    pub web_url: Option<String>,
}

impl SearchAnswer {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.search.searchAnswer";

    pub fn new() -> Self {
        Self::with_odata_type(Self::ODATA_TYPE)
    }

    pub fn with_odata_type(odata_type: &str) -> Self {
        Self {
            entity: Entity::with_odata_type(odata_type),
            ..Self::default()
        }
    }
}

impl_entity_ref!(SearchAnswer, entity);

impl Parsable for SearchAnswer {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "description" => self.description = node.get_string_value()?,
            "displayName" => self.display_name = node.get_string_value()?,
            "lastModifiedBy" => self.last_modified_by = node.get_object_value()?,
            "lastModifiedDateTime" => self.last_modified_date_time = node.get_time_value()?,
            "webUrl" => self.web_url = node.get_string_value()?,
            _ => return self.entity.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.entity.serialize(writer)?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_object_value("lastModifiedBy", self.last_modified_by.as_ref())?;
        writer.write_time_value("lastModifiedDateTime", self.last_modified_date_time)?;
        writer.write_string_value("webUrl", self.web_url.as_deref())
    }

    fn additional_data(&self) -> &AdditionalData {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.entity.additional_data_mut()
    }
}

/// A search bookmark: a link promoted for a set of keywords.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bookmark {
    pub search_answer: SearchAnswer,
    pub availability_end_date_time: Option<DateTime<FixedOffset>>,
    pub availability_start_date_time: Option<DateTime<FixedOffset>>,
    /// Categories commonly used to describe this bookmark.
    pub categories: Option<Vec<String>>,
    /// Groups that can view this bookmark.
    pub group_ids: Option<Vec<String>>,
    pub is_suggested: Option<bool>,
    pub keywords: Option<AnswerKeyword>,
    pub language_tags: Option<Vec<String>>,
    pub platforms: Option<Vec<DevicePlatformType>>,
    /// Power Apps associated with this bookmark.
    pub power_app_ids: Option<Vec<String>>,
    pub state: Option<AnswerState>,
    pub targeted_variations: Option<Vec<AnswerVariant>>,
}

impl Bookmark {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.search.bookmark";

    pub fn new() -> Self {
        Self {
            search_answer: SearchAnswer::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }
}

impl_entity_ref!(Bookmark, search_answer);

impl Parsable for Bookmark {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "availabilityEndDateTime" => self.availability_end_date_time = node.get_time_value()?,
            "availabilityStartDateTime" => {
                self.availability_start_date_time = node.get_time_value()?
            }
            "categories" => self.categories = node.get_collection_of_string_values()?,
            "groupIds" => self.group_ids = node.get_collection_of_string_values()?,
            "isSuggested" => self.is_suggested = node.get_bool_value()?,
            "keywords" => self.keywords = node.get_object_value()?,
            "languageTags" => self.language_tags = node.get_collection_of_string_values()?,
            "platforms" => self.platforms = node.get_collection_of_enum_values()?,
            "powerAppIds" => self.power_app_ids = node.get_collection_of_string_values()?,
            "state" => self.state = node.get_enum_value()?,
            "targetedVariations" => {
                self.targeted_variations = node.get_collection_of_object_values()?
            }
            _ => return self.search_answer.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.search_answer.serialize(writer)?;
        writer.write_time_value("availabilityEndDateTime", self.availability_end_date_time)?;
        writer.write_time_value("availabilityStartDateTime", self.availability_start_date_time)?;
        writer.write_collection_of_string_values("categories", self.categories.as_deref())?;
        writer.write_collection_of_string_values("groupIds", self.group_ids.as_deref())?;
        writer.write_bool_value("isSuggested", self.is_suggested)?;
        writer.write_object_value("keywords", self.keywords.as_ref())?;
        writer.write_collection_of_string_values("languageTags", self.language_tags.as_deref())?;
        writer.write_collection_of_enum_values("platforms", self.platforms.as_deref())?;
        writer.write_collection_of_string_values("powerAppIds", self.power_app_ids.as_deref())?;
        writer.write_enum_value("state", self.state)?;
        writer.write_collection_of_object_values(
            "targetedVariations",
            self.targeted_variations.as_deref(),
        )
    }

    fn additional_data(&self) -> &AdditionalData {
        self.search_answer.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.search_answer.additional_data_mut()
    }
}

/// A question-and-answer pair shown for matching queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Qna {
    pub search_answer: SearchAnswer,
    pub availability_end_date_time: Option<DateTime<FixedOffset>>,
    pub availability_start_date_time: Option<DateTime<FixedOffset>>,
    pub group_ids: Option<Vec<String>>,
    pub is_suggested: Option<bool>,
    pub keywords: Option<AnswerKeyword>,
    pub language_tags: Option<Vec<String>>,
    pub platforms: Option<Vec<DevicePlatformType>>,
    pub state: Option<AnswerState>,
    pub targeted_variations: Option<Vec<AnswerVariant>>,
}

impl Qna {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.search.qna";

    pub fn new() -> Self {
        Self {
            search_answer: SearchAnswer::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }
}

impl_entity_ref!(Qna, search_answer);

impl Parsable for Qna {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "availabilityEndDateTime" => self.availability_end_date_time = node.get_time_value()?,
            "availabilityStartDateTime" => {
                self.availability_start_date_time = node.get_time_value()?
            }
            "groupIds" => self.group_ids = node.get_collection_of_string_values()?,
            "isSuggested" => self.is_suggested = node.get_bool_value()?,
            "keywords" => self.keywords = node.get_object_value()?,
            "languageTags" => self.language_tags = node.get_collection_of_string_values()?,
            "platforms" => self.platforms = node.get_collection_of_enum_values()?,
            "state" => self.state = node.get_enum_value()?,
            "targetedVariations" => {
                self.targeted_variations = node.get_collection_of_object_values()?
            }
            _ => return self.search_answer.deserialize_field(key, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        self.search_answer.serialize(writer)?;
        writer.write_time_value("availabilityEndDateTime", self.availability_end_date_time)?;
        writer.write_time_value("availabilityStartDateTime", self.availability_start_date_time)?;
        writer.write_collection_of_string_values("groupIds", self.group_ids.as_deref())?;
        writer.write_bool_value("isSuggested", self.is_suggested)?;
        writer.write_object_value("keywords", self.keywords.as_ref())?;
        writer.write_collection_of_string_values("languageTags", self.language_tags.as_deref())?;
        writer.write_collection_of_enum_values("platforms", self.platforms.as_deref())?;
        writer.write_enum_value("state", self.state)?;
        writer.write_collection_of_object_values(
            "targetedVariations",
            self.targeted_variations.as_deref(),
        )
    }

    fn additional_data(&self) -> &AdditionalData {
        self.search_answer.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.search_answer.additional_data_mut()
    }
}

/// Any search answer, picked by `@odata.type`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnySearchAnswer {
    Bookmark(Bookmark),
    Qna(Qna),
    SearchAnswer(SearchAnswer),
}

impl Default for AnySearchAnswer {
    fn default() -> Self {
        Self::SearchAnswer(SearchAnswer::default())
    }
}

impl Parsable for AnySearchAnswer {
    fn create_from_discriminator_value<N: ParseNode>(node: &N) -> Result<Self> {
        let discriminator = discriminator_value(node)?;
        let answer = match discriminator.as_deref() {
            Some(Bookmark::ODATA_TYPE) => Self::Bookmark(Bookmark::default()),
            Some(Qna::ODATA_TYPE) => Self::Qna(Qna::default()),
            Some(SearchAnswer::ODATA_TYPE) | None => Self::SearchAnswer(SearchAnswer::default()),
            Some(other) => {
                debug!(discriminator = other, "unknown searchAnswer subtype, using searchAnswer");
                Self::SearchAnswer(SearchAnswer::default())
            }
        };
        Ok(answer)
    }

    forward_to_variants!(Bookmark, Qna, SearchAnswer);
}

impl_family_entity_ref!(AnySearchAnswer { Bookmark, Qna, SearchAnswer });

// =============================================================================
// Answer details
// =============================================================================

/// Keywords that trigger an answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerKeyword {
    pub keywords: Option<Vec<String>>,
    /// Match keywords that are similar to, not only equal to, `keywords`.
    pub match_similar_keywords: Option<bool>,
    /// Keywords reserved for this answer only.
    pub reserved_keywords: Option<Vec<String>>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Parsable for AnswerKeyword {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "keywords" => self.keywords = node.get_collection_of_string_values()?,
            "matchSimilarKeywords" => self.match_similar_keywords = node.get_bool_value()?,
            "reservedKeywords" => self.reserved_keywords = node.get_collection_of_string_values()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_collection_of_string_values("keywords", self.keywords.as_deref())?;
        writer.write_bool_value("matchSimilarKeywords", self.match_similar_keywords)?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_collection_of_string_values(
            "reservedKeywords",
            self.reserved_keywords.as_deref(),
        )?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A variation of an answer for one language or platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerVariant {
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub language_tag: Option<String>,
    pub platform: Option<DevicePlatformType>,
    pub web_url: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl Parsable for AnswerVariant {
    fn create_from_discriminator_value<N: ParseNode>(_node: &N) -> Result<Self> {
        Ok(Self::default())
    }

    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool> {
        match key {
            "description" => self.description = node.get_string_value()?,
            "displayName" => self.display_name = node.get_string_value()?,
            "languageTag" => self.language_tag = node.get_string_value()?,
            "platform" => self.platform = node.get_enum_value()?,
            "webUrl" => self.web_url = node.get_string_value()?,
            ODATA_TYPE_KEY => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()> {
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_string_value("languageTag", self.language_tag.as_deref())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type.as_deref())?;
        writer.write_enum_value("platform", self.platform)?;
        writer.write_string_value("webUrl", self.web_url.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SerializationError;
    use crate::serialization::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn bookmark_with_platforms_and_variations() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.search.bookmark",
            "id": "bm1",
            "displayName": "Benefits",
            "webUrl": "https://hr.contoso.com/benefits",
            "state": "published",
            "platforms": ["ios", "macOS", "androidASOP"],
            "categories": [],
            "keywords": {"keywords": ["benefits", "401k"], "matchSimilarKeywords": true},
            "targetedVariations": [
                {"languageTag": "fr-FR", "platform": "windows10AndLater", "displayName": "Avantages"}
            ]
        });
        let answer: AnySearchAnswer = from_json_value(&payload).unwrap();
        let AnySearchAnswer::Bookmark(bookmark) = &answer else {
            panic!("expected a bookmark, got {}", answer.type_name());
        };
        assert_eq!(
            bookmark.platforms.as_deref(),
            Some(
                &[
                    DevicePlatformType::Ios,
                    DevicePlatformType::MacOs,
                    DevicePlatformType::AndroidAsop
                ][..]
            )
        );
        assert_eq!(bookmark.state, Some(AnswerState::Published));
        assert_eq!(bookmark.categories, Some(Vec::new()));
        assert_eq!(bookmark.search_answer.display_name.as_deref(), Some("Benefits"));
        assert_eq!(to_json_value(&answer).unwrap(), payload);
    }

    #[test]
    fn qna_dispatch_and_unknown_fallback() {
        let qna: AnySearchAnswer =
            from_json_value(&json!({"@odata.type": "#microsoft.graph.search.qna", "state": "draft"}))
                .unwrap();
        assert_eq!(qna.type_name(), "Qna");

        let acronym: AnySearchAnswer = from_json_value(&json!({
            "@odata.type": "#microsoft.graph.search.acronym",
            "standsFor": "Search Engine Results Page"
        }))
        .unwrap();
        assert_eq!(acronym.type_name(), "SearchAnswer");
        assert_eq!(acronym.additional_data()["standsFor"], "Search Engine Results Page");
    }

    #[test]
    fn null_collection_elements_are_dropped_on_write() {
        let bookmark: Bookmark = from_json_value(&json!({
            "groupIds": ["a", null, "b"],
            "platforms": [null, "ios"],
            "description": null
        }))
        .unwrap();
        assert_eq!(
            bookmark.group_ids,
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            to_json_value(&bookmark).unwrap(),
            json!({"groupIds": ["a", "b"], "platforms": ["ios"]})
        );
    }

    #[test]
    fn unknown_platform_in_collection_fails() {
        let err = from_json_value::<Qna>(&json!({"platforms": ["ios", "blackberry"]})).unwrap_err();
        assert!(matches!(err, SerializationError::UnknownEnumValue(_)));
        assert_eq!(err.to_string(), "'blackberry' is not a valid devicePlatformType");
    }

    #[test]
    fn new_sets_namespaced_discriminator() {
        assert_eq!(
            Qna::new().search_answer.entity.odata_type.as_deref(),
            Some("#microsoft.graph.search.qna")
        );
        assert_eq!(
            to_json_value(&Bookmark::new()).unwrap(),
            json!({"@odata.type": "#microsoft.graph.search.bookmark"})
        );
    }
}

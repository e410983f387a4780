//! Generic parse/write abstraction over JSON-like trees.
//!
//! Models never touch `serde_json` directly. They describe themselves to a
//! [`ParseNode`] (one typed read per JSON key) and a [`SerializationWriter`]
//! (one typed write per field), which keeps the wire shape in one place:
//!
//! - [`Parsable`] - implemented by every model and polymorphic family
//! - [`GraphEnum`] - closed string-coded enums
//! - [`JsonParseNode`] / [`JsonSerializationWriter`] - the JSON backend
//! - [`IsoDuration`] - ISO-8601 durations (`PT1H30M`)
//!
//! ## Examples
//!
//! ```
//! use betasdk_lib::models::sites::TitleArea;
//! use betasdk_lib::serialization::{from_json_str, to_json_value};
//!
//! let area: TitleArea = from_json_str(r#"{"layout":"colorBlock","showAuthor":true}"#).unwrap();
//! assert_eq!(area.show_author, Some(true));
//!
//! let json = to_json_value(&area).unwrap();
//! assert_eq!(json["layout"], "colorBlock");
//! ```

pub mod duration;
mod json_parse_node;
mod json_writer;

pub use duration::{DurationParseError, IsoDuration};
pub use json_parse_node::JsonParseNode;
pub use json_writer::JsonSerializationWriter;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::Value;
use uuid::Uuid;

use crate::config::SerializationConfig;
use crate::error::{EnumParseError, Result, SerializationError};

/// JSON key carrying the polymorphic type discriminator.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Properties found on the wire that no model field declares.
pub type AdditionalData = serde_json::Map<String, Value>;

/// A closed enum with a fixed string table.
///
/// Implemented through `impl_graph_enum!` on top of the strum derives, so the
/// declaration order of the variants is the order of the string table.
pub trait GraphEnum: Copy + Sized + 'static {
    /// Schema name of the enum, used in error messages.
    const NAME: &'static str;

    /// The declared wire spelling of this value.
    fn as_str(&self) -> &'static str;

    /// Look up a value by its exact wire spelling.
    fn parse(value: &str) -> std::result::Result<Self, EnumParseError>;
}

/// A model that can be read from a [`ParseNode`] and written to a
/// [`SerializationWriter`].
pub trait Parsable: Sized {
    /// Pick the concrete value to populate for this node.
    ///
    /// Plain records return an empty instance. Polymorphic families inspect
    /// `@odata.type` (see [`discriminator_value`]) and fall back to their
    /// base record.
    fn create_from_discriminator_value<N: ParseNode>(node: &N) -> Result<Self>;

    /// Read the property `key` from `node` into this model.
    ///
    /// Returns `Ok(false)` when neither this record nor any record it embeds
    /// declares `key`.
    fn deserialize_field<N: ParseNode>(&mut self, key: &str, node: &N) -> Result<bool>;

    /// Write every present field, base record first.
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<()>;

    fn additional_data(&self) -> &AdditionalData;

    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}

/// Read side of the abstraction: one node of a JSON-like tree.
///
/// Every typed getter returns `Ok(None)` for an explicit `null`. A value of
/// the wrong kind is an error.
pub trait ParseNode: Sized {
    /// The property `key` of an object node, if present.
    fn child_node(&self, key: &str) -> Option<Self>;

    fn is_null(&self) -> bool;

    fn get_string_value(&self) -> Result<Option<String>>;
    fn get_bool_value(&self) -> Result<Option<bool>>;
    fn get_i32_value(&self) -> Result<Option<i32>>;
    fn get_i64_value(&self) -> Result<Option<i64>>;
    fn get_f64_value(&self) -> Result<Option<f64>>;
    fn get_uuid_value(&self) -> Result<Option<Uuid>>;
    fn get_time_value(&self) -> Result<Option<DateTime<FixedOffset>>>;
    fn get_date_only_value(&self) -> Result<Option<NaiveDate>>;
    fn get_time_only_value(&self) -> Result<Option<NaiveTime>>;
    fn get_iso_duration_value(&self) -> Result<Option<IsoDuration>>;
    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>>;

    /// The raw subtree, for schema properties typed as free-form JSON.
    fn get_untyped_value(&self) -> Result<Option<Value>>;

    /// The elements of an array node.
    fn elements(&self) -> Result<Option<Vec<Self>>>;

    /// Route every property of an object node through
    /// [`Parsable::deserialize_field`], keeping the rest as additional data.
    fn assign_field_values<T: Parsable>(&self, target: &mut T) -> Result<()>;

    fn get_enum_value<E: GraphEnum>(&self) -> Result<Option<E>> {
        match self.get_string_value()? {
            Some(raw) => Ok(Some(E::parse(&raw)?)),
            None => Ok(None),
        }
    }

    fn get_object_value<T: Parsable>(&self) -> Result<Option<T>> {
        if self.is_null() {
            return Ok(None);
        }
        let mut value = T::create_from_discriminator_value(self)?;
        self.assign_field_values(&mut value)?;
        Ok(Some(value))
    }

    /// Null elements are skipped.
    fn get_collection_of_object_values<T: Parsable>(&self) -> Result<Option<Vec<T>>> {
        let Some(items) = self.elements()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(items.len());
        for item in &items {
            if let Some(value) = item.get_object_value()? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    fn get_collection_of_string_values(&self) -> Result<Option<Vec<String>>> {
        let Some(items) = self.elements()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(items.len());
        for item in &items {
            if let Some(value) = item.get_string_value()? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    fn get_collection_of_enum_values<E: GraphEnum>(&self) -> Result<Option<Vec<E>>> {
        let Some(items) = self.elements()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(items.len());
        for item in &items {
            if let Some(value) = item.get_enum_value()? {
                values.push(value);
            }
        }
        Ok(Some(values))
    }
}

/// Write side of the abstraction, keyed by JSON property name.
///
/// A `None` value writes nothing. Collections are written whenever they are
/// `Some`, including when empty.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<()>;
    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<()>;
    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<()>;
    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<()>;
    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<()>;
    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<()>;
    fn write_time_value(&mut self, key: &str, value: Option<DateTime<FixedOffset>>) -> Result<()>;
    fn write_date_only_value(&mut self, key: &str, value: Option<NaiveDate>) -> Result<()>;
    fn write_time_only_value(&mut self, key: &str, value: Option<NaiveTime>) -> Result<()>;
    fn write_iso_duration_value(&mut self, key: &str, value: Option<IsoDuration>) -> Result<()>;
    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<()>;
    fn write_untyped_value(&mut self, key: &str, value: Option<&Value>) -> Result<()>;
    fn write_collection_of_string_values(&mut self, key: &str, values: Option<&[String]>)
    -> Result<()>;
    fn write_collection_of_enum_values<E: GraphEnum>(
        &mut self,
        key: &str,
        values: Option<&[E]>,
    ) -> Result<()>;
    fn write_object_value<T: Parsable>(&mut self, key: &str, value: Option<&T>) -> Result<()>;
    fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<()>;

    /// Write undeclared properties. Never replaces a property the model
    /// itself wrote.
    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<()>;

    fn write_enum_value<E: GraphEnum>(&mut self, key: &str, value: Option<E>) -> Result<()> {
        self.write_string_value(key, value.as_ref().map(GraphEnum::as_str))
    }
}

/// Read the `@odata.type` discriminator of an object node.
pub fn discriminator_value<N: ParseNode>(node: &N) -> Result<Option<String>> {
    match node.child_node(ODATA_TYPE_KEY) {
        Some(child) => child.get_string_value(),
        None => Ok(None),
    }
}

/// Parse a model from JSON text with the default configuration.
pub fn from_json_str<T: Parsable>(payload: &str) -> Result<T> {
    from_json_str_with_config(payload, SerializationConfig::default())
}

pub fn from_json_str_with_config<T: Parsable>(
    payload: &str,
    config: SerializationConfig,
) -> Result<T> {
    let value: Value = serde_json::from_str(payload)?;
    from_json_value_with_config(&value, config)
}

/// Parse a model from raw JSON bytes with the default configuration.
pub fn from_json_slice<T: Parsable>(payload: &[u8]) -> Result<T> {
    let value: Value = serde_json::from_slice(payload)?;
    from_json_value_with_config(&value, SerializationConfig::default())
}

/// Parse a model from an already decoded JSON tree.
pub fn from_json_value<T: Parsable>(value: &Value) -> Result<T> {
    from_json_value_with_config(value, SerializationConfig::default())
}

pub fn from_json_value_with_config<T: Parsable>(
    value: &Value,
    config: SerializationConfig,
) -> Result<T> {
    let node = JsonParseNode::with_config(value, config);
    node.get_object_value()?
        .ok_or(SerializationError::TypeMismatch {
            expected: "object",
            found: "null",
        })
}

/// Write a model into a JSON tree with the default configuration.
pub fn to_json_value<T: Parsable>(model: &T) -> Result<Value> {
    to_json_value_with_config(model, SerializationConfig::default())
}

pub fn to_json_value_with_config<T: Parsable>(
    model: &T,
    config: SerializationConfig,
) -> Result<Value> {
    let mut writer = JsonSerializationWriter::with_config(config);
    model.serialize(&mut writer)?;
    Ok(writer.into_value())
}

/// Write a model as compact JSON text.
pub fn to_json_string<T: Parsable>(model: &T) -> Result<String> {
    to_json_string_with_config(model, SerializationConfig::default())
}

pub fn to_json_string_with_config<T: Parsable>(
    model: &T,
    config: SerializationConfig,
) -> Result<String> {
    let value = to_json_value_with_config(model, config)?;
    let text = if config.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Implement [`GraphEnum`] for a strum-derived enum.
///
/// The enum must derive `EnumString` and `IntoStaticStr` with the wire
/// spellings.
macro_rules! impl_graph_enum {
    ($ty:ty, $name:literal) => {
        impl $crate::serialization::GraphEnum for $ty {
            const NAME: &'static str = $name;

            fn as_str(&self) -> &'static str {
                (*self).into()
            }

            fn parse(
                value: &str,
            ) -> ::std::result::Result<Self, $crate::error::EnumParseError> {
                <$ty as ::std::str::FromStr>::from_str(value)
                    .map_err(|_| $crate::error::EnumParseError::new(value, $name))
            }
        }
    };
}

pub(crate) use impl_graph_enum;

/// Check an enum's string table: declaration order, exact round-trips through
/// `parse`/`as_str`/serde, and rejection of unknown or re-cased spellings.
#[cfg(test)]
pub(crate) fn assert_enum_table<E>(expected: &[&str])
where
    E: GraphEnum
        + strum::IntoEnumIterator
        + PartialEq
        + std::fmt::Debug
        + std::fmt::Display
        + serde::Serialize
        + serde::de::DeserializeOwned,
{
    let spellings: Vec<&str> = E::iter().map(|v| v.as_str()).collect();
    assert_eq!(spellings, expected, "string table of {}", E::NAME);

    for value in E::iter() {
        assert_eq!(E::parse(value.as_str()).unwrap(), value);
        assert_eq!(value.to_string(), value.as_str());
        assert_eq!(serde_json::to_value(value).unwrap(), value.as_str());
        let back: E = serde_json::from_value(Value::String(value.as_str().to_owned())).unwrap();
        assert_eq!(back, value);
    }

    let err = E::parse("definitelyNotDeclared").unwrap_err();
    assert_eq!(err.enum_name, E::NAME);
    assert_eq!(err.value, "definitelyNotDeclared");

    let shouted = expected[0].to_uppercase();
    if shouted != expected[0] {
        assert!(E::parse(&shouted).is_err(), "{shouted} must not parse");
    }
}

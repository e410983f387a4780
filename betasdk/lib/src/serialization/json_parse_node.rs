use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::Value;
use tracing::trace;
use uuid::Uuid;

use super::{IsoDuration, Parsable, ParseNode};
use crate::config::SerializationConfig;
use crate::error::{Result, SerializationError};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S%.f";

/// A [`ParseNode`] borrowing one value of a decoded `serde_json` tree.
///
/// Child nodes share the parent's configuration.
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
    config: SerializationConfig,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self::with_config(value, SerializationConfig::default())
    }

    pub fn with_config(value: &'a Value, config: SerializationConfig) -> Self {
        Self { value, config }
    }

    /// The underlying JSON value.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn child(&self, value: &'a Value) -> Self {
        Self {
            value,
            config: self.config,
        }
    }

    fn mismatch(&self, expected: &'static str) -> SerializationError {
        SerializationError::TypeMismatch {
            expected,
            found: kind_of(self.value),
        }
    }

    /// A string node, with `null` mapped to `None`.
    fn as_str(&self) -> Result<Option<&'a str>> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.as_str())),
            _ => Err(self.mismatch("string")),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'a> ParseNode for JsonParseNode<'a> {
    fn child_node(&self, key: &str) -> Option<Self> {
        self.value.get(key).map(|value| self.child(value))
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn get_string_value(&self) -> Result<Option<String>> {
        Ok(self.as_str()?.map(str::to_owned))
    }

    fn get_bool_value(&self) -> Result<Option<bool>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            _ => Err(self.mismatch("boolean")),
        }
    }

    fn get_i32_value(&self) -> Result<Option<i32>> {
        let Some(wide) = self.get_i64_value()? else {
            return Ok(None);
        };
        i32::try_from(wide)
            .map(Some)
            .map_err(|_| SerializationError::NumberOutOfRange {
                value: wide.to_string(),
                target: "i32",
            })
    }

    fn get_i64_value(&self) -> Result<Option<i64>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(Some(v))
                } else if n.is_u64() {
                    Err(SerializationError::NumberOutOfRange {
                        value: n.to_string(),
                        target: "i64",
                    })
                } else {
                    Err(self.mismatch("integer"))
                }
            }
            _ => Err(self.mismatch("integer")),
        }
    }

    /// Numbers, plus the OData spellings `NaN`, `INF` and `-INF`.
    fn get_f64_value(&self) -> Result<Option<f64>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            Value::String(s) => match s.as_str() {
                "NaN" => Ok(Some(f64::NAN)),
                "INF" => Ok(Some(f64::INFINITY)),
                "-INF" => Ok(Some(f64::NEG_INFINITY)),
                _ => Err(self.mismatch("number")),
            },
            _ => Err(self.mismatch("number")),
        }
    }

    fn get_uuid_value(&self) -> Result<Option<Uuid>> {
        match self.as_str()? {
            Some(raw) => Ok(Some(Uuid::parse_str(raw)?)),
            None => Ok(None),
        }
    }

    fn get_time_value(&self) -> Result<Option<DateTime<FixedOffset>>> {
        let Some(raw) = self.as_str()? else {
            return Ok(None);
        };
        DateTime::parse_from_rfc3339(raw)
            .map(Some)
            .map_err(|source| SerializationError::InvalidTimestamp {
                value: raw.to_owned(),
                source,
            })
    }

    fn get_date_only_value(&self) -> Result<Option<NaiveDate>> {
        let Some(raw) = self.as_str()? else {
            return Ok(None);
        };
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Some)
            .map_err(|source| SerializationError::InvalidDate {
                value: raw.to_owned(),
                source,
            })
    }

    fn get_time_only_value(&self) -> Result<Option<NaiveTime>> {
        let Some(raw) = self.as_str()? else {
            return Ok(None);
        };
        NaiveTime::parse_from_str(raw, TIME_OF_DAY_FORMAT)
            .map(Some)
            .map_err(|source| SerializationError::InvalidTime {
                value: raw.to_owned(),
                source,
            })
    }

    fn get_iso_duration_value(&self) -> Result<Option<IsoDuration>> {
        match self.as_str()? {
            Some(raw) => Ok(Some(raw.parse::<IsoDuration>()?)),
            None => Ok(None),
        }
    }

    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>> {
        match self.as_str()? {
            Some(raw) => Ok(Some(BASE64.decode(raw)?)),
            None => Ok(None),
        }
    }

    fn get_untyped_value(&self) -> Result<Option<Value>> {
        if self.value.is_null() {
            Ok(None)
        } else {
            Ok(Some(self.value.clone()))
        }
    }

    fn elements(&self) -> Result<Option<Vec<Self>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(items.iter().map(|item| self.child(item)).collect())),
            _ => Err(self.mismatch("array")),
        }
    }

    fn assign_field_values<T: Parsable>(&self, target: &mut T) -> Result<()> {
        let Value::Object(properties) = self.value else {
            return Err(self.mismatch("object"));
        };
        for (key, value) in properties {
            if target.deserialize_field(key, &self.child(value))? {
                continue;
            }
            if self.config.capture_additional_data {
                trace!(key = key.as_str(), "keeping undeclared property as additional data");
                target.additional_data_mut().insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    fn node(value: &Value) -> JsonParseNode<'_> {
        JsonParseNode::new(value)
    }

    #[test]
    fn null_reads_as_none_for_every_primitive() {
        let value = Value::Null;
        let n = node(&value);
        assert_eq!(n.get_string_value().unwrap(), None);
        assert_eq!(n.get_bool_value().unwrap(), None);
        assert_eq!(n.get_i32_value().unwrap(), None);
        assert_eq!(n.get_f64_value().unwrap(), None);
        assert_eq!(n.get_uuid_value().unwrap(), None);
        assert_eq!(n.get_time_value().unwrap(), None);
        assert_eq!(n.get_byte_array_value().unwrap(), None);
        assert_eq!(n.get_untyped_value().unwrap(), None);
        assert!(n.elements().unwrap().is_none());
    }

    #[test]
    fn bool_from_string_is_type_mismatch() {
        let value = json!("true");
        let err = node(&value).get_bool_value().unwrap_err();
        assert!(matches!(
            err,
            SerializationError::TypeMismatch { expected: "boolean", found: "string" }
        ));
    }

    #[test]
    fn i32_overflow_is_out_of_range() {
        let value = json!(4_294_967_296_i64);
        let err = node(&value).get_i32_value().unwrap_err();
        assert!(matches!(err, SerializationError::NumberOutOfRange { target: "i32", .. }));
    }

    #[test]
    fn fractional_number_is_not_an_integer() {
        let value = json!(1.5);
        assert!(matches!(
            node(&value).get_i64_value(),
            Err(SerializationError::TypeMismatch { expected: "integer", found: "number" })
        ));
    }

    #[test]
    fn f64_accepts_integers_and_odata_specials() {
        let value = json!(3);
        assert_eq!(node(&value).get_f64_value().unwrap(), Some(3.0));

        let value = json!("INF");
        assert_eq!(node(&value).get_f64_value().unwrap(), Some(f64::INFINITY));

        let value = json!("NaN");
        assert!(node(&value).get_f64_value().unwrap().unwrap().is_nan());

        let value = json!("lots");
        assert!(node(&value).get_f64_value().is_err());
    }

    #[test]
    fn time_value_keeps_offset() {
        let value = json!("2023-04-05T06:07:08.5+02:00");
        let parsed = node(&value).get_time_value().unwrap().unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(parsed.hour(), 6);
        assert_eq!(parsed.nanosecond(), 500_000_000);
    }

    #[test]
    fn bad_timestamp_names_the_value() {
        let value = json!("yesterday");
        let err = node(&value).get_time_value().unwrap_err();
        assert!(err.to_string().contains("'yesterday'"));
    }

    #[test]
    fn date_and_time_of_day() {
        let value = json!("2022-12-31");
        let date = node(&value).get_date_only_value().unwrap().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2022, 12, 31));

        let value = json!("22:30:00");
        let time = node(&value).get_time_only_value().unwrap().unwrap();
        assert_eq!((time.hour(), time.minute()), (22, 30));

        let value = json!("08:15:30.0000000");
        let time = node(&value).get_time_only_value().unwrap().unwrap();
        assert_eq!(time.second(), 30);
    }

    #[test]
    fn uuid_and_base64() {
        let value = json!("0b5e1e4a-8b4e-4c3e-9a43-2f27c1d0a001");
        let id = node(&value).get_uuid_value().unwrap().unwrap();
        assert_eq!(id.to_string(), "0b5e1e4a-8b4e-4c3e-9a43-2f27c1d0a001");

        let value = json!("not-a-uuid");
        assert!(matches!(
            node(&value).get_uuid_value(),
            Err(SerializationError::InvalidUuid(_))
        ));

        let value = json!("aGVsbG8=");
        assert_eq!(node(&value).get_byte_array_value().unwrap().unwrap(), b"hello");

        let value = json!("%%%");
        assert!(matches!(
            node(&value).get_byte_array_value(),
            Err(SerializationError::InvalidBase64(_))
        ));
    }

    #[test]
    fn string_collection_skips_nulls() {
        let value = json!(["a", null, "b"]);
        assert_eq!(
            node(&value).get_collection_of_string_values().unwrap().unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn child_node_of_scalar_is_none() {
        let value = json!("scalar");
        assert!(node(&value).child_node("id").is_none());
    }
}

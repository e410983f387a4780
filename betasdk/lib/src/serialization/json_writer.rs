use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::json_parse_node::{DATE_FORMAT, TIME_OF_DAY_FORMAT};
use super::{AdditionalData, GraphEnum, IsoDuration, Parsable, SerializationWriter};
use crate::config::SerializationConfig;
use crate::error::Result;

/// A [`SerializationWriter`] that builds one JSON object.
///
/// Nested objects are written by fresh child writers carrying the same
/// configuration. Call [`into_value`](Self::into_value) once the model has
/// been serialized.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializationWriter {
    properties: Map<String, Value>,
    config: SerializationConfig,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SerializationConfig) -> Self {
        Self {
            properties: Map::new(),
            config,
        }
    }

    /// The object written so far.
    pub fn into_value(self) -> Value {
        Value::Object(self.properties)
    }

    fn put(&mut self, key: &str, value: Value) {
        self.properties.insert(key.to_owned(), value);
    }

    fn nested<T: Parsable>(&self, model: &T) -> Result<Value> {
        let mut child = Self::with_config(self.config);
        model.serialize(&mut child)?;
        Ok(child.into_value())
    }
}

/// JSON has no spelling for non-finite numbers, so OData writes them as strings.
fn f64_to_json(value: f64) -> Value {
    if value.is_nan() {
        Value::String("NaN".to_owned())
    } else if value == f64::INFINITY {
        Value::String("INF".to_owned())
    } else if value == f64::NEG_INFINITY {
        Value::String("-INF".to_owned())
    } else {
        Value::from(value)
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, Value::String(v.to_owned()));
        }
        Ok(())
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, Value::Bool(v));
        }
        Ok(())
    }

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, Value::from(v));
        }
        Ok(())
    }

    fn write_i64_value(&mut self, key: &str, value: Option<i64>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, Value::from(v));
        }
        Ok(())
    }

    fn write_f64_value(&mut self, key: &str, value: Option<f64>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, f64_to_json(v));
        }
        Ok(())
    }

    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, Value::String(v.hyphenated().to_string()));
        }
        Ok(())
    }

    fn write_time_value(&mut self, key: &str, value: Option<DateTime<FixedOffset>>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, Value::String(v.to_rfc3339_opts(SecondsFormat::AutoSi, true)));
        }
        Ok(())
    }

    fn write_date_only_value(&mut self, key: &str, value: Option<NaiveDate>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, Value::String(v.format(DATE_FORMAT).to_string()));
        }
        Ok(())
    }

    fn write_time_only_value(&mut self, key: &str, value: Option<NaiveTime>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, Value::String(v.format(TIME_OF_DAY_FORMAT).to_string()));
        }
        Ok(())
    }

    fn write_iso_duration_value(&mut self, key: &str, value: Option<IsoDuration>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, Value::String(v.to_string()));
        }
        Ok(())
    }

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, Value::String(BASE64.encode(v)));
        }
        Ok(())
    }

    fn write_untyped_value(&mut self, key: &str, value: Option<&Value>) -> Result<()> {
        if let Some(v) = value {
            self.put(key, v.clone());
        }
        Ok(())
    }

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<()> {
        if let Some(values) = values {
            let items = values.iter().cloned().map(Value::String).collect();
            self.put(key, Value::Array(items));
        }
        Ok(())
    }

    fn write_collection_of_enum_values<E: GraphEnum>(
        &mut self,
        key: &str,
        values: Option<&[E]>,
    ) -> Result<()> {
        if let Some(values) = values {
            let items = values
                .iter()
                .map(|v| Value::String(v.as_str().to_owned()))
                .collect();
            self.put(key, Value::Array(items));
        }
        Ok(())
    }

    fn write_object_value<T: Parsable>(&mut self, key: &str, value: Option<&T>) -> Result<()> {
        if let Some(v) = value {
            let nested = self.nested(v)?;
            self.put(key, nested);
        }
        Ok(())
    }

    fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<()> {
        if let Some(values) = values {
            let items = values
                .iter()
                .map(|v| self.nested(v))
                .collect::<Result<Vec<_>>>()?;
            self.put(key, Value::Array(items));
        }
        Ok(())
    }

    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<()> {
        if !self.config.emit_additional_data {
            return Ok(());
        }
        for (key, value) in data {
            self.properties
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn absent_values_are_omitted() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_string_value("name", None).unwrap();
        writer.write_bool_value("flag", None).unwrap();
        writer.write_collection_of_string_values("tags", None).unwrap();
        assert_eq!(writer.into_value(), json!({}));
    }

    #[test]
    fn empty_collection_is_written() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_collection_of_string_values("tags", Some(&[])).unwrap();
        assert_eq!(writer.into_value(), json!({"tags": []}));
    }

    #[test]
    fn utc_timestamps_use_z_suffix() {
        let mut writer = JsonSerializationWriter::new();
        let ts = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 2, 29, 12, 0, 0)
            .unwrap();
        writer.write_time_value("at", Some(ts)).unwrap();
        assert_eq!(writer.into_value(), json!({"at": "2024-02-29T12:00:00Z"}));
    }

    #[test]
    fn bytes_are_base64() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_byte_array_value("blob", Some(b"hello")).unwrap();
        assert_eq!(writer.into_value(), json!({"blob": "aGVsbG8="}));
    }

    #[test]
    fn non_finite_floats_use_odata_spellings() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_f64_value("a", Some(f64::NAN)).unwrap();
        writer.write_f64_value("b", Some(f64::NEG_INFINITY)).unwrap();
        writer.write_f64_value("c", Some(1.25)).unwrap();
        assert_eq!(writer.into_value(), json!({"a": "NaN", "b": "-INF", "c": 1.25}));
    }

    #[test]
    fn additional_data_never_replaces_written_fields() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_string_value("id", Some("real")).unwrap();
        let mut extra = AdditionalData::new();
        extra.insert("id".to_string(), json!("shadow"));
        extra.insert("extra".to_string(), json!(1));
        writer.write_additional_data(&extra).unwrap();
        assert_eq!(writer.into_value(), json!({"id": "real", "extra": 1}));
    }

    #[test]
    fn additional_data_can_be_suppressed() {
        let mut writer =
            JsonSerializationWriter::with_config(SerializationConfig::new().skip_additional_data());
        let mut extra = AdditionalData::new();
        extra.insert("extra".to_string(), json!(true));
        writer.write_additional_data(&extra).unwrap();
        assert_eq!(writer.into_value(), json!({}));
    }
}

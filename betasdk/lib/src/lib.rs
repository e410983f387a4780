//! betasdk - typed Microsoft Graph beta records
//!
//! This library models a slice of the Microsoft Graph beta schema as plain
//! Rust records and reads and writes them as OData JSON:
//!
//! - [`models`] - the records, their closed enums and the polymorphic
//!   families dispatched on `@odata.type`
//! - [`serialization`] - the [`ParseNode`]/[`SerializationWriter`] traits and
//!   their JSON backend
//! - [`config`] - knobs for pretty output and unknown-property handling
//!
//! Properties the models do not declare are kept as additional data and
//! written back unchanged, so `parse -> write` preserves a payload up to two
//! normalizations: explicit `null` properties are omitted, and `null`
//! elements inside collections are dropped.
//!
//! ## Examples
//!
//! ```
//! use betasdk_lib::{AnyEntity, from_json_str, to_json_string};
//!
//! let payload = r##"{"@odata.type":"#microsoft.graph.textWebPart","id":"w1","innerHtml":"<p>Hi</p>"}"##;
//! let part: AnyEntity = from_json_str(payload).unwrap();
//! assert_eq!(part.type_name(), "TextWebPart");
//! assert_eq!(to_json_string(&part).unwrap(), payload);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod serialization;

pub use config::SerializationConfig;
pub use error::{EnumParseError, Result, SerializationError};
pub use models::{AnyEntity, registered_discriminators};
pub use serialization::{
    GraphEnum, JsonParseNode, JsonSerializationWriter, Parsable, ParseNode, SerializationWriter,
    from_json_slice, from_json_str, from_json_str_with_config, from_json_value,
    from_json_value_with_config, to_json_string, to_json_string_with_config, to_json_value,
    to_json_value_with_config,
};

//! Microsoft Graph beta records.
//!
//! Each record mirrors one schema type. Every property is optional, base types
//! are embedded as a named field (`entity`, `base_item`, `web_part`,
//! `search_answer`) and polymorphic families are `Any*` enums dispatched on
//! `@odata.type`.
//!
//! ## Examples
//!
//! ```
//! use betasdk_lib::models::{AnyEntity, Entity};
//! use betasdk_lib::serialization::from_json_str;
//!
//! let payload = r##"{"@odata.type":"#microsoft.graph.sitePage","id":"p1","title":"Home"}"##;
//! let entity: AnyEntity = from_json_str(payload).unwrap();
//!
//! assert_eq!(entity.type_name(), "SitePage");
//! let base: &Entity = entity.as_ref();
//! assert_eq!(base.id.as_deref(), Some("p1"));
//! ```

/// Implement `AsRef<Entity>`/`AsMut<Entity>` by forwarding to the embedded
/// base record.
macro_rules! impl_entity_ref {
    ($ty:ty, $base:ident) => {
        impl AsRef<$crate::models::Entity> for $ty {
            fn as_ref(&self) -> &$crate::models::Entity {
                self.$base.as_ref()
            }
        }

        impl AsMut<$crate::models::Entity> for $ty {
            fn as_mut(&mut self) -> &mut $crate::models::Entity {
                self.$base.as_mut()
            }
        }
    };
}

pub(crate) use impl_entity_ref;

/// The `Parsable` methods of a polymorphic family that only forward to the
/// active variant. Expands to associated items, so it is invoked inside the
/// `impl Parsable` block next to the family's own discriminator switch.
macro_rules! forward_to_variants {
    ($($variant:ident),+ $(,)?) => {
        fn deserialize_field<N: $crate::serialization::ParseNode>(
            &mut self,
            key: &str,
            node: &N,
        ) -> $crate::error::Result<bool> {
            match self {
                $(Self::$variant(inner) => inner.deserialize_field(key, node),)+
            }
        }

        fn serialize<W: $crate::serialization::SerializationWriter>(
            &self,
            writer: &mut W,
        ) -> $crate::error::Result<()> {
            match self {
                $(Self::$variant(inner) => inner.serialize(writer),)+
            }
        }

        fn additional_data(&self) -> &$crate::serialization::AdditionalData {
            match self {
                $(Self::$variant(inner) => inner.additional_data(),)+
            }
        }

        fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
            match self {
                $(Self::$variant(inner) => inner.additional_data_mut(),)+
            }
        }
    };
}

pub(crate) use forward_to_variants;

/// `AsRef<Entity>`/`AsMut<Entity>` and `type_name()` for a polymorphic family.
macro_rules! impl_family_entity_ref {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl AsRef<$crate::models::Entity> for $ty {
            fn as_ref(&self) -> &$crate::models::Entity {
                match self {
                    $($ty::$variant(inner) => inner.as_ref(),)+
                }
            }
        }

        impl AsMut<$crate::models::Entity> for $ty {
            fn as_mut(&mut self) -> &mut $crate::models::Entity {
                match self {
                    $($ty::$variant(inner) => inner.as_mut(),)+
                }
            }
        }

        impl $ty {
            /// The embedded root record of whichever variant is held.
            pub fn entity(&self) -> &$crate::models::Entity {
                self.as_ref()
            }

            /// Rust name of the concrete record held.
            pub fn type_name(&self) -> &'static str {
                match self {
                    $($ty::$variant(_) => stringify!($variant),)+
                }
            }
        }
    };
}

pub(crate) use impl_family_entity_ref;

mod base_item;
mod entity;
mod identity;
mod registry;

pub mod devicemanagement;
pub mod financials;
pub mod managedtenants;
pub mod search;
pub mod sites;

pub use base_item::{AnyBaseItem, BaseItem, ItemReference, SharepointIds};
pub use entity::Entity;
pub use identity::{Identity, IdentitySet};
pub use registry::{AnyEntity, registered_discriminators};

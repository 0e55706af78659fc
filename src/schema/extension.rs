//! Typed extension binding.
//!
//! A Rust type becomes a typed extension by implementing [`ScimExtension`],
//! which ties it to the schema it decodes from. The binding only takes effect
//! once the type is registered with a
//! [`SchemaRegistryBuilder`](crate::schema::SchemaRegistryBuilder); until then,
//! typed lookups for it report an unknown schema while generic access by URN
//! keeps working.

use crate::schema::types::Schema;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A Rust type that can be decoded from a SCIM extension.
///
/// ```rust
/// use scim_resource_model::schema::{AttributeDefinition, AttributeType, Schema, ScimExtension};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Serialize, Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// struct BadgeExtension {
///     badge_number: i64,
/// }
///
/// impl ScimExtension for BadgeExtension {
///     fn schema() -> Schema {
///         Schema::new("urn:example:params:scim:schemas:extension:badge:1.0:User", "Badge")
///             .with_attribute(AttributeDefinition::new("badgeNumber", AttributeType::Integer).required())
///     }
/// }
/// ```
pub trait ScimExtension: Serialize + DeserializeOwned + 'static {
    /// Schema the type is bound to. `Schema::id` is the extension URN and the
    /// attribute list is the shape checked before decoding.
    fn schema() -> Schema;

    /// Display name used in diagnostics.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

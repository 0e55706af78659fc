//! Value objects for SCIM resource domain primitives.
//!
//! Each value object enforces its invariants at construction time, so a
//! resource can only ever hold well-formed identifiers and schema URIs.
//!
//! ```rust
//! use scim_resource_model::resource::value_objects::{ResourceId, SchemaUri};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let id = ResourceId::new("2819c223-7f76-453a-919d-413861904646")?;
//!     let schema = SchemaUri::new("urn:ietf:params:scim:schemas:core:2.0:User")?;
//!     println!("{} ({})", id, schema);
//!     Ok(())
//! }
//! ```
mod external_id;
mod meta;
mod resource_id;
mod schema_uri;

pub use external_id::ExternalId;
pub use meta::Meta;
pub use resource_id::ResourceId;
pub use schema_uri::{CORE_GROUP_SCHEMA, CORE_USER_SCHEMA, ENTERPRISE_USER_SCHEMA, SchemaUri};

pub(crate) use schema_uri::has_urn_prefix;

//! Schema definitions and the schema registry.
//!
//! # Key Types
//!
//! - [`Schema`] - SCIM schema definition; its attributes are the decode shape
//! - [`SchemaRegistry`] - Frozen URN → descriptor and type → URN mapping
//! - [`ScimExtension`] - Binds a Rust type to an extension schema
//!
//! # Examples
//!
//! ```rust
//! use scim_resource_model::schema::SchemaRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::standard()?;
//! let user = registry.resolve("urn:ietf:params:scim:schemas:core:2.0:User")?;
//! assert_eq!(user.schema().name, "User");
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod enterprise;
pub mod extension;
pub mod registry;
pub mod types;

// Re-export the main types for convenience
pub use enterprise::{EnterpriseUser, Manager};
pub use extension::ScimExtension;
pub use registry::{SchemaDescriptor, SchemaKind, SchemaRegistry, SchemaRegistryBuilder};
pub use types::{AttributeDefinition, AttributeType, Mutability, Schema, Uniqueness};

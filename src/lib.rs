//! SCIM 2.0 resource document model for Rust.
//!
//! Reads SCIM resources into a typed core plus per-URN extension trees, and
//! resolves extensions into Rust types through a schema registry built once
//! at startup.
//!
//! # Core Components
//!
//! - [`ScimResource`] - Resource document: common attributes, core attributes, extensions
//! - [`SchemaRegistry`] - Frozen mapping of schema URNs to shapes and Rust types
//! - [`ExtensionResolver`] - Typed extension decode with complete error reporting
//! - [`AttributeTree`] - Ordered JSON object used for every untyped payload
//!
//! # Quick Start
//!
//! ```rust
//! use scim_resource_model::{ModelConfig, ScimResource, SchemaRegistry};
//! use scim_resource_model::schema::EnterpriseUser;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::standard()?;
//! let user = ScimResource::from_json(
//!     json!({
//!         "schemas": [
//!             "urn:ietf:params:scim:schemas:core:2.0:User",
//!             "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User"
//!         ],
//!         "userName": "bjensen",
//!         "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User": {
//!             "employeeNumber": "701984"
//!         }
//!     }),
//!     &ModelConfig::default(),
//! )?;
//!
//! let enterprise = user.typed_extension::<EnterpriseUser>(&registry)?;
//! assert_eq!(enterprise.and_then(|e| e.employee_number).as_deref(), Some("701984"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod resource;
pub mod schema;
pub mod tree;

// Re-export commonly used types for convenience
pub use config::{ExtensionKeys, ModelConfig, UrnSyntax};
pub use error::{
    DecodeError, DecodeIssue, DecodeIssueKind, RegistryError, ScimError, ScimResult,
    ValidationError, ValidationResult,
};
pub use resource::{
    ExtensionResolver, ExternalId, Meta, Resolved, ResourceBuilder, ResourceId, ResourceVersion,
    SchemaMismatch, SchemaUri, ScimResource,
};
pub use schema::{Schema, SchemaRegistry, ScimExtension};
pub use tree::AttributeTree;

//! SCIM resource documents with typed extensions.
//!
//! # Architecture
//!
//! A resource is split on read into three parts:
//! - **Common attributes** (`id`, `externalId`, `meta`) as validated value objects
//! - **Core attributes** of the base schema as an [`AttributeTree`](crate::tree::AttributeTree)
//! - **Extensions** as one tree per schema URN, decoded to Rust types on demand
//!
//! # Key Components
//!
//! * [`ScimResource`] - The resource document and its codec
//! * [`ExtensionResolver`] - Typed decode/encode of extension trees via the registry
//! * [`ResourceBuilder`] - Fluent construction
//! * [`value_objects`] - Validated domain primitives (ResourceId, SchemaUri, etc.)
//! * [`version`] - Content-derived versions for `meta.version`

pub mod builder;
pub mod extensions;
pub mod resolver;
pub mod resource;
pub mod serialization;
pub mod value_objects;
pub mod version;

pub use builder::ResourceBuilder;
pub use extensions::Extensions;
pub use resolver::{ExtensionResolver, Resolved};
pub use resource::{SchemaMismatch, ScimResource};
pub use value_objects::{ExternalId, Meta, ResourceId, SchemaUri};
pub use version::{ResourceVersion, VersionError};

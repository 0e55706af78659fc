//! Decoding configuration for resource documents.
//!
//! [`ModelConfig`] controls how a JSON document is split into core attributes
//! and extensions. The defaults follow RFC 7643 and accept any well-formed
//! SCIM document.
//!
//! ```rust
//! use scim_resource_model::config::{ExtensionKeys, ModelConfig, UrnSyntax};
//!
//! let config = ModelConfig::default()
//!     .with_extension_keys(ExtensionKeys::DeclaredOnly)
//!     .with_urn_syntax(UrnSyntax::Strict);
//! assert_eq!(config.extension_keys, ExtensionKeys::DeclaredOnly);
//! ```

use crate::error::{ScimResult, ValidationError, ValidationResult};
use crate::resource::value_objects::{
    CORE_GROUP_SCHEMA, CORE_USER_SCHEMA, SchemaUri, has_urn_prefix,
};
use crate::schema::{SchemaKind, SchemaRegistry};
use serde::{Deserialize, Serialize};

/// Which top-level keys of a document are read as extensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtensionKeys {
    /// Keys listed in `schemas`, plus any other key using the `urn:` scheme
    #[default]
    DeclaredOrUrnPrefix,
    /// Only keys listed in `schemas`; other URN keys stay core attributes
    DeclaredOnly,
}

/// How strictly schema URIs in a document are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UrnSyntax {
    /// Any non-empty string
    #[default]
    Opaque,
    /// Must use the `urn:` scheme
    Strict,
}

/// Configuration for reading resource documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelConfig {
    pub extension_keys: ExtensionKeys,
    pub urn_syntax: UrnSyntax,
    /// Base schema assumed when a document carries no `schemas` attribute.
    /// Documents without `schemas` are rejected when this is unset.
    pub default_base_schema: Option<String>,
    /// Base schemas recognised in a declared set besides core User and Group.
    /// A document may list its extensions before its base schema.
    pub base_schemas: Vec<String>,
}

impl ModelConfig {
    /// Load a configuration from JSON, e.g. a section of a service config file.
    pub fn from_json_str(raw: &str) -> ScimResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        if let Some(ref base) = config.default_base_schema {
            config.check_uri(base)?;
        }
        for base in &config.base_schemas {
            config.check_uri(base)?;
        }
        Ok(config)
    }

    pub fn with_extension_keys(mut self, extension_keys: ExtensionKeys) -> Self {
        self.extension_keys = extension_keys;
        self
    }

    pub fn with_urn_syntax(mut self, urn_syntax: UrnSyntax) -> Self {
        self.urn_syntax = urn_syntax;
        self
    }

    pub fn with_default_base_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_base_schema = Some(schema.into());
        self
    }

    pub fn with_base_schema(mut self, schema: impl Into<String>) -> Self {
        self.base_schemas.push(schema.into());
        self
    }

    /// Recognise every core schema of `registry` as a base schema.
    pub fn with_registry_base_schemas(mut self, registry: &SchemaRegistry) -> Self {
        for descriptor in registry.schemas() {
            if descriptor.kind() == SchemaKind::Core
                && !self.is_known_base_schema(descriptor.uri().as_str())
            {
                self.base_schemas.push(descriptor.uri().as_str().to_string());
            }
        }
        self
    }

    /// Whether `uri` is core User, core Group or a configured base schema.
    pub fn is_known_base_schema(&self, uri: &str) -> bool {
        uri == CORE_USER_SCHEMA
            || uri == CORE_GROUP_SCHEMA
            || self.base_schemas.iter().any(|base| base == uri)
    }

    /// Parse a schema URI under this configuration's syntax rules.
    pub fn check_uri(&self, raw: &str) -> ValidationResult<SchemaUri> {
        if self.urn_syntax == UrnSyntax::Strict && !has_urn_prefix(raw) {
            return Err(ValidationError::InvalidSchemaUri {
                uri: raw.to_string(),
            });
        }
        SchemaUri::new(raw)
    }

    /// Whether an undeclared top-level key should be read as an extension.
    pub(crate) fn is_undeclared_extension_key(&self, key: &str) -> bool {
        match self.extension_keys {
            ExtensionKeys::DeclaredOrUrnPrefix => has_urn_prefix(key),
            ExtensionKeys::DeclaredOnly => false,
        }
    }
}

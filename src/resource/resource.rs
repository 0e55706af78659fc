//! Core SCIM resource representation.
//!
//! [`ScimResource`] holds the common attributes as value objects, the rest of
//! the base schema's attributes as an [`AttributeTree`], and each extension as
//! its own tree keyed by schema URN.
//!
//! The declared schema set (`schemas` on the wire) and the attached extensions
//! can drift apart through [`ScimResource::set_schema_urns`]. The extensions
//! are authoritative: serialization always emits the base schema, the declared
//! URNs and every attached extension URN, and logs a warning when the two
//! disagreed.

use crate::config::ModelConfig;
use crate::error::{ScimResult, ValidationError, ValidationResult, value_type_name};
use crate::resource::extensions::Extensions;
use crate::resource::resolver::ExtensionResolver;
use crate::resource::value_objects::{
    CORE_GROUP_SCHEMA, CORE_USER_SCHEMA, ExternalId, Meta, ResourceId, SchemaUri, has_urn_prefix,
};
use crate::resource::version::ResourceVersion;
use crate::schema::{SchemaRegistry, ScimExtension};
use crate::tree::AttributeTree;

use log::{debug, trace, warn};
use serde_json::Value;

const SCHEMAS: &str = "schemas";
const ID: &str = "id";
const EXTERNAL_ID: &str = "externalId";
const META: &str = "meta";

/// Top-level keys owned by the common attributes.
const RESERVED_KEYS: [&str; 4] = [SCHEMAS, ID, EXTERNAL_ID, META];

/// A SCIM resource: common attributes, core attributes and extensions.
///
/// Instances are owned by a single request handler; there is no internal
/// locking.
///
/// # Example
/// ```rust
/// use scim_resource_model::{AttributeTree, ScimResource, SchemaUri};
/// use serde_json::json;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut user = ScimResource::user();
///     user.set_attribute("userName", "bjensen")?;
///
///     let enterprise = SchemaUri::new("urn:ietf:params:scim:schemas:extension:enterprise:2.0:User")?;
///     let tree = AttributeTree::from_value(json!({"employeeNumber": "701984"}))?;
///     user.put_extension(enterprise.clone(), tree)?;
///
///     assert!(user.schema_urns().contains(&enterprise));
///     assert_eq!(user.to_json()["schemas"].as_array().unwrap().len(), 2);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScimResource {
    base_schema: SchemaUri,
    id: Option<ResourceId>,
    external_id: Option<ExternalId>,
    meta: Option<Meta>,
    schema_urns: Vec<SchemaUri>,
    attributes: AttributeTree,
    extensions: Extensions,
}

/// Difference between the declared schema set and the attached extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMismatch {
    /// The base schema is missing from the declared set
    pub base_undeclared: bool,
    /// Attached extensions whose URN is not declared
    pub undeclared_extensions: Vec<SchemaUri>,
    /// Declared URNs, other than the base, with no attached extension
    pub declared_without_payload: Vec<SchemaUri>,
}

impl SchemaMismatch {
    pub fn is_empty(&self) -> bool {
        !self.base_undeclared
            && self.undeclared_extensions.is_empty()
            && self.declared_without_payload.is_empty()
    }
}

impl ScimResource {
    /// Create an empty resource of the given base schema.
    pub fn new(base_schema: SchemaUri) -> Self {
        Self {
            schema_urns: vec![base_schema.clone()],
            base_schema,
            id: None,
            external_id: None,
            meta: None,
            attributes: AttributeTree::new(),
            extensions: Extensions::new(),
        }
    }

    /// Empty core User resource.
    pub fn user() -> Self {
        Self::new(SchemaUri::from_static(CORE_USER_SCHEMA))
    }

    /// Empty core Group resource.
    pub fn group() -> Self {
        Self::new(SchemaUri::from_static(CORE_GROUP_SCHEMA))
    }

    pub fn base_schema(&self) -> &SchemaUri {
        &self.base_schema
    }

    pub fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    pub fn set_id(&mut self, id: Option<ResourceId>) {
        self.id = id;
    }

    pub fn external_id(&self) -> Option<&ExternalId> {
        self.external_id.as_ref()
    }

    pub fn set_external_id(&mut self, external_id: Option<ExternalId>) {
        self.external_id = external_id;
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    pub fn set_meta(&mut self, meta: Option<Meta>) {
        self.meta = meta;
    }

    /// The declared schema URNs, in declaration order.
    pub fn schema_urns(&self) -> &[SchemaUri] {
        &self.schema_urns
    }

    /// Replace the declared schema URNs.
    ///
    /// The declared set is advisory: it does not attach or detach extensions.
    /// Repeated URNs are kept once, at their first position.
    pub fn set_schema_urns<I>(&mut self, urns: I)
    where
        I: IntoIterator<Item = SchemaUri>,
    {
        let mut declared: Vec<SchemaUri> = Vec::new();
        for urn in urns {
            if !declared.contains(&urn) {
                declared.push(urn);
            }
        }
        self.schema_urns = declared;

        let mismatch = self.schema_mismatch();
        if !mismatch.is_empty() {
            debug!("Declared schemas now disagree with attached extensions: {:?}", mismatch);
        }
    }

    /// The `schemas` value emitted on serialization: the base schema, then
    /// the declared URNs, then any attached extension not declared.
    pub fn reconciled_schema_urns(&self) -> Vec<SchemaUri> {
        let mut urns = vec![self.base_schema.clone()];
        let undeclared = self
            .extensions
            .uris()
            .filter(|uri| !self.schema_urns.contains(uri));
        for uri in self.schema_urns.iter().chain(undeclared) {
            if !urns.contains(uri) {
                urns.push(uri.clone());
            }
        }
        urns
    }

    /// How the declared schema set differs from `{base} ∪ extensions`.
    pub fn schema_mismatch(&self) -> SchemaMismatch {
        SchemaMismatch {
            base_undeclared: !self.schema_urns.contains(&self.base_schema),
            undeclared_extensions: self
                .extensions
                .uris()
                .filter(|uri| !self.schema_urns.contains(uri))
                .cloned()
                .collect(),
            declared_without_payload: self
                .schema_urns
                .iter()
                .filter(|uri| **uri != self.base_schema && !self.extensions.contains(uri.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Get an extension as a generic tree. Works for any URN, registered or not.
    pub fn extension(&self, uri: &str) -> Option<&AttributeTree> {
        self.extensions.get(uri)
    }

    pub fn extension_mut(&mut self, uri: &str) -> Option<&mut AttributeTree> {
        self.extensions.get_mut(uri)
    }

    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    /// Decode the extension bound to `T`.
    ///
    /// * `Err(UnknownSchema)` - `T` is not registered in `registry`
    /// * `Ok(None)` - registered, but this resource has no such extension
    /// * `Err(Decode)` - the stored tree does not fit `T`; the resource is unchanged
    pub fn typed_extension<T: ScimExtension>(
        &self,
        registry: &SchemaRegistry,
    ) -> ScimResult<Option<T>> {
        let resolved = ExtensionResolver::new(registry).extension::<T>(self)?;
        Ok(resolved.map(|resolved| resolved.value))
    }

    /// Attach or replace an extension and declare its URN.
    ///
    /// Returns the replaced tree, if any.
    pub fn put_extension(
        &mut self,
        uri: SchemaUri,
        tree: AttributeTree,
    ) -> ValidationResult<Option<AttributeTree>> {
        self.check_extension_key(&uri)?;
        if !self.schema_urns.contains(&uri) {
            self.schema_urns.push(uri.clone());
        }
        debug!("Attaching extension {} ({} attributes)", uri, tree.len());
        Ok(self.extensions.insert(uri, tree))
    }

    /// Encode `value` and attach it under the URN bound to `T`.
    ///
    /// Attributes of an existing payload that the schema shape does not
    /// describe are kept.
    pub fn put_typed_extension<T: ScimExtension>(
        &mut self,
        registry: &SchemaRegistry,
        value: &T,
    ) -> ScimResult<()> {
        let descriptor = registry.descriptor_for::<T>()?;
        let uri = descriptor.uri().clone();
        let tree =
            ExtensionResolver::encode(value, descriptor.schema(), self.extension(uri.as_str()))?;
        self.put_extension(uri, tree)?;
        Ok(())
    }

    /// Detach an extension and undeclare its URN.
    pub fn remove_extension(&mut self, uri: &str) -> Option<AttributeTree> {
        let removed = self.extensions.remove(uri);
        if removed.is_some() {
            debug!("Removed extension {}", uri);
        }
        if uri != self.base_schema.as_str() {
            self.schema_urns.retain(|declared| declared.as_str() != uri);
        }
        removed
    }

    /// Get a core attribute other than the common ones.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set a core attribute.
    ///
    /// Common attributes have their own setters, and URN-named keys belong to
    /// extensions; both are rejected here.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> ValidationResult<Option<Value>> {
        let name = name.into();
        if RESERVED_KEYS.contains(&name.as_str()) {
            return Err(ValidationError::ReservedAttribute { name });
        }
        if has_urn_prefix(&name) || self.extensions.contains(&name) {
            return Err(ValidationError::AttributeConflict { name });
        }
        Ok(self.attributes.set(name, value))
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }

    /// Core attributes other than the common ones.
    pub fn attributes(&self) -> &AttributeTree {
        &self.attributes
    }

    /// Read a resource from a decoded document.
    ///
    /// Top-level keys are split into the common attributes, extensions (keys
    /// declared in `schemas`, plus URN-named keys unless the configuration
    /// says otherwise) and the remaining core attributes. The base schema is
    /// the first declared URN that is not used as a top-level key.
    pub fn from_tree(tree: AttributeTree, config: &ModelConfig) -> ScimResult<Self> {
        let declared = Self::extract_schemas(&tree, config)?;
        let base_schema = Self::pick_base_schema(&declared, &tree, config)
            .cloned()
            .ok_or(ValidationError::EmptySchemas)?;

        let mut resource = Self::new(base_schema);
        resource.schema_urns = declared;

        for (key, value) in tree {
            match key.as_str() {
                SCHEMAS => {}
                ID => resource.id = Some(Self::extract_id(value)?),
                EXTERNAL_ID => resource.external_id = Some(Self::extract_external_id(value)?),
                META => resource.meta = Some(Meta::from_value(&value)?),
                _ if resource.is_extension_key(&key, config) => {
                    let uri = config.check_uri(&key)?;
                    let payload = match value {
                        Value::Object(map) => AttributeTree::from(map),
                        other => {
                            return Err(ValidationError::InvalidExtensionPayload {
                                uri: key,
                                actual: value_type_name(&other).to_string(),
                            }
                            .into());
                        }
                    };
                    if !resource.schema_urns.contains(&uri) {
                        debug!("Extension {} present but not declared in 'schemas'", uri);
                    }
                    resource.extensions.insert(uri, payload);
                }
                _ => {
                    resource.attributes.set(key, value);
                }
            }
        }

        trace!(
            "Decoded {} resource with {} extensions",
            resource.base_schema,
            resource.extensions.len()
        );
        Ok(resource)
    }

    /// Read a resource from a JSON value.
    pub fn from_json(value: Value, config: &ModelConfig) -> ScimResult<Self> {
        Self::from_tree(AttributeTree::from_value(value)?, config)
    }

    /// Read a resource from JSON text.
    pub fn from_json_str(raw: &str, config: &ModelConfig) -> ScimResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json(value, config)
    }

    /// Encode the resource for the wire.
    ///
    /// `schemas` carries [`reconciled_schema_urns`](Self::reconciled_schema_urns);
    /// a disagreement between declared and attached extensions is logged,
    /// never fatal.
    pub fn to_tree(&self) -> AttributeTree {
        let mismatch = self.schema_mismatch();
        if !mismatch.is_empty() {
            warn!(
                "Schema set of {} resource {} disagrees with its extensions: {:?}",
                self.base_schema,
                self.id.as_ref().map(ResourceId::as_str).unwrap_or("<unassigned>"),
                mismatch
            );
        }

        let mut tree = AttributeTree::new();
        let schemas: Vec<Value> = self
            .reconciled_schema_urns()
            .into_iter()
            .map(|uri| Value::String(uri.into_string()))
            .collect();
        tree.set(SCHEMAS, schemas);

        if let Some(ref id) = self.id {
            tree.set(ID, id.as_str());
        }
        if let Some(ref external_id) = self.external_id {
            tree.set(EXTERNAL_ID, external_id.as_str());
        }
        for (name, value) in self.attributes.iter() {
            tree.set(name, value.clone());
        }
        if let Some(ref meta) = self.meta {
            tree.set(META, meta.to_value());
        }
        for (uri, extension) in self.extensions.iter() {
            tree.set(uri.as_str(), extension.to_value());
        }
        tree
    }

    pub fn to_json(&self) -> Value {
        self.to_tree().into_value()
    }

    pub fn to_json_string(&self) -> ScimResult<String> {
        Ok(serde_json::to_string(&self.to_tree())?)
    }

    /// Version derived from the encoded content, excluding `meta`.
    pub fn content_version(&self) -> ScimResult<ResourceVersion> {
        let mut tree = self.to_tree();
        tree.remove(META);
        let bytes = serde_json::to_vec(&tree)?;
        Ok(ResourceVersion::from_content(&bytes))
    }

    /// Write the content version into `meta.version` as a weak ETag,
    /// creating meta if needed.
    pub fn stamp_version(&mut self) -> ScimResult<ResourceVersion> {
        let version = self.content_version()?;
        let meta = self.meta.take().unwrap_or_default();
        self.meta = Some(meta.with_version(version.to_etag()));
        Ok(version)
    }

    fn check_extension_key(&self, uri: &SchemaUri) -> ValidationResult<()> {
        if *uri == self.base_schema {
            return Err(ValidationError::BaseSchemaAsExtension {
                uri: uri.to_string(),
            });
        }
        if RESERVED_KEYS.contains(&uri.as_str()) {
            return Err(ValidationError::ReservedAttribute {
                name: uri.to_string(),
            });
        }
        if self.attributes.contains(uri.as_str()) {
            return Err(ValidationError::AttributeConflict {
                name: uri.to_string(),
            });
        }
        Ok(())
    }

    fn is_extension_key(&self, key: &str, config: &ModelConfig) -> bool {
        if key == self.base_schema.as_str() {
            return false;
        }
        self.schema_urns.iter().any(|uri| uri.as_str() == key)
            || config.is_undeclared_extension_key(key)
    }

    /// The base schema of a declared set, which RFC 7643 leaves unordered.
    ///
    /// In order of preference: the configured default base, the first known
    /// base schema, the first URN with no top-level payload, the first URN.
    fn pick_base_schema<'a>(
        declared: &'a [SchemaUri],
        tree: &AttributeTree,
        config: &ModelConfig,
    ) -> Option<&'a SchemaUri> {
        config
            .default_base_schema
            .as_deref()
            .and_then(|base| declared.iter().find(|uri| uri.as_str() == base))
            .or_else(|| {
                declared
                    .iter()
                    .find(|uri| config.is_known_base_schema(uri.as_str()))
            })
            .or_else(|| declared.iter().find(|uri| !tree.contains(uri.as_str())))
            .or_else(|| declared.first())
    }

    fn extract_schemas(tree: &AttributeTree, config: &ModelConfig) -> ScimResult<Vec<SchemaUri>> {
        let Some(value) = tree.get(SCHEMAS) else {
            return match config.default_base_schema {
                Some(ref base) => Ok(vec![config.check_uri(base)?]),
                None => Err(ValidationError::MissingSchemas.into()),
            };
        };

        let items = value
            .as_array()
            .ok_or(ValidationError::InvalidSchemasAttribute)?;
        if items.is_empty() {
            return Err(ValidationError::EmptySchemas.into());
        }

        let mut schemas: Vec<SchemaUri> = Vec::with_capacity(items.len());
        for item in items {
            let raw = item
                .as_str()
                .ok_or(ValidationError::InvalidSchemasAttribute)?;
            let uri = config.check_uri(raw)?;
            if schemas.contains(&uri) {
                return Err(ValidationError::DuplicateSchemaUri {
                    uri: uri.into_string(),
                }
                .into());
            }
            schemas.push(uri);
        }
        Ok(schemas)
    }

    fn extract_id(value: Value) -> ValidationResult<ResourceId> {
        match value {
            Value::String(id) => ResourceId::new(id),
            other => Err(ValidationError::InvalidIdFormat {
                id: other.to_string(),
            }),
        }
    }

    fn extract_external_id(value: Value) -> ValidationResult<ExternalId> {
        match value {
            Value::String(external_id) => Ok(ExternalId::new(external_id)),
            _ => Err(ValidationError::InvalidExternalId),
        }
    }
}

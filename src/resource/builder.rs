//! Fluent construction of SCIM resources.
//!
//! The builder collects values and applies them through the same checks as
//! the [`ScimResource`] setters, so `build()` reports the first invalid one.

use crate::error::ScimResult;
use crate::resource::resource::ScimResource;
use crate::resource::value_objects::{ExternalId, Meta, ResourceId, SchemaUri};
use crate::schema::{SchemaRegistry, ScimExtension};
use crate::tree::AttributeTree;
use serde_json::Value;

/// Builder for [`ScimResource`].
///
/// # Example
/// ```rust
/// use scim_resource_model::resource::builder::ResourceBuilder;
/// use scim_resource_model::schema::{EnterpriseUser, SchemaRegistry};
/// use scim_resource_model::{ResourceId, SchemaUri};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let registry = SchemaRegistry::standard()?;
///     let user = ResourceBuilder::new(SchemaUri::new("urn:ietf:params:scim:schemas:core:2.0:User")?)
///         .with_id(ResourceId::new("2819c223")?)
///         .with_attribute("userName", "bjensen")
///         .with_typed_extension(&registry, &EnterpriseUser {
///             department: Some("Tour Operations".to_string()),
///             ..EnterpriseUser::default()
///         })
///         .build()?;
///
///     assert_eq!(user.schema_urns().len(), 2);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ResourceBuilder {
    base_schema: SchemaUri,
    id: Option<ResourceId>,
    external_id: Option<ExternalId>,
    meta: Option<Meta>,
    attributes: Vec<(String, Value)>,
    extensions: Vec<PendingExtension>,
}

#[derive(Debug)]
enum PendingExtension {
    Tree(SchemaUri, AttributeTree),
    Encoded(ScimResult<(SchemaUri, AttributeTree)>),
}

impl ResourceBuilder {
    pub fn new(base_schema: SchemaUri) -> Self {
        Self {
            base_schema,
            id: None,
            external_id: None,
            meta: None,
            attributes: Vec::new(),
            extensions: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: ResourceId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_external_id(mut self, external_id: ExternalId) -> Self {
        self.external_id = Some(external_id);
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_extension(mut self, uri: SchemaUri, tree: AttributeTree) -> Self {
        self.extensions.push(PendingExtension::Tree(uri, tree));
        self
    }

    /// Encode `value` now and attach it under the URN bound to `T`.
    pub fn with_typed_extension<T: ScimExtension>(
        mut self,
        registry: &SchemaRegistry,
        value: &T,
    ) -> Self {
        let encoded = registry.urn_for::<T>().cloned().and_then(|uri| {
            let value = serde_json::to_value(value)?;
            Ok((uri, AttributeTree::from_value(value)?))
        });
        self.extensions.push(PendingExtension::Encoded(encoded));
        self
    }

    pub fn build(self) -> ScimResult<ScimResource> {
        let mut resource = ScimResource::new(self.base_schema);
        resource.set_id(self.id);
        resource.set_external_id(self.external_id);
        resource.set_meta(self.meta);

        for (name, value) in self.attributes {
            resource.set_attribute(name, value)?;
        }
        for pending in self.extensions {
            let (uri, tree) = match pending {
                PendingExtension::Tree(uri, tree) => (uri, tree),
                PendingExtension::Encoded(encoded) => encoded?,
            };
            resource.put_extension(uri, tree)?;
        }
        Ok(resource)
    }
}

//! Schema registry mapping schema URNs to descriptors and Rust types to URNs.
//!
//! Population happens once, at startup, through a [`SchemaRegistryBuilder`].
//! [`SchemaRegistryBuilder::build`] freezes the result into an immutable,
//! cheaply cloneable [`SchemaRegistry`] that request handlers share without
//! locking. A process-wide instance can be published once with
//! [`SchemaRegistry::install_global`].

use super::embedded;
use super::enterprise::EnterpriseUser;
use super::extension::ScimExtension;
use super::types::Schema;
use crate::error::{RegistryError, RegistryResult, ScimError, ScimResult};
use crate::resource::value_objects::SchemaUri;

use log::{debug, info};
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static GLOBAL_REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();

/// Whether a schema is a resource's base schema or an extension of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Core,
    Extension,
}

/// Everything the registry knows about one schema URN.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDescriptor {
    uri: SchemaUri,
    kind: SchemaKind,
    schema: Schema,
    bound_type: Option<&'static str>,
}

impl SchemaDescriptor {
    pub fn uri(&self) -> &SchemaUri {
        &self.uri
    }

    pub fn kind(&self) -> SchemaKind {
        self.kind
    }

    /// The schema definition; its attributes are the decode shape.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Name of the Rust type bound to this schema, if any.
    pub fn bound_type(&self) -> Option<&'static str> {
        self.bound_type
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    schemas: HashMap<SchemaUri, SchemaDescriptor>,
    order: Vec<SchemaUri>,
    bindings: HashMap<TypeId, SchemaUri>,
}

/// Mutable registry under construction.
///
/// ```rust
/// use scim_resource_model::schema::{EnterpriseUser, SchemaRegistryBuilder};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut builder = SchemaRegistryBuilder::new();
///     builder.register_extension::<EnterpriseUser>()?;
///     let registry = builder.build();
///
///     assert!(registry.urn_for::<EnterpriseUser>().is_ok());
///     Ok(())
/// }
/// ```
#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    inner: RegistryInner,
}

impl SchemaRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema without binding a Rust type to it.
    ///
    /// Extensions registered this way are reachable by URN only.
    pub fn register(&mut self, kind: SchemaKind, schema: Schema) -> RegistryResult<&mut Self> {
        self.insert(kind, schema, None)?;
        Ok(self)
    }

    /// Register a base resource schema.
    pub fn register_core(&mut self, schema: Schema) -> RegistryResult<&mut Self> {
        self.register(SchemaKind::Core, schema)
    }

    /// Register an extension schema and bind `T` to it.
    pub fn register_extension<T: ScimExtension>(&mut self) -> RegistryResult<&mut Self> {
        let type_id = TypeId::of::<T>();
        let schema = T::schema();

        if let Some(existing) = self.inner.bindings.get(&type_id) {
            return Err(RegistryError::ConflictingBinding {
                type_name: T::type_name().to_string(),
                existing: existing.to_string(),
                requested: schema.id,
            });
        }

        let uri = self.insert(SchemaKind::Extension, schema, Some(T::type_name()))?;
        self.inner.bindings.insert(type_id, uri);
        Ok(self)
    }

    /// Register the core User and Group schemas and the Enterprise User
    /// extension, bound to [`EnterpriseUser`].
    pub fn register_standard_schemas(&mut self) -> ScimResult<&mut Self> {
        for raw in [embedded::core_user_schema(), embedded::core_group_schema()] {
            let schema: Schema = serde_json::from_str(raw)?;
            self.register_core(schema)?;
        }
        self.register_extension::<EnterpriseUser>()?;
        Ok(self)
    }

    /// Freeze the registry.
    pub fn build(self) -> SchemaRegistry {
        debug!(
            "Schema registry frozen with {} schemas, {} typed bindings",
            self.inner.order.len(),
            self.inner.bindings.len()
        );
        SchemaRegistry {
            inner: Arc::new(self.inner),
        }
    }

    fn insert(
        &mut self,
        kind: SchemaKind,
        schema: Schema,
        bound_type: Option<&'static str>,
    ) -> RegistryResult<SchemaUri> {
        let uri = SchemaUri::new(schema.id.clone())?;
        if self.inner.schemas.contains_key(&uri) {
            return Err(RegistryError::DuplicateSchema {
                uri: uri.into_string(),
            });
        }

        debug!(
            "Registering {:?} schema {} (bound type: {})",
            kind,
            uri,
            bound_type.unwrap_or("none")
        );
        self.inner.schemas.insert(
            uri.clone(),
            SchemaDescriptor {
                uri: uri.clone(),
                kind,
                schema,
                bound_type,
            },
        );
        self.inner.order.push(uri.clone());
        Ok(uri)
    }
}

/// Frozen, shareable schema registry.
///
/// Cloning is cheap and every clone sees the same schemas. Lookups take
/// `&self` and need no synchronisation.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    inner: Arc<RegistryInner>,
}

impl SchemaRegistry {
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::new()
    }

    /// Registry holding only the embedded standard schemas.
    pub fn standard() -> ScimResult<Self> {
        let mut builder = SchemaRegistryBuilder::new();
        builder.register_standard_schemas()?;
        Ok(builder.build())
    }

    /// Registry with nothing registered.
    pub fn empty() -> Self {
        SchemaRegistryBuilder::new().build()
    }

    /// Resolve a schema URN, failing with `UnknownSchema` if it was never
    /// registered.
    pub fn resolve(&self, uri: &str) -> ScimResult<&SchemaDescriptor> {
        self.get(uri).ok_or_else(|| ScimError::unknown_schema(uri))
    }

    pub fn get(&self, uri: &str) -> Option<&SchemaDescriptor> {
        self.inner.schemas.get(uri)
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.inner.schemas.contains_key(uri)
    }

    /// URN bound to the Rust type `T`.
    pub fn urn_for<T: ScimExtension>(&self) -> ScimResult<&SchemaUri> {
        self.inner
            .bindings
            .get(&TypeId::of::<T>())
            .ok_or_else(|| ScimError::unknown_schema(T::type_name()))
    }

    /// Descriptor of the schema bound to the Rust type `T`.
    pub fn descriptor_for<T: ScimExtension>(&self) -> ScimResult<&SchemaDescriptor> {
        let uri = self.urn_for::<T>()?;
        self.resolve(uri.as_str())
    }

    /// All descriptors in registration order.
    pub fn schemas(&self) -> impl Iterator<Item = &SchemaDescriptor> {
        self.inner
            .order
            .iter()
            .filter_map(|uri| self.inner.schemas.get(uri))
    }

    pub fn len(&self) -> usize {
        self.inner.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.order.is_empty()
    }

    /// Publish this registry as the process-wide instance.
    ///
    /// Succeeds once per process; later calls fail with
    /// `RegistryError::AlreadyInstalled` and leave the first instance in place.
    pub fn install_global(self) -> RegistryResult<&'static SchemaRegistry> {
        let mut installed = false;
        let registry = GLOBAL_REGISTRY.get_or_init(|| {
            installed = true;
            self
        });
        if installed {
            info!("Installed global schema registry with {} schemas", registry.len());
            Ok(registry)
        } else {
            Err(RegistryError::AlreadyInstalled)
        }
    }

    /// The process-wide registry, if one was installed.
    pub fn global() -> Option<&'static SchemaRegistry> {
        GLOBAL_REGISTRY.get()
    }
}

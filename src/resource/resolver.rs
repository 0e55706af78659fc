//! Typed extension resolution.
//!
//! [`ExtensionResolver`] turns a stored extension tree into a Rust value. The
//! tree is first walked against the registered schema shape and every
//! structural problem is collected; only a clean tree is handed to serde. A
//! failed decode therefore reports all mismatched attributes at once.
//!
//! Resolution never modifies the stored tree. Attributes the shape does not
//! know are returned alongside the value in [`Resolved::unknown`].

use crate::error::{DecodeError, DecodeIssue, DecodeIssueKind, ScimResult, value_type_name};
use crate::resource::ScimResource;
use crate::schema::{
    AttributeDefinition, AttributeType, Schema, SchemaDescriptor, SchemaRegistry, ScimExtension,
};
use crate::tree::AttributeTree;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use log::trace;
use serde_json::{Map, Value};

/// A decoded extension and the attributes its shape did not cover.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub unknown: AttributeTree,
}

/// Resolves typed extensions through a schema registry.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionResolver<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> ExtensionResolver<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'a SchemaRegistry {
        self.registry
    }

    /// Look up and decode the extension bound to `T` on a resource.
    ///
    /// * `Err(UnknownSchema)` - `T` was never registered
    /// * `Ok(None)` - `T` is registered but the resource has no such extension
    /// * `Err(Decode)` - the stored tree does not fit `T`
    pub fn extension<T: ScimExtension>(
        &self,
        resource: &ScimResource,
    ) -> ScimResult<Option<Resolved<T>>> {
        let descriptor = self.registry.descriptor_for::<T>()?;
        let Some(tree) = resource.extension(descriptor.uri().as_str()) else {
            trace!("No {} extension on resource", descriptor.uri());
            return Ok(None);
        };
        Ok(Some(Self::resolve(tree, descriptor)?))
    }

    /// Decode a tree into `T` using the descriptor's shape.
    pub fn resolve<T: ScimExtension>(
        tree: &AttributeTree,
        descriptor: &SchemaDescriptor,
    ) -> Result<Resolved<T>, DecodeError> {
        let schema = descriptor.schema();
        let mut issues = Self::check(tree, schema);

        if issues.is_empty() {
            match serde_json::from_value::<T>(tree.to_value()) {
                Ok(value) => {
                    trace!("Resolved {} as {}", descriptor.uri(), T::type_name());
                    return Ok(Resolved {
                        value,
                        unknown: Self::unknown_attributes(tree, schema),
                    });
                }
                Err(err) => issues.push(DecodeIssue {
                    path: String::new(),
                    kind: DecodeIssueKind::Deserialize {
                        message: err.to_string(),
                    },
                }),
            }
        }

        Err(DecodeError {
            schema: descriptor.uri().to_string(),
            target: T::type_name().to_string(),
            tree: tree.clone(),
            issues,
        })
    }

    /// Every structural mismatch between a tree and a schema shape.
    ///
    /// An empty result means the tree fits. A schema without attributes
    /// accepts any tree.
    pub fn check(tree: &AttributeTree, schema: &Schema) -> Vec<DecodeIssue> {
        let mut issues = Vec::new();
        check_attributes(tree.as_map(), &schema.attributes, "", &mut issues);
        issues
    }

    /// Encode `value` for storage under its schema, keeping what it does not
    /// describe.
    ///
    /// Starting from `existing`, every attribute of the encoded value replaces
    /// the stored one, shape attributes the value leaves out are dropped, and
    /// attributes outside the shape survive untouched.
    pub fn encode<T: ScimExtension>(
        value: &T,
        schema: &Schema,
        existing: Option<&AttributeTree>,
    ) -> ScimResult<AttributeTree> {
        let encoded = AttributeTree::from_value(serde_json::to_value(value)?)?;
        let Some(existing) = existing else {
            return Ok(encoded);
        };

        let mut merged = existing.clone();
        for attr in &schema.attributes {
            if !encoded.contains(&attr.name) {
                merged.remove(&attr.name);
            }
        }
        for (name, value) in encoded {
            merged.set(name, value);
        }
        Ok(merged)
    }

    fn unknown_attributes(tree: &AttributeTree, schema: &Schema) -> AttributeTree {
        if !schema.has_shape() {
            return AttributeTree::new();
        }
        tree.iter()
            .filter(|(name, _)| schema.attribute(name).is_none())
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}

fn check_attributes(
    object: &Map<String, Value>,
    definitions: &[AttributeDefinition],
    prefix: &str,
    issues: &mut Vec<DecodeIssue>,
) {
    for definition in definitions {
        let path = join_path(prefix, &definition.name);
        match object.get(&definition.name) {
            // Null is the same as unassigned (RFC 7643 section 2.5)
            None | Some(Value::Null) => {
                if definition.required {
                    issues.push(DecodeIssue::missing(path));
                }
            }
            Some(Value::Array(items)) if definition.multi_valued => {
                for (index, item) in items.iter().enumerate() {
                    check_value(item, definition, &format!("{}[{}]", path, index), issues);
                }
            }
            Some(_) if definition.multi_valued => issues.push(DecodeIssue {
                path,
                kind: DecodeIssueKind::ExpectedMultiValue,
            }),
            Some(Value::Array(_)) => issues.push(DecodeIssue {
                path,
                kind: DecodeIssueKind::ExpectedSingleValue,
            }),
            Some(value) => check_value(value, definition, &path, issues),
        }
    }
}

fn check_value(
    value: &Value,
    definition: &AttributeDefinition,
    path: &str,
    issues: &mut Vec<DecodeIssue>,
) {
    let fits = match (definition.data_type, value) {
        (AttributeType::String | AttributeType::Reference, Value::String(_)) => true,
        (AttributeType::Boolean, Value::Bool(_)) => true,
        (AttributeType::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
        (AttributeType::Decimal, Value::Number(_)) => true,
        (AttributeType::DateTime, Value::String(s)) => {
            chrono::DateTime::parse_from_rfc3339(s).is_ok()
        }
        (AttributeType::Binary, Value::String(s)) => BASE64.decode(s).is_ok(),
        (AttributeType::Complex, Value::Object(sub)) => {
            check_attributes(sub, &definition.sub_attributes, path, issues);
            true
        }
        _ => false,
    };

    if !fits {
        issues.push(DecodeIssue::type_mismatch(
            path,
            definition.data_type.scim_name(),
            value_type_name(value),
        ));
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

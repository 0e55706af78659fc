//! Generic attribute container for SCIM JSON objects.
//!
//! [`AttributeTree`] is the schema-agnostic representation of any SCIM object:
//! an ordered mapping from attribute name to JSON value. Nested complex
//! attributes are themselves JSON objects and can be viewed as trees via
//! [`AttributeTree::get_tree`]. Key order and number representation survive a
//! decode/encode cycle unchanged.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ordered, schema-agnostic SCIM object.
///
/// Missing attributes are never an error; every accessor returns `None`
/// instead and leaves presence checks to the caller.
///
/// ```rust
/// use scim_resource_model::AttributeTree;
/// use serde_json::json;
///
/// let mut tree = AttributeTree::new();
/// tree.set("employeeNumber", "701984");
/// tree.set("manager", json!({"value": "26118915-6090-4610-87e4-49d8ca9f808d"}));
///
/// assert_eq!(tree.get_str("employeeNumber"), Some("701984"));
/// assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["employeeNumber", "manager"]);
/// assert!(tree.get("division").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeTree {
    attributes: Map<String, Value>,
}

impl AttributeTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            attributes: Map::new(),
        }
    }

    /// Build a tree from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> ValidationResult<Self> {
        match value {
            Value::Object(attributes) => Ok(Self { attributes }),
            other => Err(ValidationError::not_an_object(&other)),
        }
    }

    /// Get an attribute value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Get a mutable reference to an attribute value.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.attributes.get_mut(name)
    }

    /// Get a string attribute, `None` when absent or not a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }

    /// Get a nested complex attribute as its own tree.
    pub fn get_tree(&self, name: &str) -> Option<AttributeTree> {
        match self.attributes.get(name) {
            Some(Value::Object(map)) => Some(Self {
                attributes: map.clone(),
            }),
            _ => None,
        }
    }

    /// Look up a value by dotted path, e.g. `manager.value`.
    ///
    /// Only descends through objects; a path segment that hits an array or a
    /// scalar yields `None`.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.attributes.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Set an attribute, returning the previous value.
    ///
    /// Replacing an existing attribute keeps its original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Remove an attribute, returning its value.
    ///
    /// The relative order of the remaining attributes is unchanged.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.attributes.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Attribute names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.attributes
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.attributes)
    }

    /// A JSON copy of the tree.
    pub fn to_value(&self) -> Value {
        Value::Object(self.attributes.clone())
    }
}

impl From<Map<String, Value>> for AttributeTree {
    fn from(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }
}

impl From<AttributeTree> for Value {
    fn from(tree: AttributeTree) -> Self {
        tree.into_value()
    }
}

impl TryFrom<Value> for AttributeTree {
    type Error = ValidationError;

    fn try_from(value: Value) -> ValidationResult<Self> {
        Self::from_value(value)
    }
}

impl FromIterator<(String, Value)> for AttributeTree {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AttributeTree {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

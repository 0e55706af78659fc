//! Meta value object for SCIM resource metadata.
//!
//! Meta carries the common metadata of RFC 7643 section 3.1: resource type,
//! timestamps, location and version. This crate only stores and forwards it.
//! The attribute tree a document arrived with is kept as-is, so timestamp
//! offsets, fractional seconds, key order and unknown attributes all come back
//! out unchanged. The typed accessors read from that tree.

use crate::error::{ValidationError, ValidationResult, value_type_name};
use crate::tree::AttributeTree;
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

const RESOURCE_TYPE: &str = "resourceType";
const CREATED: &str = "created";
const LAST_MODIFIED: &str = "lastModified";
const LOCATION: &str = "location";
const VERSION: &str = "version";

/// SCIM resource metadata.
///
/// ```rust
/// use scim_resource_model::Meta;
///
/// let meta = Meta::new_for_creation("User")
///     .with_location("https://example.com/v2/Users/2819c223");
/// assert_eq!(meta.resource_type(), Some("User"));
/// assert_eq!(meta.created(), meta.last_modified());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Meta {
    attributes: AttributeTree,
}

impl Meta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create meta for a new resource with both timestamps set to now.
    pub fn new_for_creation(resource_type: impl Into<String>) -> Self {
        let now = Utc::now();
        let mut meta = Self::new();
        meta.set_resource_type(resource_type);
        meta.set_created(now);
        meta.set_last_modified(now);
        meta
    }

    pub fn resource_type(&self) -> Option<&str> {
        self.attributes.get_str(RESOURCE_TYPE)
    }

    /// `created`, with the offset it was written with.
    pub fn created(&self) -> Option<DateTime<FixedOffset>> {
        self.attributes.get(CREATED).and_then(parse_timestamp)
    }

    /// `lastModified`, with the offset it was written with.
    pub fn last_modified(&self) -> Option<DateTime<FixedOffset>> {
        self.attributes.get(LAST_MODIFIED).and_then(parse_timestamp)
    }

    pub fn location(&self) -> Option<&str> {
        self.attributes.get_str(LOCATION)
    }

    pub fn version(&self) -> Option<&str> {
        self.attributes.get_str(VERSION)
    }

    pub fn set_resource_type(&mut self, resource_type: impl Into<String>) {
        self.attributes.set(RESOURCE_TYPE, resource_type.into());
    }

    pub fn set_created(&mut self, created: DateTime<Utc>) {
        self.attributes.set(CREATED, format_timestamp(created));
    }

    pub fn set_last_modified(&mut self, last_modified: DateTime<Utc>) {
        self.attributes.set(LAST_MODIFIED, format_timestamp(last_modified));
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.attributes.set(LOCATION, location.into());
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.attributes.set(VERSION, version.into());
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.set_location(location);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.set_version(version);
        self
    }

    /// Raw value of any meta attribute, known or not.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set any meta attribute. Known attributes are checked the same way
    /// decoding checks them; a rejected value leaves the meta untouched.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> ValidationResult<Option<Value>> {
        let name = name.into();
        let value = value.into();
        check_attribute(&name, &value)?;
        Ok(self.attributes.set(name, value))
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }

    /// All meta attributes in document order.
    pub fn attributes(&self) -> &AttributeTree {
        &self.attributes
    }

    /// Read meta from its JSON form.
    ///
    /// Known attributes must be strings and timestamps must be RFC 3339.
    /// The tree itself is stored unchanged.
    pub fn from_value(value: &Value) -> ValidationResult<Self> {
        let obj = value
            .as_object()
            .ok_or(ValidationError::InvalidMetaStructure)?;
        for (key, value) in obj {
            check_attribute(key, value)?;
        }
        Ok(Self {
            attributes: AttributeTree::from(obj.clone()),
        })
    }

    /// JSON form of the meta attribute.
    pub fn to_value(&self) -> Value {
        self.attributes.to_value()
    }
}

fn check_attribute(name: &str, value: &Value) -> ValidationResult<()> {
    match name {
        RESOURCE_TYPE | LOCATION | VERSION if !value.is_string() => {
            Err(ValidationError::InvalidMetaAttribute {
                name: name.to_string(),
                actual: value_type_name(value).to_string(),
            })
        }
        CREATED if parse_timestamp(value).is_none() => Err(ValidationError::InvalidCreatedDateTime),
        LAST_MODIFIED if parse_timestamp(value).is_none() => {
            Err(ValidationError::InvalidModifiedDateTime)
        }
        _ => Ok(()),
    }
}

fn parse_timestamp(value: &Value) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.as_str()?).ok()
}

fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Meta(resourceType={}, lastModified={})",
            self.resource_type().unwrap_or("-"),
            self.attributes.get_str(LAST_MODIFIED).unwrap_or("-")
        )
    }
}

impl Serialize for Meta {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.attributes.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Meta {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

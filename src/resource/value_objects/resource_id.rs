//! ResourceId value object for SCIM resource identifiers.
//!
//! Resource IDs are assigned by the service provider and are absent on a
//! resource that has not been created yet.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated SCIM resource identifier.
///
/// ## Validation Rules
///
/// - Must not be empty
///
/// ## Examples
///
/// ```rust
/// use scim_resource_model::ResourceId;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let id = ResourceId::new("2819c223-7f76-453a-919d-413861904646")?;
///     println!("Resource ID: {}", id.as_str());
///
///     assert!(ResourceId::new("").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// Create a new ResourceId with validation.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        Self::validate_format(&value)?;
        Ok(Self(value))
    }

    /// Generate a fresh server-side identifier (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the string representation of the ResourceId.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the ResourceId.
    pub fn into_string(self) -> String {
        self.0
    }

    fn validate_format(value: &str) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(())
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ResourceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for ResourceId {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ResourceId {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value)
    }
}

//! SchemaUri value object for SCIM schema identifiers.
//!
//! Schema URIs name core schemas and extensions. They are opaque: compared
//! case-sensitively exactly as received and never normalized.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Core User schema URN.
pub const CORE_USER_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:User";
/// Core Group schema URN.
pub const CORE_GROUP_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:Group";
/// Enterprise User extension schema URN.
pub const ENTERPRISE_USER_SCHEMA: &str =
    "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User";

/// A validated SCIM schema URI.
///
/// ## Validation Rules
///
/// - Must not be empty
///
/// Any stricter syntax (the `urn:` prefix) is a decoding policy, see
/// [`crate::config::UrnSyntax`].
///
/// ## Examples
///
/// ```rust
/// use scim_resource_model::SchemaUri;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let uri = SchemaUri::new("urn:ietf:params:scim:schemas:core:2.0:User")?;
///     assert_eq!(uri.as_str(), "urn:ietf:params:scim:schemas:core:2.0:User");
///
///     // Comparison is exact
///     let shouted = SchemaUri::new("URN:IETF:PARAMS:SCIM:SCHEMAS:CORE:2.0:USER")?;
///     assert_ne!(uri, shouted);
///
///     assert!(SchemaUri::new("").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaUri(String);

impl SchemaUri {
    /// Create a new SchemaUri with validation.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        Self::validate_format(&value)?;
        Ok(Self(value))
    }

    /// Wrap one of the built-in URN constants.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(!value.is_empty());
        Self(value.to_string())
    }

    /// Get the string representation of the SchemaUri.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the SchemaUri.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the value uses the `urn:` scheme.
    ///
    /// The scheme name itself is case-insensitive per RFC 8141.
    pub fn is_urn(&self) -> bool {
        has_urn_prefix(&self.0)
    }

    fn validate_format(value: &str) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::InvalidSchemaUri {
                uri: value.to_string(),
            });
        }
        Ok(())
    }
}

/// Whether a string starts with the `urn:` scheme, ignoring scheme case.
pub(crate) fn has_urn_prefix(value: &str) -> bool {
    value
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("urn:"))
}

impl fmt::Display for SchemaUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SchemaUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SchemaUri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SchemaUri {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SchemaUri {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for SchemaUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SchemaUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for SchemaUri {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SchemaUri {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value)
    }
}

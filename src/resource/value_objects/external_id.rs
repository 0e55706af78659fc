//! ExternalId value object for client-supplied correlation identifiers.
//!
//! The external id belongs to the provisioning client. Its content is opaque:
//! any string, including an empty one, is carried through untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A client-supplied identifier, stored and forwarded verbatim.
///
/// ```rust
/// use scim_resource_model::ExternalId;
///
/// let external = ExternalId::new("701984");
/// assert_eq!(external.as_str(), "701984");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalId(String);

impl ExternalId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ExternalId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ExternalId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

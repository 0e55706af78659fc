//! Content-derived resource versions.
//!
//! A [`ResourceVersion`] is computed deterministically from a resource's
//! encoded content using SHA-256, so any two providers produce the same
//! version for the same document. The HTTP form is a weak ETag
//! (`W/"abc123"`), which is what lands in `meta.version`.
//!
//! ```rust
//! use scim_resource_model::resource::version::ResourceVersion;
//!
//! let version = ResourceVersion::from_content(br#"{"id":"123","userName":"jdoe"}"#);
//! let etag = version.to_etag();
//! assert!(etag.starts_with("W/\""));
//!
//! let parsed: ResourceVersion = etag.parse().unwrap();
//! assert_eq!(parsed, version);
//! ```

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use sha2::{Digest, Sha256};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Opaque version identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceVersion {
    opaque: String,
}

impl ResourceVersion {
    /// Hash resource content into a version.
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        let hash = hasher.finalize();
        // First 8 bytes keep ETags short
        Self {
            opaque: BASE64.encode(&hash[..8]),
        }
    }

    /// Wrap a provider-specific version string, e.g. a database sequence.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self {
            opaque: hash.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.opaque
    }

    /// Weak ETag form, `W/"<opaque>"`.
    pub fn to_etag(&self) -> String {
        format!("W/\"{}\"", self.opaque)
    }

    /// Parse a weak or strong ETag.
    pub fn parse_etag(etag: &str) -> Result<Self, VersionError> {
        let etag = etag.trim();
        let quoted = etag.strip_prefix("W/").unwrap_or(etag);
        let opaque = quoted
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .ok_or_else(|| VersionError::InvalidEtagFormat(etag.to_string()))?;
        if opaque.is_empty() {
            return Err(VersionError::InvalidEtagFormat(etag.to_string()));
        }
        Ok(Self::from_hash(opaque))
    }
}

impl fmt::Display for ResourceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.opaque)
    }
}

impl FromStr for ResourceVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_etag(s)
    }
}

/// Errors reading a version from its HTTP form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Invalid ETag format: {0}")]
    InvalidEtagFormat(String),
}

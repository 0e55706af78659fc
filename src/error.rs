//! Error types for SCIM resource model operations.
//!
//! Every failure in this crate is recoverable and returned to the immediate
//! caller. An absent extension is not an error at all: lookups return
//! `Option::None` for it.

use crate::tree::AttributeTree;
use std::fmt;

/// Main error type for resource model operations.
#[derive(Debug, thiserror::Error)]
pub enum ScimError {
    /// A typed extension was requested for a type or URN with no registered schema
    #[error("Unknown schema: {schema}")]
    UnknownSchema { schema: String },

    /// A stored extension tree does not match the requested shape
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Input document does not form a valid resource
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Schema registry population errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for documents that cannot be read as a resource.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Value must be a JSON object
    #[error("Expected a JSON object, got {actual}")]
    NotAnObject { actual: String },

    /// Missing schemas attribute
    #[error("Missing required 'schemas' attribute")]
    MissingSchemas,

    /// Empty schemas array
    #[error("'schemas' array cannot be empty")]
    EmptySchemas,

    /// Invalid schema URI format
    #[error("Invalid schema URI format: {uri}")]
    InvalidSchemaUri { uri: String },

    /// 'schemas' is not an array of strings
    #[error("'schemas' must be an array of strings")]
    InvalidSchemasAttribute,

    /// Duplicate schema URI in 'schemas'
    #[error("Duplicate schema URI: {uri}")]
    DuplicateSchemaUri { uri: String },

    /// Empty id value
    #[error("'id' attribute cannot be empty")]
    EmptyId,

    /// Invalid id format
    #[error("Invalid 'id' format: {id}")]
    InvalidIdFormat { id: String },

    /// Invalid external id
    #[error("Invalid 'externalId' format")]
    InvalidExternalId,

    /// Invalid meta structure
    #[error("Invalid 'meta' structure")]
    InvalidMetaStructure,

    /// A known meta attribute has the wrong JSON type
    #[error("'meta.{name}' must be a string, got {actual}")]
    InvalidMetaAttribute { name: String, actual: String },

    /// Invalid created datetime
    #[error("Invalid 'meta.created' datetime format")]
    InvalidCreatedDateTime,

    /// Invalid modified datetime
    #[error("Invalid 'meta.lastModified' datetime format")]
    InvalidModifiedDateTime,

    /// Extension payload is not an object
    #[error("Extension '{uri}' must be a JSON object, got {actual}")]
    InvalidExtensionPayload { uri: String, actual: String },

    /// The base schema cannot also be attached as an extension
    #[error("Base schema '{uri}' cannot be attached as an extension")]
    BaseSchemaAsExtension { uri: String },

    /// Common attributes are set through their own accessors
    #[error("'{name}' is a reserved common attribute")]
    ReservedAttribute { name: String },

    /// A core attribute and an extension would share one top-level key
    #[error("'{name}' is already used by another top-level attribute")]
    AttributeConflict { name: String },

    /// General validation error with custom message
    #[error("Validation failed: {message}")]
    Custom { message: String },
}

/// Errors raised while populating or publishing a schema registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The URN was already registered
    #[error("Schema already registered: {uri}")]
    DuplicateSchema { uri: String },

    /// A Rust type is already bound to a different URN
    #[error("Type '{type_name}' is already bound to '{existing}', cannot bind to '{requested}'")]
    ConflictingBinding {
        type_name: String,
        existing: String,
        requested: String,
    },

    /// The process-wide registry was installed twice
    #[error("Global schema registry is already installed")]
    AlreadyInstalled,

    /// A registered schema carried an invalid URN
    #[error("Invalid schema URI: {0}")]
    InvalidUri(#[from] ValidationError),
}

/// Structural mismatch between a stored extension tree and a requested shape.
///
/// Carries every mismatch found, not just the first, together with the
/// offending tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    /// URN of the extension that failed to decode
    pub schema: String,
    /// Name of the requested Rust type
    pub target: String,
    /// The tree as stored on the resource
    pub tree: AttributeTree,
    /// All problems found, in shape order
    pub issues: Vec<DecodeIssue>,
}

impl DecodeError {
    /// Whether an issue was reported for the given attribute path.
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|issue| issue.path == path)
    }
}

/// One structural problem found during typed decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeIssue {
    /// Dotted attribute path, e.g. `manager.value`
    pub path: String,
    pub kind: DecodeIssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeIssueKind {
    /// A required attribute is absent
    MissingAttribute,
    /// Attribute value has the wrong data type
    TypeMismatch { expected: String, actual: String },
    /// Single value where an array is required
    ExpectedMultiValue,
    /// Array where a single value is required
    ExpectedSingleValue,
    /// Reported by the serde decode of the target type
    Deserialize { message: String },
}

impl fmt::Display for DecodeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DecodeIssueKind::MissingAttribute => {
                write!(f, "required attribute '{}' is missing", self.path)
            }
            DecodeIssueKind::TypeMismatch { expected, actual } => write!(
                f,
                "attribute '{}' has invalid type, expected {}, got {}",
                self.path, expected, actual
            ),
            DecodeIssueKind::ExpectedMultiValue => {
                write!(f, "attribute '{}' must be multi-valued (array)", self.path)
            }
            DecodeIssueKind::ExpectedSingleValue => {
                write!(f, "attribute '{}' must be single-valued", self.path)
            }
            DecodeIssueKind::Deserialize { message } if self.path.is_empty() => {
                write!(f, "{}", message)
            }
            DecodeIssueKind::Deserialize { message } => {
                write!(f, "attribute '{}': {}", self.path, message)
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot decode extension '{}' into {}: ",
            self.schema, self.target
        )?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for DecodeError {}

// Convenience methods for creating common errors
impl ScimError {
    /// Create an unknown schema error
    pub fn unknown_schema(schema: impl Into<String>) -> Self {
        Self::UnknownSchema {
            schema: schema.into(),
        }
    }

    /// Whether this error means the schema was never registered.
    pub fn is_unknown_schema(&self) -> bool {
        matches!(self, Self::UnknownSchema { .. })
    }
}

impl ValidationError {
    /// Create a custom validation error
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }

    /// Create a not-an-object error for the given value.
    pub fn not_an_object(value: &serde_json::Value) -> Self {
        Self::NotAnObject {
            actual: value_type_name(value).to_string(),
        }
    }
}

impl DecodeIssue {
    pub fn missing(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: DecodeIssueKind::MissingAttribute,
        }
    }

    pub fn type_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            kind: DecodeIssueKind::TypeMismatch {
                expected: expected.into(),
                actual: actual.into(),
            },
        }
    }
}

/// Get the SCIM type name of a JSON value for error messages.
pub(crate) fn value_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "decimal",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Result type aliases for convenience
pub type ScimResult<T> = Result<T, ScimError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type RegistryResult<T> = Result<T, RegistryError>;

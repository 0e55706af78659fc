//! Embedded standard SCIM schemas.
//!
//! The core User and Group schemas and the Enterprise User extension from
//! RFC 7643, embedded as static strings so a registry can be populated without
//! schema files. Only the attributes needed for structural decoding are listed;
//! the common attributes (`id`, `externalId`, `meta`) are handled by the
//! resource itself.

/// Returns the core User schema as a JSON string.
pub fn core_user_schema() -> &'static str {
    r#"{
  "id": "urn:ietf:params:scim:schemas:core:2.0:User",
  "name": "User",
  "description": "User Account",
  "attributes": [
    { "name": "userName", "type": "string", "required": true, "uniqueness": "server" },
    {
      "name": "name",
      "type": "complex",
      "subAttributes": [
        { "name": "formatted", "type": "string" },
        { "name": "familyName", "type": "string" },
        { "name": "givenName", "type": "string" },
        { "name": "middleName", "type": "string" },
        { "name": "honorificPrefix", "type": "string" },
        { "name": "honorificSuffix", "type": "string" }
      ]
    },
    { "name": "displayName", "type": "string" },
    { "name": "nickName", "type": "string" },
    { "name": "profileUrl", "type": "reference" },
    { "name": "title", "type": "string" },
    { "name": "userType", "type": "string" },
    { "name": "preferredLanguage", "type": "string" },
    { "name": "locale", "type": "string" },
    { "name": "timezone", "type": "string" },
    { "name": "active", "type": "boolean" },
    {
      "name": "emails",
      "type": "complex",
      "multiValued": true,
      "subAttributes": [
        { "name": "value", "type": "string" },
        { "name": "display", "type": "string" },
        { "name": "type", "type": "string", "canonicalValues": ["work", "home", "other"] },
        { "name": "primary", "type": "boolean" }
      ]
    }
  ]
}"#
}

/// Returns the core Group schema as a JSON string.
pub fn core_group_schema() -> &'static str {
    r#"{
  "id": "urn:ietf:params:scim:schemas:core:2.0:Group",
  "name": "Group",
  "description": "Group",
  "attributes": [
    { "name": "displayName", "type": "string", "required": true },
    {
      "name": "members",
      "type": "complex",
      "multiValued": true,
      "subAttributes": [
        { "name": "value", "type": "string", "mutability": "immutable" },
        { "name": "$ref", "type": "reference", "mutability": "immutable" },
        { "name": "type", "type": "string", "canonicalValues": ["User", "Group"] },
        { "name": "display", "type": "string", "mutability": "readOnly" }
      ]
    }
  ]
}"#
}

/// Returns the Enterprise User extension schema as a JSON string.
pub fn enterprise_user_schema() -> &'static str {
    r#"{
  "id": "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User",
  "name": "EnterpriseUser",
  "description": "Enterprise User",
  "attributes": [
    { "name": "employeeNumber", "type": "string" },
    { "name": "costCenter", "type": "string" },
    { "name": "organization", "type": "string" },
    { "name": "division", "type": "string" },
    { "name": "department", "type": "string" },
    {
      "name": "manager",
      "type": "complex",
      "subAttributes": [
        { "name": "value", "type": "string" },
        { "name": "$ref", "type": "reference" },
        { "name": "displayName", "type": "string", "mutability": "readOnly" }
      ]
    }
  ]
}"#
}

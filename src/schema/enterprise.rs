//! Typed Enterprise User extension (RFC 7643 section 4.3).

use super::extension::ScimExtension;
use super::types::{AttributeDefinition, AttributeType, Mutability, Schema};
use crate::resource::value_objects::ENTERPRISE_USER_SCHEMA;
use serde::{Deserialize, Serialize};

/// Enterprise User extension attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<Manager>,
}

/// The user's manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    /// Id of the manager's User resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ScimExtension for EnterpriseUser {
    fn schema() -> Schema {
        let string = |name: &str| AttributeDefinition::new(name, AttributeType::String);
        Schema::new(ENTERPRISE_USER_SCHEMA, "EnterpriseUser")
            .with_description("Enterprise User")
            .with_attribute(string("employeeNumber"))
            .with_attribute(string("costCenter"))
            .with_attribute(string("organization"))
            .with_attribute(string("division"))
            .with_attribute(string("department"))
            .with_attribute(AttributeDefinition::complex(
                "manager",
                vec![
                    string("value"),
                    AttributeDefinition::new("$ref", AttributeType::Reference),
                    string("displayName").with_mutability(Mutability::ReadOnly),
                ],
            ))
    }

    fn type_name() -> &'static str {
        "EnterpriseUser"
    }
}

//! Document decode/encode behaviour.

use crate::common::{self, fixtures};
use crate::{assert_error_message_contains, assert_validation_error};
use scim_resource_model::schema::{EnterpriseUser, SchemaRegistry};
use scim_resource_model::{ModelConfig, ResourceId, SchemaUri, ScimResource, ValidationError};
use serde_json::{Value, json};

fn decode(document: Value) -> ScimResource {
    ScimResource::from_json(document, &ModelConfig::default()).expect("document decodes")
}

#[test]
fn test_rfc_documents_round_trip() {
    common::init_logging();

    for document in [
        fixtures::rfc_examples::user_minimal(),
        fixtures::rfc_examples::user_enterprise(),
        fixtures::rfc_examples::group(),
        fixtures::custom::user_with_custom_extensions(),
    ] {
        let resource = decode(document.clone());
        assert_eq!(resource.to_json(), document);
        assert!(resource.schema_mismatch().is_empty());
    }
}

#[test]
fn test_encoded_key_order_is_stable() {
    let resource = decode(fixtures::rfc_examples::user_enterprise());
    let encoded = resource.to_json();
    let keys: Vec<&str> = encoded
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        keys,
        vec![
            "schemas",
            "id",
            "externalId",
            "userName",
            "name",
            "displayName",
            "emails",
            "userType",
            "title",
            "active",
            "meta",
            "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User",
        ]
    );

    let name_keys: Vec<&str> = encoded["name"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(name_keys, vec!["formatted", "familyName", "givenName"]);
}

#[test]
fn test_text_round_trip_keeps_numbers_verbatim() {
    let raw = r#"{"schemas":["urn:ietf:params:scim:schemas:core:2.0:User","urn:example:ext"],"userName":"n","score":1.10,"big":123456789012345678901234567890,"urn:example:ext":{"ratio":0.30000000000000004}}"#;

    let resource = ScimResource::from_json_str(raw, &ModelConfig::default()).unwrap();
    assert_eq!(resource.to_json_string().unwrap(), raw);
}

#[test]
fn test_unknown_core_attributes_are_preserved() {
    let resource = decode(json!({
        "schemas": ["urn:ietf:params:scim:schemas:core:2.0:User"],
        "userName": "bjensen",
        "x-legacyFlags": {"a": [1, 2, {"b": null}]}
    }));

    assert_eq!(
        resource.attribute("x-legacyFlags"),
        Some(&json!({"a": [1, 2, {"b": null}]}))
    );
    assert_eq!(resource.to_json()["x-legacyFlags"]["a"][2], json!({"b": null}));
}

#[test]
fn test_extension_declared_first_still_finds_base() {
    let resource = decode(json!({
        "schemas": [
            "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User",
            "urn:ietf:params:scim:schemas:core:2.0:User"
        ],
        "userName": "bjensen",
        "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User": {"division": "Parks"}
    }));

    assert_eq!(
        resource.base_schema().as_str(),
        "urn:ietf:params:scim:schemas:core:2.0:User"
    );
    assert_eq!(resource.extensions().len(), 1);

    // Serialization puts the base schema first
    assert_eq!(
        resource.to_json()["schemas"][0],
        "urn:ietf:params:scim:schemas:core:2.0:User"
    );
}

#[test]
fn test_declared_extension_without_payload_is_not_the_base() {
    let registry = SchemaRegistry::standard().unwrap();
    let mut resource = decode(json!({
        "schemas": [
            "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User",
            "urn:ietf:params:scim:schemas:core:2.0:User"
        ],
        "userName": "x"
    }));

    assert_eq!(
        resource.base_schema().as_str(),
        "urn:ietf:params:scim:schemas:core:2.0:User"
    );
    assert!(resource.extensions().is_empty());

    let enterprise = EnterpriseUser {
        employee_number: Some("701984".to_string()),
        ..EnterpriseUser::default()
    };
    resource.put_typed_extension(&registry, &enterprise).unwrap();
    assert_eq!(
        resource.to_json()["schemas"],
        json!([
            "urn:ietf:params:scim:schemas:core:2.0:User",
            "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User"
        ])
    );
}

#[test]
fn test_custom_base_schema_declared_last() {
    let document = json!({
        "schemas": ["urn:example:ext:Audit", "urn:example:core:Device"],
        "serial": "D-1"
    });

    let config = ModelConfig::default().with_base_schema("urn:example:core:Device");
    let device = ScimResource::from_json(document.clone(), &config).unwrap();
    assert_eq!(device.base_schema().as_str(), "urn:example:core:Device");

    // A configured default base wins over position too
    let config = ModelConfig::default().with_default_base_schema("urn:example:core:Device");
    let device = ScimResource::from_json(document, &config).unwrap();
    assert_eq!(device.base_schema().as_str(), "urn:example:core:Device");
}

#[test]
fn test_meta_is_forwarded_unchanged() {
    let document = json!({
        "schemas": ["urn:ietf:params:scim:schemas:core:2.0:User"],
        "userName": "bjensen",
        "meta": {
            "version": "W/\"3694e05e9dff590\"",
            "resourceType": "User",
            "created": "2010-01-23T04:56:22+02:00",
            "lastModified": "2011-05-13T04:42:34.1Z",
            "x-shard": 7
        }
    });

    let resource = decode(document.clone());
    assert_eq!(resource.to_json(), document);

    let raw = serde_json::to_string(&document).unwrap();
    let reread = ScimResource::from_json_str(&raw, &ModelConfig::default()).unwrap();
    assert_eq!(reread.to_json_string().unwrap(), raw);

    let meta = resource.meta().unwrap();
    assert_eq!(meta.resource_type(), Some("User"));
    assert_eq!(
        meta.created().map(|created| created.to_rfc3339()),
        Some("2010-01-23T04:56:22+02:00".to_string())
    );
}

#[test]
fn test_invalid_documents() {
    let config = ModelConfig::default();

    assert_validation_error!(
        ScimResource::from_json(json!({"userName": "x"}), &config),
        ValidationError::MissingSchemas
    );
    assert_validation_error!(
        ScimResource::from_json(json!({"schemas": []}), &config),
        ValidationError::EmptySchemas
    );
    assert_validation_error!(
        ScimResource::from_json(json!({"schemas": ["urn:x", 3]}), &config),
        ValidationError::InvalidSchemasAttribute
    );
    assert_validation_error!(
        ScimResource::from_json(json!({"schemas": [""]}), &config),
        ValidationError::InvalidSchemaUri { .. }
    );
    assert_validation_error!(
        ScimResource::from_json(json!({"schemas": ["urn:x", "urn:x"]}), &config),
        ValidationError::DuplicateSchemaUri { .. }
    );
    assert_validation_error!(
        ScimResource::from_json(json!({"schemas": ["urn:x"], "id": ""}), &config),
        ValidationError::EmptyId
    );
    assert_validation_error!(
        ScimResource::from_json(json!({"schemas": ["urn:x"], "meta": "yesterday"}), &config),
        ValidationError::InvalidMetaStructure
    );
    assert_validation_error!(
        ScimResource::from_json(json!({"schemas": ["urn:x"], "urn:y": "flat"}), &config),
        ValidationError::InvalidExtensionPayload { .. }
    );
    assert_validation_error!(
        ScimResource::from_json(json!("just a string"), &config),
        ValidationError::NotAnObject { .. }
    );

    assert_error_message_contains!(
        ScimResource::from_json_str("{not json", &config),
        "key must be a string"
    );
}

#[test]
fn test_content_version_tracks_content() {
    let mut resource = decode(fixtures::rfc_examples::user_minimal());
    let version = resource.stamp_version().unwrap();
    let etag = version.to_etag();
    assert_eq!(
        resource.meta().and_then(|meta| meta.version()),
        Some(etag.as_str())
    );

    let copy = decode(resource.to_json());
    assert_eq!(copy.content_version().unwrap(), version);

    resource.set_id(Some(ResourceId::new("another").unwrap()));
    assert_ne!(resource.content_version().unwrap(), version);
}

#[test]
fn test_serde_traits_use_the_codec() {
    let document = fixtures::rfc_examples::user_enterprise();
    let resource: ScimResource = serde_json::from_value(document.clone()).unwrap();
    assert_eq!(serde_json::to_value(&resource).unwrap(), document);

    let enterprise = SchemaUri::new("urn:ietf:params:scim:schemas:extension:enterprise:2.0:User")
        .unwrap();
    assert!(resource.schema_urns().contains(&enterprise));
}

//! Extension lifecycle and typed resolution.

use crate::common::extensions::{BADGE_SCHEMA, Badge, LOYALTY_SCHEMA, Loyalty, Unregistered};
use crate::common::{self, fixtures};
use scim_resource_model::schema::{EnterpriseUser, Manager};
use scim_resource_model::{
    AttributeTree, DecodeIssueKind, ExtensionResolver, ModelConfig, ScimError, ScimResource,
    SchemaUri,
};
use serde_json::json;

fn decode(document: serde_json::Value) -> ScimResource {
    ScimResource::from_json(document, &ModelConfig::default()).expect("document decodes")
}

#[test]
fn test_enterprise_extension_resolves() {
    common::init_logging();
    let registry = common::registry();
    let user = decode(fixtures::rfc_examples::user_enterprise());

    let enterprise = user
        .typed_extension::<EnterpriseUser>(&registry)
        .unwrap()
        .expect("enterprise extension present");
    assert_eq!(enterprise.employee_number.as_deref(), Some("701984"));
    assert_eq!(
        enterprise.manager,
        Some(Manager {
            value: Some("26118915-6090-4610-87e4-49d8ca9f808d".to_string()),
            reference: Some("../Users/26118915-6090-4610-87e4-49d8ca9f808d".to_string()),
            display_name: Some("John Smith".to_string()),
        })
    );
}

#[test]
fn test_absent_unknown_and_undecodable_are_distinct() {
    let registry = common::registry();

    // Registered, not present
    let plain = decode(fixtures::rfc_examples::user_minimal());
    assert_eq!(plain.typed_extension::<Badge>(&registry).unwrap(), None);

    // Never registered
    let err = plain
        .typed_extension::<Unregistered>(&registry)
        .unwrap_err();
    assert!(err.is_unknown_schema());

    // Present, wrong shape
    let broken = decode(fixtures::custom::user_with_broken_badge());
    match broken.typed_extension::<Badge>(&registry) {
        Err(ScimError::Decode(err)) => {
            assert_eq!(err.schema, BADGE_SCHEMA);
            assert_eq!(err.issues.len(), 2);
            assert!(err.has_issue_at("floor"));
            assert!(err.has_issue_at("active"));
            assert!(matches!(
                err.issues.iter().find(|i| i.path == "floor").map(|i| &i.kind),
                Some(DecodeIssueKind::TypeMismatch { .. })
            ));
            assert_eq!(Some(&err.tree), broken.extension(BADGE_SCHEMA));
        }
        other => panic!("Expected decode error, got: {:?}", other),
    }
}

#[test]
fn test_failed_decode_leaves_document_intact() {
    let registry = common::registry();
    let document = fixtures::custom::user_with_broken_badge();
    let broken = decode(document.clone());

    assert!(broken.typed_extension::<Badge>(&registry).is_err());
    assert_eq!(broken.to_json(), document);
}

#[test]
fn test_untyped_access_ignores_the_registry() {
    let user = decode(json!({
        "schemas": ["urn:ietf:params:scim:schemas:core:2.0:User", "urn:example:never:registered"],
        "userName": "x",
        "urn:example:never:registered": {"anything": [1, "two"]}
    }));

    let tree = user.extension("urn:example:never:registered").unwrap();
    assert_eq!(tree.get("anything"), Some(&json!([1, "two"])));
    assert!(user.extension("urn:example:other").is_none());
}

#[test]
fn test_put_then_get_and_remove() {
    let registry = common::registry();
    let mut user = ScimResource::user();
    let badge = Badge {
        badge_number: "B-7".to_string(),
        floor: 3,
        active: true,
    };

    user.put_typed_extension(&registry, &badge).unwrap();
    assert_eq!(user.typed_extension::<Badge>(&registry).unwrap(), Some(badge));
    assert!(
        user.schema_urns()
            .iter()
            .any(|uri| uri.as_str() == BADGE_SCHEMA)
    );

    let removed = user.remove_extension(BADGE_SCHEMA).unwrap();
    assert_eq!(removed.get_str("badgeNumber"), Some("B-7"));
    assert_eq!(user.typed_extension::<Badge>(&registry).unwrap(), None);
    assert!(
        !user
            .schema_urns()
            .iter()
            .any(|uri| uri.as_str() == BADGE_SCHEMA)
    );
    assert!(user.schema_mismatch().is_empty());
}

#[test]
fn test_put_typed_keeps_vendor_attributes() {
    let registry = common::registry();
    let mut user = decode(fixtures::custom::user_with_custom_extensions());

    let mut loyalty = user.typed_extension::<Loyalty>(&registry).unwrap().unwrap();
    assert_eq!(loyalty.programs, vec!["air", "hotel"]);
    loyalty.tier = None;
    loyalty.programs.push("rail".to_string());
    user.put_typed_extension(&registry, &loyalty).unwrap();

    let stored = user.extension(LOYALTY_SCHEMA).unwrap();
    assert!(!stored.contains("tier"));
    assert_eq!(stored.get("programs"), Some(&json!(["air", "hotel", "rail"])));
    assert_eq!(stored.get("vendorScore"), Some(&json!(97)));
}

#[test]
fn test_resolver_reports_unknown_attributes() {
    let registry = common::registry();
    let user = decode(fixtures::custom::user_with_custom_extensions());

    let resolved = ExtensionResolver::new(&registry)
        .extension::<Loyalty>(&user)
        .unwrap()
        .unwrap();
    assert_eq!(resolved.value.tier.as_deref(), Some("gold"));
    assert_eq!(resolved.unknown.keys().collect::<Vec<_>>(), vec!["vendorScore"]);
}

#[test]
fn test_extension_mut_edits_in_place() {
    let registry = common::registry();
    let mut user = decode(fixtures::custom::user_with_custom_extensions());

    user.extension_mut(BADGE_SCHEMA)
        .unwrap()
        .set("floor", 14);
    assert_eq!(
        user.typed_extension::<Badge>(&registry).unwrap().map(|b| b.floor),
        Some(14)
    );
}

#[test]
fn test_schema_set_drift_is_reconciled_on_output() {
    let mut user = decode(fixtures::custom::user_with_custom_extensions());
    let base = SchemaUri::new("urn:ietf:params:scim:schemas:core:2.0:User").unwrap();
    user.set_schema_urns([base]);

    let mismatch = user.schema_mismatch();
    assert_eq!(mismatch.undeclared_extensions.len(), 2);
    assert!(mismatch.declared_without_payload.is_empty());

    let encoded = user.to_json();
    assert_eq!(
        encoded["schemas"],
        json!([
            "urn:ietf:params:scim:schemas:core:2.0:User",
            BADGE_SCHEMA,
            LOYALTY_SCHEMA
        ])
    );

    let reread = decode(encoded);
    assert!(reread.schema_mismatch().is_empty());
    assert_eq!(reread.extensions().len(), 2);
}

#[test]
fn test_declared_without_payload_survives() {
    let mut user = ScimResource::user();
    let declared = SchemaUri::new(LOYALTY_SCHEMA).unwrap();
    user.set_schema_urns([user.base_schema().clone(), declared.clone()]);

    assert_eq!(user.schema_mismatch().declared_without_payload, vec![declared]);
    assert_eq!(user.to_json()["schemas"][1], LOYALTY_SCHEMA);
    assert!(user.extension(LOYALTY_SCHEMA).is_none());
}

#[test]
fn test_put_extension_with_plain_tree() {
    let registry = common::registry();
    let mut user = ScimResource::user();
    let tree = AttributeTree::from_value(json!({
        "badgeNumber": "B-9",
        "floor": 1,
        "active": false
    }))
    .unwrap();
    user.put_extension(SchemaUri::new(BADGE_SCHEMA).unwrap(), tree)
        .unwrap();

    assert_eq!(
        user.typed_extension::<Badge>(&registry).unwrap(),
        Some(Badge {
            badge_number: "B-9".to_string(),
            floor: 1,
            active: false
        })
    );
}

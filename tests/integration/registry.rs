//! Registry construction, lookup and sharing.

use crate::common::{
    self,
    extensions::{BADGE_SCHEMA, Badge, LOYALTY_SCHEMA, Loyalty},
};
use scim_resource_model::schema::{EnterpriseUser, SchemaKind, SchemaRegistry};
use scim_resource_model::{ModelConfig, RegistryError, ScimResource};
use std::thread;

#[test]
fn test_registration_order_and_kinds() {
    let registry = common::registry();

    let uris: Vec<&str> = registry.schemas().map(|d| d.uri().as_str()).collect();
    assert_eq!(
        uris,
        vec![
            "urn:ietf:params:scim:schemas:core:2.0:User",
            "urn:ietf:params:scim:schemas:core:2.0:Group",
            "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User",
            BADGE_SCHEMA,
            LOYALTY_SCHEMA,
        ]
    );

    let user = registry
        .resolve("urn:ietf:params:scim:schemas:core:2.0:User")
        .unwrap();
    assert_eq!(user.kind(), SchemaKind::Core);
    assert!(user.bound_type().is_none());

    let loyalty = registry.resolve(LOYALTY_SCHEMA).unwrap();
    assert_eq!(loyalty.kind(), SchemaKind::Extension);
    assert_eq!(loyalty.bound_type(), Some("Loyalty"));
    assert_eq!(registry.urn_for::<Badge>().unwrap().as_str(), BADGE_SCHEMA);
}

#[test]
fn test_unknown_urn_is_an_error_not_absence() {
    let registry = common::registry();
    let err = registry.resolve("urn:example:missing").unwrap_err();
    assert!(err.is_unknown_schema());
    assert!(registry.get("urn:example:missing").is_none());

    // Lookup is case-sensitive
    assert!(
        registry
            .resolve("URN:IETF:PARAMS:SCIM:SCHEMAS:CORE:2.0:USER")
            .is_err()
    );
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut builder = SchemaRegistry::builder();
    builder.register_extension::<Badge>().unwrap();

    assert!(matches!(
        builder.register_extension::<Badge>(),
        Err(RegistryError::ConflictingBinding { .. })
    ));
    assert!(matches!(
        builder.register_core(<Badge as scim_resource_model::ScimExtension>::schema()),
        Err(RegistryError::DuplicateSchema { .. })
    ));
}

#[test]
fn test_concurrent_resolution_shares_one_registry() {
    let registry = common::registry();
    let document = crate::common::fixtures::rfc_examples::user_enterprise();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            let document = document.clone();
            thread::spawn(move || {
                let user = ScimResource::from_json(document, &ModelConfig::default()).unwrap();
                user.typed_extension::<EnterpriseUser>(&registry)
                    .unwrap()
                    .and_then(|e| e.employee_number)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("701984"));
    }
}

#[test]
fn test_standard_registry_has_no_custom_bindings() {
    let registry = SchemaRegistry::standard().unwrap();
    assert_eq!(registry.len(), 3);
    assert!(registry.urn_for::<Loyalty>().unwrap_err().is_unknown_schema());
}

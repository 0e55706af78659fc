//! Common test utilities.

use scim_resource_model::schema::{EnterpriseUser, SchemaRegistry};

pub mod fixtures;

/// Route `log` output through env_logger; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Standard schemas plus the test extensions.
pub fn registry() -> SchemaRegistry {
    let mut builder = SchemaRegistry::builder();
    builder
        .register_standard_schemas()
        .expect("standard schemas register")
        .register_extension::<extensions::Badge>()
        .expect("badge registers")
        .register_extension::<extensions::Loyalty>()
        .expect("loyalty registers");
    let registry = builder.build();
    assert!(registry.descriptor_for::<EnterpriseUser>().is_ok());
    registry
}

/// Assert that a result is a `ScimError::Validation` matching a pattern.
#[macro_export]
macro_rules! assert_validation_error {
    ($result:expr, $error_variant:pat) => {
        match $result {
            Err(scim_resource_model::ScimError::Validation($error_variant)) => {}
            Ok(_) => panic!("Expected validation error, but decoding passed"),
            Err(other) => panic!("Expected specific validation error, got {:?}", other),
        }
    };
}

/// Assert that a result is an error whose message contains a substring.
#[macro_export]
macro_rules! assert_error_message_contains {
    ($result:expr, $substring:expr) => {
        match $result {
            Err(err) => assert!(
                err.to_string().contains($substring),
                "Error message '{}' does not contain '{}'",
                err,
                $substring
            ),
            Ok(_) => panic!("Expected error containing '{}', but got Ok", $substring),
        }
    };
}

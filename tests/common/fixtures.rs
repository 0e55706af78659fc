//! Test documents.

/// RFC 7643 examples as constants for easy reference
pub mod rfc_examples {
    use serde_json::{Value, json};

    /// RFC 7643 Section 8.1 - Minimal User representation
    pub fn user_minimal() -> Value {
        json!({
            "schemas": ["urn:ietf:params:scim:schemas:core:2.0:User"],
            "id": "2819c223-7f76-453a-919d-413861904646",
            "userName": "bjensen@example.com",
            "meta": {
                "resourceType": "User",
                "created": "2010-01-23T04:56:22Z",
                "lastModified": "2011-05-13T04:42:34Z",
                "version": "W/\"3694e05e9dff590\"",
                "location": "https://example.com/v2/Users/2819c223-7f76-453a-919d-413861904646"
            }
        })
    }

    /// RFC 7643 Section 8.3 - Enterprise User (abridged core attributes)
    pub fn user_enterprise() -> Value {
        json!({
            "schemas": [
                "urn:ietf:params:scim:schemas:core:2.0:User",
                "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User"
            ],
            "id": "2819c223-7f76-453a-919d-413861904646",
            "externalId": "701984",
            "userName": "bjensen@example.com",
            "name": {
                "formatted": "Ms. Barbara J Jensen, III",
                "familyName": "Jensen",
                "givenName": "Barbara"
            },
            "displayName": "Babs Jensen",
            "emails": [
                {"value": "bjensen@example.com", "type": "work", "primary": true},
                {"value": "babs@jensen.org", "type": "home"}
            ],
            "userType": "Employee",
            "title": "Tour Guide",
            "active": true,
            "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User": {
                "employeeNumber": "701984",
                "costCenter": "4130",
                "organization": "Universal Studios",
                "division": "Theme Park",
                "department": "Tour Operations",
                "manager": {
                    "value": "26118915-6090-4610-87e4-49d8ca9f808d",
                    "$ref": "../Users/26118915-6090-4610-87e4-49d8ca9f808d",
                    "displayName": "John Smith"
                }
            },
            "meta": {
                "resourceType": "User",
                "created": "2010-01-23T04:56:22Z",
                "lastModified": "2011-05-13T04:42:34Z",
                "version": "W/\"3694e05e9dff591\"",
                "location": "https://example.com/v2/Users/2819c223-7f76-453a-919d-413861904646"
            }
        })
    }

    /// RFC 7643 Section 8.4 - Group representation
    pub fn group() -> Value {
        json!({
            "schemas": ["urn:ietf:params:scim:schemas:core:2.0:Group"],
            "id": "e9e30dba-f08f-4109-8486-d5c6a331660a",
            "displayName": "Tour Guides",
            "members": [
                {
                    "value": "2819c223-7f76-453a-919d-413861904646",
                    "$ref": "https://example.com/v2/Users/2819c223-7f76-453a-919d-413861904646",
                    "display": "Babs Jensen"
                }
            ],
            "meta": {
                "resourceType": "Group",
                "created": "2010-01-23T04:56:22Z",
                "lastModified": "2011-05-13T04:42:34Z",
                "version": "W/\"3694e05e9dff592\"",
                "location": "https://example.com/v2/Groups/e9e30dba-f08f-4109-8486-d5c6a331660a"
            }
        })
    }
}

/// Documents carrying the test extensions.
pub mod custom {
    use crate::common::extensions::{BADGE_SCHEMA, LOYALTY_SCHEMA};
    use serde_json::{Value, json};

    /// User with a valid badge and a loyalty payload carrying a vendor key.
    pub fn user_with_custom_extensions() -> Value {
        json!({
            "schemas": [
                "urn:ietf:params:scim:schemas:core:2.0:User",
                BADGE_SCHEMA,
                LOYALTY_SCHEMA
            ],
            "id": "c0ffee00-0000-4000-8000-000000000001",
            "userName": "mlee",
            "x-vendorHint": {"source": "hr-feed", "weight": 1.50},
            BADGE_SCHEMA: {"badgeNumber": "B-1138", "floor": 12, "active": true},
            LOYALTY_SCHEMA: {
                "tier": "gold",
                "programs": ["air", "hotel"],
                "memberSince": "2019-04-01T00:00:00Z",
                "vendorScore": 97
            }
        })
    }

    /// Badge payload with a missing attribute and a type mismatch.
    pub fn user_with_broken_badge() -> Value {
        json!({
            "schemas": ["urn:ietf:params:scim:schemas:core:2.0:User", BADGE_SCHEMA],
            "userName": "broken",
            BADGE_SCHEMA: {"badgeNumber": "B-1", "floor": "twelve"}
        })
    }
}

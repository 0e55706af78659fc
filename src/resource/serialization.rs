//! Serde implementations for [`ScimResource`].
//!
//! Both directions go through the document codec with the default
//! [`ModelConfig`]. Callers that need another configuration use
//! [`ScimResource::from_json`] directly.

use crate::config::ModelConfig;
use crate::resource::resource::ScimResource;
use crate::tree::AttributeTree;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for ScimResource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_tree().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScimResource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tree = AttributeTree::deserialize(deserializer)?;
        Self::from_tree(tree, &ModelConfig::default())
            .map_err(|e| serde::de::Error::custom(format!("Invalid SCIM resource: {}", e)))
    }
}

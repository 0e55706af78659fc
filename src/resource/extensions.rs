//! Ordered collection of extension payloads keyed by schema URN.

use crate::resource::value_objects::SchemaUri;
use crate::tree::AttributeTree;

/// Extension payloads in attachment order.
///
/// Keys stay validated [`SchemaUri`]s and values stay [`AttributeTree`]s.
/// `serde_json::Map` only offers its map API for `Map<String, Value>`, so it
/// cannot hold either. A resource carries a handful of extensions at most, and
/// linear scans over a vector keep attachment order without another map crate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extensions {
    entries: Vec<(SchemaUri, AttributeTree)>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, uri: &str) -> Option<&AttributeTree> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_str() == uri)
            .map(|(_, tree)| tree)
    }

    pub fn get_mut(&mut self, uri: &str) -> Option<&mut AttributeTree> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key.as_str() == uri)
            .map(|(_, tree)| tree)
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.get(uri).is_some()
    }

    /// Attach or replace a payload. A replaced payload keeps its position.
    pub fn insert(&mut self, uri: SchemaUri, tree: AttributeTree) -> Option<AttributeTree> {
        match self.get_mut(uri.as_str()) {
            Some(existing) => Some(std::mem::replace(existing, tree)),
            None => {
                self.entries.push((uri, tree));
                None
            }
        }
    }

    pub fn remove(&mut self, uri: &str) -> Option<AttributeTree> {
        let index = self.entries.iter().position(|(key, _)| key.as_str() == uri)?;
        Some(self.entries.remove(index).1)
    }

    /// Extension URNs in attachment order.
    pub fn uris(&self) -> impl Iterator<Item = &SchemaUri> {
        self.entries.iter().map(|(uri, _)| uri)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SchemaUri, &AttributeTree)> {
        self.entries.iter().map(|(uri, tree)| (uri, tree))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Labeled set of resolved registry credentials

use std::collections::HashMap;

use crate::auth::Authorization;

/// Authorizations keyed by registry, tagged with where they came from
///
/// Callers use `source()` in diagnostics and check `has()` to decide whether
/// to fall back to another credential source for a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryCredentials {
    source: String,
    credentials: HashMap<String, Authorization>,
}

impl RegistryCredentials {
    pub fn new(source: impl Into<String>, credentials: HashMap<String, Authorization>) -> Self {
        Self {
            source: source.into(),
            credentials,
        }
    }

    /// Create a set with no credentials
    pub fn empty(source: impl Into<String>) -> Self {
        Self::new(source, HashMap::new())
    }

    /// Human-readable name of the credential source
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn entries(&self) -> &HashMap<String, Authorization> {
        &self.credentials
    }

    pub fn get(&self, registry: &str) -> Option<&Authorization> {
        self.credentials.get(registry)
    }

    pub fn has(&self, registry: &str) -> bool {
        self.credentials.contains_key(registry)
    }

    /// Registries that have credentials, in no particular order
    pub fn registries(&self) -> impl Iterator<Item = &str> {
        self.credentials.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn into_entries(self) -> HashMap<String, Authorization> {
        self.credentials
    }
}

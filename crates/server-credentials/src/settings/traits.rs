//! Core traits and types for server settings

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A configured server with its stored credentials
///
/// Either half of the credential may be missing from the user's settings.
/// Missing values read back as the empty string; no validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Server identifier (e.g., a registry hostname)
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ServerEntry {
    pub fn new(id: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Create an entry with no stored username or password
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: None,
            password: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Stored username, or `""` if none is set
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    /// Stored password, or `""` if none is set
    pub fn secret(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }
}

/// Read-only lookup of servers by identifier
///
/// The store is loaded once by the caller and never mutated afterwards,
/// so implementations must be safe to read from many threads at once.
///
/// # Example
///
/// ```
/// use server_credentials::settings::{MemoryServerSettings, ServerEntry, ServerSettings};
///
/// let settings = MemoryServerSettings::new()
///     .with_server(ServerEntry::new("registry.example.com", "bob", "s3cr3t"));
///
/// assert!(settings.contains("registry.example.com"));
/// assert!(settings.lookup("other.example.com").is_none());
/// ```
pub trait ServerSettings: Send + Sync {
    /// Look up the entry configured for `id`
    fn lookup(&self, id: &str) -> Option<ServerEntry>;

    /// Check if a server is configured
    fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }
}

impl ServerSettings for HashMap<String, ServerEntry> {
    fn lookup(&self, id: &str) -> Option<ServerEntry> {
        self.get(id).cloned()
    }

    fn contains(&self, id: &str) -> bool {
        self.contains_key(id)
    }
}

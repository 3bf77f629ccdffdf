//! In-memory server settings

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::traits::{ServerSettings, ServerEntry};

/// In-memory server settings keyed by server id
///
/// An external loader fills this in after reading the user's settings file.
/// Once built it is only read.
///
/// Serializes as `{ servers: [ { id, username, password } ] }`.
///
/// # Example
///
/// ```
/// use server_credentials::settings::{MemoryServerSettings, ServerEntry, ServerSettings};
///
/// let settings = MemoryServerSettings::with_servers(vec![
///     ServerEntry::new("ghcr.io", "octocat", "token"),
///     ServerEntry::new("quay.io", "robot", "secret"),
/// ]);
/// assert_eq!(settings.len(), 2);
/// assert_eq!(settings.lookup("quay.io").unwrap().username(), "robot");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryServerSettings {
    servers: HashMap<String, ServerEntry>,
}

impl MemoryServerSettings {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            servers: HashMap::new(),
        }
    }

    /// Create a store from a list of entries
    ///
    /// If two entries share an id the later one wins.
    pub fn with_servers(entries: impl IntoIterator<Item = ServerEntry>) -> Self {
        let servers = entries
            .into_iter()
            .map(|entry| (entry.id.clone(), entry))
            .collect();
        Self { servers }
    }

    /// Add a server, replacing any entry with the same id
    pub fn with_server(mut self, entry: ServerEntry) -> Self {
        self.servers.insert(entry.id.clone(), entry);
        self
    }

    /// Get the number of configured servers
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    /// Check if no servers are configured
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Get all configured server ids
    pub fn ids(&self) -> Vec<String> {
        self.servers.keys().cloned().collect()
    }
}

impl ServerSettings for MemoryServerSettings {
    fn lookup(&self, id: &str) -> Option<ServerEntry> {
        self.servers.get(id).cloned()
    }

    fn contains(&self, id: &str) -> bool {
        self.servers.contains_key(id)
    }
}

/// On-the-wire shape of the settings
#[derive(Serialize, Deserialize)]
struct SettingsDocument {
    #[serde(default)]
    servers: Vec<ServerEntry>,
}

impl Serialize for MemoryServerSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut servers: Vec<ServerEntry> = self.servers.values().cloned().collect();
        servers.sort_by(|a, b| a.id.cmp(&b.id));
        SettingsDocument { servers }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MemoryServerSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = SettingsDocument::deserialize(deserializer)?;
        Ok(Self::with_servers(document.servers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let settings = MemoryServerSettings::new();
        assert!(settings.is_empty());
        assert!(settings.lookup("docker.io").is_none());
        assert!(!settings.contains("docker.io"));
    }

    #[test]
    fn test_builder() {
        let settings = MemoryServerSettings::new()
            .with_server(ServerEntry::new("ghcr.io", "user", "pass"))
            .with_server(ServerEntry::new("docker.io", "hub", "hubpass"));

        assert_eq!(settings.len(), 2);
        assert_eq!(settings.lookup("docker.io").unwrap().secret(), "hubpass");

        let mut ids = settings.ids();
        ids.sort();
        assert_eq!(ids, vec!["docker.io".to_string(), "ghcr.io".to_string()]);
    }

    #[test]
    fn test_later_entry_replaces_earlier() {
        let settings = MemoryServerSettings::with_servers(vec![
            ServerEntry::new("ghcr.io", "first", "one"),
            ServerEntry::new("ghcr.io", "second", "two"),
        ]);

        assert_eq!(settings.len(), 1);
        assert_eq!(settings.lookup("ghcr.io").unwrap().username(), "second");
    }

    #[test]
    fn test_deserialize_yaml() {
        let yaml = r#"
servers:
  - id: registry.example.com
    username: bob
    password: s3cr3t
  - id: anonymous.example.com
"#;

        let settings: MemoryServerSettings = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(settings.len(), 2);
        let entry = settings.lookup("registry.example.com").unwrap();
        assert_eq!(entry.username(), "bob");
        assert_eq!(entry.secret(), "s3cr3t");

        let bare = settings.lookup("anonymous.example.com").unwrap();
        assert_eq!(bare, ServerEntry::bare("anonymous.example.com"));
    }

    #[test]
    fn test_deserialize_json_without_servers() {
        let settings: MemoryServerSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.is_empty());
    }

    #[test]
    fn test_serialize_json() {
        let settings = MemoryServerSettings::new()
            .with_server(ServerEntry::new("quay.io", "robot", "secret"))
            .with_server(ServerEntry::bare("ghcr.io"));

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "servers": [
                    { "id": "ghcr.io" },
                    { "id": "quay.io", "username": "robot", "password": "secret" }
                ]
            })
        );
    }
}

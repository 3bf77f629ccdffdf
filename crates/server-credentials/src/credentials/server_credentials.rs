//! Resolve registry credentials from server settings

use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::Authorization;
use crate::logging::{NoOpLogger, SharedLogger};
use crate::settings::ServerSettings;

use super::registry_credentials::RegistryCredentials;

/// Source label attached to every credential set this resolver produces
pub const CREDENTIAL_SOURCE: &str = "server settings";

/// Retrieves Basic credentials for registries configured in server settings
///
/// Lookups are by exact server id. Ids that are absent (`None`) or that have
/// no configured server are left out of the result; they are never an error,
/// so callers can fall back to other credential sources for them.
///
/// The resolver only borrows the settings and keeps no state between calls.
///
/// # Example
///
/// ```
/// use server_credentials::auth::Authorization;
/// use server_credentials::credentials::{ServerSettingsCredentials, CREDENTIAL_SOURCE};
/// use server_credentials::settings::{MemoryServerSettings, ServerEntry};
///
/// let settings = MemoryServerSettings::new()
///     .with_server(ServerEntry::new("registry.example.com", "bob", "s3cr3t"));
/// let resolver = ServerSettingsCredentials::new(&settings);
///
/// let credentials = resolver.retrieve([Some("registry.example.com"), Some("other.example.com"), None]);
///
/// assert_eq!(credentials.source(), CREDENTIAL_SOURCE);
/// assert_eq!(credentials.len(), 1);
/// assert_eq!(
///     credentials.get("registry.example.com"),
///     Some(&Authorization::basic("bob", "s3cr3t"))
/// );
/// ```
pub struct ServerSettingsCredentials<'a, S: ServerSettings + ?Sized> {
    settings: &'a S,
    logger: SharedLogger,
}

impl<'a, S: ServerSettings + ?Sized> ServerSettingsCredentials<'a, S> {
    pub fn new(settings: &'a S) -> Self {
        Self::with_logger(settings, Arc::new(NoOpLogger::new()))
    }

    pub fn with_logger(settings: &'a S, logger: SharedLogger) -> Self {
        Self { settings, logger }
    }

    /// Retrieve credentials for each server that has settings
    ///
    /// Duplicate ids collapse into a single entry.
    pub fn retrieve<I, T>(&self, servers: I) -> RegistryCredentials
    where
        I: IntoIterator<Item = Option<T>>,
        T: AsRef<str>,
    {
        let servers = servers.into_iter();
        let mut credentials = HashMap::with_capacity(servers.size_hint().0);

        for server in servers.flatten() {
            let server = server.as_ref();
            if let Some(authorization) = self.lookup_authorization(server) {
                credentials.insert(server.to_string(), authorization);
            }
        }

        RegistryCredentials::new(CREDENTIAL_SOURCE, credentials)
    }

    /// Same as `retrieve`, for callers that only hold known ids
    pub fn retrieve_servers(&self, servers: &[&str]) -> RegistryCredentials {
        self.retrieve(servers.iter().copied().map(Some))
    }

    fn lookup_authorization(&self, server: &str) -> Option<Authorization> {
        match self.settings.lookup(server) {
            Some(entry) => {
                self.logger.debug(&format!(
                    "Using credentials from {} for {}",
                    CREDENTIAL_SOURCE, server
                ));
                Some(Authorization::basic(entry.username(), entry.secret()))
            }
            None => {
                self.logger
                    .debug(&format!("No {} configured for {}", CREDENTIAL_SOURCE, server));
                None
            }
        }
    }
}

impl<S: ServerSettings + ?Sized> std::fmt::Debug for ServerSettingsCredentials<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerSettingsCredentials")
            .field("source", &CREDENTIAL_SOURCE)
            .finish()
    }
}

//! Server Credentials
//!
//! Resolves per-registry Basic credentials from the user's server settings.
//! A build tool loads the settings once, then asks for credentials for the
//! registries it is about to talk to:
//!
//! ```rust
//! use server_credentials::{MemoryServerSettings, ServerEntry, ServerSettingsCredentials};
//!
//! let settings = MemoryServerSettings::new()
//!     .with_server(ServerEntry::new("ghcr.io", "octocat", "ghp_token"));
//!
//! let credentials = ServerSettingsCredentials::new(&settings)
//!     .retrieve_servers(&["ghcr.io", "docker.io"]);
//!
//! // docker.io has no settings, so the caller falls back elsewhere for it
//! assert!(credentials.has("ghcr.io"));
//! assert!(!credentials.has("docker.io"));
//! ```

pub mod auth;
pub mod credentials;
pub mod logging;
pub mod settings;

// Re-export commonly used types
pub use auth::{Authorization, AuthScheme, AuthError, AuthResult};

pub use credentials::{RegistryCredentials, ServerSettingsCredentials, CREDENTIAL_SOURCE};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger};

pub use settings::{ServerSettings, ServerEntry, MemoryServerSettings};

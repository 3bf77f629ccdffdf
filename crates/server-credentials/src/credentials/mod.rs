//! Credential resolution against server settings
//!
//! - `RegistryCredentials`: the labeled result of one resolution
//! - `ServerSettingsCredentials`: resolves registry ids to authorizations

mod registry_credentials;
mod server_credentials;

pub use registry_credentials::RegistryCredentials;
pub use server_credentials::{ServerSettingsCredentials, CREDENTIAL_SOURCE};

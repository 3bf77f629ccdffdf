//! Server settings abstractions
//!
//! This module provides the read-only store that credentials are resolved from:
//! - `ServerSettings` trait implemented by anything that can look up a server by id
//! - `ServerEntry` holding the stored username and password for one server
//! - `MemoryServerSettings`, an in-memory store populated by the caller's loader

mod traits;
mod memory_store;

pub use traits::{ServerSettings, ServerEntry};
pub use memory_store::MemoryServerSettings;

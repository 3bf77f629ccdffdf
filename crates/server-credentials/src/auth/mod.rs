//! Registry authorization values
//!
//! An `Authorization` is the immutable credential a caller attaches to an
//! authenticated registry request, rendered as an HTTP `Authorization` header value.

mod error;
mod authorization;

pub use error::{AuthError, AuthResult};
pub use authorization::{Authorization, AuthScheme};

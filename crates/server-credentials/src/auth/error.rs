//! Authorization error types

use thiserror::Error;

/// Errors that can occur when parsing or decoding an authorization
#[derive(Error, Debug)]
pub enum AuthError {
    /// Header value used a scheme other than Basic or Bearer
    #[error("Unknown authorization scheme: {0}")]
    UnknownScheme(String),

    /// Header value had a scheme but no token
    #[error("Authorization has no token")]
    MissingToken,

    /// Tried to decode credentials from a non-Basic authorization
    #[error("Expected Basic authorization, found {0}")]
    NotBasic(String),

    #[error("Invalid base64 token: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Token is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Decoded Basic token had no `:` between username and password
    #[error("Basic token is missing the ':' separator")]
    MissingSeparator,
}

pub type AuthResult<T> = Result<T, AuthError>;

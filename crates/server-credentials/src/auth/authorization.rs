//! Basic and bearer authorization values

use std::fmt;
use std::str::FromStr;

use base64::Engine;

use super::error::{AuthError, AuthResult};

/// Authentication scheme of an authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthScheme {
    Basic,
    Bearer,
}

impl AuthScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthScheme::Basic => "Basic",
            AuthScheme::Bearer => "Bearer",
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthScheme {
    type Err = AuthError;

    /// Scheme names are case-insensitive
    fn from_str(s: &str) -> AuthResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(AuthScheme::Basic),
            "bearer" => Ok(AuthScheme::Bearer),
            _ => Err(AuthError::UnknownScheme(s.to_string())),
        }
    }
}

/// An immutable registry credential
///
/// Values are never modified after construction and can be shared freely
/// between threads. `Debug` output hides the token.
///
/// # Example
///
/// ```
/// use server_credentials::auth::{Authorization, AuthScheme};
///
/// let auth = Authorization::basic("bob", "s3cr3t");
/// assert_eq!(auth.scheme(), AuthScheme::Basic);
/// assert_eq!(auth.to_string(), "Basic Ym9iOnMzY3IzdA==");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Authorization {
    scheme: AuthScheme,
    token: String,
}

impl Authorization {
    /// Create a Basic authorization from a username and password
    ///
    /// The pair is encoded as standard base64 of `username:password`.
    /// Empty values are accepted as-is.
    pub fn basic(username: &str, password: &str) -> Self {
        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", username, password));
        Self {
            scheme: AuthScheme::Basic,
            token,
        }
    }

    /// Create a Basic authorization from an already-encoded token
    pub fn from_basic_token(token: impl Into<String>) -> Self {
        Self {
            scheme: AuthScheme::Basic,
            token: token.into(),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            scheme: AuthScheme::Bearer,
            token: token.into(),
        }
    }

    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Decode a Basic authorization back into `(username, password)`
    ///
    /// The password may itself contain `:`; only the first one separates.
    pub fn basic_credentials(&self) -> AuthResult<(String, String)> {
        if self.scheme != AuthScheme::Basic {
            return Err(AuthError::NotBasic(self.scheme.to_string()));
        }

        let decoded = base64::engine::general_purpose::STANDARD.decode(&self.token)?;
        let decoded = String::from_utf8(decoded)?;

        decoded
            .split_once(':')
            .map(|(username, password)| (username.to_string(), password.to_string()))
            .ok_or(AuthError::MissingSeparator)
    }
}

impl fmt::Display for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.scheme, self.token)
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("scheme", &self.scheme)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl FromStr for Authorization {
    type Err = AuthError;

    /// Parse an HTTP `Authorization` header value such as `Basic dXNlcjpwYXNz`
    fn from_str(s: &str) -> AuthResult<Self> {
        let s = s.trim();
        let (scheme, token) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let scheme: AuthScheme = scheme.parse()?;

        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        Ok(Self {
            scheme,
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_encoding() {
        // "username:password" in base64
        let auth = Authorization::basic("username", "password");
        assert_eq!(auth.scheme(), AuthScheme::Basic);
        assert_eq!(auth.token(), "dXNlcm5hbWU6cGFzc3dvcmQ=");
        assert_eq!(auth.to_string(), "Basic dXNlcm5hbWU6cGFzc3dvcmQ=");
    }

    #[test]
    fn test_basic_accepts_empty_values() {
        let auth = Authorization::basic("", "");
        // ":" in base64
        assert_eq!(auth.token(), "Og==");

        let (username, password) = auth.basic_credentials().unwrap();
        assert_eq!(username, "");
        assert_eq!(password, "");
    }

    #[test]
    fn test_basic_credentials_roundtrip_with_colon_in_password() {
        let auth = Authorization::basic("bob", "pa:ss:word");
        let (username, password) = auth.basic_credentials().unwrap();
        assert_eq!(username, "bob");
        assert_eq!(password, "pa:ss:word");
    }

    #[test]
    fn test_from_basic_token_equals_basic() {
        assert_eq!(
            Authorization::from_basic_token("Ym9iOnMzY3IzdA=="),
            Authorization::basic("bob", "s3cr3t")
        );
    }

    #[test]
    fn test_bearer() {
        let auth = Authorization::bearer("abc.def");
        assert_eq!(auth.scheme(), AuthScheme::Bearer);
        assert_eq!(auth.to_string(), "Bearer abc.def");
        assert!(matches!(auth.basic_credentials(), Err(AuthError::NotBasic(_))));
    }

    #[test]
    fn test_parse_header() {
        let auth: Authorization = "Basic Ym9iOnMzY3IzdA==".parse().unwrap();
        assert_eq!(auth, Authorization::basic("bob", "s3cr3t"));

        let auth: Authorization = "  bearer   token123 ".parse().unwrap();
        assert_eq!(auth, Authorization::bearer("token123"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "Digest abc".parse::<Authorization>(),
            Err(AuthError::UnknownScheme(s)) if s == "Digest"
        ));
        assert!(matches!("Basic".parse::<Authorization>(), Err(AuthError::MissingToken)));
        assert!(matches!("Basic   ".parse::<Authorization>(), Err(AuthError::MissingToken)));
    }

    #[test]
    fn test_decode_errors() {
        let bad_base64 = Authorization::from_basic_token("not base64!");
        assert!(matches!(bad_base64.basic_credentials(), Err(AuthError::Decode(_))));

        // "nocolon" in base64
        let no_separator = Authorization::from_basic_token("bm9jb2xvbg==");
        assert!(matches!(
            no_separator.basic_credentials(),
            Err(AuthError::MissingSeparator)
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let auth = Authorization::basic("bob", "s3cr3t");
        let debug = format!("{:?}", auth);
        assert!(debug.contains("Basic"));
        assert!(!debug.contains(auth.token()));
    }

    #[test]
    fn test_authorization_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Authorization>();
    }
}

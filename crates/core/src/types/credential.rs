//! Bearer credential type.
//!
//! The token is opaque to the front end: it is never decoded or verified,
//! only stored in the cookie jar and echoed back in `Authorization` headers.

use secrecy::{ExposeSecret, SecretString};

/// Bearer access token issued by `POST /auth/login`.
///
/// Wraps a [`SecretString`] so the value never appears in `Debug` output
/// or logs.
#[derive(Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    /// Wrap a raw token.
    ///
    /// Returns `None` for an empty (or whitespace-only) token, which the
    /// cookie jar produces for a cleared `token=` entry.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(SecretString::from(token)))
        }
    }

    /// Get the raw token for use in a request header or cookie.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

impl PartialEq for AccessToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for AccessToken {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_absent() {
        assert!(AccessToken::new("").is_none());
        assert!(AccessToken::new("  ").is_none());
    }

    #[test]
    fn test_expose_returns_raw_value() {
        let token = AccessToken::new("abc123").unwrap();
        assert_eq!(token.expose(), "abc123");
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = AccessToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}

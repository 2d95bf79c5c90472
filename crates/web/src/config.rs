//! Front end configuration.
//!
//! The browser has no process environment, so values are captured from the
//! build environment with `option_env!` when the wasm bundle is compiled.
//!
//! # Build Environment Variables
//!
//! ## Optional
//! - `HBNB_API_BASE_URL` - Base URL of the API (default: `http://127.0.0.1:5000/api/v1`)
//! - `HBNB_LOG_LEVEL` - Maximum console log level (default: `info`)

use thiserror::Error;
use url::Url;

/// Default API base used in local development.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api/v1";

/// Cookie key holding the bearer credential.
pub const TOKEN_COOKIE: &str = "token";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API base URL {0}: {1}")]
    InvalidApiBase(String, String),
    #[error("Unsupported API base URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Front end configuration shared by every component on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// API base, e.g. `http://127.0.0.1:5000/api/v1`
    pub api_base: Url,
    /// Cookie key of the bearer credential
    pub token_cookie: String,
    /// Page opened after a successful login
    pub landing_page: String,
    /// Page unauthenticated visitors are sent to
    pub login_page: String,
    /// Listing detail page, linked from every card
    pub detail_page: String,
    /// Maximum level forwarded to the browser console
    pub log_level: tracing::Level,
}

impl WebConfig {
    /// Load configuration captured from the build environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `HBNB_API_BASE_URL` is not an http(s) URL or
    /// `HBNB_LOG_LEVEL` is not a tracing level.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let mut config =
            Self::with_api_base(option_env!("HBNB_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))?;

        if let Some(level) = option_env!("HBNB_LOG_LEVEL") {
            config.log_level = level
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?;
        }

        Ok(config)
    }

    /// Build a configuration for the given API base with default page paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `api_base` does not parse or is not http(s).
    pub fn with_api_base(api_base: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: parse_api_base(api_base)?,
            token_cookie: TOKEN_COOKIE.to_string(),
            landing_page: "index.html".to_string(),
            login_page: "login.html".to_string(),
            detail_page: "place.html".to_string(),
            log_level: tracing::Level::INFO,
        })
    }
}

fn parse_api_base(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidApiBase(raw.to_string(), e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WebConfig::with_api_base(DEFAULT_API_BASE_URL).unwrap();
        assert_eq!(config.api_base.as_str(), "http://127.0.0.1:5000/api/v1");
        assert_eq!(config.token_cookie, "token");
        assert_eq!(config.landing_page, "index.html");
        assert_eq!(config.login_page, "login.html");
        assert_eq!(config.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_invalid_api_base() {
        assert!(matches!(
            WebConfig::with_api_base("not a url"),
            Err(ConfigError::InvalidApiBase(..))
        ));
    }

    #[test]
    fn test_unsupported_scheme() {
        assert_eq!(
            WebConfig::with_api_base("ftp://example.com/api"),
            Err(ConfigError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn test_from_build_env_without_overrides() {
        // No HBNB_* variables are set for the test build.
        if option_env!("HBNB_API_BASE_URL").is_none() {
            let config = WebConfig::from_build_env().unwrap();
            assert_eq!(config.api_base.as_str(), DEFAULT_API_BASE_URL);
        }
    }
}

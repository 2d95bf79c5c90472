//! Unified error handling.
//!
//! Components return `Result<T, AppError>`; the boot layer and the event
//! handlers log errors with `tracing` instead of surfacing them, since the
//! page has no error surface beyond the forms' own message elements.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::views::ViewError;

/// Application-level error type for the front end.
#[derive(Debug, Error)]
pub enum AppError {
    /// API call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Rendering failed.
    #[error("View error: {0}")]
    View(#[from] ViewError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The page lacks something the operation needs.
    #[error("Missing page input: {0}")]
    MissingInput(&'static str),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        });
        assert_eq!(err.to_string(), "API error: boom");

        let err = AppError::MissingInput("id query parameter");
        assert_eq!(err.to_string(), "Missing page input: id query parameter");
    }

    #[test]
    fn test_config_error_conversion() {
        let err = AppError::from(ConfigError::UnsupportedScheme("ftp".to_string()));
        assert!(matches!(err, AppError::Config(_)));
    }
}

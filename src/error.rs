//! Centralized error types for schedview.
//!
//! This module provides a unified error hierarchy with user-friendly
//! messages. All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::api::error::ApiError;
use crate::config::ConfigError;

/// Message shown in place of the table when it cannot be loaded.
///
/// Every kind of load failure collapses to this one message; the underlying
/// error is only logged.
pub const LOAD_ERROR_MESSAGE: &str =
    "Could not load the schedule. Press 'r' to reload and try again.";

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Errors loading the schedule table.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Pass --config explicitly."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Check that it is readable.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Api(ApiError::InvalidUrl(msg)) => {
                format!("Invalid schedule endpoint: {}", msg)
            }
            AppError::Api(_) => LOAD_ERROR_MESSAGE.to_string(),
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::NoConfigDir.into();
        assert!(matches!(app_err, AppError::Config(ConfigError::NoConfigDir)));
    }

    #[test]
    fn test_app_error_from_api_error() {
        let app_err: AppError = ApiError::InvalidResponse("x".to_string()).into();
        assert!(matches!(app_err, AppError::Api(ApiError::InvalidResponse(_))));
    }

    #[test]
    fn test_all_api_errors_share_one_message() {
        let errors = [
            AppError::Api(ApiError::from_status(StatusCode::NOT_FOUND, "/horarios")),
            AppError::Api(ApiError::InvalidResponse("bad json".to_string())),
        ];
        for err in &errors {
            assert_eq!(err.user_message(), LOAD_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_user_message_invalid_endpoint() {
        let err = AppError::Api(ApiError::InvalidUrl("ftp://host".to_string()));
        assert_eq!(err.user_message(), "Invalid schedule endpoint: ftp://host");
    }

    #[test]
    fn test_user_message_config_validation() {
        let err = AppError::Config(ConfigError::ValidationError(
            "narrow_width must be greater than zero".to_string(),
        ));
        assert!(err.user_message().contains("narrow_width"));
    }

    #[test]
    fn test_terminal_error() {
        let err = AppError::terminal("raw mode");
        assert_eq!(err.user_message(), "Terminal error: raw mode");
        assert_eq!(err.to_string(), "Terminal error: raw mode");
    }
}

//! Error types and handling for the `LodgeDesk` back office

use thiserror::Error;

/// Main error type for the `LodgeDesk` application
#[derive(Error, Debug)]
pub enum LodgeDeskError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Errors talking to external rate providers
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Cache operation errors
    #[error("Cache error: {message}")]
    Cache { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl LodgeDeskError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            LodgeDeskError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            LodgeDeskError::Api { .. } => {
                "Unable to reach the exchange-rate service. Cached rates will be used."
                    .to_string()
            }
            LodgeDeskError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            LodgeDeskError::Cache { .. } => {
                "Cache operation failed. You may need to clear your cache.".to_string()
            }
            LodgeDeskError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            LodgeDeskError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = LodgeDeskError::config("missing base currency");
        assert!(matches!(config_err, LodgeDeskError::Config { .. }));

        let api_err = LodgeDeskError::api("connection refused");
        assert!(matches!(api_err, LodgeDeskError::Api { .. }));

        let validation_err = LodgeDeskError::validation("check-out before check-in");
        assert!(matches!(validation_err, LodgeDeskError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = LodgeDeskError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let api_err = LodgeDeskError::api("test");
        assert!(api_err.user_message().contains("exchange-rate"));

        let validation_err = LodgeDeskError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let desk_err: LodgeDeskError = io_err.into();
        assert!(matches!(desk_err, LodgeDeskError::Io { .. }));
    }
}

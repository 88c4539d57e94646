//! Error types for the `RaceMeteo` library

use thiserror::Error;

/// Main error type for the `RaceMeteo` library
#[derive(Error, Debug)]
pub enum RaceMeteoError {
    /// Race date could not be parsed at the advisory boundary
    #[error("Invalid race date: {input}")]
    InvalidDate { input: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl RaceMeteoError {
    /// Create a new invalid-date error
    pub fn invalid_date<S: Into<String>>(input: S) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            RaceMeteoError::InvalidDate { input } => {
                format!("Unrecognized race date \"{input}\". Use the YYYY-MM-DD format.")
            }
            RaceMeteoError::Config { .. } => {
                "Configuration error. Please check your config file and environment overrides."
                    .to_string()
            }
        }
    }
}

//! Centralized error types for SunPanel.
//!
//! Page-level absences (missing elements, missing weather data) are not
//! errors and never reach this module. What remains are the fallible
//! ambient operations: loading configuration and reading weather reports.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a message suitable for display.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather report error: {0}")]
    Report(#[from] ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Report(e) => e.user_message(),
            AppError::Io(_) => "Weather data could not be read from the given file or stdin.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::UnknownTimezone(_) => {
                "Display timezone is not recognised. Check your settings."
            }
        }
    }
}

/// Errors reading a weather report handed to the presentation layer.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Malformed report: {0}")]
    Malformed(String),

    #[error("Report is empty")]
    Empty,

    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
}

impl ReportError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ReportError::Malformed(_) => "Weather data could not be read.",
            ReportError::Empty => "No weather data was provided.",
            ReportError::TimestampOutOfRange(_) => "Weather data contains an invalid time.",
        }
    }
}

//! Error types for paged-render
//!
//! This module defines the error hierarchy for the whole crate.
//! Pagination and link building are total and never produce an error;
//! only the encoders and the strict request constructors do.

use thiserror::Error;

/// The main error type for paged-render
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// A config field holds a value the pipeline cannot use
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue {
        /// Offending field
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// Config file is not valid YAML
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Config file is not valid JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Request Errors
    // ============================================================================
    /// Page request values rejected by the strict constructor
    #[error("Invalid pagination input: {message}")]
    PaginationInput {
        /// What is wrong with the input
        message: String,
    },

    /// Request URI could not be parsed as an absolute URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Encoding Errors
    // ============================================================================
    /// An encoder could not render the payload
    #[error("Error while encoding format {format}: {message}")]
    Encoding {
        /// Format token of the failing encoder
        format: String,
        /// Encoder failure
        message: String,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Error with added context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a pagination input error
    pub fn pagination_input(message: impl Into<String>) -> Self {
        Self::PaginationInput {
            message: message.into(),
        }
    }

    /// Create an encoding error for the given format
    pub fn encoding(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Encoding {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Check if this error came from an encoder
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::Encoding { .. })
    }

    /// Check if this error was caused by the client's request
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::PaginationInput { .. } | Error::InvalidUrl(_))
    }
}

/// Result type alias for paged-render
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

//! Error types for stuntcheck
//!
//! `GrowthError` covers everything that ends the process. `NarrativeError`
//! covers the generative collaborator and is always recovered by falling
//! back to templates.

use serde::Serialize;
use thiserror::Error;

/// Fatal errors raised while screening a child
#[derive(Error, Debug)]
pub enum GrowthError {
    /// The narrative collaborator could not be configured
    #[error("Failed to initialize narrative service: {0}")]
    Initialization(String),

    /// Wrong argument count or an unparsable field
    #[error("Invalid arguments: {0}")]
    Argument(String),

    /// Physically impossible measurements
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Stable, machine-readable error category emitted next to the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Initialization,
    Argument,
    InvalidInput,
    Config,
    Internal,
}

impl GrowthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GrowthError::Initialization(_) => ErrorKind::Initialization,
            GrowthError::Argument(_) => ErrorKind::Argument,
            GrowthError::InvalidInput(_) => ErrorKind::InvalidInput,
            GrowthError::Config(_) => ErrorKind::Config,
            GrowthError::Serialization(_) | GrowthError::Io(_) => ErrorKind::Internal,
        }
    }
}

/// Failures of the generative collaborator
#[derive(Error, Debug)]
pub enum NarrativeError {
    /// Transport failures (DNS, connect, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Generative API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Service answered with no usable text
    #[error("Empty response from generative service")]
    EmptyResponse,

    /// Generated recommendation list was too short to use
    #[error("Expected at least {required} recommendations, got {found}")]
    TooFewRecommendations { found: usize, required: usize },

    /// No generator configured (offline mode)
    #[error("Generative service disabled")]
    Disabled,
}

/// Result type alias for screening operations
pub type Result<T> = std::result::Result<T, GrowthError>;

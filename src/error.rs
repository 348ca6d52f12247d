//! Error types for catalog, configuration, and prompt operations.

use thiserror::Error;

/// Errors raised while resolving or fetching prompt text.
///
/// The `UnknownAgent` and `HttpStatus` display strings are part of the
/// loader contract; tests match on them verbatim.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Agent identifier absent from the closed category mapping.
    #[error("Unknown agent ID: {0}")]
    UnknownAgent(String),

    /// Remote returned a non-success status for the prompt file.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// Transport failure before any status was available.
    #[error("Request failed: {0}")]
    Request(String),
}

/// Unified error for directory operations (config, catalog, CLI).
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for DirectoryError {
    fn from(err: config::ConfigError) -> Self {
        DirectoryError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::Serialization(err.to_string())
    }
}

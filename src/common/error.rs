//! Error types for the harness
//!
//! Setup errors (configuration, login) are fatal and abort the run.
//! Assertion failures are carried inside step outcomes by the runner
//! and never surface as this error type during a suite run.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Authentication Errors ===
    #[error("Login failed with status {status}: {body}")]
    LoginFailed { status: u16, body: String },

    #[error("Login succeeded but the access token was empty or missing")]
    EmptyToken,

    #[error("Token is not a valid header value: {0}")]
    InvalidToken(String),

    // === Transport Errors ===
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // === Scenario Errors ===
    #[error("Failed to parse scenario: {0}")]
    ScenarioParse(String),

    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error("No idea identifier captured by an earlier list step")]
    MissingCapturedId,

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a login failure error from a response status and body
    pub fn login_failed(status: reqwest::StatusCode, body: impl Into<String>) -> Self {
        Self::LoginFailed {
            status: status.as_u16(),
            body: body.into(),
        }
    }
}

//! Error types for the paper-tools application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Input tree errors
    #[error("Papers directory not found: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("Rename failed for '{}': {message}", .path.display())]
    Rename { path: PathBuf, message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const MISSING_ROOT: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const UNEXPECTED_ERROR: i32 = 3;
}

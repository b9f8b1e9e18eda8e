//! Error types for kasiski.
//!
//! The cracking pipeline itself never fails. Errors only come from the
//! layers around it: reading config, reading message batches and writing
//! reports.

use std::fmt;

/// Central error type for kasiski operations.
#[derive(Debug)]
pub enum KasiskiError {
    /// I/O errors (file operations, stdin/stdout).
    Io(std::io::Error),
    /// Configuration errors (parsing, invalid values).
    Config(String),
    /// Serialization/deserialization errors (TOML, JSON).
    Serialization(String),
}

impl fmt::Display for KasiskiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KasiskiError::Io(e) => write!(f, "I/O error: {}", e),
            KasiskiError::Config(msg) => write!(f, "Configuration error: {}", msg),
            KasiskiError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for KasiskiError {}

impl From<std::io::Error> for KasiskiError {
    fn from(e: std::io::Error) -> Self {
        KasiskiError::Io(e)
    }
}

impl From<toml::de::Error> for KasiskiError {
    fn from(e: toml::de::Error) -> Self {
        KasiskiError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for KasiskiError {
    fn from(e: serde_json::Error) -> Self {
        KasiskiError::Serialization(e.to_string())
    }
}

//! Error types for declaration generation.
//!
//! Generation itself is total over a valid configuration; every variant here
//! describes a configuration or I/O problem detected before output is written.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Maximum arity outside the window a family supports
    #[error(
        "invalid maximum overload arity {value} for family '{family}': expected a value in {min}..={max}"
    )]
    InvalidArity {
        value: i64,
        family: String,
        min: usize,
        max: usize,
    },

    /// Requested family is not configured
    #[error("unknown overload family '{0}'")]
    UnknownFamily(String),

    /// Nothing to generate
    #[error("no overload families selected")]
    NoFamilies,

    /// Family definition that cannot be generated
    #[error("invalid overload family '{family}': {message}")]
    InvalidFamily { family: String, message: String },

    /// Configuration file could not be parsed
    #[error("configuration error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_family(family: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFamily {
            family: family.into(),
            message: message.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

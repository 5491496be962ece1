//! Error types for clasificar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for clasificar operations.
///
/// Covers dimension mismatches between fitted components, invalid
/// hyperparameters, and artifact I/O failures.
///
/// # Examples
///
/// ```
/// use clasificar::error::ClasificarError;
///
/// let err = ClasificarError::DimensionMismatch {
///     expected: "10 features".to_string(),
///     actual: "12 features".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum ClasificarError {
    /// Vector length disagrees with the fitted feature space or class count.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Model artifact serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for ClasificarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClasificarError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            ClasificarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "invalid hyperparameter {param}={value}: must satisfy {constraint}"
                )
            }
            ClasificarError::Io(err) => write!(f, "I/O error: {err}"),
            ClasificarError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            ClasificarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ClasificarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClasificarError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClasificarError {
    fn from(err: std::io::Error) -> Self {
        ClasificarError::Io(err)
    }
}

impl From<serde_json::Error> for ClasificarError {
    fn from(err: serde_json::Error) -> Self {
        ClasificarError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for ClasificarError {
    fn from(err: serde_yaml::Error) -> Self {
        ClasificarError::Serialization(err.to_string())
    }
}

impl From<String> for ClasificarError {
    fn from(msg: String) -> Self {
        ClasificarError::Other(msg)
    }
}

impl From<&str> for ClasificarError {
    fn from(msg: &str) -> Self {
        ClasificarError::Other(msg.to_string())
    }
}

/// Result type alias for clasificar operations.
pub type Result<T> = std::result::Result<T, ClasificarError>;

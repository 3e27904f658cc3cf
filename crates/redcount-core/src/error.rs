//! Shared error type across redcount crates.

use thiserror::Error;

/// Error kinds as reported to metrics and logs (stable labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Store unreachable or returned a failure.
    Store,
    /// A stored value failed to parse.
    Malformed,
    /// Startup configuration could not be used.
    Config,
    /// Internal server error.
    Internal,
}

impl ErrorKind {
    /// String representation used in metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Store => "store",
            ErrorKind::Malformed => "malformed",
            ErrorKind::Config => "config",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RedcountError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum RedcountError {
    #[error("store error: {0}")]
    Store(String),
    #[error("malformed value for key {key:?}: {reason}")]
    Malformed { key: &'static str, reason: String },
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl RedcountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RedcountError::Store(_) => ErrorKind::Store,
            RedcountError::Malformed { .. } => ErrorKind::Malformed,
            RedcountError::Config(_) => ErrorKind::Config,
            RedcountError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub(crate) fn malformed(key: &'static str, reason: impl ToString) -> Self {
        RedcountError::Malformed {
            key,
            reason: reason.to_string(),
        }
    }
}

use thiserror::Error;

use crate::schema::MISSING_TABLE_CODE;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Structured error reported by PostgREST. Fields are preserved
    /// verbatim so callers can surface them as diagnostics.
    #[error("{message}")]
    Api {
        message: String,
        code: Option<String>,
        details: Option<String>,
        hint: Option<String>,
    },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Store request timed out: {0}")]
    Timeout(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl StoreError {
    /// Machine-readable PostgREST error code, when the store reported one.
    pub fn code(&self) -> Option<&str> {
        match self {
            StoreError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn details(&self) -> Option<&str> {
        match self {
            StoreError::Api { details, .. } => details.as_deref(),
            _ => None,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            StoreError::Api { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Check if the store reported the todo table as missing.
    pub fn is_missing_table(&self) -> bool {
        self.code() == Some(MISSING_TABLE_CODE)
    }

    /// Check if this is a network-related error
    pub fn is_network_error(&self) -> bool {
        matches!(self, StoreError::Network(_) | StoreError::Timeout(_))
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            StoreError::Timeout(err.to_string())
        } else {
            StoreError::Network(err.to_string())
        }
    }
}

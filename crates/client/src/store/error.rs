//! Record store client error types.

use std::sync::Arc;

/// Errors from the record store client.
///
/// All of these are recoverable from the orchestrator's point of view: a
/// failed read forces the refetch path, a failed write is logged and
/// swallowed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to construct the underlying HTTP client.
    #[error("failed to build store client: {0}")]
    Build(String),

    /// Request timeout; treated identically to a connection error.
    #[error("store request timeout")]
    Timeout,

    /// Connection-level failure.
    #[error("store network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Unexpected status from the store (404 is not an error, see read()).
    #[error("store HTTP error: {status}")]
    Http { status: u16 },

    /// Response body did not match the store wire shape.
    #[error("store response parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { StoreError::Timeout } else { StoreError::Network(Arc::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Http { status: 500 };
        assert!(err.to_string().contains("500"));

        let err = StoreError::Timeout;
        assert!(err.to_string().contains("timeout"));
    }
}

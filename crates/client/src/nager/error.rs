//! Upstream provider client error types.

use std::sync::Arc;

/// Errors from the upstream holiday provider client.
///
/// Unlike store errors, these are fatal to a request once the refetch path
/// has been taken: there is no other source of truth.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Failed to construct the underlying HTTP client.
    #[error("failed to build provider client: {0}")]
    Build(String),

    /// Request timeout; treated identically to a connection error.
    #[error("upstream request timeout")]
    Timeout,

    /// Connection-level failure.
    #[error("upstream network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Non-success status from the provider.
    #[error("upstream HTTP error: {status}")]
    Http { status: u16 },

    /// Response body was not a holiday list.
    #[error("upstream response parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { ProviderError::Timeout } else { ProviderError::Network(Arc::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::Http { status: 404 };
        assert!(err.to_string().contains("404"));

        let err = ProviderError::Parse("expected array".into());
        assert!(err.to_string().contains("expected array"));
    }
}

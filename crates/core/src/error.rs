//! Service-level error type.
//!
//! Only failures that are allowed to reach the caller live here. Store
//! failures are downgraded to the refetch path inside the orchestrator and
//! never surface; malformed raw records are dropped by the normalizer.

/// User-visible failures of the holiday lookup service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or unsupported request parameter. No downstream calls were made.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The authoritative upstream source failed or timed out. Without it
    /// there is no data to serve, so this is surfaced rather than absorbed.
    #[error("upstream holiday source unavailable: {0}")]
    UpstreamUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Validation("unsupported country code: XX".into());
        assert!(err.to_string().contains("invalid request"));
        assert!(err.to_string().contains("XX"));

        let err = Error::UpstreamUnavailable("status 502".into());
        assert!(err.to_string().contains("unavailable"));
    }
}

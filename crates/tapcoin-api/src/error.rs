//! Error types for the exchange layer.

/// Errors that can occur during a backend exchange.
///
/// Two failure families matter to callers: the request never completed
/// (`Transport`, `Decode`) versus the backend understood the request and
/// said no (`Rejected`). Only `Rejected` carries text meant for the user.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response: connection refused,
    /// DNS failure, invalid client configuration, and the like.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered 2xx but the body didn't match the expected
    /// shape. Usually a version skew between client and backend.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend rejected the request with a non-2xx status.
    ///
    /// `message` is the backend's `{error}` body when it sent one, or a
    /// status-derived placeholder when it didn't. This is the only error
    /// text ever shown to the user verbatim.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl ApiError {
    /// Builds a `Rejected` from a status code and a raw response body,
    /// preferring the backend's structured `{error}` text.
    pub(crate) fn rejected(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<tapcoin_protocol::ErrorBody>(
            body,
        )
        .map(|b| b.error)
        .unwrap_or_else(|_| format!("request failed with status {status}"));
        Self::Rejected { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_backend_error_text() {
        let err = ApiError::rejected(400, br#"{"error": "Insufficient balance"}"#);
        assert_eq!(err.to_string(), "Insufficient balance");
        assert!(matches!(err, ApiError::Rejected { status: 400, .. }));
    }

    #[test]
    fn test_rejected_falls_back_on_undecodable_body() {
        let err = ApiError::rejected(502, b"<html>bad gateway</html>");
        assert_eq!(err.to_string(), "request failed with status 502");
    }

    #[test]
    fn test_rejected_falls_back_on_empty_body() {
        let err = ApiError::rejected(500, b"");
        assert_eq!(err.to_string(), "request failed with status 500");
    }
}

//! Error types for the quote exchange.

use thiserror::Error;

/// Outcome of a failed premium request, tagged by where it failed.
///
/// The display text is exactly what the client renders, so server-supplied
/// messages pass through verbatim and the fallback variants keep the status
/// code or transport detail visible.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The daemon answered non-2xx with a parseable `{error}` body.
    #[error("{0}")]
    Backend(String),

    /// Non-2xx reply without a usable error body.
    #[error("HTTP error: status {0}")]
    Status(u16),

    /// The request never completed (connect failure, DNS, reset).
    #[error("network error: {0}")]
    Transport(String),

    /// 2xx reply whose body did not match the premium contract.
    #[error("invalid response body: {0}")]
    Body(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_passes_through_verbatim() {
        let err = QuoteError::Backend("bad trip data".to_string());
        assert_eq!(err.to_string(), "bad trip data");
    }

    #[test]
    fn test_status_fallback_contains_code() {
        let err = QuoteError::Status(502);
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_transport_keeps_underlying_text() {
        let err = QuoteError::Transport("tcp connect error: Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }
}

//! Error types for the stream aggregator
//!
//! Provides a single error enum covering HTTP transport, status, and
//! HTML parsing failures, with human-readable messages.

use thiserror::Error;

/// Error type for all aggregation operations
///
/// Every failure here is local to one source page; the orchestrator
/// logs it and moves on to the next source.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP request failed (transport error or timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status code
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    Parse(String),
}

/// Result type alias for aggregation operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status() {
        let error = ScrapeError::Status {
            url: "https://example.com/live".to_string(),
            status: 503,
        };
        assert_eq!(
            error.to_string(),
            "Unexpected status 503 from https://example.com/live"
        );
    }

    #[test]
    fn test_error_display_parse_error() {
        let error = ScrapeError::Parse("invalid selector".to_string());
        assert_eq!(error.to_string(), "Failed to parse HTML: invalid selector");
    }
}

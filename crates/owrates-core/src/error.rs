//! Error types for the hero rates scraper
//!
//! This module defines all error types used throughout the library.
//! Soft extraction failures (missing boundaries, zero matches) are NOT
//! errors; they surface as an empty record list plus a diagnostic trace.

use thiserror::Error;

/// Error type for hero rates scraper operations
#[derive(Error, Debug)]
pub enum RatesError {
    /// HTTP request failed at the transport level (DNS, connect, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server responded with a non-200 status
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The run produced no usable records
    #[error("No hero records produced: {0}")]
    NoData(String),

    /// Failed to serialize the snapshot
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write the output file
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for hero rates scraper operations
pub type Result<T> = std::result::Result<T, RatesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_display() {
        let error = RatesError::UnexpectedStatus {
            status: 503,
            url: "https://example.com/rates".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unexpected status 503 from https://example.com/rates"
        );
    }

    #[test]
    fn test_no_data_display() {
        let error = RatesError::NoData("boundary not found".to_string());
        assert!(error.to_string().contains("boundary not found"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = RatesError::from(io);
        assert!(error.to_string().contains("denied"));
    }

    #[test]
    fn test_serialize_error_conversion() {
        let bad = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = RatesError::from(bad);
        assert!(error.to_string().starts_with("Failed to serialize"));
    }
}

//! # Payment Error Types
//!
//! Typed error handling for the relay.
//!
//! Two layers exist on purpose:
//! - `PaymentError` describes *why* an upstream call failed. It is logged
//!   inside the client and never handed to callers.
//! - `Absent` is the only failure a caller of the processor can observe.
//!   It carries no cause, so a timeout, a 4xx and a refused connection all
//!   look identical from the outside.

use thiserror::Error;

/// Internal error type for configuration and upstream calls
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (invalid API key, bad base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network/HTTP error communicating with the processor
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Processor answered with a non-2xx status
    #[error("Provider error [{status}]: {message}")]
    ProviderError { status: u16, message: String },

    /// Response body could not be decoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Processor answered 2xx with nothing usable in the body
    #[error("Empty response from provider")]
    EmptyResponse,
}

impl PaymentError {
    /// Collapse any failure into the absence signal.
    ///
    /// The cause is dropped here; log it before calling this.
    pub fn into_absent(self) -> Absent {
        Absent
    }
}

/// The absence signal: an upstream call produced no usable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("upstream call produced no result")]
pub struct Absent;

/// Result type alias for internal payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

/// Result type returned across the processor boundary
pub type UpstreamResult<T> = Result<T, Absent>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PaymentError::ProviderError {
            status: 401,
            message: "Invalid api key".into(),
        };
        assert_eq!(err.to_string(), "Provider error [401]: Invalid api key");

        assert_eq!(
            PaymentError::Configuration("bad key".into()).to_string(),
            "Configuration error: bad key"
        );
    }

    #[test]
    fn test_every_cause_collapses_to_absent() {
        let causes = [
            PaymentError::NetworkError("connection refused".into()),
            PaymentError::ProviderError {
                status: 400,
                message: "bad request".into(),
            },
            PaymentError::Serialization("expected value".into()),
            PaymentError::EmptyResponse,
        ];

        for cause in causes {
            assert_eq!(cause.into_absent(), Absent);
        }
    }
}

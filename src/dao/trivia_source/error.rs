//! Error types for the external question source client.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`TriviaSourceError`] failures.
pub type TriviaSourceResult<T> = Result<T, TriviaSourceError>;

/// Failures that can occur while fetching from the question source.
///
/// Every variant is recoverable from the cache's point of view; the refill
/// path logs and keeps the existing pool contents.
#[derive(Debug, Error)]
pub enum TriviaSourceError {
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build question source client")]
    ClientBuilder {
        /// Underlying client construction failure.
        #[source]
        source: reqwest::Error,
    },
    /// The request could not be sent or timed out in flight.
    #[error("failed to reach the question source")]
    RequestSend {
        /// Underlying transport failure.
        #[source]
        source: reqwest::Error,
    },
    /// The source answered with an unexpected HTTP status.
    #[error("unexpected question source response status {status}")]
    RequestStatus {
        /// Status returned by the source.
        status: StatusCode,
    },
    /// The response body could not be parsed as JSON.
    #[error("failed to decode question source response")]
    DecodeResponse {
        /// Underlying decode failure.
        #[source]
        source: reqwest::Error,
    },
    /// The response parsed but held text that could not be decoded.
    #[error("malformed question payload: {detail}")]
    MalformedPayload {
        /// What part of the payload was unusable.
        detail: String,
    },
    /// The source explicitly told us to slow down.
    #[error("question source rate limit hit")]
    RateLimited,
    /// The source reported a non-success application code.
    #[error("question source returned code {code}")]
    SourceCode {
        /// Application-level response code.
        code: u8,
    },
}

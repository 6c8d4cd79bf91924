use reqwest::header::HeaderMap;
use thiserror::Error;

use crate::core::client::RateLimit;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum UpholdError {
    /// The HTTP request could not be completed (connection, TLS certificate validation,
    /// timeout), or the underlying HTTP client could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server asked for a one-time passcode.
    ///
    /// Set it with [`UpholdClient::set_verification_code`](crate::UpholdClient::set_verification_code)
    /// and repeat the original call.
    #[error("verification required: the server asked for a one-time passcode")]
    VerificationRequired,

    /// The server answered with HTTP 429.
    #[error(
        "rate limit exceeded (limit {}, remaining {}, reset {})",
        .rate_limit.limit,
        .rate_limit.remaining,
        .rate_limit.reset
    )]
    RateLimited {
        /// Rate-limit values reported with the refusal.
        rate_limit: RateLimit,
        /// All response headers, as received.
        headers: HeaderMap,
    },

    /// A sandbox-only operation was invoked against production.
    #[error("{operation} is not supported in production")]
    NotSupportedInProduction {
        /// Name of the refused operation.
        operation: &'static str,
    },

    /// The server returned a non-success status other than 429.
    #[error("API error: status {status} at {url}: {body}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The error document returned by the server. Non-JSON bodies are kept as a JSON string.
        body: serde_json::Value,
    },

    /// A success response body was not valid JSON.
    #[error("failed to decode JSON response from {url}: {source}")]
    Decode {
        /// The URL whose response failed to decode.
        url: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A response decoded fine but lacks a field the operation needs.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The client is missing configuration required by the operation.
    #[error("configuration error: {0}")]
    Config(String),
}

//! HTTP-specific error types for the Starbucks API client.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`InvalidResponseError`]: A 2xx response body could not be read
//! - [`HttpError`]: Unified error type encompassing all of the above
//!
//! Requests are attempted once. Every failure is returned to the caller as-is.
//!
//! # Example
//!
//! ```rust,ignore
//! use starbucks_api::HttpError;
//!
//! match client.cards().await {
//!     Ok(cards) => println!("{} cards", cards.len()),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::InvalidResponse(e)) => println!("Unexpected body: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The `message` field carries the error fields of the upstream body
/// serialized as JSON, or the raw body text when it was not JSON.
///
/// # Example
///
/// ```rust
/// use starbucks_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"error":"invalid_token"}"#.to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), r#"{"error":"invalid_token"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message.
    pub message: String,
    /// Reference ID for error reporting (from the X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A priced order is missing a field needed to submit it.
    #[error("Priced order is missing '{field}' and cannot be submitted.")]
    IncompletePricedOrder {
        /// The dotted path of the missing field.
        field: &'static str,
    },

    /// A request body could not be encoded as JSON.
    #[error("Cannot encode request body: {message}")]
    InvalidBody {
        /// The encoder's error message.
        message: String,
    },
}

impl From<serde_json::Error> for InvalidHttpRequestError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidBody {
            message: error.to_string(),
        }
    }
}

/// Error returned when a successful response body cannot be read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unexpected response body from {path}: {message}")]
pub struct InvalidResponseError {
    /// The request path that produced the body.
    pub path: String,
    /// What went wrong while reading the body.
    pub message: String,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A 2xx response body was malformed.
    #[error(transparent)]
    InvalidResponse(#[from] InvalidResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code if the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

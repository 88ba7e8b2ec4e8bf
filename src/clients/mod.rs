//! HTTP transport for the Starbucks API.
//!
//! This module provides the low-level layer underneath
//! [`StarbucksClient`](crate::StarbucksClient). It handles URL construction,
//! header merging, JSON parsing and error mapping.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`RequestBody`]: JSON or URL-encoded form bodies
//! - [`HttpError`]: Unified error type for API calls
//!
//! # Retry Behavior
//!
//! None. Every request is attempted once and failures are returned to the
//! caller unchanged.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError, InvalidResponseError};
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::HttpResponse;

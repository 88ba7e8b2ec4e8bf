//! HTTP request types for the Starbucks API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests against the API base URL.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for logins, pricing and submissions.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// A request body together with its content type.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON body (`application/json`).
    Json(serde_json::Value),
    /// A pre-encoded form body (`application/x-www-form-urlencoded`).
    Form(String),
}

impl RequestBody {
    /// Returns the MIME type string for this body.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Form(_) => "application/x-www-form-urlencoded",
        }
    }

    /// Returns the encoded body text.
    #[must_use]
    pub fn to_body_string(&self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Form(text) => text.clone(),
        }
    }
}

/// An HTTP request to be sent to the API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use starbucks_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "stores/nearby")
///     .query_param("limit", "50")
///     .bearer_auth("token")
///     .build()
///     .unwrap();
/// assert_eq!(request.authorization.as_deref(), Some("Bearer token"));
///
/// let request = HttpRequest::builder(HttpMethod::Post, "me/stores/1/priceOrder")
///     .json(json!({"cart": {"offers": [], "items": []}}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Query parameters in the order they are appended to the URL.
    pub query: Vec<(String, String)>,
    /// `Authorization` header value, if the request is authenticated.
    pub authorization: Option<String>,
    /// Additional headers. These win over default and authorization headers.
    pub extra_headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] if `http_method` is
    /// `Post` but `body` is `None`.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.http_method == HttpMethod::Post && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<RequestBody>,
    query: Vec<(String, String)>,
    authorization: Option<String>,
    extra_headers: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            authorization: None,
            extra_headers: Vec::new(),
        }
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(RequestBody::Json(body.into()));
        self
    }

    /// Sets a pre-encoded form request body.
    #[must_use]
    pub fn form(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Form(body.into()));
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Sets the `Authorization` header to `Bearer <token>`.
    #[must_use]
    pub fn bearer_auth(mut self, token: &str) -> Self {
        self.authorization = Some(format!("Bearer {token}"));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((key.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            authorization: self.authorization,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

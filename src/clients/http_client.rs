//! HTTP client for Starbucks API communication.
//!
//! This module provides the [`HttpClient`] type that sends [`HttpRequest`]s
//! against the configured base URL and turns the replies into
//! [`HttpResponse`]s or [`HttpError`]s.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, StarbucksConfig};

/// HTTP client for making requests to the Starbucks API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`Accept`, `User-Agent`)
/// - Header merging for per-request authorization and extra headers
/// - JSON body parsing and error serialization
///
/// Each request is sent exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL every request path is resolved against.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: Vec<(String, String)>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &StarbucksConfig) -> Self {
        let default_headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), config.user_agent().to_string()),
        ];

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Computes the final header set for a request.
    ///
    /// Precedence, lowest to highest: default headers, the body's
    /// `Content-Type`, the request's `Authorization`, the request's extra
    /// headers. Names are compared case-insensitively.
    #[must_use]
    pub fn merged_headers(&self, request: &HttpRequest) -> Vec<(String, String)> {
        let mut headers = self.default_headers.clone();
        if let Some(body) = &request.body {
            set_header(&mut headers, "Content-Type", body.content_type());
        }
        if let Some(authorization) = &request.authorization {
            set_header(&mut headers, "Authorization", authorization);
        }
        for (key, value) in &request.extra_headers {
            set_header(&mut headers, key, value);
        }
        headers
    }

    /// Sends an HTTP request to the API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - A 2xx body is not valid JSON (`InvalidResponse`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);
        let headers = self.merged_headers(&request);

        let method = match request.http_method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };
        let mut req_builder = self.client.request(method, &url);

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_body_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "Sending request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        if !(200..=299).contains(&code) {
            let body = serde_json::from_str(&body_text).ok();
            let message = Self::serialize_error(body.as_ref(), &body_text);
            let response = HttpResponse::new(code, res_headers, serde_json::Value::Null);
            tracing::warn!(
                status = code,
                path = %request.path,
                "Request to Starbucks API failed: {}",
                message
            );
            return Err(HttpError::Response(HttpResponseError {
                code,
                message,
                error_reference: response.request_id().map(String::from),
            }));
        }

        let body = if body_text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&body_text).map_err(|e| InvalidResponseError {
                path: request.path.clone(),
                message: e.to_string(),
            })?
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the error fields of a failed response.
    ///
    /// Known error fields are collected into a JSON object. Bodies without
    /// any of them are passed through as-is.
    fn serialize_error(body: Option<&serde_json::Value>, raw: &str) -> String {
        const ERROR_FIELDS: [&str; 4] = ["error", "error_description", "code", "message"];

        let Some(serde_json::Value::Object(map)) = body else {
            return raw.to_string();
        };

        let error_body: serde_json::Map<String, serde_json::Value> = ERROR_FIELDS
            .iter()
            .filter_map(|field| map.get(*field).map(|v| ((*field).to_string(), v.clone())))
            .collect();

        if error_body.is_empty() {
            return raw.to_string();
        }
        serde_json::Value::Object(error_body).to_string()
    }
}

/// Inserts or replaces a header, matching the name case-insensitively.
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
    headers.push((name.to_string(), value.to_string()));
}

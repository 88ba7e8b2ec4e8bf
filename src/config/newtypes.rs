//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated API client key.
///
/// This is the key the mobile app identifies itself with. It is sent as
/// `client_id` in the login form and as the `X-Api-Key` header.
///
/// # Example
///
/// ```rust
/// use starbucks_api::ApiKey;
///
/// let key = ApiKey::new("my-client-key").unwrap();
/// assert_eq!(key.as_ref(), "my-client-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API client secret.
///
/// The `Debug` implementation masks the value, displaying only
/// `ApiSecret(*****)`.
///
/// # Example
///
/// ```rust
/// use starbucks_api::ApiSecret;
///
/// let secret = ApiSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ApiSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret(String);

impl ApiSecret {
    /// Creates a new validated API secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyApiSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ApiSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(*****)")
    }
}

/// A validated base URL that all API paths are resolved against.
///
/// The URL must use the `http` or `https` scheme and have a non-empty host.
/// It is normalized to end with `/` so relative paths such as `me/cards`
/// can be appended directly.
///
/// # Example
///
/// ```rust
/// use starbucks_api::BaseUrl;
///
/// let url = BaseUrl::new("https://openapi.starbucks.com/v1").unwrap();
/// assert_eq!(url.as_ref(), "https://openapi.starbucks.com/v1/");
/// assert_eq!(url.host_name(), "openapi.starbucks.com");
///
/// let local = BaseUrl::new("http://localhost:8080/v1/").unwrap();
/// assert_eq!(local.authority(), "localhost:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http(s)`
    /// scheme or an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url: String = url.into();
        let mut url = url.trim().to_string();

        let host_start = if url.starts_with("https://") {
            "https://".len()
        } else if url.starts_with("http://") {
            "http://".len()
        } else {
            return Err(ConfigError::InvalidBaseUrl { url });
        };

        // Host ends at port, path, query, or end of string
        let host_end = url[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        if url.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        if !url.ends_with('/') {
            url.push('/');
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Returns the host and, when the URL names one, the port (`host:port`).
    ///
    /// This is the value of the `Host` header for requests to this URL.
    #[must_use]
    pub fn authority(&self) -> &str {
        let rest = &self.url[self.host_end..];
        if !rest.starts_with(':') {
            return self.host_name();
        }
        let port_len = rest.find('/').unwrap_or(rest.len());
        &self.url[self.host_start..self.host_end + port_len]
    }

    /// Resolves a relative API path against this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

//! Configuration types for the Starbucks API client.
//!
//! This module provides the configuration used to construct a
//! [`StarbucksClient`](crate::StarbucksClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StarbucksConfig`]: The client configuration
//! - [`StarbucksConfigBuilder`]: A builder for constructing [`StarbucksConfig`] instances
//! - [`ApiKey`]: A validated client key newtype
//! - [`ApiSecret`]: A validated client secret newtype with masked debug output
//! - [`BaseUrl`]: A validated base URL all API paths are resolved against
//!
//! The upstream service only accepts requests that look like they come from a
//! specific build of the Android app. The values identifying that build are
//! exposed as constants and can be overridden through the builder.
//!
//! # Example
//!
//! ```rust
//! use starbucks_api::{StarbucksConfig, ApiKey, ApiSecret};
//!
//! let config = StarbucksConfig::builder()
//!     .api_key(ApiKey::new("my-client-key").unwrap())
//!     .api_secret(ApiSecret::new("my-client-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.market(), "US");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecret, BaseUrl};

use crate::error::ConfigError;

/// Base URL of the production API.
pub const DEFAULT_BASE_URL: &str = "https://openapi.starbucks.com/v1/";

/// User agent of the Android app build the client presents itself as.
pub const DEFAULT_USER_AGENT: &str = "Starbucks Android 4.3.9";

/// Market code sent with market-scoped requests.
pub const DEFAULT_MARKET: &str = "US";

/// Locale sent with locale-scoped requests.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Platform sent to the token endpoint.
pub const DEFAULT_PLATFORM: &str = "Android";

/// Client binding token (`X-Cbt`) sent to the token endpoint.
///
/// Placeholder. The token endpoint rejects logins unless this matches the
/// value captured from the app build named in [`DEFAULT_USER_AGENT`]; set it
/// with [`StarbucksConfigBuilder::cbt`].
pub const DEFAULT_CBT: &str = "android-4.3.9-cbt";

/// `X-NewRelic-ID` header value sent to the token endpoint.
///
/// Placeholder, see [`DEFAULT_CBT`]. Set it with
/// [`StarbucksConfigBuilder::new_relic_id`].
pub const DEFAULT_NEW_RELIC_ID: &str = "android-4.3.9-newrelic";

/// Configuration for the Starbucks API client.
///
/// `StarbucksConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct StarbucksConfig {
    api_key: ApiKey,
    api_secret: ApiSecret,
    base_url: BaseUrl,
    user_agent: String,
    market: String,
    locale: String,
    platform: String,
    cbt: String,
    new_relic_id: String,
}

impl StarbucksConfig {
    /// Creates a new builder for constructing a `StarbucksConfig`.
    #[must_use]
    pub fn builder() -> StarbucksConfigBuilder {
        StarbucksConfigBuilder::new()
    }

    /// Returns the client key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }

    /// Returns the base URL all API paths are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the market code (e.g., "US").
    #[must_use]
    pub fn market(&self) -> &str {
        &self.market
    }

    /// Returns the locale (e.g., "en-US").
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the platform sent to the token endpoint.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Returns the `X-Cbt` header value.
    #[must_use]
    pub fn cbt(&self) -> &str {
        &self.cbt
    }

    /// Returns the `X-NewRelic-ID` header value.
    #[must_use]
    pub fn new_relic_id(&self) -> &str {
        &self.new_relic_id
    }
}

// Verify StarbucksConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StarbucksConfig>();
};

/// Builder for constructing [`StarbucksConfig`] instances.
///
/// Required fields are `api_key` and `api_secret`.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `user_agent`: [`DEFAULT_USER_AGENT`]
/// - `market`: [`DEFAULT_MARKET`]
/// - `locale`: [`DEFAULT_LOCALE`]
/// - `platform`: [`DEFAULT_PLATFORM`]
/// - `cbt`: [`DEFAULT_CBT`]
/// - `new_relic_id`: [`DEFAULT_NEW_RELIC_ID`]
///
/// # Example
///
/// ```rust
/// use starbucks_api::{StarbucksConfig, ApiKey, ApiSecret, BaseUrl};
///
/// let config = StarbucksConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .base_url(BaseUrl::new("http://localhost:8080/v1/").unwrap())
///     .locale("en-CA")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.locale(), "en-CA");
/// ```
#[derive(Debug, Default)]
pub struct StarbucksConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    base_url: Option<BaseUrl>,
    user_agent: Option<String>,
    market: Option<String>,
    locale: Option<String>,
    platform: Option<String>,
    cbt: Option<String>,
    new_relic_id: Option<String>,
}

impl StarbucksConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn api_secret(mut self, secret: ApiSecret) -> Self {
        self.api_secret = Some(secret);
        self
    }

    /// Sets the base URL. Useful for proxies and mock servers.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the market code.
    #[must_use]
    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    /// Sets the locale.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the platform sent to the token endpoint.
    #[must_use]
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Sets the `X-Cbt` header value.
    #[must_use]
    pub fn cbt(mut self, cbt: impl Into<String>) -> Self {
        self.cbt = Some(cbt.into());
        self
    }

    /// Sets the `X-NewRelic-ID` header value.
    #[must_use]
    pub fn new_relic_id(mut self, id: impl Into<String>) -> Self {
        self.new_relic_id = Some(id.into());
        self
    }

    /// Builds the [`StarbucksConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `api_secret` are not set.
    pub fn build(self) -> Result<StarbucksConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_secret = self
            .api_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "api_secret",
            })?;
        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(StarbucksConfig {
            api_key,
            api_secret,
            base_url,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            market: self.market.unwrap_or_else(|| DEFAULT_MARKET.to_string()),
            locale: self.locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            platform: self
                .platform
                .unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
            cbt: self.cbt.unwrap_or_else(|| DEFAULT_CBT.to_string()),
            new_relic_id: self
                .new_relic_id
                .unwrap_or_else(|| DEFAULT_NEW_RELIC_ID.to_string()),
        })
    }
}

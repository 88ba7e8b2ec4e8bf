//! High-level client for the Starbucks mobile API.
//!
//! [`StarbucksClient`] holds the app credentials and the current bearer
//! token, and exposes one async method per API operation. Every method is a
//! single request/response round trip.

use std::fmt;

use crate::auth::signature::current_timestamp;
use crate::auth::{compute_signature, AccessTokenResponse, LoginForm};
use crate::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, InvalidHttpRequestError,
    InvalidResponseError,
};
use crate::config::{ApiKey, ApiSecret, StarbucksConfig};
use crate::error::ConfigError;
use crate::resources::{
    self, Basket, Cart, LoyaltyCard, NearbyStoresResponse, OrderHistory, PricedOrder, Store,
    StoreQuery,
};

const TOKEN_PATH: &str = "oauth/token";
const NEARBY_STORES_PATH: &str = "stores/nearby";
const CARDS_PATH: &str = "me/cards";
const ORDERS_PATH: &str = "me/orders";

/// Client for the Starbucks mobile API.
///
/// The client is created with an access token, which may be empty when
/// [`authenticate`](Self::authenticate) is called before anything else.
/// A successful login replaces the token in place; every later call sends it
/// as `Authorization: Bearer <token>`.
///
/// Reads take `&self` and the login takes `&mut self`, so a token can never
/// change while a request using the old one is being built.
///
/// # Thread Safety
///
/// `StarbucksClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use starbucks_api::StarbucksClient;
/// use starbucks_api::resources::StoreQuery;
///
/// let mut client = StarbucksClient::from_credentials("key", "secret", "")?;
/// client.authenticate("user@example.com", "hunter2").await?;
///
/// let stores = client.nearby_stores(StoreQuery::default()).await?;
/// let cards = client.cards().await?;
///
/// if let Some(order) = client.last_order().await? {
///     let cart = StarbucksClient::convert_order_to_cart(&order);
///     let store_id = stores[0].store_number.as_deref().unwrap_or_default();
///     let priced = client.price_order(store_id, &cart).await?;
///     let card_id = cards[0].card_id.as_deref().unwrap_or_default();
///     let receipt = client.submit_order(&priced, card_id).await?;
/// }
/// ```
pub struct StarbucksClient {
    config: StarbucksConfig,
    http_client: HttpClient,
    access_token: String,
}

// Verify StarbucksClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StarbucksClient>();
};

impl fmt::Debug for StarbucksClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarbucksClient")
            .field("config", &self.config)
            .field("http_client", &self.http_client)
            .field("access_token", &"*****")
            .finish()
    }
}

impl StarbucksClient {
    /// Creates a client for the given configuration and access token.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created. See
    /// [`HttpClient::new`].
    #[must_use]
    pub fn new(config: StarbucksConfig, access_token: impl Into<String>) -> Self {
        let http_client = HttpClient::new(&config);
        Self {
            config,
            http_client,
            access_token: access_token.into(),
        }
    }

    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] or [`ConfigError::EmptyApiSecret`]
    /// if either credential is empty.
    pub fn from_credentials(
        client_key: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = StarbucksConfig::builder()
            .api_key(ApiKey::new(client_key)?)
            .api_secret(ApiSecret::new(client_secret)?)
            .build()?;
        Ok(Self::new(config, access_token))
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &StarbucksConfig {
        &self.config
    }

    /// Returns the current access token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Replaces the access token.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = access_token.into();
        tracing::debug!("Access token replaced");
    }

    /// Logs in with a username and password and stores the returned token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] if the login is rejected,
    /// [`HttpError::InvalidResponse`] if the reply carries no `access_token`,
    /// or [`HttpError::Network`] on transport failure. The stored token is
    /// left unchanged on error.
    pub async fn authenticate(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<AccessTokenResponse, HttpError> {
        self.authenticate_at(username, password, current_timestamp())
            .await
    }

    /// Like [`authenticate`](Self::authenticate), signing the request with
    /// the given Unix timestamp instead of the current time.
    ///
    /// # Errors
    ///
    /// Same as [`authenticate`](Self::authenticate).
    pub async fn authenticate_at(
        &mut self,
        username: &str,
        password: &str,
        timestamp: i64,
    ) -> Result<AccessTokenResponse, HttpError> {
        let api_key = self.config.api_key().as_ref();
        let api_secret = self.config.api_secret().as_ref();

        let signature = compute_signature(api_key, api_secret, timestamp);
        let form = LoginForm::new(api_key, api_secret, username, password);

        let request = HttpRequest::builder(HttpMethod::Post, TOKEN_PATH)
            .query_param("sig", signature)
            .query_param("market", self.config.market())
            .query_param("platform", self.config.platform())
            .form(form.encode())
            .header("X-Api-Key", api_key)
            .header("X-Cbt", self.config.cbt())
            .header("X-NewRelic-ID", self.config.new_relic_id())
            .header("Host", self.http_client.base_url().authority())
            .build()?;

        let response = self.http_client.request(request).await?;
        let token: AccessTokenResponse =
            serde_json::from_value(response.body).map_err(|e| InvalidResponseError {
                path: TOKEN_PATH.to_string(),
                message: e.to_string(),
            })?;

        self.set_access_token(token.access_token.clone());
        Ok(token)
    }

    /// Lists stores near a location.
    ///
    /// A response without stores yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be read.
    pub async fn nearby_stores(&self, query: StoreQuery) -> Result<Vec<Store>, HttpError> {
        let request = self
            .authorized(HttpMethod::Get, NEARBY_STORES_PATH)
            .query_param("latlng", query.latlng())
            .query_param("limit", query.limit)
            .query_param("radius", query.radius)
            .query_param("xopState", true)
            .query_param("userSubMarket", self.config.market())
            .query_param("serviceTime", true)
            .query_param("locale", self.config.locale())
            .build()?;

        let response = self.http_client.request(request).await?;
        let stores: NearbyStoresResponse = resources::project(response.body, NEARBY_STORES_PATH)?;
        Ok(stores.into_stores())
    }

    /// Lists the stored-value cards on the account.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be read.
    pub async fn cards(&self) -> Result<Vec<LoyaltyCard>, HttpError> {
        let request = self.authorized(HttpMethod::Get, CARDS_PATH).build()?;
        let response = self.http_client.request(request).await?;
        Ok(resources::project(response.body, CARDS_PATH)?)
    }

    /// Returns the basket of the most recent order, or `None` if the account
    /// has no order history.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be read.
    pub async fn last_order(&self) -> Result<Option<Basket>, HttpError> {
        let request = self
            .authorized(HttpMethod::Get, ORDERS_PATH)
            .query_param("market", self.config.market())
            .query_param("locale", self.config.locale())
            .query_param("limit", 1)
            .query_param("offset", 0)
            .build()?;

        let response = self.http_client.request(request).await?;
        let history: OrderHistory = resources::project(response.body, ORDERS_PATH)?;
        Ok(history.into_last_basket())
    }

    /// Converts a past order into a cart. See [`resources::convert_order_to_cart`].
    #[must_use]
    pub fn convert_order_to_cart(order: &Basket) -> Cart {
        resources::convert_order_to_cart(order)
    }

    /// Prices a cart at a store.
    ///
    /// The returned [`PricedOrder`] is what [`submit_order`](Self::submit_order)
    /// expects.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body cannot be read.
    pub async fn price_order(&self, store_id: &str, cart: &Cart) -> Result<PricedOrder, HttpError> {
        let path = format!("me/stores/{}/priceOrder", urlencoding::encode(store_id));
        let body = serde_json::to_value(cart).map_err(InvalidHttpRequestError::from)?;

        let request = self
            .authorized(HttpMethod::Post, &path)
            .query_param("market", self.config.market())
            .query_param("locale", self.config.locale())
            .query_param("serviceTime", true)
            .json(body)
            .build()?;

        let response = self.http_client.request(request).await?;
        let priced: PricedOrder = resources::project(response.body, &path)?;
        Ok(priced.normalized())
    }

    /// Submits a priced order, paying the full total with one card.
    ///
    /// Returns the upstream response body unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::IncompletePricedOrder`] before any
    /// request is sent if the priced order has no store number, order token
    /// or total. Otherwise returns [`HttpError`] if the request fails.
    pub async fn submit_order(
        &self,
        priced_order: &PricedOrder,
        card_id: &str,
    ) -> Result<serde_json::Value, HttpError> {
        let store_number =
            priced_order
                .store_number()
                .ok_or(InvalidHttpRequestError::IncompletePricedOrder {
                    field: "store.storeNumber",
                })?;
        let order_token =
            priced_order
                .order_token()
                .ok_or(InvalidHttpRequestError::IncompletePricedOrder {
                    field: "orderToken",
                })?;
        let submission = priced_order.submit_request(card_id)?;

        let path = format!(
            "me/stores/{}/orderToken/{}/submitOrder",
            urlencoding::encode(store_number),
            urlencoding::encode(order_token)
        );
        let body = serde_json::to_value(&submission).map_err(InvalidHttpRequestError::from)?;

        let request = self
            .authorized(HttpMethod::Post, &path)
            .query_param("market", self.config.market())
            .query_param("locale", self.config.locale())
            .json(body)
            .build()?;

        let response = self.http_client.request(request).await?;
        Ok(response.body)
    }

    /// Places the most recent order again at the given store.
    ///
    /// Fetches the last order, prices it at `store_id` and submits it with
    /// `card_id`. Returns `None` without pricing anything if there is no
    /// previous order.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] raised by any of the three steps.
    pub async fn reorder_last_order(
        &self,
        store_id: &str,
        card_id: &str,
    ) -> Result<Option<serde_json::Value>, HttpError> {
        let Some(order) = self.last_order().await? else {
            tracing::debug!("No previous order to place again");
            return Ok(None);
        };

        let cart = Self::convert_order_to_cart(&order);
        let priced = self.price_order(store_id, &cart).await?;
        let receipt = self.submit_order(&priced, card_id).await?;
        Ok(Some(receipt))
    }

    /// Starts a request carrying the bearer token.
    fn authorized(&self, method: HttpMethod, path: &str) -> HttpRequestBuilder {
        if self.access_token.is_empty() {
            tracing::warn!(path = %path, "Sending authenticated request with an empty access token");
        }
        HttpRequest::builder(method, path).bearer_auth(&self.access_token)
    }
}

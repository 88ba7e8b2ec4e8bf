//! # Starbucks API Rust Client
//!
//! An async client for the Starbucks mobile ordering API, providing type-safe
//! configuration, password login, store lookup, loyalty cards, order history
//! and the price-then-submit checkout flow.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StarbucksConfig`] and [`StarbucksConfigBuilder`]
//! - Validated newtypes for the client credentials and base URL
//! - Password-grant login with request signing via [`StarbucksClient::authenticate`]
//! - Typed projections of API payloads in [`resources`]
//! - An async HTTP transport in [`clients`]
//!
//! ## Quick Start
//!
//! ```rust
//! use starbucks_api::{StarbucksClient, StarbucksConfig, ApiKey, ApiSecret};
//!
//! let config = StarbucksConfig::builder()
//!     .api_key(ApiKey::new("your-client-key").unwrap())
//!     .api_secret(ApiSecret::new("your-client-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // The token may be empty when logging in first
//! let client = StarbucksClient::new(config, "");
//! assert_eq!(client.access_token(), "");
//! ```
//!
//! ## Logging In
//!
//! ```rust,ignore
//! use starbucks_api::StarbucksClient;
//!
//! let mut client = StarbucksClient::from_credentials("key", "secret", "")?;
//! let token = client.authenticate("user@example.com", "password").await?;
//!
//! // The token is stored on the client and sent with every later call
//! assert_eq!(client.access_token(), token.access_token);
//! ```
//!
//! ## Ordering Again
//!
//! ```rust,ignore
//! use starbucks_api::StarbucksClient;
//! use starbucks_api::resources::StoreQuery;
//!
//! let stores = client.nearby_stores(StoreQuery::new(47.6097, -122.3422)).await?;
//! let cards = client.cards().await?;
//!
//! if let Some(order) = client.last_order().await? {
//!     let cart = StarbucksClient::convert_order_to_cart(&order);
//!     let priced = client.price_order("7890-12345", &cart).await?;
//!     let receipt = client.submit_order(&priced, "card-id").await?;
//! }
//!
//! // Or in one call
//! let receipt = client.reorder_last_order("7890-12345", "card-id").await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Single attempt**: Requests are never retried

pub mod auth;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::AccessTokenResponse;
pub use client::StarbucksClient;
pub use config::{ApiKey, ApiSecret, BaseUrl, StarbucksConfig, StarbucksConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, InvalidResponseError,
};

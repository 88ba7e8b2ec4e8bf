//! Authentication types for the Starbucks API.
//!
//! This module provides the pieces of the password-grant login:
//!
//! - [`signature`]: the `sig` query parameter required by the token endpoint
//! - [`LoginForm`]: the URL-encoded form body
//! - [`AccessTokenResponse`]: the token returned on success
//!
//! The login itself is performed by
//! [`StarbucksClient::authenticate`](crate::StarbucksClient::authenticate),
//! which stores the returned token on the client.

mod login_form;
pub mod signature;
mod token;

pub use login_form::LoginForm;
pub use signature::compute_signature;
pub use token::AccessTokenResponse;

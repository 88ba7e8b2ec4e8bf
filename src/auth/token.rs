//! Access token response from the OAuth token endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Response from a successful password-grant login.
///
/// Only `access_token` is read from the upstream body; any other fields the
/// endpoint returns are ignored.
///
/// The `Debug` implementation masks the token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// The bearer token to send with authenticated requests.
    pub access_token: String,
}

impl fmt::Debug for AccessTokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenResponse")
            .field("access_token", &"*****")
            .finish()
    }
}

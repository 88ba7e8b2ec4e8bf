//! URL-encoded login form for the password grant.
//!
//! The token endpoint expects a form body with the fields in a fixed order:
//!
//! ```text
//! grant_type=password&client_id=<key>&client_secret=<secret>&username=<user>&password=<pass>
//! ```
//!
//! Every value is percent-escaped; field names are written as-is.

/// Grant type for username/password logins.
const PASSWORD_GRANT_TYPE: &str = "password";

/// Login form for the password grant.
///
/// # Example
///
/// ```rust
/// use starbucks_api::auth::LoginForm;
///
/// let form = LoginForm::new("key", "secret", "jane@example.com", "p&ss word");
/// assert_eq!(
///     form.encode(),
///     "grant_type=password&client_id=key&client_secret=secret\
///      &username=jane%40example.com&password=p%26ss%20word"
/// );
/// ```
#[derive(Clone, Copy)]
pub struct LoginForm<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    username: &'a str,
    password: &'a str,
}

impl<'a> LoginForm<'a> {
    /// Creates a login form from the client credentials and user credentials.
    #[must_use]
    pub const fn new(
        client_id: &'a str,
        client_secret: &'a str,
        username: &'a str,
        password: &'a str,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            username,
            password,
        }
    }

    /// Encodes the form as an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "grant_type={}&client_id={}&client_secret={}&username={}&password={}",
            PASSWORD_GRANT_TYPE,
            urlencoding::encode(self.client_id),
            urlencoding::encode(self.client_secret),
            urlencoding::encode(self.username),
            urlencoding::encode(self.password),
        )
    }
}

impl std::fmt::Debug for LoginForm<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("client_id", &self.client_id)
            .field("client_secret", &"*****")
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_preserves_field_order() {
        let body = LoginForm::new("k", "s", "u", "p").encode();
        assert_eq!(
            body,
            "grant_type=password&client_id=k&client_secret=s&username=u&password=p"
        );
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let body = LoginForm::new("k=1", "s&2", "user+name@example.com", "a b/c?").encode();
        assert_eq!(
            body,
            "grant_type=password&client_id=k%3D1&client_secret=s%262\
             &username=user%2Bname%40example.com&password=a%20b%2Fc%3F"
        );
    }

    #[test]
    fn test_encode_escapes_non_ascii() {
        let body = LoginForm::new("k", "s", "u", "café").encode();
        assert!(body.ends_with("&password=caf%C3%A9"));
    }

    #[test]
    fn test_encode_allows_empty_values() {
        let body = LoginForm::new("k", "s", "", "").encode();
        assert!(body.ends_with("&username=&password="));
    }

    #[test]
    fn test_debug_masks_secrets() {
        let form = LoginForm::new("k", "hidden-secret", "u", "hidden-password");
        let debug = format!("{form:?}");
        assert!(!debug.contains("hidden-secret"));
        assert!(!debug.contains("hidden-password"));
        assert!(debug.contains("LoginForm"));
    }
}

//! Request signing for the OAuth token endpoint.
//!
//! The token endpoint requires a `sig` query parameter derived from the client
//! key, the client secret and the current Unix timestamp. The signature is the
//! lowercase hex MD5 digest of the three values concatenated in that order,
//! with the timestamp written in decimal seconds.
//!
//! # Example
//!
//! ```rust
//! use starbucks_api::auth::signature::compute_signature;
//!
//! let sig = compute_signature("key", "secret", 1_500_000_000);
//! assert_eq!(sig.len(), 32);
//! assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
//! ```

use md5::{Digest, Md5};

/// Computes the `sig` value for a token request.
///
/// The digest input is exactly `api_key ‖ api_secret ‖ timestamp` with no
/// separators.
#[must_use]
pub fn compute_signature(api_key: &str, api_secret: &str, timestamp: i64) -> String {
    let mut hasher = Md5::new();
    hasher.update(api_key.as_bytes());
    hasher.update(api_secret.as_bytes());
    hasher.update(timestamp.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// Returns the current Unix timestamp in seconds.
#[must_use]
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

// Internal hex encoding since we don't want to add another dependency
mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_lowercase_hex_md5() {
        let sig = compute_signature("key", "secret", 1_500_000_000);
        assert_eq!(sig.len(), 32);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(sig.chars().all(|c| !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_signature_matches_known_digest() {
        // MD5("my-keymy-secret1500000000")
        assert_eq!(
            compute_signature("my-key", "my-secret", 1_500_000_000),
            "fff3a47601e4d5b84e829a7e1d21c793"
        );
        // MD5("keysecret1")
        assert_eq!(
            compute_signature("key", "secret", 1),
            "6810e1ec29e014c55909732eae831b8e"
        );
    }

    #[test]
    fn test_signature_empty_inputs_match_md5_of_timestamp() {
        // MD5("0") = cfcd208495d565ef66e7dff9f98764da
        assert_eq!(
            compute_signature("", "", 0),
            "cfcd208495d565ef66e7dff9f98764da"
        );
    }

    #[test]
    fn test_signature_depends_on_every_input() {
        let base = compute_signature("key", "secret", 100);
        assert_ne!(base, compute_signature("key2", "secret", 100));
        assert_ne!(base, compute_signature("key", "secret2", 100));
        assert_ne!(base, compute_signature("key", "secret", 101));
    }

    #[test]
    fn test_signature_is_deterministic() {
        assert_eq!(
            compute_signature("key", "secret", 42),
            compute_signature("key", "secret", 42)
        );
    }

    #[test]
    fn test_hex_encoding() {
        assert_eq!(hex::encode([0x00, 0xff, 0xab, 0xcd]), "00ffabcd");
        assert_eq!(hex::encode([0u8; 0]), "");
    }

    #[test]
    fn test_current_timestamp_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(current_timestamp() > 1_577_836_800);
    }
}

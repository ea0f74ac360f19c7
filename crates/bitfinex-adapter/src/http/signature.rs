/*
[INPUT]:  Timestamp, method, resource path, body and the API secret
[OUTPUT]: Hex-encoded HMAC-SHA256 signature for the ACCESS-SIGN header
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{BitfinexError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Signs request payloads with the account secret
#[derive(Clone)]
pub struct RequestSigner {
    mac: HmacSha256,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"***REDACTED***")
            .finish()
    }
}

impl RequestSigner {
    /// Create a signer keyed with the API secret
    pub fn new(secret_key: &str) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(secret_key.as_bytes())
            .map_err(|err| BitfinexError::Config(format!("invalid secret key: {err}")))?;
        Ok(Self { mac })
    }

    /// Bytes that get signed: `{timestamp}{METHOD}{path}{body}`
    ///
    /// `body` is the encoded query string for GET and the JSON body for POST.
    pub fn payload(timestamp: &str, method: &str, path: &str, body: &str) -> String {
        format!("{timestamp}{method}{path}{body}")
    }

    /// Sign a request and return the lowercase hex digest
    pub fn sign(&self, timestamp: &str, method: &str, path: &str, body: &str) -> String {
        self.sign_bytes(Self::payload(timestamp, method, path, body).as_bytes())
    }

    /// Sign raw bytes with the keyed MAC
    pub fn sign_bytes(&self, message: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(message);
        hex::encode(mac.finalize().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_layout() {
        let payload = RequestSigner::payload(
            "1700000000",
            "POST",
            "/v1/me/sendchildorder",
            r#"{"size":0.1}"#,
        );
        assert_eq!(payload, r#"1700000000POST/v1/me/sendchildorder{"size":0.1}"#);
    }

    #[test]
    fn test_sign_known_vector() {
        // RFC 4231 test case 2
        let signer = RequestSigner::new("Jefe").unwrap();
        assert_eq!(
            signer.sign_bytes(b"what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = RequestSigner::new("secret").unwrap();
        let first = signer.sign("1700000000", "GET", "/v1/me/getbalance", "");
        let second = signer.sign("1700000000", "GET", "/v1/me/getbalance", "");

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_sign_depends_on_every_part() {
        let signer = RequestSigner::new("secret").unwrap();
        let base = signer.sign("1", "GET", "/v1/a", "x=1");

        assert_ne!(base, signer.sign("2", "GET", "/v1/a", "x=1"));
        assert_ne!(base, signer.sign("1", "POST", "/v1/a", "x=1"));
        assert_ne!(base, signer.sign("1", "GET", "/v1/b", "x=1"));
        assert_ne!(base, signer.sign("1", "GET", "/v1/a", "x=2"));
        assert_ne!(base, RequestSigner::new("other").unwrap().sign("1", "GET", "/v1/a", "x=1"));
    }

    #[test]
    fn test_debug_hides_secret() {
        let signer = RequestSigner::new("super-secret").unwrap();
        assert!(!format!("{signer:?}").contains("super-secret"));
    }
}

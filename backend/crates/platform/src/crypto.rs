//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Random secret suitable for HS256 signing (256 bits, base64 text)
pub fn random_secret() -> String {
    to_base64(&random_bytes(32))
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode unpadded base64url, the encoding of JWT segments
pub fn from_base64url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD.decode(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_random_secret_differs() {
        assert_ne!(random_secret(), random_secret());
        assert_eq!(random_secret().len(), 44);
    }

    #[test]
    fn test_base64url_decodes_jwt_header() {
        let decoded = from_base64url("eyJhbGciOiJIUzI1NiJ9").unwrap();
        assert_eq!(decoded, br#"{"alg":"HS256"}"#);
    }

    #[test]
    fn test_base64url_rejects_garbage() {
        assert!(from_base64url("***").is_err());
    }
}

//! Password Hashing and Verification
//!
//! One-way credential codec:
//! - Argon2id hashing with a random per-password salt (PHC string output)
//! - Zeroization of clear text on drop
//! - Verification never fails loudly: any internal problem is logged
//!   and reported as a mismatch

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length accepted at sign-up, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be above {min} characters in length (got {actual})")]
    TooShort { min: usize, actual: usize },
}

impl PasswordPolicyError {
    /// Minimum length that was enforced
    pub fn min(&self) -> usize {
        match self {
            PasswordPolicyError::TooShort { min, .. } => *min,
        }
    }
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`; debug output is redacted.
///
/// Unicode input is normalized with NFKC so that visually identical
/// passwords typed on different keyboards hash the same.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Accept a new password, enforcing [`MIN_PASSWORD_LENGTH`]
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        Self::with_min_length(raw, MIN_PASSWORD_LENGTH)
    }

    /// Accept a new password with a caller-supplied minimum length
    pub fn with_min_length(raw: String, min: usize) -> Result<Self, PasswordPolicyError> {
        let password = Self::candidate(raw);

        // Count Unicode code points, not bytes
        let char_count = password.0.chars().count();
        if char_count < min {
            return Err(PasswordPolicyError::TooShort {
                min,
                actual: char_count,
            });
        }

        Ok(password)
    }

    /// Wrap a login attempt without policy checks
    ///
    /// A candidate that would fail the policy simply fails verification.
    pub fn candidate(raw: String) -> Self {
        let normalized: String = raw.nfkc().collect();
        let mut raw = raw;
        raw.zeroize();
        Self(normalized)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        // 128-bit random salt
        let salt = SaltString::generate(&mut OsRng);

        // OWASP recommended Argon2id parameters:
        // m=19456 (19 MiB), t=2, p=1
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The PHC string carries algorithm, version, cost parameters and salt,
/// so verification re-derives with exactly what was used at hashing time.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a hash loaded from storage
    ///
    /// Not validated here: a corrupt value only makes `verify` return false.
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a candidate against this hash
    ///
    /// Argon2 compares in constant time. Errors are logged and
    /// reported as `false`.
    pub fn verify(&self, candidate: &ClearTextPassword) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is unreadable");
                return false;
            }
        };

        match Argon2::default().verify_password(candidate.as_bytes(), &parsed_hash) {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => {
                tracing::info!("Password verification failed: mismatch");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Password verification failed");
                false
            }
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("short".to_string());
        assert_eq!(
            result.unwrap_err(),
            PasswordPolicyError::TooShort { min: 6, actual: 5 }
        );
    }

    #[test]
    fn test_password_minimum_length_accepted() {
        assert!(ClearTextPassword::new("secret".to_string()).is_ok());
    }

    #[test]
    fn test_custom_minimum() {
        assert!(ClearTextPassword::with_min_length("abc".to_string(), 3).is_ok());
        assert!(ClearTextPassword::with_min_length("abc".to_string(), 4).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 6 characters, 18 bytes
        assert!(ClearTextPassword::new("パスワード安".to_string()).is_ok());
        // 5 characters, 15 bytes
        assert!(ClearTextPassword::new("パスワード".to_string()).is_err());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("secret1".to_string()).unwrap();
        let hashed = password.hash().unwrap();

        assert!(hashed.verify(&ClearTextPassword::candidate("secret1".to_string())));
        assert!(!hashed.verify(&ClearTextPassword::candidate("secret1x".to_string())));
    }

    #[test]
    fn test_hashes_are_salted() {
        let password = ClearTextPassword::new("secret1".to_string()).unwrap();
        let first = password.hash().unwrap();
        let second = password.hash().unwrap();

        assert_ne!(first.as_phc_string(), second.as_phc_string());
        assert!(first.as_phc_string().starts_with("$argon2id$"));
    }

    #[test]
    fn test_stored_roundtrip() {
        let password = ClearTextPassword::new("secret1".to_string()).unwrap();
        let hashed = password.hash().unwrap();

        let restored = HashedPassword::from_stored(hashed.as_phc_string());
        assert!(restored.verify(&password));
    }

    #[test]
    fn test_corrupt_hash_is_a_mismatch() {
        let hashed = HashedPassword::from_stored("not_a_valid_hash");
        assert!(!hashed.verify(&ClearTextPassword::candidate("secret1".to_string())));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::candidate("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}

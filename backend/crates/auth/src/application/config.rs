//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use platform::password::MIN_PASSWORD_LENGTH;
use platform::token::{DEFAULT_TOKEN_TTL_HOURS, TokenError, TokenService};

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// `iss` claim written into and required from every token
    pub jwt_issuer: String,
    /// Token lifetime (48 hours)
    pub token_ttl: Duration,
    /// Minimum password length at sign-up, in characters
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            jwt_issuer: "2do".to_string(),
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_HOURS as u64 * 3600),
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("token_ttl", &self.token_ttl)
            .field("min_password_length", &self.min_password_length)
            .finish()
    }
}

impl AuthConfig {
    /// Create config with a random signing secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self {
            jwt_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Build the token service this config describes
    pub fn token_service(&self) -> Result<TokenService, TokenError> {
        let ttl = chrono::Duration::from_std(self.token_ttl)
            .map_err(|e| TokenError::Configuration(format!("Invalid token TTL: {e}")))?;
        TokenService::new(&self.jwt_secret, self.jwt_issuer.clone(), ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.jwt_issuer, "2do");
        assert_eq!(config.token_ttl, Duration::from_secs(48 * 3600));
        assert_eq!(config.min_password_length, 6);
    }

    #[test]
    fn test_default_has_no_usable_secret() {
        assert!(matches!(
            AuthConfig::default().token_service(),
            Err(TokenError::Configuration(_))
        ));
    }

    #[test]
    fn test_development_config_signs() {
        let service = AuthConfig::development().token_service().unwrap();
        let token = service.issue("someone").unwrap();
        assert_eq!(service.verify(&token).unwrap().sub, "someone");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig {
            jwt_secret: "super-secret".to_string(),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}

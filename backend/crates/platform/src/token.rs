//! Identity Token Service
//!
//! Mints and verifies HS256-signed, time-limited tokens whose subject
//! is an account id. Tokens are never stored; a token is valid exactly
//! while its signature checks out and its expiry lies in the future.

use std::fmt;

use axum::http::{HeaderMap, header};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crypto::from_base64url;

/// The only accepted signing algorithm
const ALGORITHM: Algorithm = Algorithm::HS256;
const ALGORITHM_NAME: &str = "HS256";

/// Default token lifetime
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 48;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Authorization header present but not `Bearer <token>`
    #[error("Authorization header format must be Bearer {{token}}")]
    MalformedHeader,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token has expired")]
    Expired,

    #[error("Token is malformed")]
    MalformedToken,

    /// Header names an algorithm other than HS256
    #[error("Token algorithm {0} is not accepted")]
    WrongAlgorithm(String),

    /// Missing secret or signing failure; never a client problem
    #[error("Token service misconfigured: {0}")]
    Configuration(String),
}

// ============================================================================
// Claims
// ============================================================================

/// Signed claim set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: String,
    pub iss: String,
    /// Expiry (unix seconds)
    pub exp: i64,
    /// Issued at (unix seconds)
    pub iat: i64,
}

#[derive(Deserialize)]
struct RawHeader {
    alg: Option<String>,
}

// ============================================================================
// Token Service
// ============================================================================

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    ttl: Duration,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"[REDACTED]")
            .field("issuer", &self.issuer)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenService {
    pub fn new(secret: &str, issuer: impl Into<String>, ttl: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::Configuration(
                "signing secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.into(),
            ttl,
        })
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Mint a token for `subject` expiring after the configured lifetime
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_expiring_at(subject, Utc::now() + self.ttl)
    }

    /// Mint a token with an explicit expiry
    pub fn issue_expiring_at(
        &self,
        subject: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
            iss: self.issuer.clone(),
            exp: expires_at.timestamp(),
            iat: Utc::now().timestamp(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            TokenError::Configuration(e.to_string())
        })
    }

    /// Verify signature, algorithm, issuer and expiry
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        if token.is_empty() {
            return Err(TokenError::MalformedToken);
        }

        check_header_algorithm(token)?;

        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature | ErrorKind::InvalidIssuer => {
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidAlgorithm => {
                    TokenError::WrongAlgorithm("unknown".to_string())
                }
                _ => TokenError::MalformedToken,
            }
        })?;

        // Expiry must be strictly in the future
        if data.claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

/// Reject anything but HS256 before the signature is looked at
fn check_header_algorithm(token: &str) -> Result<(), TokenError> {
    let segment = token.split('.').next().ok_or(TokenError::MalformedToken)?;
    let bytes = from_base64url(segment).map_err(|_| TokenError::MalformedToken)?;
    let header: RawHeader =
        serde_json::from_slice(&bytes).map_err(|_| TokenError::MalformedToken)?;

    match header.alg {
        Some(alg) if alg == ALGORITHM_NAME => Ok(()),
        Some(alg) => Err(TokenError::WrongAlgorithm(alg)),
        None => Err(TokenError::MalformedToken),
    }
}

/// Pull the token out of `Authorization: Bearer <token>`
///
/// An absent header yields an empty string, which then fails
/// verification like any other bad token.
pub fn extract_bearer(headers: &HeaderMap) -> Result<String, TokenError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(String::new());
    };

    let value = value.to_str().map_err(|_| TokenError::MalformedHeader)?;
    let parts: Vec<&str> = value.split(' ').collect();

    match parts.as_slice() {
        [scheme, token] if scheme.eq_ignore_ascii_case("bearer") => Ok((*token).to_string()),
        _ => Err(TokenError::MalformedHeader),
    }
}

//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
}

/// Account summary returned from sign-up
#[derive(Debug, Clone, Serialize)]
pub struct AccountView {
    pub id: String,
    pub username: String,
}

// ============================================================================
// Log In
// ============================================================================

/// Log in request
#[derive(Debug, Clone, Deserialize)]
pub struct LogInRequest {
    pub username: String,
    pub password: String,
}

/// Log in response
#[derive(Debug, Clone, Serialize)]
pub struct LogInResponse {
    pub result: String,
    pub token: String,
}

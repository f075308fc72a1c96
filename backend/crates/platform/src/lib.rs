//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Random secrets and base64 helpers
//! - Password hashing (Argon2id)
//! - Signed identity tokens (HS256) and bearer header parsing

pub mod crypto;
pub mod password;
pub mod token;

//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Account entity, verified identity, repository trait
//! - `application/` - Sign-up, log-in and request authentication use cases
//! - `infra/` - Account storage over a [`docstore::DocumentStore`]
//! - `presentation/` - HTTP handlers, DTOs, access gate middleware, router
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Stateless HS256 bearer tokens carrying the account id
//! - Every gated request re-reads the account, so blocking takes effect
//!   on the next request

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::{account::Account, identity::Identity};
pub use domain::repository::AccountRepository;
pub use error::{AuthError, AuthResult};
pub use infra::account_store::AccountStore;
pub use presentation::middleware::{AuthGate, require_identity};
pub use presentation::handlers::AuthAppState;
pub use presentation::router::{auth_router, home_route};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;

//! API composition root
//!
//! Wires the auth and todo routers over whichever storage backend the
//! binary picked, and adds the cross-cutting HTTP layers.

pub mod app;
pub mod config;

pub use app::{REQUEST_TIMEOUT, build_app};
pub use config::{ConfigError, ServerConfig, StoreBackend};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

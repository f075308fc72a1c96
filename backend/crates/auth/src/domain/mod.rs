//! Domain Layer
//!
//! Accounts, verified identities and the account repository contract.

pub mod entity;
pub mod repository;

//! Infrastructure Layer

pub mod account_store;

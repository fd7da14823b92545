//! # localesync-core
//!
//! Core types, traits, configuration, document store, and error handling for
//! localesync.

pub mod config;
pub mod error;
pub mod overrides;
pub mod retry;
pub mod store;
pub mod traits;

//! # localesync-providers
//!
//! Translation backends for localesync.

pub mod google;

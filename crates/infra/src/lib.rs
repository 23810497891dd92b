//! # Daybook Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON, TOML)
//! - Tracing subscriber setup
//! - Appointment feed adapters
//!
//! ## Architecture
//! - Implements traits defined in `daybook-core`
//! - Depends on `daybook-domain` and `daybook-core`
//! - Contains all "impure" code (environment, filesystem, global subscriber)

pub mod config;
pub mod feeds;
pub mod observability;

// Re-export commonly used items
pub use feeds::{parse_response, JsonFileFeed};
pub use observability::init_tracing;

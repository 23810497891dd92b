//! # Daybook Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Display-zone resolution (civil time ⇄ UTC instant)
//! - The normalize / merge / aggregate reconciliation pipeline
//! - Port interfaces for appointment feeds
//! - The reconciliation service tying a feed to the pipeline
//!
//! ## Architecture Principles
//! - Only depends on `daybook-domain`
//! - No file, HTTP, or CLI code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod feed;
pub mod reconcile;

// Re-export specific items to avoid ambiguity
pub use feed::{AppointmentFeed, ReconciliationService};
pub use reconcile::{aggregate, merge, normalize, AppointmentReconciler, DisplayZone};

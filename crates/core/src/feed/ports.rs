//! Port interfaces for appointment feeds
//!
//! These traits define the boundary between reconciliation and whatever
//! fetches the scheduling API's response (HTTP client, recorded fixture, ...).

use daybook_domain::{AppointmentsResponse, Result};

/// Source of one day's appointments
///
/// Synchronous. An adapter that talks to the network blocks inside `fetch`.
pub trait AppointmentFeed: Send + Sync {
    /// Fetch the appointments response
    fn fetch(&self) -> Result<AppointmentsResponse>;

    /// Human-readable origin, used in logs
    fn describe(&self) -> String;
}

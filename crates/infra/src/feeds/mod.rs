//! Appointment feed adapters
//!
//! Implementations of `daybook_core::AppointmentFeed`.

pub mod json_file;

pub use json_file::{parse_response, JsonFileFeed};

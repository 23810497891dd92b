//! Domain types and models
//!
//! Raw records as delivered by the scheduling API live in [`appointment`];
//! the canonical per-customer form produced by reconciliation lives in
//! [`summary`].

pub mod appointment;
pub mod summary;

// Re-export for convenience
pub use appointment::{
    AppointmentsData, AppointmentsResponse, BookedAppointment, BookingData, RawAppointment,
    StaffMemberTreatment,
};
pub use summary::{AppointmentSummary, MergedBook};

//! Appointment feeds and the service that reconciles them

pub mod ports;
pub mod service;

pub use ports::AppointmentFeed;
pub use service::ReconciliationService;

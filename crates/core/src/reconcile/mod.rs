//! Appointment reconciliation
//!
//! Groups a day's appointment records by customer and merges each group into
//! one consolidated summary.
//!
//! # Pipeline
//! ```text
//! RawAppointment[] ──► normalize ──► AppointmentSummary ──► aggregate ──► MergedBook
//!                                                              │
//!                                                              └──► merge (existing, new)
//! ```
//!
//! The free functions [`normalize`], [`merge`] and [`aggregate`] take the
//! zone explicitly. [`AppointmentReconciler`] resolves the configured zone
//! once and threads it through every call.

pub mod aggregator;
pub mod merger;
pub mod normalizer;
pub mod zone;

use daybook_domain::{
    AppointmentSummary, AppointmentsResponse, BookedAppointment, MergedBook, RawAppointment,
    ReconcileConfig, Result,
};
use tracing::{info, warn};

pub use aggregator::aggregate;
pub use merger::merge;
pub use normalizer::normalize;
pub use zone::DisplayZone;

/// Reconciles appointment records in a single configured zone
#[derive(Debug, Clone, Copy)]
pub struct AppointmentReconciler {
    zone: DisplayZone,
}

impl AppointmentReconciler {
    /// Create a reconciler for the configured zone.
    ///
    /// # Errors
    /// Returns `DaybookError::TimezoneUnavailable` if the zone is unknown.
    pub fn new(config: &ReconcileConfig) -> Result<Self> {
        Ok(Self { zone: DisplayZone::resolve(&config.timezone)? })
    }

    /// Zone every record is read and rendered in.
    pub fn zone(&self) -> &DisplayZone {
        &self.zone
    }

    /// See [`normalize`].
    ///
    /// # Errors
    /// Returns `DaybookError::MalformedTimestamp` for an unparseable time.
    pub fn normalize(&self, record: &BookedAppointment) -> Result<AppointmentSummary> {
        normalize(record, &self.zone)
    }

    /// See [`merge`].
    ///
    /// # Errors
    /// Returns `DaybookError::MalformedTimestamp` for an unparseable start.
    pub fn merge(
        &self,
        a: &AppointmentSummary,
        b: &AppointmentSummary,
    ) -> Result<AppointmentSummary> {
        merge(a, b, &self.zone)
    }

    /// See [`aggregate`].
    ///
    /// # Errors
    /// Propagates the first normalize or merge failure.
    pub fn aggregate(&self, records: &[RawAppointment]) -> Result<MergedBook> {
        aggregate(records, &self.zone)
    }

    /// Reconcile a full API response.
    ///
    /// An unsuccessful envelope or a count that disagrees with the decoded
    /// records is logged, not rejected; the records present are still folded.
    ///
    /// # Errors
    /// Propagates the first normalize or merge failure.
    pub fn reconcile_response(&self, response: &AppointmentsResponse) -> Result<MergedBook> {
        let records = response.appointments();

        if !response.success {
            warn!(info = ?response.info, "Scheduling API reported an unsuccessful response");
        }

        if let Some(expected) = response.appointments_count {
            if usize::try_from(expected).ok() != Some(records.len()) {
                warn!(expected, received = records.len(), "Appointment count mismatch");
            }
        }

        let book = self.aggregate(records)?;

        info!(
            records = records.len(),
            customers = book.len(),
            zone = self.zone.name(),
            "Reconciled appointments"
        );

        Ok(book)
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use daybook_core::AppointmentFeed;
use daybook_domain::{
    AppointmentsData, AppointmentsResponse, DaybookError, RawAppointment, Result as DomainResult,
};

/// In-memory mock for `AppointmentFeed`.
///
/// Returns the same response (or error) on every fetch and counts calls, so
/// tests can assert that nothing is retried.
#[derive(Clone)]
pub struct MockAppointmentFeed {
    outcome: Result<AppointmentsResponse, DaybookError>,
    fetches: Arc<AtomicUsize>,
}

impl MockAppointmentFeed {
    /// Create a new mock serving the provided records in a successful envelope.
    pub fn new(appointments: Vec<RawAppointment>) -> Self {
        let count = u32::try_from(appointments.len()).ok();
        Self::with_response(AppointmentsResponse {
            success: true,
            info: Vec::new(),
            data: AppointmentsData { appointments },
            appointments_count: count,
        })
    }

    pub fn with_response(response: AppointmentsResponse) -> Self {
        Self { outcome: Ok(response), fetches: Arc::new(AtomicUsize::new(0)) }
    }

    /// A feed whose every fetch fails with `error`.
    pub fn failing(error: DaybookError) -> Self {
        Self { outcome: Err(error), fetches: Arc::new(AtomicUsize::new(0)) }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl AppointmentFeed for MockAppointmentFeed {
    fn fetch(&self) -> DomainResult<AppointmentsResponse> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    fn describe(&self) -> String {
        "mock feed".to_string()
    }
}

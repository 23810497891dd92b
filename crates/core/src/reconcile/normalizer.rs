//! Normalizer - turns one booked record into an `AppointmentSummary`

use daybook_domain::constants::SECONDS_PER_MINUTE;
use daybook_domain::{AppointmentSummary, BookedAppointment, Result};

use super::zone::DisplayZone;

/// Normalize a booked record against the display zone.
///
/// `record.time` is read as local time in `zone`; the summary's start and
/// end are rendered back in the same zone. Duration is the treatment's
/// `total_duration` in minutes, not rounded.
///
/// # Errors
/// Returns `DaybookError::MalformedTimestamp` if `record.time` is not a
/// civil date-time.
pub fn normalize(record: &BookedAppointment, zone: &DisplayZone) -> Result<AppointmentSummary> {
    let start = zone.instant_of(&record.time)?;
    let treatment = record.treatment();
    let duration = f64::from(treatment.total_duration) / SECONDS_PER_MINUTE;
    let end = zone.add_minutes(start, duration)?;

    Ok(AppointmentSummary {
        name: record.customer_full_name.clone(),
        start_time: zone.format(start),
        end_time: zone.format(end),
        duration,
        treatment_name: treatment.name.clone(),
        paid_online: record.paid_online,
        price: treatment.price,
    })
}

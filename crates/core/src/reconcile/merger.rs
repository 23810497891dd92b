//! Merger - combines two summaries of the same customer
//!
//! The merged window starts at the earlier of the two starts and runs for the
//! combined duration. It is not the union of the two spans: when the
//! appointments are not back-to-back, the gap between them is absorbed and
//! the end time is earlier than the later appointment's real end.
//!
//! Callers pass the summary already in the book as `a` and the newly
//! normalized one as `b`. `a.name == b.name` is assumed, not checked.

use daybook_domain::constants::TREATMENT_SEPARATOR;
use daybook_domain::{AppointmentSummary, Result};

use super::zone::DisplayZone;

/// Merge `b` into `a`.
///
/// - `duration` is `a.duration + b.duration`
/// - start is `b`'s only if `b` starts strictly earlier; ties keep `a`
/// - end is the chosen start plus the combined duration
/// - `treatment_name` is `a`'s then `b`'s, in call order
/// - `name`, `paid_online` and `price` come from `a`
///
/// # Errors
/// Returns `DaybookError::MalformedTimestamp` if either start time cannot be
/// parsed back into an instant.
pub fn merge(
    a: &AppointmentSummary,
    b: &AppointmentSummary,
    zone: &DisplayZone,
) -> Result<AppointmentSummary> {
    let a_start = zone.instant_of(&a.start_time)?;
    let b_start = zone.instant_of(&b.start_time)?;
    let duration = a.duration + b.duration;

    let (start_time, anchor) = if b_start < a_start {
        (b.start_time.clone(), b_start)
    } else {
        (a.start_time.clone(), a_start)
    };
    let end_time = zone.format(zone.add_minutes(anchor, duration)?);

    Ok(AppointmentSummary {
        name: a.name.clone(),
        start_time,
        end_time,
        duration,
        treatment_name: format!("{}{TREATMENT_SEPARATOR}{}", a.treatment_name, b.treatment_name),
        paid_online: a.paid_online,
        price: a.price,
    })
}

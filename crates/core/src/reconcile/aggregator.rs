//! Aggregator - folds a day's records into one summary per customer

use std::collections::btree_map::Entry;

use daybook_domain::{MergedBook, RawAppointment, Result};
use tracing::{debug, trace, warn};

use super::merger::merge;
use super::normalizer::normalize;
use super::zone::DisplayZone;

/// Fold `records` in input order into a `MergedBook`.
///
/// Deleted and unrecognized records are skipped. The first booked record for
/// a customer is inserted as-is; every later one is merged into the existing
/// entry with the existing summary as `a`.
///
/// # Errors
/// Any normalize or merge failure aborts the whole fold; no partial book is
/// returned.
pub fn aggregate(records: &[RawAppointment], zone: &DisplayZone) -> Result<MergedBook> {
    let mut book = MergedBook::new();

    for (index, record) in records.iter().enumerate() {
        let Some(booked) = record.as_booked() else {
            if matches!(record, RawAppointment::Unrecognized) {
                warn!(index, "Skipping appointment with unrecognized state");
            } else {
                trace!(index, state = record.state(), "Skipping appointment");
            }
            continue;
        };

        let summary = normalize(booked, zone)?;

        match book.entry(summary.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(summary);
            }
            Entry::Occupied(mut slot) => {
                let merged = merge(slot.get(), &summary, zone)?;
                debug!(
                    customer = %merged.name,
                    treatments = %merged.treatment_name,
                    "Merged appointment into existing summary"
                );
                slot.insert(merged);
            }
        }
    }

    Ok(book)
}

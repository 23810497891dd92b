//! Canonical appointment summaries and the per-customer book they fold into

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

/// One customer's consolidated appointment for the day.
///
/// `start_time` and `end_time` are civil times in the display zone rendered as
/// `yyyy-MM-dd HH:mm`; seconds are truncated. `paid_online` and `price` belong
/// to the first record processed for the customer and are not combined by
/// merges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSummary {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    /// Minutes; may be fractional
    pub duration: f64,
    pub treatment_name: String,
    pub paid_online: bool,
    pub price: f64,
}

/// Customer name → merged summary, the output of one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergedBook {
    entries: BTreeMap<String, AppointmentSummary>,
}

impl MergedBook {
    /// An empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `customer` already has a summary.
    pub fn contains(&self, customer: &str) -> bool {
        self.entries.contains_key(customer)
    }

    /// Summary for `customer`, if any.
    pub fn get(&self, customer: &str) -> Option<&AppointmentSummary> {
        self.entries.get(customer)
    }

    /// Entry for `customer`, for callers that insert-or-replace in one step.
    pub fn entry(&mut self, customer: String) -> btree_map::Entry<'_, String, AppointmentSummary> {
        self.entries.entry(customer)
    }

    /// Number of customers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no customer has a summary.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Summaries ordered by customer name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AppointmentSummary)> {
        self.entries.iter().map(|(name, summary)| (name.as_str(), summary))
    }
}

//! Reconciliation service - fetches a day's appointments and merges them

use std::sync::Arc;

use daybook_domain::{MergedBook, Result};
use tracing::{error, info};

use super::ports::AppointmentFeed;
use crate::reconcile::AppointmentReconciler;

/// Reconciliation service
pub struct ReconciliationService {
    feed: Arc<dyn AppointmentFeed>,
    reconciler: AppointmentReconciler,
}

impl ReconciliationService {
    /// Create a new reconciliation service
    pub fn new(feed: Arc<dyn AppointmentFeed>, reconciler: AppointmentReconciler) -> Self {
        Self { feed, reconciler }
    }

    /// Reconciler the fetched response is folded with.
    pub fn reconciler(&self) -> &AppointmentReconciler {
        &self.reconciler
    }

    /// Fetch once and reconcile.
    ///
    /// Feed failures propagate unchanged; nothing is retried.
    ///
    /// # Errors
    /// Returns the feed's error, or the first normalize/merge failure.
    pub fn run(&self) -> Result<MergedBook> {
        let source = self.feed.describe();
        info!(source = %source, "Fetching appointments");

        let response = self.feed.fetch().inspect_err(|err| {
            error!(source = %source, error = %err, "Failed to fetch appointments");
        })?;

        self.reconciler.reconcile_response(&response).inspect_err(|err| {
            error!(source = %source, error = %err, "Failed to reconcile appointments");
        })
    }
}

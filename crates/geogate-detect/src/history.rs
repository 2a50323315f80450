//! Bounded location history over a [`HistoryStore`] backend.
//!
//! The history is an anomaly-detection baseline, not an audit trail: at
//! most [`MAX_HISTORY_SAMPLES`] fixes are retained, oldest evicted first,
//! and every write re-truncates. Storage failures degrade to "no history
//! available" (logged, never propagated), which weakens detection for
//! that call but never interrupts the attendance flow.

use tracing::warn;

use geogate_core::{HistorySample, HistoryStore, LocationFix, MAX_HISTORY_SAMPLES};

/// A bounded, persisted sequence of recent location fixes.
pub struct LocationHistory<S: HistoryStore> {
    store: S,
    max_samples: usize,
}

impl<S: HistoryStore> LocationHistory<S> {
    /// Creates a history over the given backend with the default bound.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_capacity(store, MAX_HISTORY_SAMPLES)
    }

    /// Creates a history with an explicit bound (minimum 1).
    #[must_use]
    pub fn with_capacity(store: S, max_samples: usize) -> Self {
        Self {
            store,
            max_samples: max_samples.max(1),
        }
    }

    /// Maximum number of samples retained.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_samples
    }

    /// Appends a fix to the persisted history.
    ///
    /// Reads the current document, pushes the coerced sample, truncates
    /// to the most recent `capacity()` entries, and writes back. A read
    /// failure is treated as an empty document; a write failure is
    /// logged and the write skipped. Neither surfaces to the caller.
    pub fn append(&mut self, fix: &LocationFix) {
        let mut samples = self.snapshot();
        samples.push(HistorySample::from(fix));
        if samples.len() > self.max_samples {
            let excess = samples.len() - self.max_samples;
            samples.drain(..excess);
        }
        if let Err(err) = self.store.save(&samples) {
            warn!("skipping location history write: {err}");
        }
    }

    /// The persisted sequence, oldest first.
    ///
    /// A backend failure degrades to an empty sequence, with a warning.
    #[must_use]
    pub fn snapshot(&self) -> Vec<HistorySample> {
        match self.store.load() {
            Ok(samples) => samples,
            Err(err) => {
                warn!("treating location history as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Consumes the history, returning the backend.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}

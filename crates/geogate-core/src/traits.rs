//! Core trait definitions for the geogate system.
//!
//! The single seam here is [`HistoryStore`]: the detection pipeline never
//! talks to a concrete persistence mechanism, only to this trait. Backends
//! can be an in-memory vector, a JSON file, or whatever key-value facility
//! the host platform provides.

use crate::error::StoreError;
use crate::types::HistorySample;

/// Persistence backend for the location history document.
///
/// The history is one logical document: an ordered sequence of samples,
/// oldest first. Implementations read and write the whole document; the
/// bounded-length policy lives above this trait, in the history layer.
///
/// # Contract
///
/// - `load` on a backend that has never been written returns an empty
///   sequence, not an error.
/// - `save` replaces the whole document.
/// - Errors are reported, not retried; the caller owns degradation.
pub trait HistoryStore: Send + Sync {
    /// Reads the persisted history document.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the stored
    /// document cannot be decoded.
    fn load(&self) -> Result<Vec<HistorySample>, StoreError>;

    /// Replaces the persisted history document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be encoded or written.
    fn save(&mut self, samples: &[HistorySample]) -> Result<(), StoreError>;
}

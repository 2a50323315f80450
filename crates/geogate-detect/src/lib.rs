//! Geogate Detection Library
//!
//! Multi-signal fake-location detection for attendance capture, layered
//! over a small persisted history of recent fixes.
//!
//! # Features
//!
//! - **Heuristic Scorer**: ten independent weighted checks aggregated
//!   into a confidence sum and a fake/genuine verdict
//! - **Location History**: bounded, persisted baseline of recent fixes
//!   with pluggable [`HistoryStore`](geogate_core::HistoryStore) backends
//! - **Fail-Open Policy**: internal failures yield a permissive sentinel
//!   result, never an error or a panic
//! - **Fix Quality**: a history-free soft quality score for UI gating
//!
//! # Example
//!
//! ```rust
//! use geogate_core::LocationFix;
//! use geogate_detect::{FakeLocationDetector, MemoryStore};
//!
//! let mut detector = FakeLocationDetector::with_defaults(MemoryStore::new());
//!
//! let fix = LocationFix::new(1_705_300_200_000, 19.076, 72.8777)
//!     .with_accuracy(8.0)
//!     .with_speed(1.2);
//!
//! let result = detector.detect(&fix);
//! assert!(!result.is_fake);
//! assert_eq!(result.confidence, 0);
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod detector;
pub mod history;
pub mod quality;
pub mod store;

// Re-export main types for convenience
pub use config::{
    default_landmarks, CheckWeights, DetectorConfig, DetectorConfigBuilder, GeoFence, Landmark,
    IST_OFFSET_SECS,
};
pub use detector::{DetectionMethod, FakeLocationDetector, ValidationResult};
pub use history::LocationHistory;
pub use quality::fix_quality;
pub use store::{JsonFileStore, MemoryStore, DEFAULT_HISTORY_FILE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{DetectorConfig, GeoFence, Landmark};
    pub use crate::detector::{DetectionMethod, FakeLocationDetector, ValidationResult};
    pub use crate::history::LocationHistory;
    pub use crate::store::{JsonFileStore, MemoryStore};
    pub use geogate_core::prelude::*;
}

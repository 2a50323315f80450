//! # Geogate Core
//!
//! Core types, traits, and geometry for the geogate location-authenticity
//! system.
//!
//! This crate provides the foundational building blocks used throughout the
//! geogate workspace:
//!
//! - **Core Data Types**: [`LocationFix`] and [`HistorySample`] for
//!   representing device position readings and their persisted projection.
//!
//! - **Error Types**: [`DetectError`] and [`StoreError`] via the [`error`]
//!   module.
//!
//! - **Traits**: the [`HistoryStore`] seam that decouples detection from
//!   any concrete persistence mechanism.
//!
//! - **Geometry**: great-circle distance via [`geo::haversine_m`].
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization via serde
//!
//! ## Example
//!
//! ```rust
//! use geogate_core::{GeoPoint, LocationFix, geo::haversine_m};
//!
//! let fix = LocationFix::new(1_700_000_000_000, 19.076, 72.8777)
//!     .with_accuracy(8.0);
//!
//! let office = GeoPoint::new(19.0728, 72.8826);
//! let d = haversine_m(fix.point(), office);
//! assert!(d < 1_000.0);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod geo;
pub mod traits;
pub mod types;

// Re-export commonly used types at the crate root
pub use error::{DetectError, DetectResult, StoreError};
pub use geo::{haversine_m, GeoPoint, EARTH_RADIUS_M};
pub use traits::HistoryStore;
pub use types::{HistorySample, LocationFix, UNKNOWN_PROVIDER};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of samples retained in the location history.
pub const MAX_HISTORY_SAMPLES: usize = 50;

/// Prelude module for convenient imports.
///
/// ```rust
/// use geogate_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{DetectError, DetectResult, StoreError};
    pub use crate::geo::{haversine_m, GeoPoint};
    pub use crate::traits::HistoryStore;
    pub use crate::types::{HistorySample, LocationFix};
    pub use crate::MAX_HISTORY_SAMPLES;
}

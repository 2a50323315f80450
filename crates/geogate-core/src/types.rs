//! Core data types for the geogate location-authenticity system.
//!
//! Two shapes matter here, mirroring the two sides of the persistence
//! boundary:
//!
//! - [`LocationFix`]: a position reading as acquired from the device,
//!   with every platform-dependent field optional.
//! - [`HistorySample`]: the persisted projection of a fix. Absent fields
//!   are coerced to fixed defaults on conversion so the stored document
//!   has a stable schema.
//!
//! Timestamps are milliseconds since the Unix epoch throughout.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A single device position reading.
///
/// This is the input contract of the detection pipeline. Only the
/// timestamp and the coordinate pair are guaranteed; accuracy, speed,
/// altitude, and provider vary by platform and sensor availability.
/// A reading is never rejected for missing fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocationFix {
    /// Capture time, milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    /// Radius of the 68% confidence circle in meters, if reported.
    pub accuracy_m: Option<f64>,
    /// Reported instantaneous speed in m/s. May be negative on some
    /// platforms, which is itself an anomaly signal rather than an
    /// input error.
    pub speed_mps: Option<f64>,
    /// Altitude above the reference ellipsoid in meters, if reported.
    pub altitude_m: Option<f64>,
    /// Name of the positioning backend, if the platform exposes one.
    pub provider: Option<String>,
}

impl LocationFix {
    /// Creates a fix with only the required fields.
    #[must_use]
    pub fn new(timestamp_ms: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            timestamp_ms,
            latitude,
            longitude,
            accuracy_m: None,
            speed_mps: None,
            altitude_m: None,
            provider: None,
        }
    }

    /// Sets the reported accuracy.
    #[must_use]
    pub fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }

    /// Sets the reported speed.
    #[must_use]
    pub fn with_speed(mut self, speed_mps: f64) -> Self {
        self.speed_mps = Some(speed_mps);
        self
    }

    /// Sets the reported altitude.
    #[must_use]
    pub fn with_altitude(mut self, altitude_m: f64) -> Self {
        self.altitude_m = Some(altitude_m);
        self
    }

    /// Sets the positioning provider name.
    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// The coordinate pair of this fix.
    #[must_use]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Default provider string persisted when the platform reports none.
pub const UNKNOWN_PROVIDER: &str = "unknown";

/// The persisted projection of a [`LocationFix`].
///
/// Altitude is not persisted; history is an anomaly-detection baseline,
/// not an audit trail, and no history-based check reads it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistorySample {
    /// Capture time, milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Reported accuracy in meters; `0.0` when the fix carried none.
    pub accuracy_m: f64,
    /// Reported speed in m/s; `0.0` when the fix carried none.
    pub speed_mps: f64,
    /// Positioning provider; [`UNKNOWN_PROVIDER`] when the fix carried none.
    pub provider: String,
}

impl HistorySample {
    /// The coordinate pair of this sample.
    #[must_use]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

impl From<&LocationFix> for HistorySample {
    fn from(fix: &LocationFix) -> Self {
        Self {
            timestamp_ms: fix.timestamp_ms,
            latitude: fix.latitude,
            longitude: fix.longitude,
            accuracy_m: fix.accuracy_m.unwrap_or(0.0),
            speed_mps: fix.speed_mps.unwrap_or(0.0),
            provider: fix
                .provider
                .clone()
                .unwrap_or_else(|| UNKNOWN_PROVIDER.to_string()),
        }
    }
}

//! Detector configuration.
//!
//! Every tunable of the heuristic is injected here rather than compiled
//! in: the landmark list, the geofence, the per-check weights, and the
//! numeric thresholds. Defaults reproduce the production attendance
//! deployment (India geofence, IST clock).

use serde::{Deserialize, Serialize};

use geogate_core::GeoPoint;

/// A named reference point that spoofing tools commonly default to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Display name, used verbatim in warnings.
    pub name: String,
    /// Coordinates of the landmark.
    pub point: GeoPoint,
}

impl Landmark {
    /// Creates a new landmark.
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            point: GeoPoint::new(latitude, longitude),
        }
    }
}

/// An axis-aligned latitude/longitude bounding box with a display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFence {
    /// Region name, used verbatim in warnings.
    pub name: String,
    /// Southern edge, degrees (inclusive).
    pub min_latitude: f64,
    /// Northern edge, degrees (inclusive).
    pub max_latitude: f64,
    /// Western edge, degrees (inclusive).
    pub min_longitude: f64,
    /// Eastern edge, degrees (inclusive).
    pub max_longitude: f64,
}

impl GeoFence {
    /// Creates a new geofence.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        }
    }

    /// The India bounding box used by the attendance deployment.
    #[must_use]
    pub fn india() -> Self {
        Self::new("India", 6.0, 37.0, 68.0, 97.0)
    }

    /// A fence spanning the whole globe; nothing is ever outside it.
    #[must_use]
    pub fn global() -> Self {
        Self::new("Earth", -90.0, 90.0, -180.0, 180.0)
    }

    /// Returns `true` if the point lies inside the fence (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.latitude >= self.min_latitude
            && point.latitude <= self.max_latitude
            && point.longitude >= self.min_longitude
            && point.longitude <= self.max_longitude
    }
}

/// Confidence weight contributed by each check when it fires.
///
/// Weights sum without interaction terms; the verdict compares the sum
/// against [`DetectorConfig::fake_threshold`]. No single weak signal
/// reaches the default threshold on its own, while the strong signals
/// (known landmark, outside geofence) do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckWeights {
    /// Reported accuracy worse than the suspicious limit.
    pub low_accuracy: u32,
    /// Reported speed negative or implausibly high.
    pub reported_speed: u32,
    /// Implied travel speed from the previous fix too high.
    pub location_jump: u32,
    /// Within the landmark radius of a known spoof-default coordinate.
    pub known_fake_location: u32,
    /// Outside the configured geofence.
    pub outside_geofence: u32,
    /// Altitude outside the plausible range.
    pub altitude: u32,
    /// Positioning provider name matches a suspicious pattern.
    pub provider: u32,
    /// Long movement during night hours.
    pub night_movement: u32,
    /// Same coordinates repeated across the history.
    pub repeated_coordinates: u32,
    /// Large accuracy change from the previous fix.
    pub accuracy_jump: u32,
}

impl Default for CheckWeights {
    fn default() -> Self {
        Self {
            low_accuracy: 20,
            reported_speed: 30,
            location_jump: 40,
            known_fake_location: 50,
            outside_geofence: 60,
            altitude: 25,
            provider: 35,
            night_movement: 30,
            repeated_coordinates: 20,
            accuracy_jump: 15,
        }
    }
}

/// Indian Standard Time offset from UTC, in seconds.
pub const IST_OFFSET_SECS: i32 = 19_800;

/// Configuration for the fake-location detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Confidence sum at or above which a fix is ruled fake.
    pub fake_threshold: u32,
    /// Accuracy radius (meters) above which accuracy is suspicious.
    pub suspicious_accuracy_m: f64,
    /// Reported speed (m/s) above which the reading is implausible.
    pub max_reported_speed_mps: f64,
    /// Implied travel speed (m/s) from the previous fix above which the
    /// movement is implausible.
    pub max_travel_speed_mps: f64,
    /// Radius (meters) around a landmark that counts as "at" it.
    pub landmark_radius_m: f64,
    /// Known spoof-default coordinates.
    pub landmarks: Vec<Landmark>,
    /// Region the workforce is expected to stay inside.
    pub geofence: GeoFence,
    /// Lowest plausible altitude in meters.
    pub min_altitude_m: f64,
    /// Highest plausible altitude in meters.
    pub max_altitude_m: f64,
    /// Case-insensitive substrings of suspicious provider names.
    pub suspicious_providers: Vec<String>,
    /// Local hour after which night begins (exclusive).
    pub night_start_hour: u32,
    /// Local hour before which night persists (exclusive).
    pub night_end_hour: u32,
    /// Distance (meters) from the previous fix that counts as night
    /// movement.
    pub night_distance_m: f64,
    /// Window (seconds) within which night movement is suspicious.
    pub night_window_secs: f64,
    /// Coordinate tolerance (degrees, per axis) for the repeated-fix check.
    pub repeat_epsilon_deg: f64,
    /// Number of near-identical prior fixes above which repetition is
    /// suspicious.
    pub repeat_limit: usize,
    /// Accuracy change (meters) from the previous fix above which the
    /// jump is suspicious.
    pub accuracy_jump_m: f64,
    /// Fixed UTC offset (seconds) defining "local" for the night check.
    pub utc_offset_secs: i32,
    /// Per-check confidence weights.
    pub weights: CheckWeights,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            fake_threshold: 50,
            suspicious_accuracy_m: 100.0,
            max_reported_speed_mps: 1000.0,
            max_travel_speed_mps: 50.0,
            landmark_radius_m: 1000.0,
            landmarks: default_landmarks(),
            geofence: GeoFence::india(),
            min_altitude_m: -100.0,
            max_altitude_m: 9000.0,
            suspicious_providers: vec![
                "mock".to_string(),
                "fused".to_string(),
                "gps_fused".to_string(),
                "network".to_string(),
            ],
            night_start_hour: 22,
            night_end_hour: 6,
            night_distance_m: 1000.0,
            night_window_secs: 3600.0,
            repeat_epsilon_deg: 0.0001,
            repeat_limit: 5,
            accuracy_jump_m: 50.0,
            utc_offset_secs: IST_OFFSET_SECS,
            weights: CheckWeights::default(),
        }
    }
}

impl DetectorConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> DetectorConfigBuilder {
        DetectorConfigBuilder::new()
    }
}

/// Coordinates spoofing tools commonly default to.
#[must_use]
pub fn default_landmarks() -> Vec<Landmark> {
    vec![
        Landmark::new("Null Island", 0.0, 0.0),
        Landmark::new("San Francisco", 37.7749, -122.4194),
        Landmark::new("New York", 40.7128, -74.006),
        Landmark::new("London", 51.5074, -0.1278),
        Landmark::new("Paris", 48.8566, 2.3522),
        Landmark::new("Tokyo", 35.6762, 139.6503),
        Landmark::new("Sydney", -33.8688, 151.2093),
    ]
}

/// Builder for [`DetectorConfig`].
#[derive(Debug, Default)]
pub struct DetectorConfigBuilder {
    config: DetectorConfig,
}

impl DetectorConfigBuilder {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: DetectorConfig::default(),
        }
    }

    /// Sets the fake verdict threshold.
    #[must_use]
    pub fn fake_threshold(mut self, threshold: u32) -> Self {
        self.config.fake_threshold = threshold;
        self
    }

    /// Sets the suspicious accuracy limit in meters.
    #[must_use]
    pub fn suspicious_accuracy_m(mut self, limit: f64) -> Self {
        self.config.suspicious_accuracy_m = limit;
        self
    }

    /// Sets the maximum plausible reported speed in m/s.
    #[must_use]
    pub fn max_reported_speed_mps(mut self, limit: f64) -> Self {
        self.config.max_reported_speed_mps = limit;
        self
    }

    /// Sets the maximum plausible implied travel speed in m/s.
    #[must_use]
    pub fn max_travel_speed_mps(mut self, limit: f64) -> Self {
        self.config.max_travel_speed_mps = limit;
        self
    }

    /// Sets the landmark proximity radius in meters.
    #[must_use]
    pub fn landmark_radius_m(mut self, radius: f64) -> Self {
        self.config.landmark_radius_m = radius;
        self
    }

    /// Replaces the landmark list.
    #[must_use]
    pub fn landmarks(mut self, landmarks: Vec<Landmark>) -> Self {
        self.config.landmarks = landmarks;
        self
    }

    /// Replaces the geofence.
    #[must_use]
    pub fn geofence(mut self, geofence: GeoFence) -> Self {
        self.config.geofence = geofence;
        self
    }

    /// Sets the plausible altitude range in meters.
    #[must_use]
    pub fn altitude_range_m(mut self, min: f64, max: f64) -> Self {
        self.config.min_altitude_m = min;
        self.config.max_altitude_m = max;
        self
    }

    /// Replaces the suspicious provider substrings.
    #[must_use]
    pub fn suspicious_providers(mut self, providers: Vec<String>) -> Self {
        self.config.suspicious_providers = providers;
        self
    }

    /// Sets the night window hours (start exclusive, end exclusive).
    #[must_use]
    pub fn night_hours(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.config.night_start_hour = start_hour;
        self.config.night_end_hour = end_hour;
        self
    }

    /// Sets the night movement rule: distance and time window.
    #[must_use]
    pub fn night_movement(mut self, distance_m: f64, window_secs: f64) -> Self {
        self.config.night_distance_m = distance_m;
        self.config.night_window_secs = window_secs;
        self
    }

    /// Sets the repeated-coordinates rule: per-axis tolerance and count.
    #[must_use]
    pub fn repeat_rule(mut self, epsilon_deg: f64, limit: usize) -> Self {
        self.config.repeat_epsilon_deg = epsilon_deg;
        self.config.repeat_limit = limit;
        self
    }

    /// Sets the suspicious accuracy jump in meters.
    #[must_use]
    pub fn accuracy_jump_m(mut self, jump: f64) -> Self {
        self.config.accuracy_jump_m = jump;
        self
    }

    /// Sets the fixed UTC offset in seconds for the night check.
    #[must_use]
    pub fn utc_offset_secs(mut self, offset_secs: i32) -> Self {
        self.config.utc_offset_secs = offset_secs;
        self
    }

    /// Replaces the per-check weights.
    #[must_use]
    pub fn weights(mut self, weights: CheckWeights) -> Self {
        self.config.weights = weights;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> DetectorConfig {
        self.config
    }
}

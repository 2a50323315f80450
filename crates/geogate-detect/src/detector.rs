//! Multi-signal fake-location detection.
//!
//! Ten independent checks each contribute a weighted confidence increment
//! when they fire; the verdict compares the sum against the configured
//! threshold. This is a defense-in-depth heuristic, not a proof: no single
//! weak signal blocks a user on its own, while any strong signal (known
//! spoof coordinate, outside the geofence) does.
//!
//! The detector fails open. Whatever goes wrong internally, `detect`
//! returns a permissive sentinel result and `validate` returns `true`;
//! an attendance flow must never hard-crash on its own gate.

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};
use tracing::error;

use geogate_core::{
    haversine_m, DetectError, DetectResult, HistorySample, HistoryStore, LocationFix,
};

use crate::config::DetectorConfig;
use crate::history::LocationHistory;

/// The individual checks a fix can trip, plus the internal-failure
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectionMethod {
    /// Reported accuracy worse than the suspicious limit.
    LowAccuracy,
    /// Reported speed negative or implausibly high.
    SpeedAnomaly,
    /// Implied travel speed from the previous fix too high.
    LocationJump,
    /// Within the landmark radius of a known spoof-default coordinate.
    KnownFakeLocation,
    /// Outside the configured geofence.
    OutsideGeofence,
    /// Altitude outside the plausible range.
    AltitudeAnomaly,
    /// Positioning provider name matches a suspicious pattern.
    ProviderAnomaly,
    /// Long movement during night hours.
    NightMovement,
    /// Same coordinates repeated across the history.
    RepeatedCoordinates,
    /// Large accuracy change from the previous fix.
    AccuracyJump,
    /// Scoring aborted on an internal failure; permissive verdict.
    DetectionFailed,
}

impl DetectionMethod {
    /// Stable human-readable label, shown to end users verbatim.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::LowAccuracy => "Low Accuracy",
            Self::SpeedAnomaly => "Speed Anomaly",
            Self::LocationJump => "Location Jump",
            Self::KnownFakeLocation => "Known Fake Location",
            Self::OutsideGeofence => "Outside Geofence",
            Self::AltitudeAnomaly => "Altitude Anomaly",
            Self::ProviderAnomaly => "Provider Anomaly",
            Self::NightMovement => "Night Movement",
            Self::RepeatedCoordinates => "Repeated Coordinates",
            Self::AccuracyJump => "Accuracy Anomaly",
            Self::DetectionFailed => "Detection Failed",
        }
    }
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of scoring one fix.
///
/// Created fresh per call and not persisted. `warnings` is index-aligned
/// with `detection_methods`: one explanation per triggered check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// `true` when `confidence` reached the configured threshold.
    pub is_fake: bool,
    /// Sum of the weights of triggered checks. Not clamped at 100;
    /// multiple strong signals stack.
    pub confidence: u32,
    /// The checks that fired, in evaluation order.
    pub detection_methods: Vec<DetectionMethod>,
    /// One human-readable explanation per fired check.
    pub warnings: Vec<String>,
    /// Convenience duplicate of the reported-speed check.
    pub speed_anomaly: bool,
    /// Convenience duplicate of the low-accuracy check.
    pub accuracy_anomaly: bool,
    /// Convenience duplicate of the provider check.
    pub provider_anomaly: bool,
    /// History snapshot taken after the scored fix was appended.
    pub history: Vec<HistorySample>,
}

impl ValidationResult {
    /// The permissive sentinel returned when scoring aborts internally.
    #[must_use]
    pub fn detection_failed() -> Self {
        Self {
            is_fake: false,
            confidence: 0,
            detection_methods: vec![DetectionMethod::DetectionFailed],
            warnings: vec!["Unable to validate location".to_string()],
            speed_anomaly: false,
            accuracy_anomaly: false,
            provider_anomaly: false,
            history: Vec::new(),
        }
    }

    /// Returns `true` if the given check fired.
    #[must_use]
    pub fn triggered(&self, method: DetectionMethod) -> bool {
        self.detection_methods.contains(&method)
    }
}

/// Accumulates fired checks during one scoring pass.
#[derive(Default)]
struct Scorecard {
    confidence: u32,
    methods: Vec<DetectionMethod>,
    warnings: Vec<String>,
}

impl Scorecard {
    fn trigger(&mut self, method: DetectionMethod, weight: u32, warning: impl Into<String>) {
        self.confidence += weight;
        self.methods.push(method);
        self.warnings.push(warning.into());
    }
}

/// Heuristic fake-location detector over a persisted fix history.
pub struct FakeLocationDetector<S: HistoryStore> {
    config: DetectorConfig,
    history: LocationHistory<S>,
}

impl<S: HistoryStore> FakeLocationDetector<S> {
    /// Creates a detector with an explicit configuration.
    #[must_use]
    pub fn new(config: DetectorConfig, store: S) -> Self {
        Self {
            config,
            history: LocationHistory::new(store),
        }
    }

    /// Creates a detector with the default configuration.
    #[must_use]
    pub fn with_defaults(store: S) -> Self {
        Self::new(DetectorConfig::default(), store)
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Scores one fix and records it in the history.
    ///
    /// Every call appends exactly one sample to the history before
    /// returning, whatever the verdict; a spoofed fix is still part of
    /// the baseline for the next one. Internal failures are mapped to
    /// the permissive [`ValidationResult::detection_failed`] sentinel;
    /// this function never panics and never returns an error.
    pub fn detect(&mut self, fix: &LocationFix) -> ValidationResult {
        match self.try_detect(fix) {
            Ok(result) => result,
            Err(err) => {
                error!("location detection aborted, failing open: {err}");
                ValidationResult::detection_failed()
            }
        }
    }

    /// Boolean gate over [`detect`](Self::detect).
    ///
    /// Returns `true` when the fix should be accepted. Inherits the
    /// fail-open policy: an internal failure accepts the fix.
    pub fn validate(&mut self, fix: &LocationFix) -> bool {
        !self.detect(fix).is_fake
    }

    fn try_detect(&mut self, fix: &LocationFix) -> DetectResult<ValidationResult> {
        let history = self.history.snapshot();
        let last = history.last();
        let local_hour = self.local_hour(fix.timestamp_ms)?;

        let mut card = Scorecard::default();

        let accuracy_anomaly = self.check_accuracy(fix, &mut card);
        let speed_anomaly = self.check_reported_speed(fix, &mut card);
        self.check_location_jump(fix, last, &mut card);
        self.check_known_landmarks(fix, &mut card);
        self.check_geofence(fix, &mut card);
        self.check_altitude(fix, &mut card);
        let provider_anomaly = self.check_provider(fix, &mut card);
        self.check_night_movement(fix, local_hour, last, &mut card);
        self.check_repeated_coordinates(fix, &history, &mut card);
        self.check_accuracy_jump(fix, last, &mut card);

        let is_fake = card.confidence >= self.config.fake_threshold;

        // Record the fix whatever the verdict; detected fakes are part
        // of the baseline for subsequent calls.
        self.history.append(fix);

        Ok(ValidationResult {
            is_fake,
            confidence: card.confidence,
            detection_methods: card.methods,
            warnings: card.warnings,
            speed_anomaly,
            accuracy_anomaly,
            provider_anomaly,
            history: self.history.snapshot(),
        })
    }

    /// Hour of day [0, 23] of the fix under the configured UTC offset.
    fn local_hour(&self, timestamp_ms: i64) -> DetectResult<u32> {
        let offset = FixedOffset::east_opt(self.config.utc_offset_secs).ok_or(
            DetectError::InvalidUtcOffset {
                offset_secs: self.config.utc_offset_secs,
            },
        )?;
        let utc = DateTime::from_timestamp_millis(timestamp_ms)
            .ok_or(DetectError::InvalidTimestamp { timestamp_ms })?;
        Ok(utc.with_timezone(&offset).hour())
    }

    fn check_accuracy(&self, fix: &LocationFix, card: &mut Scorecard) -> bool {
        let anomaly = fix.accuracy_m.unwrap_or(0.0) > self.config.suspicious_accuracy_m;
        if anomaly {
            card.trigger(
                DetectionMethod::LowAccuracy,
                self.config.weights.low_accuracy,
                "Location accuracy is suspiciously low",
            );
        }
        anomaly
    }

    fn check_reported_speed(&self, fix: &LocationFix, card: &mut Scorecard) -> bool {
        let anomaly = fix
            .speed_mps
            .is_some_and(|s| s > self.config.max_reported_speed_mps || s < 0.0);
        if anomaly {
            card.trigger(
                DetectionMethod::SpeedAnomaly,
                self.config.weights.reported_speed,
                "Unrealistic speed detected",
            );
        }
        anomaly
    }

    fn check_location_jump(
        &self,
        fix: &LocationFix,
        last: Option<&HistorySample>,
        card: &mut Scorecard,
    ) {
        let Some(last) = last else {
            return;
        };
        let elapsed_s = (fix.timestamp_ms - last.timestamp_ms) as f64 / 1000.0;
        if elapsed_s <= 0.0 {
            return;
        }
        let travel_speed = haversine_m(last.point(), fix.point()) / elapsed_s;
        if travel_speed > self.config.max_travel_speed_mps {
            card.trigger(
                DetectionMethod::LocationJump,
                self.config.weights.location_jump,
                format!("Unrealistic movement detected: {travel_speed:.1} m/s"),
            );
        }
    }

    fn check_known_landmarks(&self, fix: &LocationFix, card: &mut Scorecard) {
        for landmark in &self.config.landmarks {
            if haversine_m(landmark.point, fix.point()) < self.config.landmark_radius_m {
                card.trigger(
                    DetectionMethod::KnownFakeLocation,
                    self.config.weights.known_fake_location,
                    format!("Location near known fake location: {}", landmark.name),
                );
                break;
            }
        }
    }

    fn check_geofence(&self, fix: &LocationFix, card: &mut Scorecard) {
        if !self.config.geofence.contains(fix.point()) {
            card.trigger(
                DetectionMethod::OutsideGeofence,
                self.config.weights.outside_geofence,
                format!("Location is outside {}", self.config.geofence.name),
            );
        }
    }

    fn check_altitude(&self, fix: &LocationFix, card: &mut Scorecard) {
        let anomaly = fix
            .altitude_m
            .is_some_and(|a| a < self.config.min_altitude_m || a > self.config.max_altitude_m);
        if anomaly {
            card.trigger(
                DetectionMethod::AltitudeAnomaly,
                self.config.weights.altitude,
                "Unrealistic altitude detected",
            );
        }
    }

    /// No-ops when the platform does not expose a provider name.
    fn check_provider(&self, fix: &LocationFix, card: &mut Scorecard) -> bool {
        let Some(provider) = &fix.provider else {
            return false;
        };
        let lower = provider.to_lowercase();
        let anomaly = self
            .config
            .suspicious_providers
            .iter()
            .any(|pattern| lower.contains(pattern.as_str()));
        if anomaly {
            card.trigger(
                DetectionMethod::ProviderAnomaly,
                self.config.weights.provider,
                "Suspicious location provider detected",
            );
        }
        anomaly
    }

    fn check_night_movement(
        &self,
        fix: &LocationFix,
        local_hour: u32,
        last: Option<&HistorySample>,
        card: &mut Scorecard,
    ) {
        let is_night =
            local_hour < self.config.night_end_hour || local_hour > self.config.night_start_hour;
        let Some(last) = last else {
            return;
        };
        if !is_night {
            return;
        }
        let elapsed_s = (fix.timestamp_ms - last.timestamp_ms) as f64 / 1000.0;
        let distance = haversine_m(last.point(), fix.point());
        if distance > self.config.night_distance_m && elapsed_s < self.config.night_window_secs {
            card.trigger(
                DetectionMethod::NightMovement,
                self.config.weights.night_movement,
                "Unusual movement detected during night time",
            );
        }
    }

    fn check_repeated_coordinates(
        &self,
        fix: &LocationFix,
        history: &[HistorySample],
        card: &mut Scorecard,
    ) {
        let eps = self.config.repeat_epsilon_deg;
        let repeats = history
            .iter()
            .filter(|entry| {
                (entry.latitude - fix.latitude).abs() < eps
                    && (entry.longitude - fix.longitude).abs() < eps
            })
            .count();
        if repeats > self.config.repeat_limit {
            card.trigger(
                DetectionMethod::RepeatedCoordinates,
                self.config.weights.repeated_coordinates,
                "Same coordinates detected multiple times",
            );
        }
    }

    fn check_accuracy_jump(
        &self,
        fix: &LocationFix,
        last: Option<&HistorySample>,
        card: &mut Scorecard,
    ) {
        let Some(last) = last else {
            return;
        };
        let change = (fix.accuracy_m.unwrap_or(0.0) - last.accuracy_m).abs();
        if change > self.config.accuracy_jump_m {
            card.trigger(
                DetectionMethod::AccuracyJump,
                self.config.weights.accuracy_jump,
                "Unusual accuracy change detected",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DetectorConfig, GeoFence, Landmark};
    use crate::store::MemoryStore;

    /// 2024-01-15 12:00 IST (06:30 UTC): daytime under the default offset.
    const NOON_IST_MS: i64 = 1_705_300_200_000;
    /// 2024-01-15 23:30 IST (18:00 UTC): night under the default offset.
    const NIGHT_IST_MS: i64 = 1_705_341_600_000;

    const MUMBAI: (f64, f64) = (19.076, 72.8777);

    fn clean_fix(timestamp_ms: i64) -> LocationFix {
        LocationFix::new(timestamp_ms, MUMBAI.0, MUMBAI.1).with_accuracy(10.0)
    }

    fn detector() -> FakeLocationDetector<MemoryStore> {
        FakeLocationDetector::with_defaults(MemoryStore::new())
    }

    /// Detector whose geofence never fires, for isolating other checks.
    fn global_detector() -> FakeLocationDetector<MemoryStore> {
        let config = DetectorConfig::builder().geofence(GeoFence::global()).build();
        FakeLocationDetector::new(config, MemoryStore::new())
    }

    #[test]
    fn clean_fix_scores_zero() {
        let mut det = detector();
        let result = det.detect(&clean_fix(NOON_IST_MS).with_speed(2.0).with_altitude(500.0));

        assert_eq!(result.confidence, 0);
        assert!(!result.is_fake);
        assert!(result.detection_methods.is_empty());
        assert!(result.warnings.is_empty());
        assert!(!result.speed_anomaly);
        assert!(!result.accuracy_anomaly);
        assert!(!result.provider_anomaly);
    }

    #[test]
    fn low_accuracy_fires_alone() {
        let mut det = detector();
        let fix = LocationFix::new(NOON_IST_MS, MUMBAI.0, MUMBAI.1).with_accuracy(150.0);
        let result = det.detect(&fix);

        assert_eq!(result.confidence, 20);
        assert!(result.accuracy_anomaly);
        assert!(result.triggered(DetectionMethod::LowAccuracy));
        assert!(!result.is_fake);
    }

    #[test]
    fn missing_accuracy_is_not_suspicious() {
        let mut det = detector();
        let result = det.detect(&LocationFix::new(NOON_IST_MS, MUMBAI.0, MUMBAI.1));
        assert!(!result.accuracy_anomaly);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn negative_speed_fires_speed_anomaly() {
        let mut det = detector();
        let result = det.detect(&clean_fix(NOON_IST_MS).with_speed(-1.0));

        assert_eq!(result.confidence, 30);
        assert!(result.speed_anomaly);
        assert!(result.triggered(DetectionMethod::SpeedAnomaly));
    }

    #[test]
    fn implausible_speed_fires_speed_anomaly() {
        let mut det = detector();
        let result = det.detect(&clean_fix(NOON_IST_MS).with_speed(2000.0));
        assert!(result.speed_anomaly);
        assert_eq!(result.confidence, 30);
    }

    #[test]
    fn location_jump_fires_on_fast_travel() {
        let mut det = detector();
        det.detect(&clean_fix(NOON_IST_MS));
        // Delhi ten seconds later: well beyond 50 m/s
        let fix = LocationFix::new(NOON_IST_MS + 10_000, 28.6139, 77.209).with_accuracy(10.0);
        let result = det.detect(&fix);

        assert_eq!(result.confidence, 40);
        assert!(result.triggered(DetectionMethod::LocationJump));
        assert!(result.warnings[0].starts_with("Unrealistic movement detected:"));
    }

    #[test]
    fn location_jump_needs_positive_elapsed_time() {
        let mut det = detector();
        det.detect(&clean_fix(NOON_IST_MS));
        // Same timestamp as the previous fix: elapsed is zero, no jump
        let fix = LocationFix::new(NOON_IST_MS, 28.6139, 77.209).with_accuracy(10.0);
        let result = det.detect(&fix);
        assert!(!result.triggered(DetectionMethod::LocationJump));
    }

    #[test]
    fn known_landmark_fires_and_warns_with_name() {
        let mut det = global_detector();
        let fix = LocationFix::new(NOON_IST_MS, 35.6762, 139.6503).with_accuracy(5.0);
        let result = det.detect(&fix);

        assert_eq!(result.confidence, 50);
        assert!(result.is_fake);
        assert!(result.triggered(DetectionMethod::KnownFakeLocation));
        assert_eq!(
            result.warnings[0],
            "Location near known fake location: Tokyo"
        );
    }

    #[test]
    fn landmark_match_stops_at_first_hit() {
        let config = DetectorConfig::builder()
            .geofence(GeoFence::global())
            .landmarks(vec![
                Landmark::new("First", 10.0, 10.0),
                Landmark::new("Second", 10.0, 10.0),
            ])
            .build();
        let mut det = FakeLocationDetector::new(config, MemoryStore::new());
        let result = det.detect(&LocationFix::new(NOON_IST_MS, 10.0, 10.0).with_accuracy(5.0));

        // One hit, one weight, even with two overlapping landmarks
        assert_eq!(result.confidence, 50);
        assert_eq!(
            result
                .detection_methods
                .iter()
                .filter(|m| **m == DetectionMethod::KnownFakeLocation)
                .count(),
            1
        );
    }

    #[test]
    fn outside_geofence_fires_alone() {
        let mut det = detector();
        // Dubai: outside the India box, far from every landmark
        let result = det.detect(&LocationFix::new(NOON_IST_MS, 25.2048, 55.2708).with_accuracy(5.0));

        assert_eq!(result.confidence, 60);
        assert!(result.is_fake);
        assert!(result.triggered(DetectionMethod::OutsideGeofence));
        assert_eq!(result.warnings[0], "Location is outside India");
    }

    #[test]
    fn altitude_anomaly_fires() {
        let mut det = detector();
        let result = det.detect(&clean_fix(NOON_IST_MS).with_altitude(12_000.0));
        assert_eq!(result.confidence, 25);
        assert!(result.triggered(DetectionMethod::AltitudeAnomaly));

        let mut det = detector();
        let result = det.detect(&clean_fix(NOON_IST_MS).with_altitude(-250.0));
        assert!(result.triggered(DetectionMethod::AltitudeAnomaly));
    }

    #[test]
    fn provider_anomaly_is_case_insensitive_substring() {
        let mut det = detector();
        let result = det.detect(&clean_fix(NOON_IST_MS).with_provider("MockProvider"));

        assert_eq!(result.confidence, 35);
        assert!(result.provider_anomaly);
        assert!(result.triggered(DetectionMethod::ProviderAnomaly));
    }

    #[test]
    fn absent_provider_never_fires() {
        let mut det = detector();
        let result = det.detect(&clean_fix(NOON_IST_MS));
        assert!(!result.provider_anomaly);
    }

    #[test]
    fn trusted_provider_does_not_fire() {
        let mut det = detector();
        let result = det.detect(&clean_fix(NOON_IST_MS).with_provider("gps"));
        assert!(!result.provider_anomaly);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn night_movement_fires_at_night_only() {
        // 2.2 km in ten minutes is fine at noon...
        let mut det = detector();
        det.detect(&clean_fix(NOON_IST_MS - 600_000));
        let moved = LocationFix::new(NOON_IST_MS, MUMBAI.0 + 0.02, MUMBAI.1).with_accuracy(10.0);
        assert_eq!(det.detect(&moved).confidence, 0);

        // ...but suspicious at 23:30
        let mut det = detector();
        det.detect(&clean_fix(NIGHT_IST_MS - 600_000));
        let moved = LocationFix::new(NIGHT_IST_MS, MUMBAI.0 + 0.02, MUMBAI.1).with_accuracy(10.0);
        let result = det.detect(&moved);
        assert_eq!(result.confidence, 30);
        assert!(result.triggered(DetectionMethod::NightMovement));
    }

    #[test]
    fn night_movement_requires_distance_and_window() {
        // Long gap at night: window exceeded, no trigger
        let mut det = detector();
        det.detect(&clean_fix(NIGHT_IST_MS - 7_200_000));
        let moved = LocationFix::new(NIGHT_IST_MS, MUMBAI.0 + 0.02, MUMBAI.1).with_accuracy(10.0);
        assert!(!det
            .detect(&moved)
            .triggered(DetectionMethod::NightMovement));

        // Short move at night: distance too small, no trigger
        let mut det = detector();
        det.detect(&clean_fix(NIGHT_IST_MS - 600_000));
        let nearby = LocationFix::new(NIGHT_IST_MS, MUMBAI.0 + 0.001, MUMBAI.1).with_accuracy(10.0);
        assert!(!det
            .detect(&nearby)
            .triggered(DetectionMethod::NightMovement));
    }

    #[test]
    fn repeated_coordinates_fire_past_limit() {
        let mut det = detector();
        // Six prior fixes at the same spot, one second apart
        for i in 0..6 {
            det.detect(&clean_fix(NOON_IST_MS + i * 1_000));
        }
        let result = det.detect(&clean_fix(NOON_IST_MS + 6_000));

        assert_eq!(result.confidence, 20);
        assert!(result.triggered(DetectionMethod::RepeatedCoordinates));
    }

    #[test]
    fn five_repeats_are_still_tolerated() {
        let mut det = detector();
        for i in 0..5 {
            det.detect(&clean_fix(NOON_IST_MS + i * 1_000));
        }
        let result = det.detect(&clean_fix(NOON_IST_MS + 5_000));
        assert!(!result.triggered(DetectionMethod::RepeatedCoordinates));
    }

    #[test]
    fn accuracy_jump_fires_on_large_change() {
        let mut det = detector();
        det.detect(&clean_fix(NOON_IST_MS));
        // 10 m -> 80 m accuracy between consecutive fixes
        let result = det.detect(&clean_fix(NOON_IST_MS + 1_000).with_accuracy(80.0));

        assert_eq!(result.confidence, 15);
        assert!(result.triggered(DetectionMethod::AccuracyJump));
    }

    #[test]
    fn small_accuracy_change_is_tolerated() {
        let mut det = detector();
        det.detect(&clean_fix(NOON_IST_MS));
        let result = det.detect(&clean_fix(NOON_IST_MS + 1_000).with_accuracy(40.0));
        assert!(!result.triggered(DetectionMethod::AccuracyJump));
    }

    #[test]
    fn weights_sum_across_checks() {
        let mut det = global_detector();
        // Low accuracy (20) + reported speed (30) + altitude (25) + provider (35)
        let fix = LocationFix::new(NOON_IST_MS, MUMBAI.0, MUMBAI.1)
            .with_accuracy(150.0)
            .with_speed(-5.0)
            .with_altitude(11_000.0)
            .with_provider("gps_fused");
        let result = det.detect(&fix);

        assert_eq!(result.confidence, 110);
        assert!(result.is_fake);
        assert_eq!(result.detection_methods.len(), 4);
        assert_eq!(result.warnings.len(), 4);
    }

    #[test]
    fn every_call_appends_to_history() {
        let mut det = detector();
        // A fake verdict still gets recorded
        let fake = det.detect(&LocationFix::new(NOON_IST_MS, 25.2048, 55.2708).with_accuracy(5.0));
        assert!(fake.is_fake);
        assert_eq!(fake.history.len(), 1);

        let clean = det.detect(&clean_fix(NOON_IST_MS + 1_000));
        assert_eq!(clean.history.len(), 2);
    }

    #[test]
    fn unrepresentable_timestamp_fails_open() {
        let mut det = detector();
        let fix = LocationFix::new(i64::MAX, MUMBAI.0, MUMBAI.1).with_accuracy(5.0);
        let result = det.detect(&fix);

        assert!(!result.is_fake);
        assert_eq!(result.confidence, 0);
        assert_eq!(
            result.detection_methods,
            vec![DetectionMethod::DetectionFailed]
        );
        assert_eq!(result.warnings, vec!["Unable to validate location"]);
        assert!(result.history.is_empty());

        // The façade accepts the fix
        assert!(det.validate(&fix));
    }

    #[test]
    fn validate_negates_verdict() {
        let mut det = detector();
        assert!(det.validate(&clean_fix(NOON_IST_MS)));

        let mut det = detector();
        assert!(!det.validate(&LocationFix::new(NOON_IST_MS, 25.2048, 55.2708).with_accuracy(5.0)));
    }

    #[test]
    fn labels_match_deployment_strings() {
        assert_eq!(DetectionMethod::LowAccuracy.label(), "Low Accuracy");
        assert_eq!(DetectionMethod::AccuracyJump.label(), "Accuracy Anomaly");
        assert_eq!(
            DetectionMethod::KnownFakeLocation.to_string(),
            "Known Fake Location"
        );
    }
}

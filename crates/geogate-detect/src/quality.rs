//! Soft quality score for a single fix.
//!
//! Unlike the detector, this is a history-free figure of merit for call
//! sites that want "how good is this reading" rather than a spoofing
//! verdict, e.g. to prompt the user to wait for a better fix before
//! capturing attendance. Starts at 100 and subtracts a fixed penalty per
//! degraded signal; floored at zero.

use geogate_core::LocationFix;

const DEGRADED_ACCURACY_M: f64 = 50.0;
const POOR_ACCURACY_M: f64 = 100.0;
const IMPLAUSIBLE_SPEED_MPS: f64 = 100.0;
const MIN_ALTITUDE_M: f64 = -100.0;
const MAX_ALTITUDE_M: f64 = 9000.0;

const DEGRADED_ACCURACY_PENALTY: i32 = 20;
const POOR_ACCURACY_PENALTY: i32 = 30;
const SPEED_PENALTY: i32 = 25;
const ALTITUDE_PENALTY: i32 = 20;

/// Quality score in [0, 100] for one fix, higher is better.
///
/// Accuracy penalties stack: a fix worse than 100 m pays both the
/// degraded and the poor penalty.
#[must_use]
pub fn fix_quality(fix: &LocationFix) -> u32 {
    let mut score: i32 = 100;

    let accuracy = fix.accuracy_m.unwrap_or(0.0);
    if accuracy > DEGRADED_ACCURACY_M {
        score -= DEGRADED_ACCURACY_PENALTY;
    }
    if accuracy > POOR_ACCURACY_M {
        score -= POOR_ACCURACY_PENALTY;
    }

    if fix.speed_mps.is_some_and(|s| s > IMPLAUSIBLE_SPEED_MPS) {
        score -= SPEED_PENALTY;
    }

    if fix
        .altitude_m
        .is_some_and(|a| !(MIN_ALTITUDE_M..=MAX_ALTITUDE_M).contains(&a))
    {
        score -= ALTITUDE_PENALTY;
    }

    score.max(0) as u32
}

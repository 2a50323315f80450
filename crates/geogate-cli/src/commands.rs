//! Command implementations.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use geogate_core::{HistoryStore, LocationFix};
use geogate_detect::{fix_quality, FakeLocationDetector, JsonFileStore, DEFAULT_HISTORY_FILE};

/// Arguments for `geogate check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Latitude in degrees
    #[arg(long)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(long)]
    pub lon: f64,

    /// Reported accuracy in meters
    #[arg(long)]
    pub accuracy: Option<f64>,

    /// Reported speed in m/s
    #[arg(long)]
    pub speed: Option<f64>,

    /// Reported altitude in meters
    #[arg(long)]
    pub altitude: Option<f64>,

    /// Positioning provider name
    #[arg(long)]
    pub provider: Option<String>,

    /// Capture time in milliseconds since epoch (defaults to now)
    #[arg(long)]
    pub timestamp_ms: Option<i64>,

    /// Path of the history file
    #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
    pub history: PathBuf,

    /// Emit the full validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `geogate history`.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Path of the history file
    #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
    pub history: PathBuf,

    /// Emit the history as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    fn to_fix(&self) -> LocationFix {
        let timestamp_ms = self
            .timestamp_ms
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

        let mut fix = LocationFix::new(timestamp_ms, self.lat, self.lon);
        if let Some(accuracy) = self.accuracy {
            fix = fix.with_accuracy(accuracy);
        }
        if let Some(speed) = self.speed {
            fix = fix.with_speed(speed);
        }
        if let Some(altitude) = self.altitude {
            fix = fix.with_altitude(altitude);
        }
        if let Some(provider) = &self.provider {
            fix = fix.with_provider(provider.clone());
        }
        fix
    }
}

/// Executes `geogate check`.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<()> {
    let fix = args.to_fix();
    let mut detector = FakeLocationDetector::with_defaults(JsonFileStore::new(&args.history));
    let result = detector.detect(&fix);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let verdict = if result.is_fake { "FAKE" } else { "GENUINE" };
    println!("verdict:    {verdict}");
    println!("confidence: {}", result.confidence);
    println!("quality:    {}", fix_quality(&fix));
    for (method, warning) in result.detection_methods.iter().zip(&result.warnings) {
        println!("  [{method}] {warning}");
    }
    println!("history:    {} fixes recorded", result.history.len());

    Ok(())
}

/// Executes `geogate history`.
pub fn run_history(args: &HistoryArgs) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&args.history);
    let samples = store
        .load()
        .with_context(|| format!("reading history from {}", args.history.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&samples)?);
        return Ok(());
    }

    println!("{} fixes in {}", samples.len(), args.history.display());
    for sample in &samples {
        println!(
            "  {}  ({:.5}, {:.5})  accuracy {:.1} m  speed {:.1} m/s  via {}",
            sample.timestamp_ms,
            sample.latitude,
            sample.longitude,
            sample.accuracy_m,
            sample.speed_mps,
            sample.provider,
        );
    }

    Ok(())
}

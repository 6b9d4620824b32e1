//! Construction parameters and the resolved plot configuration.
//!
//! [`RoundPlotParams`] mirrors what a caller may pass when building a plot:
//! every field is optional. [`RoundPlotParams::resolve`] merges it with the
//! defaults into an immutable [`RoundPlotConfig`], which is what the plot
//! actually reads.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::formatters::FormatterOverrides;
use crate::data::model::Observation;
use crate::error::{Result, RoundPlotError};

/// Twelve hours, in milliseconds.
pub const DEFAULT_TIME_IN_CLOCK_MS: f64 = 12.0 * 60.0 * 60.0 * 1000.0;
pub const DEFAULT_SIZE: f64 = 500.0;
pub const DEFAULT_CLOCK_RADIUS: f64 = 100.0;
pub const DEFAULT_ALPHA0: f64 = 0.0;
/// Duration of bar and legend colour transitions.
pub const DEFAULT_TRANSITION_SECS: f64 = 0.25;

// ─────────────────────────────────────────────────────────────────────────────
// RoundPlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Resolved, immutable plot configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundPlotConfig {
    /// Side length of the square drawing surface (px).
    pub size: f64,
    /// Inner radius of the dial (px).
    pub clock_radius: f64,
    /// Angle (degrees) at which the first observation is drawn.
    pub alpha0: f64,
    /// Time span (ms) covered by one full turn of the dial.
    pub time_in_clock: f64,
    /// Duration of animated attribute changes, in seconds.
    pub transition_secs: f64,
}

impl Default for RoundPlotConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            clock_radius: DEFAULT_CLOCK_RADIUS,
            alpha0: DEFAULT_ALPHA0,
            time_in_clock: DEFAULT_TIME_IN_CLOCK_MS,
            transition_secs: DEFAULT_TRANSITION_SECS,
        }
    }
}

impl RoundPlotConfig {
    /// Centre of the drawing surface, on both axes.
    pub fn middle(&self) -> f64 {
        self.size / 2.0
    }

    /// Outer radius of the dial.
    pub fn outer_radius(&self) -> f64 {
        self.size / 2.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RoundPlotParams
// ─────────────────────────────────────────────────────────────────────────────

/// Caller-supplied construction parameters. Everything is optional.
///
/// Field names serialise in camelCase (`clockRadius`, `timeInClock`, ...), so
/// parameter files written for the browser widget load unchanged:
///
/// ```
/// # use roundplot::config::RoundPlotParams;
/// let p = RoundPlotParams::from_json_str(r#"{ "clockRadius": 80, "timeInClock": 3600000 }"#).unwrap();
/// let cfg = p.resolve();
/// assert_eq!(cfg.clock_radius, 80.0);
/// assert_eq!(cfg.size, 500.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoundPlotParams {
    pub size: Option<f64>,
    pub clock_radius: Option<f64>,
    pub alpha0: Option<f64>,
    pub time_in_clock: Option<f64>,
    pub transition_secs: Option<f64>,
    /// Initial observations, in chronological order.
    pub data: Option<Vec<Observation>>,
    /// Formatting strategies; code only.
    #[serde(skip)]
    pub formatters: FormatterOverrides,
}

impl RoundPlotParams {
    /// Merge with the defaults. A missing or zero `size`, `clockRadius` or
    /// `timeInClock` falls back to its default.
    pub fn resolve(&self) -> RoundPlotConfig {
        let d = RoundPlotConfig::default();
        RoundPlotConfig {
            size: non_zero_or(self.size, d.size),
            clock_radius: non_zero_or(self.clock_radius, d.clock_radius),
            alpha0: self.alpha0.unwrap_or(d.alpha0),
            time_in_clock: non_zero_or(self.time_in_clock, d.time_in_clock),
            transition_secs: self
                .transition_secs
                .filter(|t| t.is_finite() && *t >= 0.0)
                .unwrap_or(d.transition_secs),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_clock_radius(mut self, clock_radius: f64) -> Self {
        self.clock_radius = Some(clock_radius);
        self
    }

    pub fn with_alpha0(mut self, alpha0: f64) -> Self {
        self.alpha0 = Some(alpha0);
        self
    }

    pub fn with_time_in_clock(mut self, time_in_clock_ms: f64) -> Self {
        self.time_in_clock = Some(time_in_clock_ms);
        self
    }

    pub fn with_data(mut self, data: Vec<Observation>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_formatters(mut self, formatters: FormatterOverrides) -> Self {
        self.formatters = formatters;
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load parameters from a `.json`, `.yaml` or `.yml` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let text = std::fs::read_to_string(path)?;
        let params = match ext.as_str() {
            "json" => Self::from_json_str(&text)?,
            "yaml" | "yml" => Self::from_yaml_str(&text)?,
            _ => return Err(RoundPlotError::UnsupportedFormat(ext)),
        };
        log::debug!("loaded plot parameters from {}", path.display());
        Ok(params)
    }

    /// Write the serialisable part of the parameters as pretty JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

fn non_zero_or(v: Option<f64>, default: f64) -> f64 {
    match v {
        Some(x) if x != 0.0 && x.is_finite() => x,
        _ => default,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Settings for the standalone window opened by [`crate::run_roundplot`].
#[derive(Clone)]
pub struct AppConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the plot.
    pub headline: Option<String>,
    /// Show the SVG/PNG export buttons.
    pub export_buttons: bool,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "RoundPlot".to_string(),
            headline: None,
            export_buttons: true,
            native_options: None,
        }
    }
}

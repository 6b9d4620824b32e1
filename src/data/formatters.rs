//! Legend formatting and value colouring.
//!
//! The plot renders two legend lines under the cursor (date and value) and
//! colours every value bar. All three are pluggable through [`Formatters`];
//! the defaults below are used for any strategy left unset.

use std::fmt;
use std::sync::Arc;

use chrono::TimeZone;
use egui::Color32;

use super::model::DataModel;

// ─────────────────────────────────────────────────────────────────────────────
// Strategy types
// ─────────────────────────────────────────────────────────────────────────────

/// Formats an observation date (milliseconds since the UNIX epoch).
pub type DateFormatFn = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Formats an observation value.
pub type ValueFormatFn = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Maps a value to a colour. The current [`DataModel`] is passed along so the
/// mapping can normalise against the observed range.
pub type ValueToColorFn = Arc<dyn Fn(f64, &DataModel) -> Color32 + Send + Sync>;

/// The three formatting strategies used by the plot.
#[derive(Clone)]
pub struct Formatters {
    pub date_format: DateFormatFn,
    pub value_format: ValueFormatFn,
    pub value_to_color: ValueToColorFn,
}

impl Default for Formatters {
    fn default() -> Self {
        Self {
            date_format: Arc::new(default_date_format),
            value_format: Arc::new(default_value_format),
            value_to_color: Arc::new(default_value_to_color),
        }
    }
}

impl fmt::Debug for Formatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatters").finish_non_exhaustive()
    }
}

impl Formatters {
    pub fn format_date(&self, date: f64) -> String {
        (self.date_format)(date)
    }

    pub fn format_value(&self, value: f64) -> String {
        (self.value_format)(value)
    }

    pub fn color_for(&self, value: f64, data: &DataModel) -> Color32 {
        (self.value_to_color)(value, data)
    }
}

/// Optional overrides for [`Formatters`]; unset entries keep the default.
#[derive(Clone, Default)]
pub struct FormatterOverrides {
    pub date_format: Option<DateFormatFn>,
    pub value_format: Option<ValueFormatFn>,
    pub value_to_color: Option<ValueToColorFn>,
}

impl fmt::Debug for FormatterOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterOverrides")
            .field("date_format", &self.date_format.is_some())
            .field("value_format", &self.value_format.is_some())
            .field("value_to_color", &self.value_to_color.is_some())
            .finish()
    }
}

impl FormatterOverrides {
    pub fn with_date_format(mut self, f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        let f: DateFormatFn = Arc::new(f);
        self.date_format = Some(f);
        self
    }

    pub fn with_value_format(mut self, f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        let f: ValueFormatFn = Arc::new(f);
        self.value_format = Some(f);
        self
    }

    pub fn with_value_to_color(
        mut self,
        f: impl Fn(f64, &DataModel) -> Color32 + Send + Sync + 'static,
    ) -> Self {
        let f: ValueToColorFn = Arc::new(f);
        self.value_to_color = Some(f);
        self
    }

    /// Merge the overrides onto the defaults.
    pub fn resolve(&self) -> Formatters {
        let defaults = Formatters::default();
        Formatters {
            date_format: self.date_format.clone().unwrap_or(defaults.date_format),
            value_format: self.value_format.clone().unwrap_or(defaults.value_format),
            value_to_color: self
                .value_to_color
                .clone()
                .unwrap_or(defaults.value_to_color),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

/// `DD/MM HH:MM` in local time.
pub fn default_date_format(date_ms: f64) -> String {
    ms_to_local(date_ms).format("%d/%m %H:%M").to_string()
}

/// Whole number, no decimals.
pub fn default_value_format(value: f64) -> String {
    format!("{:.0}", value)
}

/// Green at the minimum of the observed range, red at the maximum.
pub fn default_value_to_color(value: f64, data: &DataModel) -> Color32 {
    let r = data.norm(value);
    Color32::from_rgb(channel(255.0 * r), channel(255.0 * (1.0 - r)), 0)
}

/// Saturating conversion of a colour channel; non-finite input maps to 0.
pub(crate) fn channel(v: f64) -> u8 {
    if v.is_finite() {
        v.round().clamp(0.0, 255.0) as u8
    } else {
        0
    }
}

/// Convert milliseconds since epoch to local time. Out-of-range or
/// non-finite values fall back to the UNIX epoch.
fn ms_to_local(ms: f64) -> chrono::DateTime<chrono::Local> {
    let ms = if ms.is_finite() { ms.floor() as i64 } else { 0 };
    chrono::Local
        .timestamp_millis_opt(ms)
        .single()
        .or_else(|| chrono::Local.timestamp_millis_opt(0).single())
        .unwrap_or_default()
}

//! Observations and the normalisation model built over them.

use serde::{Deserialize, Serialize};

/// A single timestamped reading.
///
/// `date` is expressed in milliseconds since the UNIX epoch; `value` is the
/// reading itself. Sequences of observations are expected in chronological
/// order; nothing in this crate sorts them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: f64,
    pub value: f64,
}

impl Observation {
    pub fn new(date: f64, value: f64) -> Self {
        Self { date, value }
    }

    /// Key used to match an observation with its value bar.
    pub fn key(&self) -> u64 {
        self.date.to_bits()
    }
}

/// Immutable view over one data set: the raw observations plus the value
/// bounds found by a single scan at construction time.
///
/// A new model is built every time the plot's data is replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataModel {
    raw: Vec<Observation>,
    min: f64,
    max: f64,
}

impl DataModel {
    /// Build the model. Empty input yields `min = max = 0`.
    pub fn new(raw: Vec<Observation>) -> Self {
        if raw.is_empty() {
            return Self {
                raw,
                min: 0.0,
                max: 0.0,
            };
        }
        let (min, max) = raw
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), o| {
                (
                    if o.value < lo { o.value } else { lo },
                    if o.value > hi { o.value } else { hi },
                )
            });
        Self { raw, min, max }
    }

    pub fn raw(&self) -> &[Observation] {
        &self.raw
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// `true` when `min == max`, i.e. [`norm`](Self::norm) divides by zero.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Linear rescale of `x` relative to `[min, max]`.
    ///
    /// Not clamped: values outside the observed range land outside `[0, 1]`,
    /// and a degenerate range yields `NaN` or an infinity.
    pub fn norm(&self, x: f64) -> f64 {
        (x - self.min) / (self.max - self.min)
    }

    /// First observation by position.
    pub fn first(&self) -> Option<&Observation> {
        self.raw.first()
    }

    /// Last observation by position.
    pub fn last(&self) -> Option<&Observation> {
        self.raw.last()
    }
}

impl From<Vec<Observation>> for DataModel {
    fn from(raw: Vec<Observation>) -> Self {
        Self::new(raw)
    }
}

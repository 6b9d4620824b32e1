//! The round clock plot.
//!
//! Observations are laid out on a dial: time maps linearly to an angle
//! (one full turn per `time_in_clock` milliseconds, starting at `alpha0` for
//! the first observation) and the value maps to a radius between the inner
//! dial radius and the edge of the surface. A cursor line marks the selected
//! observation and follows the pointer.

use egui::Pos2;

use crate::config::{RoundPlotConfig, RoundPlotParams};
use crate::data::formatters::{channel, Formatters};
use crate::data::model::{DataModel, Observation};
use crate::surface::{polar_point, BarSpec, CircleSpec, DrawingSurface, JoinStats, Scene};

/// Distance kept between the inner dial and the start of the cursor line.
const CURSOR_INSET: f64 = 10.0;

pub struct RoundPlot<S: DrawingSurface = Scene> {
    config: RoundPlotConfig,
    formatters: Formatters,
    data: DataModel,
    /// Timestamp of the first observation; angular origin.
    d0: f64,
    selected: Option<Observation>,
    surface: S,
    pub(crate) last_pointer: Option<Pos2>,
}

impl RoundPlot<Scene> {
    /// Build a plot on a fresh [`Scene`] sized from the parameters.
    pub fn new(params: RoundPlotParams) -> Self {
        let scene = Scene::for_config(&params.resolve());
        Self::with_surface(params, scene)
    }

    pub fn scene(&self) -> &Scene {
        &self.surface
    }
}

impl Default for RoundPlot<Scene> {
    fn default() -> Self {
        Self::new(RoundPlotParams::default())
    }
}

impl<S: DrawingSurface> RoundPlot<S> {
    /// Build a plot drawing into an existing surface. The surface is assumed
    /// to already carry the cursor and legend primitives.
    pub fn with_surface(params: RoundPlotParams, surface: S) -> Self {
        let config = params.resolve();
        let formatters = params.formatters.resolve();
        let data = params.data.unwrap_or_default();
        let mut plot = Self {
            config,
            formatters,
            data: DataModel::default(),
            d0: 0.0,
            selected: None,
            surface,
            last_pointer: None,
        };
        plot.set_data(data);
        plot
    }

    pub fn config(&self) -> &RoundPlotConfig {
        &self.config
    }

    pub fn formatters(&self) -> &Formatters {
        &self.formatters
    }

    pub fn data(&self) -> &DataModel {
        &self.data
    }

    pub fn d0(&self) -> f64 {
        self.d0
    }

    /// Observation the cursor currently points at.
    pub fn selected(&self) -> Option<&Observation> {
        self.selected.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Data
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the data. The cursor jumps to the last observation unless the
    /// new data is empty.
    pub fn set_data(&mut self, raw: Vec<Observation>) {
        let move_cursor = !raw.is_empty();
        self.set_data_with_cursor(raw, move_cursor);
    }

    /// Replace the data, choosing whether the cursor moves to the last observation.
    pub fn set_data_with_cursor(&mut self, raw: Vec<Observation>, move_cursor: bool) {
        self.data = DataModel::new(raw);
        self.d0 = self.data.first().map(|o| o.date).unwrap_or(0.0);
        log::debug!(
            "plot data replaced: {} observations, range [{}, {}]",
            self.data.len(),
            self.data.min(),
            self.data.max()
        );
        if !self.data.is_empty() && self.data.is_degenerate() {
            log::warn!(
                "all observations share the value {}; bars collapse onto the inner dial",
                self.data.min()
            );
        }
        if move_cursor {
            match self.data.last().copied() {
                Some(last) => self.move_cursor(&last),
                None => log::warn!("cursor move requested on empty data; cursor left in place"),
            }
        }
        self.paint();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Coordinate mapping
    // ─────────────────────────────────────────────────────────────────────────

    /// Angle in degrees for a timestamp. Not wrapped into `[0, 360)`.
    pub fn date_to_angle(&self, date: f64) -> f64 {
        self.config.alpha0 + (date - self.d0) * 360.0 / self.config.time_in_clock
    }

    /// Radius in px for a value. Values outside the observed range reach past
    /// the dial; a degenerate range puts every value on the inner radius.
    pub fn scale(&self, value: f64) -> f64 {
        let n = self.data.norm(value);
        let n = if n.is_finite() { n } else { 0.0 };
        self.config.clock_radius + n * (self.config.outer_radius() - self.config.clock_radius)
    }

    /// Observations less than one full turn older than the last one.
    pub fn visible_observations(&self) -> impl Iterator<Item = &Observation> + '_ {
        let last = self.data.last().map(|o| o.date);
        let window = self.config.time_in_clock;
        self.data
            .raw()
            .iter()
            .filter(move |o| last.is_some_and(|l| l - o.date < window))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Painting
    // ─────────────────────────────────────────────────────────────────────────

    /// Reconcile the value bars with the observations in the time window.
    pub fn paint_value_bars(&mut self) -> JoinStats {
        let specs: Vec<BarSpec> = self
            .visible_observations()
            .map(|o| BarSpec {
                key: o.key(),
                date: o.date,
                angle: self.date_to_angle(o.date),
                inner_radius: self.config.clock_radius,
                outer_radius: self.scale(o.value),
                color: self.formatters.color_for(o.value, &self.data),
            })
            .collect();
        let stats = self.surface.join_bars(&specs);
        log::debug!(
            "value bars: {} entered, {} updated, {} exited",
            stats.entered,
            stats.updated,
            stats.exited
        );
        stats
    }

    /// Three reference circles: inner dial, midway, outer edge.
    pub fn paint_circs(&mut self) {
        let min = self.config.clock_radius;
        let max = self.config.outer_radius();
        let specs: Vec<CircleSpec> = [min, (min + max) / 2.0, max]
            .into_iter()
            .map(|radius| CircleSpec {
                radius,
                stroke: egui::Color32::from_rgb(
                    channel((radius - min) / (max - min) * 255.0),
                    80,
                    80,
                ),
            })
            .collect();
        self.surface.join_circles(&specs);
    }

    pub fn paint(&mut self) {
        self.paint_value_bars();
        self.paint_circs();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cursor & interaction
    // ─────────────────────────────────────────────────────────────────────────

    /// Point the cursor at `obs` and update both legends.
    pub fn move_cursor(&mut self, obs: &Observation) {
        let angle = self.date_to_angle(obs.date);
        let m = self.config.middle();
        let from = polar_point(m, self.config.clock_radius - CURSOR_INSET, angle);
        let to = polar_point(m, m, angle);
        self.surface.set_cursor(from, to);
        self.surface
            .set_date_legend(self.formatters.format_date(obs.date));
        let fill = self.formatters.color_for(obs.value, &self.data);
        self.surface
            .set_value_legend(self.formatters.format_value(obs.value), fill);
        self.selected = Some(*obs);
    }

    /// Angle in degrees of a pointer position, clockwise from 12 o'clock,
    /// in `(-180, 180]`.
    pub fn pointer_angle(&self, pos: Pos2) -> f64 {
        let m = self.config.middle();
        (pos.x as f64 - m).atan2(m - pos.y as f64).to_degrees()
    }

    /// Observation whose angle is closest to `angle` by [`circular_distance`].
    /// Ties go to the earliest observation in the sequence.
    pub fn nearest_to_angle(&self, angle: f64) -> Option<&Observation> {
        let mut best: Option<(&Observation, f64)> = None;
        for o in self.data.raw() {
            let d = circular_distance(self.date_to_angle(o.date), angle);
            if d.is_nan() {
                continue;
            }
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((o, d)),
            }
        }
        best.map(|(o, _)| o)
    }

    /// Pointer moved to `pos` (surface coordinates): move the cursor to the
    /// nearest observation. Returns the selected observation.
    pub fn handle_pointer_move(&mut self, pos: Pos2) -> Option<Observation> {
        let angle = self.pointer_angle(pos);
        let nearest = self.nearest_to_angle(angle).copied()?;
        self.move_cursor(&nearest);
        Some(nearest)
    }

    /// Clicks on the plot are swallowed. Always returns `true` (handled).
    pub fn handle_click(&mut self) -> bool {
        true
    }
}

/// Angular distance used by the nearest search: `(|a - b| + 360) mod 360`,
/// in `[0, 360)` degrees. Not symmetric across 0°: `-10°` is 10° from `0°`
/// but 350° from `340°`. `NaN` when either angle is not finite.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    ((a - b).abs() + 360.0) % 360.0
}

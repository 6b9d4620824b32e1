//! Retained scene: the SVG-like tree the plot draws into.

use std::collections::HashMap;

use egui::{Color32, Pos2};

use super::tween::Tween;
use super::{BarSpec, CircleSpec, DrawingSurface, JoinStats};
use crate::config::RoundPlotConfig;

/// Fixed styling of the scaffolding and primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub cursor_stroke: Color32,
    pub cursor_width: f32,
    pub date_legend_fill: Color32,
    pub legend_font_size: f32,
    pub bar_width: f32,
    /// Dash and gap length of value bars.
    pub bar_dash: (f32, f32),
    pub circle_width: f32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            cursor_stroke: Color32::from_rgb(0x99, 0x99, 0x99),
            cursor_width: 1.0,
            date_legend_fill: Color32::from_rgb(0x99, 0x99, 0x99),
            legend_font_size: 20.0,
            bar_width: 2.0,
            bar_dash: (5.0, 1.0),
            circle_width: 1.0,
        }
    }
}

/// A text primitive anchored at its horizontal centre / baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub anchor: Pos2,
    pub text: String,
    pub fill: Tween<Color32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueBar {
    pub key: u64,
    pub date: f64,
    /// Degrees clockwise from 12 o'clock; not wrapped.
    pub angle: f64,
    pub inner_radius: f64,
    pub outer_radius: Tween<f64>,
    pub color: Tween<Color32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefCircle {
    pub radius: f64,
    pub stroke: Color32,
}

#[derive(Debug, Clone)]
pub struct Scene {
    size: f64,
    clock_radius: f64,
    transition_secs: f64,
    clock: f64,
    pub style: SceneStyle,
    cursor: (Pos2, Pos2),
    date_legend: Legend,
    value_legend: Legend,
    bars: Vec<ValueBar>,
    circles: Vec<RefCircle>,
}

impl Scene {
    /// Create a scene with its scaffolding: the cursor pointing at
    /// 12 o'clock and the two (empty) legend texts inside the dial.
    pub fn new(size: f64, clock_radius: f64) -> Self {
        let m = size / 2.0;
        let r = clock_radius;
        let line_height = r / 5.0;
        let style = SceneStyle::default();
        Self {
            size,
            clock_radius,
            transition_secs: crate::config::DEFAULT_TRANSITION_SECS,
            clock: 0.0,
            cursor: (
                Pos2::new(m as f32, (m - r + 10.0) as f32),
                Pos2::new(m as f32, 0.0),
            ),
            date_legend: Legend {
                anchor: Pos2::new(m as f32, (m - r / 2.0 + line_height) as f32),
                text: String::new(),
                fill: Tween::fixed(style.date_legend_fill),
            },
            value_legend: Legend {
                anchor: Pos2::new(m as f32, (m + r / 2.0 - line_height) as f32),
                text: String::new(),
                fill: Tween::fixed(Color32::BLACK),
            },
            style,
            bars: Vec::new(),
            circles: Vec::new(),
        }
    }

    pub fn for_config(cfg: &RoundPlotConfig) -> Self {
        let mut scene = Self::new(cfg.size, cfg.clock_radius);
        scene.transition_secs = cfg.transition_secs;
        scene
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn clock_radius(&self) -> f64 {
        self.clock_radius
    }

    pub fn middle(&self) -> f64 {
        self.size / 2.0
    }

    pub fn transition_secs(&self) -> f64 {
        self.transition_secs
    }

    pub fn set_transition_secs(&mut self, secs: f64) {
        self.transition_secs = secs.max(0.0);
    }

    /// Scene time in seconds; transitions started from now on begin here.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn set_clock(&mut self, now: f64) {
        self.clock = now;
    }

    pub fn cursor(&self) -> (Pos2, Pos2) {
        self.cursor
    }

    pub fn date_legend(&self) -> &Legend {
        &self.date_legend
    }

    pub fn value_legend(&self) -> &Legend {
        &self.value_legend
    }

    pub fn bars(&self) -> &[ValueBar] {
        &self.bars
    }

    pub fn bar(&self, key: u64) -> Option<&ValueBar> {
        self.bars.iter().find(|b| b.key == key)
    }

    pub fn circles(&self) -> &[RefCircle] {
        &self.circles
    }

    /// `true` while any transition is still running at `now`.
    pub fn is_animating(&self, now: f64) -> bool {
        self.value_legend.fill.is_running(now)
            || self
                .bars
                .iter()
                .any(|b| b.outer_radius.is_running(now) || b.color.is_running(now))
    }
}

impl DrawingSurface for Scene {
    fn set_cursor(&mut self, from: Pos2, to: Pos2) {
        self.cursor = (from, to);
    }

    fn set_date_legend(&mut self, text: String) {
        self.date_legend.text = text;
    }

    fn set_value_legend(&mut self, text: String, fill: Color32) {
        self.value_legend.text = text;
        self.value_legend
            .fill
            .retarget(fill, self.clock, self.transition_secs);
    }

    fn join_bars(&mut self, specs: &[BarSpec]) -> JoinStats {
        let now = self.clock;
        let duration = self.transition_secs;
        let mut stats = JoinStats::default();

        let mut old: Vec<Option<ValueBar>> = std::mem::take(&mut self.bars)
            .into_iter()
            .map(Some)
            .collect();
        let mut by_key: HashMap<u64, usize> = HashMap::with_capacity(old.len());
        for (i, bar) in old.iter().enumerate() {
            if let Some(bar) = bar {
                by_key.entry(bar.key).or_insert(i);
            }
        }

        let mut joined: Vec<ValueBar> = Vec::with_capacity(specs.len());
        let mut placed: HashMap<u64, usize> = HashMap::with_capacity(specs.len());
        for spec in specs {
            if let Some(&idx) = placed.get(&spec.key) {
                log::warn!(
                    "duplicate timestamp {} in value bar join; keeping the later observation",
                    spec.date
                );
                let bar = &mut joined[idx];
                bar.angle = spec.angle;
                bar.inner_radius = spec.inner_radius;
                bar.outer_radius.retarget(spec.outer_radius, now, duration);
                bar.color.retarget(spec.color, now, duration);
                continue;
            }
            let existing = by_key
                .get(&spec.key)
                .and_then(|&i| old.get_mut(i))
                .and_then(Option::take);
            let bar = match existing {
                Some(mut bar) => {
                    stats.updated += 1;
                    bar.date = spec.date;
                    bar.angle = spec.angle;
                    bar.inner_radius = spec.inner_radius;
                    bar.outer_radius.retarget(spec.outer_radius, now, duration);
                    bar.color.retarget(spec.color, now, duration);
                    bar
                }
                None => {
                    stats.entered += 1;
                    ValueBar {
                        key: spec.key,
                        date: spec.date,
                        angle: spec.angle,
                        inner_radius: spec.inner_radius,
                        outer_radius: Tween::new(
                            spec.inner_radius,
                            spec.outer_radius,
                            now,
                            duration,
                        ),
                        color: Tween::new(Color32::TRANSPARENT, spec.color, now, duration),
                    }
                }
            };
            placed.insert(spec.key, joined.len());
            joined.push(bar);
        }

        stats.exited = old.iter().filter(|b| b.is_some()).count();
        self.bars = joined;
        stats
    }

    fn join_circles(&mut self, specs: &[CircleSpec]) {
        self.circles.truncate(specs.len());
        for (i, spec) in specs.iter().enumerate() {
            let circle = RefCircle {
                radius: spec.radius,
                stroke: spec.stroke,
            };
            match self.circles.get_mut(i) {
                Some(c) => *c = circle,
                None => self.circles.push(circle),
            }
        }
    }
}

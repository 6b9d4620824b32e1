//! Drawing surface abstraction.
//!
//! The plot never draws directly. It describes what should be on screen
//! through [`DrawingSurface`]: a cursor line, two legend texts, a keyed set
//! of value bars and the reference circles. Each `join_*` call reconciles
//! the surface with the full desired set (enter / update / exit), so calling
//! it repeatedly never accumulates primitives.
//!
//! [`Scene`] is the retained implementation used by the egui widget and the
//! SVG/PNG exporters.

mod scene;
mod tween;

pub use scene::{Legend, RefCircle, Scene, SceneStyle, ValueBar};
pub use tween::{Lerp, Tween};

use egui::{Color32, Pos2};

/// Desired state of one value bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSpec {
    /// Identity used to match the bar across joins (the observation's timestamp bits).
    pub key: u64,
    /// Timestamp of the observation, in milliseconds.
    pub date: f64,
    /// Rotation about the surface centre, degrees clockwise from 12 o'clock.
    pub angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub color: Color32,
}

/// Desired state of one reference circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSpec {
    pub radius: f64,
    pub stroke: Color32,
}

/// Outcome of a keyed join.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinStats {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

pub trait DrawingSurface {
    /// Redraw the cursor line between two points (surface coordinates).
    fn set_cursor(&mut self, from: Pos2, to: Pos2);

    fn set_date_legend(&mut self, text: String);

    /// Set the value legend text and transition its fill towards `fill`.
    fn set_value_legend(&mut self, text: String, fill: Color32);

    /// Reconcile the value bars with `bars`. Bars whose key is absent are removed.
    fn join_bars(&mut self, bars: &[BarSpec]) -> JoinStats;

    /// Reconcile the reference circles with `circles`, by position.
    fn join_circles(&mut self, circles: &[CircleSpec]);
}

/// Point at `radius` from the centre `(middle, middle)`, rotated `angle_deg`
/// clockwise from 12 o'clock (screen coordinates, y pointing down).
pub fn polar_point(middle: f64, radius: f64, angle_deg: f64) -> Pos2 {
    let a = angle_deg.to_radians();
    Pos2::new(
        (middle + radius * a.sin()) as f32,
        (middle - radius * a.cos()) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_point_follows_clock_orientation() {
        let p = polar_point(250.0, 100.0, 0.0);
        assert!((p.x - 250.0).abs() < 1e-4 && (p.y - 150.0).abs() < 1e-4);
        let p = polar_point(250.0, 100.0, 90.0);
        assert!((p.x - 350.0).abs() < 1e-4 && (p.y - 250.0).abs() < 1e-4);
        let p = polar_point(250.0, 100.0, 180.0);
        assert!((p.x - 250.0).abs() < 1e-4 && (p.y - 350.0).abs() < 1e-4);
    }
}

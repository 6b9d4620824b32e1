//! Time-based interpolation for animated scene attributes.
//!
//! A [`Tween`] is fire-and-forget: it is started at the scene clock and
//! sampled on every frame. Retargeting a running tween continues from the
//! currently displayed value.

use egui::emath::easing;
use egui::Color32;

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: Self, b: Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Color32 {
    fn lerp(a: Self, b: Self, t: f64) -> Self {
        let mix = |x: u8, y: u8| -> u8 {
            (x as f64 + (y as f64 - x as f64) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Color32::from_rgba_premultiplied(
            mix(a.r(), b.r()),
            mix(a.g(), b.g()),
            mix(a.b(), b.b()),
            mix(a.a(), b.a()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    start: f64,
    duration: f64,
}

impl<T: Lerp> Tween<T> {
    /// A tween that is already at rest on `value`.
    pub fn fixed(value: T) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
        }
    }

    pub fn new(from: T, to: T, start: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// Final value once the transition has run.
    pub fn target(&self) -> T {
        self.to
    }

    /// Displayed value at time `now` (seconds).
    pub fn sample(&self, now: f64) -> T {
        if self.duration <= 0.0 || now >= self.start + self.duration {
            return self.to;
        }
        if now <= self.start {
            return self.from;
        }
        let t = (now - self.start) / self.duration;
        let eased = easing::cubic_in_out(t.clamp(0.0, 1.0) as f32) as f64;
        T::lerp(self.from, self.to, eased)
    }

    /// Start a new transition towards `to` from whatever is shown at `now`.
    pub fn retarget(&mut self, to: T, now: f64, duration: f64) {
        self.from = self.sample(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
    }

    pub fn is_running(&self, now: f64) -> bool {
        self.duration > 0.0 && now < self.start + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_hits_endpoints_and_midpoint() {
        let tw = Tween::new(0.0_f64, 10.0, 1.0, 2.0);
        assert_eq!(tw.sample(0.0), 0.0);
        assert_eq!(tw.sample(1.0), 0.0);
        assert!((tw.sample(2.0) - 5.0).abs() < 1e-9);
        assert_eq!(tw.sample(3.0), 10.0);
        assert!(tw.is_running(2.5));
        assert!(!tw.is_running(3.0));
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let mut tw = Tween::new(0.0_f64, 10.0, 0.0, 1.0);
        tw.retarget(20.0, 0.5, 1.0);
        assert!((tw.sample(0.5) - 5.0).abs() < 1e-9);
        assert_eq!(tw.target(), 20.0);
        assert_eq!(tw.sample(1.5), 20.0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut tw = Tween::fixed(Color32::BLACK);
        tw.retarget(Color32::RED, 0.0, 0.0);
        assert_eq!(tw.sample(0.0), Color32::RED);
        assert!(!tw.is_running(0.0));
    }
}

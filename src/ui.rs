//! egui integration: painting a [`Scene`] and feeding pointer input back
//! into the plot.

use egui::{Align2, FontId, Pos2, Shape, Stroke};

use crate::plot::RoundPlot;
use crate::surface::{polar_point, Scene};

impl Scene {
    /// Paint the scene with its top-left corner at `origin`, sampling
    /// running transitions at `now` (seconds).
    pub fn paint(&self, painter: &egui::Painter, origin: Pos2, now: f64) {
        let offset = origin.to_vec2();
        let m = self.middle();
        let style = &self.style;

        let (from, to) = self.cursor();
        painter.line_segment(
            [from + offset, to + offset],
            Stroke::new(style.cursor_width, style.cursor_stroke),
        );

        for legend in [self.date_legend(), self.value_legend()] {
            if legend.text.is_empty() {
                continue;
            }
            painter.text(
                legend.anchor + offset,
                Align2::CENTER_BOTTOM,
                &legend.text,
                FontId::monospace(style.legend_font_size),
                legend.fill.sample(now),
            );
        }

        for bar in self.bars() {
            let outer = bar.outer_radius.sample(now);
            if !outer.is_finite() || !bar.angle.is_finite() {
                continue;
            }
            let a = polar_point(m, bar.inner_radius, bar.angle) + offset;
            let b = polar_point(m, outer, bar.angle) + offset;
            let stroke = Stroke::new(style.bar_width, bar.color.sample(now));
            painter.extend(Shape::dashed_line(
                &[a, b],
                stroke,
                style.bar_dash.0,
                style.bar_dash.1,
            ));
        }

        let center = Pos2::new(m as f32, m as f32) + offset;
        for circle in self.circles() {
            painter.circle_stroke(
                center,
                circle.radius as f32,
                Stroke::new(style.circle_width, circle.stroke),
            );
        }
    }
}

impl RoundPlot<Scene> {
    /// Show the plot in a `size × size` region.
    ///
    /// Pointer movement over the region moves the cursor to the nearest
    /// observation; clicks are consumed.
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let side = self.config().size as f32;
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
        let now = ui.input(|i| i.time);
        self.surface_mut().set_clock(now);

        match response.hover_pos() {
            Some(pos) => {
                let local = (pos - rect.min).to_pos2();
                if self.last_pointer != Some(local) {
                    self.last_pointer = Some(local);
                    self.handle_pointer_move(local);
                }
            }
            None => self.last_pointer = None,
        }
        if response.clicked() {
            self.handle_click();
        }

        if ui.is_rect_visible(rect) {
            self.scene().paint(&ui.painter_at(rect), rect.min, now);
        }
        if self.scene().is_animating(now) {
            ui.ctx().request_repaint();
        }
        response
    }
}

impl egui::Widget for &mut RoundPlot<Scene> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        self.show(ui)
    }
}

//! Standalone application wrapper.
//!
//! [`RoundPlotApp`] owns a [`RoundPlot`] and implements [`eframe::App`] so the
//! plot can run in its own native window. Each frame it drains the command
//! channel, draws an optional top bar and then the plot itself.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use eframe::egui;
use egui_phosphor::regular::{DOWNLOAD_SIMPLE, IMAGE};

use crate::config::{AppConfig, RoundPlotParams};
use crate::export;
use crate::plot::RoundPlot;
use crate::sink::PlotCommand;

/// How often the channel is polled while no input arrives.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct RoundPlotApp {
    /// The plot being shown.
    pub plot: RoundPlot,
    rx: Receiver<PlotCommand>,
    /// Optional heading text shown at the top of the window.
    pub headline: Option<String>,
    /// Show the SVG/PNG export buttons in the top bar.
    pub export_buttons: bool,
    disconnected: bool,
}

impl RoundPlotApp {
    pub fn new(rx: Receiver<PlotCommand>, params: RoundPlotParams) -> Self {
        Self {
            plot: RoundPlot::new(params),
            rx,
            headline: None,
            export_buttons: true,
            disconnected: false,
        }
    }

    pub(crate) fn apply_config(&mut self, cfg: &AppConfig) {
        self.headline = cfg.headline.clone();
        self.export_buttons = cfg.export_buttons;
    }

    /// Apply every pending command. Returns how many were applied.
    pub fn drain_commands(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.rx.try_recv() {
                Ok(cmd) => {
                    cmd.apply(&mut self.plot);
                    applied += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.disconnected {
                        log::debug!("plot command channel closed; keeping last data");
                        self.disconnected = true;
                    }
                    break;
                }
            }
        }
        applied
    }

    fn export_dialog(&self, label: &str, ext: &str) {
        let default_name = format!(
            "roundplot_{:.0}.{ext}",
            chrono::Local::now().timestamp_millis()
        );
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(&default_name)
            .add_filter(label, &[ext])
            .save_file()
        {
            match export::save(self.plot.scene(), &path) {
                Ok(()) => log::info!("Saved plot to {:?}", path),
                Err(e) => log::error!("Failed to export plot: {e}"),
            }
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        if self.headline.is_none() && !self.export_buttons {
            return;
        }
        egui::TopBottomPanel::top("roundplot_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(h) = &self.headline {
                    ui.heading(h);
                }
                if self.export_buttons {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(format!("{IMAGE} PNG"))
                            .on_hover_text("Export the plot as PNG")
                            .clicked()
                        {
                            self.export_dialog("PNG", "png");
                        }
                        if ui
                            .button(format!("{DOWNLOAD_SIMPLE} SVG"))
                            .on_hover_text("Export the plot as SVG")
                            .clicked()
                        {
                            self.export_dialog("SVG", "svg");
                        }
                    });
                }
            });
        });
    }
}

impl eframe::App for RoundPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.drain_commands() > 0 {
            ctx.request_repaint();
        }
        self.top_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add(&mut self.plot);
            });
        });
        if !self.disconnected {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}

//! Top-level entry point for running the plot in a native window.

use eframe::egui;

use crate::config::{AppConfig, RoundPlotParams};
use crate::sink::PlotCommand;

use super::roundplot_app::RoundPlotApp;

/// Launch the plot in a native window and block until it is closed.
///
/// Data replacement requests arrive through `rx` (see
/// [`channel_plot`](crate::channel_plot)); `params` supplies the dial geometry,
/// the initial data and the formatting strategies.
pub fn run_roundplot(
    rx: std::sync::mpsc::Receiver<PlotCommand>,
    params: RoundPlotParams,
    mut cfg: AppConfig,
) -> eframe::Result<()> {
    let mut app = RoundPlotApp::new(rx, params);
    app.apply_config(&cfg);

    let side = app.plot.config().size as f32;
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);
    if opts.viewport.inner_size.is_none() {
        // Room for the top bar and panel margins around the square plot.
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(side + 32.0, side + 64.0));
    }

    eframe::run_native(
        &cfg.title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

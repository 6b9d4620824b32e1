//! Example: live data on a one-minute dial
//!
//! What it demonstrates
//! - Feeding a running plot from a background thread through `PlotSink`.
//! - Replacing the full data set on every update (the plot has no append).
//! - A custom value formatter.
//!
//! How to run
//! ```bash
//! RUST_LOG=roundplot=debug cargo run --example clock
//! ```

use std::time::Duration;

use roundplot::{
    channel_plot, run_roundplot, AppConfig, FormatterOverrides, Observation, RoundPlotParams,
};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let (sink, rx) = channel_plot();

    std::thread::spawn(move || {
        let mut readings: Vec<Observation> = Vec::new();
        let t_start = chrono::Utc::now().timestamp_millis() as f64;
        loop {
            let now = chrono::Utc::now().timestamp_millis() as f64;
            let phase = (now - t_start) / 10_000.0;
            let value = 20.0 + 5.0 * phase.sin() + 1.5 * (3.1 * phase).cos();
            readings.push(Observation::new(now, value));
            // Keep a little more than one turn so the window has something to drop.
            readings.retain(|o| now - o.date < 75_000.0);
            if sink.set_data(readings.clone()).is_err() {
                break;
            }
            std::thread::sleep(Duration::from_millis(500));
        }
    });

    let params = RoundPlotParams::default()
        .with_time_in_clock(60_000.0)
        .with_formatters(
            FormatterOverrides::default().with_value_format(|v| format!("{v:.1} °C")),
        );
    let cfg = AppConfig {
        title: "RoundPlot: one-minute clock".to_string(),
        headline: Some("Temperature".to_string()),
        ..AppConfig::default()
    };
    run_roundplot(rx, params, cfg)
}

//! Example: display a fixed data set
//!
//! What it demonstrates
//! - Loading parameters (and optionally data) from a JSON or YAML file.
//! - Falling back to twelve hours of generated hourly-ish readings.
//!
//! How to run
//! ```bash
//! cargo run --example fixed_data
//! cargo run --example fixed_data -- params.yaml
//! ```

use roundplot::{channel_plot, run_roundplot, AppConfig, Observation, RoundPlotParams};

fn make_fixed_readings() -> Vec<Observation> {
    let n = 72usize;
    let step_ms = 10.0 * 60.0 * 1000.0;
    let t_end = chrono::Utc::now().timestamp_millis() as f64;
    let t_start = t_end - step_ms * (n - 1) as f64;
    (0..n)
        .map(|i| {
            let x = i as f64 / n as f64 * std::f64::consts::TAU;
            Observation::new(t_start + i as f64 * step_ms, 50.0 + 40.0 * x.sin() * x.cos().abs())
        })
        .collect()
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut params = match std::env::args().nth(1) {
        Some(path) => RoundPlotParams::load(&path).unwrap_or_else(|e| {
            log::error!("could not load {path}: {e}; using defaults");
            RoundPlotParams::default()
        }),
        None => RoundPlotParams::default(),
    };
    if params.data.is_none() {
        params.data = Some(make_fixed_readings());
    }

    // Nothing is sent later; the sender is simply kept alive until exit.
    let (_sink, rx) = channel_plot();
    run_roundplot(rx, params, AppConfig::default())
}

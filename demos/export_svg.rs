//! Example: headless export
//!
//! Builds a plot without opening a window and writes it as SVG and PNG.
//!
//! How to run
//! ```bash
//! cargo run --example export_svg -- out_dir
//! ```

use std::path::PathBuf;

use roundplot::{export, Observation, RoundPlot, RoundPlotParams};

fn main() -> Result<(), roundplot::RoundPlotError> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&out_dir)?;

    let hour = 3_600_000.0;
    let data: Vec<Observation> = (0..48)
        .map(|i| Observation::new(i as f64 * hour / 4.0, ((i * 7) % 13) as f64))
        .collect();
    let plot = RoundPlot::new(RoundPlotParams::default().with_data(data));

    export::save_svg(plot.scene(), out_dir.join("roundplot.svg"))?;
    export::save_png(plot.scene(), out_dir.join("roundplot.png"))?;
    println!("wrote roundplot.svg and roundplot.png to {}", out_dir.display());
    Ok(())
}

//! RoundPlot crate root: re-exports and module wiring.
//!
//! A round ("clock") plot for egui/eframe. Time-series observations are drawn
//! as coloured bars radiating from the centre of a circular dial; a cursor
//! line follows the pointer and shows the nearest observation's date and
//! value.
//!
//! - `data`: observations, the normalisation model, formatting strategies
//! - `config`: construction parameters and the resolved configuration
//! - `surface`: the drawing-surface seam and the retained [`Scene`]
//! - `plot`: the [`RoundPlot`] itself (mapping, painting, cursor)
//! - `ui`: egui painting and pointer handling
//! - `export`: SVG and PNG output
//! - `sink`: channel for replacing data from other threads
//! - `app`: standalone native window

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod plot;
pub mod sink;
pub mod surface;
mod ui;

pub use app::{run_roundplot, RoundPlotApp};
pub use config::{AppConfig, RoundPlotConfig, RoundPlotParams};
pub use data::{DataModel, FormatterOverrides, Formatters, Observation};
pub use error::RoundPlotError;
pub use plot::{circular_distance, RoundPlot};
pub use sink::{channel_plot, PlotCommand, PlotSink};
pub use surface::{BarSpec, CircleSpec, DrawingSurface, JoinStats, Scene};

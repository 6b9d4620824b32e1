//! Native-window application around the plot.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`roundplot_app`] | [`RoundPlotApp`] (eframe) wrapper: command draining, top bar, plot |
//! | [`run`]           | [`run_roundplot()`] entry point |

mod roundplot_app;
mod run;

pub use roundplot_app::RoundPlotApp;
pub use run::run_roundplot;

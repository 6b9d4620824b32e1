//! Data types behind the plot: observations, their normalisation model and
//! the formatting strategies applied to them.

pub mod formatters;
pub mod model;

pub use formatters::{FormatterOverrides, Formatters};
pub use model::{DataModel, Observation};

//! Channel for feeding data into a running plot from other threads.
//!
//! The plot has no incremental append: every command carries the full
//! observation sequence, which replaces whatever the plot was showing.

use std::sync::mpsc::{Receiver, SendError, Sender};

use crate::data::model::Observation;

/// Messages sent over the channel to drive the plot.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotCommand {
    /// Replace the data. `move_cursor: None` moves the cursor to the last
    /// observation whenever the new data is non-empty.
    SetData {
        observations: Vec<Observation>,
        move_cursor: Option<bool>,
    },
}

/// Convenience sender for feeding observations into the plot.
#[derive(Clone)]
pub struct PlotSink {
    tx: Sender<PlotCommand>,
}

impl PlotSink {
    /// Replace the plot's data; the cursor follows the new last observation.
    pub fn set_data<I>(&self, observations: I) -> Result<(), SendError<PlotCommand>>
    where
        I: Into<Vec<Observation>>,
    {
        self.tx.send(PlotCommand::SetData {
            observations: observations.into(),
            move_cursor: None,
        })
    }

    /// Replace the plot's data, choosing whether the cursor moves.
    pub fn set_data_with_cursor<I>(
        &self,
        observations: I,
        move_cursor: bool,
    ) -> Result<(), SendError<PlotCommand>>
    where
        I: Into<Vec<Observation>>,
    {
        self.tx.send(PlotCommand::SetData {
            observations: observations.into(),
            move_cursor: Some(move_cursor),
        })
    }

    /// Remove all observations, leaving the cursor where it is.
    #[inline]
    pub fn clear(&self) -> Result<(), SendError<PlotCommand>> {
        self.set_data_with_cursor(Vec::new(), false)
    }
}

/// Create a new channel pair for driving a plot.
pub fn channel_plot() -> (PlotSink, Receiver<PlotCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (PlotSink { tx }, rx)
}

impl PlotCommand {
    /// Apply the command to a plot.
    pub fn apply<S: crate::surface::DrawingSurface>(self, plot: &mut crate::plot::RoundPlot<S>) {
        match self {
            PlotCommand::SetData {
                observations,
                move_cursor: None,
            } => plot.set_data(observations),
            PlotCommand::SetData {
                observations,
                move_cursor: Some(mv),
            } => plot.set_data_with_cursor(observations, mv),
        }
    }
}

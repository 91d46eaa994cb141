//! Reversible range commands and the undo/redo history.

mod command;
mod operations;

pub use command::{AxisRangeSnapshot, PendingZoom, RangeCommand, RangeSnapshot, ZoomCommand};
pub use operations::CommandHistory;

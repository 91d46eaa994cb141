use indexmap::IndexSet;

use crate::core::{AxisId, Rect, TraceId};

/// Residual region that hosts traces and per-axis grids.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotArea {
    visible: bool,
    grids: IndexSet<AxisId>,
    traces: IndexSet<TraceId>,
    bounds: Rect,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            visible: true,
            grids: IndexSet::new(),
            traces: IndexSet::new(),
            bounds: Rect::default(),
        }
    }
}

impl PlotArea {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Axes that currently own a grid in this plot area, in registration order.
    pub fn grid_axes(&self) -> impl Iterator<Item = AxisId> + '_ {
        self.grids.iter().copied()
    }

    #[must_use]
    pub fn has_grid(&self, axis: AxisId) -> bool {
        self.grids.contains(&axis)
    }

    pub fn traces(&self) -> impl Iterator<Item = TraceId> + '_ {
        self.traces.iter().copied()
    }

    #[must_use]
    pub fn trace_count(&self) -> usize {
        self.traces.len()
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub(crate) fn add_grid(&mut self, axis: AxisId) {
        self.grids.insert(axis);
    }

    pub(crate) fn remove_grid(&mut self, axis: AxisId) -> bool {
        self.grids.shift_remove(&axis)
    }

    pub(crate) fn add_trace(&mut self, trace: TraceId) {
        self.traces.insert(trace);
    }

    pub(crate) fn remove_trace(&mut self, trace: TraceId) -> bool {
        self.traces.shift_remove(&trace)
    }
}

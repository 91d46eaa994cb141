use tracing::debug;

use crate::core::{Axis, AxisCollection, AxisId, Orientation};
use crate::error::{GraphError, GraphResult};
use crate::host::SurfaceHost;

use super::ChartSurface;

impl<H: SurfaceHost> ChartSurface<H> {
    /// Registers `axis` after every axis already present.
    ///
    /// Registration order decides stacking: later axes of an orientation sit
    /// further from the plot area.
    pub fn add_axis(&mut self, axis: Axis) -> GraphResult<AxisId> {
        let orientation = axis.orientation();
        let id = self.core.model.axes.insert(axis)?;
        self.core.model.axis_traces.insert(id, Vec::new());
        self.core.model.plot_area.add_grid(id);
        debug!(axis = %id, ?orientation, "add axis");
        self.invalidate_layout();
        Ok(id)
    }

    /// Unregisters an axis, dropping its legend block and grid.
    ///
    /// Traces bound to the axis stay registered; their later removal skips
    /// the missing axis.
    pub fn remove_axis(&mut self, id: AxisId) -> GraphResult<Axis> {
        let axis = self.core.model.axes.remove(id)?;
        let detached_traces = self
            .core
            .model
            .axis_traces
            .shift_remove(&id)
            .map_or(0, |traces| traces.len());
        let legend_removed = self.core.model.legends.remove_block(id).is_some();
        self.core.model.plot_area.remove_grid(id);
        debug!(axis = %id, detached_traces, legend_removed, "remove axis");
        self.invalidate_layout();
        Ok(axis)
    }

    /// Edits non-range axis properties (title, side, margin, visibility,
    /// scale flags). Ranges change only through history-wrapped operations.
    pub fn update_axis<T>(
        &mut self,
        id: AxisId,
        edit: impl FnOnce(&mut Axis) -> T,
    ) -> GraphResult<T> {
        let axis = self
            .core
            .model
            .axes
            .get_mut(id)
            .ok_or(GraphError::AxisNotRegistered(id))?;
        let output = edit(axis);
        self.invalidate_layout();
        Ok(output)
    }

    #[must_use]
    pub fn axis(&self, id: AxisId) -> Option<&Axis> {
        self.core.model.axes.get(id)
    }

    #[must_use]
    pub fn axes(&self) -> &AxisCollection {
        &self.core.model.axes
    }

    /// Horizontal axes followed by vertical axes, each in registration order.
    #[must_use]
    pub fn axes_in_order(&self) -> Vec<&Axis> {
        let axes = &self.core.model.axes;
        axes.of_orientation(Orientation::Horizontal)
            .chain(axes.of_orientation(Orientation::Vertical))
            .collect()
    }

    #[must_use]
    pub fn primary_x_axis(&self) -> Option<&Axis> {
        self.core.model.axes.primary(Orientation::Horizontal)
    }

    #[must_use]
    pub fn primary_y_axis(&self) -> Option<&Axis> {
        self.core.model.axes.primary(Orientation::Vertical)
    }

    pub(super) fn require_axis(&self, id: AxisId) -> GraphResult<&Axis> {
        self.core
            .model
            .axes
            .get(id)
            .ok_or(GraphError::AxisNotRegistered(id))
    }
}

use tracing::{debug, trace};

use crate::core::{AxisId, Orientation, Range};
use crate::error::{GraphError, GraphResult};
use crate::history::PendingZoom;
use crate::host::SurfaceHost;
use crate::range::{RangePlan, RangeUpdate, TraceDataRange, pan_range, zoom_range};

use super::ChartSurface;

pub const AUTO_SCALE_LABEL: &str = "Auto Scale";
pub const STAGGER_LABEL: &str = "Stagger Axes";
pub const SET_RANGE_LABEL: &str = "Set Range";
pub const ZOOM_LABEL: &str = "Zoom";
pub const PAN_LABEL: &str = "Pan";

impl<H: SurfaceHost> ChartSurface<H> {
    /// Autoscales every visible axis to its traces' data extents.
    ///
    /// Recorded as one command over all axes, whether or not each axis
    /// changed. Returns how many axes received a new range.
    pub fn perform_auto_scale<S: TraceDataRange + ?Sized>(&mut self, source: &S) -> usize {
        let model = &self.core.model;
        let participants = model.axes.ids_grouped();
        let plan = self.core.ranges.plan_autoscale(
            &model.axes,
            |axis| model.traces_for_axis(axis),
            source,
        );
        self.commit_plan(AUTO_SCALE_LABEL, &participants, plan)
    }

    /// Staggers vertical axes that do not autoscale themselves so each one's
    /// traces occupy a separate band of the plot height.
    ///
    /// Recorded as one command over all vertical axes. Returns how many axes
    /// received a new range.
    pub fn perform_stagger<S: TraceDataRange + ?Sized>(&mut self, source: &S) -> usize {
        let model = &self.core.model;
        let participants = model.axes.ids_of(Orientation::Vertical);
        let plan = self.core.ranges.plan_stagger(
            &model.axes,
            |axis| model.traces_for_axis(axis),
            source,
        );
        self.commit_plan(STAGGER_LABEL, &participants, plan)
    }

    /// Manually sets one axis range as an undoable command.
    pub fn set_axis_range(&mut self, id: AxisId, range: Range) -> GraphResult<()> {
        let axis = self.require_axis(id)?;
        if axis.is_log_scale() && range.lower() <= 0.0 {
            return Err(GraphError::InvalidData(
                "log-scale axis range must be > 0".to_owned(),
            ));
        }
        self.commit_single(SET_RANGE_LABEL, id, Some(range));
        Ok(())
    }

    /// Zooms one axis around `center` by `factor` (`< 1` zooms in).
    ///
    /// Returns `false` when the zoomed range is not displayable; nothing is
    /// recorded in that case.
    pub fn zoom_axis(&mut self, id: AxisId, center: f64, factor: f64) -> GraphResult<bool> {
        let axis = self.require_axis(id)?;
        let zoomed = zoom_range(axis.range(), axis.is_log_scale(), center, factor)?;
        Ok(self.commit_single(ZOOM_LABEL, id, zoomed))
    }

    /// Pans one axis by `fraction` of its span.
    pub fn pan_axis(&mut self, id: AxisId, fraction: f64) -> GraphResult<bool> {
        let axis = self.require_axis(id)?;
        let panned = pan_range(axis.range(), axis.is_log_scale(), fraction)?;
        Ok(self.commit_single(PAN_LABEL, id, panned))
    }

    fn commit_single(&mut self, label: &str, id: AxisId, range: Option<Range>) -> bool {
        let Some(range) = range else {
            trace!(axis = %id, command = label, "range change not displayable, skipped");
            return false;
        };
        let log_scale = self
            .core
            .model
            .axes
            .get(id)
            .is_some_and(|axis| axis.is_log_scale());
        if log_scale && range.lower() <= 0.0 {
            debug!(axis = %id, command = label, "log-scale axis rejects non-positive range");
            return false;
        }
        let mut plan = RangePlan::new();
        plan.push(RangeUpdate { axis: id, range });
        self.commit_plan(label, &[id], plan) > 0
    }

    /// Snapshots `participants`, applies `plan`, and hands the finished
    /// command to the history.
    fn commit_plan(&mut self, label: &str, participants: &[AxisId], plan: RangePlan) -> usize {
        let axes = &mut self.core.model.axes;
        let pending = PendingZoom::begin(label, axes, participants);

        let mut applied = 0usize;
        for update in plan {
            let Some(axis) = axes.get_mut(update.axis) else {
                continue;
            };
            match axis.set_range(update.range) {
                Ok(()) => applied += 1,
                Err(err) => trace!(axis = %update.axis, error = %err, "range update rejected"),
            }
        }

        let command = pending.finish(axes);
        self.core.history.execute(Box::new(command), axes);
        debug!(
            command = label,
            participants = participants.len(),
            applied,
            "range command committed"
        );
        self.invalidate_layout();
        applied
    }
}

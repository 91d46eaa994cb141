use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{AxisId, Orientation, Trace, TraceId, default_trace_color};
use crate::error::{GraphError, GraphResult};
use crate::host::SurfaceHost;

use super::ChartSurface;

/// Per-axis outcome of a best-effort trace attach or detach.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceAxisReport {
    pub trace: TraceId,
    /// Axes the trace was attached to or detached from.
    pub applied: SmallVec<[AxisId; 2]>,
    /// Axes skipped because they were missing or of the wrong orientation.
    pub skipped: SmallVec<[(AxisId, GraphError); 2]>,
    /// Legend block created (attach) or dropped (detach) by this call.
    pub legend_changed: bool,
}

impl TraceAxisReport {
    fn new(trace: TraceId) -> Self {
        Self {
            trace,
            applied: SmallVec::new(),
            skipped: SmallVec::new(),
            legend_changed: false,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl<H: SurfaceHost> ChartSurface<H> {
    /// Adds a trace on the axes it names.
    pub fn add_trace(&mut self, trace: Trace) -> GraphResult<TraceAxisReport> {
        self.add_trace_to_axes(trace, None, None)
    }

    /// Adds a trace, optionally rebinding it to other axes first.
    ///
    /// Registering the same trace id twice is an error. Axis binding is best
    /// effort: an axis that is missing or has the wrong orientation is
    /// recorded in the report and the remaining axes are still attached.
    pub fn add_trace_to_axes(
        &mut self,
        mut trace: Trace,
        x_axis: Option<AxisId>,
        y_axis: Option<AxisId>,
    ) -> GraphResult<TraceAxisReport> {
        let id = trace.id();
        if self.core.model.traces.contains_key(&id) {
            return Err(GraphError::TraceAlreadyAttached(id));
        }
        trace.rebind_axes(
            x_axis.unwrap_or(trace.x_axis()),
            y_axis.unwrap_or(trace.y_axis()),
        );
        if trace.color().is_none() {
            trace.set_color(default_trace_color(
                self.core.model.plot_area.trace_count(),
            ));
        }

        let mut report = TraceAxisReport::new(id);
        for (axis, orientation) in [
            (trace.x_axis(), Orientation::Horizontal),
            (trace.y_axis(), Orientation::Vertical),
        ] {
            match self.attach_to_axis(id, axis, orientation) {
                Ok(()) => report.applied.push(axis),
                Err(err) => {
                    warn!(trace = %id, axis = %axis, error = %err, "skipping trace axis binding");
                    report.skipped.push((axis, err));
                }
            }
        }

        if report.applied.contains(&trace.y_axis()) {
            report.legend_changed = self.core.model.legends.attach(
                trace.y_axis(),
                id,
                trace.label(),
                self.core.presentation.show_legend,
            );
        }

        debug!(
            trace = %id,
            attached = report.applied.len(),
            skipped = report.skipped.len(),
            legend_created = report.legend_changed,
            "add trace"
        );
        self.core.model.plot_area.add_trace(id);
        self.core.model.traces.insert(id, trace);
        self.invalidate_layout();
        Ok(report)
    }

    /// Removes a trace from the surface, its axes and its legend block.
    ///
    /// Unknown trace ids are an error; axes that disappeared since the trace
    /// was added are recorded and skipped.
    pub fn remove_trace(&mut self, id: TraceId) -> GraphResult<(Trace, TraceAxisReport)> {
        let trace = self
            .core
            .model
            .traces
            .shift_remove(&id)
            .ok_or(GraphError::TraceNotFound(id))?;

        let mut report = TraceAxisReport::new(id);
        report.legend_changed = self.core.model.legends.detach(trace.y_axis(), id);
        for axis in [trace.x_axis(), trace.y_axis()] {
            match self.core.model.axis_traces.get_mut(&axis) {
                Some(traces) => {
                    traces.retain(|attached| *attached != id);
                    report.applied.push(axis);
                }
                None => {
                    warn!(trace = %id, axis = %axis, "trace axis already removed");
                    report.skipped.push((axis, GraphError::AxisNotRegistered(axis)));
                }
            }
        }

        self.core.model.plot_area.remove_trace(id);
        debug!(
            trace = %id,
            detached = report.applied.len(),
            legend_removed = report.legend_changed,
            "remove trace"
        );
        self.invalidate_layout();
        Ok((trace, report))
    }

    /// Host signal that a trace's samples changed; geometry is recomputed on
    /// the next layout pass.
    pub fn notify_trace_data_changed(&mut self, id: TraceId) -> GraphResult<()> {
        if !self.core.model.traces.contains_key(&id) {
            return Err(GraphError::TraceNotFound(id));
        }
        self.invalidate_layout();
        Ok(())
    }

    #[must_use]
    pub fn trace(&self, id: TraceId) -> Option<&Trace> {
        self.core.model.traces.get(&id)
    }

    pub fn traces(&self) -> impl Iterator<Item = &Trace> {
        self.core.model.traces.values()
    }

    /// Traces attached to `axis`, in attach order.
    #[must_use]
    pub fn traces_on_axis(&self, axis: AxisId) -> &[TraceId] {
        self.core.model.traces_for_axis(axis)
    }

    fn attach_to_axis(
        &mut self,
        trace: TraceId,
        axis: AxisId,
        orientation: Orientation,
    ) -> GraphResult<()> {
        let registered = self.require_axis(axis)?;
        if registered.orientation() != orientation {
            return Err(GraphError::OrientationMismatch {
                axis,
                expected: orientation,
            });
        }
        let traces = self.core.model.axis_traces.entry(axis).or_default();
        if !traces.contains(&trace) {
            traces.push(trace);
        }
        Ok(())
    }
}

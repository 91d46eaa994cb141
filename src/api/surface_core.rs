use indexmap::IndexMap;

use crate::core::{AxisCollection, AxisId, LegendCollection, PlotArea, Trace, TraceId};
use crate::history::CommandHistory;
use crate::layout::{SurfaceLayout, SurfaceLayoutEngine};
use crate::range::RangeCalculator;

/// Chart entities owned by one surface.
#[derive(Debug, Default)]
pub(super) struct SurfaceModel {
    pub(super) axes: AxisCollection,
    pub(super) traces: IndexMap<TraceId, Trace>,
    /// Attached traces per registered axis, attach order.
    pub(super) axis_traces: IndexMap<AxisId, Vec<TraceId>>,
    pub(super) legends: LegendCollection,
    pub(super) plot_area: PlotArea,
}

impl SurfaceModel {
    pub(super) fn traces_for_axis(&self, axis: AxisId) -> &[TraceId] {
        self.axis_traces
            .get(&axis)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(super) struct SurfacePresentation {
    pub(super) title: String,
    pub(super) show_title: bool,
    pub(super) show_legend: bool,
}

impl SurfacePresentation {
    pub(super) fn visible_title(&self) -> Option<&str> {
        (self.show_title && !self.title.is_empty()).then_some(self.title.as_str())
    }
}

#[derive(Debug, Default)]
pub(super) struct SurfaceRuntime {
    pub(super) needs_layout: bool,
    pub(super) last_layout: Option<SurfaceLayout>,
}

/// Internal state behind the public facade.
#[derive(Debug)]
pub(super) struct SurfaceCore {
    pub(super) model: SurfaceModel,
    pub(super) presentation: SurfacePresentation,
    pub(super) history: CommandHistory,
    pub(super) layout_engine: SurfaceLayoutEngine,
    pub(super) ranges: RangeCalculator,
    pub(super) runtime: SurfaceRuntime,
}

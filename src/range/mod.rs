//! Range computation for autoscale, stagger and manual zoom/pan.
//!
//! Every function here is pure: it plans new ranges from current axis state
//! and trace extents. Writing them back is left to history-wrapped surface
//! operations.

mod autoscale;
mod data_range;
mod stagger;
mod zoom;

pub use autoscale::autoscale_range;
pub use data_range::{TraceDataRange, TraceExtentTable, TraceExtents};
pub use stagger::{STAGGER_GAP_RATIO, StaggerTuning, stagger_range};
pub use zoom::{pan_range, zoom_range};

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{AxisCollection, AxisId, Orientation, Range, TraceId};

/// New range planned for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeUpdate {
    pub axis: AxisId,
    pub range: Range,
}

pub type RangePlan = SmallVec<[RangeUpdate; 4]>;

/// Plans autoscale and stagger updates over an axis collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeCalculator {
    stagger: StaggerTuning,
}

impl RangeCalculator {
    #[must_use]
    pub fn new(stagger: StaggerTuning) -> Self {
        Self { stagger }
    }

    #[must_use]
    pub fn stagger_tuning(&self) -> StaggerTuning {
        self.stagger
    }

    /// Autoscale of every visible axis, horizontal axes first.
    pub fn plan_autoscale<'t, S, F>(
        &self,
        axes: &AxisCollection,
        traces_of: F,
        source: &S,
    ) -> RangePlan
    where
        S: TraceDataRange + ?Sized,
        F: Fn(AxisId) -> &'t [TraceId],
    {
        let mut plan = RangePlan::new();
        for id in axes.ids_grouped() {
            let Some(axis) = axes.get(id) else {
                continue;
            };
            let extent = source.trace_data_range(axis, traces_of(id));
            match autoscale_range(axis, extent) {
                Some(range) => plan.push(RangeUpdate { axis: id, range }),
                None => trace!(axis = %id, "autoscale skipped axis"),
            }
        }
        plan
    }

    /// Stagger of vertical axes that do not autoscale themselves.
    pub fn plan_stagger<'t, S, F>(
        &self,
        axes: &AxisCollection,
        traces_of: F,
        source: &S,
    ) -> RangePlan
    where
        S: TraceDataRange + ?Sized,
        F: Fn(AxisId) -> &'t [TraceId],
    {
        let eligible: SmallVec<[AxisId; 4]> = axes
            .of_orientation(Orientation::Vertical)
            .filter(|axis| !axis.is_auto_scale())
            .map(|axis| axis.id())
            .collect();
        let count = eligible.len();

        let mut plan = RangePlan::new();
        for (index, id) in eligible.into_iter().enumerate() {
            let Some(axis) = axes.get(id) else {
                continue;
            };
            let Some(extent) = source.trace_data_range(axis, traces_of(id)) else {
                trace!(axis = %id, "stagger skipped axis without data range");
                continue;
            };
            match stagger_range(extent, axis.is_log_scale(), index, count, self.stagger) {
                Some(range) => plan.push(RangeUpdate { axis: id, range }),
                None => trace!(
                    axis = %id,
                    lower = extent.lower,
                    upper = extent.upper,
                    "stagger produced an unusable range"
                ),
            }
        }
        plan
    }
}

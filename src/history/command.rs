use std::fmt;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{AxisCollection, AxisId, Range};

/// Capability shared by every reversible operation on axis ranges.
pub trait RangeCommand: fmt::Debug {
    /// Display name, e.g. for "Undo Auto Scale" menu entries.
    fn label(&self) -> &str;

    /// Restores the post-operation state.
    fn redo(&self, axes: &mut AxisCollection);

    /// Restores the pre-operation state.
    fn undo(&self, axes: &mut AxisCollection);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRangeSnapshot {
    pub axis: AxisId,
    pub range: Range,
}

/// Exact ranges of a set of axes at one instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeSnapshot {
    entries: SmallVec<[AxisRangeSnapshot; 4]>,
}

impl RangeSnapshot {
    /// Unknown ids are left out of the snapshot.
    #[must_use]
    pub fn capture(axes: &AxisCollection, ids: &[AxisId]) -> Self {
        let entries = ids
            .iter()
            .filter_map(|id| {
                axes.get(*id).map(|axis| AxisRangeSnapshot {
                    axis: *id,
                    range: axis.range(),
                })
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[AxisRangeSnapshot] {
        &self.entries
    }

    #[must_use]
    pub fn range_of(&self, axis: AxisId) -> Option<Range> {
        self.entries
            .iter()
            .find(|entry| entry.axis == axis)
            .map(|entry| entry.range)
    }

    /// Writes every captured range back. Axes removed since the capture are
    /// skipped.
    pub fn restore(&self, axes: &mut AxisCollection) {
        for entry in &self.entries {
            match axes.get_mut(entry.axis) {
                Some(axis) => {
                    if axis.is_log_scale() && entry.range.lower() <= 0.0 {
                        debug!(
                            axis = %entry.axis,
                            lower = entry.range.lower(),
                            "restored range is not displayable on a log-scale axis"
                        );
                    }
                    axis.restore_range(entry.range);
                }
                None => trace!(axis = %entry.axis, "snapshot axis no longer registered"),
            }
        }
    }
}

/// Command whose pre-state has been captured but whose operation has not
/// finished yet.
#[derive(Debug)]
pub struct PendingZoom {
    label: String,
    axes: SmallVec<[AxisId; 4]>,
    before: RangeSnapshot,
}

impl PendingZoom {
    /// Captures the pre-state snapshot.
    #[must_use]
    pub fn begin(label: impl Into<String>, axes: &AxisCollection, ids: &[AxisId]) -> Self {
        Self {
            label: label.into(),
            axes: SmallVec::from_slice(ids),
            before: RangeSnapshot::capture(axes, ids),
        }
    }

    /// Captures the post-state snapshot of the same axes.
    #[must_use]
    pub fn finish(self, axes: &AxisCollection) -> ZoomCommand {
        let after = RangeSnapshot::capture(axes, &self.axes);
        ZoomCommand {
            label: self.label,
            before: self.before,
            after,
        }
    }
}

/// Range change over a fixed set of axes, undone and redone as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomCommand {
    label: String,
    before: RangeSnapshot,
    after: RangeSnapshot,
}

impl ZoomCommand {
    #[must_use]
    pub fn before(&self) -> &RangeSnapshot {
        &self.before
    }

    #[must_use]
    pub fn after(&self) -> &RangeSnapshot {
        &self.after
    }

    /// `true` when no captured range differs between the two snapshots.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.before.entries().len() == self.after.entries().len()
            && self
                .before
                .entries()
                .iter()
                .zip(self.after.entries())
                .all(|(before, after)| before.axis == after.axis && before.range.bit_eq(after.range))
    }
}

impl RangeCommand for ZoomCommand {
    fn label(&self) -> &str {
        &self.label
    }

    fn redo(&self, axes: &mut AxisCollection) {
        self.after.restore(axes);
    }

    fn undo(&self, axes: &mut AxisCollection) {
        self.before.restore(axes);
    }
}

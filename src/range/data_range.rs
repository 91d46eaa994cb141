use indexmap::IndexMap;

use crate::core::{Axis, DataExtent, Orientation, TraceId};

/// Data-extent query answered by whoever owns the trace samples.
pub trait TraceDataRange {
    /// Union of the extents of `traces` along `axis`, `None` when there is
    /// nothing to measure.
    fn trace_data_range(&self, axis: &Axis, traces: &[TraceId]) -> Option<DataExtent>;
}

impl<F> TraceDataRange for F
where
    F: Fn(&Axis, &[TraceId]) -> Option<DataExtent>,
{
    fn trace_data_range(&self, axis: &Axis, traces: &[TraceId]) -> Option<DataExtent> {
        self(axis, traces)
    }
}

/// Precomputed per-trace extents along both orientations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TraceExtents {
    pub x: Option<DataExtent>,
    pub y: Option<DataExtent>,
}

/// Host-maintained table of trace extents, unioned per axis on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceExtentTable {
    extents: IndexMap<TraceId, TraceExtents>,
}

impl TraceExtentTable {
    pub fn set(&mut self, trace: TraceId, extents: TraceExtents) {
        self.extents.insert(trace, extents);
    }

    pub fn remove(&mut self, trace: TraceId) -> Option<TraceExtents> {
        self.extents.shift_remove(&trace)
    }

    #[must_use]
    pub fn get(&self, trace: TraceId) -> Option<TraceExtents> {
        self.extents.get(&trace).copied()
    }
}

impl TraceDataRange for TraceExtentTable {
    fn trace_data_range(&self, axis: &Axis, traces: &[TraceId]) -> Option<DataExtent> {
        traces
            .iter()
            .filter_map(|trace| self.extents.get(trace))
            .filter_map(|extents| match axis.orientation() {
                Orientation::Horizontal => extents.x,
                Orientation::Vertical => extents.y,
            })
            .reduce(DataExtent::union)
    }
}

#[cfg(test)]
mod tests {
    use super::{TraceDataRange, TraceExtentTable, TraceExtents};
    use crate::core::{Axis, AxisId, DataExtent, TraceId};

    #[test]
    fn table_unions_extents_along_axis_orientation() {
        let mut table = TraceExtentTable::default();
        table.set(
            TraceId::new(0),
            TraceExtents {
                x: Some(DataExtent::new(0.0, 5.0).expect("x")),
                y: Some(DataExtent::new(-1.0, 1.0).expect("y")),
            },
        );
        table.set(
            TraceId::new(1),
            TraceExtents {
                x: Some(DataExtent::new(3.0, 9.0).expect("x")),
                y: None,
            },
        );
        let traces = [TraceId::new(0), TraceId::new(1), TraceId::new(7)];

        let x_axis = Axis::horizontal(AxisId::new(1), "X");
        let y_axis = Axis::vertical(AxisId::new(0), "Y");
        assert_eq!(
            table.trace_data_range(&x_axis, &traces),
            Some(DataExtent::new(0.0, 9.0).expect("union"))
        );
        assert_eq!(
            table.trace_data_range(&y_axis, &traces),
            Some(DataExtent::new(-1.0, 1.0).expect("single"))
        );
        assert_eq!(table.trace_data_range(&y_axis, &[]), None);
    }
}

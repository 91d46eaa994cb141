mod null_host;

pub use null_host::{NullHost, NullHostMetrics};

use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisId, LegendBlock, Rect, Size};

/// Entity whose final placement is reported to the host after layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutEntity {
    Title,
    Axis(AxisId),
    Legend(AxisId),
    PlotArea,
}

/// Preferred-size queries answered by the host's text/tick machinery.
///
/// `available` is the space offered at the time of the query; results may
/// exceed it (a long title or a wide legend block), layout handles that.
pub trait LayoutMeasure {
    fn title_size(&self, title: &str, available: Size) -> Size;

    fn legend_size(&self, block: &LegendBlock, available: Size) -> Size;

    /// Horizontal axes are asked for their height, vertical axes for their
    /// width; the other dimension normally echoes `available`.
    fn axis_size(&self, axis: &Axis, available: Size) -> Size;
}

/// Contract implemented by the embedding application.
pub trait SurfaceHost: LayoutMeasure {
    fn bounds_changed(&mut self, entity: LayoutEntity, rect: Rect);
}

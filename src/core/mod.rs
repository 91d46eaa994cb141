pub mod axis;
pub mod axis_collection;
pub mod geometry;
pub mod legend;
pub mod plot_area;
pub mod range;
pub mod trace;

pub use axis::{Axis, AxisId, AxisSide, Orientation};
pub use axis_collection::AxisCollection;
pub use geometry::{Rect, Size};
pub use legend::{LegendBlock, LegendCollection, LegendEntry};
pub use plot_area::PlotArea;
pub use range::{DataExtent, Range};
pub use trace::{DEFAULT_TRACE_COLORS, Rgb, Trace, TraceId, default_trace_color};

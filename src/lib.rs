//! xy-graph: box layout and range management for XY chart surfaces.
//!
//! A [`ChartSurface`] owns axes, traces, legend blocks and a plot area. It
//! partitions a bounding rectangle among them, computes autoscaled and
//! staggered axis ranges, and records every range change in an undoable
//! history. Drawing stays with the host through the [`host::SurfaceHost`]
//! trait.

pub mod api;
pub mod core;
pub mod error;
pub mod history;
pub mod host;
pub mod layout;
pub mod range;
pub mod telemetry;

pub use api::{ChartSurface, SurfaceConfig};
pub use error::{GraphError, GraphResult};

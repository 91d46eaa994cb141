//! Box-layout negotiation for the chart surface.
//!
//! Layout is a pure function of model state, measurements and the outer
//! bounds. The surface applies the resulting rectangles afterwards.

mod legend_packing;
mod surface_layout;

pub use legend_packing::{LegendRow, LegendRows, pack_legend_rows};
pub use surface_layout::{AxisPlacement, LayoutInput, SurfaceLayout, SurfaceLayoutEngine};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Fixed spacing used by the layout negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTuning {
    /// Gap below the title and between legend blocks/rows.
    pub gap_px: f64,
    /// Inset applied to horizontal axes on a side without a vertical axis.
    pub edge_inset_px: f64,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            gap_px: 2.0,
            edge_inset_px: 1.0,
        }
    }
}

impl LayoutTuning {
    pub fn validate(self) -> GraphResult<Self> {
        for (name, value) in [("gap_px", self.gap_px), ("edge_inset_px", self.edge_inset_px)] {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "layout tuning `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

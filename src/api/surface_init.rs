use tracing::debug;

use crate::core::{Axis, AxisId, PlotArea};
use crate::error::GraphResult;
use crate::history::CommandHistory;
use crate::host::SurfaceHost;
use crate::layout::SurfaceLayoutEngine;
use crate::range::RangeCalculator;

use super::surface_core::{SurfaceCore, SurfaceModel, SurfacePresentation, SurfaceRuntime};
use super::{ChartSurface, SurfaceConfig};

pub const DEFAULT_Y_AXIS_ID: AxisId = AxisId::new(0);
pub const DEFAULT_X_AXIS_ID: AxisId = AxisId::new(1);

impl<H: SurfaceHost> ChartSurface<H> {
    /// Creates a surface without any axis.
    pub fn new(host: H, config: SurfaceConfig) -> GraphResult<Self> {
        let config = config.validate()?;
        let mut plot_area = PlotArea::default();
        plot_area.set_visible(config.plot_area_visible);

        debug!(
            title = %config.title,
            history_limit = ?config.history_limit,
            "create chart surface"
        );
        Ok(Self {
            host,
            core: SurfaceCore {
                model: SurfaceModel {
                    plot_area,
                    ..SurfaceModel::default()
                },
                presentation: SurfacePresentation {
                    title: config.title.trim().to_owned(),
                    show_title: config.show_title,
                    show_legend: config.show_legend,
                },
                history: CommandHistory::with_limit(config.history_limit)?,
                layout_engine: SurfaceLayoutEngine::new(config.layout),
                ranges: RangeCalculator::new(config.stagger),
                runtime: SurfaceRuntime {
                    needs_layout: true,
                    last_layout: None,
                },
            },
        })
    }

    /// Creates a surface with a primary vertical axis ("Y-Axis",
    /// [`DEFAULT_Y_AXIS_ID`]) registered before a primary horizontal axis
    /// ("X-Axis", [`DEFAULT_X_AXIS_ID`]).
    pub fn with_default_axes(host: H, config: SurfaceConfig) -> GraphResult<Self> {
        let mut surface = Self::new(host, config)?;
        surface.add_axis(Axis::vertical(DEFAULT_Y_AXIS_ID, "Y-Axis"))?;
        surface.add_axis(Axis::horizontal(DEFAULT_X_AXIS_ID, "X-Axis"))?;
        Ok(surface)
    }
}

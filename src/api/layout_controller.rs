use tracing::debug;

use crate::core::Rect;
use crate::error::GraphResult;
use crate::host::{LayoutEntity, SurfaceHost};
use crate::layout::{LayoutInput, SurfaceLayout};

use super::ChartSurface;

impl<H: SurfaceHost> ChartSurface<H> {
    /// Partitions `bounds` among title, legends, axes and plot area, stores
    /// the rectangles on the model and reports each placement to the host.
    pub fn layout(&mut self, bounds: Rect) -> GraphResult<SurfaceLayout> {
        let model = &self.core.model;
        let input = LayoutInput {
            title: self.core.presentation.visible_title(),
            axes: &model.axes,
            legends: &model.legends,
            show_legend: self.core.presentation.show_legend,
            plot_area_visible: model.plot_area.is_visible(),
        };
        let layout = self.core.layout_engine.layout(bounds, input, &self.host)?;
        self.apply_layout(&layout);

        debug!(
            width = bounds.width,
            height = bounds.height,
            axes = layout.axes.len(),
            legends = layout.legends.len(),
            "surface layout applied"
        );
        self.core.runtime.needs_layout = false;
        self.core.runtime.last_layout = Some(layout.clone());
        Ok(layout)
    }

    /// `true` when a mutation since the last layout pass may move geometry.
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.core.runtime.needs_layout
    }

    #[must_use]
    pub fn last_layout(&self) -> Option<&SurfaceLayout> {
        self.core.runtime.last_layout.as_ref()
    }

    fn apply_layout(&mut self, layout: &SurfaceLayout) {
        if let Some(rect) = layout.title {
            self.host.bounds_changed(LayoutEntity::Title, rect);
        }
        for (axis, rect) in &layout.legends {
            if let Some(block) = self.core.model.legends.get_mut(*axis) {
                block.set_bounds(*rect);
            }
            self.host.bounds_changed(LayoutEntity::Legend(*axis), *rect);
        }
        for (id, placement) in &layout.axes {
            if let Some(axis) = self.core.model.axes.get_mut(*id) {
                axis.apply_layout(placement.rect, placement.tick_extent);
            }
            self.host.bounds_changed(LayoutEntity::Axis(*id), placement.rect);
        }
        if let Some(rect) = layout.plot {
            self.core.model.plot_area.set_bounds(rect);
            self.host.bounds_changed(LayoutEntity::PlotArea, rect);
        }
    }
}

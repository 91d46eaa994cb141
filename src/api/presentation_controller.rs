use crate::host::SurfaceHost;

use super::ChartSurface;

impl<H: SurfaceHost> ChartSurface<H> {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.core.presentation.title
    }

    /// Stores the trimmed title; an empty title takes no space.
    pub fn set_title(&mut self, title: &str) {
        self.core.presentation.title = title.trim().to_owned();
        self.invalidate_layout();
    }

    #[must_use]
    pub fn show_title(&self) -> bool {
        self.core.presentation.show_title
    }

    pub fn set_show_title(&mut self, show_title: bool) {
        self.core.presentation.show_title = show_title;
        self.invalidate_layout();
    }

    #[must_use]
    pub fn show_legend(&self) -> bool {
        self.core.presentation.show_legend
    }

    /// Shows or hides every legend block; later blocks inherit the flag.
    pub fn set_show_legend(&mut self, show_legend: bool) {
        self.core.presentation.show_legend = show_legend;
        self.core.model.legends.set_all_visible(show_legend);
        self.invalidate_layout();
    }

    #[must_use]
    pub fn legends(&self) -> &crate::core::LegendCollection {
        &self.core.model.legends
    }

    pub fn set_plot_area_visible(&mut self, visible: bool) {
        self.core.model.plot_area.set_visible(visible);
        self.invalidate_layout();
    }
}

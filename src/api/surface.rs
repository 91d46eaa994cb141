use crate::core::PlotArea;
use crate::host::SurfaceHost;

use super::surface_core::SurfaceCore;

/// Chart surface facade consumed by host applications.
///
/// `ChartSurface` owns axes, traces, legend blocks and the undo history, and
/// delegates measurement and placement notifications to its host.
pub struct ChartSurface<H: SurfaceHost> {
    pub(super) host: H,
    pub(super) core: SurfaceCore,
}

impl<H: SurfaceHost> ChartSurface<H> {
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn plot_area(&self) -> &PlotArea {
        &self.core.model.plot_area
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    pub(super) fn invalidate_layout(&mut self) {
        self.core.runtime.needs_layout = true;
    }
}

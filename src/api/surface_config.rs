use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::layout::LayoutTuning;
use crate::range::StaggerTuning;

/// Bootstrap configuration for [`ChartSurface`](super::ChartSurface).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub title: String,
    pub show_title: bool,
    pub show_legend: bool,
    pub plot_area_visible: bool,
    pub layout: LayoutTuning,
    pub stagger: StaggerTuning,
    /// Maximum number of undoable commands; `None` keeps everything.
    pub history_limit: Option<usize>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            show_title: true,
            show_legend: true,
            plot_area_visible: true,
            layout: LayoutTuning::default(),
            stagger: StaggerTuning::default(),
            history_limit: None,
        }
    }
}

impl SurfaceConfig {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_show_title(mut self, show_title: bool) -> Self {
        self.show_title = show_title;
        self
    }

    #[must_use]
    pub fn with_show_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    #[must_use]
    pub fn with_plot_area_visible(mut self, visible: bool) -> Self {
        self.plot_area_visible = visible;
        self
    }

    #[must_use]
    pub fn with_layout_tuning(mut self, layout: LayoutTuning) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_stagger_tuning(mut self, stagger: StaggerTuning) -> Self {
        self.stagger = stagger;
        self
    }

    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn validate(self) -> GraphResult<Self> {
        self.layout.validate()?;
        self.stagger.validate()?;
        if self.history_limit == Some(0) {
            return Err(GraphError::InvalidData(
                "history limit must be > 0 when set".to_owned(),
            ));
        }
        Ok(self)
    }
}
